use crate::base::util;

/// Integral transaction amount. Displays as a plain decimal integer, with no
/// separators or decimal places, so that substring filters see the same text
/// a user would type.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    derive_more::From,
    derive_more::Into,
    derive_more::Neg,
    derive_more::Sum,
    derive_more::Add,
    derive_more::AddAssign,
    derive_more::Display,
    derive_more::FromStr,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct Amount(pub i64);

impl Amount {
    pub const fn abs(self) -> Self {
        Self(self.0.abs())
    }

    /// Returns `amount.to_string().len()` without actually building a string.
    pub fn charlen(self) -> usize {
        util::count_digits(self.abs().0 as u64) + (self.0 < 0) as usize
    }
}
