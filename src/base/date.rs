const FMT: &[time::format_description::BorrowedFormatItem<'static>] =
    time::macros::format_description!("[year]-[month]-[day]");

/// A calendar date, parsed from and displayed as `yyyy-mm-dd`. Two
/// transactions fall on the same chart point exactly when their dates compare
/// equal.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct Date(time::Date);

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = self.0.format(FMT).map_err(|_| std::fmt::Error)?;
        f.write_str(&s)
    }
}

impl From<Date> for String {
    fn from(dt: Date) -> Self {
        dt.to_string()
    }
}

#[derive(Debug, Clone, thiserror::Error)]
#[error(transparent)]
pub struct ParseError(#[from] time::error::Parse);

impl std::str::FromStr for Date {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        time::Date::parse(s, FMT).map(Self).map_err(ParseError)
    }
}

impl TryFrom<&str> for Date {
    type Error = <Self as std::str::FromStr>::Err;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse::<Self>()
    }
}

impl TryFrom<String> for Date {
    type Error = <Self as std::str::FromStr>::Err;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse::<Self>()
    }
}
