use crate::base;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    derive_more::From,
    derive_more::Into,
    derive_more::Display,
    derive_more::FromStr,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct TransactionId(pub u32);

/// A single transaction owned by one customer. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Transaction {
    id: TransactionId,
    customer_id: base::CustomerId,
    date: base::Date,
    amount: base::Amount,
}

impl Transaction {
    pub fn new(
        id: TransactionId,
        customer_id: base::CustomerId,
        date: base::Date,
        amount: base::Amount,
    ) -> Self {
        Self {
            id,
            customer_id,
            date,
            amount,
        }
    }

    pub fn id(&self) -> TransactionId {
        self.id
    }

    pub fn customer_id(&self) -> base::CustomerId {
        self.customer_id
    }

    pub fn date(&self) -> base::Date {
        self.date
    }

    pub fn amount(&self) -> base::Amount {
        self.amount
    }
}
