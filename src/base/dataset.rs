use crate::base;

/// The full entity state the dashboard derives everything from: customers and
/// transactions, each kept in their given order.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Dataset {
    customers: Vec<base::Customer>,
    transactions: Vec<base::Transaction>,
}

impl Dataset {
    pub fn new(customers: Vec<base::Customer>, transactions: Vec<base::Transaction>) -> Self {
        Self {
            customers,
            transactions,
        }
    }

    pub fn customers(&self) -> &[base::Customer] {
        &self.customers
    }

    pub fn transactions(&self) -> &[base::Transaction] {
        &self.transactions
    }

    /// The built-in entities seeded by `init`.
    pub fn sample() -> Self {
        let customer = |id: u32, name: &str| base::Customer::new(base::CustomerId(id), name.into());
        let txn = |id: u32, customer_id: u32, date: &str, amount: i64| {
            base::Transaction::new(
                base::TransactionId(id),
                base::CustomerId(customer_id),
                date.parse().expect("sample dates should be valid"),
                base::Amount(amount),
            )
        };
        Self {
            customers: vec![
                customer(1, "Ahmed Ali"),
                customer(2, "Aya Elsayed"),
                customer(3, "Mina Adel"),
                customer(4, "Sarah Reda"),
                customer(5, "Mohamed Sayed"),
            ],
            transactions: vec![
                txn(1, 1, "2022-01-01", 1000),
                txn(2, 1, "2022-01-02", 2000),
                txn(3, 2, "2022-01-01", 550),
                txn(4, 3, "2022-01-01", 500),
                txn(5, 2, "2022-01-02", 1300),
                txn(6, 4, "2022-01-01", 750),
                txn(7, 3, "2022-01-02", 1250),
                txn(8, 5, "2022-01-01", 2500),
                txn(9, 5, "2022-01-02", 875),
            ],
        }
    }
}

impl std::fmt::Display for Dataset {
    /// Writes a terminating newline.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = serde_json::to_string_pretty(self).map_err(|_| std::fmt::Error)?;
        writeln!(f, "{}", s)
    }
}

impl std::str::FromStr for Dataset {
    type Err = serde_json::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(s)
    }
}

impl TryFrom<&str> for Dataset {
    type Error = <Self as std::str::FromStr>::Err;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse::<Self>()
    }
}
