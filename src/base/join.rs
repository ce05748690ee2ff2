use crate::base;

/// One row of the joined relation: a transaction paired with its owning
/// customer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinedRecord {
    customer_id: base::CustomerId,
    customer_name: String,
    transaction_id: base::TransactionId,
    date: base::Date,
    amount: base::Amount,
}

impl JoinedRecord {
    pub fn new(customer: &base::Customer, transaction: &base::Transaction) -> Self {
        Self {
            customer_id: customer.id(),
            customer_name: customer.name().to_string(),
            transaction_id: transaction.id(),
            date: transaction.date(),
            amount: transaction.amount(),
        }
    }

    pub fn customer_id(&self) -> base::CustomerId {
        self.customer_id
    }

    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    pub fn transaction_id(&self) -> base::TransactionId {
        self.transaction_id
    }

    pub fn date(&self) -> base::Date {
        self.date
    }

    pub fn amount(&self) -> base::Amount {
        self.amount
    }
}

/// The joined relation. Rows are ordered by customer in their given order,
/// then by transaction in their given order. Fully derived, rebuilt from the
/// raw entities on every evaluation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Joinlist(Vec<JoinedRecord>);

impl Joinlist {
    /// Pairs each customer with the transactions whose `customer_id` matches.
    /// Customers without transactions contribute no rows; if either input is
    /// empty, the result is empty.
    pub fn join(customers: &[base::Customer], transactions: &[base::Transaction]) -> Self {
        customers
            .iter()
            .flat_map(|c| {
                transactions
                    .iter()
                    .filter(|t| t.customer_id() == c.id())
                    .map(|t| JoinedRecord::new(c, t))
            })
            .collect()
    }

    /// Returns the rows whose customer name contains `name_filter` as a
    /// case-insensitive substring AND whose amount's decimal string contains
    /// `amount_filter` as a literal substring. Empty filters match everything.
    ///
    /// Matching is textual, never numeric: an `amount_filter` of "50" keeps
    /// amounts 500 and 2500 but not 1000.
    pub fn filter_substr(&self, name_filter: &str, amount_filter: &str) -> Self {
        let needle = name_filter.to_lowercase();
        self.iter()
            .filter(|r| {
                r.customer_name().to_lowercase().contains(&needle)
                    && r.amount().to_string().contains(amount_filter)
            })
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &JoinedRecord> {
        self.0.iter()
    }
}

impl IntoIterator for Joinlist {
    type Item = JoinedRecord;
    type IntoIter = std::vec::IntoIter<JoinedRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl FromIterator<JoinedRecord> for Joinlist {
    fn from_iter<T: IntoIterator<Item = JoinedRecord>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> FromIterator<&'a JoinedRecord> for Joinlist {
    fn from_iter<T: IntoIterator<Item = &'a JoinedRecord>>(iter: T) -> Self {
        iter.into_iter().cloned().collect()
    }
}
