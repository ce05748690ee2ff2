use crate::base;

/// The user-controlled inputs of the dashboard: the two filter strings and the
/// optional customer selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pub name_filter: String,
    pub amount_filter: String,
    pub selected: Option<base::CustomerId>,
}

/// Everything derived from a [`base::Dataset`] and a [`Query`]. Holds no
/// state of its own; discard and rebuild after any change to its inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Viewmodel {
    pub joined: base::Joinlist,
    pub filtered: base::Joinlist,
    pub points: Vec<base::ChartPoint>,
}

impl Query {
    /// Recomputes all derived state from scratch: join, then filter for the
    /// table, and independently aggregate the selected customer's
    /// transactions for the chart. No selection yields no points.
    pub fn evaluate(&self, ds: &base::Dataset) -> Viewmodel {
        let joined = base::Joinlist::join(ds.customers(), ds.transactions());
        let filtered = joined.filter_substr(&self.name_filter, &self.amount_filter);
        let points = match self.selected {
            Some(customer) => base::aggregate::points_per_day(ds.transactions(), customer),
            None => Vec::new(),
        };
        Viewmodel {
            joined,
            filtered,
            points,
        }
    }
}
