use crate::base;

/// Keyed running totals. Unlike a bare map, remembers the order in which keys
/// first appeared, and `iter` yields entries in that order.
#[derive(Debug, Clone)]
pub struct Aggregate<K, V> {
    order: Vec<K>,
    m: std::collections::HashMap<K, V>,
    sum: V,
}

impl<K, V> Default for Aggregate<K, V>
where
    V: Default,
{
    fn default() -> Self {
        Self {
            order: Default::default(),
            m: Default::default(),
            sum: Default::default(),
        }
    }
}

impl<K, V> PartialEq for Aggregate<K, V>
where
    K: Eq + std::hash::Hash,
    V: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.order == other.order && self.m == other.m && self.sum == other.sum
    }
}

impl<K, V> Eq for Aggregate<K, V>
where
    K: Eq + std::hash::Hash,
    V: Eq,
{
}

impl<K, V> Aggregate<K, V> {
    pub fn sum(&self) -> V
    where
        V: Copy,
    {
        self.sum
    }

    pub fn is_empty(&self) -> bool {
        self.m.is_empty()
    }

    pub fn len(&self) -> usize {
        self.m.len()
    }

    pub fn add(&mut self, key: K, value: V)
    where
        K: Copy + Eq + std::hash::Hash,
        V: Copy + Default + std::ops::AddAssign,
    {
        if !self.m.contains_key(&key) {
            self.order.push(key);
        }
        *(self.m.entry(key).or_default()) += value;
        self.sum += value;
    }

    pub fn get(&self, key: K) -> Option<V>
    where
        K: Copy + Eq + std::hash::Hash,
        V: Copy,
    {
        self.m.get(&key).copied()
    }

    /// Yields entries in first-insertion order of their keys.
    pub fn iter(&self) -> impl Iterator<Item = (K, V)> + '_
    where
        K: Copy + Eq + std::hash::Hash,
        V: Copy,
    {
        self.order.iter().map(|k| {
            let v = self.m.get(k).expect("ordered keys should be in the map");
            (*k, *v)
        })
    }
}

impl<K, V> FromIterator<(K, V)> for Aggregate<K, V>
where
    K: Copy + Eq + std::hash::Hash,
    V: Copy + Default + std::ops::AddAssign,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut agg = Aggregate::<K, V>::default();
        for (k, v) in iter {
            agg.add(k, v);
        }
        agg
    }
}

/// One row of the chart: a date and the selected customer's total for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartPoint {
    pub date: base::Date,
    pub total_amount: base::Amount,
}

/// Sums the selected customer's transaction amounts per distinct date,
/// emitting one point per date. Dates appear in first-occurrence order among
/// the customer's transactions, not in chronological order.
pub fn points_per_day(
    transactions: &[base::Transaction],
    customer: base::CustomerId,
) -> Vec<ChartPoint> {
    let agg = transactions
        .iter()
        .filter(|t| t.customer_id() == customer)
        .map(|t| (t.date(), t.amount()))
        .collect::<Aggregate<_, _>>();
    agg.iter()
        .map(|(date, total_amount)| ChartPoint { date, total_amount })
        .collect()
}
