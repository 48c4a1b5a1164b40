use std::{borrow::Borrow, collections::HashMap, hash::Hash};

use serde::{Serialize, Serializer, ser::SerializeMap};

/// Category counts kept in first-encounter order.
///
/// Serializes as a map whose key order is the table order, so a table sorted
/// with [`FrequencyTable::sort_by_count_desc`] stays sorted in JSON output.
///
/// # Examples
///
/// ```
/// use hygiene_stats::frequency::FrequencyTable;
///
/// let mut table = FrequencyTable::from_values(["x", "y", "y", "z", "z"]);
/// table.sort_by_count_desc();
///
/// let order = table.iter().map(|(k, c)| (*k, c)).collect::<Vec<_>>();
/// assert_eq!(order, [("y", 2), ("z", 2), ("x", 1)]);
/// ```
#[derive(Debug, Clone)]
pub struct FrequencyTable<K> {
    entries: Vec<(K, u64)>,
    index: HashMap<K, usize>,
}

impl<K> Default for FrequencyTable<K> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<K> FrequencyTable<K>
where
    K: Eq + Hash + Clone,
{
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts every value of the iterator.
    #[must_use]
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = K>,
    {
        let mut table = Self::new();
        for value in values {
            table.add(value);
        }
        table
    }

    /// Increments the count of `key`, inserting it at the end if unseen.
    pub fn add(&mut self, key: K) {
        if let Some(&idx) = self.index.get(&key) {
            self.entries[idx].1 += 1;
        } else {
            self.index.insert(key.clone(), self.entries.len());
            self.entries.push((key, 1));
        }
    }

    /// Returns the count of `key` (zero if never seen).
    #[must_use]
    pub fn get<Q>(&self, key: &Q) -> u64
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.get(key).map_or(0, |&idx| self.entries[idx].1)
    }

    /// Sum of all counts.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    /// Number of distinct keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Orders entries by descending count.
    ///
    /// The sort is stable: keys with equal counts keep their encounter order.
    pub fn sort_by_count_desc(&mut self) {
        self.entries.sort_by(|(_, a), (_, b)| b.cmp(a));
        for (idx, (key, _)) in self.entries.iter().enumerate() {
            if let Some(slot) = self.index.get_mut(key) {
                *slot = idx;
            }
        }
    }

    /// Iterates over `(key, count)` pairs in table order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, u64)> {
        self.entries.iter().map(|(key, count)| (key, *count))
    }
}

impl<K> Serialize for FrequencyTable<K>
where
    K: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, count) in &self.entries {
            map.serialize_entry(key, count)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_is_zero() {
        let table = FrequencyTable::from_values(["a".to_owned()]);
        assert_eq!(table.get("b"), 0);
        assert_eq!(table.get("a"), 1);
    }

    #[test]
    fn test_sort_keeps_lookup_consistent() {
        let mut table = FrequencyTable::from_values([1, 2, 2, 3, 3, 3]);
        table.sort_by_count_desc();
        assert_eq!(table.iter().map(|(k, _)| *k).collect::<Vec<_>>(), [3, 2, 1]);
        table.add(1);
        assert_eq!(table.get(&1), 2);
        assert_eq!(table.total(), 7);
    }

    #[test]
    fn test_serialize_preserves_order() {
        let mut table = FrequencyTable::from_values(["low", "high", "high"]);
        table.sort_by_count_desc();
        let json = serde_json::to_string(&table).unwrap();
        assert_eq!(json, r#"{"high":2,"low":1}"#);
    }

    #[test]
    fn test_empty_table() {
        let table = FrequencyTable::<String>::new();
        assert!(table.is_empty());
        assert_eq!(table.len(), 0);
        assert_eq!(table.total(), 0);
    }
}
