use std::collections::btree_map::{self, BTreeMap};

/// Occurrence counts for the distinct symbols of an input.
///
/// Entries are kept in ascending symbol order and every stored count is at
/// least 1. Iteration order is what fixes leaf insertion order in the tree
/// builder, so two tables with the same counts always build the same tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrequencyTable<S> {
    counts: BTreeMap<S, u64>,
}

impl<S: Ord> FrequencyTable<S> {
    pub fn new() -> Self {
        Self { counts: BTreeMap::new() }
    }

    /// Count one occurrence of `symbol`
    pub fn add(&mut self, symbol: S) {
        *self.counts.entry(symbol).or_insert(0) += 1;
    }

    /// Add `count` occurrences of `symbol` (zero counts are ignored)
    pub fn insert(&mut self, symbol: S, count: u64) {
        if count > 0 {
            *self.counts.entry(symbol).or_insert(0) += count;
        }
    }

    /// Fold another table's counts into this one
    pub fn merge(&mut self, other: FrequencyTable<S>) {
        for (symbol, count) in other.counts {
            self.insert(symbol, count);
        }
    }

    /// Count for `symbol`, or 0 if it never occurred
    pub fn get(&self, symbol: &S) -> u64 {
        self.counts.get(symbol).copied().unwrap_or(0)
    }

    /// Number of distinct symbols
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Total number of symbols counted
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Entries in ascending symbol order
    pub fn iter(&self) -> btree_map::Iter<'_, S, u64> {
        self.counts.iter()
    }
}

impl FrequencyTable<u8> {
    /// Count bytes through a flat 256-entry array before building the map
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut counts = [0u64; 256];
        for &byte in bytes {
            counts[byte as usize] += 1;
        }

        let mut table = Self::new();
        for (byte, &count) in counts.iter().enumerate() {
            table.insert(byte as u8, count);
        }
        table
    }
}

impl<S: Ord> Default for FrequencyTable<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Ord> FromIterator<S> for FrequencyTable<S> {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut table = Self::new();
        for symbol in iter {
            table.add(symbol);
        }
        table
    }
}

impl<'a, S> IntoIterator for &'a FrequencyTable<S> {
    type Item = (&'a S, &'a u64);
    type IntoIter = btree_map::Iter<'a, S, u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.counts.iter()
    }
}

/// Map each distinct symbol of `symbols` to its occurrence count.
///
/// An empty sequence yields an empty table; this never fails.
pub fn count_frequencies<S, I>(symbols: I) -> FrequencyTable<S>
where
    S: Ord,
    I: IntoIterator<Item = S>,
{
    symbols.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_frequencies_chars() {
        let table = count_frequencies("aaabbc".chars());
        assert_eq!(table.len(), 3);
        assert_eq!(table.get(&'a'), 3);
        assert_eq!(table.get(&'b'), 2);
        assert_eq!(table.get(&'c'), 1);
        assert_eq!(table.get(&'z'), 0);
        assert_eq!(table.total(), 6);
    }

    #[test]
    fn test_count_frequencies_empty() {
        let table = count_frequencies(std::iter::empty::<u8>());
        assert!(table.is_empty());
        assert_eq!(table.total(), 0);
    }

    #[test]
    fn test_iteration_is_sorted_by_symbol() {
        let table = count_frequencies(b"cabbca".iter().copied());
        let symbols: Vec<u8> = table.iter().map(|(&s, _)| s).collect();
        assert_eq!(symbols, vec![b'a', b'b', b'c']);
    }

    #[test]
    fn test_from_bytes_matches_generic_count() {
        let data = b"the quick brown fox jumps over the lazy dog";
        assert_eq!(FrequencyTable::from_bytes(data), count_frequencies(data.iter().copied()));
    }

    #[test]
    fn test_from_bytes_full_alphabet() {
        let data: Vec<u8> = (0..=255u8).chain(0..=255u8).collect();
        let table = FrequencyTable::from_bytes(&data);
        assert_eq!(table.len(), 256);
        assert!(table.iter().all(|(_, &c)| c == 2));
    }

    #[test]
    fn test_insert_ignores_zero() {
        let mut table = FrequencyTable::new();
        table.insert('x', 0);
        assert!(table.is_empty());
        table.insert('x', 5);
        table.insert('x', 2);
        assert_eq!(table.get(&'x'), 7);
    }

    #[test]
    fn test_merge() {
        let mut left = count_frequencies("aab".chars());
        let right = count_frequencies("bcc".chars());
        left.merge(right);
        assert_eq!(left, count_frequencies("aabbcc".chars()));
    }
}
