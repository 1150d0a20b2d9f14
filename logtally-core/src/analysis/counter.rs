use ahash::AHashMap;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Occurrence counts keyed by string, remembering first-seen order.
///
/// A key is only present once it has been counted at least once, so every
/// stored count is >= 1.
#[derive(Debug, Clone, Default)]
pub struct Counter {
    index: AHashMap<String, usize>,
    entries: Vec<(String, u64)>,
}

impl Counter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, key: &str) {
        self.add(key, 1);
    }

    pub(crate) fn add(&mut self, key: &str, count: u64) {
        if count == 0 {
            return;
        }

        match self.index.get(key) {
            Some(&i) => self.entries[i].1 += count,
            None => {
                self.index.insert(key.to_string(), self.entries.len());
                self.entries.push((key.to_string(), count));
            }
        }
    }

    /// Add every count of `other` into `self`. Keys new to `self` are appended
    /// in `other`'s order.
    pub fn merge(&mut self, other: &Counter) {
        for (key, count) in &other.entries {
            self.add(key, *count);
        }
    }

    pub fn get(&self, key: &str) -> Option<u64> {
        self.index.get(key).map(|&i| self.entries[i].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total(&self) -> u64 {
        self.entries.iter().map(|(_, c)| *c).sum()
    }

    /// Entries in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries.iter().map(|(k, c)| (k.as_str(), *c))
    }
}

/// Equality ignores insertion order.
impl PartialEq for Counter {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|(k, c)| other.get(k) == Some(c))
    }
}

impl Eq for Counter {}

impl Serialize for Counter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, count) in &self.entries {
            map.serialize_entry(key, count)?;
        }
        map.end()
    }
}

impl<'a> FromIterator<&'a str> for Counter {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut counter = Counter::new();
        for key in iter {
            counter.increment(key);
        }
        counter
    }
}
