use std::borrow::Cow;

/// Anything that can be stored in a [`Registry`] under a stable string key.
pub trait Keyed {
    fn key(&self) -> &str;
}

/// Read-only, identifier-keyed collection that keeps its declared order.
///
/// Lookups return the first entry with a matching key. Iteration order is the
/// authoring order and is what every list view displays, so nothing in here
/// ever sorts.
#[derive(Debug, Clone)]
pub struct Registry<T: Clone + 'static> {
    entries: Cow<'static, [T]>,
}

impl<T: Keyed + Clone + 'static> Registry<T> {
    pub const fn from_static(entries: &'static [T]) -> Self {
        Self {
            entries: Cow::Borrowed(entries),
        }
    }

    pub fn new(entries: Vec<T>) -> Self {
        Self {
            entries: Cow::Owned(entries),
        }
    }

    pub fn get(&self, key: &str) -> Option<&T> {
        self.entries.iter().find(|entry| entry.key() == key)
    }

    #[cfg(test)]
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(Keyed::key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Entry {
        id: &'static str,
        rank: u32,
    }

    impl Keyed for Entry {
        fn key(&self) -> &str {
            self.id
        }
    }

    static FIXED: Registry<Entry> = Registry::from_static(&[
        Entry { id: "c", rank: 1 },
        Entry { id: "a", rank: 2 },
        Entry { id: "b", rank: 3 },
    ]);

    #[test]
    fn test_iteration_keeps_declared_order() {
        let ids: Vec<&str> = FIXED.ids().collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
        assert_eq!(FIXED.len(), 3);
        assert!(!FIXED.is_empty());
    }

    #[test]
    fn test_lookup_returns_optional() {
        assert_eq!(FIXED.get("a").map(|e| e.rank), Some(2));
        assert!(FIXED.get("missing").is_none());
        assert!(FIXED.get("").is_none());
        assert_eq!(FIXED.get("b").map(|e| e.rank), Some(3));
    }

    #[test]
    fn test_first_match_wins_on_duplicate_keys() {
        let registry = Registry::new(vec![
            Entry { id: "dup", rank: 1 },
            Entry { id: "dup", rank: 2 },
        ]);
        assert_eq!(registry.get("dup").map(|e| e.rank), Some(1));
    }

    #[test]
    fn test_empty_registry() {
        let registry: Registry<Entry> = Registry::new(Vec::new());
        assert!(registry.is_empty());
        assert_eq!(registry.iter().count(), 0);
        assert!(registry.get("a").is_none());
    }
}
