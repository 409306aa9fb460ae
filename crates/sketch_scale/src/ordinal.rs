use std::borrow::Borrow;
use std::hash::Hash;

use rustc_hash::FxHashMap;

use crate::{Result, ScaleError};

/// Label `i` maps to `range[i % range.len()]`.
///
/// When a label repeats in the domain, its last occurrence wins.
#[derive(Clone, Debug)]
pub struct OrdinalScale<L, R> {
    lookup: FxHashMap<L, R>,
}

impl<L: Hash + Eq, R: Clone> OrdinalScale<L, R> {
    pub fn new<I>(labels: I, range: &[R]) -> Result<Self>
    where
        I: IntoIterator<Item = L>,
    {
        if range.is_empty() {
            return Err(ScaleError::EmptyRange);
        }
        let lookup = labels
            .into_iter()
            .enumerate()
            .map(|(i, label)| (label, range[i % range.len()].clone()))
            .collect();
        Ok(Self { lookup })
    }

    pub fn map<Q>(&self, label: &Q) -> Option<&R>
    where
        L: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.lookup.get(label)
    }

    pub fn len(&self) -> usize {
        self.lookup.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lookup.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_cycles_when_shorter_than_domain() {
        let s = OrdinalScale::new(["a", "b", "c", "d", "e"], &["red", "green"]).unwrap();
        assert_eq!(s.map("a"), Some(&"red"));
        assert_eq!(s.map("b"), Some(&"green"));
        assert_eq!(s.map("e"), Some(&"red"));
        assert_eq!(s.map("x"), None);
    }

    #[test]
    fn later_duplicate_overwrites() {
        let s = OrdinalScale::new(["a", "b", "a"], &[1, 2, 3]).unwrap();
        assert_eq!(s.map("a"), Some(&3));
        assert_eq!(s.len(), 2);
    }

    #[test]
    fn empty_range_is_rejected() {
        let range: [u8; 0] = [];
        assert_eq!(
            OrdinalScale::new(["a"], &range).unwrap_err(),
            ScaleError::EmptyRange
        );
    }
}
