use core::ops::{Index, IndexMut};

use super::FlatPair;
use crate::PairIndex;

/// Indexes the value of a pair by its position.
///
/// # Panics
///
/// Panics if there is no pair at `index`. Use [`FlatPair::at`] for a
/// non-panicking lookup.
///
/// # Examples
///
/// ```
/// use flatpair::{FlatPair, PairIndex};
///
/// let pairs = FlatPair::from([("a", "1"), ("b", "2")]);
/// assert_eq!(pairs[PairIndex(0)], "1");
/// ```
impl<T> Index<PairIndex> for FlatPair<T> {
    type Output = T;

    fn index(&self, index: PairIndex) -> &Self::Output {
        self.at(index.0).map(|(_, v)| v).expect("pair index out of bounds")
    }
}

/// Mutably indexes the value of a pair by its position.
///
/// # Panics
///
/// Panics if there is no pair at `index`.
///
/// # Examples
///
/// ```
/// use flatpair::{FlatPair, PairIndex};
///
/// let mut pairs = FlatPair::from([(1, 10), (2, 20)]);
/// pairs[PairIndex(1)] = 25;
///
/// assert_eq!(pairs.lookup(&2), Some(&25));
/// ```
impl<T> IndexMut<PairIndex> for FlatPair<T> {
    fn index_mut(&mut self, index: PairIndex) -> &mut Self::Output {
        self.at_mut(index.0).map(|(_, v)| v).expect("pair index out of bounds")
    }
}
