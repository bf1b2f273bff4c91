/// A zero-based index of a pair within a flat pair sequence.
///
/// The raw element index of the pair's key is `2 * index`, and of its value
/// `2 * index + 1`.
///
/// # Examples
///
/// ```
/// use flatpair::{FlatPair, PairIndex};
///
/// let mut pairs = FlatPair::new();
/// pairs.add("a", "10").add("b", "20");
///
/// assert_eq!(pairs[PairIndex(1)], "20");
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct PairIndex(pub usize);
