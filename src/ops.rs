//! Stateless operations over a caller-owned flat pair sequence.
//!
//! Every function here takes the backing sequence by reference and works on it
//! in place: read-only operations accept any `&[T]`, mutating ones take
//! `&mut Vec<T>`. Keys are the elements at even indices and values the elements
//! at odd indices.
//!
//! Scans only ever visit whole pairs. If a sequence has been left with an odd
//! length by outside code, its trailing element is never matched or yielded;
//! [`size`] is the operation that reports the broken invariant.
//!
//! # Examples
//!
//! ```
//! use flatpair::ops;
//!
//! let mut items = Vec::new();
//! ops::add(&mut items, "x", "X");
//! ops::add(&mut items, "y", "Y");
//! ops::add(&mut items, "x", "ignored");
//!
//! assert_eq!(items, ["x", "X", "y", "Y"]);
//! assert_eq!(ops::size(&items), Ok(2));
//! assert_eq!(ops::lookup(&items, "y"), Some(&"Y"));
//! assert_eq!(ops::lookup_by_value(&items, "X"), Some(&"x"));
//! ```

use alloc::vec::Vec;
use core::borrow::Borrow;
use core::fmt;
use core::iter::FusedIterator;
use core::slice::ChunksExact;

use crate::{Error, Result};

mod operator;

pub use operator::FlatPairOperator;

/// Returns the pair index of the first pair whose key equals `key`.
fn key_position<T, Q>(seq: &[T], key: &Q) -> Option<usize>
where
    T: Borrow<Q>,
    Q: ?Sized + PartialEq,
{
    seq.chunks_exact(2).position(|pair| pair[0].borrow() == key)
}

/// Returns the pair index of the first pair whose value equals `value`.
fn value_position<T, Q>(seq: &[T], value: &Q) -> Option<usize>
where
    T: Borrow<Q>,
    Q: ?Sized + PartialEq,
{
    seq.chunks_exact(2).position(|pair| pair[1].borrow() == value)
}

/// Removes the two elements of the pair at `pair_index`, shifting later pairs left.
fn drain_pair<T>(seq: &mut Vec<T>, pair_index: usize) -> Option<(T, T)> {
    let start = pair_index * 2;
    let mut drained = seq.drain(start..start + 2);
    let key = drained.next()?;
    let value = drained.next()?;
    log::trace!("removed pair {pair_index} from flat pair sequence");
    Some((key, value))
}

/// Appends `key` and `value` unless a pair with an equal key already exists.
///
/// The first pair for a key wins: an existing value is never overwritten.
///
/// # Examples
///
/// ```
/// use flatpair::ops;
///
/// let mut items = vec![1, 10];
/// ops::add(&mut items, 2, 20);
/// ops::add(&mut items, 1, 99);
/// assert_eq!(items, [1, 10, 2, 20]);
/// ```
///
/// # Complexity
///
/// O(n)
pub fn add<T: PartialEq>(seq: &mut Vec<T>, key: T, value: T) {
    if let Some(pair_index) = key_position(seq, &key) {
        log::trace!("key already present at pair {pair_index}, add skipped");
        return;
    }
    seq.reserve(2);
    seq.push(key);
    seq.push(value);
}

/// Returns the number of pairs in `seq`.
///
/// # Errors
///
/// Returns [`Error::Structural`] if `seq` has an odd number of elements.
///
/// # Examples
///
/// ```
/// use flatpair::{Error, ops};
///
/// assert_eq!(ops::size(&["k", "v", "k2", "v2"]), Ok(2));
/// assert_eq!(ops::size(&["k", "v", "k2"]), Err(Error::Structural { len: 3 }));
/// ```
///
/// # Complexity
///
/// O(1)
pub fn size<T>(seq: &[T]) -> Result<usize> {
    let len = seq.len();
    if len % 2 != 0 {
        log::debug!("flat pair sequence has odd length {len}");
        return Err(Error::Structural { len });
    }
    Ok(len / 2)
}

/// Returns the value of the first pair whose key equals `key`.
///
/// # Examples
///
/// ```
/// use flatpair::ops;
///
/// let items = ["a", "1", "b", "2"];
/// assert_eq!(ops::lookup(&items, "b"), Some(&"2"));
/// assert_eq!(ops::lookup(&items, "1"), None);
/// ```
///
/// # Complexity
///
/// O(n)
pub fn lookup<'a, T, Q>(seq: &'a [T], key: &Q) -> Option<&'a T>
where
    T: Borrow<Q>,
    Q: ?Sized + PartialEq,
{
    seq.chunks_exact(2).find(|pair| pair[0].borrow() == key).map(|pair| &pair[1])
}

/// Returns a mutable reference to the value of the first pair whose key equals `key`.
///
/// # Examples
///
/// ```
/// use flatpair::ops;
///
/// let mut items = vec![1, 10, 2, 20];
/// if let Some(value) = ops::lookup_mut(&mut items, &2) {
///     *value += 1;
/// }
/// assert_eq!(items, [1, 10, 2, 21]);
/// ```
///
/// # Complexity
///
/// O(n)
pub fn lookup_mut<'a, T, Q>(seq: &'a mut [T], key: &Q) -> Option<&'a mut T>
where
    T: Borrow<Q>,
    Q: ?Sized + PartialEq,
{
    seq.chunks_exact_mut(2).find(|pair| pair[0].borrow() == key).map(|pair| &mut pair[1])
}

/// Returns the key of the first pair whose value equals `value`.
///
/// # Examples
///
/// ```
/// use flatpair::ops;
///
/// let items = ["a", "same", "b", "same"];
/// assert_eq!(ops::lookup_by_value(&items, "same"), Some(&"a"));
/// assert_eq!(ops::lookup_by_value(&items, "a"), None);
/// ```
///
/// # Complexity
///
/// O(n)
pub fn lookup_by_value<'a, T, Q>(seq: &'a [T], value: &Q) -> Option<&'a T>
where
    T: Borrow<Q>,
    Q: ?Sized + PartialEq,
{
    seq.chunks_exact(2).find(|pair| pair[1].borrow() == value).map(|pair| &pair[0])
}

/// Returns `true` if a pair with a key equal to `key` exists.
///
/// # Examples
///
/// ```
/// use flatpair::ops;
///
/// let items = ["a", "1"];
/// assert!(ops::has(&items, "a"));
/// assert!(!ops::has(&items, "1"));
/// ```
///
/// # Complexity
///
/// O(n)
pub fn has<T, Q>(seq: &[T], key: &Q) -> bool
where
    T: Borrow<Q>,
    Q: ?Sized + PartialEq,
{
    key_position(seq, key).is_some()
}

/// Returns `true` if a pair with a value equal to `value` exists.
///
/// # Examples
///
/// ```
/// use flatpair::ops;
///
/// let items = ["a", "1"];
/// assert!(ops::has_by_value(&items, "1"));
/// assert!(!ops::has_by_value(&items, "a"));
/// ```
///
/// # Complexity
///
/// O(n)
pub fn has_by_value<T, Q>(seq: &[T], value: &Q) -> bool
where
    T: Borrow<Q>,
    Q: ?Sized + PartialEq,
{
    value_position(seq, value).is_some()
}

/// Removes the first pair whose key equals `key`, returning `true` if one was removed.
///
/// Later pairs shift left by one pair, keeping their relative order.
///
/// # Examples
///
/// ```
/// use flatpair::ops;
///
/// let mut items = vec!["a", "1", "b", "2", "c", "3"];
/// assert!(ops::remove(&mut items, "b"));
/// assert!(!ops::remove(&mut items, "b"));
/// assert_eq!(items, ["a", "1", "c", "3"]);
/// ```
///
/// # Complexity
///
/// O(n)
pub fn remove<T, Q>(seq: &mut Vec<T>, key: &Q) -> bool
where
    T: Borrow<Q>,
    Q: ?Sized + PartialEq,
{
    remove_entry(seq, key).is_some()
}

/// Removes the first pair whose key equals `key` and returns it.
///
/// # Examples
///
/// ```
/// use flatpair::ops;
///
/// let mut items = vec![1, 10, 2, 20];
/// assert_eq!(ops::remove_entry(&mut items, &1), Some((1, 10)));
/// assert_eq!(ops::remove_entry(&mut items, &1), None);
/// assert_eq!(items, [2, 20]);
/// ```
///
/// # Complexity
///
/// O(n)
pub fn remove_entry<T, Q>(seq: &mut Vec<T>, key: &Q) -> Option<(T, T)>
where
    T: Borrow<Q>,
    Q: ?Sized + PartialEq,
{
    let pair_index = key_position(seq, key)?;
    drain_pair(seq, pair_index)
}

/// Removes the first pair whose value equals `value`, together with its key.
///
/// Returns `true` if a pair was removed.
///
/// # Examples
///
/// ```
/// use flatpair::ops;
///
/// let mut items = vec!["x", "X", "y", "Y", "z", "Z"];
/// assert!(ops::remove_by_value(&mut items, "Y"));
/// assert_eq!(items, ["x", "X", "z", "Z"]);
/// ```
///
/// # Complexity
///
/// O(n)
pub fn remove_by_value<T, Q>(seq: &mut Vec<T>, value: &Q) -> bool
where
    T: Borrow<Q>,
    Q: ?Sized + PartialEq,
{
    value_position(seq, value).and_then(|pair_index| drain_pair(seq, pair_index)).is_some()
}

/// Calls `f(value, key, pair_index, seq)` for every pair, in ascending pair order.
///
/// Any extra state the callback needs is captured by the closure. `seq` stays
/// borrowed for the whole traversal, so it cannot be mutated from inside `f`.
///
/// # Examples
///
/// ```
/// use flatpair::ops;
///
/// let items = ["a", "1", "b", "2"];
/// let mut seen = Vec::new();
/// ops::for_each(&items, |value, key, index, all| {
///     assert_eq!(all.len(), 4);
///     seen.push((index, *key, *value));
/// });
/// assert_eq!(seen, [(0, "a", "1"), (1, "b", "2")]);
/// ```
///
/// # Complexity
///
/// O(n)
pub fn for_each<T, F>(seq: &[T], mut f: F)
where
    F: FnMut(&T, &T, usize, &[T]),
{
    for (pair_index, pair) in seq.chunks_exact(2).enumerate() {
        f(&pair[1], &pair[0], pair_index, seq);
    }
}

/// Returns the key and value of the pair at `pair_index`, or `None` if there is
/// no such pair.
///
/// # Examples
///
/// ```
/// use flatpair::ops;
///
/// let items = ["a", "A", "b", "B"];
/// assert_eq!(ops::at(&items, 1), Some((&"b", &"B")));
/// assert_eq!(ops::at(&items, 2), None);
/// ```
///
/// # Complexity
///
/// O(1)
pub fn at<T>(seq: &[T], pair_index: usize) -> Option<(&T, &T)> {
    seq.chunks_exact(2).nth(pair_index).map(|pair| (&pair[0], &pair[1]))
}

/// Returns the key and a mutable reference to the value of the pair at
/// `pair_index`.
///
/// The key is returned as a shared reference: changing it could create a
/// duplicate key.
///
/// # Examples
///
/// ```
/// use flatpair::ops;
///
/// let mut items = vec![1, 10, 2, 20];
/// if let Some((key, value)) = ops::at_mut(&mut items, 0) {
///     *value += *key;
/// }
/// assert_eq!(items, [1, 11, 2, 20]);
/// ```
///
/// # Complexity
///
/// O(1)
pub fn at_mut<T>(seq: &mut [T], pair_index: usize) -> Option<(&T, &mut T)> {
    let pair = seq.chunks_exact_mut(2).nth(pair_index)?;
    let (key, value) = pair.split_at_mut(1);
    Some((&key[0], &mut value[0]))
}

/// Removes every pair, keeping the sequence's allocation.
///
/// # Examples
///
/// ```
/// use flatpair::ops;
///
/// let mut items = vec![1, 10, 2, 20];
/// ops::clear(&mut items);
/// assert!(items.is_empty());
/// assert!(items.capacity() >= 4);
/// ```
///
/// # Complexity
///
/// O(n) for types with drop glue, O(1) otherwise.
pub fn clear<T>(seq: &mut Vec<T>) {
    log::trace!("clearing flat pair sequence of {} elements", seq.len());
    seq.clear();
}

/// Gets an iterator over the keys of `seq`, in pair order.
///
/// # Examples
///
/// ```
/// use flatpair::ops;
///
/// let items = ["k1", "v1", "k2", "v2"];
/// assert_eq!(ops::keys(&items).collect::<Vec<_>>(), [&"k1", &"k2"]);
/// ```
pub fn keys<T>(seq: &[T]) -> Keys<'_, T> {
    Keys {
        inner: entries(seq),
    }
}

/// Gets an iterator over the values of `seq`, in pair order.
///
/// # Examples
///
/// ```
/// use flatpair::ops;
///
/// let items = ["k1", "v1", "k2", "v2"];
/// assert_eq!(ops::values(&items).collect::<Vec<_>>(), [&"v1", &"v2"]);
/// ```
pub fn values<T>(seq: &[T]) -> Values<'_, T> {
    Values {
        inner: entries(seq),
    }
}

/// Gets an iterator over the `(key, value)` pairs of `seq`, in pair order.
///
/// # Examples
///
/// ```
/// use flatpair::ops;
///
/// let items = ["k1", "v1", "k2", "v2"];
/// let pairs: Vec<_> = ops::entries(&items).collect();
/// assert_eq!(pairs, [(&"k1", &"v1"), (&"k2", &"v2")]);
/// ```
pub fn entries<T>(seq: &[T]) -> Entries<'_, T> {
    Entries {
        inner: seq.chunks_exact(2),
    }
}

/// An iterator over the pairs of a flat pair sequence.
///
/// This `struct` is created by [`entries`] and by [`FlatPair::entries`]. See
/// their documentation for more.
///
/// [`FlatPair::entries`]: crate::FlatPair::entries
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Entries<'a, T> {
    inner: ChunksExact<'a, T>,
}

/// An iterator over the keys of a flat pair sequence.
///
/// This `struct` is created by [`keys`] and by [`FlatPair::keys`].
///
/// [`FlatPair::keys`]: crate::FlatPair::keys
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Keys<'a, T> {
    inner: Entries<'a, T>,
}

/// An iterator over the values of a flat pair sequence.
///
/// This `struct` is created by [`values`] and by [`FlatPair::values`].
///
/// [`FlatPair::values`]: crate::FlatPair::values
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Values<'a, T> {
    inner: Entries<'a, T>,
}

impl<'a, T> Iterator for Entries<'a, T> {
    type Item = (&'a T, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|pair| (&pair[0], &pair[1]))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        self.inner.nth(n).map(|pair| (&pair[0], &pair[1]))
    }
}

impl<T> DoubleEndedIterator for Entries<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|pair| (&pair[0], &pair[1]))
    }
}

impl<T> ExactSizeIterator for Entries<'_, T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for Entries<'_, T> {}

impl<T> Clone for Entries<'_, T> {
    fn clone(&self) -> Self {
        Entries {
            inner: self.inner.clone(),
        }
    }
}

impl<T> fmt::Debug for Entries<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entries").field("remaining", &self.len()).finish()
    }
}

impl<T> Default for Entries<'_, T> {
    /// Creates an empty `ops::Entries`.
    ///
    /// ```
    /// # use flatpair::ops;
    /// let iter: ops::Entries<'_, u8> = Default::default();
    /// assert_eq!(iter.len(), 0);
    /// ```
    fn default() -> Self {
        entries(&[])
    }
}

impl<'a, T> Iterator for Keys<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, _)| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }

    fn last(mut self) -> Option<Self::Item> {
        self.next_back()
    }
}

impl<T> DoubleEndedIterator for Keys<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(k, _)| k)
    }
}

impl<T> ExactSizeIterator for Keys<'_, T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for Keys<'_, T> {}

impl<T> Clone for Keys<'_, T> {
    fn clone(&self) -> Self {
        Keys {
            inner: self.inner.clone(),
        }
    }
}

impl<T> fmt::Debug for Keys<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Keys").field("remaining", &self.len()).finish()
    }
}

impl<T> Default for Keys<'_, T> {
    fn default() -> Self {
        keys(&[])
    }
}

impl<'a, T> Iterator for Values<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }

    fn last(mut self) -> Option<Self::Item> {
        self.next_back()
    }
}

impl<T> DoubleEndedIterator for Values<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(_, v)| v)
    }
}

impl<T> ExactSizeIterator for Values<'_, T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for Values<'_, T> {}

impl<T> Clone for Values<'_, T> {
    fn clone(&self) -> Self {
        Values {
            inner: self.inner.clone(),
        }
    }
}

impl<T> fmt::Debug for Values<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Values").field("remaining", &self.len()).finish()
    }
}

impl<T> Default for Values<'_, T> {
    fn default() -> Self {
        values(&[])
    }
}
