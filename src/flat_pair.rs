use alloc::vec::Vec;
use core::borrow::Borrow;
use core::fmt;
use core::iter::FusedIterator;

use crate::ops;
use crate::Result;

mod capacity;
mod conversion;
mod pair_index;

pub use crate::PairIndex;
pub use crate::ops::{Entries, Keys, Values};

/// An insertion-ordered collection of key-value pairs backed by one flat `Vec`.
///
/// The pairs are stored interleaved as `[k0, v0, k1, v1, ...]`: keys at even
/// indices, values at odd ones. Every operation is a thin wrapper over the
/// function of the same name in [`ops`], applied to the owned sequence, so the
/// two faces of the crate always agree.
///
/// Keys are unique by [`PartialEq`]: [`add`](FlatPair::add) leaves an existing
/// pair untouched instead of overwriting it. Values need not be unique; lookups
/// by value return the first matching pair.
///
/// All lookups are linear scans. That is the trade-off of the flat layout: no
/// hashing, no per-entry allocation and no ordering requirement on keys, at the
/// price of O(n) searches. It suits small collections.
///
/// # Examples
///
/// ```
/// use flatpair::FlatPair;
///
/// let mut headers = FlatPair::new();
///
/// headers
///     .add("Content-Type", "text/html")
///     .add("Cache-Control", "no-cache")
///     .add("Content-Type", "application/json"); // ignored, key already present
///
/// assert_eq!(headers.size(), 2);
/// assert_eq!(headers.lookup("Content-Type"), Some(&"text/html"));
///
/// // look up in the other direction.
/// assert_eq!(headers.lookup_by_value("no-cache"), Some(&"Cache-Control"));
///
/// // positional access follows insertion order.
/// assert_eq!(headers.at(1), Some((&"Cache-Control", &"no-cache")));
///
/// // iterate over everything.
/// for (name, value) in &headers {
///     println!("{name}: {value}");
/// }
///
/// assert!(headers.remove("Content-Type"));
/// assert_eq!(headers.size(), 1);
/// ```
///
/// A `FlatPair` can also adopt a sequence that is already laid out flat, as
/// long as its length is even:
///
/// ```
/// use flatpair::{Error, FlatPair};
///
/// let pairs = FlatPair::from_vec(vec!["x", "X", "y", "Y"]).unwrap();
/// assert_eq!(pairs.size(), 2);
///
/// let broken = FlatPair::from_vec(vec!["k", "v", "k2"]);
/// assert_eq!(broken, Err(Error::Structural { len: 3 }));
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct FlatPair<T> {
    items: Vec<T>,
}

/// An owning iterator over the pairs of a `FlatPair`, in insertion order.
///
/// This `struct` is created by the [`into_iter`] method on [`FlatPair`]
/// (provided by the [`IntoIterator`] trait).
///
/// # Examples
///
/// ```
/// use flatpair::FlatPair;
///
/// let pairs = FlatPair::from([(1, 10), (2, 20)]);
/// let mut iter = pairs.into_iter();
/// assert_eq!(iter.next(), Some((1, 10)));
/// assert_eq!(iter.next_back(), Some((2, 20)));
/// assert_eq!(iter.next(), None);
/// ```
///
/// [`into_iter`]: IntoIterator::into_iter
pub struct IntoIter<T> {
    inner: alloc::vec::IntoIter<T>,
}

impl<T> FlatPair<T> {
    /// Makes a new, empty `FlatPair`.
    ///
    /// Does not allocate anything on its own.
    ///
    /// # Examples
    ///
    /// ```
    /// use flatpair::FlatPair;
    ///
    /// let mut pairs = FlatPair::new();
    /// pairs.add("a", "1");
    /// ```
    #[must_use]
    pub const fn new() -> FlatPair<T> {
        FlatPair { items: Vec::new() }
    }

    /// Adopts `items` as the backing sequence.
    ///
    /// The sequence is taken as is: it is not checked for duplicate keys.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Structural`](crate::Error::Structural) if `items` has an
    /// odd number of elements. The vector is never truncated to fit.
    ///
    /// # Examples
    ///
    /// ```
    /// use flatpair::FlatPair;
    ///
    /// let pairs = FlatPair::from_vec(vec![1, 10, 2, 20])?;
    /// assert_eq!(pairs.lookup(&2), Some(&20));
    /// # Ok::<(), flatpair::Error>(())
    /// ```
    pub fn from_vec(items: Vec<T>) -> Result<FlatPair<T>> {
        ops::size(&items)?;
        Ok(FlatPair { items })
    }

    /// Returns the number of pairs.
    ///
    /// # Examples
    ///
    /// ```
    /// use flatpair::FlatPair;
    ///
    /// let mut pairs = FlatPair::new();
    /// assert_eq!(pairs.size(), 0);
    /// pairs.add(1, 10);
    /// assert_eq!(pairs.size(), 1);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn size(&self) -> usize {
        self.items.len() / 2
    }

    /// Returns `true` if there are no pairs.
    ///
    /// # Examples
    ///
    /// ```
    /// use flatpair::FlatPair;
    ///
    /// let mut pairs = FlatPair::new();
    /// assert!(pairs.is_empty());
    /// pairs.add(1, 10);
    /// assert!(!pairs.is_empty());
    /// ```
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Adds a pair unless one with an equal key is already present, and returns
    /// `self` so additions can be chained.
    ///
    /// An existing value is never overwritten.
    ///
    /// # Examples
    ///
    /// ```
    /// use flatpair::FlatPair;
    ///
    /// let mut pairs = FlatPair::new();
    /// pairs.add("a", "1").add("b", "2").add("a", "99");
    ///
    /// assert_eq!(pairs.size(), 2);
    /// assert_eq!(pairs.lookup("a"), Some(&"1"));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n)
    pub fn add(&mut self, key: T, value: T) -> &mut Self
    where
        T: PartialEq,
    {
        ops::add(&mut self.items, key, value);
        self
    }

    /// Returns a reference to the value paired with `key`.
    ///
    /// The key may be any borrowed form of the element type, but equality on the
    /// borrowed form *must* match equality on the element type.
    ///
    /// # Examples
    ///
    /// ```
    /// use flatpair::FlatPair;
    ///
    /// let mut pairs = FlatPair::new();
    /// pairs.add(String::from("a"), String::from("1"));
    /// assert_eq!(pairs.lookup("a").map(String::as_str), Some("1"));
    /// assert_eq!(pairs.lookup("b"), None);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n)
    pub fn lookup<Q>(&self, key: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: ?Sized + PartialEq,
    {
        ops::lookup(&self.items, key)
    }

    /// Returns a mutable reference to the value paired with `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use flatpair::FlatPair;
    ///
    /// let mut pairs = FlatPair::from([(1, 10)]);
    /// if let Some(value) = pairs.lookup_mut(&1) {
    ///     *value = 11;
    /// }
    /// assert_eq!(pairs.lookup(&1), Some(&11));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n)
    pub fn lookup_mut<Q>(&mut self, key: &Q) -> Option<&mut T>
    where
        T: Borrow<Q>,
        Q: ?Sized + PartialEq,
    {
        ops::lookup_mut(&mut self.items, key)
    }

    /// Returns a reference to the key of the first pair holding `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use flatpair::FlatPair;
    ///
    /// let pairs = FlatPair::from([("a", "same"), ("b", "same")]);
    /// assert_eq!(pairs.lookup_by_value("same"), Some(&"a"));
    /// assert_eq!(pairs.lookup_by_value("other"), None);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n)
    pub fn lookup_by_value<Q>(&self, value: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: ?Sized + PartialEq,
    {
        ops::lookup_by_value(&self.items, value)
    }

    /// Returns `true` if a pair with key `key` is present.
    ///
    /// # Examples
    ///
    /// ```
    /// use flatpair::FlatPair;
    ///
    /// let pairs = FlatPair::from([(1, 10)]);
    /// assert!(pairs.has(&1));
    /// assert!(!pairs.has(&10));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n)
    pub fn has<Q>(&self, key: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: ?Sized + PartialEq,
    {
        ops::has(&self.items, key)
    }

    /// Returns `true` if a pair with value `value` is present.
    ///
    /// # Examples
    ///
    /// ```
    /// use flatpair::FlatPair;
    ///
    /// let pairs = FlatPair::from([(1, 10)]);
    /// assert!(pairs.has_by_value(&10));
    /// assert!(!pairs.has_by_value(&1));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n)
    pub fn has_by_value<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: ?Sized + PartialEq,
    {
        ops::has_by_value(&self.items, value)
    }

    /// Removes the pair with key `key`, returning `true` if it was present.
    ///
    /// Pairs added after it move up one position.
    ///
    /// # Examples
    ///
    /// ```
    /// use flatpair::FlatPair;
    ///
    /// let mut pairs = FlatPair::from([("a", "1"), ("b", "2")]);
    /// assert!(pairs.remove("a"));
    /// assert!(!pairs.remove("a"));
    /// assert_eq!(pairs.at(0), Some((&"b", &"2")));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n)
    pub fn remove<Q>(&mut self, key: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: ?Sized + PartialEq,
    {
        ops::remove(&mut self.items, key)
    }

    /// Removes the pair with key `key` and returns it.
    ///
    /// # Examples
    ///
    /// ```
    /// use flatpair::FlatPair;
    ///
    /// let mut pairs = FlatPair::from([(1, 10)]);
    /// assert_eq!(pairs.remove_entry(&1), Some((1, 10)));
    /// assert_eq!(pairs.remove_entry(&1), None);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n)
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(T, T)>
    where
        T: Borrow<Q>,
        Q: ?Sized + PartialEq,
    {
        ops::remove_entry(&mut self.items, key)
    }

    /// Removes the first pair holding `value`, returning `true` if one was found.
    ///
    /// # Examples
    ///
    /// ```
    /// use flatpair::FlatPair;
    ///
    /// let mut pairs = FlatPair::from([("x", "X"), ("y", "Y"), ("z", "Z")]);
    /// assert!(pairs.remove_by_value("Y"));
    /// assert_eq!(pairs, FlatPair::from([("x", "X"), ("z", "Z")]));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n)
    pub fn remove_by_value<Q>(&mut self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: ?Sized + PartialEq,
    {
        ops::remove_by_value(&mut self.items, value)
    }

    /// Returns the pair at position `pair_index` in insertion order, or `None`
    /// if there are not that many pairs.
    ///
    /// # Examples
    ///
    /// ```
    /// use flatpair::FlatPair;
    ///
    /// let pairs = FlatPair::from([("k1", "v1"), ("k2", "v2")]);
    /// assert_eq!(pairs.at(0), Some((&"k1", &"v1")));
    /// assert_eq!(pairs.at(2), None);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn at(&self, pair_index: usize) -> Option<(&T, &T)> {
        ops::at(&self.items, pair_index)
    }

    /// Returns the key and a mutable reference to the value at position
    /// `pair_index`.
    ///
    /// # Examples
    ///
    /// ```
    /// use flatpair::FlatPair;
    ///
    /// let mut pairs = FlatPair::from([(1, 10), (2, 20)]);
    /// if let Some((_, value)) = pairs.at_mut(1) {
    ///     *value = 21;
    /// }
    /// assert_eq!(pairs.lookup(&2), Some(&21));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn at_mut(&mut self, pair_index: usize) -> Option<(&T, &mut T)> {
        ops::at_mut(&mut self.items, pair_index)
    }

    /// Calls `f(value, key, pair_index, items)` for each pair in insertion order,
    /// where `items` is the backing sequence.
    ///
    /// # Examples
    ///
    /// ```
    /// use flatpair::FlatPair;
    ///
    /// let pairs = FlatPair::from([(1, 10), (2, 20)]);
    /// let mut total = 0;
    /// pairs.for_each(|value, key, _, _| total += key * value);
    /// assert_eq!(total, 50);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n)
    pub fn for_each<F>(&self, f: F)
    where
        F: FnMut(&T, &T, usize, &[T]),
    {
        ops::for_each(&self.items, f);
    }

    /// Removes all pairs, keeping the allocated memory for reuse.
    ///
    /// # Examples
    ///
    /// ```
    /// use flatpair::FlatPair;
    ///
    /// let mut pairs = FlatPair::from([(1, 10)]);
    /// pairs.clear();
    /// assert!(pairs.is_empty());
    /// assert_eq!(pairs.lookup(&1), None);
    /// ```
    pub fn clear(&mut self) {
        ops::clear(&mut self.items);
    }

    /// Gets an iterator over the keys, in insertion order.
    ///
    /// Each call starts a fresh traversal of the current contents.
    ///
    /// # Examples
    ///
    /// ```
    /// use flatpair::FlatPair;
    ///
    /// let pairs = FlatPair::from([(2, 20), (1, 10)]);
    /// let keys: Vec<_> = pairs.keys().copied().collect();
    /// assert_eq!(keys, [2, 1]);
    /// ```
    pub fn keys(&self) -> Keys<'_, T> {
        ops::keys(&self.items)
    }

    /// Gets an iterator over the values, in insertion order.
    ///
    /// # Examples
    ///
    /// ```
    /// use flatpair::FlatPair;
    ///
    /// let pairs = FlatPair::from([(2, 20), (1, 10)]);
    /// let values: Vec<_> = pairs.values().copied().collect();
    /// assert_eq!(values, [20, 10]);
    /// ```
    pub fn values(&self) -> Values<'_, T> {
        ops::values(&self.items)
    }

    /// Gets an iterator over the pairs, in insertion order.
    ///
    /// This is also what iterating over `&FlatPair` yields.
    ///
    /// # Examples
    ///
    /// ```
    /// use flatpair::FlatPair;
    ///
    /// let pairs = FlatPair::from([("k1", "v1"), ("k2", "v2")]);
    /// let mut entries = pairs.entries();
    /// assert_eq!(entries.next(), Some((&"k1", &"v1")));
    /// assert_eq!(entries.next(), Some((&"k2", &"v2")));
    /// assert_eq!(entries.next(), None);
    /// ```
    pub fn entries(&self) -> Entries<'_, T> {
        ops::entries(&self.items)
    }

    /// Gets an iterator over the pairs, in insertion order.
    ///
    /// Same as [`entries`](FlatPair::entries).
    pub fn iter(&self) -> Entries<'_, T> {
        self.entries()
    }

    /// Returns the backing sequence.
    ///
    /// # Examples
    ///
    /// ```
    /// use flatpair::FlatPair;
    ///
    /// let pairs = FlatPair::from([(1, 10), (2, 20)]);
    /// assert_eq!(pairs.as_slice(), [1, 10, 2, 20]);
    /// ```
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Consumes the `FlatPair`, returning the backing sequence.
    ///
    /// # Examples
    ///
    /// ```
    /// use flatpair::FlatPair;
    ///
    /// let mut pairs = FlatPair::new();
    /// pairs.add('a', 'b');
    /// assert_eq!(pairs.into_vec(), ['a', 'b']);
    /// ```
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<T: fmt::Debug> fmt::Debug for FlatPair<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<T> Default for FlatPair<T> {
    fn default() -> Self {
        FlatPair::new()
    }
}

impl<T> AsRef<[T]> for FlatPair<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T: PartialEq> FromIterator<(T, T)> for FlatPair<T> {
    fn from_iter<I: IntoIterator<Item = (T, T)>>(iter: I) -> Self {
        let mut pairs = FlatPair::new();
        pairs.extend(iter);
        pairs
    }
}

impl<T: PartialEq> Extend<(T, T)> for FlatPair<T> {
    fn extend<I: IntoIterator<Item = (T, T)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.add(key, value);
        }
    }
}

impl<'a, T> IntoIterator for &'a FlatPair<T> {
    type Item = (&'a T, &'a T);
    type IntoIter = Entries<'a, T>;

    fn into_iter(self) -> Entries<'a, T> {
        self.entries()
    }
}

impl<T> IntoIterator for FlatPair<T> {
    type Item = (T, T);
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter {
            inner: self.items.into_iter(),
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = (T, T);

    fn next(&mut self) -> Option<Self::Item> {
        let key = self.inner.next()?;
        let value = self.inner.next()?;
        Some((key, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let value = self.inner.next_back()?;
        let key = self.inner.next_back()?;
        Some((key, value))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.inner.len() / 2
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.inner.as_slice()).finish()
    }
}

impl<T> Default for IntoIter<T> {
    /// Creates an empty `flat_pair::IntoIter`.
    ///
    /// ```
    /// # use flatpair::flat_pair;
    /// let iter: flat_pair::IntoIter<u8> = Default::default();
    /// assert_eq!(iter.len(), 0);
    /// ```
    fn default() -> Self {
        IntoIter {
            inner: Vec::new().into_iter(),
        }
    }
}
