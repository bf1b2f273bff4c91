use alloc::vec::Vec;
use core::borrow::Borrow;
use core::fmt;
use core::marker::PhantomData;

use crate::Result;

/// The flat pair operations bundled into a value.
///
/// `FlatPairOperator` is zero-sized and holds no sequence; each method forwards
/// to the function of the same name in [`ops`](crate::ops). It is useful where
/// the operation set itself needs to be stored or passed around, for example as
/// a field of a type that manages several caller-owned sequences.
///
/// # Examples
///
/// ```
/// use flatpair::FlatPairOperator;
///
/// let operator = FlatPairOperator::new();
/// let mut items = Vec::new();
///
/// operator.add(&mut items, "key1", "value1");
/// operator.add(&mut items, "key2", "value2");
/// assert_eq!(operator.lookup(&items, "key1"), Some(&"value1"));
/// assert_eq!(operator.lookup_by_value(&items, "value2"), Some(&"key2"));
///
/// assert!(operator.remove(&mut items, "key1"));
/// assert_eq!(items, ["key2", "value2"]);
/// ```
pub struct FlatPairOperator<T> {
    _marker: PhantomData<fn(T) -> T>,
}

impl<T> FlatPairOperator<T> {
    /// Makes a new operator.
    #[must_use]
    pub const fn new() -> Self {
        FlatPairOperator {
            _marker: PhantomData,
        }
    }

    /// See [`ops::add`](crate::ops::add).
    pub fn add(&self, seq: &mut Vec<T>, key: T, value: T)
    where
        T: PartialEq,
    {
        super::add(seq, key, value);
    }

    /// See [`ops::size`](crate::ops::size).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Structural`](crate::Error::Structural) if `seq` has an
    /// odd number of elements.
    pub fn size(&self, seq: &[T]) -> Result<usize> {
        super::size(seq)
    }

    /// See [`ops::lookup`](crate::ops::lookup).
    pub fn lookup<'a, Q>(&self, seq: &'a [T], key: &Q) -> Option<&'a T>
    where
        T: Borrow<Q>,
        Q: ?Sized + PartialEq,
    {
        super::lookup(seq, key)
    }

    /// See [`ops::lookup_by_value`](crate::ops::lookup_by_value).
    pub fn lookup_by_value<'a, Q>(&self, seq: &'a [T], value: &Q) -> Option<&'a T>
    where
        T: Borrow<Q>,
        Q: ?Sized + PartialEq,
    {
        super::lookup_by_value(seq, value)
    }

    /// See [`ops::has`](crate::ops::has).
    pub fn has<Q>(&self, seq: &[T], key: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: ?Sized + PartialEq,
    {
        super::has(seq, key)
    }

    /// See [`ops::has_by_value`](crate::ops::has_by_value).
    pub fn has_by_value<Q>(&self, seq: &[T], value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: ?Sized + PartialEq,
    {
        super::has_by_value(seq, value)
    }

    /// See [`ops::remove`](crate::ops::remove).
    pub fn remove<Q>(&self, seq: &mut Vec<T>, key: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: ?Sized + PartialEq,
    {
        super::remove(seq, key)
    }

    /// See [`ops::remove_by_value`](crate::ops::remove_by_value).
    pub fn remove_by_value<Q>(&self, seq: &mut Vec<T>, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: ?Sized + PartialEq,
    {
        super::remove_by_value(seq, value)
    }

    /// See [`ops::at`](crate::ops::at).
    pub fn at<'a>(&self, seq: &'a [T], pair_index: usize) -> Option<(&'a T, &'a T)> {
        super::at(seq, pair_index)
    }

    /// See [`ops::clear`](crate::ops::clear).
    pub fn clear(&self, seq: &mut Vec<T>) {
        super::clear(seq);
    }
}

impl<T> Clone for FlatPairOperator<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for FlatPairOperator<T> {}

impl<T> Default for FlatPairOperator<T> {
    fn default() -> Self {
        FlatPairOperator::new()
    }
}

impl<T> fmt::Debug for FlatPairOperator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FlatPairOperator")
    }
}
