use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use alloc::vec::Vec;
use core::any::Any;

#[cfg(feature = "std")]
use std::collections::HashMap;

use super::FlatPair;
use crate::{Error, Result};

impl<T> FlatPair<T> {
    /// Builds a `FlatPair` from pairs whose keys are already known to be unique,
    /// appending them in iteration order without scanning.
    fn from_unique_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (T, T)>,
        I::IntoIter: ExactSizeIterator,
    {
        let pairs = pairs.into_iter();
        let mut items = Vec::with_capacity(pairs.len() * 2);
        for (key, value) in pairs {
            items.push(key);
            items.push(value);
        }
        FlatPair { items }
    }

    /// Converts a type-erased key-value map into a `FlatPair`.
    ///
    /// Accepts a boxed `BTreeMap<T, T>` or, with the `std` feature, a boxed
    /// `HashMap<T, T>`. Entries are appended in the map's own iteration order.
    /// Statically typed callers should prefer the `From` implementations.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] if `map` is neither.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::any::Any;
    /// use std::collections::BTreeMap;
    /// use flatpair::{Error, FlatPair};
    ///
    /// let map = BTreeMap::from([("key1", "value1"), ("key2", "value2")]);
    /// let pairs = FlatPair::<&str>::try_from_map(Box::new(map))?;
    /// assert_eq!(pairs.size(), 2);
    /// assert_eq!(pairs.lookup("key1"), Some(&"value1"));
    ///
    /// let not_a_map: Box<dyn Any> = Box::new(vec!["key1", "value1"]);
    /// assert_eq!(FlatPair::<&str>::try_from_map(not_a_map), Err(Error::TypeMismatch));
    /// # Ok::<(), Error>(())
    /// ```
    pub fn try_from_map(map: Box<dyn Any>) -> Result<Self>
    where
        T: 'static,
    {
        let map = match map.downcast::<BTreeMap<T, T>>() {
            Ok(map) => return Ok(FlatPair::from(*map)),
            Err(other) => other,
        };
        #[cfg(feature = "std")]
        let map = match map.downcast::<HashMap<T, T>>() {
            Ok(map) => return Ok(FlatPair::from(*map)),
            Err(other) => other,
        };
        log::debug!("rejected {:?} as a key-value map", (*map).type_id());
        Err(Error::TypeMismatch)
    }
}

/// Adopts a flat sequence, checking that its length is even.
///
/// # Examples
///
/// ```
/// use flatpair::{Error, FlatPair};
///
/// let pairs = FlatPair::try_from(vec![1, 10, 2, 20]);
/// assert_eq!(pairs.map(|p| p.size()), Ok(2));
///
/// let broken = FlatPair::try_from(vec![1, 10, 2]);
/// assert_eq!(broken, Err(Error::Structural { len: 3 }));
/// ```
impl<T> TryFrom<Vec<T>> for FlatPair<T> {
    type Error = Error;

    fn try_from(items: Vec<T>) -> Result<Self> {
        FlatPair::from_vec(items)
    }
}

impl<T> From<FlatPair<T>> for Vec<T> {
    fn from(pairs: FlatPair<T>) -> Self {
        pairs.into_vec()
    }
}

/// Converts an array of pairs, skipping any pair whose key was already seen.
///
/// # Examples
///
/// ```
/// use flatpair::FlatPair;
///
/// let pairs = FlatPair::from([("a", "1"), ("b", "2"), ("a", "3")]);
/// assert_eq!(pairs.size(), 2);
/// assert_eq!(pairs.lookup("a"), Some(&"1"));
/// ```
impl<T: PartialEq, const N: usize> From<[(T, T); N]> for FlatPair<T> {
    fn from(arr: [(T, T); N]) -> Self {
        arr.into_iter().collect()
    }
}

/// Converts a `BTreeMap`, appending its entries in key order.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use flatpair::FlatPair;
///
/// let map = BTreeMap::from([(2, 20), (1, 10)]);
/// let pairs = FlatPair::from(map);
/// assert_eq!(pairs.as_slice(), [1, 10, 2, 20]);
/// ```
impl<T> From<BTreeMap<T, T>> for FlatPair<T> {
    fn from(map: BTreeMap<T, T>) -> Self {
        FlatPair::from_unique_pairs(map)
    }
}

/// Converts a `HashMap`, appending its entries in the map's iteration order.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use flatpair::FlatPair;
///
/// let map = HashMap::from([("key1", "value1"), ("key2", "value2")]);
/// let pairs = FlatPair::from(map);
/// assert_eq!(pairs.size(), 2);
/// assert_eq!(pairs.lookup("key2"), Some(&"value2"));
/// ```
#[cfg(feature = "std")]
impl<T, S> From<HashMap<T, T, S>> for FlatPair<T> {
    fn from(map: HashMap<T, T, S>) -> Self {
        FlatPair::from_unique_pairs(map)
    }
}
