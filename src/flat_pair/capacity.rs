use alloc::vec::Vec;

use super::FlatPair;

impl<T> FlatPair<T> {
    /// Creates an empty `FlatPair` with room for at least `capacity` pairs.
    ///
    /// # Examples
    ///
    /// ```
    /// use flatpair::FlatPair;
    ///
    /// let pairs: FlatPair<i32> = FlatPair::with_capacity(16);
    /// assert!(pairs.is_empty());
    /// assert!(pairs.capacity() >= 16);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if the element capacity (`2 * capacity`) overflows `usize` or
    /// exceeds `isize::MAX` bytes.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let elements = capacity.checked_mul(2).expect("capacity overflow");
        FlatPair {
            items: Vec::with_capacity(elements),
        }
    }

    /// Returns the number of pairs the `FlatPair` can hold without reallocating.
    ///
    /// # Examples
    ///
    /// ```
    /// use flatpair::FlatPair;
    ///
    /// let pairs: FlatPair<i32> = FlatPair::with_capacity(8);
    /// assert!(pairs.capacity() >= 8);
    /// ```
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.items.capacity() / 2
    }

    /// Reserves room for at least `additional` more pairs.
    ///
    /// # Panics
    ///
    /// Panics if the new capacity exceeds `isize::MAX` bytes.
    pub fn reserve(&mut self, additional: usize) {
        let elements = additional.checked_mul(2).expect("capacity overflow");
        self.items.reserve(elements);
    }

    /// Shrinks the backing allocation as close to the current size as possible.
    ///
    /// # Examples
    ///
    /// ```
    /// use flatpair::FlatPair;
    ///
    /// let mut pairs = FlatPair::with_capacity(32);
    /// pairs.add(1, 10);
    /// pairs.shrink_to_fit();
    /// assert!(pairs.capacity() >= 1);
    /// ```
    pub fn shrink_to_fit(&mut self) {
        self.items.shrink_to_fit();
    }
}
