//! Insertion-ordered key-value pairs stored in a single flat sequence.
//!
//! Instead of a hash table or a tree, every pair lives in one `Vec` as two
//! adjacent elements: `[k0, v0, k1, v1, ...]`. Keys sit at even indices and
//! values at odd indices. Lookups are linear scans, which makes this a good fit
//! for small collections where insertion order matters and hashing or ordering
//! the keys is either impossible or not worth it.
//!
//! The crate exposes two faces over the same algorithms:
//!
//! - [`ops`] - free functions operating in place on a caller-owned `Vec<T>`.
//! - [`FlatPair`] - an owning container that delegates to [`ops`].
//!
//! # Example
//!
//! ```
//! use flatpair::{FlatPair, ops};
//!
//! let mut pairs = FlatPair::new();
//! pairs.add("a", "1").add("b", "2").add("a", "99");
//!
//! // The first value for a key wins; `add` never overwrites.
//! assert_eq!(pairs.size(), 2);
//! assert_eq!(pairs.lookup("a"), Some(&"1"));
//!
//! // Lookups work in both directions.
//! assert_eq!(pairs.lookup_by_value("2"), Some(&"b"));
//!
//! // The same operations work on a plain vector the caller already owns.
//! let mut items = vec!["x", "X", "y", "Y"];
//! assert!(ops::remove_by_value(&mut items, "X"));
//! assert_eq!(items, ["y", "Y"]);
//! ```
//!
//! # Features
//!
//! - **`no_std` compatible** - Only requires `alloc`; the default `std` feature
//!   adds conversions from `HashMap`
//! - **Insertion order** - Pairs are visited in the order they were added
//! - **Equality only** - Keys and values need `PartialEq`, never `Hash` or `Ord`
//!
//! # Element type
//!
//! A single backing buffer holds a single element type, so keys and values
//! share the type `T`. When keys and values are of different kinds, use an
//! enum for `T`.

#![no_std]
// These forbid rules and lint groups are meant to be very restrictive.
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod error;
mod pair_index;

pub mod flat_pair;
pub mod ops;

pub use error::{Error, Result};
pub use flat_pair::FlatPair;
pub use ops::FlatPairOperator;
pub use pair_index::PairIndex;
