use std::collections::{BTreeMap, HashMap};

use flatpair::flat_pair;
use flatpair::{Error, FlatPair, PairIndex};
use proptest::prelude::*;

/// The number of operations to perform in each proptest case.
const TEST_SIZE: usize = 1_000;

/// Keys drawn from a narrow range so that `add` regularly meets present keys.
fn key_strategy() -> impl Strategy<Value = i64> {
    -64i64..64i64
}

/// Values drawn from a narrower range so that duplicate values are common.
fn value_strategy() -> impl Strategy<Value = i64> {
    0i64..16i64
}

// ─── Reference model ─────────────────────────────────────────────────────────

/// A straightforward `Vec` of tuples with the same first-wins semantics.
#[derive(Debug, Default)]
struct Model {
    pairs: Vec<(i64, i64)>,
}

impl Model {
    fn add(&mut self, key: i64, value: i64) {
        if !self.pairs.iter().any(|(k, _)| *k == key) {
            self.pairs.push((key, value));
        }
    }

    fn lookup(&self, key: i64) -> Option<&i64> {
        self.pairs.iter().find(|(k, _)| *k == key).map(|(_, v)| v)
    }

    fn lookup_by_value(&self, value: i64) -> Option<&i64> {
        self.pairs.iter().find(|(_, v)| *v == value).map(|(k, _)| k)
    }

    fn remove(&mut self, key: i64) -> bool {
        match self.pairs.iter().position(|(k, _)| *k == key) {
            Some(index) => {
                self.pairs.remove(index);
                true
            }
            None => false,
        }
    }

    fn remove_by_value(&mut self, value: i64) -> bool {
        match self.pairs.iter().position(|(_, v)| *v == value) {
            Some(index) => {
                self.pairs.remove(index);
                true
            }
            None => false,
        }
    }

    fn at(&self, index: usize) -> Option<(&i64, &i64)> {
        self.pairs.get(index).map(|(k, v)| (k, v))
    }

    fn flat(&self) -> Vec<i64> {
        self.pairs.iter().flat_map(|&(k, v)| [k, v]).collect()
    }
}

// ─── Operations enum for driving randomized tests ────────────────────────────

#[derive(Debug, Clone)]
enum PairOp {
    Add(i64, i64),
    Remove(i64),
    RemoveByValue(i64),
    Lookup(i64),
    LookupByValue(i64),
    Has(i64),
    HasByValue(i64),
    At(usize),
    Clear,
}

fn pair_op_strategy() -> impl Strategy<Value = PairOp> {
    prop_oneof![
        6 => (key_strategy(), value_strategy()).prop_map(|(k, v)| PairOp::Add(k, v)),
        2 => key_strategy().prop_map(PairOp::Remove),
        2 => value_strategy().prop_map(PairOp::RemoveByValue),
        2 => key_strategy().prop_map(PairOp::Lookup),
        2 => value_strategy().prop_map(PairOp::LookupByValue),
        1 => key_strategy().prop_map(PairOp::Has),
        1 => value_strategy().prop_map(PairOp::HasByValue),
        1 => (0usize..160).prop_map(PairOp::At),
        1 => Just(PairOp::Clear),
    ]
}

fn filled(entries: &[(i64, i64)]) -> (FlatPair<i64>, Model) {
    let mut pairs = FlatPair::new();
    let mut model = Model::default();
    for &(k, v) in entries {
        pairs.add(k, v);
        model.add(k, v);
    }
    (pairs, model)
}

// ─── Core operations ─────────────────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Replays a random sequence of operations on both `FlatPair` and the model
    /// and asserts identical results at every step.
    #[test]
    fn flat_pair_ops_match_model(ops in proptest::collection::vec(pair_op_strategy(), TEST_SIZE)) {
        let mut pairs: FlatPair<i64> = FlatPair::new();
        let mut model = Model::default();

        for op in &ops {
            match op {
                PairOp::Add(k, v) => {
                    pairs.add(*k, *v);
                    model.add(*k, *v);
                }
                PairOp::Remove(k) => {
                    prop_assert_eq!(pairs.remove(k), model.remove(*k), "remove({})", k);
                }
                PairOp::RemoveByValue(v) => {
                    prop_assert_eq!(pairs.remove_by_value(v), model.remove_by_value(*v), "remove_by_value({})", v);
                }
                PairOp::Lookup(k) => {
                    prop_assert_eq!(pairs.lookup(k), model.lookup(*k), "lookup({})", k);
                }
                PairOp::LookupByValue(v) => {
                    prop_assert_eq!(pairs.lookup_by_value(v), model.lookup_by_value(*v), "lookup_by_value({})", v);
                }
                PairOp::Has(k) => {
                    prop_assert_eq!(pairs.has(k), model.lookup(*k).is_some(), "has({})", k);
                }
                PairOp::HasByValue(v) => {
                    prop_assert_eq!(pairs.has_by_value(v), model.lookup_by_value(*v).is_some(), "has_by_value({})", v);
                }
                PairOp::At(i) => {
                    prop_assert_eq!(pairs.at(*i), model.at(*i), "at({})", i);
                }
                PairOp::Clear => {
                    pairs.clear();
                    model.pairs.clear();
                }
            }
            prop_assert_eq!(pairs.size(), model.pairs.len(), "size mismatch after {:?}", op);
            prop_assert_eq!(pairs.as_slice().len() % 2, 0, "odd length after {:?}", op);
        }
        prop_assert_eq!(pairs.into_vec(), model.flat());
    }

    /// Adding a key that is already present changes nothing.
    #[test]
    fn add_is_idempotent_on_key(
        entries in proptest::collection::vec((key_strategy(), value_strategy()), 1..TEST_SIZE),
        value in value_strategy(),
    ) {
        let (mut pairs, _) = filled(&entries);
        let before = pairs.clone();
        let (key, _) = entries[0];

        pairs.add(key, value);
        prop_assert_eq!(&pairs, &before);
        prop_assert_eq!(pairs.lookup(&key), before.lookup(&key));
    }

    /// `remove` shrinks the size by one exactly when the key was present.
    #[test]
    fn remove_shrinks_iff_present(
        entries in proptest::collection::vec((key_strategy(), value_strategy()), TEST_SIZE),
        key in key_strategy(),
    ) {
        let (mut pairs, _) = filled(&entries);
        let before = pairs.clone();
        let present = pairs.has(&key);

        prop_assert_eq!(pairs.remove(&key), present);
        if present {
            prop_assert_eq!(pairs.size(), before.size() - 1);
            prop_assert!(!pairs.has(&key));
        } else {
            prop_assert_eq!(&pairs, &before);
        }
    }

    /// `remove_by_value` shrinks the size by one exactly when the value was present.
    #[test]
    fn remove_by_value_shrinks_iff_present(
        entries in proptest::collection::vec((key_strategy(), value_strategy()), TEST_SIZE),
        value in value_strategy(),
    ) {
        let (mut pairs, _) = filled(&entries);
        let before = pairs.clone();
        let owner = pairs.lookup_by_value(&value).copied();

        prop_assert_eq!(pairs.remove_by_value(&value), owner.is_some());
        match owner {
            Some(key) => {
                prop_assert_eq!(pairs.size(), before.size() - 1);
                prop_assert!(!pairs.has(&key));
            }
            None => prop_assert_eq!(&pairs, &before),
        }
    }

    /// Every stored pair can be found from either side.
    #[test]
    fn every_pair_is_found_both_ways(entries in proptest::collection::vec((key_strategy(), value_strategy()), TEST_SIZE)) {
        let (pairs, model) = filled(&entries);

        for (k, v) in &model.pairs {
            prop_assert_eq!(pairs.lookup(k), Some(v));
            let owner = pairs.lookup_by_value(v);
            prop_assert_eq!(owner, model.lookup_by_value(*v));
            prop_assert!(owner.is_some_and(|o| pairs.lookup(o) == Some(v)));
        }
    }

    /// `at` agrees with insertion order inside the range and is `None` outside it.
    #[test]
    fn at_matches_model(entries in proptest::collection::vec((key_strategy(), value_strategy()), TEST_SIZE)) {
        let (pairs, model) = filled(&entries);

        for i in 0..pairs.size() + 4 {
            prop_assert_eq!(pairs.at(i), model.at(i), "at({})", i);
        }
    }

    /// `clear` empties the container and every lookup misses afterwards.
    #[test]
    fn clear_empties(entries in proptest::collection::vec((key_strategy(), value_strategy()), TEST_SIZE)) {
        let (mut pairs, model) = filled(&entries);
        pairs.clear();

        prop_assert_eq!(pairs.size(), 0);
        prop_assert!(pairs.is_empty());
        for (k, v) in &model.pairs {
            prop_assert_eq!(pairs.lookup(k), None);
            prop_assert_eq!(pairs.lookup_by_value(v), None);
        }
    }
}

// ─── Construction ────────────────────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Even-length sequences are adopted as is and report half their length.
    #[test]
    fn from_vec_even_length(items in proptest::collection::vec(any::<i64>(), 0..64).prop_map(|mut v| { v.truncate(v.len() & !1); v })) {
        let len = items.len();
        let pairs = FlatPair::from_vec(items.clone()).unwrap();
        prop_assert_eq!(pairs.size(), len / 2);
        prop_assert_eq!(pairs.as_slice(), items.as_slice());
    }

    /// Odd-length sequences are always rejected, never truncated.
    #[test]
    fn from_vec_odd_length(items in proptest::collection::vec(any::<i64>(), 0..64).prop_map(|mut v| { v.push(0); if v.len() % 2 == 0 { v.push(0); } v })) {
        let len = items.len();
        prop_assert_eq!(FlatPair::from_vec(items.clone()), Err(Error::Structural { len }));
        prop_assert_eq!(FlatPair::try_from(items), Err(Error::Structural { len }));
    }

    /// Collecting pairs behaves like repeated `add`.
    #[test]
    fn from_iter_matches_add(entries in proptest::collection::vec((key_strategy(), value_strategy()), 0..256)) {
        let (added, _) = filled(&entries);
        let collected: FlatPair<i64> = entries.iter().copied().collect();
        prop_assert_eq!(collected, added);
    }
}

// ─── Iteration ───────────────────────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// `keys`, `values` and `entries` each yield `size` items in insertion order,
    /// and consuming one does not disturb another.
    #[test]
    fn iterators_match_model(entries in proptest::collection::vec((key_strategy(), value_strategy()), TEST_SIZE)) {
        let (pairs, model) = filled(&entries);
        let expected_keys: Vec<i64> = model.pairs.iter().map(|&(k, _)| k).collect();
        let expected_values: Vec<i64> = model.pairs.iter().map(|&(_, v)| v).collect();

        let mut keys = pairs.keys();
        let values = pairs.values();
        prop_assert_eq!(keys.len(), pairs.size());
        let _ = keys.by_ref().count();
        prop_assert_eq!(keys.next(), None);
        prop_assert_eq!(values.len(), pairs.size());

        prop_assert_eq!(pairs.keys().copied().collect::<Vec<_>>(), expected_keys.clone());
        prop_assert_eq!(pairs.keys().copied().collect::<Vec<_>>(), expected_keys);
        prop_assert_eq!(values.copied().collect::<Vec<_>>(), expected_values);
        prop_assert_eq!(
            pairs.entries().map(|(k, v)| (*k, *v)).collect::<Vec<_>>(),
            model.pairs.clone()
        );
        prop_assert_eq!((&pairs).into_iter().count(), pairs.size());
        prop_assert_eq!(pairs.into_iter().collect::<Vec<_>>(), model.pairs);
    }

    /// Reverse iteration visits the same pairs backwards.
    #[test]
    fn iterators_double_ended(entries in proptest::collection::vec((key_strategy(), value_strategy()), 1..TEST_SIZE)) {
        let (pairs, model) = filled(&entries);
        let mut reversed = model.pairs.clone();
        reversed.reverse();

        prop_assert_eq!(pairs.entries().rev().map(|(k, v)| (*k, *v)).collect::<Vec<_>>(), reversed.clone());
        prop_assert_eq!(pairs.keys().rev().copied().collect::<Vec<_>>(), reversed.iter().map(|&(k, _)| k).collect::<Vec<_>>());
        prop_assert_eq!(pairs.clone().into_iter().rev().collect::<Vec<_>>(), reversed);
    }

    /// `for_each` visits pairs in order with consecutive pair indices.
    #[test]
    fn for_each_matches_entries(entries in proptest::collection::vec((key_strategy(), value_strategy()), TEST_SIZE)) {
        let (pairs, model) = filled(&entries);
        let mut visited = Vec::new();
        pairs.for_each(|value, key, index, items| {
            assert_eq!(items.len(), model.pairs.len() * 2);
            visited.push((index, *key, *value));
        });

        let expected: Vec<_> = model.pairs.iter().enumerate().map(|(i, &(k, v))| (i, k, v)).collect();
        prop_assert_eq!(visited, expected);
    }
}

// ─── Worked examples ─────────────────────────────────────────────────────────

mod examples {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Keys and values of different kinds share one enum element type.
    #[derive(Debug, Clone, PartialEq)]
    enum Item {
        Name(&'static str),
        Number(i32),
    }

    #[test]
    fn add_remove_and_lookup() {
        let mut pairs = FlatPair::new();
        pairs.add(Item::Name("a"), Item::Number(1));
        pairs.add(Item::Name("b"), Item::Number(2));
        pairs.add(Item::Name("a"), Item::Number(99));

        assert_eq!(pairs.size(), 2);
        assert_eq!(pairs.lookup(&Item::Name("a")), Some(&Item::Number(1)));

        assert!(pairs.remove(&Item::Name("a")));
        assert_eq!(pairs.size(), 1);
        assert_eq!(pairs.lookup(&Item::Name("a")), None);
        assert_eq!(pairs.lookup_by_value(&Item::Number(2)), Some(&Item::Name("b")));
        assert_eq!(pairs.at(0), Some((&Item::Name("b"), &Item::Number(2))));
        assert_eq!(pairs.at(1), None);
    }

    #[test]
    fn remove_by_value_from_sequence() {
        let mut pairs = FlatPair::from_vec(vec!["x", "X", "y", "Y", "z", "Z"]).unwrap();
        assert_eq!(pairs.size(), 3);

        assert!(pairs.remove_by_value("Y"));
        assert_eq!(pairs.size(), 2);
        assert_eq!(pairs.entries().collect::<Vec<_>>(), [(&"x", &"X"), (&"z", &"Z")]);
    }

    #[test]
    fn odd_sequence_is_structural_error() {
        let err = FlatPair::from_vec(vec!["k", "v", "k2"]).unwrap_err();
        assert_eq!(err, Error::Structural { len: 3 });
        assert_eq!(err.to_string(), "flat pair sequence length must be even, got 3");
    }

    #[test]
    fn chaining_returns_same_container() {
        let mut pairs = FlatPair::new();
        let chained: *const FlatPair<&str> = pairs.add("key1", "value1").add("key2", "value2");
        assert!(std::ptr::eq(chained, &pairs));
        assert_eq!(pairs.size(), 2);
    }

    #[test]
    fn empty_container_misses_everything() {
        let mut pairs: FlatPair<String> = FlatPair::default();
        assert_eq!(pairs.size(), 0);
        assert_eq!(pairs.lookup("any"), None);
        assert!(!pairs.remove("any"));
        assert!(!pairs.remove_by_value("any"));
        assert_eq!(pairs.at(0), None);
        assert_eq!(pairs.keys().next(), None);
    }

    #[test]
    fn option_values_are_ordinary_elements() {
        let mut pairs = FlatPair::new();
        pairs.add(Some("null"), None);
        pairs.add(Some("set"), Some("x"));

        assert_eq!(pairs.lookup(&Some("null")), Some(&None));
        assert_eq!(pairs.lookup_by_value(&None), Some(&Some("null")));
        assert_eq!(pairs.lookup(&None), None);
    }

    #[test]
    fn iterators_and_default_iteration() {
        let pairs = FlatPair::from_vec(vec!["k1", "v1", "k2", "v2"]).unwrap();

        assert_eq!(pairs.keys().collect::<Vec<_>>(), [&"k1", &"k2"]);
        assert_eq!(pairs.values().collect::<Vec<_>>(), [&"v1", &"v2"]);
        assert_eq!(pairs.entries().collect::<Vec<_>>(), [(&"k1", &"v1"), (&"k2", &"v2")]);

        let mut seen = Vec::new();
        for (k, v) in &pairs {
            seen.push((*k, *v));
        }
        assert_eq!(seen, [("k1", "v1"), ("k2", "v2")]);
    }

    #[test]
    fn index_by_pair_position() {
        let mut pairs = FlatPair::from([("a", "A"), ("b", "B")]);
        assert_eq!(pairs[PairIndex(1)], "B");

        pairs[PairIndex(0)] = "AA";
        assert_eq!(pairs.lookup("a"), Some(&"AA"));
    }

    #[test]
    fn from_btree_map_in_key_order() {
        let map = BTreeMap::from([("key2", "value2"), ("key1", "value1")]);
        let pairs = FlatPair::from(map);

        assert_eq!(pairs.size(), 2);
        assert_eq!(pairs.as_slice(), ["key1", "value1", "key2", "value2"]);
    }

    #[test]
    fn from_hash_map_keeps_every_entry() {
        let map = HashMap::from([("key1", "value1"), ("key2", "value2")]);
        let order: Vec<_> = map.iter().map(|(k, v)| (*k, *v)).collect();
        let pairs = FlatPair::from(map);

        assert_eq!(pairs.into_iter().collect::<Vec<_>>(), order);
    }

    #[test]
    fn try_from_map_rejects_non_maps() {
        let not_a_map: Box<dyn std::any::Any> = Box::new(String::from("key1"));
        assert_eq!(FlatPair::<String>::try_from_map(not_a_map), Err(Error::TypeMismatch));
        assert_eq!(Error::TypeMismatch.to_string(), "argument must be a key-value map");
    }

    #[test]
    fn capacity_is_counted_in_pairs() {
        let mut pairs: FlatPair<u32> = FlatPair::with_capacity(4);
        assert!(pairs.capacity() >= 4);
        pairs.reserve(10);
        assert!(pairs.capacity() >= 10);
    }

    #[test]
    fn default_iterators_are_empty() {
        let entries: flat_pair::Entries<'_, u8> = Default::default();
        let keys: flat_pair::Keys<'_, u8> = Default::default();
        let values: flat_pair::Values<'_, u8> = Default::default();
        let owned: flat_pair::IntoIter<u8> = Default::default();
        assert_eq!(entries.len() + keys.len() + values.len() + owned.len(), 0);
    }
}
