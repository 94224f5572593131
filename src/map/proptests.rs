//! Property-based tests for `SafeMap` using proptest
//!
//! A plain `HashMap` serves as the model; every operation sequence must leave
//! both in the same state and produce the same answers.

use crate::map::SafeMap;
use proptest::prelude::*;
use std::collections::HashMap;

#[derive(Debug, Clone)]
enum Op {
    Put(u8, i32),
    Get(u8),
    LoadOrStore(u8, i32),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    // Small key space so hits and misses both happen often
    prop_oneof![
        (0u8..16, any::<i32>()).prop_map(|(k, v)| Op::Put(k, v)),
        (0u8..16).prop_map(Op::Get),
        (0u8..16, any::<i32>()).prop_map(|(k, v)| Op::LoadOrStore(k, v)),
    ]
}

proptest! {
    #[test]
    fn test_matches_hashmap_model(ops in prop::collection::vec(op_strategy(), 1..200)) {
        let map: SafeMap<u8, i32> = SafeMap::new();
        let mut model: HashMap<u8, i32> = HashMap::new();

        for op in ops {
            match op {
                Op::Put(k, v) => {
                    map.put(k, v);
                    model.insert(k, v);
                }
                Op::Get(k) => {
                    prop_assert_eq!(map.get(&k), model.get(&k).copied());
                }
                Op::LoadOrStore(k, v) => {
                    let expected = match model.get(&k) {
                        Some(&existing) => (existing, true),
                        None => {
                            model.insert(k, v);
                            (v, false)
                        }
                    };
                    prop_assert_eq!(map.load_or_store(k, v), expected);
                }
            }
        }

        prop_assert_eq!(map.len(), model.len());
        for (k, v) in &model {
            prop_assert_eq!(map.get(k), Some(*v));
        }
    }

    #[test]
    fn test_put_then_get_round_trip(key in any::<String>(), value in any::<i64>()) {
        let map = SafeMap::new();
        map.put(key.clone(), value);
        prop_assert_eq!(map.get(&key), Some(value));
    }

    #[test]
    fn test_load_or_store_hit_is_non_destructive(
        key in any::<u32>(),
        stored in any::<u32>(),
        candidate in any::<u32>(),
    ) {
        let map = SafeMap::new();
        map.put(key, stored);
        prop_assert_eq!(map.load_or_store(key, candidate), (stored, true));
        prop_assert_eq!(map.get(&key), Some(stored));
    }
}
