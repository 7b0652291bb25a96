//! # Derivation Tier Tests (T0-T3)
//!
//! Every tier runs against a target that implements ONLY the traversal
//! primitive, so each result comes from the derived default methods.
//!
//! ## Tiers
//! - T0: Traversal Fidelity
//! - T1: Predicates & Search
//! - T2: Transformation & Reduction
//! - T3: Ordering & Grouping

use enumerable_core::{By, ByKey, Enumerable, EnumerableError, Natural, Step};

/// Index-ordered words; implements only `for_each_entry`.
struct Words(Vec<&'static str>);

impl Enumerable for Words {
    type Value = &'static str;
    type Key = usize;

    fn for_each_entry<F>(&self, mut visit: F) -> Result<(), EnumerableError>
    where
        F: FnMut(&&'static str, &usize) -> Step,
    {
        for (index, word) in self.0.iter().enumerate() {
            if visit(word, &index).is_stop() {
                break;
            }
        }
        Ok(())
    }
}

fn numbers() -> Words {
    Words(vec!["zero", "one", "two", "three", "four", "five"])
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter("enumerable_core=debug")
        .try_init();
}

// =============================================================================
// TIER T0: TRAVERSAL FIDELITY
// =============================================================================

mod t0_traversal_fidelity {
    use super::*;

    /// T0.1: to_vec reproduces traversal order.
    #[test]
    fn to_vec_preserves_order() {
        assert_eq!(
            numbers().to_vec().expect("to_vec"),
            vec!["zero", "one", "two", "three", "four", "five"]
        );
    }

    /// T0.2: size counts every element.
    #[test]
    fn size_counts_elements() {
        assert_eq!(numbers().size().expect("size"), 6);
        assert_eq!(Words(vec![]).size().expect("size"), 0);
    }

    /// T0.3: first / last / tail.
    #[test]
    fn first_last_tail() {
        let target = numbers();
        assert_eq!(target.first().expect("first"), Some("zero"));
        assert_eq!(target.last().expect("last"), Some("five"));
        assert_eq!(
            target.tail().expect("tail"),
            vec!["one", "two", "three", "four", "five"]
        );
    }

    /// T0.4: entries pair keys with values.
    #[test]
    fn entries_pair_keys() {
        let pairs = Words(vec!["a", "b"]).entries().expect("entries");
        assert_eq!(pairs, vec![(0, "a"), (1, "b")]);
    }

    /// T0.5: an absent target fails instead of looking empty.
    #[test]
    fn absent_target_fails() {
        init_tracing();
        let missing: Option<Words> = None;
        assert_eq!(missing.size(), Err(EnumerableError::MissingTarget));
        assert_eq!(missing.first(), Err(EnumerableError::MissingTarget));
        assert_eq!(
            missing.every(|_, _, _| true),
            Err(EnumerableError::MissingTarget)
        );
    }
}

// =============================================================================
// TIER T1: PREDICATES & SEARCH
// =============================================================================

mod t1_predicates_and_search {
    use super::*;

    /// T1.1: every holds trivially, fails on the first key.
    #[test]
    fn every_scenario() {
        let target = numbers();
        assert!(target.every(|_, _, _| true).expect("every"));
        assert!(!target.every(|_, k, _| *k > 0).expect("every"));
    }

    /// T1.2: some finds a match anywhere.
    #[test]
    fn some_scenario() {
        let target = numbers();
        assert!(target.some(|v, _, _| v.starts_with('t')).expect("some"));
        assert!(!target.some(|v, _, _| v.is_empty()).expect("some"));
    }

    /// T1.3: contains uses equality.
    #[test]
    fn contains_scenario() {
        let target = numbers();
        assert!(target.contains(&"three").expect("contains"));
        assert!(!target.contains(&"six").expect("contains"));
    }

    /// T1.4: find / find_last.
    #[test]
    fn find_scenario() {
        let target = numbers();
        assert_eq!(
            target.find(|v, _, _| v.len() == 4).expect("find"),
            Some("zero")
        );
        assert_eq!(
            target.find_last(|v, _, _| v.len() == 4).expect("find_last"),
            Some("five")
        );
        assert_eq!(target.find(|v, _, _| v.len() == 9).expect("find"), None);
    }

    /// T1.5: index_of / last_index_of.
    #[test]
    fn index_scenario() {
        let target = Words(vec!["a", "b", "a", "c"]);
        assert_eq!(target.index_of(&"a").expect("index_of"), Some(0));
        assert_eq!(target.last_index_of(&"a").expect("last_index_of"), Some(2));
        assert_eq!(target.index_of(&"z").expect("index_of"), None);
    }
}

// =============================================================================
// TIER T2: TRANSFORMATION & REDUCTION
// =============================================================================

mod t2_transformation_and_reduction {
    use super::*;

    /// T2.1: filter keeps even keys.
    #[test]
    fn filter_scenario() {
        assert_eq!(
            numbers().filter(|_, k, _| k % 2 == 0).expect("filter"),
            vec!["zero", "two", "four"]
        );
    }

    /// T2.2: reject keeps the complement.
    #[test]
    fn reject_scenario() {
        assert_eq!(
            numbers().reject(|_, k, _| k % 2 == 0).expect("reject"),
            vec!["one", "three", "five"]
        );
    }

    /// T2.3: map upper-cases every element.
    #[test]
    fn map_scenario() {
        assert_eq!(
            numbers().map(|v, _, _| v.to_uppercase()).expect("map"),
            vec!["ZERO", "ONE", "TWO", "THREE", "FOUR", "FIVE"]
        );
    }

    /// T2.4: reduce_from concatenates from an empty string.
    #[test]
    fn reduce_from_scenario() {
        let joined = numbers()
            .reduce_from(String::new(), |mut acc, v, _, _| {
                acc.push_str(v);
                acc
            })
            .expect("reduce_from");
        assert_eq!(joined, "zeroonetwothreefourfive");
    }

    /// T2.5: reduce without a seed fails on an empty target.
    #[test]
    fn reduce_empty_fails() {
        init_tracing();
        let empty = Words(vec![]);
        assert_eq!(
            empty.reduce(|acc, _, _, _| acc),
            Err(EnumerableError::EmptyReduce)
        );
    }

    /// T2.6: reduce_right is not available.
    #[test]
    fn reduce_right_not_implemented() {
        let result = numbers().reduce_right(|acc, _, _, _| acc);
        assert!(matches!(
            result,
            Err(EnumerableError::NotImplemented("reduce_right"))
        ));
    }

    /// T2.7: each_slice chunks in order.
    #[test]
    fn each_slice_scenario() {
        assert_eq!(
            numbers().each_slice(4).expect("each_slice"),
            vec![
                vec!["zero", "one", "two", "three"],
                vec!["four", "five"]
            ]
        );
    }
}

// =============================================================================
// TIER T3: ORDERING & GROUPING
// =============================================================================

mod t3_ordering_and_grouping {
    use super::*;

    /// T3.1: natural order is lexicographic for strings.
    #[test]
    fn natural_extremes() {
        let target = numbers();
        assert_eq!(target.max_by(Natural).expect("max"), Some("zero"));
        assert_eq!(target.min_by(Natural).expect("min"), Some("five"));
        assert_eq!(
            target.range_by(Natural).expect("range"),
            Some(("five", "zero"))
        );
    }

    /// T3.2: key extractor picks the first longest / shortest word.
    #[test]
    fn key_extremes() {
        let target = numbers();
        let by_len = ByKey(|w: &&str| w.len());
        assert_eq!(target.max_by(&by_len).expect("max"), Some("three"));
        assert_eq!(target.min_by(&by_len).expect("min"), Some("one"));
        assert_eq!(
            target.range_by(&by_len).expect("range"),
            Some(("one", "three"))
        );
    }

    /// T3.3: comparator order is used as given.
    #[test]
    fn comparator_extremes() {
        let target = numbers();
        let reverse = By(|a: &&str, b: &&str| b.cmp(a));
        assert_eq!(target.max_by(&reverse).expect("max"), Some("five"));
        assert_eq!(target.min_by(&reverse).expect("min"), Some("zero"));
    }

    /// T3.4: group_by partitions by word length in first-seen order.
    #[test]
    fn group_by_length() {
        let groups = numbers()
            .group_by(|v, _, _| v.len())
            .expect("group_by");

        let keys: Vec<_> = groups.keys().copied().collect();
        assert_eq!(keys, vec![4, 3, 5]);
        assert_eq!(groups.get(&4), Some(&["zero", "four", "five"][..]));
        assert_eq!(groups.get(&3), Some(&["one", "two"][..]));
        assert_eq!(groups.get(&5), Some(&["three"][..]));
    }

    /// T3.5: groups serialize in first-seen order.
    #[test]
    fn group_by_serializes() {
        let groups = numbers()
            .group_by(|_, k, _| if k % 2 == 0 { "even" } else { "odd" })
            .expect("group_by");
        let json = serde_json::to_value(&groups).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({
                "even": ["zero", "two", "four"],
                "odd": ["one", "three", "five"],
            })
        );
    }
}
