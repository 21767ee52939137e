use proptest::prelude::*;
use sgram_core::{CycleKind, Family, NamedCycle};
use sgram_cycle::{distance, inform, resolve, trace, trace_path, Direction};
use sgram_tables::{create_range, DEFAULT_RANGE};

fn catalog_cycles() -> Vec<NamedCycle> {
    Family::ALL
        .into_iter()
        .flat_map(|family| create_range(family, DEFAULT_RANGE).unwrap())
        .flat_map(|entry| entry.patterns().cycles().cloned().collect::<Vec<_>>())
        .collect()
}

#[test]
fn inverse_and_closure_hold_for_every_catalog_cycle() {
    for cycle in catalog_cycles() {
        for &value in cycle.sequence() {
            assert_eq!(resolve(&cycle, inform(&cycle, value).unwrap()).unwrap(), value);
            assert_eq!(inform(&cycle, resolve(&cycle, value).unwrap()).unwrap(), value);
        }
        let start = cycle.sequence()[0];
        let mut current = start;
        for _ in 0..cycle.len() {
            current = resolve(&cycle, current).unwrap();
        }
        assert_eq!(current, start, "cycle {}", cycle.label());
    }
}

#[test]
fn single_state_cycle_is_a_fixed_point() {
    let cycle = NamedCycle::new("1/1", vec![9], CycleKind::AdditionalFactor).unwrap();
    assert_eq!(resolve(&cycle, 9).unwrap(), 9);
    assert_eq!(inform(&cycle, 9).unwrap(), 9);
    assert_eq!(distance(&cycle, 9, 9).unwrap(), 0);
    assert_eq!(trace_path(&cycle, 9, 3, Direction::Backward).unwrap(), vec![9; 4]);
}

#[test]
fn absent_values_are_reported() {
    let cycle = NamedCycle::new("1/3", vec![3, 6], CycleKind::Standard).unwrap();
    let err = resolve(&cycle, 4).unwrap_err();
    assert_eq!(err.info().code, "value-not-in-cycle");
    assert_eq!(err.info().context.get("label"), Some(&"1/3".to_string()));
    assert!(inform(&cycle, 4).is_err());
    assert!(distance(&cycle, 3, 4).is_err());
    assert!(trace(&cycle, 5, 2, Direction::Forward).is_err());
}

#[test]
fn traces_restart_from_a_clone() {
    let cycle = NamedCycle::new("1/7", vec![1, 4, 2, 8, 5, 7], CycleKind::Primary).unwrap();
    let walk = trace(&cycle, 8, 4, Direction::Forward).unwrap();
    let first: Vec<u64> = walk.clone().collect();
    let second: Vec<u64> = walk.collect();
    assert_eq!(first, vec![8, 5, 7, 1, 4]);
    assert_eq!(first, second);
}

fn cycle_strategy() -> impl Strategy<Value = NamedCycle> {
    prop::collection::btree_set(0u64..500, 1..24)
        .prop_map(|states| states.into_iter().collect::<Vec<_>>())
        .prop_shuffle()
        .prop_map(|states| NamedCycle::new("1/2", states, CycleKind::Standard).unwrap())
}

proptest! {
    #[test]
    fn distance_is_additive(cycle in cycle_strategy(), a in any::<prop::sample::Index>(), b in any::<prop::sample::Index>()) {
        let len = cycle.len();
        let from = cycle.sequence()[a.index(len)];
        let to = cycle.sequence()[b.index(len)];
        let there = distance(&cycle, from, to).unwrap();
        let back = distance(&cycle, to, from).unwrap();
        prop_assert!(there < len);
        if from == to {
            prop_assert_eq!(there, 0);
        } else {
            prop_assert_eq!(there + back, len);
        }
    }

    #[test]
    fn forward_and_backward_traces_mirror(cycle in cycle_strategy(), start in any::<prop::sample::Index>(), steps in 0usize..64) {
        let state = cycle.sequence()[start.index(cycle.len())];
        let forward = trace_path(&cycle, state, steps, Direction::Forward).unwrap();
        prop_assert_eq!(forward.len(), steps + 1);
        prop_assert_eq!(forward[0], state);
        let end = *forward.last().unwrap();
        let mut backward = trace_path(&cycle, end, steps, Direction::Backward).unwrap();
        backward.reverse();
        prop_assert_eq!(forward, backward);
    }
}
