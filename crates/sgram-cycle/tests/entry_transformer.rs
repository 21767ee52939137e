use sgram_core::{Family, PatternGroup, SgramError};
use sgram_cycle::{Direction, StateTransformer};
use sgram_tables::create;

#[test]
fn quadratic_index_three_walkthrough() {
    let entry = create(Family::Quadratic, 3).unwrap();
    let transformer = StateTransformer::new(&entry);
    let primary = transformer.cycle(None).unwrap();
    assert_eq!(primary.label(), "1/7");
    assert_eq!(primary.sequence(), &[1, 4, 2, 8, 5, 7]);
    assert_eq!(transformer.resolve(1, None).unwrap(), 4);
    assert_eq!(transformer.inform(4, None).unwrap(), 1);
    assert_eq!(
        transformer.trace_path(1, 5, Direction::Forward, None).unwrap(),
        vec![1, 4, 2, 8, 5, 7]
    );
}

#[test]
fn labelled_cycles_are_selectable() {
    let entry = create(Family::Quadratic, 3).unwrap();
    let transformer = StateTransformer::new(&entry);
    assert_eq!(transformer.resolve(3, Some("1/3")).unwrap(), 6);
    assert_eq!(transformer.resolve(6, Some("1/3")).unwrap(), 3);
    assert_eq!(transformer.resolve(9, Some("1/1")).unwrap(), 9);
    assert_eq!(transformer.cycle_length(Some("1/3")).unwrap(), 2);
    assert_eq!(transformer.cycle_length(None).unwrap(), 6);
    assert_eq!(transformer.distance(1, 7, None).unwrap(), 5);
}

#[test]
fn backward_trace_walks_predecessors() {
    let entry = create(Family::Quadratic, 3).unwrap();
    let transformer = StateTransformer::new(&entry);
    let path = transformer
        .trace_path(1, 3, Direction::from_reverse(true), None)
        .unwrap();
    assert_eq!(path, vec![1, 7, 5, 8]);
}

#[test]
fn unknown_label_and_missing_state_fail() {
    let entry = create(Family::Quadratic, 3).unwrap();
    let transformer = StateTransformer::new(&entry);
    let err = transformer.resolve(1, Some("5/7")).unwrap_err();
    assert!(matches!(err, SgramError::UnknownLabel(_)));
    assert_eq!(err.info().context.get("symbol"), Some(&"s4".to_string()));
    let err = transformer.resolve(3, None).unwrap_err();
    assert!(matches!(err, SgramError::ValueNotInCycle(_)));
}

#[test]
fn entry_without_primary_reports_no_patterns() {
    let entry = create(Family::Cubic, 0).unwrap();
    let transformer = StateTransformer::new(&entry);
    let err = transformer.resolve(1, None).unwrap_err();
    assert!(matches!(err, SgramError::NoPatternsAvailable(_)));
    assert!(transformer.transitions_for(1).is_empty());
}

#[test]
fn transitions_cover_every_cycle_with_the_state() {
    let entry = create(Family::Quadratic, 4).unwrap();
    let transformer = StateTransformer::new(&entry);
    let transitions = transformer.transitions_for(4);
    let labels: Vec<_> = transitions
        .iter()
        .map(|transition| (transition.cycle.label(), transition.cycle.is_additional_factor()))
        .collect();
    assert_eq!(labels, vec![("1/4", false), ("1/4", true)]);
    assert_eq!(transitions[0].next, 8);
    assert_eq!(transitions[0].previous, 12);
    assert_eq!(transitions[1].next, 12);
}

#[test]
fn transition_table_defaults_to_primary() {
    let entry = create(Family::Quadratic, 3).unwrap();
    let table = StateTransformer::new(&entry).transition_table(None).unwrap();
    let states: Vec<u64> = table.iter().map(|row| row.state).collect();
    assert_eq!(states, vec![1, 4, 2, 8, 5, 7]);
    assert_eq!(table[3].previous, 2);
    assert_eq!(table[3].next, 5);
}

#[test]
fn cross_pattern_transition_requires_shared_state() {
    let entry = create(Family::Quadratic, 4).unwrap();
    let transformer = StateTransformer::new(&entry);
    assert_eq!(
        transformer.cross_pattern_transition(4, "1/13", "1/4").unwrap(),
        None
    );
    assert_eq!(
        transformer.cross_pattern_transition(8, "1/4", "1/2").unwrap(),
        Some(8)
    );
    assert!(transformer
        .cross_pattern_transition(8, "1/4", "9/13")
        .is_err());
}

#[test]
fn additional_factor_sharing_a_label_is_reachable_by_group() {
    let entry = create(Family::Quadratic, 4).unwrap();
    let any = StateTransformer::new(&entry);
    assert_eq!(any.cycle(Some("1/4")).unwrap().sequence(), &[4, 8, 12]);
    assert_eq!(any.resolve(4, Some("1/4")).unwrap(), 8);

    let factors = any.in_group(PatternGroup::Additional);
    let cycle = factors.cycle(Some("1/4")).unwrap();
    assert!(cycle.is_additional_factor());
    assert_eq!(cycle.sequence(), &[4, 12]);
    assert_eq!(factors.resolve(4, Some("1/4")).unwrap(), 12);
    assert_eq!(factors.inform(4, Some("1/4")).unwrap(), 12);
    assert_eq!(factors.cycle(None).unwrap().label(), "1/13");

    let err = factors.cycle(Some("1/13")).unwrap_err();
    assert!(matches!(err, SgramError::UnknownLabel(_)));
    assert_eq!(err.info().coordinate("group"), Some("additional"));
    let standard = any.in_group(PatternGroup::Standard);
    assert!(standard.cycle(Some("1/2")).is_err());
}
