use sgram_core::{CycleKind, PatternSet, SgramError};

fn sample() -> PatternSet {
    PatternSet::builder()
        .pattern("1/13", vec![1, 5, 3, 15, 11, 13])
        .unwrap()
        .pattern("2/13", vec![2, 10, 7, 14, 6, 9])
        .unwrap()
        .pattern("1/4", vec![4, 8, 12])
        .unwrap()
        .factor("1/4", vec![4, 12])
        .unwrap()
        .factor("1/1", vec![16])
        .unwrap()
        .build()
}

#[test]
fn first_pattern_is_primary() {
    let set = sample();
    let primary = set.primary().expect("primary");
    assert_eq!(primary.label(), "1/13");
    assert_eq!(primary.kind(), CycleKind::Primary);
    assert_eq!(set.primary_label(), Some("1/13"));
    let kinds: Vec<_> = set.standard().map(|cycle| cycle.kind()).collect();
    assert_eq!(
        kinds,
        vec![CycleKind::Primary, CycleKind::Standard, CycleKind::Standard]
    );
}

#[test]
fn shared_label_prefers_fraction_pattern() {
    let set = sample();
    assert_eq!(set.get("1/4").unwrap().sequence(), &[4, 8, 12]);
    assert_eq!(set.get_additional("1/4").unwrap().sequence(), &[4, 12]);
    assert_eq!(set.get("1/1").unwrap().sequence(), &[16]);
    assert_eq!(set.len(), 5);
}

#[test]
fn select_defaults_to_primary() {
    let set = sample();
    assert_eq!(set.select(None).unwrap().label(), "1/13");
    assert_eq!(set.select(Some("2/13")).unwrap().len(), 6);
    assert!(matches!(
        set.select(Some("3/13")),
        Err(SgramError::UnknownLabel(_))
    ));
}

#[test]
fn empty_set_has_no_primary() {
    let set = PatternSet::builder().factor("1/1", vec![9]).unwrap().build();
    assert!(set.primary().is_none());
    assert!(matches!(
        set.select(None),
        Err(SgramError::NoPatternsAvailable(_))
    ));
}

#[test]
fn duplicate_states_fail_fast() {
    let err = PatternSet::builder()
        .pattern("1/7", vec![1, 4, 2, 4])
        .unwrap_err();
    assert!(matches!(err, SgramError::InvalidCycle(_)));
    assert_eq!(err.info().context.get("state"), Some(&"4".to_string()));
}

#[test]
fn empty_and_duplicate_labels_fail_fast() {
    assert!(matches!(
        PatternSet::builder().pattern("1/2", Vec::new()),
        Err(SgramError::InvalidCycle(_))
    ));
    let err = PatternSet::builder()
        .factor("1/1", vec![4])
        .unwrap()
        .factor("1/1", vec![9])
        .unwrap_err();
    assert!(matches!(err, SgramError::InvalidCycle(_)));
}

#[test]
fn all_states_is_union() {
    let states: Vec<u64> = sample().all_states().into_iter().collect();
    assert_eq!(
        states,
        vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16]
    );
}
