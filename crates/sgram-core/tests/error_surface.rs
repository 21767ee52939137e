use sgram_core::errors::{ErrorInfo, SgramError};
use sgram_core::Family;

#[test]
fn index_out_of_range_surface() {
    let err = SgramError::index_out_of_range("2d", 21, 20);
    assert_eq!(err.info().code, "index-out-of-range");
    assert_eq!(err.info().context.get("index"), Some(&"21".to_string()));
    assert_eq!(err.info().context.get("max_index"), Some(&"20".to_string()));
}

#[test]
fn value_not_in_cycle_surface() {
    let err = SgramError::value_not_in_cycle("1/7", 3);
    assert!(matches!(err, SgramError::ValueNotInCycle(_)));
    assert_eq!(err.info().context.get("label"), Some(&"1/7".to_string()));
    assert_eq!(err.info().context.get("state"), Some(&"3".to_string()));
}

#[test]
fn context_can_be_appended() {
    let err = SgramError::unknown_label("9/9").with_context("symbol", "s4");
    assert!(matches!(err, SgramError::UnknownLabel(_)));
    assert_eq!(err.info().context.get("symbol"), Some(&"s4".to_string()));
}

#[test]
fn display_includes_context_and_hint() {
    let err = SgramError::Config(
        ErrorInfo::new("bad-config", "unreadable")
            .with_context("path", "cfg.yaml")
            .with_hint("check the file"),
    );
    let rendered = err.to_string();
    assert!(rendered.starts_with("config error: unreadable (code: bad-config)"));
    assert!(rendered.contains("path=cfg.yaml"));
    assert!(rendered.ends_with("hint: check the file"));
}

#[test]
fn coordinates_render_in_key_order() {
    let err = SgramError::index_out_of_range("3d", 21, 20);
    assert_eq!(err.code(), "index-out-of-range");
    assert_eq!(err.info().coordinate("index"), Some("21"));
    assert_eq!(err.info().coordinate("label"), None);
    assert_eq!(
        err.to_string(),
        "index out of range: index 21 exceeds supported range (0-20) \
         (code: index-out-of-range) [family=3d, index=21, max_index=20]"
    );
    let bare = ErrorInfo::new("no-patterns", "nothing here");
    assert_eq!(bare.to_string(), "nothing here (code: no-patterns)");
}

#[test]
fn errors_round_trip_json() {
    let err = SgramError::no_patterns().with_context("symbol", "n3_0");
    let json = serde_json::to_string(&err).expect("serialize");
    let decoded: SgramError = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(decoded, err);
}

#[test]
fn family_keys_parse() {
    for family in Family::ALL {
        assert_eq!(family.key().parse::<Family>().unwrap(), family);
    }
    assert_eq!("3D".parse::<Family>().unwrap(), Family::UnlabeledTrees);
    let err = "4th".parse::<Family>().unwrap_err();
    assert_eq!(err.info().code, "unknown-family");
}

#[test]
fn family_domains() {
    assert_eq!(Family::Cubic.max_index(), 11);
    assert_eq!(Family::RootedTrees.max_index(), 20);
    assert!(Family::Linear.check_index(11).is_ok());
    assert!(matches!(
        Family::Quadratic.check_index(12),
        Err(SgramError::IndexOutOfRange(_))
    ));
    assert!(Family::UnlabeledTrees.check_index(20).is_ok());
}
