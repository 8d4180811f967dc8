//! Format controller integration tests

use recfmt_resolver::prelude::*;
use serde_json::{Value, json};

fn scenario() -> Value {
    json!([{"f": 1, "s": [{"n": "id"}], "d": [{"f": 2, "s": [{"n": "x"}]}, {"f": 1}]}])
}

/// Table of partners whose rows nest an address table, declared once and referenced later.
fn partners() -> Value {
    json!([
        {
            "f": 10,
            "s": [{"n": "id"}, {"n": "name"}, {"n": "addresses"}],
            "d": [
                [7, "Acme", {"f": 20, "s": [{"n": "street"}, {"n": "city"}], "d": [["Main St", "Oslo"]]}],
                [8, "Globex", {"f": 20, "d": [["Elm St", "Bergen"]]}]
            ]
        },
        {"f": 10, "d": [[9, "Initech", {"f": 20, "d": []}]]},
        {"f": 30, "s": [{"n": "total"}], "d": [[3]]}
    ])
}

#[test]
fn test_concrete_scenario() {
    let payload = scenario();
    let mut controller = FormatController::new(&payload);

    assert_eq!(controller.get_format(1).expect("format 1"), &[json!({"n": "id"})]);
    assert_eq!(controller.get_format(2).expect("format 2"), &[json!({"n": "x"})]);

    let error = controller.get_format(3).expect_err("format 3 is absent");
    assert!(error.is_not_found());
    assert_eq!(error.kind(), ErrorKind::Lookup);
}

#[test]
fn test_second_lookup_is_served_from_cache() {
    let payload = partners();
    let mut controller = FormatController::new(&payload);

    let first = controller.get_format_copy(20).expect("format 20");
    let nodes_after_first = controller.traversal_stats().expect("engine").nodes();

    let second = controller.get_format_copy(20).expect("format 20 again");
    assert_eq!(first, second);
    assert_eq!(controller.traversal_stats().expect("engine").nodes(), nodes_after_first);

    let stats = controller.cache().stats().snapshot();
    assert_eq!(stats.misses, 1);
    assert_eq!(stats.hits, 1);
}

#[test]
fn test_first_declaration_wins() {
    let payload = json!([
        {"f": 4, "d": [{"f": 5, "s": ["inner"]}]},
        {"f": 5, "s": ["outer-later"]},
        {"f": 5, "s": ["last"], "d": [{"f": 5, "s": ["deepest"]}]}
    ]);
    let mut controller = FormatController::new(&payload);

    assert_eq!(controller.get_format(5).expect("format 5"), &[json!("inner")]);

    controller.scan_formats().expect("scan");
    assert_eq!(controller.get_format(5).expect("format 5"), &[json!("inner")]);
    assert_eq!(controller.cache().stats().snapshot().duplicates_skipped, 3);
}

#[test]
fn test_absent_id_fails_after_successful_lookups() {
    let payload = partners();
    let mut controller = FormatController::new(&payload);

    for id in [10, 20, 30, 10, 20] {
        controller.get_format(id).expect("declared format");
    }
    for _ in 0..3 {
        assert!(matches!(
            controller.get_format(99),
            Err(FormatError::FormatNotFound { id: 99 })
        ));
    }
    assert!(controller.is_exhausted());
}

#[test]
fn test_reference_only_id_is_not_found() {
    let payload = json!([{"f": 6, "d": [{"f": 6}]}]);
    let mut controller = FormatController::new(&payload);
    assert!(controller.get_format(6).expect_err("never declared").is_not_found());
}

#[test]
fn test_copy_is_independent() {
    let payload = scenario();
    let mut controller = FormatController::new(&payload);

    let mut copy = controller.get_format_copy(1).expect("format 1");
    copy.push(json!({"n": "injected"}));
    copy[0] = json!({"n": "renamed"});

    assert_eq!(controller.get_format(1).expect("format 1"), &[json!({"n": "id"})]);
}

#[test]
fn test_scan_then_lookup_does_no_traversal() {
    let payload = partners();
    let mut controller = FormatController::new(&payload);

    assert_eq!(controller.scan_formats().expect("scan"), 3);
    assert!(controller.is_exhausted());
    let nodes = controller.traversal_stats().expect("engine").nodes();

    for id in [10, 20, 30] {
        controller.get_format(id).expect("scanned format");
    }
    assert_eq!(controller.traversal_stats().expect("engine").nodes(), nodes);
    assert_eq!(controller.cache().stats().snapshot().misses, 0);
}

#[test]
fn test_resumed_lookup_matches_fresh_lookup() {
    let payload = partners();

    let mut resumed = FormatController::new(&payload);
    resumed.get_format(10).expect("format 10");
    let via_resume = resumed.get_format_copy(30).expect("format 30");

    let mut fresh = FormatController::new(&payload);
    let direct = fresh.get_format_copy(30).expect("format 30");

    assert_eq!(via_resume, direct);
    assert_eq!(resumed.cache().ids(), fresh.cache().ids());
}

#[test]
fn test_lookup_pauses_at_target() {
    let payload = partners();
    let mut controller = FormatController::new(&payload);

    controller.get_format(10).expect("format 10");
    assert!(!controller.is_exhausted());
    assert_eq!(controller.cache().ids(), vec![10]);

    controller.get_format(20).expect("format 20");
    assert_eq!(controller.cache().ids(), vec![10, 20]);
}

#[test]
fn test_set_original_seeds_and_overwrites() {
    let payload = scenario();
    let mut controller = FormatController::new(&payload);

    let seeded = vec![json!({"n": "seeded"})];
    controller.set_original(42, seeded.as_slice());
    assert_eq!(controller.get_format(42).expect("seeded"), seeded.as_slice());
    assert!(controller.traversal_stats().is_none());

    controller.get_format(1).expect("format 1");
    controller.set_original(1, vec![json!({"n": "override"})]);
    assert_eq!(controller.get_format(1).expect("format 1"), &[json!({"n": "override"})]);
    assert_eq!(controller.cache().stats().snapshot().overwrites, 1);
}

#[test]
fn test_seeded_id_shadows_payload_declaration() {
    let payload = scenario();
    let mut controller = FormatController::new(&payload);

    controller.set_original(2, vec![json!("seed")]);
    controller.scan_formats().expect("scan");
    assert_eq!(controller.get_format(2).expect("format 2"), &[json!("seed")]);
}

#[test]
fn test_scan_payload_merges_into_cache() {
    let bound = scenario();
    let other = json!([{"f": 2, "s": ["other"]}, {"f": 3, "s": ["three"]}]);
    let mut controller = FormatController::new(&bound);

    controller.get_format(2).expect("format 2");
    assert_eq!(controller.scan_payload(&other).expect("scan other"), 3);

    assert_eq!(controller.get_format(2).expect("format 2"), &[json!({"n": "x"})]);
    assert_eq!(controller.get_format(3).expect("format 3"), &[json!("three")]);
}

#[test]
fn test_data_returns_bound_root() {
    let payload = scenario();
    let controller = FormatController::new(&payload);
    assert!(std::ptr::eq(controller.data(), &payload));
}

#[test]
fn test_depth_limit_from_config() {
    let payload = json!([[[[[{"f": 1, "s": []}]]]]]);
    let config = ResolverConfig::default().with_traversal_depth_limit(Some(4));
    let mut controller = FormatController::with_config(&payload, config).expect("controller");

    let error = controller.get_format(1).expect_err("too deep");
    assert_eq!(error.kind(), ErrorKind::Limit);
    assert!(controller.scan_formats().is_err());
}

#[test]
fn test_eager_strict_config_fails_fast_on_deep_payload() {
    let mut payload = json!({"f": 1, "s": []});
    for _ in 0..100 {
        payload = json!([payload]);
    }
    let result = FormatController::with_config(&payload, ResolverConfig::strict());
    assert!(matches!(result, Err(FormatError::DepthLimitExceeded { limit: 64, .. })));

    let mut controller = FormatController::new(&payload);
    assert_eq!(controller.get_format(1).expect("no default limit"), &[] as &[Value]);
}

#[test]
fn test_deeply_nested_payload_resolves_by_default() {
    let mut payload = json!({"f": 1, "s": ["deep"]});
    for _ in 0..600 {
        payload = json!([payload]);
    }
    let mut controller = FormatController::new(&payload);

    assert_eq!(controller.get_format(1).expect("format 1"), &[json!("deep")]);
    assert_eq!(controller.traversal_stats().expect("engine").nodes(), 601);
    assert_eq!(controller.scan_formats().expect("scan"), 1);
}
