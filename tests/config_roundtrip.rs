// Tests for configuration defaults, persistence, and error classification.
use dossier::config::Config;
use dossier::context::{AppContext, TestContext};
use dossier::model::SortOrder;
use std::fs;
use std::path::PathBuf;

#[test]
fn test_defaults_are_usable_without_a_file() {
    let cfg = Config::default();
    assert!(cfg.snapshot_path.is_none());
    assert_eq!(cfg.default_order, SortOrder::Desc);
    assert_eq!(cfg.date_format, "%d %b. %Y");
    assert!(cfg.subject_labels.is_empty());
}

#[test]
fn test_missing_file_is_classified_as_missing() {
    let ctx = TestContext::new();

    let err = Config::load(&ctx).unwrap_err();
    assert!(Config::is_missing_config_error(&err));
}

#[test]
fn test_save_then_load_roundtrip() {
    let ctx = TestContext::new();

    let mut cfg = Config::default();
    cfg.snapshot_path = Some("/srv/dossier/procedures.json".to_string());
    cfg.default_order = SortOrder::Asc;
    cfg.subject_labels
        .insert("3".to_string(), "Policy areas".to_string());
    cfg.save(&ctx).unwrap();

    let loaded = Config::load(&ctx).unwrap();
    assert_eq!(
        loaded.snapshot_path.as_deref(),
        Some("/srv/dossier/procedures.json")
    );
    assert_eq!(loaded.default_order, SortOrder::Asc);
    assert_eq!(loaded.subject_labels.get("3").unwrap(), "Policy areas");
    assert_eq!(loaded.date_format, "%d %b. %Y");
}

#[test]
fn test_partial_file_falls_back_to_defaults_per_field() {
    let ctx = TestContext::new();
    let path = ctx.get_config_file_path().unwrap();
    fs::write(&path, "default_order = \"asc\"\n").unwrap();

    let cfg = Config::load(&ctx).unwrap();
    assert_eq!(cfg.default_order, SortOrder::Asc);
    // Everything omitted keeps its default.
    assert!(cfg.snapshot_path.is_none());
    assert_eq!(cfg.date_format, "%d %b. %Y");
}

#[test]
fn test_malformed_file_is_not_classified_as_missing() {
    let ctx = TestContext::new();
    let path = ctx.get_config_file_path().unwrap();
    fs::write(&path, "default_order = [broken\n").unwrap();

    let err = Config::load(&ctx).unwrap_err();
    assert!(!Config::is_missing_config_error(&err));
}

#[test]
fn test_snapshot_path_prefers_the_configured_override() {
    let ctx = TestContext::new();

    let mut cfg = Config::default();
    assert_eq!(
        cfg.resolve_snapshot_path(&ctx),
        ctx.get_snapshot_path(),
        "without an override the context default applies"
    );

    cfg.snapshot_path = Some("/tmp/other.json".to_string());
    assert_eq!(
        cfg.resolve_snapshot_path(&ctx),
        Some(PathBuf::from("/tmp/other.json"))
    );
}
