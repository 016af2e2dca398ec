use std::fs;
use tixdesk::config::{Config, migrate};
use tixdesk::errors::AppError;

#[test]
fn missing_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = Config::load_from(&dir.path().join("none.conf")).unwrap();
    assert_eq!(cfg.unverify_milestone_days, vec![1, 3, 7]);
    assert_eq!(cfg.daily_reset_hour, 0);
    assert_eq!(cfg.zerohero.api_key_env, "ZEROHERO_API_KEY");
    assert_eq!(cfg.zerohero.timeout_seconds, 15);
}

#[test]
fn partial_file_fills_serde_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tixdesk.conf");
    fs::write(
        &path,
        "database: /tmp/x.sqlite\nuser: desk1\nzerohero:\n  base_url: https://zh.test\n",
    )
    .unwrap();

    let cfg = Config::load_from(&path).unwrap();
    assert_eq!(cfg.user, "desk1");
    assert_eq!(cfg.zerohero.base_url, "https://zh.test");
    assert_eq!(cfg.zerohero.timeout_seconds, 15);
    assert!(cfg.feed_dir.is_none());
}

#[test]
fn out_of_range_reset_hour_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tixdesk.conf");
    fs::write(&path, "database: x.sqlite\ndaily_reset_hour: 24\n").unwrap();
    assert!(matches!(Config::load_from(&path), Err(AppError::Config(_))));
}

#[test]
fn migrate_adds_only_missing_keys() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tixdesk.conf");
    fs::write(
        &path,
        "database: /tmp/x.sqlite\nuser: desk1\nzerohero:\n  base_url: https://zh.test\n",
    )
    .unwrap();

    let missing = migrate::missing_keys(&path).unwrap();
    assert!(missing.contains(&"daily_reset_hour".to_string()));
    assert!(missing.contains(&"zerohero.timeout_seconds".to_string()));
    assert!(!missing.contains(&"user".to_string()));

    let added = migrate::fill_missing_keys(&path).unwrap();
    assert_eq!(added, missing);
    assert!(migrate::missing_keys(&path).unwrap().is_empty());

    let cfg = Config::load_from(&path).unwrap();
    assert_eq!(cfg.user, "desk1");
    assert_eq!(cfg.zerohero.base_url, "https://zh.test");
}

#[test]
fn api_key_comes_from_config_before_environment() {
    let mut cfg = Config::default();
    cfg.zerohero.api_key_env = "TIXDESK_TEST_KEY_THAT_IS_NOT_SET".into();
    assert_eq!(cfg.zerohero.resolve_api_key(), None);

    cfg.zerohero.api_key = Some("abc".into());
    assert_eq!(cfg.zerohero.resolve_api_key().as_deref(), Some("abc"));
}
