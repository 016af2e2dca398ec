use predicates::str::contains;
use serde_json::Value;
use std::fs;

mod common;
use common::TestEnv;

#[test]
fn export_csv_writes_category_and_section_rows() {
    let env = TestEnv::new();
    env.init().write_sample_feed();
    let out = env.root.path().join("recon.csv");

    env.tix()
        .args(["export", "--format", "csv", "--file", out.to_str().unwrap()])
        .args(["--feed-dir", &env.feed_arg()])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let text = fs::read_to_string(&out).unwrap();
    let mut lines = text.lines();
    assert_eq!(
        lines.next().unwrap(),
        "event_id,event,category,section,inventory,sold,unfilled,differential"
    );
    assert!(text.contains("E1,Summer Fest,GA,,5,5,3,2"));
    assert!(text.contains("E1,Summer Fest,CONCERN,,2,0,0,"));
    assert!(text.contains("E1,Summer Fest,UNCATEGORIZED,Balcony,3,0,0,"));
    assert!(text.contains("2,Winter Gala,SHUTTLE,,6,0,0,6"));
}

#[test]
fn export_json_honours_event_filter() {
    let env = TestEnv::new();
    env.init().write_sample_feed();
    let out = env.root.path().join("recon.json");

    env.tix()
        .args(["export", "--format", "json", "--file", out.to_str().unwrap()])
        .args(["--feed-dir", &env.feed_arg(), "--event", "2"])
        .assert()
        .success();

    let rows: Value = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    let rows = rows.as_array().unwrap();
    assert!(rows.iter().all(|r| r["event_id"] == "2"));
    let shuttle = rows.iter().find(|r| r["category"] == "SHUTTLE").unwrap();
    assert_eq!(shuttle["inventory"], 6);
    assert_eq!(shuttle["differential"], 6);
    let concern = rows.iter().find(|r| r["category"] == "CONCERN").unwrap();
    assert!(concern["differential"].is_null());
}

#[test]
fn existing_file_needs_confirmation_or_force() {
    let env = TestEnv::new();
    env.init().write_sample_feed();
    let out = env.root.path().join("keep.csv");
    fs::write(&out, "keep me").unwrap();
    let file = out.to_str().unwrap().to_string();

    env.tix()
        .args(["export", "--file", &file, "--feed-dir", &env.feed_arg()])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("Export cancelled"));
    assert_eq!(fs::read_to_string(&out).unwrap(), "keep me");

    env.tix()
        .args(["export", "--file", &file, "--feed-dir", &env.feed_arg(), "--force"])
        .assert()
        .success();
    assert!(fs::read_to_string(&out).unwrap().starts_with("event_id,"));
}

#[test]
fn relative_export_path_is_rejected() {
    let env = TestEnv::new();
    env.init().write_sample_feed();

    env.tix()
        .args(["export", "--file", "recon.csv", "--feed-dir", &env.feed_arg()])
        .assert()
        .failure()
        .stderr(contains("must be absolute"));
}

#[test]
fn export_is_logged() {
    let env = TestEnv::new();
    env.init().write_sample_feed();
    let out = env.root.path().join("logged.csv");

    env.tix()
        .args(["export", "--file", out.to_str().unwrap(), "--feed-dir", &env.feed_arg()])
        .assert()
        .success();
    env.tix()
        .args(["log", "--print"])
        .assert()
        .success()
        .stdout(contains("export"));
}
