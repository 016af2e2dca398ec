use chrono::{Duration, Local};
use tixdesk::core::checklist::ChecklistLogic;
use tixdesk::core::listing::{ListingLogic, apply_desk_tags};
use tixdesk::core::overrides::OverrideLogic;
use tixdesk::db::log::load_log;
use tixdesk::db::migrate::{known_versions, pending_migrations, run_pending_migrations};
use tixdesk::db::pool::DbPool;
use tixdesk::db::{checklist, listings, overrides};
use tixdesk::errors::AppError;
use tixdesk::models::{Category, ChecklistKind, InventoryRecord, ResetSchedule};

fn pool() -> DbPool {
    DbPool::in_memory().expect("in-memory db")
}

#[test]
fn migrations_are_recorded_once() {
    let pool = pool();
    assert!(pending_migrations(&pool.conn).unwrap().is_empty());
    assert!(run_pending_migrations(&pool.conn).unwrap().is_empty());

    let applied = load_log(&pool.conn)
        .unwrap()
        .into_iter()
        .filter(|r| r.operation == "migration_applied")
        .count();
    assert_eq!(applied, known_versions().len());
}

#[test]
fn overrides_are_per_user_and_upserted() {
    let pool = pool();
    let conn = &pool.conn;

    OverrideLogic::set(conn, "alice", " Club 100 ", "vip").unwrap();
    OverrideLogic::set(conn, "alice", "Club 100", "GA+").unwrap();
    OverrideLogic::set(conn, "bob", "Club 100", "shuttle").unwrap();

    let alice = overrides::load_manual_overrides(conn, "alice").unwrap();
    assert_eq!(alice.len(), 1);
    assert_eq!(alice.get("Club 100"), Some(Category::GaPlus));

    let bob = overrides::list_overrides(conn, "bob").unwrap();
    assert_eq!(bob[0].category, Category::Shuttle);
}

#[test]
fn override_errors() {
    let pool = pool();
    let conn = &pool.conn;

    assert!(matches!(
        OverrideLogic::set(conn, "alice", "Balcony", "platinum"),
        Err(AppError::InvalidCategory(_))
    ));
    assert!(matches!(
        OverrideLogic::delete(conn, "alice", "Balcony"),
        Err(AppError::UnknownOverride(_))
    ));
}

#[test]
fn listing_flags_round_trip() {
    let pool = pool();
    let conn = &pool.conn;

    let empty = listings::get_flags(conn, "alice", "L1").unwrap();
    assert!(!empty.autopriced);
    assert!(empty.tags.is_empty());

    ListingLogic::set_autopriced(conn, "alice", "L1", true).unwrap();
    ListingLogic::tag(conn, "alice", "L1", &["concern".into(), " ".into()]).unwrap();
    let tags = ListingLogic::tag(conn, "alice", "L1", &["CONCERN".into(), "vip-row".into()]).unwrap();
    assert_eq!(tags, vec!["concern".to_string(), "vip-row".to_string()]);

    let flags = ListingLogic::show(conn, "alice", "L1").unwrap();
    assert!(flags.autopriced);
    assert_eq!(flags.tags.len(), 2);

    ListingLogic::untag(conn, "alice", "L1").unwrap();
    assert!(ListingLogic::show(conn, "alice", "L1").unwrap().tags.is_empty());
    assert_eq!(ListingLogic::list(conn, "alice").unwrap().len(), 1);
    assert!(ListingLogic::list(conn, "bob").unwrap().is_empty());
}

#[test]
fn desk_tags_are_merged_into_inventory() {
    let pool = pool();
    let conn = &pool.conn;
    ListingLogic::tag(conn, "alice", "L2", &["presale".into()]).unwrap();

    let mut inventory = vec![
        InventoryRecord::new("L1", "GA", 2, &[]),
        InventoryRecord::new("L2", "GA", 3, &["Presale", "delivered"]),
        InventoryRecord::new("L3", "GA", 1, &[]),
    ];
    ListingLogic::tag(conn, "alice", "L3", &["concern".into()]).unwrap();

    apply_desk_tags(&mut inventory, &listings::list_flags(conn, "alice").unwrap());

    assert!(inventory[0].tags.is_empty());
    assert_eq!(inventory[1].tags, vec!["Presale", "delivered"]);
    assert_eq!(inventory[2].tags, vec!["concern"]);
}

#[test]
fn checklist_lifecycle() {
    let pool = pool();
    let conn = &pool.conn;
    let now = Local::now();

    let item = ChecklistLogic::add(
        conn,
        "alice",
        ChecklistKind::Tagging,
        "E1",
        ResetSchedule::Daily { reset_hour: 0 },
        vec![9],
        now,
    )
    .unwrap();
    assert!(item.state.next_milestone_days.is_empty());

    let checked = ChecklistLogic::check(conn, "alice", ChecklistKind::Tagging, "E1", now).unwrap();
    assert!(checked.state.checked);
    let stored = checklist::get_item(conn, "alice", ChecklistKind::Tagging, "E1").unwrap();
    assert_eq!(stored.state, checked.state);

    ChecklistLogic::uncheck(conn, "alice", ChecklistKind::Tagging, "E1").unwrap();
    assert!(!checklist::get_item(conn, "alice", ChecklistKind::Tagging, "E1")
        .unwrap()
        .state
        .checked);

    ChecklistLogic::delete(conn, "alice", ChecklistKind::Tagging, "E1").unwrap();
    assert!(matches!(
        ChecklistLogic::check(conn, "alice", ChecklistKind::Tagging, "E1", now),
        Err(AppError::UnknownChecklistItem { .. })
    ));
}

#[test]
fn tick_resets_due_items_and_marks_listings_unverified() {
    let pool = pool();
    let conn = &pool.conn;
    let start = Local::now() - Duration::days(2);

    ChecklistLogic::add(
        conn,
        "alice",
        ChecklistKind::Pricing,
        "L7",
        ResetSchedule::Milestones,
        vec![1, 3],
        start,
    )
    .unwrap();
    ChecklistLogic::check(conn, "alice", ChecklistKind::Pricing, "L7", start).unwrap();

    ChecklistLogic::add(
        conn,
        "alice",
        ChecklistKind::Alerting,
        "E1",
        ResetSchedule::Milestones,
        vec![30],
        start,
    )
    .unwrap();
    ChecklistLogic::check(conn, "alice", ChecklistKind::Alerting, "E1", start).unwrap();

    let now = Local::now();
    let report = ChecklistLogic::tick_all(conn, "alice", now).unwrap();

    assert_eq!(report.reset.len(), 1);
    assert_eq!(report.reset[0].subject, "L7");
    assert_eq!(report.reset[0].state.next_milestone_days, vec![3]);

    let flags = listings::get_flags(conn, "alice", "L7").unwrap();
    assert!(flags.unverified_at.is_some());

    let again = ChecklistLogic::tick_all(conn, "alice", now).unwrap();
    assert!(again.reset.is_empty());

    let alerting = checklist::get_item(conn, "alice", ChecklistKind::Alerting, "E1").unwrap();
    assert!(alerting.state.checked);
}

#[test]
fn verifying_a_listing_rearms_its_pricing_item() {
    let pool = pool();
    let conn = &pool.conn;
    let now = Local::now();

    listings::mark_unverified(conn, "alice", "L9", now).unwrap();
    let item = ChecklistLogic::verify_listing(conn, "alice", "L9", &[2, 5], now).unwrap();

    assert_eq!(item.kind, ChecklistKind::Pricing);
    assert_eq!(item.schedule, ResetSchedule::Milestones);
    assert!(item.state.checked);
    assert_eq!(item.state.next_milestone_days, vec![2, 5]);
    assert!(listings::get_flags(conn, "alice", "L9").unwrap().unverified_at.is_none());

    let ops: Vec<String> = load_log(conn).unwrap().into_iter().map(|r| r.operation).collect();
    assert!(ops.contains(&"listing_verify".to_string()));
}

#[test]
fn failed_unverified_stamp_keeps_the_pricing_reset_pending() {
    let pool = pool();
    let conn = &pool.conn;
    let start = Local::now() - Duration::days(2);

    ChecklistLogic::add(
        conn,
        "alice",
        ChecklistKind::Pricing,
        "L7",
        ResetSchedule::Milestones,
        vec![1, 3],
        start,
    )
    .unwrap();
    ChecklistLogic::check(conn, "alice", ChecklistKind::Pricing, "L7", start).unwrap();

    conn.execute_batch(
        "CREATE TRIGGER block_flags BEFORE INSERT ON listing_flags
         BEGIN SELECT RAISE(ABORT, 'listing_flags is read-only'); END;",
    )
    .unwrap();

    let now = Local::now();
    assert!(ChecklistLogic::tick_all(conn, "alice", now).is_err());

    let item = checklist::get_item(conn, "alice", ChecklistKind::Pricing, "L7").unwrap();
    assert!(item.state.checked);
    assert_eq!(item.state.next_milestone_days, vec![1, 3]);
    assert!(listings::get_flags(conn, "alice", "L7").unwrap().unverified_at.is_none());

    conn.execute_batch("DROP TRIGGER block_flags;").unwrap();

    let retry = ChecklistLogic::tick_all(conn, "alice", now).unwrap();
    assert_eq!(retry.reset.len(), 1);
    assert_eq!(retry.reset[0].state.next_milestone_days, vec![3]);
    assert!(listings::get_flags(conn, "alice", "L7").unwrap().unverified_at.is_some());
}

#[test]
fn failed_verify_leaves_the_pricing_item_untouched() {
    let pool = pool();
    let conn = &pool.conn;
    let start = Local::now() - Duration::days(2);

    ChecklistLogic::add(
        conn,
        "alice",
        ChecklistKind::Pricing,
        "L9",
        ResetSchedule::Milestones,
        vec![1, 3],
        start,
    )
    .unwrap();
    listings::mark_unverified(conn, "alice", "L9", start).unwrap();

    conn.execute_batch(
        "CREATE TRIGGER block_flag_updates BEFORE UPDATE ON listing_flags
         BEGIN SELECT RAISE(ABORT, 'listing_flags is read-only'); END;",
    )
    .unwrap();

    let result = ChecklistLogic::verify_listing(conn, "alice", "L9", &[2, 5], Local::now());
    assert!(result.is_err());

    let item = checklist::get_item(conn, "alice", ChecklistKind::Pricing, "L9").unwrap();
    assert!(!item.state.checked);
    assert_eq!(item.state.next_milestone_days, vec![1, 3]);
    assert!(listings::get_flags(conn, "alice", "L9").unwrap().unverified_at.is_some());
}
