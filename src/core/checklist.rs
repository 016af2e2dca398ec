use crate::core::schedule;
use crate::db::{checklist as store, listings, log};
use crate::errors::AppResult;
use crate::models::{ChecklistItem, ChecklistKind, ResetSchedule, ResetState};
use chrono::{DateTime, Local};
use rusqlite::Connection;

/// What a scheduler pass changed.
#[derive(Debug, Default)]
pub struct TickReport {
    /// Items whose checked flag was cleared.
    pub reset: Vec<ChecklistItem>,
    /// Items whose state advanced without clearing a flag.
    pub advanced: usize,
}

pub struct ChecklistLogic;

impl ChecklistLogic {
    /// Create (or reschedule) an item. Re-adding keeps nothing of the old state.
    pub fn add(
        conn: &Connection,
        user: &str,
        kind: ChecklistKind,
        subject: &str,
        schedule: ResetSchedule,
        milestones: Vec<u32>,
        now: DateTime<Local>,
    ) -> AppResult<ChecklistItem> {
        let queue = match schedule {
            ResetSchedule::Milestones => milestones,
            ResetSchedule::Daily { .. } => Vec::new(),
        };

        let item = ChecklistItem {
            user: user.to_string(),
            kind,
            subject: subject.to_string(),
            schedule,
            state: ResetState::new(now, queue),
        };

        store::upsert_item(conn, &item)?;
        log::record_or_warn(
            conn,
            "checklist_add",
            &item.key(),
            &format!("Added {} ({})", item.key(), schedule.to_db_str()),
        );
        Ok(item)
    }

    pub fn check(
        conn: &Connection,
        user: &str,
        kind: ChecklistKind,
        subject: &str,
        now: DateTime<Local>,
    ) -> AppResult<ChecklistItem> {
        let mut item = store::get_item(conn, user, kind, subject)?;
        item.state = schedule::check(&item.state, now);
        store::save_state(conn, &item)?;
        log::record_or_warn(conn, "checklist_check", &item.key(), "Checked");
        Ok(item)
    }

    pub fn uncheck(
        conn: &Connection,
        user: &str,
        kind: ChecklistKind,
        subject: &str,
    ) -> AppResult<ChecklistItem> {
        let mut item = store::get_item(conn, user, kind, subject)?;
        item.state = schedule::uncheck(&item.state);
        store::save_state(conn, &item)?;
        log::record_or_warn(conn, "checklist_uncheck", &item.key(), "Unchecked");
        Ok(item)
    }

    pub fn delete(
        conn: &Connection,
        user: &str,
        kind: ChecklistKind,
        subject: &str,
    ) -> AppResult<()> {
        store::delete_item(conn, user, kind, subject)?;
        log::record_or_warn(
            conn,
            "checklist_del",
            &format!("{}:{}", kind, subject),
            "Deleted",
        );
        Ok(())
    }

    /// Mark a listing's price as verified: the pricing item for the listing is
    /// created if needed, re-armed with `milestones` from now, and checked.
    pub fn verify_listing(
        conn: &Connection,
        user: &str,
        listing_id: &str,
        milestones: &[u32],
        now: DateTime<Local>,
    ) -> AppResult<ChecklistItem> {
        let kind = ChecklistKind::Pricing;
        let mut item = match store::find_item(conn, user, kind, listing_id)? {
            Some(existing) => existing,
            None => ChecklistItem {
                user: user.to_string(),
                kind,
                subject: listing_id.to_string(),
                schedule: ResetSchedule::Milestones,
                state: ResetState::new(now, Vec::new()),
            },
        };

        if item.schedule == ResetSchedule::Milestones {
            item.state = ResetState::new(now, milestones.to_vec());
        }
        item.state = schedule::check(&item.state, now);

        let tx = conn.unchecked_transaction()?;
        store::upsert_item(&tx, &item)?;
        listings::clear_unverified(&tx, user, listing_id)?;
        tx.commit()?;
        log::record_or_warn(conn, "listing_verify", listing_id, "Pricing verified");
        Ok(item)
    }

    /// Run the reset scheduler over every item of `user`.
    ///
    /// A pricing item that resets stamps its subject listing as unverified.
    pub fn tick_all(conn: &Connection, user: &str, now: DateTime<Local>) -> AppResult<TickReport> {
        let mut report = TickReport::default();

        for mut item in store::list_items(conn, user)? {
            let outcome = schedule::tick(&item.state, &item.schedule, now);
            if outcome.state == item.state {
                continue;
            }

            item.state = outcome.state;

            // The reset and the unverified stamp land together or not at all.
            let tx = conn.unchecked_transaction()?;
            store::save_state(&tx, &item)?;
            if outcome.reset && item.kind == ChecklistKind::Pricing {
                listings::mark_unverified(&tx, user, &item.subject, now)?;
            }
            tx.commit()?;

            if !outcome.reset {
                report.advanced += 1;
                continue;
            }
            log::record_or_warn(conn, "checklist_reset", &item.key(), "Reset by scheduler");
            report.reset.push(item);
        }

        Ok(report)
    }

    pub fn list(conn: &Connection, user: &str) -> AppResult<Vec<ChecklistItem>> {
        store::list_items(conn, user)
    }
}
