use crate::db::db_utils::{
    conversion_error, now_rfc3339, parse_json_list, parse_opt_timestamp, parse_timestamp,
};
use crate::errors::{AppError, AppResult};
use crate::models::{ChecklistItem, ChecklistKind, ResetSchedule, ResetState};
use rusqlite::{Connection, OptionalExtension, Row, params};

const SELECT_ITEMS: &str = "SELECT user, kind, subject, checked, checked_at, last_reset_at,
                                   schedule, next_milestones
                            FROM checklist_items";

fn map_item(row: &Row) -> rusqlite::Result<ChecklistItem> {
    let kind_str: String = row.get("kind")?;
    let kind = ChecklistKind::from_db_str(&kind_str)
        .ok_or_else(|| conversion_error(1, AppError::InvalidChecklistKind(kind_str.clone())))?;

    let schedule_str: String = row.get("schedule")?;
    let schedule = ResetSchedule::from_db_str(&schedule_str).ok_or_else(|| {
        conversion_error(
            6,
            AppError::Other(format!("Invalid checklist schedule: {}", schedule_str)),
        )
    })?;

    let last_reset: String = row.get("last_reset_at")?;
    let milestones: String = row.get("next_milestones")?;

    Ok(ChecklistItem {
        user: row.get("user")?,
        kind,
        subject: row.get("subject")?,
        schedule,
        state: ResetState {
            checked: row.get::<_, i32>("checked")? == 1,
            checked_at: parse_opt_timestamp(4, row.get("checked_at")?)?,
            last_reset_at: parse_timestamp(5, &last_reset)?,
            next_milestone_days: parse_json_list(7, &milestones)?,
        },
    })
}

/// Insert a new item or replace schedule and state of an existing one.
pub fn upsert_item(conn: &Connection, item: &ChecklistItem) -> AppResult<()> {
    conn.execute(
        "INSERT INTO checklist_items
            (user, kind, subject, checked, checked_at, last_reset_at,
             schedule, next_milestones, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
         ON CONFLICT(user, kind, subject) DO UPDATE SET
            checked = excluded.checked,
            checked_at = excluded.checked_at,
            last_reset_at = excluded.last_reset_at,
            schedule = excluded.schedule,
            next_milestones = excluded.next_milestones,
            updated_at = excluded.updated_at",
        params![
            item.user,
            item.kind.to_db_str(),
            item.subject,
            if item.state.checked { 1 } else { 0 },
            item.state.checked_at.map(|t| t.to_rfc3339()),
            item.state.last_reset_at.to_rfc3339(),
            item.schedule.to_db_str(),
            serde_json::to_string(&item.state.next_milestone_days)?,
            now_rfc3339(),
        ],
    )?;
    Ok(())
}

/// Persist a new state for an existing item.
pub fn save_state(conn: &Connection, item: &ChecklistItem) -> AppResult<()> {
    let n = conn.execute(
        "UPDATE checklist_items
         SET checked = ?4, checked_at = ?5, last_reset_at = ?6,
             next_milestones = ?7, updated_at = ?8
         WHERE user = ?1 AND kind = ?2 AND subject = ?3",
        params![
            item.user,
            item.kind.to_db_str(),
            item.subject,
            if item.state.checked { 1 } else { 0 },
            item.state.checked_at.map(|t| t.to_rfc3339()),
            item.state.last_reset_at.to_rfc3339(),
            serde_json::to_string(&item.state.next_milestone_days)?,
            now_rfc3339(),
        ],
    )?;

    if n == 0 {
        return Err(unknown(&item.user, item.kind, &item.subject));
    }
    Ok(())
}

fn unknown(user: &str, kind: ChecklistKind, subject: &str) -> AppError {
    AppError::UnknownChecklistItem {
        user: user.to_string(),
        kind: kind.to_db_str().to_string(),
        subject: subject.to_string(),
    }
}

pub fn find_item(
    conn: &Connection,
    user: &str,
    kind: ChecklistKind,
    subject: &str,
) -> AppResult<Option<ChecklistItem>> {
    let sql = format!("{SELECT_ITEMS} WHERE user = ?1 AND kind = ?2 AND subject = ?3");
    Ok(conn
        .query_row(&sql, params![user, kind.to_db_str(), subject], map_item)
        .optional()?)
}

pub fn get_item(
    conn: &Connection,
    user: &str,
    kind: ChecklistKind,
    subject: &str,
) -> AppResult<ChecklistItem> {
    find_item(conn, user, kind, subject)?.ok_or_else(|| unknown(user, kind, subject))
}

pub fn list_items(conn: &Connection, user: &str) -> AppResult<Vec<ChecklistItem>> {
    let sql = format!("{SELECT_ITEMS} WHERE user = ?1 ORDER BY kind ASC, subject ASC");
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map([user], map_item)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn delete_item(
    conn: &Connection,
    user: &str,
    kind: ChecklistKind,
    subject: &str,
) -> AppResult<()> {
    let n = conn.execute(
        "DELETE FROM checklist_items WHERE user = ?1 AND kind = ?2 AND subject = ?3",
        params![user, kind.to_db_str(), subject],
    )?;
    if n == 0 {
        return Err(unknown(user, kind, subject));
    }
    Ok(())
}
