//! Auto-reset of checklist flags.
//!
//! Each tracked entity carries a `ResetState`; `tick` is the only place that
//! advances it, as a pure function of that state, its schedule and "now".

use crate::models::{ResetSchedule, ResetState};
use chrono::{DateTime, Duration, Local, NaiveDateTime, NaiveTime};

#[derive(Debug, Clone, PartialEq)]
pub struct TickOutcome {
    pub state: ResetState,
    /// True when a checked flag was cleared by this tick.
    pub reset: bool,
}

/// Most recent daily boundary at or before `now` (local wall clock).
pub fn daily_boundary(now: &DateTime<Local>, reset_hour: u32) -> NaiveDateTime {
    let at = NaiveTime::from_hms_opt(reset_hour.min(23), 0, 0).unwrap_or(NaiveTime::MIN);
    let today = now.date_naive().and_time(at);
    if now.naive_local() >= today {
        today
    } else {
        today - Duration::days(1)
    }
}

pub fn tick(state: &ResetState, schedule: &ResetSchedule, now: DateTime<Local>) -> TickOutcome {
    let mut next = state.clone();

    let due = match schedule {
        ResetSchedule::Daily { reset_hour } => {
            state.last_reset_at.naive_local() < daily_boundary(&now, *reset_hour)
        }
        ResetSchedule::Milestones => match state.next_milestone_days.first() {
            Some(days) => (now - state.last_reset_at).num_days() >= i64::from(*days),
            None => false,
        },
    };

    if !due {
        return TickOutcome {
            state: next,
            reset: false,
        };
    }

    if matches!(schedule, ResetSchedule::Milestones) {
        next.next_milestone_days.remove(0);
    }
    next.last_reset_at = now;

    let reset = next.checked;
    next.checked = false;
    next.checked_at = None;

    TickOutcome { state: next, reset }
}

pub fn check(state: &ResetState, now: DateTime<Local>) -> ResetState {
    ResetState {
        checked: true,
        checked_at: Some(now),
        ..state.clone()
    }
}

pub fn uncheck(state: &ResetState) -> ResetState {
    ResetState {
        checked: false,
        checked_at: None,
        ..state.clone()
    }
}

/// Parse "1,3,7" into a milestone queue, keeping the given order.
pub fn parse_milestones(raw: &str) -> Result<Vec<u32>, String> {
    let days = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<u32>().map_err(|_| format!("'{s}' is not a day count")))
        .collect::<Result<Vec<_>, _>>()?;

    if days.is_empty() {
        return Err(format!("no milestones in '{raw}'"));
    }
    Ok(days)
}
