use chrono::{DateTime, Local};
use serde::Serialize;
use std::fmt;

/// The manual workflow tasks tracked on the daily checklist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum ChecklistKind {
    Pricing,
    Tagging,
    Bookmarking,
    Alerting,
}

impl ChecklistKind {
    pub fn to_db_str(&self) -> &'static str {
        match self {
            ChecklistKind::Pricing => "pricing",
            ChecklistKind::Tagging => "tagging",
            ChecklistKind::Bookmarking => "bookmarking",
            ChecklistKind::Alerting => "alerting",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "pricing" | "price" => Some(ChecklistKind::Pricing),
            "tagging" | "tag" => Some(ChecklistKind::Tagging),
            "bookmarking" | "bookmark" => Some(ChecklistKind::Bookmarking),
            "alerting" | "alert" => Some(ChecklistKind::Alerting),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ChecklistKind::Pricing => "Pricing verification",
            ChecklistKind::Tagging => "Tagging",
            ChecklistKind::Bookmarking => "Bookmarking",
            ChecklistKind::Alerting => "Alerting",
        }
    }
}

impl fmt::Display for ChecklistKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_db_str())
    }
}

/// When a checked flag clears on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ResetSchedule {
    /// Clears at `reset_hour` (local time) every day.
    Daily { reset_hour: u32 },
    /// Clears each time the next queued day offset elapses.
    Milestones,
}

impl ResetSchedule {
    pub fn to_db_str(&self) -> String {
        match self {
            ResetSchedule::Daily { reset_hour } => format!("daily:{reset_hour}"),
            ResetSchedule::Milestones => "milestones".to_string(),
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s.split_once(':') {
            Some(("daily", hour)) => hour
                .parse::<u32>()
                .ok()
                .filter(|h| *h < 24)
                .map(|reset_hour| ResetSchedule::Daily { reset_hour }),
            None if s == "daily" => Some(ResetSchedule::Daily { reset_hour: 0 }),
            None if s == "milestones" => Some(ResetSchedule::Milestones),
            _ => None,
        }
    }
}

/// Mutable part of a tracked entity, advanced by `core::schedule::tick`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResetState {
    pub checked: bool,
    pub checked_at: Option<DateTime<Local>>,
    pub last_reset_at: DateTime<Local>,
    /// Day offsets still to fire, each measured from `last_reset_at`.
    pub next_milestone_days: Vec<u32>,
}

impl ResetState {
    pub fn new(now: DateTime<Local>, milestones: Vec<u32>) -> Self {
        Self {
            checked: false,
            checked_at: None,
            last_reset_at: now,
            next_milestone_days: milestones,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChecklistItem {
    pub user: String,
    pub kind: ChecklistKind,
    /// Event id, listing id or free label the task is about.
    pub subject: String,
    pub schedule: ResetSchedule,
    pub state: ResetState,
}

impl ChecklistItem {
    pub fn key(&self) -> String {
        format!("{}:{}", self.kind, self.subject)
    }
}
