use crate::cli::parser::{ChecklistAction, Commands};
use crate::config::Config;
use crate::core::checklist::ChecklistLogic;
use crate::core::schedule::parse_milestones;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::{ChecklistItem, ChecklistKind, ResetSchedule};
use crate::ui::messages::{info, success};
use crate::utils::colors::{GREEN, GREY, RESET};
use crate::utils::formatting::short_timestamp;
use crate::utils::table::{Column, Table};
use chrono::Local;

fn parse_kind(raw: &str) -> AppResult<ChecklistKind> {
    ChecklistKind::from_db_str(raw).ok_or_else(|| AppError::InvalidChecklistKind(raw.to_string()))
}

/// `--daily` / `--milestones` when given, otherwise milestones for pricing
/// and a daily reset for everything else.
fn resolve_schedule(
    kind: ChecklistKind,
    daily: bool,
    milestones: &Option<String>,
    cfg: &Config,
) -> AppResult<(ResetSchedule, Vec<u32>)> {
    let daily_schedule = ResetSchedule::Daily {
        reset_hour: cfg.daily_reset_hour,
    };

    if daily {
        return Ok((daily_schedule, Vec::new()));
    }
    if let Some(raw) = milestones {
        let days = parse_milestones(raw).map_err(AppError::InvalidMilestones)?;
        return Ok((ResetSchedule::Milestones, days));
    }
    match kind {
        ChecklistKind::Pricing => Ok((
            ResetSchedule::Milestones,
            cfg.unverify_milestone_days.clone(),
        )),
        _ => Ok((daily_schedule, Vec::new())),
    }
}

fn schedule_label(item: &ChecklistItem) -> String {
    match item.schedule {
        ResetSchedule::Daily { reset_hour } => format!("daily @ {:02}:00", reset_hour),
        ResetSchedule::Milestones if item.state.next_milestone_days.is_empty() => {
            "milestones (done)".to_string()
        }
        ResetSchedule::Milestones => {
            let days: Vec<String> = item
                .state
                .next_milestone_days
                .iter()
                .map(|d| d.to_string())
                .collect();
            format!("milestones {}", days.join(","))
        }
    }
}

fn print_items(items: &[ChecklistItem]) {
    let mut table = Table::new(vec![
        Column::left("Kind"),
        Column::left("Subject"),
        Column::left("Done"),
        Column::left("Schedule"),
        Column::left("Last reset"),
    ]);
    for item in items {
        let done = if item.state.checked {
            format!("{GREEN}✔{RESET}")
        } else {
            format!("{GREY}·{RESET}")
        };
        table.add_row(vec![
            item.kind.label().to_string(),
            item.subject.clone(),
            done,
            schedule_label(item),
            short_timestamp(&item.state.last_reset_at),
        ]);
    }
    print!("{}", table.render());
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Checklist { action } = cmd else {
        return Ok(());
    };
    let pool = DbPool::open_initialized(&cfg.database)?;
    let conn = &pool.conn;
    let user = cfg.user.as_str();
    let now = Local::now();

    match action {
        ChecklistAction::Add {
            kind,
            subject,
            daily,
            milestones,
        } => {
            let kind = parse_kind(kind)?;
            let (schedule, days) = resolve_schedule(kind, *daily, milestones, cfg)?;
            let item = ChecklistLogic::add(conn, user, kind, subject, schedule, days, now)?;
            success(format!("Tracking {} ({})", item.key(), schedule_label(&item)));
        }
        ChecklistAction::Check { kind, subject } => {
            let item = ChecklistLogic::check(conn, user, parse_kind(kind)?, subject, now)?;
            success(format!("{} checked", item.key()));
        }
        ChecklistAction::Uncheck { kind, subject } => {
            let item = ChecklistLogic::uncheck(conn, user, parse_kind(kind)?, subject)?;
            success(format!("{} unchecked", item.key()));
        }
        ChecklistAction::Del { kind, subject } => {
            let kind = parse_kind(kind)?;
            ChecklistLogic::delete(conn, user, kind, subject)?;
            success(format!("{}:{} removed", kind, subject));
        }
        ChecklistAction::List => {
            let items = ChecklistLogic::list(conn, user)?;
            if items.is_empty() {
                info("Checklist is empty.");
            } else {
                print_items(&items);
            }
        }
        ChecklistAction::Tick => {
            let report = ChecklistLogic::tick_all(conn, user, now)?;
            if report.reset.is_empty() {
                info(format!(
                    "Nothing to reset ({} schedule(s) advanced)",
                    report.advanced
                ));
            } else {
                for item in &report.reset {
                    info(format!("Reset {}", item.key()));
                }
                success(format!("{} item(s) reset", report.reset.len()));
            }
        }
    }
    Ok(())
}
