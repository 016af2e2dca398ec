use crate::db::log::{LogRow, load_log};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::table::visible_width;
use ansi_term::Colour;

const MAX_OP_WIDTH: usize = 60;

/// Colour of the operation word in the log listing.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "init" => Colour::RGB(255, 153, 51),
        "migration_applied" => Colour::Purple,
        "override_set" | "listing_tag" | "listing_autoprice" | "checklist_add" => Colour::Green,
        "override_del" | "listing_untag" | "checklist_del" => Colour::Red,
        "listing_verify" | "checklist_check" => Colour::Cyan,
        "checklist_reset" | "checklist_uncheck" => Colour::Yellow,
        "reconcile" | "export" => Colour::Blue,
        _ => Colour::White,
    }
}

fn op_with_target(row: &LogRow) -> String {
    if row.target.is_empty() {
        row.operation.clone()
    } else {
        format!("{} ({})", row.operation, row.target)
    }
}

/// Cut to `MAX_OP_WIDTH` visible chars and colour only the operation word.
fn render_op(row: &LogRow) -> String {
    let color = color_for_operation(&row.operation);
    let visible = op_with_target(row);

    let truncated = if visible.chars().count() > MAX_OP_WIDTH {
        let mut s: String = visible.chars().take(MAX_OP_WIDTH - 3).collect();
        s.push_str("...");
        s
    } else {
        visible
    };

    match truncated.split_once(' ') {
        Some((op, rest)) => format!("{} {}", color.paint(op), rest),
        None => color.paint(truncated.as_str()).to_string(),
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &mut DbPool) -> AppResult<()> {
        let entries = load_log(&pool.conn)?;

        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        let dates: Vec<String> = entries
            .iter()
            .map(|r| {
                chrono::DateTime::parse_from_rfc3339(&r.date)
                    .map(|dt| dt.format("%FT%T%:z").to_string())
                    .unwrap_or_else(|_| r.date.clone())
            })
            .collect();

        let op_w = entries
            .iter()
            .map(|r| op_with_target(r).chars().count())
            .max()
            .unwrap_or(10)
            .min(MAX_OP_WIDTH);
        let id_w = entries
            .iter()
            .map(|r| r.id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = dates.iter().map(|d| d.len()).max().unwrap_or(10);

        println!("📜 Internal log:\n");

        for (row, date) in entries.iter().zip(&dates) {
            let op = render_op(row);
            let padding = " ".repeat(op_w.saturating_sub(visible_width(&op)));

            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                row.id,
                date,
                op,
                padding,
                row.message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}
