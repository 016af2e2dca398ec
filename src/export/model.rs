use crate::core::reconcile::{Dashboard, Reconciliation};
use crate::models::Category;
use serde::Serialize;

/// One flat export line: a category bucket of an event, or an
/// uncategorized section (then `section` is set and `differential` is not).
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct ReconciliationRow {
    pub event_id: String,
    pub event: String,
    pub category: String,
    pub section: String,
    pub inventory: i64,
    pub sold: i64,
    pub unfilled: i64,
    pub differential: Option<i64>,
}

fn category_rows(event_id: &str, event: &str, r: &Reconciliation) -> Vec<ReconciliationRow> {
    Category::TRACKED
        .iter()
        .map(|c| ReconciliationRow {
            event_id: event_id.to_string(),
            event: event.to_string(),
            category: c.to_db_str().to_string(),
            section: String::new(),
            inventory: r.inventory.category_counts.get(*c),
            sold: r.sales.category_counts.get(*c),
            unfilled: r.sales.unfilled_counts.get(*c),
            differential: Category::SELLABLE
                .contains(c)
                .then(|| r.differential.get(*c)),
        })
        .collect()
}

fn section_row<'a>(
    rows: &'a mut Vec<ReconciliationRow>,
    event_id: &str,
    event: &str,
    section: &str,
) -> &'a mut ReconciliationRow {
    let idx = match rows.iter().position(|x| x.section == section) {
        Some(i) => i,
        None => {
            rows.push(ReconciliationRow {
                event_id: event_id.to_string(),
                event: event.to_string(),
                category: Category::Uncategorized.to_db_str().to_string(),
                section: section.to_string(),
                inventory: 0,
                sold: 0,
                unfilled: 0,
                differential: None,
            });
            rows.len() - 1
        }
    };
    &mut rows[idx]
}

fn uncategorized_rows(event_id: &str, event: &str, r: &Reconciliation) -> Vec<ReconciliationRow> {
    let mut rows = Vec::new();

    for u in &r.inventory.uncategorized {
        let row = section_row(&mut rows, event_id, event, &u.section);
        row.inventory = row.inventory.saturating_add(u.quantity);
    }
    for u in &r.sales.uncategorized {
        let row = section_row(&mut rows, event_id, event, &u.section);
        row.sold = row.sold.saturating_add(u.quantity);
    }

    rows
}

/// Per-event rows in dashboard order.
pub fn rows_from_dashboard(dashboard: &Dashboard) -> Vec<ReconciliationRow> {
    dashboard
        .events
        .iter()
        .flat_map(|ev| {
            let name = ev.event.display_name();
            let mut rows = category_rows(&ev.event.id, name, &ev.result);
            rows.extend(uncategorized_rows(&ev.event.id, name, &ev.result));
            rows
        })
        .collect()
}
