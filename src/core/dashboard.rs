//! Feed loading and terminal rendering for `events`, `reconcile` and `sections`.

use crate::config::Config;
use crate::core::listing::apply_desk_tags;
use crate::core::reconcile::{
    Dashboard, Reconciliation, categorize_with_rule, categorize::normalize_section,
};
use crate::db::{listings, overrides};
use crate::errors::AppResult;
use crate::feed::{self, FeedBundle};
use crate::models::{Category, InventoryStatus, ManualOverrides, SaleStatus};
use crate::ui::messages::{alert, header, info, warning};
use crate::utils::colors::{colorize_count, colorize_differential};
use crate::utils::table::{Column, Table};
use rusqlite::Connection;
use std::collections::BTreeMap;

pub struct DashboardLogic;

impl DashboardLogic {
    /// Fetch a bundle from the configured source. Per-event failures are
    /// reported on stderr and do not fail the call.
    pub fn load(cfg: &Config, feed_dir: Option<&str>, event_ids: &[String]) -> AppResult<FeedBundle> {
        let source = feed::open_source(cfg, feed_dir)?;
        let bundle = feed::collect(source.as_ref(), event_ids)?;

        for f in &bundle.failures {
            alert(format!(
                "Could not load {} for event {}: {}",
                f.what, f.event_id, f.error
            ));
        }
        Ok(bundle)
    }

    /// `load`, then merge the user's desk tags into the inventory and fetch
    /// the user's manual overrides.
    pub fn load_for_user(
        cfg: &Config,
        conn: &Connection,
        feed_dir: Option<&str>,
        event_ids: &[String],
    ) -> AppResult<(FeedBundle, ManualOverrides)> {
        let mut bundle = Self::load(cfg, feed_dir, event_ids)?;
        let flags = listings::list_flags(conn, &cfg.user)?;
        apply_desk_tags(&mut bundle.inventory, &flags);
        let overrides = overrides::load_manual_overrides(conn, &cfg.user)?;
        Ok((bundle, overrides))
    }

    pub fn build(bundle: &FeedBundle, overrides: &ManualOverrides) -> Dashboard {
        Dashboard::build(&bundle.events, &bundle.inventory, &bundle.sales, overrides)
    }

    pub fn print_events(bundle: &FeedBundle) {
        info(format!("Feed: {}", bundle.source));
        if bundle.events.is_empty() {
            info("No events found.");
            return;
        }

        let mut table = Table::new(vec![
            Column::left("ID"),
            Column::left("Event"),
            Column::left("Venue"),
            Column::left("Date"),
            Column::right("Listings"),
            Column::right("Orders"),
        ]);

        for e in &bundle.events {
            let listings = bundle.inventory.iter().filter(|r| r.event_id == e.id).count();
            let orders = bundle.sales.iter().filter(|s| s.event_id == e.id).count();
            let name = if e.placeholder {
                format!("{} (unavailable)", e.display_name())
            } else {
                e.display_name().to_string()
            };
            table.add_row(vec![
                e.id.clone(),
                name,
                e.venue.clone().unwrap_or_default(),
                e.date.clone().unwrap_or_default(),
                listings.to_string(),
                orders.to_string(),
            ]);
        }

        print!("{}", table.render());
    }

    pub fn print_dashboard(bundle: &FeedBundle, dashboard: &Dashboard) {
        info(format!("Feed: {}", bundle.source));
        for ev in &dashboard.events {
            header(format!("{} [{}]", ev.event.display_name(), ev.event.id));
            print_reconciliation(&ev.result);
        }

        if dashboard.events.len() != 1 {
            header("All events");
            print_reconciliation(&dashboard.overall);
        }
    }

    /// Every distinct section label seen in the bundle with the category it
    /// resolves to and what decided it, followed by the triage list.
    pub fn print_sections(bundle: &FeedBundle, overrides: &ManualOverrides) {
        info(format!("Feed: {}", bundle.source));
        let mut units: BTreeMap<String, i64> = BTreeMap::new();
        for r in &bundle.inventory {
            let slot = units.entry(r.section.clone()).or_default();
            *slot = slot.saturating_add(r.available_now.max(0));
        }
        for sale in &bundle.sales {
            for item in sale.items.iter().filter(|i| !i.section.trim().is_empty()) {
                units.entry(item.section.clone()).or_default();
            }
        }

        if units.is_empty() {
            info("No sections found.");
            return;
        }

        let mut table = Table::new(vec![
            Column::left("Section"),
            Column::left("Category"),
            Column::left("Decided by"),
            Column::right("Available"),
        ]);
        let mut triage = Vec::new();

        for (section, available) in &units {
            let (category, decided_by) = match overrides
                .get(section)
                .or_else(|| overrides.get(section.trim()))
            {
                Some(c) => (c, "override".to_string()),
                None => {
                    let (c, rule) = categorize_with_rule(Some(section));
                    (c, rule.unwrap_or("-").to_string())
                }
            };
            if category == Category::Uncategorized {
                triage.push(section.clone());
            }
            table.add_row(vec![
                display_section(section),
                category.label().to_string(),
                decided_by,
                colorize_count(*available),
            ]);
        }

        print!("{}", table.render());
        println!();

        if triage.is_empty() {
            info("Every section is categorized.");
        } else {
            warning(format!("{} section(s) need a manual category:", triage.len()));
            for s in &triage {
                println!("   • {} (normalized: '{}')", display_section(s), normalize_section(s));
            }
            info("Use `tixdesk override set SECTION CATEGORY` to assign them.");
        }
    }
}

fn display_section(section: &str) -> String {
    if section.trim().is_empty() {
        "(blank)".to_string()
    } else {
        section.to_string()
    }
}

fn print_reconciliation(r: &Reconciliation) {
    let mut table = Table::new(vec![
        Column::left("Category"),
        Column::right("Inventory"),
        Column::right("Sold"),
        Column::right("Unfilled"),
        Column::right("Differential"),
    ]);

    for category in Category::TRACKED {
        let diff = if Category::SELLABLE.contains(&category) {
            colorize_differential(r.differential.get(category))
        } else {
            "-".to_string()
        };
        table.add_row(vec![
            category.label().to_string(),
            colorize_count(r.inventory.category_counts.get(category)),
            colorize_count(r.sales.category_counts.get(category)),
            colorize_count(r.sales.unfilled_counts.get(category)),
            diff,
        ]);
    }
    table.add_row(vec![
        "Total".to_string(),
        r.inventory.category_counts.total().to_string(),
        r.sales.category_counts.total().to_string(),
        r.sales.unfilled_counts.total().to_string(),
        colorize_differential(r.differential.total),
    ]);
    print!("{}", table.render());

    let inv_status: Vec<String> = InventoryStatus::ALL
        .iter()
        .map(|s| {
            let n = r.inventory.status_counts.get(s).copied().unwrap_or(0);
            format!("{}: {}", s.label(), n)
        })
        .collect();
    let sale_status: Vec<String> = SaleStatus::ALL
        .iter()
        .map(|s| {
            let n = r.sales.status_counts.get(s).copied().unwrap_or(0);
            format!("{}: {}", s.label(), n)
        })
        .collect();

    println!();
    println!("Inventory status  {}", inv_status.join(" | "));
    println!("Sales status      {}", sale_status.join(" | "));
    println!("Orders            {}", r.sales.orders);

    if r.inventory.excluded_presale > 0 {
        println!("Presale excluded  {}", r.inventory.excluded_presale);
    }

    let sold_uncategorized = r
        .sales
        .uncategorized
        .iter()
        .fold(0, |acc: i64, u| acc.saturating_add(u.quantity));
    let uncategorized = r
        .inventory
        .uncategorized_units()
        .saturating_add(sold_uncategorized);
    if uncategorized > 0 {
        warning(format!(
            "{} unit(s) in uncategorized sections, see `tixdesk sections`",
            uncategorized
        ));
    }
    println!();
}
