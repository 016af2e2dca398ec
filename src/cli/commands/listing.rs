use crate::cli::parser::{Commands, ListingAction};
use crate::config::Config;
use crate::core::checklist::ChecklistLogic;
use crate::core::listing::ListingLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::ListingFlags;
use crate::ui::messages::{info, success};
use crate::utils::formatting::{short_timestamp, yes_no};
use crate::utils::table::{Column, Table};
use chrono::Local;

fn print_flags(flags: &[ListingFlags]) {
    let mut table = Table::new(vec![
        Column::left("Listing"),
        Column::left("Autopriced"),
        Column::left("Tags"),
        Column::left("Unverified since"),
    ]);
    for f in flags {
        table.add_row(vec![
            f.listing_id.clone(),
            yes_no(f.autopriced).to_string(),
            f.tags.join(", "),
            f.unverified_at
                .as_ref()
                .map(short_timestamp)
                .unwrap_or_else(|| "-".to_string()),
        ]);
    }
    print!("{}", table.render());
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Listing { action } = cmd else {
        return Ok(());
    };
    let pool = DbPool::open_initialized(&cfg.database)?;
    let conn = &pool.conn;

    match action {
        ListingAction::Autoprice { id, on, off: _ } => {
            ListingLogic::set_autopriced(conn, &cfg.user, id, *on)?;
            success(format!(
                "Autopricing {} for listing {}",
                if *on { "on" } else { "off" },
                id
            ));
        }
        ListingAction::Tag { id, tags } => {
            let all = ListingLogic::tag(conn, &cfg.user, id, tags)?;
            success(format!("Listing {} tags: {}", id, all.join(", ")));
        }
        ListingAction::Untag { id } => {
            ListingLogic::untag(conn, &cfg.user, id)?;
            success(format!("Listing {} tags cleared", id));
        }
        ListingAction::Verify { id } => {
            let item = ChecklistLogic::verify_listing(
                conn,
                &cfg.user,
                id,
                &cfg.unverify_milestone_days,
                Local::now(),
            )?;
            success(format!("Listing {} pricing verified", id));
            if !item.state.next_milestone_days.is_empty() {
                info(format!(
                    "Next re-check after {} day(s)",
                    item.state.next_milestone_days[0]
                ));
            }
        }
        ListingAction::Show { id: Some(id) } => {
            print_flags(&[ListingLogic::show(conn, &cfg.user, id)?]);
        }
        ListingAction::Show { id: None } => {
            let all = ListingLogic::list(conn, &cfg.user)?;
            if all.is_empty() {
                info("No listing flags stored.");
            } else {
                print_flags(&all);
            }
        }
    }
    Ok(())
}
