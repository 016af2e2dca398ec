use crate::export::ExportFormat;
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for tixdesk
/// Ticket resale desk: inventory/sales reconciliation and daily checklist
#[derive(Parser)]
#[command(
    name = "tixdesk",
    version = env!("CARGO_PKG_VERSION"),
    about = "Reconcile ticket inventory against sales and keep the desk's daily checklist",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Act as this desk user instead of the configured one
    #[arg(global = true, long = "user")]
    pub user: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where to read events, inventory and sales from.
#[derive(Args, Debug, Clone, Default)]
pub struct FeedArgs {
    /// Read JSON snapshots from this directory instead of the API
    #[arg(long = "feed-dir", value_name = "DIR")]
    pub feed_dir: Option<String>,

    /// Restrict to these event ids (repeatable)
    #[arg(long = "event", value_name = "ID")]
    pub events: Vec<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields with default values")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// List events known to the feed
    Events {
        #[arg(long = "feed-dir", value_name = "DIR")]
        feed_dir: Option<String>,
    },

    /// Inventory vs. sales per category, per event and overall
    Reconcile {
        #[command(flatten)]
        feed: FeedArgs,

        #[arg(long = "json", help = "Print the dashboard as JSON")]
        json: bool,
    },

    /// Section labels with their category; lists the ones needing triage
    Sections {
        #[command(flatten)]
        feed: FeedArgs,
    },

    /// Manual section → category assignments
    Override {
        #[command(subcommand)]
        action: OverrideAction,
    },

    /// Desk-side flags for a feed listing
    Listing {
        #[command(subcommand)]
        action: ListingAction,
    },

    /// Daily workflow checklist with automatic resets
    Checklist {
        #[command(subcommand)]
        action: ChecklistAction,
    },

    /// Export the reconciliation
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[command(flatten)]
        feed: FeedArgs,

        #[arg(long, short = 'f')]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum OverrideAction {
    /// Assign SECTION to CATEGORY (GA, GA+, VIP, SHUTTLE, CONCERN)
    Set { section: String, category: String },
    /// Remove the assignment for SECTION
    Del { section: String },
    /// List assignments
    List,
}

#[derive(Subcommand)]
pub enum ListingAction {
    /// Turn autopricing on or off
    Autoprice {
        id: String,

        #[arg(long, conflicts_with = "off", required_unless_present = "off")]
        on: bool,

        #[arg(long)]
        off: bool,
    },
    /// Add desk tags to the listing
    Tag {
        id: String,
        #[arg(required = true)]
        tags: Vec<String>,
    },
    /// Remove all desk tags
    Untag { id: String },
    /// Mark the listing price as verified
    Verify { id: String },
    /// Show the desk flags of one listing, or of all when ID is omitted
    Show { id: Option<String> },
}

#[derive(Subcommand)]
pub enum ChecklistAction {
    /// Track a task (KIND: pricing, tagging, bookmarking, alerting)
    Add {
        kind: String,
        subject: String,

        #[arg(long, conflicts_with = "milestones", help = "Reset every day")]
        daily: bool,

        #[arg(
            long,
            value_name = "DAYS",
            help = "Reset after each of these day offsets, e.g. 1,3,7"
        )]
        milestones: Option<String>,
    },
    Check { kind: String, subject: String },
    Uncheck { kind: String, subject: String },
    Del { kind: String, subject: String },
    List,
    /// Apply due resets now
    Tick,
}
