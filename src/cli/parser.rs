use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for dailygrace
#[derive(Parser)]
#[command(
    name = "dailygrace",
    version = env!("CARGO_PKG_VERSION"),
    about = "Grace & Daily Bread: a devotional calendar for the terminal, stored in SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
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

        #[arg(long = "editor", help = "Specify the editor to use (vim, nano, or custom path)")]
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

        #[arg(
            long = "reset",
            help = "Drop stored devotionals; the next load starts from the samples"
        )]
        reset: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Show the month calendar, marking days that have a devotional
    Calendar {
        /// Month to show (YYYY-MM), defaults to the current month
        #[arg(long, short)]
        month: Option<String>,
    },

    /// List all devotionals, newest first
    List,

    /// Show one devotional by date or id
    Show {
        /// Date of the devotional (YYYY-MM-DD)
        #[arg(required_unless_present = "id")]
        date: Option<String>,

        #[arg(long, conflicts_with = "date", help = "Devotional id")]
        id: Option<String>,
    },

    /// Select a calendar day the way a click on the calendar would
    Select {
        /// Date (YYYY-MM-DD)
        date: String,

        #[arg(long = "as", value_name = "EMAIL", help = "Sign in as EMAIL first")]
        as_email: Option<String>,

        #[arg(long, short = 'y', help = "Answer yes to the create prompt")]
        yes: bool,
    },

    /// Create or replace the devotional for a date (admin only)
    Save {
        #[arg(long = "as", value_name = "EMAIL", help = "Sign in as EMAIL")]
        as_email: String,

        #[arg(long, default_value = "", hide_default_value = true)]
        password: String,

        /// Date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<String>,

        #[arg(long, default_value = "")]
        title: String,

        #[arg(long, default_value = "")]
        content: String,

        #[arg(long, default_value = "", help = "Category (defaults to General)")]
        category: String,

        #[arg(long = "image", default_value = "", help = "Optional image URL")]
        image: String,
    },

    /// Mark the devotional of a date as read
    Read {
        /// Date (YYYY-MM-DD)
        date: String,
    },

    /// Export devotionals
    Export {
        #[arg(long, value_enum, default_value = "json")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE", help = "Output file (absolute path)")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter by YYYY, YYYY-MM, YYYY-MM-DD or start:end ranges"
        )]
        range: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f', help = "Overwrite without asking")]
        force: bool,
    },

    /// Interactive session: sign in, browse, and edit
    Shell,
}
