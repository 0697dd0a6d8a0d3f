use clap::{Parser, Subcommand};

/// Command-line interface definition for rStreaks
/// CLI application to track habit streaks with SQLite
#[derive(Parser)]
#[command(
    name = "rstreaks",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track habit streaks with an append-only audit log, backed by SQLite",
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

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields to the configuration file")]
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

        #[arg(long = "check", help = "Check database integrity and schema version")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// List current streaks
    List {
        #[arg(long = "json", help = "Print streaks as JSON")]
        json: bool,
    },

    /// Create a new streak
    Create {
        /// Display title of the streak
        title: String,

        /// Start of the streak (YYYY-MM-DD, "YYYY-MM-DD HH:MM" or RFC 3339)
        #[arg(long = "start", help = "Start date (default: now)")]
        start: Option<String>,

        /// Last reset, for streaks that were already running
        #[arg(long = "last-reset", help = "Last reset date (default: start date)")]
        last_reset: Option<String>,
    },

    /// Reset a streak to zero days
    Reset {
        /// Streak id
        id: i64,

        #[arg(long = "reason", short = 'r', help = "Why the streak was reset (required)")]
        reason: Option<String>,
    },

    /// Delete a streak (its history is kept)
    Del {
        /// Streak id
        id: i64,

        #[arg(
            long = "reason",
            short = 'r',
            help = "Why the streak was deleted (default: its title)"
        )]
        reason: Option<String>,

        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Print the audit log or the internal log
    Log {
        #[arg(long = "streak", short = 's', help = "Only entries for this streak id")]
        streak: Option<i64>,

        #[arg(long = "json", help = "Print entries as JSON")]
        json: bool,

        #[arg(
            long = "internal",
            conflicts_with_all = ["streak", "json"],
            help = "Print the internal maintenance log instead"
        )]
        internal: bool,
    },
}
