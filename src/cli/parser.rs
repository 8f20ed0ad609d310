use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for gymcheck
#[derive(Parser)]
#[command(
    name = "gymcheck",
    version = env!("CARGO_PKG_VERSION"),
    about = "Gym check-ins from the terminal: QR payloads, entry/exit sessions, date picker and attendance analytics",
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
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add defaults for missing configuration fields")]
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

    /// Generate the check-in QR code for a gym
    Qr {
        /// Gym identifier (the QR payload)
        gym: String,

        #[arg(long = "size", help = "Raster side in pixels (default from config)")]
        size: Option<u32>,

        #[arg(long = "out", value_name = "FILE", help = "Write a PNG instead of printing")]
        out: Option<String>,
    },

    /// Start a check-in session: each scan toggles entry/exit
    Scan {
        #[arg(long = "user", help = "Username (default from config)")]
        user: Option<String>,

        #[arg(long = "gym", help = "Gym identifier")]
        gym: String,

        #[arg(long = "count", help = "Simulate N successful scans and exit")]
        count: Option<usize>,

        #[arg(
            long = "min-interval",
            value_name = "SECS",
            help = "Ignore scans closer than SECS to the previous one (0 = off)"
        )]
        min_interval: Option<i64>,
    },

    /// Pick a past date with the Year → Month → Day picker
    Calendar,

    /// Record a visit date in the attendance analytics
    Visit {
        #[arg(long = "user", help = "Username (default from config)")]
        user: Option<String>,

        #[arg(long = "gym", help = "Gym identifier")]
        gym: String,

        /// Date of the visit (YYYY-MM-DD)
        date: String,
    },

    /// Show attendance statistics and heatmap for a month
    Analytics {
        #[arg(long = "user", help = "Username (default from config)")]
        user: Option<String>,

        #[arg(long = "gym", help = "Gym identifier")]
        gym: String,

        #[arg(long = "month", value_name = "YYYY-MM", help = "Month to show (default: current)")]
        month: Option<String>,

        #[arg(long = "no-color", help = "Plain heatmap without ANSI colors")]
        no_color: bool,
    },

    /// Export recorded visits
    Export {
        #[arg(long = "user", help = "Username (default from config)")]
        user: Option<String>,

        #[arg(long = "gym", help = "Gym identifier")]
        gym: String,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long = "month", value_name = "YYYY-MM", help = "Only export one month")]
        month: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Show membership tiers
    Membership {
        #[arg(long = "tier", help = "Show details for one tier (trial, permanent)")]
        tier: Option<String>,
    },
}
