use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for focuslog
/// CLI application to log work sessions and view time statistics
#[derive(Parser)]
#[command(
    name = "focuslog",
    version = env!("CARGO_PKG_VERSION"),
    about = "A personal time tracker: log sessions, run a timer, view weekly and daily statistics",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Override timer state file (useful for tests)
    #[arg(global = true, long = "timer-file", hide = true)]
    pub timer_file: Option<String>,

    /// Continue as guest: no credentials, ephemeral in-memory data
    #[arg(global = true, long = "guest")]
    pub guest: bool,

    /// Owner username (or FOCUSLOG_USER)
    #[arg(global = true, long = "user")]
    pub user: Option<String>,

    /// Owner password (or FOCUSLOG_PASSWORD)
    #[arg(global = true, long = "password")]
    pub password: Option<String>,

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

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration for missing fields")]
        check: bool,

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

    /// Log a session manually
    Add {
        /// Date of the session (YYYY-MM-DD)
        date: String,

        /// Start time (HH:MM)
        #[arg(long = "start", help = "Start time (HH:MM)")]
        start: String,

        /// End time (HH:MM); earlier than start means the session crossed midnight
        #[arg(long = "end", help = "End time (HH:MM)")]
        end: String,

        #[arg(long, help = "Project label (default from config)")]
        project: Option<String>,

        #[arg(long = "task", help = "Task type label (default from config)")]
        task_type: Option<String>,

        #[arg(long, help = "Free-text notes")]
        notes: Option<String>,

        #[arg(long, help = "Focus rating, 1-5 (default from config)")]
        focus: Option<i64>,
    },

    /// Start/stop timer that survives across invocations
    Timer {
        #[command(subcommand)]
        action: TimerAction,
    },

    /// List logged sessions, newest first
    List {
        #[arg(
            long,
            short,
            help = "Filter by year/month/day or a custom range (YYYY[-MM[-DD]][:..])"
        )]
        period: Option<String>,

        #[arg(long, help = "Filter by project label")]
        project: Option<String>,
    },

    /// Dashboard: weekly total, daily series and breakdown charts
    Stats,

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Manage the database (integrity checks, vacuum, info)
    Db {
        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Export the full session table
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Create a raw copy of the database file
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f')]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum TimerAction {
    /// Capture the current time as the session start
    Start,

    /// Show the timer phase and elapsed time
    Status {
        #[arg(long, help = "Re-render the elapsed time every second while running")]
        watch: bool,
    },

    /// Capture the end time and compute the duration
    Stop,

    /// Log the stopped timer as a session
    Log {
        #[arg(long, help = "Project label (default from config)")]
        project: Option<String>,

        #[arg(long = "task", help = "Task type label (default from config)")]
        task_type: Option<String>,

        #[arg(long, help = "Free-text notes")]
        notes: Option<String>,

        #[arg(long, help = "Focus rating, 1-5 (default from config)")]
        focus: Option<i64>,
    },

    /// Throw the timed interval away and return to idle
    Discard,
}
