use crate::export::ExportFormat;
use clap::{Parser, Subcommand};
use uuid::Uuid;

/// Command-line interface definition for rTimeclock
/// Employees clock in/out, admins manage users and export timesheets
#[derive(Parser)]
#[command(
    name = "rtimeclock",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple time clock: clock in/out, attach notes, export timesheets to spreadsheets",
    long_about = None
)]
pub struct Cli {
    /// Override data directory (useful for tests or a shared folder)
    #[arg(global = true, long = "data")]
    pub data: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Verbose diagnostics (same as RUST_LOG=debug)
    #[arg(global = true, short = 'v', long = "verbose")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize configuration, data directory and settings.json
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// View or change settings.json (export path, admin restriction)
    Settings {
        #[arg(long = "print", help = "Print the current settings")]
        print: bool,

        #[arg(long = "save-path", help = "Directory where exports are saved")]
        save_path: Option<String>,

        #[arg(long = "restrict", help = "Require an admin id for privileged commands (true|false)")]
        restrict: Option<bool>,

        #[arg(long = "admin", help = "Id of the admin performing the change")]
        admin: Option<u32>,
    },

    /// Manage users
    User {
        #[command(subcommand)]
        action: UserAction,
    },

    /// Clock in (opens a new session)
    In {
        /// User id
        id: u32,
    },

    /// Clock out (closes the open session)
    Out {
        /// User id
        id: u32,
    },

    /// Add a note to the open session
    Note {
        /// User id
        id: u32,

        /// Note text
        text: String,
    },

    /// Show whether a user is clocked in
    Status {
        /// User id
        id: u32,
    },

    /// Correct or remove a user's sessions (admin)
    Session {
        #[command(subcommand)]
        action: SessionAction,
    },

    /// Export a user's timesheet
    Export {
        /// User id
        id: u32,

        /// Export format (default from config, usually xlsx)
        #[arg(long, value_enum)]
        format: Option<ExportFormat>,

        /// Output file path (absolute path required); default <saveDataPath>/<name - id>.<ext>
        #[arg(long, value_name = "FILE")]
        file: Option<String>,

        /// Date range to export.
        ///
        /// Supported formats:
        /// - YYYY                  → entire year (e.g. "2025")
        /// - YYYY-MM              → entire month (e.g. "2025-06")
        /// - YYYY-MM-DD           → specific day  (e.g. "2025-06-18")
        ///
        /// Ranges (start:end) in the same format, or "all".
        #[arg(long, value_name = "RANGE")]
        range: Option<String>,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,

        #[arg(long = "admin", help = "Id of the admin performing the export")]
        admin: Option<u32>,
    },

    /// Print the internal operation log
    Log {
        #[arg(long = "print", help = "Print the internal log")]
        print: bool,
    },
}

#[derive(Subcommand)]
pub enum UserAction {
    /// Create a user (the first user of an empty store must be an admin)
    Add {
        #[arg(long = "first")]
        first: String,

        #[arg(long = "last", default_value = "")]
        last: String,

        /// admin | employee | any other tag
        #[arg(long = "level", default_value = "employee")]
        level: String,

        #[arg(long = "admin", help = "Id of the admin creating the user")]
        admin: Option<u32>,
    },

    /// List all users
    List,

    /// Show a user's sessions and total hours
    Show {
        id: u32,

        #[arg(long, short, help = "Filter by year/month/day or a custom range")]
        period: Option<String>,
    },

    /// Delete a user (irreversible)
    Del {
        id: u32,

        #[arg(long = "admin")]
        admin: Option<u32>,

        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },
}

#[derive(Subcommand)]
pub enum SessionAction {
    /// Overwrite fields of a session
    Edit {
        /// User id
        id: u32,

        #[arg(long, required_unless_present = "session", conflicts_with = "session")]
        index: Option<usize>,

        #[arg(long)]
        session: Option<Uuid>,

        #[arg(long = "in-date", help = "m-d-yyyy or yyyy-mm-dd")]
        in_date: Option<String>,

        #[arg(long = "clock-in", help = "h:mm:ss am|pm")]
        clock_in: Option<String>,

        #[arg(long = "out-date", help = "m-d-yyyy or yyyy-mm-dd")]
        out_date: Option<String>,

        #[arg(long = "clock-out", help = "h:mm:ss am|pm")]
        clock_out: Option<String>,

        /// Replace notes: repeat `--note "4:05:30 pm|text"`
        #[arg(long = "note")]
        note: Vec<String>,

        /// Remove all notes
        #[arg(long = "clear-notes", conflicts_with = "note")]
        clear_notes: bool,

        #[arg(long = "admin")]
        admin: Option<u32>,
    },

    /// Delete a session
    Del {
        /// User id
        id: u32,

        #[arg(long, required_unless_present = "session", conflicts_with = "session")]
        index: Option<usize>,

        #[arg(long)]
        session: Option<Uuid>,

        #[arg(long = "admin")]
        admin: Option<u32>,

        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },
}
