use crate::core::report::StatusFilter;
use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for daylogger
/// CLI application to track day-end logs across projects with SQLite
#[derive(Parser)]
#[command(
    name = "daylogger",
    version = env!("CARGO_PKG_VERSION"),
    about = "Manage projects, team members and day-end time logs, and reconcile pending dates",
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

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(
            long = "migrate",
            help = "Fill missing configuration fields with defaults"
        )]
        migrate: bool,

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

    /// Print the internal audit log
    Oplog {
        #[arg(long = "print", help = "Print rows from the internal audit table")]
        print: bool,
    },

    /// Manage users
    User {
        #[command(subcommand)]
        action: UserAction,
    },

    /// Manage projects
    Project {
        #[command(subcommand)]
        action: ProjectAction,
    },

    /// Manage project team members
    Member {
        #[command(subcommand)]
        action: MemberAction,
    },

    /// Submit a day-end log entry
    Log {
        /// Date of the log (YYYY-MM-DD)
        date: String,

        #[arg(long, help = "Email of the member submitting the log")]
        user: String,

        #[arg(long, help = "Project name")]
        project: String,

        #[arg(long, help = "Task description")]
        task: String,

        #[arg(long, help = "Time taken in hours (e.g. 1.5)")]
        hours: f64,

        #[arg(
            long,
            default_value = "work",
            help = "Entry kind: work, meeting or break"
        )]
        kind: String,

        #[arg(long, help = "Feature title the task belongs to")]
        feature: Option<String>,
    },

    /// Show the day-end log status of a member on a project
    Status {
        #[arg(long, help = "Email of the member")]
        user: String,

        #[arg(long, help = "Project name")]
        project: String,

        #[arg(
            long,
            help = "Evaluate the range as of this date (YYYY-MM-DD, default today)"
        )]
        today: Option<String>,

        #[arg(long, value_enum, default_value = "all")]
        filter: StatusFilter,

        #[arg(long, default_value_t = 1, help = "Page number of the view")]
        page: usize,

        #[arg(long = "details", help = "Show task entries under each date")]
        details: bool,

        #[arg(
            long = "show-weekend-pending",
            help = "List empty weekend dates as pending",
            conflicts_with = "skip_weekend_pending"
        )]
        show_weekend_pending: bool,

        #[arg(
            long = "skip-weekend-pending",
            help = "Omit empty weekend dates from the view"
        )]
        skip_weekend_pending: bool,
    },

    /// List pending dates across every reporting membership of a user
    Pending {
        #[arg(long, help = "Email of the member")]
        user: String,

        #[arg(long, help = "Evaluate as of this date (YYYY-MM-DD, default today)")]
        today: Option<String>,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,
    },

    /// Export the day-end log report
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, help = "Email of the member")]
        user: String,

        #[arg(long, help = "Project name")]
        project: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum UserAction {
    /// Create a user
    Add {
        #[arg(long = "first-name")]
        first_name: String,

        #[arg(long = "last-name")]
        last_name: String,

        #[arg(long)]
        email: String,

        #[arg(long, help = "Grant admin rights")]
        admin: bool,

        #[arg(long, help = "Mark as a client account")]
        client: bool,
    },

    /// List users
    List {
        #[arg(long, help = "Include deactivated users")]
        all: bool,
    },

    /// Deactivate a user
    Deactivate { email: String },
}

#[derive(Subcommand)]
pub enum ProjectAction {
    /// Create a project
    Add {
        name: String,

        #[arg(long, default_value = "")]
        description: String,

        #[arg(long, help = "Email of the client user attached to the project")]
        client: Option<String>,
    },

    /// List projects
    List {
        #[arg(long, help = "Include closed projects")]
        all: bool,
    },

    /// Close a project
    Close { name: String },
}

#[derive(Subcommand)]
pub enum MemberAction {
    /// Assign a user to a project
    Assign {
        #[arg(long, help = "Email of the user")]
        user: String,

        #[arg(long, help = "Project name")]
        project: String,

        #[arg(long, default_value = "member")]
        role: String,

        #[arg(long, help = "Membership start date (YYYY-MM-DD, default today)")]
        start: Option<String>,

        #[arg(long, help = "Membership end date (YYYY-MM-DD, open-ended if omitted)")]
        end: Option<String>,

        #[arg(
            long = "no-reporting",
            help = "Do not expect day-end logs from this member"
        )]
        no_reporting: bool,
    },

    /// List members of a project
    List {
        #[arg(long, help = "Project name")]
        project: String,
    },
}
