use crate::core::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rCheckin
#[derive(Parser)]
#[command(
    name = "rcheckin",
    version = env!("CARGO_PKG_VERSION"),
    about = "Attendee check-in desk: search the roster, show payment status, keep a history of recent check-ins",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Override roster file path (JSON array of {id, name, confirmed})
    #[arg(global = true, long = "roster")]
    pub roster: Option<String>,

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
        /// Print the current configuration file to stdout
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        /// Edit the configuration file with your preferred editor
        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        /// Specify the editor to use (overrides $EDITOR/$VISUAL).
        #[arg(long = "editor", help = "Specify the editor to use (vim, nano, or custom path)")]
        editor: Option<String>,
    },

    /// Show attendees whose name contains the query (at least 2 characters)
    Search {
        /// Part of the attendee's name, case-insensitive
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
    },

    /// Check an attendee in and show their payment status
    ///
    /// The query must match exactly one attendee; otherwise the candidates are
    /// listed and nothing is recorded. Use --id to pick one directly.
    Checkin {
        /// Part of the attendee's name
        #[arg(num_args = 0.., conflicts_with = "id")]
        query: Vec<String>,

        /// Attendee id from the roster
        #[arg(long = "id", required_unless_present = "query")]
        id: Option<String>,
    },

    /// Show, clear or export the recent check-ins
    History {
        /// Remove the stored history
        #[arg(long = "clear", conflicts_with = "export")]
        clear: bool,

        /// Write the history to FILE (absolute path required)
        #[arg(long = "export", value_name = "FILE")]
        export: Option<String>,

        /// Export format (default: json)
        #[arg(long = "format", value_enum, requires = "export")]
        format: Option<ExportFormat>,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f', requires = "export")]
        force: bool,
    },

    /// Print the loaded roster
    Roster,

    /// Interactive lookup: type a name, pick a number, `back`, `history`, `quit`
    Lookup,

    /// Print or manage the internal log table
    Log {
        /// Print rows from the internal `log` table
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}
