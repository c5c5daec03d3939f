use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "timeoff")]
#[command(about = "Command-line tracker for leave applications", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Keep application data in this directory instead of the default
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Submit a new leave application
    #[command(alias = "a")]
    Apply {
        /// Applicant name
        #[arg(short, long)]
        name: Option<String>,

        /// Leave type: Sick, Casual or Earned
        #[arg(short = 't', long = "type", value_name = "TYPE")]
        leave_type: Option<String>,

        /// First day of leave (YYYY-MM-DD)
        #[arg(long, value_name = "DATE")]
        from: Option<String>,

        /// Last day of leave (YYYY-MM-DD)
        #[arg(long, value_name = "DATE")]
        to: Option<String>,

        /// Why the leave is needed
        #[arg(short, long)]
        reason: Option<String>,
    },

    /// List every leave application on record
    #[command(alias = "ls")]
    History,

    /// Edit an application by its position in the history
    #[command(alias = "e")]
    Edit {
        /// Position as shown by history (1, 2, 3, ...)
        position: String,

        /// Applicant name
        #[arg(short, long)]
        name: Option<String>,

        /// Leave type: Sick, Casual or Earned
        #[arg(short = 't', long = "type", value_name = "TYPE")]
        leave_type: Option<String>,

        /// First day of leave (YYYY-MM-DD)
        #[arg(long, value_name = "DATE")]
        from: Option<String>,

        /// Last day of leave (YYYY-MM-DD)
        #[arg(long, value_name = "DATE")]
        to: Option<String>,

        /// Why the leave is needed
        #[arg(short, long)]
        reason: Option<String>,
    },

    /// Delete an application by its position in the history
    #[command(alias = "rm")]
    Delete {
        /// Position as shown by history (1, 2, 3, ...)
        position: String,

        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },

    /// Show the dashboard (total and recently applied leaves)
    Home,

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., recent-limit)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
