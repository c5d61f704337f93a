use crate::models::JobStatus;
use crate::view::StatusFilter;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "jobtrack")]
#[command(about = "Command-line client for the job application tracker API", long_about = None)]
pub struct Cli {
    #[arg(
        long = "api-url",
        global = true,
        help = "Custom API base URL (overrides JOBTRACK_API_URL and the config file)"
    )]
    pub api_url: Option<String>,

    #[arg(
        short = 'v',
        long = "verbose",
        global = true,
        help = "Print diagnostic output to stderr"
    )]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Log in and store the session
    Login {
        email: String,
        #[arg(help = "Password (prompted on stdin when omitted)")]
        password: Option<String>,
    },

    /// Create an account and store the session
    Signup {
        name: String,
        email: String,
        #[arg(help = "Password (prompted on stdin when omitted)")]
        password: Option<String>,
    },

    /// Clear the stored session
    Logout,

    /// Show stat tiles, the status chart and the job list
    Dashboard {
        #[arg(long, default_value = "all", help = "Status filter (or 'all')")]
        status: StatusFilter,
        #[arg(long, default_value = "", help = "Case-insensitive company search")]
        search: String,
    },

    /// Show the job list only
    List {
        #[arg(long, default_value = "all", help = "Status filter (or 'all')")]
        status: StatusFilter,
        #[arg(long, default_value = "", help = "Case-insensitive company search")]
        search: String,
    },

    /// Track a new application
    Add {
        company: String,
        role: String,
        #[arg(long, default_value = "Applied")]
        status: JobStatus,
    },

    /// Replace the fields of a tracked application
    Edit {
        id: String,
        company: String,
        role: String,
        #[arg(long, help = "New status (keeps the job's current status when omitted)")]
        status: Option<JobStatus>,
    },

    /// Stop tracking an application
    Delete { id: String },

    #[command(external_subcommand)]
    Other(Vec<String>),
}
