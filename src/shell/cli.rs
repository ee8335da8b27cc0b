// Command line surface. Parses arguments and routes each command to its inbound adapter.
//
// Boundaries
// - Adapters return the text to show; printing and exit codes belong to the binary.
// - Commands that act for an employee resolve the stored session here and pass it on.

use crate::modules::identity::use_cases::login::inbound::cli as login_cli;
use crate::modules::identity::use_cases::logout::inbound::cli as logout_cli;
use crate::modules::identity::use_cases::register::inbound::cli::{
    self as register_cli, RegisterArgs,
};
use crate::modules::identity::use_cases::restore_session::inbound::cli::{
    self as session_cli, current_session, require_session,
};
use crate::modules::identity::use_cases::search_employees::inbound::cli as employees_cli;
use crate::modules::jobs::use_cases::browse_jobs::inbound::cli::{
    JobsCommands, handle_jobs_command,
};
use crate::modules::time_entries::use_cases::admin_dashboard::inbound::cli as dashboard_cli;
use crate::modules::time_entries::use_cases::clock_in::inbound::cli as clock_in_cli;
use crate::modules::time_entries::use_cases::clock_out::inbound::cli::{
    self as clock_out_cli, ClockOutTarget,
};
use crate::modules::time_entries::use_cases::list_time_entries::inbound::cli as entries_cli;
use crate::modules::time_entries::use_cases::review_time_entry::command::Verdict;
use crate::modules::time_entries::use_cases::review_time_entry::inbound::cli as review_cli;
use crate::shared::infrastructure::key_value_store::KeyValueStore;
use crate::shell::config::Config;
use crate::shell::state::AppState;
use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "field_timesheets", version)]
#[command(about = "Field service jobs, clock in/out and timesheets", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub config: Config,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Sign in on this device
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Create a local employee account and sign in
    Register(RegisterArgs),
    /// Sign out on this device
    Logout,
    /// Show who is signed in
    Whoami,
    /// Browse the job schedule
    Jobs {
        #[command(subcommand)]
        command: JobsCommands,
    },
    /// Start working on a job
    ClockIn {
        /// Job id, e.g. job-001
        job_id: String,
    },
    /// Stop working, by entry id or by job
    ClockOut {
        /// Time entry id
        #[arg(required_unless_present = "job", conflicts_with = "job")]
        entry_id: Option<String>,
        /// Close your open entry on this job instead
        #[arg(long)]
        job: Option<String>,
    },
    /// Show your open entry on a job
    Active {
        /// Job id, e.g. job-001
        job_id: String,
    },
    /// Show your time entries with daily totals
    Timesheet {
        /// Only entries clocked in on this day (YYYY-MM-DD, UTC)
        #[arg(long)]
        date: Option<NaiveDate>,
        /// Every employee's entries (administrators only)
        #[arg(long)]
        all: bool,
    },
    /// Administrator tools
    Admin {
        #[command(subcommand)]
        command: AdminCommands,
    },
}

#[derive(Debug, Subcommand)]
pub enum AdminCommands {
    /// Figures across all jobs and entries
    Dashboard,
    /// Finished entries waiting for a verdict
    Approvals,
    /// Approve a finished entry
    Approve { entry_id: String },
    /// Reject a finished entry
    Reject { entry_id: String },
    /// List employees, optionally filtered by name or email
    Employees {
        #[arg(long, default_value = "")]
        search: String,
    },
}

pub async fn handle_command<TStore>(command: Commands, state: &AppState<TStore>) -> Result<String>
where
    TStore: KeyValueStore + 'static,
{
    match command {
        Commands::Login { email, password } => login_cli::login(state, email, password).await,
        Commands::Register(args) => register_cli::register(state, args).await,
        Commands::Logout => logout_cli::logout(state).await,
        Commands::Whoami => session_cli::whoami(state).await,
        Commands::Jobs { command } => {
            let session = current_session(state).await?;
            handle_jobs_command(command, state, session.as_ref()).await
        }
        Commands::ClockIn { job_id } => {
            let session = require_session(state).await?;
            clock_in_cli::clock_in(state, &session, job_id).await
        }
        Commands::ClockOut { entry_id, job } => {
            let session = require_session(state).await?;
            let target = match (entry_id, job) {
                (_, Some(job_id)) => ClockOutTarget::Job(job_id),
                (Some(id), None) => ClockOutTarget::Entry(id),
                (None, None) => anyhow::bail!("give an entry id or --job"),
            };
            clock_out_cli::clock_out(state, &session, target).await
        }
        Commands::Active { job_id } => {
            let session = require_session(state).await?;
            entries_cli::active(state, &session, &job_id).await
        }
        Commands::Timesheet { date, all } => {
            let session = require_session(state).await?;
            entries_cli::timesheet(state, &session, date, all).await
        }
        Commands::Admin { command } => {
            let session = require_session(state).await?;
            match command {
                AdminCommands::Dashboard => {
                    if !session.is_admin() {
                        anyhow::bail!("only administrators can view the dashboard");
                    }
                    dashboard_cli::dashboard(state).await
                }
                AdminCommands::Approvals => review_cli::approvals(state, &session).await,
                AdminCommands::Approve { entry_id } => {
                    review_cli::review(state, &session, entry_id, Verdict::Approve).await
                }
                AdminCommands::Reject { entry_id } => {
                    review_cli::review(state, &session, entry_id, Verdict::Reject).await
                }
                AdminCommands::Employees { search } => {
                    employees_cli::employees(state, &session, &search).await
                }
            }
        }
    }
}
