//! CLI module for the EQ Coach client
//!
//! Every backend subcommand prints the JSON envelope, which is marked
//! degraded when a local substitute was served.

mod auth;
mod backend;
mod context;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

pub use context::ClientContext;

use crate::config::AppConfig;
use crate::domain::wellness::DEFAULT_REWRITE_INTENT;
use crate::infrastructure::services::DEFAULT_MOOD_SERIES_DAYS;

/// EQ Coach client - wellness backend access with offline fallbacks
#[derive(Parser)]
#[command(name = "eqcoach")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Probe the backend
    Health,

    /// List check-in questions
    Questions {
        /// List the baseline assessment questions instead
        #[arg(long)]
        baseline: bool,
    },

    /// Submit a daily check-in
    Checkin(CheckinArgs),

    /// Analyze a journal entry
    Analyze {
        text: String,
    },

    /// Score a baseline assessment
    Baseline {
        /// Answer as qid=value, repeatable
        #[arg(short, long = "answer", value_parser = parse_key_value, required = true)]
        answers: Vec<(String, f64)>,
    },

    /// Rewrite a message to be assertive and kind
    Rewrite(RewriteArgs),

    /// Show mood history with trend statistics
    MoodSeries {
        #[arg(long)]
        user: String,

        #[arg(long, default_value_t = DEFAULT_MOOD_SERIES_DAYS)]
        days: u32,
    },

    /// Suggest an exercise for the given facets
    Exercise {
        /// Target facet, repeatable
        #[arg(short, long = "facet")]
        facets: Vec<String>,
    },

    /// Screen text for safety concerns
    Safety {
        text: String,
    },

    /// Talk to the mood coach
    Chat {
        message: String,

        /// Session to continue; a new one is started when omitted
        #[arg(long)]
        session: Option<String>,
    },

    /// Store a bearer token for backend calls
    Login {
        token: String,
    },

    /// Forget the stored bearer token
    Logout,
}

#[derive(Args, Clone)]
pub struct CheckinArgs {
    /// Response as question=value, repeatable
    #[arg(short, long = "response", value_parser = parse_key_value)]
    pub responses: Vec<(String, f64)>,

    #[arg(long)]
    pub user: Option<String>,

    /// Check-in date (YYYY-MM-DD)
    #[arg(long)]
    pub date: Option<NaiveDate>,
}

#[derive(Args, Clone)]
pub struct RewriteArgs {
    pub text: String,

    #[arg(long, default_value = DEFAULT_REWRITE_INTENT)]
    pub intent: String,

    /// Call the generative provider directly instead of the backend
    #[arg(long)]
    pub direct: bool,
}

/// Dispatches a parsed command
pub async fn run(cli: Cli, config: AppConfig) -> anyhow::Result<()> {
    let context = ClientContext::build(config).await?;

    match cli.command {
        Command::Login { token } => auth::login(&context, &token).await,
        Command::Logout => auth::logout(&context).await,
        command => backend::run(&context, command).await,
    }
}

fn parse_key_value(raw: &str) -> Result<(String, f64), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got '{}'", raw))?;

    let key = key.trim();
    if key.is_empty() {
        return Err(format!("missing key in '{}'", raw));
    }

    let value: f64 = value
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a number", value.trim()))?;

    if !value.is_finite() {
        return Err(format!("'{}' is not a finite number", value));
    }

    Ok((key.to_string(), value))
}
