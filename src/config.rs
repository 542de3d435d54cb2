//! Command-line and environment configuration.

use clap::Parser;

use crate::practice_engine::DEFAULT_MAX_QUESTIONS;

/// Math facts practice server.
#[derive(Parser, Debug, Clone)]
#[command(name = "facts-drill")]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Address to listen on
    #[arg(long, env = "FACTS_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on (0 picks a free port)
    #[arg(short = 'p', long, env = "FACTS_PORT", default_value_t = 8080)]
    pub port: u16,

    /// Number of facts advertised on the welcome page
    #[arg(long, env = "FACTS_MAX_QUESTIONS", default_value_t = DEFAULT_MAX_QUESTIONS)]
    pub max_questions: u32,

    /// Enable debug logging
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

impl Args {
    /// `EnvFilter` directive for this crate.
    pub fn log_directive(&self) -> String {
        let level = if self.verbose { "debug" } else { "info" };
        format!("facts_drill={level}")
    }
}
