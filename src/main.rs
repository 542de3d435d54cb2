use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{filter::Directive, EnvFilter};

use facts_drill::{
    config::Args,
    practice_engine::SessionRegistry,
    web::{self, AppState},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let directive: Directive = args
        .log_directive()
        .parse()
        .context("invalid log directive")?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive))
        .init();

    let state = AppState::new(SessionRegistry::new(), args.max_questions);
    let (listener, addr) = web::bind(&args.host, args.port).await?;
    tracing::info!("facts drill listening on http://{}", addr);

    web::serve(listener, state).await?;
    Ok(())
}
