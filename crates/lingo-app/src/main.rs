use std::path::PathBuf;

use clap::Parser;
use lingo_config::Config;
use tokio::signal;

pub mod controller;
pub mod events;
pub mod logging;
pub mod profile;
pub mod session;
pub mod state;
pub mod ui;

#[cfg(test)]
mod tests;

use self::controller::AppController;
use self::profile::Profiles;
use self::session::TranslationSession;

#[derive(Parser)]
#[command(name = "lingo", about = "Translate text with fallback across public translation services")]
struct Args {
    /// Profile to load from the user config directory
    #[arg(long, default_value = "main")]
    profile: String,

    /// Load this config file instead of a profile
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    let (config, load_error) = match load_config(&args) {
        Ok(config) => (config, None),
        Err(e) => (Config::new(), Some(e)),
    };

    logging::init_tracing(&config.logging);
    match load_error {
        Some(e) => tracing::warn!("Failed to load config, using defaults: {e:#}"),
        None => match &args.config {
            Some(path) => tracing::info!("Loaded config {}", path.display()),
            None => tracing::info!("Loaded profile {}", args.profile),
        },
    }

    let session = TranslationSession::from_config(&config)?;

    let controller = AppController::new();
    let mut tasks = controller.spawn_tasks(session);

    tokio::select! {
        _ = signal::ctrl_c() => {
            tracing::info!("Shutdown requested");
        }
        Some(result) = tasks.join_next() => {
            match result {
                Ok(Ok(())) => tracing::info!("task exited"),
                Ok(Err(e)) => tracing::error!("task failed: {e:#}"),
                Err(e) => tracing::error!("task panicked: {e}"),
            }
        }
    }

    controller.shutdown();

    while let Some(result) = tasks.join_next().await {
        match result {
            Ok(Ok(())) => {}
            Ok(Err(e)) => tracing::error!("task failed during shutdown: {e:#}"),
            Err(e) => tracing::error!("task panicked during shutdown: {e}"),
        }
    }

    Ok(())
}

fn load_config(args: &Args) -> anyhow::Result<Config> {
    let config = match &args.config {
        Some(path) => profile::load_config_file(path)?,
        None => {
            let profiles = Profiles::user()?;
            profiles.init()?;
            profiles.load(&args.profile)?
        }
    };

    Ok(config.with_env_overrides())
}
