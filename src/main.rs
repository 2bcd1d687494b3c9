use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;

use trekgram::app::App;
use trekgram::catalog::Catalog;
use trekgram::config::Config;
use trekgram::ui;

/// Get the default config file path (~/.config/trekgram/config.toml)
fn default_config_path() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME environment variable not set")?;
    Ok(PathBuf::from(home)
        .join(".config")
        .join("trekgram")
        .join("config.toml"))
}

#[derive(Parser, Debug)]
#[command(name = "trekgram", about = "Trekking photo feed for the terminal")]
struct Args {
    /// Config file (defaults to ~/.config/trekgram/config.toml)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Theme to start with, overriding the config file
    #[arg(long, value_parser = ["dark", "light"])]
    theme: Option<String>,

    /// Log the selected city on every render (needs RUST_LOG=debug)
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so they never mix with the TUI on stdout
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config_path = match args.config {
        Some(path) => path,
        None => default_config_path()?,
    };
    let mut config = Config::load(&config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;

    if let Some(theme) = args.theme {
        config.theme = theme;
    }
    if args.debug {
        config.debug_render = true;
    }

    let catalog = Arc::new(Catalog::builtin());
    tracing::debug!(
        cities = catalog.cities().len(),
        posts = catalog.posts().len(),
        "Catalog loaded"
    );

    let mut app = App::new(catalog);
    for warning in app.apply_config(&config) {
        tracing::warn!("{}", warning);
    }
    tracing::debug!(theme = app.theme_variant.name(), "Theme applied");

    ui::run(&mut app).await?;

    println!("Happy trekking!");
    Ok(())
}
