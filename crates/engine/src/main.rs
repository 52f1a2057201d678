//! Forgeworks Engine - Main entry point.

use std::io::Write;
use std::path::Path;

use anyhow::Context;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use forgeworks_engine::{config, demo, App, DemoConfig};

fn main() -> anyhow::Result<()> {
    // Load environment from repo root before the filter reads RUST_LOG.
    let repo_root = Path::new(env!("CARGO_MANIFEST_DIR")).join("..").join("..");
    let dotenv_failures = config::load_dotenv_files(&repo_root);

    // Initialize logging; stdout is reserved for demo output.
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "forgeworks_engine=info,forgeworks_domain=info".into()),
        )
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    for (path, error) in &dotenv_failures {
        tracing::warn!(path = %path.display(), error = %error, "Failed to load env file");
    }

    tracing::info!("Starting Forgeworks demonstrations");

    let config = DemoConfig::from_env().context("Failed to load config")?;
    tracing::debug!(?config, "Configuration loaded");

    let app = App::new(config);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    demo::run(&app, &mut out)?;
    out.flush().context("Failed to flush stdout")?;

    tracing::info!("Demonstrations complete");
    Ok(())
}
