//! Elidune Catalog - headless driver
//!
//! Reads one JSON command per line on stdin and writes one JSON reply per line on
//! stdout. Logs go to stderr.

use std::io::{self, BufRead, Write};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use elidune_catalog::{api, config::AppConfig, Library};

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;

    init_tracing(&config);

    tracing::info!("Starting Elidune Catalog v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        "Loan period {} days, fine {} per day, default limit {}",
        config.loans.duration_days,
        config.loans.fine_per_day,
        config.users.default_max_borrow_limit
    );

    let mut library = Library::new(&config);

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        writeln!(stdout, "{}", api::handle_line(&mut library, &line))?;
        stdout.flush()?;
    }

    tracing::info!("Input closed, shutting down ({:?})", library);
    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("elidune_catalog={}", config.logging.level).into());

    let registry = tracing_subscriber::registry().with(filter);
    if config.logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
            .init();
    }
}
