//! # marquee
//!
//! Prints billing statements for theatre performances.
//!
//! ```text
//! marquee --plays plays.json --invoices invoices.json [--format html] [--on-error skip]
//! ```
//!
//! Statements go to stdout, logs go to stderr.

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use marquee_cli::{run, Args, MarqueeConfig};

fn main() -> Result<()> {
    let args = Args::parse();

    if args.gen_config {
        let toml = toml::to_string_pretty(&MarqueeConfig::default())?;
        println!("{}", toml);
        return Ok(());
    }

    // Config loading logs before the configured filter is known.
    let mut config = tracing::subscriber::with_default(bootstrap_subscriber(), || {
        MarqueeConfig::load(args.config.clone())
    })
    .context("loading configuration")?;
    config.apply_args(&args);
    config.validate()?;

    init_tracing(&config.logging.filter);
    info!(
        format = %config.output.format,
        on_error = %config.billing.on_error,
        "Starting billing run"
    );

    let stdout = std::io::stdout();
    let summary = run(&args, &config, &mut stdout.lock())?;

    if summary.skipped > 0 {
        info!(skipped = summary.skipped, "Some invoices were skipped");
    }
    Ok(())
}

fn bootstrap_subscriber() -> impl tracing::Subscriber + Send + Sync {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .with_target(false)
        .finish()
}

/// Installs the stderr subscriber. `RUST_LOG` wins over the configured filter,
/// which `MarqueeConfig::validate` has already checked.
fn init_tracing(filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
