//! # marquee-cli
//!
//! Library half of the `marquee` binary: argument parsing, configuration,
//! file loading and the billing loop. `main.rs` only wires these together
//! and installs the tracing subscriber.
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          marquee run                                    │
//! │                                                                         │
//! │  Args ──► MarqueeConfig::load ──► apply_args                           │
//! │                                      │                                  │
//! │  --plays ────► loader::load_catalog ─┤                                  │
//! │  --invoices ─► loader::load_invoices ┤                                  │
//! │                                      ▼                                  │
//! │            billing::print_statements(stdout, renderer_for(format))     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod billing;
pub mod cli;
pub mod config;
pub mod error;
pub mod loader;

use std::io::Write;
use tracing::warn;

use marquee_core::StatementCalculator;
use marquee_render::renderer_for;

pub use billing::{print_statements, RunSummary};
pub use cli::Args;
pub use config::{FailurePolicy, MarqueeConfig};
pub use error::{CliError, CliResult};

/// Loads both input files and prints every statement to `out`.
pub fn run<W: Write>(args: &Args, config: &MarqueeConfig, out: &mut W) -> CliResult<RunSummary> {
    let plays = args
        .plays
        .as_deref()
        .ok_or_else(|| CliError::InvalidConfig("--plays is required".into()))?;
    let invoices = args
        .invoices
        .as_deref()
        .ok_or_else(|| CliError::InvalidConfig("--invoices is required".into()))?;

    let catalog = loader::load_catalog(plays)?;
    let invoices = loader::load_invoices(invoices)?;
    let calculator = StatementCalculator::standard();
    let renderer = renderer_for(config.output.format);

    for id in billing::unpriceable_plays(&catalog, calculator.rules()) {
        warn!(play_id = %id, "Play has no pricing rule for its genre");
    }

    print_statements(
        out,
        &invoices,
        &catalog,
        &calculator,
        renderer.as_ref(),
        config.billing.on_error,
    )
}
