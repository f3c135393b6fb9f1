//! # Billing Run
//!
//! Prices and prints every invoice in a batch.
//!
//! ```text
//! invoices[0] ──► calculate ──► Statement ─┐
//! invoices[1] ──► calculate ──✗ UnknownPlay │
//!                     │                     │
//!                     ├── Abort: return CliError::Statement (nothing written)
//!                     └── Skip:  warn!, count, move on
//!                                           ▼
//!                              renderer.render_all ──► out
//! ```
//!
//! Text and HTML statements are separated by a blank line; JSON output is a
//! single array.

use std::io::Write;
use tracing::{info, warn};

use marquee_core::{Catalog, Invoice, PlayId, RuleBook, StatementCalculator};
use marquee_render::StatementRenderer;

use crate::config::FailurePolicy;
use crate::error::{CliError, CliResult};

/// Outcome of a billing run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Statements written to the output.
    pub rendered: usize,

    /// Invoices skipped under [`FailurePolicy::Skip`].
    pub skipped: usize,
}

/// Plays whose genre has no rule in `rules`, in id order.
///
/// Any invoice booking one of these will fail with `UnknownGenre`.
pub fn unpriceable_plays<'a>(catalog: &'a Catalog, rules: &RuleBook) -> Vec<&'a PlayId> {
    catalog
        .iter()
        .filter(|(_, play)| rules.select(&play.genre).is_err())
        .map(|(id, _)| id)
        .collect()
}

/// Calculates every invoice, then renders and writes the batch.
///
/// Output is only written once every invoice has been priced (or skipped),
/// so an aborted run writes nothing.
pub fn print_statements<W: Write>(
    out: &mut W,
    invoices: &[Invoice],
    catalog: &Catalog,
    calculator: &StatementCalculator,
    renderer: &dyn StatementRenderer,
    policy: FailurePolicy,
) -> CliResult<RunSummary> {
    let mut statements = Vec::with_capacity(invoices.len());
    let mut summary = RunSummary::default();

    for (index, invoice) in invoices.iter().enumerate() {
        match calculator.calculate(invoice, catalog) {
            Ok(statement) => statements.push(statement),
            Err(source) => match policy {
                FailurePolicy::Abort => {
                    return Err(CliError::Statement {
                        customer: invoice.customer.clone(),
                        source,
                    })
                }
                FailurePolicy::Skip => {
                    warn!(
                        index,
                        customer = %invoice.customer,
                        error = %source,
                        "Skipping invoice"
                    );
                    summary.skipped += 1;
                }
            },
        }
    }

    out.write_all(renderer.render_all(&statements)?.as_bytes())?;
    out.flush()?;

    summary.rendered = statements.len();
    info!(
        rendered = summary.rendered,
        skipped = summary.skipped,
        format = %renderer.format(),
        "Billing run complete"
    );
    Ok(summary)
}
