//! HTML statements.
//!
//! ```text
//! <h1>Statement for BigCo</h1>
//! <table>
//! <tr><th>play</th><th>seats</th><th>cost</th></tr>
//!  <tr><td>Hamlet</td><td>55</td><td>$650.00</td></tr>
//! </table>
//! <p>Amount owed is <em>$650.00</em></p>
//! <p>You earned <em>25</em> credits</p>
//! ```

use std::borrow::Cow;
use std::fmt::Write;

use marquee_core::Statement;

use crate::{OutputFormat, RenderResult, StatementRenderer};

/// Renders statements as an HTML fragment.
///
/// Customer and play names are escaped; everything else is numeric.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlRenderer;

impl StatementRenderer for HtmlRenderer {
    fn format(&self) -> OutputFormat {
        OutputFormat::Html
    }

    fn render(&self, statement: &Statement) -> RenderResult<String> {
        let mut out = String::new();
        writeln!(out, "<h1>Statement for {}</h1>", escape(&statement.customer))?;
        writeln!(out, "<table>")?;
        writeln!(out, "<tr><th>play</th><th>seats</th><th>cost</th></tr>")?;
        for line in &statement.lines {
            writeln!(
                out,
                " <tr><td>{}</td><td>{}</td><td>{}</td></tr>",
                escape(&line.play_name),
                line.seats,
                line.amount
            )?;
        }
        writeln!(out, "</table>")?;
        writeln!(out, "<p>Amount owed is <em>{}</em></p>", statement.total_amount())?;
        writeln!(out, "<p>You earned <em>{}</em> credits</p>", statement.total_credits)?;
        Ok(out)
    }
}

/// Escapes text for use inside HTML elements.
fn escape(raw: &str) -> Cow<'_, str> {
    html_escape::encode_safe(raw)
}
