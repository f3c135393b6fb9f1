//! Plain text statements.
//!
//! ```text
//! Statement for BigCo
//!  Hamlet: $650.00 (55 seats)
//!  As You Like It: $580.00 (35 seats)
//!  Othello: $500.00 (40 seats)
//! Amount owed is $1,730.00
//! You earned 47 credits
//! ```

use std::fmt::Write;

use marquee_core::Statement;

use crate::{OutputFormat, RenderResult, StatementRenderer};

/// Renders statements as plain text.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer;

impl StatementRenderer for TextRenderer {
    fn format(&self) -> OutputFormat {
        OutputFormat::Text
    }

    fn render(&self, statement: &Statement) -> RenderResult<String> {
        let mut out = String::new();
        writeln!(out, "Statement for {}", statement.customer)?;
        for line in &statement.lines {
            writeln!(out, " {}: {} ({} seats)", line.play_name, line.amount, line.seats)?;
        }
        writeln!(out, "Amount owed is {}", statement.total_amount())?;
        writeln!(out, "You earned {} credits", statement.total_credits)?;
        Ok(out)
    }
}
