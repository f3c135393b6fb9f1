//! # marquee-render: Statement Renderers
//!
//! Turns a calculated [`Statement`] into a string. Renderers only format the
//! values already in the statement; none of them prices anything.
//!
//! ## Renderers
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Statement → String                               │
//! │                                                                         │
//! │                      ┌──► TextRenderer  ("Statement for BigCo\n ...")   │
//! │                      │                                                  │
//! │   &Statement ────────┼──► HtmlRenderer  ("<h1>Statement for ...")       │
//! │                      │                                                  │
//! │                      └──► JsonRenderer  ({"customer": "BigCo", ...})    │
//! │                                                                         │
//! │   OutputFormat::from_str("html") ──► renderer_for(format)              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//! ```rust
//! use marquee_core::{Catalog, Invoice, Performance, Play, RuleBook};
//! use marquee_render::{render_statement, TextRenderer};
//!
//! let catalog = Catalog::from_plays([("hamlet", Play::new("Hamlet", "tragedy"))]).unwrap();
//! let invoice = Invoice::new("BigCo", vec![Performance::new("hamlet", 55)]);
//!
//! let text = render_statement(&invoice, &catalog, &RuleBook::standard(), &TextRenderer).unwrap();
//! assert!(text.contains("Amount owed is $650.00"));
//! ```

pub mod html;
pub mod json;
pub mod text;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use marquee_core::{calculate_statement, Catalog, CoreError, Invoice, RuleBook, Statement};

pub use html::HtmlRenderer;
pub use json::JsonRenderer;
pub use text::TextRenderer;

// =============================================================================
// Errors
// =============================================================================

/// Rendering errors.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The statement could not be calculated in the first place.
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Failed to serialize statement: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to format statement: {0}")]
    Format(#[from] fmt::Error),

    #[error("Unknown output format: '{0}'. Valid options: text, html, json")]
    UnknownFormat(String),
}

pub type RenderResult<T> = Result<T, RenderError>;

// =============================================================================
// Output Format
// =============================================================================

/// The output formats a statement can be rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Plain text, one line per performance.
    #[default]
    Text,

    /// An HTML fragment with a table of performances.
    Html,

    /// Pretty-printed JSON.
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Html => write!(f, "html"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" | "txt" | "plain" => Ok(OutputFormat::Text),
            "html" => Ok(OutputFormat::Html),
            "json" => Ok(OutputFormat::Json),
            other => Err(RenderError::UnknownFormat(other.to_string())),
        }
    }
}

// =============================================================================
// Renderer Trait
// =============================================================================

/// Formats a completed statement.
pub trait StatementRenderer {
    /// Which format this renderer produces.
    fn format(&self) -> OutputFormat;

    /// Renders the statement. Must not recompute any amount.
    fn render(&self, statement: &Statement) -> RenderResult<String>;

    /// Renders a batch of statements as one document.
    ///
    /// The default joins each rendered statement with a blank line.
    fn render_all(&self, statements: &[Statement]) -> RenderResult<String> {
        let mut out = String::new();
        for (i, statement) in statements.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            out.push_str(&self.render(statement)?);
        }
        Ok(out)
    }
}

/// Returns the renderer for a format.
pub fn renderer_for(format: OutputFormat) -> Box<dyn StatementRenderer> {
    match format {
        OutputFormat::Text => Box::new(TextRenderer),
        OutputFormat::Html => Box::new(HtmlRenderer),
        OutputFormat::Json => Box::new(JsonRenderer),
    }
}

/// Calculates and renders in one step.
///
/// Fails with [`RenderError::Core`] if the invoice cannot be priced; nothing
/// is rendered in that case.
pub fn render_statement(
    invoice: &Invoice,
    catalog: &Catalog,
    rules: &RuleBook,
    renderer: &dyn StatementRenderer,
) -> RenderResult<String> {
    let statement = calculate_statement(invoice, catalog, rules)?;
    renderer.render(&statement)
}

// =============================================================================
// Test Fixtures
// =============================================================================

#[cfg(test)]
pub(crate) mod fixtures {
    use marquee_core::{calculate_statement, Catalog, Invoice, Performance, Play, RuleBook, Statement};

    pub fn classic_catalog() -> Catalog {
        Catalog::from_plays([
            ("hamlet", Play::new("Hamlet", "tragedy")),
            ("as-like", Play::new("As You Like It", "comedy")),
            ("othello", Play::new("Othello", "tragedy")),
        ])
        .unwrap()
    }

    pub fn big_co() -> Invoice {
        Invoice::new(
            "BigCo",
            vec![
                Performance::new("hamlet", 55),
                Performance::new("as-like", 35),
                Performance::new("othello", 40),
            ],
        )
    }

    pub fn big_co_statement() -> Statement {
        calculate_statement(&big_co(), &classic_catalog(), &RuleBook::standard()).unwrap()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
