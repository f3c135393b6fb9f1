//! JSON statements for programs that consume billing output.
//!
//! A single statement renders as an object; a batch renders as an array.

use serde::Serialize;

use marquee_core::{Statement, StatementLine};

use crate::{OutputFormat, RenderResult, StatementRenderer};

/// Wire shape of a rendered statement. The total is derived at render time.
#[derive(Serialize)]
struct JsonStatement<'a> {
    customer: &'a str,
    lines: &'a [StatementLine],
    total_amount_cents: i64,
    total_credits: u64,
}

/// Renders statements as pretty-printed JSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

impl<'a> From<&'a Statement> for JsonStatement<'a> {
    fn from(statement: &'a Statement) -> Self {
        JsonStatement {
            customer: &statement.customer,
            lines: &statement.lines,
            total_amount_cents: statement.total_amount().cents(),
            total_credits: statement.total_credits,
        }
    }
}

impl StatementRenderer for JsonRenderer {
    fn format(&self) -> OutputFormat {
        OutputFormat::Json
    }

    fn render(&self, statement: &Statement) -> RenderResult<String> {
        let mut json = serde_json::to_string_pretty(&JsonStatement::from(statement))?;
        json.push('\n');
        Ok(json)
    }

    /// A batch is one JSON array, so the output stays a single document.
    fn render_all(&self, statements: &[Statement]) -> RenderResult<String> {
        let wire: Vec<JsonStatement<'_>> = statements.iter().map(JsonStatement::from).collect();
        let mut json = serde_json::to_string_pretty(&wire)?;
        json.push('\n');
        Ok(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use serde_json::{json, Value};

    #[test]
    fn test_classic_json_statement() {
        let rendered = JsonRenderer.render(&fixtures::big_co_statement()).unwrap();
        let value: Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(
            value,
            json!({
                "customer": "BigCo",
                "lines": [
                    {"play_name": "Hamlet", "amount": 65000, "seats": 55},
                    {"play_name": "As You Like It", "amount": 58000, "seats": 35},
                    {"play_name": "Othello", "amount": 50000, "seats": 40}
                ],
                "total_amount_cents": 173000,
                "total_credits": 47
            })
        );
    }

    #[test]
    fn test_batch_is_one_json_array() {
        let statement = fixtures::big_co_statement();
        let rendered = JsonRenderer
            .render_all(&[statement.clone(), statement])
            .unwrap();
        let value: Value = serde_json::from_str(&rendered).unwrap();
        let statements = value.as_array().unwrap();
        assert_eq!(statements.len(), 2);
        assert_eq!(statements[1]["total_credits"], 47);

        assert_eq!(JsonRenderer.render_all(&[]).unwrap(), "[]\n");
    }

    #[test]
    fn test_json_ends_with_newline() {
        let rendered = JsonRenderer.render(&fixtures::big_co_statement()).unwrap();
        assert!(rendered.ends_with("}\n"));
    }
}
