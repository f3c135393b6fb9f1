//! # Statement Calculator
//!
//! Prices every performance on an invoice and aggregates the result.
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  for each performance (invoice order)                                   │
//! │       │                                                                 │
//! │       ├── Catalog::play(play_id)      ── missing? → UnknownPlay         │
//! │       │                                                                 │
//! │       ├── RuleBook::select(genre)     ── missing? → UnknownGenre        │
//! │       │                                                                 │
//! │       ├── rule.amount(audience), rule.credits(audience)                 │
//! │       │                                                                 │
//! │       └── push StatementLine { play name, amount, seats }              │
//! │                                                                         │
//! │  Statement { customer, lines, total_credits }                          │
//! │                                                                         │
//! │  First failure aborts. No partial statement is ever returned.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::debug;

use crate::error::CoreResult;
use crate::pricing::RuleBook;
use crate::types::{Catalog, Invoice, Statement, StatementLine};

/// Calculates the statement for one invoice.
///
/// ## Example
/// ```rust
/// use marquee_core::{calculate_statement, Catalog, Invoice, Performance, Play, RuleBook};
///
/// let catalog = Catalog::from_plays([("as-like", Play::new("As You Like It", "comedy"))]).unwrap();
/// let invoice = Invoice::new("BigCo", vec![Performance::new("as-like", 35)]);
///
/// let statement = calculate_statement(&invoice, &catalog, &RuleBook::standard()).unwrap();
/// assert_eq!(statement.lines[0].amount.cents(), 58_000);
/// assert_eq!(statement.total_credits, 12);
/// ```
pub fn calculate_statement(
    invoice: &Invoice,
    catalog: &Catalog,
    rules: &RuleBook,
) -> CoreResult<Statement> {
    let mut lines = Vec::with_capacity(invoice.performances.len());
    let mut total_credits: u64 = 0;

    for perf in &invoice.performances {
        let play = catalog.play(&perf.play_id)?;
        let rule = rules.select(&play.genre).inspect_err(|_| {
            debug!(play_id = %perf.play_id, genre = %play.genre, "No pricing rule for genre");
        })?;

        let amount = rule.amount(perf.audience);
        let credits = rule.credits(perf.audience);
        debug!(
            play_id = %perf.play_id,
            rule = rule.name(),
            audience = perf.audience,
            amount_cents = amount.cents(),
            credits,
            "Priced performance"
        );

        total_credits += credits;
        lines.push(StatementLine {
            play_name: play.name.clone(),
            amount,
            seats: perf.audience,
        });
    }

    let statement = Statement {
        customer: invoice.customer.clone(),
        lines,
        total_credits,
    };
    debug!(
        customer = %statement.customer,
        lines = statement.lines.len(),
        total_cents = statement.total_amount().cents(),
        total_credits,
        "Statement calculated"
    );
    Ok(statement)
}

/// A calculator bound to one rule book.
///
/// Convenient when the same rules price many invoices.
#[derive(Debug, Clone, Default)]
pub struct StatementCalculator {
    rules: RuleBook,
}

impl StatementCalculator {
    pub fn new(rules: RuleBook) -> Self {
        StatementCalculator { rules }
    }

    /// A calculator using [`RuleBook::standard`].
    pub fn standard() -> Self {
        Self::new(RuleBook::standard())
    }

    pub fn rules(&self) -> &RuleBook {
        &self.rules
    }

    pub fn calculate(&self, invoice: &Invoice, catalog: &Catalog) -> CoreResult<Statement> {
        calculate_statement(invoice, catalog, &self.rules)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use crate::money::Money;
    use crate::pricing::{COMEDY, TRAGEDY};
    use crate::types::{Genre, Performance, Play, PlayId};

    fn classic_catalog() -> Catalog {
        Catalog::from_plays([
            ("hamlet", Play::new("Hamlet", "tragedy")),
            ("as-like", Play::new("As You Like It", "comedy")),
            ("othello", Play::new("Othello", "tragedy")),
        ])
        .unwrap()
    }

    fn big_co() -> Invoice {
        Invoice::new(
            "BigCo",
            vec![
                Performance::new("hamlet", 55),
                Performance::new("as-like", 35),
                Performance::new("othello", 40),
            ],
        )
    }

    #[test]
    fn test_single_tragedy() {
        let catalog = Catalog::from_plays([("hamlet", Play::new("Hamlet", "tragedy"))]).unwrap();
        let invoice = Invoice::new("BigCo", vec![Performance::new("hamlet", 55)]);

        let statement = calculate_statement(&invoice, &catalog, &RuleBook::standard()).unwrap();

        assert_eq!(statement.customer, "BigCo");
        assert_eq!(
            statement.lines,
            vec![StatementLine {
                play_name: "Hamlet".to_string(),
                amount: Money::from_cents(65_000),
                seats: 55,
            }]
        );
        assert_eq!(statement.total_credits, 25);
    }

    #[test]
    fn test_classic_invoice() {
        let statement =
            calculate_statement(&big_co(), &classic_catalog(), &RuleBook::standard()).unwrap();

        let amounts: Vec<i64> = statement.lines.iter().map(|l| l.amount.cents()).collect();
        assert_eq!(amounts, vec![65_000, 58_000, 50_000]);
        assert_eq!(statement.total_amount().cents(), 173_000);
        assert_eq!(statement.total_credits, 47);
    }

    #[test]
    fn test_lines_follow_invoice_order() {
        let invoice = Invoice::new(
            "OrderCo",
            vec![
                Performance::new("othello", 1),
                Performance::new("as-like", 2),
                Performance::new("hamlet", 3),
                Performance::new("othello", 4),
            ],
        );
        let statement =
            calculate_statement(&invoice, &classic_catalog(), &RuleBook::standard()).unwrap();

        assert_eq!(statement.lines.len(), invoice.performances.len());
        let names: Vec<&str> = statement.lines.iter().map(|l| l.play_name.as_str()).collect();
        assert_eq!(names, vec!["Othello", "As You Like It", "Hamlet", "Othello"]);
        let seats: Vec<u32> = statement.lines.iter().map(|l| l.seats).collect();
        assert_eq!(seats, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_total_credits_is_sum_of_rule_credits() {
        let invoice = big_co();
        let statement =
            calculate_statement(&invoice, &classic_catalog(), &RuleBook::standard()).unwrap();

        let expected = TRAGEDY.credits(55) + COMEDY.credits(35) + TRAGEDY.credits(40);
        assert_eq!(statement.total_credits, expected);
    }

    #[test]
    fn test_zero_seats_is_floor_price() {
        let invoice = Invoice::new(
            "EmptyHouse",
            vec![Performance::new("hamlet", 0), Performance::new("as-like", 0)],
        );
        let statement =
            calculate_statement(&invoice, &classic_catalog(), &RuleBook::standard()).unwrap();
        assert_eq!(statement.total_amount().cents(), 40_000 + 30_000);
        assert_eq!(statement.total_credits, 0);
    }

    #[test]
    fn test_invoice_without_performances() {
        let invoice = Invoice::new("Quiet Ltd", vec![]);
        let statement =
            calculate_statement(&invoice, &classic_catalog(), &RuleBook::standard()).unwrap();
        assert!(statement.lines.is_empty());
        assert!(statement.total_amount().is_zero());
        assert_eq!(statement.total_credits, 0);
    }

    #[test]
    fn test_unknown_play_aborts() {
        let invoice = Invoice::new(
            "BigCo",
            vec![Performance::new("hamlet", 55), Performance::new("macbeth", 10)],
        );
        let err = calculate_statement(&invoice, &classic_catalog(), &RuleBook::standard())
            .unwrap_err();
        assert_eq!(err, CoreError::UnknownPlay(PlayId::from("macbeth")));
    }

    #[test]
    fn test_unknown_genre_aborts() {
        let mut catalog = classic_catalog();
        catalog
            .insert("henry-v", Play::new("Henry V", "history"))
            .unwrap();
        let invoice = Invoice::new(
            "BigCo",
            vec![Performance::new("hamlet", 55), Performance::new("henry-v", 10)],
        );
        let err = calculate_statement(&invoice, &catalog, &RuleBook::standard()).unwrap_err();
        assert_eq!(err, CoreError::UnknownGenre(Genre::from("history")));
    }

    #[test]
    fn test_first_failure_in_invoice_order_wins() {
        let mut catalog = classic_catalog();
        catalog
            .insert("henry-v", Play::new("Henry V", "history"))
            .unwrap();
        let invoice = Invoice::new(
            "BigCo",
            vec![Performance::new("henry-v", 10), Performance::new("macbeth", 10)],
        );
        let err = calculate_statement(&invoice, &catalog, &RuleBook::standard()).unwrap_err();
        assert!(matches!(err, CoreError::UnknownGenre(_)));
    }

    #[test]
    fn test_calculation_is_idempotent() {
        let calculator = StatementCalculator::standard();
        let catalog = classic_catalog();
        let invoice = big_co();

        let first = calculator.calculate(&invoice, &catalog).unwrap();
        let second = calculator.calculate(&invoice, &catalog).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_custom_rule_book_prices_new_genre() {
        fn flat_amount(_: u32) -> Money {
            Money::from_cents(10_000)
        }
        fn no_credits(_: u32) -> u64 {
            0
        }

        let mut catalog = classic_catalog();
        catalog
            .insert("henry-v", Play::new("Henry V", "history"))
            .unwrap();
        let rules = RuleBook::standard().with_rule(
            "history",
            crate::pricing::PricingRule::new("history", flat_amount, no_credits),
        );
        let calculator = StatementCalculator::new(rules);

        let invoice = Invoice::new("BigCo", vec![Performance::new("henry-v", 80)]);
        let statement = calculator.calculate(&invoice, &catalog).unwrap();
        assert_eq!(statement.total_amount().cents(), 10_000);
        assert_eq!(statement.total_credits, 0);
        assert_eq!(calculator.rules().len(), 3);
    }
}
