//! # marquee-core: Pure Billing Logic for Marquee
//!
//! This crate is the **heart** of Marquee. It turns a customer's invoice of
//! theatre performances into a priced statement, as pure functions with zero
//! I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Marquee Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    marquee-cli (binary)                         │   │
//! │  │    read plays.json ──► read invoices.json ──► print statements  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ marquee-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │  pricing  │  │ statement │  │ validation│  │   │
//! │  │   │  Invoice  │  │ RuleBook  │  │ Calculator│  │  raw JSON │  │   │
//! │  │   │  Catalog  │  │ Tragedy   │  │ Statement │  │  records  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO FILES • NO NETWORK • PURE FUNCTIONS              │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ Statement                              │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               marquee-render (text / html / json)               │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Play, Invoice, Catalog, Statement)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`pricing`] - Per-genre pricing rules and the genre → rule lookup
//! - [`statement`] - The statement calculator
//! - [`validation`] - Validating parse of raw JSON records
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use marquee_core::{calculate_statement, Catalog, Invoice, Performance, Play, RuleBook};
//!
//! let catalog = Catalog::from_plays([("hamlet", Play::new("Hamlet", "tragedy"))]).unwrap();
//! let invoice = Invoice::new("BigCo", vec![Performance::new("hamlet", 55)]);
//!
//! let statement = calculate_statement(&invoice, &catalog, &RuleBook::standard()).unwrap();
//!
//! // 40000 base + 1000 for each of the 25 seats above 30
//! assert_eq!(statement.total_amount().cents(), 65000);
//! assert_eq!(statement.total_credits, 25);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod pricing;
pub mod statement;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use pricing::{PricingRule, RuleBook, COMEDY, TRAGEDY};
pub use statement::{calculate_statement, StatementCalculator};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Genre tag priced by [`pricing::TRAGEDY`].
pub const GENRE_TRAGEDY: &str = "tragedy";

/// Genre tag priced by [`pricing::COMEDY`].
pub const GENRE_COMEDY: &str = "comedy";
