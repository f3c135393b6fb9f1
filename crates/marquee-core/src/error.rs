//! # Error Types
//!
//! Domain-specific error types for marquee-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  marquee-core errors (this file)                                       │
//! │  ├── CoreError        - Statement calculation failures                 │
//! │  └── ValidationError  - Raw record validation failures                 │
//! │                                                                         │
//! │  CLI errors (apps/marquee-cli)                                         │
//! │  └── CliError         - Files, config, and wrapped CoreError           │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → CliError → exit code / log line   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (play id, genre, field)
//! 3. Errors are enum variants, never String
//! 4. Nothing in this crate recovers from an error; callers decide

use thiserror::Error;

use crate::types::{Genre, PlayId};

// =============================================================================
// Core Error
// =============================================================================

/// Statement calculation errors.
///
/// Any of these aborts the whole statement: the calculator never returns a
/// partially priced invoice.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A performance references a play that is not in the catalog.
    ///
    /// ## When This Occurs
    /// - Typo in the invoice `playID`
    /// - Invoice exported against a newer catalog than the one loaded
    #[error("Unknown play: {0}")]
    UnknownPlay(PlayId),

    /// The play's genre has no pricing rule registered.
    ///
    /// ## User Workflow
    /// ```text
    /// Catalog: "henry-v" → { genre: "history" }
    ///      │
    ///      ▼
    /// RuleBook::select("history")
    ///      │
    ///      ▼
    /// UnknownGenre("history")
    /// ```
    #[error("Unknown genre: {0}")]
    UnknownGenre(Genre),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Raw record validation errors.
///
/// Raised while turning untyped JSON records into [`crate::Invoice`] and
/// [`crate::Catalog`] values, before the calculator ever runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Duplicate key (e.g., the same play id twice).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },

    /// The input does not have the expected JSON shape.
    #[error("Malformed {what}: {reason}")]
    Malformed { what: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
