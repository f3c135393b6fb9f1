//! # Domain Types
//!
//! Core domain types used throughout Marquee.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  INPUT                                                                  │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Catalog      │   │    Invoice      │   │  Performance    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  PlayId → Play  │   │  customer       │   │  play_id        │       │
//! │  │                 │   │  performances[] │   │  audience (u32) │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  OUTPUT (derived, never mutated after calculation)                     │
//! │  ┌─────────────────┐   ┌─────────────────┐                             │
//! │  │   Statement     │   │ StatementLine   │                             │
//! │  │  ─────────────  │   │  ─────────────  │                             │
//! │  │  customer       │   │  play_name      │                             │
//! │  │  lines[]        │   │  amount (Money) │                             │
//! │  │  total_credits  │   │  seats          │                             │
//! │  └─────────────────┘   └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::collections::btree_map::{self, BTreeMap};
use std::fmt;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;

// =============================================================================
// Identifiers and Tags
// =============================================================================

/// Catalog key of a play (`"hamlet"`, `"as-like"`, ...).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayId(String);

impl PlayId {
    pub fn new(id: impl Into<String>) -> Self {
        PlayId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PlayId {
    fn from(id: &str) -> Self {
        PlayId(id.to_string())
    }
}

impl From<String> for PlayId {
    fn from(id: String) -> Self {
        PlayId(id)
    }
}

impl Borrow<str> for PlayId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Genre tag of a play.
///
/// The tag space is open: any string loads into the catalog. Whether a tag
/// can actually be priced is decided by [`crate::RuleBook::select`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Genre(String);

impl Genre {
    pub fn new(tag: impl Into<String>) -> Self {
        Genre(tag.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Genre {
    fn from(tag: &str) -> Self {
        Genre(tag.to_string())
    }
}

impl From<String> for Genre {
    fn from(tag: String) -> Self {
        Genre(tag)
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// Play
// =============================================================================

/// A play in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Play {
    /// Display name printed on statement lines.
    pub name: String,

    /// Genre tag; selects the pricing rule.
    #[serde(alias = "type")]
    pub genre: Genre,
}

impl Play {
    pub fn new(name: impl Into<String>, genre: impl Into<Genre>) -> Self {
        Play {
            name: name.into(),
            genre: genre.into(),
        }
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// Lookup from [`PlayId`] to [`Play`]. Keys are unique.
///
/// Not `Deserialize`: JSON objects silently keep the last duplicate key, so
/// catalogs are loaded through [`crate::validation::parse_catalog_json`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    plays: BTreeMap<PlayId, Play>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog from `(id, play)` pairs, rejecting duplicate ids.
    ///
    /// ## Example
    /// ```rust
    /// use marquee_core::{Catalog, Play};
    ///
    /// let catalog = Catalog::from_plays([
    ///     ("hamlet", Play::new("Hamlet", "tragedy")),
    ///     ("as-like", Play::new("As You Like It", "comedy")),
    /// ])
    /// .unwrap();
    /// assert_eq!(catalog.len(), 2);
    ///
    /// let dup = Catalog::from_plays([
    ///     ("hamlet", Play::new("Hamlet", "tragedy")),
    ///     ("hamlet", Play::new("Hamlet (revival)", "tragedy")),
    /// ]);
    /// assert!(dup.is_err());
    /// ```
    pub fn from_plays<I, K>(plays: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = (K, Play)>,
        K: Into<PlayId>,
    {
        let mut catalog = Catalog::new();
        for (id, play) in plays {
            catalog.insert(id, play)?;
        }
        Ok(catalog)
    }

    /// Adds a play. Fails if the id is already present.
    pub fn insert(&mut self, id: impl Into<PlayId>, play: Play) -> Result<(), ValidationError> {
        match self.plays.entry(id.into()) {
            btree_map::Entry::Occupied(entry) => Err(ValidationError::Duplicate {
                field: "playID".to_string(),
                value: entry.key().to_string(),
            }),
            btree_map::Entry::Vacant(entry) => {
                entry.insert(play);
                Ok(())
            }
        }
    }

    /// Resolves a play id.
    ///
    /// A missing id is a data integrity violation and surfaces as
    /// [`CoreError::UnknownPlay`]; there is no fallback play.
    pub fn play(&self, id: &PlayId) -> CoreResult<&Play> {
        self.plays
            .get(id)
            .ok_or_else(|| CoreError::UnknownPlay(id.clone()))
    }

    /// Returns true if the id is in the catalog.
    pub fn contains(&self, id: &str) -> bool {
        self.plays.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.plays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plays.is_empty()
    }

    /// Iterates plays in id order.
    pub fn iter(&self) -> impl Iterator<Item = (&PlayId, &Play)> {
        self.plays.iter()
    }
}

// =============================================================================
// Invoice
// =============================================================================

/// One booked performance on an invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Performance {
    #[serde(rename = "playID")]
    pub play_id: PlayId,

    /// Seats sold. Zero is valid and prices at the genre floor.
    pub audience: u32,
}

impl Performance {
    pub fn new(play_id: impl Into<PlayId>, audience: u32) -> Self {
        Performance {
            play_id: play_id.into(),
            audience,
        }
    }
}

/// A customer's invoice. Performance order is the statement line order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    pub customer: String,
    pub performances: Vec<Performance>,
}

impl Invoice {
    pub fn new(customer: impl Into<String>, performances: Vec<Performance>) -> Self {
        Invoice {
            customer: customer.into(),
            performances,
        }
    }
}

// =============================================================================
// Statement
// =============================================================================

/// A priced statement line, one per performance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementLine {
    pub play_name: String,
    pub amount: Money,
    pub seats: u32,
}

/// The priced result for one invoice.
///
/// The amount owed is not stored. [`Statement::total_amount`] sums the line
/// amounts every time, so it can never disagree with the lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statement {
    pub customer: String,

    /// Lines in invoice order.
    pub lines: Vec<StatementLine>,

    /// Sum of per-performance credits.
    pub total_credits: u64,
}

impl Statement {
    /// Amount owed: the sum of all line amounts.
    pub fn total_amount(&self) -> Money {
        self.lines.iter().map(|line| line.amount).sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn classic_catalog() -> Catalog {
        Catalog::from_plays([
            ("hamlet", Play::new("Hamlet", "tragedy")),
            ("as-like", Play::new("As You Like It", "comedy")),
            ("othello", Play::new("Othello", "tragedy")),
        ])
        .unwrap()
    }

    #[test]
    fn test_catalog_lookup() {
        let catalog = classic_catalog();
        let hamlet = catalog.play(&PlayId::from("hamlet")).unwrap();
        assert_eq!(hamlet.name, "Hamlet");
        assert_eq!(hamlet.genre.as_str(), "tragedy");
        assert!(catalog.contains("othello"));
    }

    #[test]
    fn test_catalog_unknown_play() {
        let catalog = classic_catalog();
        let err = catalog.play(&PlayId::from("macbeth")).unwrap_err();
        assert_eq!(err, CoreError::UnknownPlay(PlayId::from("macbeth")));
    }

    #[test]
    fn test_catalog_rejects_duplicates() {
        let mut catalog = classic_catalog();
        let err = catalog
            .insert("hamlet", Play::new("Hamlet", "tragedy"))
            .unwrap_err();
        assert!(matches!(err, ValidationError::Duplicate { ref value, .. } if value == "hamlet"));
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn test_statement_total_is_sum_of_lines() {
        let statement = Statement {
            customer: "BigCo".to_string(),
            lines: vec![
                StatementLine {
                    play_name: "Hamlet".to_string(),
                    amount: Money::from_cents(65000),
                    seats: 55,
                },
                StatementLine {
                    play_name: "As You Like It".to_string(),
                    amount: Money::from_cents(58000),
                    seats: 35,
                },
            ],
            total_credits: 37,
        };
        assert_eq!(statement.total_amount().cents(), 123000);
    }

    #[test]
    fn test_empty_statement_owes_nothing() {
        let statement = Statement {
            customer: "Nobody".to_string(),
            lines: vec![],
            total_credits: 0,
        };
        assert!(statement.total_amount().is_zero());
    }

    #[test]
    fn test_play_accepts_type_alias() {
        let play: Play = serde_json::from_str(r#"{"name":"Hamlet","type":"tragedy"}"#).unwrap();
        assert_eq!(play, Play::new("Hamlet", "tragedy"));

        let play: Play = serde_json::from_str(r#"{"name":"Hamlet","genre":"tragedy"}"#).unwrap();
        assert_eq!(play.genre, Genre::from("tragedy"));
    }

    #[test]
    fn test_performance_wire_name() {
        let json = serde_json::to_string(&Performance::new("hamlet", 55)).unwrap();
        assert_eq!(json, r#"{"playID":"hamlet","audience":55}"#);
    }
}
