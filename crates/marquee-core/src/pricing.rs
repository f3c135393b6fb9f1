//! # Pricing Module
//!
//! Per-genre pricing rules and the lookup that picks one for a play.
//!
//! ## Dispatch
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Genre → Rule Lookup                              │
//! │                                                                         │
//! │   Play.genre ──► RuleBook::select ──┬──► "tragedy" ──► TRAGEDY          │
//! │                                     ├──► "comedy"  ──► COMEDY           │
//! │                                     └──► anything else                  │
//! │                                              │                          │
//! │                                              ▼                          │
//! │                                   CoreError::UnknownGenre               │
//! │                                                                         │
//! │   A PricingRule is a Copy record of two pure functions:                 │
//! │     amount(audience)  -> Money                                          │
//! │     credits(audience) -> u64                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Adding a Genre
//! One new `PricingRule` value plus one [`RuleBook::register`] call. Existing
//! rules and the statement calculator stay untouched.
//!
//! ```rust
//! use marquee_core::money::Money;
//! use marquee_core::{Genre, PricingRule, RuleBook};
//!
//! fn history_amount(audience: u32) -> Money {
//!     Money::from_cents(35_000 + 800 * audience as i64)
//! }
//!
//! fn history_credits(audience: u32) -> u64 {
//!     audience as u64 / 10
//! }
//!
//! let rules = RuleBook::standard()
//!     .with_rule("history", PricingRule::new("history", history_amount, history_credits));
//!
//! let rule = rules.select(&Genre::from("history")).unwrap();
//! assert_eq!(rule.amount(10).cents(), 43_000);
//! assert_eq!(rule.credits(10), 1);
//! ```

use std::collections::BTreeMap;
use std::fmt;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::Genre;
use crate::{GENRE_COMEDY, GENRE_TRAGEDY};

// =============================================================================
// Pricing Rule
// =============================================================================

/// Computes the charge for a performance of `audience` seats.
pub type AmountFn = fn(u32) -> Money;

/// Computes the loyalty credits for a performance of `audience` seats.
pub type CreditsFn = fn(u32) -> u64;

/// The pricing of one genre.
///
/// Both functions are pure and total over every `u32` audience.
#[derive(Clone, Copy)]
pub struct PricingRule {
    name: &'static str,
    amount: AmountFn,
    credits: CreditsFn,
}

impl PricingRule {
    pub const fn new(name: &'static str, amount: AmountFn, credits: CreditsFn) -> Self {
        PricingRule {
            name,
            amount,
            credits,
        }
    }

    /// Rule name, for logs.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Charge for a performance.
    #[inline]
    pub fn amount(&self, audience: u32) -> Money {
        (self.amount)(audience)
    }

    /// Credits earned by a performance.
    #[inline]
    pub fn credits(&self, audience: u32) -> u64 {
        (self.credits)(audience)
    }
}

impl fmt::Debug for PricingRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PricingRule")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Built-in Rules
// =============================================================================

/// Seats included in every booking before volume pricing kicks in.
const VOLUME_THRESHOLD: u32 = 30;

/// Credits shared by every genre: one per seat above the volume threshold.
fn volume_credits(audience: u32) -> u64 {
    audience.saturating_sub(VOLUME_THRESHOLD) as u64
}

/// Tragedy: $400.00 flat, plus $10.00 for every seat above 30.
///
/// ```text
/// amount(a)  = 40000 + (a > 30 ? 1000 * (a - 30) : 0)
/// credits(a) = max(a - 30, 0)
/// ```
fn tragedy_amount(audience: u32) -> Money {
    let mut amount = Money::from_cents(40_000);
    if audience > VOLUME_THRESHOLD {
        amount += Money::from_cents(1_000) * (audience - VOLUME_THRESHOLD) as i64;
    }
    amount
}

/// Comedy: $300.00 flat plus $3.00 a seat; above 20 seats an extra $100.00
/// plus $5.00 for every seat beyond 20. One bonus credit per five seats.
///
/// ```text
/// amount(a)  = 30000 + 300 * a + (a > 20 ? 10000 + 500 * (a - 20) : 0)
/// credits(a) = max(a - 30, 0) + floor(a / 5)
/// ```
fn comedy_amount(audience: u32) -> Money {
    let mut amount = Money::from_cents(30_000) + Money::from_cents(300) * audience as i64;
    if audience > 20 {
        amount += Money::from_cents(10_000) + Money::from_cents(500) * (audience - 20) as i64;
    }
    amount
}

fn comedy_credits(audience: u32) -> u64 {
    volume_credits(audience) + (audience / 5) as u64
}

/// Pricing for tragedies.
pub const TRAGEDY: PricingRule = PricingRule::new(GENRE_TRAGEDY, tragedy_amount, volume_credits);

/// Pricing for comedies.
pub const COMEDY: PricingRule = PricingRule::new(GENRE_COMEDY, comedy_amount, comedy_credits);

// =============================================================================
// Rule Book (genre selector)
// =============================================================================

/// Maps genre tags to pricing rules.
///
/// Matching is exact and case-sensitive. There is no default
/// rule: a tag with no entry fails with [`CoreError::UnknownGenre`].
#[derive(Debug, Clone, Default)]
pub struct RuleBook {
    rules: BTreeMap<Genre, PricingRule>,
}

impl RuleBook {
    /// A rule book with no genres at all.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The standard rule book: tragedy and comedy.
    pub fn standard() -> Self {
        Self::empty()
            .with_rule(GENRE_TRAGEDY, TRAGEDY)
            .with_rule(GENRE_COMEDY, COMEDY)
    }

    /// Builder form of [`RuleBook::register`].
    pub fn with_rule(mut self, genre: impl Into<Genre>, rule: PricingRule) -> Self {
        self.register(genre, rule);
        self
    }

    /// Registers (or replaces) the rule for a genre.
    ///
    /// Returns the rule previously registered under that tag, if any.
    pub fn register(&mut self, genre: impl Into<Genre>, rule: PricingRule) -> Option<PricingRule> {
        self.rules.insert(genre.into(), rule)
    }

    /// Selects the rule for a genre.
    ///
    /// ## Example
    /// ```rust
    /// use marquee_core::{CoreError, Genre, RuleBook};
    ///
    /// let rules = RuleBook::standard();
    /// assert_eq!(rules.select(&Genre::from("tragedy")).unwrap().name(), "tragedy");
    ///
    /// let err = rules.select(&Genre::from("history")).unwrap_err();
    /// assert_eq!(err, CoreError::UnknownGenre(Genre::from("history")));
    /// ```
    pub fn select(&self, genre: &Genre) -> CoreResult<PricingRule> {
        self.rules
            .get(genre)
            .copied()
            .ok_or_else(|| CoreError::UnknownGenre(genre.clone()))
    }

    /// Registered genre tags, in sorted order.
    pub fn genres(&self) -> impl Iterator<Item = &Genre> {
        self.rules.keys()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
