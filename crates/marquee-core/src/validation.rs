//! # Validation Module
//!
//! Turns untyped JSON records into typed [`Invoice`] and [`Catalog`] values.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: JSON shape (serde)                                           │
//! │  ├── Objects, arrays, strings, integers where expected                 │
//! │  └── Failure → ValidationError::Malformed                              │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Raw records → typed values (THIS MODULE)                     │
//! │  ├── Required fields present and non-blank                             │
//! │  ├── audience within 0..=u32::MAX                                      │
//! │  └── play ids unique                                                   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Statement calculator                                         │
//! │  ├── play id exists in catalog  (UnknownPlay)                          │
//! │  └── genre has a pricing rule   (UnknownGenre)                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Genre tags are NOT checked here. Any tag loads; only the rule book decides
//! whether it can be priced.
//!
//! ## Usage
//! ```rust
//! use marquee_core::validation::{parse_catalog_json, parse_invoices_json};
//!
//! let catalog = parse_catalog_json(r#"{"hamlet": {"name": "Hamlet", "type": "tragedy"}}"#).unwrap();
//! let invoices = parse_invoices_json(
//!     r#"[{"customer": "BigCo", "performances": [{"playID": "hamlet", "audience": 55}]}]"#,
//! )
//! .unwrap();
//!
//! assert_eq!(catalog.len(), 1);
//! assert_eq!(invoices[0].performances[0].audience, 55);
//! ```

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::fmt;

use crate::error::ValidationError;
use crate::types::{Catalog, Invoice, Performance, Play, PlayId};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Raw Records
// =============================================================================

/// A play record as it appears in the plays file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPlay {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default, alias = "type")]
    pub genre: Option<String>,
}

/// A performance record as it appears in an invoice.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPerformance {
    #[serde(default, rename = "playID", alias = "play_id")]
    pub play_id: Option<String>,

    #[serde(default)]
    pub audience: Option<i64>,
}

/// An invoice record as it appears in the invoices file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawInvoice {
    #[serde(default)]
    pub customer: Option<String>,

    #[serde(default)]
    pub performances: Option<Vec<RawPerformance>>,
}

/// The plays file: an object keyed by play id, in file order.
///
/// Kept as a list so duplicate keys reach validation instead of being
/// collapsed by a map.
#[derive(Debug, Clone, Default)]
pub struct RawCatalog(pub Vec<(String, RawPlay)>);

impl<'de> Deserialize<'de> for RawCatalog {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct EntriesVisitor;

        impl<'de> Visitor<'de> for EntriesVisitor {
            type Value = RawCatalog;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object mapping play ids to plays")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((id, play)) = map.next_entry::<String, RawPlay>()? {
                    entries.push((id, play));
                }
                Ok(RawCatalog(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor)
    }
}

// =============================================================================
// Field Validators
// =============================================================================

/// Validates a required text field and returns it trimmed.
///
/// ## Example
/// ```rust
/// use marquee_core::validation::validate_required;
///
/// assert_eq!(validate_required("customer", Some("  BigCo ")).unwrap(), "BigCo");
/// assert!(validate_required("customer", Some("   ")).is_err());
/// assert!(validate_required("customer", None).is_err());
/// ```
pub fn validate_required(field: &str, value: Option<&str>) -> ValidationResult<String> {
    match value.map(str::trim) {
        Some(value) if !value.is_empty() => Ok(value.to_string()),
        _ => Err(ValidationError::Required {
            field: field.to_string(),
        }),
    }
}

/// Validates an audience size.
///
/// ## Rules
/// - Must be non-negative (zero is a valid, empty house)
/// - Must fit in `u32`
pub fn validate_audience(field: &str, audience: i64) -> ValidationResult<u32> {
    u32::try_from(audience).map_err(|_| ValidationError::OutOfRange {
        field: field.to_string(),
        min: 0,
        max: u32::MAX as i64,
    })
}

// =============================================================================
// Record Conversions
// =============================================================================

impl TryFrom<RawPlay> for Play {
    type Error = ValidationError;

    fn try_from(raw: RawPlay) -> ValidationResult<Self> {
        let name = validate_required("name", raw.name.as_deref())?;
        let genre = validate_required("type", raw.genre.as_deref())?;
        Ok(Play::new(name, genre))
    }
}

impl TryFrom<RawCatalog> for Catalog {
    type Error = ValidationError;

    fn try_from(raw: RawCatalog) -> ValidationResult<Self> {
        let mut catalog = Catalog::new();
        for (id, raw_play) in raw.0 {
            let id = validate_required("playID", Some(id.as_str()))?;
            let play = Play::try_from(raw_play).map_err(|err| prefix(&format!("plays.{id}"), err))?;
            catalog.insert(id, play)?;
        }
        Ok(catalog)
    }
}

impl TryFrom<RawPerformance> for Performance {
    type Error = ValidationError;

    fn try_from(raw: RawPerformance) -> ValidationResult<Self> {
        let play_id = validate_required("playID", raw.play_id.as_deref())?;
        let audience = raw.audience.ok_or_else(|| ValidationError::Required {
            field: "audience".to_string(),
        })?;
        let audience = validate_audience("audience", audience)?;
        Ok(Performance::new(PlayId::from(play_id), audience))
    }
}

impl TryFrom<RawInvoice> for Invoice {
    type Error = ValidationError;

    fn try_from(raw: RawInvoice) -> ValidationResult<Self> {
        let customer = validate_required("customer", raw.customer.as_deref())?;
        let raw_performances = raw.performances.ok_or_else(|| ValidationError::Required {
            field: "performances".to_string(),
        })?;

        let performances = raw_performances
            .into_iter()
            .enumerate()
            .map(|(i, perf)| {
                Performance::try_from(perf).map_err(|err| prefix(&format!("performances[{i}]"), err))
            })
            .collect::<ValidationResult<Vec<_>>>()?;

        Ok(Invoice::new(customer, performances))
    }
}

/// Qualifies the field name of an error with the record it came from.
fn prefix(path: &str, err: ValidationError) -> ValidationError {
    match err {
        ValidationError::Required { field } => ValidationError::Required {
            field: format!("{path}.{field}"),
        },
        ValidationError::OutOfRange { field, min, max } => ValidationError::OutOfRange {
            field: format!("{path}.{field}"),
            min,
            max,
        },
        other => other,
    }
}

// =============================================================================
// JSON Entry Points
// =============================================================================

fn malformed(what: &str, err: serde_json::Error) -> ValidationError {
    ValidationError::Malformed {
        what: what.to_string(),
        reason: err.to_string(),
    }
}

/// Parses a plays file into a catalog.
pub fn parse_catalog_json(json: &str) -> ValidationResult<Catalog> {
    let raw: RawCatalog = serde_json::from_str(json).map_err(|e| malformed("plays", e))?;
    Catalog::try_from(raw)
}

/// Parses a single invoice object.
pub fn parse_invoice_json(json: &str) -> ValidationResult<Invoice> {
    let raw: RawInvoice = serde_json::from_str(json).map_err(|e| malformed("invoice", e))?;
    Invoice::try_from(raw)
}

/// Parses an invoices file: a list of invoices, or one bare invoice object.
///
/// Each list element is decoded on its own, so both shape and field errors
/// name the failing invoice by position (`invoices[2].customer`).
pub fn parse_invoices_json(json: &str) -> ValidationResult<Vec<Invoice>> {
    let value: Value = serde_json::from_str(json).map_err(|e| malformed("invoices", e))?;
    match value {
        Value::Array(elements) => elements
            .into_iter()
            .enumerate()
            .map(|(i, element)| {
                let path = format!("invoices[{i}]");
                let raw: RawInvoice =
                    serde_json::from_value(element).map_err(|e| malformed(&path, e))?;
                Invoice::try_from(raw).map_err(|err| prefix(&path, err))
            })
            .collect(),
        Value::Object(_) => {
            let raw: RawInvoice = serde_json::from_value(value).map_err(|e| malformed("invoice", e))?;
            Ok(vec![Invoice::try_from(raw)?])
        }
        other => Err(ValidationError::Malformed {
            what: "invoices".to_string(),
            reason: format!("expected a list of invoices or one invoice object, found {other}"),
        }),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
