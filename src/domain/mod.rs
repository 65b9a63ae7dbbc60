//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs`: Rich domain types (validated, business-logic-ready)
//! - `wire.rs`: Raw serde structs matching backend responses
//! - `convert.rs`: `TryFrom` conversions with validation
//! - `client.rs`: Sub-client with HTTP methods

pub mod balance;
pub mod data_feed;
pub mod market;
pub mod order;
pub mod orderbook;
pub mod quote;

use rust_decimal::Decimal;
use std::fmt;

use crate::error::SdkError;
use crate::shared::parse_decimal;

// ─── Validation ──────────────────────────────────────────────────────────────

/// One wire field that failed validation.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldError {
    Missing(&'static str),
    Invalid {
        field: &'static str,
        value: String,
        reason: String,
    },
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::Missing(field) => write!(f, "Missing {}", field),
            FieldError::Invalid {
                field,
                value,
                reason,
            } => write!(f, "Invalid {} '{}': {}", field, value, reason),
        }
    }
}

/// Every field error of one wire record.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub entity: &'static str,
    pub id: String,
    pub errors: Vec<FieldError>,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} validation errors ({}):", self.entity, self.id)?;
        for err in &self.errors {
            writeln!(f, "  - {}", err)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

impl From<ValidationError> for SdkError {
    fn from(e: ValidationError) -> Self {
        SdkError::Validation(e.to_string())
    }
}

/// Collects field errors during a wire → domain conversion so that one
/// failure report lists every problem of a record.
#[derive(Debug, Default)]
pub(crate) struct Validator {
    errors: Vec<FieldError>,
}

impl Validator {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn require<T: Default>(&mut self, field: &'static str, value: Option<T>) -> T {
        value.unwrap_or_else(|| {
            self.errors.push(FieldError::Missing(field));
            T::default()
        })
    }

    pub(crate) fn decimal(&mut self, field: &'static str, raw: &str) -> Decimal {
        parse_decimal(raw).unwrap_or_else(|e| {
            self.invalid(field, raw, e.to_string());
            Decimal::ZERO
        })
    }

    pub(crate) fn optional_decimal(
        &mut self,
        field: &'static str,
        raw: Option<&str>,
    ) -> Option<Decimal> {
        raw.map(|r| self.decimal(field, r))
    }

    pub(crate) fn required_decimal(&mut self, field: &'static str, raw: Option<&str>) -> Decimal {
        match raw {
            Some(raw) => self.decimal(field, raw),
            None => {
                self.errors.push(FieldError::Missing(field));
                Decimal::ZERO
            }
        }
    }

    /// Parse with `parse`, recording a failure and falling back to `fallback`.
    pub(crate) fn parse<T>(
        &mut self,
        field: &'static str,
        raw: &str,
        fallback: T,
        parse: impl FnOnce(&str) -> Result<T, SdkError>,
    ) -> T {
        parse(raw).unwrap_or_else(|e| {
            self.invalid(field, raw, e.to_string());
            fallback
        })
    }

    pub(crate) fn required_parse<T>(
        &mut self,
        field: &'static str,
        raw: Option<&str>,
        fallback: T,
        parse: impl FnOnce(&str) -> Result<T, SdkError>,
    ) -> T {
        match raw {
            Some(raw) => self.parse(field, raw, fallback, parse),
            None => {
                self.errors.push(FieldError::Missing(field));
                fallback
            }
        }
    }

    pub(crate) fn missing(&mut self, field: &'static str) {
        self.errors.push(FieldError::Missing(field));
    }

    pub(crate) fn invalid(&mut self, field: &'static str, value: &str, reason: impl Into<String>) {
        self.errors.push(FieldError::Invalid {
            field,
            value: value.to_string(),
            reason: reason.into(),
        });
    }

    pub(crate) fn finish(self, entity: &'static str, id: &str) -> Result<(), ValidationError> {
        if self.errors.is_empty() {
            return Ok(());
        }
        Err(ValidationError {
            entity,
            id: id.to_string(),
            errors: self.errors,
        })
    }
}
