//! Pure conversions between human-readable amounts/prices and the
//! integer-scaled representations the API expects.
//!
//! All math uses `rust_decimal::Decimal`. No floats, no async, no network calls.
//!
//! ```text
//! base units  = amount * 10^18
//! share units = amount * 10^18 / numTicks
//! ```
//!
//! `Decimal` holds at most 28 significant digits (magnitude below about
//! 7.9 * 10^28). Base-unit strings above that, roughly 7.9 * 10^10 whole
//! tokens, fail with [`ScalingError::Overflow`] rather than parsing lossily.

use std::fmt;

use rust_decimal::prelude::*;
use rust_decimal::Decimal;

/// Decimal places of the base-unit representation (`10^18`).
pub const BASE_UNIT_DECIMALS: u32 = 18;

/// Errors that can occur during fixed-point scaling.
#[derive(Debug, Clone, PartialEq)]
pub enum ScalingError {
    Overflow { context: String },
    FractionalAmount { value: String },
    InvalidDecimal { input: String, reason: String },
    InvalidTicks(String),
}

impl fmt::Display for ScalingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalingError::Overflow { context } => write!(f, "Overflow: {}", context),
            ScalingError::FractionalAmount { value } => {
                write!(f, "Fractional base units not allowed: {}", value)
            }
            ScalingError::InvalidDecimal { input, reason } => {
                write!(f, "Invalid decimal '{}': {}", input, reason)
            }
            ScalingError::InvalidTicks(v) => write!(f, "numTicks must be positive, got {}", v),
        }
    }
}

impl std::error::Error for ScalingError {}

fn base_multiplier() -> Decimal {
    Decimal::from(10u64.pow(BASE_UNIT_DECIMALS))
}

pub(crate) fn check_ticks(num_ticks: Decimal) -> Result<(), ScalingError> {
    if num_ticks <= Decimal::ZERO {
        return Err(ScalingError::InvalidTicks(num_ticks.to_string()));
    }
    Ok(())
}

/// Parse a decimal string, accepting plain (`"12.75"`) and scientific
/// (`"1.275e1"`) notation.
pub fn parse_decimal(input: &str) -> Result<Decimal, ScalingError> {
    let trimmed = input.trim();
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|e| {
            if is_plain_number(trimmed) {
                ScalingError::Overflow {
                    context: format!("{} exceeds the decimal range", trimmed),
                }
            } else {
                ScalingError::InvalidDecimal {
                    input: input.to_string(),
                    reason: e.to_string(),
                }
            }
        })
}

/// `[+-]digits[.digits]`: well-formed, so a parse failure means too large.
fn is_plain_number(s: &str) -> bool {
    let unsigned = s.strip_prefix(['+', '-']).unwrap_or(s);
    let (whole, frac) = unsigned.split_once('.').unwrap_or((unsigned, ""));
    !whole.is_empty()
        && whole.chars().all(|c| c.is_ascii_digit())
        && frac.chars().all(|c| c.is_ascii_digit())
}

/// Round to a whole number, midpoint away from zero.
///
/// For the non-negative values that reach the wire this is round-half-up.
pub fn round_to_integer(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Render a whole-number decimal as a plain base-10 integer string.
pub(crate) fn integer_string(value: Decimal) -> String {
    value.normalize().to_string()
}

/// `amount * 10^18` as an integer string.
///
/// Fails when `amount` has more than 18 fractional digits.
pub fn to_base_units(amount: Decimal) -> Result<String, ScalingError> {
    let scaled = amount
        .checked_mul(base_multiplier())
        .ok_or_else(|| ScalingError::Overflow {
            context: format!("{} * 10^{}", amount, BASE_UNIT_DECIMALS),
        })?;

    if scaled.fract() != Decimal::ZERO {
        return Err(ScalingError::FractionalAmount {
            value: scaled.to_string(),
        });
    }

    Ok(integer_string(scaled))
}

/// Inverse of [`to_base_units`]: `amount / 10^18`.
pub fn from_base_units(amount: &str) -> Result<Decimal, ScalingError> {
    let raw = parse_decimal(amount)?;
    raw.checked_div(base_multiplier())
        .ok_or_else(|| ScalingError::Overflow {
            context: format!("{} / 10^{}", amount, BASE_UNIT_DECIMALS),
        })
}

/// `amount * 10^18 / numTicks`, unrounded.
pub(crate) fn share_units_exact(amount: Decimal, num_ticks: Decimal) -> Result<Decimal, ScalingError> {
    check_ticks(num_ticks)?;
    amount
        .checked_mul(base_multiplier())
        .ok_or_else(|| ScalingError::Overflow {
            context: format!("{} * 10^{}", amount, BASE_UNIT_DECIMALS),
        })?
        .checked_div(num_ticks)
        .ok_or_else(|| ScalingError::Overflow {
            context: format!("share units / {}", num_ticks),
        })
}

/// `amount * 10^18 / numTicks` rounded to an integer string.
pub fn to_share_units(amount: Decimal, num_ticks: Decimal) -> Result<String, ScalingError> {
    let exact = share_units_exact(amount, num_ticks)?;
    Ok(integer_string(round_to_integer(exact)))
}

/// Inverse of [`to_share_units`]: `amount * numTicks / 10^18`.
pub fn from_share_units(amount: &str, num_ticks: Decimal) -> Result<Decimal, ScalingError> {
    check_ticks(num_ticks)?;
    let raw = parse_decimal(amount)?;
    raw.checked_mul(num_ticks)
        .ok_or_else(|| ScalingError::Overflow {
            context: format!("{} * {}", amount, num_ticks),
        })?
        .checked_div(base_multiplier())
        .ok_or_else(|| ScalingError::Overflow {
            context: format!("share amount / 10^{}", BASE_UNIT_DECIMALS),
        })
}
