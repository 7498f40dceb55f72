//! Money Handling Module
//!
//! Unified validation and formatting for ledger amounts. All amount values
//! entering the core MUST pass through this module.
//!
//! ## Design Principles
//! 1. Fixed-Point Only: amounts are `rust_decimal::Decimal`, never floats
//! 2. Explicit Error Handling: no silent truncation or rounding of inputs
//! 3. Currency minor units: every stored amount carries exactly [`SCALE`]
//!    decimal places
//!
//! ## Usage
//! ```ignore
//! use ledger_engine::money::{parse_amount, format_amount};
//!
//! let amount = parse_amount("100.50")?;
//! assert_eq!(format_amount(amount), "100.50");
//! ```

use rust_decimal::Decimal;
use std::str::FromStr;
use thiserror::Error;

/// Decimal places carried by every ledger amount (currency minor units).
pub const SCALE: u32 = 2;

// ============================================================================
// Error Types
// ============================================================================

/// Amount validation errors
#[derive(Debug, Error)]
pub enum MoneyError {
    #[error("Precision overflow: provided {provided} decimals, max allowed {max}")]
    PrecisionOverflow { provided: u32, max: u32 },

    #[error("Amount must be positive")]
    InvalidAmount,

    #[error("Invalid format: {0}")]
    InvalidFormat(String),
}

// ============================================================================
// Parse: Client → Internal (String → Decimal)
// ============================================================================

/// Parse a client amount string into a validated ledger amount.
///
/// # Errors
/// * `InvalidFormat` - the string is not a plain decimal number
/// * `InvalidAmount` - the amount is zero or negative
/// * `PrecisionOverflow` - more than [`SCALE`] decimal places provided
pub fn parse_amount(amount_str: &str) -> Result<Decimal, MoneyError> {
    let amount_str = amount_str.trim();
    if amount_str.is_empty() {
        return Err(MoneyError::InvalidFormat("empty string".into()));
    }

    let amount = Decimal::from_str(amount_str)
        .map_err(|e| MoneyError::InvalidFormat(e.to_string()))?;

    validate_amount(amount)
}

/// Validate a decimal as a transferable amount: positive, at most [`SCALE`]
/// decimal places. Returns the amount rescaled to exactly [`SCALE`] places.
///
/// # Errors
/// * `InvalidAmount` - the amount is zero or negative
/// * `PrecisionOverflow` - more than [`SCALE`] decimal places provided
pub fn validate_amount(amount: Decimal) -> Result<Decimal, MoneyError> {
    if amount.is_sign_negative() || amount.is_zero() {
        return Err(MoneyError::InvalidAmount);
    }

    // REJECT excess precision (no silent truncation!)
    let normalized = amount.normalize();
    if normalized.scale() > SCALE {
        return Err(MoneyError::PrecisionOverflow {
            provided: normalized.scale(),
            max: SCALE,
        });
    }

    Ok(quantize(amount))
}

/// Rescale a decimal to exactly [`SCALE`] places.
///
/// Balance arithmetic over validated amounts never produces extra precision,
/// so this only pads trailing zeros; it never rounds a live value.
pub fn quantize(amount: Decimal) -> Decimal {
    let mut out = amount;
    out.rescale(SCALE);
    out
}

// ============================================================================
// Format: Internal → Client (Decimal → String)
// ============================================================================

/// Format a ledger amount for display with exactly [`SCALE`] decimal places.
pub fn format_amount(amount: Decimal) -> String {
    format!("{:.prec$}", amount, prec = SCALE as usize)
}

// ============================================================================
// Unit Tests
// ============================================================================
