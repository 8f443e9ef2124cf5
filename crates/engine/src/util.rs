//! Internal helpers for input validation.
//!
//! These utilities are **not** part of the public API. They centralize
//! validation logic so the engine enforces consistent invariants.

use crate::{EngineError, MoneyCents, ResultEngine};

/// Parse an hour count from raw operator input.
///
/// Hours are a whole non-negative number; anything else (blank, fractional,
/// negative, non-numeric) is rejected.
pub(crate) fn parse_hours(raw: &str) -> ResultEngine<u32> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(EngineError::InvalidHours("empty hours".to_string()));
    }
    trimmed
        .parse::<u32>()
        .map_err(|_| EngineError::InvalidHours(format!("not a whole number of hours: {trimmed}")))
}

/// Ensure a configured fee is non-negative.
pub(crate) fn validate_fee(fee: MoneyCents, label: &str) -> ResultEngine<()> {
    if fee.is_negative() {
        return Err(EngineError::InvalidAmount(format!(
            "{label} must not be negative"
        )));
    }
    Ok(())
}
