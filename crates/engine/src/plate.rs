//! The module contains the `Plate` type, the canonical form of a license plate.
use std::fmt;

use crate::{EngineError, ResultEngine};

/// A validated license plate in canonical form.
///
/// Raw operator input is trimmed and uppercased once, here. Because every
/// stored plate is canonical, plain equality between `Plate` values gives the
/// case-insensitive matching rule for free.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Plate(String);

impl Plate {
    /// Builds a canonical plate from raw input.
    ///
    /// Fails with [`EngineError::InvalidPlate`] when the input is empty or
    /// whitespace-only.
    pub fn parse(raw: &str) -> ResultEngine<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(EngineError::InvalidPlate(
                "plate must not be empty".to_string(),
            ));
        }
        Ok(Self(trimmed.to_uppercase()))
    }

    /// The canonical (uppercase) plate text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Plate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Plate {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_trims_and_uppercases() {
        let plate = Plate::parse("  abc123 ").unwrap();
        assert_eq!(plate.as_str(), "ABC123");
    }

    #[test]
    fn parse_rejects_blank_input() {
        assert_eq!(
            Plate::parse("   "),
            Err(EngineError::InvalidPlate(
                "plate must not be empty".to_string()
            ))
        );
    }

    #[test]
    fn case_variants_share_one_canonical_form() {
        let lower = Plate::parse("xyz0001").unwrap();
        let upper = Plate::parse("XYZ0001").unwrap();
        assert_eq!(lower, upper);
    }
}
