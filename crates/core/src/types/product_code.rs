//! Product code type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`ProductCode`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ProductCodeError {
    /// The input is empty.
    #[error("product code cannot be empty")]
    Empty,
    /// The input is too long.
    #[error("product code must be at most {max} characters")]
    TooLong {
        /// Maximum allowed length.
        max: usize,
    },
    /// The input contains whitespace anywhere, including at either end.
    #[error("product code cannot contain whitespace")]
    ContainsWhitespace,
}

/// A short product code such as `ABC`.
///
/// Codes are case-insensitive on input and always stored in uppercase, so
/// `"abc"`, `"Abc"` and `"ABC"` all name the same product.
///
/// ## Examples
///
/// ```
/// use inkwell_core::ProductCode;
///
/// let code = ProductCode::parse("cde").unwrap();
/// assert_eq!(code.as_str(), "CDE");
///
/// assert!(ProductCode::parse("").is_err());
/// assert!(ProductCode::parse("A B").is_err());
/// assert!(ProductCode::parse(" cde").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(try_from = "String")]
pub struct ProductCode(String);

impl ProductCode {
    /// Maximum length of a product code.
    pub const MAX_LENGTH: usize = 32;

    /// Parse a `ProductCode`, normalizing it to uppercase.
    ///
    /// The input is taken as typed: `" abc"` is not the same code as `"abc"`.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty, longer than
    /// [`Self::MAX_LENGTH`], or contains any whitespace.
    pub fn parse(s: &str) -> Result<Self, ProductCodeError> {
        if s.is_empty() {
            return Err(ProductCodeError::Empty);
        }

        if s.len() > Self::MAX_LENGTH {
            return Err(ProductCodeError::TooLong {
                max: Self::MAX_LENGTH,
            });
        }

        if s.chars().any(char::is_whitespace) {
            return Err(ProductCodeError::ContainsWhitespace);
        }

        Ok(Self(s.to_ascii_uppercase()))
    }

    /// Build a code from a trusted literal, such as a built-in catalog row.
    pub(crate) fn from_static(code: &'static str) -> Self {
        Self(code.to_ascii_uppercase())
    }

    /// Returns the code as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl std::str::FromStr for ProductCode {
    type Err = ProductCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ProductCode {
    type Error = ProductCodeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl AsRef<str> for ProductCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_uppercases() {
        assert_eq!(ProductCode::parse("abc").unwrap().as_str(), "ABC");
        assert_eq!(ProductCode::parse("qWe").unwrap().as_str(), "QWE");
        assert_eq!(ProductCode::parse("FEK").unwrap().as_str(), "FEK");
    }

    #[test]
    fn test_parse_rejects_surrounding_whitespace() {
        assert_eq!(
            ProductCode::parse(" abc"),
            Err(ProductCodeError::ContainsWhitespace)
        );
        assert_eq!(
            ProductCode::parse("lzx\t"),
            Err(ProductCodeError::ContainsWhitespace)
        );
        assert_eq!(
            ProductCode::parse("   "),
            Err(ProductCodeError::ContainsWhitespace)
        );
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(ProductCode::parse(""), Err(ProductCodeError::Empty));
    }

    #[test]
    fn test_parse_too_long() {
        let long = "X".repeat(ProductCode::MAX_LENGTH + 1);
        assert!(matches!(
            ProductCode::parse(&long),
            Err(ProductCodeError::TooLong { .. })
        ));
    }

    #[test]
    fn test_parse_inner_whitespace() {
        assert_eq!(
            ProductCode::parse("AB C"),
            Err(ProductCodeError::ContainsWhitespace)
        );
    }

    #[test]
    fn test_display_respects_width() {
        let code = ProductCode::parse("abc").unwrap();
        assert_eq!(format!("{code:<6}|"), "ABC   |");
    }

    #[test]
    fn test_serde_roundtrip() {
        let code = ProductCode::parse("rty").unwrap();
        let json = serde_json::to_string(&code).unwrap();
        assert_eq!(json, "\"RTY\"");

        let parsed: ProductCode = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, code);
    }

    #[test]
    fn test_deserialize_normalizes() {
        let parsed: ProductCode = serde_json::from_str("\"pas\"").unwrap();
        assert_eq!(parsed.as_str(), "PAS");
        assert!(serde_json::from_str::<ProductCode>("\"\"").is_err());
    }

    #[test]
    fn test_from_str() {
        let code: ProductCode = "hjk".parse().unwrap();
        assert_eq!(code.as_ref(), "HJK");
    }
}
