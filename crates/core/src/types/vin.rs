//! Vehicle Identification Number input.
//!
//! Only the length of a VIN is checked. There is no decoding of the
//! manufacturer, model year or check digit; a valid [`Vin`] is simply a
//! 17-character upper-cased string that the storefront acknowledges.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Number of characters in a VIN.
pub const VIN_LENGTH: usize = 17;

/// Errors that can occur when parsing a [`Vin`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum VinError {
    /// The input is not exactly [`VIN_LENGTH`] characters long.
    #[error("VIN-код должен содержать {expected} символов")]
    InvalidLength {
        /// Required number of characters.
        expected: usize,
        /// Number of characters supplied.
        actual: usize,
    },
}

/// A length-checked, upper-cased VIN.
///
/// ## Examples
///
/// ```
/// use autoparts_core::Vin;
///
/// let vin = Vin::parse("wvwzzz1kzaw000001").unwrap();
/// assert_eq!(vin.as_str(), "WVWZZZ1KZAW000001");
///
/// assert!(Vin::parse("").is_err());
/// assert!(Vin::parse("WVWZZZ1KZAW00000").is_err()); // 16 characters
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Vin(String);

impl Vin {
    /// Parse a `Vin`, upper-casing the input first.
    ///
    /// Characters are counted as Unicode scalar values, so a Cyrillic letter
    /// counts once.
    ///
    /// # Errors
    ///
    /// Returns [`VinError::InvalidLength`] unless the input has exactly
    /// [`VIN_LENGTH`] characters.
    pub fn parse(input: &str) -> Result<Self, VinError> {
        let normalized = input.to_uppercase();
        let actual = normalized.chars().count();
        if actual != VIN_LENGTH {
            return Err(VinError::InvalidLength {
                expected: VIN_LENGTH,
                actual,
            });
        }
        Ok(Self(normalized))
    }

    /// Returns the VIN as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `Vin` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Vin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for Vin {
    type Err = VinError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Vin {
    type Error = VinError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<Vin> for String {
    fn from(vin: Vin) -> Self {
        vin.0
    }
}

/// Validate a VIN lookup request.
///
/// # Errors
///
/// Returns [`VinError::InvalidLength`] unless `vin` has exactly
/// [`VIN_LENGTH`] characters.
pub fn validate(vin: &str) -> Result<Vin, VinError> {
    Vin::parse(vin)
}

/// Typing progress for a partially entered VIN.
///
/// Returns `(entered, VIN_LENGTH)` while the input is non-empty and still
/// short, and `None` otherwise.
#[must_use]
pub fn vin_progress(input: &str) -> Option<(usize, usize)> {
    let entered = input.chars().count();
    (entered > 0 && entered < VIN_LENGTH).then_some((entered, VIN_LENGTH))
}
