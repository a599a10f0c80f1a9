use std::fmt;

use serde::{Deserialize, Serialize};

/// A boat's sail number as written on the entry form and in finish data.
///
/// Equality and hashing use the raw string: the join between entries and
/// finish records is exact, so "USA 42" and "usa42" are different boats as
/// far as placement lookup is concerned. Use [`NormalizedSailNumber`] when
/// checking whether two *entries* collide despite case or whitespace
/// differences.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SailNumber(String);

impl SailNumber {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The duplicate-detection form of this sail number.
    pub fn normalized(&self) -> NormalizedSailNumber {
        NormalizedSailNumber::new(&self.0)
    }
}

impl fmt::Display for SailNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for SailNumber {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for SailNumber {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// A sail number reduced to its duplicate-detection form so that entries
/// like "usa 42" and "USA42" cannot both register for one event.
///
/// All whitespace is removed and letters are uppercased. This form is only
/// for spotting duplicate entries; race scoring always matches on the raw
/// [`SailNumber`].
///
/// # Examples
///
/// ```
/// use scoring::models::NormalizedSailNumber;
///
/// let a = NormalizedSailNumber::new("usa 42");
/// let b = NormalizedSailNumber::new("USA42");
///
/// assert_eq!(a, b);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedSailNumber(String);

impl NormalizedSailNumber {
    pub fn new(raw: &str) -> Self {
        let collapsed: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
        Self(collapsed.to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_equality_is_exact() {
        assert_ne!(SailNumber::from("USA 42"), SailNumber::from("usa42"));
        assert_eq!(SailNumber::from("USA 42"), SailNumber::from("USA 42"));
    }

    #[test]
    fn test_normalization_strips_whitespace() {
        let a = NormalizedSailNumber::new(" usa 42 ");
        let b = NormalizedSailNumber::new("USA42");
        assert_eq!(a, b);
        assert_eq!(a.as_str(), "USA42");
    }

    #[test]
    fn test_normalization_case_insensitive() {
        let a = NormalizedSailNumber::new("ger-7");
        let b = NormalizedSailNumber::new("GER-7");
        assert_eq!(a, b);
    }

    #[test]
    fn test_distinct_numbers_stay_distinct() {
        let a = NormalizedSailNumber::new("USA 42");
        let b = NormalizedSailNumber::new("USA 421");
        assert_ne!(a, b);
    }
}
