//! ICAO station identifiers.

use std::fmt;

/// Error returned when an ICAO code fails validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid ICAO code {input:?}: must be 3-4 characters")]
pub struct InvalidIcao {
    input: String,
}

/// A normalized ICAO station identifier.
///
/// Stored uppercase with surrounding whitespace removed, and always 3 or 4
/// characters long. Three-character legacy identifiers are accepted.
///
/// # Examples
///
/// ```
/// use weather_proxy::domain::IcaoCode;
///
/// let kbos = IcaoCode::parse_normalized(" kbos ").unwrap();
/// assert_eq!(kbos.as_str(), "KBOS");
///
/// assert!(IcaoCode::parse_normalized("KB").is_err());
/// assert!(IcaoCode::parse_normalized("KBOST").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct IcaoCode(String);

impl IcaoCode {
    /// Trim and uppercase `s`, then check its length.
    pub fn parse_normalized(s: &str) -> Result<Self, InvalidIcao> {
        let normalized = s.trim().to_uppercase();
        let len = normalized.chars().count();

        if !(3..=4).contains(&len) {
            return Err(InvalidIcao { input: normalized });
        }

        Ok(IcaoCode(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for IcaoCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IcaoCode({})", self.0)
    }
}

impl fmt::Display for IcaoCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_case_and_whitespace() {
        assert_eq!(IcaoCode::parse_normalized("kjfk").unwrap().as_str(), "KJFK");
        assert_eq!(
            IcaoCode::parse_normalized("  Kbos\t").unwrap().as_str(),
            "KBOS"
        );
    }

    #[test]
    fn accepts_three_characters() {
        assert_eq!(IcaoCode::parse_normalized("bos").unwrap().as_str(), "BOS");
    }

    #[test]
    fn rejects_wrong_length() {
        assert!(IcaoCode::parse_normalized("").is_err());
        assert!(IcaoCode::parse_normalized("   ").is_err());
        assert!(IcaoCode::parse_normalized("KB").is_err());
        assert!(IcaoCode::parse_normalized("KBOSX").is_err());
    }

    #[test]
    fn length_checked_after_trim() {
        assert!(IcaoCode::parse_normalized("  KB  ").is_err());
        assert!(IcaoCode::parse_normalized(" KBOS ").is_ok());
    }

    #[test]
    fn display_and_debug() {
        let code = IcaoCode::parse_normalized("kbos").unwrap();
        assert_eq!(code.to_string(), "KBOS");
        assert_eq!(format!("{:?}", code), "IcaoCode(KBOS)");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Any 3-4 letter code parses and comes back uppercase
        #[test]
        fn valid_lengths_parse(s in "[a-zA-Z]{3,4}") {
            let code = IcaoCode::parse_normalized(&s).unwrap();
            prop_assert_eq!(code.as_str(), s.to_uppercase());
        }

        /// Anything shorter or longer is rejected
        #[test]
        fn wrong_length_rejected(s in "[A-Z]{0,2}|[A-Z]{5,10}") {
            prop_assert!(IcaoCode::parse_normalized(&s).is_err());
        }
    }
}
