//! Region codes and their validation.

use std::fmt;

use serde::Serialize;

use crate::error::{BizDayError, Result};
use crate::provider::HolidayRuleProvider;

/// Codes accepted for the national aggregate.
pub const NATIONAL_CODES: [&str; 2] = ["US", "USA"];

/// A validated, upper-cased US jurisdiction.
#[derive(Serialize, Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Region {
    /// Federal holidays only.
    #[default]
    National,
    /// A state or territory, by its two-letter code.
    State(String),
}

impl Region {
    pub fn code(&self) -> &str {
        match self {
            Region::National => NATIONAL_CODES[0],
            Region::State(code) => code,
        }
    }

    pub fn is_national(&self) -> bool {
        matches!(self, Region::National)
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Confirm that `code` names the nation or one of the provider's regions.
///
/// Matching is case-insensitive; the returned region is upper-cased.
pub fn validate_region<P: HolidayRuleProvider + ?Sized>(
    code: &str,
    provider: &P,
) -> Result<Region> {
    let clean = code.trim().to_ascii_uppercase();
    if NATIONAL_CODES.contains(&clean.as_str()) {
        return Ok(Region::National);
    }
    if provider.list_regions().contains(clean.as_str()) {
        return Ok(Region::State(clean));
    }
    Err(BizDayError::InvalidRegion {
        code: code.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::UsHolidays;

    #[test]
    fn accepts_national_codes() {
        let provider = UsHolidays;
        assert_eq!(validate_region("us", &provider).unwrap(), Region::National);
        assert_eq!(validate_region("USA", &provider).unwrap(), Region::National);
        assert_eq!(Region::default().code(), "US");
    }

    #[test]
    fn accepts_states_case_insensitively() {
        let provider = UsHolidays;
        for code in ["ca", "wv", "mo", "Pa", "DC"] {
            let region = validate_region(code, &provider).unwrap();
            assert_eq!(region.code(), code.to_ascii_uppercase());
            assert!(!region.is_national());
        }
    }

    #[test]
    fn rejects_unknown_codes() {
        let provider = UsHolidays;
        for code in ["XX", "NZ", "New Zealand", ""] {
            assert_eq!(
                validate_region(code, &provider),
                Err(BizDayError::InvalidRegion {
                    code: code.to_string()
                })
            );
        }
    }
}
