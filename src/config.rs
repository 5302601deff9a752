//! Calendar construction options.

use std::env;

use serde::{Deserialize, Serialize};

use crate::customize::CustomHoliday;
use crate::error::Result;

/// Environment variable holding a JSON array of holiday names to exclude.
pub const EXCLUDED_HOLIDAYS_VAR: &str = "EXCLUDED_HOLIDAYS";
/// Environment variable holding a JSON array of `{"rule", "name"}` objects.
pub const ADDITIONAL_HOLIDAYS_VAR: &str = "ADDITIONAL_HOLIDAYS";

/// Overrides applied to a region's base ruleset when a calendar is built.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CalendarOptions {
    /// Holiday names demoted from public to optional.
    #[serde(default)]
    pub exclude_holidays: Vec<String>,

    /// Extra public holidays.
    #[serde(default)]
    pub add_holidays: Vec<CustomHoliday>,

    /// Fail on excluded names that match no holiday instead of ignoring them.
    #[serde(default)]
    pub strict_exclusions: bool,
}

impl CalendarOptions {
    pub fn new() -> CalendarOptions {
        CalendarOptions::default()
    }

    /// Parse options from a JSON document.
    pub fn from_json_str(json: &str) -> Result<CalendarOptions> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn exclude(mut self, name: impl Into<String>) -> Self {
        self.exclude_holidays.push(name.into());
        self
    }

    pub fn add(mut self, rule: impl Into<String>, name: impl Into<String>) -> Self {
        self.add_holidays.push(CustomHoliday::new(rule, name));
        self
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.strict_exclusions = strict;
        self
    }

    /// Append overrides found in [`EXCLUDED_HOLIDAYS_VAR`] and
    /// [`ADDITIONAL_HOLIDAYS_VAR`].
    pub fn merge_env(mut self) -> Result<Self> {
        if let Ok(json) = env::var(EXCLUDED_HOLIDAYS_VAR) {
            let mut names: Vec<String> = serde_json::from_str(&json)?;
            self.exclude_holidays.append(&mut names);
        }
        if let Ok(json) = env::var(ADDITIONAL_HOLIDAYS_VAR) {
            let mut holidays: Vec<CustomHoliday> = serde_json::from_str(&json)?;
            self.add_holidays.append(&mut holidays);
        }
        Ok(self)
    }
}
