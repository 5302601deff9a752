//! User overrides applied on top of a provider's base ruleset.
//!
//! Calendars apply exclusions first and additions second, so a name that
//! appears in both lists ends up public.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{BizDayError, Result};
use crate::rule::Rule;
use crate::ruleset::{HolidayTag, Ruleset};

/// A user supplied public holiday, e.g. `{"rule": "02-02", "name": "Groundhog Day"}`.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct CustomHoliday {
    pub rule: String,
    pub name: String,
}

impl CustomHoliday {
    pub fn new(rule: impl Into<String>, name: impl Into<String>) -> CustomHoliday {
        CustomHoliday {
            rule: rule.into(),
            name: name.into(),
        }
    }

    fn validate(&self) -> Result<Rule> {
        if self.rule.trim().is_empty() || self.name.trim().is_empty() {
            return Err(BizDayError::InvalidCustomHoliday {
                rule: self.rule.clone(),
                name: self.name.clone(),
            });
        }
        self.rule.parse()
    }
}

/// Demote every rule named in `names` to [`HolidayTag::Optional`].
///
/// Names are matched case-insensitively. A name that matches nothing is
/// logged and skipped, unless `strict` is set, in which case it fails with
/// [`BizDayError::UnknownHoliday`].
pub fn exclude_holidays<S: AsRef<str>>(
    ruleset: &mut Ruleset,
    names: &[S],
    strict: bool,
) -> Result<()> {
    for name in names {
        let name = name.as_ref();
        let entries = ruleset.rules_named(name);
        if entries.is_empty() {
            if strict {
                return Err(BizDayError::UnknownHoliday {
                    name: name.to_string(),
                });
            }
            warn!(holiday = name, "excluded holiday not found, ignoring");
            continue;
        }
        for entry in entries {
            debug!(holiday = %entry.name, rule = %entry.rule, "excluding holiday");
            ruleset.set_rule(entry.rule, entry.name, HolidayTag::Optional);
        }
    }
    Ok(())
}

/// Register each custom holiday as a public rule.
pub fn add_holidays(ruleset: &mut Ruleset, holidays: &[CustomHoliday]) -> Result<()> {
    for holiday in holidays {
        let rule = holiday.validate()?;
        debug!(holiday = %holiday.name, rule = %rule, "adding holiday");
        ruleset.set_rule(rule, holiday.name.clone(), HolidayTag::Public);
    }
    Ok(())
}
