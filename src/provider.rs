//! Sources of regional holiday rules.
//!
//! [`UsHolidays`] ships federal holidays plus a table of state and territory
//! holidays. Each region starts from the federal rules, drops any federal
//! holiday it does not observe, then layers its own rules on top.

use std::collections::BTreeSet;

use tracing::debug;

use crate::error::Result;
use crate::region::Region;
use crate::ruleset::HolidayTag::{Optional, Public};
use crate::ruleset::{HolidayTag, Occurrence, Ruleset};

/// Supplies the base holiday rules for US regions.
pub trait HolidayRuleProvider {
    /// Upper-cased codes of every sub-national region known to the provider.
    fn list_regions(&self) -> BTreeSet<String>;

    /// A fresh working copy of the rules for `region`.
    fn base_ruleset(&self, region: &Region) -> Result<Ruleset>;

    /// All known holidays for `region` in `year`, optional ones included.
    fn occurrences(&self, region: &Region, year: i32) -> Result<Vec<Occurrence>> {
        Ok(self.base_ruleset(region)?.occurrences(year))
    }
}

type RuleRow = (&'static str, &'static str, HolidayTag);

macro_rules! observed {
    ($date:literal) => {
        concat!(
            $date,
            " and if saturday then previous friday if sunday then next monday"
        )
    };
    ($date:literal, $suffix:literal) => {
        concat!(
            $date,
            " and if saturday then previous friday if sunday then next monday ",
            $suffix
        )
    };
}

const DAY_AFTER_THANKSGIVING: &str = "day after 4th thursday in November";
const GOOD_FRIDAY: &str = "easter -2";

/// US federal holidays, as of 2022, plus common observances.
const FEDERAL: &[RuleRow] = &[
    (observed!("01-01"), "New Year's Day", Public),
    ("3rd monday in January", "Martin Luther King Jr. Day", Public),
    ("02-14", "Valentine's Day", Optional),
    ("3rd monday in February", "Washington's Birthday", Public),
    ("easter", "Easter Sunday", Optional),
    ("2nd sunday in May", "Mother's Day", Optional),
    ("last monday in May", "Memorial Day", Public),
    ("3rd sunday in June", "Father's Day", Optional),
    (observed!("06-19", "since 2021"), "Juneteenth", Public),
    (observed!("07-04"), "Independence Day", Public),
    ("1st monday in September", "Labor Day", Public),
    ("2nd monday in October", "Columbus Day", Public),
    ("10-31", "Halloween", Optional),
    ("tuesday after 11-01", "Election Day", Optional),
    (observed!("11-11"), "Veterans Day", Public),
    ("4th thursday in November", "Thanksgiving Day", Public),
    (DAY_AFTER_THANKSGIVING, "Day after Thanksgiving", Optional),
    ("12-24", "Christmas Eve", Optional),
    (observed!("12-25"), "Christmas Day", Public),
    ("12-31", "New Year's Eve", Optional),
];

/// Holiday rules specific to one state or territory.
struct RegionTable {
    code: &'static str,
    name: &'static str,
    holidays: &'static [RuleRow],
    /// Federal holidays the region does not observe.
    drops: &'static [&'static str],
}

macro_rules! region {
    ($code:literal, $name:literal) => {
        RegionTable {
            code: $code,
            name: $name,
            holidays: &[],
            drops: &[],
        }
    };
    ($code:literal, $name:literal, [$($row:expr),* $(,)?]) => {
        RegionTable {
            code: $code,
            name: $name,
            holidays: &[$($row),*],
            drops: &[],
        }
    };
    ($code:literal, $name:literal, [$($row:expr),* $(,)?], drops [$($drop:literal),*]) => {
        RegionTable {
            code: $code,
            name: $name,
            holidays: &[$($row),*],
            drops: &[$($drop),*],
        }
    };
}

const REGIONS: &[RegionTable] = &[
    region!("AL", "Alabama", [
        ("4th monday in April", "Confederate Memorial Day", Public),
        ("1st monday in June", "Jefferson Davis' Birthday", Public),
    ]),
    region!("AK", "Alaska", [
        ("last monday in March", "Seward's Day", Public),
        (observed!("10-18"), "Alaska Day", Public),
    ]),
    region!("AZ", "Arizona"),
    region!("AR", "Arkansas", [("12-24", "Christmas Eve", Public)]),
    region!("CA", "California", [
        ("03-31", "César Chávez Day", Public),
        (DAY_AFTER_THANKSGIVING, "Day after Thanksgiving", Public),
    ], drops ["Columbus Day"]),
    region!("CO", "Colorado"),
    region!("CT", "Connecticut", [
        ("02-12", "Lincoln's Birthday", Public),
        (GOOD_FRIDAY, "Good Friday", Public),
    ]),
    region!("DE", "Delaware", [
        (GOOD_FRIDAY, "Good Friday", Public),
        (DAY_AFTER_THANKSGIVING, "Day after Thanksgiving", Public),
    ]),
    region!("FL", "Florida", [(DAY_AFTER_THANKSGIVING, "Day after Thanksgiving", Public)]),
    region!("GA", "Georgia", [(DAY_AFTER_THANKSGIVING, "Day after Thanksgiving", Public)]),
    region!("HI", "Hawaii", [
        (observed!("03-26"), "Prince Jonah Kuhio Kalanianaole Day", Public),
        (GOOD_FRIDAY, "Good Friday", Public),
        (observed!("06-11"), "King Kamehameha I Day", Public),
        ("3rd friday in August", "Statehood Day", Public),
    ], drops ["Columbus Day"]),
    region!("ID", "Idaho"),
    region!("IL", "Illinois", [
        ("02-12", "Lincoln's Birthday", Public),
        (DAY_AFTER_THANKSGIVING, "Day after Thanksgiving", Public),
    ]),
    region!("IN", "Indiana", [
        (GOOD_FRIDAY, "Good Friday", Public),
        (DAY_AFTER_THANKSGIVING, "Lincoln's Birthday", Public),
    ]),
    region!("IA", "Iowa", [(DAY_AFTER_THANKSGIVING, "Day after Thanksgiving", Public)]),
    region!("KS", "Kansas"),
    region!("KY", "Kentucky", [
        (GOOD_FRIDAY, "Good Friday", Optional),
        (DAY_AFTER_THANKSGIVING, "Day after Thanksgiving", Public),
    ]),
    region!("LA", "Louisiana", [
        ("easter -47", "Mardi Gras", Public),
        (GOOD_FRIDAY, "Good Friday", Public),
    ]),
    region!("ME", "Maine", [("3rd monday in April", "Patriots' Day", Public)]),
    region!("MD", "Maryland", [(DAY_AFTER_THANKSGIVING, "American Indian Heritage Day", Public)]),
    region!("MA", "Massachusetts", [("3rd monday in April", "Patriots' Day", Public)]),
    region!("MI", "Michigan", [(DAY_AFTER_THANKSGIVING, "Day after Thanksgiving", Public)]),
    region!("MN", "Minnesota", [(DAY_AFTER_THANKSGIVING, "Day after Thanksgiving", Public)]),
    region!("MS", "Mississippi", [("last monday in April", "Confederate Memorial Day", Public)]),
    region!("MO", "Missouri", [
        ("02-12", "Lincoln's Birthday", Public),
        ("05-08", "Truman Day", Public),
    ]),
    region!("MT", "Montana"),
    region!("NE", "Nebraska", [
        ("last friday in April", "Arbor Day", Public),
        (DAY_AFTER_THANKSGIVING, "Day after Thanksgiving", Public),
    ]),
    region!("NV", "Nevada", [
        ("last friday in October", "Nevada Day", Public),
        (DAY_AFTER_THANKSGIVING, "Family Day", Public),
    ]),
    region!("NH", "New Hampshire", [(DAY_AFTER_THANKSGIVING, "Day after Thanksgiving", Public)]),
    region!("NJ", "New Jersey", [
        ("02-12", "Lincoln's Birthday", Public),
        (GOOD_FRIDAY, "Good Friday", Public),
    ]),
    region!("NM", "New Mexico", [(DAY_AFTER_THANKSGIVING, "Day after Thanksgiving", Public)]),
    region!("NY", "New York", [("02-12", "Lincoln's Birthday", Public)]),
    region!("NC", "North Carolina", [
        (GOOD_FRIDAY, "Good Friday", Public),
        (DAY_AFTER_THANKSGIVING, "Day after Thanksgiving", Public),
    ]),
    region!("ND", "North Dakota", [(GOOD_FRIDAY, "Good Friday", Public)]),
    region!("OH", "Ohio"),
    region!("OK", "Oklahoma", [(DAY_AFTER_THANKSGIVING, "Day after Thanksgiving", Public)]),
    region!("OR", "Oregon"),
    region!("PA", "Pennsylvania", [
        ("06-14", "Flag Day", Optional),
        (DAY_AFTER_THANKSGIVING, "Day after Thanksgiving", Public),
    ]),
    region!("RI", "Rhode Island", [("2nd monday in August", "Victory Day", Public)]),
    region!("SC", "South Carolina", [("05-10", "Confederate Memorial Day", Public)]),
    region!("SD", "South Dakota"),
    region!("TN", "Tennessee", [
        (GOOD_FRIDAY, "Good Friday", Public),
        (DAY_AFTER_THANKSGIVING, "Day after Thanksgiving", Public),
    ]),
    region!("TX", "Texas", [
        ("03-02", "Texas Independence Day", Public),
        ("04-21", "San Jacinto Day", Public),
        (DAY_AFTER_THANKSGIVING, "Day after Thanksgiving", Public),
    ]),
    region!("UT", "Utah", [(observed!("07-24"), "Pioneer Day", Public)]),
    region!("VT", "Vermont", [
        ("1st tuesday in March", "Town Meeting Day", Public),
        ("08-16", "Bennington Battle Day", Public),
    ]),
    region!("VA", "Virginia"),
    region!("WA", "Washington", [(DAY_AFTER_THANKSGIVING, "Day after Thanksgiving", Public)]),
    region!("WV", "West Virginia", [
        ("06-20", "West Virginia Day", Public),
        (DAY_AFTER_THANKSGIVING, "Day after Thanksgiving", Public),
    ]),
    region!("WI", "Wisconsin"),
    region!("WY", "Wyoming"),
    region!("DC", "District of Columbia", [(observed!("04-16"), "Emancipation Day", Public)]),
    region!("AS", "American Samoa"),
    region!("GU", "Guam"),
    region!("MP", "Northern Mariana Islands"),
    region!("PR", "Puerto Rico", [
        ("01-06", "Three Kings Day", Public),
        (GOOD_FRIDAY, "Good Friday", Public),
    ]),
    region!("UM", "United States Minor Outlying Islands"),
    region!("VI", "United States Virgin Islands"),
];

/// Built-in provider of US federal, state and territory holidays.
#[derive(Debug, Clone, Copy, Default)]
pub struct UsHolidays;

impl UsHolidays {
    /// Full name of a region code, e.g. `Pennsylvania` for `PA`.
    pub fn region_name(&self, code: &str) -> Option<&'static str> {
        REGIONS
            .iter()
            .find(|r| r.code.eq_ignore_ascii_case(code))
            .map(|r| r.name)
    }
}

fn apply_rows(ruleset: &mut Ruleset, rows: &[RuleRow]) -> Result<()> {
    for (rule, name, tag) in rows {
        ruleset.set_rule(rule.parse()?, *name, *tag);
    }
    Ok(())
}

impl HolidayRuleProvider for UsHolidays {
    fn list_regions(&self) -> BTreeSet<String> {
        REGIONS.iter().map(|r| r.code.to_string()).collect()
    }

    fn base_ruleset(&self, region: &Region) -> Result<Ruleset> {
        let mut ruleset = Ruleset::new();
        apply_rows(&mut ruleset, FEDERAL)?;
        if let Region::State(code) = region {
            if let Some(table) = REGIONS.iter().find(|r| r.code == code.as_str()) {
                for name in table.drops {
                    ruleset.remove_named(name);
                }
                apply_rows(&mut ruleset, table.holidays)?;
            }
        }
        debug!(region = %region, rules = ruleset.len(), "loaded base holiday rules");
        Ok(ruleset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn public_names(region: &Region, year: i32) -> Vec<String> {
        UsHolidays
            .occurrences(region, year)
            .unwrap()
            .into_iter()
            .filter(|o| o.tag == HolidayTag::Public)
            .map(|o| o.name)
            .collect()
    }

    #[test]
    fn every_region_builds() {
        let regions = UsHolidays.list_regions();
        assert_eq!(regions.len(), 57);
        for code in regions {
            let ruleset = UsHolidays.base_ruleset(&Region::State(code)).unwrap();
            assert!(!ruleset.is_empty());
        }
    }

    #[test]
    fn federal_holidays_2021() {
        let occurrences = UsHolidays.occurrences(&Region::National, 2021).unwrap();
        let public: Vec<NaiveDate> = occurrences
            .iter()
            .filter(|o| o.tag == HolidayTag::Public)
            .map(|o| o.date)
            .collect();
        assert_eq!(
            public,
            vec![
                ymd(2021, 1, 1),
                ymd(2021, 1, 18),
                ymd(2021, 2, 15),
                ymd(2021, 5, 31),
                ymd(2021, 6, 18),
                ymd(2021, 6, 19),
                ymd(2021, 7, 4),
                ymd(2021, 7, 5),
                ymd(2021, 9, 6),
                ymd(2021, 10, 11),
                ymd(2021, 11, 11),
                ymd(2021, 11, 25),
                ymd(2021, 12, 24),
                ymd(2021, 12, 25),
            ]
        );
    }

    #[test]
    fn juneteenth_starts_in_2021() {
        assert!(!public_names(&Region::National, 2020).contains(&"Juneteenth".to_string()));
        assert!(public_names(&Region::National, 2021).contains(&"Juneteenth".to_string()));
    }

    #[test]
    fn state_rules_layer_over_federal() {
        let pa = Region::State("PA".to_string());
        let names = public_names(&pa, 2020);
        assert!(names.contains(&"Day after Thanksgiving".to_string()));
        assert!(names.contains(&"Christmas Day".to_string()));
        assert!(!names.contains(&"Christmas Eve".to_string()));

        let hi = Region::State("HI".to_string());
        let names = public_names(&hi, 2020);
        assert!(names.contains(&"King Kamehameha I Day".to_string()));
        assert!(!names.contains(&"Columbus Day".to_string()));
    }

    #[test]
    fn region_names() {
        assert_eq!(UsHolidays.region_name("pa"), Some("Pennsylvania"));
        assert_eq!(UsHolidays.region_name("NZ"), None);
    }
}
