//! Resolved holiday rulesets and date lookups against them.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::rule::Rule;

/// Classification of a holiday. Only public holidays suppress business days.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum HolidayTag {
    Public,
    Optional,
}

/// One named rule inside a ruleset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleEntry {
    pub rule: Rule,
    pub name: String,
    pub tag: HolidayTag,
}

/// A holiday as observed on a concrete date.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Occurrence {
    pub name: String,
    pub date: NaiveDate,
    /// Canonical text of the rule that produced this date.
    pub rule: String,
    pub tag: HolidayTag,
    /// Set when the date is a weekend substitute for the nominal day.
    pub substitute: bool,
}

/// An ordered mapping from rule (keyed by its canonical text) to a name and
/// tag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ruleset {
    entries: Vec<RuleEntry>,
}

impl Ruleset {
    pub fn new() -> Ruleset {
        Ruleset::default()
    }

    pub fn entries(&self) -> &[RuleEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Register `rule` under `name` and `tag`. An entry for the same rule is
    /// overwritten in place, otherwise the rule is appended.
    pub fn set_rule(
        &mut self,
        rule: Rule,
        name: impl Into<String>,
        tag: HolidayTag,
    ) -> &mut Self {
        let name = name.into();
        match self.entries.iter_mut().find(|e| e.rule == rule) {
            Some(entry) => {
                entry.name = name;
                entry.tag = tag;
            }
            None => self.entries.push(RuleEntry { rule, name, tag }),
        }
        self
    }

    /// Drop every rule carrying `name` (case-insensitive), returning how many went.
    pub fn remove_named(&mut self, name: &str) -> usize {
        let before = self.entries.len();
        self.entries.retain(|e| !e.name.eq_ignore_ascii_case(name));
        before - self.entries.len()
    }

    /// Entries carrying `name` (case-insensitive).
    pub fn rules_named(&self, name: &str) -> Vec<RuleEntry> {
        self.entries
            .iter()
            .filter(|e| e.name.eq_ignore_ascii_case(name))
            .cloned()
            .collect()
    }

    /// Every occurrence the rules produce for `year`, sorted by date.
    ///
    /// Substitute days can land in a neighbouring year; use
    /// [`Ruleset::observed_in`] for the holidays falling inside a year.
    pub fn occurrences(&self, year: i32) -> Vec<Occurrence> {
        let mut occurrences: Vec<Occurrence> = self
            .entries
            .iter()
            .flat_map(|entry| {
                entry
                    .rule
                    .observed_dates(year)
                    .into_iter()
                    .map(move |observed| Occurrence {
                        name: entry.name.clone(),
                        date: observed.date,
                        rule: entry.rule.to_string(),
                        tag: entry.tag,
                        substitute: observed.substitute,
                    })
            })
            .collect();
        occurrences.sort_by_key(|o| o.date);
        occurrences
    }

    /// Occurrences whose observed date falls inside `year`, sorted by date.
    pub fn observed_in(&self, year: i32) -> Vec<Occurrence> {
        let years = year.saturating_sub(1)..=year.saturating_add(1);
        let mut occurrences: Vec<Occurrence> = years
            .flat_map(|y| self.occurrences(y))
            .filter(|o| o.date.year() == year)
            .collect();
        occurrences.sort_by_key(|o| o.date);
        occurrences
    }
}

/// Lazily built date lookup over a ruleset.
///
/// Each year's rules are evaluated at most once, so day-by-day walks do not
/// recompute the same holidays for every date they visit.
#[derive(Debug)]
pub struct HolidayIndex<'a> {
    ruleset: &'a Ruleset,
    loaded: BTreeSet<i32>,
    by_date: BTreeMap<NaiveDate, Vec<Occurrence>>,
}

impl<'a> HolidayIndex<'a> {
    pub fn new(ruleset: &'a Ruleset) -> HolidayIndex<'a> {
        HolidayIndex {
            ruleset,
            loaded: BTreeSet::new(),
            by_date: BTreeMap::new(),
        }
    }

    /// The public holiday observed on `date`, if any. When several public
    /// rules land on the same date the first registered one wins.
    pub fn public_on(&mut self, date: NaiveDate) -> Option<&Occurrence> {
        // substitutes can cross a year boundary in either direction
        for year in date.year().saturating_sub(1)..=date.year().saturating_add(1) {
            if self.loaded.insert(year) {
                for occurrence in self.ruleset.occurrences(year) {
                    self.by_date
                        .entry(occurrence.date)
                        .or_default()
                        .push(occurrence);
                }
            }
        }
        self.by_date
            .get(&date)?
            .iter()
            .find(|o| o.tag == HolidayTag::Public)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn rule(text: &str) -> Rule {
        text.parse().unwrap()
    }

    fn sample() -> Ruleset {
        let mut ruleset = Ruleset::new();
        ruleset
            .set_rule(
                rule("01-01 and if saturday then previous friday if sunday then next monday"),
                "New Year's Day",
                HolidayTag::Public,
            )
            .set_rule(rule("12-24"), "Christmas Eve", HolidayTag::Optional)
            .set_rule(
                rule("12-25 and if saturday then previous friday if sunday then next monday"),
                "Christmas Day",
                HolidayTag::Public,
            )
            .set_rule(rule("12-31"), "New Year's Eve", HolidayTag::Optional);
        ruleset
    }

    #[test]
    fn set_rule_overwrites_same_rule() {
        let mut ruleset = sample();
        ruleset.set_rule(rule("12-24"), "Christmas Eve", HolidayTag::Public);
        assert_eq!(ruleset.len(), 4);
        assert_eq!(ruleset.entries()[1].tag, HolidayTag::Public);

        // a different expression for the same day is a separate rule
        ruleset.set_rule(rule("12-25"), "Christmas", HolidayTag::Public);
        assert_eq!(ruleset.len(), 5);
    }

    #[test]
    fn rules_named_is_case_insensitive() {
        let ruleset = sample();
        assert_eq!(ruleset.rules_named("christmas day").len(), 1);
        assert!(ruleset.rules_named("Boxing Day").is_empty());
    }

    #[test]
    fn remove_named_drops_entries() {
        let mut ruleset = sample();
        assert_eq!(ruleset.remove_named("CHRISTMAS EVE"), 1);
        assert_eq!(ruleset.remove_named("Christmas Eve"), 0);
        assert_eq!(ruleset.len(), 3);
    }

    #[test]
    fn occurrences_are_sorted_and_tagged() {
        let occurrences = sample().occurrences(2016);
        let dates: Vec<NaiveDate> = occurrences.iter().map(|o| o.date).collect();
        assert_eq!(
            dates,
            vec![
                ymd(2016, 1, 1),
                ymd(2016, 12, 24),
                ymd(2016, 12, 25),
                ymd(2016, 12, 26),
                ymd(2016, 12, 31),
            ]
        );
        assert!(occurrences[3].substitute);
        assert_eq!(occurrences[3].name, "Christmas Day");
        assert_eq!(occurrences[1].tag, HolidayTag::Optional);
    }

    #[test]
    fn observed_in_pulls_substitutes_across_years() {
        // New Year's Day 2022 is a Saturday, observed Friday 2021-12-31.
        let observed = sample().observed_in(2021);
        let last = observed.last().unwrap();
        assert_eq!(last.date, ymd(2021, 12, 31));
        assert!(observed
            .iter()
            .any(|o| o.name == "New Year's Day" && o.date == ymd(2021, 12, 31)));
        assert!(sample()
            .observed_in(2022)
            .iter()
            .all(|o| o.date.year() == 2022));
    }

    #[test]
    fn observed_in_extreme_years_is_empty() {
        assert!(sample().observed_in(i32::MAX).is_empty());
        assert!(sample().observed_in(i32::MIN).is_empty());
    }

    #[test]
    fn index_prefers_public_occurrences() {
        let ruleset = sample();
        let mut index = HolidayIndex::new(&ruleset);
        assert_eq!(
            index.public_on(ymd(2021, 12, 31)).map(|o| o.name.as_str()),
            Some("New Year's Day")
        );
        assert!(index.public_on(ymd(2020, 12, 24)).is_none());
        assert!(index.public_on(ymd(2020, 12, 31)).is_none());
        assert_eq!(
            index.public_on(ymd(2016, 12, 26)).map(|o| o.substitute),
            Some(true)
        );
    }
}
