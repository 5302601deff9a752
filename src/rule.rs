//! Holiday recurrence rules.
//!
//! A rule is written as a short English-like expression, e.g.
//! `3rd monday in January` or
//! `12-25 and if saturday then previous friday if sunday then next monday`.
//! Rules parse with [`str::parse`], print back in canonical form with
//! `Display`, and (de)serialize as that canonical string. The canonical text
//! is what identifies a rule inside a ruleset.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::date::last_day_of_month;
use crate::error::{BizDayError, Result};

/// Largest day offset accepted from a rule expression.
pub const MAX_OFFSET_DAYS: i64 = 366;

/// Specifies the nth week of a month
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum NthWeek {
    First,
    Second,
    Third,
    Fourth,
    Last,
}

/// Which side of an anchor date to search on.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Before,
    After,
}

/// Types of yearly dates a holiday can fall on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateRule {
    /// The same month and day every year (`12-25`).
    YearlyDay { month: u32, day: u32 },
    /// A single holiday which is valid only once in time (`2001-09-11`).
    SingularDay(NaiveDate),
    /// A holiday that is defined in relative days (e.g. -2 for Good Friday) to Easter (Sunday).
    EasterOffset { offset: i64 },
    /// A holiday that falls on the nth (or last) weekday of a specific month,
    /// shifted by `offset` days (`day after 4th thursday in November` has offset 1).
    MonthWeekday {
        month: u32,
        weekday: Weekday,
        nth: NthWeek,
        offset: i64,
    },
    /// The first `weekday` strictly before or after a fixed month/day
    /// (`tuesday after 11-01`).
    WeekdayRelative {
        weekday: Weekday,
        direction: Direction,
        month: u32,
        day: u32,
    },
}

/// Move to the nearest `weekday` on one side of the date (`previous friday`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shift {
    pub direction: Direction,
    pub weekday: Weekday,
}

impl Shift {
    fn apply(self, date: NaiveDate) -> Option<NaiveDate> {
        let mut date = step(date, self.direction)?;
        while date.weekday() != self.weekday {
            date = step(date, self.direction)?;
        }
        Some(date)
    }
}

/// Weekend substitution for holidays landing on a Saturday or Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Substitution {
    /// When set (`and if ...`), the original date stays a holiday and the
    /// substitute is observed in addition. Otherwise the holiday moves.
    pub keep_original: bool,
    pub saturday: Option<Shift>,
    pub sunday: Option<Shift>,
}

/// One date produced by a rule for a given year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObservedDate {
    pub date: NaiveDate,
    /// True when the date is a weekend substitute rather than the nominal day.
    pub substitute: bool,
}

/// A complete holiday rule: the yearly date, optional weekend substitution
/// and the years it is valid for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub date: DateRule,
    pub substitution: Option<Substitution>,
    /// First year the rule applies (inclusively).
    pub first: Option<i32>,
    /// Last year the rule applies (inclusively).
    pub last: Option<i32>,
}

impl Rule {
    pub fn new(date: DateRule) -> Rule {
        Rule {
            date,
            substitution: None,
            first: None,
            last: None,
        }
    }

    /// Whether the rule is in force during `year`.
    pub fn applies_in(&self, year: i32) -> bool {
        self.first.map_or(true, |first| year >= first)
            && self.last.map_or(true, |last| year <= last)
    }

    /// The nominal date of the holiday in `year`, before weekend substitution.
    pub fn nominal_date(&self, year: i32) -> Option<NaiveDate> {
        if !self.applies_in(year) {
            return None;
        }
        match self.date {
            DateRule::YearlyDay { month, day } => NaiveDate::from_ymd_opt(year, month, day),
            DateRule::SingularDay(date) => (date.year() == year).then_some(date),
            DateRule::EasterOffset { offset } => {
                let easter = computus::gregorian(year).ok()?;
                let easter = NaiveDate::from_ymd_opt(easter.year, easter.month, easter.day)?;
                offset_date(easter, offset)
            }
            DateRule::MonthWeekday {
                month,
                weekday,
                nth,
                offset,
            } => {
                let day = match nth {
                    NthWeek::First => 1,
                    NthWeek::Second => 8,
                    NthWeek::Third => 15,
                    NthWeek::Fourth => 22,
                    NthWeek::Last => last_day_of_month(year, month)?,
                };
                let mut date = NaiveDate::from_ymd_opt(year, month, day)?;
                while date.weekday() != weekday {
                    date = match nth {
                        NthWeek::Last => date.pred_opt()?,
                        _ => date.succ_opt()?,
                    }
                }
                offset_date(date, offset)
            }
            DateRule::WeekdayRelative {
                weekday,
                direction,
                month,
                day,
            } => {
                let anchor = NaiveDate::from_ymd_opt(year, month, day)?;
                Shift { direction, weekday }.apply(anchor)
            }
        }
    }

    /// All dates the holiday is observed on in `year`.
    ///
    /// A substitute may fall outside `year` (New Year's Day on a Saturday is
    /// observed on the preceding December 31).
    pub fn observed_dates(&self, year: i32) -> Vec<ObservedDate> {
        let Some(date) = self.nominal_date(year) else {
            return Vec::new();
        };
        let nominal = ObservedDate {
            date,
            substitute: false,
        };
        let Some(substitution) = self.substitution else {
            return vec![nominal];
        };
        let shift = match date.weekday() {
            Weekday::Sat => substitution.saturday,
            Weekday::Sun => substitution.sunday,
            _ => None,
        };
        match shift.and_then(|shift| shift.apply(date)) {
            Some(moved) => {
                let moved = ObservedDate {
                    date: moved,
                    substitute: true,
                };
                if substitution.keep_original {
                    vec![nominal, moved]
                } else {
                    vec![moved]
                }
            }
            None => vec![nominal],
        }
    }
}

fn offset_date(date: NaiveDate, offset: i64) -> Option<NaiveDate> {
    let days = Days::new(offset.unsigned_abs());
    if offset < 0 {
        date.checked_sub_days(days)
    } else {
        date.checked_add_days(days)
    }
}

fn step(date: NaiveDate, direction: Direction) -> Option<NaiveDate> {
    match direction {
        Direction::Before => date.pred_opt(),
        Direction::After => date.succ_opt(),
    }
}

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "monday",
        Weekday::Tue => "tuesday",
        Weekday::Wed => "wednesday",
        Weekday::Thu => "thursday",
        Weekday::Fri => "friday",
        Weekday::Sat => "saturday",
        Weekday::Sun => "sunday",
    }
}

fn nth_name(nth: NthWeek) -> &'static str {
    match nth {
        NthWeek::First => "1st",
        NthWeek::Second => "2nd",
        NthWeek::Third => "3rd",
        NthWeek::Fourth => "4th",
        NthWeek::Last => "last",
    }
}

fn direction_name(direction: Direction) -> &'static str {
    match direction {
        Direction::Before => "before",
        Direction::After => "after",
    }
}

impl fmt::Display for DateRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            DateRule::YearlyDay { month, day } => write!(f, "{month:02}-{day:02}"),
            DateRule::SingularDay(date) => write!(f, "{}", date.format("%Y-%m-%d")),
            DateRule::EasterOffset { offset: 0 } => write!(f, "easter"),
            DateRule::EasterOffset { offset } => write!(f, "easter {offset:+}"),
            DateRule::MonthWeekday {
                month,
                weekday,
                nth,
                offset,
            } => {
                match offset {
                    0 => {}
                    1 => write!(f, "day after ")?,
                    -1 => write!(f, "day before ")?,
                    n if n > 0 => write!(f, "{n} days after ")?,
                    n => write!(f, "{} days before ", -n)?,
                }
                write!(
                    f,
                    "{} {} in {}",
                    nth_name(nth),
                    weekday_name(weekday),
                    MONTHS[month as usize - 1]
                )
            }
            DateRule::WeekdayRelative {
                weekday,
                direction,
                month,
                day,
            } => write!(
                f,
                "{} {} {month:02}-{day:02}",
                weekday_name(weekday),
                direction_name(direction)
            ),
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.date)?;
        if let Some(substitution) = &self.substitution {
            if substitution.keep_original {
                write!(f, " and")?;
            }
            for (day, shift) in [
                ("saturday", substitution.saturday),
                ("sunday", substitution.sunday),
            ] {
                if let Some(shift) = shift {
                    let side = match shift.direction {
                        Direction::Before => "previous",
                        Direction::After => "next",
                    };
                    write!(f, " if {day} then {side} {}", weekday_name(shift.weekday))?;
                }
            }
        }
        if let Some(first) = self.first {
            write!(f, " since {first}")?;
        }
        if let Some(last) = self.last {
            write!(f, " prior to {}", i64::from(last) + 1)?;
        }
        Ok(())
    }
}

/// Token cursor over a lower-cased rule expression.
struct Parser<'a> {
    source: &'a str,
    tokens: Vec<String>,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(source: &'a str) -> Parser<'a> {
        Parser {
            source,
            tokens: source
                .split_whitespace()
                .map(|t| t.to_ascii_lowercase())
                .collect(),
            pos: 0,
        }
    }

    fn error(&self, reason: impl Into<String>) -> BizDayError {
        BizDayError::InvalidRule {
            rule: self.source.to_string(),
            reason: reason.into(),
        }
    }

    fn peek(&self) -> Option<&str> {
        self.tokens.get(self.pos).map(String::as_str)
    }

    fn next(&mut self) -> Result<String> {
        let token = self
            .tokens
            .get(self.pos)
            .cloned()
            .ok_or_else(|| self.error("unexpected end of rule"))?;
        self.pos += 1;
        Ok(token)
    }

    fn expect(&mut self, word: &str) -> Result<()> {
        let token = self.next()?;
        if token == word {
            Ok(())
        } else {
            Err(self.error(format!("expected '{word}', found '{token}'")))
        }
    }

    fn weekday(&mut self) -> Result<Weekday> {
        let token = self.next()?;
        parse_weekday(&token)
            .ok_or_else(|| self.error(format!("'{token}' is not a weekday")))
    }

    fn year(&mut self) -> Result<i32> {
        let token = self.next()?;
        token
            .parse()
            .map_err(|_| self.error(format!("'{token}' is not a year")))
    }

    fn month_day(&mut self) -> Result<(u32, u32)> {
        let token = self.next()?;
        parse_month_day(&token)
            .ok_or_else(|| self.error(format!("'{token}' is not a MM-DD date")))
    }

    fn offset(&self, days: i64) -> Result<i64> {
        if days.abs() > MAX_OFFSET_DAYS {
            return Err(self.error(format!("offset of {days} days exceeds {MAX_OFFSET_DAYS}")));
        }
        Ok(days)
    }

    fn rule(mut self) -> Result<Rule> {
        let mut rule = Rule::new(self.date_rule()?);
        while let Some(token) = self.peek().map(str::to_owned) {
            self.pos += 1;
            match token.as_str() {
                "and" => {
                    rule.substitution
                        .get_or_insert_with(Substitution::default)
                        .keep_original = true;
                }
                "if" => {
                    let day = self.weekday()?;
                    self.expect("then")?;
                    let direction = match self.next()?.as_str() {
                        "previous" => Direction::Before,
                        "next" => Direction::After,
                        other => {
                            return Err(self.error(format!(
                                "expected 'previous' or 'next', found '{other}'"
                            )))
                        }
                    };
                    let shift = Shift {
                        direction,
                        weekday: self.weekday()?,
                    };
                    let substitution =
                        rule.substitution.get_or_insert_with(Substitution::default);
                    match day {
                        Weekday::Sat => substitution.saturday = Some(shift),
                        Weekday::Sun => substitution.sunday = Some(shift),
                        _ => {
                            return Err(
                                self.error("substitutions apply to saturday or sunday only")
                            )
                        }
                    }
                }
                "since" => rule.first = Some(self.year()?),
                "prior" => {
                    self.expect("to")?;
                    let year = self.year()?;
                    let last = year
                        .checked_sub(1)
                        .ok_or_else(|| self.error(format!("no year precedes {year}")))?;
                    rule.last = Some(last);
                }
                other => return Err(self.error(format!("unexpected '{other}'"))),
            }
        }
        if let Some(substitution) = &rule.substitution {
            if substitution.saturday.is_none() && substitution.sunday.is_none() {
                return Err(self.error("'and' must be followed by a weekend substitution"));
            }
        }
        Ok(rule)
    }

    fn date_rule(&mut self) -> Result<DateRule> {
        let token = self.next()?;
        if let Some(date) = parse_full_date(&token) {
            return Ok(DateRule::SingularDay(date));
        }
        if let Some((month, day)) = parse_month_day(&token) {
            return Ok(DateRule::YearlyDay { month, day });
        }
        if token == "easter" {
            let offset = match self.peek().and_then(|t| t.parse::<i64>().ok()) {
                Some(offset) => {
                    self.pos += 1;
                    self.offset(offset)?
                }
                None => 0,
            };
            return Ok(DateRule::EasterOffset { offset });
        }
        let days = match token.as_str() {
            "day" => Some(1),
            count => count.parse::<i64>().ok().filter(|n| *n > 1),
        };
        if let Some(days) = days {
            if days > 1 {
                self.expect("days")?;
            }
            let days = self.offset(days)?;
            let offset = match self.next()?.as_str() {
                "after" => days,
                "before" => -days,
                other => {
                    return Err(
                        self.error(format!("expected 'after' or 'before', found '{other}'"))
                    )
                }
            };
            let nth = self.next()?;
            return self.month_weekday(&nth, offset);
        }
        if let Some(weekday) = parse_weekday(&token) {
            let direction = match self.next()?.as_str() {
                "before" => Direction::Before,
                "after" => Direction::After,
                other => {
                    return Err(
                        self.error(format!("expected 'before' or 'after', found '{other}'"))
                    )
                }
            };
            let (month, day) = self.month_day()?;
            return Ok(DateRule::WeekdayRelative {
                weekday,
                direction,
                month,
                day,
            });
        }
        self.month_weekday(&token, 0)
    }

    fn month_weekday(&mut self, nth: &str, offset: i64) -> Result<DateRule> {
        let nth = match nth {
            "1st" | "first" => NthWeek::First,
            "2nd" | "second" => NthWeek::Second,
            "3rd" | "third" => NthWeek::Third,
            "4th" | "fourth" => NthWeek::Fourth,
            "last" => NthWeek::Last,
            other => return Err(self.error(format!("'{other}' does not start a holiday rule"))),
        };
        let weekday = self.weekday()?;
        self.expect("in")?;
        let token = self.next()?;
        let month = MONTHS
            .iter()
            .position(|m| m.eq_ignore_ascii_case(&token))
            .ok_or_else(|| self.error(format!("'{token}' is not a month")))?;
        Ok(DateRule::MonthWeekday {
            month: month as u32 + 1,
            weekday,
            nth,
            offset,
        })
    }
}

fn parse_weekday(token: &str) -> Option<Weekday> {
    let weekday = match token {
        "monday" => Weekday::Mon,
        "tuesday" => Weekday::Tue,
        "wednesday" => Weekday::Wed,
        "thursday" => Weekday::Thu,
        "friday" => Weekday::Fri,
        "saturday" => Weekday::Sat,
        "sunday" => Weekday::Sun,
        _ => return None,
    };
    Some(weekday)
}

fn parse_number(token: &str, width: usize) -> Option<u32> {
    (token.len() == width && token.bytes().all(|b| b.is_ascii_digit()))
        .then(|| token.parse().ok())
        .flatten()
}

/// `MM-DD`, valid in at least a leap year.
fn parse_month_day(token: &str) -> Option<(u32, u32)> {
    let (month, day) = token.split_once('-')?;
    let (month, day) = (parse_number(month, 2)?, parse_number(day, 2)?);
    NaiveDate::from_ymd_opt(2000, month, day).map(|_| (month, day))
}

fn parse_full_date(token: &str) -> Option<NaiveDate> {
    let mut parts = token.splitn(3, '-');
    let year = parse_number(parts.next()?, 4)?;
    let month = parse_number(parts.next()?, 2)?;
    let day = parse_number(parts.next()?, 2)?;
    NaiveDate::from_ymd_opt(year as i32, month, day)
}

impl FromStr for Rule {
    type Err = BizDayError;

    fn from_str(s: &str) -> Result<Rule> {
        if s.trim().is_empty() {
            return Err(BizDayError::InvalidRule {
                rule: s.to_string(),
                reason: "empty rule".to_string(),
            });
        }
        Parser::new(s).rule()
    }
}

impl Serialize for Rule {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Rule {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Rule, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn dates(rule: &str, year: i32) -> Vec<NaiveDate> {
        rule.parse::<Rule>()
            .unwrap()
            .observed_dates(year)
            .into_iter()
            .map(|o| o.date)
            .collect()
    }

    #[test]
    fn test_yearly_day() {
        assert_eq!(dates("02-02", 2018), vec![ymd(2018, 2, 2)]);
        assert_eq!(dates("02-29", 2021), vec![]);
        assert_eq!(dates("02-29", 2020), vec![ymd(2020, 2, 29)]);
    }

    #[test]
    fn test_substitution_keeps_original() {
        let rule = "12-25 and if saturday then previous friday if sunday then next monday";
        // Christmas 2016 fell on a Sunday.
        let observed = rule.parse::<Rule>().unwrap().observed_dates(2016);
        assert_eq!(
            observed,
            vec![
                ObservedDate {
                    date: ymd(2016, 12, 25),
                    substitute: false
                },
                ObservedDate {
                    date: ymd(2016, 12, 26),
                    substitute: true
                },
            ]
        );
        // A Friday needs no substitute.
        assert_eq!(dates(rule, 2020), vec![ymd(2020, 12, 25)]);
    }

    #[test]
    fn test_substitution_moves() {
        let rule = "07-04 if saturday then previous friday if sunday then next monday";
        assert_eq!(dates(rule, 2020), vec![ymd(2020, 7, 3)]);
        assert_eq!(dates(rule, 2021), vec![ymd(2021, 7, 5)]);
    }

    #[test]
    fn test_substitute_crosses_year_boundary() {
        let rule = "01-01 and if saturday then previous friday if sunday then next monday";
        assert_eq!(dates(rule, 2022), vec![ymd(2022, 1, 1), ymd(2021, 12, 31)]);
    }

    #[test]
    fn test_month_weekday() {
        // MLK and President's Day
        assert_eq!(dates("3rd monday in January", 2022), vec![ymd(2022, 1, 17)]);
        assert_eq!(dates("3rd monday in February", 2022), vec![ymd(2022, 2, 21)]);
        assert_eq!(dates("last monday in May", 2021), vec![ymd(2021, 5, 31)]);
        assert_eq!(dates("4th thursday in November", 2021), vec![ymd(2021, 11, 25)]);
        assert_eq!(
            dates("day after 4th thursday in November", 2021),
            vec![ymd(2021, 11, 26)]
        );
    }

    #[test]
    fn test_weekday_relative() {
        // Election Day: first tuesday after the first monday of November.
        assert_eq!(dates("tuesday after 11-01", 2020), vec![ymd(2020, 11, 3)]);
        assert_eq!(dates("tuesday after 11-01", 2022), vec![ymd(2022, 11, 8)]);
        assert_eq!(dates("monday before 06-01", 2021), vec![ymd(2021, 5, 31)]);
    }

    #[test]
    /// Good Friday example
    fn test_easter_offset() {
        assert_eq!(dates("easter -2", 2021), vec![ymd(2021, 4, 2)]);
        assert_eq!(dates("easter -2", 2022), vec![ymd(2022, 4, 15)]);
        assert_eq!(dates("easter", 2022), vec![ymd(2022, 4, 17)]);
    }

    #[test]
    fn test_year_bounds() {
        let rule =
            "06-19 and if saturday then previous friday if sunday then next monday since 2021";
        assert_eq!(dates(rule, 2020), vec![]);
        assert_eq!(dates(rule, 2021), vec![ymd(2021, 6, 19), ymd(2021, 6, 18)]);
        assert_eq!(dates("01-20 prior to 2000", 1999), vec![ymd(1999, 1, 20)]);
        assert_eq!(dates("01-20 prior to 2000", 2000), vec![]);
    }

    #[test]
    fn test_offset_limits() {
        assert_eq!(dates("easter 366", 2021), vec![ymd(2022, 4, 5)]);
        assert_eq!(
            dates("366 days before 1st monday in January", 2021),
            vec![ymd(2020, 1, 4)]
        );
        assert_eq!(
            "easter -366".parse::<Rule>().unwrap().to_string(),
            "easter -366"
        );
    }

    #[test]
    fn test_year_limits() {
        let rule: Rule = "12-01 prior to -2147483647".parse().unwrap();
        assert_eq!(rule.last, Some(i32::MIN));
        assert_eq!(rule.to_string(), "12-01 prior to -2147483647");
        assert_eq!(dates("12-01 since 2147483647", 2021), vec![]);
        // far outside the representable calendar: no dates, no panic
        assert_eq!(dates("easter -2", i32::MAX), vec![]);
        assert_eq!(dates("last monday in December", i32::MAX), vec![]);
    }

    #[test]
    fn test_singular_day() {
        assert_eq!(dates("2001-09-11", 2001), vec![ymd(2001, 9, 11)]);
        assert_eq!(dates("2001-09-11", 2002), vec![]);
    }

    #[test]
    fn test_canonical_display() {
        for text in [
            "12-25 and if saturday then previous friday if sunday then next monday",
            "3rd monday in January",
            "day after 4th thursday in November",
            "tuesday after 11-01",
            "easter -2",
            "easter",
            "2 days after 4th thursday in November",
            "2001-09-11",
            "06-19 if sunday then next monday since 2021 prior to 2030",
        ] {
            assert_eq!(text.parse::<Rule>().unwrap().to_string(), text);
        }
        assert_eq!(
            "3RD Monday in january".parse::<Rule>().unwrap().to_string(),
            "3rd monday in January"
        );
    }

    #[test]
    fn test_invalid_rules() {
        for text in [
            "",
            "13-01",
            "02-30",
            "5th monday in May",
            "3rd monday in Smarch",
            "12-25 and",
            "12-25 if monday then next tuesday",
            "12-25 tomorrow",
            "easter -2 since",
            "easter 200000000000000",
            "easter -367",
            "200000000000000 days after 1st monday in May",
            "400 days before 4th thursday in November",
            "12-01 prior to -2147483648",
        ] {
            assert!(
                matches!(text.parse::<Rule>(), Err(BizDayError::InvalidRule { .. })),
                "{text:?} should not parse"
            );
        }
    }

    #[test]
    /// Testing serialization and deserialization of holidays definitions
    fn serialize_rule_definition() {
        let rules: Vec<Rule> = vec![
            "1st monday in September".parse().unwrap(),
            "11-01 since 2016".parse().unwrap(),
            "2019-11-25".parse().unwrap(),
        ];
        let json = serde_json::to_string_pretty(&rules).unwrap();
        assert_eq!(
            json,
            r#"[
  "1st monday in September",
  "11-01 since 2016",
  "2019-11-25"
]"#
        );
        let back: Vec<Rule> = serde_json::from_str(&json).unwrap();
        assert_eq!(rules, back);
        assert!(serde_json::from_str::<Rule>("\"sometime\"").is_err());
    }
}
