//! Date normalization.
//!
//! Every operation in the crate works on [`NaiveDate`] values that have been
//! resolved through [`validate_date`]. Zoned inputs are first moved into the
//! [`ANCHOR_TZ`] zone so that the calendar date (and therefore its weekday)
//! never depends on where the caller's clock happens to be.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, TimeZone, Weekday};
use chrono_tz::Tz;

use crate::error::{BizDayError, Result};

/// The fixed reference zone used to anchor zoned inputs.
pub const ANCHOR_TZ: Tz = chrono_tz::America::New_York;

/// Anything that can be resolved into an anchored calendar date.
pub trait DateInput {
    /// Resolve into a calendar date, or fail with [`BizDayError::InvalidDate`].
    fn resolve(&self) -> Result<NaiveDate>;
}

impl DateInput for str {
    fn resolve(&self) -> Result<NaiveDate> {
        let input = self.trim();
        if let Some(date) = parse_ymd(input) {
            return Ok(date);
        }
        DateTime::parse_from_rfc3339(input)
            .map(|dt| dt.with_timezone(&ANCHOR_TZ).date_naive())
            .map_err(|_| BizDayError::InvalidDate {
                input: self.to_string(),
            })
    }
}

impl DateInput for String {
    fn resolve(&self) -> Result<NaiveDate> {
        self.as_str().resolve()
    }
}

impl DateInput for NaiveDate {
    fn resolve(&self) -> Result<NaiveDate> {
        Ok(*self)
    }
}

/// A naive timestamp is read as wall-clock time in the anchor zone.
impl DateInput for NaiveDateTime {
    fn resolve(&self) -> Result<NaiveDate> {
        Ok(self.date())
    }
}

impl<Z: TimeZone> DateInput for DateTime<Z> {
    fn resolve(&self) -> Result<NaiveDate> {
        Ok(self.with_timezone(&ANCHOR_TZ).date_naive())
    }
}

impl<T: DateInput + ?Sized> DateInput for &T {
    fn resolve(&self) -> Result<NaiveDate> {
        (**self).resolve()
    }
}

/// Normalize any accepted input into an anchored calendar date.
pub fn validate_date<D: DateInput>(input: D) -> Result<NaiveDate> {
    input.resolve()
}

/// Strict `YYYY-MM-DD` with a four digit year.
fn parse_ymd(input: &str) -> Option<NaiveDate> {
    let bytes = input.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return None;
    }
    let digits = |range: std::ops::Range<usize>| -> Option<u32> {
        let part = &input[range];
        if part.bytes().all(|b| b.is_ascii_digit()) {
            part.parse().ok()
        } else {
            None
        }
    };
    let year = digits(0..4)? as i32;
    let month = digits(5..7)?;
    let day = digits(8..10)?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// The calendar day after `date`.
pub fn next_day(date: NaiveDate) -> Result<NaiveDate> {
    date.succ_opt().ok_or(BizDayError::OutOfRange { date })
}

/// The calendar day before `date`.
pub fn previous_day(date: NaiveDate) -> Result<NaiveDate> {
    date.pred_opt().ok_or(BizDayError::OutOfRange { date })
}

/// Returns true for Saturdays and Sundays.
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Calculate the last day of a given month in a given year
pub fn last_day_of_month(year: i32, month: u32) -> Option<u32> {
    let first_of_next = if month == 12 {
        NaiveDate::from_ymd_opt(year.checked_add(1)?, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    first_of_next.and_then(|d| d.pred_opt()).map(|d| d.day())
}
