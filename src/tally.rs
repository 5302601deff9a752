//! Counters produced by [`Calendar::count_days`](crate::Calendar::count_days).

use chrono::NaiveDate;
use serde::Serialize;

use crate::ruleset::Occurrence;

/// Day counts over a date range.
///
/// `total_days == weekdays + weekend_days == business_days + non_business_days`
/// always holds, and `holidays_on_weekends` never exceeds `holidays` or
/// `weekend_days`.
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct TallyResult {
    pub total_days: u64,
    pub holidays: u64,
    pub weekdays: u64,
    pub weekend_days: u64,
    pub holidays_on_weekends: u64,
    pub business_days: u64,
    pub non_business_days: u64,
    /// Public holidays met during the walk, in date order.
    pub holiday_list: Vec<Occurrence>,
}

impl TallyResult {
    /// Account for one visited date.
    pub(crate) fn record(&mut self, date: NaiveDate, weekend: bool, holiday: Option<&Occurrence>) {
        debug_assert!(holiday.map_or(true, |h| h.date == date));
        self.total_days += 1;
        if weekend {
            self.weekend_days += 1;
        } else {
            self.weekdays += 1;
        }
        if let Some(holiday) = holiday {
            self.holidays += 1;
            if weekend {
                self.holidays_on_weekends += 1;
            }
            self.holiday_list.push(holiday.clone());
        }
        if !weekend && holiday.is_none() {
            self.business_days += 1;
        } else {
            self.non_business_days += 1;
        }
    }
}
