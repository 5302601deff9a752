//! Implementation of US business-day calendars with federal and state holidays.
//!
//! A [`Calendar`] resolves a region's holiday rules once, at construction,
//! and is immutable afterwards. It can be shared freely between threads.

use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::config::CalendarOptions;
use crate::customize::{add_holidays, exclude_holidays};
use crate::date::{next_day, previous_day, validate_date, DateInput};
use crate::error::{BizDayError, Result};
use crate::provider::{HolidayRuleProvider, UsHolidays};
use crate::region::{validate_region, Region};
use crate::ruleset::{HolidayIndex, HolidayTag, Occurrence, Ruleset};
use crate::tally::TallyResult;

/// Walks longer than this many days are logged as suspicious.
const LONG_WALK_DAYS: i64 = 36_525;

/// Options shared by [`Calendar::add_business_days`] and [`Calendar::count_days`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WalkOptions {
    /// Skip the initial date, so that counting starts with the following day.
    pub exclude_initial_date: bool,
}

impl Default for WalkOptions {
    fn default() -> Self {
        WalkOptions {
            exclude_initial_date: true,
        }
    }
}

impl WalkOptions {
    /// Count the initial date as well.
    pub fn including_initial_date() -> WalkOptions {
        WalkOptions {
            exclude_initial_date: false,
        }
    }
}

/// Business-day calendar for a single region.
#[derive(Debug, Clone)]
pub struct Calendar {
    region: Region,
    ruleset: Ruleset,
}

/// Build a calendar for `region` (defaults to the national calendar).
pub fn create_calendar(region: Option<&str>, options: CalendarOptions) -> Result<Calendar> {
    match region {
        Some(code) => Calendar::with_options(code, options),
        None => Calendar::with_options(Region::National.code(), options),
    }
}

impl Calendar {
    /// Calendar for `region` with the built-in holiday rules and no overrides.
    pub fn new(region: &str) -> Result<Calendar> {
        Calendar::with_options(region, CalendarOptions::default())
    }

    /// Calendar for `region` with the built-in holiday rules.
    pub fn with_options(region: &str, options: CalendarOptions) -> Result<Calendar> {
        Calendar::with_provider(&UsHolidays, region, &options)
    }

    /// Validate `region` against `provider`, load its rules, then apply the
    /// exclusions followed by the additions from `options`.
    pub fn with_provider<P: HolidayRuleProvider + ?Sized>(
        provider: &P,
        region: &str,
        options: &CalendarOptions,
    ) -> Result<Calendar> {
        let region = validate_region(region, provider)?;
        let mut ruleset = provider.base_ruleset(&region)?;
        exclude_holidays(
            &mut ruleset,
            &options.exclude_holidays,
            options.strict_exclusions,
        )?;
        add_holidays(&mut ruleset, &options.add_holidays)?;
        debug!(
            region = %region,
            rules = ruleset.len(),
            excluded = options.exclude_holidays.len(),
            added = options.add_holidays.len(),
            "calendar created"
        );
        Ok(Calendar { region, ruleset })
    }

    pub fn region(&self) -> &Region {
        &self.region
    }

    pub fn ruleset(&self) -> &Ruleset {
        &self.ruleset
    }

    /// Returns true if the date falls on a weekend
    pub fn is_weekend(&self, date: NaiveDate) -> bool {
        crate::date::is_weekend(date)
    }

    /// The public holiday observed on `date`, if any.
    pub fn holiday_on<D: DateInput>(&self, date: D) -> Result<Option<Occurrence>> {
        let date = validate_date(date)?;
        Ok(HolidayIndex::new(&self.ruleset).public_on(date).cloned())
    }

    /// Returns true if the specified day is a public holiday
    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        HolidayIndex::new(&self.ruleset).public_on(date).is_some()
    }

    /// Returns true if the specified day is a business day
    pub fn is_business_day<D: DateInput>(&self, date: D) -> Result<bool> {
        let date = validate_date(date)?;
        Ok(self.classify(&mut HolidayIndex::new(&self.ruleset), date))
    }

    // weekends short-circuit before the holiday lookup
    fn classify(&self, index: &mut HolidayIndex<'_>, date: NaiveDate) -> bool {
        if self.is_weekend(date) {
            return false;
        }
        index.public_on(date).is_none()
    }

    /// Public holidays observed during `year`, in date order.
    pub fn list_holidays(&self, year: i32) -> Vec<Occurrence> {
        self.ruleset
            .observed_in(year)
            .into_iter()
            .filter(|o| o.tag == HolidayTag::Public)
            .collect()
    }

    /// The date `days` business days after `date`.
    ///
    /// With the default options the initial date is skipped, so
    /// `add_business_days(d, 0, ..)` is the calendar day after `d`.
    pub fn add_business_days<D: DateInput>(
        &self,
        date: D,
        days: i64,
        options: WalkOptions,
    ) -> Result<NaiveDate> {
        if days < 0 {
            return Err(BizDayError::InvalidArgument(format!(
                "business days to add must be non-negative, got {days}"
            )));
        }
        let mut date = validate_date(date)?;
        if days > LONG_WALK_DAYS {
            warn!(days, "adding a very large number of business days");
        }
        if options.exclude_initial_date {
            date = next_day(date)?;
        }
        let mut index = HolidayIndex::new(&self.ruleset);
        let mut counter = 0;
        while counter < days {
            if self.classify(&mut index, date) {
                counter += 1;
            }
            if counter < days {
                date = next_day(date)?;
            }
        }
        Ok(date)
    }

    /// Tally the days in the closed range `[start, end]`.
    pub fn count_days<S: DateInput, E: DateInput>(
        &self,
        start: S,
        end: E,
        options: WalkOptions,
    ) -> Result<TallyResult> {
        let start = validate_date(start)?;
        let end = validate_date(end)?;
        if start > end {
            return Err(BizDayError::InvalidRange { start, end });
        }
        let span = end.signed_duration_since(start).num_days();
        if span > LONG_WALK_DAYS {
            warn!(%start, %end, span, "counting days over a very long range");
        }

        let mut tally = TallyResult::default();
        let mut index = HolidayIndex::new(&self.ruleset);
        let mut cursor = Some(start);
        if options.exclude_initial_date {
            cursor = start.succ_opt();
        }
        while let Some(date) = cursor.filter(|d| *d <= end) {
            let weekend = self.is_weekend(date);
            tally.record(date, weekend, index.public_on(date));
            cursor = date.succ_opt();
        }
        debug!(
            %start,
            %end,
            total = tally.total_days,
            business = tally.business_days,
            "counted days"
        );
        Ok(tally)
    }

    /// Calculate the next business day
    pub fn next_biz_day(&self, date: NaiveDate) -> Result<NaiveDate> {
        let mut index = HolidayIndex::new(&self.ruleset);
        let mut date = next_day(date)?;
        while !self.classify(&mut index, date) {
            date = next_day(date)?;
        }
        Ok(date)
    }

    /// Calculate the previous business day
    pub fn prev_biz_day(&self, date: NaiveDate) -> Result<NaiveDate> {
        let mut index = HolidayIndex::new(&self.ruleset);
        let mut date = previous_day(date)?;
        while !self.classify(&mut index, date) {
            date = previous_day(date)?;
        }
        Ok(date)
    }
}
