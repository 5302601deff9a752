//! # usbiz
//!
//! Business-day calendars for US federal and state jurisdictions.
//!
//! ```
//! use usbiz::{Calendar, CalendarOptions, WalkOptions};
//!
//! let cal = Calendar::new("pa").unwrap();
//! assert!(!cal.is_business_day("2020-12-25").unwrap());
//!
//! let next = cal.add_business_days("2020-01-01", 5, WalkOptions::default()).unwrap();
//! assert_eq!(next.to_string(), "2020-01-08");
//!
//! let options = CalendarOptions::new()
//!     .exclude("Christmas Day")
//!     .add("02-02", "Groundhog Day");
//! let cal = Calendar::with_options("pa", options).unwrap();
//! assert!(cal.is_business_day("2020-12-25").unwrap());
//! assert!(!cal.is_business_day("2018-02-02").unwrap());
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `calendar` | The resolved calendar and its queries |
//! | `rule` | Holiday rule expressions |
//! | `ruleset` | Named, tagged rule collections and date lookups |
//! | `provider` | Built-in federal and state holiday rules |
//! | `region` | Region validation |
//! | `customize` | Holiday exclusions and additions |
//! | `tally` | Range counters |
//! | `date` | Date normalization |
//! | `config` | Calendar options |
//! | `error` | Error types |

pub mod calendar;
pub mod config;
pub mod customize;
pub mod date;
pub mod error;
pub mod provider;
pub mod region;
pub mod rule;
pub mod ruleset;
pub mod tally;

pub use calendar::{create_calendar, Calendar, WalkOptions};
pub use config::CalendarOptions;
pub use customize::{add_holidays, exclude_holidays, CustomHoliday};
pub use date::{validate_date, DateInput, ANCHOR_TZ};
pub use error::{BizDayError, Result};
pub use provider::{HolidayRuleProvider, UsHolidays};
pub use region::{validate_region, Region};
pub use rule::Rule;
pub use ruleset::{HolidayTag, Occurrence, Ruleset};
pub use tally::TallyResult;
