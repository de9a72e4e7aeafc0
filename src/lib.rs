//! # caldate
//!
//! Pure, stateless helpers for the proleptic Gregorian calendar.
//!
//! caldate converts dates between a handful of fixed textual encodings, day-of-year values and
//! `YYYYMMDD` integers, and does the calendar arithmetic that usually surrounds them: shifting by
//! months or years with a month-end clamp, counting days between dates, and walking day ranges.
//!
//! ## Examples
//!
//! Parse, shift and re-encode:
//!
//! ```
//! use caldate::prelude::*;
//!
//! let date = DateFormat::Compact.parse("20240131").unwrap();
//! let next = add_months(date, 1).unwrap(); // Jan 31 + 1 month clamps to Feb 29
//! assert_eq!("2024060", next.format(DateFormat::YearDoy));
//! ```
//!
//! Count and walk days:
//!
//! ```
//! use caldate::prelude::*;
//!
//! assert_eq!(Ok(364), date_diff("2023-01-01", "2023-12-31", DateFormat::Hyphen));
//!
//! let (first, last) = month_range(2021, 4).unwrap();
//! assert_eq!(30, DateRange::new(first, last).iter().count());
//! ```
//!
//! ## Canonical formats
//!
//! | [`DateFormat`] | Pattern | Example |
//! |---|---|---|
//! | `Compact` | `YYYYMMDD` | `20240131` |
//! | `Hyphen` | `YYYY-MM-DD` | `2024-01-31` |
//! | `Point` | `YYYY.MM.DD` | `2024.01.31` |
//! | `YearDoy` | `YYYYDOY` | `2024031` |
//!
//! The format is always chosen by the caller. Parsing is strict: every field is zero-padded to a
//! fixed width, and the decoded value must be a real date. Use [`is_date`] to test a candidate
//! string against several formats without handling errors.
//!
//! ## Errors
//!
//! Fallible operations return a [`FormatError`] when input does not have the shape of the
//! requested format, and a [`RangeError`] when it is well-formed but names an impossible date
//! (month 13, February 30th, day-of-year 366 in a common year). Operations that can fail either
//! way return the union, [`DateError`].
//!
//! ## Time
//!
//! Nothing in this crate reads the system clock except [`SystemClock`] and the [`now`] and
//! [`today`] shorthands. Code that needs the current date should accept a [`Clock`] so it can be
//! handed a [`FixedClock`] in tests.
//!
//! ## Prelude
//!
//! ```
//! use caldate::prelude::*;
//! ```
#![warn(missing_docs)]

mod arith;
mod clock;
mod date;
mod doy;
mod error;
mod format;
mod range;
mod timestamp;

pub use crate::arith::{
    add_months, add_years, date_diff, delta_days, delta_days_str, first_of_month, first_of_year,
    last_day_of_month, month_range,
};
pub use crate::clock::{now, today, Clock, FixedClock, SystemClock};
pub use crate::date::CalendarDate;
pub use crate::doy::{days_in_month, days_in_year, is_leap_year, DayOfYear};
pub use crate::error::{DateError, FormatError, RangeError};
pub use crate::format::{
    doy_string, from_yyyymm, is_date, is_date_any, month_string, parse_date, to_yyyymm,
    DateFormat,
};
pub use crate::range::{date_range, DateRange, DateRangeIter};
pub use crate::timestamp::{delta_time, is_datetime, Timestamp};

/// A convenience module appropriate for glob imports (`use caldate::prelude::*;`).
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::{
        add_months, add_years, date_diff, delta_days, days_in_month, is_date, last_day_of_month,
        month_range, CalendarDate, Clock, DateError, DateFormat, DateRange, DayOfYear,
        FixedClock, FormatError, RangeError, SystemClock, Timestamp,
    };
}
