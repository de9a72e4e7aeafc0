use crate::{
    doy::{days_in_month, days_in_year, DayOfYear},
    error::{DateError, RangeError},
    format::DateFormat,
};
use chrono::{Datelike, NaiveDate};
use core::{
    fmt::{self, Display},
    ops::Deref,
    str::FromStr,
};

/// A proleptic Gregorian calendar date without a time of day.
///
/// A `CalendarDate` is always a real date: the month is in `1..=12` and the day exists in that
/// month. It wraps a [`chrono::NaiveDate`], which it dereferences to.
///
/// ```
/// use caldate::{CalendarDate, DateFormat};
///
/// let date = CalendarDate::new(2024, 1, 31).unwrap();
/// assert_eq!("20240131", date.format(DateFormat::Compact));
/// assert_eq!("2024031", date.format(DateFormat::YearDoy));
/// assert_eq!(date, "2024-01-31".parse::<CalendarDate>().unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate(pub(crate) NaiveDate);

impl CalendarDate {
    /// Creates a new date from its year, month and day.
    ///
    /// # Errors
    ///
    /// - [`RangeError::Month`] if `month` is not in `1..=12`.
    /// - [`RangeError::Day`] if `day` does not exist in that month.
    /// - [`RangeError::Year`] if `year` is outside the representable range.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, RangeError> {
        let max_day = days_in_month(year, month)?;
        if !(1..=max_day).contains(&day) {
            return Err(RangeError::Day {
                year,
                month,
                day,
                max_day,
            });
        }
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or(RangeError::Year { year })
    }

    /// Creates a date from a year and a 1-based day-of-year.
    ///
    /// # Errors
    ///
    /// - [`RangeError::Doy`] if `doy` is zero or exceeds the number of days in `year`.
    /// - [`RangeError::Year`] if `year` is outside the representable range.
    pub fn from_year_doy(year: i32, doy: u32) -> Result<Self, RangeError> {
        let max_doy = days_in_year(year);
        if !(1..=max_doy).contains(&doy) {
            return Err(RangeError::Doy { year, doy, max_doy });
        }
        NaiveDate::from_yo_opt(year, doy)
            .map(Self)
            .ok_or(RangeError::Year { year })
    }

    /// Creates a date from an integer of the form `YYYYMMDD`, e.g. `20240131`.
    ///
    /// # Errors
    ///
    /// Returns a [`RangeError`] if the encoded month or day is impossible.
    pub fn from_yyyymmdd(value: u32) -> Result<Self, RangeError> {
        let year = (value / 10_000) as i32;
        let month = value / 100 % 100;
        let day = value % 100;
        Self::new(year, month, day)
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.0.year()
    }

    /// Returns the month, `1..=12`.
    pub fn month(self) -> u32 {
        self.0.month()
    }

    /// Returns the day of the month, `1..=31`.
    pub fn day(self) -> u32 {
        self.0.day()
    }

    /// Returns the day-of-year of this date.
    pub fn doy(self) -> DayOfYear {
        DayOfYear::new(self.year(), self.0.ordinal())
            .expect("chrono ordinals are always within the year")
    }

    /// Returns the date as an integer of the form `YYYYMMDD`.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::Year`] for years before 0 or after 9999, which cannot be encoded
    /// in eight digits.
    pub fn to_yyyymmdd(self) -> Result<u32, RangeError> {
        let year = self.year();
        if !(0..=9999).contains(&year) {
            return Err(RangeError::Year { year });
        }
        Ok(year as u32 * 10_000 + self.month() * 100 + self.day())
    }

    /// Formats this date with the given canonical format.
    pub fn format(self, format: DateFormat) -> String {
        format.format(self)
    }

    /// Formats as `YYYYMMDD`.
    pub fn to_compact_string(self) -> String {
        self.format(DateFormat::Compact)
    }

    /// Formats as `YYYY-MM-DD`.
    pub fn to_hyphen_string(self) -> String {
        self.format(DateFormat::Hyphen)
    }

    /// Formats as `YYYY.MM.DD`.
    pub fn to_point_string(self) -> String {
        self.format(DateFormat::Point)
    }

    /// Formats as `YYYYDOY`.
    pub fn to_year_doy_string(self) -> String {
        self.format(DateFormat::YearDoy)
    }

    /// Returns the wrapped [`chrono::NaiveDate`].
    pub fn naive(self) -> NaiveDate {
        self.0
    }
}

impl Deref for CalendarDate {
    type Target = NaiveDate;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl From<CalendarDate> for NaiveDate {
    fn from(date: CalendarDate) -> Self {
        date.0
    }
}

impl Display for CalendarDate {
    /// Displays the date in the hyphenated `YYYY-MM-DD` form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hyphen_string())
    }
}

impl FromStr for CalendarDate {
    type Err = DateError;

    /// Parses a date in the hyphenated `YYYY-MM-DD` form. Use [`DateFormat::parse`] for the other
    /// canonical forms.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DateFormat::Hyphen.parse(s)
    }
}
