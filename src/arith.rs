use crate::{
    date::CalendarDate,
    doy::days_in_month,
    error::{DateError, RangeError},
    format::DateFormat,
};
use chrono::{Datelike, Months};

/// Shifts `date` by `months` whole calendar months (negative moves backwards).
///
/// When the original day does not exist in the target month, the day is clamped down to that
/// month's last day.
///
/// ```
/// use caldate::{add_months, CalendarDate};
///
/// let jan31 = CalendarDate::new(2024, 1, 31).unwrap();
/// assert_eq!(CalendarDate::new(2024, 2, 29).unwrap(), add_months(jan31, 1).unwrap());
/// assert_eq!(CalendarDate::new(2023, 11, 30).unwrap(), add_months(jan31, -2).unwrap());
/// ```
///
/// # Errors
///
/// Returns [`RangeError::Overflow`] if the result is outside the representable range.
pub fn add_months(date: CalendarDate, months: i32) -> Result<CalendarDate, RangeError> {
    let naive = date.naive();
    let shifted = if months >= 0 {
        naive.checked_add_months(Months::new(months.unsigned_abs()))
    } else {
        naive.checked_sub_months(Months::new(months.unsigned_abs()))
    }
    .ok_or(RangeError::Overflow)?;

    if shifted.day() != naive.day() {
        tracing::debug!(
            from = %date,
            months,
            clamped_day = shifted.day(),
            "clamped day to end of month"
        );
    }
    Ok(CalendarDate::from(shifted))
}

/// Shifts `date` by `years` whole calendar years, with the same month-end clamp as
/// [`add_months`] (February 29th becomes February 28th in a common year).
///
/// # Errors
///
/// Returns [`RangeError::Overflow`] if the result is outside the representable range.
pub fn add_years(date: CalendarDate, years: i32) -> Result<CalendarDate, RangeError> {
    let months = years.checked_mul(12).ok_or(RangeError::Overflow)?;
    add_months(date, months)
}

/// Returns the signed number of days from `a` to `b`, i.e. `b - a`.
pub fn delta_days(a: CalendarDate, b: CalendarDate) -> i64 {
    b.naive().signed_duration_since(a.naive()).num_days()
}

/// Parses two date strings with `format` and returns `b - a` in days.
///
/// ```
/// use caldate::{date_diff, DateFormat};
///
/// assert_eq!(Ok(364), date_diff("2023-01-01", "2023-12-31", DateFormat::Hyphen));
/// assert_eq!(Ok(-1), date_diff("20240301", "20240229", DateFormat::Compact));
/// ```
///
/// # Errors
///
/// See [`DateFormat::parse`].
pub fn date_diff(a: &str, b: &str, format: DateFormat) -> Result<i64, DateError> {
    Ok(delta_days(format.parse(a)?, format.parse(b)?))
}

/// [`date_diff`] for two hyphenated `YYYY-MM-DD` strings.
///
/// # Errors
///
/// See [`DateFormat::parse`].
pub fn delta_days_str(a: &str, b: &str) -> Result<i64, DateError> {
    date_diff(a, b, DateFormat::Hyphen)
}

/// Returns the last day of `month` in `year`.
///
/// # Errors
///
/// [`RangeError::Month`] if `month` is not in `1..=12`, [`RangeError::Year`] if `year` is not
/// representable.
pub fn last_day_of_month(year: i32, month: u32) -> Result<CalendarDate, RangeError> {
    CalendarDate::new(year, month, days_in_month(year, month)?)
}

/// Returns the first and last day of `month` in `year`.
///
/// ```
/// use caldate::{month_range, CalendarDate};
///
/// let (first, last) = month_range(2021, 4).unwrap();
/// assert_eq!(CalendarDate::new(2021, 4, 1).unwrap(), first);
/// assert_eq!(CalendarDate::new(2021, 4, 30).unwrap(), last);
/// ```
///
/// # Errors
///
/// See [`last_day_of_month`].
pub fn month_range(year: i32, month: u32) -> Result<(CalendarDate, CalendarDate), RangeError> {
    Ok((
        CalendarDate::new(year, month, 1)?,
        last_day_of_month(year, month)?,
    ))
}

/// Returns the first day of the month containing `date`.
pub fn first_of_month(date: CalendarDate) -> CalendarDate {
    CalendarDate::from(
        date.naive()
            .with_day(1)
            .expect("every month has a first day"),
    )
}

/// Returns January 1st of the year containing `date`.
pub fn first_of_year(date: CalendarDate) -> CalendarDate {
    CalendarDate::from(
        date.naive()
            .with_ordinal(1)
            .expect("every year has a first day"),
    )
}
