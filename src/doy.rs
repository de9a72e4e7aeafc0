use crate::{date::CalendarDate, error::RangeError};
use core::fmt::{self, Display};

/// Number of days in each month of a common year (index 0 unused, index 1 = January).
const DAYS_PER_MONTH: [u32; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Returns `true` if `year` is a Gregorian leap year: divisible by 4, but not by 100 unless also
/// by 400.
///
/// ```
/// use caldate::is_leap_year;
///
/// assert!(is_leap_year(2024));
/// assert!(is_leap_year(2000));
/// assert!(!is_leap_year(1900));
/// assert!(!is_leap_year(2023));
/// ```
pub const fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Returns 366 for leap years, 365 otherwise.
pub const fn days_in_year(year: i32) -> u32 {
    if is_leap_year(year) {
        366
    } else {
        365
    }
}

/// Returns the number of days in `month` of `year`, accounting for leap years.
///
/// # Errors
///
/// Returns [`RangeError::Month`] if `month` is not in `1..=12`.
pub fn days_in_month(year: i32, month: u32) -> Result<u32, RangeError> {
    if !(1..=12).contains(&month) {
        return Err(RangeError::Month { month });
    }
    if month == 2 && is_leap_year(year) {
        Ok(29)
    } else {
        Ok(DAYS_PER_MONTH[month as usize])
    }
}

/// A 1-based ordinal day within a specific year.
///
/// The value is always in `1..=365`, or `1..=366` when the year is a leap year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DayOfYear {
    // field order matters for the derived ordering
    year: i32,
    doy: u32,
}

impl DayOfYear {
    /// Creates a new [`DayOfYear`].
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::Doy`] if `doy` is zero or larger than the number of days in `year`.
    pub fn new(year: i32, doy: u32) -> Result<Self, RangeError> {
        let max_doy = days_in_year(year);
        if !(1..=max_doy).contains(&doy) {
            return Err(RangeError::Doy { year, doy, max_doy });
        }
        Ok(Self { year, doy })
    }

    /// Returns the year this day belongs to.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the ordinal day, `1..=366`.
    pub fn get(self) -> u32 {
        self.doy
    }

    /// Converts to a [`CalendarDate`].
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::Year`] if the year is outside the representable calendar range.
    pub fn to_date(self) -> Result<CalendarDate, RangeError> {
        CalendarDate::from_year_doy(self.year, self.doy)
    }
}

impl Display for DayOfYear {
    /// Formats as `YYYYDOY`, e.g. `2024031`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}{:03}", self.year, self.doy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[rstest]
    #[case(2024, true)]
    #[case(2023, false)]
    #[case(2000, true)]
    #[case(1900, false)]
    #[case(2100, false)]
    #[case(2400, true)]
    #[case(0, true)]
    #[case(-4, true)]
    fn test_is_leap_year(#[case] year: i32, #[case] expected: bool) {
        assert_eq!(expected, is_leap_year(year));
        assert_eq!(if expected { 366 } else { 365 }, days_in_year(year));
    }

    #[test]
    fn test_days_in_month() {
        let args = [
            (2023, 1, 31),
            (2023, 2, 28),
            (2024, 2, 29),
            (1900, 2, 28),
            (2000, 2, 29),
            (2021, 4, 30),
            (2021, 12, 31),
        ];
        for (year, month, expected) in args {
            assert_eq!(Ok(expected), days_in_month(year, month), "{year}-{month}");
        }
    }

    #[rstest]
    #[case(0)]
    #[case(13)]
    fn test_days_in_month_bad_month(#[case] month: u32) {
        assert_eq!(Err(RangeError::Month { month }), days_in_month(2023, month));
    }

    #[test]
    fn test_month_table_sums_to_year() {
        let total: u32 = (1..=12).map(|m| days_in_month(2023, m).unwrap()).sum();
        assert_eq!(365, total);
        let total: u32 = (1..=12).map(|m| days_in_month(2024, m).unwrap()).sum();
        assert_eq!(366, total);
    }

    #[test]
    fn test_doy_new() {
        assert_eq!(366, DayOfYear::new(2024, 366).unwrap().get());
        assert_eq!(
            Err(RangeError::Doy {
                year: 2023,
                doy: 366,
                max_doy: 365
            }),
            DayOfYear::new(2023, 366)
        );
        assert!(DayOfYear::new(2023, 0).is_err());
        assert!(DayOfYear::new(2023, 400).is_err());
    }

    #[test]
    fn test_doy_display() {
        assert_eq!("2024031", DayOfYear::new(2024, 31).unwrap().to_string());
        assert_eq!("2023001", DayOfYear::new(2023, 1).unwrap().to_string());
    }

    #[test]
    fn test_doy_ordering() {
        let a = DayOfYear::new(2023, 365).unwrap();
        let b = DayOfYear::new(2024, 1).unwrap();
        assert!(a < b);
    }
}
