/// Errors raised when a string does not have the shape of the requested [`DateFormat`].
///
/// [`DateFormat`]: crate::DateFormat
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// The input has the wrong number of bytes for the format.
    #[error("Date string `{input}` should be {expected} bytes long to match format `{format}`")]
    Length {
        /// The offending input.
        input: String,
        /// The pattern of the requested format, e.g. `YYYY-MM-DD`.
        format: &'static str,
        /// The length the format requires.
        expected: usize,
    },

    /// A byte in the input is not what the format expects at that position (a digit or a
    /// literal separator).
    #[error("Date string `{input}` does not match format `{format}` at position {position}")]
    UnexpectedChar {
        /// The offending input.
        input: String,
        /// The pattern of the requested format.
        format: &'static str,
        /// Zero-based byte offset of the first mismatch.
        position: usize,
    },

    /// A format name could not be resolved to a [`DateFormat`](crate::DateFormat).
    #[error("Unknown date format `{name}`, expected one of `compact`, `hyphen`, `point`, `year-doy`")]
    UnknownFormat {
        /// The unrecognized name.
        name: String,
    },
}

/// Errors raised when numerically well-formed input denotes an impossible calendar value.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RangeError {
    /// Month outside `1..=12`.
    #[error("Month `{month}` should be in 1..=12")]
    Month {
        /// The invalid month.
        month: u32,
    },

    /// Day outside `1..=max_day` for the given month.
    #[error("Day `{day}` should be in 1..={max_day} for {year:04}-{month:02}")]
    Day {
        /// Year of the date.
        year: i32,
        /// Month of the date.
        month: u32,
        /// The invalid day.
        day: u32,
        /// Number of days in that month.
        max_day: u32,
    },

    /// Day-of-year outside `1..=max_doy` for the given year.
    #[error("Day of year `{doy}` should be in 1..={max_doy} for year {year}")]
    Doy {
        /// The year the DOY belongs to.
        year: i32,
        /// The invalid day-of-year.
        doy: u32,
        /// 365 or 366.
        max_doy: u32,
    },

    /// Year outside the range representable by the calendar.
    #[error("Year `{year}` is outside the supported range")]
    Year {
        /// The invalid year.
        year: i32,
    },

    /// Hour, minute, second or microsecond out of range.
    #[error("Time {hour:02}:{minute:02}:{second:02}.{micro:06} is not a valid time of day")]
    Time {
        /// Hour of day.
        hour: u32,
        /// Minute of hour.
        minute: u32,
        /// Second of minute.
        second: u32,
        /// Microsecond of second.
        micro: u32,
    },

    /// Arithmetic moved the date outside the representable range.
    #[error("Date arithmetic overflowed the supported calendar range")]
    Overflow,
}

/// Any error raised by a fallible date operation.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    /// See [`FormatError`].
    #[error(transparent)]
    Format(#[from] FormatError),

    /// See [`RangeError`].
    #[error(transparent)]
    Range(#[from] RangeError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_error_messages() {
        let err = RangeError::Day {
            year: 2023,
            month: 2,
            day: 30,
            max_day: 28,
        };
        assert_eq!(err.to_string(), "Day `30` should be in 1..=28 for 2023-02");

        let err = RangeError::Doy {
            year: 2023,
            doy: 400,
            max_doy: 365,
        };
        assert_eq!(
            err.to_string(),
            "Day of year `400` should be in 1..=365 for year 2023"
        );
    }

    #[test]
    fn test_date_error_is_transparent() {
        let inner = FormatError::Length {
            input: "2023-1-1".to_string(),
            format: "YYYY-MM-DD",
            expected: 10,
        };
        let outer = DateError::from(inner.clone());
        assert_eq!(outer.to_string(), inner.to_string());
        assert_eq!(outer, DateError::Format(inner));
    }

    #[test]
    fn test_errors_are_send_sync() {
        fn assert_impl<T: std::error::Error + Send + Sync>() {}
        assert_impl::<FormatError>();
        assert_impl::<RangeError>();
        assert_impl::<DateError>();
    }
}
