use crate::{
    date::CalendarDate,
    error::{DateError, FormatError, RangeError},
    format::{scan, TIMESTAMP_SPACE_TOKENS, TIMESTAMP_T_TOKENS},
};
use chrono::{DateTime, NaiveDateTime, NaiveTime, TimeDelta, Timelike};
use core::{
    fmt::{self, Display},
    str::FromStr,
};

/// Length of `YYYY-MM-DD HH:MM:SS`.
const BASE_LEN: usize = 19;
/// Maximum number of fractional-second digits (microsecond precision).
const MAX_FRACTION_DIGITS: usize = 6;

/// A [`CalendarDate`] with a time of day, at microsecond precision.
///
/// ```
/// use caldate::Timestamp;
///
/// let ts: Timestamp = "2024-03-01T12:30:05.25".parse().unwrap();
/// assert_eq!(250_000, ts.microsecond());
/// assert_eq!("2024-03-01 12:30:05.250000", ts.to_string());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(pub(crate) NaiveDateTime);

impl Timestamp {
    /// Creates a timestamp from a date and a time of day.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::Time`] if any of the time fields is out of range (`micro` must be
    /// below one million; leap seconds are not representable).
    pub fn new(
        date: CalendarDate,
        hour: u32,
        minute: u32,
        second: u32,
        micro: u32,
    ) -> Result<Self, RangeError> {
        let time = if micro < 1_000_000 {
            NaiveTime::from_hms_micro_opt(hour, minute, second, micro)
        } else {
            None
        };
        time.map(|time| Self(date.naive().and_time(time)))
            .ok_or(RangeError::Time {
                hour,
                minute,
                second,
                micro,
            })
    }

    /// Midnight at the start of `date`.
    pub fn midnight(date: CalendarDate) -> Self {
        Self(date.naive().and_time(NaiveTime::MIN))
    }

    /// Wraps a [`chrono::NaiveDateTime`], truncating it to microsecond precision and folding a
    /// leap second into the preceding second.
    pub fn from_naive(naive: NaiveDateTime) -> Self {
        let nanos = naive.nanosecond() % 1_000_000_000 / 1_000 * 1_000;
        Self(
            naive
                .with_nanosecond(nanos)
                .expect("nanoseconds below one second are always valid"),
        )
    }

    /// Parses `YYYY-MM-DD HH:MM:SS` or `YYYY-MM-DDTHH:MM:SS`, optionally followed by `.` and one
    /// to six fractional-second digits.
    ///
    /// # Errors
    ///
    /// [`FormatError`] if the shape does not match, [`RangeError`] if a field is impossible.
    pub fn parse(input: &str) -> Result<Self, DateError> {
        let bytes = input.as_bytes();
        let (tokens, pattern) = if bytes.get(10) == Some(&b'T') {
            (TIMESTAMP_T_TOKENS, "YYYY-MM-DDTHH:MM:SS")
        } else {
            (TIMESTAMP_SPACE_TOKENS, "YYYY-MM-DD HH:MM:SS")
        };

        let (head, micro) = split_fraction(input, pattern)?;
        let scanned = scan(head, tokens, pattern)?;
        let date = CalendarDate::new(
            scanned.year.unwrap_or_default() as i32,
            scanned.month.unwrap_or_default(),
            scanned.day.unwrap_or_default(),
        )?;
        let timestamp = Self::new(
            date,
            scanned.hour.unwrap_or_default(),
            scanned.minute.unwrap_or_default(),
            scanned.second.unwrap_or_default(),
            micro,
        )?;
        Ok(timestamp)
    }

    /// Converts Unix epoch seconds (UTC) to a timestamp. A fractional part is rounded to the
    /// nearest microsecond.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::Overflow`] for non-finite values or values outside the representable
    /// range.
    pub fn from_unix_seconds(seconds: f64) -> Result<Self, RangeError> {
        if !seconds.is_finite() {
            return Err(RangeError::Overflow);
        }
        let whole = seconds.floor();
        let mut micros = ((seconds - whole) * 1e6).round() as u32;
        // saturating cast; out-of-range values are rejected by chrono below
        let mut whole = whole as i64;
        if micros >= 1_000_000 {
            micros = 0;
            whole = whole.checked_add(1).ok_or(RangeError::Overflow)?;
        }
        DateTime::from_timestamp(whole, micros * 1_000)
            .map(|datetime| Self(datetime.naive_utc()))
            .ok_or(RangeError::Overflow)
    }

    /// Returns midnight of `date` shifted by `seconds` (which may be negative).
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::Overflow`] if the result is outside the representable range.
    pub fn from_start_date(date: CalendarDate, seconds: i64) -> Result<Self, RangeError> {
        let delta = TimeDelta::try_seconds(seconds).ok_or(RangeError::Overflow)?;
        Self::midnight(date)
            .0
            .checked_add_signed(delta)
            .map(Self)
            .ok_or(RangeError::Overflow)
    }

    /// The calendar date part.
    pub fn date(self) -> CalendarDate {
        CalendarDate::from(self.0.date())
    }

    /// Hour of the day, `0..=23`.
    pub fn hour(self) -> u32 {
        self.0.hour()
    }

    /// Minute of the hour, `0..=59`.
    pub fn minute(self) -> u32 {
        self.0.minute()
    }

    /// Second of the minute, `0..=59`.
    pub fn second(self) -> u32 {
        self.0.second()
    }

    /// Microsecond of the second, `0..=999_999`.
    pub fn microsecond(self) -> u32 {
        self.0.nanosecond() / 1_000
    }

    /// Returns the wrapped [`chrono::NaiveDateTime`].
    pub fn naive(self) -> NaiveDateTime {
        self.0
    }
}

/// Splits an optional `.ffffff` suffix off `input`, returning the `YYYY-MM-DD HH:MM:SS` head and
/// the fraction in microseconds.
fn split_fraction<'a>(input: &'a str, pattern: &'static str) -> Result<(&'a str, u32), FormatError> {
    let bytes = input.as_bytes();
    if bytes.len() <= BASE_LEN {
        return Ok((input, 0));
    }

    let mismatch = |position| FormatError::UnexpectedChar {
        input: input.to_owned(),
        format: pattern,
        position,
    };

    if !input.is_char_boundary(BASE_LEN) {
        // a multibyte char straddles the end of the head
        let position = bytes.iter().position(|b| !b.is_ascii()).unwrap_or(BASE_LEN);
        return Err(mismatch(position));
    }

    let fraction = &bytes[BASE_LEN..];
    if fraction[0] != b'.' {
        return Err(mismatch(BASE_LEN));
    }
    let digits = &fraction[1..];
    if digits.is_empty() {
        return Err(FormatError::Length {
            input: input.to_owned(),
            format: pattern,
            expected: BASE_LEN,
        });
    }

    let mut micro = 0u32;
    for (offset, byte) in digits.iter().enumerate() {
        if offset >= MAX_FRACTION_DIGITS || !byte.is_ascii_digit() {
            return Err(mismatch(BASE_LEN + 1 + offset));
        }
        micro = micro * 10 + u32::from(byte - b'0');
    }
    micro *= 10u32.pow((MAX_FRACTION_DIGITS - digits.len()) as u32);

    Ok((&input[..BASE_LEN], micro))
}

impl Display for Timestamp {
    /// `YYYY-MM-DD HH:MM:SS`, with `.ffffff` appended when the microsecond is non-zero.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:02}:{:02}:{:02}",
            self.date(),
            self.hour(),
            self.minute(),
            self.second()
        )?;
        let micro = self.microsecond();
        if micro != 0 {
            write!(f, ".{micro:06}")?;
        }
        Ok(())
    }
}

impl FromStr for Timestamp {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<CalendarDate> for Timestamp {
    fn from(date: CalendarDate) -> Self {
        Self::midnight(date)
    }
}

/// Returns the signed time span `b - a`.
pub fn delta_time(a: Timestamp, b: Timestamp) -> TimeDelta {
    b.0.signed_duration_since(a.0)
}

/// Returns `true` if `input` parses as a [`Timestamp`]. Never fails.
pub fn is_datetime(input: &str) -> bool {
    match Timestamp::parse(input) {
        Ok(_) => true,
        Err(err) => {
            tracing::trace!(input, %err, "not a datetime");
            false
        }
    }
}
