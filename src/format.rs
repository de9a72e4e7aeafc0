use crate::{
    date::CalendarDate,
    error::{DateError, FormatError, RangeError},
};
use core::{
    fmt::{self, Display},
    str::FromStr,
};

/// A numeric field in a format pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Field {
    Year,
    Month,
    Day,
    Doy,
    Hour,
    Minute,
    Second,
}

impl Field {
    /// Number of digits this field occupies in every canonical format.
    const fn width(self) -> usize {
        match self {
            Field::Year => 4,
            Field::Doy => 3,
            Field::Month | Field::Day | Field::Hour | Field::Minute | Field::Second => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FormatToken {
    Field(Field),
    Literal(u8),
}

use self::FormatToken::{Field as F, Literal as L};

static COMPACT_TOKENS: &[FormatToken] = &[F(Field::Year), F(Field::Month), F(Field::Day)];
static HYPHEN_TOKENS: &[FormatToken] = &[
    F(Field::Year),
    L(b'-'),
    F(Field::Month),
    L(b'-'),
    F(Field::Day),
];
static POINT_TOKENS: &[FormatToken] = &[
    F(Field::Year),
    L(b'.'),
    F(Field::Month),
    L(b'.'),
    F(Field::Day),
];
static YEAR_DOY_TOKENS: &[FormatToken] = &[F(Field::Year), F(Field::Doy)];
static YEAR_MONTH_TOKENS: &[FormatToken] = &[F(Field::Year), F(Field::Month)];
pub(crate) static TIMESTAMP_SPACE_TOKENS: &[FormatToken] = &[
    F(Field::Year),
    L(b'-'),
    F(Field::Month),
    L(b'-'),
    F(Field::Day),
    L(b' '),
    F(Field::Hour),
    L(b':'),
    F(Field::Minute),
    L(b':'),
    F(Field::Second),
];
pub(crate) static TIMESTAMP_T_TOKENS: &[FormatToken] = &[
    F(Field::Year),
    L(b'-'),
    F(Field::Month),
    L(b'-'),
    F(Field::Day),
    L(b'T'),
    F(Field::Hour),
    L(b':'),
    F(Field::Minute),
    L(b':'),
    F(Field::Second),
];

/// Values collected while scanning a pattern. Missing fields stay `None`.
#[derive(Debug, Default)]
pub(crate) struct Scanned {
    pub(crate) year: Option<u32>,
    pub(crate) month: Option<u32>,
    pub(crate) day: Option<u32>,
    pub(crate) doy: Option<u32>,
    pub(crate) hour: Option<u32>,
    pub(crate) minute: Option<u32>,
    pub(crate) second: Option<u32>,
}

/// Matches `input` byte-for-byte against `tokens`, collecting field values.
///
/// Every field is a fixed number of ASCII digits and every literal must match exactly, so the
/// input length is known up front.
pub(crate) fn scan(
    input: &str,
    tokens: &[FormatToken],
    pattern: &'static str,
) -> Result<Scanned, FormatError> {
    let bytes = input.as_bytes();
    if bytes.len() != pattern.len() {
        return Err(FormatError::Length {
            input: input.to_owned(),
            format: pattern,
            expected: pattern.len(),
        });
    }

    let mismatch = |position| FormatError::UnexpectedChar {
        input: input.to_owned(),
        format: pattern,
        position,
    };

    let mut scanned = Scanned::default();
    let mut pos = 0;
    for token in tokens {
        match *token {
            FormatToken::Literal(expected) => {
                if bytes[pos] != expected {
                    return Err(mismatch(pos));
                }
                pos += 1;
            }
            FormatToken::Field(field) => {
                let mut value = 0u32;
                for (offset, byte) in bytes[pos..pos + field.width()].iter().enumerate() {
                    if !byte.is_ascii_digit() {
                        return Err(mismatch(pos + offset));
                    }
                    value = value * 10 + u32::from(byte - b'0');
                }
                let slot = match field {
                    Field::Year => &mut scanned.year,
                    Field::Month => &mut scanned.month,
                    Field::Day => &mut scanned.day,
                    Field::Doy => &mut scanned.doy,
                    Field::Hour => &mut scanned.hour,
                    Field::Minute => &mut scanned.minute,
                    Field::Second => &mut scanned.second,
                };
                *slot = Some(value);
                pos += field.width();
            }
        }
    }
    Ok(scanned)
}

/// The canonical textual encodings of a [`CalendarDate`].
///
/// The encoding is always chosen by the caller; nothing is auto-detected. To check a candidate
/// against several formats, use [`is_date`].
///
/// | Variant | Pattern | Example |
/// |---|---|---|
/// | [`Compact`](DateFormat::Compact) | `YYYYMMDD` | `20240131` |
/// | [`Hyphen`](DateFormat::Hyphen) | `YYYY-MM-DD` | `2024-01-31` |
/// | [`Point`](DateFormat::Point) | `YYYY.MM.DD` | `2024.01.31` |
/// | [`YearDoy`](DateFormat::YearDoy) | `YYYYDOY` | `2024031` |
///
/// All fields are zero-padded to a fixed width, so parsing is strict: `2024-1-31` does not match
/// `Hyphen`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateFormat {
    /// `YYYYMMDD`
    Compact,
    /// `YYYY-MM-DD`
    Hyphen,
    /// `YYYY.MM.DD`
    Point,
    /// `YYYYDOY`, with a zero-padded three-digit day-of-year.
    YearDoy,
}

impl DateFormat {
    /// Every canonical format, in declaration order.
    pub const ALL: [DateFormat; 4] = [
        DateFormat::Compact,
        DateFormat::Hyphen,
        DateFormat::Point,
        DateFormat::YearDoy,
    ];

    /// Returns the human-readable pattern, e.g. `YYYY-MM-DD`.
    pub const fn pattern(self) -> &'static str {
        match self {
            DateFormat::Compact => "YYYYMMDD",
            DateFormat::Hyphen => "YYYY-MM-DD",
            DateFormat::Point => "YYYY.MM.DD",
            DateFormat::YearDoy => "YYYYDOY",
        }
    }

    /// Returns the short name accepted by [`DateFormat::from_str`].
    pub const fn name(self) -> &'static str {
        match self {
            DateFormat::Compact => "compact",
            DateFormat::Hyphen => "hyphen",
            DateFormat::Point => "point",
            DateFormat::YearDoy => "year-doy",
        }
    }

    fn tokens(self) -> &'static [FormatToken] {
        match self {
            DateFormat::Compact => COMPACT_TOKENS,
            DateFormat::Hyphen => HYPHEN_TOKENS,
            DateFormat::Point => POINT_TOKENS,
            DateFormat::YearDoy => YEAR_DOY_TOKENS,
        }
    }

    /// Parses `input` as a date in this format.
    ///
    /// # Errors
    ///
    /// - [`FormatError`] if `input` does not have the shape of this format (wrong length,
    ///   non-digit in a numeric field, wrong separator).
    /// - [`RangeError`] if the shape is right but the value is not a real date, e.g. month 13,
    ///   February 30th, or day-of-year 366 in a common year.
    ///
    /// ```
    /// use caldate::{CalendarDate, DateError, DateFormat, RangeError};
    ///
    /// let date = DateFormat::Point.parse("2021.04.30").unwrap();
    /// assert_eq!(CalendarDate::new(2021, 4, 30).unwrap(), date);
    ///
    /// assert!(matches!(
    ///     DateFormat::Hyphen.parse("2023-02-30"),
    ///     Err(DateError::Range(RangeError::Day { .. }))
    /// ));
    /// ```
    pub fn parse(self, input: &str) -> Result<CalendarDate, DateError> {
        let scanned = scan(input, self.tokens(), self.pattern())?;
        // four digits, so the cast never truncates
        let year = scanned.year.unwrap_or_default() as i32;
        let date = match scanned.doy {
            Some(doy) => CalendarDate::from_year_doy(year, doy)?,
            None => CalendarDate::new(
                year,
                scanned.month.unwrap_or_default(),
                scanned.day.unwrap_or_default(),
            )?,
        };
        Ok(date)
    }

    /// Formats `date` in this format. This never fails.
    ///
    /// Years outside `0..=9999` do not fit four digits (e.g. `-001-01-01` or `10000-01-01`) and
    /// will not parse back.
    pub fn format(self, date: CalendarDate) -> String {
        let (year, month, day) = (date.year(), date.month(), date.day());
        match self {
            DateFormat::Compact => format!("{year:04}{month:02}{day:02}"),
            DateFormat::Hyphen => format!("{year:04}-{month:02}-{day:02}"),
            DateFormat::Point => format!("{year:04}.{month:02}.{day:02}"),
            DateFormat::YearDoy => date.doy().to_string(),
        }
    }
}

impl Display for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.pattern())
    }
}

impl FromStr for DateFormat {
    type Err = FormatError;

    /// Resolves a format by its short name (`compact`, `hyphen`, `point`, `year-doy`) or by its
    /// pattern (`YYYYMMDD`, `YYYY-MM-DD`, ...). Matching is case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DateFormat::ALL
            .into_iter()
            .find(|format| {
                s.eq_ignore_ascii_case(format.name()) || s.eq_ignore_ascii_case(format.pattern())
            })
            .ok_or_else(|| FormatError::UnknownFormat { name: s.to_owned() })
    }
}

/// Parses `input` as a date in the given `format`. Shorthand for [`DateFormat::parse`].
///
/// # Errors
///
/// See [`DateFormat::parse`].
pub fn parse_date(input: &str, format: DateFormat) -> Result<CalendarDate, DateError> {
    format.parse(input)
}

/// Returns `true` if `input` parses as a real date in at least one of `formats`. Never fails.
///
/// ```
/// use caldate::{is_date, DateFormat};
///
/// assert!(is_date("2024-02-29", &[DateFormat::Hyphen]));
/// assert!(!is_date("2023-02-30", &[DateFormat::Hyphen]));
/// assert!(!is_date("20240229", &[DateFormat::Hyphen]));
/// assert!(is_date("20240229", &[DateFormat::Hyphen, DateFormat::Compact]));
/// ```
pub fn is_date(input: &str, formats: &[DateFormat]) -> bool {
    formats.iter().any(|format| match format.parse(input) {
        Ok(_) => true,
        Err(err) => {
            tracing::trace!(input, format = format.pattern(), %err, "not a date");
            false
        }
    })
}

/// Returns `true` if `input` parses as a real date in any canonical format.
pub fn is_date_any(input: &str) -> bool {
    is_date(input, &DateFormat::ALL)
}

/// Formats the month of `date` as `YYYYMM`, e.g. `202401`.
pub fn to_yyyymm(date: CalendarDate) -> String {
    format!("{:04}{:02}", date.year(), date.month())
}

/// Parses a `YYYYMM` string and returns the first day of that month.
///
/// # Errors
///
/// [`FormatError`] if `input` is not six digits, [`RangeError::Month`] if the month is not in
/// `1..=12`.
pub fn from_yyyymm(input: &str) -> Result<CalendarDate, DateError> {
    let scanned = scan(input, YEAR_MONTH_TOKENS, "YYYYMM")?;
    let date = CalendarDate::new(
        scanned.year.unwrap_or_default() as i32,
        scanned.month.unwrap_or_default(),
        1,
    )?;
    Ok(date)
}

/// Formats a day-of-year zero-padded to three digits, e.g. `7` becomes `007`.
pub fn doy_string(doy: u32) -> String {
    format!("{doy:03}")
}

/// Formats a month zero-padded to two digits, e.g. `4` becomes `04`.
///
/// # Errors
///
/// Returns [`RangeError::Month`] if `month` is not in `1..=12`.
pub fn month_string(month: u32) -> Result<String, RangeError> {
    if !(1..=12).contains(&month) {
        return Err(RangeError::Month { month });
    }
    Ok(format!("{month:02}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;
    use rstest::*;

    fn ymd(year: i32, month: u32, day: u32) -> CalendarDate {
        CalendarDate::new(year, month, day).unwrap()
    }

    #[rstest]
    #[case(DateFormat::Compact, "20240131")]
    #[case(DateFormat::Hyphen, "2024-01-31")]
    #[case(DateFormat::Point, "2024.01.31")]
    #[case(DateFormat::YearDoy, "2024031")]
    fn test_parse_ok(#[case] format: DateFormat, #[case] input: &str) {
        assert_eq!(Ok(ymd(2024, 1, 31)), format.parse(input));
        assert_eq!(input, format.format(ymd(2024, 1, 31)));
    }

    #[test]
    fn test_parse_length_mismatch() {
        let args = [
            (DateFormat::Hyphen, "2024-1-31"),
            (DateFormat::Hyphen, "2024-01-311"),
            (DateFormat::Compact, "2024013"),
            (DateFormat::YearDoy, "202431"),
            (DateFormat::Point, ""),
        ];
        for (format, input) in args {
            assert!(
                matches!(
                    format.parse(input),
                    Err(DateError::Format(FormatError::Length { .. }))
                ),
                "{input} should be a length mismatch for {format}"
            );
        }
    }

    #[test]
    fn test_parse_unexpected_char() {
        let args = [
            (DateFormat::Hyphen, "2024/01/31", 4),
            (DateFormat::Hyphen, "2024-0a-31", 6),
            (DateFormat::Point, "2024-01-31", 4),
            (DateFormat::Compact, "+2024013", 0),
            (DateFormat::YearDoy, "2024 31", 4),
        ];
        for (format, input, position) in args {
            assert_eq!(
                Err(DateError::Format(FormatError::UnexpectedChar {
                    input: input.to_owned(),
                    format: format.pattern(),
                    position,
                })),
                format.parse(input),
            );
        }
    }

    #[test]
    fn test_parse_multibyte_is_length_error() {
        // "2024-01-3é" is 10 chars but 11 bytes
        let err = DateFormat::Hyphen.parse("2024-01-3é").unwrap_err();
        assert!(matches!(
            err,
            DateError::Format(FormatError::Length { expected: 10, .. })
        ));
        assert_eq!(
            "Date string `2024-01-3é` should be 10 bytes long to match format `YYYY-MM-DD`",
            err.to_string()
        );
        // 10 bytes, but the multibyte char straddles a digit position
        assert!(matches!(
            DateFormat::Hyphen.parse("2024-01-é"),
            Err(DateError::Format(FormatError::UnexpectedChar { position: 8, .. }))
        ));
    }

    #[test]
    fn test_parse_impossible_dates() {
        let args = [
            (DateFormat::Hyphen, "2023-13-01"),
            (DateFormat::Hyphen, "2023-00-10"),
            (DateFormat::Hyphen, "2023-02-30"),
            (DateFormat::Compact, "20230229"),
            (DateFormat::Point, "2023.04.31"),
            (DateFormat::YearDoy, "2023366"),
            (DateFormat::YearDoy, "2024000"),
            (DateFormat::YearDoy, "2024400"),
        ];
        for (format, input) in args {
            assert!(
                matches!(format.parse(input), Err(DateError::Range(_))),
                "{input} should be out of range for {format}"
            );
        }
    }

    #[test]
    fn test_leap_doy() {
        assert_eq!(Ok(ymd(2024, 12, 31)), DateFormat::YearDoy.parse("2024366"));
        assert_eq!(Ok(ymd(2024, 2, 29)), DateFormat::YearDoy.parse("2024060"));
        assert_eq!(Ok(ymd(2023, 3, 1)), DateFormat::YearDoy.parse("2023060"));
    }

    /// every pair of distinct formats: output of one is never accepted by the other
    #[test]
    fn test_formats_do_not_cross_parse() {
        let date = ymd(2019, 11, 23);
        for (a, b) in DateFormat::ALL.into_iter().tuple_combinations() {
            assert!(b.parse(&a.format(date)).is_err(), "{a} -> {b}");
            assert!(a.parse(&b.format(date)).is_err(), "{b} -> {a}");
        }
    }

    #[test]
    fn test_year_zero_and_far_future() {
        for date in [ymd(0, 1, 1), ymd(9999, 12, 31), ymd(1, 2, 3)] {
            for format in DateFormat::ALL {
                assert_eq!(Ok(date), format.parse(&format.format(date)));
            }
        }
    }

    #[test]
    fn test_format_negative_year_is_total() {
        let date = ymd(-1, 1, 1);
        assert_eq!("-001-01-01", DateFormat::Hyphen.format(date));
        assert!(DateFormat::Hyphen.parse("-001-01-01").is_err());
    }

    #[rstest]
    #[case("compact", DateFormat::Compact)]
    #[case("HYPHEN", DateFormat::Hyphen)]
    #[case("yyyy.mm.dd", DateFormat::Point)]
    #[case("year-doy", DateFormat::YearDoy)]
    #[case("YYYYDOY", DateFormat::YearDoy)]
    fn test_format_from_str(#[case] name: &str, #[case] expected: DateFormat) {
        assert_eq!(Ok(expected), name.parse::<DateFormat>());
    }

    #[test]
    fn test_format_from_str_unknown() {
        assert_eq!(
            Err(FormatError::UnknownFormat {
                name: "iso".to_owned()
            }),
            "iso".parse::<DateFormat>()
        );
    }

    #[test]
    fn test_is_date() {
        assert!(is_date("2024-02-29", &[DateFormat::Hyphen]));
        assert!(!is_date("2023-02-30", &[DateFormat::Hyphen]));
        assert!(!is_date("not a date", &DateFormat::ALL));
        assert!(!is_date("2024-02-29", &[]));
        assert!(is_date_any("2024060"));
        assert!(is_date_any("2024.06.01"));
        assert!(!is_date_any("2024.13.01"));
    }

    #[test]
    fn test_yyyymm() {
        assert_eq!("202401", to_yyyymm(ymd(2024, 1, 31)));
        assert_eq!(Ok(ymd(2024, 1, 1)), from_yyyymm("202401"));
        assert!(matches!(
            from_yyyymm("202413"),
            Err(DateError::Range(RangeError::Month { month: 13 }))
        ));
        assert!(matches!(
            from_yyyymm("2024-1"),
            Err(DateError::Format(FormatError::UnexpectedChar { position: 4, .. }))
        ));
    }

    #[test]
    fn test_padding_helpers() {
        assert_eq!("007", doy_string(7));
        assert_eq!("366", doy_string(366));
        assert_eq!(Ok("04".to_owned()), month_string(4));
        assert_eq!(Err(RangeError::Month { month: 13 }), month_string(13));
    }
}
