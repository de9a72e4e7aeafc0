use crate::{arith::delta_days, date::CalendarDate};
use core::iter::FusedIterator;

/// An inclusive, ascending range of dates at daily granularity.
///
/// The range is a plain value: iterating it produces a fresh [`DateRangeIter`] each time, so the
/// same range can be walked any number of times. Nothing is allocated; dates are computed lazily.
/// If `end < start` the range is empty.
///
/// ```
/// use caldate::{CalendarDate, DateRange};
///
/// let start = CalendarDate::new(2024, 2, 27).unwrap();
/// let end = CalendarDate::new(2024, 3, 1).unwrap();
/// let range = DateRange::new(start, end);
///
/// let days: Vec<String> = range.iter().map(|d| d.to_string()).collect();
/// assert_eq!(days, ["2024-02-27", "2024-02-28", "2024-02-29", "2024-03-01"]);
///
/// // restartable
/// assert_eq!(4, range.iter().count());
/// assert_eq!(0, DateRange::new(end, start).len());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateRange {
    start: CalendarDate,
    end: CalendarDate,
}

impl DateRange {
    /// Creates the range `start..=end`.
    pub fn new(start: CalendarDate, end: CalendarDate) -> Self {
        Self { start, end }
    }

    /// The first date of the range (even if the range is empty).
    pub fn start(&self) -> CalendarDate {
        self.start
    }

    /// The last date of the range (even if the range is empty).
    pub fn end(&self) -> CalendarDate {
        self.end
    }

    /// Number of dates in the range: `delta_days(start, end) + 1`, or zero if `end < start`.
    pub fn len(&self) -> usize {
        if self.end < self.start {
            0
        } else {
            // the calendar spans well under usize::MAX days
            (delta_days(self.start, self.end) + 1) as usize
        }
    }

    /// Returns `true` if `end < start`.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if `date` lies within the range.
    pub fn contains(&self, date: CalendarDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Returns a lazy iterator over the dates of the range.
    pub fn iter(&self) -> DateRangeIter {
        DateRangeIter {
            front: self.start,
            back: self.end,
            remaining: self.len(),
        }
    }
}

impl IntoIterator for DateRange {
    type Item = CalendarDate;
    type IntoIter = DateRangeIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for &DateRange {
    type Item = CalendarDate;
    type IntoIter = DateRangeIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over a [`DateRange`], created by [`DateRange::iter`].
#[derive(Debug, Clone)]
pub struct DateRangeIter {
    front: CalendarDate,
    back: CalendarDate,
    remaining: usize,
}

impl Iterator for DateRangeIter {
    type Item = CalendarDate;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let current = self.front;
        self.remaining -= 1;
        if self.remaining > 0 {
            // front < back here, so a successor exists
            self.front = CalendarDate::from(current.naive().succ_opt()?);
        }
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl DoubleEndedIterator for DateRangeIter {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let current = self.back;
        self.remaining -= 1;
        if self.remaining > 0 {
            self.back = CalendarDate::from(current.naive().pred_opt()?);
        }
        Some(current)
    }
}

impl ExactSizeIterator for DateRangeIter {}

impl FusedIterator for DateRangeIter {}

/// Shorthand for [`DateRange::new`].
pub fn date_range(start: CalendarDate, end: CalendarDate) -> DateRange {
    DateRange::new(start, end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    fn ymd(year: i32, month: u32, day: u32) -> CalendarDate {
        CalendarDate::new(year, month, day).unwrap()
    }

    #[fixture]
    fn leap_february() -> DateRange {
        DateRange::new(ymd(2024, 2, 1), ymd(2024, 2, 29))
    }

    #[rstest]
    fn test_len_matches_iteration(leap_february: DateRange) {
        assert_eq!(29, leap_february.len());
        assert_eq!(29, leap_february.iter().count());
        assert_eq!(29, leap_february.iter().len());
    }

    #[rstest]
    fn test_restartable(leap_february: DateRange) {
        let first: Vec<_> = leap_february.into_iter().collect();
        let second: Vec<_> = (&leap_february).into_iter().collect();
        assert_eq!(first, second);
        assert_eq!(Some(ymd(2024, 2, 1)), first.first().copied());
        assert_eq!(Some(ymd(2024, 2, 29)), first.last().copied());
    }

    #[rstest]
    fn test_ascending_and_contiguous(leap_february: DateRange) {
        let dates: Vec<_> = leap_february.iter().collect();
        for pair in dates.windows(2) {
            assert_eq!(1, delta_days(pair[0], pair[1]));
        }
    }

    #[rstest]
    fn test_double_ended(leap_february: DateRange) {
        let mut iter = leap_february.iter();
        assert_eq!(Some(ymd(2024, 2, 29)), iter.next_back());
        assert_eq!(Some(ymd(2024, 2, 1)), iter.next());
        assert_eq!(27, iter.len());
        let reversed: Vec<_> = leap_february.iter().rev().collect();
        assert_eq!(Some(&ymd(2024, 2, 29)), reversed.first());
        assert_eq!(29, reversed.len());
    }

    #[test]
    fn test_meeting_in_the_middle() {
        let mut iter = DateRange::new(ymd(2023, 1, 1), ymd(2023, 1, 3)).iter();
        assert_eq!(Some(ymd(2023, 1, 1)), iter.next());
        assert_eq!(Some(ymd(2023, 1, 3)), iter.next_back());
        assert_eq!(Some(ymd(2023, 1, 2)), iter.next());
        assert_eq!(None, iter.next_back());
        assert_eq!(None, iter.next());
    }

    #[test]
    fn test_single_day() {
        let range = date_range(ymd(2023, 6, 1), ymd(2023, 6, 1));
        assert_eq!(vec![ymd(2023, 6, 1)], range.iter().collect::<Vec<_>>());
    }

    #[test]
    fn test_empty_when_reversed() {
        let range = DateRange::new(ymd(2023, 6, 2), ymd(2023, 6, 1));
        assert!(range.is_empty());
        assert_eq!(None, range.iter().next());
        assert_eq!(None, range.iter().next_back());
    }

    #[test]
    fn test_year_boundary() {
        let range = DateRange::new(ymd(2023, 12, 30), ymd(2024, 1, 2));
        let dates: Vec<_> = range.iter().map(|d| d.to_string()).collect();
        assert_eq!(
            dates,
            ["2023-12-30", "2023-12-31", "2024-01-01", "2024-01-02"]
        );
    }

    #[test]
    fn test_contains() {
        let range = DateRange::new(ymd(2023, 1, 1), ymd(2023, 1, 31));
        assert!(range.contains(ymd(2023, 1, 1)));
        assert!(range.contains(ymd(2023, 1, 31)));
        assert!(!range.contains(ymd(2023, 2, 1)));
    }
}
