use crate::{date::CalendarDate, timestamp::Timestamp};
use chrono::{Local, Utc};

/// A source of the current time.
///
/// Library code that needs "now" should take a `&dyn Clock` (or `impl Clock`) instead of reading
/// the system clock directly, so callers can pin time with a [`FixedClock`].
pub trait Clock: Send + Sync {
    /// Returns the current timestamp.
    fn now(&self) -> Timestamp;

    /// Returns the current date.
    fn today(&self) -> CalendarDate {
        self.now().date()
    }

    /// Returns the current date as `YYYYMMDD`.
    fn today_yyyymmdd(&self) -> String {
        self.today().to_compact_string()
    }
}

/// The system wall clock, read at every call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SystemClock {
    /// The system's local timezone.
    #[default]
    Local,
    /// UTC.
    Utc,
}

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        let naive = match self {
            SystemClock::Local => Local::now().naive_local(),
            SystemClock::Utc => Utc::now().naive_utc(),
        };
        Timestamp::from_naive(naive)
    }
}

/// A clock frozen at a single instant.
///
/// ```
/// use caldate::{CalendarDate, Clock, FixedClock};
///
/// let clock = FixedClock::at_date(CalendarDate::new(2024, 2, 29).unwrap());
/// assert_eq!("20240229", clock.today_yyyymmdd());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(Timestamp);

impl FixedClock {
    /// A clock that always returns `now`.
    pub fn new(now: Timestamp) -> Self {
        Self(now)
    }

    /// A clock that always returns midnight of `date`.
    pub fn at_date(date: CalendarDate) -> Self {
        Self(Timestamp::midnight(date))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        self.0
    }
}

/// The current local timestamp. Not reproducible; prefer injecting a [`Clock`].
pub fn now() -> Timestamp {
    SystemClock::Local.now()
}

/// The current local date. Not reproducible; prefer injecting a [`Clock`].
pub fn today() -> CalendarDate {
    SystemClock::Local.today()
}
