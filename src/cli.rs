use caldate::DateFormat;
use clap::{ArgAction, Parser, Subcommand, ValueEnum};

/// Gregorian calendar conversions and arithmetic.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Pin the current date instead of reading the system clock.
    #[arg(long, global = true, env = "CALDATE_TODAY", value_name = "YYYY-MM-DD")]
    pub today: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// A canonical date format.
#[derive(Clone, Copy, PartialEq, Eq, ValueEnum, Debug)]
pub enum FormatArg {
    /// YYYYMMDD
    Compact,
    /// YYYY-MM-DD
    Hyphen,
    /// YYYY.MM.DD
    Point,
    /// YYYYDOY
    YearDoy,
}

impl From<FormatArg> for DateFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Compact => DateFormat::Compact,
            FormatArg::Hyphen => DateFormat::Hyphen,
            FormatArg::Point => DateFormat::Point,
            FormatArg::YearDoy => DateFormat::YearDoy,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Re-encodes a date from one canonical format to another
    Convert {
        /// The date string to convert
        date: String,

        /// Format of the input
        #[arg(long, value_enum, default_value_t = FormatArg::Hyphen)]
        from: FormatArg,

        /// Format of the output
        #[arg(long, value_enum)]
        to: FormatArg,
    },

    /// Shifts a date by whole months, clamping to the end of the month
    AddMonths {
        /// The date to shift
        date: String,

        /// Number of months, may be negative
        #[arg(allow_negative_numbers = true)]
        months: i32,

        /// Format of the input and output
        #[arg(short, long, value_enum, default_value_t = FormatArg::Hyphen)]
        format: FormatArg,
    },

    /// Shifts a date by whole years, clamping February 29th in common years
    AddYears {
        /// The date to shift
        date: String,

        /// Number of years, may be negative
        #[arg(allow_negative_numbers = true)]
        years: i32,

        /// Format of the input and output
        #[arg(short, long, value_enum, default_value_t = FormatArg::Hyphen)]
        format: FormatArg,
    },

    /// Prints the signed number of days from A to B
    Diff {
        /// The start date
        a: String,

        /// The end date
        b: String,

        /// Format of both dates
        #[arg(short, long, value_enum, default_value_t = FormatArg::Hyphen)]
        format: FormatArg,
    },

    /// Prints every date from START to END inclusive, one per line
    Range {
        /// The first date
        start: String,

        /// The last date
        end: String,

        /// Format of the input and output
        #[arg(short, long, value_enum, default_value_t = FormatArg::Hyphen)]
        format: FormatArg,
    },

    /// Prints the first and last day of a month
    MonthRange {
        /// The year
        #[arg(allow_negative_numbers = true)]
        year: i32,

        /// The month, 1-12
        month: u32,
    },

    /// Prints the number of days in a month
    DaysInMonth {
        /// The year
        #[arg(allow_negative_numbers = true)]
        year: i32,

        /// The month, 1-12
        month: u32,
    },

    /// Prints the YYYYDOY form of a date
    Doy {
        /// The date
        date: String,

        /// Format of the input
        #[arg(short, long, value_enum, default_value_t = FormatArg::Hyphen)]
        format: FormatArg,
    },

    /// Validates that a string is a real date in at least one format
    Valid {
        /// The candidate string
        input: String,

        /// Formats to try. Omit to try every canonical format.
        #[arg(short, long, value_enum)]
        format: Vec<FormatArg>,
    },

    /// Prints the current date
    Today {
        /// Format of the output
        #[arg(short, long, value_enum, default_value_t = FormatArg::Hyphen)]
        format: FormatArg,
    },
}
