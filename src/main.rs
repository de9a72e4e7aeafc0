use caldate::{
    add_months, add_years, date_diff, days_in_month, is_date, month_range, Clock, DateError,
    DateFormat, DateRange, FixedClock, RangeError, SystemClock,
};
use clap::Parser;
use std::io::{self, BufWriter, Write};

mod cli;
mod logging;

use crate::cli::{Cli, Commands};

#[derive(thiserror::Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Date(#[from] DateError),

    #[error("{0}")]
    Range(#[from] RangeError),

    #[error("Failed to write output: {0}")]
    Io(#[from] io::Error),
}

/// The process exit code.
type Output = i32;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    tracing::debug!(?cli, "parsed arguments");

    let mut out = BufWriter::new(io::stdout().lock());
    let result = do_work(cli, &mut out).and_then(|code| {
        out.flush()?;
        Ok(code)
    });

    match result {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}

fn clock(today: Option<&str>) -> Result<Box<dyn Clock>, CliError> {
    Ok(match today {
        Some(date) => {
            let date = DateFormat::Hyphen.parse(date)?;
            tracing::info!(%date, "using fixed clock");
            Box::new(FixedClock::at_date(date))
        }
        None => Box::new(SystemClock::Local),
    })
}

/// Runs `cli`, writing its output lines to `out`.
fn do_work(cli: Cli, out: &mut impl Write) -> Result<Output, CliError> {
    let output = match cli.command {
        Commands::Convert { date, from, to } => {
            let date = DateFormat::from(from).parse(&date)?;
            date.format(to.into())
        }
        Commands::AddMonths {
            date,
            months,
            format,
        } => {
            let format = DateFormat::from(format);
            add_months(format.parse(&date)?, months)?.format(format)
        }
        Commands::AddYears {
            date,
            years,
            format,
        } => {
            let format = DateFormat::from(format);
            add_years(format.parse(&date)?, years)?.format(format)
        }
        Commands::Diff { a, b, format } => date_diff(&a, &b, format.into())?.to_string(),
        Commands::Range { start, end, format } => {
            let format = DateFormat::from(format);
            let range = DateRange::new(format.parse(&start)?, format.parse(&end)?);
            tracing::debug!(days = range.len(), "expanding range");
            for date in range {
                writeln!(out, "{}", date.format(format))?;
            }
            return Ok(0);
        }
        Commands::MonthRange { year, month } => {
            let (first, last) = month_range(year, month)?;
            format!("{first}\n{last}")
        }
        Commands::DaysInMonth { year, month } => days_in_month(year, month)?.to_string(),
        Commands::Doy { date, format } => DateFormat::from(format)
            .parse(&date)?
            .format(DateFormat::YearDoy),
        Commands::Valid { input, format } => {
            let formats: Vec<DateFormat> = if format.is_empty() {
                DateFormat::ALL.to_vec()
            } else {
                format.into_iter().map(DateFormat::from).collect()
            };
            let valid = is_date(&input, &formats);
            writeln!(out, "{valid}")?;
            return Ok(if valid { 0 } else { 1 });
        }
        Commands::Today { format } => clock(cli.today.as_deref())?
            .today()
            .format(format.into()),
    };

    writeln!(out, "{output}")?;
    Ok(0)
}
