//! Calendar command implementation

use anyhow::Result;
use clap::Subcommand;
use tally_api::calendar;

/// Date arithmetic subcommands; every result is printed as an ISO date
#[derive(Debug, Subcommand)]
pub enum CalendarCommands {
    /// Move a date forward or backward by whole days
    AddDays {
        /// Start date (YYYY-MM-DD)
        date: String,

        /// Days to add; negative values move backward
        #[arg(short, long, allow_hyphen_values = true)]
        days: i64,
    },

    /// First given weekday strictly after a date
    NextWeekday {
        /// Start date (YYYY-MM-DD)
        date: String,

        /// Weekday name, e.g. friday or Fri
        #[arg(short, long)]
        weekday: String,
    },

    /// First Friday the 13th strictly after a date
    #[command(name = "next-friday13")]
    NextFriday13 {
        /// Start date (YYYY-MM-DD)
        date: String,
    },

    /// Last day of the month a date falls in
    LastDayOfMonth {
        /// Any date in the month (YYYY-MM-DD)
        date: String,
    },
}

impl CalendarCommands {
    /// Execute the calendar command
    pub fn execute(&self) -> Result<()> {
        println!("{}", self.evaluate()?);
        Ok(())
    }

    /// Compute the resulting ISO date
    pub fn evaluate(&self) -> Result<String> {
        let result = match self {
            CalendarCommands::AddDays { date, days } => {
                calendar::add_days(calendar::parse_iso_date(date)?, *days)?
            }
            CalendarCommands::NextWeekday { date, weekday } => calendar::next_weekday(
                calendar::parse_iso_date(date)?,
                calendar::parse_weekday(weekday)?,
            )?,
            CalendarCommands::NextFriday13 { date } => {
                calendar::next_friday_13th(calendar::parse_iso_date(date)?)?
            }
            CalendarCommands::LastDayOfMonth { date } => {
                calendar::last_day_of_month(calendar::parse_iso_date(date)?)?
            }
        };
        log::debug!("{:?} -> {}", self, result);

        Ok(calendar::format_iso_date(result))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_days_backward() {
        let command = CalendarCommands::AddDays {
            date: "2018-01-01".to_string(),
            days: -1,
        };
        assert_eq!(command.evaluate().unwrap(), "2017-12-31");
    }

    #[test]
    fn test_next_weekday() {
        let command = CalendarCommands::NextWeekday {
            date: "2017-01-13".to_string(),
            weekday: "Fri".to_string(),
        };
        assert_eq!(command.evaluate().unwrap(), "2017-01-20");
    }

    #[test]
    fn test_next_friday13() {
        let command = CalendarCommands::NextFriday13 {
            date: "2017-01-13".to_string(),
        };
        assert_eq!(command.evaluate().unwrap(), "2017-10-13");
    }

    #[test]
    fn test_bad_date() {
        let command = CalendarCommands::LastDayOfMonth {
            date: "2017/02/01".to_string(),
        };
        let err = command.evaluate().unwrap_err();
        assert!(err.to_string().contains("2017/02/01"));
    }
}
