//! `CalendarConfig` — the settings a [`NepaliCalendar`](crate::NepaliCalendar)
//! is built from.
//!
//! With the `serde` feature the config can be embedded in a host
//! application's own settings file; missing fields take their defaults.

use bs_core::errors::{Error, Result};
use bs_core::utilities::digits::is_any_digit;
use bs_core::{ensure, fail};
use bs_time::clock::KATHMANDU_UTC_OFFSET_MINUTES;
use bs_time::codec::DEFAULT_SEPARATOR;
use bs_time::{CalendarTable, NEPALI_END_YEAR, NEPALI_START_YEAR};

/// Engine settings.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CalendarConfig {
    /// First supported Nepali year.
    pub start_year: u16,
    /// Last supported Nepali year.
    pub end_year: u16,
    /// Separator between year, month, and day in parsed / formatted text.
    pub separator: char,
    /// Offset of the users' local time from UTC, in minutes.
    pub utc_offset_minutes: i32,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            start_year: NEPALI_START_YEAR,
            end_year: NEPALI_END_YEAR,
            separator: DEFAULT_SEPARATOR,
            utc_offset_minutes: KATHMANDU_UTC_OFFSET_MINUTES,
        }
    }
}

impl CalendarConfig {
    /// Check the config against `table`.
    ///
    /// # Errors
    /// * [`Error::Precondition`] for an inverted year span or an offset of a
    ///   day or more;
    /// * [`Error::OutOfRange`] if `table` does not cover the span;
    /// * [`Error::Runtime`] for a separator that is itself a digit.
    pub fn validate(&self, table: &CalendarTable) -> Result<()> {
        ensure!(
            self.start_year <= self.end_year,
            "start_year {} is after end_year {}",
            self.start_year,
            self.end_year
        );
        for year in [self.start_year, self.end_year] {
            if table.year_data(year).is_none() {
                return Err(Error::out_of_range(
                    year,
                    table.first_year(),
                    table.last_year(),
                ));
            }
        }
        if is_any_digit(self.separator) {
            fail!("separator {:?} cannot be a digit", self.separator);
        }
        ensure!(
            self.utc_offset_minutes.unsigned_abs() < 24 * 60,
            "UTC offset of {} minutes is out of range",
            self.utc_offset_minutes
        );
        Ok(())
    }
}
