//! `CalendarTable` — the year-keyed month-length data source.
//!
//! Nepali month lengths vary from year to year and cannot be derived by a
//! formula, so every supported year carries its 12 day counts explicitly.
//! An entry may also carry the number of adjacent-month days a Sunday-first
//! grid shows before and after it.

use crate::data::{BUNDLED_FIRST_WEEKDAY, BUNDLED_FIRST_YEAR, BUNDLED_MONTH_DAYS};
use crate::weekday::NepaliWeekday;
use bs_core::ensure;
use bs_core::errors::Result;

/// Number of months in a Bikram Sambat year.
pub const MONTHS_IN_YEAR: usize = 12;

/// Shortest and longest year the table accepts, in days.
pub const YEAR_LENGTH_RANGE: std::ops::RangeInclusive<u16> = 355..=385;

/// Length of one month, optionally with grid padding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MonthLength {
    /// Day count only; the grid shows no adjacent-month days.
    Plain(u8),
    /// Day count with the adjacent-month days shown around it.
    Padded {
        /// Trailing days of the previous month shown before day 1.
        leading: u8,
        /// Days in this month.
        days: u8,
        /// Leading days of the next month shown after the last day.
        trailing: u8,
    },
}

impl MonthLength {
    /// Number of days in the month, ignoring padding.
    pub fn days(&self) -> u8 {
        match *self {
            MonthLength::Plain(days) | MonthLength::Padded { days, .. } => days,
        }
    }

    /// `(leading, trailing)` padding, or `None` for a plain count.
    pub fn padding(&self) -> Option<(u8, u8)> {
        match *self {
            MonthLength::Plain(_) => None,
            MonthLength::Padded {
                leading, trailing, ..
            } => Some((leading, trailing)),
        }
    }
}

impl From<u8> for MonthLength {
    fn from(days: u8) -> Self {
        MonthLength::Plain(days)
    }
}

impl From<(u8, u8, u8)> for MonthLength {
    fn from((leading, days, trailing): (u8, u8, u8)) -> Self {
        MonthLength::Padded {
            leading,
            days,
            trailing,
        }
    }
}

/// The 12 month entries of one year, Baisakh first.
pub type YearMonths = [MonthLength; MONTHS_IN_YEAR];

/// Immutable month-length table covering a contiguous span of years.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarTable {
    first_year: u16,
    rows: Vec<YearMonths>,
}

impl CalendarTable {
    /// Create a table whose first row belongs to `first_year`.
    ///
    /// # Errors
    /// Returns an error if `rows` is empty, a month has no days or more
    /// than 32, a year's total lies outside [`YEAR_LENGTH_RANGE`], or a
    /// month shows more leading days than its previous month has. The
    /// month before Baisakh is Chaitra of the same row.
    pub fn new(first_year: u16, rows: Vec<YearMonths>) -> Result<Self> {
        ensure!(!rows.is_empty(), "calendar table needs at least one year");
        ensure!(
            first_year as usize + rows.len() <= u16::MAX as usize,
            "calendar table starting at {first_year} is too long"
        );
        for (offset, row) in rows.iter().enumerate() {
            let year = first_year as usize + offset;
            for (month, entry) in row.iter().enumerate() {
                ensure!(
                    (1..=32).contains(&entry.days()),
                    "{year}/{month}: {} days is not a month length",
                    entry.days()
                );
                if let Some((leading, _)) = entry.padding() {
                    let previous = row[(month + MONTHS_IN_YEAR - 1) % MONTHS_IN_YEAR].days();
                    ensure!(
                        leading <= previous,
                        "{year}/{month}: {leading} leading days exceed the {previous} of the previous month"
                    );
                }
            }
            let total: u16 = row.iter().map(|m| m.days() as u16).sum();
            ensure!(
                YEAR_LENGTH_RANGE.contains(&total),
                "{year}: {total} days is not a year length"
            );
        }
        Ok(Self { first_year, rows })
    }

    /// Create a table of plain day counts.
    pub fn from_plain(first_year: u16, rows: &[[u8; MONTHS_IN_YEAR]]) -> Result<Self> {
        Self::new(first_year, rows.iter().map(|r| r.map(MonthLength::Plain)).collect())
    }

    /// The built-in table for 2000–2090, padded for a Sunday-first grid.
    pub fn bundled() -> Self {
        Self {
            first_year: BUNDLED_FIRST_YEAR,
            rows: BUNDLED_MONTH_DAYS
                .iter()
                .map(|r| r.map(MonthLength::Plain))
                .collect(),
        }
        .with_week_padding(BUNDLED_FIRST_WEEKDAY)
    }

    /// Annotate every month with the padding a Sunday-first week grid needs,
    /// given the weekday of the first day of the first year.
    ///
    /// Existing padding is replaced.
    pub fn with_week_padding(mut self, first_weekday: NepaliWeekday) -> Self {
        let mut weekday = first_weekday;
        for row in &mut self.rows {
            for entry in row.iter_mut() {
                let days = entry.days();
                let leading = weekday.index();
                let trailing = (7 - (leading + days) % 7) % 7;
                *entry = MonthLength::Padded {
                    leading,
                    days,
                    trailing,
                };
                weekday = weekday.advance(days as u32);
            }
        }
        self
    }

    /// The 12 month entries of `year`, or `None` outside the table.
    pub fn year_data(&self, year: u16) -> Option<&YearMonths> {
        year.checked_sub(self.first_year)
            .and_then(|offset| self.rows.get(offset as usize))
    }

    /// First year in the table.
    pub fn first_year(&self) -> u16 {
        self.first_year
    }

    /// Last year in the table.
    pub fn last_year(&self) -> u16 {
        self.first_year + self.rows.len() as u16 - 1
    }

    /// Total days in `year`.
    pub fn year_length(&self, year: u16) -> Option<u16> {
        self.year_data(year)
            .map(|row| row.iter().map(|m| m.days() as u16).sum())
    }
}

impl Default for CalendarTable {
    fn default() -> Self {
        Self::bundled()
    }
}
