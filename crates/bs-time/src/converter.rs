//! `GregorianToNepali` — Gregorian date → Bikram Sambat date.
//!
//! The conversion shifts the Gregorian components by fixed offsets that line
//! up mid-April with the Nepali new year, then corrects the overflow with
//! the month-length table:
//!
//! 1. a month past 12 wraps back without touching the year;
//! 2. a day past the length of that month (read from the table row of the
//!    *shifted, not yet carried* year) moves into the next month;
//! 3. a month past 12 again wraps and carries into the next year.
//!
//! The day in step 2 belongs to the month that closes out the pre-carry
//! year, which is why the year carry comes last.

use crate::clock::Clock;
use crate::date::{GregorianDate, NepaliDate};
use crate::table::MONTHS_IN_YEAR;
use crate::year_index::{IndexedYear, YearIndex};
use bs_core::errors::Result;
use bs_core::Language;

/// First Gregorian year of the bundled table's window.
pub const GREGORIAN_START_YEAR: i32 = 1943;

/// First Nepali year of the default window.
pub const NEPALI_START_YEAR: u16 = 2000;

/// Last Nepali year of the default window.
pub const NEPALI_END_YEAR: u16 = 2089;

/// Added to a Gregorian year.
pub const NEPALI_YEAR_OFFSET: i32 = NEPALI_START_YEAR as i32 - GREGORIAN_START_YEAR;

/// Added to a Gregorian month (1-based).
pub const NEPALI_MONTH_OFFSET: u32 = 8;

/// Added to a Gregorian day of the month.
pub const NEPALI_DATE_OFFSET: u32 = 15;

const MONTHS: u32 = MONTHS_IN_YEAR as u32;

/// Converts Gregorian dates using a [`YearIndex`].
#[derive(Debug, Clone, Copy)]
pub struct GregorianToNepali<'a> {
    index: &'a YearIndex,
}

impl<'a> GregorianToNepali<'a> {
    /// Create a converter over `index`.
    pub fn new(index: &'a YearIndex) -> Self {
        Self { index }
    }

    /// Convert `gregorian`, labelling the result in `lang`.
    ///
    /// # Errors
    /// Returns [`Error::OutOfRange`](bs_core::Error::OutOfRange) if the
    /// shifted year, or the year after carrying, is not in the index.
    pub fn convert(&self, gregorian: GregorianDate, lang: Language) -> Result<NepaliDate> {
        let (year, month, day) = self.normalize(gregorian)?;
        Ok(NepaliDate::from_parts(year, month, day, lang))
    }

    /// Today's date according to `clock`, labelled in `lang`.
    pub fn today(&self, clock: &dyn Clock, lang: Language) -> Result<NepaliDate> {
        self.convert(clock.today()?, lang)
    }

    /// Return `(year, 0-based month, day)`.
    fn normalize(&self, gregorian: GregorianDate) -> Result<(u16, u8, u8)> {
        let mut year = gregorian.year() + NEPALI_YEAR_OFFSET;
        let mut month = gregorian.month() + NEPALI_MONTH_OFFSET;
        let mut day = gregorian.day() + NEPALI_DATE_OFFSET;

        let months = self
            .checked_year(year)
            .ok_or_else(|| self.reject(gregorian, year))?
            .months();

        if month > MONTHS {
            month -= MONTHS;
        }

        let days_in_month = months[(month - 1) as usize].days() as u32;
        if day > days_in_month {
            day -= days_in_month;
            month += 1;
        }

        if month > MONTHS {
            month -= MONTHS;
            year += 1;
        }

        let year = self
            .checked_year(year)
            .ok_or_else(|| self.reject(gregorian, year))?
            .value();
        Ok((year, (month - 1) as u8, day as u8))
    }

    fn checked_year(&self, year: i32) -> Option<&'a IndexedYear> {
        u16::try_from(year).ok().and_then(|y| self.index.year(y))
    }

    fn reject(&self, gregorian: GregorianDate, year: i32) -> bs_core::Error {
        log::warn!(
            "{gregorian} maps to year {year}, outside [{}, {}]",
            self.index.start(),
            self.index.end()
        );
        self.index.out_of_range(year)
    }
}
