//! Date value types: `NepaliDate`, its parts, grid cells, and `GregorianDate`.
//!
//! # Identifiers
//! Every Nepali day has a composite id `year/month/day` with a **0-based**
//! month, e.g. `2081/2/15` is 15 Asar 2081.  Ids are what equality and grid
//! lookups use.
//!
//! # Month numbering
//! [`Month::value`] is 0-based on dates produced by the converter and the
//! grid builder.  Dates produced by [`DateCodec::parse`](crate::DateCodec::parse)
//! carry the 1-based month number instead; their id is still 0-based.

use crate::month::NepaliMonth;
use bs_core::errors::{Error, Result};
use bs_core::{to_localized_digits, Language};
use chrono::{Datelike, NaiveDate};

/// Separator between the components of a day id.
pub const ID_SEPARATOR: char = '/';

/// Build the id of day `day` in 0-based `month` of `year`.
pub fn date_id(year: u16, month: u8, day: u8) -> String {
    format!("{year}{ID_SEPARATOR}{month}{ID_SEPARATOR}{day}")
}

/// A year and its label.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Year {
    /// Year number, e.g. `2081`.
    pub value: u16,
    /// Label in the requested language, e.g. `"२०८१"`.
    pub label: String,
}

/// A month and its label.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Month {
    /// Month number; see the module docs for which base applies.
    pub value: u8,
    /// Month name in the requested language.
    pub label: String,
}

/// A day of the month, with its id and label.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Day {
    /// Composite `year/month/day` id (0-based month).
    pub id: String,
    /// Day of the month, 1-based.
    pub value: u8,
    /// Day number in the digits of the requested language.
    pub label: String,
}

/// A Bikram Sambat date with labels in one language.
///
/// Two dates are equal iff their ids are equal; labels and the month
/// numbering base do not take part in the comparison.
#[derive(Debug, Clone)]
pub struct NepaliDate {
    /// Year.
    pub year: Year,
    /// Month.
    pub month: Month,
    /// Day of the month.
    pub date: Day,
}

impl NepaliDate {
    /// Build a date from its year, 0-based month, and day, labelled in
    /// `lang` with the long month name.
    ///
    /// Ranges are not checked; callers pass values they resolved against a
    /// [`YearIndex`](crate::YearIndex).
    pub fn from_parts(year: u16, month: u8, day: u8, lang: Language) -> Self {
        NepaliDate {
            year: Year {
                value: year,
                label: to_localized_digits(year as u32, lang),
            },
            month: Month {
                value: month,
                label: NepaliMonth::from_index(month)
                    .map(|m| m.label(lang, false).to_string())
                    .unwrap_or_default(),
            },
            date: Day {
                id: date_id(year, month, day),
                value: day,
                label: to_localized_digits(day as u32, lang),
            },
        }
    }

    /// The composite `year/month/day` id.
    pub fn id(&self) -> &str {
        &self.date.id
    }
}

impl PartialEq for NepaliDate {
    fn eq(&self, other: &Self) -> bool {
        self.date.id == other.date.id
    }
}

impl Eq for NepaliDate {}

impl std::hash::Hash for NepaliDate {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.date.id.hash(state);
    }
}

impl std::fmt::Display for NepaliDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.date.id)
    }
}

/// One cell of a month grid.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CalendarDay {
    /// Composite `year/month/day` id (0-based month).
    pub id: String,
    /// Day of its own month, 1-based.
    pub value: u8,
    /// Day number in the digits of the requested language.
    pub label: String,
    /// `false` for padding days borrowed from the adjacent months.
    pub current_month: bool,
}

/// A proleptic Gregorian calendar date.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GregorianDate(NaiveDate);

impl GregorianDate {
    /// Create a date from year, month (1–12), and day-of-month (1–31).
    ///
    /// # Errors
    /// Returns [`Error::Date`] if the date does not exist.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(GregorianDate)
            .ok_or_else(|| Error::Date(format!("{year}-{month:02}-{day:02} is not a valid date")))
    }

    /// Return the year.
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Return the month (1–12).
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Return the day of the month (1–31).
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Return the day after this one, or `None` at the end of chrono's range.
    pub fn succ(&self) -> Option<Self> {
        self.0.succ_opt().map(GregorianDate)
    }

    /// Return the weekday.
    pub fn weekday(&self) -> crate::weekday::NepaliWeekday {
        self.0.weekday().into()
    }
}

impl From<NaiveDate> for GregorianDate {
    fn from(d: NaiveDate) -> Self {
        GregorianDate(d)
    }
}

impl From<GregorianDate> for NaiveDate {
    fn from(d: GregorianDate) -> Self {
        d.0
    }
}

impl std::fmt::Debug for GregorianDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "GregorianDate({})", self.0.format("%Y-%m-%d"))
    }
}

impl std::fmt::Display for GregorianDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}
