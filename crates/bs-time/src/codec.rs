//! `DateCodec` — localized `YYYY/MM/DD` strings ↔ [`NepaliDate`].
//!
//! Parsing matches each component against the exact labels the engine
//! itself renders: the year against the [`YearIndex`] labels, the month
//! against the two-digit month numbers, and the day against the two-digit
//! day numbers of that month.  Nepali input must use Devanagari digits,
//! English input ASCII digits.
//!
//! # Month numbering
//! A parsed date carries the **1-based** month number in `month.value`
//! while its id keeps the 0-based month.  [`DateCodec::format`] reads
//! `month.value` as 0-based.  A parsed date therefore compares equal to the
//! date it was formatted from, but formatting a parsed date again shifts its
//! month by one.

use crate::date::{date_id, Day, Month, NepaliDate};
use crate::month::NepaliMonth;
use crate::year_index::YearIndex;
use bs_core::{pad_two_digits, to_localized_digits, Language};

/// Separator used unless configured otherwise.
pub const DEFAULT_SEPARATOR: char = '/';

/// Result of [`DateCodec::parse`].
///
/// Malformed or unknown input is reported here rather than as an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOutcome {
    /// `true` iff every component matched.
    pub valid: bool,
    /// The parsed date when `valid`.
    pub value: Option<NepaliDate>,
}

impl ParseOutcome {
    fn invalid() -> Self {
        Self {
            valid: false,
            value: None,
        }
    }

    fn valid(date: NepaliDate) -> Self {
        Self {
            valid: true,
            value: Some(date),
        }
    }

    /// The parsed date, if any.
    pub fn into_option(self) -> Option<NepaliDate> {
        self.value
    }
}

/// Parses and formats `YYYY<sep>MM<sep>DD` strings.
#[derive(Debug, Clone, Copy)]
pub struct DateCodec<'a> {
    index: &'a YearIndex,
    separator: char,
}

impl<'a> DateCodec<'a> {
    /// Create a codec over `index` using [`DEFAULT_SEPARATOR`].
    pub fn new(index: &'a YearIndex) -> Self {
        Self {
            index,
            separator: DEFAULT_SEPARATOR,
        }
    }

    /// Use `separator` between the components.
    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    /// The component separator.
    pub fn separator(&self) -> char {
        self.separator
    }

    /// Parse `text` written in `lang`.
    ///
    /// The month label of the result is the short name when `short_month`
    /// is set.  Anything but exactly three matching components is invalid.
    pub fn parse(&self, text: &str, lang: Language, short_month: bool) -> ParseOutcome {
        let tokens: Vec<&str> = text.split(self.separator).collect();
        let [year, month, day] = tokens[..] else {
            log::trace!("rejecting {text:?}: expected 3 components, got {}", tokens.len());
            return ParseOutcome::invalid();
        };
        if year.is_empty() || month.is_empty() || day.is_empty() {
            log::trace!("rejecting {text:?}: empty component");
            return ParseOutcome::invalid();
        }

        let Some(found_year) = self.index.find_by_label(year, lang) else {
            log::trace!("rejecting {text:?}: unknown year {year:?}");
            return ParseOutcome::invalid();
        };
        let Some(found_month) = NepaliMonth::ALL
            .into_iter()
            .find(|m| pad_two_digits(m.number() as u32, lang) == month)
        else {
            log::trace!("rejecting {text:?}: unknown month {month:?}");
            return ParseOutcome::invalid();
        };
        let days = found_year
            .month(found_month.index())
            .map_or(0, |m| m.days());
        let Some(found_day) = (1..=days).find(|d| pad_two_digits(*d as u32, lang) == day) else {
            log::trace!("rejecting {text:?}: no day {day:?} in {found_month}");
            return ParseOutcome::invalid();
        };

        ParseOutcome::valid(NepaliDate {
            year: found_year.to_year(lang),
            month: Month {
                value: found_month.number(),
                label: found_month.label(lang, short_month).to_string(),
            },
            date: Day {
                id: date_id(found_year.value(), found_month.index(), found_day),
                value: found_day,
                label: to_localized_digits(found_day as u32, lang),
            },
        })
    }

    /// Render `date` in `lang`.
    ///
    /// `date.month.value` is taken as 0-based.  Ranges are not checked.
    pub fn format(&self, date: &NepaliDate, lang: Language) -> String {
        let sep = self.separator;
        format!(
            "{}{sep}{}{sep}{}",
            to_localized_digits(date.year.value as u32, lang),
            pad_two_digits(date.month.value as u32 + 1, lang),
            pad_two_digits(date.date.value as u32, lang),
        )
    }
}
