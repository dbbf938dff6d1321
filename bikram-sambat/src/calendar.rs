//! `NepaliCalendar` — the engine behind a Nepali date picker.
//!
//! Built once from a [`CalendarConfig`]; every query afterwards is a pure,
//! synchronous computation over the immutable [`YearIndex`] it holds.

use crate::config::CalendarConfig;
use bs_core::errors::Result;
use bs_core::Language;
use bs_time::{
    list_months, list_weekdays, month_label, CalendarDay, CalendarTable, Clock, DateCodec,
    GregorianDate, GregorianToNepali, Month, MonthGridBuilder, NepaliDate, ParseOutcome,
    SystemClock, WeekDay, Year, YearIndex,
};

/// Calendar engine: conversion, listings, month grids, parse and format.
#[derive(Debug)]
pub struct NepaliCalendar {
    config: CalendarConfig,
    index: YearIndex,
    clock: Box<dyn Clock>,
}

impl NepaliCalendar {
    /// Build from `config` over the bundled table and the system clock.
    ///
    /// # Errors
    /// Returns an error if `config` does not validate against the table.
    pub fn new(config: CalendarConfig) -> Result<Self> {
        let table = CalendarTable::bundled();
        config.validate(&table)?;
        let clock = SystemClock::with_offset_minutes(config.utc_offset_minutes)?;
        Self::with_parts(config, &table, clock)
    }

    /// Build from `config` over a caller-supplied table and clock.
    ///
    /// `config.utc_offset_minutes` is only validated here; `clock` decides
    /// what "today" is.
    pub fn with_parts(
        config: CalendarConfig,
        table: &CalendarTable,
        clock: impl Clock + 'static,
    ) -> Result<Self> {
        config.validate(table)?;
        let index = YearIndex::build(table, config.start_year, config.end_year)?;
        log::debug!("nepali calendar ready: {config:?}");
        Ok(Self {
            config,
            index,
            clock: Box::new(clock),
        })
    }

    /// The settings this calendar was built from.
    pub fn config(&self) -> &CalendarConfig {
        &self.config
    }

    /// The year index.
    pub fn index(&self) -> &YearIndex {
        &self.index
    }

    /// Today's Nepali date according to the clock.
    ///
    /// # Errors
    /// Returns [`Error::OutOfRange`](bs_core::Error::OutOfRange) when today
    /// falls outside the supported years.
    pub fn today(&self, lang: Language) -> Result<NepaliDate> {
        GregorianToNepali::new(&self.index).today(self.clock.as_ref(), lang)
    }

    /// Nepali date for an arbitrary Gregorian date.
    pub fn convert(&self, gregorian: GregorianDate, lang: Language) -> Result<NepaliDate> {
        GregorianToNepali::new(&self.index).convert(gregorian, lang)
    }

    /// Supported years, in order, labelled in `lang`.
    pub fn list_years(&self, lang: Language) -> Vec<Year> {
        self.index.years(lang)
    }

    /// The 12 months with 0-based values.
    pub fn list_months(&self, lang: Language, short: bool) -> Vec<Month> {
        list_months(lang, short)
    }

    /// Label of the 1-based `month_number` (`0` reads as Baisakh); `None`
    /// above 12.
    pub fn month_label(&self, lang: Language, month_number: u8, short: bool) -> Option<&'static str> {
        month_label(lang, month_number, short)
    }

    /// Grid cells for 0-based `month` of `year`; empty when unknown.
    pub fn month_grid(&self, year: u16, month: u8, lang: Language) -> Vec<CalendarDay> {
        MonthGridBuilder::new(&self.index).build(year, month, lang)
    }

    /// Weekday headers, Sunday first.
    pub fn list_weekdays(&self, lang: Language, short: bool) -> Vec<WeekDay> {
        list_weekdays(lang, short)
    }

    /// Parse a date typed in `lang` using the configured separator.
    pub fn parse(&self, text: &str, lang: Language, short_month: bool) -> ParseOutcome {
        self.codec().parse(text, lang, short_month)
    }

    /// Format `date` in `lang` using the configured separator.
    pub fn format(&self, date: &NepaliDate, lang: Language) -> String {
        self.codec().format(date, lang)
    }

    fn codec(&self) -> DateCodec<'_> {
        DateCodec::new(&self.index).with_separator(self.config.separator)
    }
}
