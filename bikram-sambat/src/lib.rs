//! # bikram-sambat
//!
//! A table-driven Bikram Sambat (Nepali) calendar engine for date pickers.
//!
//! This crate is a **façade** over the workspace crates.  It re-exports
//! their public items and bundles them into [`NepaliCalendar`], which
//! answers every query a date-picker UI makes: today's date, the lists of
//! years, months, and weekdays, the cells of a month page, and parsing and
//! formatting of typed dates in Nepali or English digits.
//!
//! ## Quick start
//!
//! ```rust
//! use bikram_sambat::{CalendarConfig, Language, NepaliCalendar};
//!
//! let calendar = NepaliCalendar::new(CalendarConfig::default()).unwrap();
//!
//! let grid = calendar.month_grid(2081, 0, Language::Ne);
//! assert_eq!(grid.iter().filter(|c| c.current_month).count(), 31);
//!
//! let parsed = calendar.parse("२०८१/०१/०१", Language::Ne, false);
//! assert!(parsed.valid);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types and error definitions.
pub use bs_core as core;

/// Table, index, conversion, grid, and codec.
pub use bs_time as time;

/// `NepaliCalendar`.
pub mod calendar;

/// `CalendarConfig`.
pub mod config;

pub use bs_core::{Error, Language, Result};
pub use bs_time::{
    CalendarDay, CalendarTable, Clock, FixedClock, GregorianDate, Month, NepaliDate, ParseOutcome,
    SystemClock, WeekDay, Year,
};
pub use calendar::NepaliCalendar;
pub use config::CalendarConfig;
