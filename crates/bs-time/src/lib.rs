//! # bs-time
//!
//! Month-length table, year index, Gregorian → Nepali conversion, month
//! grids, and the localized date codec.
//!
//! Every component is a pure function over an immutable [`YearIndex`]
//! that is built once from a [`CalendarTable`]:
//!
//! ```
//! use bs_core::Language;
//! use bs_time::{CalendarTable, DateCodec, MonthGridBuilder, YearIndex};
//!
//! let index = YearIndex::build(&CalendarTable::bundled(), 2000, 2089).unwrap();
//! let grid = MonthGridBuilder::new(&index).build(2081, 0, Language::En);
//! assert_eq!(grid.iter().filter(|c| c.current_month).count(), 31);
//!
//! let parsed = DateCodec::new(&index).parse("2081/01/15", Language::En, false);
//! assert_eq!(parsed.value.unwrap().id(), "2081/0/15");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `Clock` trait and the system / fixed clocks.
pub mod clock;

/// Localized date string parsing and formatting.
pub mod codec;

/// Gregorian → Nepali conversion.
pub mod converter;

/// Bundled month-length data.
pub mod data;

/// Date value types.
pub mod date;

/// Month grid construction.
pub mod grid;

/// `NepaliMonth` and month labels.
pub mod month;

/// `CalendarTable` — month lengths per year.
pub mod table;

/// `NepaliWeekday` and weekday labels.
pub mod weekday;

/// `YearIndex` — the supported years.
pub mod year_index;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use clock::{Clock, FixedClock, SystemClock};
pub use codec::{DateCodec, ParseOutcome};
pub use converter::{GregorianToNepali, NEPALI_END_YEAR, NEPALI_START_YEAR};
pub use date::{CalendarDay, Day, GregorianDate, Month, NepaliDate, Year};
pub use grid::MonthGridBuilder;
pub use month::{list_months, month_label, NepaliMonth};
pub use table::{CalendarTable, MonthLength, YearMonths};
pub use weekday::{list_weekdays, NepaliWeekday, WeekDay};
pub use year_index::{IndexedYear, YearIndex};
