//! `MonthGridBuilder` — the cells of one calendar page.
//!
//! A page lists, left to right and top to bottom, the padding days taken
//! from the end of the previous month, every day of the requested month,
//! and the padding days taken from the start of the next month.  How many
//! padding days appear is read from the month's [`MonthLength`] entry.
//!
//! Two boundary behaviours are kept on purpose, because callers key their
//! selection state on the ids produced here:
//!
//! * the month before Baisakh is Chaitra of the *same* year;
//! * padding after Chaitra is tagged with month 12, which names no month.

use crate::date::{date_id, CalendarDay};
use crate::table::{MonthLength, MONTHS_IN_YEAR};
use crate::year_index::YearIndex;
use bs_core::{to_localized_digits, Language};

/// Builds month grids from a [`YearIndex`].
#[derive(Debug, Clone, Copy)]
pub struct MonthGridBuilder<'a> {
    index: &'a YearIndex,
}

impl<'a> MonthGridBuilder<'a> {
    /// Create a builder over `index`.
    pub fn new(index: &'a YearIndex) -> Self {
        Self { index }
    }

    /// Cells for 0-based `month` of `year`, labelled in `lang`.
    ///
    /// Returns an empty grid when the year or month is not in the index.
    pub fn build(&self, year: u16, month: u8, lang: Language) -> Vec<CalendarDay> {
        let prev_month = if month == 0 {
            MONTHS_IN_YEAR as u8 - 1
        } else {
            month - 1
        };

        let (Some(prev), Some(current)) = (
            self.index.month_entry(year, prev_month),
            self.index.month_entry(year, month),
        ) else {
            return Vec::new();
        };

        let cell = |m: u8, day: u8, current_month: bool| CalendarDay {
            id: date_id(year, m, day),
            value: day,
            label: to_localized_digits(day as u32, lang),
            current_month,
        };

        match current {
            MonthLength::Plain(days) => (1..=days).map(|d| cell(month, d, true)).collect(),
            MonthLength::Padded {
                leading,
                days,
                trailing,
            } => {
                let prev_days = prev.days();
                let first_prev = prev_days.saturating_sub(leading) + 1;
                let mut cells =
                    Vec::with_capacity(leading as usize + days as usize + trailing as usize);
                cells.extend((first_prev..=prev_days).map(|d| cell(prev_month, d, false)));
                cells.extend((1..=days).map(|d| cell(month, d, true)));
                cells.extend((1..=trailing).map(|d| cell(month + 1, d, false)));
                cells
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::CalendarTable;

    fn bundled() -> YearIndex {
        YearIndex::build(&CalendarTable::bundled(), 2000, 2089).unwrap()
    }

    /// One year of plain counts with month 4 replaced by `(3, 30, 2)`.
    fn synthetic() -> YearIndex {
        let mut row = [31, 31, 32, 31, 31, 30, 30, 30, 29, 30, 29, 31].map(MonthLength::Plain);
        row[4] = MonthLength::from((3, 31, 2));
        row[5] = MonthLength::from((3, 30, 2));
        let table = CalendarTable::new(2050, vec![row]).unwrap();
        YearIndex::build(&table, 2050, 2050).unwrap()
    }

    #[test]
    fn padded_month_layout() {
        let idx = synthetic();
        let grid = MonthGridBuilder::new(&idx).build(2050, 5, Language::En);
        assert_eq!(grid.len(), 35);

        let values: Vec<u8> = grid[..3].iter().map(|c| c.value).collect();
        assert_eq!(values, [29, 30, 31]);
        assert!(grid[..3].iter().all(|c| !c.current_month));
        assert_eq!(grid[0].id, "2050/4/29");

        let current: Vec<u8> = grid[3..33].iter().map(|c| c.value).collect();
        assert_eq!(current, (1..=30).collect::<Vec<u8>>());
        assert!(grid[3..33].iter().all(|c| c.current_month));
        assert_eq!(grid[3].id, "2050/5/1");

        assert_eq!(grid[33].id, "2050/6/1");
        assert_eq!(grid[34].id, "2050/6/2");
        assert!(grid[33..].iter().all(|c| !c.current_month));
    }

    #[test]
    fn plain_month_has_no_padding() {
        let idx = synthetic();
        let grid = MonthGridBuilder::new(&idx).build(2050, 0, Language::Ne);
        assert_eq!(grid.len(), 31);
        assert!(grid.iter().all(|c| c.current_month));
        assert_eq!(grid[0].id, "2050/0/1");
        assert_eq!(grid[30].label, "३१");
    }

    #[test]
    fn baisakh_borrows_chaitra_of_same_year() {
        let idx = bundled();
        let grid = MonthGridBuilder::new(&idx).build(2081, 0, Language::En);
        // 1 Baisakh 2081 is a Saturday: six days of Chaitra come first.
        assert_eq!(grid.len(), 42);
        assert_eq!(grid[0].id, "2081/11/25");
        assert_eq!(grid[5].id, "2081/11/30");
        assert_eq!(grid[6].id, "2081/0/1");
    }

    #[test]
    fn chaitra_padding_names_month_twelve() {
        let idx = bundled();
        let grid = MonthGridBuilder::new(&idx).build(2081, 11, Language::En);
        let last = grid.last().unwrap();
        assert!(!last.current_month);
        assert!(last.id.starts_with("2081/12/"));
    }

    #[test]
    fn unknown_year_or_month_is_empty() {
        let idx = bundled();
        let builder = MonthGridBuilder::new(&idx);
        assert!(builder.build(1999, 0, Language::En).is_empty());
        assert!(builder.build(2090, 0, Language::En).is_empty());
        assert!(builder.build(2081, 12, Language::En).is_empty());
    }

    #[test]
    fn bundled_grids_are_whole_weeks() {
        let idx = bundled();
        let builder = MonthGridBuilder::new(&idx);
        for y in idx.iter() {
            for m in 0..12 {
                let grid = builder.build(y.value(), m, Language::En);
                assert_eq!(grid.len() % 7, 0, "{}/{m}", y.value());
            }
        }
    }
}
