//! `YearIndex` — the supported years, their labels, and their month lengths.
//!
//! The index is built eagerly, once, from a [`CalendarTable`] and is never
//! mutated afterwards.  It is `Send + Sync`, so a fully built index may be
//! shared between threads without further synchronisation.

use crate::date::Year;
use crate::table::{CalendarTable, MonthLength, YearMonths};
use bs_core::errors::{Error, Result};
use bs_core::{ensure, to_nepali_digits, Language, Localized};

/// One supported year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedYear {
    value: u16,
    label: Localized<String>,
    months: YearMonths,
}

impl IndexedYear {
    /// Year number.
    pub fn value(&self) -> u16 {
        self.value
    }

    /// Label in `lang` (`"२०८१"` or `"2081"`).
    pub fn label(&self, lang: Language) -> &str {
        self.label.get(lang)
    }

    /// The 12 month entries, Baisakh first.
    pub fn months(&self) -> &YearMonths {
        &self.months
    }

    /// Entry for 0-based `month`, or `None` past Chaitra.
    pub fn month(&self, month: u8) -> Option<MonthLength> {
        self.months.get(month as usize).copied()
    }

    /// Project into a [`Year`] labelled in `lang`.
    pub fn to_year(&self, lang: Language) -> Year {
        Year {
            value: self.value,
            label: self.label(lang).to_string(),
        }
    }
}

/// Ordered, immutable index over `[start, end]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearIndex {
    start: u16,
    end: u16,
    years: Vec<IndexedYear>,
}

impl YearIndex {
    /// Build the index for every year in `[start, end]`.
    ///
    /// # Errors
    /// Returns [`Error::OutOfRange`] if `table` lacks any year of the span,
    /// and [`Error::Precondition`] if `start > end`.
    pub fn build(table: &CalendarTable, start: u16, end: u16) -> Result<Self> {
        ensure!(start <= end, "empty year span [{start}, {end}]");
        let years = (start..=end)
            .map(|year| {
                let months = table.year_data(year).ok_or_else(|| {
                    Error::out_of_range(year, table.first_year(), table.last_year())
                })?;
                Ok(IndexedYear {
                    value: year,
                    label: Localized::new(to_nepali_digits(year as u32), year.to_string()),
                    months: *months,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        log::debug!(
            "built year index for {start}..={end} ({} years)",
            years.len()
        );
        Ok(Self { start, end, years })
    }

    /// First supported year.
    pub fn start(&self) -> u16 {
        self.start
    }

    /// Last supported year.
    pub fn end(&self) -> u16 {
        self.end
    }

    /// Number of supported years.
    pub fn len(&self) -> usize {
        self.years.len()
    }

    /// Always `false`: a built index holds at least one year.
    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    /// Return `true` if `year` is supported.
    pub fn contains(&self, year: i32) -> bool {
        (self.start as i32..=self.end as i32).contains(&year)
    }

    /// Exact-match lookup of `year`.
    pub fn year(&self, year: u16) -> Option<&IndexedYear> {
        year.checked_sub(self.start)
            .and_then(|offset| self.years.get(offset as usize))
    }

    /// Exact-match lookup by label in `lang`.
    pub fn find_by_label(&self, label: &str, lang: Language) -> Option<&IndexedYear> {
        self.years.iter().find(|y| y.label(lang) == label)
    }

    /// Entry for 0-based `month` of `year`.
    pub fn month_entry(&self, year: u16, month: u8) -> Option<MonthLength> {
        self.year(year).and_then(|y| y.month(month))
    }

    /// Days in 0-based `month` of `year`.
    pub fn days_in_month(&self, year: u16, month: u8) -> Option<u8> {
        self.month_entry(year, month).map(|m| m.days())
    }

    /// All supported years, in order.
    pub fn iter(&self) -> std::slice::Iter<'_, IndexedYear> {
        self.years.iter()
    }

    /// All supported years labelled in `lang`.
    pub fn years(&self, lang: Language) -> Vec<Year> {
        self.years.iter().map(|y| y.to_year(lang)).collect()
    }

    /// The [`Error::OutOfRange`] for `year` against this index.
    pub fn out_of_range(&self, year: i32) -> Error {
        Error::out_of_range(year, self.start, self.end)
    }
}

impl<'a> IntoIterator for &'a YearIndex {
    type Item = &'a IndexedYear;
    type IntoIter = std::slice::Iter<'a, IndexedYear>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index() -> YearIndex {
        YearIndex::build(&CalendarTable::bundled(), 2000, 2089).unwrap()
    }

    #[test]
    fn covers_span_in_order() {
        let idx = index();
        assert_eq!(idx.len(), 90);
        let values: Vec<u16> = idx.iter().map(|y| y.value()).collect();
        assert_eq!(values.first(), Some(&2000));
        assert_eq!(values.last(), Some(&2089));
        assert!(values.windows(2).all(|w| w[1] == w[0] + 1));
    }

    #[test]
    fn exact_lookup_only() {
        let idx = index();
        assert_eq!(idx.year(2081).map(|y| y.value()), Some(2081));
        assert!(idx.year(1999).is_none());
        assert!(idx.year(2090).is_none());
        assert!(!idx.contains(2090));
        assert!(idx.contains(2000));
    }

    #[test]
    fn labels_are_transliterated() {
        let idx = index();
        let y = idx.year(2081).unwrap();
        assert_eq!(y.label(Language::Ne), "२०८१");
        assert_eq!(y.label(Language::En), "2081");
        assert_eq!(
            idx.find_by_label("२०८१", Language::Ne).map(|y| y.value()),
            Some(2081)
        );
        assert!(idx.find_by_label("२०८१", Language::En).is_none());
    }

    #[test]
    fn month_lookups() {
        let idx = index();
        assert_eq!(idx.days_in_month(2081, 2), Some(32));
        assert_eq!(idx.days_in_month(2081, 12), None);
        assert_eq!(idx.days_in_month(2095, 0), None);
    }

    #[test]
    fn years_projection() {
        let years = index().years(Language::Ne);
        assert_eq!(years[0], Year { value: 2000, label: "२०००".into() });
    }

    #[test]
    fn build_rejects_uncovered_span() {
        let table = CalendarTable::bundled();
        assert_eq!(
            YearIndex::build(&table, 1999, 2010),
            Err(Error::out_of_range(1999, 2000, 2090))
        );
        assert!(YearIndex::build(&table, 2080, 2091).is_err());
        assert!(YearIndex::build(&table, 2081, 2080).is_err());
    }

    #[test]
    fn index_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<YearIndex>();
    }
}
