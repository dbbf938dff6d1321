//! Integration tests for the Gregorian → Nepali converter.

use bs_core::{Error, Language};
use bs_time::{CalendarTable, GregorianDate, GregorianToNepali, YearIndex};
use proptest::prelude::*;

fn index() -> YearIndex {
    YearIndex::build(&CalendarTable::bundled(), 2000, 2089).unwrap()
}

fn greg(y: i32, m: u32, d: u32) -> GregorianDate {
    GregorianDate::from_ymd(y, m, d).unwrap()
}

// ─── Invariants over the whole window ─────────────────────────────────────────

#[test]
fn every_date_in_window_is_well_formed() {
    let idx = index();
    let conv = GregorianToNepali::new(&idx);
    let mut d = greg(1943, 1, 1);
    let end = greg(2032, 12, 31);
    let mut rejected = 0;
    while d <= end {
        match conv.convert(d, Language::En) {
            Ok(n) => {
                let month = n.month.value;
                assert!(month < 12, "{d}: month {month}");
                let days = idx.days_in_month(n.year.value, month).unwrap();
                assert!(
                    (1..=days).contains(&n.date.value),
                    "{d}: day {} of {days}",
                    n.date.value
                );
            }
            Err(Error::OutOfRange { year, .. }) => {
                // Only the carry out of 2089 leaves the window.
                assert_eq!(year, 2090, "{d}");
                assert_eq!((d.year(), d.month()), (2032, 4), "{d}");
                rejected += 1;
            }
            Err(e) => panic!("{d}: unexpected error {e}"),
        }
        d = d.succ().unwrap();
    }
    assert!(rejected > 0);
}

#[test]
fn dates_outside_window_fail_loudly() {
    let idx = index();
    let conv = GregorianToNepali::new(&idx);
    for d in [greg(1900, 1, 1), greg(1942, 12, 31), greg(2033, 1, 1)] {
        assert!(matches!(
            conv.convert(d, Language::Ne),
            Err(Error::OutOfRange { .. })
        ));
    }
}

// ─── Month and year boundaries ────────────────────────────────────────────────

#[test]
fn month_boundary() {
    let idx = index();
    let conv = GregorianToNepali::new(&idx);
    // 2024 + 57 = 2081; 2 + 8 = 10 (Magh, 30 days). Day 15 + 15 = 30 stays.
    assert_eq!(conv.convert(greg(2024, 2, 15), Language::En).unwrap().id(), "2081/9/30");
    // Day 31 rolls over to 1 Falgun.
    assert_eq!(conv.convert(greg(2024, 2, 16), Language::En).unwrap().id(), "2081/10/1");
}

#[test]
fn year_boundary() {
    let idx = index();
    let conv = GregorianToNepali::new(&idx);
    // April: 4 + 8 = 12 (Chaitra 2081, 30 days).
    assert_eq!(conv.convert(greg(2024, 4, 15), Language::En).unwrap().id(), "2081/11/30");
    assert_eq!(conv.convert(greg(2024, 4, 16), Language::En).unwrap().id(), "2082/0/1");
}

#[test]
fn labels_follow_language() {
    let idx = index();
    let conv = GregorianToNepali::new(&idx);
    let ne = conv.convert(greg(2024, 4, 16), Language::Ne).unwrap();
    assert_eq!(
        (ne.year.label.as_str(), ne.month.label.as_str(), ne.date.label.as_str()),
        ("२०८२", "बैशाख", "१")
    );
    let en = conv.convert(greg(2024, 4, 16), Language::En).unwrap();
    assert_eq!(
        (en.year.label.as_str(), en.month.label.as_str(), en.date.label.as_str()),
        ("2082", "Baisakh", "1")
    );
    assert_eq!(ne, en);
}

proptest! {
    #[test]
    fn conversion_is_deterministic(y in 1943i32..2032, m in 1u32..=12, d in 1u32..=28) {
        let idx = index();
        let conv = GregorianToNepali::new(&idx);
        let g = greg(y, m, d);
        prop_assert_eq!(conv.convert(g, Language::Ne), conv.convert(g, Language::En));
    }
}
