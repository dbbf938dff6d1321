//! End-to-end tests of the date-picker API.

use bikram_sambat::{
    CalendarConfig, CalendarTable, Error, FixedClock, GregorianDate, Language, NepaliCalendar,
};
use proptest::prelude::*;

fn calendar_at(date: GregorianDate) -> NepaliCalendar {
    NepaliCalendar::with_parts(CalendarConfig::default(), &CalendarTable::bundled(), FixedClock(date))
        .unwrap()
}

fn greg(y: i32, m: u32, d: u32) -> GregorianDate {
    GregorianDate::from_ymd(y, m, d).unwrap()
}

#[test]
fn listings() {
    let cal = calendar_at(greg(2024, 1, 1));

    let years = cal.list_years(Language::Ne);
    assert_eq!(years.len(), 90);
    assert_eq!(years[81].value, 2081);
    assert_eq!(years[81].label, "२०८१");

    let months = cal.list_months(Language::En, true);
    assert_eq!(months.len(), 12);
    assert_eq!((months[3].value, months[3].label.as_str()), (3, "Shr"));

    assert_eq!(cal.month_label(Language::Ne, 1, false), Some("बैशाख"));
    assert_eq!(cal.month_label(Language::En, 0, false), Some("Baisakh"));
    assert_eq!(cal.month_label(Language::En, 13, false), None);

    let weekdays = cal.list_weekdays(Language::En, true);
    let labels: Vec<&str> = weekdays.iter().map(|w| w.label).collect();
    assert_eq!(labels, ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"]);
}

#[test]
fn picker_flow() {
    // Open the picker on today, render its page, pick a day, type it back.
    let cal = calendar_at(greg(2024, 4, 13));
    let today = cal.today(Language::Ne).unwrap();
    assert_eq!(today.id(), "2081/11/28");

    let grid = cal.month_grid(today.year.value, today.month.value, Language::Ne);
    let cell = grid.iter().find(|c| c.id == today.id()).unwrap();
    assert!(cell.current_month);
    assert_eq!(cell.label, today.date.label);

    let text = cal.format(&today, Language::Ne);
    assert_eq!(text, "२०८१/१२/२८");
    let parsed = cal.parse(&text, Language::Ne, true).value.unwrap();
    assert_eq!(parsed, today);
    assert_eq!(parsed.month.value, 12);
    assert_eq!(parsed.month.label, "चै");
}

#[test]
fn grid_example_with_padding() {
    let cal = calendar_at(greg(2024, 1, 1));
    // Jestha 2081: 1 Jestha is a Tuesday.
    let grid = cal.month_grid(2081, 1, Language::En);
    assert_eq!(grid.len(), 35);
    assert_eq!(grid.iter().filter(|c| !c.current_month).count(), 4);
}

#[test]
fn out_of_range_today() {
    let cal = calendar_at(greg(1942, 6, 1));
    assert!(matches!(cal.today(Language::En), Err(Error::OutOfRange { year: 1999, .. })));
}

#[test]
fn narrow_year_window() {
    let config = CalendarConfig {
        start_year: 2080,
        end_year: 2082,
        ..CalendarConfig::default()
    };
    let cal =
        NepaliCalendar::with_parts(config, &CalendarTable::bundled(), FixedClock(greg(2024, 1, 1)))
            .unwrap();
    assert_eq!(cal.list_years(Language::En).len(), 3);
    assert!(cal.month_grid(2079, 0, Language::En).is_empty());
    assert!(!cal.parse("2079/01/01", Language::En, false).valid);
    assert!(cal.convert(greg(2020, 1, 1), Language::En).is_err());
    assert!(cal.convert(greg(2024, 1, 1), Language::En).is_ok());
}

#[test]
fn bad_utc_offset_is_a_config_error() {
    for minutes in [24 * 60, -24 * 60, i32::MAX] {
        let config = CalendarConfig {
            utc_offset_minutes: minutes,
            ..CalendarConfig::default()
        };
        assert!(matches!(NepaliCalendar::new(config), Err(Error::Precondition(_))));
    }
    assert!(NepaliCalendar::new(CalendarConfig::default()).is_ok());
}

#[cfg(feature = "serde")]
#[test]
fn config_from_json() {
    let config: CalendarConfig = serde_json::from_str(r#"{ "separator": "-" }"#).unwrap();
    assert_eq!(config.separator, '-');
    assert_eq!(config.start_year, 2000);
    let lang: Language = serde_json::from_str(r#""ne""#).unwrap();
    assert_eq!(lang, Language::Ne);
}

proptest! {
    #[test]
    fn today_is_always_well_formed(days in 0i64..(90 * 365)) {
        let start = chrono::NaiveDate::from_ymd_opt(1943, 1, 1).unwrap();
        let date = GregorianDate::from(start + chrono::Duration::days(days));
        let cal = calendar_at(date);
        if let Ok(today) = cal.today(Language::En) {
            prop_assert!(today.month.value < 12);
            let days_in = cal.index().days_in_month(today.year.value, today.month.value).unwrap();
            prop_assert!((1..=days_in).contains(&today.date.value));
        }
    }
}
