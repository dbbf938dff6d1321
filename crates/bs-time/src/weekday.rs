//! `NepaliWeekday` — day-of-week enum and weekday label dictionary.

use bs_core::{Language, Localized};

/// Day of the week.
///
/// Variants are numbered 0–6 (Sunday = 0, Saturday = 6): Nepali calendars
/// start the week on Sunday and the month grid is laid out in that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum NepaliWeekday {
    /// Sunday / आइतबार (0).
    Sunday = 0,
    /// Monday / सोमबार (1).
    Monday = 1,
    /// Tuesday / मंगलबार (2).
    Tuesday = 2,
    /// Wednesday / बुधबार (3).
    Wednesday = 3,
    /// Thursday / बिहिबार (4).
    Thursday = 4,
    /// Friday / शुक्रबार (5).
    Friday = 5,
    /// Saturday / शनिबार (6).
    Saturday = 6,
}

/// Long labels, Sunday first.
const LONG: [Localized<&str>; 7] = [
    Localized::new("आइतबार", "Sunday"),
    Localized::new("सोमबार", "Monday"),
    Localized::new("मंगलबार", "Tuesday"),
    Localized::new("बुधबार", "Wednesday"),
    Localized::new("बिहिबार", "Thursday"),
    Localized::new("शुक्रबार", "Friday"),
    Localized::new("शनिबार", "Saturday"),
];

/// Short labels, Sunday first.
const SHORT: [Localized<&str>; 7] = [
    Localized::new("आइत", "Sun"),
    Localized::new("सोम", "Mon"),
    Localized::new("मंगल", "Tue"),
    Localized::new("बुध", "Wed"),
    Localized::new("बिहि", "Thu"),
    Localized::new("शुक्र", "Fri"),
    Localized::new("शनि", "Sat"),
];

impl NepaliWeekday {
    /// All weekdays in grid order.
    pub const ALL: [NepaliWeekday; 7] = [
        NepaliWeekday::Sunday,
        NepaliWeekday::Monday,
        NepaliWeekday::Tuesday,
        NepaliWeekday::Wednesday,
        NepaliWeekday::Thursday,
        NepaliWeekday::Friday,
        NepaliWeekday::Saturday,
    ];

    /// Construct from a grid column (0 = Sunday … 6 = Saturday).
    ///
    /// Returns `None` if the value is out of range.
    pub fn from_index(n: u8) -> Option<Self> {
        Self::ALL.get(n as usize).copied()
    }

    /// Return the grid column (0 = Sunday … 6 = Saturday).
    pub fn index(&self) -> u8 {
        *self as u8
    }

    /// Return the weekday `days` days after this one.
    pub fn advance(self, days: u32) -> Self {
        Self::ALL[((self.index() as u32 + days) % 7) as usize]
    }

    /// Return the label in `lang`, short (`"Sun"`) or long (`"Sunday"`).
    pub fn label(&self, lang: Language, short: bool) -> &'static str {
        let table = if short { &SHORT } else { &LONG };
        *table[self.index() as usize].get(lang)
    }
}

impl From<chrono::Weekday> for NepaliWeekday {
    fn from(w: chrono::Weekday) -> Self {
        Self::ALL[w.num_days_from_sunday() as usize]
    }
}

impl std::fmt::Display for NepaliWeekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label(Language::En, false))
    }
}

/// A weekday header cell: grid column and its label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekDay {
    /// Grid column (0 = Sunday).
    pub value: u8,
    /// Label in the requested language.
    pub label: &'static str,
}

/// List all weekdays in grid order with labels in `lang`.
pub fn list_weekdays(lang: Language, short: bool) -> Vec<WeekDay> {
    NepaliWeekday::ALL
        .iter()
        .map(|w| WeekDay {
            value: w.index(),
            label: w.label(lang, short),
        })
        .collect()
}
