//! `NepaliMonth` — month-of-year enum and month label dictionary.

use crate::date::Month;
use bs_core::{Language, Localized};

/// Month of the Bikram Sambat year.
///
/// Variants are numbered 1–12 (Baisakh = 1, Chaitra = 12).  Table rows and
/// [`NepaliDate`](crate::NepaliDate) store the 0-based [`index`](Self::index).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum NepaliMonth {
    /// Baisakh / बैशाख (1).
    Baisakh = 1,
    /// Jestha / जेठ (2).
    Jestha = 2,
    /// Asar / असार (3).
    Asar = 3,
    /// Shrawan / साउन (4).
    Shrawan = 4,
    /// Bhadra / भदौ (5).
    Bhadra = 5,
    /// Asoj / असोज (6).
    Asoj = 6,
    /// Kartik / कार्तिक (7).
    Kartik = 7,
    /// Mangsir / मंसिर (8).
    Mangsir = 8,
    /// Poush / पुष (9).
    Poush = 9,
    /// Magh / माघ (10).
    Magh = 10,
    /// Falgun / फागुन (11).
    Falgun = 11,
    /// Chaitra / चैत (12).
    Chaitra = 12,
}

const LONG: [Localized<&str>; 12] = [
    Localized::new("बैशाख", "Baisakh"),
    Localized::new("जेठ", "Jestha"),
    Localized::new("असार", "Asar"),
    Localized::new("साउन", "Shrawan"),
    Localized::new("भदौ", "Bhadra"),
    Localized::new("असोज", "Asoj"),
    Localized::new("कार्तिक", "Kartik"),
    Localized::new("मंसिर", "Mangsir"),
    Localized::new("पुष", "Poush"),
    Localized::new("माघ", "Magh"),
    Localized::new("फागुन", "Falgun"),
    Localized::new("चैत", "Chaitra"),
];

const SHORT: [Localized<&str>; 12] = [
    Localized::new("बै", "Bai"),
    Localized::new("जे", "Jes"),
    Localized::new("अ", "Asa"),
    Localized::new("सा", "Shr"),
    Localized::new("भ", "Bha"),
    Localized::new("आ", "Aso"),
    Localized::new("का", "Kar"),
    Localized::new("मं", "Man"),
    Localized::new("पु", "Pou"),
    Localized::new("मा", "Mag"),
    Localized::new("फा", "Fal"),
    Localized::new("चै", "Cha"),
];

impl NepaliMonth {
    /// All months in calendar order.
    pub const ALL: [NepaliMonth; 12] = [
        NepaliMonth::Baisakh,
        NepaliMonth::Jestha,
        NepaliMonth::Asar,
        NepaliMonth::Shrawan,
        NepaliMonth::Bhadra,
        NepaliMonth::Asoj,
        NepaliMonth::Kartik,
        NepaliMonth::Mangsir,
        NepaliMonth::Poush,
        NepaliMonth::Magh,
        NepaliMonth::Falgun,
        NepaliMonth::Chaitra,
    ];

    /// Construct from a number (1 = Baisakh … 12 = Chaitra).
    ///
    /// Returns `None` if the value is out of range.
    pub fn from_number(n: u8) -> Option<Self> {
        n.checked_sub(1).and_then(Self::from_index)
    }

    /// Construct from a 0-based table index (0 = Baisakh … 11 = Chaitra).
    pub fn from_index(i: u8) -> Option<Self> {
        Self::ALL.get(i as usize).copied()
    }

    /// Return the 1-based month number.
    pub fn number(&self) -> u8 {
        *self as u8
    }

    /// Return the 0-based table index.
    pub fn index(&self) -> u8 {
        self.number() - 1
    }

    /// Return the label in `lang`, short or long.
    pub fn label(&self, lang: Language, short: bool) -> &'static str {
        let table = if short { &SHORT } else { &LONG };
        *table[self.index() as usize].get(lang)
    }
}

impl std::fmt::Display for NepaliMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label(Language::En, false))
    }
}

impl From<NepaliMonth> for u8 {
    fn from(m: NepaliMonth) -> u8 {
        m as u8
    }
}

/// List all months with their 0-based index and a label in `lang`.
pub fn list_months(lang: Language, short: bool) -> Vec<Month> {
    NepaliMonth::ALL
        .iter()
        .map(|m| Month {
            value: m.index(),
            label: m.label(lang, short).to_string(),
        })
        .collect()
}

/// Label of the 1-based `month_number`, or `None` past Chaitra.
///
/// `0` is read as Baisakh, so a 0-based index of the first month also works.
pub fn month_label(lang: Language, month_number: u8, short: bool) -> Option<&'static str> {
    NepaliMonth::from_number(month_number.max(1)).map(|m| m.label(lang, short))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip() {
        for n in 1..=12u8 {
            let m = NepaliMonth::from_number(n).unwrap();
            assert_eq!(m.number(), n);
            assert_eq!(NepaliMonth::from_index(n - 1), Some(m));
        }
    }

    #[test]
    fn out_of_range() {
        assert!(NepaliMonth::from_number(0).is_none());
        assert!(NepaliMonth::from_number(13).is_none());
        assert!(NepaliMonth::from_index(12).is_none());
    }

    #[test]
    fn labels() {
        assert_eq!(month_label(Language::En, 1, false), Some("Baisakh"));
        assert_eq!(month_label(Language::Ne, 12, false), Some("चैत"));
        assert_eq!(month_label(Language::En, 3, true), Some("Asa"));
        assert_eq!(month_label(Language::Ne, 13, true), None);
        assert_eq!(month_label(Language::En, u8::MAX, false), None);
    }

    #[test]
    fn month_zero_is_baisakh() {
        assert_eq!(month_label(Language::En, 0, false), Some("Baisakh"));
        assert_eq!(month_label(Language::Ne, 0, true), Some("बै"));
        assert_eq!(month_label(Language::En, 0, false), month_label(Language::En, 1, false));
    }

    #[test]
    fn month_list_is_zero_based() {
        let months = list_months(Language::En, false);
        assert_eq!(months.len(), 12);
        assert_eq!(months[0].value, 0);
        assert_eq!(months[0].label, "Baisakh");
        assert_eq!(months[11].value, 11);
        assert_eq!(list_months(Language::Ne, true)[8].label, "पु");
    }
}
