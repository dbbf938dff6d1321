//! `Clock` — where "today" comes from.
//!
//! The converter never reads the system time itself; it asks a [`Clock`]
//! for the current Gregorian date, already resolved to the local time of
//! the calendar's users.

use crate::date::GregorianDate;
use bs_core::errors::{Error, Result};
use chrono::{DateTime, FixedOffset, Utc};

/// UTC offset of Asia/Kathmandu, in minutes (+05:45, no DST).
pub const KATHMANDU_UTC_OFFSET_MINUTES: i32 = 5 * 60 + 45;

/// A source of the current local Gregorian date.
pub trait Clock: std::fmt::Debug + Send + Sync {
    /// Today's date in the clock's time zone.
    fn today(&self) -> Result<GregorianDate>;
}

/// Reads the system clock and shifts it by a fixed UTC offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SystemClock {
    offset_minutes: i32,
}

impl SystemClock {
    /// System clock resolved to Kathmandu time.
    pub const fn kathmandu() -> Self {
        Self { offset_minutes: KATHMANDU_UTC_OFFSET_MINUTES }
    }

    /// System clock resolved to `minutes` east of UTC.
    ///
    /// # Errors
    /// Returns [`Error::Clock`] if the offset is a day or more.
    pub fn with_offset_minutes(minutes: i32) -> Result<Self> {
        let clock = Self { offset_minutes: minutes };
        clock.fixed_offset()?;
        Ok(clock)
    }

    /// Minutes east of UTC.
    pub fn offset_minutes(&self) -> i32 {
        self.offset_minutes
    }

    /// The local date at `instant`.
    pub fn date_at(&self, instant: DateTime<Utc>) -> Result<GregorianDate> {
        Ok(instant.with_timezone(&self.fixed_offset()?).date_naive().into())
    }

    fn fixed_offset(&self) -> Result<FixedOffset> {
        self.offset_minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .ok_or_else(|| Error::Clock(format!("UTC offset of {} minutes is out of range", self.offset_minutes)))
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::kathmandu()
    }
}

impl Clock for SystemClock {
    fn today(&self) -> Result<GregorianDate> {
        self.date_at(Utc::now())
    }
}

/// A clock stopped at one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub GregorianDate);

impl Clock for FixedClock {
    fn today(&self) -> Result<GregorianDate> {
        Ok(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn kathmandu_offset() {
        assert_eq!(SystemClock::kathmandu().offset_minutes(), 345);
        assert_eq!(SystemClock::default(), SystemClock::kathmandu());
    }

    #[test]
    fn offset_bounds() {
        assert!(SystemClock::with_offset_minutes(-12 * 60).is_ok());
        assert!(SystemClock::with_offset_minutes(24 * 60).is_err());
        assert!(SystemClock::with_offset_minutes(i32::MAX).is_err());
    }

    #[test]
    fn offset_moves_the_date() {
        // 18:30 UTC is already past midnight in Kathmandu.
        let utc = Utc.with_ymd_and_hms(2024, 4, 12, 18, 30, 0).unwrap();
        let local = SystemClock::kathmandu().date_at(utc).unwrap();
        assert_eq!(local, GregorianDate::from_ymd(2024, 4, 13).unwrap());
        let utc = Utc.with_ymd_and_hms(2024, 4, 12, 18, 14, 0).unwrap();
        assert_eq!(SystemClock::kathmandu().date_at(utc), GregorianDate::from_ymd(2024, 4, 12));
    }

    #[test]
    fn kathmandu_matches_checked_constructor() {
        assert_eq!(SystemClock::with_offset_minutes(KATHMANDU_UTC_OFFSET_MINUTES), Ok(SystemClock::kathmandu()));
        let utc = Utc.with_ymd_and_hms(2024, 4, 12, 23, 59, 0).unwrap();
        assert!(SystemClock::kathmandu().date_at(utc).is_ok());
    }

    #[test]
    fn fixed_clock() {
        let d = GregorianDate::from_ymd(2024, 4, 13).unwrap();
        assert_eq!(FixedClock(d).today(), Ok(d));
    }

    #[test]
    fn system_clock_reads_a_date() {
        assert!(SystemClock::kathmandu().today().is_ok());
    }
}
