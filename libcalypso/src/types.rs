// libcalypso/src/types.rs

use chrono::{DateTime, Datelike, Timelike};
use derive_more::{Display, From};

use crate::constants::{CALYPSO_EPOCH, CALYPSO_EPOCH_SHIFT, SECONDS_PER_DAY};
use crate::{Error, Result};

/// カード番号 - Newtype Pattern (ICC レコードの 32 ビット)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, From)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CardNumber(u32);

impl CardNumber {
    pub const fn new(n: u32) -> Self {
        Self(n)
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

/// Card data dialect: which schema family decodes contracts and events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Dialect {
    #[display(fmt = "Navigo")]
    Navigo,
    #[display(fmt = "Opus")]
    Opus,
}

impl Dialect {
    /// Navigo cards carry a counters file (remaining tickets); the Opus flow
    /// goes straight from contracts to events.
    pub fn has_counters(&self) -> bool {
        matches!(self, Dialect::Navigo)
    }
}

/// Calypso application (DF/EF) selected before reading its records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Application {
    Icc,
    Ticketing,
    Environment,
    Contracts,
    Counters,
    Events,
}

impl Application {
    /// (directory byte, application byte) substituted into the select command.
    pub fn path(&self) -> (u8, u8) {
        match self {
            Self::Icc => (0x00, 0x02),
            Self::Ticketing => (0x20, 0x00),
            Self::Environment => (0x20, 0x01),
            Self::Contracts => (0x20, 0x20),
            Self::Counters => (0x20, 0x69),
            Self::Events => (0x20, 0x10),
        }
    }
}

/// Identity of one decoded record, used in errors and logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RecordId {
    #[display(fmt = "icc")]
    Icc,
    #[display(fmt = "environment")]
    Environment,
    #[display(fmt = "contract[{}]", _0)]
    Contract(u8),
    #[display(fmt = "counters")]
    Counters,
    #[display(fmt = "event[{}]", _0)]
    Event(u8),
}

/// Denormalized date/time derived from a Calypso day count.
///
/// `unix` is authoritative; the calendar fields are computed from it (UTC)
/// once at construction so consumers never redo the arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Timestamp {
    pub unix: i64,
    pub year: i32,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    /// 0 = Monday
    pub weekday: u8,
}

impl Timestamp {
    pub fn from_unix(unix: i64) -> Result<Self> {
        let dt = DateTime::from_timestamp(unix, 0).ok_or(Error::DateOutOfRange { unix })?;
        Ok(Self {
            unix,
            year: dt.year(),
            month: dt.month() as u8,
            day: dt.day() as u8,
            hour: dt.hour() as u8,
            minute: dt.minute() as u8,
            second: dt.second() as u8,
            weekday: dt.weekday().num_days_from_monday() as u8,
        })
    }

    /// `CALYPSO_EPOCH + days * 86400 + 3600`
    pub fn from_days(days: u64) -> Result<Self> {
        let unix = i64::try_from(days)
            .ok()
            .and_then(|d| d.checked_mul(SECONDS_PER_DAY))
            .and_then(|s| s.checked_add(CALYPSO_EPOCH + CALYPSO_EPOCH_SHIFT))
            .ok_or(Error::DateOutOfRange { unix: i64::MAX })?;
        Self::from_unix(unix)
    }

    /// Replace the time of day with `minutes` after midnight.
    pub fn at_minute_of_day(self, minutes: u64) -> Result<Self> {
        let elapsed = self.hour as i64 * 3600 + self.minute as i64 * 60 + self.second as i64;
        let unix = i64::try_from(minutes)
            .ok()
            .and_then(|m| m.checked_mul(60))
            .and_then(|s| (self.unix - elapsed).checked_add(s))
            .ok_or(Error::DateOutOfRange { unix: i64::MAX })?;
        Self::from_unix(unix)
    }

    /// 1997-01-01 00:00:00 UTC
    pub const EPOCH: Self = Self {
        unix: CALYPSO_EPOCH + CALYPSO_EPOCH_SHIFT,
        year: 1997,
        month: 1,
        day: 1,
        hour: 0,
        minute: 0,
        second: 0,
        weekday: 2,
    };

    pub fn date_string(&self) -> String {
        format!("{:02}/{:02}/{:04}", self.day, self.month, self.year)
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:02}/{:02}/{:04} {:02}:{:02}:{:02}",
            self.day, self.month, self.year, self.hour, self.minute, self.second
        )
    }
}
