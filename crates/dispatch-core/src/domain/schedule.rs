//! Schedule - 配達の予定日と予定時刻
//!
//! どちらもパターン（`YYYY-MM-DD`, `HH:MM`）だけで受け付けます。暦の範囲チェックは
//! しないので `2024-13-40` も有効な `ScheduleDate` です。
//! 順序は文字列ではなく数値の成分で比較します。

use chrono::{Datelike, NaiveDate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use super::errors::ValidationError;

static DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]{4})-([0-9]{2})-([0-9]{2})$").expect("Invalid regex"));

static TIME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]{2}):([0-9]{2})$").expect("Invalid regex"));

/// ScheduleDate は配達予定日
///
/// フィールド順に意味があります：derive した `Ord` は year → month → day の順に比較します。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ScheduleDate {
    year: u16,
    month: u8,
    day: u8,
}

impl ScheduleDate {
    pub const fn new(year: u16, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let invalid = || ValidationError::InvalidDate(raw.to_string());
        let caps = DATE_RE.captures(raw).ok_or_else(invalid)?;
        Ok(Self {
            year: caps[1].parse().map_err(|_| invalid())?,
            month: caps[2].parse().map_err(|_| invalid())?,
            day: caps[3].parse().map_err(|_| invalid())?,
        })
    }

    /// 時計の日付から作る。4 桁で表せない年（`0..=9999` の外）は `None`。
    pub fn from_naive_date(date: NaiveDate) -> Option<Self> {
        let year = u16::try_from(date.year()).ok().filter(|y| *y <= 9999)?;
        // month() は 1..=12、day() は 1..=31 なので u8 に収まる
        Some(Self::new(year, date.month() as u8, date.day() as u8))
    }
}

impl fmt::Display for ScheduleDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for ScheduleDate {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ScheduleDate {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ScheduleDate> for String {
    fn from(value: ScheduleDate) -> Self {
        value.to_string()
    }
}

/// ScheduleTime は配達予定時刻（24 時間表記）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ScheduleTime {
    hour: u8,
    minute: u8,
}

impl ScheduleTime {
    pub const fn new(hour: u8, minute: u8) -> Self {
        Self { hour, minute }
    }

    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let invalid = || ValidationError::InvalidTime(raw.to_string());
        let caps = TIME_RE.captures(raw).ok_or_else(invalid)?;
        Ok(Self {
            hour: caps[1].parse().map_err(|_| invalid())?,
            minute: caps[2].parse().map_err(|_| invalid())?,
        })
    }

}

impl fmt::Display for ScheduleTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for ScheduleTime {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ScheduleTime {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ScheduleTime> for String {
    fn from(value: ScheduleTime) -> Self {
        value.to_string()
    }
}
