//! Status - 配達の status と status ごとの件数

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::errors::UnknownVariant;
use super::DeliveryRecord;

/// DeliveryStatus は配達の進行段階
///
/// 遷移に制約はなく、`Delivered -> Scheduled` も可能です。新しいレコードは常に `Scheduled` から始まります。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeliveryStatus {
    #[default]
    Scheduled,
    EnRoute,
    Arrived,
    Delivered,
    Delayed,
}

impl DeliveryStatus {
    /// status ピッカーの表示順
    pub const ALL: [DeliveryStatus; 5] = [
        DeliveryStatus::Scheduled,
        DeliveryStatus::EnRoute,
        DeliveryStatus::Arrived,
        DeliveryStatus::Delivered,
        DeliveryStatus::Delayed,
    ];

    /// ワイヤ形式（`"en-route"`）
    pub fn as_str(self) -> &'static str {
        match self {
            DeliveryStatus::Scheduled => "scheduled",
            DeliveryStatus::EnRoute => "en-route",
            DeliveryStatus::Arrived => "arrived",
            DeliveryStatus::Delivered => "delivered",
            DeliveryStatus::Delayed => "delayed",
        }
    }

    /// 表示用ラベル（`"En Route"`）
    pub fn label(self) -> &'static str {
        match self {
            DeliveryStatus::Scheduled => "Scheduled",
            DeliveryStatus::EnRoute => "En Route",
            DeliveryStatus::Arrived => "Arrived",
            DeliveryStatus::Delivered => "Delivered",
            DeliveryStatus::Delayed => "Delayed",
        }
    }
}

impl fmt::Display for DeliveryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeliveryStatus {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DeliveryStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownVariant::new("delivery status", s))
    }
}

/// DeliveryCounts は status ごとの配達件数
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryCounts {
    pub total: usize,
    pub scheduled: usize,
    pub en_route: usize,
    pub arrived: usize,
    pub delivered: usize,
    pub delayed: usize,
}

impl DeliveryCounts {
    pub fn tally<'a>(records: impl IntoIterator<Item = &'a DeliveryRecord>) -> Self {
        let mut counts = Self::default();
        for record in records {
            counts.total += 1;
            match record.status {
                DeliveryStatus::Scheduled => counts.scheduled += 1,
                DeliveryStatus::EnRoute => counts.en_route += 1,
                DeliveryStatus::Arrived => counts.arrived += 1,
                DeliveryStatus::Delivered => counts.delivered += 1,
                DeliveryStatus::Delayed => counts.delayed += 1,
            }
        }
        counts
    }

    pub fn get(&self, status: DeliveryStatus) -> usize {
        match status {
            DeliveryStatus::Scheduled => self.scheduled,
            DeliveryStatus::EnRoute => self.en_route,
            DeliveryStatus::Arrived => self.arrived,
            DeliveryStatus::Delivered => self.delivered,
            DeliveryStatus::Delayed => self.delayed,
        }
    }
}
