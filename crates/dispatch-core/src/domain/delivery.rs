//! Delivery - 配達レコードと、その元になる入力

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::errors::UnknownVariant;
use super::ids::{DeliveryId, DriverId};
use super::roster::{DEFAULT_PROVINCE, Driver};
use super::schedule::{ScheduleDate, ScheduleTime};
use super::status::DeliveryStatus;

/// DeliveryType はコンテナを販売するか貸し出すか
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryType {
    #[default]
    Sales,
    Rental,
}

impl DeliveryType {
    pub const ALL: [DeliveryType; 2] = [DeliveryType::Sales, DeliveryType::Rental];

    pub fn as_str(self) -> &'static str {
        match self {
            DeliveryType::Sales => "sales",
            DeliveryType::Rental => "rental",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DeliveryType::Sales => "Sales",
            DeliveryType::Rental => "Rental",
        }
    }
}

impl fmt::Display for DeliveryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeliveryType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DeliveryType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownVariant::new("delivery type", s))
    }
}

/// ContainerSize はコンテナの長さ（フィート）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ContainerSize {
    #[default]
    #[serde(rename = "20")]
    Twenty,
    #[serde(rename = "40")]
    Forty,
}

impl ContainerSize {
    pub const ALL: [ContainerSize; 2] = [ContainerSize::Twenty, ContainerSize::Forty];

    pub fn as_str(self) -> &'static str {
        match self {
            ContainerSize::Twenty => "20",
            ContainerSize::Forty => "40",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ContainerSize::Twenty => "20' Container",
            ContainerSize::Forty => "40' Container",
        }
    }
}

impl fmt::Display for ContainerSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContainerSize {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ContainerSize::ALL
            .into_iter()
            .find(|size| size.as_str() == s)
            .ok_or_else(|| UnknownVariant::new("container size", s))
    }
}

/// NewDelivery は追加フォームの入力
///
/// 日付・時刻は入力されたままの文字列です。`status` は [`DeliveryRecord`] と
/// 形を揃えるために受け付けますが、登録時には無視されます（常に `Scheduled`）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewDelivery {
    pub customer_name: String,
    pub address: String,
    pub city: String,
    pub province: String,
    pub container_size: ContainerSize,
    pub delivery_type: DeliveryType,
    pub scheduled_date: String,
    pub scheduled_time: String,
    pub special_instructions: Option<String>,
    pub driver_id: String,
    pub driver_name: String,
    pub status: Option<DeliveryStatus>,
}

impl Default for NewDelivery {
    fn default() -> Self {
        Self {
            customer_name: String::new(),
            address: String::new(),
            city: String::new(),
            province: DEFAULT_PROVINCE.to_string(),
            container_size: ContainerSize::default(),
            delivery_type: DeliveryType::default(),
            scheduled_date: String::new(),
            scheduled_time: String::new(),
            special_instructions: None,
            driver_id: String::new(),
            driver_name: String::new(),
            status: None,
        }
    }
}

impl NewDelivery {
    /// ロスターのドライバーを割り当て、名前もコピーする
    pub fn assign_driver(&mut self, driver: &Driver) {
        self.driver_id = driver.id.to_string();
        self.driver_name = driver.name.to_string();
    }
}

/// DeliveryRecord はストアに登録された配達
///
/// 追加ワークフローを通してのみ作られ、その後に変わるのは `status` だけです。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryRecord {
    pub id: DeliveryId,
    pub customer_name: String,
    pub address: String,
    pub city: String,
    pub province: String,
    pub container_size: ContainerSize,
    pub delivery_type: DeliveryType,
    pub scheduled_date: ScheduleDate,
    pub scheduled_time: ScheduleTime,
    pub status: DeliveryStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_instructions: Option<String>,
    pub driver_id: DriverId,
    pub driver_name: String,
}

impl DeliveryRecord {
    /// status を差し替え、以前の値を返す
    pub fn set_status(&mut self, status: DeliveryStatus) -> DeliveryStatus {
        std::mem::replace(&mut self.status, status)
    }

    /// `"Kingston, ON"`
    pub fn locality(&self) -> String {
        format!("{}, {}", self.city, self.province)
    }
}
