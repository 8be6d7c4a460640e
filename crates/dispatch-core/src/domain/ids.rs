//! Ids - ドメインの識別子（型付き ID）
//!
//! Delivery ID は ULID ベースで、`Id<T>` の phantom type で種類を区別します。
//! Driver ID は固定ロスターのキー（"driver1" など）なので文字列の newtype です。

use serde::{Deserialize, Serialize};
use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;
use thiserror::Error;
use ulid::Ulid;

/// IdMarker は各 ID 型のマーカー trait
///
/// Display で使うプレフィックス（"delivery-" など）を提供します。
pub trait IdMarker: Send + Sync + 'static {
    fn prefix() -> &'static str;
}

/// ULID を包むジェネリック ID 型
///
/// `T` は実行時には使わないマーカーで、異なる種類の ID の混同をコンパイル時に防ぎます。
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Id<T: IdMarker> {
    ulid: Ulid,
    #[serde(skip)]
    _marker: PhantomData<T>,
}

impl<T: IdMarker> Id<T> {
    pub fn from_ulid(ulid: Ulid) -> Self {
        Self {
            ulid,
            _marker: PhantomData,
        }
    }

    pub fn as_ulid(&self) -> Ulid {
        self.ulid
    }
}

impl<T: IdMarker> From<Ulid> for Id<T> {
    fn from(ulid: Ulid) -> Self {
        Self::from_ulid(ulid)
    }
}

impl<T: IdMarker> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", T::prefix(), self.ulid)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid id {value:?}: {reason}")]
pub struct ParseIdError {
    pub value: String,
    pub reason: String,
}

/// 表示形式（`delivery-01H...`）と素の ULID のどちらも受け付ける
impl<T: IdMarker> FromStr for Id<T> {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        let bare = raw.strip_prefix(T::prefix()).unwrap_or(raw);
        Ulid::from_string(bare)
            .map(Self::from_ulid)
            .map_err(|e| ParseIdError {
                value: s.to_string(),
                reason: e.to_string(),
            })
    }
}

/// Delivery のマーカー型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Delivery {}

impl IdMarker for Delivery {
    fn prefix() -> &'static str {
        "delivery-"
    }
}

/// 配達レコードの ID
pub type DeliveryId = Id<Delivery>;

/// ロスター上のドライバーのキー
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DriverId(String);

impl DriverId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for DriverId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for DriverId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_has_prefix() {
        let id = DeliveryId::from_ulid(Ulid::new());
        assert!(id.to_string().starts_with("delivery-"));
    }

    #[test]
    fn parses_displayed_and_bare_forms() {
        let ulid = Ulid::new();
        let id = DeliveryId::from_ulid(ulid);

        let from_display: DeliveryId = id.to_string().parse().unwrap();
        let from_bare: DeliveryId = ulid.to_string().parse().unwrap();

        assert_eq!(from_display, id);
        assert_eq!(from_bare, id);
    }

    #[test]
    fn rejects_garbage() {
        let err = "delivery-not-a-ulid".parse::<DeliveryId>().unwrap_err();
        assert_eq!(err.value, "delivery-not-a-ulid");
    }

    #[test]
    fn serializes_as_plain_ulid_string() {
        let ulid = Ulid::new();
        let id = DeliveryId::from_ulid(ulid);

        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{ulid}\""));

        let back: DeliveryId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn phantom_data_does_not_consume_memory() {
        use std::mem::size_of;
        assert_eq!(size_of::<DeliveryId>(), size_of::<Ulid>());
    }

    #[test]
    fn driver_id_displays_raw_key() {
        let driver = DriverId::from("driver1");
        assert_eq!(driver.to_string(), "driver1");
        assert!(!driver.is_empty());
        assert!(DriverId::new("").is_empty());
    }
}
