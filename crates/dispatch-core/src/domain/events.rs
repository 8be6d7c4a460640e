//! Events - ドメインイベント
//!
//! ストアの変更ごとに 1 件発行され、`EventSink` に渡されます。

use serde::Serialize;

use super::ids::{DeliveryId, DriverId};
use super::schedule::ScheduleDate;
use super::status::DeliveryStatus;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DomainEvent {
    /// 新しい配達がストアに登録された
    DeliveryScheduled {
        delivery_id: DeliveryId,
        driver_id: DriverId,
        scheduled_date: ScheduleDate,
    },

    /// 配達の status が差し替えられた（同じ値のこともある）
    StatusChanged {
        delivery_id: DeliveryId,
        from: DeliveryStatus,
        to: DeliveryStatus,
    },
}

impl DomainEvent {
    pub fn delivery_id(&self) -> DeliveryId {
        match self {
            DomainEvent::DeliveryScheduled { delivery_id, .. }
            | DomainEvent::StatusChanged { delivery_id, .. } => *delivery_id,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            DomainEvent::DeliveryScheduled { .. } => "delivery_scheduled",
            DomainEvent::StatusChanged { .. } => "status_changed",
        }
    }
}
