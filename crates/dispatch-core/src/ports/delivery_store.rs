//! DeliveryStore port - セッション中の Delivery の正本
//!
//! 追加（add）と status 更新（update_status）だけが変更操作です。削除はありません。
//! 各操作は all-or-nothing で、失敗したときストアは変化しません。

use crate::domain::{
    DeliveryCounts, DeliveryError, DeliveryId, DeliveryRecord, DeliveryStatus, DriverId,
    NewDelivery, ScheduleDate,
};

/// DeliveryStore は 1 セッション分の配達レコードの順序付き集合
///
/// 挿入順がそのまま表示順で、どのクエリもこの順序を保ちます。
pub trait DeliveryStore {
    /// `input` を検証し、新しい ID を振り、`Scheduled` にして末尾に追加する
    fn add(&mut self, input: NewDelivery) -> Result<DeliveryRecord, DeliveryError>;

    /// `id` の status だけを差し替える
    fn update_status(
        &mut self,
        id: DeliveryId,
        status: DeliveryStatus,
    ) -> Result<DeliveryRecord, DeliveryError>;

    fn get(&self, id: DeliveryId) -> Option<DeliveryRecord>;

    /// 全レコードのスナップショット（挿入順）
    fn list(&self) -> Vec<DeliveryRecord>;

    fn len(&self) -> usize {
        self.list().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn filter_by_driver(&self, driver_id: &DriverId) -> Vec<DeliveryRecord> {
        self.list()
            .into_iter()
            .filter(|record| &record.driver_id == driver_id)
            .collect()
    }

    fn filter_by_date(&self, date: ScheduleDate) -> Vec<DeliveryRecord> {
        self.list()
            .into_iter()
            .filter(|record| record.scheduled_date == date)
            .collect()
    }

    /// `after` より後（当日は含まない）の配達
    fn upcoming(&self, after: ScheduleDate) -> Vec<DeliveryRecord> {
        self.list()
            .into_iter()
            .filter(|record| record.scheduled_date > after)
            .collect()
    }

    fn counts(&self) -> DeliveryCounts {
        DeliveryCounts::tally(&self.list())
    }
}
