//! InMemoryDeliveryStore - セッション限りの Delivery ストア
//!
//! # 実装詳細
//! - `Vec<DeliveryRecord>` が挿入順（= 表示順）を保持
//! - `HashMap<DeliveryId, usize>` で ID から位置を引く（削除がないので位置は不変）
//! - 単一所有・同期処理のみ。ロックは不要

use std::collections::HashMap;

use tracing::{debug, info, warn};

use crate::domain::workflow;
use crate::domain::{
    DeliveryError, DeliveryId, DeliveryRecord, DeliveryStatus, DomainEvent, NewDelivery,
};
use crate::impls::TracingEventSink;
use crate::ports::{DeliveryStore, EventSink, IdGenerator};

pub struct InMemoryDeliveryStore<G> {
    records: Vec<DeliveryRecord>,
    index: HashMap<DeliveryId, usize>,
    id_gen: G,
    sink: Box<dyn EventSink>,
}

impl<G: IdGenerator> InMemoryDeliveryStore<G> {
    pub fn new(id_gen: G) -> Self {
        Self {
            records: Vec::new(),
            index: HashMap::new(),
            id_gen,
            sink: Box::new(TracingEventSink),
        }
    }

    /// 登録済みのレコード（セッションの初期データ）から始める
    ///
    /// status はそのまま保持します。すでにある ID のレコードは読み飛ばします。
    pub fn with_records(id_gen: G, records: impl IntoIterator<Item = DeliveryRecord>) -> Self {
        let mut store = Self::new(id_gen);
        for record in records {
            if store.index.contains_key(&record.id) {
                warn!(id = %record.id, "skipping duplicate delivery id in initial records");
                continue;
            }
            store.index.insert(record.id, store.records.len());
            store.records.push(record);
        }
        debug!(count = store.records.len(), "delivery store initialised");
        store
    }

    pub fn with_event_sink(mut self, sink: impl EventSink + 'static) -> Self {
        self.sink = Box::new(sink);
        self
    }

    /// clone しない読み取り専用ビュー
    pub fn records(&self) -> &[DeliveryRecord] {
        &self.records
    }

    fn fresh_id(&self) -> DeliveryId {
        loop {
            let id = self.id_gen.generate_delivery_id();
            if !self.index.contains_key(&id) {
                return id;
            }
            warn!(%id, "generated delivery id already in use, retrying");
        }
    }
}

impl<G: IdGenerator> DeliveryStore for InMemoryDeliveryStore<G> {
    fn add(&mut self, input: NewDelivery) -> Result<DeliveryRecord, DeliveryError> {
        let id = self.fresh_id();
        let record = workflow::admit(id, input).inspect_err(|e| {
            warn!(error = %e, field = e.field_name(), "rejected new delivery");
        })?;

        self.index.insert(id, self.records.len());
        self.records.push(record.clone());
        info!(
            %id,
            customer = %record.customer_name,
            driver_id = %record.driver_id,
            "delivery added"
        );

        self.sink.emit(&DomainEvent::DeliveryScheduled {
            delivery_id: id,
            driver_id: record.driver_id.clone(),
            scheduled_date: record.scheduled_date,
        });
        Ok(record)
    }

    fn update_status(
        &mut self,
        id: DeliveryId,
        status: DeliveryStatus,
    ) -> Result<DeliveryRecord, DeliveryError> {
        let Some(record) = self.index.get(&id).and_then(|&pos| self.records.get_mut(pos)) else {
            warn!(%id, %status, "status update for unknown delivery");
            return Err(DeliveryError::NotFound(id));
        };

        let previous = workflow::apply_status(record, status);
        let updated = record.clone();
        info!(%id, from = %previous, to = %status, "delivery status updated");

        self.sink.emit(&DomainEvent::StatusChanged {
            delivery_id: id,
            from: previous,
            to: status,
        });
        Ok(updated)
    }

    fn get(&self, id: DeliveryId) -> Option<DeliveryRecord> {
        self.index
            .get(&id)
            .and_then(|&pos| self.records.get(pos))
            .cloned()
    }

    fn list(&self) -> Vec<DeliveryRecord> {
        self.records.clone()
    }

    fn len(&self) -> usize {
        self.records.len()
    }
}
