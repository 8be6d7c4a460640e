//! EventSink 実装
//!
//! - **TracingEventSink**: `tracing` に info で出力（デフォルト）
//! - **RecordingEventSink**: メモリに溜める（テストや画面側の購読用）
//! - **NoopEventSink**: 何もしない

use std::cell::RefCell;
use std::rc::Rc;

use tracing::info;

use crate::domain::DomainEvent;
use crate::ports::EventSink;

#[derive(Debug, Clone, Copy, Default)]
pub struct TracingEventSink;

impl EventSink for TracingEventSink {
    fn emit(&self, event: &DomainEvent) {
        let delivery_id = event.delivery_id();
        match event {
            DomainEvent::DeliveryScheduled {
                driver_id,
                scheduled_date,
                ..
            } => info!(
                event = event.name(),
                %delivery_id,
                %driver_id,
                %scheduled_date,
                "delivery scheduled"
            ),
            DomainEvent::StatusChanged { from, to, .. } => info!(
                event = event.name(),
                %delivery_id,
                %from,
                %to,
                "delivery status changed"
            ),
        }
    }
}

/// RecordingEventSink は発行されたイベントをすべて保持する
///
/// clone したものは同じバッファを共有します。
#[derive(Debug, Clone, Default)]
pub struct RecordingEventSink {
    events: Rc<RefCell<Vec<DomainEvent>>>,
}

impl RecordingEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<DomainEvent> {
        self.events.borrow().clone()
    }
}

impl EventSink for RecordingEventSink {
    fn emit(&self, event: &DomainEvent) {
        self.events.borrow_mut().push(event.clone());
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoopEventSink;

impl EventSink for NoopEventSink {
    fn emit(&self, _event: &DomainEvent) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DeliveryId, DeliveryStatus};
    use ulid::Ulid;

    fn changed() -> DomainEvent {
        DomainEvent::StatusChanged {
            delivery_id: DeliveryId::from_ulid(Ulid::new()),
            from: DeliveryStatus::Scheduled,
            to: DeliveryStatus::Arrived,
        }
    }

    #[test]
    fn recording_sink_clones_share_buffer() {
        let sink = RecordingEventSink::new();
        let handle = sink.clone();

        let event = changed();
        sink.emit(&event);

        assert_eq!(handle.events(), vec![event.clone()]);
        handle.emit(&event);
        assert_eq!(sink.events().len(), 2);
    }

    #[test]
    fn tracing_and_noop_sinks_accept_events() {
        TracingEventSink.emit(&changed());
        NoopEventSink.emit(&changed());
    }
}
