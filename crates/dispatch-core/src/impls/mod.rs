//! Impls - ports の実装
//!
//! # 含まれる実装
//! - **InMemoryDeliveryStore**: セッション限りのストア（永続化なし）
//! - **TracingEventSink / RecordingEventSink / NoopEventSink**: EventSink

pub mod event_sink;
pub mod inmem_store;

pub use self::event_sink::{NoopEventSink, RecordingEventSink, TracingEventSink};
pub use self::inmem_store::InMemoryDeliveryStore;
