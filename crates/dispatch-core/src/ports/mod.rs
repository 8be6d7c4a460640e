//! Ports - 抽象化レイヤー
//!
//! ストア・ID 生成・時刻・イベント出力を trait として定義し、
//! 実装（`impls`）とアプリケーション層（`app`）を切り離します。

pub mod clock;
pub mod delivery_store;
pub mod event_sink;
pub mod id_generator;

pub use self::clock::{Clock, FixedClock, SystemClock};
pub use self::delivery_store::DeliveryStore;
pub use self::event_sink::EventSink;
pub use self::id_generator::{IdGenerator, UlidGenerator};
