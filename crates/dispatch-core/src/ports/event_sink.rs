//! EventSink port - イベント記録の抽象化
//!
//! 実装は `impls::event_sink` にあります（tracing へ出力 / メモリに記録 / 何もしない）。

use crate::domain::DomainEvent;

/// EventSink はドメインイベントを受け取る
///
/// ストアの変更が確定した後に呼ばれます。失敗しても変更は巻き戻りません。
pub trait EventSink {
    fn emit(&self, event: &DomainEvent);
}

impl<E: EventSink + ?Sized> EventSink for Box<E> {
    fn emit(&self, event: &DomainEvent) {
        (**self).emit(event);
    }
}
