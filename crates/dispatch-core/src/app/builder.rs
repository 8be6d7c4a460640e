//! BoardBuilder - セッションの構築とワイヤリング
//!
//! Clock → UlidGenerator → InMemoryDeliveryStore → DeliveryBoard をつなぎます。
//! モックデータの読み込みに失敗した場合は build() がエラーを返します（Fail-fast）。

use tracing::info;

use crate::app::board::{BoardFeatures, DeliveryBoard};
use crate::app::seed::{MOCK_TODAY, mock_records};
use crate::config::DispatchConfig;
use crate::domain::{ScheduleDate, ValidationError};
use crate::impls::{InMemoryDeliveryStore, TracingEventSink};
use crate::ports::{Clock, EventSink, UlidGenerator};

pub type SessionStore<C> = InMemoryDeliveryStore<UlidGenerator<C>>;
pub type SessionBoard<C> = DeliveryBoard<SessionStore<C>>;

/// # 使用例
/// ```ignore
/// let board = BoardBuilder::from_config(&config).build(SystemClock)?;
/// ```
pub struct BoardBuilder {
    features: BoardFeatures,
    today: Option<ScheduleDate>,
    seed_mock_data: bool,
    sink: Box<dyn EventSink>,
}

#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("mock dataset is invalid: {0}")]
    InvalidSeed(#[from] ValidationError),

    #[error("clock date {0} cannot be used as a schedule date")]
    UnrepresentableToday(chrono::NaiveDate),
}

impl BoardBuilder {
    pub fn new() -> Self {
        Self {
            features: BoardFeatures::default(),
            today: None,
            seed_mock_data: true,
            sink: Box::new(TracingEventSink),
        }
    }

    pub fn from_config(config: &DispatchConfig) -> Self {
        Self {
            features: config.features(),
            today: config.today,
            seed_mock_data: config.seed_mock_data,
            ..Self::new()
        }
    }

    pub fn features(mut self, features: BoardFeatures) -> Self {
        self.features = features;
        self
    }

    pub fn today(mut self, today: ScheduleDate) -> Self {
        self.today = Some(today);
        self
    }

    pub fn seed_mock_data(mut self, seed: bool) -> Self {
        self.seed_mock_data = seed;
        self
    }

    pub fn event_sink(mut self, sink: impl EventSink + 'static) -> Self {
        self.sink = Box::new(sink);
        self
    }

    /// 基準日の優先順位：明示指定 > モックの基準日（モック読み込み時）> 時計の日付
    pub fn build<C>(self, clock: C) -> Result<SessionBoard<C>, BuildError>
    where
        C: Clock + Send + Sync,
    {
        let today = match (self.today, self.seed_mock_data) {
            (Some(today), _) => today,
            (None, true) => MOCK_TODAY,
            (None, false) => {
                let date = clock.today();
                ScheduleDate::from_naive_date(date)
                    .ok_or(BuildError::UnrepresentableToday(date))?
            }
        };

        let id_gen = UlidGenerator::new(clock);
        let records = if self.seed_mock_data {
            mock_records(&id_gen)?
        } else {
            Vec::new()
        };
        let count = records.len();

        let store =
            InMemoryDeliveryStore::with_records(id_gen, records).with_event_sink(self.sink);

        info!(%today, records = count, "delivery board ready");
        Ok(DeliveryBoard::new(store, self.features, today))
    }
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Intent;
    use crate::domain::workflow::fixtures::acme;
    use crate::domain::DomainEvent;
    use crate::impls::RecordingEventSink;
    use crate::ports::{DeliveryStore, FixedClock};
    use chrono::{TimeZone, Utc};

    fn clock() -> FixedClock {
        FixedClock::new(Utc.with_ymd_and_hms(2025, 6, 3, 12, 0, 0).unwrap())
    }

    #[test]
    fn default_build_seeds_mock_data() {
        let board = BoardBuilder::new().build(clock()).unwrap();
        assert_eq!(board.store().len(), 4);
        assert_eq!(board.today(), MOCK_TODAY);
    }

    #[test]
    fn without_seed_today_comes_from_clock() {
        let board = BoardBuilder::new()
            .seed_mock_data(false)
            .build(clock())
            .unwrap();
        assert!(board.store().is_empty());
        assert_eq!(board.today(), ScheduleDate::new(2025, 6, 3));
    }

    #[test]
    fn explicit_today_wins() {
        let board = BoardBuilder::new()
            .today(ScheduleDate::new(2024, 1, 16))
            .build(clock())
            .unwrap();
        assert_eq!(board.today_deliveries().len(), 2);
        assert!(board.upcoming_deliveries().is_empty());
    }

    #[test]
    fn from_config_applies_flags() {
        let config = DispatchConfig {
            show_stats: false,
            seed_mock_data: false,
            today: Some(ScheduleDate::new(2024, 3, 1)),
            ..DispatchConfig::default()
        };
        let board = BoardBuilder::from_config(&config).build(clock()).unwrap();
        assert!(board.stats().is_none());
        assert!(board.store().is_empty());
        assert_eq!(board.today(), ScheduleDate::new(2024, 3, 1));
    }

    #[test]
    fn event_sink_is_wired_into_store() {
        let sink = RecordingEventSink::new();
        let mut board = BoardBuilder::new()
            .event_sink(sink.clone())
            .build(clock())
            .unwrap();

        board.handle(Intent::AddDelivery(acme())).unwrap();
        let events = sink.events();
        assert_eq!(events.len(), 1);
        assert!(matches!(events[0], DomainEvent::DeliveryScheduled { .. }));
    }
}
