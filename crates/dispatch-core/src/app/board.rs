//! DeliveryBoard - ホーム画面のビューモデル
//!
//! 画面側は `Intent` を渡し、返ってきた `Notice`（確認アラート）を表示するだけです。
//! 画面のバリエーション（upcoming の有無、統計、ドライバー絞り込み）は
//! `BoardFeatures` のフラグで切り替えます。

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::domain::{
    DeliveryCounts, DeliveryError, DeliveryId, DeliveryRecord, DeliveryStatus, DriverId,
    NewDelivery, ScheduleDate, find_driver,
};
use crate::ports::DeliveryStore;

/// BoardFeatures はホーム画面の任意の部品
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardFeatures {
    pub show_upcoming: bool,
    pub show_stats: bool,
    pub driver_filter_enabled: bool,
}

impl Default for BoardFeatures {
    fn default() -> Self {
        Self {
            show_upcoming: true,
            show_stats: true,
            driver_filter_enabled: true,
        }
    }
}

/// Intent はユーザーの操作
#[derive(Debug, Clone)]
pub enum Intent {
    AddDelivery(NewDelivery),
    UpdateStatus {
        id: DeliveryId,
        status: DeliveryStatus,
    },
    SelectDelivery(DeliveryId),
    CloseDetails,
    /// このドライバーの配達だけを表示する。同じドライバーをもう一度渡すと解除
    ToggleDriverFilter(DriverId),
    Navigate(DeliveryId),
    CallCustomer(DeliveryId),
    /// ヘッダーの設定ボタン
    OpenSettings,
}

/// Notice は操作のあとに出す確認アラート
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum BoardError {
    #[error(transparent)]
    Delivery(#[from] DeliveryError),

    #[error("driver filtering is not enabled on this board")]
    FilterDisabled,
}

impl BoardError {
    /// このエラーに対応するアラート
    pub fn notice(&self) -> Notice {
        match self {
            BoardError::Delivery(DeliveryError::Validation(e)) => {
                Notice::new("Validation Error", capitalize(&e.to_string()))
            }
            BoardError::Delivery(e @ DeliveryError::NotFound(_)) => {
                Notice::new("Not Found", capitalize(&e.to_string()))
            }
            BoardError::FilterDisabled => Notice::new("Unavailable", capitalize(&self.to_string())),
        }
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub struct DeliveryBoard<S> {
    store: S,
    features: BoardFeatures,
    today: ScheduleDate,
    selected: Option<DeliveryId>,
    driver_filter: Option<DriverId>,
}

impl<S: DeliveryStore> DeliveryBoard<S> {
    pub fn new(store: S, features: BoardFeatures, today: ScheduleDate) -> Self {
        Self {
            store,
            features,
            today,
            selected: None,
            driver_filter: None,
        }
    }

    /// Intent を 1 件処理する。アラートが不要なものは `Ok(None)`
    pub fn handle(&mut self, intent: Intent) -> Result<Option<Notice>, BoardError> {
        debug!(?intent, "handling intent");
        match intent {
            Intent::AddDelivery(input) => {
                let record = self.store.add(with_roster_name(input))?;
                info!(id = %record.id, "new delivery scheduled from board");
                Ok(Some(Notice::new(
                    "Success",
                    "New delivery has been scheduled successfully!",
                )))
            }
            Intent::UpdateStatus { id, status } => {
                let record = self.store.update_status(id, status)?;
                self.selected = None;
                Ok(Some(Notice::new(
                    "Status Updated",
                    format!("Delivery status updated to {}!", record.status),
                )))
            }
            Intent::SelectDelivery(id) => {
                self.require(id)?;
                self.selected = Some(id);
                Ok(None)
            }
            Intent::CloseDetails => {
                self.selected = None;
                Ok(None)
            }
            Intent::ToggleDriverFilter(driver_id) => {
                if !self.features.driver_filter_enabled {
                    return Err(BoardError::FilterDisabled);
                }
                if self.driver_filter.as_ref() == Some(&driver_id) {
                    self.driver_filter = None;
                } else {
                    self.driver_filter = Some(driver_id);
                }
                Ok(None)
            }
            Intent::Navigate(id) => {
                let record = self.require(id)?;
                Ok(Some(Notice::new(
                    "Navigation",
                    format!(
                        "Opening maps for navigation to {}, {}...",
                        record.address,
                        record.locality()
                    ),
                )))
            }
            Intent::CallCustomer(id) => {
                let record = self.require(id)?;
                Ok(Some(Notice::new(
                    "Contact",
                    format!("Calling customer: {}", record.customer_name),
                )))
            }
            Intent::OpenSettings => Ok(Some(Notice::new(
                "Settings",
                "Driver settings and preferences",
            ))),
        }
    }

    fn require(&self, id: DeliveryId) -> Result<DeliveryRecord, DeliveryError> {
        self.store.get(id).ok_or(DeliveryError::NotFound(id))
    }

    fn visible(&self, records: Vec<DeliveryRecord>) -> Vec<DeliveryRecord> {
        match &self.driver_filter {
            Some(driver_id) => records
                .into_iter()
                .filter(|record| &record.driver_id == driver_id)
                .collect(),
            None => records,
        }
    }

    /// ドライバー絞り込み後の全配達
    pub fn deliveries(&self) -> Vec<DeliveryRecord> {
        match &self.driver_filter {
            Some(driver_id) => self.store.filter_by_driver(driver_id),
            None => self.store.list(),
        }
    }

    /// 基準日の配達
    pub fn today_deliveries(&self) -> Vec<DeliveryRecord> {
        self.visible(self.store.filter_by_date(self.today))
    }

    /// 基準日より後の配達。upcoming が無効なら空
    pub fn upcoming_deliveries(&self) -> Vec<DeliveryRecord> {
        if !self.features.show_upcoming {
            return Vec::new();
        }
        self.visible(self.store.upcoming(self.today))
    }

    pub fn stats(&self) -> Option<DeliveryCounts> {
        self.features
            .show_stats
            .then(|| DeliveryCounts::tally(&self.deliveries()))
    }

    pub fn selected(&self) -> Option<DeliveryRecord> {
        self.selected.and_then(|id| self.store.get(id))
    }

    pub fn driver_filter(&self) -> Option<&DriverId> {
        self.driver_filter.as_ref()
    }

    pub fn today(&self) -> ScheduleDate {
        self.today
    }

    pub fn features(&self) -> BoardFeatures {
        self.features
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

/// ID だけが渡されたとき、ロスターからドライバー名を補う
fn with_roster_name(mut input: NewDelivery) -> NewDelivery {
    if input.driver_name.is_empty()
        && let Some(driver) = find_driver(&input.driver_id)
    {
        input.driver_name = driver.name.to_string();
    }
    input
}
