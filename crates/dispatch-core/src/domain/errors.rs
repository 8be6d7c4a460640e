//! Errors - ドメインエラー
//!
//! - `ValidationError`: 入力の不備（必須項目の欠落、日付・時刻の形式違反、一覧にない州コード）。ストアは変更されない。
//! - `DeliveryError`: ストア操作の失敗（検証エラー or 未知の ID）。
//! - `UnknownVariant`: 閉じた列挙型（status など）への未知の文字列。

use thiserror::Error;

use super::ids::DeliveryId;
use super::workflow::RequiredField;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("please fill in the {}", .0.label())]
    MissingField(RequiredField),

    #[error("please enter date in YYYY-MM-DD format (got {0:?})")]
    InvalidDate(String),

    #[error("please enter time in HH:MM format (got {0:?})")]
    InvalidTime(String),

    #[error("please choose a province or state from the list (got {0:?})")]
    UnknownProvince(String),
}

impl ValidationError {
    /// エラーの対象になった入力項目のキー（`"customerName"` など）
    pub fn field_name(&self) -> &'static str {
        match self {
            ValidationError::MissingField(field) => field.name(),
            ValidationError::InvalidDate(_) => RequiredField::ScheduledDate.name(),
            ValidationError::InvalidTime(_) => RequiredField::ScheduledTime.name(),
            ValidationError::UnknownProvince(_) => "province",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeliveryError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("delivery not found: {0}")]
    NotFound(DeliveryId),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind}: {value:?}")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

impl UnknownVariant {
    pub fn new(kind: &'static str, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}
