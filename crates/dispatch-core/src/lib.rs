//! dispatch-core
//!
//! セッション限りの配達スケジュール。コンテナ配達のインメモリストア、登録と更新のルール、
//! ユーザー操作をストア呼び出しと確認アラートに変換するホーム画面のビューモデルを提供します。
//!
//! # モジュール構成
//! - **domain**: ドメインモデル（ids, delivery, status, schedule, roster, profile, workflow, errors, events）
//! - **ports**: 抽象化レイヤー（DeliveryStore, IdGenerator, Clock, EventSink）
//! - **impls**: 実装（InMemoryDeliveryStore, EventSink 各種）
//! - **app**: アプリケーション層（DeliveryBoard, BoardBuilder, ProfileAction, seed）
//! - **config**: 設定の読み込み（TOML + 環境変数）

pub mod app;
pub mod config;
pub mod domain;
pub mod impls;
pub mod ports;
