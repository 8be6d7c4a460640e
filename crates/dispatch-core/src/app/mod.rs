//! App - アプリケーション層
//!
//! ports を組み合わせてホーム画面の振る舞いを実装します。
//!
//! # 主要コンポーネント
//! - **BoardBuilder**: セッションの構築とワイヤリング
//! - **DeliveryBoard**: Intent を受けてストアを操作し、Notice を返す
//! - **ProfileAction**: プロフィール画面のアクション（Notice を返すだけ）
//! - **seed**: 各セッションの初期モックデータ

pub mod board;
pub mod builder;
pub mod profile;
pub mod seed;

pub use self::board::{BoardError, BoardFeatures, DeliveryBoard, Intent, Notice};
pub use self::builder::{BoardBuilder, BuildError, SessionBoard, SessionStore};
pub use self::profile::ProfileAction;
pub use self::seed::{MOCK_TODAY, mock_records};
