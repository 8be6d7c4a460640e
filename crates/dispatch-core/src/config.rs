//! Config - セッション設定
//!
//! 後に積んだものが優先されます：
//! 1. 組み込みのデフォルト
//! 2. TOML ファイル（カレントディレクトリの `dispatch.toml`、または明示したパス）
//! 3. `DISPATCH__*` 環境変数（例: `DISPATCH__SHOW_STATS=false`）

use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::app::BoardFeatures;
use crate::domain::ScheduleDate;

pub const DEFAULT_CONFIG_FILE: &str = "dispatch.toml";
pub const ENV_PREFIX: &str = "DISPATCH";
pub const ENV_PREFIX_SEPARATOR: &str = "__";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DispatchConfig {
    /// 基準日。`None` なら時計の日付（モック読み込み時はモックの基準日）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub today: Option<ScheduleDate>,
    pub seed_mock_data: bool,
    pub show_upcoming: bool,
    pub show_stats: bool,
    pub driver_filter_enabled: bool,
    /// `RUST_LOG` が無いときに使う `tracing_subscriber::EnvFilter` の指定
    pub log_filter: String,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            today: None,
            seed_mock_data: true,
            show_upcoming: true,
            show_stats: true,
            driver_filter_enabled: true,
            log_filter: "warn,dispatch_core=info".into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file {} not found", .0.display())]
    NotFound(PathBuf),

    #[error("invalid configuration: {0}")]
    Load(#[from] config::ConfigError),
}

impl DispatchConfig {
    /// デフォルト → ファイル → プロセスの環境変数の順に読み込む
    ///
    /// `path` を指定した場合はそのファイルが存在しなければエラー、
    /// 指定しない場合は `dispatch.toml` があれば読みます。
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_with_env(path, None)
    }

    /// `env` が `Some` なら、プロセスの環境変数の代わりにそれを使う
    fn load_with_env(
        path: Option<&Path>,
        env: Option<config::Map<String, String>>,
    ) -> Result<Self, ConfigError> {
        let file = match path {
            Some(path) => {
                if !path.is_file() {
                    return Err(ConfigError::NotFound(path.to_path_buf()));
                }
                File::from(path).format(FileFormat::Toml).required(true)
            }
            None => File::from(Path::new(DEFAULT_CONFIG_FILE))
                .format(FileFormat::Toml)
                .required(false),
        };

        let loaded: Self = Config::builder()
            .add_source(Config::try_from(&DispatchConfig::default())?)
            .add_source(file)
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator(ENV_PREFIX_SEPARATOR)
                    .try_parsing(true)
                    .source(env),
            )
            .build()?
            .try_deserialize()?;

        debug!(config = ?loaded, "configuration loaded");
        Ok(loaded)
    }

    /// デフォルトに TOML 文字列だけを重ねる（環境変数は見ない）
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(Config::builder()
            .add_source(Config::try_from(&DispatchConfig::default())?)
            .add_source(File::from_str(raw, FileFormat::Toml))
            .build()?
            .try_deserialize()?)
    }

    pub fn features(&self) -> BoardFeatures {
        BoardFeatures {
            show_upcoming: self.show_upcoming,
            show_stats: self.show_stats,
            driver_filter_enabled: self.driver_filter_enabled,
        }
    }
}
