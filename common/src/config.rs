//! 設定管理
//!
//! ServerConfig, LogFormat等の設定構造体

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::CommonError;

/// ログ出力形式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// 標準出力が端末ならテキスト、それ以外はJSON
    #[default]
    Auto,
    /// 人間向けテキスト
    Text,
    /// 集約向けJSON（1行1イベント）
    Json,
}

impl FromStr for LogFormat {
    type Err = CommonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(CommonError::Config(format!("unknown log format: {other}"))),
        }
    }
}

/// サーバー設定
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServerConfig {
    /// ホストアドレス (デフォルト: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// ポート番号 (デフォルト: 8000)
    #[serde(default = "default_port")]
    pub port: u16,

    /// 静的ファイルのディレクトリ (デフォルト: "static")
    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,

    /// シードファイル（未指定なら組み込みのアクティビティ一覧）
    #[serde(default)]
    pub seed_file: Option<PathBuf>,

    /// ログ出力形式 (デフォルト: auto)
    #[serde(default)]
    pub log_format: LogFormat,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("static")
}

impl ServerConfig {
    /// バインドアドレス (`host:port`)
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: default_static_dir(),
            seed_file: None,
            log_format: LogFormat::default(),
        }
    }
}
