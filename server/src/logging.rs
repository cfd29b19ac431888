//! ロギング初期化ユーティリティ
//!
//! `RUST_LOG` が未設定の場合は `ACTIVITIES_LOG_LEVEL`（デフォルト: info）を使う。

use mergington_activities_common::config::LogFormat;
use std::io::IsTerminal;
use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, util::TryInitError, EnvFilter,
};

/// グローバルsubscriberを初期化する
///
/// 二重初期化はエラーとして返す。
pub fn init(format: LogFormat) -> Result<(), TryInitError> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(crate::config::log_level()));

    if use_json(format, std::io::stdout().is_terminal()) {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().json().flatten_event(true).with_current_span(false))
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer())
            .try_init()
    }
}

fn use_json(format: LogFormat, stdout_is_terminal: bool) -> bool {
    match format {
        LogFormat::Json => true,
        LogFormat::Text => false,
        LogFormat::Auto => !stdout_is_terminal,
    }
}
