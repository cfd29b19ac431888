//! CLI module for mergington-activities
//!
//! Command-line flags override the environment-derived configuration.

use clap::Parser;
use mergington_activities_common::config::{LogFormat, ServerConfig};
use std::path::PathBuf;

/// Mergington High School activities API server
#[derive(Parser, Debug)]
#[command(name = "mergington-activities")]
#[command(version, about, long_about = None)]
#[command(after_help = r#"ENVIRONMENT VARIABLES:
    ACTIVITIES_HOST         Bind address (default: 0.0.0.0)
    ACTIVITIES_PORT         Listen port (default: 8000)
    ACTIVITIES_STATIC_DIR   Static front-end directory (default: static)
    ACTIVITIES_SEED_FILE    JSON activity catalog loaded at startup
    ACTIVITIES_LOG_FORMAT   Log format: text, json, auto (default: auto)
    ACTIVITIES_LOG_LEVEL    Log level when RUST_LOG is unset (default: info)
"#)]
pub struct Cli {
    /// Bind address
    #[arg(short = 'H', long)]
    pub host: Option<String>,

    /// Listen port
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Directory served under /static
    #[arg(long)]
    pub static_dir: Option<PathBuf>,

    /// JSON activity catalog replacing the built-in activities
    #[arg(long)]
    pub seed_file: Option<PathBuf>,

    /// Log format
    #[arg(long, value_parser = parse_log_format)]
    pub log_format: Option<LogFormat>,
}

fn parse_log_format(value: &str) -> Result<LogFormat, String> {
    value.parse::<LogFormat>().map_err(|err| err.to_string())
}

impl Cli {
    /// 指定されたフラグで設定を上書きする
    pub fn apply(self, mut config: ServerConfig) -> ServerConfig {
        if let Some(host) = self.host {
            config.host = host;
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(static_dir) = self.static_dir {
            config.static_dir = static_dir;
        }
        if let Some(seed_file) = self.seed_file {
            config.seed_file = Some(seed_file);
        }
        if let Some(log_format) = self.log_format {
            config.log_format = log_format;
        }
        config
    }
}
