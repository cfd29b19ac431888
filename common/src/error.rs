//! エラー型定義
//!
//! 統一エラー型（thiserror使用）
//!
//! `RegistryError` は `kind()` と `detail()` を提供し、HTTP境界で
//! ステータスコードとクライアント向けメッセージへ変換できる。

use std::fmt;
use thiserror::Error;

/// Common layer error type
#[derive(Debug, Error)]
pub enum CommonError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error (seed file, static directory)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),
}

/// 参加者リストとの矛盾の種類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictReason {
    /// 既に参加登録済み
    AlreadySignedUp,
    /// 参加登録されていない
    NotSignedUp,
}

impl fmt::Display for ConflictReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadySignedUp => f.write_str("is already signed up"),
            Self::NotSignedUp => f.write_str("is not signed up"),
        }
    }
}

/// エラー分類
///
/// HTTP境界はこの分類だけを見てステータスコードを決める。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// 指定アクティビティが存在しない
    NotFound,
    /// 参加者リストの状態と矛盾する操作
    Conflict,
    /// 境界での入力検証エラー
    Validation,
    /// 想定外の内部エラー
    Internal,
}

/// Activity registry error type
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Common layer error
    #[error(transparent)]
    Common(#[from] CommonError),

    /// Activity not found
    #[error("Activity not found: {activity}")]
    NotFound {
        /// 要求されたアクティビティ名
        activity: String,
    },

    /// Roster conflict (duplicate signup, absent on unregister)
    #[error("{email} {reason}")]
    Conflict {
        /// 対象アクティビティ名
        activity: String,
        /// 対象メールアドレス
        email: String,
        /// 矛盾の種類
        reason: ConflictReason,
    },
}

impl RegistryError {
    /// `NotFound` を生成
    pub fn not_found(activity: impl Into<String>) -> Self {
        Self::NotFound {
            activity: activity.into(),
        }
    }

    /// `Conflict(AlreadySignedUp)` を生成
    pub fn already_signed_up(activity: impl Into<String>, email: impl Into<String>) -> Self {
        Self::Conflict {
            activity: activity.into(),
            email: email.into(),
            reason: ConflictReason::AlreadySignedUp,
        }
    }

    /// `Conflict(NotSignedUp)` を生成
    pub fn not_signed_up(activity: impl Into<String>, email: impl Into<String>) -> Self {
        Self::Conflict {
            activity: activity.into(),
            email: email.into(),
            reason: ConflictReason::NotSignedUp,
        }
    }

    /// Returns the error classification.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Common(CommonError::Validation(_)) => ErrorKind::Validation,
            Self::Common(_) => ErrorKind::Internal,
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::Conflict { .. } => ErrorKind::Conflict,
        }
    }

    /// Returns a safe message for external clients.
    ///
    /// Internal errors collapse to a generic message; the full error is only
    /// written to the server log.
    pub fn detail(&self) -> String {
        match self {
            Self::Common(CommonError::Validation(msg)) => msg.clone(),
            Self::Common(_) => "Internal server error".to_string(),
            Self::NotFound { .. } => "Activity not found".to_string(),
            Self::Conflict { .. } => self.to_string(),
        }
    }
}

/// Result type alias (Common)
pub type CommonResult<T> = Result<T, CommonError>;

/// Result type alias (Registry)
pub type RegistryResult<T> = Result<T, RegistryError>;
