//! 通信プロトコル定義
//!
//! HTTP境界で受け渡すリクエスト/レスポンスメッセージ

use serde::{Deserialize, Serialize};

use crate::error::{CommonError, CommonResult};

/// signup/unregister のクエリパラメータ (`?email=...`)
///
/// 欠落を検証エラーとして扱うため `Option` で受け取る。
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct EnrollmentParams {
    /// 参加者のメールアドレス
    #[serde(default)]
    pub email: Option<String>,
}

impl EnrollmentParams {
    /// デコード済みのクエリペアから組み立てる
    ///
    /// `email` が複数回現れた場合は最後の値を採用する。
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let email = pairs
            .into_iter()
            .filter_map(|(key, value)| {
                let key: &str = key.as_ref();
                (key == "email").then(|| value.into())
            })
            .last();
        Self { email }
    }

    /// パスのアクティビティ名と組み合わせて検証済み入力へ変換する
    ///
    /// メールアドレスの形式は検査せず、空でない文字列であれば受け付ける。
    pub fn into_enrollment(
        self,
        activity_name: impl Into<String>,
    ) -> CommonResult<Enrollment> {
        match self.email {
            Some(email) if !email.is_empty() => Ok(Enrollment {
                activity_name: activity_name.into(),
                email,
            }),
            _ => Err(CommonError::Validation(
                "email query parameter is required".to_string(),
            )),
        }
    }
}

/// 検証済みの登録/解除入力
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enrollment {
    /// アクティビティ名（パスセグメントそのまま）
    pub activity_name: String,
    /// 参加者のメールアドレス
    pub email: String,
}

/// 成功レスポンス (`{"message": "..."}`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageResponse {
    /// 確認メッセージ
    pub message: String,
}

/// エラーレスポンス (`{"detail": "..."}`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    /// クライアント向けエラー詳細
    pub detail: String,
}
