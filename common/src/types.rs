//! 共通型定義
//!
//! Activity, ActivityCatalog等のコアデータ型

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 課外活動
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Activity {
    /// 説明文
    pub description: String,
    /// スケジュール（表示用テキスト）
    pub schedule: String,
    /// 定員（表示用。登録時には検査しない）
    pub max_participants: u32,
    /// 参加者のメールアドレス（登録順）
    #[serde(default)]
    pub participants: Vec<String>,
}

impl Activity {
    /// 新しいアクティビティを作成（参加者なし）
    pub fn new(
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: u32,
    ) -> Self {
        Self {
            description: description.into(),
            schedule: schedule.into(),
            max_participants,
            participants: Vec::new(),
        }
    }

    /// 初期参加者を設定する
    pub fn with_participants<I, S>(mut self, participants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.participants = participants.into_iter().map(Into::into).collect();
        self
    }

    /// 指定メールアドレスが参加登録済みか
    pub fn is_enrolled(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }

    /// 重複している最初の参加者を返す
    pub fn first_duplicate_participant(&self) -> Option<&str> {
        self.participants
            .iter()
            .enumerate()
            .find(|(i, p)| self.participants[..*i].contains(*p))
            .map(|(_, p)| p.as_str())
    }
}

/// アクティビティ名 → アクティビティ のマップ
///
/// `GET /activities` のレスポンスおよびシードファイルの形式と同一。
pub type ActivityCatalog = BTreeMap<String, Activity>;
