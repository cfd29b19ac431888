//! 参加登録・登録解除
//!
//! 一つのアクティビティの参加者リストに対する変更操作。どちらの操作も
//! 書き込みロック内で検査と変更を行い、失敗時は状態を一切変更しない。

use super::ActivityRegistry;
use mergington_activities_common::{
    error::{RegistryError, RegistryResult},
    protocol::MessageResponse,
};
use tracing::{debug, info};

/// 実行された操作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnrollmentAction {
    /// 参加登録
    SignedUp,
    /// 登録解除
    Unregistered,
}

/// 操作成功時の確認結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrollmentReceipt {
    /// 対象アクティビティ名
    pub activity: String,
    /// 対象メールアドレス
    pub email: String,
    /// 実行された操作
    pub action: EnrollmentAction,
    /// 操作後の参加者数
    pub participant_count: usize,
}

impl EnrollmentReceipt {
    /// クライアント向け確認メッセージ
    pub fn message(&self) -> String {
        match self.action {
            EnrollmentAction::SignedUp => {
                format!("{} signed up for {}", self.email, self.activity)
            }
            EnrollmentAction::Unregistered => {
                format!("{} unregistered from {}", self.email, self.activity)
            }
        }
    }
}

impl From<EnrollmentReceipt> for MessageResponse {
    fn from(receipt: EnrollmentReceipt) -> Self {
        MessageResponse {
            message: receipt.message(),
        }
    }
}

impl ActivityRegistry {
    /// 参加登録
    ///
    /// 定員 (`max_participants`) は検査しない。
    pub async fn signup(
        &self,
        activity_name: &str,
        email: &str,
    ) -> RegistryResult<EnrollmentReceipt> {
        let mut activities = self.activities.write().await;

        let Some(activity) = activities.get_mut(activity_name) else {
            debug!(activity = %activity_name, "Signup for unknown activity");
            return Err(RegistryError::not_found(activity_name));
        };

        if activity.is_enrolled(email) {
            debug!(activity = %activity_name, email = %email, "Duplicate signup rejected");
            return Err(RegistryError::already_signed_up(activity_name, email));
        }

        activity.participants.push(email.to_string());
        let participant_count = activity.participants.len();

        info!(
            activity = %activity_name,
            email = %email,
            participants = participant_count,
            "Participant signed up"
        );

        Ok(EnrollmentReceipt {
            activity: activity_name.to_string(),
            email: email.to_string(),
            action: EnrollmentAction::SignedUp,
            participant_count,
        })
    }

    /// 登録解除
    ///
    /// 残りの参加者の相対順序は保持する。
    pub async fn unregister(
        &self,
        activity_name: &str,
        email: &str,
    ) -> RegistryResult<EnrollmentReceipt> {
        let mut activities = self.activities.write().await;

        let Some(activity) = activities.get_mut(activity_name) else {
            debug!(activity = %activity_name, "Unregister from unknown activity");
            return Err(RegistryError::not_found(activity_name));
        };

        let Some(index) = activity.participants.iter().position(|p| p == email) else {
            debug!(
                activity = %activity_name,
                email = %email,
                "Unregister of absent participant rejected"
            );
            return Err(RegistryError::not_signed_up(activity_name, email));
        };

        activity.participants.remove(index);
        let participant_count = activity.participants.len();

        info!(
            activity = %activity_name,
            email = %email,
            participants = participant_count,
            "Participant unregistered"
        );

        Ok(EnrollmentReceipt {
            activity: activity_name.to_string(),
            email: email.to_string(),
            action: EnrollmentAction::Unregistered,
            participant_count,
        })
    }
}
