//! アクティビティレジストリ
//!
//! アクティビティの状態をメモリ内で管理する。プロセス起動時に一度だけ
//! シードされ、以降は参加者リストのみが変化する。

pub mod enrollment;
pub mod seed;

pub use enrollment::{EnrollmentAction, EnrollmentReceipt};

use mergington_activities_common::{
    error::{CommonResult, RegistryError, RegistryResult},
    types::{Activity, ActivityCatalog},
};
use std::sync::Arc;
use tokio::sync::RwLock;

/// アクティビティレジストリ
///
/// クローンしたハンドルは同じ状態を共有する。変更はレジストリ全体の
/// 書き込みロックで直列化される。
#[derive(Clone)]
pub struct ActivityRegistry {
    activities: Arc<RwLock<ActivityCatalog>>,
}

impl ActivityRegistry {
    /// 組み込みのアクティビティ一覧でレジストリを作成
    pub fn with_default_activities() -> Self {
        Self::from_trusted(seed::default_activities())
    }

    /// 任意のカタログからレジストリを作成
    ///
    /// 参加者の重複などの不変条件違反は検証エラーになる。
    pub fn from_catalog(catalog: ActivityCatalog) -> CommonResult<Self> {
        seed::validate_catalog(&catalog)?;
        Ok(Self::from_trusted(catalog))
    }

    fn from_trusted(catalog: ActivityCatalog) -> Self {
        Self {
            activities: Arc::new(RwLock::new(catalog)),
        }
    }

    /// 全アクティビティを取得
    ///
    /// 呼び出し時点の最新状態のスナップショットを返す。
    pub async fn list_activities(&self) -> ActivityCatalog {
        let activities = self.activities.read().await;
        activities.clone()
    }

    /// アクティビティを取得
    pub async fn get_activity(&self, name: &str) -> RegistryResult<Activity> {
        let activities = self.activities.read().await;
        activities
            .get(name)
            .cloned()
            .ok_or_else(|| RegistryError::not_found(name))
    }

    /// 登録されているアクティビティ数
    pub async fn len(&self) -> usize {
        self.activities.read().await.len()
    }

    /// アクティビティが一つも無いか
    pub async fn is_empty(&self) -> bool {
        self.activities.read().await.is_empty()
    }
}
