//! シードデータ
//!
//! 組み込みのアクティビティ一覧と、JSONシードファイルの読み込み。

use mergington_activities_common::{
    error::{CommonError, CommonResult},
    types::{Activity, ActivityCatalog},
};
use std::path::Path;
use tracing::info;

/// 組み込みのアクティビティ一覧（9件）
pub fn default_activities() -> ActivityCatalog {
    [
        (
            "Soccer Team",
            Activity::new(
                "Team practices and competitive soccer matches",
                "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
                22,
            )
            .with_participants(["liam@mergington.edu", "ava@mergington.edu"]),
        ),
        (
            "Swimming Club",
            Activity::new(
                "Swim training and local meet preparation",
                "Wednesdays and Fridays, 3:00 PM - 4:30 PM",
                18,
            )
            .with_participants(["noah@mergington.edu", "mia@mergington.edu"]),
        ),
        (
            "Art Studio",
            Activity::new(
                "Explore drawing, painting, and mixed media projects",
                "Mondays, 3:30 PM - 5:00 PM",
                16,
            )
            .with_participants(["ella@mergington.edu", "lucas@mergington.edu"]),
        ),
        (
            "Drama Club",
            Activity::new(
                "Acting workshops and school theater productions",
                "Thursdays, 4:00 PM - 5:30 PM",
                20,
            )
            .with_participants(["grace@mergington.edu", "henry@mergington.edu"]),
        ),
        (
            "Math Olympiad",
            Activity::new(
                "Advanced problem solving and competition preparation",
                "Wednesdays, 3:30 PM - 5:00 PM",
                15,
            )
            .with_participants(["zoe@mergington.edu", "ethan@mergington.edu"]),
        ),
        (
            "Science Club",
            Activity::new(
                "Hands-on experiments and science fair projects",
                "Tuesdays, 3:30 PM - 5:00 PM",
                18,
            )
            .with_participants(["isabella@mergington.edu", "jack@mergington.edu"]),
        ),
        (
            "Chess Club",
            Activity::new(
                "Learn strategies and compete in chess tournaments",
                "Fridays, 3:30 PM - 5:00 PM",
                12,
            )
            .with_participants(["michael@mergington.edu", "daniel@mergington.edu"]),
        ),
        (
            "Programming Class",
            Activity::new(
                "Learn programming fundamentals and build software projects",
                "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
                20,
            )
            .with_participants(["emma@mergington.edu", "sophia@mergington.edu"]),
        ),
        (
            "Gym Class",
            Activity::new(
                "Physical education and sports activities",
                "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
                30,
            )
            .with_participants(["john@mergington.edu", "olivia@mergington.edu"]),
        ),
    ]
    .into_iter()
    .map(|(name, activity)| (name.to_string(), activity))
    .collect()
}

/// カタログの不変条件を検証
///
/// - アクティビティが1件以上あること
/// - アクティビティ名が空でないこと
/// - 各アクティビティ内で参加者が重複しないこと
pub fn validate_catalog(catalog: &ActivityCatalog) -> CommonResult<()> {
    if catalog.is_empty() {
        return Err(CommonError::Validation(
            "catalog contains no activities".to_string(),
        ));
    }

    for (name, activity) in catalog {
        if name.trim().is_empty() {
            return Err(CommonError::Validation(
                "activity name must not be empty".to_string(),
            ));
        }
        if let Some(email) = activity.first_duplicate_participant() {
            return Err(CommonError::Validation(format!(
                "{email} is listed more than once in {name}"
            )));
        }
    }

    Ok(())
}

/// JSONシードファイルを読み込む
///
/// 形式は `GET /activities` のレスポンスと同一。不変条件の検証は
/// `ActivityRegistry::from_catalog` が行う。
pub fn load_seed_file(path: &Path) -> CommonResult<ActivityCatalog> {
    let contents = std::fs::read_to_string(path)?;
    let catalog: ActivityCatalog = serde_json::from_str(&contents)?;

    info!(
        path = %path.display(),
        activities = catalog.len(),
        "Loaded activity seed file"
    );
    Ok(catalog)
}

/// シードファイル指定があれば読み込み、無ければ組み込み一覧を返す
pub fn load_catalog(seed_file: Option<&Path>) -> CommonResult<ActivityCatalog> {
    match seed_file {
        Some(path) => load_seed_file(path),
        None => Ok(default_activities()),
    }
}
