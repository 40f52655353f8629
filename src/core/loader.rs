use crate::domain::ports::DataSource;
use serde::de::DeserializeOwned;

pub const PROFILE_PATH: &str = "data/profile.json";
pub const SKILLS_PATH: &str = "data/skills.json";
pub const EXPERIENCE_PATH: &str = "data/experience.json";
pub const PROJECTS_PATH: &str = "data/projects.json";
pub const EDUCATION_PATH: &str = "data/education.json";

/// 抓取並解析單一資源；任何網路或解析失敗都記 log 並轉成 None,
/// 由下游 renderer 以「跳過該區塊」處理
pub async fn load_resource<T, D>(source: &D, path: &str) -> Option<T>
where
    T: DeserializeOwned,
    D: DataSource,
{
    match source.fetch(path).await {
        Ok(bytes) => match serde_json::from_slice::<T>(&bytes) {
            Ok(value) => {
                tracing::debug!("Loaded {} ({} bytes)", path, bytes.len());
                Some(value)
            }
            Err(e) => {
                tracing::warn!("Failed to parse {}: {}", path, e);
                None
            }
        },
        Err(e) => {
            tracing::warn!("Failed to load {}: {}", path, e);
            None
        }
    }
}
