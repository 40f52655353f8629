use serde::{Deserialize, Deserializer, Serialize};

/// 接受 JSON 數字或字串，統一轉成顯示用字串
fn de_display_opt<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        serde_json::Value::Null => None,
        serde_json::Value::String(s) => Some(s),
        serde_json::Value::Number(n) => Some(n.to_string()),
        other => Some(other.to_string()),
    }))
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Profile {
    pub name: String,
    pub role: String,
    pub tagline: String,
    pub about: String,
    pub focus_areas: Vec<String>,
    #[serde(deserialize_with = "de_display_opt")]
    pub years_of_experience: Option<String>,
    pub availability: Option<String>,
    pub contact: Option<Contact>,
    pub cv_link: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Contact {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillsData {
    pub categories: Vec<SkillCategory>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillCategory {
    pub icon: String,
    pub title: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperienceData {
    pub experiences: Vec<ExperienceEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperienceEntry {
    pub company: String,
    pub period: String,
    pub role: String,
    pub contributions: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EducationData {
    pub education: Vec<EducationEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EducationEntry {
    pub degree: String,
    pub field: String,
    pub institution: String,
    pub period: String,
    #[serde(deserialize_with = "de_display_opt")]
    pub gpa: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectsData {
    pub projects: Vec<Project>,
    pub certifications: Vec<Certification>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    pub name: String,
    pub role: String,
    pub description: String,
    pub tech: Vec<String>,
    pub screenshot: Option<String>,
    pub github: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Certification {
    pub name: String,
    pub vendor: String,
    #[serde(deserialize_with = "de_display_opt")]
    pub year: Option<String>,
}

/// Extract 階段的結果：五個資源各自獨立，抓取失敗以 None 表示
#[derive(Debug, Clone, Default)]
pub struct SiteData {
    pub profile: Option<Profile>,
    pub skills: Option<SkillsData>,
    pub experience: Option<ExperienceData>,
    pub education: Option<EducationData>,
    pub projects: Option<ProjectsData>,
}

/// 對頁面模板的一次變更，由 renderer 產生、由 Document 套用
#[derive(Debug, Clone, PartialEq)]
pub enum SectionUpdate {
    /// Replace the `<title>` element text.
    Title(String),
    /// Replace an element's content with escaped plain text.
    Text { target: String, text: String },
    /// Replace an element's content with pre-built markup.
    Content { target: String, markup: String },
    /// Set an attribute on an element's opening tag.
    Attr {
        target: String,
        name: String,
        value: String,
    },
    /// Hide the whole element (section with no data).
    Hide { target: String },
}

impl SectionUpdate {
    pub fn target(&self) -> Option<&str> {
        match self {
            SectionUpdate::Title(_) => None,
            SectionUpdate::Text { target, .. }
            | SectionUpdate::Content { target, .. }
            | SectionUpdate::Attr { target, .. }
            | SectionUpdate::Hide { target } => Some(target),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderResult {
    pub updates: Vec<SectionUpdate>,
    /// Section names that produced updates.
    pub rendered: Vec<String>,
    /// Section names skipped because their resource was absent.
    pub skipped: Vec<String>,
}
