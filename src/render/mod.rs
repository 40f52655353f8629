//! Section renderers: pure functions from resource data to section updates.
//! Markup shapes follow the fixed page layout; all interpolated values are
//! HTML-escaped before they reach a fragment.

pub mod education;
pub mod experience;
pub mod profile;
pub mod projects;
pub mod skills;

use crate::domain::model::{RenderResult, SiteData};

/// HTML-escape a text or attribute value.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render every section whose resource is present. Absent resources are
/// recorded as skipped and leave their sections untouched.
pub fn render_all(data: &SiteData) -> RenderResult {
    let mut result = RenderResult::default();

    match &data.profile {
        Some(p) => {
            result.updates.extend(profile::hero(p));
            result.updates.extend(profile::about(p));
            result.updates.extend(profile::contact(p));
            for section in ["hero", "about", "contact"] {
                result.rendered.push(section.to_string());
            }
        }
        None => {
            for section in ["hero", "about", "contact"] {
                result.skipped.push(section.to_string());
            }
        }
    }

    match &data.skills {
        Some(s) => {
            result.updates.extend(skills::generate(s));
            result.rendered.push("skills".to_string());
        }
        None => result.skipped.push("skills".to_string()),
    }

    match &data.experience {
        Some(e) => {
            result.updates.extend(experience::generate(e));
            result.rendered.push("experience".to_string());
        }
        None => result.skipped.push("experience".to_string()),
    }

    match &data.education {
        Some(e) => {
            result.updates.extend(education::generate(e));
            result.rendered.push("education".to_string());
        }
        None => result.skipped.push("education".to_string()),
    }

    // projects.json 同時提供 projects 與 certifications 兩個區塊
    match &data.projects {
        Some(p) => {
            result.updates.extend(projects::generate(p));
            result.updates.extend(projects::certifications(p));
            result.rendered.push("projects".to_string());
            result.rendered.push("certifications".to_string());
        }
        None => {
            result.skipped.push("projects".to_string());
            result.skipped.push("certifications".to_string());
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Profile;

    #[test]
    fn test_escape_covers_markup_characters() {
        assert_eq!(
            escape(r#"<script>alert("x&y")</script>"#),
            "&lt;script&gt;alert(&quot;x&amp;y&quot;)&lt;/script&gt;"
        );
        assert_eq!(escape("plain text"), "plain text");
    }

    #[test]
    fn test_render_all_is_idempotent() {
        let data = SiteData {
            profile: Some(Profile {
                name: "A".to_string(),
                role: "B".to_string(),
                tagline: "C".to_string(),
                ..Default::default()
            }),
            ..Default::default()
        };
        assert_eq!(render_all(&data), render_all(&data));
    }

    #[test]
    fn test_render_all_skips_absent_resources() {
        let result = render_all(&SiteData::default());
        assert!(result.updates.is_empty());
        assert!(result.rendered.is_empty());
        // hero, about, contact, skills, experience, education, projects, certifications
        assert_eq!(result.skipped.len(), 8);
    }
}
