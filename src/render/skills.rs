use super::escape;
use crate::domain::model::{SectionUpdate, SkillCategory, SkillsData};

pub fn generate(data: &SkillsData) -> Vec<SectionUpdate> {
    let cards: String = data.categories.iter().map(card).collect();

    vec![SectionUpdate::Content {
        target: "skillsGrid".to_string(),
        markup: cards,
    }]
}

fn card(category: &SkillCategory) -> String {
    let tags: String = category
        .skills
        .iter()
        .map(|skill| format!("<span class=\"skill-tag\">{}</span>", escape(skill)))
        .collect();

    format!(
        "<div class=\"skill-card animate-on-scroll\">\
         <div class=\"skill-card-header\">\
         <div class=\"skill-card-icon\"><i class=\"{}\"></i></div>\
         <h3 class=\"skill-card-title\">{}</h3>\
         </div>\
         <div class=\"skill-tags\">{}</div>\
         </div>",
        escape(&category.icon),
        escape(&category.title),
        tags
    )
}
