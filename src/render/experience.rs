use super::escape;
use crate::domain::model::{ExperienceData, ExperienceEntry, SectionUpdate};

pub fn generate(data: &ExperienceData) -> Vec<SectionUpdate> {
    let items: String = data.experiences.iter().map(timeline_item).collect();

    vec![SectionUpdate::Content {
        target: "timeline".to_string(),
        markup: items,
    }]
}

fn timeline_item(entry: &ExperienceEntry) -> String {
    let contributions: String = entry
        .contributions
        .iter()
        .map(|c| format!("<li>{}</li>", escape(c)))
        .collect();

    format!(
        "<div class=\"timeline-item animate-on-scroll\">\
         <div class=\"timeline-dot\"></div>\
         <div class=\"timeline-card\">\
         <div class=\"timeline-header\">\
         <span class=\"timeline-company\">{}</span>\
         <span class=\"timeline-period\">{}</span>\
         </div>\
         <p class=\"timeline-role\">{}</p>\
         <ul class=\"timeline-contributions\">{}</ul>\
         </div>\
         </div>",
        escape(&entry.company),
        escape(&entry.period),
        escape(&entry.role),
        contributions
    )
}
