use super::escape;
use crate::domain::model::{EducationData, EducationEntry, SectionUpdate};

pub fn generate(data: &EducationData) -> Vec<SectionUpdate> {
    // 沒有學歷資料時整個區塊隱藏，不渲染空的格線
    if data.education.is_empty() {
        return vec![SectionUpdate::Hide {
            target: "education".to_string(),
        }];
    }

    let cards: String = data.education.iter().map(card).collect();

    vec![SectionUpdate::Content {
        target: "educationGrid".to_string(),
        markup: cards,
    }]
}

fn card(entry: &EducationEntry) -> String {
    let gpa = match &entry.gpa {
        Some(gpa) => format!(
            "<p class=\"education-gpa\"><i class=\"fa-solid fa-star\"></i> GPA: {}</p>",
            escape(gpa)
        ),
        None => String::new(),
    };

    format!(
        "<div class=\"education-card animate-on-scroll\">\
         <div class=\"education-icon\"><i class=\"fa-solid fa-graduation-cap\"></i></div>\
         <div class=\"education-body\">\
         <div class=\"education-header\">\
         <h3 class=\"education-degree\">{}</h3>\
         <span class=\"education-period\">{}</span>\
         </div>\
         <p class=\"education-field\">{}</p>\
         <p class=\"education-institution\"><i class=\"fa-solid fa-building-columns\"></i> {}</p>\
         {}\
         </div>\
         </div>",
        escape(&entry.degree),
        escape(&entry.period),
        escape(&entry.field),
        escape(&entry.institution),
        gpa
    )
}
