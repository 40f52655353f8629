//! Project cards and certifications, both sourced from `projects.json`.

use super::escape;
use crate::domain::model::{Certification, Project, ProjectsData, SectionUpdate};

pub fn generate(data: &ProjectsData) -> Vec<SectionUpdate> {
    let cards: String = data.projects.iter().map(card).collect();

    vec![SectionUpdate::Content {
        target: "projectsGrid".to_string(),
        markup: cards,
    }]
}

fn card(project: &Project) -> String {
    // 沒有截圖就用占位圖示
    let image = match &project.screenshot {
        Some(screenshot) => format!(
            "<div class=\"project-image\"><img src=\"{}\" alt=\"{}\" loading=\"lazy\"></div>",
            escape(screenshot),
            escape(&project.name)
        ),
        None => "<div class=\"project-image-placeholder\">\
                 <i class=\"fa-solid fa-microchip\"></i>\
                 </div>"
            .to_string(),
    };

    let tech: String = project
        .tech
        .iter()
        .map(|t| format!("<span class=\"tech-badge\">{}</span>", escape(t)))
        .collect();

    let github = match &project.github {
        Some(github) => format!(
            "<a href=\"{}\" target=\"_blank\" rel=\"noopener\" class=\"project-link\"><i class=\"fa-brands fa-github\"></i> GitHub</a>",
            escape(github)
        ),
        None => String::new(),
    };

    format!(
        "<div class=\"project-card animate-on-scroll\">\
         {}\
         <div class=\"project-body\">\
         <span class=\"project-role\">{}</span>\
         <h3 class=\"project-name\">{}</h3>\
         <p class=\"project-description\">{}</p>\
         <div class=\"project-tech\">{}</div>\
         <div class=\"project-links\">{}</div>\
         </div>\
         </div>",
        image,
        escape(&project.role),
        escape(&project.name),
        escape(&project.description),
        tech,
        github
    )
}

pub fn certifications(data: &ProjectsData) -> Vec<SectionUpdate> {
    if data.certifications.is_empty() {
        return vec![SectionUpdate::Hide {
            target: "certifications".to_string(),
        }];
    }

    let cards: String = data.certifications.iter().map(cert_card).collect();

    vec![SectionUpdate::Content {
        target: "certsGrid".to_string(),
        markup: cards,
    }]
}

fn cert_card(cert: &Certification) -> String {
    format!(
        "<div class=\"cert-card animate-on-scroll\">\
         <div class=\"cert-icon\"><i class=\"fa-solid fa-award\"></i></div>\
         <h3 class=\"cert-name\">{}</h3>\
         <p class=\"cert-vendor\">{}</p>\
         <p class=\"cert-year\">{}</p>\
         </div>",
        escape(&cert.name),
        escape(&cert.vendor),
        escape(cert.year.as_deref().unwrap_or(""))
    )
}
