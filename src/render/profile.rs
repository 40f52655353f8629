//! Hero, about and contact sections, all driven by `profile.json`.

use super::escape;
use crate::domain::model::{Profile, SectionUpdate};

pub fn hero(profile: &Profile) -> Vec<SectionUpdate> {
    let mut updates = vec![
        SectionUpdate::Text {
            target: "heroName".to_string(),
            text: profile.name.clone(),
        },
        SectionUpdate::Text {
            target: "heroRole".to_string(),
            text: profile.role.clone(),
        },
        SectionUpdate::Text {
            target: "heroTagline".to_string(),
            text: profile.tagline.clone(),
        },
    ];

    // cvLink 缺席時不動 downloadCv 的 href
    if let Some(cv) = &profile.cv_link {
        updates.push(SectionUpdate::Attr {
            target: "downloadCv".to_string(),
            name: "href".to_string(),
            value: cv.clone(),
        });
    }

    updates.push(SectionUpdate::Title(format!(
        "{} — {} Portfolio",
        profile.name, profile.role
    )));

    updates
}

pub fn about(profile: &Profile) -> Vec<SectionUpdate> {
    let mut html = format!("<p>{}</p>", escape(&profile.about));

    if !profile.focus_areas.is_empty() {
        html.push_str("<div class=\"focus-areas\">");
        for area in &profile.focus_areas {
            html.push_str(&format!(
                "<span class=\"focus-tag\"><i class=\"fa-solid fa-check\"></i>{}</span>",
                escape(area)
            ));
        }
        html.push_str("</div>");
    }

    let mut updates = vec![SectionUpdate::Content {
        target: "aboutText".to_string(),
        markup: html,
    }];

    if let Some(years) = &profile.years_of_experience {
        updates.push(SectionUpdate::Text {
            target: "statYears".to_string(),
            text: years.clone(),
        });
    }

    updates
}

pub fn contact(profile: &Profile) -> Vec<SectionUpdate> {
    let mut updates = Vec::new();

    if let Some(availability) = &profile.availability {
        updates.push(SectionUpdate::Text {
            target: "contactAvailability".to_string(),
            text: availability.clone(),
        });
    }

    let Some(contact) = &profile.contact else {
        // 沒有聯絡資料就完全不動 contactLinks
        return updates;
    };

    if let Some(email) = &contact.email {
        updates.push(SectionUpdate::Attr {
            target: "contactEmail".to_string(),
            name: "href".to_string(),
            value: format!("mailto:{}", email),
        });
    }

    let mut links = Vec::new();

    if let Some(email) = &contact.email {
        links.push(format!(
            "<a href=\"mailto:{0}\" class=\"contact-link-item\"><i class=\"fa-solid fa-envelope\"></i> {0}</a>",
            escape(email)
        ));
    }
    if let Some(phone) = &contact.phone {
        // WhatsApp 連結要去掉國碼前的 +
        let wa_number = phone.replace('+', "");
        links.push(format!(
            "<a href=\"https://wa.me/{}\" target=\"_blank\" rel=\"noopener\" class=\"contact-link-item\"><i class=\"fa-brands fa-whatsapp\"></i> {}</a>",
            escape(&wa_number),
            escape(phone)
        ));
    }
    if let Some(location) = &contact.location {
        links.push(format!(
            "<span class=\"contact-link-item\"><i class=\"fa-solid fa-location-dot\"></i> {}</span>",
            escape(location)
        ));
    }
    if let Some(linkedin) = &contact.linkedin {
        links.push(format!(
            "<a href=\"{}\" target=\"_blank\" rel=\"noopener\" class=\"contact-link-item\"><i class=\"fa-brands fa-linkedin\"></i> LinkedIn</a>",
            escape(linkedin)
        ));
    }
    if let Some(github) = &contact.github {
        links.push(format!(
            "<a href=\"{}\" target=\"_blank\" rel=\"noopener\" class=\"contact-link-item\"><i class=\"fa-brands fa-github\"></i> GitHub</a>",
            escape(github)
        ));
    }

    updates.push(SectionUpdate::Content {
        target: "contactLinks".to_string(),
        markup: links.join(""),
    });

    updates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Contact;

    fn minimal_profile() -> Profile {
        Profile {
            name: "A".to_string(),
            role: "B".to_string(),
            tagline: "C".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_hero_sets_texts_and_title() {
        let updates = hero(&minimal_profile());

        assert!(updates.contains(&SectionUpdate::Text {
            target: "heroName".to_string(),
            text: "A".to_string()
        }));
        assert!(updates.contains(&SectionUpdate::Text {
            target: "heroRole".to_string(),
            text: "B".to_string()
        }));
        assert!(updates.contains(&SectionUpdate::Text {
            target: "heroTagline".to_string(),
            text: "C".to_string()
        }));
        assert!(updates.contains(&SectionUpdate::Title("A — B Portfolio".to_string())));
    }

    #[test]
    fn test_hero_without_cv_link_leaves_download_button_alone() {
        let updates = hero(&minimal_profile());
        assert!(!updates
            .iter()
            .any(|u| u.target() == Some("downloadCv")));

        let mut profile = minimal_profile();
        profile.cv_link = Some("cv.pdf".to_string());
        let updates = hero(&profile);
        assert!(updates.contains(&SectionUpdate::Attr {
            target: "downloadCv".to_string(),
            name: "href".to_string(),
            value: "cv.pdf".to_string()
        }));
    }

    #[test]
    fn test_about_escapes_text_and_renders_focus_tags() {
        let mut profile = minimal_profile();
        profile.about = "I build <fast> systems".to_string();
        profile.focus_areas = vec!["Backend".to_string(), "Infra".to_string()];

        let updates = about(&profile);
        let SectionUpdate::Content { markup, .. } = &updates[0] else {
            panic!("expected content update");
        };
        assert!(markup.contains("<p>I build &lt;fast&gt; systems</p>"));
        assert_eq!(markup.matches("focus-tag").count(), 2);
        assert!(markup.contains("Backend"));
    }

    #[test]
    fn test_about_without_focus_areas_has_no_tag_container() {
        let mut profile = minimal_profile();
        profile.about = "text".to_string();
        let updates = about(&profile);
        let SectionUpdate::Content { markup, .. } = &updates[0] else {
            panic!("expected content update");
        };
        assert!(!markup.contains("focus-areas"));
    }

    #[test]
    fn test_contact_without_contact_data_leaves_links_untouched() {
        let updates = contact(&minimal_profile());
        assert!(!updates.iter().any(|u| u.target() == Some("contactLinks")));
    }

    #[test]
    fn test_contact_renders_present_channels_only() {
        let mut profile = minimal_profile();
        profile.availability = Some("Open to work".to_string());
        profile.contact = Some(Contact {
            email: Some("a@example.com".to_string()),
            phone: Some("+15551234".to_string()),
            location: None,
            linkedin: None,
            github: Some("https://github.com/a".to_string()),
        });

        let updates = contact(&profile);

        assert!(updates.contains(&SectionUpdate::Text {
            target: "contactAvailability".to_string(),
            text: "Open to work".to_string()
        }));
        assert!(updates.contains(&SectionUpdate::Attr {
            target: "contactEmail".to_string(),
            name: "href".to_string(),
            value: "mailto:a@example.com".to_string()
        }));

        let markup = updates
            .iter()
            .find_map(|u| match u {
                SectionUpdate::Content { target, markup } if target == "contactLinks" => {
                    Some(markup)
                }
                _ => None,
            })
            .unwrap();
        assert!(markup.contains("mailto:a@example.com"));
        assert!(markup.contains("https://wa.me/15551234"));
        assert!(markup.contains("github.com/a"));
        assert!(!markup.contains("location-dot"));
        assert!(!markup.contains("LinkedIn"));
    }
}
