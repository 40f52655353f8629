use crate::domain::model::SectionUpdate;
use crate::render::escape;
use crate::utils::error::{Result, SiteError};
use regex::Regex;

/// 模板中不會作為插入點的 void 元素
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// The page template plus the insertion-point contract: elements are located
/// by their `id` attribute and mutated in place. Every mutator returns
/// whether the target existed; a missing insertion point is a no-op.
#[derive(Debug, Clone)]
pub struct Document {
    html: String,
}

struct OpenTag {
    name: String,
    start: usize,
    end: usize,
}

impl Document {
    pub fn parse(html: &str) -> Result<Self> {
        if html.trim().is_empty() {
            return Err(SiteError::TemplateError {
                message: "template is empty".to_string(),
            });
        }
        Ok(Self {
            html: html.to_string(),
        })
    }

    pub fn html(&self) -> &str {
        &self.html
    }

    pub fn into_html(self) -> String {
        self.html
    }

    /// Apply one section update. Text and title values are escaped here;
    /// content markup is taken as-is (renderers escape their interpolations).
    pub fn apply(&mut self, update: &SectionUpdate) -> bool {
        match update {
            SectionUpdate::Title(title) => self.set_title(title),
            SectionUpdate::Text { target, text } => self.set_content(target, &escape(text)),
            SectionUpdate::Content { target, markup } => self.set_content(target, markup),
            SectionUpdate::Attr {
                target,
                name,
                value,
            } => self.set_attr(target, name, value),
            SectionUpdate::Hide { target } => self.hide(target),
        }
    }

    /// Replace the content of the element with the given id.
    pub fn set_content(&mut self, id: &str, markup: &str) -> bool {
        let Some(open) = self.find_open_tag(id) else {
            return false;
        };

        if VOID_ELEMENTS.contains(&open.name.as_str()) {
            return false;
        }

        let Some(content_end) = self.find_content_end(&open.name, open.end) else {
            return false;
        };

        self.html.replace_range(open.end..content_end, markup);
        true
    }

    /// Set an attribute on the element's opening tag, replacing an existing
    /// value or appending the attribute.
    pub fn set_attr(&mut self, id: &str, name: &str, value: &str) -> bool {
        let Some(open) = self.find_open_tag(id) else {
            return false;
        };

        let tag = self.html[open.start..open.end].to_string();
        let attr_re = Regex::new(&format!(r#"\b{}\s*=\s*"[^"]*""#, regex::escape(name))).unwrap();
        let replacement = format!("{}=\"{}\"", name, escape(value));

        let new_tag = if attr_re.is_match(&tag) {
            attr_re
                .replace(&tag, regex::NoExpand(replacement.as_str()))
                .into_owned()
        } else {
            let insert_at = if tag.ends_with("/>") {
                tag.len() - 2
            } else {
                tag.len() - 1
            };
            let mut t = tag.clone();
            t.insert_str(insert_at, &format!(" {}", replacement));
            t
        };

        self.html.replace_range(open.start..open.end, &new_tag);
        true
    }

    /// Hide the whole element (used for sections with no data).
    pub fn hide(&mut self, id: &str) -> bool {
        self.set_attr(id, "style", "display:none")
    }

    /// Replace the `<title>` element text.
    pub fn set_title(&mut self, title: &str) -> bool {
        let re = Regex::new(r"(?s)<title[^>]*>.*?</title>").unwrap();
        let Some(m) = re.find(&self.html) else {
            return false;
        };
        let range = m.range();
        self.html
            .replace_range(range, &format!("<title>{}</title>", escape(title)));
        true
    }

    pub fn contains(&self, id: &str) -> bool {
        self.find_open_tag(id).is_some()
    }

    /// All element ids present in the page.
    pub fn ids(&self) -> Vec<String> {
        let re = Regex::new(r#"\bid\s*=\s*"([^"]+)""#).unwrap();
        re.captures_iter(&self.html)
            .map(|c| c[1].to_string())
            .collect()
    }

    /// Anchor targets of `.nav-link` elements (`href="#section"`).
    pub fn nav_targets(&self) -> Vec<String> {
        let anchor_re = Regex::new(r"<a\b[^>]*>").unwrap();
        let href_re = Regex::new(r##"href\s*=\s*"#([^"]+)""##).unwrap();

        anchor_re
            .find_iter(&self.html)
            .filter(|m| m.as_str().contains("nav-link"))
            .filter_map(|m| href_re.captures(m.as_str()).map(|c| c[1].to_string()))
            .collect()
    }

    /// Positional keys for every element tagged for reveal animation.
    pub fn reveal_keys(&self) -> Vec<String> {
        let re = Regex::new(r#"class\s*=\s*"[^"]*animate-on-scroll[^"]*""#).unwrap();
        (0..re.find_iter(&self.html).count())
            .map(|i| format!("reveal-{}", i))
            .collect()
    }

    fn find_open_tag(&self, id: &str) -> Option<OpenTag> {
        let re = Regex::new(&format!(
            r#"<([a-zA-Z][a-zA-Z0-9-]*)\b[^>]*\bid\s*=\s*"{}"[^>]*>"#,
            regex::escape(id)
        ))
        .unwrap();

        let caps = re.captures(&self.html)?;
        let m = caps.get(0)?;
        Some(OpenTag {
            name: caps[1].to_ascii_lowercase(),
            start: m.start(),
            end: m.end(),
        })
    }

    /// Find where the element's content ends, honoring nested same-name tags.
    fn find_content_end(&self, tag: &str, from: usize) -> Option<usize> {
        let re = Regex::new(&format!(r"<(/?){}(\s[^>]*)?>", regex::escape(tag))).unwrap();

        let mut depth = 1usize;
        for m in re.find_iter(&self.html[from..]) {
            let text = m.as_str();
            if text.starts_with("</") {
                depth -= 1;
                if depth == 0 {
                    return Some(from + m.start());
                }
            } else if !text.ends_with("/>") {
                depth += 1;
            }
        }
        None
    }
}
