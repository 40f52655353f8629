/// 捲動判定時往下看的前置量（單位與捲動座標相同）
pub const SCROLL_LOOKAHEAD: f64 = 120.0;
/// 超過這個捲動量，導覽列切換成 scrolled 樣式
pub const NAVBAR_SCROLLED_THRESHOLD: f64 = 60.0;

#[derive(Debug, Clone, PartialEq)]
pub struct SectionSpan {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionSpan {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }
}

/// Navigation controller state: which link is active, whether the navbar is
/// in its scrolled style, and whether the mobile menu is open.
#[derive(Debug, Clone, Default)]
pub struct NavigationState {
    pub scrolled: bool,
    pub menu_open: bool,
    active: Option<String>,
}

impl NavigationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recompute state for a scroll position. A section whose span contains
    /// `scroll_y + SCROLL_LOOKAHEAD` becomes the single active link; when
    /// spans overlap the later section wins.
    pub fn on_scroll(&mut self, scroll_y: f64, sections: &[SectionSpan]) {
        self.scrolled = scroll_y > NAVBAR_SCROLLED_THRESHOLD;

        let probe = scroll_y + SCROLL_LOOKAHEAD;
        for section in sections {
            if probe >= section.top && probe < section.top + section.height {
                self.active = Some(section.id.clone());
            }
        }
    }

    pub fn active_link(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// 點擊任何導覽連結時自動收合行動選單
    pub fn on_link_click(&mut self) {
        self.menu_open = false;
    }
}

/// Build-time check: every nav anchor must point at a section id that exists
/// in the rendered page. Returns the dangling targets.
pub fn dangling_nav_targets(targets: &[String], section_ids: &[String]) -> Vec<String> {
    targets
        .iter()
        .filter(|target| !section_ids.iter().any(|id| id == *target))
        .cloned()
        .collect()
}
