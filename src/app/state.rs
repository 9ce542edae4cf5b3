use crate::app::visibility::{RowSpan, SectionWatch};
use crate::config::AppConfig;
use crate::typewriter::Frame;
use crate::ui::page::{self, Page};
use std::collections::BTreeSet;

/// Page sections, in nav bar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Section {
    Home,
    About,
    Skills,
    Portfolio,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::About,
        Section::Skills,
        Section::Portfolio,
        Section::Contact,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Skills => "Skills",
            Section::Portfolio => "Portfolio",
            Section::Contact => "Contact",
        }
    }

    pub fn index(self) -> usize {
        Section::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }

    /// Section for a `1`-based nav key.
    pub fn from_digit(c: char) -> Option<Section> {
        let n = c.to_digit(10)? as usize;
        Section::ALL.get(n.checked_sub(1)?).copied()
    }

    pub fn next(self) -> Section {
        Section::ALL[(self.index() + 1) % Section::ALL.len()]
    }

    pub fn prev(self) -> Section {
        Section::ALL[(self.index() + Section::ALL.len() - 1) % Section::ALL.len()]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum StatusKind {
    Info,
    Error,
}

#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub kind: StatusKind,
}

#[derive(Debug)]
pub struct AppState {
    pub config: AppConfig,
    /// Latest typewriter frame for the hero line.
    pub typed: Frame,
    /// Top row of the page currently shown.
    pub scroll: usize,
    /// Where a nav jump is heading; cleared on arrival or manual scroll.
    pub scroll_target: Option<usize>,
    /// Size of the page area (excludes nav and status bars).
    pub viewport_width: u16,
    pub viewport_height: u16,
    pub watches: Vec<SectionWatch>,
    pub revealed: BTreeSet<Section>,
    pub status: Option<StatusMessage>,
    pub tick_count: u64,
    pub dirty: bool,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let watches = vec![SectionWatch::new(
            Section::About,
            config.ui.fade_threshold,
            config.ui.fade_bottom_margin as usize,
        )];
        Self {
            config,
            typed: Frame::default(),
            scroll: 0,
            scroll_target: None,
            viewport_width: 80,
            viewport_height: 24,
            watches,
            revealed: BTreeSet::new(),
            status: None,
            tick_count: 0,
            dirty: true,
            should_quit: false,
        }
    }

    pub fn page(&self) -> Page {
        page::build(self, self.viewport_width)
    }

    pub fn is_revealed(&self, section: Section) -> bool {
        // sections without a watch never fade
        self.revealed.contains(&section) || !self.watches.iter().any(|w| w.section == section)
    }

    pub fn set_viewport(&mut self, width: u16, height: u16) {
        self.viewport_width = width;
        self.viewport_height = height;
        self.clamp_scroll();
        self.check_visibility();
        self.dirty = true;
    }

    pub fn max_scroll(&self) -> usize {
        self.page()
            .height()
            .saturating_sub(self.viewport_height as usize)
    }

    fn clamp_scroll(&mut self) {
        let max = self.max_scroll();
        self.scroll = self.scroll.min(max);
        if let Some(target) = self.scroll_target.as_mut() {
            *target = (*target).min(max);
        }
    }

    /// Scroll by `delta` rows, cancelling any running nav jump.
    pub fn scroll_by(&mut self, delta: isize) {
        self.scroll_target = None;
        let next = self.scroll.saturating_add_signed(delta).min(self.max_scroll());
        self.set_scroll(next);
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll_target = None;
        self.set_scroll(0);
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll_target = None;
        let max = self.max_scroll();
        self.set_scroll(max);
    }

    fn set_scroll(&mut self, row: usize) {
        if row != self.scroll {
            self.scroll = row;
            self.dirty = true;
            self.check_visibility();
        }
    }

    /// Start a smooth scroll toward `section`.
    pub fn jump_to(&mut self, section: Section) {
        let page = self.page();
        let Some(anchor) = page.anchor(section) else {
            return;
        };
        let max = page.height().saturating_sub(self.viewport_height as usize);
        let target = anchor.start.min(max);
        tracing::debug!(?section, target, "jump");
        self.scroll_target = (target != self.scroll).then_some(target);
        self.dirty = true;
    }

    /// Move one step toward the scroll target. Returns whether anything moved.
    pub fn step_scroll(&mut self) -> bool {
        let Some(target) = self.scroll_target else {
            return false;
        };
        let next = smooth_step(self.scroll, target);
        if next == target {
            self.scroll_target = None;
        }
        let moved = next != self.scroll;
        self.set_scroll(next);
        moved
    }

    /// The section under the top of the viewport, or the last one when the
    /// page is scrolled to the bottom.
    pub fn current_section(&self) -> Section {
        let page = self.page();
        let max = page.height().saturating_sub(self.viewport_height as usize);
        if max > 0 && self.scroll >= max {
            return Section::Contact;
        }
        page.section_at(self.scroll).unwrap_or(Section::Home)
    }

    /// Evaluate pending watches; fired ones are released.
    pub fn check_visibility(&mut self) {
        if self.watches.is_empty() {
            return;
        }
        let page = self.page();
        let viewport = RowSpan::new(self.scroll, self.viewport_height as usize);
        let mut fired = Vec::new();
        self.watches.retain_mut(|watch| {
            let Some(anchor) = page.anchor(watch.section) else {
                return true;
            };
            watch.observe(anchor, viewport);
            if watch.fired() {
                fired.push(watch.section);
            }
            !watch.fired()
        });
        for section in fired {
            tracing::debug!(?section, "section revealed");
            self.revealed.insert(section);
            self.dirty = true;
        }
    }

    pub fn info(&mut self, text: impl Into<String>) {
        self.status = Some(StatusMessage {
            text: text.into(),
            kind: StatusKind::Info,
        });
        self.dirty = true;
    }

    pub fn error(&mut self, text: impl Into<String>) {
        self.status = Some(StatusMessage {
            text: text.into(),
            kind: StatusKind::Error,
        });
        self.dirty = true;
    }
}

/// Next scroll row when easing from `from` toward `to`: a quarter of the
/// remaining distance, at least one row.
pub fn smooth_step(from: usize, to: usize) -> usize {
    let distance = from.abs_diff(to);
    let step = distance.div_ceil(4);
    if to > from {
        from + step
    } else {
        from - step
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(height: u16) -> AppState {
        let mut state = AppState::new(AppConfig::default());
        state.set_viewport(80, height);
        state
    }

    #[test]
    fn test_section_navigation_order() {
        assert_eq!(Section::Home.next(), Section::About);
        assert_eq!(Section::Contact.next(), Section::Home);
        assert_eq!(Section::Home.prev(), Section::Contact);
        assert_eq!(Section::from_digit('1'), Some(Section::Home));
        assert_eq!(Section::from_digit('5'), Some(Section::Contact));
        assert_eq!(Section::from_digit('0'), None);
        assert_eq!(Section::from_digit('6'), None);
    }

    #[test]
    fn test_smooth_step_converges() {
        assert_eq!(smooth_step(0, 0), 0);
        assert_eq!(smooth_step(0, 1), 1);
        assert_eq!(smooth_step(0, 40), 10);
        assert_eq!(smooth_step(40, 0), 30);

        let mut row = 0;
        let mut steps = 0;
        while row != 97 {
            row = smooth_step(row, 97);
            steps += 1;
            assert!(steps < 100);
        }
    }

    #[test]
    fn test_jump_scrolls_smoothly_to_anchor() {
        let mut state = state(10);
        let target = state.page().anchor(Section::Skills).unwrap().start;
        state.jump_to(Section::Skills);
        assert_eq!(state.scroll_target, Some(target));

        assert!(state.step_scroll());
        assert!(state.scroll > 0 && state.scroll < target);
        while state.step_scroll() {}
        assert_eq!(state.scroll, target);
        assert_eq!(state.scroll_target, None);
        assert_eq!(state.current_section(), Section::Skills);
    }

    #[test]
    fn test_manual_scroll_cancels_jump() {
        let mut state = state(10);
        state.jump_to(Section::Contact);
        state.step_scroll();
        state.scroll_by(-1);
        assert_eq!(state.scroll_target, None);
    }

    #[test]
    fn test_scroll_is_clamped() {
        let mut state = state(10);
        state.scroll_by(-5);
        assert_eq!(state.scroll, 0);
        state.scroll_by(100_000);
        assert_eq!(state.scroll, state.max_scroll());
        assert_eq!(state.current_section(), Section::Contact);
    }

    #[test]
    fn test_about_reveals_once_scrolled_into_view() {
        let mut state = state(10);
        assert!(!state.is_revealed(Section::About));
        assert!(state.is_revealed(Section::Skills));

        state.jump_to(Section::About);
        while state.step_scroll() {}
        assert!(state.is_revealed(Section::About));
        assert!(state.watches.is_empty());

        state.scroll_to_top();
        assert!(state.is_revealed(Section::About));
    }

    #[test]
    fn test_tall_viewport_reveals_immediately() {
        let state = state(500);
        assert!(state.is_revealed(Section::About));
    }
}
