//! The portfolio page: every section laid out as one long column of lines.
//!
//! [`build`] is shared by rendering and navigation, so section anchors always
//! match what is on screen. The hero keeps a fixed single row for the typed
//! text, which means anchors never move while the typewriter runs.

use crate::app::state::{AppState, Section};
use crate::app::visibility::RowSpan;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const MARGIN: usize = 2;
const MIN_TEXT_WIDTH: usize = 20;

pub struct Page {
    pub lines: Vec<Line<'static>>,
    anchors: Vec<(Section, RowSpan)>,
}

impl Page {
    pub fn height(&self) -> usize {
        self.lines.len()
    }

    pub fn anchor(&self, section: Section) -> Option<RowSpan> {
        self.anchors
            .iter()
            .find(|(s, _)| *s == section)
            .map(|(_, span)| *span)
    }

    pub fn section_at(&self, row: usize) -> Option<Section> {
        self.anchors
            .iter()
            .find(|(_, span)| span.contains(row))
            .map(|(s, _)| *s)
    }
}

struct Builder {
    lines: Vec<Line<'static>>,
    anchors: Vec<(Section, RowSpan)>,
    text_width: usize,
    open: Option<(Section, usize)>,
}

impl Builder {
    fn new(width: u16) -> Self {
        // one column for the scrollbar
        let text_width = (width as usize)
            .saturating_sub(MARGIN * 2 + 1)
            .max(MIN_TEXT_WIDTH);
        Self {
            lines: Vec::new(),
            anchors: Vec::new(),
            text_width,
            open: None,
        }
    }

    fn begin(&mut self, section: Section) {
        self.close();
        self.open = Some((section, self.lines.len()));
    }

    fn close(&mut self) {
        if let Some((section, start)) = self.open.take() {
            let height = self.lines.len() - start;
            self.anchors.push((section, RowSpan::new(start, height)));
        }
    }

    fn blank(&mut self) {
        self.lines.push(Line::default());
    }

    fn push(&mut self, spans: Vec<Span<'static>>) {
        let mut all = vec![Span::raw(" ".repeat(MARGIN))];
        all.extend(spans);
        self.lines.push(Line::from(all));
    }

    fn text(&mut self, text: &str, style: Style) {
        self.indented(text, style, 0);
    }

    fn indented(&mut self, text: &str, style: Style, indent: usize) {
        let width = self.text_width.saturating_sub(indent).max(1);
        for row in wrap(text, width) {
            self.push(vec![Span::raw(" ".repeat(indent)), Span::styled(row, style)]);
        }
    }

    fn heading(&mut self, title: &str, style: Style) {
        let title_width = title.width() + 2;
        let rule = self.text_width.saturating_sub(title_width + 3);
        self.push(vec![
            Span::styled("── ", Theme::rule()),
            Span::styled(format!("{} ", title), style),
            Span::styled("─".repeat(rule), Theme::rule()),
        ]);
        self.blank();
    }

    fn finish(mut self) -> Page {
        self.close();
        Page {
            lines: self.lines,
            anchors: self.anchors,
        }
    }
}

fn buttons() -> Vec<Span<'static>> {
    vec![
        Span::styled("[c]", Theme::key_hint()),
        Span::styled(" Contact Me   ", Theme::body()),
        Span::styled("[d]", Theme::key_hint()),
        Span::styled(" Download CV", Theme::body()),
    ]
}

pub fn build(state: &AppState, width: u16) -> Page {
    let cfg = &state.config;
    let mut b = Builder::new(width);

    // Hero
    b.begin(Section::Home);
    b.blank();
    b.text(&cfg.profile.greeting, Theme::heading());
    for name in &cfg.profile.name_lines {
        b.text(name, Theme::title());
    }
    b.blank();
    b.push(typed_line(state, b.text_width));
    b.blank();
    b.push(buttons());
    b.blank();
    b.blank();

    // About fades in once it has been scrolled into view
    b.begin(Section::About);
    let revealed = state.is_revealed(Section::About);
    let pick = |style: Style| if revealed { style } else { Theme::faded() };
    b.heading(&cfg.about.title, pick(Theme::heading()));
    for paragraph in &cfg.about.paragraphs {
        b.text(paragraph, pick(Theme::body()));
        b.blank();
    }
    for link in &cfg.about.links {
        b.push(vec![
            Span::styled(format!("{}  ", link.label), pick(Theme::title())),
            Span::styled(link.url.clone(), pick(Theme::link())),
        ]);
    }
    if !cfg.about.links.is_empty() {
        b.blank();
    }
    b.push(buttons());
    b.blank();

    b.begin(Section::Skills);
    b.heading("My Skills & Tech Stacks", Theme::heading());
    b.text(
        "Below are some of the tech stacks I can work with perfectly.",
        Theme::body(),
    );
    b.blank();
    let number_width = cfg.skills.len().to_string().len();
    for (i, skill) in cfg.skills.iter().enumerate() {
        b.push(vec![
            Span::styled(format!("{:>w$}  ", i + 1, w = number_width), Theme::number()),
            Span::styled(skill.clone(), Theme::title()),
        ]);
    }
    b.blank();

    b.begin(Section::Portfolio);
    b.heading("My CV", Theme::heading());
    b.text("My Specialties", Theme::title());
    b.blank();
    for (i, specialty) in cfg.specialties.iter().enumerate() {
        b.push(vec![
            Span::styled(format!("{}  ", i + 1), Theme::number()),
            Span::styled(specialty.title.clone(), Theme::title()),
        ]);
        b.indented(&specialty.text, Theme::body(), 3);
        b.blank();
    }
    b.text("My Work History", Theme::title());
    b.blank();
    for job in &cfg.work_history {
        b.text(&job.title, Theme::heading());
        if !job.location.is_empty() {
            b.text(&job.location, Theme::faded());
        }
        b.text(&job.text, Theme::body());
        b.blank();
    }
    if !cfg.education.is_empty() {
        b.text("Education", Theme::title());
        b.blank();
        for line in &cfg.education {
            b.text(line, Theme::body());
        }
        b.blank();
    }
    b.push(vec![
        Span::styled("[d]", Theme::key_hint()),
        Span::styled(" Download CV", Theme::body()),
    ]);
    b.blank();

    b.begin(Section::Contact);
    b.heading(&cfg.contact.title, Theme::heading());
    b.text(&cfg.contact.intro, Theme::body());
    b.blank();
    let label_width = cfg
        .contact
        .socials
        .iter()
        .map(|l| l.label.width())
        .chain(std::iter::once("EMAIL".len()))
        .max()
        .unwrap_or(0);
    for link in &cfg.contact.socials {
        b.push(vec![
            Span::styled(
                format!("{:<w$}  ", link.label, w = label_width),
                Theme::title(),
            ),
            Span::styled(link.url.clone(), Theme::link()),
        ]);
    }
    if !cfg.contact.email.is_empty() {
        b.push(vec![
            Span::styled(format!("{:<w$}  ", "EMAIL", w = label_width), Theme::title()),
            Span::styled(cfg.contact.email.clone(), Theme::body()),
        ]);
    }
    b.blank();

    b.finish()
}

/// The hero's typewriter row, cut to one line.
fn typed_line(state: &AppState, width: usize) -> Vec<Span<'static>> {
    let prompt = "> ";
    let cursor_on = (state.tick_count / 10) % 2 == 0;
    let room = width.saturating_sub(prompt.len() + 1);
    vec![
        Span::styled(prompt, Theme::key_hint()),
        Span::styled(truncate(&state.typed.text, room), Theme::typed_text()),
        Span::styled(if cursor_on { "▌" } else { " " }, Theme::typed_text()),
    ]
}

fn truncate(text: &str, width: usize) -> String {
    let mut used = 0;
    text.chars()
        .take_while(|c| {
            used += c.width().unwrap_or(0);
            used <= width
        })
        .collect()
}

/// Greedy word wrap by display width. Words longer than `width` are split.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();
    let mut row = String::new();
    let mut row_width = 0;

    for word in text.split_whitespace() {
        let word_width = word.width();
        if !row.is_empty() && row_width + 1 + word_width <= width {
            row.push(' ');
            row.push_str(word);
            row_width += 1 + word_width;
            continue;
        }
        if !row.is_empty() {
            rows.push(std::mem::take(&mut row));
            row_width = 0;
        }
        if word_width <= width {
            row.push_str(word);
            row_width = word_width;
            continue;
        }
        for c in word.chars() {
            let w = c.width().unwrap_or(0);
            if row_width + w > width && !row.is_empty() {
                rows.push(std::mem::take(&mut row));
                row_width = 0;
            }
            row.push(c);
            row_width += w;
        }
    }
    if !row.is_empty() || rows.is_empty() {
        rows.push(row);
    }
    rows
}

pub fn render(frame: &mut ratatui::Frame, area: Rect, state: &AppState) {
    let page = build(state, area.width);
    let height = area.height as usize;
    let max_scroll = page.height().saturating_sub(height);
    let start = state.scroll.min(max_scroll);
    let end = (start + height).min(page.height());

    let visible: Vec<Line> = page.lines[start..end].to_vec();
    frame.render_widget(Paragraph::new(visible), area);

    if max_scroll > 0 {
        let mut scrollbar_state = ScrollbarState::new(max_scroll).position(start);
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(None)
            .end_symbol(None)
            .thumb_style(Style::default().fg(Theme::ACCENT_TEAL))
            .track_style(Style::default().fg(Theme::BORDER_DIM));
        frame.render_stateful_widget(scrollbar, area, &mut scrollbar_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_wrap() {
        assert_eq!(wrap("hello world", 20), vec!["hello world"]);
        assert_eq!(wrap("hello world", 5), vec!["hello", "world"]);
        assert_eq!(wrap("a b c d", 3), vec!["a b", "c d"]);
        assert_eq!(wrap("abcdefgh", 3), vec!["abc", "def", "gh"]);
        assert_eq!(wrap("", 10), vec![""]);
        assert_eq!(wrap("  spaced   out  ", 20), vec!["spaced out"]);
    }

    #[test]
    fn test_wrap_keeps_zero_width_words() {
        assert_eq!(wrap("a \u{301}", 1), vec!["a", "\u{301}"]);
        assert_eq!(wrap("a \u{301}\u{301} b", 10), vec!["a \u{301}\u{301} b"]);
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("hello", 10), "hello");
        assert_eq!(truncate("hello", 3), "hel");
        assert_eq!(truncate("hello", 0), "");
    }

    #[test]
    fn test_sections_are_contiguous_and_ordered() {
        let state = AppState::new(AppConfig::default());
        let page = build(&state, 80);
        let mut next_start = 0;
        for section in Section::ALL {
            let span = page.anchor(section).unwrap();
            assert_eq!(span.start, next_start, "{:?}", section);
            assert!(span.height > 0);
            next_start = span.end();
        }
        assert_eq!(next_start, page.height());
    }

    #[test]
    fn test_hero_leaves_about_below_a_short_viewport() {
        let state = AppState::new(AppConfig::default());
        let page = build(&state, 80);
        assert!(page.anchor(Section::About).unwrap().start >= 10);
    }

    #[test]
    fn test_anchors_do_not_move_with_typed_text() {
        let mut state = AppState::new(AppConfig::default());
        let before = build(&state, 40).anchors;
        state.typed.text = "a very long phrase that would wrap at forty columns wide".into();
        let after = build(&state, 40).anchors;
        assert_eq!(before, after);
    }

    #[test]
    fn test_typed_text_is_shown() {
        let mut state = AppState::new(AppConfig::default());
        state.typed.text = "im a full".into();
        let page = build(&state, 80);
        assert!(page.lines.iter().any(|l| line_text(l).contains("> im a full")));
    }

    #[test]
    fn test_skills_are_numbered() {
        let state = AppState::new(AppConfig::default());
        let page = build(&state, 80);
        let texts: Vec<String> = page.lines.iter().map(line_text).collect();
        assert!(texts.iter().any(|t| t.contains(" 1  JavaScript")));
        assert!(texts.iter().any(|t| t.contains("20  Material UI")));
    }

    #[test]
    fn test_section_at() {
        let state = AppState::new(AppConfig::default());
        let page = build(&state, 80);
        assert_eq!(page.section_at(0), Some(Section::Home));
        let skills = page.anchor(Section::Skills).unwrap();
        assert_eq!(page.section_at(skills.start), Some(Section::Skills));
        assert_eq!(page.section_at(page.height()), None);
    }
}
