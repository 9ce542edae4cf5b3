use crate::app::state::*;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

const HINTS: &str = "Tab/1-5 sections  j/k scroll  c contact  d download CV  q quit";

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut parts: Vec<Span> = Vec::new();

    match &state.status {
        Some(msg) if msg.kind == StatusKind::Error => {
            parts.push(Span::styled(format!(" {} ", msg.text), Theme::status_error()));
        }
        Some(msg) => {
            parts.push(Span::styled(format!(" {} ", msg.text), Theme::status_bar()));
        }
        None => {
            parts.push(Span::styled(format!(" {} ", HINTS), Theme::status_bar()));
        }
    }

    // Scroll position
    let max = state.max_scroll();
    let position = if max == 0 {
        "All".to_string()
    } else {
        format!("{}%", state.scroll.min(max) * 100 / max)
    };
    let used: usize = parts.iter().map(|s| s.width()).sum();
    let remaining = (area.width as usize).saturating_sub(used + position.len() + 3);
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
    parts.push(Span::styled(
        format!(" {} ", position),
        Style::default().fg(Theme::ACCENT_TEAL).bg(Theme::BG_ELEVATED),
    ));

    let paragraph = Paragraph::new(Line::from(parts));
    frame.render_widget(paragraph, area);
}
