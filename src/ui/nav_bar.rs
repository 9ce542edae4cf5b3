use crate::app::state::{AppState, Section};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let current = state.current_section();
    let mut parts: Vec<Span> = vec![Span::styled(
        format!(" {} ", state.config.profile.logo),
        Theme::nav_logo(),
    )];
    parts.push(Span::styled(" │ ", Theme::nav_bar()));

    for (i, section) in Section::ALL.iter().enumerate() {
        let style = if *section == current {
            Theme::nav_active()
        } else {
            Theme::nav_bar()
        };
        parts.push(Span::styled(format!(" {} {} ", i + 1, section.label()), style));
        parts.push(Span::styled(" ", Theme::nav_bar()));
    }

    let paragraph = Paragraph::new(Line::from(parts)).style(Theme::nav_bar());
    frame.render_widget(paragraph, area);
}
