pub mod layout;
mod nav_bar;
pub mod page;
mod status_bar;
mod theme;

use crate::app::state::AppState;
use ratatui::prelude::*;

pub fn render(frame: &mut Frame, state: &AppState) {
    let app_layout = layout::compute_layout(frame.area());

    nav_bar::render(frame, app_layout.nav_bar, state);
    page::render(frame, app_layout.page, state);
    status_bar::render(frame, app_layout.status_bar, state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::Section;
    use crate::config::AppConfig;
    use ratatui::backend::TestBackend;

    fn screen(state: &AppState, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| render(f, state)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        let mut text = String::new();
        for y in 0..height {
            for x in 0..width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_renders_hero_and_nav() {
        let mut state = AppState::new(AppConfig::default());
        state.set_viewport(80, 22);
        state.typed.text = "im a full stack".into();
        let text = screen(&state, 80, 24);
        assert!(text.contains("Mohammed"));
        assert!(text.contains("1 Home"));
        assert!(text.contains("5 Contact"));
        assert!(text.contains("Hello,"));
        assert!(text.contains("> im a full stack"));
        assert!(text.contains("q quit"));
    }

    #[test]
    fn test_renders_scrolled_section() {
        let mut state = AppState::new(AppConfig::default());
        state.set_viewport(80, 22);
        state.jump_to(Section::Contact);
        while state.step_scroll() {}
        let text = screen(&state, 80, 24);
        assert!(text.contains("rily1243@gmail.com"));
        assert!(text.contains("100%"));
    }

    #[test]
    fn test_renders_error_status() {
        let mut state = AppState::new(AppConfig::default());
        state.error("No CV configured");
        let text = screen(&state, 80, 24);
        assert!(text.contains("No CV configured"));
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let mut state = AppState::new(AppConfig::default());
        state.set_viewport(10, 1);
        screen(&state, 10, 3);
    }
}
