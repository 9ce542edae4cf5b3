use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::*;
use crate::ui::layout;
use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::layout::Rect;

/// Cursor blink period, in ticks.
const BLINK_TICKS: u64 = 10;

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => handle_terminal(state, cevent),
        AppEvent::Typed(frame) => {
            if frame != state.typed {
                state.typed = frame;
                state.dirty = true;
            }
            vec![]
        }
        AppEvent::Tick => {
            handle_tick(state);
            vec![]
        }
    }
}

fn handle_tick(state: &mut AppState) {
    state.tick_count = state.tick_count.wrapping_add(1);
    if state.step_scroll() {
        state.dirty = true;
    }
    if state.tick_count % BLINK_TICKS == 0 {
        state.dirty = true;
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) if key.kind != KeyEventKind::Release => handle_key(state, key),
        CEvent::Resize(width, height) => {
            resize(state, width, height);
            vec![]
        }
        _ => vec![],
    }
}

/// Track the page area for a terminal of `width` x `height`.
pub fn resize(state: &mut AppState, width: u16, height: u16) {
    let page = layout::compute_layout(Rect::new(0, 0, width, height)).page;
    state.set_viewport(page.width, page.height);
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }

    // any key dismisses the last status message
    if state.status.take().is_some() {
        state.dirty = true;
    }

    let page_rows = state.viewport_height.saturating_sub(1).max(1) as isize;
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return vec![Action::Quit],
        KeyCode::Char('d') => return vec![Action::ExportCv],
        KeyCode::Char('c') => state.jump_to(Section::Contact),
        KeyCode::Char(c @ '1'..='9') => {
            if let Some(section) = Section::from_digit(c) {
                state.jump_to(section);
            }
        }
        KeyCode::Tab => {
            let next = state.current_section().next();
            state.jump_to(next);
        }
        KeyCode::BackTab => {
            let prev = state.current_section().prev();
            state.jump_to(prev);
        }
        KeyCode::Down | KeyCode::Char('j') => state.scroll_by(1),
        KeyCode::Up | KeyCode::Char('k') => state.scroll_by(-1),
        KeyCode::PageDown | KeyCode::Char(' ') => state.scroll_by(page_rows),
        KeyCode::PageUp => state.scroll_by(-page_rows),
        KeyCode::Home | KeyCode::Char('g') => state.scroll_to_top(),
        KeyCode::End | KeyCode::Char('G') => state.scroll_to_bottom(),
        _ => {}
    }
    vec![]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::typewriter::{Frame, Mode};

    fn state() -> AppState {
        let mut state = AppState::new(AppConfig::default());
        resize(&mut state, 80, 12);
        state
    }

    fn key(code: KeyCode) -> AppEvent {
        AppEvent::Terminal(CEvent::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    fn settle(state: &mut AppState) {
        while state.scroll_target.is_some() {
            handle_event(state, AppEvent::Tick);
        }
    }

    #[test]
    fn test_resize_tracks_page_area() {
        let state = state();
        assert_eq!(state.viewport_width, 80);
        assert_eq!(state.viewport_height, 10);
    }

    #[test]
    fn test_quit_keys() {
        let mut state = state();
        assert_eq!(handle_event(&mut state, key(KeyCode::Char('q'))), vec![Action::Quit]);
        assert_eq!(handle_event(&mut state, key(KeyCode::Esc)), vec![Action::Quit]);
        let ctrl_c = AppEvent::Terminal(CEvent::Key(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
        )));
        assert_eq!(handle_event(&mut state, ctrl_c), vec![Action::Quit]);
    }

    #[test]
    fn test_download_key_requests_export() {
        let mut state = state();
        assert_eq!(
            handle_event(&mut state, key(KeyCode::Char('d'))),
            vec![Action::ExportCv]
        );
    }

    #[test]
    fn test_digit_jumps_to_section_over_ticks() {
        let mut state = state();
        let skills = state.page().anchor(Section::Skills).unwrap().start;
        handle_event(&mut state, key(KeyCode::Char('3')));
        assert_eq!(state.scroll, 0);
        handle_event(&mut state, AppEvent::Tick);
        assert!(state.scroll > 0);
        settle(&mut state);
        assert_eq!(state.scroll, skills);
        assert_eq!(state.current_section(), Section::Skills);
    }

    #[test]
    fn test_tab_cycles_sections() {
        let mut state = state();
        handle_event(&mut state, key(KeyCode::Tab));
        settle(&mut state);
        assert_eq!(state.current_section(), Section::About);

        handle_event(&mut state, key(KeyCode::BackTab));
        settle(&mut state);
        assert_eq!(state.current_section(), Section::Home);
        assert_eq!(state.scroll, 0);
    }

    #[test]
    fn test_contact_key_goes_to_bottom() {
        let mut state = state();
        handle_event(&mut state, key(KeyCode::Char('c')));
        settle(&mut state);
        assert_eq!(state.scroll, state.max_scroll());
        assert_eq!(state.current_section(), Section::Contact);
    }

    #[test]
    fn test_scroll_keys() {
        let mut state = state();
        handle_event(&mut state, key(KeyCode::Char('j')));
        handle_event(&mut state, key(KeyCode::Down));
        assert_eq!(state.scroll, 2);
        handle_event(&mut state, key(KeyCode::Up));
        assert_eq!(state.scroll, 1);
        handle_event(&mut state, key(KeyCode::PageDown));
        assert_eq!(state.scroll, 10);
        handle_event(&mut state, key(KeyCode::End));
        assert_eq!(state.scroll, state.max_scroll());
        handle_event(&mut state, key(KeyCode::Home));
        assert_eq!(state.scroll, 0);
    }

    #[test]
    fn test_about_fades_in_when_scrolled_to() {
        let mut state = state();
        assert!(!state.is_revealed(Section::About));
        for _ in 0..5 {
            handle_event(&mut state, key(KeyCode::Char('j')));
        }
        assert!(state.is_revealed(Section::About));
    }

    #[test]
    fn test_typed_frame_updates_hero() {
        let mut state = state();
        state.dirty = false;
        let frame = Frame {
            text: "im a".into(),
            mode: Mode::Typing,
            phrase_index: 0,
        };
        handle_event(&mut state, AppEvent::Typed(frame.clone()));
        assert_eq!(state.typed, frame);
        assert!(state.dirty);

        state.dirty = false;
        handle_event(&mut state, AppEvent::Typed(frame));
        assert!(!state.dirty);
    }

    #[test]
    fn test_key_clears_status() {
        let mut state = state();
        state.info("Saved");
        handle_event(&mut state, key(KeyCode::Char('j')));
        assert!(state.status.is_none());
    }
}
