use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct AppLayout {
    pub nav_bar: Rect,
    pub page: Rect,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect) -> AppLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Nav bar
            Constraint::Min(1),    // Page
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    AppLayout {
        nav_bar: chunks[0],
        page: chunks[1],
        status_bar: chunks[2],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_gets_the_middle() {
        let layout = compute_layout(Rect::new(0, 0, 80, 24));
        assert_eq!(layout.nav_bar, Rect::new(0, 0, 80, 1));
        assert_eq!(layout.page, Rect::new(0, 1, 80, 22));
        assert_eq!(layout.status_bar, Rect::new(0, 23, 80, 1));
    }
}
