use ratatui::style::{Color, Modifier, Style};

pub struct Theme;

impl Theme {
    pub const BG_ELEVATED: Color = Color::Rgb(30, 34, 42);
    pub const BORDER_DIM: Color = Color::Rgb(70, 76, 88);
    pub const TEXT_PRIMARY: Color = Color::Rgb(230, 232, 236);
    pub const TEXT_SECONDARY: Color = Color::Rgb(170, 176, 186);
    pub const TEXT_MUTED: Color = Color::Rgb(95, 100, 110);
    pub const ACCENT_TEAL: Color = Color::Rgb(80, 200, 210);
    pub const ACCENT_AMBER: Color = Color::Rgb(230, 180, 80);
    pub const ERROR_RED: Color = Color::Rgb(230, 90, 90);

    pub fn heading() -> Style {
        Style::default()
            .fg(Self::ACCENT_TEAL)
            .add_modifier(Modifier::BOLD)
    }

    pub fn title() -> Style {
        Style::default()
            .fg(Self::TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn body() -> Style {
        Style::default().fg(Self::TEXT_SECONDARY)
    }

    /// Section content that has not faded in yet.
    pub fn faded() -> Style {
        Style::default().fg(Self::TEXT_MUTED)
    }

    pub fn number() -> Style {
        Style::default()
            .fg(Self::ACCENT_AMBER)
            .add_modifier(Modifier::BOLD)
    }

    pub fn link() -> Style {
        Style::default()
            .fg(Self::ACCENT_TEAL)
            .add_modifier(Modifier::UNDERLINED)
    }

    pub fn key_hint() -> Style {
        Style::default()
            .fg(Self::ACCENT_TEAL)
            .add_modifier(Modifier::BOLD)
    }

    pub fn rule() -> Style {
        Style::default().fg(Self::BORDER_DIM)
    }

    pub fn typed_text() -> Style {
        Style::default()
            .fg(Self::ACCENT_AMBER)
            .add_modifier(Modifier::BOLD)
    }

    pub fn nav_bar() -> Style {
        Style::default().fg(Self::TEXT_SECONDARY).bg(Self::BG_ELEVATED)
    }

    pub fn nav_logo() -> Style {
        Style::default()
            .fg(Self::ACCENT_TEAL)
            .bg(Self::BG_ELEVATED)
            .add_modifier(Modifier::BOLD)
    }

    pub fn nav_active() -> Style {
        Style::default()
            .fg(Self::BG_ELEVATED)
            .bg(Self::ACCENT_TEAL)
            .add_modifier(Modifier::BOLD)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY).bg(Self::BG_ELEVATED)
    }

    pub fn status_error() -> Style {
        Style::default()
            .fg(Self::ERROR_RED)
            .bg(Self::BG_ELEVATED)
            .add_modifier(Modifier::BOLD)
    }
}
