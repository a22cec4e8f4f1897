use ratatui::style::{Color, Modifier, Style};

pub struct Theme;

impl Theme {
    pub fn border() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn border_focused() -> Style {
        Style::default().fg(Color::Cyan)
    }

    pub fn title() -> Style {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    }

    pub fn input_text() -> Style {
        Style::default().fg(Color::White)
    }

    pub fn prompt() -> Style {
        Style::default().fg(Color::Cyan)
    }

    pub fn timestamp() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn hint() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn success_result() -> Style {
        Style::default().fg(Color::Green)
    }

    pub fn server_error_result() -> Style {
        Style::default().fg(Color::Red)
    }

    pub fn transport_error_result() -> Style {
        Style::default().fg(Color::Yellow)
    }

    pub fn invalid_result() -> Style {
        Style::default().fg(Color::Magenta)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Color::White).bg(Color::DarkGray)
    }

    pub fn submitting() -> Style {
        Style::default().fg(Color::Yellow).bg(Color::DarkGray)
    }
}
