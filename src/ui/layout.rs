use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct AppLayout {
    pub age_field: Rect,
    pub gender_field: Rect,
    pub result_panel: Rect,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect) -> AppLayout {
    // Main vertical split: content | status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(9),    // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let content = main_chunks[0];
    let status_bar = main_chunks[1];

    // Content: form fields | result panel
    let content_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Age field
            Constraint::Length(3), // Gender field
            Constraint::Min(3),    // Result panel
        ])
        .split(content);

    AppLayout {
        age_field: content_chunks[0],
        gender_field: content_chunks[1],
        result_panel: content_chunks[2],
        status_bar,
    }
}
