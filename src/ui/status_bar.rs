use crate::app::state::*;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

const SPINNER: [&str; 4] = ["|", "/", "-", "\\"];
const HINTS: &str = " Tab: switch field  Enter: submit  Esc: quit ";

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, endpoint: &str) {
    let mut parts: Vec<Span> = Vec::new();

    parts.push(Span::styled(
        format!(" [{}] ", endpoint),
        Style::default().fg(Color::Green).bg(Color::DarkGray),
    ));

    if state.is_submitting() {
        let frame_idx = (state.tick_count / 2) as usize % SPINNER.len();
        parts.push(Span::styled(
            format!(" {} submitting... ", SPINNER[frame_idx]),
            Theme::submitting(),
        ));
    } else if let Some(msg) = &state.status_message {
        parts.push(Span::styled(format!(" {} ", msg), Theme::submitting()));
    }

    // Pad to fill remaining space, hints right-aligned
    let used: usize = parts.iter().map(|s| s.content.chars().count()).sum();
    let remaining = (area.width as usize).saturating_sub(used + HINTS.chars().count());
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
    parts.push(Span::styled(HINTS, Theme::status_bar()));

    let paragraph = Paragraph::new(Line::from(parts));
    frame.render_widget(paragraph, area);
}
