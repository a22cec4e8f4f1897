use crate::app::state::*;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title(" Result ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_style(Theme::border())
        .padding(Padding::horizontal(1));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(text) = state.surface.line.as_deref() else {
        let hint = Paragraph::new(Span::styled(
            "Fill in the form and press Enter to submit.",
            Theme::hint(),
        ));
        frame.render_widget(hint, inner);
        return;
    };

    let style = match state.surface.kind {
        Some(ResultKind::Success) => Theme::success_result(),
        Some(ResultKind::ServerError) => Theme::server_error_result(),
        Some(ResultKind::TransportError) | Some(ResultKind::TimedOut) => {
            Theme::transport_error_result()
        }
        Some(ResultKind::Invalid) => Theme::invalid_result(),
        None => Theme::input_text(),
    };

    let mut spans = Vec::new();
    if let Some(ts) = state.surface.timestamp.as_deref() {
        spans.push(Span::styled(format!("[{}] ", ts), Theme::timestamp()));
    }
    spans.push(Span::styled(text, style));

    let paragraph = Paragraph::new(Line::from(spans)).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, inner);
}
