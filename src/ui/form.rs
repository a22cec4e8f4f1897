use crate::app::state::*;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::UnicodeWidthStr;

pub fn render(frame: &mut Frame, age_area: Rect, gender_area: Rect, state: &AppState) {
    render_field(
        frame,
        age_area,
        " Age ",
        &state.age,
        state.focus == FocusField::Age,
    );
    render_field(
        frame,
        gender_area,
        " Gender ",
        &state.gender,
        state.focus == FocusField::Gender,
    );
}

fn render_field(frame: &mut Frame, area: Rect, title: &str, field: &FieldState, focused: bool) {
    let border_style = if focused {
        Theme::border_focused()
    } else {
        Theme::border()
    };

    let block = Block::default()
        .title(title)
        .title_style(if focused { Theme::title() } else { Theme::border() })
        .borders(Borders::ALL)
        .border_style(border_style)
        .padding(Padding::horizontal(1));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    if focused {
        // Prompt chevron + field text
        let line = Line::from(vec![
            Span::styled("❯ ", Theme::prompt()),
            Span::styled(field.text.as_str(), Theme::input_text()),
        ]);
        frame.render_widget(Paragraph::new(line), inner);

        // Cursor offset: chevron "❯ " (2 cells) + width of the text before
        // the cursor
        let prompt_offset = 2u16;
        let before_cursor = field.text[..field.cursor].width() as u16;
        let cursor_x = inner.x + prompt_offset + before_cursor;
        let cursor_y = inner.y;
        frame.set_cursor_position((cursor_x.min(inner.right().saturating_sub(1)), cursor_y));
    } else {
        let paragraph = Paragraph::new(field.text.as_str()).style(Theme::input_text());
        frame.render_widget(paragraph, inner);
    }
}
