mod form;
mod layout;
mod result_panel;
mod status_bar;
mod theme;

use crate::app::state::AppState;
use ratatui::prelude::*;

pub fn render(frame: &mut Frame, state: &AppState, endpoint: &str) {
    let area = frame.area();
    let app_layout = layout::compute_layout(area);

    form::render(frame, app_layout.age_field, app_layout.gender_field, state);
    result_panel::render(frame, app_layout.result_panel, state);
    status_bar::render(frame, app_layout.status_bar, state, endpoint);
}
