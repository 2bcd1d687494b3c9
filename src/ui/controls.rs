//! Controls section: city picker row and the available treks panel.

use crate::app::App;
use crate::util::{strip_control_chars, truncate_to_width};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Placeholder shown by the picker (and the dropdown's disabled first row).
pub(super) const PICKER_PLACEHOLDER: &str = "Select a City";

const PICKER_HEIGHT: u16 = 3;
const TREKS_HEIGHT: u16 = 3;

/// Rows the controls section needs: the trek panel only exists once a city
/// is selected.
pub fn height(app: &App) -> u16 {
    if app.selection.selected_city().is_some() {
        PICKER_HEIGHT + TREKS_HEIGHT
    } else {
        PICKER_HEIGHT
    }
}

/// Render the city picker and, when a city is selected, its trek panel.
pub fn render(f: &mut Frame, app: &App, area: Rect) {
    let city = app.selection.selected_city();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(PICKER_HEIGHT), Constraint::Min(0)])
        .split(area);

    render_picker(f, app, chunks[0], city);

    if let Some(city) = city {
        render_treks(f, app, chunks[1], city);
    }
}

fn render_picker(f: &mut Frame, app: &App, area: Rect, city: Option<&str>) {
    let border_style = if app.dropdown.is_some() {
        app.style("panel_border_focused")
    } else {
        app.style("panel_border")
    };

    let value = match city {
        Some(city) => Span::styled(strip_control_chars(city).into_owned(), app.style("picker")),
        None => Span::styled(PICKER_PLACEHOLDER, app.style("picker_placeholder")),
    };

    let line = Line::from(vec![
        Span::styled("▾ ", app.style("picker")),
        value,
        Span::styled("   (c to change)", app.style("picker_placeholder")),
    ]);

    let picker = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(" City "),
    );
    f.render_widget(picker, area);
}

fn render_treks(f: &mut Frame, app: &App, area: Rect, city: &str) {
    if area.height < 1 {
        return;
    }

    let heading_width = area.width.saturating_sub(4) as usize;
    let heading = format!(" Available Treks in {} ", strip_control_chars(city));
    let heading = truncate_to_width(&heading, heading_width).into_owned();

    let mut spans = Vec::new();
    for (i, trek) in app.visible_treks().iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(
            format!(" {} ", strip_control_chars(trek)),
            app.style("trek_tag"),
        ));
    }

    let panel = Paragraph::new(Line::from(spans))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(app.style("panel_border"))
                .title(Span::styled(heading, app.style("trek_heading"))),
        );
    f.render_widget(panel, area);
}
