//! First-run modal asking the user to pick a city.

use crate::app::App;
use crate::util::strip_control_chars;
use ratatui::{
    layout::Alignment,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::centered_rect;

const MODAL_WIDTH: u16 = 48;

/// Render the modal centered over the feed screen.
pub fn render(f: &mut Frame, app: &App) {
    let cities = app.catalog.cities();

    let mut lines = vec![
        Line::default(),
        Line::from(Span::styled(
            "Please select your city to get started.",
            app.style("modal_body"),
        )),
        Line::default(),
    ];

    for (i, city) in cities.iter().enumerate() {
        let label = format!("{}. {}", i + 1, strip_control_chars(city));
        let line = if i == app.modal_cursor {
            Line::from(Span::styled(
                format!("> {} <", label),
                app.style("modal_button_selected"),
            ))
        } else {
            Line::from(Span::styled(
                format!("  {}  ", label),
                app.style("modal_button"),
            ))
        };
        lines.push(line);
    }

    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "(Enter) Choose  (1-9) Quick pick",
        app.style("picker_placeholder"),
    )));

    // +2 for borders
    let height = u16::try_from(lines.len()).unwrap_or(u16::MAX).saturating_add(2);
    let overlay = centered_rect(MODAL_WIDTH, height, f.area());
    if overlay.width < 20 || overlay.height < 5 {
        return;
    }

    f.render_widget(Clear, overlay);

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(app.style("panel_border_focused"))
                .title(Span::styled(
                    " Welcome to TrekGram! 🏔️ ",
                    app.style("modal_title"),
                ))
                .title_alignment(Alignment::Center),
        );

    f.render_widget(paragraph, overlay);
}
