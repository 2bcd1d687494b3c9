use crate::app::App;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Glyph for the add-post icon (`n`).
const ADD_POST_ICON: &str = "[+]";
/// Glyph for the profile icon (`p`).
const PROFILE_ICON: &str = "[@]";

/// Render the header bar: add-post icon, title, profile icon.
pub fn render(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(app.style("panel_border"));
    let inner = block.inner(area);
    f.render_widget(block, area);

    if inner.width < 9 || inner.height < 1 {
        return;
    }

    // Bottom inner row, just above the divider
    let row = Rect {
        y: inner.y + inner.height.saturating_sub(1).min(1),
        height: 1,
        ..inner
    };

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .horizontal_margin(1)
        .constraints([
            Constraint::Length(ADD_POST_ICON.len() as u16),
            Constraint::Min(0),
            Constraint::Length(PROFILE_ICON.len() as u16),
        ])
        .split(row);

    f.render_widget(
        Paragraph::new(ADD_POST_ICON).style(app.style("header_icon")),
        cols[0],
    );
    f.render_widget(
        Paragraph::new("TrekGram")
            .style(app.style("header_title"))
            .alignment(Alignment::Center),
        cols[1],
    );
    f.render_widget(
        Paragraph::new(PROFILE_ICON).style(app.style("header_icon")),
        cols[2],
    );
}
