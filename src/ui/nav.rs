use crate::app::App;
use crate::selection::Tab;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the bottom navigation with the active tab highlighted.
pub fn render(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(app.style("panel_border"));
    let inner = block.inner(area);
    f.render_widget(block, area);

    if inner.height < 1 {
        return;
    }

    let row = Rect { height: 1, ..inner };
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(row);

    let active = app.selection.active_tab();
    for (tab, col) in [Tab::City, Tab::Trek].into_iter().zip(cols.iter()) {
        let (label, style) = if tab == active {
            (format!("[{}]", tab.label()), app.style("nav_active"))
        } else {
            (format!(" {} ", tab.label()), app.style("nav_inactive"))
        };
        f.render_widget(
            Paragraph::new(label)
                .style(style)
                .alignment(Alignment::Center),
            *col,
        );
    }
}
