use crate::app::App;
use crate::util::strip_control_chars;
use ratatui::{
    layout::Rect,
    text::Span,
    widgets::{Block, Borders, Clear, List, ListItem, ListState},
    Frame,
};

use super::controls::PICKER_PLACEHOLDER;

const DROPDOWN_WIDTH: u16 = 32;

/// Render the open city dropdown just below the picker row.
///
/// The first row is the disabled placeholder; `cursor` indexes the cities
/// that follow it.
pub fn render(f: &mut Frame, app: &App, cursor: usize) {
    let area = f.area();
    let cities = app.catalog.cities();

    // Placeholder + cities + borders
    let wanted = u16::try_from(cities.len()).unwrap_or(u16::MAX).saturating_add(3);
    // Header (3) + picker top border and value row (2)
    let top = area.y.saturating_add(5);
    let height = wanted.min(area.bottom().saturating_sub(top));
    let overlay = Rect::new(
        area.x.saturating_add(2),
        top,
        DROPDOWN_WIDTH.min(area.width.saturating_sub(4)),
        height,
    );

    if overlay.width < 10 || overlay.height < 3 {
        return;
    }

    f.render_widget(Clear, overlay);

    let mut items = vec![ListItem::new(Span::styled(
        PICKER_PLACEHOLDER,
        app.style("dropdown_disabled"),
    ))];
    items.extend(cities.iter().map(|city| {
        ListItem::new(Span::styled(
            strip_control_chars(city).into_owned(),
            app.style("picker"),
        ))
    }));

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(app.style("panel_border_focused"))
                .title(" Choose City "),
        )
        .highlight_style(app.style("modal_button_selected"))
        .highlight_symbol("> ");

    // Row 0 is the placeholder and can never be highlighted
    let mut state = ListState::default().with_selected(Some(cursor.saturating_add(1)));
    f.render_stateful_widget(list, overlay, &mut state);
}
