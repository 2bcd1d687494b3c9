//! Help overlay listing the live keybindings, overrides included.

use crate::app::App;
use crate::keybindings::Context;
use ratatui::{
    layout::Alignment,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::centered_rect;

const HELP_WIDTH: u16 = 52;
const KEY_COLUMN: usize = 12;

const SECTIONS: [(Context, &str); 3] = [
    (Context::Global, "Feed"),
    (Context::CityPrompt, "Welcome modal"),
    (Context::CityDropdown, "City dropdown"),
];

/// Body lines: one heading per context followed by its bindings.
fn help_lines(app: &App) -> Vec<Line<'static>> {
    let bindings = app.keybindings.all_bindings();
    let mut lines = Vec::new();

    for (ctx, heading) in SECTIONS {
        let mut rows: Vec<(String, &str)> = bindings
            .iter()
            .filter(|(c, _, _, _)| *c == ctx)
            .map(|(_, key, _, desc)| (key.clone(), *desc))
            .collect();
        // Digits are handled before the registry while the modal is up
        if ctx == Context::CityPrompt {
            rows.push(("1-9".to_string(), "Choose city by number"));
        }
        if rows.is_empty() {
            continue;
        }

        if !lines.is_empty() {
            lines.push(Line::default());
        }
        lines.push(Line::from(Span::styled(heading, app.style("help_heading"))));
        for (key, desc) in rows {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {:<width$}", key, width = KEY_COLUMN),
                    app.style("post_action"),
                ),
                Span::styled(desc.to_string(), app.style("modal_body")),
            ]));
        }
    }

    lines
}

/// Number of body lines, used to bound the scroll offset.
pub(super) fn line_count(app: &App) -> usize {
    help_lines(app).len()
}

/// Render the overlay and pin the scroll offset to what can be shown.
pub fn render(f: &mut Frame, app: &mut App) {
    let lines = help_lines(app);

    let area = f.area();
    let height = area.height.saturating_sub(4);
    let overlay = centered_rect(HELP_WIDTH, height, area);
    if overlay.width < 20 || overlay.height < 5 {
        return;
    }

    let visible = overlay.height.saturating_sub(2) as usize;
    let max_scroll = lines.len().saturating_sub(visible);
    app.help_scroll_offset = app.help_scroll_offset.min(max_scroll);
    let scroll = app.help_scroll_offset;

    let hint = if scroll < max_scroll {
        " j/k scroll · ?/Esc close "
    } else {
        " ?/Esc close "
    };

    f.render_widget(Clear, overlay);

    let paragraph = Paragraph::new(lines)
        .scroll((u16::try_from(scroll).unwrap_or(u16::MAX), 0))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(app.style("panel_border_focused"))
                .title(Span::styled(" Help ", app.style("modal_title")))
                .title_alignment(Alignment::Center)
                .title_bottom(
                    Line::from(Span::styled(hint, app.style("picker_placeholder"))).right_aligned(),
                ),
        );

    f.render_widget(paragraph, overlay);
}
