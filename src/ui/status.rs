use crate::app::App;
use ratatui::{layout::Rect, widgets::Paragraph, Frame};

/// Render the status bar
pub fn render(f: &mut Frame, app: &App, area: Rect) {
    // Status bar needs at least 1 char width to be meaningful
    if area.width < 1 || area.height < 1 {
        return;
    }

    // Status message wins over the key hints for the top layer
    let text: &str = if let Some((msg, _)) = &app.status_message {
        msg
    } else if app.show_help {
        "[j/k]scroll [?/Esc]close"
    } else if app.prompt_visible() {
        "[j/k]move [Enter]choose [1-9]pick [?]help [q]uit"
    } else if app.dropdown.is_some() {
        "[j/k]move [Enter]choose [Esc]close [q]uit"
    } else {
        "[c]ity [j/k]scroll [1/2/Tab]tabs [l]ike co[m]ment [n]ew [p]rofile [o]pen [?]help [q]uit"
    };

    let paragraph = Paragraph::new(text).style(app.style("status_bar"));
    f.render_widget(paragraph, area);
}
