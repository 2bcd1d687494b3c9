use crate::app::App;
use crate::catalog::Post;
use crate::util::{strip_control_chars, truncate_to_width, wrap_to_width};
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

const HIGHLIGHT_SYMBOL: &str = "▌ ";
const HIGHLIGHT_WIDTH: usize = 2;

/// Render the post feed, or the empty-state message when nothing matches.
pub fn render(f: &mut Frame, app: &App, area: Rect) {
    let posts = app.filtered_posts();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(app.style("panel_border"))
        .title(format!(" Feed ({}) ", posts.len()));

    if posts.is_empty() {
        let city = app.selection.selected_city().unwrap_or("");
        let msg = format!(
            "No posts found for {}. Select another city or check back later!",
            strip_control_chars(city)
        );
        let paragraph = Paragraph::new(msg)
            .style(app.style("empty_state"))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block);
        f.render_widget(paragraph, area);
        return;
    }

    let width = (area.width.saturating_sub(2) as usize).saturating_sub(HIGHLIGHT_WIDTH);
    let items: Vec<ListItem> = posts
        .iter()
        .map(|post| ListItem::new(card_lines(app, post, width)))
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(app.style("post_selected"))
        .highlight_symbol(HIGHLIGHT_SYMBOL);

    let mut state = ListState::default().with_selected(Some(app.selected_post));
    f.render_stateful_widget(list, area, &mut state);
}

/// Lines for a single post card: author and trek tag, image, actions, likes,
/// caption, and a blank separator.
fn card_lines(app: &App, post: &Post, width: usize) -> Vec<Line<'static>> {
    let author = strip_control_chars(&post.author).into_owned();
    let trek = strip_control_chars(&post.trek).into_owned();

    let mut lines = vec![
        Line::from(vec![
            Span::styled(author.clone(), app.style("post_author")),
            Span::raw(" "),
            Span::styled(format!("• {}", trek), app.style("post_trek")),
        ]),
        Line::from(Span::styled(
            truncate_to_width(&format!("Image: {}", post.image_url), width).into_owned(),
            app.style("post_image"),
        )),
        Line::from(Span::styled(
            format!("[Like]  [Comment ({})]", post.comments),
            app.style("post_action"),
        )),
        Line::from(Span::styled(
            format!("{} likes", post.likes),
            app.style("post_likes"),
        )),
    ];

    // Caption is prefixed with the author, Instagram style
    let caption = format!("{} {}", author, strip_control_chars(&post.caption));
    for (i, text) in wrap_to_width(&caption, width).into_iter().enumerate() {
        let line = if i == 0 && text.starts_with(author.as_str()) {
            let rest = text[author.len()..].to_string();
            Line::from(vec![
                Span::styled(author.clone(), app.style("post_author")),
                Span::styled(rest, app.style("post_caption")),
            ])
        } else {
            Line::from(Span::styled(text, app.style("post_caption")))
        };
        lines.push(line);
    }

    lines.push(Line::default());
    lines
}
