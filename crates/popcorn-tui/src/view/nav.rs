use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Margin, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::{App, InputMode};
use crate::view::spinner_char;

/// Top bar: logo, search box and result count.
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;

    let [logo_area, search_area, count_area] = Layout::horizontal([
        Constraint::Length(14),
        Constraint::Min(20),
        Constraint::Length(20),
    ])
    .areas(area);

    let logo = Paragraph::new(Line::from(Span::styled(
        " \u{1F37F} popcorn ",
        theme.header_style(),
    )))
    .centered();
    f.render_widget(logo, logo_area.inner(Margin::new(0, 1)));

    let searching = app.input_mode == InputMode::Search;
    let query = app.search.query();
    let mut spans = Vec::new();
    if query.is_empty() && !searching {
        spans.push(Span::styled(
            "Search movies...",
            Style::default().fg(theme.dim),
        ));
    } else {
        spans.push(Span::styled(query, Style::default().fg(theme.text)));
    }
    if searching {
        spans.push(Span::styled("\u{2588}", Style::default().fg(theme.active)));
    }
    if app.search.is_loading() {
        spans.push(Span::styled(
            format!(" {}", spinner_char(app.tick)),
            Style::default().fg(theme.spinner),
        ));
    }
    let search = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border_style(searching))
            .title(" / "),
    );
    f.render_widget(search, search_area);

    let count = Paragraph::new(Line::from(vec![
        Span::styled("Found ", Style::default().fg(theme.dim)),
        Span::styled(
            app.search.results().len().to_string(),
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        ),
        Span::styled(" results", Style::default().fg(theme.dim)),
    ]))
    .right_aligned();
    f.render_widget(count, count_area.inner(Margin::new(1, 1)));
}
