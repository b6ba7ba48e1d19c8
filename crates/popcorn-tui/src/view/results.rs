use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{List, ListItem, ListState, Paragraph, Wrap};

use crate::app::{App, Pane};
use crate::view::{panel_block, spinner_char, truncate};

/// Left panel: search results, a spinner while loading, or the search error.
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let focused = app.focus == Pane::Results;
    let block = panel_block("Results", app.results_open, focused, theme);

    if !app.results_open {
        f.render_widget(block, area);
        return;
    }

    if app.search.is_loading() {
        let loading = Paragraph::new(Line::from(Span::styled(
            format!(" {} Loading...", spinner_char(app.tick)),
            Style::default().fg(theme.spinner),
        )))
        .block(block);
        f.render_widget(loading, area);
        return;
    }

    if let Some(error) = app.search.error() {
        let message = Paragraph::new(Line::from(vec![
            Span::styled(" \u{26D4}\u{FE0F} ", theme.error_style()),
            Span::styled(error, theme.error_style()),
        ]))
        .wrap(Wrap { trim: true })
        .block(block);
        f.render_widget(message, area);
        return;
    }

    let results = app.search.results();
    if results.is_empty() {
        let hint = if app.search.query().chars().count() < app.search.min_len() {
            format!(" Type at least {} characters to search", app.search.min_len())
        } else {
            " No results".to_string()
        };
        let empty = Paragraph::new(Span::styled(hint, Style::default().fg(theme.dim))).block(block);
        f.render_widget(empty, area);
        return;
    }

    let title_width = (area.width as usize).saturating_sub(14);
    let items: Vec<ListItem> = results
        .iter()
        .map(|item| {
            let watched = app.watched.contains(&item.id);
            let selected = app.detail.selected() == Some(item.id.as_str());
            let marker = if selected {
                "\u{25B6} "
            } else if watched {
                "\u{2713} "
            } else {
                "  "
            };
            let title_style = if selected {
                Style::default().fg(theme.active).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.text)
            };
            ListItem::new(Line::from(vec![
                Span::styled(marker, Style::default().fg(theme.success)),
                Span::styled(truncate(&item.title, title_width), title_style),
                Span::styled(
                    format!("  \u{1F5D3} {}", item.year),
                    Style::default().fg(theme.dim),
                ),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(if focused {
            theme.highlight_style()
        } else {
            Style::default()
        });

    let mut state = ListState::default().with_selected(Some(app.results_cursor));
    f.render_stateful_widget(list, area, &mut state);
}
