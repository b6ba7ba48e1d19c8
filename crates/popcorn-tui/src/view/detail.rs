use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use popcorn_core::MovieDetail;
use popcorn_core::models::available;

use crate::app::{App, Pane};
use crate::model::star_rating::StarRating;
use crate::theme::Theme;
use crate::view::{panel_block, spinner_char, star_rating};

/// Right panel while a title is selected.
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let focused = app.focus == Pane::Side;
    let block = panel_block("Movie", app.side_open, focused, theme);

    if !app.side_open {
        f.render_widget(block, area);
        return;
    }

    let lines = if app.detail.is_loading() {
        vec![Line::from(Span::styled(
            format!(" {} Loading...", spinner_char(app.tick)),
            Style::default().fg(theme.spinner),
        ))]
    } else if let Some(error) = app.detail.error() {
        vec![Line::from(vec![
            Span::styled(" \u{26D4}\u{FE0F} ", theme.error_style()),
            Span::styled(error.to_string(), theme.error_style()),
        ])]
    } else if let Some(detail) = app.detail.detail() {
        detail_lines(detail, app, theme)
    } else {
        Vec::new()
    };

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(block);
    f.render_widget(paragraph, area);
}

fn detail_lines<'a>(detail: &'a MovieDetail, app: &App, theme: &Theme) -> Vec<Line<'a>> {
    let mut lines = vec![Line::from(Span::styled(
        format!(" {}", detail.title),
        Style::default()
            .fg(theme.text)
            .add_modifier(Modifier::BOLD),
    ))];

    let mut facts = Vec::new();
    if let Some(released) = available(&detail.released) {
        facts.push(released);
    }
    if let Some(runtime) = available(&detail.runtime) {
        facts.push(runtime);
    }
    if !facts.is_empty() {
        lines.push(Line::from(Span::styled(
            format!(" {}", facts.join(" \u{2022} ")),
            Style::default().fg(theme.dim),
        )));
    }
    if let Some(genre) = available(&detail.genre) {
        lines.push(Line::from(Span::styled(
            format!(" {genre}"),
            Style::default().fg(theme.dim),
        )));
    }
    if let Some(rating) = available(&detail.critic_rating) {
        lines.push(Line::from(vec![
            Span::styled(" \u{2B50} ", Style::default().fg(theme.star)),
            Span::styled(format!("{rating} IMDb rating"), Style::default().fg(theme.text)),
        ]));
    }
    lines.push(Line::from(""));

    match app.selected_watched_rating() {
        Some(rating) => {
            let stored = StarRating::new(app.stars.max_rating()).with_default_rating(rating);
            lines.push(star_rating::line(&stored, theme));
            lines.push(Line::from(Span::styled(
                format!(" You rated this movie \u{2B50} {rating}"),
                Style::default().fg(theme.success),
            )));
        }
        None => {
            lines.push(star_rating::line(&app.stars, theme));
            if app.stars.rating() > 0 {
                lines.push(Line::from(Span::styled(
                    " + Add (a) ",
                    Style::default()
                        .fg(theme.header_fg)
                        .bg(theme.active)
                        .add_modifier(Modifier::BOLD),
                )));
            }
        }
    }
    lines.push(Line::from(""));

    if let Some(plot) = available(&detail.plot) {
        let mut spans = vec![Span::styled(
            format!(" {}", app.plot.display_text(plot)),
            Style::default()
                .fg(theme.text)
                .add_modifier(Modifier::ITALIC),
        )];
        if app.plot.is_truncatable(plot) {
            spans.push(Span::styled(
                format!(" {} (m)", app.plot.button_label()),
                Style::default().fg(theme.active),
            ));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }
    if let Some(actors) = available(&detail.actors) {
        lines.push(Line::from(vec![
            Span::styled(" Starring ", Style::default().fg(theme.dim)),
            Span::styled(actors, Style::default().fg(theme.text)),
        ]));
    }
    if let Some(director) = available(&detail.director) {
        lines.push(Line::from(vec![
            Span::styled(" Directed by ", Style::default().fg(theme.dim)),
            Span::styled(director, Style::default().fg(theme.text)),
        ]));
    }
    lines
}
