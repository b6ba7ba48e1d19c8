use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::model::star_rating::StarRating;
use crate::theme::Theme;

const FILLED: &str = "\u{2605}";
const EMPTY: &str = "\u{2606}";

/// One row of stars followed by the rating label, e.g. `★★★★☆☆☆☆☆☆ 4`.
pub fn line(stars: &StarRating, theme: &Theme) -> Line<'static> {
    let mut spans: Vec<Span> = (1..=stars.max_rating())
        .map(|i| {
            let filled = stars.is_filled(i);
            Span::styled(
                if filled { FILLED } else { EMPTY },
                theme.star_style(filled),
            )
        })
        .collect();

    let label = stars.label();
    if !label.is_empty() {
        let style = if stars.hover_value().is_some() {
            Style::default().fg(theme.dim).add_modifier(Modifier::ITALIC)
        } else {
            Style::default().fg(theme.star).add_modifier(Modifier::BOLD)
        };
        spans.push(Span::styled(format!(" {label}"), style));
    }
    Line::from(spans)
}
