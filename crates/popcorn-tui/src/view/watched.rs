use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};

use popcorn_core::{WatchedEntry, WatchedSummary};

use crate::app::{App, Pane};
use crate::theme::Theme;
use crate::view::{panel_block, truncate};

/// Right panel while nothing is selected: summary strip over the watched list.
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let focused = app.focus == Pane::Side;
    let block = panel_block("Watched", app.side_open, focused, theme);

    if !app.side_open {
        f.render_widget(block, area);
        return;
    }

    let inner = block.inner(area);
    f.render_widget(block, area);

    let [summary_area, list_area] =
        Layout::vertical([Constraint::Length(3), Constraint::Min(1)]).areas(inner);

    render_summary(f, summary_area, &app.watched.summary(), theme);
    render_list(f, list_area, app, focused);
}

fn render_summary(f: &mut Frame, area: Rect, summary: &WatchedSummary, theme: &Theme) {
    let (critic, user, runtime) = format_summary(summary);
    let lines = vec![
        Line::from(Span::styled(
            " MOVIES YOU WATCHED",
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(format!(" #\u{FE0F}\u{20E3} {} movies", summary.count), Style::default().fg(theme.text)),
            Span::styled(format!("   \u{2B50}\u{FE0F} {critic}"), Style::default().fg(theme.star)),
            Span::styled(format!("   \u{1F31F} {user}"), Style::default().fg(theme.star)),
            Span::styled(format!("   \u{23F3} {runtime}"), Style::default().fg(theme.text)),
        ]),
    ];
    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(theme.border)),
    );
    f.render_widget(paragraph, area);
}

fn render_list(f: &mut Frame, area: Rect, app: &App, focused: bool) {
    let theme = &app.theme;
    let entries = app.watched.entries();

    if entries.is_empty() {
        let hint = Paragraph::new(Span::styled(
            " Rate a movie to add it here",
            Style::default().fg(theme.dim),
        ));
        f.render_widget(hint, area);
        return;
    }

    let title_width = (area.width as usize).saturating_sub(4);
    let items: Vec<ListItem> = entries
        .iter()
        .map(|entry| {
            ListItem::new(vec![
                Line::from(Span::styled(
                    format!(" {}", truncate(&entry.title, title_width)),
                    Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(format!("  {}", entry_stats(entry)), Style::default().fg(theme.dim))),
            ])
        })
        .collect();

    let list = List::new(items).highlight_style(if focused {
        theme.highlight_style()
    } else {
        Style::default()
    });
    let mut state = ListState::default().with_selected(Some(app.watched_cursor));
    f.render_stateful_widget(list, area, &mut state);
}

/// Critic mean, user mean and runtime mean as shown in the summary strip.
pub fn format_summary(summary: &WatchedSummary) -> (String, String, String) {
    let critic = if summary.avg_critic_rating == 0.0 {
        "0".to_string()
    } else {
        format!("{:.2}", summary.avg_critic_rating)
    };
    (
        critic,
        format!("{:.2}", summary.avg_user_rating),
        format!("{:.0} min", summary.avg_runtime),
    )
}

/// `⭐️ 8.8   🌟 9   ⏳ 148 min`; unknown critic rating and zero runtime are omitted.
fn entry_stats(entry: &WatchedEntry) -> String {
    let mut parts = Vec::new();
    if let Some(critic) = entry.critic_rating {
        parts.push(format!("\u{2B50}\u{FE0F} {critic}"));
    }
    parts.push(format!("\u{1F31F} {}", entry.user_rating));
    if entry.runtime_minutes > 0 {
        parts.push(format!("\u{23F3} {} min", entry.runtime_minutes));
    }
    parts.join("   ")
}

#[cfg(test)]
mod tests {
    use popcorn_core::WatchedList;

    use super::*;

    fn entry(id: &str, critic: Option<f64>, user: u8, runtime: u32) -> WatchedEntry {
        WatchedEntry {
            id: id.to_string(),
            title: id.to_string(),
            year: "2010".to_string(),
            poster: "N/A".to_string(),
            critic_rating: critic,
            runtime_minutes: runtime,
            user_rating: user,
        }
    }

    #[test]
    fn summary_formats_two_titles() {
        let mut list = WatchedList::new();
        list.add(entry("tt1", Some(8.0), 9, 120));
        list.add(entry("tt2", Some(6.0), 7, 90));
        let (critic, user, runtime) = format_summary(&list.summary());
        assert_eq!(critic, "7.00");
        assert_eq!(user, "8.00");
        assert_eq!(runtime, "105 min");
    }

    #[test]
    fn empty_summary_shows_zeros() {
        let (critic, user, runtime) = format_summary(&WatchedList::new().summary());
        assert_eq!(critic, "0");
        assert_eq!(user, "0.00");
        assert_eq!(runtime, "0 min");
    }

    #[test]
    fn entry_stats_skip_unknown_values() {
        assert_eq!(entry_stats(&entry("tt1", None, 6, 0)), "\u{1F31F} 6");
        assert_eq!(
            entry_stats(&entry("tt1", Some(8.8), 9, 148)),
            "\u{2B50}\u{FE0F} 8.8   \u{1F31F} 9   \u{23F3} 148 min"
        );
    }
}
