pub mod detail;
pub mod help;
pub mod nav;
pub mod quit_confirm;
pub mod results;
pub mod star_rating;
pub mod watched;

use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::{App, InputMode, Pane};
use crate::theme::Theme;

/// Spinner frames for animated progress indication.
const SPINNER_FRAMES: &[char] = &[
    '\u{280B}', '\u{2819}', '\u{2839}', '\u{2838}', '\u{283C}', '\u{2834}', '\u{2826}', '\u{2827}',
    '\u{2807}', '\u{280F}',
];

/// Get the current spinner character based on a tick counter.
pub fn spinner_char(tick: usize) -> char {
    SPINNER_FRAMES[tick % SPINNER_FRAMES.len()]
}

/// Truncate a string to fit in `max_width` columns, appending "\u{2026}" if truncated.
pub fn truncate(s: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }
    if s.chars().count() <= max_width {
        return s.to_string();
    }
    let mut truncated: String = s.chars().take(max_width.saturating_sub(1)).collect();
    truncated.push('\u{2026}');
    truncated
}

/// Create a centered rectangle of the given width (columns) and height (rows).
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .split(area);
    Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .split(vertical[0])[0]
}

/// Bordered panel whose title carries the collapse marker (`[–]` open, `[+]` closed).
pub fn panel_block<'a>(title: &'a str, open: bool, focused: bool, theme: &Theme) -> Block<'a> {
    let marker = if open { "[\u{2013}]" } else { "[+]" };
    Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_style(focused))
        .title(Line::from(vec![
            Span::styled(format!(" {title} "), Style::default().fg(theme.text)),
            Span::styled(format!("{marker} "), Style::default().fg(theme.active)),
        ]))
}

/// Key hints for the current context, or the status message when one is set.
pub fn render_footer(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;

    if let Some(status) = &app.status {
        let line = Line::from(Span::styled(format!(" {status}"), theme.error_style()));
        f.render_widget(Paragraph::new(line), area);
        return;
    }

    let hints = match (&app.input_mode, app.focus) {
        (InputMode::Search, _) => " type to search  Enter/Tab:results  Ctrl+u:clear  Esc:done",
        (InputMode::Normal, Pane::Results) => {
            " j/k:nav  Enter:open  /:search  Tab:switch  [ ]:panels  ?:help  q:quit"
        }
        (InputMode::Normal, Pane::Side) if app.detail.selected().is_some() => {
            " 1-9,0:rate  h/l:preview  Space:commit  a:add  m:plot  Esc:close  ?:help"
        }
        (InputMode::Normal, Pane::Side) => " j/k:nav  d:remove  Tab:switch  [ ]:panels  ?:help  q:quit",
    };

    let mode = match app.input_mode {
        InputMode::Search => " SEARCH ",
        InputMode::Normal => " NORMAL ",
    };
    let line = Line::from(vec![
        Span::styled(
            mode,
            Style::default()
                .fg(theme.header_fg)
                .bg(theme.active)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(hints, theme.footer_style()),
    ]);
    f.render_widget(Paragraph::new(line), area);
}
