use ratatui::Frame;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::theme::Theme;
use crate::view::centered_rect;

/// Render the help overlay as a centered popup.
pub fn render(f: &mut Frame, theme: &Theme) {
    let popup = centered_rect(60, 30, f.area());

    let lines = vec![
        Line::from(Span::styled(" Keyboard Shortcuts ", theme.header_style())),
        Line::from(""),
        section_header("Search", theme),
        key_line("/ or s", "Focus the search box", theme),
        key_line("Enter / Tab", "Jump to results", theme),
        key_line("Ctrl+u", "Clear the query", theme),
        Line::from(""),
        section_header("Browse", theme),
        key_line("j / \u{2193}", "Move down", theme),
        key_line("k / \u{2191}", "Move up", theme),
        key_line("g / G", "Go to top / bottom", theme),
        key_line("Tab", "Switch panel", theme),
        key_line("Enter", "Open / close the movie", theme),
        key_line("Esc", "Close the movie", theme),
        key_line("[ / ]", "Collapse left / right panel", theme),
        Line::from(""),
        section_header("Rate", theme),
        key_line("1-9, 0", "Rate 1 to 9, 0 for 10", theme),
        key_line("h / l", "Preview one star less / more", theme),
        key_line("Space", "Keep the previewed rating", theme),
        key_line("a / Enter", "Add to the watched list", theme),
        key_line("m", "Show more / less of the plot", theme),
        key_line("d", "Remove from the watched list", theme),
        Line::from(""),
        section_header("Global", theme),
        key_line("?", "Toggle this help", theme),
        key_line("q", "Quit", theme),
        key_line("Ctrl+c", "Force quit", theme),
    ];

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.active))
                .title(" Help "),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, popup);
    f.render_widget(paragraph, popup);
}

fn section_header<'a>(title: &'a str, theme: &Theme) -> Line<'a> {
    Line::from(Span::styled(
        format!("  {title}"),
        Style::default().fg(theme.active).add_modifier(Modifier::BOLD),
    ))
}

fn key_line<'a>(key: &'a str, desc: &'a str, theme: &Theme) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("    {key:<14}"), Style::default().fg(theme.text)),
        Span::styled(desc, Style::default().fg(theme.dim)),
    ])
}
