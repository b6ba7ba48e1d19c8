use ratatui::style::{Color, Modifier, Style};

/// Color theme for the TUI.
pub struct Theme {
    pub star: Color,
    pub error: Color,
    pub success: Color,

    pub header_fg: Color,
    pub header_bg: Color,
    pub border: Color,
    pub border_focus: Color,
    pub text: Color,
    pub dim: Color,
    pub highlight_bg: Color,
    pub active: Color,
    pub spinner: Color,
    pub footer_fg: Color,
    pub footer_bg: Color,
}

impl Theme {
    /// Dark theme with violet accents.
    pub fn popcorn() -> Self {
        Self {
            star: Color::Rgb(252, 196, 25),
            error: Color::Rgb(250, 82, 82),
            success: Color::Rgb(81, 207, 102),

            header_fg: Color::Rgb(222, 226, 230),
            header_bg: Color::Rgb(103, 65, 217),
            border: Color::Rgb(73, 80, 87),
            border_focus: Color::Rgb(121, 80, 242),
            text: Color::Rgb(222, 226, 230),
            dim: Color::Rgb(134, 142, 150),
            highlight_bg: Color::Rgb(52, 58, 64),
            active: Color::Rgb(151, 117, 250),
            spinner: Color::Rgb(151, 117, 250),
            footer_fg: Color::Rgb(134, 142, 150),
            footer_bg: Color::Reset,
        }
    }

    /// Hacker-green terminal theme.
    pub fn hacker() -> Self {
        Self {
            star: Color::Yellow,
            error: Color::Red,
            success: Color::Rgb(0, 210, 0),

            header_fg: Color::Black,
            header_bg: Color::Rgb(0, 210, 0),
            border: Color::DarkGray,
            border_focus: Color::Rgb(0, 210, 0),
            text: Color::White,
            dim: Color::DarkGray,
            highlight_bg: Color::Rgb(30, 50, 30),
            active: Color::Cyan,
            spinner: Color::Cyan,
            footer_fg: Color::DarkGray,
            footer_bg: Color::Reset,
        }
    }

    /// Theme by config/CLI name; unknown names fall back to `popcorn`.
    pub fn from_name(name: &str) -> Self {
        match name {
            "hacker" => Self::hacker(),
            _ => Self::popcorn(),
        }
    }

    pub fn header_style(&self) -> Style {
        Style::default()
            .fg(self.header_fg)
            .bg(self.header_bg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn highlight_style(&self) -> Style {
        Style::default()
            .bg(self.highlight_bg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn border_style(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.border_focus)
        } else {
            Style::default().fg(self.border)
        }
    }

    pub fn star_style(&self, filled: bool) -> Style {
        if filled {
            Style::default().fg(self.star)
        } else {
            Style::default().fg(self.dim)
        }
    }

    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error).add_modifier(Modifier::BOLD)
    }

    pub fn footer_style(&self) -> Style {
        Style::default().fg(self.footer_fg).bg(self.footer_bg)
    }
}
