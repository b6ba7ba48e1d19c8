mod backend;
mod update;

use ratatui::layout::{Constraint, Layout, Rect};
use tokio::sync::mpsc;

use popcorn_core::{DetailLoader, MAX_USER_RATING, SearchController, WatchedList};

use crate::model::settings::Settings;
use crate::model::star_rating::StarRating;
use crate::model::text_expander::TextExpander;
use crate::theme::Theme;
use crate::tui_event::BackendCommand;

/// Input mode determines how keyboard input is interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    /// Keystrokes edit the search query.
    Search,
}

/// Which panel receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pane {
    /// Search results (left).
    Results,
    /// Movie detail when a title is selected, watched list otherwise (right).
    Side,
}

/// Main application state.
pub struct App {
    pub search: SearchController,
    pub detail: DetailLoader,
    pub watched: WatchedList,

    pub input_mode: InputMode,
    pub focus: Pane,
    pub results_cursor: usize,
    pub watched_cursor: usize,
    /// Collapsible panels, both open at start.
    pub results_open: bool,
    pub side_open: bool,

    /// Rating input for the selected title; reset on every selection.
    pub stars: StarRating,
    /// Plot synopsis expander; reset on every selection.
    pub plot: TextExpander,
    /// One-line feedback shown in the footer (e.g. "pick a rating first").
    pub status: Option<String>,

    pub settings: Settings,
    pub theme: Theme,
    pub tick: usize,
    pub should_quit: bool,
    pub confirm_quit: bool,
    pub show_help: bool,

    /// Channel to send commands to the backend listener.
    pub backend_cmd_tx: Option<mpsc::UnboundedSender<BackendCommand>>,
}

impl App {
    pub fn new(settings: Settings, theme: Theme) -> Self {
        Self {
            search: SearchController::new(settings.min_query_len),
            detail: DetailLoader::new(),
            watched: WatchedList::new(),
            input_mode: InputMode::Search,
            focus: Pane::Results,
            results_cursor: 0,
            watched_cursor: 0,
            results_open: true,
            side_open: true,
            stars: Self::fresh_stars(&settings),
            plot: Self::fresh_plot(&settings),
            status: None,
            settings,
            theme,
            tick: 0,
            should_quit: false,
            confirm_quit: false,
            show_help: false,
            backend_cmd_tx: None,
        }
    }

    fn fresh_stars(settings: &Settings) -> StarRating {
        StarRating::new(MAX_USER_RATING).with_messages(settings.rating_labels.clone())
    }

    fn fresh_plot(settings: &Settings) -> TextExpander {
        TextExpander::new(settings.plot_words)
            .with_labels(&settings.plot_expand_label, &settings.plot_collapse_label)
            .expanded(settings.plot_expanded)
    }

    /// Title the terminal window should currently carry.
    pub fn window_title(&self) -> String {
        self.detail.window_title()
    }

    /// User rating stored for the selected title, if it is already watched.
    pub fn selected_watched_rating(&self) -> Option<u8> {
        let id = self.detail.selected()?;
        self.watched.get(id).map(|e| e.user_rating)
    }

    fn send(&self, cmd: BackendCommand) {
        if let Some(tx) = &self.backend_cmd_tx
            && tx.send(cmd).is_err()
        {
            tracing::warn!("backend listener is gone; command dropped");
        }
    }

    /// Render the current screen.
    pub fn view(&self, f: &mut ratatui::Frame) {
        let area = f.area();

        let [nav_area, body_area, footer_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(1),
        ])
        .areas(area);

        crate::view::nav::render(f, nav_area, self);

        let [left, right] = split_body(body_area, self.results_open, self.side_open);

        crate::view::results::render(f, left, self);
        if self.detail.selected().is_some() {
            crate::view::detail::render(f, right, self);
        } else {
            crate::view::watched::render(f, right, self);
        }

        crate::view::render_footer(f, footer_area, self);

        if self.show_help {
            crate::view::help::render(f, &self.theme);
        }

        if self.confirm_quit {
            crate::view::quit_confirm::render(f, &self.theme);
        }
    }
}

/// Split the body between the two panels; a collapsed panel keeps a 3-row strip
/// for its `[+]` marker.
fn split_body(area: Rect, left_open: bool, right_open: bool) -> [Rect; 2] {
    let columns = Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
        .areas::<2>(area);
    let collapse = |r: Rect, open: bool| {
        if open {
            r
        } else {
            Rect {
                height: r.height.min(3),
                ..r
            }
        }
    };
    [collapse(columns[0], left_open), collapse(columns[1], right_open)]
}

#[cfg(test)]
mod tests;
