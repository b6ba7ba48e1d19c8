use popcorn_core::{SearchRequest, rate};

use super::{App, InputMode, Pane};
use crate::action::Action;
use crate::tui_event::BackendCommand;

impl App {
    /// Process a user action and update state. Returns true if the app should quit.
    pub fn update(&mut self, action: Action) -> bool {
        match action {
            Action::Tick => {
                self.tick = self.tick.wrapping_add(1);
                return false;
            }
            // The next draw picks up the new size.
            Action::None | Action::Resize => return false,
            _ => {}
        }

        // Quit confirmation modal: q confirms, Esc cancels
        if self.confirm_quit {
            match action {
                Action::Quit => {
                    self.should_quit = true;
                    return true;
                }
                Action::NavigateBack => self.confirm_quit = false,
                _ => {}
            }
            return false;
        }

        if self.show_help {
            if matches!(action, Action::ToggleHelp | Action::NavigateBack | Action::Quit) {
                self.show_help = false;
            }
            return false;
        }

        if self.input_mode == InputMode::Search {
            self.update_search(action);
            return self.should_quit;
        }

        match action {
            Action::Quit => self.confirm_quit = true,
            Action::ToggleHelp => self.show_help = true,
            Action::FocusSearch => {
                self.input_mode = InputMode::Search;
                self.focus = Pane::Results;
            }
            Action::CycleFocus => {
                self.focus = match self.focus {
                    Pane::Results => Pane::Side,
                    Pane::Side => Pane::Results,
                };
            }
            Action::MoveDown => self.move_cursor(1),
            Action::MoveUp => self.move_cursor(-1),
            Action::GoTop => self.move_cursor(isize::MIN),
            Action::GoBottom => self.move_cursor(isize::MAX),
            Action::DrillIn => match self.focus {
                Pane::Results => self.select_current(),
                Pane::Side => self.add_watched(),
            },
            Action::NavigateBack => {
                if self.stars.hover_value().is_some() {
                    self.stars.leave();
                } else if self.detail.selected().is_some() {
                    self.close_detail();
                }
            }
            Action::SetRating(n) => {
                if self.can_rate() {
                    self.stars.set(n);
                    self.status = None;
                }
            }
            Action::HoverNext => {
                if self.can_rate() {
                    self.stars.hover_next();
                }
            }
            Action::HoverPrev => {
                if self.can_rate() {
                    self.stars.hover_prev();
                }
            }
            Action::CommitHover => {
                if self.can_rate() {
                    self.stars.commit_hover();
                }
            }
            Action::AddWatched => self.add_watched(),
            Action::DeleteWatched => self.delete_watched(),
            Action::ToggleResultsPanel => self.results_open = !self.results_open,
            Action::ToggleSidePanel => self.side_open = !self.side_open,
            Action::TogglePlot => {
                if self.detail.detail().is_some() {
                    self.plot.toggle();
                }
            }
            _ => {}
        }
        self.should_quit
    }

    fn update_search(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::SearchInput(c) => {
                let request = self.search.push_char(c);
                self.after_query_change(request);
            }
            Action::SearchBackspace => {
                let request = self.search.pop_char();
                self.after_query_change(request);
            }
            Action::SearchClear => {
                let request = self.search.set_query("");
                self.after_query_change(request);
            }
            Action::SearchConfirm | Action::NavigateBack => {
                self.input_mode = InputMode::Normal;
                self.focus = Pane::Results;
            }
            _ => {}
        }
    }

    /// Replace the whole query (used for the initial query from the CLI).
    pub fn set_query(&mut self, query: &str) {
        let request = self.search.set_query(query);
        self.after_query_change(request);
    }

    fn after_query_change(&mut self, request: Option<SearchRequest>) {
        self.results_cursor = 0;
        if let Some(request) = request {
            self.send(BackendCommand::Search(request));
        }
    }

    fn move_cursor(&mut self, delta: isize) {
        let (cursor, len) = match self.focus {
            Pane::Results => (&mut self.results_cursor, self.search.results().len()),
            Pane::Side if self.detail.selected().is_none() => {
                (&mut self.watched_cursor, self.watched.len())
            }
            Pane::Side => return,
        };
        if len == 0 {
            *cursor = 0;
            return;
        }
        let max = len - 1;
        *cursor = match delta {
            isize::MIN => 0,
            isize::MAX => max,
            d if d < 0 => cursor.saturating_sub(d.unsigned_abs()),
            d => (*cursor + d as usize).min(max),
        };
    }

    /// Select the result under the cursor (toggle: selecting it again closes it).
    fn select_current(&mut self) {
        let Some(id) = self
            .search
            .results()
            .get(self.results_cursor)
            .map(|item| item.id.clone())
        else {
            return;
        };

        self.status = None;
        match self.detail.select(&id) {
            Some(request) => {
                self.stars = Self::fresh_stars(&self.settings);
                self.plot = Self::fresh_plot(&self.settings);
                self.focus = Pane::Side;
                self.send(BackendCommand::FetchDetail(request));
            }
            None => self.focus = Pane::Results,
        }
    }

    fn close_detail(&mut self) {
        self.detail.close();
        self.status = None;
    }

    /// Rating is possible once the detail is loaded and the title is not
    /// already in the watched list.
    fn can_rate(&self) -> bool {
        self.detail.detail().is_some() && self.selected_watched_rating().is_none()
    }

    fn add_watched(&mut self) {
        if !self.can_rate() {
            return;
        }
        let Some(detail) = self.detail.detail() else {
            return;
        };
        match rate(detail, self.stars.rating()) {
            Ok(entry) => {
                self.watched.add(entry);
                self.watched_cursor = self.watched.len() - 1;
                self.close_detail();
            }
            Err(e) => self.status = Some(e.to_string()),
        }
    }

    fn delete_watched(&mut self) {
        if self.focus != Pane::Side || self.detail.selected().is_some() {
            return;
        }
        let Some(id) = self
            .watched
            .entries()
            .get(self.watched_cursor)
            .map(|e| e.id.clone())
        else {
            return;
        };
        self.watched.remove(&id);
        self.watched_cursor = self
            .watched_cursor
            .min(self.watched.len().saturating_sub(1));
    }
}
