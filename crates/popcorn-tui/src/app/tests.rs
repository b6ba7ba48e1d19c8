use tokio::sync::mpsc;

use popcorn_core::{CatalogError, DEFAULT_WINDOW_TITLE, MovieDetail, SearchResultItem};

use super::*;
use crate::action::Action;
use crate::tui_event::BackendEvent;

/// Create an App wired to a command channel the test can inspect.
fn test_app() -> (App, mpsc::UnboundedReceiver<BackendCommand>) {
    let (tx, rx) = mpsc::unbounded_channel();
    let mut app = App::new(Settings::default(), Theme::hacker());
    app.backend_cmd_tx = Some(tx);
    (app, rx)
}

fn item(id: &str, title: &str) -> SearchResultItem {
    SearchResultItem {
        id: id.to_string(),
        title: title.to_string(),
        year: "2010".to_string(),
        poster: "N/A".to_string(),
    }
}

fn movie(id: &str, title: &str) -> MovieDetail {
    MovieDetail {
        id: id.to_string(),
        title: title.to_string(),
        year: "2010".to_string(),
        runtime: "148 min".to_string(),
        critic_rating: "8.8".to_string(),
        plot: "A thief who steals corporate secrets through dream-sharing technology.".to_string(),
        ..Default::default()
    }
}

fn type_query(app: &mut App, query: &str) {
    for c in query.chars() {
        app.update(Action::SearchInput(c));
    }
}

/// Type a query, answer it with `items`, and leave the search box.
fn with_results(app: &mut App, rx: &mut mpsc::UnboundedReceiver<BackendCommand>, items: Vec<SearchResultItem>) {
    type_query(app, "inception");
    let mut last = None;
    while let Ok(cmd) = rx.try_recv() {
        last = Some(cmd);
    }
    let Some(BackendCommand::Search(request)) = last else {
        panic!("expected a search command");
    };
    app.handle_backend_event(BackendEvent::SearchFinished {
        revision: request.revision,
        result: Ok(items),
    });
    app.update(Action::SearchConfirm);
}

/// Select the result under the cursor and answer the detail fetch.
fn open_detail(app: &mut App, rx: &mut mpsc::UnboundedReceiver<BackendCommand>, detail: MovieDetail) {
    app.update(Action::DrillIn);
    let Ok(BackendCommand::FetchDetail(request)) = rx.try_recv() else {
        panic!("expected a detail command");
    };
    assert_eq!(request.id, detail.id);
    app.handle_backend_event(BackendEvent::DetailFinished {
        revision: request.revision,
        result: Ok(detail),
    });
}

// ── Search box ──────────────────────────────────────────────────

#[test]
fn starts_in_search_mode() {
    let (app, _rx) = test_app();
    assert_eq!(app.input_mode, InputMode::Search);
    assert_eq!(app.window_title(), DEFAULT_WINDOW_TITLE);
}

#[test]
fn short_query_sends_no_command() {
    let (mut app, mut rx) = test_app();
    type_query(&mut app, "in");
    assert!(rx.try_recv().is_err());
    assert_eq!(app.search.query(), "in");
}

#[test]
fn each_keystroke_past_minimum_supersedes_previous_search() {
    let (mut app, mut rx) = test_app();
    type_query(&mut app, "incep");

    let mut requests = Vec::new();
    while let Ok(BackendCommand::Search(request)) = rx.try_recv() {
        requests.push(request);
    }
    assert_eq!(requests.len(), 3, "inc, ince, incep");
    let (latest, older) = requests.split_last().unwrap();
    assert!(older.iter().all(|r| r.cancel.is_cancelled()));
    assert!(!latest.cancel.is_cancelled());
    assert_eq!(latest.query, "incep");
}

#[test]
fn backspace_below_minimum_clears_results() {
    let (mut app, mut rx) = test_app();
    with_results(&mut app, &mut rx, vec![item("tt1", "Inception")]);
    app.update(Action::FocusSearch);
    for _ in 0.."inception".len() - 2 {
        app.update(Action::SearchBackspace);
    }
    assert_eq!(app.search.query(), "in");
    assert!(app.search.results().is_empty());
    assert!(!app.search.is_loading());
}

#[test]
fn stale_search_event_is_ignored() {
    let (mut app, mut rx) = test_app();
    type_query(&mut app, "abc");
    let Ok(BackendCommand::Search(first)) = rx.try_recv() else {
        panic!("expected a search command");
    };
    type_query(&mut app, "d");

    app.handle_backend_event(BackendEvent::SearchFinished {
        revision: first.revision,
        result: Ok(vec![item("tt1", "Stale")]),
    });
    assert!(app.search.results().is_empty());
    assert!(app.search.is_loading());
}

#[test]
fn not_found_is_shown_as_error() {
    let (mut app, mut rx) = test_app();
    type_query(&mut app, "zzzzz");
    let mut last = None;
    while let Ok(BackendCommand::Search(request)) = rx.try_recv() {
        last = Some(request);
    }
    app.handle_backend_event(BackendEvent::SearchFinished {
        revision: last.unwrap().revision,
        result: Err(CatalogError::NotFound),
    });
    assert_eq!(app.search.error(), Some("Movie not Found"));
    assert!(!app.search.is_loading());
}

// ── Selection ───────────────────────────────────────────────────

#[test]
fn selecting_twice_closes_detail() {
    let (mut app, mut rx) = test_app();
    with_results(&mut app, &mut rx, vec![item("tt1", "Inception")]);
    open_detail(&mut app, &mut rx, movie("tt1", "Inception"));
    assert_eq!(app.focus, Pane::Side);
    assert_eq!(app.window_title(), "Movie | Inception");

    app.update(Action::CycleFocus);
    app.update(Action::DrillIn);
    assert!(app.detail.selected().is_none());
    assert!(rx.try_recv().is_err(), "closing must not fetch");
    assert_eq!(app.window_title(), DEFAULT_WINDOW_TITLE);
}

#[test]
fn switching_selection_drops_earlier_detail() {
    let (mut app, mut rx) = test_app();
    with_results(&mut app, &mut rx, vec![item("tt1", "Inception"), item("tt2", "Interstellar")]);

    app.update(Action::DrillIn);
    let Ok(BackendCommand::FetchDetail(first)) = rx.try_recv() else {
        panic!("expected a detail command");
    };
    app.update(Action::CycleFocus);
    app.update(Action::MoveDown);
    app.update(Action::DrillIn);
    let Ok(BackendCommand::FetchDetail(second)) = rx.try_recv() else {
        panic!("expected a detail command");
    };
    assert!(first.cancel.is_cancelled());

    app.handle_backend_event(BackendEvent::DetailFinished {
        revision: first.revision,
        result: Ok(movie("tt1", "Inception")),
    });
    assert!(app.detail.detail().is_none());

    app.handle_backend_event(BackendEvent::DetailFinished {
        revision: second.revision,
        result: Ok(movie("tt2", "Interstellar")),
    });
    assert_eq!(app.detail.detail().map(|d| d.title.as_str()), Some("Interstellar"));
}

#[test]
fn escape_closes_detail_and_restores_title() {
    let (mut app, mut rx) = test_app();
    with_results(&mut app, &mut rx, vec![item("tt1", "Inception")]);
    open_detail(&mut app, &mut rx, movie("tt1", "Inception"));

    app.update(Action::NavigateBack);
    assert!(app.detail.selected().is_none());
    assert_eq!(app.window_title(), DEFAULT_WINDOW_TITLE);
}

// ── Rating & watched ────────────────────────────────────────────

#[test]
fn unrated_add_reports_status_and_keeps_detail() {
    let (mut app, mut rx) = test_app();
    with_results(&mut app, &mut rx, vec![item("tt1", "Inception")]);
    open_detail(&mut app, &mut rx, movie("tt1", "Inception"));

    app.update(Action::AddWatched);
    assert!(app.watched.is_empty());
    assert!(app.status.is_some());
    assert!(app.detail.detail().is_some());
}

#[test]
fn rated_add_appends_and_closes_detail() {
    let (mut app, mut rx) = test_app();
    with_results(&mut app, &mut rx, vec![item("tt1", "Inception")]);
    open_detail(&mut app, &mut rx, movie("tt1", "Inception"));

    app.update(Action::SetRating(9));
    app.update(Action::DrillIn);

    assert_eq!(app.watched.len(), 1);
    let entry = &app.watched.entries()[0];
    assert_eq!(entry.user_rating, 9);
    assert_eq!(entry.runtime_minutes, 148);
    assert_eq!(entry.critic_rating, Some(8.8));
    assert!(app.detail.selected().is_none());
    assert_eq!(app.window_title(), DEFAULT_WINDOW_TITLE);
}

#[test]
fn hover_preview_commits_with_space() {
    let (mut app, mut rx) = test_app();
    with_results(&mut app, &mut rx, vec![item("tt1", "Inception")]);
    open_detail(&mut app, &mut rx, movie("tt1", "Inception"));

    app.update(Action::HoverNext);
    app.update(Action::HoverNext);
    app.update(Action::CommitHover);
    assert_eq!(app.stars.rating(), 2);

    // Esc first abandons a preview, then closes the detail.
    app.update(Action::HoverNext);
    app.update(Action::NavigateBack);
    assert_eq!(app.stars.hover_value(), None);
    assert!(app.detail.selected().is_some());
}

#[test]
fn already_watched_title_cannot_be_rated_again() {
    let (mut app, mut rx) = test_app();
    with_results(&mut app, &mut rx, vec![item("tt1", "Inception")]);
    open_detail(&mut app, &mut rx, movie("tt1", "Inception"));
    app.update(Action::SetRating(7));
    app.update(Action::AddWatched);

    app.update(Action::CycleFocus);
    open_detail(&mut app, &mut rx, movie("tt1", "Inception"));
    assert_eq!(app.selected_watched_rating(), Some(7));

    app.update(Action::SetRating(3));
    app.update(Action::AddWatched);
    assert_eq!(app.watched.len(), 1);
    assert_eq!(app.stars.rating(), 0);
}

#[test]
fn delete_removes_entry_under_cursor() {
    let (mut app, mut rx) = test_app();
    with_results(&mut app, &mut rx, vec![item("tt1", "Inception"), item("tt2", "Interstellar")]);
    open_detail(&mut app, &mut rx, movie("tt1", "Inception"));
    app.update(Action::SetRating(8));
    app.update(Action::AddWatched);

    app.update(Action::CycleFocus);
    app.update(Action::MoveDown);
    open_detail(&mut app, &mut rx, movie("tt2", "Interstellar"));
    app.update(Action::SetRating(6));
    app.update(Action::AddWatched);
    assert_eq!(app.watched.len(), 2);

    // Watched list is showing; cursor sits on the newest entry.
    assert_eq!(app.focus, Pane::Side);
    app.update(Action::MoveUp);
    app.update(Action::DeleteWatched);
    assert_eq!(app.watched.len(), 1);
    assert_eq!(app.watched.entries()[0].id, "tt2");
    assert_eq!(app.watched_cursor, 0);
}

#[test]
fn delete_on_empty_list_is_noop() {
    let (mut app, _rx) = test_app();
    app.update(Action::SearchConfirm);
    app.update(Action::CycleFocus);
    app.update(Action::DeleteWatched);
    assert!(app.watched.is_empty());
    assert_eq!(app.watched_cursor, 0);
}

// ── Panels, help, quit ──────────────────────────────────────────

#[test]
fn panels_toggle_independently() {
    let (mut app, _rx) = test_app();
    app.update(Action::SearchConfirm);
    app.update(Action::ToggleResultsPanel);
    assert!(!app.results_open);
    assert!(app.side_open);
    app.update(Action::ToggleSidePanel);
    app.update(Action::ToggleResultsPanel);
    assert!(app.results_open);
    assert!(!app.side_open);
}

#[test]
fn collapsed_panel_keeps_marker_strip() {
    let area = Rect::new(0, 0, 80, 20);
    let [left, right] = split_body(area, false, true);
    assert_eq!(left.height, 3);
    assert_eq!(right.height, 20);
    assert_eq!(left.width + right.width, 80);
}

#[test]
fn quit_requires_confirmation() {
    let (mut app, _rx) = test_app();
    app.update(Action::SearchConfirm);
    assert!(!app.update(Action::Quit));
    assert!(app.confirm_quit);
    app.update(Action::NavigateBack);
    assert!(!app.confirm_quit);

    app.update(Action::Quit);
    assert!(app.update(Action::Quit));
    assert!(app.should_quit);
}

#[test]
fn help_swallows_other_actions() {
    let (mut app, _rx) = test_app();
    app.update(Action::SearchConfirm);
    app.update(Action::ToggleHelp);
    app.update(Action::ToggleResultsPanel);
    assert!(app.results_open);
    app.update(Action::NavigateBack);
    assert!(!app.show_help);
}
