use ratatui::crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind,
};

use crate::action::Action;
use crate::app::InputMode;

/// Map a crossterm terminal event to a TUI action, respecting input mode.
pub fn map_event(event: &Event, input_mode: &InputMode) -> Action {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            // Ctrl+C always quits regardless of mode
            if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                return Action::Quit;
            }

            match input_mode {
                InputMode::Normal => map_key_normal(key),
                InputMode::Search => map_key_search(key),
            }
        }
        Event::Mouse(mouse) => map_mouse(mouse),
        Event::Resize(..) => Action::Resize,
        _ => Action::None,
    }
}

fn map_mouse(mouse: &MouseEvent) -> Action {
    match mouse.kind {
        MouseEventKind::ScrollDown => Action::MoveDown,
        MouseEventKind::ScrollUp => Action::MoveUp,
        _ => Action::None,
    }
}

fn map_key_normal(key: &KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Char('j') | KeyCode::Down => Action::MoveDown,
        KeyCode::Char('k') | KeyCode::Up => Action::MoveUp,
        KeyCode::Char('g') | KeyCode::Home => Action::GoTop,
        KeyCode::Char('G') | KeyCode::End => Action::GoBottom,
        KeyCode::Char('h') | KeyCode::Left => Action::HoverPrev,
        KeyCode::Char('l') | KeyCode::Right => Action::HoverNext,
        KeyCode::Char(' ') => Action::CommitHover,
        KeyCode::Char(c @ '1'..='9') => Action::SetRating(c as u8 - b'0'),
        KeyCode::Char('0') => Action::SetRating(10),
        KeyCode::Char('a') | KeyCode::Char('+') => Action::AddWatched,
        KeyCode::Char('d') | KeyCode::Char('x') | KeyCode::Delete => Action::DeleteWatched,
        KeyCode::Char('/') | KeyCode::Char('s') => Action::FocusSearch,
        KeyCode::Char('[') => Action::ToggleResultsPanel,
        KeyCode::Char(']') => Action::ToggleSidePanel,
        KeyCode::Char('m') => Action::TogglePlot,
        KeyCode::Char('?') => Action::ToggleHelp,
        KeyCode::Tab => Action::CycleFocus,
        KeyCode::Enter => Action::DrillIn,
        KeyCode::Esc | KeyCode::Backspace => Action::NavigateBack,
        _ => Action::None,
    }
}

fn map_key_search(key: &KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::SearchClear,
        KeyCode::Esc => Action::NavigateBack,
        KeyCode::Enter | KeyCode::Tab | KeyCode::Down => Action::SearchConfirm,
        KeyCode::Char(c) => Action::SearchInput(c),
        KeyCode::Backspace => Action::SearchBackspace,
        _ => Action::None,
    }
}
