use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use crate::github::RepoRef;

use super::state::TuiState;

/// What the loop must do after a key has been applied to the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    None,
    Refetch,
    Quit,
}

/// Apply a key press to the state and report any follow-up work.
pub fn handle_key_event(key_event: KeyEvent, state: &mut TuiState) -> Action {
    if key_event.kind != KeyEventKind::Press {
        return Action::None;
    }

    if state.edit_mode {
        return handle_edit_input(key_event.code, state);
    }

    if state.show_help {
        if matches!(key_event.code, KeyCode::Esc | KeyCode::Char('h') | KeyCode::F(1)) {
            state.show_help = false;
        }
        return Action::None;
    }

    match key_event.code {
        KeyCode::Char('q') | KeyCode::Esc => return Action::Quit,
        KeyCode::Char('h') | KeyCode::F(1) => state.show_help = true,
        KeyCode::Char('g') | KeyCode::Char(' ') => {
            state.app.toggle_layout();
            state.set_status(format!("Layout: {}", state.app.layout));
        }
        KeyCode::Char('r') => return Action::Refetch,
        KeyCode::Char('e') => {
            state.edit_mode = true;
            state.edit_input = state.app.repo.to_string();
        }
        _ => {}
    }

    Action::None
}

/// Keystrokes while the `user/repo` prompt is open.
fn handle_edit_input(code: KeyCode, state: &mut TuiState) -> Action {
    match code {
        KeyCode::Esc => {
            state.edit_mode = false;
            state.edit_input.clear();
        }
        KeyCode::Enter => {
            state.edit_mode = false;
            match state.edit_input.parse::<RepoRef>() {
                Ok(repo) => {
                    state.app.set_repo(repo);
                    state.edit_input.clear();
                    return Action::Refetch;
                }
                Err(e) => state.set_status(e.to_string()),
            }
        }
        KeyCode::Backspace => {
            state.edit_input.pop();
        }
        KeyCode::Char(c) => state.edit_input.push(c),
        _ => {}
    }
    Action::None
}
