use std::io;
use std::time::Duration;

use anyhow::Context;
use crossterm::event::{poll, read, Event};
use crossterm::execute;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::{Frame, Terminal};

use crate::cli::CommonArgs;
use crate::github::CommitSource;
use crate::state::AppState;

use super::events::{handle_key_event, Action};
use super::state::TuiState;
use super::views::{draw_chart_view, draw_help_overlay};

/// Draw the whole screen from `state`. Called after every state change.
pub fn render(f: &mut Frame, state: &TuiState) {
    let size = f.size();
    draw_chart_view(f, size, state);
    if state.show_help {
        draw_help_overlay(f, size);
    }
}

pub fn run(common: &CommonArgs) -> anyhow::Result<()> {
    let repo = common.repo_ref()?;
    let source = CommitSource::from_args(common)?;

    let mut state = TuiState::new(AppState::new(repo));
    let first = source.fetch_with_progress(&state.app.repo, true);
    state.app.apply_fetch(first);

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let result = event_loop(&mut terminal, &mut state, &source);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn event_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    state: &mut TuiState,
    source: &CommitSource,
) -> anyhow::Result<()> {
    terminal.draw(|f| render(f, state))?;

    loop {
        if !poll(Duration::from_millis(250))? {
            // let expired status messages disappear
            if state.status_message.is_some() && state.current_status().is_none() {
                state.status_message = None;
                terminal.draw(|f| render(f, state))?;
            }
            continue;
        }

        match read()? {
            Event::Key(key_event) => match handle_key_event(key_event, state) {
                Action::Quit => break,
                Action::Refetch => {
                    state.loading = true;
                    terminal.draw(|f| render(f, state))?;
                    let result = source.fetch(&state.app.repo);
                    state.app.apply_fetch(result);
                    state.loading = false;
                }
                Action::None => {}
            },
            Event::Resize(_, _) => {}
            _ => continue,
        }

        terminal.draw(|f| render(f, state))?;
    }

    Ok(())
}
