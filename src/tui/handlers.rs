// File: src/tui/handlers.rs
// Handles keyboard input for the TUI.
use crate::tui::action::Action;
use crate::tui::state::{AppState, InputMode};
use crossterm::event::{KeyCode, KeyEvent};

pub fn handle_key_event(key: KeyEvent, state: &mut AppState) -> Option<Action> {
    match state.mode {
        InputMode::Normal => match key.code {
            KeyCode::Char('q') => return Some(Action::Quit),
            KeyCode::Char('R') => return Some(Action::Reload),
            KeyCode::Char('f') => {
                state.mode = InputMode::Filtering;
            }
            KeyCode::Char('o') => {
                state.toggle_order();
                state.message = format!("Order: {}", state.filters.order);
            }
            KeyCode::Char('r') => {
                state.reset_filters();
                state.message = "Filters reset.".to_string();
            }
            KeyCode::Esc => {
                if state.filters.is_active() {
                    state.reset_filters();
                    state.message = "Filters cleared.".to_string();
                }
            }
            KeyCode::Down | KeyCode::Char('j') => state.next(),
            KeyCode::Up | KeyCode::Char('k') => state.previous(),
            KeyCode::PageDown => state.jump_forward(10),
            KeyCode::PageUp => state.jump_backward(10),
            _ => {}
        },
        InputMode::Filtering => match key.code {
            KeyCode::Esc | KeyCode::Char('f') | KeyCode::Char('q') => {
                state.mode = InputMode::Normal;
            }
            KeyCode::Down | KeyCode::Char('j') => state.next_filter_row(),
            KeyCode::Up | KeyCode::Char('k') => state.previous_filter_row(),
            KeyCode::Char(' ') | KeyCode::Enter => {
                state.toggle_selected_filter();
                state.message =
                    format!("{} of {} visible", state.procedures.len(), state.store.len());
            }
            KeyCode::Char('r') => {
                state.reset_filters();
                state.message = "Filters reset.".to_string();
            }
            KeyCode::Char('o') => {
                state.toggle_order();
                state.message = format!("Order: {}", state.filters.order);
            }
            _ => {}
        },
    }
    None
}
