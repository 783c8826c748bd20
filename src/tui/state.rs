// File: ./src/tui/state.rs
// Manages the application state for the TUI.
use crate::context::AppContext;
use crate::model::{FilterGroup, FilterOption, FilterState, Procedure};
use crate::store::ProcedureStore;
use ratatui::widgets::ListState;
use std::sync::Arc;
use strum::IntoEnumIterator;

#[derive(PartialEq, Clone, Copy)]
pub enum InputMode {
    Normal,
    Filtering,
}

/// One row of the filter panel. Headers carry the group title and are
/// skipped by the cursor.
#[derive(Debug)]
pub enum FilterRow {
    Header(FilterGroup),
    Option(FilterOption),
}

pub struct AppState {
    // Data
    pub ctx: Arc<dyn AppContext>,
    pub store: ProcedureStore,
    /// Procedures currently visible, filtered and sorted.
    pub procedures: Vec<Procedure>,

    // UI State
    pub list_state: ListState,
    pub filter_rows: Vec<FilterRow>,
    pub filter_cursor: ListState,
    pub mode: InputMode,
    pub message: String,

    // Filter State
    pub filters: FilterState,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Creates a new AppState with the default platform context.
    pub fn new() -> Self {
        let ctx = Arc::new(crate::context::StandardContext::new(None));
        Self::new_with_ctx(ctx)
    }

    /// Creates a new AppState with an explicit AppContext.
    pub fn new_with_ctx(ctx: Arc<dyn AppContext>) -> Self {
        let mut l_state = ListState::default();
        l_state.select(Some(0));

        Self {
            ctx,
            store: ProcedureStore::new(),
            procedures: vec![],
            list_state: l_state,
            filter_rows: Vec::new(),
            filter_cursor: ListState::default(),
            mode: InputMode::Normal,
            message: "Loading...".to_string(),
            filters: FilterState::default(),
        }
    }

    /// Rebuilds the filter panel rows from the store's catalog. Called once
    /// after a snapshot (re)load; the catalog never changes in between, so
    /// toggling filters cannot add or remove rows.
    pub fn rebuild_filter_rows(&mut self) {
        self.filter_rows.clear();
        for group in FilterGroup::iter() {
            let options: Vec<FilterOption> =
                self.store.catalog().group(group).cloned().collect();
            if options.is_empty() {
                continue;
            }
            self.filter_rows.push(FilterRow::Header(group));
            self.filter_rows
                .extend(options.into_iter().map(FilterRow::Option));
        }
        // Land on the first selectable row.
        self.filter_cursor.select(None);
        self.next_filter_row();
    }

    pub fn refresh_filtered_view(&mut self) {
        self.procedures = self.store.visible(&self.filters);

        let len = self.procedures.len();
        if len == 0 {
            self.list_state.select(None);
        } else {
            let current = self.list_state.selected().unwrap_or(0);
            if current >= len {
                self.list_state.select(Some(len - 1)); // Clamp
            } else {
                self.list_state.select(Some(current));
            }
        }
    }

    pub fn get_selected_procedure(&self) -> Option<&Procedure> {
        if let Some(idx) = self.list_state.selected() {
            self.procedures.get(idx)
        } else {
            None
        }
    }

    pub fn selected_filter_option(&self) -> Option<&FilterOption> {
        match self.filter_cursor.selected() {
            Some(idx) => match self.filter_rows.get(idx) {
                Some(FilterRow::Option(option)) => Some(option),
                _ => None,
            },
            None => None,
        }
    }

    /// Toggles the highlighted filter option and recomputes the visible list.
    pub fn toggle_selected_filter(&mut self) {
        if let Some(option) = self.selected_filter_option() {
            let group = option.group;
            let value = option.value.clone();
            self.filters.toggle(group, &value);
            self.refresh_filtered_view();
        }
    }

    /// Clears every filter and recomputes the visible list.
    pub fn reset_filters(&mut self) {
        self.filters.reset();
        self.refresh_filtered_view();
    }

    pub fn toggle_order(&mut self) {
        self.filters.order = self.filters.order.toggled();
        self.refresh_filtered_view();
    }

    // --- NAVIGATION ---
    pub fn next(&mut self) {
        if self.procedures.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => {
                if i >= self.procedures.len() - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    pub fn previous(&mut self) {
        if self.procedures.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => {
                if i == 0 {
                    self.procedures.len() - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    pub fn jump_forward(&mut self, step: usize) {
        if !self.procedures.is_empty() {
            let current = self.list_state.selected().unwrap_or(0);
            self.list_state
                .select(Some((current + step).min(self.procedures.len() - 1)));
        }
    }

    pub fn jump_backward(&mut self, step: usize) {
        if !self.procedures.is_empty() {
            let current = self.list_state.selected().unwrap_or(0);
            self.list_state.select(Some(current.saturating_sub(step)));
        }
    }

    pub fn next_filter_row(&mut self) {
        let len = self.filter_rows.len();
        if len == 0 {
            return;
        }
        let mut i = match self.filter_cursor.selected() {
            Some(i) => (i + 1) % len,
            None => 0,
        };
        // Step over group headers. Status and order rows always exist, so
        // this terminates.
        while matches!(self.filter_rows[i], FilterRow::Header(_)) {
            i = (i + 1) % len;
        }
        self.filter_cursor.select(Some(i));
    }

    pub fn previous_filter_row(&mut self) {
        let len = self.filter_rows.len();
        if len == 0 {
            return;
        }
        let mut i = match self.filter_cursor.selected() {
            Some(i) => {
                if i == 0 { len - 1 } else { i - 1 }
            }
            None => 0,
        };
        while matches!(self.filter_rows[i], FilterRow::Header(_)) {
            i = if i == 0 { len - 1 } else { i - 1 };
        }
        self.filter_cursor.select(Some(i));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn dummy_procedure() -> Procedure {
        Procedure::new("2025/0001(COD)", "Test procedure")
    }

    fn loaded_state() -> AppState {
        let mut state = AppState::new();
        let mut a = dummy_procedure();
        a.year = "2024".to_string();
        a.date_raw = "2024-05-01".to_string();
        a.subjects = vec!["3".to_string()];
        let mut b = Procedure::new("2025/0002(COD)", "Another procedure");
        b.year = "2025".to_string();
        b.date_raw = "2025-05-01".to_string();
        b.subjects = vec!["7".to_string()];
        state.store.load(vec![a, b], &HashMap::new());
        state.rebuild_filter_rows();
        state.refresh_filtered_view();
        state
    }

    #[test]
    fn test_navigation_next_wraps() {
        let mut state = AppState::new();
        state.procedures = vec![dummy_procedure(), dummy_procedure(), dummy_procedure()];

        state.list_state.select(Some(0));

        state.next(); // 1
        assert_eq!(state.list_state.selected(), Some(1));

        state.next(); // 2
        assert_eq!(state.list_state.selected(), Some(2));

        state.next(); // Wrap to 0
        assert_eq!(state.list_state.selected(), Some(0));
    }

    #[test]
    fn test_navigation_previous_wraps() {
        let mut state = AppState::new();
        state.procedures = vec![dummy_procedure(), dummy_procedure(), dummy_procedure()];

        state.list_state.select(Some(0));

        state.previous(); // Wrap to last (2)
        assert_eq!(state.list_state.selected(), Some(2));

        state.previous(); // 1
        assert_eq!(state.list_state.selected(), Some(1));
    }

    #[test]
    fn test_navigation_empty_list_safety() {
        let mut state = AppState::new();
        state.procedures = vec![];

        // Should not panic
        state.next();
        state.previous();
        state.jump_forward(10);
        state.jump_backward(10);
    }

    #[test]
    fn test_filter_cursor_skips_headers() {
        let mut state = loaded_state();

        // Cursor starts on the first option, not the STATUS header.
        let idx = state.filter_cursor.selected().unwrap();
        assert!(matches!(state.filter_rows[idx], FilterRow::Option(_)));

        // Walking the whole ring in both directions never lands on a header.
        for _ in 0..state.filter_rows.len() * 2 {
            state.next_filter_row();
            let idx = state.filter_cursor.selected().unwrap();
            assert!(matches!(state.filter_rows[idx], FilterRow::Option(_)));
        }
        for _ in 0..state.filter_rows.len() * 2 {
            state.previous_filter_row();
            let idx = state.filter_cursor.selected().unwrap();
            assert!(matches!(state.filter_rows[idx], FilterRow::Option(_)));
        }
    }

    #[test]
    fn test_toggle_hides_non_matching_rows() {
        let mut state = loaded_state();
        assert_eq!(state.procedures.len(), 2);

        state.filters.toggle(FilterGroup::Years, "2025");
        state.refresh_filtered_view();

        assert_eq!(state.procedures.len(), 1);
        assert_eq!(state.procedures[0].reference, "2025/0002(COD)");
        // Selection stays inside the shrunken list.
        assert!(state.list_state.selected().unwrap() < state.procedures.len());
    }

    #[test]
    fn test_reset_restores_full_view() {
        let mut state = loaded_state();
        state.filters.toggle(FilterGroup::Subjects, "3");
        state.toggle_order();
        state.refresh_filtered_view();
        assert_eq!(state.procedures.len(), 1);

        state.reset_filters();
        assert_eq!(state.procedures.len(), 2);
        assert!(!state.filters.is_active());
    }

    #[test]
    fn test_filter_rows_do_not_change_when_toggling() {
        let mut state = loaded_state();
        let before = state.filter_rows.len();

        state.filters.toggle(FilterGroup::Years, "2025");
        state.refresh_filtered_view();

        // The catalog was built at load time; hiding rows must not shrink it.
        assert_eq!(state.filter_rows.len(), before);
    }
}
