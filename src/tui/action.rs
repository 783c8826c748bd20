// Defines actions for TUI interaction and state updates.

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    /// Leave the application.
    Quit,
    /// Re-read the snapshot from disk and rebuild the view.
    Reload,
}
