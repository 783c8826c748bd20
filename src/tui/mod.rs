// File: ./src/tui/mod.rs
// Entry point and main loop for the TUI application.
pub mod action;
pub mod handlers;
pub mod state;
pub mod view;

use crate::config::Config;
use crate::context::SharedContext;
use crate::model::FilterState;
use crate::storage::LocalStorage;
use crate::tui::action::Action;
use crate::tui::state::AppState;
use crate::tui::view::draw;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, MouseEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use simplelog::WriteLogger;
use std::{io, path::PathBuf, time::Duration};

pub fn run(ctx: SharedContext, snapshot_override: Option<PathBuf>) -> Result<()> {
    // --- 1. PREAMBLE & CONFIG ---
    init_logging(&ctx);

    // Panic Hook
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        use std::io::Write;
        if let Ok(mut file) = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("dossier_panic.log")
        {
            let _ = writeln!(file, "PANIC: {:?}", info);
        }
        default_hook(info);
    }));

    let cfg = match Config::load(ctx.as_ref()) {
        Ok(c) => c,
        Err(e) => {
            // A syntax or permission error is fatal; only a missing file
            // means a fresh install.
            if !Config::is_missing_config_error(&e) {
                eprintln!("Error loading configuration:\n{}", e);
                std::process::exit(1);
            }

            let new_config = Config::default();
            if let Err(e) = new_config.save(ctx.as_ref()) {
                eprintln!("Warning: Could not save config file: {}", e);
            } else if let Ok(path) = Config::get_path_string(ctx.as_ref()) {
                log::info!("Default configuration written to {}", path);
            }
            new_config
        }
    };

    let snapshot_path = snapshot_override.or_else(|| cfg.resolve_snapshot_path(ctx.as_ref()));

    // --- 2. LOAD SNAPSHOT ---
    // Read before entering the alternate screen so a malformed file reports
    // on a normal terminal.
    let procedures = match &snapshot_path {
        Some(path) => LocalStorage::load_snapshot(path, &cfg.date_format)?,
        None => Vec::new(),
    };

    // --- 3. TERMINAL SETUP ---
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // --- 4. STATE INIT ---
    let mut app_state = AppState::new_with_ctx(ctx.clone());
    app_state.filters = FilterState::with_order(cfg.default_order);
    app_state.store.load(procedures, &cfg.subject_labels);
    app_state.rebuild_filter_rows();
    app_state.refresh_filtered_view();
    app_state.message = match &snapshot_path {
        Some(path) => format!(
            "Loaded {} procedures from {}",
            app_state.store.len(),
            path.display()
        ),
        None => "No snapshot configured.".to_string(),
    };

    // --- 5. UI LOOP ---
    loop {
        terminal.draw(|f| draw(f, &mut app_state))?;

        if event::poll(Duration::from_millis(50))? {
            match event::read()? {
                Event::Mouse(mouse) => match mouse.kind {
                    MouseEventKind::ScrollDown => app_state.next(),
                    MouseEventKind::ScrollUp => app_state.previous(),
                    _ => {}
                },
                Event::Key(key) => {
                    // Filter out KeyRelease events to prevent double input on Windows
                    if key.kind == event::KeyEventKind::Release {
                        continue;
                    }

                    match handlers::handle_key_event(key, &mut app_state) {
                        Some(Action::Quit) => break,
                        Some(Action::Reload) => {
                            reload_snapshot(&mut app_state, &snapshot_path, &cfg);
                        }
                        None => {}
                    }
                }
                _ => {}
            }
        }
    }

    // --- 6. CLEANUP ---
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    Ok(())
}

/// File logger in the data directory; stdout belongs to the TUI.
fn init_logging(ctx: &SharedContext) {
    let Some(log_path) = ctx.get_log_path() else {
        return;
    };
    if let Ok(file) = std::fs::File::create(&log_path) {
        let _ = WriteLogger::init(
            log::LevelFilter::Info,
            simplelog::Config::default(),
            file,
        );
    }
}

/// Re-reads the snapshot in place. Failures keep the current view and
/// surface in the status line instead of tearing the terminal down.
fn reload_snapshot(state: &mut AppState, snapshot_path: &Option<PathBuf>, cfg: &Config) {
    let Some(path) = snapshot_path else {
        state.message = "No snapshot configured.".to_string();
        return;
    };
    match LocalStorage::load_snapshot(path, &cfg.date_format) {
        Ok(procedures) => {
            state.store.load(procedures, &cfg.subject_labels);
            state.rebuild_filter_rows();
            state.refresh_filtered_view();
            state.message = format!("Reloaded {} procedures.", state.store.len());
        }
        Err(e) => {
            log::error!("Snapshot reload failed: {:#}", e);
            state.message = format!("Reload failed: {}", e);
        }
    }
}
