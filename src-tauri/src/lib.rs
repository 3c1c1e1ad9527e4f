/// Tester application
/// Desktop front for `make test` / `make clean` with Tauri backend + static HTML frontend
///
/// Module structure:
/// - commands: Tauri IPC handlers (frontend → backend)
/// - services: command runner, result presenter, action table
/// - models: shared data types

mod commands;
mod models;
mod services;

use services::{ActionService, ResultPresenter, ShellRunner};
use std::sync::Arc;
use tauri::{Emitter, Manager};

/// Event carrying a `DisplayUpdatedPayload` after every run
pub const DISPLAY_UPDATED_EVENT: &str = "display-updated";

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .setup(|app| {
            if cfg!(debug_assertions) {
                app.handle().plugin(
                    tauri_plugin_log::Builder::default()
                        .level(log::LevelFilter::Info)
                        .build(),
                )?;
            }

            let app_handle = app.handle().clone();
            let presenter = Arc::new(ResultPresenter::new(move |payload| {
                if let Err(e) = app_handle.emit(DISPLAY_UPDATED_EVENT, payload) {
                    log::error!("[Presenter] Failed to emit display update: {}", e);
                }
            }));

            // Commands run in the directory the app was started from
            let cwd = std::env::current_dir()?;
            log::info!("[Runner] Working directory: {}", cwd.display());
            let runner = Arc::new(ShellRunner::with_cwd(cwd));
            app.manage(Arc::new(ActionService::new(runner, presenter)));

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::actions::list_actions,
            commands::actions::display_state,
            commands::actions::run_action,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
