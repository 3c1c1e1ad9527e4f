/// Action Commands
/// Button presses from the webview land here

use crate::models::{ActionInfo, DisplayUpdatedPayload};
use crate::services::{Action, ActionService};
use std::sync::Arc;
use tauri::State;

/// Buttons to render, in order
#[tauri::command]
pub fn list_actions() -> Vec<ActionInfo> {
    Action::ALL.iter().map(|action| action.info()).collect()
}

/// Current display, for a webview that (re)loaded after a run
#[tauri::command]
pub fn display_state(service: State<'_, Arc<ActionService>>) -> DisplayUpdatedPayload {
    service.presenter().snapshot()
}

/// Run the action's fixed command and present its result
///
/// The child runs on the blocking pool; the webview stays in its busy state
/// until this resolves.
#[tauri::command]
pub async fn run_action(
    service: State<'_, Arc<ActionService>>,
    action: Action,
) -> Result<(), String> {
    let service = service.inner().clone();

    tauri::async_runtime::spawn_blocking(move || service.execute(action))
        .await
        .map_err(|e| format!("Command task failed: {}", e))?
}
