/// Commands module
/// Tauri IPC handlers, the boundary between the webview and the services

pub mod actions;
