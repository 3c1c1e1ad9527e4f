/// Services module
/// Command execution and result presentation, independent of Tauri IPC

pub mod actions;
pub mod presenter;
pub mod runner;

pub use actions::{Action, ActionService};
pub use presenter::ResultPresenter;
pub use runner::{CommandRunner, ShellRunner};
