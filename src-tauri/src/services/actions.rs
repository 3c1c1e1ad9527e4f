/// Actions Service
/// The fixed button set and the one handler every button goes through

use crate::models::ActionInfo;
use crate::services::{CommandRunner, ResultPresenter};
use serde::Deserialize;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// A button in the bottom row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Run,
    Clean,
}

impl Action {
    /// Button order, left to right
    pub const ALL: [Action; 2] = [Action::Run, Action::Clean];

    pub fn id(self) -> &'static str {
        match self {
            Action::Run => "run",
            Action::Clean => "clean",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Action::Run => "RUN",
            Action::Clean => "CLEAN",
        }
    }

    pub fn command(self) -> &'static str {
        match self {
            Action::Run => "make test 2>&1",
            Action::Clean => "make clean 2>&1",
        }
    }

    pub fn info(self) -> ActionInfo {
        ActionInfo {
            id: self.id(),
            label: self.label(),
        }
    }
}

/// Runs an action's command and hands the result to the presenter
pub struct ActionService {
    runner: Arc<dyn CommandRunner>,
    presenter: Arc<ResultPresenter>,
    busy: AtomicBool,
}

/// Clears the busy flag when the run finishes, even on panic
struct RunGuard<'a>(&'a AtomicBool);

impl Drop for RunGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl ActionService {
    pub fn new(runner: Arc<dyn CommandRunner>, presenter: Arc<ResultPresenter>) -> Self {
        Self {
            runner,
            presenter,
            busy: AtomicBool::new(false),
        }
    }

    pub fn presenter(&self) -> &ResultPresenter {
        &self.presenter
    }

    fn try_begin(&self) -> Option<RunGuard<'_>> {
        self.busy
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .ok()
            .map(|_| RunGuard(&self.busy))
    }

    /// Blocks until the command exits
    pub fn execute(&self, action: Action) -> Result<(), String> {
        let _guard = self.try_begin().ok_or_else(|| {
            log::warn!("[Actions] {} rejected, a command is already running", action.label());
            "A command is already running".to_string()
        })?;

        let result = self.runner.run(action.command());
        self.presenter.present(result);
        Ok(())
    }
}
