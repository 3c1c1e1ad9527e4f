/// Models module
/// Data types shared between the runner, the presenter and the frontend
/// Anything sent over IPC derives Serialize

use serde::{Deserialize, Serialize};

/// Command execution result
///
/// Owned by the run that produced it and moved into the presenter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandResult {
    /// Combined stdout and stderr, in the order the child wrote them
    pub output: String,
    pub exit_code: i32,
}

impl CommandResult {
    pub fn new(output: impl Into<String>, exit_code: i32) -> Self {
        Self {
            output: output.into(),
            exit_code,
        }
    }

    pub fn succeeded(&self) -> bool {
        self.exit_code == 0
    }

    pub fn status(&self) -> Status {
        if self.succeeded() {
            Status::Success
        } else {
            Status::Failure
        }
    }
}

/// Outcome shown by the status indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Failure,
}

impl Status {
    /// Background color of the status field
    pub fn color(self) -> &'static str {
        match self {
            Status::Success => "green",
            Status::Failure => "red",
        }
    }
}

/// In-memory display surface: the log text area plus the status indicator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayState {
    pub text: String,
    pub read_only: bool,
    pub status: Option<Status>,
}

impl DisplayState {
    pub fn new() -> Self {
        Self {
            text: String::new(),
            read_only: true,
            status: None,
        }
    }
}

impl Default for DisplayState {
    fn default() -> Self {
        Self::new()
    }
}

/// Event payload for display changes
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayUpdatedPayload {
    pub text: String,
    pub color: Option<&'static str>,
}

impl From<&DisplayState> for DisplayUpdatedPayload {
    fn from(state: &DisplayState) -> Self {
        Self {
            text: state.text.clone(),
            color: state.status.map(Status::color),
        }
    }
}

/// Button descriptor sent to the frontend
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionInfo {
    pub id: &'static str,
    pub label: &'static str,
}
