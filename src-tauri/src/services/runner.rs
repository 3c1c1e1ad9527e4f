/// Runner Service
/// Executes a shell command line to completion and captures its combined output

use crate::models::CommandResult;
use std::path::PathBuf;
use std::process::{Command, ExitStatus};

/// Exit code reported when the shell itself could not be started
pub const SPAWN_FAILURE_CODE: i32 = 127;

/// Runs a command line and blocks until it exits
pub trait CommandRunner: Send + Sync {
    fn run(&self, command: &str) -> CommandResult;
}

/// Runs commands through the platform shell
///
/// The default runner inherits the working directory of this process.
#[derive(Debug, Default, Clone)]
pub struct ShellRunner {
    cwd: Option<PathBuf>,
}

impl ShellRunner {
    pub fn with_cwd(cwd: impl Into<PathBuf>) -> Self {
        Self {
            cwd: Some(cwd.into()),
        }
    }

    fn shell_command(command: &str) -> Command {
        #[cfg(target_os = "windows")]
        let cmd = {
            let mut cmd = Command::new("cmd");
            cmd.arg("/C").arg(format!("({}) 2>&1", command));
            cmd
        };

        // The shell's stderr is pointed at stdout before the line runs, so
        // the child's writes interleave in a single pipe.
        #[cfg(not(target_os = "windows"))]
        let cmd = {
            let mut cmd = Command::new("sh");
            cmd.arg("-c").arg(format!("exec 2>&1\n{}", command));
            cmd
        };

        cmd
    }
}

impl CommandRunner for ShellRunner {
    fn run(&self, command: &str) -> CommandResult {
        let mut cmd = Self::shell_command(command);

        if let Some(dir) = &self.cwd {
            cmd.current_dir(dir);
        }

        log::info!("[Runner] Running: {}", command);

        let result = match cmd.output() {
            Ok(output) => {
                let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
                // Only the shell's own early diagnostics can land here
                text.push_str(&String::from_utf8_lossy(&output.stderr));
                CommandResult::new(text, exit_code(output.status))
            }
            Err(e) => CommandResult::new(
                format!("Failed to execute command: {}\n", e),
                SPAWN_FAILURE_CODE,
            ),
        };

        log::info!("[Runner] '{}' exited with {}", command, result.exit_code);
        result
    }
}

/// Signal deaths follow the shell convention of 128 + signal number
fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    1
}
