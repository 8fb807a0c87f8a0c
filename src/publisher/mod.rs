use serde::Serialize;
use std::collections::HashMap;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tracing::{debug, info, warn};

use crate::target::TargetConfig;

#[cfg(test)]
mod tests;

/// How a single publish invocation ended
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    Succeeded,
    /// The tool ran but exited non-zero; `code` is `None` when killed by a signal
    Failed { code: Option<i32> },
    /// The tool could not be started at all
    SpawnFailed { message: String },
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Succeeded)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct InvocationOutcome {
    pub target: String,
    pub command: String,
    #[serde(flatten)]
    pub outcome: Outcome,
}

/// One tool invocation for one target
pub struct PublishCommand {
    tool: OsString,
    project: PathBuf,
    build_root: PathBuf,
    target: TargetConfig,
    env: HashMap<String, String>,
    stdout_to_stderr: bool,
}

impl PublishCommand {
    pub fn new(
        tool: impl Into<OsString>,
        project: impl AsRef<Path>,
        build_root: impl AsRef<Path>,
        target: TargetConfig,
    ) -> Self {
        Self {
            tool: tool.into(),
            project: project.as_ref().to_path_buf(),
            build_root: build_root.as_ref().to_path_buf(),
            target,
            env: HashMap::new(),
            stdout_to_stderr: false,
        }
    }

    pub fn with_env(mut self, env: HashMap<String, String>) -> Self {
        self.env = env;
        self
    }

    /// Send the tool's stdout to our stderr, keeping stdout free for a report
    pub fn with_stdout_to_stderr(mut self, redirect: bool) -> Self {
        self.stdout_to_stderr = redirect;
        self
    }

    pub fn args(&self) -> Vec<OsString> {
        self.target.publish_args(&self.project, &self.build_root)
    }

    pub fn to_command(&self) -> Command {
        let mut cmd = Command::new(&self.tool);
        cmd.args(self.args());
        cmd.envs(&self.env);
        if self.stdout_to_stderr {
            cmd.stdout(Stdio::from(std::io::stderr()));
        }
        cmd
    }

    /// Shell-like rendering, quoting arguments that contain whitespace
    pub fn display(&self) -> String {
        std::iter::once(self.tool.clone())
            .chain(self.args())
            .map(|arg| {
                let arg = arg.to_string_lossy().into_owned();
                if arg.is_empty() || arg.chars().any(char::is_whitespace) {
                    format!("\"{}\"", arg)
                } else {
                    arg
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Run the tool to completion. A failing tool is reported, never propagated.
    pub fn run(&self) -> InvocationOutcome {
        let mut cmd = self.to_command();
        let line = self.display();

        info!("Publishing target: {}", self.target.name);
        debug!("Running command: {}", line);

        let outcome = match cmd.status() {
            Ok(status) if status.success() => {
                debug!(
                    "Published {} to {:?}",
                    self.target.name,
                    self.target.output_dir(&self.build_root)
                );
                Outcome::Succeeded
            }
            Ok(status) => {
                warn!(
                    "Publish for {} exited with status {}",
                    self.target.name, status
                );
                Outcome::Failed {
                    code: status.code(),
                }
            }
            Err(e) => {
                warn!(
                    "Failed to start {:?} for {}: {}",
                    self.tool, self.target.name, e
                );
                Outcome::SpawnFailed {
                    message: e.to_string(),
                }
            }
        };

        InvocationOutcome {
            target: self.target.name.clone(),
            command: line,
            outcome,
        }
    }
}
