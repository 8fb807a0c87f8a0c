//! Publish service for orchestrating the multi-target build
//!
//! Invokes the publish tool once per target, strictly in order. A failed
//! invocation is recorded and the remaining targets still run.

use serde::Serialize;
use std::collections::HashMap;
use std::path::PathBuf;
use tracing::{debug, info, warn};

use crate::{
    config::Config,
    publisher::{InvocationOutcome, PublishCommand},
    target::TargetConfig,
};

/// Everything needed to publish every target
#[derive(Debug, Clone)]
pub struct PublishPlan {
    pub tool: String,
    pub project: PathBuf,
    pub build_root: PathBuf,
    pub env: HashMap<String, String>,
    pub targets: Vec<TargetConfig>,
    /// Keep stdout for our own output by routing the tool's stdout to stderr
    pub stdout_to_stderr: bool,
}

impl From<Config> for PublishPlan {
    fn from(config: Config) -> Self {
        Self {
            tool: config.tool,
            project: config.project,
            build_root: config.build_root,
            env: config.env,
            targets: config.targets,
            stdout_to_stderr: false,
        }
    }
}

impl PublishPlan {
    pub fn commands(&self) -> Vec<PublishCommand> {
        self.targets
            .iter()
            .map(|target| {
                PublishCommand::new(
                    &self.tool,
                    &self.project,
                    &self.build_root,
                    target.clone(),
                )
                .with_env(self.env.clone())
                .with_stdout_to_stderr(self.stdout_to_stderr)
            })
            .collect()
    }
}

/// Outcomes of one run, in invocation order
#[derive(Debug, Clone, Default, Serialize)]
pub struct PublishReport {
    pub invocations: Vec<InvocationOutcome>,
}

impl PublishReport {
    pub fn all_succeeded(&self) -> bool {
        self.invocations.iter().all(|i| i.outcome.is_success())
    }

    pub fn failures(&self) -> Vec<&InvocationOutcome> {
        self.invocations
            .iter()
            .filter(|i| !i.outcome.is_success())
            .collect()
    }
}

/// Service for running the publish plan
pub struct PublishService;

impl PublishService {
    /// Publish every target in order, never stopping early
    pub fn run(plan: &PublishPlan) -> PublishReport {
        if which::which(&plan.tool).is_err() {
            warn!("Publish tool {:?} was not found on PATH", plan.tool);
        }

        let mut report = PublishReport::default();
        for command in plan.commands() {
            report.invocations.push(command.run());
        }

        let failed = report.failures().len();
        if failed == 0 {
            info!(
                "Published {} target(s) to {:?}",
                report.invocations.len(),
                plan.build_root
            );
        } else {
            warn!(
                "{} of {} publish invocation(s) failed",
                failed,
                report.invocations.len()
            );
        }

        report
    }

    /// Rendered command lines without running anything
    pub fn plan_lines(plan: &PublishPlan) -> Vec<String> {
        let lines: Vec<String> = plan.commands().iter().map(|c| c.display()).collect();
        debug!("Planned {} invocation(s)", lines.len());
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::publisher::Outcome;
    use tempfile::tempdir;

    fn plan_with_tool(tool: &str) -> PublishPlan {
        let mut plan = PublishPlan::from(Config::default());
        plan.tool = tool.to_string();
        plan
    }

    #[test]
    fn test_plan_lines_order() {
        let lines = PublishService::plan_lines(&plan_with_tool("dotnet"));
        assert_eq!(lines.len(), 4);
        for (line, name) in lines
            .iter()
            .zip(["win-x64", "linux-x64", "osx-x64", "portable"])
        {
            assert!(line.starts_with("dotnet publish "));
            assert!(line.contains(name));
        }
        assert!(lines[3].ends_with("-c releaseportable --sc false"));
    }

    #[test]
    fn test_missing_tool_still_attempts_every_target() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing-tool");
        let plan = plan_with_tool(missing.to_str().unwrap());

        let report = PublishService::run(&plan);
        assert_eq!(report.invocations.len(), 4);
        assert!(!report.all_succeeded());
        assert_eq!(report.failures().len(), 4);
        assert!(report
            .invocations
            .iter()
            .all(|i| matches!(i.outcome, Outcome::SpawnFailed { .. })));
    }

    #[cfg(unix)]
    #[test]
    fn test_successful_tool() {
        let report = PublishService::run(&plan_with_tool("true"));
        assert!(report.all_succeeded());
        assert!(report.failures().is_empty());
    }

    #[test]
    fn test_empty_report_succeeds() {
        assert!(PublishReport::default().all_succeeded());
    }
}
