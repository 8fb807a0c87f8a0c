#[cfg(test)]
mod tests {
    use super::super::*;
    use tempfile::tempdir;

    #[test]
    fn test_display_quotes_whitespace() {
        let cmd = PublishCommand::new(
            "dotnet",
            "My App/App.csproj",
            "build",
            TargetConfig::portable(),
        );
        let line = cmd.display();
        assert!(line.starts_with("dotnet publish \"My App/App.csproj\" -o "));
        assert!(line.ends_with("-c releaseportable --sc false"));
    }

    #[test]
    fn test_to_command_program_and_env() {
        let mut env = HashMap::new();
        env.insert("DOTNET_NOLOGO".to_string(), "1".to_string());
        let cmd = PublishCommand::new(
            "dotnet",
            "App.csproj",
            "build",
            TargetConfig::platform("win-x64"),
        )
        .with_env(env);

        let command = cmd.to_command();
        assert_eq!(command.get_program(), "dotnet");
        assert_eq!(command.get_args().count(), cmd.args().len());
        assert!(command
            .get_envs()
            .any(|(k, v)| k == "DOTNET_NOLOGO" && v == Some(std::ffi::OsStr::new("1"))));
    }

    #[test]
    fn test_run_missing_tool_is_spawn_failure() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("no-such-tool");
        let cmd = PublishCommand::new(
            &missing,
            "App.csproj",
            dir.path(),
            TargetConfig::portable(),
        );

        let result = cmd.run();
        assert_eq!(result.target, "portable");
        assert!(matches!(result.outcome, Outcome::SpawnFailed { .. }));
        assert!(!result.outcome.is_success());
    }

    #[cfg(unix)]
    #[test]
    fn test_run_reports_exit_code() {
        let dir = tempdir().unwrap();
        let cmd = PublishCommand::new("false", "App.csproj", dir.path(), TargetConfig::portable());
        assert_eq!(cmd.run().outcome, Outcome::Failed { code: Some(1) });

        let cmd = PublishCommand::new("true", "App.csproj", dir.path(), TargetConfig::portable());
        assert_eq!(cmd.run().outcome, Outcome::Succeeded);
    }

    #[cfg(unix)]
    #[test]
    fn test_run_with_stdout_to_stderr() {
        let dir = tempdir().unwrap();
        let cmd = PublishCommand::new(
            "true",
            "App.csproj",
            dir.path(),
            TargetConfig::portable(),
        )
        .with_stdout_to_stderr(true);
        assert_eq!(cmd.run().outcome, Outcome::Succeeded);
    }

    #[test]
    fn test_outcome_json_shape() {
        let outcome = InvocationOutcome {
            target: "win-x64".to_string(),
            command: "dotnet publish".to_string(),
            outcome: Outcome::Failed { code: Some(2) },
        };
        let value = serde_json::to_value(&outcome).unwrap();
        assert_eq!(value["target"], "win-x64");
        assert_eq!(value["status"], "failed");
        assert_eq!(value["code"], 2);
    }
}
