use anyhow::{Context, Result};
use clap::Parser;
use multipub::{
    cli::{Cli, Commands},
    config::Config,
    service::{PublishPlan, PublishService},
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let mut cli = Cli::parse();

    // Initialize logging to stderr; silent unless asked so the tool's own output stands alone
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("off")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let command = cli.command.take().unwrap_or(Commands::Publish {
        strict: false,
        json: false,
    });

    match command {
        Commands::Publish { strict, json } => {
            let config = load_config(&cli)?;
            let strict = strict || config.strict;
            let mut plan = PublishPlan::from(config);
            plan.stdout_to_stderr = json;
            let report = PublishService::run(&plan);

            if json {
                let out = serde_json::to_string_pretty(&report)
                    .context("Failed to serialize publish report")?;
                println!("{}", out);
            }

            // Invocation failures only affect the exit code when asked to
            if strict && !report.all_succeeded() {
                std::process::exit(1);
            }
        }
        Commands::Plan { json } => {
            let config = load_config(&cli)?;
            let plan = PublishPlan::from(config);
            let lines = PublishService::plan_lines(&plan);
            if json {
                let out = serde_json::to_string_pretty(&lines)
                    .context("Failed to serialize publish plan")?;
                println!("{}", out);
            } else {
                for line in lines {
                    println!("{}", line);
                }
            }
        }
        Commands::Version => {
            println!("multipub {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}

/// Config file values, overridden by whatever was given on the command line
fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(tool) = &cli.tool {
        config.tool = tool.clone();
    }
    if let Some(project) = &cli.project {
        config.project = project.clone();
    }
    if let Some(build_root) = &cli.build_root {
        config.build_root = build_root.clone();
    }
    Ok(config)
}
