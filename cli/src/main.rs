//! CLI entrypoint for the mission orchestrator
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::{CommandFactory, Parser};
use mission_application::{
    ExecutePlanUseCase, MissionQueries, NoOrchestrationLogger, NoProgress,
    OrchestrateMissionInput, OrchestrateMissionUseCase, OrchestrationLogger, OrchestrationResponse,
    ProgressNotifier, RegisterMissionError, RegisterMissionUseCase,
};
use mission_domain::{AgentRegistry, MissionId, MissionPlanner, OutputFormat};
use mission_infrastructure::{
    ConfigLoader, ConfiguredStore, FileConfig, JsonlOrchestrationLogger, StorageBackend,
};
use mission_presentation::{
    BriefArgs, Cli, Command, ConsoleFormatter, OutputFormatter, ProgressReporter, SimpleProgress,
};
use std::io::IsTerminal;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let config = load_config(&cli)?;
    let _log_guard = init_logging(cli.verbose, config.logging.file.as_deref())?;

    info!("Starting Mission Orchestrator");

    ConsoleFormatter::set_color(config.output.color && std::io::stdout().is_terminal());
    let format: OutputFormat = cli
        .output
        .map(Into::into)
        .or(config.output.format)
        .unwrap_or_default();

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    // === Dependency Injection ===
    let store = Arc::new(
        ConfiguredStore::from_config(&config.storage).context("failed to open record store")?,
    );
    let logger = event_logger(config.logging.events.as_deref());
    let planner = MissionPlanner::new(Arc::new(AgentRegistry::builtin()), config.planning.clone());

    match command {
        Command::Agents => {
            let text = match format {
                OutputFormat::Json => ConsoleFormatter::format_agents_json(planner.registry()),
                _ => ConsoleFormatter::format_agents(planner.registry()),
            };
            println!("{}", text);
        }
        Command::Briefs { mission_id } => {
            if store.backend() == StorageBackend::Memory {
                warn!("The memory backend starts empty; configure [storage] backend = \"jsonl\"");
            }
            let mission_id = MissionId::new(mission_id);
            let briefs = MissionQueries::new(store.clone())
                .briefs(&mission_id)
                .await
                .context("failed to read briefs")?;
            let text = match format {
                OutputFormat::Json => ConsoleFormatter::format_briefs_json(&briefs),
                _ => ConsoleFormatter::format_briefs(&mission_id, &briefs),
            };
            println!("{}", text);
        }
        Command::Plan(args) => {
            let progress = progress_notifier(cli.quiet);
            let use_case =
                OrchestrateMissionUseCase::new(planner, store.clone()).with_logger(logger.clone());
            orchestrate(&use_case, &args, format, progress.as_ref()).await?;
        }
        Command::Run(args) => {
            let progress = progress_notifier(cli.quiet);
            let input = build_input(&args);

            match RegisterMissionUseCase::new(store.clone())
                .execute(&input.mission_id, &input.brief)
                .await
            {
                Ok(_) => {}
                Err(RegisterMissionError::AlreadyRegistered(id)) => {
                    info!(mission_id = %id, "Mission already registered, planning again");
                }
                Err(e) => warn!(error = %e, "Could not register mission"),
            }

            let use_case =
                OrchestrateMissionUseCase::new(planner, store.clone()).with_logger(logger.clone());
            let mission_id = input.mission_id.clone();
            let Some(plan) = orchestrate_input(&use_case, input, format, progress.as_ref()).await?
            else {
                bail!("planning failed for mission {}", mission_id);
            };

            let executed = ExecutePlanUseCase::new(store.clone())
                .with_logger(logger)
                .execute_with_progress(&plan, progress.as_ref())
                .await;
            let queued = MissionQueries::new(store)
                .briefs(&mission_id)
                .await
                .map(|b| b.len())
                .unwrap_or(0);

            let line = ConsoleFormatter::format_execution(&mission_id, executed, queued);
            if format == OutputFormat::Json {
                eprintln!("{}", line);
            } else {
                println!("{}", line);
            }
            if !executed {
                bail!("execution of mission {} failed", mission_id);
            }
        }
    }

    Ok(())
}

fn load_config(cli: &Cli) -> Result<FileConfig> {
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).context("failed to load configuration")?
    };

    let issues = config.validate();
    if !issues.is_empty() {
        for issue in &issues {
            eprintln!("config error: {}", issue);
        }
        bail!("invalid configuration ({} issue(s))", issues.len());
    }
    Ok(config)
}

/// Stderr logging filtered by verbosity, plus an optional JSON file layer
fn init_logging(verbose: u8, file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };

    let console = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::new(level));

    let (file_layer, guard) = match file {
        Some(path) => {
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(Path::new("."));
            let name = path
                .file_name()
                .context("logging.file must name a file")?;
            std::fs::create_dir_all(dir)
                .with_context(|| format!("failed to create log directory {}", dir.display()))?;

            let appender = tracing_appender::rolling::never(dir, name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .json()
                .with_writer(writer)
                .with_ansi(false)
                .with_filter(EnvFilter::new("debug"));
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(console)
        .with(file_layer)
        .try_init()
        .context("failed to initialise logging")?;

    Ok(guard)
}

fn event_logger(path: Option<&Path>) -> Arc<dyn OrchestrationLogger> {
    match path.and_then(JsonlOrchestrationLogger::open) {
        Some(logger) => Arc::new(logger),
        None => Arc::new(NoOrchestrationLogger),
    }
}

fn progress_notifier(quiet: bool) -> Box<dyn ProgressNotifier> {
    if quiet {
        Box::new(NoProgress)
    } else if std::io::stderr().is_terminal() {
        Box::new(ProgressReporter::new())
    } else {
        Box::new(SimpleProgress)
    }
}

fn build_input(args: &BriefArgs) -> OrchestrateMissionInput {
    let mission_id = args
        .mission_id
        .clone()
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());
    let now = chrono::Utc::now();
    OrchestrateMissionInput::new(mission_id, args.to_brief(now)).at(now)
}

async fn orchestrate(
    use_case: &OrchestrateMissionUseCase<ConfiguredStore>,
    args: &BriefArgs,
    format: OutputFormat,
    progress: &dyn ProgressNotifier,
) -> Result<()> {
    let input = build_input(args);
    let mission_id = input.mission_id.clone();
    match orchestrate_input(use_case, input, format, progress).await? {
        Some(_) => Ok(()),
        None => bail!("planning failed for mission {}", mission_id),
    }
}

/// Plan and print; returns the plan, or `None` once a JSON failure
/// response has been printed
async fn orchestrate_input(
    use_case: &OrchestrateMissionUseCase<ConfiguredStore>,
    input: OrchestrateMissionInput,
    format: OutputFormat,
    progress: &dyn ProgressNotifier,
) -> Result<Option<mission_domain::OrchestrationPlan>> {
    let result = use_case.execute_with_progress(input, progress).await;

    if format == OutputFormat::Json {
        let plan = result.as_ref().ok().map(|o| o.plan.clone());
        let response = OrchestrationResponse::from(result);
        println!("{}", ConsoleFormatter::format_response_json(&response));
        return Ok(plan);
    }

    let output = result?;
    println!("{}", ConsoleFormatter.format(&output, format));
    Ok(Some(output.plan))
}
