use crate::{
    config::PlanOverrides,
    env::EnvManager,
    error::CliError,
    output::FilePlan,
};
use clap::Parser;
use commands::Commands;
use ddl_syntax::{DdlError, LoadPlan, PlanOptions, TableDefinition, extract_first_create_table};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod env;
mod error;
mod output;

#[derive(Parser)]
#[command(
    name = "loadkeys",
    version = "0.1.0",
    about = "Drop and restore table keys around bulk loads"
)]
struct Cli {
    #[arg(long, short, global = true, help = "Enable debug logging")]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();

    // Logs go to stderr so generated SQL can be piped
    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Extract { file } => {
            let script = tokio::fs::read_to_string(&file).await?;
            let statement = extract_first_create_table(&script);
            if statement.is_empty() {
                return Err(DdlError::NoCreateTable.into());
            }
            println!("{statement}");
        }
        Commands::Inspect { file, output } => {
            let script = tokio::fs::read_to_string(&file).await?;
            let table = TableDefinition::from_script(&script).ok_or(DdlError::NoCreateTable)?;
            output::write_json(&table, output).await?;
        }
        Commands::Plan {
            files,
            json,
            engines,
            skip_indexes,
            skip_constraints,
            env_file,
        } => {
            let mut env = EnvManager::new();
            if let Some(path) = env_file {
                env.load_from_file(path)?;
            }
            let overrides = PlanOverrides {
                engines,
                skip_indexes,
                skip_constraints,
            };
            let options = config::plan_options(&env, &overrides)?;
            info!(
                files = files.len(),
                engines = %options.engines,
                "Building load plans"
            );

            let plans = build_plans(files, options).await?;
            output::print_plans(&plans, json).await?;
        }
    }

    Ok(())
}

/// Reads and parses every file on its own task. Results keep argument order.
async fn build_plans(files: Vec<String>, options: PlanOptions) -> Result<Vec<FilePlan>, CliError> {
    let options = Arc::new(options);
    let handles: Vec<_> = files
        .into_iter()
        .map(|file| {
            let options = Arc::clone(&options);
            tokio::spawn(async move {
                let script = tokio::fs::read_to_string(&file).await?;
                let plan = LoadPlan::from_script(&script, &options);
                Ok::<_, CliError>((file, plan))
            })
        })
        .collect();

    let mut plans = Vec::with_capacity(handles.len());
    for handle in handles {
        let (file, plan) = handle.await??;
        match plan {
            Ok(plan) => plans.push(FilePlan { file, plan }),
            Err(DdlError::NoCreateTable) => {
                warn!(file = %file, "No CREATE TABLE statement found, skipping");
            }
            Err(err) => return Err(err.into()),
        }
    }

    Ok(plans)
}
