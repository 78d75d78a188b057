use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use cashflow::cli::{
    handle_compare, handle_expense_command, handle_export_command, handle_forecast,
    handle_income_command, handle_insights, handle_metrics, handle_scenario_command,
    handle_settings_command,
};
use cashflow::config::{paths::CashflowPaths, settings::ExportFormat, settings::Settings};
use cashflow::storage::{initialize_storage, Storage};

#[derive(Parser)]
#[command(
    name = "cashflow",
    version,
    about = "Twelve-month cash-flow forecasting for small businesses",
    long_about = "cashflow projects monthly income, expenses, VAT and bank balance \
                  for the next twelve months, flags shortfalls against an emergency \
                  fund and compares pessimistic, realistic and optimistic scenarios."
)]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the data directory and planning file
    Init {
        /// Seed the planning file with an example contractor plan
        #[arg(long)]
        sample: bool,
    },

    /// Show current configuration and paths
    Config,

    /// Income stream commands
    #[command(subcommand)]
    Income(cashflow::cli::IncomeCommands),

    /// Expense category commands
    #[command(subcommand)]
    Expense(cashflow::cli::ExpenseCommands),

    /// Forecast settings
    #[command(subcommand)]
    Settings(cashflow::cli::SettingsCommands),

    /// Scenario commands
    #[command(subcommand)]
    Scenario(cashflow::cli::ScenarioCommands),

    /// Twelve-month forecast with insights and metrics
    Forecast {
        /// Run under this scenario instead of the selected one
        #[arg(short, long, env = "CASHFLOW_SCENARIO")]
        scenario: Option<String>,
        /// Write monthly rows to a CSV file instead of printing
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Show per-source amounts for each month
        #[arg(short, long)]
        breakdown: bool,
    },

    /// Warnings and observations about the forecast
    Insights {
        #[arg(short, long, env = "CASHFLOW_SCENARIO")]
        scenario: Option<String>,
    },

    /// Summary metrics for the forecast
    Metrics {
        #[arg(short, long, env = "CASHFLOW_SCENARIO")]
        scenario: Option<String>,
    },

    /// Compare metrics across all scenarios
    Compare {
        /// Write the comparison to a CSV file instead of printing
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Export the forecast as csv, json or yaml
    Export {
        /// Output format (defaults to the configured preference)
        format: Option<ExportFormat>,
        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(if cli.verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    });

    // Initialize paths and settings
    let paths = CashflowPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    // Initialize storage
    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Init { sample }) => {
            println!("Initializing cashflow at: {}", paths.base_dir().display());
            let created = initialize_storage(&paths, sample)?;
            settings.save(&paths)?;

            if created {
                println!("Planning file created: {}", paths.configuration_file().display());
                if sample {
                    println!();
                    println!("A sample electrical contractor plan has been loaded:");
                    println!("  - 3 income streams (monthly, quarterly and seasonal)");
                    println!("  - 6 expense categories");
                    println!();
                    println!("Run 'cashflow forecast' to see the projection.");
                } else {
                    println!();
                    println!("Add income with 'cashflow income add <NAME> <AMOUNT>'.");
                }
            } else {
                println!(
                    "Planning file already exists, left unchanged: {}",
                    paths.configuration_file().display()
                );
            }
        }
        Some(Commands::Config) => {
            println!("cashflow Configuration");
            println!("======================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Data directory: {}", paths.data_dir().display());
            println!("Planning file:  {}", paths.configuration_file().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Initialized:    {}", storage.is_initialized());
            println!();
            println!("Settings:");
            println!("  Currency symbol:       {}", settings.currency_symbol);
            println!("  Default export format: {}", settings.default_export_format);
        }
        Some(Commands::Income(cmd)) => {
            handle_income_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Expense(cmd)) => {
            handle_expense_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Settings(cmd)) => {
            handle_settings_command(&storage, &paths, &settings, cmd)?;
        }
        Some(Commands::Scenario(cmd)) => {
            handle_scenario_command(&storage, cmd)?;
        }
        Some(Commands::Forecast {
            scenario,
            output,
            breakdown,
        }) => {
            handle_forecast(&storage, &settings, scenario.as_deref(), output, breakdown)?;
        }
        Some(Commands::Insights { scenario }) => {
            handle_insights(&storage, scenario.as_deref())?;
        }
        Some(Commands::Metrics { scenario }) => {
            handle_metrics(&storage, &settings, scenario.as_deref())?;
        }
        Some(Commands::Compare { output }) => {
            handle_compare(&storage, &settings, output)?;
        }
        Some(Commands::Export { format, output }) => {
            handle_export_command(&storage, &settings, format, output)?;
        }
        None => {
            println!("cashflow - twelve-month cash-flow forecasting");
            println!();
            println!("Run 'cashflow --help' for usage information.");
            println!("Run 'cashflow init --sample' to start from an example plan.");
        }
    }

    Ok(())
}

/// Log to stderr; RUST_LOG, when set, replaces the crate-level default
fn init_logger(level: LevelFilter) {
    let filter = match std::env::var("RUST_LOG") {
        Ok(_) => EnvFilter::from_default_env(),
        Err(_) => EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), level)),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
