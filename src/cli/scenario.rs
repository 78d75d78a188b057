//! Scenario CLI commands

use clap::Subcommand;

use crate::display::format_scenario_list;
use crate::error::CashflowResult;
use crate::services::ForecastService;
use crate::storage::Storage;

/// Scenario subcommands
#[derive(Subcommand)]
pub enum ScenarioCommands {
    /// List configured scenarios; the one forecasts use is marked *
    List,
}

/// Handle a scenario command
pub fn handle_scenario_command(storage: &Storage, cmd: ScenarioCommands) -> CashflowResult<()> {
    let service = ForecastService::new(storage);

    match cmd {
        ScenarioCommands::List => {
            let config = service.configuration()?;
            print!("{}", format_scenario_list(&config));
            println!();
            println!("Use 'cashflow settings set --scenario <ID>' to change the selection.");
        }
    }

    Ok(())
}
