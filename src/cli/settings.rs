//! Settings CLI commands
//!
//! Forecast settings live in the planning file; the currency symbol and
//! default export format are user preferences in `config.json`.

use clap::Subcommand;

use super::parse_amount_arg;
use crate::config::paths::CashflowPaths;
use crate::config::settings::{ExportFormat, Settings};
use crate::display::format_settings;
use crate::error::{CashflowError, CashflowResult};
use crate::models::SettingsUpdate;
use crate::services::ForecastService;
use crate::storage::Storage;

/// Settings subcommands
#[derive(Subcommand)]
pub enum SettingsCommands {
    /// Show forecast settings
    Show,

    /// Change one or more settings
    Set {
        /// Cash in the bank at the start of the forecast
        #[arg(long)]
        starting_balance: Option<String>,
        /// Scenario id used by the forecast
        #[arg(long)]
        scenario: Option<String>,
        /// Cash reserve the balance should not drop below
        #[arg(long)]
        emergency_fund: Option<String>,
        /// Which month of each quarter VAT is paid in (1-3)
        #[arg(long)]
        vat_quarter: Option<u8>,
        /// Currency symbol for terminal output
        #[arg(long)]
        currency: Option<String>,
        /// Default format for `export`
        #[arg(long)]
        export_format: Option<ExportFormat>,
    },
}

/// Handle a settings command
pub fn handle_settings_command(
    storage: &Storage,
    paths: &CashflowPaths,
    settings: &Settings,
    cmd: SettingsCommands,
) -> CashflowResult<()> {
    let service = ForecastService::new(storage);

    match cmd {
        SettingsCommands::Show => {
            let config = service.configuration()?;
            print!("{}", format_settings(&config, &settings.currency_symbol));
            println!();
            println!("Preferences");
            println!("  Currency symbol:       {}", settings.currency_symbol);
            println!("  Default export format: {}", settings.default_export_format);
        }

        SettingsCommands::Set {
            starting_balance,
            scenario,
            emergency_fund,
            vat_quarter,
            currency,
            export_format,
        } => {
            let update = SettingsUpdate {
                starting_balance: starting_balance
                    .as_deref()
                    .map(parse_amount_arg)
                    .transpose()?,
                selected_scenario: scenario,
                emergency_fund_target: emergency_fund
                    .as_deref()
                    .map(parse_amount_arg)
                    .transpose()?,
                vat_quarter,
            };
            let preferences_changed = currency.is_some() || export_format.is_some();

            if update.is_empty() && !preferences_changed {
                return Err(CashflowError::Validation(
                    "No settings given to update".into(),
                ));
            }

            let mut settings = settings.clone();
            if let Some(symbol) = currency {
                settings.currency_symbol = symbol;
            }
            if let Some(format) = export_format {
                settings.default_export_format = format;
            }

            if !update.is_empty() {
                let config = service.update_settings(update)?;
                if config.find_scenario(&config.selected_scenario).is_none() {
                    println!(
                        "Warning: scenario '{}' is not configured; forecasts will use the baseline.",
                        config.selected_scenario
                    );
                }
            }
            if preferences_changed {
                settings.save(paths)?;
            }

            let config = service.configuration()?;
            println!("Settings updated.");
            print!("{}", format_settings(&config, &settings.currency_symbol));
        }
    }

    Ok(())
}
