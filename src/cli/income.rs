//! Income CLI commands
//!
//! Implements CLI commands for managing income streams.

use clap::Subcommand;

use super::{parse_amount_arg, parse_curve_arg, parse_growth_arg};
use crate::config::settings::Settings;
use crate::display::{format_income_details, format_income_list};
use crate::error::CashflowResult;
use crate::models::{IncomeFrequency, IncomeStream, IncomeStreamUpdate};
use crate::services::IncomeService;
use crate::storage::Storage;

/// Income subcommands
#[derive(Subcommand)]
pub enum IncomeCommands {
    /// Add a new income stream
    Add {
        /// Stream name
        name: String,
        /// Amount per occurrence (e.g., "4500" or "4,500.00")
        amount: String,
        /// monthly, quarterly or seasonal
        #[arg(short, long, default_value = "monthly")]
        frequency: IncomeFrequency,
        /// Twelve comma-separated monthly multipliers, January first
        #[arg(short, long)]
        seasonality: Option<String>,
        /// Annual growth as a percentage (e.g., "5" or "5%")
        #[arg(short, long)]
        growth: Option<String>,
        /// Days customers take to pay
        #[arg(long, default_value_t = 0)]
        payment_delay: u32,
    },

    /// List all income streams
    List,

    /// Show income stream details
    Show {
        /// Stream name or ID
        stream: String,
    },

    /// Edit an income stream
    Edit {
        /// Stream name or ID
        stream: String,
        /// New name
        #[arg(short, long)]
        name: Option<String>,
        /// New amount
        #[arg(short, long)]
        amount: Option<String>,
        /// New frequency
        #[arg(short, long)]
        frequency: Option<IncomeFrequency>,
        /// New seasonal multipliers
        #[arg(short, long)]
        seasonality: Option<String>,
        /// New annual growth percentage
        #[arg(short, long)]
        growth: Option<String>,
        /// New payment delay in days
        #[arg(long)]
        payment_delay: Option<u32>,
    },

    /// Remove an income stream
    #[command(alias = "delete")]
    Remove {
        /// Stream name or ID
        stream: String,
    },
}

/// Handle an income command
pub fn handle_income_command(
    storage: &Storage,
    settings: &Settings,
    cmd: IncomeCommands,
) -> CashflowResult<()> {
    let service = IncomeService::new(storage);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        IncomeCommands::Add {
            name,
            amount,
            frequency,
            seasonality,
            growth,
            payment_delay,
        } => {
            let mut stream = IncomeStream::new(name, parse_amount_arg(&amount)?, frequency)
                .with_payment_delay(payment_delay);
            if let Some(curve) = seasonality {
                stream.seasonal_multiplier = Some(parse_curve_arg(&curve)?);
            }
            if let Some(growth) = growth {
                stream = stream.with_growth(parse_growth_arg(&growth)?);
            }

            let stream = service.add(stream)?;
            println!("Added income stream: {} ({})", stream.name, stream.id);
        }

        IncomeCommands::List => {
            let streams = service.list()?;
            print!("{}", format_income_list(&streams, symbol));
        }

        IncomeCommands::Show { stream } => {
            let stream = service.find(&stream)?;
            print!("{}", format_income_details(&stream, symbol));
        }

        IncomeCommands::Edit {
            stream,
            name,
            amount,
            frequency,
            seasonality,
            growth,
            payment_delay,
        } => {
            let update = IncomeStreamUpdate {
                name,
                amount: amount.as_deref().map(parse_amount_arg).transpose()?,
                frequency,
                seasonal_multiplier: seasonality.as_deref().map(parse_curve_arg).transpose()?,
                payment_delay_days: payment_delay,
                growth: growth.as_deref().map(parse_growth_arg).transpose()?,
            };

            let stream = service.update(&stream, update)?;
            println!("Updated income stream: {}", stream.name);
            print!("{}", format_income_details(&stream, symbol));
        }

        IncomeCommands::Remove { stream } => {
            let removed = service.remove(&stream)?;
            println!("Removed income stream: {}", removed.name);
        }
    }

    Ok(())
}
