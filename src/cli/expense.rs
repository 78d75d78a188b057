//! Expense CLI commands
//!
//! Implements CLI commands for managing expense categories.

use clap::Subcommand;

use super::{parse_amount_arg, parse_growth_arg};
use crate::config::settings::Settings;
use crate::display::{format_expense_details, format_expense_list};
use crate::error::{CashflowError, CashflowResult};
use crate::models::{ExpenseCategory, ExpenseCategoryUpdate, ExpenseFrequency};
use crate::services::ExpenseService;
use crate::storage::Storage;

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Add a new expense category
    Add {
        /// Category name
        name: String,
        /// Amount per occurrence (e.g., "450" or "450.00")
        amount: String,
        /// monthly, quarterly or annual
        #[arg(short, long, default_value = "monthly")]
        frequency: ExpenseFrequency,
        /// Month (1-12) a quarterly or annual expense falls in
        #[arg(short, long)]
        timing: Option<u8>,
        /// Scale with the scenario multiplier
        #[arg(long)]
        variable: bool,
        /// Annual growth as a percentage (e.g., "4" or "4%")
        #[arg(short, long)]
        growth: Option<String>,
    },

    /// List all expense categories
    List,

    /// Show expense category details
    Show {
        /// Category name or ID
        category: String,
    },

    /// Edit an expense category
    Edit {
        /// Category name or ID
        category: String,
        /// New name
        #[arg(short, long)]
        name: Option<String>,
        /// New amount
        #[arg(short, long)]
        amount: Option<String>,
        /// New frequency
        #[arg(short, long)]
        frequency: Option<ExpenseFrequency>,
        /// New month (1-12)
        #[arg(short, long)]
        timing: Option<u8>,
        /// Mark as variable
        #[arg(long, conflicts_with = "fixed")]
        variable: bool,
        /// Mark as fixed
        #[arg(long)]
        fixed: bool,
        /// New annual growth percentage
        #[arg(short, long)]
        growth: Option<String>,
    },

    /// Remove an expense category
    #[command(alias = "delete")]
    Remove {
        /// Category name or ID
        category: String,
    },
}

/// Handle an expense command
pub fn handle_expense_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> CashflowResult<()> {
    let service = ExpenseService::new(storage);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        ExpenseCommands::Add {
            name,
            amount,
            frequency,
            timing,
            variable,
            growth,
        } => {
            let mut category = ExpenseCategory::new(name, parse_amount_arg(&amount)?, frequency);
            if let Some(month) = timing {
                category = category.with_timing(month);
            }
            if variable {
                category = category.variable();
            }
            if let Some(growth) = growth {
                category = category.with_growth(parse_growth_arg(&growth)?);
            }

            let category = service.add(category)?;
            println!("Added expense category: {} ({})", category.name, category.id);
        }

        ExpenseCommands::List => {
            let categories = service.list()?;
            print!("{}", format_expense_list(&categories, symbol));
        }

        ExpenseCommands::Show { category } => {
            let category = service.find(&category)?;
            print!("{}", format_expense_details(&category, symbol));
        }

        ExpenseCommands::Edit {
            category,
            name,
            amount,
            frequency,
            timing,
            variable,
            fixed,
            growth,
        } => {
            let variable = match (variable, fixed) {
                (true, false) => Some(true),
                (false, true) => Some(false),
                (false, false) => None,
                (true, true) => {
                    return Err(CashflowError::Validation(
                        "Cannot mark an expense both variable and fixed".into(),
                    ))
                }
            };

            let update = ExpenseCategoryUpdate {
                name,
                amount: amount.as_deref().map(parse_amount_arg).transpose()?,
                frequency,
                timing,
                variable,
                growth: growth.as_deref().map(parse_growth_arg).transpose()?,
            };

            let category = service.update(&category, update)?;
            println!("Updated expense category: {}", category.name);
            print!("{}", format_expense_details(&category, symbol));
        }

        ExpenseCommands::Remove { category } => {
            let removed = service.remove(&category)?;
            println!("Removed expense category: {}", removed.name);
        }
    }

    Ok(())
}
