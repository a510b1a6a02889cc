use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// PricePilot: compare grocery prices across stores and compute savings.
#[derive(Parser, Debug)]
#[command(name = "price_pilot")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Price observations (JSON array, or CSV with a .csv extension).
    #[arg(short, long, default_value = "products.json")]
    pub products: PathBuf,

    /// Store registry (JSON array of stores with delivery fees).
    #[arg(short, long, default_value = "stores.json")]
    pub stores: PathBuf,

    /// Pricing config JSON. Defaults apply when omitted.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Platform fee on savings in percent. Overrides the config file.
    #[arg(long)]
    pub fee_percent: Option<f64>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Find the cheapest plan across stores and report savings.
    Compare {
        /// Also write the report as JSON.
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Build a pricing plan treating the products file as the final selection.
    Plan {
        /// Also write the plan as JSON.
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Compare, then build checkout links for the best plan.
    Checkout {
        /// Skip the confirmation prompt.
        #[arg(short, long)]
        yes: bool,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Compare { out: None }
    }
}
