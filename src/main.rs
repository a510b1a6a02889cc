use std::path::Path;

use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use price_pilot_rs::cli::{Cli, Command};
use price_pilot_rs::config::PricingConfig;
use price_pilot_rs::data::{load_products, load_stores, save_json};
use price_pilot_rs::error::{PilotError, Result};
use price_pilot_rs::interface::{
    confirm_checkout, display_checkout_summary, display_pricing_plan, display_savings_report,
};
use price_pilot_rs::models::{store_registry, PricedProduct, SavingsReport, StoreRegistry};
use price_pilot_rs::pricing::{
    build_plan, calculate_savings, checkout_summary, generate_checkout_links,
    select_cheapest_per_item, similar_item_names,
};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        if e.is_empty_input() {
            eprintln!("{}", e);
            eprintln!("Add price observations to the products file and try again.");
        } else {
            eprintln!("Error: {}", e);
        }
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => PricingConfig::load(path)?,
        None => PricingConfig::default(),
    };
    if let Some(fee_percent) = cli.fee_percent {
        config = config.with_fee_percent(fee_percent);
    }
    config.validate()?;
    debug!(?config, "pricing config");

    let products = load_input_products(&cli.products)?;
    let stores = load_registry(&cli.stores)?;

    match cli.command.unwrap_or_default() {
        Command::Compare { out } => cmd_compare(&products, &stores, &config, out.as_deref()),
        Command::Plan { out } => cmd_plan(&products, &stores, out.as_deref()),
        Command::Checkout { yes } => cmd_checkout(&products, &stores, &config, yes),
    }
}

fn load_input_products(path: &Path) -> Result<Vec<PricedProduct>> {
    if !path.exists() {
        return Err(PilotError::InvalidInput(format!(
            "products file not found: {}",
            path.display()
        )));
    }
    let products = load_products(path)?;
    info!(count = products.len(), path = %path.display(), "loaded price observations");
    Ok(products)
}

/// Missing store files are allowed; every store then gets a zero fee.
fn load_registry(path: &Path) -> Result<StoreRegistry> {
    if !path.exists() {
        info!(path = %path.display(), "no store file, delivery fees default to zero");
        return Ok(StoreRegistry::new());
    }
    let stores = load_stores(path)?;
    info!(count = stores.len(), "loaded stores");
    Ok(store_registry(stores))
}

fn compare(
    products: &[PricedProduct],
    stores: &StoreRegistry,
    config: &PricingConfig,
) -> Result<SavingsReport> {
    let selection = select_cheapest_per_item(products);
    for (a, b) in similar_item_names(&selection, config.similar_name_threshold) {
        println!("Note: '{}' and '{}' are priced as separate items.", a, b);
    }
    calculate_savings(products, stores, config.fee_percent)
}

/// Compare prices across stores and print the savings report.
fn cmd_compare(
    products: &[PricedProduct],
    stores: &StoreRegistry,
    config: &PricingConfig,
    out: Option<&Path>,
) -> Result<()> {
    let report = compare(products, stores, config)?;
    display_savings_report(&report);

    if let Some(path) = out {
        save_json(path, &report)?;
        println!("Report written to {}", path.display());
    }

    Ok(())
}

/// Build a plan directly from the products file.
fn cmd_plan(products: &[PricedProduct], stores: &StoreRegistry, out: Option<&Path>) -> Result<()> {
    let plan = build_plan(products, stores)?;
    display_pricing_plan(&plan);

    if let Some(path) = out {
        save_json(path, &plan)?;
        println!("Plan written to {}", path.display());
    }

    Ok(())
}

/// Compare, confirm, then produce checkout links for the best plan.
fn cmd_checkout(
    products: &[PricedProduct],
    stores: &StoreRegistry,
    config: &PricingConfig,
    yes: bool,
) -> Result<()> {
    let report = compare(products, stores, config)?;
    display_savings_report(&report);

    if !yes && !confirm_checkout(&report)? {
        println!("Checkout cancelled.");
        return Ok(());
    }

    display_pricing_plan(&report.best_plan);

    let links = generate_checkout_links(&report.best_plan, &config.checkout_session);
    let summary = checkout_summary(&links, &report);
    display_checkout_summary(&summary);

    Ok(())
}
