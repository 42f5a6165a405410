//! CLI command implementations.

pub mod config;
pub mod inspect;
pub mod render;
pub mod select;

use anyhow::{Context as _, Result};
use clap::{Args, Subcommand};
use storefront_commerce::prelude::*;

use crate::context::Context;

/// Arguments for the inspect command.
#[derive(Args)]
pub struct InspectArgs {
    /// Product JSON export.
    pub product: String,
}

/// Arguments for the select command.
#[derive(Args)]
pub struct SelectArgs {
    /// Product JSON export.
    pub product: String,

    /// Choice to select, as `Option=Choice`; repeatable, later wins.
    #[arg(short = 'o', long = "option", value_parser = parse_option_pair)]
    pub options: Vec<(String, String)>,

    /// Requested quantity.
    #[arg(short, long, default_value_t = 1)]
    pub quantity: i64,

    /// Build a back-in-stock request for this address.
    #[arg(long)]
    pub notify: Option<String>,
}

/// Arguments for the render command.
#[derive(Args)]
pub struct RenderArgs {
    /// Product JSON export.
    pub product: String,

    /// Reviews page JSON export.
    #[arg(short, long)]
    pub reviews: Option<String>,

    /// Choice to select, as `Option=Choice`; repeatable, later wins.
    #[arg(short = 'o', long = "option", value_parser = parse_option_pair)]
    pub options: Vec<(String, String)>,

    /// Requested quantity.
    #[arg(short, long, default_value_t = 1)]
    pub quantity: i64,

    /// Output file (default: stdout).
    #[arg(long)]
    pub out: Option<String>,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Site name (prompted for when omitted on a terminal).
        #[arg(long)]
        name: Option<String>,
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the config file.
    Validate,
}

/// Parse `Option=Choice`. Only the first `=` splits, and neither side is
/// trimmed since choice names compare exactly.
pub fn parse_option_pair(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((name, _)) if name.is_empty() => Err(format!("missing option name in '{}'", s)),
        Some((name, choice)) => Ok((name.to_string(), choice.to_string())),
        None => Err(format!("expected Option=Choice, got '{}'", s)),
    }
}

/// Default selection with the given overrides applied in order.
pub fn build_selection(product: &Product, overrides: &[(String, String)]) -> SelectedOptions {
    let mut selection = derive_default_selection(&product.product_options);
    for (name, choice) in overrides {
        selection.set(name.clone(), choice.clone());
    }
    selection
}

/// Read and parse a product export.
pub async fn load_product(path: &str, ctx: &Context) -> Result<Product> {
    let path = ctx.resolve_path(path);
    let json = tokio::fs::read_to_string(&path)
        .await
        .with_context(|| format!("Failed to read product file: {}", path.display()))?;
    let product = Product::from_json(&json)
        .with_context(|| format!("Failed to parse product file: {}", path.display()))?;
    ctx.output.debug(&format!("Loaded product '{}' ({})", product.name, product.id));
    Ok(product)
}

/// Surface platform data problems without failing the command.
pub fn report_anomalies(product: &Product, ctx: &Context) {
    for anomaly in product.data_anomalies() {
        ctx.output.warn(&anomaly.to_string());
    }
}
