//! Configuration management commands.

use std::fs;

use anyhow::{bail, Result};
use dialoguer::Input;

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, CONFIG_FILE_NAMES};
use crate::context::Context;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx).await,
        ConfigCommand::Init { name, force } => init_config(name, force, ctx).await,
        ConfigCommand::Validate => validate_config(ctx).await,
    }
}

async fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match ctx.config_path {
        Some(ref path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }

    ctx.output.info("");
    ctx.output.info("[site]");
    ctx.output.kv("name", &ctx.config.site.name);
    ctx.output.kv("base_url", &ctx.config.site.base_url);
    if let Some(ref email) = ctx.config.site.support_email {
        ctx.output.kv("support_email", email);
    }

    ctx.output.info("");
    ctx.output.info("[catalog]");
    ctx.output.kv("page_size", &ctx.config.catalog.page_size.to_string());
    ctx.output.kv("reviews_page_size", &ctx.config.catalog.reviews_page_size.to_string());
    ctx.output.kv("low_stock_threshold", &ctx.config.catalog.low_stock_threshold.to_string());

    ctx.output.info("");
    ctx.output.info("[render]");
    ctx.output.kv("log_format", &ctx.config.render.log_format.to_string());
    ctx.output.kv(
        "min_level",
        &ctx.config.render.min_level.to_string().to_lowercase(),
    );

    if !ctx.config.environments.is_empty() {
        ctx.output.info("");
        ctx.output.info("Environments:");
        let mut names: Vec<&String> = ctx.config.environments.keys().collect();
        names.sort();
        for env in names {
            ctx.output.list_item(env);
        }
    }

    Ok(())
}

async fn init_config(name: Option<String>, force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join(CONFIG_FILE_NAMES[0]);

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    let fallback = ctx
        .cwd
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("my-store")
        .to_string();

    let name = match name {
        Some(name) => name,
        None if console::user_attended() && !ctx.output.is_json() => Input::new()
            .with_prompt("Site name")
            .default(fallback)
            .interact_text()?,
        None => fallback,
    };

    fs::write(&config_path, generate_default_config(&name))?;

    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}

async fn validate_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Validating configuration");

    let (errors, warnings) = ctx.config.validate();

    if errors.is_empty() && warnings.is_empty() {
        ctx.output.success("Configuration is valid");
        return Ok(());
    }

    for error in &errors {
        ctx.output.error(&format!("Error: {}", error));
    }

    for warning in &warnings {
        ctx.output.warn(&format!("Warning: {}", warning));
    }

    if !errors.is_empty() {
        bail!("Configuration has {} error(s)", errors.len());
    }

    ctx.output.success("Configuration is valid (with warnings)");

    Ok(())
}
