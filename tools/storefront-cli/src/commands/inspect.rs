//! Show a product's options, variants and default selection.

use anyhow::Result;
use serde::Serialize;
use storefront_commerce::prelude::*;

use super::{load_product, report_anomalies, InspectArgs};
use crate::context::Context;
use crate::output::stock_badge;

#[derive(Serialize)]
struct InspectReport<'a> {
    id: &'a str,
    name: &'a str,
    slug: &'a str,
    options: Vec<OptionReport<'a>>,
    variants: Vec<VariantReport<'a>>,
    default_selection: &'a SelectedOptions,
    default_variant: Option<&'a str>,
    default_in_stock: bool,
    anomalies: Vec<String>,
}

#[derive(Serialize)]
struct OptionReport<'a> {
    name: &'a str,
    kind: &'static str,
    choices: Vec<&'a str>,
}

#[derive(Serialize)]
struct VariantReport<'a> {
    id: &'a str,
    name: String,
    price: Option<String>,
    in_stock: bool,
    quantity: Option<i64>,
}

/// Run the inspect command.
pub async fn run(args: InspectArgs, ctx: &Context) -> Result<()> {
    let product = load_product(&args.product, ctx).await?;
    let view = ProductView::new(&product)
        .with_low_stock_threshold(ctx.config.catalog.low_stock_threshold);

    let options: Vec<OptionReport<'_>> = product
        .product_options
        .iter()
        .map(|o| OptionReport {
            name: &o.name,
            kind: o.option_type.as_str(),
            choices: o.choices.iter().map(|c| c.description.as_str()).collect(),
        })
        .collect();

    let variants: Vec<VariantReport<'_>> = product
        .variants
        .iter()
        .map(|v| VariantReport {
            id: v.id.as_str(),
            name: v.build_name(),
            price: v
                .price_data()
                .and_then(|p| p.formatted_discounted_price().or_else(|| p.formatted_price())),
            in_stock: v.stock.is_available(),
            quantity: v.stock.quantity,
        })
        .collect();

    if ctx.output.is_json() {
        ctx.output.json(&InspectReport {
            id: product.id.as_str(),
            name: &product.name,
            slug: &product.slug,
            options,
            variants,
            default_selection: view.selection(),
            default_variant: view.variant().map(|v| v.id.as_str()),
            default_in_stock: view.in_stock(),
            anomalies: product.data_anomalies().iter().map(|a| a.to_string()).collect(),
        });
        return Ok(());
    }

    ctx.output.header(&product.name);
    ctx.output.kv("id", product.id.as_str());
    ctx.output.kv("slug", &product.slug);
    ctx.output.kv("card price", &card_price_label(&product));
    ctx.output.kv(
        "stock",
        &stock_badge(
            product.stock.is_available(),
            product.stock.is_low_stock(ctx.config.catalog.low_stock_threshold),
        ),
    );

    if options.is_empty() {
        ctx.output.info("No options");
    } else {
        ctx.output.header("Options");
        for option in &options {
            ctx.output.list_item(&format!(
                "{} ({}): {}",
                option.name,
                option.kind,
                option.choices.join(", ")
            ));
        }
    }

    if variants.is_empty() {
        ctx.output.info("No variants; base stock and price apply");
    } else {
        ctx.output.header("Variants");
        ctx.output.table_row(&["ID", "NAME", "PRICE", "STOCK"], &[20, 24, 12, 12]);
        for variant in &variants {
            let stock = match (variant.in_stock, variant.quantity) {
                (false, _) => "out".to_string(),
                (true, Some(q)) => q.to_string(),
                (true, None) => "unlimited".to_string(),
            };
            ctx.output.table_row(
                &[
                    variant.id,
                    &variant.name,
                    variant.price.as_deref().unwrap_or("-"),
                    &stock,
                ],
                &[20, 24, 12, 12],
            );
        }
    }

    ctx.output.header("Default selection");
    for (name, choice) in view.selection().iter() {
        ctx.output.kv(name, choice);
    }
    ctx.output.kv(
        "variant",
        view.variant().map(|v| v.id.as_str()).unwrap_or("none (base product)"),
    );
    ctx.output.kv("availability", &stock_badge(view.in_stock(), false));

    report_anomalies(&product, ctx);

    Ok(())
}
