//! Resolve an option selection against a product.

use anyhow::Result;
use serde::Serialize;
use storefront_commerce::prelude::*;

use super::{build_selection, load_product, report_anomalies, SelectArgs};
use crate::context::Context;
use crate::output::stock_badge;

#[derive(Serialize)]
struct SelectReport<'a> {
    selection: &'a SelectedOptions,
    variant: Option<&'a str>,
    in_stock: bool,
    price: PriceDisplay,
    media: Vec<&'a str>,
    quantity: QuantityCheck,
    can_purchase: bool,
    choices: Vec<ChoiceAvailability>,
    #[serde(skip_serializing_if = "Option::is_none")]
    quick_buy: Option<QuickBuyRequest>,
    #[serde(skip_serializing_if = "Option::is_none")]
    back_in_stock: Option<BackInStockRequest>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    problems: Vec<String>,
}

/// Run the select command.
pub async fn run(args: SelectArgs, ctx: &Context) -> Result<()> {
    let product = load_product(&args.product, ctx).await?;
    let selection = build_selection(&product, &args.options);

    let mut problems = Vec::new();
    if let Err(e) = selection.validate(&product) {
        problems.push(e.to_string());
    }

    let view = ProductView::with_selection(&product, selection)
        .with_quantity(args.quantity)
        .with_low_stock_threshold(ctx.config.catalog.low_stock_threshold);

    let quick_buy = match QuickBuyRequest::from_view(&view) {
        Ok(request) => Some(request),
        Err(e) => {
            problems.push(e.to_string());
            None
        }
    };

    let back_in_stock = match args.notify.as_deref() {
        Some(email) => match BackInStockRequest::new(&view, email, &ctx.config.site.base_url) {
            Ok(request) => Some(request),
            Err(e) => {
                problems.push(e.to_string());
                None
            }
        },
        None => None,
    };

    let report = SelectReport {
        selection: view.selection(),
        variant: view.variant().map(|v| v.id.as_str()),
        in_stock: view.in_stock(),
        price: view.price_display(),
        media: view.media().iter().map(|m| m.id.as_str()).collect(),
        quantity: view.quantity_check(),
        can_purchase: view.can_purchase(),
        choices: view.choice_availability(),
        quick_buy,
        back_in_stock,
        problems,
    };

    if ctx.output.is_json() {
        ctx.output.json(&report);
        return Ok(());
    }

    ctx.output.header(&format!("{} selection", product.name));
    for (name, choice) in report.selection.iter() {
        ctx.output.kv(name, choice);
    }
    ctx.output.kv("variant", report.variant.unwrap_or("none (base product)"));
    ctx.output.kv(
        "stock",
        &stock_badge(report.in_stock, report.quantity.remaining_hint.is_some()),
    );
    ctx.output.kv("price", report.price.current().unwrap_or("unavailable"));
    if report.price.is_discounted() {
        ctx.output.kv("was", report.price.regular.as_deref().unwrap_or_default());
    }
    if let Some(ref badge) = report.price.badge {
        ctx.output.kv("discount", badge);
    }
    ctx.output.kv("media", &report.media.join(", "));
    ctx.output.kv("quantity", &report.quantity.requested.to_string());
    if let Some(ref hint) = report.quantity.remaining_hint {
        ctx.output.kv("hint", hint);
    }

    ctx.output.header("Choices");
    for choice in &report.choices {
        let marker = if choice.selected { "*" } else { " " };
        let state = if choice.in_stock { "" } else { " (out of stock)" };
        ctx.output.list_item(&format!("{}{}={}{}", marker, choice.option, choice.choice, state));
    }

    if let Some(ref request) = report.quick_buy {
        ctx.output.success(&format!(
            "Ready to buy {} x {}",
            request.quantity, product.name
        ));
    }
    if let Some(ref request) = report.back_in_stock {
        ctx.output.success(&format!(
            "Back-in-stock request for {} at {}",
            request.email, request.item_url
        ));
    }
    for problem in &report.problems {
        ctx.output.warn(problem);
    }
    report_anomalies(&product, ctx);

    Ok(())
}
