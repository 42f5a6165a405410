//! Render the product detail page to HTML.

use anyhow::{Context as _, Result};
use product_page::{parse_inputs, PageRenderer};
use storefront_observability::{RenderId, StructuredLogger};

use super::{build_selection, RenderArgs};
use crate::context::Context;
use crate::output::format_bytes;

/// Run the render command.
pub async fn run(args: RenderArgs, ctx: &Context) -> Result<()> {
    let product_path = ctx.resolve_path(&args.product);
    let product_json = tokio::fs::read_to_string(&product_path)
        .await
        .with_context(|| format!("Failed to read product file: {}", product_path.display()))?;

    let reviews_json = match args.reviews.as_deref() {
        Some(path) => {
            let path = ctx.resolve_path(path);
            Some(
                tokio::fs::read_to_string(&path)
                    .await
                    .with_context(|| format!("Failed to read reviews file: {}", path.display()))?,
            )
        }
        None => None,
    };

    let (product, reviews) = parse_inputs(&product_json, reviews_json.as_deref())?;
    let reviews = reviews.map(|page| {
        let limit = ctx.config.catalog.reviews_page_size as usize;
        let mut page = page;
        page.items.truncate(limit);
        page
    });

    let selection = build_selection(&product, &args.options);

    let logger = StructuredLogger::new(RenderId::generate())
        .with_page("product-page")
        .with_product(product.slug.clone())
        .with_format(ctx.config.render.log_format)
        .with_min_level(ctx.config.render.min_level);

    let renderer = PageRenderer::new()
        .with_site_name(ctx.config.site.name.clone())
        .with_low_stock_threshold(ctx.config.catalog.low_stock_threshold);
    let page = renderer.render(
        &product,
        Some(selection),
        args.quantity,
        reviews.as_ref(),
        &logger,
    );

    match args.out.as_deref() {
        Some(out) => {
            let out_path = ctx.resolve_path(out);
            tokio::fs::write(&out_path, &page.html)
                .await
                .with_context(|| format!("Failed to write page: {}", out_path.display()))?;

            if ctx.output.is_json() {
                ctx.output.json(&page.metrics);
                return Ok(());
            }
            ctx.output.success(&format!(
                "Rendered {} ({}) to {}",
                product.name,
                format_bytes(page.html.len() as u64),
                out_path.display()
            ));
        }
        None => {
            println!("{}", page.html);
        }
    }

    if ctx.output.is_verbose() {
        ctx.output.header("Sections");
        for section in &page.metrics.sections {
            ctx.output.debug(&format!(
                "{:<10} {:>8} {:>6}us{}",
                section.name,
                format_bytes(section.bytes as u64),
                section.duration_us,
                if section.used_fallback { " (fallback)" } else { "" }
            ));
        }
    }
    for name in page.metrics.fallback_sections() {
        ctx.output.warn(&format!("Section '{}' used its fallback", name));
    }

    Ok(())
}
