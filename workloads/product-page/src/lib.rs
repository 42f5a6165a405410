//! Server-rendered product detail page.
//!
//! Renders one product with the shopper's current option selection:
//! - Hero (gallery driven by the selected choices)
//! - Pricing for the matched variant or the base product
//! - Option picker with dimmed out-of-stock choices
//! - Stock status, quantity and purchase actions
//! - Moderated reviews
//!
//! Sections that have nothing usable to show fall back to placeholders
//! instead of failing the page.

mod sections;

use std::time::Instant;

use anyhow::Context;
use storefront_commerce::listing::CursorPage;
use storefront_commerce::prelude::*;
use storefront_observability::{MetricsCollector, RenderMetrics, StructuredLogger};

pub use sections::*;

const PAGE_NAME: &str = "product-page";

/// A rendered page together with its section timings.
#[derive(Debug, Clone)]
pub struct RenderedPage {
    pub html: String,
    pub metrics: RenderMetrics,
}

/// Page-level settings that do not come from the product record.
#[derive(Debug, Clone)]
pub struct PageRenderer {
    site_name: String,
    low_stock_threshold: i64,
}

impl Default for PageRenderer {
    fn default() -> Self {
        Self {
            site_name: "Storefront".to_string(),
            low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
        }
    }
}

impl PageRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_site_name(mut self, name: impl Into<String>) -> Self {
        self.site_name = name.into();
        self
    }

    pub fn with_low_stock_threshold(mut self, threshold: i64) -> Self {
        self.low_stock_threshold = threshold;
        self
    }

    /// Render the full page.
    ///
    /// `selection` defaults to the first choice of every option. `reviews` is
    /// `None` when the reviews query failed, which renders the fallback.
    pub fn render(
        &self,
        product: &Product,
        selection: Option<SelectedOptions>,
        quantity: i64,
        reviews: Option<&CursorPage<Review>>,
        logger: &StructuredLogger,
    ) -> RenderedPage {
        let mut metrics =
            MetricsCollector::new(logger.render_id().clone()).with_product(product.slug.clone());

        let selection =
            selection.unwrap_or_else(|| derive_default_selection(&product.product_options));
        if let Err(e) = selection.validate(product) {
            logger
                .warn_builder("Selection does not fit product options")
                .field("error", e.to_string())
                .emit();
        }
        for anomaly in product.data_anomalies() {
            logger
                .warn_builder("Product data anomaly")
                .field("anomaly", anomaly.to_string())
                .emit();
        }

        let view = ProductView::with_selection(product, selection)
            .with_quantity(quantity)
            .with_low_stock_threshold(self.low_stock_threshold);

        logger
            .info_builder("Product page render started")
            .field("product_id", product.id.as_str())
            .field("variant", view.variant().map(|v| v.id.as_str()).unwrap_or("none"))
            .field_bool("in_stock", view.in_stock())
            .field_i64("quantity", quantity)
            .emit();

        let mut body = String::new();

        // Hero
        let started = Instant::now();
        let hero_fallback = product.name.trim().is_empty();
        let hero_html = if hero_fallback {
            logger.warn("Product has no name; rendering hero fallback");
            render_hero_fallback()
        } else {
            render_hero(&view)
        };
        metrics.record_section("hero", started, hero_html.len(), hero_fallback);
        body.push_str(&hero_html);

        // Pricing
        let started = Instant::now();
        let price = view.price_display();
        let pricing_fallback = price.regular.is_none();
        if pricing_fallback {
            logger.warn("No price data for selection");
        }
        let pricing_html = render_pricing(&price);
        metrics.record_section("pricing", started, pricing_html.len(), pricing_fallback);
        body.push_str(&pricing_html);

        // Options
        let started = Instant::now();
        let options_html = render_options(&view);
        metrics.record_section("options", started, options_html.len(), false);
        body.push_str(&options_html);

        // Inventory
        let started = Instant::now();
        let inventory_html = render_inventory(&view);
        metrics.record_section("inventory", started, inventory_html.len(), false);
        body.push_str(&inventory_html);

        // Reviews
        let started = Instant::now();
        let reviews_html = match reviews {
            Some(page) => render_reviews(page),
            None => {
                logger.warn("Reviews unavailable; rendering fallback");
                render_reviews_fallback()
            }
        };
        metrics.record_section("reviews", started, reviews_html.len(), reviews.is_none());
        body.push_str(&reviews_html);

        let html = self.render_shell(product, &body);
        let metrics = metrics.finish(html.len());

        logger
            .info_builder("Product page render complete")
            .field_i64("bytes", html.len() as i64)
            .field_i64("total_us", metrics.total_duration_us as i64)
            .emit();
        tracing::debug!(slug = %product.slug, bytes = html.len(), "rendered product page");

        RenderedPage { html, metrics }
    }

    fn render_shell(&self, product: &Product, body: &str) -> String {
        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title} | {site}</title>
    <style>{styles}</style>
</head>
<body>
    <header class="site-header">
        <nav><a href="/">Home</a> / <a href="/shop">Shop</a> / {title}</nav>
    </header>
    <main class="pdp-container" data-page="{page}">
{body}
    </main>
    <footer class="site-footer">
        <p>{site}</p>
    </footer>
</body>
</html>"#,
            title = sections::escape_html(&product.name),
            site = sections::escape_html(&self.site_name),
            styles = PDP_STYLES,
            page = PAGE_NAME,
            body = body
        )
    }
}

/// Render a product page with default page settings.
pub fn render_product_page(
    product: &Product,
    selection: Option<SelectedOptions>,
    quantity: i64,
    reviews: Option<&CursorPage<Review>>,
    logger: &StructuredLogger,
) -> RenderedPage {
    PageRenderer::default().render(product, selection, quantity, reviews, logger)
}

/// Parse a product export and an optional reviews export.
pub fn parse_inputs(
    product_json: &str,
    reviews_json: Option<&str>,
) -> anyhow::Result<(Product, Option<CursorPage<Review>>)> {
    let product = Product::from_json(product_json).context("Failed to parse product JSON")?;
    let reviews = reviews_json
        .map(|json| {
            serde_json::from_str::<CursorPage<Review>>(json)
                .context("Failed to parse reviews JSON")
        })
        .transpose()?;
    Ok((product, reviews))
}

/// CSS styles for the product page
const PDP_STYLES: &str = r#"
* { box-sizing: border-box; }
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; margin: 0; padding: 0; background: #f5f5f5; }
.site-header { background: #333; color: white; padding: 1rem 2rem; }
.site-header a { color: #88f; }
.site-footer { background: #333; color: white; padding: 2rem; text-align: center; margin-top: 2rem; }
.pdp-container { max-width: 1200px; margin: 0 auto; padding: 2rem; }

/* Hero */
.product-hero { display: grid; grid-template-columns: 1fr 1fr; gap: 2rem; background: white; padding: 2rem; border-radius: 8px; margin-bottom: 1rem; }
.product-gallery { position: relative; }
.product-ribbon { position: absolute; top: 1rem; left: 1rem; background: #333; color: white; padding: 0.25rem 0.75rem; }
.product-image-main { width: 100%; border-radius: 8px; }
.product-thumbnails { display: flex; gap: 0.5rem; margin-top: 1rem; }
.product-thumbnail { width: 60px; height: 60px; object-fit: cover; border-radius: 4px; cursor: pointer; }
.product-brand { color: #666; margin: 0; }
.product-name { font-size: 2rem; margin: 0.5rem 0; }
.product-description { margin: 1rem 0; line-height: 1.6; }
.product-info-section { border-top: 1px solid #eee; padding: 0.5rem 0; }

/* Pricing */
.product-pricing { background: white; padding: 1.5rem 2rem; border-radius: 8px; margin-bottom: 1rem; }
.price-current { font-size: 2rem; font-weight: bold; color: #b12704; }
.price-original { text-decoration: line-through; color: #666; margin-right: 1rem; }
.price-discount { background: #cc0c39; color: white; padding: 0.25rem 0.5rem; border-radius: 4px; margin-left: 0.5rem; }

/* Options */
.product-options { background: white; padding: 1.5rem 2rem; border-radius: 8px; margin-bottom: 1rem; }
.product-option { border: none; padding: 0; margin-bottom: 1rem; }
.option-choices { display: flex; flex-wrap: wrap; gap: 0.5rem; }
.option-choice { border: 1px solid #ccc; border-radius: 4px; padding: 0.5rem 0.75rem; cursor: pointer; }
.option-choice input { display: none; }
.option-choice--selected { border-color: #333; }
.option-choice--dimmed { opacity: 0.4; }
.color-swatch { display: inline-block; width: 24px; height: 24px; border-radius: 50%; }

/* Inventory */
.product-inventory { background: white; padding: 1.5rem 2rem; border-radius: 8px; margin-bottom: 1rem; }
.stock-status { display: flex; align-items: center; gap: 0.5rem; }
.stock-indicator { width: 12px; height: 12px; border-radius: 50%; }
.stock-available .stock-indicator { background: #4caf50; }
.stock-low .stock-indicator { background: #ff9800; }
.stock-out .stock-indicator { background: #f44336; }
.stock-remaining { color: #b12704; }
.quantity-input { width: 4rem; margin-left: 0.5rem; }
.btn-add-to-cart, .btn-buy-now { border: none; padding: 1rem 2rem; font-size: 1rem; border-radius: 8px; cursor: pointer; margin-top: 1rem; }
.btn-add-to-cart { background: #ff9900; }
.btn-buy-now { background: #333; color: white; }
.btn-notify-me { background: #2196f3; color: white; border: none; padding: 1rem 2rem; font-size: 1rem; border-radius: 8px; cursor: pointer; margin-top: 1rem; }

/* Reviews */
.product-reviews { background: white; padding: 2rem; border-radius: 8px; margin-bottom: 1rem; }
.review { border-bottom: 1px solid #eee; padding: 1rem 0; }
.review-header { display: flex; gap: 1rem; align-items: center; margin-bottom: 0.5rem; }
.review-stars { color: #ff9800; }
.review-title { margin: 0.5rem 0; }
.review-body { color: #555; line-height: 1.6; }
.review-reply { border-left: 3px solid #eee; margin: 0.5rem 0 0 1rem; padding-left: 1rem; color: #666; }

/* Fallbacks */
.product-hero--error, .product-pricing--loading, .product-inventory--loading,
.product-reviews--fallback {
    opacity: 0.7;
}
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_observability::{LogSink, RenderId};

    fn logger() -> StructuredLogger {
        StructuredLogger::new(RenderId::from_string("test")).with_sink(LogSink::memory())
    }

    fn mum() -> Product {
        let mut product = Product::new("mum", "Mum", "mum");
        product.price_data = Some(PriceData {
            currency: Some("USD".into()),
            price: Some(15.0),
            discounted_price: Some(15.0),
            formatted: None,
        });
        product.product_options = vec![ProductOption::new("Color", OptionKind::Color)
            .with_choice(Choice::new("Red"))
            .with_choice(Choice::new("Yellow"))];
        product.variants = vec![
            Variant::new("v-red", [("Color", "Red")]).with_stock(StockRecord::tracked(0)),
            Variant::new("v-yellow", [("Color", "Yellow")]).with_stock(StockRecord::tracked(5)),
        ];
        product
    }

    #[test]
    fn test_page_contains_all_sections() {
        let product = mum();
        let reviews = CursorPage::new(Vec::new(), None);
        let page = render_product_page(&product, None, 1, Some(&reviews), &logger());

        for section in ["hero", "pricing", "options", "inventory", "reviews"] {
            assert!(page.html.contains(&format!(r#"data-section="{section}""#)), "{section}");
        }
        assert!(page.html.contains("<title>Mum | Storefront</title>"));
        assert!(page.metrics.fallback_sections().is_empty());
        assert_eq!(page.metrics.sections.len(), 5);
    }

    #[test]
    fn test_default_selection_is_out_of_stock() {
        let product = mum();
        let page = render_product_page(&product, None, 1, None, &logger());
        assert!(page.html.contains("Notify when available"));
        assert_eq!(page.metrics.fallback_sections(), vec!["reviews"]);
    }

    #[test]
    fn test_selected_variant_is_purchasable() {
        let product = mum();
        let selection: SelectedOptions = [("Color", "Yellow")].into_iter().collect();
        let page = PageRenderer::new()
            .with_site_name("Green Thumb")
            .render(&product, Some(selection), 1, None, &logger());

        assert!(page.html.contains("Add to Cart"));
        assert!(page.html.contains("Only 5 remaining"));
        assert!(page.html.contains("<title>Mum | Green Thumb</title>"));
    }

    #[test]
    fn test_unknown_selection_is_logged() {
        let product = mum();
        let log = logger();
        let selection: SelectedOptions = [("Colour", "Red")].into_iter().collect();
        render_product_page(&product, Some(selection), 1, None, &log);

        let lines = log.sink().lines();
        assert!(lines.iter().any(|l| l.contains("Selection does not fit product options")));
        assert!(lines.iter().any(|l| l.contains("Product page render complete")));
    }

    #[test]
    fn test_parse_inputs() {
        let (product, reviews) = parse_inputs(
            r#"{"_id": "p1", "name": "Fern", "slug": "fern"}"#,
            Some(r#"{"items": [], "nextCursor": null}"#),
        )
        .unwrap();
        assert_eq!(product.slug, "fern");
        assert!(reviews.unwrap().is_empty());

        let err = parse_inputs("{", None).unwrap_err();
        assert!(err.to_string().contains("Failed to parse product JSON"));
    }
}
