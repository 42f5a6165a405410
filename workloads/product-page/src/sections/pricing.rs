//! Pricing section renderer.

use storefront_commerce::prelude::PriceDisplay;

use super::escape_html;

/// Render the pricing section.
///
/// A discounted selection shows the regular price struck through next to
/// the discounted one.
pub fn render_pricing(price: &PriceDisplay) -> String {
    let Some(regular) = price.regular.as_deref() else {
        return render_pricing_fallback();
    };

    let price_html = match price.discounted.as_deref() {
        Some(discounted) => format!(
            r#"<span class="price-original">{}</span>
        <span class="price-current">{}</span>"#,
            escape_html(regular),
            escape_html(discounted)
        ),
        None => format!(
            r#"<span class="price-current">{}</span>"#,
            escape_html(regular)
        ),
    };

    let badge = price
        .badge
        .as_deref()
        .map(|b| format!(r#"<span class="price-discount">{}</span>"#, escape_html(b)))
        .unwrap_or_default();

    format!(
        r#"<section class="product-pricing" data-section="pricing">
    <div class="price-display">
        {price_html}
        {badge}
    </div>
</section>"#,
        price_html = price_html,
        badge = badge
    )
}

/// Render pricing fallback when no price data is available.
pub fn render_pricing_fallback() -> String {
    r#"<section class="product-pricing product-pricing--loading" data-section="pricing">
    <p class="price-unavailable">Price unavailable</p>
</section>"#
        .to_string()
}
