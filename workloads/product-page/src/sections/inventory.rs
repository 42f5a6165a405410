//! Inventory section renderer: stock status, quantity and purchase actions.

use storefront_commerce::prelude::*;

use super::escape_html;

/// Render the inventory/actions section.
///
/// In-stock selections get a quantity input with Add to Cart and Buy Now;
/// out-of-stock selections get a back-in-stock signup instead.
pub fn render_inventory(view: &ProductView<'_>) -> String {
    let in_stock = view.in_stock();
    let check = view.quantity_check();

    let (status_class, status_message) = if !in_stock {
        ("stock-out", "Out of stock")
    } else if check.remaining_hint.is_some() {
        ("stock-low", "In stock")
    } else {
        ("stock-available", "In stock")
    };

    let hint = check
        .remaining_hint
        .as_deref()
        .filter(|_| in_stock)
        .map(|h| format!(r#"<p class="stock-remaining">{}</p>"#, escape_html(h)))
        .unwrap_or_default();

    let actions = if in_stock {
        let max = check
            .available
            .map(|q| format!(r#" max="{}""#, q))
            .unwrap_or_default();
        let disabled = if view.can_purchase() { "" } else { " disabled" };
        format!(
            r#"<label class="quantity-label">Quantity
            <input type="number" name="quantity" min="1"{max} value="{quantity}" class="quantity-input">
        </label>
        <button class="btn-add-to-cart"{disabled}>Add to Cart</button>
        <button class="btn-buy-now"{disabled}>Buy Now</button>"#,
            max = max,
            quantity = view.quantity(),
            disabled = disabled
        )
    } else {
        format!(
            r#"<form class="back-in-stock" method="post" data-product="{product}">
            <input type="email" name="email" placeholder="Email address" required>
            <button class="btn-notify-me">Notify when available</button>
        </form>"#,
            product = escape_html(view.product().id.as_str())
        )
    };

    format!(
        r#"<section class="product-inventory" data-section="inventory">
    <div class="stock-status {status_class}">
        <span class="stock-indicator"></span>
        <span class="stock-message">{status_message}</span>
    </div>
    {hint}
    <div class="inventory-actions">
        {actions}
    </div>
</section>"#,
        status_class = status_class,
        status_message = status_message,
        hint = hint,
        actions = actions
    )
}

/// Render inventory fallback.
pub fn render_inventory_fallback() -> String {
    r#"<section class="product-inventory product-inventory--loading" data-section="inventory">
    <div class="stock-status stock-loading">
        <span class="stock-message">Checking availability...</span>
    </div>
</section>"#
        .to_string()
}
