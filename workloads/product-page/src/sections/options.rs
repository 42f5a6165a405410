//! Option picker renderer.

use storefront_commerce::prelude::*;

use super::escape_html;

/// Render one fieldset per product option.
///
/// Choices that would lead to an out-of-stock selection stay clickable but
/// are dimmed. Color options render as a swatch followed by the choice name.
pub fn render_options(view: &ProductView<'_>) -> String {
    let product = view.product();
    if product.product_options.is_empty() {
        return String::new();
    }

    let availability = view.choice_availability();

    let fieldsets: String = product
        .product_options
        .iter()
        .map(|option| {
            let choices: String = option
                .choices
                .iter()
                .map(|choice| {
                    let state = availability
                        .iter()
                        .find(|a| a.option == option.name && a.choice == choice.description);
                    let selected = state.map_or(false, |s| s.selected);
                    let in_stock = state.map_or(true, |s| s.in_stock);
                    render_choice(option, choice, selected, in_stock)
                })
                .collect();

            let current = view
                .selection()
                .get(&option.name)
                .map(|c| format!(r#" <span class="option-current">{}</span>"#, escape_html(c)))
                .unwrap_or_default();

            format!(
                r#"<fieldset class="product-option product-option--{kind}">
        <legend>{name}:{current}</legend>
        <div class="option-choices">{choices}</div>
    </fieldset>"#,
                kind = option.option_type.as_str(),
                name = escape_html(&option.name),
                current = current,
                choices = choices
            )
        })
        .collect();

    format!(
        r#"<section class="product-options" data-section="options">
    <form method="get" class="options-form">
    {fieldsets}
    </form>
</section>"#,
        fieldsets = fieldsets
    )
}

fn render_choice(
    option: &ProductOption,
    choice: &Choice,
    selected: bool,
    in_stock: bool,
) -> String {
    let mut classes = String::from("option-choice");
    if !in_stock {
        classes.push_str(" option-choice--dimmed");
    }
    if selected {
        classes.push_str(" option-choice--selected");
    }

    let label = match (option.option_type, choice.value.as_deref()) {
        (OptionKind::Color, Some(color)) => {
            let description = escape_html(&choice.description);
            format!(
                r#"<span class="color-swatch" style="background-color: {}" title="{}"></span>{}"#,
                escape_html(color),
                description,
                description
            )
        }
        _ => escape_html(&choice.description),
    };

    format!(
        r#"<label class="{classes}"><input type="radio" name="{name}" value="{value}"{checked}>{label}</label>"#,
        classes = classes,
        name = escape_html(&option.name),
        value = escape_html(&choice.description),
        checked = if selected { " checked" } else { "" },
        label = label
    )
}
