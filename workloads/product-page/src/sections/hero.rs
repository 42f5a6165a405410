//! Product hero section renderer: gallery and product details.

use storefront_commerce::catalog::MediaItem;
use storefront_commerce::prelude::*;

use super::escape_html;

/// Render the product hero section.
///
/// The gallery shows the media selected for the current choices; the first
/// item is the main image and every item gets a thumbnail. Descriptions are
/// merchant-authored HTML from the platform and are emitted as-is.
pub fn render_hero(view: &ProductView<'_>) -> String {
    let product = view.product();
    let media = view.media();

    let main_html = match media.first() {
        Some(item) => render_main_media(item, &product.name),
        None => r#"<div class="product-image-placeholder">No image available</div>"#.to_string(),
    };

    let thumbnails: String = if media.len() > 1 {
        media
            .iter()
            .filter_map(|item| {
                let url = item.preview_url()?;
                Some(format!(
                    r#"<img src="{}" alt="{}" class="product-thumbnail{}">"#,
                    escape_html(&url),
                    escape_html(item.alt_text().unwrap_or(&product.name)),
                    if item.is_video() { " product-thumbnail--video" } else { "" }
                ))
            })
            .collect()
    } else {
        String::new()
    };

    let brand = product
        .brand
        .as_deref()
        .map(|b| format!(r#"<p class="product-brand">{}</p>"#, escape_html(b)))
        .unwrap_or_default();

    let ribbon = product
        .ribbon
        .as_deref()
        .filter(|r| !r.is_empty())
        .map(|r| format!(r#"<span class="product-ribbon">{}</span>"#, escape_html(r)))
        .unwrap_or_default();

    let description = product
        .description
        .as_deref()
        .map(|d| format!(r#"<div class="product-description">{}</div>"#, d))
        .unwrap_or_default();

    let info_sections: String = product
        .additional_info_sections
        .iter()
        .map(|section| {
            format!(
                r#"<details class="product-info-section"><summary>{}</summary><div>{}</div></details>"#,
                escape_html(section.title.as_deref().unwrap_or_default()),
                section.description.as_deref().unwrap_or_default()
            )
        })
        .collect();

    format!(
        r#"<section class="product-hero" data-section="hero">
    <div class="product-gallery">
        {ribbon}
        {main_html}
        <div class="product-thumbnails">{thumbnails}</div>
    </div>
    <div class="product-info">
        {brand}
        <h1 class="product-name">{name}</h1>
        {description}
        {info_sections}
    </div>
</section>"#,
        ribbon = ribbon,
        main_html = main_html,
        thumbnails = thumbnails,
        brand = brand,
        name = escape_html(&product.name),
        description = description,
        info_sections = info_sections
    )
}

fn render_main_media(item: &MediaItem, product_name: &str) -> String {
    let alt = escape_html(item.alt_text().unwrap_or(product_name));
    if let Some(image) = &item.image {
        return format!(
            r#"<img src="{}" alt="{}" class="product-image-main">"#,
            escape_html(&image.url),
            alt
        );
    }
    match item.video_file() {
        Some(file) => format!(
            r#"<video controls class="product-image-main" aria-label="{}"><source src="{}"></video>"#,
            alt,
            escape_html(&file.url)
        ),
        None => r#"<div class="product-image-placeholder">No image available</div>"#.to_string(),
    }
}

/// Render hero fallback when the product record is unusable.
pub fn render_hero_fallback() -> String {
    r#"<section class="product-hero product-hero--error" data-section="hero">
    <div class="error-message">
        <p>Unable to load product information. Please try again.</p>
    </div>
</section>"#
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_commerce::catalog::{MediaGallery, VideoFile, VideoInfo};

    fn product() -> Product {
        let mut product = Product::new("p1", "Fern <Large>", "fern");
        product.brand = Some("Green Thumb".into());
        product.ribbon = Some("New".into());
        product.description = Some("<p>Easy care</p>".into());
        product.media = MediaGallery {
            main_media: None,
            items: vec![
                MediaItem::image("m1", "https://img.example/fern.jpg"),
                MediaItem::image("m2", "https://img.example/fern-2.jpg"),
            ],
        };
        product
    }

    #[test]
    fn test_render_hero_escapes_and_lists_gallery() {
        let product = product();
        let html = render_hero(&ProductView::new(&product));

        assert!(html.contains("Fern &lt;Large&gt;"));
        assert!(html.contains(r#"<p class="product-brand">Green Thumb</p>"#));
        assert!(html.contains("product-ribbon"));
        assert!(html.contains(r#"<div class="product-description"><p>Easy care</p></div>"#));
        assert!(html.contains(r#"src="https://img.example/fern.jpg" alt="Fern &lt;Large&gt;" class="product-image-main""#));
        assert_eq!(html.matches("product-thumbnail\"").count(), 2);
    }

    #[test]
    fn test_render_hero_without_media() {
        let product = Product::new("p2", "Poster", "poster");
        let html = render_hero(&ProductView::new(&product));
        assert!(html.contains("No image available"));
        assert!(!html.contains("product-brand"));
    }

    #[test]
    fn test_render_video_main_media() {
        let mut product = Product::new("p3", "Lamp", "lamp");
        product.media.items.push(MediaItem {
            video: Some(VideoInfo {
                files: vec![VideoFile {
                    url: "https://video.example/lamp.mp4".into(),
                    ..Default::default()
                }],
                still_frame_media_id: None,
            }),
            ..Default::default()
        });
        let html = render_hero(&ProductView::new(&product));
        assert!(html.contains(r#"<source src="https://video.example/lamp.mp4">"#));
    }
}
