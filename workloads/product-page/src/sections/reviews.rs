//! Reviews section renderer.

use storefront_commerce::listing::CursorPage;
use storefront_commerce::prelude::Review;

use super::escape_html;

/// Render the reviews section.
///
/// Only approved reviews are shown; the "more" link appears while the
/// platform reports another page.
pub fn render_reviews(page: &CursorPage<Review>) -> String {
    let approved: Vec<&Review> = page.items.iter().filter(|r| r.is_approved()).collect();

    let reviews_html: String = if approved.is_empty() {
        r#"<p class="reviews-empty">No reviews yet.</p>"#.to_string()
    } else {
        approved.iter().map(|r| render_single_review(r)).collect()
    };

    let load_more = match page.next_cursor.as_deref() {
        Some(cursor) => format!(
            r#"<a class="btn-load-more" href="?reviewsCursor={}">Load More Reviews</a>"#,
            escape_html(cursor)
        ),
        None => String::new(),
    };

    format!(
        r#"<section class="product-reviews" data-section="reviews">
    <h2>Customer Reviews</h2>
    <div class="reviews-list">
        {reviews_html}
    </div>
    {load_more}
</section>"#,
        reviews_html = reviews_html,
        load_more = load_more
    )
}

fn render_single_review(review: &Review) -> String {
    let date = review
        .display_date()
        .map(|d| format!(r#"<span class="review-date">{}</span>"#, d))
        .unwrap_or_default();

    let reply = review
        .reply_message()
        .map(|m| {
            format!(
                r#"<blockquote class="review-reply">{}</blockquote>"#,
                escape_html(m)
            )
        })
        .unwrap_or_default();

    format!(
        r#"<article class="review">
        <header class="review-header">
            <span class="review-stars" aria-label="{rating} out of 5">{stars}</span>
            <span class="review-author">{author}</span>
            {date}
        </header>
        <h3 class="review-title">{title}</h3>
        <p class="review-body">{body}</p>
        {reply}
    </article>"#,
        rating = review.rating(),
        stars = render_stars(review.stars()),
        author = escape_html(review.author_name()),
        date = date,
        title = escape_html(review.title().unwrap_or_default()),
        body = escape_html(review.body().unwrap_or_default()),
        reply = reply
    )
}

fn render_stars(stars: [bool; 5]) -> String {
    stars
        .iter()
        .map(|&filled| if filled { '★' } else { '☆' })
        .collect()
}

/// Render reviews fallback.
pub fn render_reviews_fallback() -> String {
    r#"<section class="product-reviews product-reviews--fallback" data-section="reviews">
    <h2>Customer Reviews</h2>
    <p class="reviews-loading">Unable to load reviews at this time.</p>
</section>"#
        .to_string()
}
