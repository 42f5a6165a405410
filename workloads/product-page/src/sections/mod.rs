//! Section renderers for the product detail page.

mod hero;
mod inventory;
mod options;
mod pricing;
mod reviews;

pub use hero::*;
pub use inventory::*;
pub use options::*;
pub use pricing::*;
pub use reviews::*;

pub(crate) fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
