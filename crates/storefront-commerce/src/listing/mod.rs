//! Product listings: cards and pagination.

mod card;
mod pagination;

pub use card::{card_price_label, result_count_label, ProductCard};
pub use pagination::{CursorPage, CursorRequest, Pagination, SHOP_PAGE_SIZE};
