use std::cmp::Reverse;

use ordered_float::OrderedFloat;

use crate::model::{ProductQuantity, SellerAccumulator};

/// Default number of entries in `top_products`.
pub const TOP_PRODUCTS_LIMIT: usize = 10;

/// Stable sort by profit, highest first. Equal profits keep seller input order.
pub fn rank_by_profit(accumulators: &mut [SellerAccumulator]) {
    accumulators.sort_by_key(|acc| Reverse(OrderedFloat(acc.profit)));
}

/// Best-selling skus by quantity, highest first, at most `limit` entries.
/// Ties keep first-seen order.
pub fn top_products(acc: &SellerAccumulator, limit: usize) -> Vec<ProductQuantity> {
    let mut products = acc.products_sold.clone();
    products.sort_by_key(|p| Reverse(p.quantity));
    products.truncate(limit);
    products
}
