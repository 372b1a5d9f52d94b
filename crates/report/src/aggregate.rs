use std::collections::HashMap;

use tracing::{debug, trace, warn};

use crate::model::{Dataset, Product, SellerAccumulator};
use crate::policy::SalesPolicy;

/// Replay every purchase record into one accumulator per seller.
///
/// Accumulators come back in seller input order, one per seller, including
/// sellers with no sales. Records for unknown sellers are skipped whole;
/// line items for unknown skus still count toward quantity with zero cost.
pub fn aggregate_sales(dataset: &Dataset, policy: &dyn SalesPolicy) -> Vec<SellerAccumulator> {
    let mut accumulators: Vec<SellerAccumulator> =
        dataset.sellers.iter().map(SellerAccumulator::new).collect();

    let seller_index = index_sellers(&accumulators);
    let product_index: HashMap<&str, &Product> = dataset
        .products
        .iter()
        .map(|p| (p.sku.as_str(), p))
        .collect();

    debug!(
        sellers = seller_index.len(),
        products = product_index.len(),
        records = dataset.purchase_records.len(),
        "indexes built"
    );

    let mut skipped = 0usize;
    for record in &dataset.purchase_records {
        let Some(&slot) = seller_index.get(record.seller_id.as_str()) else {
            trace!(seller_id = %record.seller_id, "skipping record for unknown seller");
            skipped += 1;
            continue;
        };
        let seller = &mut accumulators[slot];

        seller.sales_count += 1;
        seller.revenue += record.net_amount();

        for item in &record.items {
            let product = product_index.get(item.sku.as_str()).copied();
            if product.is_none() {
                trace!(sku = %item.sku, "line item references unknown product");
            }

            let unit_cost = product.map(|p| p.purchase_price).unwrap_or(0.0);
            let cost = unit_cost * item.quantity as f64;
            let item_revenue = policy.line_revenue(item, product);
            seller.profit += item_revenue - cost;

            seller.add_quantity(&item.sku, item.quantity);
        }
    }

    debug!(skipped, "purchase records aggregated");
    accumulators
}

/// Map seller id to accumulator slot. On duplicate ids the later seller
/// wins; the earlier accumulator still exists but never receives sales.
fn index_sellers(accumulators: &[SellerAccumulator]) -> HashMap<String, usize> {
    let mut index = HashMap::with_capacity(accumulators.len());
    for (slot, acc) in accumulators.iter().enumerate() {
        if index.insert(acc.id.clone(), slot).is_some() {
            warn!(seller_id = %acc.id, "duplicate seller id, later entry receives sales");
        }
    }
    index
}
