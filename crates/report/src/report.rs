use tracing::debug;

use crate::model::{ReportRow, SellerAccumulator};
use crate::policy::SalesPolicy;
use crate::rank::{rank_by_profit, top_products};

/// Round half away from zero to 2 decimal places. Negative zero comes back
/// as `0.0`.
pub fn round2(value: f64) -> f64 {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Freeze one accumulator into its report row. The only place rounding
/// happens.
pub fn project_row(acc: &SellerAccumulator, bonus: f64, top_limit: usize) -> ReportRow {
    ReportRow {
        seller_id: acc.id.clone(),
        name: acc.name.clone(),
        revenue: round2(acc.revenue),
        profit: round2(acc.profit),
        sales_count: acc.sales_count,
        top_products: top_products(acc, top_limit),
        bonus: round2(bonus),
    }
}

/// Rank accumulators by profit, price each rank through the bonus policy,
/// and project the rows in ranked order.
pub fn build_report(
    mut accumulators: Vec<SellerAccumulator>,
    policy: &dyn SalesPolicy,
    top_limit: usize,
) -> Vec<ReportRow> {
    rank_by_profit(&mut accumulators);

    let total = accumulators.len();
    let rows: Vec<ReportRow> = accumulators
        .iter()
        .enumerate()
        .map(|(rank, acc)| {
            let bonus = policy.bonus_for_rank(rank, total, acc);
            project_row(acc, bonus, top_limit)
        })
        .collect();

    debug!(rows = rows.len(), "report projected");
    rows
}
