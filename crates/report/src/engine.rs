use tracing::debug;

use crate::aggregate::aggregate_sales;
use crate::config::ReportSettings;
use crate::error::ReportError;
use crate::model::{Dataset, ReportRow};
use crate::policy::{PolicyOptions, SalesPolicy};
use crate::rank::TOP_PRODUCTS_LIMIT;
use crate::report::build_report;
use crate::validate::{validate_dataset, validate_policies};

/// Validate, aggregate and rank with caller-supplied policy functions.
///
/// Fails before touching any purchase record if the dataset is malformed
/// or either function is missing.
pub fn analyze_sales_data(
    dataset: Option<&Dataset>,
    options: &PolicyOptions<'_>,
) -> Result<Vec<ReportRow>, ReportError> {
    let dataset = validate_dataset(dataset)?;
    let policy = validate_policies(options)?;
    Ok(execute(dataset, &policy, TOP_PRODUCTS_LIMIT))
}

/// Same pipeline driven by a [`SalesPolicy`] implementation.
pub fn run(
    dataset: &Dataset,
    policy: &dyn SalesPolicy,
    settings: &ReportSettings,
) -> Result<Vec<ReportRow>, ReportError> {
    let dataset = validate_dataset(Some(dataset))?;
    Ok(execute(dataset, policy, settings.top_products))
}

fn execute(dataset: &Dataset, policy: &dyn SalesPolicy, top_limit: usize) -> Vec<ReportRow> {
    debug!("aggregating purchase records");
    let accumulators = aggregate_sales(dataset, policy);
    build_report(accumulators, policy, top_limit)
}
