use crate::error::ReportError;
use crate::model::Dataset;
use crate::policy::{BoundPolicy, PolicyOptions};

/// Check that the dataset is present and that every collection has at least
/// one entry. Collections are checked in declaration order, so an empty
/// `products` list fails before `purchase_records` is looked at.
pub fn validate_dataset(dataset: Option<&Dataset>) -> Result<&Dataset, ReportError> {
    let dataset =
        dataset.ok_or_else(|| ReportError::MalformedData("dataset is missing".into()))?;

    if dataset.sellers.is_empty() {
        return Err(empty("sellers"));
    }
    if dataset.products.is_empty() {
        return Err(empty("products"));
    }
    if dataset.purchase_records.is_empty() {
        return Err(empty("purchase_records"));
    }

    Ok(dataset)
}

/// Check that both policy functions were supplied.
pub fn validate_policies<'o>(options: &'o PolicyOptions<'_>) -> Result<BoundPolicy<'o>, ReportError> {
    let revenue = options
        .calculate_revenue
        .as_deref()
        .ok_or_else(|| ReportError::MissingPolicy("calculate_revenue".into()))?;
    let bonus = options
        .calculate_bonus
        .as_deref()
        .ok_or_else(|| ReportError::MissingPolicy("calculate_bonus".into()))?;

    Ok(BoundPolicy { revenue, bonus })
}

fn empty(collection: &str) -> ReportError {
    ReportError::MalformedData(format!("'{collection}' must be a non-empty list"))
}
