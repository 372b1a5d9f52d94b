//! Dataset loading from JSON.
//!
//! The three collections are checked for presence and shape before typed
//! deserialization, so a missing or non-list collection surfaces as
//! [`ReportError::MalformedData`] rather than a generic parse error.

use std::path::Path;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::error::ReportError;
use crate::model::Dataset;

const COLLECTIONS: [&str; 3] = ["sellers", "products", "purchase_records"];

pub fn dataset_from_json(input: &str) -> Result<Dataset, ReportError> {
    let value: Value = serde_json::from_str(input).map_err(|e| ReportError::Parse(e.to_string()))?;
    dataset_from_value(value)
}

pub fn dataset_from_value(value: Value) -> Result<Dataset, ReportError> {
    let Value::Object(mut root) = value else {
        return Err(ReportError::MalformedData("dataset must be a JSON object".into()));
    };

    for key in COLLECTIONS {
        match root.get(key) {
            Some(Value::Array(_)) => {}
            Some(_) => {
                return Err(ReportError::MalformedData(format!("'{key}' must be a list")));
            }
            None => {
                return Err(ReportError::MalformedData(format!("'{key}' is missing")));
            }
        }
    }

    let dataset = Dataset {
        sellers: take_collection(&mut root, "sellers")?,
        products: take_collection(&mut root, "products")?,
        purchase_records: take_collection(&mut root, "purchase_records")?,
    };

    debug!(
        sellers = dataset.sellers.len(),
        products = dataset.products.len(),
        purchase_records = dataset.purchase_records.len(),
        "dataset loaded"
    );
    Ok(dataset)
}

pub fn load_dataset(path: &Path) -> Result<Dataset, ReportError> {
    let data = std::fs::read_to_string(path)
        .map_err(|e| ReportError::Io(format!("cannot read {}: {e}", path.display())))?;
    dataset_from_json(&data)
}

fn take_collection<T: DeserializeOwned>(
    root: &mut serde_json::Map<String, Value>,
    key: &str,
) -> Result<Vec<T>, ReportError> {
    let value = root.remove(key).unwrap_or(Value::Array(Vec::new()));
    serde_json::from_value(value).map_err(|e| ReportError::Parse(format!("'{key}': {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"{
        "customers": [{"id": "c1"}],
        "sellers": [
            {"id": "seller_1", "first_name": "Alexey", "last_name": "Petrov", "position": "Senior"}
        ],
        "products": [
            {"sku": "SKU_001", "name": "Tea", "purchase_price": 12.5, "sale_price": 20}
        ],
        "purchase_records": [
            {
                "receipt_id": "r1",
                "date": "2023-12-04",
                "seller_id": "seller_1",
                "customer_id": "c1",
                "items": [{"sku": "SKU_001", "quantity": 2, "sale_price": 20, "discount": 5}],
                "total_amount": 40,
                "total_discount": 2
            }
        ]
    }"#;

    #[test]
    fn parses_dataset_ignoring_extra_fields() {
        let data = dataset_from_json(SAMPLE).unwrap();
        assert_eq!(data.sellers[0].display_name(), "Alexey Petrov");
        assert_eq!(data.products[0].purchase_price, 12.5);
        let record = &data.purchase_records[0];
        assert_eq!(record.net_amount(), 38.0);
        assert_eq!(record.items[0].quantity, 2);
        assert_eq!(record.items[0].discount, 5.0);
    }

    #[test]
    fn null_numbers_load_as_zero() {
        let data = dataset_from_json(
            r#"{
                "sellers": [{"id": "s1"}],
                "products": [{"sku": "A", "purchase_price": null}],
                "purchase_records": [{
                    "seller_id": "s1",
                    "total_amount": 30,
                    "total_discount": null,
                    "items": [{"sku": "A", "quantity": 3, "sale_price": 10, "discount": null}]
                }]
            }"#,
        )
        .unwrap();
        let record = &data.purchase_records[0];
        assert_eq!(record.total_discount, 0.0);
        assert_eq!(record.net_amount(), 30.0);
        assert_eq!(record.items[0].discount, 0.0);
        assert_eq!(data.products[0].purchase_price, 0.0);
    }

    #[test]
    fn missing_collection_is_malformed() {
        let err = dataset_from_json(r#"{"sellers": [], "products": []}"#).unwrap_err();
        assert!(matches!(err, ReportError::MalformedData(ref m) if m.contains("purchase_records")));
    }

    #[test]
    fn non_list_collection_is_malformed() {
        let err = dataset_from_json(
            r#"{"sellers": {"id": "s"}, "products": [], "purchase_records": []}"#,
        )
        .unwrap_err();
        assert!(matches!(err, ReportError::MalformedData(ref m) if m.contains("sellers")));
    }

    #[test]
    fn non_object_root_is_malformed() {
        let err = dataset_from_json("null").unwrap_err();
        assert!(matches!(err, ReportError::MalformedData(_)));
    }

    #[test]
    fn invalid_json_is_parse_error() {
        let err = dataset_from_json("{not json").unwrap_err();
        assert!(matches!(err, ReportError::Parse(_)));
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();
        let data = load_dataset(file.path()).unwrap();
        assert_eq!(data.purchase_records.len(), 1);
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_dataset(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, ReportError::Io(_)));
    }
}
