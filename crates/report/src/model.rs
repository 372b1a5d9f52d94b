use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize};

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

/// Absent and `null` numeric fields both read as zero.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A seller as supplied by the caller. Display name is `first last`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Seller {
    pub id: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

impl Seller {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A catalog entry. `purchase_price` is the unit cost.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Product {
    pub sku: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub purchase_price: f64,
}

/// One product line inside a purchase record.
///
/// `discount` is a percentage (`10.0` means 10% off the sale price).
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct LineItem {
    #[serde(default)]
    pub sku: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub quantity: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sale_price: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub discount: f64,
}

/// One completed transaction by one seller.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct PurchaseRecord {
    #[serde(default)]
    pub seller_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_amount: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_discount: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub items: Vec<LineItem>,
}

impl PurchaseRecord {
    /// Record-level revenue: `total_amount - total_discount`.
    pub fn net_amount(&self) -> f64 {
        self.total_amount - self.total_discount
    }
}

/// Pre-loaded input collections.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Dataset {
    pub sellers: Vec<Seller>,
    pub products: Vec<Product>,
    pub purchase_records: Vec<PurchaseRecord>,
}

// ---------------------------------------------------------------------------
// Accumulation
// ---------------------------------------------------------------------------

/// Running per-seller totals, mutated only while records are scanned.
///
/// `products_sold` keeps skus in first-seen order; `sku_slots` maps a sku to
/// its position so repeat sales update in place.
#[derive(Debug, Clone, PartialEq)]
pub struct SellerAccumulator {
    pub id: String,
    pub name: String,
    pub revenue: f64,
    pub profit: f64,
    pub sales_count: u64,
    pub products_sold: Vec<ProductQuantity>,
    sku_slots: HashMap<String, usize>,
}

impl SellerAccumulator {
    pub fn new(seller: &Seller) -> Self {
        Self {
            id: seller.id.clone(),
            name: seller.display_name(),
            revenue: 0.0,
            profit: 0.0,
            sales_count: 0,
            products_sold: Vec::new(),
            sku_slots: HashMap::new(),
        }
    }

    /// Add `quantity` to the running total for `sku`, creating the entry at
    /// zero the first time the sku is seen.
    pub fn add_quantity(&mut self, sku: &str, quantity: u64) {
        let slot = match self.sku_slots.get(sku) {
            Some(&slot) => slot,
            None => {
                let slot = self.products_sold.len();
                self.products_sold.push(ProductQuantity {
                    sku: sku.to_string(),
                    quantity: 0,
                });
                self.sku_slots.insert(sku.to_string(), slot);
                slot
            }
        };
        self.products_sold[slot].quantity += quantity;
    }

    pub fn quantity_of(&self, sku: &str) -> Option<u64> {
        self.sku_slots
            .get(sku)
            .map(|&slot| self.products_sold[slot].quantity)
    }
}

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ProductQuantity {
    pub sku: String,
    pub quantity: u64,
}

/// One line of the final report. Money fields are rounded to 2 decimals.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ReportRow {
    pub seller_id: String,
    pub name: String,
    pub revenue: f64,
    pub profit: f64,
    pub sales_count: u64,
    pub top_products: Vec<ProductQuantity>,
    pub bonus: f64,
}
