//! `salesrank-report`: per-seller sales aggregation and profit ranking.
//!
//! Pure engine crate: receives pre-loaded sellers, products and purchase
//! records, returns one report row per seller ordered by profit.
//! No CLI dependencies.

pub mod aggregate;
pub mod config;
pub mod engine;
pub mod error;
pub mod load;
pub mod model;
pub mod policy;
pub mod rank;
pub mod report;
pub mod validate;

pub use config::{ReportConfig, ReportSettings};
pub use engine::{analyze_sales_data, run};
pub use error::ReportError;
pub use model::{Dataset, LineItem, Product, ProductQuantity, PurchaseRecord, ReportRow, Seller, SellerAccumulator};
pub use policy::{BonusRates, DefaultPolicy, PolicyOptions, SalesPolicy};
pub use report::{project_row, round2};
