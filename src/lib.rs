pub mod config;
pub mod database;
pub mod error;
pub mod export;
pub mod models;
pub mod ui;
pub mod validation;

// Re-export commonly used items
pub use config::{Settings, Theme};
pub use database::{ProductQuery, ProductStore};
pub use error::{AppError, AppResult};
pub use export::{export_csv, write_products};
pub use models::{Product, ProductInput, SortColumn, SortDirection};
pub use validation::parse_product_form;
