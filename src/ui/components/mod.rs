mod product_form;
mod product_table;

pub use product_form::{FormAction, ProductForm};
pub use product_table::{ProductTable, TableEvent};
