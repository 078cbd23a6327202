//! CSV export of the product view.
//!
//! The caller passes the rows exactly as displayed (already filtered and
//! sorted), so the written file mirrors the on-screen table row for row.

use crate::error::AppResult;
use crate::models::Product;
use std::io::Write;
use std::path::Path;

/// Serializes `products` as CSV, preserving slice order.
///
/// The header row is written explicitly so an empty view still produces a
/// well-formed file.
pub fn write_products<W: Write>(writer: W, products: &[Product]) -> AppResult<()> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    wtr.write_record(["id", "name", "quantity", "price"])?;
    for product in products {
        wtr.serialize(product)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Writes `products` to a CSV file at `path`.
pub fn export_csv(path: &Path, products: &[Product]) -> AppResult<()> {
    let file = std::fs::File::create(path)?;
    write_products(file, products)?;
    log::info!("Exported {} products to {}", products.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: i64, name: &str, quantity: i64, price: f64) -> Product {
        Product {
            id,
            name: name.to_string(),
            quantity,
            price,
        }
    }

    #[test]
    fn writes_header_and_rows_in_order() {
        let products = vec![
            product(2, "Bolts", 30, 0.2),
            product(1, "Anvil", 1, 150.0),
        ];

        let mut buf = Vec::new();
        write_products(&mut buf, &products).unwrap();
        let text = String::from_utf8(buf).unwrap();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "id,name,quantity,price");
        assert_eq!(lines[1], "2,Bolts,30,0.20");
        assert_eq!(lines[2], "1,Anvil,1,150.00");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn price_text_matches_table_rendering() {
        // The table shows two decimals; the file must carry the same text
        let products = vec![product(1, "Rope", 3, 0.1), product(2, "Anvil", 1, 150.0)];

        let mut buf = Vec::new();
        write_products(&mut buf, &products).unwrap();
        let text = String::from_utf8(buf).unwrap();

        for p in &products {
            assert!(text.contains(&p.price_text()));
        }
        assert!(text.contains("0.10"));
        assert!(text.contains("150.00"));
    }

    #[test]
    fn empty_view_produces_header_only() {
        let mut buf = Vec::new();
        write_products(&mut buf, &[]).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text.trim(), "id,name,quantity,price");
    }

    #[test]
    fn quotes_names_containing_commas() {
        let products = vec![product(1, "Nuts, assorted", 5, 1.0)];
        let mut buf = Vec::new();
        write_products(&mut buf, &products).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("\"Nuts, assorted\""));
    }
}
