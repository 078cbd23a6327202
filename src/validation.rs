//! Input validation for the product form.
//!
//! Raw form strings are checked here before anything reaches the database;
//! all failing fields are reported together so the UI can show one message.

use crate::models::ProductInput;

/// Parses the three form fields into a [`ProductInput`].
///
/// Rules: name must be non-empty after trimming, quantity a non-negative
/// integer, price a non-negative number. On failure every offending field is
/// listed in the returned messages.
pub fn parse_product_form(
    name: &str,
    quantity: &str,
    price: &str,
) -> Result<ProductInput, Vec<String>> {
    let mut errors = Vec::new();

    let name = name.trim();
    if name.is_empty() {
        errors.push("Name must not be empty".to_string());
    }

    let quantity_value = match quantity.trim().parse::<i64>() {
        Ok(q) if q >= 0 => Some(q),
        Ok(_) => {
            errors.push("Quantity must not be negative".to_string());
            None
        }
        Err(_) => {
            errors.push("Quantity must be a whole number".to_string());
            None
        }
    };

    let price_value = match price.trim().parse::<f64>() {
        Ok(p) if p >= 0.0 && p.is_finite() => Some(p),
        Ok(_) => {
            errors.push("Price must be a non-negative number".to_string());
            None
        }
        Err(_) => {
            errors.push("Price must be a number".to_string());
            None
        }
    };

    match (quantity_value, price_value) {
        (Some(quantity), Some(price)) if errors.is_empty() => Ok(ProductInput {
            name: name.to_string(),
            quantity,
            price,
        }),
        _ => Err(errors),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_input() {
        let input = parse_product_form("Hammer", "12", "9.99").unwrap();
        assert_eq!(input.name, "Hammer");
        assert_eq!(input.quantity, 12);
        assert_eq!(input.price, 9.99);
    }

    #[test]
    fn trims_whitespace() {
        let input = parse_product_form("  Hammer  ", " 3 ", " 1.5 ").unwrap();
        assert_eq!(input.name, "Hammer");
        assert_eq!(input.quantity, 3);
        assert_eq!(input.price, 1.5);
    }

    #[test]
    fn accepts_zero_quantity_and_price() {
        let input = parse_product_form("Freebie", "0", "0").unwrap();
        assert_eq!(input.quantity, 0);
        assert_eq!(input.price, 0.0);
    }

    #[test]
    fn rejects_empty_name() {
        let errors = parse_product_form("   ", "1", "1.0").unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("Name"));
    }

    #[test]
    fn rejects_non_numeric_quantity() {
        let errors = parse_product_form("Hammer", "many", "1.0").unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("Quantity"));
    }

    #[test]
    fn rejects_fractional_quantity() {
        let errors = parse_product_form("Hammer", "1.5", "1.0").unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("Quantity"));
    }

    #[test]
    fn rejects_non_numeric_price() {
        let errors = parse_product_form("Hammer", "1", "cheap").unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("Price"));
    }

    #[test]
    fn rejects_negative_values() {
        let errors = parse_product_form("Hammer", "-1", "-2.0").unwrap_err();
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn reports_all_failing_fields_together() {
        let errors = parse_product_form("", "abc", "xyz").unwrap_err();
        assert_eq!(errors.len(), 3);
    }
}
