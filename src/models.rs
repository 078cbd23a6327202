use serde::Serialize;

/// One inventory row as stored in the database.
///
/// The price serializes through [`Product::price_text`] so the CSV export
/// carries exactly the text the table displays.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub quantity: i64,
    #[serde(serialize_with = "serialize_price")]
    pub price: f64,
}

impl Product {
    /// Price as displayed in the table and written to CSV.
    pub fn price_text(&self) -> String {
        format_price(self.price)
    }
}

fn format_price(price: f64) -> String {
    format!("{:.2}", price)
}

fn serialize_price<S>(price: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(&format_price(*price))
}

/// A validated product payload without an identity yet.
///
/// This is the only type the database layer accepts for inserts and updates,
/// so raw form strings can never reach a SQL statement.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductInput {
    pub name: String,
    pub quantity: i64,
    pub price: f64,
}

/// Columns the product table can be ordered by.
///
/// Closed enum on purpose: the ORDER BY clause is built from
/// [`SortColumn::as_sql`], never from user-supplied text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    Name,
    Quantity,
    Price,
}

impl SortColumn {
    pub fn as_sql(&self) -> &'static str {
        match self {
            SortColumn::Name => "name",
            SortColumn::Quantity => "quantity",
            SortColumn::Price => "price",
        }
    }

    /// Header label shown in the table view.
    pub fn label(&self) -> &'static str {
        match self {
            SortColumn::Name => "Name",
            SortColumn::Quantity => "Quantity",
            SortColumn::Price => "Price",
        }
    }

    pub fn all() -> &'static [SortColumn] {
        &[SortColumn::Name, SortColumn::Quantity, SortColumn::Price]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_sql(&self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}
