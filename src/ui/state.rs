use crate::config::Theme;
use crate::models::{Product, SortColumn, SortDirection};
use std::collections::BTreeSet;
use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

/// One-line feedback shown under the form, colored by kind.
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub kind: StatusKind,
}

impl StatusMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: StatusKind::Success,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: StatusKind::Error,
        }
    }
}

/// Raw text of the three entry fields.
#[derive(Debug, Default, Clone)]
pub struct FormState {
    pub name: String,
    pub quantity: String,
    pub price: String,
}

impl FormState {
    pub fn clear(&mut self) {
        self.name.clear();
        self.quantity.clear();
        self.price.clear();
    }

    /// Fills the fields from an existing row (row-click behaviour).
    pub fn fill(&mut self, product: &Product) {
        self.name = product.name.clone();
        self.quantity = product.quantity.to_string();
        self.price = product.price_text();
    }
}

pub struct AppState {
    pub form: FormState,
    /// Rows currently displayed, already filtered and sorted by the store.
    pub products: Vec<Product>,
    /// Ids of the checked rows.
    pub selected: BTreeSet<i64>,
    pub search_term: String,
    pub last_search_term: String,
    pub search_needs_update: bool,
    pub last_search_time: Instant,
    pub sort: Option<(SortColumn, SortDirection)>,
    pub status: Option<StatusMessage>,
    pub theme: Theme,
    /// Set whenever the displayed rows may be stale.
    pub needs_refresh: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            form: FormState::default(),
            products: Vec::new(),
            selected: BTreeSet::new(),
            search_term: String::new(),
            last_search_term: String::new(),
            search_needs_update: false,
            last_search_time: Instant::now(),
            sort: None,
            status: None,
            theme: Theme::default(),
            needs_refresh: true,
        }
    }
}
