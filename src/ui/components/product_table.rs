use crate::models::{Product, SortColumn, SortDirection};
use eframe::egui;
use std::collections::BTreeSet;

/// Interaction with the table this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TableEvent {
    /// A row's name was clicked: fill the form and make it the sole selection.
    RowClicked(i64),
    /// A row checkbox was toggled.
    SelectionToggled(i64),
    /// A sortable column header was clicked.
    SortBy(SortColumn),
}

/// Striped grid of the current view with sortable headers and per-row
/// selection checkboxes.
pub struct ProductTable;

impl ProductTable {
    pub fn show(
        ui: &mut egui::Ui,
        products: &[Product],
        selected: &BTreeSet<i64>,
        sort: Option<(SortColumn, SortDirection)>,
    ) -> Option<TableEvent> {
        let mut event = None;

        egui::ScrollArea::vertical()
            .max_height(ui.available_height() - 20.0)
            .show(ui, |ui| {
                egui::Grid::new("product_table")
                    .num_columns(5)
                    .spacing([16.0, 4.0])
                    .striped(true)
                    .show(ui, |ui| {
                        ui.strong("");
                        ui.strong("ID");
                        for column in SortColumn::all() {
                            if ui.button(header_label(*column, sort)).clicked() {
                                event = Some(TableEvent::SortBy(*column));
                            }
                        }
                        ui.end_row();

                        for product in products {
                            let mut checked = selected.contains(&product.id);
                            if ui.checkbox(&mut checked, "").changed() {
                                event = Some(TableEvent::SelectionToggled(product.id));
                            }

                            ui.label(product.id.to_string());

                            if ui
                                .selectable_label(checked, &product.name)
                                .clicked()
                            {
                                event = Some(TableEvent::RowClicked(product.id));
                            }

                            ui.label(product.quantity.to_string());
                            ui.label(product.price_text());
                            ui.end_row();
                        }
                    });
            });

        if products.is_empty() {
            ui.add_space(10.0);
            ui.label("No products to show");
        }

        event
    }
}

/// Header text with a direction marker on the active sort column.
fn header_label(column: SortColumn, sort: Option<(SortColumn, SortDirection)>) -> String {
    match sort {
        Some((active, direction)) if active == column => {
            let arrow = match direction {
                SortDirection::Asc => "▲",
                SortDirection::Desc => "▼",
            };
            format!("{} {}", column.label(), arrow)
        }
        _ => column.label().to_string(),
    }
}
