use eframe::{self, egui};
use egui::ViewportBuilder;
use log::{error, info, warn};
use std::collections::HashSet;
use std::time::{Duration, Instant};

use crate::config::Settings;
use crate::database::{ProductQuery, ProductStore};
use crate::error::AppResult;
use crate::export;
use crate::models::SortDirection;
use crate::validation::parse_product_form;

use super::components::{FormAction, ProductForm, ProductTable, TableEvent};
use super::state::{AppState, StatusKind, StatusMessage};

pub struct InventoryApp {
    store: ProductStore,
    settings: Settings,
    state: AppState,
}

impl InventoryApp {
    const SEARCH_DEBOUNCE_MS: u64 = 300; // Wait 300ms after user stops typing

    pub fn new(store: ProductStore, settings: Settings) -> Self {
        let state = AppState {
            theme: settings.theme,
            ..AppState::default()
        };
        Self {
            store,
            settings,
            state,
        }
    }

    /// Re-runs the search once the user has stopped typing for a moment.
    fn check_delayed_search(&mut self, ctx: &egui::Context) {
        if !self.state.search_needs_update {
            return;
        }
        if self.state.last_search_time.elapsed().as_millis()
            >= Self::SEARCH_DEBOUNCE_MS as u128
        {
            if self.state.search_term != self.state.last_search_term {
                self.state.last_search_term = self.state.search_term.clone();
                self.state.needs_refresh = true;
            }
            self.state.search_needs_update = false;
        } else {
            // Make sure update() runs again even without further input
            ctx.request_repaint_after(Duration::from_millis(50));
        }
    }

    /// Re-queries the store with the current filter and sort.
    ///
    /// Filters on the debounce-committed term, not the live field text, so a
    /// refresh triggered mid-typing (add, delete, sort) keeps the view on the
    /// last committed search.
    fn refresh(&mut self) {
        let query = ProductQuery {
            search: Some(self.state.last_search_term.clone()),
            sort: self.state.sort,
        };
        match self.store.fetch(&query) {
            Ok(products) => {
                let visible: HashSet<i64> = products.iter().map(|p| p.id).collect();
                self.state.selected.retain(|id| visible.contains(id));
                self.state.products = products;
            }
            Err(e) => {
                error!("Failed to load products: {}", e);
                self.state.status = Some(StatusMessage::error(e.to_string()));
            }
        }
        self.state.needs_refresh = false;
    }

    /// The sole checked id, or `None` when zero or several rows are checked.
    fn single_selection(&self) -> Option<i64> {
        if self.state.selected.len() == 1 {
            self.state.selected.iter().next().copied()
        } else {
            None
        }
    }

    fn handle_form_action(&mut self, action: FormAction) {
        match action {
            FormAction::Add => self.add_product(),
            FormAction::Update => self.update_product(),
            FormAction::Delete => self.delete_selected(),
            FormAction::Clear => {
                self.state.form.clear();
                self.state.selected.clear();
                self.state.status = None;
            }
        }
    }

    fn add_product(&mut self) {
        let input = match parse_product_form(
            &self.state.form.name,
            &self.state.form.quantity,
            &self.state.form.price,
        ) {
            Ok(input) => input,
            Err(errors) => {
                self.state.status = Some(StatusMessage::error(errors.join("; ")));
                return;
            }
        };

        match self.store.insert(&input) {
            Ok(id) => {
                info!("Added product {} ({})", id, input.name);
                self.state.status = Some(StatusMessage::success("Product added"));
                self.state.form.clear();
                self.state.needs_refresh = true;
            }
            Err(e) => {
                error!("Failed to add product: {}", e);
                self.state.status = Some(StatusMessage::error(e.to_string()));
            }
        }
    }

    fn update_product(&mut self) {
        let id = match self.single_selection() {
            Some(id) => id,
            None => {
                self.state.status =
                    Some(StatusMessage::error("Select exactly one row to update"));
                return;
            }
        };

        let input = match parse_product_form(
            &self.state.form.name,
            &self.state.form.quantity,
            &self.state.form.price,
        ) {
            Ok(input) => input,
            Err(errors) => {
                self.state.status = Some(StatusMessage::error(errors.join("; ")));
                return;
            }
        };

        match self.store.update(id, &input) {
            Ok(()) => {
                info!("Updated product {}", id);
                self.state.status = Some(StatusMessage::success("Product updated"));
                self.state.needs_refresh = true;
            }
            Err(e) => {
                error!("Failed to update product {}: {}", id, e);
                self.state.status = Some(StatusMessage::error(e.to_string()));
            }
        }
    }

    fn delete_selected(&mut self) {
        if self.state.selected.is_empty() {
            self.state.status = Some(StatusMessage::error("Select a row to delete"));
            return;
        }
        let ids: Vec<i64> = self.state.selected.iter().copied().collect();

        match self.store.delete(&ids) {
            Ok(removed) => {
                info!("Deleted {} products", removed);
                self.state.status =
                    Some(StatusMessage::success(format!("Deleted {} product(s)", removed)));
                self.state.selected.clear();
                self.state.form.clear();
                self.state.needs_refresh = true;
            }
            Err(e) => {
                error!("Failed to delete products: {}", e);
                self.state.status = Some(StatusMessage::error(e.to_string()));
            }
        }
    }

    fn handle_table_event(&mut self, event: TableEvent) {
        match event {
            TableEvent::RowClicked(id) => {
                if let Some(product) = self.state.products.iter().find(|p| p.id == id) {
                    self.state.form.fill(product);
                }
                self.state.selected.clear();
                self.state.selected.insert(id);
            }
            TableEvent::SelectionToggled(id) => {
                if !self.state.selected.remove(&id) {
                    self.state.selected.insert(id);
                }
            }
            TableEvent::SortBy(column) => {
                self.state.sort = match self.state.sort {
                    Some((active, direction)) if active == column => {
                        Some((column, direction.toggled()))
                    }
                    _ => Some((column, SortDirection::Asc)),
                };
                self.state.needs_refresh = true;
            }
        }
    }

    fn export_view(&mut self) {
        let dialog = rfd::FileDialog::new()
            .set_file_name("inventory.csv")
            .add_filter("CSV Files", &["csv"]);

        if let Some(path) = dialog.save_file() {
            match export::export_csv(&path, &self.state.products) {
                Ok(()) => {
                    self.state.status = Some(StatusMessage::success(format!(
                        "Exported {} row(s)",
                        self.state.products.len()
                    )));
                }
                Err(e) => {
                    error!("Export failed: {}", e);
                    self.state.status = Some(StatusMessage::error(e.to_string()));
                }
            }
        }
    }

    fn set_theme(&mut self, ctx: &egui::Context, theme: crate::config::Theme) {
        self.state.theme = theme;
        self.settings.theme = theme;
        ctx.set_visuals(theme.visuals());
        // Theme persistence must never take the app down
        if let Err(e) = self.settings.save() {
            warn!("Failed to save settings: {}", e);
        }
    }

    fn show_top_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Stockroom");
                ui.separator();

                ui.label("Theme:");
                let mut theme = self.state.theme;
                egui::ComboBox::from_id_salt("theme_select")
                    .selected_text(theme.label())
                    .show_ui(ui, |ui| {
                        for option in crate::config::Theme::all() {
                            ui.selectable_value(&mut theme, *option, option.label());
                        }
                    });
                if theme != self.state.theme {
                    self.set_theme(ctx, theme);
                }

                ui.separator();
                if ui.button("Export CSV").clicked() {
                    self.export_view();
                }
            });
        });
    }

    fn show_form_panel(&mut self, ctx: &egui::Context) {
        egui::SidePanel::left("form_panel")
            .resizable(false)
            .show(ctx, |ui| {
                ui.add_space(6.0);
                ui.heading("Product");
                ui.add_space(6.0);

                let action = ProductForm::show(ui, &mut self.state.form);
                if let Some(action) = action {
                    self.handle_form_action(action);
                }

                ui.add_space(10.0);
                if let Some(ref status) = self.state.status {
                    let color = match status.kind {
                        StatusKind::Success => egui::Color32::GREEN,
                        StatusKind::Error => egui::Color32::RED,
                    };
                    ui.colored_label(color, &status.text);
                }
            });
    }

    fn show_table_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.label("Search:");
                let response = ui.add(
                    egui::TextEdit::singleline(&mut self.state.search_term)
                        .desired_width(250.0)
                        .hint_text("Name, quantity or price..."),
                );
                if response.changed() {
                    self.state.search_needs_update = true;
                    self.state.last_search_time = Instant::now();
                }

                if ui.button("Clear").clicked() {
                    self.state.search_term.clear();
                    self.state.last_search_term.clear();
                    self.state.search_needs_update = false;
                    self.state.needs_refresh = true;
                }

                ui.label(format!("{} product(s)", self.state.products.len()));
            });
            ui.add_space(6.0);

            let event = ProductTable::show(
                ui,
                &self.state.products,
                &self.state.selected,
                self.state.sort,
            );
            if let Some(event) = event {
                self.handle_table_event(event);
            }
        });
    }
}

impl eframe::App for InventoryApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.check_delayed_search(ctx);
        if self.state.needs_refresh {
            self.refresh();
        }

        self.show_top_bar(ctx);
        self.show_form_panel(ctx);
        self.show_table_panel(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProductInput;

    fn test_app() -> (tempfile::TempDir, InventoryApp) {
        let dir = tempfile::tempdir().unwrap();
        let store = ProductStore::open(&dir.path().join("inventory.db")).unwrap();
        let app = InventoryApp::new(store, Settings::default());
        (dir, app)
    }

    fn input(name: &str) -> ProductInput {
        ProductInput {
            name: name.to_string(),
            quantity: 1,
            price: 1.0,
        }
    }

    #[test]
    fn refresh_filters_on_committed_term_only() {
        let (_dir, mut app) = test_app();
        app.store.insert(&input("Hammer")).unwrap();
        app.store.insert(&input("Saw")).unwrap();

        // Typing in progress: the field text is ahead of the committed term
        app.state.search_term = "ham".to_string();
        app.refresh();
        assert_eq!(app.state.products.len(), 2);

        // Once the debounce commits, the filter applies
        app.state.last_search_term = "ham".to_string();
        app.refresh();
        assert_eq!(app.state.products.len(), 1);
        assert_eq!(app.state.products[0].name, "Hammer");
    }

    #[test]
    fn refresh_prunes_selection_to_visible_rows() {
        let (_dir, mut app) = test_app();
        let hammer = app.store.insert(&input("Hammer")).unwrap();
        let saw = app.store.insert(&input("Saw")).unwrap();
        app.state.selected.insert(hammer);
        app.state.selected.insert(saw);

        app.state.last_search_term = "saw".to_string();
        app.refresh();

        assert_eq!(app.state.products.len(), 1);
        assert!(app.state.selected.contains(&saw));
        assert!(!app.state.selected.contains(&hammer));
    }
}

pub fn launch_gui() -> AppResult<()> {
    let store = ProductStore::open_default()?;
    let settings = Settings::load();
    info!("Loaded settings: {:?}", settings);

    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default().with_inner_size([900.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Stockroom",
        options,
        Box::new(move |cc| {
            cc.egui_ctx.set_visuals(settings.theme.visuals());
            Ok(Box::new(InventoryApp::new(store, settings)))
        }),
    )?;
    Ok(())
}
