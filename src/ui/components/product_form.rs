use crate::ui::state::FormState;
use eframe::egui;

/// Button the user pressed on the form this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    Add,
    Update,
    Delete,
    Clear,
}

/// Entry fields plus the CRUD buttons. Returns the pressed action instead of
/// mutating anything beyond the field text, so the app stays in charge of
/// validation and persistence.
pub struct ProductForm;

impl ProductForm {
    pub fn show(ui: &mut egui::Ui, form: &mut FormState) -> Option<FormAction> {
        let mut action = None;

        ui.group(|ui| {
            egui::Grid::new("product_form")
                .num_columns(2)
                .spacing([10.0, 6.0])
                .show(ui, |ui| {
                    ui.label("Name:");
                    ui.add(
                        egui::TextEdit::singleline(&mut form.name)
                            .desired_width(160.0)
                            .hint_text("Product name"),
                    );
                    ui.end_row();

                    ui.label("Quantity:");
                    ui.add(
                        egui::TextEdit::singleline(&mut form.quantity)
                            .desired_width(160.0)
                            .hint_text("e.g. 12"),
                    );
                    ui.end_row();

                    ui.label("Price:");
                    ui.add(
                        egui::TextEdit::singleline(&mut form.price)
                            .desired_width(160.0)
                            .hint_text("e.g. 9.99"),
                    );
                    ui.end_row();
                });

            ui.add_space(6.0);

            ui.horizontal(|ui| {
                if ui.button("Add").clicked() {
                    action = Some(FormAction::Add);
                }
                if ui.button("Update").clicked() {
                    action = Some(FormAction::Update);
                }
                if ui.button("Delete").clicked() {
                    action = Some(FormAction::Delete);
                }
                if ui.button("Clear").clicked() {
                    action = Some(FormAction::Clear);
                }
            });
        });

        action
    }
}
