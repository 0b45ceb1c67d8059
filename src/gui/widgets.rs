//! Small shared widgets: status boxes and plain data tables.

use egui::{Color32, RichText};

const WARNING_BG: Color32 = Color32::from_rgb(255, 243, 205);
const WARNING_FG: Color32 = Color32::from_rgb(133, 100, 4);
const INFO_BG: Color32 = Color32::from_rgb(209, 236, 241);
const INFO_FG: Color32 = Color32::from_rgb(12, 84, 96);
const ERROR_BG: Color32 = Color32::from_rgb(248, 215, 218);
const ERROR_FG: Color32 = Color32::from_rgb(114, 28, 36);

fn status_box(ui: &mut egui::Ui, icon: &str, text: &str, bg: Color32, fg: Color32) {
    egui::Frame::none()
        .fill(bg)
        .rounding(5.0)
        .inner_margin(10.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new(format!("{icon} {text}")).color(fg));
        });
}

pub fn warning(ui: &mut egui::Ui, text: &str) {
    status_box(ui, "⚠", text, WARNING_BG, WARNING_FG);
}

pub fn info(ui: &mut egui::Ui, text: &str) {
    status_box(ui, "ℹ", text, INFO_BG, INFO_FG);
}

pub fn error(ui: &mut egui::Ui, text: &str) {
    status_box(ui, "✖", text, ERROR_BG, ERROR_FG);
}

pub fn section(ui: &mut egui::Ui, title: &str) {
    ui.add_space(12.0);
    ui.label(RichText::new(title).size(18.0).strong());
    ui.add_space(6.0);
}

/// Striped grid with a bold header row, scrollable sideways.
pub fn data_grid<R>(ui: &mut egui::Ui, id: &str, headers: &[String], rows: R)
where
    R: IntoIterator<Item = Vec<String>>,
{
    egui::ScrollArea::horizontal()
        .id_salt(format!("{id}_scroll"))
        .show(ui, |ui| {
            egui::Grid::new(id)
                .striped(true)
                .min_col_width(60.0)
                .spacing([12.0, 4.0])
                .show(ui, |ui| {
                    for header in headers {
                        ui.label(RichText::new(header).strong());
                    }
                    ui.end_row();

                    for row in rows {
                        for cell in row {
                            ui.label(cell);
                        }
                        ui.end_row();
                    }
                });
        });
}
