//! Navigation Panel Widget
//! Left side panel with the page menu.

use super::pages::Page;
use egui::{Color32, RichText};

/// Left side navigation menu.
#[derive(Default)]
pub struct NavPanel {
    pub selected: Page,
}

impl NavPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw the navigation panel
    pub fn show(&mut self, ui: &mut egui::Ui) -> NavAction {
        let mut action = NavAction::None;

        ui.vertical_centered(|ui| {
            ui.add_space(5.0);
            ui.label(
                RichText::new("📌 Navigation")
                    .size(22.0)
                    .color(Color32::from_rgb(100, 149, 237)),
            );
        });
        ui.add_space(10.0);
        ui.separator();
        ui.add_space(5.0);

        ui.label(RichText::new("Go to").size(14.0).strong());
        ui.add_space(5.0);

        for page in Page::ALL {
            if ui
                .radio_value(&mut self.selected, page, page.label())
                .clicked()
            {
                action = NavAction::Navigate(page);
            }
        }

        action
    }
}

/// Actions triggered by the navigation panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    None,
    Navigate(Page),
}
