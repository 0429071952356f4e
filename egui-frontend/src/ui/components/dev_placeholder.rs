//! # Development Placeholder
//!
//! Shared panel for tabs that exist in the registry but have no
//! implementation yet, and for any unknown tab id.

use eframe::egui;
use log::info;

use crate::ui::app_state::FridayApp;
use crate::ui::components::theme::colors;

impl FridayApp {
    /// Render the "in development" placeholder.
    pub fn draw_dev_placeholder(&self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(70.0);
            ui.label(
                egui::RichText::new("🛠️")
                    .font(egui::FontId::new(56.0, egui::FontFamily::Proportional)),
            );
            ui.add_space(12.0);
            ui.label(
                egui::RichText::new("The developers are hard at work.")
                    .font(egui::FontId::new(16.0, egui::FontFamily::Proportional))
                    .color(colors::INK)
                    .strong(),
            );
            ui.label(
                egui::RichText::new("Something nicer is on the way :)")
                    .font(egui::FontId::new(13.0, egui::FontFamily::Proportional))
                    .color(colors::INK_SOFT),
            );
            ui.add_space(14.0);
            if ui.button("☕ Buy the team a coffee").clicked() {
                info!("☕ Coffee button pressed - thank you!");
            }
            ui.label(
                egui::RichText::new("(coffee for the devs, features for you)")
                    .font(egui::FontId::new(11.0, egui::FontFamily::Proportional))
                    .color(colors::INK_FAINT),
            );
            ui.add_space(70.0);
        });
    }
}
