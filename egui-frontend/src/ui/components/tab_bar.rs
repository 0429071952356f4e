//! # Tab Bar Module
//!
//! The scattered emoji icons that act as Friday's main navigation. Icons
//! sit at fixed fractional positions inside a reserved region rather than
//! in a row, for the hand-arranged desk look; the active tab gets a soft
//! underline beneath its icon.

use eframe::egui;

use crate::ui::app_state::FridayApp;
use crate::ui::components::theme::colors;
use crate::ui::state::TABS;

/// Height of the icon region.
const TAB_BAR_HEIGHT: f32 = 230.0;
/// Hit box around each icon.
const ICON_SIZE: f32 = 64.0;

impl FridayApp {
    /// Render the scattered icon tabs and apply any selection.
    pub fn draw_tab_bar(&mut self, ui: &mut egui::Ui) {
        let (bar_rect, _) = ui.allocate_exact_size(
            egui::vec2(ui.available_width(), TAB_BAR_HEIGHT),
            egui::Sense::hover(),
        );

        let mut clicked: Option<&'static str> = None;

        for tab in TABS.iter() {
            let pos = egui::pos2(
                bar_rect.left() + bar_rect.width() * tab.x,
                bar_rect.top() + bar_rect.height() * tab.y,
            );
            let icon_rect = egui::Rect::from_min_size(pos, egui::vec2(ICON_SIZE, ICON_SIZE));
            let response = ui
                .interact(icon_rect, ui.id().with(tab.id), egui::Sense::click())
                .on_hover_text(tab.label);

            // Icons lift slightly on hover
            let lift = if response.hovered() { -4.0 } else { 0.0 };
            let center = icon_rect.center() + egui::vec2(0.0, lift);
            ui.painter().text(
                center,
                egui::Align2::CENTER_CENTER,
                tab.emoji,
                egui::FontId::new(40.0, egui::FontFamily::Proportional),
                colors::INK,
            );
            ui.painter().text(
                egui::pos2(center.x, icon_rect.bottom() + 10.0),
                egui::Align2::CENTER_CENTER,
                tab.label,
                egui::FontId::new(11.0, egui::FontFamily::Proportional),
                if self.tabs.is_active(tab.id) {
                    colors::INK
                } else {
                    colors::INK_SOFT
                },
            );

            if self.tabs.is_active(tab.id) {
                let y = icon_rect.bottom() + 20.0;
                ui.painter().line_segment(
                    [
                        egui::pos2(center.x - 20.0, y),
                        egui::pos2(center.x + 20.0, y),
                    ],
                    egui::Stroke::new(2.0, colors::INK_SOFT),
                );
            }

            if response.clicked() {
                clicked = Some(tab.id);
            }
        }

        if let Some(id) = clicked {
            self.tabs.select(id);
            // A tab change invalidates any open day popover
            self.calendar.close_focus();
        }
    }
}
