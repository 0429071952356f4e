//! # Add-Supplement Wizard
//!
//! The 3-step flow below the sticker canvas: name (with preset
//! suggestion), timing/dose/benefits, then a confirm step that creates
//! the item. Names that match no preset become a new custom preset,
//! remembered for future runs.

use eframe::egui;
use shared::TimingSlot;

use crate::ui::app_state::FridayApp;
use crate::ui::components::theme::colors;

impl FridayApp {
    /// Render the wizard at its current step.
    pub fn draw_add_wizard(&mut self, ui: &mut egui::Ui) {
        ui.label(
            egui::RichText::new(format!("STEP {}", self.supplements.draft.step))
                .font(egui::FontId::new(11.0, egui::FontFamily::Proportional))
                .color(colors::INK_SOFT),
        );
        ui.add_space(4.0);

        match self.supplements.draft.step {
            1 => self.draw_wizard_step_name(ui),
            2 => self.draw_wizard_step_details(ui),
            _ => self.draw_wizard_step_confirm(ui),
        }
    }

    /// Step 1: name entry plus preset suggestion.
    fn draw_wizard_step_name(&mut self, ui: &mut egui::Ui) {
        let suggested = self.supplements.suggested_preset(&self.config.presets);

        ui.horizontal(|ui| {
            ui.add(
                egui::TextEdit::singleline(&mut self.supplements.draft.name)
                    .hint_text("Supplement name")
                    .desired_width(260.0),
            );
            if ui.button("NEXT").clicked() {
                if let Some(preset) = &suggested {
                    self.supplements.apply_preset_to_draft(preset);
                } else if !self.supplements.draft.name.trim().is_empty() {
                    self.supplements.draft.step = 2;
                }
            }
        });

        if let Some(preset) = &suggested {
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new("Suggested:")
                        .font(egui::FontId::new(12.0, egui::FontFamily::Proportional))
                        .color(colors::INK_SOFT),
                );
                if ui.link(&preset.display_name).clicked() {
                    self.supplements.apply_preset_to_draft(preset);
                }
            });
        }
    }

    /// Step 2: timing slots, daily dose, and a benefit line for unknowns.
    fn draw_wizard_step_details(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            for slot in TimingSlot::ALL {
                let mut checked = self.supplements.draft.timing.contains(&slot);
                if ui.checkbox(&mut checked, slot.label()).changed() {
                    self.supplements.draft.toggle_timing(slot);
                }
            }
            ui.add_space(12.0);
            ui.label(
                egui::RichText::new("Daily dose")
                    .font(egui::FontId::new(12.0, egui::FontFamily::Proportional))
                    .color(colors::INK_SOFT),
            );
            ui.add(egui::DragValue::new(&mut self.supplements.draft.dosage_per_day).clamp_range(0..=99));
        });

        // A matched preset already brings its benefit text
        if self.supplements.draft.preset_key.is_none() {
            ui.add(
                egui::TextEdit::singleline(&mut self.supplements.draft.benefits)
                    .hint_text("One-line benefit")
                    .desired_width(380.0),
            );
        }

        ui.horizontal(|ui| {
            if ui.button("NEXT").clicked() {
                self.supplements.draft.step = 3;
            }
            if ui.button("CANCEL").clicked() {
                self.supplements.reset_draft();
            }
        });
    }

    /// Step 3: summary and commit.
    fn draw_wizard_step_confirm(&mut self, ui: &mut egui::Ui) {
        let summary = {
            let draft = &self.supplements.draft;
            let slots = if draft.timing.is_empty() {
                TimingSlot::Morning.label().to_string()
            } else {
                draft
                    .timing
                    .iter()
                    .map(|slot| slot.label())
                    .collect::<Vec<_>>()
                    .join(" / ")
            };
            format!(
                "{} · {} · {}/day",
                draft.name.trim(),
                slots,
                draft.dosage_per_day.max(1)
            )
        };
        ui.label(
            egui::RichText::new(summary)
                .font(egui::FontId::new(13.0, egui::FontFamily::Proportional))
                .color(colors::INK),
        );
        ui.add_space(4.0);

        ui.horizontal(|ui| {
            if ui.button("SAVE").clicked() {
                let today_iso = self.today_iso();
                let now_millis = chrono::Utc::now().timestamp_millis();
                if self.supplements.create_from_draft(&today_iso, now_millis) {
                    self.persist_supplements();
                    self.persist_custom_presets();
                }
            }
            if ui.button("CANCEL").clicked() {
                self.supplements.reset_draft();
            }
        });
    }
}
