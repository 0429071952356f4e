//! # Supplements Panel
//!
//! The sticker canvas: every tracked supplement is a draggable sticky
//! note. This module owns the panel layout (header, canvas, wizard, undo
//! toast) and the deferred-action plumbing; the individual card is drawn
//! in `sticker`, the position math lives in `layout` and the add flow in
//! `add_wizard`.
//!
//! ## Mutation flow:
//! Drawing collects `StickerAction`s instead of mutating state mid-loop;
//! actions are applied afterwards and persisted where they change durable
//! state.

pub mod add_wizard;
pub mod layout;
pub mod sticker;

use std::time::Instant;

use eframe::egui;
use shared::TimingSlot;

use crate::ui::app_state::FridayApp;
use crate::ui::components::theme::{self, colors};

use layout::{CANVAS_EXTRA, CANVAS_PADDING, COL_WIDTH, ROW_HEIGHT};

/// Deferred mutations collected while drawing stickers.
pub enum StickerAction {
    ToggleTaken { id: String, slot: TimingSlot },
    TogglePin { id: String },
    StartEdit { id: String },
    CancelEdit,
    SaveEdit,
    DragMoved { id: String, delta: egui::Vec2 },
    DragReleased { id: String },
}

impl FridayApp {
    /// Render the supplements panel.
    pub fn draw_supplements_panel(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new("SUPPLEMENTS")
                    .font(egui::FontId::new(19.0, egui::FontFamily::Proportional))
                    .color(colors::INK)
                    .strong(),
            );
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui
                    .button(
                        egui::RichText::new("+ ADD SUPPLEMENT")
                            .font(egui::FontId::new(12.0, egui::FontFamily::Proportional))
                            .color(colors::INK_SOFT),
                    )
                    .clicked()
                {
                    self.supplements.reset_draft();
                }
            });
        });
        ui.add_space(8.0);

        // Canvas height grows with the sticker count
        let container_width = ui.available_width();
        let cols = ((container_width / COL_WIDTH).floor() as usize).max(1);
        let rows = (self.supplements.items.len() + cols - 1) / cols;
        let canvas_height = CANVAS_PADDING + rows as f32 * ROW_HEIGHT + CANVAS_EXTRA;
        let (canvas_rect, _) = ui.allocate_exact_size(
            egui::vec2(container_width, canvas_height),
            egui::Sense::hover(),
        );

        self.supplements.set_canvas_size(canvas_rect.width(), canvas_rect.height());
        if self.supplements.ensure_layout() {
            self.persist_supplements();
        }

        let today_iso = self.today_iso();
        let mut actions: Vec<StickerAction> = Vec::new();

        // Pinned stickers draw last so they sit on top of the pile, and a
        // sticker mid-drag rides above everything
        let dragging_id = self.supplements.dragging_id.clone();
        let mut order: Vec<usize> = (0..self.supplements.items.len()).collect();
        order.sort_by_key(|&i| {
            let item = &self.supplements.items[i];
            (
                item.pinned,
                dragging_id.as_deref() == Some(item.id.as_str()),
            )
        });

        for index in order {
            let item = self.supplements.items[index].clone();
            let edit = self
                .supplements
                .edit
                .as_mut()
                .filter(|draft| draft.id == item.id);
            sticker::draw_sticker(ui, canvas_rect, &item, &today_iso, edit, &mut actions);
        }

        self.apply_sticker_actions(actions);

        theme::draw_dashed_hairline(ui);
        ui.add_space(10.0);
        self.draw_add_wizard(ui);

        if self.supplements.undo.is_some() {
            ui.add_space(12.0);
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new("Check applied.")
                        .font(egui::FontId::new(12.0, egui::FontFamily::Proportional))
                        .color(colors::INK_SOFT),
                );
                if ui
                    .button(
                        egui::RichText::new("UNDO")
                            .font(egui::FontId::new(12.0, egui::FontFamily::Proportional))
                            .color(colors::INK),
                    )
                    .clicked()
                    && self.supplements.undo()
                {
                    self.persist_supplements();
                }
            });
        }

        ui.add_space(18.0);
        ui.label(
            egui::RichText::new(
                "This information is for reference only; consult a professional about your own health.",
            )
            .font(egui::FontId::new(11.0, egui::FontFamily::Proportional))
            .color(colors::INK_FAINT),
        );
    }

    /// Apply the actions gathered during drawing, persisting durable
    /// changes as they land.
    fn apply_sticker_actions(&mut self, actions: Vec<StickerAction>) {
        let today_iso = self.today_iso();
        for action in actions {
            match action {
                StickerAction::ToggleTaken { id, slot } => {
                    self.supplements
                        .toggle_taken(&id, slot, &today_iso, Instant::now());
                    self.persist_supplements();
                }
                StickerAction::TogglePin { id } => {
                    self.supplements.toggle_pin(&id);
                    self.persist_supplements();
                }
                StickerAction::StartEdit { id } => self.supplements.start_edit(&id),
                StickerAction::CancelEdit => self.supplements.cancel_edit(),
                StickerAction::SaveEdit => {
                    self.supplements.save_edit();
                    self.persist_supplements();
                }
                StickerAction::DragMoved { id, delta } => {
                    self.supplements.drag_by(&id, delta.x, delta.y);
                }
                StickerAction::DragReleased { id } => {
                    self.supplements.finish_drag(&id);
                    self.persist_supplements();
                }
            }
        }
    }
}
