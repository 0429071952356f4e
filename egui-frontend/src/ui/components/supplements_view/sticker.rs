//! # Sticker Card
//!
//! Draws one supplement as a sticky-note card: painted paper background
//! with a drop shadow and a tilted icon glyph, overlaid with the live
//! widgets (timing checkboxes, edit/pin buttons, the inline edit form).
//!
//! The whole card is a drag handle; widgets drawn on top of it keep
//! pointer priority, so checking a box does not start a drag.

use eframe::egui;
use shared::{SupplementItem, TimingSlot};

use crate::ui::components::theme::{colors, icon_glyph};
use crate::ui::state::EditDraft;

use super::layout::{STICKER_HEIGHT, STICKER_WIDTH};
use super::StickerAction;

/// Extra card height while the inline edit form is open.
const EDIT_FORM_HEIGHT: f32 = 118.0;

pub fn draw_sticker(
    ui: &mut egui::Ui,
    canvas_rect: egui::Rect,
    item: &SupplementItem,
    today_iso: &str,
    edit: Option<&mut EditDraft>,
    actions: &mut Vec<StickerAction>,
) {
    let editing = edit.is_some();
    let scale = if item.pinned { 1.2 } else { 1.0 };
    let height = if editing {
        STICKER_HEIGHT + EDIT_FORM_HEIGHT
    } else {
        STICKER_HEIGHT
    };
    let card_rect = egui::Rect::from_min_size(
        canvas_rect.min + egui::vec2(item.x, item.y),
        egui::vec2(STICKER_WIDTH * scale, height * scale),
    );

    // Whole-card drag handle
    let response = ui.interact(
        card_rect,
        ui.id().with(("sticker", &item.id)),
        egui::Sense::click_and_drag(),
    );
    if response.dragged() {
        actions.push(StickerAction::DragMoved {
            id: item.id.clone(),
            delta: response.drag_delta(),
        });
    }
    if response.drag_stopped() {
        actions.push(StickerAction::DragReleased { id: item.id.clone() });
    }

    // Paper card with a soft shadow; dragging lifts it a little
    let painter = ui.painter();
    let shadow_offset = if response.dragged() {
        egui::vec2(5.0, 9.0)
    } else {
        egui::vec2(3.0, 5.0)
    };
    painter.rect_filled(
        card_rect.translate(shadow_offset),
        egui::Rounding::same(6.0),
        colors::STICKER_SHADOW,
    );
    painter.rect_filled(card_rect, egui::Rounding::same(6.0), colors::STICKER_BACKGROUND);
    let border = if item.pinned {
        colors::STICKER_PINNED_BORDER
    } else {
        colors::STICKER_BORDER
    };
    painter.rect_stroke(card_rect, egui::Rounding::same(6.0), egui::Stroke::new(1.0, border));

    // Icon glyph, tilted by the sticker's rotation for the hand-placed look
    let glyph_galley = painter.layout_no_wrap(
        icon_glyph(&item.icon).to_string(),
        egui::FontId::new(26.0, egui::FontFamily::Proportional),
        colors::INK,
    );
    let mut glyph = egui::epaint::TextShape::new(
        card_rect.min + egui::vec2(12.0, 14.0),
        glyph_galley,
        colors::INK,
    );
    glyph.angle = item.rotate.to_radians();
    painter.add(glyph);

    // Widget overlay
    let content_rect = egui::Rect::from_min_max(
        card_rect.min + egui::vec2(50.0, 10.0),
        card_rect.max - egui::vec2(8.0, 8.0),
    );
    ui.allocate_ui_at_rect(content_rect, |ui| {
        ui.set_clip_rect(card_rect);
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 4.0);

        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new(&item.name)
                    .font(egui::FontId::new(14.0, egui::FontFamily::Proportional))
                    .color(colors::INK)
                    .strong(),
            );
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let pin_glyph = if item.pinned { "★" } else { "☆" };
                let pin_color = if item.pinned { colors::ACCENT } else { colors::INK_SOFT };
                if ui
                    .add(egui::Button::new(egui::RichText::new(pin_glyph).color(pin_color)).frame(false).small())
                    .clicked()
                {
                    actions.push(StickerAction::TogglePin { id: item.id.clone() });
                }
                if ui
                    .add(egui::Button::new(egui::RichText::new("✏").color(colors::INK_SOFT)).frame(false).small())
                    .clicked()
                {
                    if editing {
                        actions.push(StickerAction::CancelEdit);
                    } else {
                        actions.push(StickerAction::StartEdit { id: item.id.clone() });
                    }
                }
            });
        });

        // Recommended slots as small uppercase chips
        ui.horizontal(|ui| {
            for slot in TimingSlot::ALL {
                if item.timing.contains(&slot) {
                    ui.label(
                        egui::RichText::new(slot.label().to_uppercase())
                            .font(egui::FontId::new(9.0, egui::FontFamily::Proportional))
                            .color(colors::INK_SOFT),
                    );
                }
            }
        });

        ui.label(
            egui::RichText::new(&item.benefits)
                .font(egui::FontId::new(11.0, egui::FontFamily::Proportional))
                .color(colors::INK_SOFT),
        );

        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new(format!("{} pills left", item.pills_remaining))
                    .font(egui::FontId::new(12.0, egui::FontFamily::Proportional))
                    .color(colors::INK),
            );
            match item.days_left() {
                Some(days) => {
                    let color = if days <= 5 { colors::ACCENT } else { colors::INK_SOFT };
                    ui.label(
                        egui::RichText::new(format!("{} days left", days))
                            .font(egui::FontId::new(12.0, egui::FontFamily::Proportional))
                            .color(color),
                    );
                }
                None => {
                    ui.label(
                        egui::RichText::new("set a daily dose")
                            .font(egui::FontId::new(12.0, egui::FontFamily::Proportional))
                            .color(colors::INK_FAINT),
                    );
                }
            }
        });

        // Today's intake checkboxes, one per active slot
        ui.horizontal(|ui| {
            for slot in TimingSlot::ALL {
                if !item.timing.contains(&slot) {
                    continue;
                }
                let mut checked = item.slots_taken_on(today_iso).contains(&slot);
                if ui.checkbox(&mut checked, slot.label()).changed() {
                    actions.push(StickerAction::ToggleTaken {
                        id: item.id.clone(),
                        slot,
                    });
                }
            }
        });

        if let Some(draft) = edit {
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new("Purchased")
                        .font(egui::FontId::new(11.0, egui::FontFamily::Proportional))
                        .color(colors::INK_SOFT),
                );
                ui.add(
                    egui::TextEdit::singleline(&mut draft.purchase_date)
                        .hint_text("YYYY-MM-DD")
                        .desired_width(90.0),
                );
            });
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new("Total")
                        .font(egui::FontId::new(11.0, egui::FontFamily::Proportional))
                        .color(colors::INK_SOFT),
                );
                ui.add(egui::DragValue::new(&mut draft.total_pills).clamp_range(0..=9999));
                ui.label(
                    egui::RichText::new("Daily")
                        .font(egui::FontId::new(11.0, egui::FontFamily::Proportional))
                        .color(colors::INK_SOFT),
                );
                ui.add(egui::DragValue::new(&mut draft.dosage_per_day).clamp_range(0..=99));
                ui.label(
                    egui::RichText::new("Left")
                        .font(egui::FontId::new(11.0, egui::FontFamily::Proportional))
                        .color(colors::INK_SOFT),
                );
                ui.add(egui::DragValue::new(&mut draft.pills_remaining).clamp_range(0..=9999));
            });
            ui.horizontal(|ui| {
                if ui.button("SAVE").clicked() {
                    actions.push(StickerAction::SaveEdit);
                }
                if ui.button("CANCEL").clicked() {
                    actions.push(StickerAction::CancelEdit);
                }
            });
        }
    });
}
