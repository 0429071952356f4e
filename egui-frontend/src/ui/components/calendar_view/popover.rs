//! # Day Detail Popover
//!
//! A floating detail card for the focused calendar day, anchored next to
//! the clicked cell and clamped to the screen. A dimmed backdrop closes it
//! on click; Escape is handled by the app coordinator.

use chrono::NaiveDate;
use eframe::egui;
use shared::EventLayer;

use crate::ui::app_state::FridayApp;
use crate::ui::components::theme::{self, colors, layer_emoji, CURRENT_THEME};

use super::events::{build_event_index, sort_by_importance};
use super::grid::weekday_short;

impl FridayApp {
    /// Render the popover for the focused day, if any.
    pub fn draw_day_popover(&mut self, ctx: &egui::Context) {
        let Some(focus) = self.calendar.focus.clone() else {
            return;
        };
        let screen = ctx.screen_rect();

        // Backdrop: subtle dim, click anywhere to dismiss
        let backdrop = egui::Area::new(egui::Id::new("day_popover_backdrop"))
            .order(egui::Order::Foreground)
            .fixed_pos(screen.min)
            .show(ctx, |ui| {
                ui.painter()
                    .rect_filled(screen, egui::Rounding::ZERO, egui::Color32::from_black_alpha(12));
                ui.allocate_rect(screen, egui::Sense::click())
            });
        if backdrop.inner.clicked() {
            self.calendar.close_focus();
            return;
        }

        // Place beside the anchor cell, flipping left when there is no
        // room on the right, and clamping to the screen with a margin
        let max_width = 420.0_f32.min(screen.width() - 32.0);
        let max_height = (screen.height() * 0.45).min(screen.height() - 24.0);
        let mut x = focus.anchor.right() + 12.0;
        let mut y = focus.anchor.top();
        if x + max_width > screen.right() - 12.0 {
            x = focus.anchor.left() - max_width - 12.0;
        }
        if y + max_height > screen.bottom() - 12.0 {
            y = screen.bottom() - max_height - 12.0;
        }
        x = x.max(12.0);
        y = y.max(12.0);

        let index = build_event_index(&self.config.events, &self.calendar.active_layers);
        let mut day_events = index.get(&focus.iso).cloned().unwrap_or_default();
        sort_by_importance(&mut day_events);

        let heading = match NaiveDate::parse_from_str(&focus.iso, "%Y-%m-%d") {
            Ok(date) => format!("{} ({})", focus.iso, weekday_short(date)),
            Err(_) => focus.iso.clone(),
        };

        let mut close_requested = false;
        egui::Area::new(egui::Id::new("day_popover"))
            .order(egui::Order::Foreground)
            .fixed_pos(egui::pos2(x, y))
            .show(ctx, |ui| {
                egui::Frame::none()
                    .fill(colors::CARD_BACKGROUND)
                    .stroke(egui::Stroke::new(1.0, colors::CARD_BORDER))
                    .rounding(egui::Rounding::same(3.0))
                    .inner_margin(egui::Margin::same(16.0))
                    .show(ui, |ui| {
                        ui.set_width(max_width - 32.0);

                        ui.horizontal(|ui| {
                            ui.label(
                                egui::RichText::new(&heading)
                                    .font(egui::FontId::new(16.0, egui::FontFamily::Proportional))
                                    .color(colors::INK)
                                    .strong(),
                            );
                            ui.with_layout(
                                egui::Layout::right_to_left(egui::Align::Center),
                                |ui| {
                                    if ui
                                        .button(
                                            egui::RichText::new("CLOSE")
                                                .font(egui::FontId::new(
                                                    11.0,
                                                    egui::FontFamily::Proportional,
                                                ))
                                                .color(colors::INK_SOFT),
                                        )
                                        .clicked()
                                    {
                                        close_requested = true;
                                    }
                                },
                            );
                        });
                        ui.add_space(8.0);

                        egui::ScrollArea::vertical()
                            .max_height(max_height - 70.0)
                            .show(ui, |ui| {
                                let mut any = false;
                                for layer in EventLayer::GROUPING {
                                    let group: Vec<_> = day_events
                                        .iter()
                                        .filter(|event| event.layer == layer)
                                        .collect();
                                    if group.is_empty() {
                                        continue;
                                    }
                                    any = true;

                                    ui.label(
                                        egui::RichText::new(format!(
                                            "{} {}",
                                            layer_emoji(layer),
                                            layer.label()
                                        ))
                                        .font(egui::FontId::new(12.0, egui::FontFamily::Proportional))
                                        .color(CURRENT_THEME.layer_color(layer)),
                                    );
                                    ui.add_space(2.0);
                                    for event in group {
                                        let line = match &event.tag {
                                            Some(tag) => format!("• {} ({})", event.title, tag),
                                            None => format!("• {}", event.title),
                                        };
                                        ui.label(
                                            egui::RichText::new(line)
                                                .font(egui::FontId::new(
                                                    13.0,
                                                    egui::FontFamily::Proportional,
                                                ))
                                                .color(colors::INK),
                                        );
                                    }
                                    ui.add_space(4.0);
                                    theme::draw_dashed_hairline(ui);
                                    ui.add_space(6.0);
                                }

                                if !any {
                                    ui.label(
                                        egui::RichText::new("No events scheduled for this date.")
                                            .font(egui::FontId::new(
                                                13.0,
                                                egui::FontFamily::Proportional,
                                            ))
                                            .color(colors::INK_SOFT),
                                    );
                                }
                            });
                    });
            });

        if close_requested {
            self.calendar.close_focus();
        }
    }
}
