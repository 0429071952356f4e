//! # App Coordinator Module
//!
//! This module contains the main application coordination logic: the
//! `eframe::App` implementation and the page-level layout.
//!
//! ## Application Flow:
//! 1. Expire the undo buffer and schedule its repaint
//! 2. Handle global input (ESC closes the day popover)
//! 3. Render the header, the scattered tab bar and the active panel
//! 4. Render the day popover above everything else

use std::time::Instant;

use eframe::egui;

use crate::ui::app_state::FridayApp;
use crate::ui::components::theme::colors;
use crate::ui::state::PanelKind;

impl eframe::App for FridayApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Undo buffers die on a timer, not on user input, so make sure a
        // repaint happens when the window lapses
        let now = Instant::now();
        self.supplements.expire_undo(now);
        if let Some(remaining) = self.supplements.undo_remaining(now) {
            ctx.request_repaint_after(remaining);
        }

        // ESC dismisses the day detail popover
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.calendar.close_focus();
        }

        let frame = egui::Frame::default()
            .fill(colors::PAPER)
            .inner_margin(egui::Margin::symmetric(28.0, 20.0));

        egui::CentralPanel::default().frame(frame).show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    self.render_header(ui);
                    ui.add_space(6.0);
                    self.draw_tab_bar(ui);
                    ui.add_space(10.0);
                    self.render_active_panel(ui);
                    ui.add_space(30.0);
                });
        });

        // The popover floats above the page content
        self.draw_day_popover(ctx);
    }
}

impl FridayApp {
    /// Render the page header: wordmark left, tagline right.
    fn render_header(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.label(
                    egui::RichText::new("FRIDAY")
                        .font(egui::FontId::new(40.0, egui::FontFamily::Proportional))
                        .color(colors::INK)
                        .strong(),
                );
                // Hand-drawn underline under the wordmark
                let cursor = ui.cursor().min;
                ui.painter().line_segment(
                    [
                        egui::pos2(cursor.x + 2.0, cursor.y + 2.0),
                        egui::pos2(cursor.x + 150.0, cursor.y + 5.0),
                    ],
                    egui::Stroke::new(2.0, colors::INK_SOFT),
                );
                ui.add_space(8.0);
            });

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(
                    egui::RichText::new("PRESS THE SERVICE YOU WANT")
                        .font(egui::FontId::new(13.0, egui::FontFamily::Proportional))
                        .color(colors::INK_SOFT),
                );
            });
        });
    }

    /// Route to the active panel, or the landing prompt when no tab is
    /// selected.
    fn render_active_panel(&mut self, ui: &mut egui::Ui) {
        match self.tabs.active_panel() {
            None => {
                ui.add_space(20.0);
                ui.label(
                    egui::RichText::new("SELECT A TAB TO GET STARTED")
                        .font(egui::FontId::new(13.0, egui::FontFamily::Proportional))
                        .color(colors::INK_SOFT),
                );
            }
            Some(PanelKind::Calendar) => self.draw_calendar_panel(ui),
            Some(PanelKind::Supplements) => self.draw_supplements_panel(ui),
            Some(PanelKind::InDevelopment) => self.draw_dev_placeholder(ui),
        }
    }
}
