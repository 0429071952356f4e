//! # Calendar Panel Rendering
//!
//! Draws the calendar tab: month navigation, layer filter chips with
//! per-month counts, the Sunday-first 42-cell grid with event labels, and
//! the life-calendar strip underneath.
//!
//! ## Layout:
//! Cell sizes are derived from the available width so the grid fills the
//! panel at any window size; day content is painted (not widget-based) and
//! clipped to its cell, with a whole-cell click target that opens the day
//! detail popover anchored at the cell.

use eframe::egui;
use shared::{CalendarEvent, EventLayer};

use crate::ui::app_state::FridayApp;
use crate::ui::components::theme::{colors, layer_emoji, CURRENT_THEME};
use crate::ui::state::FocusDay;

use super::events::{build_event_index, count_in_month, sort_by_importance};
use super::grid::{is_same_day, is_same_month, month_grid, weekday_column};

const CELL_SPACING: f32 = 6.0;
const WEEKDAY_NAMES: [&str; 7] = ["SUN", "MON", "TUE", "WED", "THU", "FRI", "SAT"];

/// Label shown inside a day cell: layer emoji, optional tag, title.
fn cell_label(event: &CalendarEvent) -> String {
    match &event.tag {
        Some(tag) => format!("{} ({}) {}", layer_emoji(event.layer), tag, event.title),
        None => format!("{} {}", layer_emoji(event.layer), event.title),
    }
}

impl FridayApp {
    /// Render the calendar panel.
    pub fn draw_calendar_panel(&mut self, ui: &mut egui::Ui) {
        let today = chrono::Local::now().date_naive();

        // Title + month navigation
        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new("CALENDAR")
                    .font(egui::FontId::new(19.0, egui::FontFamily::Proportional))
                    .color(colors::INK)
                    .strong(),
            );

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let next_button = egui::Button::new("›")
                    .fill(colors::CARD_BACKGROUND)
                    .stroke(egui::Stroke::new(1.0, colors::CARD_BORDER))
                    .rounding(egui::Rounding::same(4.0))
                    .min_size(egui::vec2(30.0, 26.0));
                if ui.add(next_button).clicked() {
                    self.calendar.navigate_to_next_month();
                }

                ui.add(
                    egui::Label::new(
                        egui::RichText::new(format!(
                            "{} {}",
                            self.calendar.month_name(),
                            self.calendar.selected_year
                        ))
                        .font(egui::FontId::new(15.0, egui::FontFamily::Proportional))
                        .color(colors::INK)
                        .strong(),
                    )
                    .selectable(false),
                );

                let prev_button = egui::Button::new("‹")
                    .fill(colors::CARD_BACKGROUND)
                    .stroke(egui::Stroke::new(1.0, colors::CARD_BORDER))
                    .rounding(egui::Rounding::same(4.0))
                    .min_size(egui::vec2(30.0, 26.0));
                if ui.add(prev_button).clicked() {
                    self.calendar.navigate_to_previous_month();
                }

                ui.add_space(6.0);
                let on_current_month = chrono::NaiveDate::from_ymd_opt(
                    self.calendar.selected_year,
                    self.calendar.selected_month,
                    1,
                )
                .map(|first| is_same_month(first, today))
                .unwrap_or(false);
                if ui
                    .add_enabled(!on_current_month, egui::Button::new("TODAY"))
                    .clicked()
                {
                    self.calendar.go_to_today();
                }
            });
        });

        ui.label(
            egui::RichText::new("Press the interest layers")
                .font(egui::FontId::new(12.0, egui::FontFamily::Proportional))
                .color(colors::INK_SOFT),
        );
        ui.add_space(4.0);
        self.draw_layer_chips(ui);
        ui.add_space(10.0);

        self.draw_month_grid(ui, today);

        ui.add_space(14.0);
        ui.label(
            egui::RichText::new("Click a date to see its schedule next to the cell.")
                .font(egui::FontId::new(12.0, egui::FontFamily::Proportional))
                .color(colors::INK_SOFT),
        );

        ui.add_space(18.0);
        self.draw_life_calendar(ui, today);
    }

    /// One toggle chip per layer, with the month's event count.
    fn draw_layer_chips(&mut self, ui: &mut egui::Ui) {
        ui.horizontal_wrapped(|ui| {
            for layer in EventLayer::ALL {
                let active = self.calendar.active_layers.contains(&layer);
                let count = count_in_month(
                    &self.config.events,
                    layer,
                    self.calendar.selected_year,
                    self.calendar.selected_month,
                );

                let text = if active {
                    format!("{} {} ({}) ✓", layer_emoji(layer), layer.label(), count)
                } else {
                    format!("{} {} ({})", layer_emoji(layer), layer.label(), count)
                };
                let color = if active {
                    CURRENT_THEME.layer_color(layer)
                } else {
                    colors::INK_SOFT
                };
                let stroke_color = if active { color } else { colors::CARD_BORDER };

                let chip = egui::Button::new(
                    egui::RichText::new(text)
                        .font(egui::FontId::new(12.0, egui::FontFamily::Proportional))
                        .color(color),
                )
                .fill(colors::PAPER)
                .stroke(egui::Stroke::new(1.0, stroke_color))
                .rounding(egui::Rounding::same(2.0));

                if ui.add(chip).clicked() {
                    self.calendar.toggle_layer(layer);
                }
            }
        });
    }

    /// The 42-cell month grid with painted day content.
    fn draw_month_grid(&mut self, ui: &mut egui::Ui, today: chrono::NaiveDate) {
        let cells = month_grid(self.calendar.selected_year, self.calendar.selected_month);
        if cells.is_empty() {
            return;
        }
        let index = build_event_index(&self.config.events, &self.calendar.active_layers);

        let avail_w = ui.available_width();
        let cell_w = (avail_w - CELL_SPACING * 6.0) / 7.0;
        let cell_h = (cell_w * 0.72).clamp(92.0, 140.0);

        // Weekday header strip
        let (header_rect, _) = ui.allocate_exact_size(egui::vec2(avail_w, 22.0), egui::Sense::hover());
        for (col, name) in WEEKDAY_NAMES.iter().enumerate() {
            let x = header_rect.left() + col as f32 * (cell_w + CELL_SPACING);
            let color = match col {
                0 => colors::SUNDAY,
                6 => colors::SATURDAY,
                _ => colors::INK_SOFT,
            };
            ui.painter().text(
                egui::pos2(x + 4.0, header_rect.center().y),
                egui::Align2::LEFT_CENTER,
                name,
                egui::FontId::new(13.0, egui::FontFamily::Proportional),
                color,
            );
        }
        crate::ui::components::theme::draw_dashed_hairline(ui);
        ui.add_space(4.0);

        let grid_h = cell_h * 6.0 + CELL_SPACING * 5.0;
        let (grid_rect, _) = ui.allocate_exact_size(egui::vec2(avail_w, grid_h), egui::Sense::hover());

        let mut clicked: Option<(String, egui::Rect)> = None;

        for (i, cell) in cells.iter().enumerate() {
            let row = (i / 7) as f32;
            let col = (i % 7) as f32;
            let rect = egui::Rect::from_min_size(
                grid_rect.min
                    + egui::vec2(col * (cell_w + CELL_SPACING), row * (cell_h + CELL_SPACING)),
                egui::vec2(cell_w, cell_h),
            );

            let response = ui.interact(rect, ui.id().with(("day_cell", i)), egui::Sense::click());
            if response.clicked() {
                clicked = Some((cell.iso.clone(), rect));
            }

            let painter = ui.painter().with_clip_rect(rect);
            if response.hovered() {
                painter.rect_filled(
                    rect,
                    egui::Rounding::same(3.0),
                    egui::Color32::from_rgba_unmultiplied(27, 27, 27, 10),
                );
            }

            // Day number, colored by weekend column and month membership
            let number_color = if !cell.in_month {
                colors::INK_FAINT
            } else {
                match weekday_column(cell.date) {
                    0 => colors::SUNDAY,
                    6 => colors::SATURDAY,
                    _ => colors::INK,
                }
            };
            let number_pos = egui::pos2(rect.left() + 6.0, rect.top() + 6.0);
            painter.text(
                number_pos,
                egui::Align2::LEFT_TOP,
                cell.date.format("%-d").to_string(),
                egui::FontId::new(15.0, egui::FontFamily::Proportional),
                number_color,
            );

            if is_same_day(cell.date, today) {
                painter.rect_stroke(
                    egui::Rect::from_min_size(
                        egui::pos2(rect.left() + 2.0, rect.top() + 2.0),
                        egui::vec2(28.0, 24.0),
                    ),
                    egui::Rounding::same(4.0),
                    egui::Stroke::new(1.0, colors::TODAY_BORDER),
                );
            }

            if cell.iso == self.calendar.selected_iso {
                let y = rect.top() + 28.0;
                painter.line_segment(
                    [
                        egui::pos2(rect.left() + 6.0, y),
                        egui::pos2(rect.left() + 30.0, y),
                    ],
                    egui::Stroke::new(2.0, colors::SELECTED_UNDERLINE),
                );
            }

            // Up to two importance-sorted event labels, then an overflow line
            let mut day_events = index.get(&cell.iso).cloned().unwrap_or_default();
            sort_by_importance(&mut day_events);
            let more = day_events.len().saturating_sub(2);

            let mut line_y = rect.top() + 36.0;
            for event in day_events.iter().take(2) {
                painter.text(
                    egui::pos2(rect.left() + 6.0, line_y),
                    egui::Align2::LEFT_TOP,
                    cell_label(event),
                    egui::FontId::new(11.0, egui::FontFamily::Proportional),
                    CURRENT_THEME.layer_color(event.layer),
                );
                line_y += 15.0;
            }
            if more > 0 {
                painter.text(
                    egui::pos2(rect.left() + 6.0, line_y),
                    egui::Align2::LEFT_TOP,
                    format!("+{} more", more),
                    egui::FontId::new(10.0, egui::FontFamily::Proportional),
                    colors::INK_SOFT,
                );
            }
        }

        if let Some((iso, rect)) = clicked {
            self.calendar.selected_iso = iso.clone();
            self.calendar.focus = Some(FocusDay { iso, anchor: rect });
        }
    }
}
