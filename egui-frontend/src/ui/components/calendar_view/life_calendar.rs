//! # Life Calendar Strip
//!
//! A 52×7 grid of small cells (one per day of a year) painted under the
//! month view. Cells up to today are marked off with a diagonal stroke,
//! today's cell gets a stronger outline, and dashed guides split the grid
//! into quarters.
//!
//! The start date is configurable; malformed or missing values fall back
//! to January 1 of the current year rather than failing the render.

use chrono::{Datelike, NaiveDate};
use eframe::egui;
use log::warn;

use crate::ui::app_state::FridayApp;
use crate::ui::components::theme::colors;

pub const WEEKS: usize = 52;
pub const DAYS_PER_WEEK: usize = 7;
pub const TOTAL_CELLS: usize = WEEKS * DAYS_PER_WEEK; // 364

const CELL_SIZE: f32 = 9.0;
const CELL_GAP: f32 = 2.0;
const QUARTER_GUIDES: [usize; 3] = [13, 26, 39];

/// Resolve the configured start date, falling back to January 1 of the
/// current year on anything unparseable.
pub fn parse_start_date(raw: Option<&str>, today: NaiveDate) -> NaiveDate {
    if let Some(raw) = raw {
        match NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d") {
            Ok(date) => return date,
            Err(e) => warn!("📆 Ignoring malformed life-calendar start date '{}': {}", raw, e),
        }
    }
    NaiveDate::from_ymd_opt(today.year(), 1, 1).unwrap_or(today)
}

/// Number of cells to mark off and the index of today's cell, both
/// clamped to the grid.
pub fn year_progress(start: NaiveDate, today: NaiveDate) -> (usize, usize) {
    let day_index = (today - start).num_days();
    let filled = (day_index + 1).clamp(0, TOTAL_CELLS as i64) as usize;
    let today_cell = day_index.clamp(0, TOTAL_CELLS as i64 - 1) as usize;
    (filled, today_cell)
}

impl FridayApp {
    /// Paint the life-calendar strip.
    pub fn draw_life_calendar(&self, ui: &mut egui::Ui, today: NaiveDate) {
        let start = parse_start_date(self.config.life_start_date.as_deref(), today);
        let (filled, today_cell) = year_progress(start, today);

        ui.label(
            egui::RichText::new("LIFE CALENDAR")
                .font(egui::FontId::new(12.0, egui::FontFamily::Proportional))
                .color(colors::INK_SOFT),
        );
        ui.label(
            egui::RichText::new("YEAR (52×7)")
                .font(egui::FontId::new(10.0, egui::FontFamily::Proportional))
                .color(colors::INK_FAINT),
        );
        ui.add_space(6.0);

        let grid_w = WEEKS as f32 * CELL_SIZE + (WEEKS - 1) as f32 * CELL_GAP;
        let grid_h = DAYS_PER_WEEK as f32 * CELL_SIZE + (DAYS_PER_WEEK - 1) as f32 * CELL_GAP;
        let (grid_rect, _) =
            ui.allocate_exact_size(egui::vec2(grid_w, grid_h), egui::Sense::hover());
        let painter = ui.painter();

        // Columns are weeks, rows are days within a week
        for week in 0..WEEKS {
            for day in 0..DAYS_PER_WEEK {
                let cell_index = week * DAYS_PER_WEEK + day;
                let is_filled = cell_index < filled;
                let is_today = cell_index == today_cell;

                let min = grid_rect.min
                    + egui::vec2(
                        week as f32 * (CELL_SIZE + CELL_GAP),
                        day as f32 * (CELL_SIZE + CELL_GAP),
                    );
                let rect = egui::Rect::from_min_size(min, egui::vec2(CELL_SIZE, CELL_SIZE));

                let border = if is_today {
                    colors::INK
                } else if is_filled {
                    colors::INK_SOFT
                } else {
                    colors::INK_FAINT
                };
                painter.rect_stroke(rect, egui::Rounding::ZERO, egui::Stroke::new(1.0, border));

                if is_filled {
                    // Strike the day off with a diagonal plus a corner tick
                    painter.line_segment(
                        [
                            egui::pos2(rect.left() + 1.5, rect.bottom() - 1.5),
                            egui::pos2(rect.right() - 1.5, rect.top() + 1.5),
                        ],
                        egui::Stroke::new(1.0, colors::INK_SOFT),
                    );
                    painter.rect_filled(
                        egui::Rect::from_min_size(
                            egui::pos2(rect.right() - 2.5, rect.top() + 1.0),
                            egui::vec2(1.5, 1.5),
                        ),
                        egui::Rounding::ZERO,
                        if is_today { colors::INK } else { colors::INK_SOFT },
                    );
                }
            }
        }

        // Dashed quarter guides between weeks 13/26/39
        for week in QUARTER_GUIDES {
            let x = grid_rect.left() + week as f32 * (CELL_SIZE + CELL_GAP) - CELL_GAP / 2.0;
            painter.add(egui::Shape::dashed_line(
                &[
                    egui::pos2(x, grid_rect.top()),
                    egui::pos2(x, grid_rect.bottom()),
                ],
                egui::Stroke::new(1.0, colors::INK_FAINT),
                4.0,
                4.0,
            ));
        }

        // Quarter labels under the grid
        let (label_rect, _) =
            ui.allocate_exact_size(egui::vec2(grid_w, 14.0), egui::Sense::hover());
        for (i, label) in ["Q1", "Q2", "Q3", "Q4"].iter().enumerate() {
            let x = label_rect.left() + grid_w * (i as f32 + 0.5) / 4.0;
            ui.painter().text(
                egui::pos2(x, label_rect.center().y),
                egui::Align2::CENTER_CENTER,
                *label,
                egui::FontId::new(10.0, egui::FontFamily::Proportional),
                colors::INK_FAINT,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(iso: &str) -> NaiveDate {
        NaiveDate::parse_from_str(iso, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn malformed_start_dates_fall_back_to_january_first() {
        let today = date("2026-02-20");
        assert_eq!(parse_start_date(Some("not-a-date"), today), date("2026-01-01"));
        assert_eq!(parse_start_date(None, today), date("2026-01-01"));
        assert_eq!(parse_start_date(Some("2025-06-01"), today), date("2025-06-01"));
    }

    #[test]
    fn progress_counts_days_inclusively() {
        let start = date("2026-01-01");
        // Day one: one cell filled, cursor on cell 0
        assert_eq!(year_progress(start, start), (1, 0));
        // Feb 20 is day index 50
        assert_eq!(year_progress(start, date("2026-02-20")), (51, 50));
    }

    #[test]
    fn progress_clamps_outside_the_grid() {
        let start = date("2026-01-01");
        // A start date in the future fills nothing
        assert_eq!(year_progress(start, date("2025-12-01")), (0, 0));
        // More than a year in: everything filled, cursor pinned to the end
        assert_eq!(
            year_progress(start, date("2027-06-01")),
            (TOTAL_CELLS, TOTAL_CELLS - 1)
        );
    }
}
