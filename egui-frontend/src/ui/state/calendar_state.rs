//! # Calendar State Module
//!
//! This module contains all state related to the calendar view and
//! navigation.
//!
//! ## Responsibilities:
//! - Calendar month/year navigation
//! - The selected day and the focused day (the one with an open popover)
//! - Which event layers are currently shown
//!
//! ## Purpose:
//! This isolates all calendar-specific state management, making it easier
//! to maintain and test calendar navigation independently of rendering.

use std::collections::BTreeSet;

use chrono::Datelike;
use eframe::egui;
use shared::EventLayer;

/// A day whose detail popover is open, anchored near its grid cell.
#[derive(Debug, Clone)]
pub struct FocusDay {
    /// ISO date of the focused day
    pub iso: String,
    /// Screen rect of the clicked cell; the popover is placed beside it
    pub anchor: egui::Rect,
}

/// Calendar-specific state for month navigation and display.
#[derive(Debug)]
pub struct CalendarState {
    /// Currently displayed month (1-12)
    pub selected_month: u32,

    /// Currently displayed year
    pub selected_year: i32,

    /// ISO date of the selected day (underlined in the grid)
    pub selected_iso: String,

    /// Day with an open detail popover, if any
    pub focus: Option<FocusDay>,

    /// Event layers currently shown; starts with every layer active
    pub active_layers: BTreeSet<EventLayer>,
}

impl CalendarState {
    /// Create new calendar state focused on the current month, with all
    /// layers visible and today selected.
    pub fn new() -> Self {
        let now = chrono::Local::now();
        Self {
            selected_month: now.month(),
            selected_year: now.year(),
            selected_iso: now.date_naive().format("%Y-%m-%d").to_string(),
            focus: None,
            active_layers: EventLayer::ALL.into_iter().collect(),
        }
    }

    /// Navigate to the previous month
    pub fn navigate_to_previous_month(&mut self) {
        if self.selected_month == 1 {
            self.selected_month = 12;
            self.selected_year -= 1;
        } else {
            self.selected_month -= 1;
        }
        log::info!("📅 Navigated to previous month: {}/{}", self.selected_month, self.selected_year);
    }

    /// Navigate to the next month
    pub fn navigate_to_next_month(&mut self) {
        if self.selected_month == 12 {
            self.selected_month = 1;
            self.selected_year += 1;
        } else {
            self.selected_month += 1;
        }
        log::info!("📅 Navigated to next month: {}/{}", self.selected_month, self.selected_year);
    }

    /// Jump back to the current month.
    pub fn go_to_today(&mut self) {
        let now = chrono::Local::now();
        self.selected_month = now.month();
        self.selected_year = now.year();
        log::info!("📅 Jumped back to {}/{}", self.selected_month, self.selected_year);
    }

    /// Show/hide a layer.
    pub fn toggle_layer(&mut self, layer: EventLayer) {
        if !self.active_layers.remove(&layer) {
            self.active_layers.insert(layer);
        }
    }

    /// Dismiss the day detail popover.
    pub fn close_focus(&mut self) {
        self.focus = None;
    }

    /// Get the displayed month name as a string
    pub fn month_name(&self) -> String {
        match self.selected_month {
            1 => "January",
            2 => "February",
            3 => "March",
            4 => "April",
            5 => "May",
            6 => "June",
            7 => "July",
            8 => "August",
            9 => "September",
            10 => "October",
            11 => "November",
            12 => "December",
            _ => "Unknown",
        }
        .to_string()
    }
}
