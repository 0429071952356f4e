//! # App State Module
//!
//! This module defines the central application state structure and
//! initialization logic for Friday.
//!
//! ## Key Types:
//! - `AppConfig` - injected catalogs and the storage port
//! - `FridayApp` - main application state struct
//!
//! ## Purpose:
//! The `FridayApp` struct holds all application state in a single place:
//! tab selection, calendar navigation state and the supplement tracker
//! state, plus the injected configuration. Catalogs and storage arrive as
//! constructor arguments rather than ambient singletons so tests can
//! substitute fixtures.

use anyhow::Result;
use chrono::Utc;
use log::info;
use shared::{CalendarEvent, SupplementPreset};

use crate::storage::{self, keys, migration, save_json, KeyValueStore};
use crate::ui::state::{CalendarState, SupplementState, TabState};

/// Everything the app is parameterized over.
pub struct AppConfig {
    /// Compiled-in calendar event catalog
    pub events: Vec<CalendarEvent>,
    /// Compiled-in supplement preset catalog
    pub presets: Vec<SupplementPreset>,
    /// Optional ISO start date for the life calendar strip; malformed or
    /// absent values fall back to January 1 of the current year
    pub life_start_date: Option<String>,
    /// Persistence port
    pub storage: Box<dyn KeyValueStore>,
}

/// Main application struct for the egui life organizer.
pub struct FridayApp {
    pub config: AppConfig,

    // Tab navigation state
    pub tabs: TabState,

    // Calendar panel state
    pub calendar: CalendarState,

    // Supplements panel state
    pub supplements: SupplementState,
}

impl FridayApp {
    /// Create a new FridayApp, loading persisted supplements (with legacy
    /// migration) through the configured storage port.
    pub fn new(cc: &eframe::CreationContext<'_>, config: AppConfig) -> Result<Self> {
        info!("🚀 Initializing Friday");

        crate::ui::components::theme::setup_paper_style(&cc.egui_ctx);

        let now = chrono::Local::now();
        let today_iso = now.date_naive().format("%Y-%m-%d").to_string();
        let items = migration::load_items(
            config.storage.as_ref(),
            &config.presets,
            &today_iso,
            Utc::now().timestamp_millis(),
        );
        let custom_presets: Vec<SupplementPreset> =
            storage::load_json(config.storage.as_ref(), keys::CUSTOM_PRESETS, Vec::new());

        info!(
            "🚀 Loaded {} supplements and {} custom presets",
            items.len(),
            custom_presets.len()
        );

        Ok(Self {
            config,
            tabs: TabState::new(),
            calendar: CalendarState::new(),
            supplements: SupplementState::new(items, custom_presets),
        })
    }

    /// Today's date in the ISO form used as taken-map keys.
    pub fn today_iso(&self) -> String {
        chrono::Local::now().date_naive().format("%Y-%m-%d").to_string()
    }

    /// Write the current item list to storage.
    pub fn persist_supplements(&self) {
        save_json(
            self.config.storage.as_ref(),
            keys::SUPPLEMENTS,
            &self.supplements.items,
        );
    }

    /// Write the user-defined preset list to storage.
    pub fn persist_custom_presets(&self) {
        save_json(
            self.config.storage.as_ref(),
            keys::CUSTOM_PRESETS,
            &self.supplements.custom_presets,
        );
    }
}
