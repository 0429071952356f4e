//! # Persisted Record Migration
//!
//! Loads the supplement item list from storage, upgrading older record
//! shapes to the current one.
//!
//! ## Schema generations (detected by field presence):
//! - Current (`friday:supplements:v2`): per-date, per-slot taken map plus
//!   sticker position/rotation/pin fields.
//! - Legacy (`friday_supplements`): a whole-day `takenDates` list and no
//!   position fields. A legacy taken day migrates to "all active slots
//!   taken" for that date; positions default to the origin so the canvas
//!   seeds a fresh layout.
//!
//! When neither key holds any records, a small starter set is created from
//! the preset catalog.

use std::collections::HashMap;

use log::info;
use serde::Deserialize;
use shared::{SupplementItem, SupplementPreset, TimingSlot};

use super::{keys, load_json, KeyValueStore};

/// Raw persisted record covering every known schema generation.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredSupplementRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub benefits: String,
    #[serde(default)]
    pub timing: Vec<TimingSlot>,
    #[serde(default)]
    pub purchase_date: String,
    #[serde(default)]
    pub total_pills: u32,
    #[serde(default)]
    pub pills_remaining: u32,
    #[serde(default)]
    pub dosage_per_day: u32,
    /// Current shape: per-date slot lists
    #[serde(default)]
    pub taken_by_date: Option<HashMap<String, Vec<TimingSlot>>>,
    /// Legacy shape: whole days marked taken
    #[serde(default)]
    pub taken_dates: Option<Vec<String>>,
    #[serde(default)]
    pub x: Option<f32>,
    #[serde(default)]
    pub y: Option<f32>,
    #[serde(default)]
    pub rotate: Option<f32>,
    #[serde(default)]
    pub pinned: Option<bool>,
}

/// Produce a canonical current-version item from a raw record.
pub fn migrate_record(raw: StoredSupplementRecord) -> SupplementItem {
    // Items saved before timing slots existed default to a morning dose
    let timing = if raw.timing.is_empty() {
        vec![TimingSlot::Morning]
    } else {
        raw.timing
    };

    let taken_by_date = match raw.taken_by_date {
        Some(map) => map,
        None => raw
            .taken_dates
            .unwrap_or_default()
            .into_iter()
            .map(|date| (date, timing.clone()))
            .collect(),
    };

    SupplementItem {
        id: raw.id,
        name: raw.name,
        icon: raw.icon.unwrap_or_else(|| "multivitamin".to_string()),
        benefits: raw.benefits,
        timing,
        purchase_date: raw.purchase_date,
        total_pills: raw.total_pills,
        pills_remaining: raw.pills_remaining,
        dosage_per_day: raw.dosage_per_day,
        taken_by_date,
        x: raw.x.unwrap_or(0.0),
        y: raw.y.unwrap_or(0.0),
        rotate: raw.rotate.unwrap_or(0.0),
        pinned: raw.pinned.unwrap_or(false),
    }
}

/// Starter items shown on a fresh install: milk thistle, omega-3 and
/// vitamin D from the built-in catalog.
pub fn starter_items(
    presets: &[SupplementPreset],
    today_iso: &str,
    now_millis: i64,
) -> Vec<SupplementItem> {
    [0usize, 1, 3]
        .iter()
        .filter_map(|&index| presets.get(index))
        .map(|preset| {
            SupplementItem::from_preset(
                preset,
                format!("{}-{}", preset.key, now_millis),
                today_iso.to_string(),
            )
        })
        .collect()
}

/// Load the item list: current key first, then the legacy key, then the
/// starter set.
pub fn load_items(
    store: &dyn KeyValueStore,
    presets: &[SupplementPreset],
    today_iso: &str,
    now_millis: i64,
) -> Vec<SupplementItem> {
    let saved: Vec<StoredSupplementRecord> = load_json(store, keys::SUPPLEMENTS, Vec::new());
    if !saved.is_empty() {
        return saved.into_iter().map(migrate_record).collect();
    }

    let legacy: Vec<StoredSupplementRecord> = load_json(store, keys::SUPPLEMENTS_LEGACY, Vec::new());
    if !legacy.is_empty() {
        info!("💾 Migrating {} legacy supplement records", legacy.len());
        return legacy.into_iter().map(migrate_record).collect();
    }

    info!("💾 No saved supplements, seeding the starter set");
    starter_items(presets, today_iso, now_millis)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::builtin_presets;
    use crate::storage::{save_json, MemoryStore};

    #[test]
    fn current_records_pass_through_unchanged() {
        let json = r#"{
            "id": "vitamin-c-1",
            "name": "Vitamin C",
            "icon": "vitamin-c",
            "benefits": "Daily routine.",
            "timing": ["morning", "lunch"],
            "purchaseDate": "2026-02-01",
            "totalPills": 60,
            "pillsRemaining": 58,
            "dosagePerDay": 2,
            "takenByDate": {"2026-02-20": ["morning"]},
            "x": 320.0,
            "y": 170.0,
            "rotate": -0.8,
            "pinned": true
        }"#;
        let raw: StoredSupplementRecord = serde_json::from_str(json).unwrap();
        let item = migrate_record(raw);

        assert_eq!(item.slots_taken_on("2026-02-20"), &[TimingSlot::Morning]);
        assert_eq!((item.x, item.y), (320.0, 170.0));
        assert!(item.pinned);
    }

    #[test]
    fn legacy_taken_dates_become_per_slot_maps() {
        let json = r#"{
            "id": "omega3-1",
            "name": "Omega-3",
            "timing": ["morning", "dinner"],
            "purchaseDate": "2025-12-01",
            "totalPills": 30,
            "pillsRemaining": 20,
            "dosagePerDay": 1,
            "takenDates": ["2025-12-02", "2025-12-03"]
        }"#;
        let raw: StoredSupplementRecord = serde_json::from_str(json).unwrap();
        let item = migrate_record(raw);

        assert_eq!(
            item.slots_taken_on("2025-12-02"),
            &[TimingSlot::Morning, TimingSlot::Dinner]
        );
        assert_eq!(
            item.slots_taken_on("2025-12-03"),
            &[TimingSlot::Morning, TimingSlot::Dinner]
        );
        // Position and pin fields default in
        assert_eq!((item.x, item.y, item.rotate), (0.0, 0.0, 0.0));
        assert!(!item.pinned);
        assert_eq!(item.icon, "multivitamin");
    }

    #[test]
    fn records_without_timing_default_to_morning() {
        let json = r#"{"id": "zinc-1", "name": "Zinc", "takenDates": ["2025-11-30"]}"#;
        let raw: StoredSupplementRecord = serde_json::from_str(json).unwrap();
        let item = migrate_record(raw);

        assert_eq!(item.timing, vec![TimingSlot::Morning]);
        assert_eq!(item.slots_taken_on("2025-11-30"), &[TimingSlot::Morning]);
    }

    #[test]
    fn load_prefers_current_key_over_legacy() {
        let store = MemoryStore::new();
        store.set(
            keys::SUPPLEMENTS,
            r#"[{"id": "a", "name": "Current", "takenByDate": {}}]"#,
        );
        store.set(keys::SUPPLEMENTS_LEGACY, r#"[{"id": "b", "name": "Old"}]"#);

        let items = load_items(&store, &builtin_presets(), "2026-02-20", 1);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Current");
    }

    #[test]
    fn load_falls_back_to_legacy_then_starter_set() {
        let store = MemoryStore::new();
        store.set(keys::SUPPLEMENTS_LEGACY, r#"[{"id": "b", "name": "Old"}]"#);
        let items = load_items(&store, &builtin_presets(), "2026-02-20", 1);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Old");

        let empty_store = MemoryStore::new();
        let starter = load_items(&empty_store, &builtin_presets(), "2026-02-20", 1);
        let names: Vec<_> = starter.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Milk Thistle", "Omega-3", "Vitamin D"]);
    }

    #[test]
    fn migrated_items_round_trip_through_the_store() {
        let store = MemoryStore::new();
        let items = starter_items(&builtin_presets(), "2026-02-20", 42);
        save_json(&store, keys::SUPPLEMENTS, &items);

        let reloaded = load_items(&store, &builtin_presets(), "2026-02-21", 43);
        assert_eq!(reloaded, items);
    }
}
