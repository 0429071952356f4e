use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Category tag on a calendar event, used for independent show/hide filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventLayer {
    /// Exhibitions and fairs
    Expo,
    /// Hackathons and competition milestones
    Hack,
    /// Stock market schedule (holidays, halts, macro events)
    Stock,
}

impl EventLayer {
    /// Every known layer, in filter-chip display order.
    pub const ALL: [EventLayer; 3] = [EventLayer::Expo, EventLayer::Hack, EventLayer::Stock];

    /// Layer order used when grouping a day's events for display.
    pub const GROUPING: [EventLayer; 3] = [EventLayer::Hack, EventLayer::Expo, EventLayer::Stock];

    /// Uppercase label shown on filter chips and popover section headers.
    pub fn label(&self) -> &'static str {
        match self {
            EventLayer::Expo => "EXPO",
            EventLayer::Hack => "HACK",
            EventLayer::Stock => "STOCK",
        }
    }
}

/// A single entry of the compiled-in event catalog.
///
/// Events are static data: they are never created or destroyed at runtime.
/// Multi-day events carry an inclusive `end_date`; the optional short `tag`
/// is only shown on the first day of a range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    pub id: String,
    pub layer: EventLayer,
    pub title: String,
    /// First (or only) day of the event
    pub date: NaiveDate,
    /// Last day of the event, inclusive; must be on or after `date`
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    /// Short label such as "deadline" or "closed"
    #[serde(default)]
    pub tag: Option<String>,
    /// Higher sorts first within a day; absent means 0
    #[serde(default)]
    pub importance: i32,
}

impl CalendarEvent {
    /// Last covered day of the event (the start day for single-day events).
    pub fn end(&self) -> NaiveDate {
        self.end_date.unwrap_or(self.date)
    }
}

/// One of the three daily intake slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimingSlot {
    Morning,
    Lunch,
    Dinner,
}

impl TimingSlot {
    /// All slots in canonical display order (morning, lunch, dinner).
    pub const ALL: [TimingSlot; 3] = [TimingSlot::Morning, TimingSlot::Lunch, TimingSlot::Dinner];

    pub fn label(&self) -> &'static str {
        match self {
            TimingSlot::Morning => "Morning",
            TimingSlot::Lunch => "Lunch",
            TimingSlot::Dinner => "Dinner",
        }
    }
}

/// A supplement template: either compiled-in or user-defined.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplementPreset {
    /// Stable lookup key, e.g. "vitamin-c"
    pub key: String,
    pub display_name: String,
    /// Icon key resolved to a glyph by the UI theme
    pub icon: String,
    /// Recommended intake slots
    pub timing: Vec<TimingSlot>,
    /// One-line benefit description
    pub benefits: String,
    pub default_dosage_per_day: u32,
}

/// A tracked supplement, rendered as one draggable sticker on the canvas.
///
/// The serialized shape (camelCase field names) is also the persisted record
/// format; see the storage migration module in the frontend for how older
/// records are upgraded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplementItem {
    /// Unique id, generated at creation from preset key + timestamp
    pub id: String,
    pub name: String,
    pub icon: String,
    pub benefits: String,
    /// Active intake slots; never empty after migration
    pub timing: Vec<TimingSlot>,
    /// ISO date (YYYY-MM-DD) of purchase
    pub purchase_date: String,
    /// Pill count at purchase
    pub total_pills: u32,
    /// Never below zero; adjusted by intake toggles
    pub pills_remaining: u32,
    pub dosage_per_day: u32,
    /// ISO date -> slots marked taken on that day
    pub taken_by_date: HashMap<String, Vec<TimingSlot>>,
    /// Sticker canvas position, clamped to the visible bounds
    pub x: f32,
    pub y: f32,
    /// Sticker tilt in degrees
    pub rotate: f32,
    pub pinned: bool,
}

impl SupplementItem {
    /// Create a fresh item from a preset. Position is zeroed; the canvas
    /// seeds a scattered layout on first render.
    pub fn from_preset(preset: &SupplementPreset, id: String, purchase_date: String) -> Self {
        let total_pills = preset.default_dosage_per_day * 30;
        Self {
            id,
            name: preset.display_name.clone(),
            icon: preset.icon.clone(),
            benefits: preset.benefits.clone(),
            timing: preset.timing.clone(),
            purchase_date,
            total_pills,
            pills_remaining: total_pills,
            dosage_per_day: preset.default_dosage_per_day,
            taken_by_date: HashMap::new(),
            x: 0.0,
            y: 0.0,
            rotate: 0.0,
            pinned: false,
        }
    }

    /// Pills consumed (or returned) by toggling a single slot.
    ///
    /// `round(dosage / active slots)`, at least 1 while any dose is set.
    /// A dose that does not divide evenly drifts from `dosage_per_day`
    /// (e.g. dose 1 over two slots consumes 2/day); kept as observed.
    pub fn per_slot_dose(&self) -> u32 {
        if self.dosage_per_day == 0 {
            return 0;
        }
        let slots = self.timing.len().max(1) as f64;
        let rounded = (self.dosage_per_day as f64 / slots).round() as u32;
        rounded.max(1)
    }

    /// Whole days of supply left, or `None` when no daily dose is set.
    pub fn days_left(&self) -> Option<u32> {
        if self.dosage_per_day > 0 {
            Some(self.pills_remaining / self.dosage_per_day)
        } else {
            None
        }
    }

    /// Slots marked taken on the given ISO date.
    pub fn slots_taken_on(&self, iso: &str) -> &[TimingSlot] {
        self.taken_by_date
            .get(iso)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn preset() -> SupplementPreset {
        SupplementPreset {
            key: "vitamin-c".to_string(),
            display_name: "Vitamin C".to_string(),
            icon: "vitamin-c".to_string(),
            timing: vec![TimingSlot::Morning, TimingSlot::Lunch],
            benefits: "Daily antioxidant and immune routine.".to_string(),
            default_dosage_per_day: 2,
        }
    }

    #[test]
    fn from_preset_fills_thirty_days_of_pills() {
        let item = SupplementItem::from_preset(&preset(), "vitamin-c-1".into(), "2026-02-20".into());
        assert_eq!(item.total_pills, 60);
        assert_eq!(item.pills_remaining, 60);
        assert_eq!(item.timing, vec![TimingSlot::Morning, TimingSlot::Lunch]);
        assert!(!item.pinned);
        assert_eq!((item.x, item.y), (0.0, 0.0));
    }

    #[test]
    fn per_slot_dose_rounds_and_floors_at_one() {
        let mut item = SupplementItem::from_preset(&preset(), "i".into(), "2026-01-01".into());

        item.dosage_per_day = 2; // two slots -> 1 each
        assert_eq!(item.per_slot_dose(), 1);

        item.dosage_per_day = 3; // 1.5 rounds up to 2
        assert_eq!(item.per_slot_dose(), 2);

        // One pill over two slots still consumes one per slot; this is the
        // documented drift of the original behavior.
        item.dosage_per_day = 1;
        assert_eq!(item.per_slot_dose(), 1);

        item.dosage_per_day = 0;
        assert_eq!(item.per_slot_dose(), 0);
    }

    #[test]
    fn days_left_requires_a_dose() {
        let mut item = SupplementItem::from_preset(&preset(), "i".into(), "2026-01-01".into());
        item.pills_remaining = 7;
        item.dosage_per_day = 2;
        assert_eq!(item.days_left(), Some(3));

        item.dosage_per_day = 0;
        assert_eq!(item.days_left(), None);
    }

    #[test]
    fn item_serializes_with_camel_case_field_names() {
        let item = SupplementItem::from_preset(&preset(), "vitamin-c-1".into(), "2026-02-20".into());
        let json = serde_json::to_string(&item).unwrap();
        assert!(json.contains("\"pillsRemaining\":60"));
        assert!(json.contains("\"takenByDate\":{}"));
        assert!(json.contains("\"purchaseDate\":\"2026-02-20\""));

        let back: SupplementItem = serde_json::from_str(&json).unwrap();
        assert_eq!(back, item);
    }

    #[test]
    fn event_end_falls_back_to_start_date() {
        let event = CalendarEvent {
            id: "e".into(),
            layer: EventLayer::Expo,
            title: "Expo".into(),
            date: NaiveDate::from_ymd_opt(2026, 2, 11).unwrap(),
            end_date: None,
            tag: None,
            importance: 0,
        };
        assert_eq!(event.end(), event.date);
    }
}
