//! # Supplement State Module
//!
//! All state behind the supplements panel: the sticker items themselves,
//! the add-supplement wizard draft, the inline edit form, user-defined
//! presets and the single-shot undo buffer.
//!
//! ## Key Functions:
//! - `toggle_taken()` - the intake state machine (slot flip + pill count +
//!   reward shift + undo snapshot)
//! - `undo()` / `expire_undo()` - one-level undo with a 3 second window
//! - `ensure_layout()` - seed scattered positions for unplaced stickers
//! - `drag_by()` / `finish_drag()` - drag repositioning with grid snap
//! - `create_from_draft()` - commit the 3-step wizard
//!
//! ## State Management:
//! Mutations clone-and-replace the whole item list where a snapshot is
//! needed; everything runs on the UI thread, so there is no locking.

use std::time::{Duration, Instant};

use log::info;
use shared::{SupplementItem, SupplementPreset, TimingSlot};

use crate::data::find_preset_by_name;
use crate::ui::components::supplements_view::layout::{
    initial_layout, resolve_collisions, snap_to_grid, CollisionOpts, GRID_SNAP, REWARD_LIFT,
    STICKER_HEIGHT, STICKER_WIDTH,
};

/// How long a toggle stays undoable.
pub const UNDO_WINDOW: Duration = Duration::from_secs(3);

/// Snapshot of the item list taken just before the last intake toggle.
#[derive(Debug, Clone)]
pub struct UndoBuffer {
    /// Full pre-toggle item list, restored verbatim on undo
    pub previous: Vec<SupplementItem>,
    pub expires_at: Instant,
}

impl UndoBuffer {
    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

/// Wizard state for the 3-step "add supplement" flow.
#[derive(Debug, Clone)]
pub struct AddDraft {
    /// Current step (1-3)
    pub step: u8,
    pub name: String,
    pub benefits: String,
    pub timing: Vec<TimingSlot>,
    pub dosage_per_day: u32,
    /// Matched preset key, when the name resolved to a known preset
    pub preset_key: Option<String>,
}

impl Default for AddDraft {
    fn default() -> Self {
        Self {
            step: 1,
            name: String::new(),
            benefits: String::new(),
            timing: Vec::new(),
            dosage_per_day: 1,
            preset_key: None,
        }
    }
}

impl AddDraft {
    pub fn toggle_timing(&mut self, slot: TimingSlot) {
        if let Some(index) = self.timing.iter().position(|s| *s == slot) {
            self.timing.remove(index);
        } else {
            self.timing.push(slot);
        }
    }
}

/// In-progress edit of one sticker's numbers.
#[derive(Debug, Clone)]
pub struct EditDraft {
    pub id: String,
    pub purchase_date: String,
    pub total_pills: u32,
    pub dosage_per_day: u32,
    pub pills_remaining: u32,
}

/// State backing the supplements panel.
pub struct SupplementState {
    pub items: Vec<SupplementItem>,
    pub custom_presets: Vec<SupplementPreset>,

    /// Id of the sticker currently being dragged
    pub dragging_id: Option<String>,

    /// Open inline edit form, if any
    pub edit: Option<EditDraft>,

    /// Wizard draft; always present, step 1 when idle
    pub draft: AddDraft,

    /// Pending undo snapshot from the last intake toggle
    pub undo: Option<UndoBuffer>,

    /// Last known sticker canvas size, for clamping positions
    pub canvas_width: f32,
    pub canvas_height: f32,
}

impl SupplementState {
    pub fn new(items: Vec<SupplementItem>, custom_presets: Vec<SupplementPreset>) -> Self {
        Self {
            items,
            custom_presets,
            dragging_id: None,
            edit: None,
            draft: AddDraft::default(),
            undo: None,
            canvas_width: 0.0,
            canvas_height: 0.0,
        }
    }

    /// Record the canvas size measured during rendering.
    pub fn set_canvas_size(&mut self, width: f32, height: f32) {
        self.canvas_width = width;
        self.canvas_height = height;
    }

    fn max_position(&self) -> (f32, f32) {
        (
            (self.canvas_width - STICKER_WIDTH).max(0.0),
            (self.canvas_height - STICKER_HEIGHT).max(0.0),
        )
    }

    /// Seed scattered positions for items still sitting at the origin,
    /// then declutter. Returns true when anything moved (caller persists).
    pub fn ensure_layout(&mut self) -> bool {
        if self.canvas_width <= 0.0 || self.canvas_height <= 0.0 || self.items.is_empty() {
            return false;
        }
        if self.items.iter().all(|item| item.x != 0.0 || item.y != 0.0) {
            return false;
        }

        let slots = initial_layout(self.items.len(), self.canvas_width);
        for (item, slot) in self.items.iter_mut().zip(&slots) {
            if item.x == 0.0 {
                item.x = slot.x;
            }
            if item.y == 0.0 {
                item.y = slot.y;
            }
            if item.rotate == 0.0 {
                item.rotate = slot.rotate;
            }
        }
        resolve_collisions(
            &mut self.items,
            &CollisionOpts::stickers(self.canvas_width, self.canvas_height),
        );
        true
    }

    /// Flip one timing slot for today on one item.
    ///
    /// Taking a dose decrements `pills_remaining` by the per-slot dose and
    /// lifts the sticker slightly; un-taking reverses both. The pre-toggle
    /// item list is snapshotted for undo; a second toggle inside the window
    /// replaces the snapshot, so only the most recent toggle is undoable.
    pub fn toggle_taken(&mut self, id: &str, slot: TimingSlot, today_iso: &str, now: Instant) {
        let previous = self.items.clone();
        let (_, max_y) = self.max_position();
        let mut changed = false;

        for item in &mut self.items {
            if item.id != id {
                continue;
            }
            let dose = item.per_slot_dose();
            let taken = item.taken_by_date.entry(today_iso.to_string()).or_default();
            let was_taken = taken.contains(&slot);
            if was_taken {
                taken.retain(|s| *s != slot);
                item.pills_remaining = item.pills_remaining.saturating_add(dose);
            } else {
                taken.push(slot);
                item.pills_remaining = item.pills_remaining.saturating_sub(dose);
            }
            // Small "reward" shift: up when taken, back down when undone
            let shift = if was_taken { REWARD_LIFT } else { -REWARD_LIFT };
            item.y = (item.y + shift).clamp(0.0, max_y);
            changed = true;
        }

        if changed {
            self.undo = Some(UndoBuffer {
                previous,
                expires_at: now + UNDO_WINDOW,
            });
        }
    }

    /// Restore the pre-toggle snapshot, if one is still live.
    pub fn undo(&mut self) -> bool {
        match self.undo.take() {
            Some(buffer) => {
                info!("↩️ Undoing the last intake toggle");
                self.items = buffer.previous;
                true
            }
            None => false,
        }
    }

    /// Drop the undo buffer once its window has lapsed.
    pub fn expire_undo(&mut self, now: Instant) {
        if self.undo.as_ref().is_some_and(|b| b.is_expired(now)) {
            self.undo = None;
        }
    }

    /// Time left in the undo window, for repaint scheduling.
    pub fn undo_remaining(&self, now: Instant) -> Option<Duration> {
        self.undo
            .as_ref()
            .map(|b| b.expires_at.saturating_duration_since(now))
    }

    /// Move a sticker by a drag delta, clamped to the canvas.
    pub fn drag_by(&mut self, id: &str, dx: f32, dy: f32) {
        let (max_x, max_y) = self.max_position();
        for item in &mut self.items {
            if item.id == id {
                item.x = (item.x + dx).clamp(0.0, max_x);
                item.y = (item.y + dy).clamp(0.0, max_y);
            }
        }
        self.dragging_id = Some(id.to_string());
    }

    /// Settle a released sticker near the grid, then declutter.
    pub fn finish_drag(&mut self, id: &str) {
        let (max_x, max_y) = self.max_position();
        for item in &mut self.items {
            if item.id == id {
                item.x = snap_to_grid(item.x, GRID_SNAP, 3.0).clamp(0.0, max_x);
                item.y = snap_to_grid(item.y, GRID_SNAP, 3.0).clamp(0.0, max_y);
            }
        }
        if self.canvas_width > 0.0 && self.canvas_height > 0.0 {
            resolve_collisions(
                &mut self.items,
                &CollisionOpts::stickers(self.canvas_width, self.canvas_height),
            );
        }
        self.dragging_id = None;
    }

    /// Pin or unpin a sticker. Pinning flattens the tilt so the enlarged
    /// card reads cleanly; unpinning leaves position untouched.
    pub fn toggle_pin(&mut self, id: &str) {
        for item in &mut self.items {
            if item.id != id {
                continue;
            }
            if item.pinned {
                item.pinned = false;
            } else {
                item.pinned = true;
                item.rotate = item.rotate.clamp(-0.35, 0.35);
            }
        }
        if self.canvas_width > 0.0 && self.canvas_height > 0.0 {
            resolve_collisions(
                &mut self.items,
                &CollisionOpts::stickers(self.canvas_width, self.canvas_height),
            );
        }
    }

    /// Open the inline edit form for one sticker.
    pub fn start_edit(&mut self, id: &str) {
        self.edit = self.items.iter().find(|item| item.id == id).map(|item| EditDraft {
            id: item.id.clone(),
            purchase_date: item.purchase_date.clone(),
            total_pills: item.total_pills,
            dosage_per_day: item.dosage_per_day,
            pills_remaining: item.pills_remaining,
        });
    }

    /// Apply the open edit form back onto its item.
    pub fn save_edit(&mut self) {
        let Some(draft) = self.edit.take() else { return };
        for item in &mut self.items {
            if item.id == draft.id {
                item.purchase_date = draft.purchase_date.clone();
                item.total_pills = draft.total_pills;
                item.dosage_per_day = draft.dosage_per_day;
                item.pills_remaining = draft.pills_remaining;
            }
        }
    }

    pub fn cancel_edit(&mut self) {
        self.edit = None;
    }

    /// Reset the wizard to an empty step 1.
    pub fn reset_draft(&mut self) {
        self.draft = AddDraft::default();
    }

    /// Prefill the wizard from a preset and jump to step 2.
    pub fn apply_preset_to_draft(&mut self, preset: &SupplementPreset) {
        self.draft = AddDraft {
            step: 2,
            name: preset.display_name.clone(),
            benefits: preset.benefits.clone(),
            timing: preset.timing.clone(),
            dosage_per_day: preset.default_dosage_per_day,
            preset_key: Some(preset.key.clone()),
        };
    }

    /// Preset suggested for the wizard's current name: exact normalized
    /// match first, then substring containment over built-in + custom.
    pub fn suggested_preset(&self, builtin: &[SupplementPreset]) -> Option<SupplementPreset> {
        let name = self.draft.name.trim();
        if name.is_empty() {
            return None;
        }
        if let Some(hit) = find_preset_by_name(builtin, name)
            .or_else(|| find_preset_by_name(&self.custom_presets, name))
        {
            return Some(hit.clone());
        }
        builtin
            .iter()
            .chain(self.custom_presets.iter())
            .find(|p| p.display_name.to_lowercase().contains(&name.to_lowercase()))
            .cloned()
    }

    /// Commit the wizard: build (and possibly remember) a preset, create
    /// the item, seed its position and reset the draft. Returns false when
    /// the draft has no usable name.
    pub fn create_from_draft(&mut self, today_iso: &str, now_millis: i64) -> bool {
        let name = self.draft.name.trim().to_string();
        if name.is_empty() {
            return false;
        }

        let timing = if self.draft.timing.is_empty() {
            vec![TimingSlot::Morning]
        } else {
            self.draft.timing.clone()
        };
        let key = self
            .draft
            .preset_key
            .clone()
            .unwrap_or_else(|| name.to_lowercase().split_whitespace().collect::<Vec<_>>().join("-"));
        let preset = SupplementPreset {
            key: key.clone(),
            display_name: name,
            icon: self.draft.preset_key.clone().unwrap_or_else(|| "multivitamin".to_string()),
            timing,
            benefits: if self.draft.benefits.is_empty() {
                "Add a benefit note.".to_string()
            } else {
                self.draft.benefits.clone()
            },
            default_dosage_per_day: self.draft.dosage_per_day.max(1),
        };

        // Remember hand-entered supplements for future wizard runs
        if self.draft.preset_key.is_none() && !self.custom_presets.iter().any(|p| p.key == key) {
            self.custom_presets.push(preset.clone());
        }

        let id = format!("{}-{}", preset.key, now_millis);
        info!("💊 Creating supplement '{}' ({})", preset.display_name, id);
        self.items
            .push(SupplementItem::from_preset(&preset, id, today_iso.to_string()));

        if self.canvas_width > 0.0 && self.canvas_height > 0.0 {
            let slots = initial_layout(self.items.len(), self.canvas_width);
            for (item, slot) in self.items.iter_mut().zip(&slots) {
                if item.x == 0.0 {
                    item.x = slot.x;
                }
                if item.y == 0.0 {
                    item.y = slot.y;
                }
                if item.rotate == 0.0 {
                    item.rotate = slot.rotate;
                }
            }
            resolve_collisions(
                &mut self.items,
                &CollisionOpts::stickers(self.canvas_width, self.canvas_height),
            );
        }

        self.reset_draft();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::builtin_presets;

    fn state_with_item(dosage: u32, slots: Vec<TimingSlot>) -> SupplementState {
        let preset = SupplementPreset {
            key: "vitamin-c".into(),
            display_name: "Vitamin C".into(),
            icon: "vitamin-c".into(),
            timing: slots,
            benefits: "Daily routine.".into(),
            default_dosage_per_day: dosage,
        };
        let item = SupplementItem::from_preset(&preset, "vitamin-c-1".into(), "2026-02-20".into());
        let mut state = SupplementState::new(vec![item], Vec::new());
        state.set_canvas_size(1200.0, 800.0);
        state
    }

    #[test]
    fn toggle_then_undo_restores_everything_exactly() {
        let mut state = state_with_item(2, vec![TimingSlot::Morning, TimingSlot::Lunch]);
        let before = state.items.clone();
        let now = Instant::now();

        state.toggle_taken("vitamin-c-1", TimingSlot::Morning, "2026-02-20", now);
        assert_eq!(state.items[0].pills_remaining, 59);
        assert_eq!(
            state.items[0].slots_taken_on("2026-02-20"),
            &[TimingSlot::Morning]
        );

        assert!(state.undo());
        assert_eq!(state.items, before);
        assert!(state.undo.is_none());
    }

    #[test]
    fn untoggling_returns_the_dose() {
        let mut state = state_with_item(2, vec![TimingSlot::Morning, TimingSlot::Lunch]);
        let now = Instant::now();

        state.toggle_taken("vitamin-c-1", TimingSlot::Lunch, "2026-02-20", now);
        state.toggle_taken("vitamin-c-1", TimingSlot::Lunch, "2026-02-20", now);

        assert_eq!(state.items[0].pills_remaining, 60);
        assert!(state.items[0].slots_taken_on("2026-02-20").is_empty());
    }

    #[test]
    fn pills_never_go_below_zero() {
        let mut state = state_with_item(2, vec![TimingSlot::Morning]);
        state.items[0].pills_remaining = 1;
        let now = Instant::now();

        state.toggle_taken("vitamin-c-1", TimingSlot::Morning, "2026-02-20", now);
        assert_eq!(state.items[0].pills_remaining, 0);
    }

    #[test]
    fn a_second_toggle_replaces_the_undo_snapshot() {
        let mut state = state_with_item(1, vec![TimingSlot::Morning, TimingSlot::Dinner]);
        let now = Instant::now();

        state.toggle_taken("vitamin-c-1", TimingSlot::Morning, "2026-02-20", now);
        let after_first = state.items.clone();
        state.toggle_taken("vitamin-c-1", TimingSlot::Dinner, "2026-02-20", now);

        // Undo only unwinds the most recent toggle
        assert!(state.undo());
        assert_eq!(state.items, after_first);
    }

    #[test]
    fn expiry_clears_the_buffer_without_restoring() {
        let mut state = state_with_item(1, vec![TimingSlot::Morning]);
        let now = Instant::now();
        state.toggle_taken("vitamin-c-1", TimingSlot::Morning, "2026-02-20", now);
        let after_toggle = state.items.clone();

        state.expire_undo(now + UNDO_WINDOW + Duration::from_millis(1));
        assert!(state.undo.is_none());
        assert!(!state.undo());
        assert_eq!(state.items, after_toggle);
    }

    #[test]
    fn dragging_is_clamped_and_snapping_stays_in_bounds() {
        let mut state = state_with_item(1, vec![TimingSlot::Morning]);
        state.drag_by("vitamin-c-1", 5000.0, 5000.0);

        let (max_x, max_y) = (1200.0 - STICKER_WIDTH, 800.0 - STICKER_HEIGHT);
        assert_eq!((state.items[0].x, state.items[0].y), (max_x, max_y));

        state.finish_drag("vitamin-c-1");
        assert!(state.items[0].x >= 0.0 && state.items[0].x <= max_x);
        assert!(state.items[0].y >= 0.0 && state.items[0].y <= max_y);
        assert!(state.dragging_id.is_none());
    }

    #[test]
    fn pinning_flattens_rotation() {
        let mut state = state_with_item(1, vec![TimingSlot::Morning]);
        state.items[0].rotate = 1.1;

        state.toggle_pin("vitamin-c-1");
        assert!(state.items[0].pinned);
        assert!(state.items[0].rotate.abs() <= 0.35);

        state.toggle_pin("vitamin-c-1");
        assert!(!state.items[0].pinned);
    }

    #[test]
    fn ensure_layout_seeds_only_unplaced_items() {
        let mut state = state_with_item(1, vec![TimingSlot::Morning]);
        let preset = SupplementPreset {
            key: "zinc".into(),
            display_name: "Zinc".into(),
            icon: "zinc".into(),
            timing: vec![TimingSlot::Lunch],
            benefits: "Immune care.".into(),
            default_dosage_per_day: 1,
        };
        let mut placed = SupplementItem::from_preset(&preset, "zinc-1".into(), "2026-02-20".into());
        placed.x = 600.0;
        placed.y = 300.0;
        state.items.push(placed);

        assert!(state.ensure_layout());
        assert!(state.items[0].x != 0.0 || state.items[0].y != 0.0);
        // Already-placed sticker keeps its x (collision pass may nudge y)
        assert_eq!(state.items[1].x, 600.0);

        // Second call is a no-op: everything is placed now
        assert!(!state.ensure_layout());
    }

    #[test]
    fn wizard_creates_items_and_remembers_custom_presets() {
        let mut state = SupplementState::new(Vec::new(), Vec::new());
        state.set_canvas_size(1000.0, 700.0);
        state.draft.name = "Iron Complex".into();
        state.draft.benefits = "Daily iron intake.".into();
        state.draft.timing = vec![TimingSlot::Dinner];
        state.draft.dosage_per_day = 1;

        assert!(state.create_from_draft("2026-02-20", 1700000000000));

        assert_eq!(state.items.len(), 1);
        assert_eq!(state.items[0].name, "Iron Complex");
        assert!(state.items[0].id.starts_with("iron-complex-"));
        assert_eq!(state.custom_presets.len(), 1);
        assert_eq!(state.custom_presets[0].key, "iron-complex");
        // Draft resets to an empty step 1
        assert_eq!(state.draft.step, 1);
        assert!(state.draft.name.is_empty());
    }

    #[test]
    fn wizard_with_known_preset_does_not_duplicate_the_catalog() {
        let builtin = builtin_presets();
        let mut state = SupplementState::new(Vec::new(), Vec::new());
        state.draft.name = "vitamin c".into();

        let suggested = state.suggested_preset(&builtin).expect("should suggest");
        assert_eq!(suggested.key, "vitamin-c");

        state.apply_preset_to_draft(&suggested);
        assert_eq!(state.draft.step, 2);
        assert!(state.create_from_draft("2026-02-20", 7));
        assert!(state.custom_presets.is_empty());
        assert_eq!(state.items[0].dosage_per_day, 2);
    }

    #[test]
    fn wizard_without_name_is_rejected() {
        let mut state = SupplementState::new(Vec::new(), Vec::new());
        state.draft.name = "   ".into();
        assert!(!state.create_from_draft("2026-02-20", 7));
        assert!(state.items.is_empty());
    }

    #[test]
    fn suggestion_falls_back_to_substring_matches() {
        let mut state = SupplementState::new(Vec::new(), Vec::new());
        state.draft.name = "thistle".into();
        let suggested = state.suggested_preset(&builtin_presets()).expect("should suggest");
        assert_eq!(suggested.key, "milk-thistle");
    }
}
