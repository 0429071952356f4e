//! # Sticker Layout Engine
//!
//! Position math for the supplement sticker canvas: the initial scattered
//! grid placement, the best-effort collision declutter and the near-grid
//! snap applied when a drag ends.
//!
//! Placement is intentionally non-deterministic (random jitter and tilt
//! give the hand-placed look), so tests assert structural bounds rather
//! than exact coordinates.

use rand::Rng;
use shared::SupplementItem;

/// Sticker card footprint on the canvas.
pub const STICKER_WIDTH: f32 = 260.0;
pub const STICKER_HEIGHT: f32 = 150.0;

/// Scatter-grid pitch used for initial placement.
pub const COL_WIDTH: f32 = 300.0;
pub const ROW_HEIGHT: f32 = 170.0;

/// Drag-release snap pitch.
pub const GRID_SNAP: f32 = 32.0;

/// Vertical "reward" shift applied when an intake is toggled.
pub const REWARD_LIFT: f32 = 12.0;

/// Canvas headroom above and below the scatter grid.
pub const CANVAS_PADDING: f32 = 72.0;
pub const CANVAS_EXTRA: f32 = 140.0;

/// One computed initial position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutSlot {
    pub x: f32,
    pub y: f32,
    /// Tilt in degrees
    pub rotate: f32,
}

/// Scatter `count` stickers over a column grid sized to the container,
/// with per-item jitter and a slight tilt.
pub fn initial_layout(count: usize, container_width: f32) -> Vec<LayoutSlot> {
    let cols = ((container_width / COL_WIDTH).floor() as usize).max(1);
    let mut rng = rand::thread_rng();

    (0..count)
        .map(|index| {
            let col = (index % cols) as f32;
            let row = (index / cols) as f32;
            LayoutSlot {
                x: col * COL_WIDTH + rng.gen_range(-18.0..=18.0),
                y: row * ROW_HEIGHT + rng.gen_range(-12.0..=12.0),
                rotate: rng.gen_range(-1.2..=1.2),
            }
        })
        .collect()
}

/// Parameters for a collision pass.
#[derive(Debug, Clone, Copy)]
pub struct CollisionOpts {
    /// Rectangle size every item is treated as
    pub width: f32,
    pub height: f32,
    /// Canvas bounds positions are clamped to
    pub container_width: f32,
    pub container_height: f32,
    pub iterations: usize,
}

impl CollisionOpts {
    /// Default sticker-sized options with 3 passes.
    pub fn stickers(container_width: f32, container_height: f32) -> Self {
        Self {
            width: STICKER_WIDTH,
            height: STICKER_HEIGHT,
            container_width,
            container_height,
            iterations: 3,
        }
    }
}

/// Strict axis-aligned overlap test for two equally sized rectangles.
fn overlaps(a: (f32, f32), b: (f32, f32), width: f32, height: f32) -> bool {
    a.0 < b.0 + width && a.0 + width > b.0 && a.1 < b.1 + height && a.1 + height > b.1
}

/// Nudge overlapping stickers apart. For every pair the later item moves
/// (down 18-28 px, sideways up to 6 px) and is clamped to the canvas, over
/// `iterations` passes. Because only the higher-indexed item moves and
/// clamping can block separation near edges, residual overlap is accepted
/// behavior, not a bug.
pub fn resolve_collisions(items: &mut [SupplementItem], opts: &CollisionOpts) {
    let max_x = (opts.container_width - opts.width).max(0.0);
    let max_y = (opts.container_height - opts.height).max(0.0);
    let mut rng = rand::thread_rng();

    for _ in 0..opts.iterations {
        for i in 0..items.len() {
            for j in (i + 1)..items.len() {
                let a = (items[i].x, items[i].y);
                let b = (items[j].x, items[j].y);
                if overlaps(a, b, opts.width, opts.height) {
                    items[j].y = (items[j].y + rng.gen_range(18.0..=28.0)).clamp(0.0, max_y);
                    items[j].x = (items[j].x + rng.gen_range(-6.0..=6.0)).clamp(0.0, max_x);
                }
            }
        }
    }
}

/// Round to the nearest grid multiple, then re-add a little jitter so
/// stickers settle near, not exactly on, a grid line.
pub fn snap_to_grid(value: f32, grid: f32, jitter: f32) -> f32 {
    let snapped = (value / grid).round() * grid;
    if jitter > 0.0 {
        snapped + rand::thread_rng().gen_range(-jitter..=jitter)
    } else {
        snapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{SupplementPreset, TimingSlot};

    fn item_at(id: &str, x: f32, y: f32) -> SupplementItem {
        let preset = SupplementPreset {
            key: id.to_string(),
            display_name: id.to_string(),
            icon: "multivitamin".to_string(),
            timing: vec![TimingSlot::Morning],
            benefits: String::new(),
            default_dosage_per_day: 1,
        };
        let mut item =
            SupplementItem::from_preset(&preset, format!("{id}-1"), "2026-02-20".to_string());
        item.x = x;
        item.y = y;
        item
    }

    #[test]
    fn initial_layout_stays_near_its_grid_slots() {
        let slots = initial_layout(6, 950.0); // 3 columns
        assert_eq!(slots.len(), 6);
        for (index, slot) in slots.iter().enumerate() {
            let col = (index % 3) as f32;
            let row = (index / 3) as f32;
            assert!((slot.x - col * COL_WIDTH).abs() <= 18.0, "x jitter out of range");
            assert!((slot.y - row * ROW_HEIGHT).abs() <= 12.0, "y jitter out of range");
            assert!(slot.rotate.abs() <= 1.2, "tilt out of range");
        }
    }

    #[test]
    fn initial_layout_never_uses_zero_columns() {
        // Narrower than one column still produces a single-column layout
        let slots = initial_layout(3, 120.0);
        assert!((slots[1].y - ROW_HEIGHT).abs() <= 12.0);
        assert!((slots[2].y - 2.0 * ROW_HEIGHT).abs() <= 12.0);
    }

    #[test]
    fn collisions_move_the_later_item_and_eventually_separate() {
        let mut items = vec![item_at("a", 100.0, 100.0), item_at("b", 100.0, 100.0)];

        // The default 3 passes are best-effort: the first item must stay
        // put and the second must have been nudged
        resolve_collisions(&mut items, &CollisionOpts::stickers(2000.0, 2000.0));
        assert_eq!((items[0].x, items[0].y), (100.0, 100.0));
        assert_ne!((items[1].x, items[1].y), (100.0, 100.0));

        // With enough passes on a roomy canvas the pair comes fully apart
        let mut opts = CollisionOpts::stickers(2000.0, 2000.0);
        opts.iterations = 12;
        resolve_collisions(&mut items, &opts);
        assert!(!overlaps(
            (items[0].x, items[0].y),
            (items[1].x, items[1].y),
            STICKER_WIDTH,
            STICKER_HEIGHT
        ));
    }

    #[test]
    fn collisions_respect_canvas_bounds() {
        // A cramped canvas: separation is impossible, clamping must hold
        let mut items = vec![item_at("a", 0.0, 0.0), item_at("b", 0.0, 0.0)];
        let opts = CollisionOpts::stickers(STICKER_WIDTH + 10.0, STICKER_HEIGHT + 10.0);
        resolve_collisions(&mut items, &opts);

        for item in &items {
            assert!(item.x >= 0.0 && item.x <= 10.0);
            assert!(item.y >= 0.0 && item.y <= 10.0);
        }
    }

    #[test]
    fn snap_lands_near_a_grid_line() {
        for raw in [0.0, 15.9, 47.0, 300.0, 1000.5] {
            let snapped = snap_to_grid(raw, GRID_SNAP, 3.0);
            let nearest = (raw / GRID_SNAP).round() * GRID_SNAP;
            assert!((snapped - nearest).abs() <= 3.0, "{raw} snapped too far");
        }
        // Zero jitter is exact
        assert_eq!(snap_to_grid(47.0, GRID_SNAP, 0.0), 32.0);
    }
}
