//! # Supplement Preset Catalog
//!
//! Ten built-in supplement templates plus the fuzzy name lookup used by the
//! add-supplement wizard. Users can define their own presets at runtime;
//! those are persisted separately and searched alongside this catalog.

use shared::{SupplementPreset, TimingSlot};

fn preset(
    key: &str,
    display_name: &str,
    timing: &[TimingSlot],
    benefits: &str,
    default_dosage_per_day: u32,
) -> SupplementPreset {
    SupplementPreset {
        key: key.to_string(),
        display_name: display_name.to_string(),
        icon: key.to_string(),
        timing: timing.to_vec(),
        benefits: benefits.to_string(),
        default_dosage_per_day,
    }
}

/// The compiled-in preset catalog.
pub fn builtin_presets() -> Vec<SupplementPreset> {
    use TimingSlot::{Dinner, Lunch, Morning};

    vec![
        preset(
            "milk-thistle",
            "Milk Thistle",
            &[Dinner],
            "Baseline support for liver health and recovery from fatigue.",
            1,
        ),
        preset(
            "omega3",
            "Omega-3",
            &[Morning],
            "Essential fatty acids for circulation and overall balance.",
            1,
        ),
        preset(
            "vitamin-c",
            "Vitamin C",
            &[Morning, Lunch],
            "Daily antioxidant and immune routine.",
            2,
        ),
        preset(
            "vitamin-d",
            "Vitamin D",
            &[Morning],
            "Basics for bone health and day-to-day energy.",
            1,
        ),
        preset(
            "magnesium",
            "Magnesium",
            &[Dinner],
            "A mineral that helps muscles relax and steadies sleep rhythm.",
            1,
        ),
        preset(
            "probiotics",
            "Probiotics",
            &[Morning],
            "Balanced care for gut health and recovery.",
            1,
        ),
        preset(
            "zinc",
            "Zinc",
            &[Lunch],
            "A point supplement for immune care and skin balance.",
            1,
        ),
        preset(
            "lutein",
            "Lutein",
            &[Lunch],
            "A routine for easing eye strain and keeping focus.",
            1,
        ),
        preset(
            "collagen",
            "Collagen",
            &[Dinner],
            "Fits a beauty routine built around elasticity and recovery.",
            1,
        ),
        preset(
            "multivitamin",
            "Multivitamin",
            &[Morning],
            "An all-round daily baseline.",
            1,
        ),
    ]
}

/// Lowercase a name and strip all whitespace so "vitamin c" matches
/// "Vitamin C" as well as the "vitamin-c" key.
fn normalize(value: &str) -> String {
    value
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_lowercase()
}

/// Exact (normalized) lookup against display names and keys.
pub fn find_preset_by_name<'a>(
    presets: &'a [SupplementPreset],
    name: &str,
) -> Option<&'a SupplementPreset> {
    let normalized = normalize(name);
    if normalized.is_empty() {
        return None;
    }
    presets
        .iter()
        .find(|p| normalize(&p.display_name) == normalized || normalize(&p.key) == normalized)
}
