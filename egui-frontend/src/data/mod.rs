pub mod calendar_events;
pub mod presets;

pub use calendar_events::calendar_events;
pub use presets::{builtin_presets, find_preset_by_name};
