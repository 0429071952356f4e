pub mod events;
pub mod grid;
pub mod life_calendar;
pub mod popover;
pub mod rendering;

pub use events::*;
pub use grid::*;
