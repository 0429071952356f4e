pub mod calendar_state;
pub mod supplement_state;
pub mod tab_state;

pub use calendar_state::*;
pub use supplement_state::*;
pub use tab_state::*;
