pub mod calendar_view;
pub mod dev_placeholder;
pub mod supplements_view;
pub mod tab_bar;
pub mod theme;
