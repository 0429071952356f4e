//! # Tab State Module
//!
//! The top-level "press the service you want" tab controller.
//!
//! ## Responsibilities:
//! - The fixed tab registry (id, label, emoji, scattered icon position)
//! - Which single tab, if any, is active
//! - Toggle-off semantics: re-selecting the active tab returns to "none"
//! - Mapping a tab id to the panel that renders it
//!
//! ## Purpose:
//! Selection is string-keyed rather than enum-keyed on purpose: an id that
//! is unknown or not yet implemented must degrade to the "in development"
//! placeholder instead of being unrepresentable or crashing.

use log::info;

/// One entry of the tab registry.
#[derive(Debug, Clone, Copy)]
pub struct TabDef {
    pub id: &'static str,
    pub label: &'static str,
    pub emoji: &'static str,
    /// Tabs without a panel render the placeholder
    pub implemented: bool,
    /// Scattered icon position as fractions of the tab-bar rect
    pub x: f32,
    pub y: f32,
}

/// The fixed tab registry, in render order.
pub const TABS: [TabDef; 5] = [
    TabDef { id: "scan", label: "Scan", emoji: "📋", implemented: false, x: 0.10, y: 0.28 },
    TabDef { id: "calendar", label: "Calendar", emoji: "📅", implemented: true, x: 0.36, y: 0.18 },
    TabDef { id: "community", label: "Community", emoji: "🧑‍🤝‍🧑", implemented: false, x: 0.62, y: 0.26 },
    TabDef { id: "supplements", label: "Supplements", emoji: "💊", implemented: true, x: 0.78, y: 0.12 },
    TabDef { id: "archive", label: "Archive", emoji: "🗂️", implemented: false, x: 0.52, y: 0.40 },
];

/// Which panel an active tab resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelKind {
    Calendar,
    Supplements,
    InDevelopment,
}

/// Active-tab state with toggle semantics.
#[derive(Debug, Default)]
pub struct TabState {
    /// Active tab id, or `None` for the landing prompt
    pub active: Option<String>,
}

impl TabState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a tab: re-selecting the active one toggles back to "none",
    /// selecting a different one moves there directly.
    pub fn select(&mut self, id: &str) {
        if self.active.as_deref() == Some(id) {
            info!("🗂️ Tab '{}' toggled off", id);
            self.active = None;
        } else {
            info!("🗂️ Tab '{}' selected", id);
            self.active = Some(id.to_string());
        }
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active.as_deref() == Some(id)
    }

    /// The panel for the active tab, or `None` when no tab is selected.
    pub fn active_panel(&self) -> Option<PanelKind> {
        self.active.as_deref().map(Self::panel_for)
    }

    /// Resolve a tab id to a panel. Unknown and unimplemented ids both
    /// degrade to the placeholder.
    pub fn panel_for(id: &str) -> PanelKind {
        match TABS.iter().find(|tab| tab.id == id) {
            Some(tab) if tab.implemented => match tab.id {
                "calendar" => PanelKind::Calendar,
                "supplements" => PanelKind::Supplements,
                _ => PanelKind::InDevelopment,
            },
            _ => PanelKind::InDevelopment,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selecting_the_active_tab_toggles_off() {
        let mut tabs = TabState::new();
        tabs.select("calendar");
        assert!(tabs.is_active("calendar"));

        tabs.select("calendar");
        assert_eq!(tabs.active, None);
    }

    #[test]
    fn selecting_another_tab_switches_directly() {
        let mut tabs = TabState::new();
        tabs.select("calendar");
        tabs.select("supplements");
        // Never passes through the "none" state
        assert!(tabs.is_active("supplements"));
        assert_eq!(tabs.active_panel(), Some(PanelKind::Supplements));
    }

    #[test]
    fn unknown_ids_resolve_to_the_placeholder() {
        let mut tabs = TabState::new();
        tabs.select("mystery");
        assert_eq!(tabs.active_panel(), Some(PanelKind::InDevelopment));
    }

    #[test]
    fn registered_but_unimplemented_tabs_resolve_to_the_placeholder() {
        assert_eq!(TabState::panel_for("scan"), PanelKind::InDevelopment);
        assert_eq!(TabState::panel_for("archive"), PanelKind::InDevelopment);
        assert_eq!(TabState::panel_for("calendar"), PanelKind::Calendar);
    }
}
