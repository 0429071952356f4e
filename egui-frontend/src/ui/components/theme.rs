//! # Theme Configuration
//!
//! Centralized color and style configuration for Friday. All visual
//! styling should use these constants so the paper-notebook look stays
//! consistent across panels.

use eframe::egui;
use eframe::egui::Color32;
use shared::EventLayer;

/// Main theme configuration structure
#[derive(Debug, Clone)]
pub struct Theme {
    /// Background and layout colors
    pub layout: LayoutColors,
    /// Text colors
    pub typography: TypographyColors,
    /// Calendar-specific colors
    pub calendar: CalendarColors,
    /// Sticker canvas colors
    pub sticker: StickerColors,
}

/// Layout and container colors
#[derive(Debug, Clone)]
pub struct LayoutColors {
    /// Paper page background
    pub paper: Color32,
    /// Card fill, slightly brighter than the page
    pub card_background: Color32,
    pub card_border: Color32,
    /// Dashed separator lines
    pub hairline: Color32,
}

/// Text colors
#[derive(Debug, Clone)]
pub struct TypographyColors {
    /// Primary ink
    pub ink: Color32,
    /// Secondary ink (captions, metadata)
    pub ink_soft: Color32,
    /// Faint ink (out-of-month days, disabled text)
    pub ink_faint: Color32,
    /// Warm accent (low supply warnings, pinned stars)
    pub accent: Color32,
}

/// Calendar-specific colors
#[derive(Debug, Clone)]
pub struct CalendarColors {
    pub expo: Color32,
    pub hack: Color32,
    pub stock: Color32,
    /// Sunday column text
    pub sunday: Color32,
    /// Saturday column text
    pub saturday: Color32,
    /// Outline around today's day number
    pub today_border: Color32,
    /// Bar under the selected day number
    pub selected_underline: Color32,
}

/// Sticker canvas colors
#[derive(Debug, Clone)]
pub struct StickerColors {
    pub background: Color32,
    pub border: Color32,
    pub shadow: Color32,
    pub pinned_border: Color32,
}

/// The current active theme - paper notebook with colored event inks
pub const CURRENT_THEME: Theme = Theme {
    layout: LayoutColors {
        paper: Color32::from_rgb(251, 251, 248),
        card_background: Color32::from_rgb(255, 255, 253),
        card_border: Color32::from_rgb(210, 208, 200),
        hairline: Color32::from_rgb(200, 198, 190),
    },
    typography: TypographyColors {
        ink: Color32::from_rgb(27, 27, 27),
        ink_soft: Color32::from_rgb(96, 96, 92),
        ink_faint: Color32::from_rgb(176, 176, 170),
        accent: Color32::from_rgb(214, 92, 67),
    },
    calendar: CalendarColors {
        expo: Color32::from_rgb(4, 120, 87),    // Emerald
        hack: Color32::from_rgb(109, 40, 217),  // Violet
        stock: Color32::from_rgb(180, 83, 9),   // Amber
        sunday: Color32::from_rgb(220, 38, 38),
        saturday: Color32::from_rgb(37, 99, 235),
        today_border: Color32::from_rgb(90, 90, 86),
        selected_underline: Color32::from_rgb(120, 120, 116),
    },
    sticker: StickerColors {
        background: Color32::from_rgb(255, 252, 240),
        border: Color32::from_rgb(206, 200, 180),
        shadow: Color32::from_rgba_premultiplied(0, 0, 0, 18),
        pinned_border: Color32::from_rgb(214, 92, 67),
    },
};

impl Theme {
    /// Ink color for a calendar event layer.
    pub fn layer_color(&self, layer: EventLayer) -> Color32 {
        match layer {
            EventLayer::Expo => self.calendar.expo,
            EventLayer::Hack => self.calendar.hack,
            EventLayer::Stock => self.calendar.stock,
        }
    }
}

/// Emoji shown next to a layer's label.
pub fn layer_emoji(layer: EventLayer) -> &'static str {
    match layer {
        EventLayer::Expo => "🎨",
        EventLayer::Hack => "💻",
        EventLayer::Stock => "📈",
    }
}

/// Glyph for a supplement icon key; unknown keys fall back to the pill.
pub fn icon_glyph(key: &str) -> &'static str {
    match key {
        "milk-thistle" => "🌿",
        "omega3" => "🐟",
        "vitamin-c" => "🍊",
        "vitamin-d" => "☀️",
        "magnesium" => "🌙",
        "probiotics" => "🦠",
        "zinc" => "🛡️",
        "lutein" => "👁️",
        "collagen" => "✨",
        _ => "💊",
    }
}

/// Apply the light paper style to the whole context.
pub fn setup_paper_style(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();
    style.visuals = egui::Visuals::light();
    style.visuals.panel_fill = CURRENT_THEME.layout.paper;
    style.visuals.window_fill = CURRENT_THEME.layout.card_background;
    style.visuals.widgets.noninteractive.fg_stroke.color = CURRENT_THEME.typography.ink;
    style.visuals.selection.stroke.color = CURRENT_THEME.typography.ink_soft;
    ctx.set_style(style);
}

/// Paint a dashed horizontal hairline across the available width.
pub fn draw_dashed_hairline(ui: &mut egui::Ui) {
    let width = ui.available_width();
    let (rect, _) = ui.allocate_exact_size(egui::vec2(width, 6.0), egui::Sense::hover());
    let y = rect.center().y;
    ui.painter().add(egui::Shape::dashed_line(
        &[egui::pos2(rect.left(), y), egui::pos2(rect.right(), y)],
        egui::Stroke::new(1.0, colors::HAIRLINE),
        4.0,
        4.0,
    ));
}

/// Convenience constants for the most commonly used colors
pub mod colors {
    use super::CURRENT_THEME;
    use eframe::egui::Color32;

    pub const PAPER: Color32 = CURRENT_THEME.layout.paper;
    pub const CARD_BACKGROUND: Color32 = CURRENT_THEME.layout.card_background;
    pub const CARD_BORDER: Color32 = CURRENT_THEME.layout.card_border;
    pub const HAIRLINE: Color32 = CURRENT_THEME.layout.hairline;

    pub const INK: Color32 = CURRENT_THEME.typography.ink;
    pub const INK_SOFT: Color32 = CURRENT_THEME.typography.ink_soft;
    pub const INK_FAINT: Color32 = CURRENT_THEME.typography.ink_faint;
    pub const ACCENT: Color32 = CURRENT_THEME.typography.accent;

    pub const SUNDAY: Color32 = CURRENT_THEME.calendar.sunday;
    pub const SATURDAY: Color32 = CURRENT_THEME.calendar.saturday;
    pub const TODAY_BORDER: Color32 = CURRENT_THEME.calendar.today_border;
    pub const SELECTED_UNDERLINE: Color32 = CURRENT_THEME.calendar.selected_underline;

    pub const STICKER_BACKGROUND: Color32 = CURRENT_THEME.sticker.background;
    pub const STICKER_BORDER: Color32 = CURRENT_THEME.sticker.border;
    pub const STICKER_SHADOW: Color32 = CURRENT_THEME.sticker.shadow;
    pub const STICKER_PINNED_BORDER: Color32 = CURRENT_THEME.sticker.pinned_border;
}
