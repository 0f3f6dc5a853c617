//! Colour palette and style helpers for XmlTab's dark and light themes.

use egui::Color32;

// ── Background colours ──────────────────────────────────────────────────

/// Main window background.
pub const BG_DARK: Color32 = Color32::from_rgb(28, 30, 38);

/// Panel / toolbar background.
pub const BG_PANEL: Color32 = Color32::from_rgb(34, 36, 46);

/// Even rows in the data table.
pub const BG_TABLE_ROW_EVEN: Color32 = Color32::from_rgb(31, 33, 42);

/// Currently selected / highlighted element.
pub const BG_SELECTED: Color32 = Color32::from_rgb(52, 56, 84);

/// Background of the parse-error banner.
pub const BG_ERROR_BANNER: Color32 = Color32::from_rgb(62, 28, 28);

// ── Text colours ────────────────────────────────────────────────────────

/// Primary text colour.
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(208, 210, 218);

/// Secondary / muted text.
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(142, 146, 162);

/// Dim text (hints, placeholders).
pub const TEXT_DIM: Color32 = Color32::from_rgb(102, 106, 122);

// ── Accent and state colours ────────────────────────────────────────────

/// Primary accent (periwinkle).
pub const ACCENT: Color32 = Color32::from_rgb(122, 148, 235);

/// Dimmer accent for secondary highlights.
pub const ACCENT_DIM: Color32 = Color32::from_rgb(92, 112, 180);

/// Error text.
pub const ERROR: Color32 = Color32::from_rgb(230, 102, 94);

// ── Light-theme counterparts ────────────────────────────────────────────

const LIGHT_TEXT_PRIMARY: Color32 = Color32::from_rgb(42, 44, 54);
const LIGHT_TEXT_SECONDARY: Color32 = Color32::from_rgb(104, 108, 124);
const LIGHT_TEXT_DIM: Color32 = Color32::from_rgb(142, 146, 160);
const LIGHT_ACCENT: Color32 = Color32::from_rgb(72, 96, 190);
const LIGHT_ERROR: Color32 = Color32::from_rgb(186, 52, 46);
const LIGHT_BG_ERROR_BANNER: Color32 = Color32::from_rgb(248, 222, 220);

// ── Helpers ─────────────────────────────────────────────────────────────

pub fn text_primary(dark: bool) -> Color32 {
    if dark { TEXT_PRIMARY } else { LIGHT_TEXT_PRIMARY }
}

pub fn text_secondary(dark: bool) -> Color32 {
    if dark { TEXT_SECONDARY } else { LIGHT_TEXT_SECONDARY }
}

pub fn text_dim(dark: bool) -> Color32 {
    if dark { TEXT_DIM } else { LIGHT_TEXT_DIM }
}

pub fn accent(dark: bool) -> Color32 {
    if dark { ACCENT } else { LIGHT_ACCENT }
}

pub fn error_text(dark: bool) -> Color32 {
    if dark { ERROR } else { LIGHT_ERROR }
}

pub fn error_banner_bg(dark: bool) -> Color32 {
    if dark { BG_ERROR_BANNER } else { LIGHT_BG_ERROR_BANNER }
}

/// Apply the XmlTab dark theme to the given egui context.
pub fn apply_dark_theme(ctx: &egui::Context) {
    let mut visuals = egui::Visuals::dark();

    visuals.panel_fill = BG_PANEL;
    visuals.window_fill = BG_PANEL;
    visuals.extreme_bg_color = BG_DARK;
    visuals.faint_bg_color = BG_TABLE_ROW_EVEN;

    visuals.override_text_color = Some(TEXT_PRIMARY);

    visuals.widgets.inactive.bg_fill = Color32::from_rgb(44, 47, 60);
    visuals.widgets.inactive.fg_stroke = egui::Stroke::new(1.0, TEXT_SECONDARY);
    visuals.widgets.inactive.weak_bg_fill = Color32::from_rgb(40, 42, 54);

    visuals.widgets.hovered.bg_fill = Color32::from_rgb(54, 58, 76);
    visuals.widgets.hovered.fg_stroke = egui::Stroke::new(1.0, TEXT_PRIMARY);

    visuals.widgets.active.bg_fill = Color32::from_rgb(64, 68, 92);

    visuals.widgets.noninteractive.bg_fill = BG_PANEL;
    visuals.widgets.noninteractive.fg_stroke = egui::Stroke::new(1.0, TEXT_SECONDARY);

    visuals.selection.bg_fill = BG_SELECTED;
    visuals.selection.stroke = egui::Stroke::new(1.0, ACCENT);

    visuals.window_shadow = egui::Shadow::NONE;
    visuals.window_stroke = egui::Stroke::new(1.0, Color32::from_rgb(50, 53, 68));

    ctx.set_visuals(visuals);
}

/// Apply the XmlTab light theme.
pub fn apply_light_theme(ctx: &egui::Context) {
    let mut visuals = egui::Visuals::light();

    visuals.panel_fill = Color32::from_rgb(244, 245, 248);
    visuals.window_fill = Color32::from_rgb(250, 250, 252);
    visuals.extreme_bg_color = Color32::WHITE;
    visuals.faint_bg_color = Color32::from_rgb(236, 237, 242);

    visuals.override_text_color = Some(LIGHT_TEXT_PRIMARY);

    visuals.widgets.inactive.bg_fill = Color32::from_rgb(224, 226, 234);
    visuals.widgets.inactive.fg_stroke = egui::Stroke::new(1.0, LIGHT_TEXT_SECONDARY);
    visuals.widgets.inactive.weak_bg_fill = Color32::from_rgb(230, 232, 238);

    visuals.widgets.hovered.bg_fill = Color32::from_rgb(210, 213, 224);
    visuals.widgets.hovered.fg_stroke = egui::Stroke::new(1.0, LIGHT_TEXT_PRIMARY);

    visuals.widgets.active.bg_fill = Color32::from_rgb(194, 198, 214);

    visuals.widgets.noninteractive.bg_fill = Color32::from_rgb(240, 241, 246);
    visuals.widgets.noninteractive.fg_stroke = egui::Stroke::new(1.0, LIGHT_TEXT_SECONDARY);

    visuals.selection.bg_fill = Color32::from_rgb(198, 210, 245);
    visuals.selection.stroke = egui::Stroke::new(1.0, LIGHT_ACCENT);

    visuals.window_shadow = egui::Shadow::NONE;
    visuals.window_stroke = egui::Stroke::new(1.0, Color32::from_rgb(205, 208, 218));

    ctx.set_visuals(visuals);
}
