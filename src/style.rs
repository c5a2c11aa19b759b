use crate::config::ThemeMode;
use eframe::egui;

// --- Sizing ---
pub const NAV_BAR_HEIGHT: f32 = 36.0;
pub const STATUS_BAR_HEIGHT: f32 = 22.0;
pub const BODY_PADDING: f32 = 16.0;

// --- Icons ---
pub const CHEVRON_RIGHT: &str = "›";
pub const CHEVRON_LEFT: &str = "‹";
pub const GEAR: &str = "⚙";

/// Placeholder accent colors
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Accent {
    Blue,
    Gray,
    Red,
    Green,
    Orange,
}

impl Accent {
    pub fn color(self) -> egui::Color32 {
        match self {
            Accent::Blue => egui::Color32::from_rgb(0, 122, 255),
            Accent::Gray => egui::Color32::from_rgb(142, 142, 147),
            Accent::Red => egui::Color32::from_rgb(255, 59, 48),
            Accent::Green => egui::Color32::from_rgb(52, 199, 89),
            Accent::Orange => egui::Color32::from_rgb(255, 149, 0),
        }
    }
}

pub fn theme_preference(mode: ThemeMode) -> egui::ThemePreference {
    match mode {
        ThemeMode::System => egui::ThemePreference::System,
        ThemeMode::Light => egui::ThemePreference::Light,
        ThemeMode::Dark => egui::ThemePreference::Dark,
    }
}

/// Render a label that truncates overflowing text with an ellipsis.
pub fn truncated_label(
    ui: &mut egui::Ui,
    text: impl Into<egui::WidgetText>,
) -> egui::Response {
    ui.add(egui::Label::new(text).truncate())
}
