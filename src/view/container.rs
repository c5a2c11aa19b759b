// Navigation container
// Routes destinations to screens and draws the top layer of the stack

use super::button::Icon;
use super::screens::{
    Page1Screen, Page2Screen, Page3Screen, Placement, RootScreen, Screen, SettingsScreen,
};
use crate::config::FontConfig;
use crate::state::{Destination, NavigationPath};
use crate::style;
use eframe::egui;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScreenId {
    Root,
    Page1,
    Page2,
    Page3,
    Settings,
}

impl ScreenId {
    pub fn screen(self) -> &'static dyn Screen {
        match self {
            ScreenId::Root => &RootScreen,
            ScreenId::Page1 => &Page1Screen,
            ScreenId::Page2 => &Page2Screen,
            ScreenId::Page3 => &Page3Screen,
            ScreenId::Settings => &SettingsScreen,
        }
    }

    pub fn title(self) -> &'static str {
        self.screen().title()
    }
}

/// Maps a destination to its screen. Keep this match free of a wildcard arm
/// so a new destination fails to compile until it is routed.
pub fn route(destination: Destination) -> ScreenId {
    match destination {
        Destination::Page1 => ScreenId::Page1,
        Destination::Page2 => ScreenId::Page2,
        Destination::Page3 => ScreenId::Page3,
        Destination::Settings => ScreenId::Settings,
    }
}

/// Every layer of the stack, root first.
pub fn layers(path: &NavigationPath) -> Vec<ScreenId> {
    std::iter::once(ScreenId::Root)
        .chain(path.iter().map(route))
        .collect()
}

pub fn visible(path: &NavigationPath) -> ScreenId {
    path.top().map_or(ScreenId::Root, route)
}

pub fn breadcrumb(path: &NavigationPath) -> String {
    layers(path)
        .iter()
        .map(|id| id.title())
        .collect::<Vec<_>>()
        .join(&format!(" {} ", Icon::ChevronRight.glyph()))
}

/// Where the navigation bar placed its title and controls.
#[derive(Clone, Debug)]
pub struct NavBar {
    pub title: egui::Rect,
    pub back: Option<egui::Rect>,
    pub leading: Vec<egui::Rect>,
    pub trailing: Vec<egui::Rect>,
}

impl Default for NavBar {
    fn default() -> Self {
        Self {
            title: egui::Rect::NOTHING,
            back: None,
            leading: Vec::new(),
            trailing: Vec::new(),
        }
    }
}

/// Draw the navigation bar, the visible screen and the status bar.
///
/// Returns the screen that was painted. Clicks mutate `path` directly and
/// take effect on the next frame.
pub fn show(ctx: &egui::Context, path: &mut NavigationPath, font: &FontConfig) -> ScreenId {
    show_with_layout(ctx, path, font).0
}

pub fn show_with_layout(
    ctx: &egui::Context,
    path: &mut NavigationPath,
    font: &FontConfig,
) -> (ScreenId, NavBar) {
    let top = visible(path);
    let screen = top.screen();

    let bar = egui::TopBottomPanel::top("nav_bar")
        .exact_height(style::NAV_BAR_HEIGHT)
        .show(ctx, |ui| nav_bar(ui, path, screen, font))
        .inner;

    egui::TopBottomPanel::bottom("status_bar")
        .exact_height(style::STATUS_BAR_HEIGHT)
        .show(ctx, |ui| {
            ui.horizontal_centered(|ui| {
                ui.label(format!("depth {}", path.len()));
                ui.separator();
                style::truncated_label(ui, breadcrumb(path));
            });
        });

    egui::CentralPanel::default().show(ctx, |ui| {
        screen.body(ui, font);
    });

    (top, bar)
}

// Leading controls, then trailing controls from the right edge, then the
// title in whatever space is left between them.
fn nav_bar(
    ui: &mut egui::Ui,
    path: &mut NavigationPath,
    screen: &dyn Screen,
    font: &FontConfig,
) -> NavBar {
    let layers = layers(path);
    let toolbar = screen.toolbar();
    let mut bar = NavBar::default();

    ui.horizontal_centered(|ui| {
        if layers.len() > 1 {
            let previous = layers[layers.len() - 2];
            let back = format!("{} {}", Icon::ChevronLeft.glyph(), previous.title());
            let response = ui.button(back).on_hover_text("Back (Alt+←)");
            if response.clicked() {
                path.pop();
            }
            bar.back = Some(response.rect);
        }
        for item in toolbar.iter().filter(|i| i.placement == Placement::Leading) {
            bar.leading.push(item.ui(ui, path).rect);
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            for item in toolbar.iter().filter(|i| i.placement == Placement::Trailing) {
                bar.trailing.push(item.ui(ui, path).rect);
            }

            let title = egui::RichText::new(screen.title())
                .size(font.title_size)
                .strong()
                .color(ui.visuals().strong_text_color());
            let centered = egui::Layout::centered_and_justified(egui::Direction::LeftToRight);
            bar.title = ui
                .with_layout(centered, |ui| style::truncated_label(ui, title))
                .inner
                .rect;
        });
    });

    bar
}
