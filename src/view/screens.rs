// Placeholder screens and their toolbars

use super::button::{Icon, NavigationButton, PopToRootButton};
use crate::config::FontConfig;
use crate::state::{Destination, NavigationPath};
use crate::style::{self, Accent};
use eframe::egui;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Placement {
    Leading,
    Trailing,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ToolbarControl {
    Navigate(NavigationButton),
    PopToRoot(PopToRootButton),
}

#[derive(Clone, Debug, PartialEq)]
pub struct ToolbarItem {
    pub placement: Placement,
    pub control: ToolbarControl,
}

impl ToolbarItem {
    pub fn leading(control: ToolbarControl) -> Self {
        Self {
            placement: Placement::Leading,
            control,
        }
    }

    pub fn trailing(control: ToolbarControl) -> Self {
        Self {
            placement: Placement::Trailing,
            control,
        }
    }

    pub fn activate(&self, path: &mut NavigationPath) {
        match &self.control {
            ToolbarControl::Navigate(button) => button.activate(path),
            ToolbarControl::PopToRoot(button) => button.activate(path),
        }
    }

    pub fn ui(&self, ui: &mut egui::Ui, path: &mut NavigationPath) -> egui::Response {
        match &self.control {
            ToolbarControl::Navigate(button) => button.ui(ui, path),
            ToolbarControl::PopToRoot(button) => button.ui(ui, path),
        }
    }
}

fn push_to(title: &str, destination: Destination) -> ToolbarControl {
    let button = NavigationButton::new(Icon::ChevronRight, destination).with_title(title);
    ToolbarControl::Navigate(button)
}

/// A static screen. Screens hold no state; navigation goes through the
/// path handed to their toolbar items.
pub trait Screen {
    fn title(&self) -> &'static str;

    fn accent(&self) -> Accent;

    fn placeholder(&self) -> &'static str {
        "Your code for this page"
    }

    fn toolbar(&self) -> Vec<ToolbarItem> {
        Vec::new()
    }

    fn body(&self, ui: &mut egui::Ui, font: &FontConfig) {
        ui.add_space(style::BODY_PADDING);
        ui.vertical_centered(|ui| {
            ui.label(
                egui::RichText::new(self.placeholder())
                    .size(font.placeholder_size)
                    .strong()
                    .color(self.accent().color()),
            );
        });
    }
}

pub struct RootScreen;
pub struct Page1Screen;
pub struct Page2Screen;
pub struct Page3Screen;
pub struct SettingsScreen;

impl Screen for RootScreen {
    fn title(&self) -> &'static str {
        "ContentView"
    }

    fn accent(&self) -> Accent {
        Accent::Blue
    }

    fn toolbar(&self) -> Vec<ToolbarItem> {
        let settings = NavigationButton::new(Icon::Gear, Destination::Settings);
        vec![
            ToolbarItem::trailing(push_to("Page 1", Destination::Page1)),
            ToolbarItem::leading(ToolbarControl::Navigate(settings)),
        ]
    }
}

impl Screen for Page1Screen {
    fn title(&self) -> &'static str {
        Destination::Page1.title()
    }

    fn accent(&self) -> Accent {
        Accent::Gray
    }

    fn toolbar(&self) -> Vec<ToolbarItem> {
        vec![ToolbarItem::trailing(push_to("Page 2", Destination::Page2))]
    }
}

impl Screen for Page2Screen {
    fn title(&self) -> &'static str {
        Destination::Page2.title()
    }

    fn accent(&self) -> Accent {
        Accent::Red
    }

    fn toolbar(&self) -> Vec<ToolbarItem> {
        vec![ToolbarItem::trailing(push_to("Page 3", Destination::Page3))]
    }
}

impl Screen for Page3Screen {
    fn title(&self) -> &'static str {
        Destination::Page3.title()
    }

    fn accent(&self) -> Accent {
        Accent::Green
    }

    fn toolbar(&self) -> Vec<ToolbarItem> {
        let home = PopToRootButton::new(RootScreen.title(), Icon::ChevronRight);
        vec![ToolbarItem::trailing(ToolbarControl::PopToRoot(home))]
    }
}

impl Screen for SettingsScreen {
    fn title(&self) -> &'static str {
        Destination::Settings.title()
    }

    fn accent(&self) -> Accent {
        Accent::Orange
    }

    fn placeholder(&self) -> &'static str {
        "Your code for Settings"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pushes(items: &[ToolbarItem]) -> Vec<(Placement, Destination)> {
        items
            .iter()
            .filter_map(|item| match &item.control {
                ToolbarControl::Navigate(b) => Some((item.placement, b.destination)),
                ToolbarControl::PopToRoot(_) => None,
            })
            .collect()
    }

    #[test]
    fn test_root_toolbar() {
        let items = RootScreen.toolbar();
        assert_eq!(
            pushes(&items),
            vec![
                (Placement::Trailing, Destination::Page1),
                (Placement::Leading, Destination::Settings)
            ]
        );
        let ToolbarControl::Navigate(settings) = &items[1].control else {
            panic!("expected a navigation button");
        };
        assert_eq!(settings.title, None);
        assert_eq!(settings.icon, Icon::Gear);
    }

    #[test]
    fn test_pages_chain_forward() {
        assert_eq!(
            pushes(&Page1Screen.toolbar()),
            vec![(Placement::Trailing, Destination::Page2)]
        );
        assert_eq!(
            pushes(&Page2Screen.toolbar()),
            vec![(Placement::Trailing, Destination::Page3)]
        );
    }

    #[test]
    fn test_page3_toolbar_pops_to_root() {
        let items = Page3Screen.toolbar();
        assert_eq!(items.len(), 1);
        assert!(matches!(items[0].control, ToolbarControl::PopToRoot(_)));

        let mut path = NavigationPath::new();
        path.push(Destination::Page1);
        path.push(Destination::Page2);
        path.push(Destination::Page3);
        items[0].activate(&mut path);
        assert!(path.is_empty());
    }

    #[test]
    fn test_settings_has_no_toolbar() {
        assert!(SettingsScreen.toolbar().is_empty());
        assert_eq!(SettingsScreen.placeholder(), "Your code for Settings");
    }
}
