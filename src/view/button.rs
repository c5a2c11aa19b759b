// Toolbar controls that mutate the navigation path

use crate::state::{Destination, NavigationPath};
use crate::style;
use eframe::egui;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    ChevronRight,
    ChevronLeft,
    Gear,
}

impl Icon {
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::ChevronRight => style::CHEVRON_RIGHT,
            Icon::ChevronLeft => style::CHEVRON_LEFT,
            Icon::Gear => style::GEAR,
        }
    }
}

fn button_text(title: Option<&str>, icon: Icon) -> String {
    match title {
        Some(title) => format!("{} {}", title, icon.glyph()),
        None => icon.glyph().to_string(),
    }
}

/// A reusable button that pushes `destination` onto the path when clicked.
#[derive(Clone, Debug, PartialEq)]
pub struct NavigationButton {
    pub title: Option<String>,
    pub icon: Icon,
    pub destination: Destination,
}

impl NavigationButton {
    /// Icon-only button
    pub fn new(icon: Icon, destination: Destination) -> Self {
        Self {
            title: None,
            icon,
            destination,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn text(&self) -> String {
        button_text(self.title.as_deref(), self.icon)
    }

    pub fn activate(&self, path: &mut NavigationPath) {
        path.push(self.destination);
    }

    pub fn ui(&self, ui: &mut egui::Ui, path: &mut NavigationPath) -> egui::Response {
        let response = ui.button(self.text());
        if response.clicked() {
            self.activate(path);
        }
        response
    }
}

/// Clears the whole path. Unlike [`NavigationButton`] it never appends.
#[derive(Clone, Debug, PartialEq)]
pub struct PopToRootButton {
    pub title: String,
    pub icon: Icon,
}

impl PopToRootButton {
    pub fn new(title: impl Into<String>, icon: Icon) -> Self {
        Self {
            title: title.into(),
            icon,
        }
    }

    pub fn text(&self) -> String {
        button_text(Some(&self.title), self.icon)
    }

    pub fn activate(&self, path: &mut NavigationPath) {
        path.clear();
    }

    pub fn ui(&self, ui: &mut egui::Ui, path: &mut NavigationPath) -> egui::Response {
        let response = ui.button(self.text());
        if response.clicked() {
            self.activate(path);
        }
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activate_appends_target() {
        let mut path = NavigationPath::new();
        let button =
            NavigationButton::new(Icon::ChevronRight, Destination::Page2).with_title("Page 2");

        button.activate(&mut path);
        button.activate(&mut path);

        assert_eq!(path.as_slice(), &[Destination::Page2, Destination::Page2]);
    }

    #[test]
    fn test_text_with_and_without_title() {
        let gear = NavigationButton::new(Icon::Gear, Destination::Settings);
        assert_eq!(gear.text(), style::GEAR);

        let page =
            NavigationButton::new(Icon::ChevronRight, Destination::Page1).with_title("Page 1");
        assert_eq!(page.text(), format!("Page 1 {}", style::CHEVRON_RIGHT));
    }

    #[test]
    fn test_pop_to_root_clears() {
        let mut path = NavigationPath::new();
        path.push(Destination::Page1);
        path.push(Destination::Page2);
        path.push(Destination::Page3);

        PopToRootButton::new("ContentView", Icon::ChevronRight).activate(&mut path);
        assert!(path.is_empty());
    }
}
