// Keyboard shortcuts for the navigation stack

use crate::app::NavShell;
use crate::state::NavigationPath;
use eframe::egui;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavAction {
    Back,
    PopToRoot,
}

impl NavAction {
    pub fn apply(self, path: &mut NavigationPath) {
        match self {
            NavAction::Back => {
                path.pop();
            }
            NavAction::PopToRoot => path.clear(),
        }
    }
}

/// Alt+Home pops to root; Alt+Left or Escape goes back one screen.
pub fn shortcut(input: &egui::InputState) -> Option<NavAction> {
    if input.modifiers.alt && input.key_pressed(egui::Key::Home) {
        return Some(NavAction::PopToRoot);
    }
    if (input.modifiers.alt && input.key_pressed(egui::Key::ArrowLeft))
        || input.key_pressed(egui::Key::Escape)
    {
        return Some(NavAction::Back);
    }
    None
}

impl NavShell {
    pub fn handle_input(&mut self, ctx: &egui::Context) {
        if let Some(action) = ctx.input(shortcut) {
            if action == NavAction::Back && self.path.is_root_visible() {
                return;
            }
            tracing::debug!(?action, "shortcut");
            action.apply(&mut self.path);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::state::Destination;

    fn key_input(key: egui::Key, modifiers: egui::Modifiers) -> egui::RawInput {
        egui::RawInput {
            modifiers,
            events: vec![egui::Event::Key {
                key,
                physical_key: None,
                pressed: true,
                repeat: false,
                modifiers,
            }],
            ..Default::default()
        }
    }

    fn press(shell: &mut NavShell, key: egui::Key, modifiers: egui::Modifiers) {
        let ctx = egui::Context::default();
        let _ = ctx.run(key_input(key, modifiers), |ctx| {
            shell.handle_input(ctx);
        });
    }

    fn shell_at_page3() -> NavShell {
        let mut shell = NavShell::new(Config::default());
        shell.path.push(Destination::Page1);
        shell.path.push(Destination::Page2);
        shell.path.push(Destination::Page3);
        shell
    }

    #[test]
    fn test_alt_left_goes_back() {
        let mut shell = shell_at_page3();
        press(&mut shell, egui::Key::ArrowLeft, egui::Modifiers::ALT);
        assert_eq!(shell.path.as_slice(), &[Destination::Page1, Destination::Page2]);
    }

    #[test]
    fn test_escape_goes_back() {
        let mut shell = shell_at_page3();
        press(&mut shell, egui::Key::Escape, egui::Modifiers::NONE);
        assert_eq!(shell.path.top(), Some(Destination::Page2));
    }

    #[test]
    fn test_plain_left_is_ignored() {
        let mut shell = shell_at_page3();
        press(&mut shell, egui::Key::ArrowLeft, egui::Modifiers::NONE);
        assert_eq!(shell.path.len(), 3);
    }

    #[test]
    fn test_alt_home_pops_to_root() {
        let mut shell = shell_at_page3();
        press(&mut shell, egui::Key::Home, egui::Modifiers::ALT);
        assert!(shell.path.is_root_visible());
    }

    #[test]
    fn test_back_at_root_is_noop() {
        let mut shell = NavShell::new(Config::default());
        press(&mut shell, egui::Key::Escape, egui::Modifiers::NONE);
        assert!(shell.path.is_empty());
    }

    #[test]
    fn test_apply() {
        let mut path = NavigationPath::new();
        path.push(Destination::Settings);
        NavAction::Back.apply(&mut path);
        assert!(path.is_empty());
        NavAction::PopToRoot.apply(&mut path);
        assert!(path.is_empty());
    }
}
