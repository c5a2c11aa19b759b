use crate::config::Config;
use crate::state::NavigationPath;
use crate::style;
use crate::view::{container, ScreenId};
use eframe::egui;

/// The application shell. Owns the navigation path for the lifetime of the
/// window and lends it to the container each frame.
pub struct NavShell {
    pub path: NavigationPath,
    pub config: Config,
    pub last_shown: ScreenId,
}

impl NavShell {
    pub fn new(config: Config) -> Self {
        Self {
            path: NavigationPath::new(),
            config,
            last_shown: ScreenId::Root,
        }
    }

    pub fn apply_theme(&self, ctx: &egui::Context) {
        ctx.set_theme(style::theme_preference(self.config.theme.mode));
    }

    pub fn render(&mut self, ctx: &egui::Context) -> ScreenId {
        self.handle_input(ctx);
        let shown = container::show(ctx, &mut self.path, &self.config.font);
        if shown != self.last_shown {
            tracing::debug!(from = ?self.last_shown, to = ?shown, "screen changed");
            self.last_shown = shown;
        }
        shown
    }
}

impl eframe::App for NavShell {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.render(ctx);
    }
}
