use eframe::egui;
use navshell::app::NavShell;
use navshell::config::Config;
use tracing_subscriber::EnvFilter;

fn setup_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("navshell=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() -> eframe::Result<()> {
    setup_logging();

    let config = Config::load();
    if let Err(e) = Config::create_default() {
        tracing::warn!(error = %e, "could not write default config");
    }
    tracing::info!(theme = ?config.theme.mode, "starting navshell");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_title("NavShell"),
        ..Default::default()
    };

    eframe::run_native(
        "NavShell",
        options,
        Box::new(|cc| {
            let shell = NavShell::new(config);
            shell.apply_theme(&cc.egui_ctx);
            Ok(Box::new(shell))
        }),
    )
}
