#![warn(clippy::all)]

fn main() -> eframe::Result<()> {
    use eframe::egui::{vec2, ViewportBuilder};
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("lifepad=debug")),
        )
        .init();

    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size(vec2(960., 680.))
            .with_min_inner_size(vec2(640.0, 360.0)),
        follow_system_theme: false,
        default_theme: eframe::Theme::Dark,
        ..Default::default()
    };
    eframe::run_native(
        "Yet Another Game of Life",
        options,
        Box::new(move |cc| Ok(Box::new(lifepad::App::new(&cc.egui_ctx)))),
    )
}
