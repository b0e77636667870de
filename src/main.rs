#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod adapters;
mod app;
mod core;
mod global_constants;
mod presentation;

fn main() -> iced::Result {
    env_logger::init();

    log::info!("[MAIN] Starting Emotion Lens application");

    iced::application(
        app::EmotionApp::build,
        app::EmotionApp::handle_update,
        app::EmotionApp::render_view,
    )
    .title(global_constants::APPLICATION_TITLE)
    .theme(app::EmotionApp::current_theme)
    .window(iced::window::Settings {
        size: iced::Size::new(720.0, 780.0),
        position: iced::window::Position::Centered,
        ..Default::default()
    })
    .run()
}
