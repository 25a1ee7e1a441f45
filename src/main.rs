#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod adapters;
mod app;
mod core;
mod global_constants;
mod presentation;


fn main() -> iced::Result {
    env_logger::init();

    log::info!("[MAIN] Starting {}", global_constants::APPLICATION_TITLE);

    iced::application(
        app::MuseumApp::build,
        app::MuseumApp::handle_update,
        app::MuseumApp::render_view,
    )
    .title(app::MuseumApp::window_title)
    .theme(app::MuseumApp::resolve_theme)
    .window_size((
        global_constants::WINDOW_WIDTH,
        global_constants::WINDOW_HEIGHT,
    ))
    .run()
}
