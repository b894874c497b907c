#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod chart;
mod config;
mod constants;
mod data;
mod error;
mod format;
mod scale;
mod state;
mod ui;

use app::FilmScatter;
use config::AppConfig;

const WINDOW_NAME: &str = "Film Scatter";
const WINDOW_WIDTH: f32 = 1100.0;
const WINDOW_HEIGHT: f32 = 900.0;

fn main() -> eframe::Result {
    env_logger::init();

    // Serve puffin scopes for an external puffin_viewer
    #[cfg(feature = "profile-with-puffin")]
    let _puffin_server = {
        puffin::set_scopes_on(true);
        let addr = format!("127.0.0.1:{}", puffin_http::DEFAULT_PORT);
        match puffin_http::Server::new(&addr) {
            Ok(server) => {
                log::info!("puffin server listening on {}", addr);
                Some(server)
            }
            Err(e) => {
                log::warn!("could not start puffin server: {}", e);
                None
            }
        }
    };

    let config = AppConfig::load_or_default(&AppConfig::default_path());

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([WINDOW_WIDTH, WINDOW_HEIGHT])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        WINDOW_NAME,
        options,
        Box::new(|cc| Ok(Box::new(FilmScatter::new(cc, config)))),
    )
}
