//! Application entry point.

mod export;
mod models;
mod render;
mod state;
mod views;

fn main() {
    unsafe {
        std::env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    log::info!("MAIN: Booting menuforge...");

    render::app::App::run();
}
