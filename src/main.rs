mod app;
mod camera;
mod canvas;
mod config;
mod error;
mod input_handler;
mod painter;
mod particle_system;
mod random;
mod renderer;
mod scene;
mod snowman;
mod timer;

use {
    crate::{app::App, config::SceneConfig, error::AppError},
    winit::event_loop::{ControlFlow, EventLoop},
};

fn run() -> Result<(), AppError> {
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(SceneConfig::default());
    event_loop.run_app(&mut app)?;

    match app.take_error() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}
