use {
    crate::{
        camera::Camera,
        config::SceneConfig,
        error::AppError,
        input_handler::{Action, InputHandler},
        random::SeededRandom,
        renderer::Renderer,
        scene::Scene,
        timer::{FpsCounter, Pacer, SystemClock},
    },
    std::sync::Arc,
    winit::{
        application::ApplicationHandler,
        dpi::PhysicalSize,
        event::{ElementState, WindowEvent},
        event_loop::ActiveEventLoop,
        window::{Window, WindowId},
    },
};

/// Steps between diagnostics snapshots in the log.
const DIAGNOSTICS_LOG_INTERVAL: u64 = 60;

pub struct App {
    config: SceneConfig,
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    camera: Camera,
    pacer: Pacer,
    fps: FpsCounter,
    rng: SeededRandom,
    scene: Scene,
    input_handler: InputHandler,
    fatal: Option<AppError>,
}

impl App {
    pub fn new(config: SceneConfig) -> Self {
        let mut rng = SeededRandom::from_wall_clock();
        let scene = Scene::new(&config, &mut rng);
        let pacer = Pacer::new(SystemClock::default(), config.frame_time_ms());

        Self {
            config,
            window: None,
            renderer: None,
            camera: Camera::default(),
            pacer,
            fps: FpsCounter::default(),
            rng,
            scene,
            input_handler: InputHandler::new(),
            fatal: None,
        }
    }

    /// The startup fault that ended the event loop, if any.
    pub fn take_error(&mut self) -> Option<AppError> {
        self.fatal.take()
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: AppError) {
        self.fatal = Some(error);
        event_loop.exit();
    }

    fn handle_action(&mut self, event_loop: &ActiveEventLoop, action: Action) {
        if !self.scene.apply(action) {
            log::info!("Quit requested after {} steps", self.scene.steps());
            event_loop.exit();
            return;
        }

        if action == Action::ToggleDiagnostics
            && !self.scene.diagnostics_enabled()
            && let Some(window) = &self.window
        {
            window.set_title(&self.config.title);
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window_attributes = Window::default_attributes()
            .with_title(self.config.title.as_str())
            .with_inner_size(PhysicalSize::new(self.config.width, self.config.height))
            .with_resizable(true);

        let window = match event_loop.create_window(window_attributes) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                self.fail(event_loop, e.into());
                return;
            }
        };

        let renderer = match pollster::block_on(Renderer::new(window.clone())) {
            Ok(r) => r,
            Err(e) => {
                self.fail(event_loop, e.into());
                return;
            }
        };

        log::info!(
            "Scene started: {} particles max, {} ms frame budget",
            self.config.max_particles,
            self.pacer.frame_time_ms()
        );

        self.window = Some(window);
        self.renderer = Some(renderer);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        let window = match self.window.clone() {
            Some(window) => window,
            None => return,
        };

        if window_id != window.id() {
            return;
        }

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(physical_size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(physical_size.width, physical_size.height);

                    let (width, height) = renderer.size();
                    log::debug!("Resized to {width}x{height}");
                }
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if event.repeat {
                    return;
                }

                let key = match InputHandler::key_char(&event.logical_key) {
                    Some(key) => key,
                    None => return,
                };

                let pressed = event.state == ElementState::Pressed;
                if let Some(action) = self.input_handler.set_key(key, pressed) {
                    self.handle_action(event_loop, action);
                }
            }
            WindowEvent::RedrawRequested => {
                let fps = self.fps.tick();

                if self.scene.diagnostics_enabled() {
                    let diagnostics = self.scene.diagnostics(fps);
                    window.set_title(&format!("{} ({diagnostics})", self.config.title));

                    if self.scene.steps() % DIAGNOSTICS_LOG_INTERVAL == 0 {
                        log::debug!("{diagnostics}");
                    }
                }

                if let Some(renderer) = &mut self.renderer {
                    match renderer.render(&self.scene, &self.camera) {
                        Ok(()) => {}
                        Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                            log::warn!("Surface lost, reconfiguring");
                            let size = window.inner_size();
                            renderer.resize(size.width, size.height);
                        }
                        Err(wgpu::SurfaceError::OutOfMemory) => {
                            log::error!("Out of GPU memory");
                            event_loop.exit();
                        }
                        Err(e) => {
                            log::warn!("Render error: {e:?}");
                        }
                    }
                }
            }
            _ => (),
        }
    }

    /// Idle tick: wait out the frame budget, advance once, ask for a redraw.
    fn about_to_wait(&mut self, _: &ActiveEventLoop) {
        let window = match &self.window {
            Some(window) => window,
            None => return,
        };

        self.pacer.wait_for_next_frame();
        self.scene.step(&mut self.rng);
        window.request_redraw();
    }

    fn exiting(&mut self, _: &ActiveEventLoop) {
        log::info!(
            "Exiting after {} frames ({:.2}s simulated)",
            self.pacer.frames(),
            self.scene.simulated_secs()
        );
    }
}
