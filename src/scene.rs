use crate::{
    config::SceneConfig,
    input_handler::Action,
    particle_system::{SnowField, SnowFieldInfo},
    random::RandomSource,
    snowman::{Jump, Snowman},
};

/// Height of the fixed outer corners of the ground outline.
const GROUND_EDGE: f32 = 0.2;

/// Four-point ground outline: fixed outer corners, inner corners jittered
/// once at startup.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ground {
    pub outline: [glam::Vec2; 4],
}

impl Ground {
    pub fn generate(rng: &mut impl RandomSource) -> Self {
        let left_x = 0.05 + rng.below(100) as f32 / 1000.0;
        let top_y = 0.25 + rng.below(100) as f32 / 1000.0;
        let right_x = 0.95 - rng.below(100) as f32 / 1000.0;

        Self {
            outline: [
                glam::vec2(0.0, GROUND_EDGE),
                glam::vec2(left_x, top_y),
                glam::vec2(right_x, top_y),
                glam::vec2(1.0, GROUND_EDGE),
            ],
        }
    }
}

/// Everything the simulation step mutates and the painter reads.
pub struct Scene {
    snow: SnowField,
    snowman: Snowman,
    ground: Ground,
    snowing: bool,
    diagnostics: bool,
    steps: u64,
    frame_time_secs: f32,
}

impl Scene {
    pub fn new(config: &SceneConfig, rng: &mut impl RandomSource) -> Self {
        Self {
            snow: SnowField::new(SnowFieldInfo {
                max_particles: config.max_particles,
                floor: config.floor,
                jitter_unit: config.jitter_unit,
            }),
            snowman: Snowman::new(Jump::new(config.jump_duration, config.jump_height)),
            ground: Ground::generate(rng),
            snowing: false,
            diagnostics: false,
            steps: 0,
            frame_time_secs: config.frame_time_secs(),
        }
    }

    /// Advances the world by exactly one frame interval.
    pub fn step(&mut self, rng: &mut impl RandomSource) {
        self.snow.step(self.snowing, rng);
        self.snowman.step();
        self.steps += 1;
    }

    /// Applies an input action. Returns `false` when the action asks to quit.
    pub fn apply(&mut self, action: Action) -> bool {
        match action {
            Action::ToggleSnow => {
                self.snowing = !self.snowing;
                log::info!("Snowfall {}", if self.snowing { "on" } else { "off" });
            }
            Action::Jump => {
                if self.snowman.jump() {
                    log::debug!("Snowman jumps");
                }
            }
            Action::ToggleDiagnostics => {
                self.diagnostics = !self.diagnostics;
                log::info!(
                    "Diagnostics {}",
                    if self.diagnostics { "shown" } else { "hidden" }
                );
            }
            Action::Quit => return false,
        }

        true
    }

    pub fn snow(&self) -> &SnowField {
        &self.snow
    }

    pub fn snowman(&self) -> &Snowman {
        &self.snowman
    }

    pub fn ground(&self) -> &Ground {
        &self.ground
    }

    pub fn is_snowing(&self) -> bool {
        self.snowing
    }

    pub fn diagnostics_enabled(&self) -> bool {
        self.diagnostics
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Simulated time: one frame budget per step, regardless of wall time.
    pub fn simulated_secs(&self) -> f32 {
        self.steps as f32 * self.frame_time_secs
    }

    pub fn diagnostics(&self, fps: f32) -> String {
        format!(
            "snow {}/{} {} | {:?} | step {} | t {:.2}s | {:.0} FPS",
            self.snow.len(),
            self.snow.max_particles(),
            if self.is_snowing() { "falling" } else { "settling" },
            self.snowman.jump_state(),
            self.steps,
            self.simulated_secs(),
            fps
        )
    }
}
