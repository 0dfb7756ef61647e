/// Tunables for the window, the pacing loop and the simulation.
///
/// All scene-space quantities are in normalized units where the visible
/// scene spans `0.0..=1.0` on both axes, y pointing up.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
    pub target_fps: u32,
    pub max_particles: usize,
    /// Particles below this height are recycled or removed.
    pub floor: f32,
    /// Horizontal drift applied per step is a whole multiple of this.
    pub jitter_unit: f32,
    pub jump_duration: u32,
    pub jump_height: f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 1000,
            title: String::from("Snow Scene"),
            target_fps: 60,
            max_particles: 1000,
            floor: 0.02,
            jitter_unit: 0.001,
            jump_duration: 48,
            jump_height: 0.1,
        }
    }
}

impl SceneConfig {
    /// Frame budget in whole milliseconds (`1000 / fps`, truncated).
    pub fn frame_time_ms(&self) -> u64 {
        1000 / u64::from(self.target_fps.max(1))
    }

    /// Frame budget in seconds, derived from the truncated millisecond value
    /// so it agrees with what the pacer actually sleeps for.
    pub fn frame_time_secs(&self) -> f32 {
        self.frame_time_ms() as f32 / 1000.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_time_uses_truncated_milliseconds() {
        let config = SceneConfig::default();

        assert_eq!(config.frame_time_ms(), 16);
        assert_eq!(config.frame_time_secs(), 0.016);
        assert_ne!(config.frame_time_secs(), 1.0 / 60.0);
    }

    #[test]
    fn zero_fps_does_not_divide_by_zero() {
        let config = SceneConfig {
            target_fps: 0,
            ..Default::default()
        };

        assert_eq!(config.frame_time_ms(), 1000);
    }
}
