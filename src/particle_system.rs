use crate::random::RandomSource;

/// Height every particle spawns (and respawns) at.
pub const SPAWN_HEIGHT: f32 = 1.0;

/// Fall speed in scene units per step for each pixel of point size.
const SPEED_PER_SIZE: f32 = 0.0015;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub position: glam::Vec2,
    pub speed: f32,
    /// Point size in pixels.
    pub size: f32,
    pub alpha: f32,
}

impl Particle {
    pub fn spawn(rng: &mut impl RandomSource) -> Self {
        let x = rng.below(100) as f32 / 100.0;
        let size = 1.0 + rng.below(5) as f32 / 5.0;
        let alpha = (1 + rng.below(10)) as f32 / 10.0;

        Self {
            position: glam::vec2(x, SPAWN_HEIGHT),
            speed: size * SPEED_PER_SIZE,
            size,
            alpha,
        }
    }

    fn advance(&mut self, jitter_unit: f32, rng: &mut impl RandomSource) {
        let drift = rng.below(3) as i32 - 1;

        self.position.y -= self.speed;
        self.position.x += drift as f32 * jitter_unit;
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SnowFieldInfo {
    pub max_particles: usize,
    pub floor: f32,
    pub jitter_unit: f32,
}

/// Fixed-capacity ordered store of live snow particles.
///
/// Indices `0..len()` are live. Spawns beyond `max_particles` are dropped.
pub struct SnowField {
    particles: Vec<Particle>,
    max_particles: usize,
    floor: f32,
    jitter_unit: f32,
}

impl SnowField {
    pub fn new(info: SnowFieldInfo) -> Self {
        Self {
            particles: Vec::with_capacity(info.max_particles),
            max_particles: info.max_particles,
            floor: info.floor,
            jitter_unit: info.jitter_unit,
        }
    }

    /// Runs one simulation step: advance, then compact or recycle, then
    /// spawn at most one new particle.
    pub fn step(&mut self, spawning: bool, rng: &mut impl RandomSource) {
        self.advance(spawning, rng);

        if !spawning {
            self.compact();
        }

        if spawning {
            self.emit(rng);
        }
    }

    fn advance(&mut self, spawning: bool, rng: &mut impl RandomSource) {
        for particle in &mut self.particles {
            particle.advance(self.jitter_unit, rng);

            if spawning && particle.position.y < self.floor {
                *particle = Particle::spawn(rng);
            }
        }
    }

    /// Stable in-place removal of every particle below the floor.
    fn compact(&mut self) {
        let floor = self.floor;
        let before = self.particles.len();

        self.particles.retain(|particle| particle.position.y >= floor);

        let removed = before - self.particles.len();
        if removed > 0 {
            log::trace!("Compacted {removed} settled particles");
        }
    }

    fn emit(&mut self, rng: &mut impl RandomSource) {
        if self.particles.len() >= self.max_particles {
            return;
        }

        self.particles.push(Particle::spawn(rng));
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn max_particles(&self) -> usize {
        self.max_particles
    }
}

#[cfg(test)]
mod tests {
    use {super::*, crate::random::ScriptedRandom};

    fn field(max_particles: usize) -> SnowField {
        SnowField::new(SnowFieldInfo {
            max_particles,
            floor: 0.02,
            jitter_unit: 0.001,
        })
    }

    fn particle_at(y: f32) -> Particle {
        Particle {
            position: glam::vec2(0.5, y),
            speed: 0.01,
            size: 1.0,
            alpha: 1.0,
        }
    }

    #[test]
    fn spawn_derives_fields_from_draws() {
        let mut rng = ScriptedRandom::new(&[42, 3, 6]);
        let particle = Particle::spawn(&mut rng);

        assert_eq!(particle.position, glam::vec2(0.42, SPAWN_HEIGHT));
        assert!((particle.size - 1.6).abs() < 1e-6);
        assert_eq!(particle.speed, particle.size * SPEED_PER_SIZE);
        assert_eq!(particle.alpha, 0.7);
    }

    #[test]
    fn drift_is_one_unit_either_way_or_none() {
        for (draw, expected) in [(0, 0.499), (1, 0.5), (2, 0.501)] {
            let mut particle = particle_at(0.5);
            particle.advance(0.001, &mut ScriptedRandom::new(&[draw]));

            assert!((particle.position.x - expected).abs() < 1e-6);
            assert!((particle.position.y - 0.49).abs() < 1e-6);
        }
    }

    #[test]
    fn fills_to_capacity_one_per_step() {
        let mut snow = field(3);
        let mut rng = ScriptedRandom::new(&[10, 2, 4, 1]);

        snow.step(true, &mut rng);
        assert_eq!(snow.len(), 1);
        assert_eq!(snow.particles()[0].position.y, SPAWN_HEIGHT);

        snow.step(true, &mut rng);
        snow.step(true, &mut rng);
        assert_eq!(snow.len(), 3);

        let oldest_speed = snow.particles()[0].speed;
        snow.step(true, &mut rng);
        assert_eq!(snow.len(), 3);

        // Created on step one, advanced on steps two to four.
        let expected = SPAWN_HEIGHT - 3.0 * oldest_speed;
        assert!((snow.particles()[0].position.y - expected).abs() < 1e-6);
    }

    #[test]
    fn count_never_decreases_while_spawning() {
        let mut snow = field(50);
        let mut rng = ScriptedRandom::new(&[7, 0, 3, 9, 1, 4, 2]);
        let mut last = 0;

        for _ in 0..2000 {
            snow.step(true, &mut rng);
            assert!(snow.len() >= last);
            assert!(snow.len() <= snow.max_particles());
            last = snow.len();
        }

        assert_eq!(snow.len(), 50);
    }

    #[test]
    fn live_particles_fall_every_step() {
        let mut snow = field(10);
        let mut rng = ScriptedRandom::new(&[5, 4, 2, 8]);

        for _ in 0..5 {
            snow.step(true, &mut rng);
        }

        let before: Vec<f32> = snow.particles().iter().map(|p| p.position.y).collect();
        snow.step(false, &mut rng);

        for (particle, y) in snow.particles().iter().zip(before) {
            assert!(particle.position.y < y);
        }
    }

    #[test]
    fn recycles_below_floor_while_spawning() {
        let mut snow = field(10);
        let mut rng = ScriptedRandom::new(&[1]);

        snow.particles = vec![particle_at(0.025), particle_at(0.5)];
        snow.step(true, &mut rng);

        assert_eq!(snow.len(), 3);
        assert_eq!(snow.particles()[0].position.y, SPAWN_HEIGHT);
        assert!(snow.particles().iter().all(|p| p.position.y >= snow.floor));
    }

    #[test]
    fn compaction_removes_adjacent_settled_particles() {
        let mut snow = field(10);
        let mut rng = ScriptedRandom::new(&[1]);

        snow.particles = vec![
            particle_at(0.5),
            particle_at(0.025),
            particle_at(0.021),
            particle_at(0.6),
            particle_at(0.022),
        ];
        snow.step(false, &mut rng);

        let heights: Vec<f32> = snow.particles().iter().map(|p| p.position.y).collect();
        assert_eq!(heights.len(), 2);
        assert!((heights[0] - 0.49).abs() < 1e-6);
        assert!((heights[1] - 0.59).abs() < 1e-6);
    }

    #[test]
    fn drains_once_spawning_stops() {
        let mut snow = field(20);
        let mut rng = ScriptedRandom::new(&[3, 1, 4, 1, 5, 9, 2, 6]);

        for _ in 0..40 {
            snow.step(true, &mut rng);
        }

        let mut last = snow.len();
        for _ in 0..2000 {
            snow.step(false, &mut rng);
            assert!(snow.len() <= last);
            assert!(snow.particles().iter().all(|p| p.position.y >= snow.floor));
            last = snow.len();
        }

        assert!(snow.is_empty());
    }

    #[test]
    fn zero_capacity_never_spawns() {
        let mut snow = field(0);
        let mut rng = ScriptedRandom::new(&[0]);

        snow.step(true, &mut rng);

        assert!(snow.is_empty());
    }
}
