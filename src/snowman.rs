#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    pub const WHITE: Colour = Colour::new(255, 255, 255);
    pub const GREY: Colour = Colour::new(130, 151, 173);
    pub const BLACK: Colour = Colour::new(0, 0, 0);
    pub const ORANGE: Colour = Colour::new(245, 127, 42);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn rgba(self, alpha: f32) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            alpha,
        ]
    }
}

/// Filled circle drawn as a fan, graded from `inner` at the centre to
/// `outer` at the rim. Few segments give a polygon.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    pub center: glam::Vec2,
    pub radius: f32,
    pub segments: u32,
    pub inner: Colour,
    pub outer: Colour,
}

impl Circle {
    const fn new(x: f32, y: f32, radius: f32, segments: u32, inner: Colour, outer: Colour) -> Self {
        Self {
            center: glam::Vec2::new(x, y),
            radius,
            segments,
            inner,
            outer,
        }
    }

    pub fn raised(self, offset: f32) -> Self {
        Self {
            center: self.center + glam::Vec2::Y * offset,
            ..self
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum JumpState {
    Idle,
    Jumping { elapsed: u32 },
}

/// Parabolic hop: zero displacement at both ends, `height` at the midpoint.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Jump {
    state: JumpState,
    duration: u32,
    height: f32,
}

impl Jump {
    pub fn new(duration: u32, height: f32) -> Self {
        Self {
            state: JumpState::Idle,
            duration,
            height,
        }
    }

    /// Starts a jump. Returns `false` and changes nothing if one is
    /// already under way.
    pub fn trigger(&mut self) -> bool {
        if self.is_jumping() || self.duration == 0 {
            return false;
        }

        self.state = JumpState::Jumping { elapsed: 0 };
        true
    }

    pub fn step(&mut self) {
        if let JumpState::Jumping { elapsed } = self.state {
            let elapsed = elapsed + 1;

            self.state = if elapsed >= self.duration {
                JumpState::Idle
            } else {
                JumpState::Jumping { elapsed }
            };
        }
    }

    pub fn offset(&self) -> f32 {
        match self.state {
            JumpState::Idle => 0.0,
            JumpState::Jumping { elapsed } => {
                let t = 2.0 * elapsed as f32 / self.duration as f32 - 1.0;
                self.height * (1.0 - t * t)
            }
        }
    }

    pub fn state(&self) -> JumpState {
        self.state
    }

    pub fn is_jumping(&self) -> bool {
        matches!(self.state, JumpState::Jumping { .. })
    }
}

pub const SNOWMAN_PARTS: [Circle; 6] = [
    // Body
    Circle::new(0.5, 0.3, 0.1, 100, Colour::WHITE, Colour::GREY),
    Circle::new(0.5, 0.42, 0.08, 100, Colour::WHITE, Colour::GREY),
    Circle::new(0.5, 0.52, 0.06, 100, Colour::WHITE, Colour::GREY),
    // Eyes and nose
    Circle::new(0.48, 0.55, 0.01, 50, Colour::BLACK, Colour::BLACK),
    Circle::new(0.52, 0.55, 0.01, 50, Colour::BLACK, Colour::BLACK),
    Circle::new(0.5, 0.52, 0.012, 7, Colour::ORANGE, Colour::ORANGE),
];

/// Rigid figure; the jump moves every part by the same amount.
pub struct Snowman {
    parts: [Circle; 6],
    jump: Jump,
}

impl Snowman {
    pub fn new(jump: Jump) -> Self {
        Self {
            parts: SNOWMAN_PARTS,
            jump,
        }
    }

    pub fn step(&mut self) {
        self.jump.step();
    }

    pub fn jump(&mut self) -> bool {
        self.jump.trigger()
    }

    pub fn jump_state(&self) -> JumpState {
        self.jump.state()
    }

    pub fn offset(&self) -> f32 {
        self.jump.offset()
    }

    pub fn parts(&self) -> impl Iterator<Item = Circle> + '_ {
        let offset = self.offset();
        self.parts.iter().map(move |part| part.raised(offset))
    }
}
