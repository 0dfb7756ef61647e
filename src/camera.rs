/// Fixed orthographic view of the normalized scene.
///
/// The scene always spans `0..1` on both axes whatever the window size, so a
/// resize only changes how many pixels a scene unit covers.
pub struct Camera {
    projection: glam::Mat4,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(0.0, 1.0, 0.0, 1.0)
    }
}

impl Camera {
    pub fn new(left: f32, right: f32, bottom: f32, top: f32) -> Self {
        Self {
            projection: Self::orthographic(left, right, bottom, top),
        }
    }

    pub fn view_proj(&self) -> glam::Mat4 {
        self.projection
    }

    fn orthographic(left: f32, right: f32, bottom: f32, top: f32) -> glam::Mat4 {
        glam::Mat4::orthographic_rh(left, right, bottom, top, -1.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_unit_square_to_clip_space() {
        let camera = Camera::default();
        let project = |x: f32, y: f32| camera.view_proj().project_point3(glam::vec3(x, y, 0.0));

        assert!(project(0.0, 0.0).truncate().abs_diff_eq(glam::vec2(-1.0, -1.0), 1e-6));
        assert!(project(1.0, 1.0).truncate().abs_diff_eq(glam::vec2(1.0, 1.0), 1e-6));
        assert!(project(0.5, 0.5).truncate().abs_diff_eq(glam::Vec2::ZERO, 1e-6));
    }
}
