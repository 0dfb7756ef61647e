//! Read-only drawing pass over the scene.
//!
//! Nothing here mutates simulation state; every frame is a pure function of
//! the [`Scene`] it is handed.

use {
    crate::{
        canvas::{Canvas, Vertex},
        scene::{Ground, Scene},
        snowman::{Circle, Colour},
    },
    std::f32::consts::TAU,
};

const SKY_LOW: Colour = Colour::new(118, 186, 251);
const SKY_HIGH: Colour = Colour::new(6, 130, 195);
const SNOW_DEEP: Colour = Colour::new(255, 250, 253);
const SNOW_SURFACE: Colour = Colour::new(167, 191, 219);

pub fn draw_scene(scene: &Scene, canvas: &mut impl Canvas) {
    draw_sky(canvas);
    draw_ground(scene.ground(), canvas);

    for part in scene.snowman().parts() {
        draw_circle(&part, canvas);
    }

    if scene.snow().is_empty() {
        return;
    }

    for particle in scene.snow().particles() {
        canvas.point(
            particle.position,
            particle.size,
            Colour::WHITE.rgba(particle.alpha),
        );
    }
}

fn draw_sky(canvas: &mut impl Canvas) {
    let low = SKY_LOW.rgba(1.0);
    let high = SKY_HIGH.rgba(1.0);

    canvas.polygon(&[
        Vertex::new(glam::vec2(0.0, 0.0), low),
        Vertex::new(glam::vec2(1.0, 0.0), low),
        Vertex::new(glam::vec2(1.0, 1.0), high),
        Vertex::new(glam::vec2(0.0, 1.0), high),
    ]);
}

fn draw_ground(ground: &Ground, canvas: &mut impl Canvas) {
    let deep = SNOW_DEEP.rgba(1.0);
    let surface = SNOW_SURFACE.rgba(1.0);

    let mut outline = vec![
        Vertex::new(glam::vec2(1.0, 0.0), deep),
        Vertex::new(glam::vec2(0.0, 0.0), deep),
    ];
    outline.extend(ground.outline.iter().map(|&p| Vertex::new(p, surface)));

    canvas.polygon(&outline);
}

fn draw_circle(circle: &Circle, canvas: &mut impl Canvas) {
    let step = TAU / circle.segments.max(3) as f32;
    let outer = circle.outer.rgba(1.0);

    let rim: Vec<Vertex> = (0..=circle.segments.max(3))
        .map(|i| {
            let angle = i as f32 * step;
            let offset = glam::vec2(angle.cos(), angle.sin()) * circle.radius;
            Vertex::new(circle.center + offset, outer)
        })
        .collect();

    canvas.triangle_fan(Vertex::new(circle.center, circle.inner.rgba(1.0)), &rim);
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::{config::SceneConfig, input_handler::Action, random::ScriptedRandom},
    };

    #[derive(Debug, PartialEq)]
    enum Call {
        Polygon(usize),
        Fan(glam::Vec2, usize),
        Point(glam::Vec2),
    }

    #[derive(Default)]
    struct Recorder {
        calls: Vec<Call>,
    }

    impl Canvas for Recorder {
        fn polygon(&mut self, vertices: &[Vertex]) {
            self.calls.push(Call::Polygon(vertices.len()));
        }

        fn triangle_fan(&mut self, center: Vertex, rim: &[Vertex]) {
            self.calls
                .push(Call::Fan(glam::Vec2::from_array(center.position), rim.len()));
        }

        fn point(&mut self, position: glam::Vec2, _size: f32, _color: [f32; 4]) {
            self.calls.push(Call::Point(position));
        }
    }

    fn snowy_scene() -> (Scene, ScriptedRandom) {
        let config = SceneConfig {
            max_particles: 4,
            ..Default::default()
        };
        let mut rng = ScriptedRandom::new(&[10, 20, 30, 2, 7]);
        let mut scene = Scene::new(&config, &mut rng);

        scene.apply(Action::ToggleSnow);
        for _ in 0..6 {
            scene.step(&mut rng);
        }

        (scene, rng)
    }

    #[test]
    fn draws_background_figure_then_snow() {
        let (scene, _) = snowy_scene();
        let mut recorder = Recorder::default();

        draw_scene(&scene, &mut recorder);

        assert_eq!(recorder.calls.len(), 2 + 6 + 4);
        assert_eq!(recorder.calls[0], Call::Polygon(4));
        assert_eq!(recorder.calls[1], Call::Polygon(6));
        assert_eq!(recorder.calls[2], Call::Fan(glam::vec2(0.5, 0.3), 101));
        assert_eq!(recorder.calls[7], Call::Fan(glam::vec2(0.5, 0.52), 8));
        assert!(matches!(recorder.calls[8], Call::Point(_)));
    }

    #[test]
    fn jump_offset_moves_the_figure() {
        let (mut scene, mut rng) = snowy_scene();
        scene.apply(Action::Jump);
        for _ in 0..24 {
            scene.step(&mut rng);
        }

        let mut recorder = Recorder::default();
        draw_scene(&scene, &mut recorder);

        match recorder.calls[2] {
            Call::Fan(center, _) => assert!((center.y - 0.4).abs() < 1e-6),
            ref other => panic!("expected body fan, got {other:?}"),
        }
    }

    #[test]
    fn drawing_twice_is_identical() {
        let (scene, _) = snowy_scene();
        let snapshot = scene.snow().particles().to_vec();

        let mut first = Recorder::default();
        let mut second = Recorder::default();
        draw_scene(&scene, &mut first);
        draw_scene(&scene, &mut second);

        assert_eq!(first.calls, second.calls);
        assert_eq!(scene.snow().particles(), snapshot.as_slice());
    }

    #[test]
    fn circle_rim_closes() {
        let circle = Circle {
            center: glam::vec2(0.5, 0.5),
            radius: 0.1,
            segments: 7,
            inner: Colour::ORANGE,
            outer: Colour::ORANGE,
        };
        let mut mesh = crate::canvas::MeshBuilder::new(100, 100);

        draw_circle(&circle, &mut mesh);

        let vertices = mesh.vertices();
        assert_eq!(vertices.len(), 7 * 3);
        let first = glam::Vec2::from_array(vertices[1].position);
        let last = glam::Vec2::from_array(vertices[vertices.len() - 1].position);
        assert!(first.distance(last) < 1e-5);
    }
}
