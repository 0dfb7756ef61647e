#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    const ATTRIBUTES: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x2,
        1 => Float32x4,
    ];

    pub fn new(position: glam::Vec2, color: [f32; 4]) -> Self {
        Self {
            position: position.to_array(),
            color,
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// Immediate-mode primitive sink, in scene coordinates.
pub trait Canvas {
    /// Filled convex polygon with per-vertex colour.
    fn polygon(&mut self, vertices: &[Vertex]);

    /// Fan around `center` through consecutive `rim` vertices.
    fn triangle_fan(&mut self, center: Vertex, rim: &[Vertex]);

    /// Square point `size` pixels wide.
    fn point(&mut self, position: glam::Vec2, size: f32, color: [f32; 4]);
}

/// Flattens primitives into a triangle list ready for upload.
pub struct MeshBuilder {
    vertices: Vec<Vertex>,
    pixel: glam::Vec2,
}

impl MeshBuilder {
    /// `width` and `height` are the surface size in pixels, used to size points.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            vertices: Vec::new(),
            pixel: glam::vec2(1.0 / width.max(1) as f32, 1.0 / height.max(1) as f32),
        }
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.pixel = glam::vec2(1.0 / width.max(1) as f32, 1.0 / height.max(1) as f32);
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }
}

impl Canvas for MeshBuilder {
    fn polygon(&mut self, vertices: &[Vertex]) {
        if let Some((first, rest)) = vertices.split_first() {
            self.triangle_fan(*first, rest);
        }
    }

    fn triangle_fan(&mut self, center: Vertex, rim: &[Vertex]) {
        for edge in rim.windows(2) {
            self.vertices.extend([center, edge[0], edge[1]]);
        }
    }

    fn point(&mut self, position: glam::Vec2, size: f32, color: [f32; 4]) {
        let half = self.pixel * size * 0.5;
        let corner = |dx: f32, dy: f32| Vertex::new(position + glam::vec2(dx, dy) * half, color);

        let (bl, br, tr, tl) = (
            corner(-1.0, -1.0),
            corner(1.0, -1.0),
            corner(1.0, 1.0),
            corner(-1.0, 1.0),
        );

        self.vertices.extend([bl, br, tr, bl, tr, tl]);
    }
}
