//! Visual-side types shared by the frontends.
//!
//! These types avoid platform APIs so the native (wgpu) and web (Canvas2D)
//! frontends map world space to their surfaces the same way.

use glam::{DVec2, Mat4, Vec2};

/// Fits a square world window of `[-half_extent, half_extent]` into a surface,
/// widening the longer axis so world units stay square.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub half_extent: f32,
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(half_extent: f32, width: u32, height: u32) -> Self {
        Self {
            half_extent,
            width,
            height,
        }
    }

    pub fn aspect(&self) -> f32 {
        self.width.max(1) as f32 / self.height.max(1) as f32
    }

    /// Visible half-width and half-height in world units.
    pub fn half_extents(&self) -> Vec2 {
        let aspect = self.aspect();
        if aspect >= 1.0 {
            Vec2::new(self.half_extent * aspect, self.half_extent)
        } else {
            Vec2::new(self.half_extent, self.half_extent / aspect)
        }
    }

    /// Orthographic world-to-clip matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        let ext = self.half_extents();
        Mat4::orthographic_rh(-ext.x, ext.x, -ext.y, ext.y, -1.0, 1.0)
    }

    /// World position to surface pixels, origin top-left, y down.
    pub fn to_pixels(&self, world: DVec2) -> Vec2 {
        let ext = self.half_extents();
        let u = world.x as f32 / ext.x * 0.5 + 0.5;
        let v = 0.5 - world.y as f32 / ext.y * 0.5;
        Vec2::new(u * self.width as f32, v * self.height as f32)
    }

    /// World length to pixels.
    pub fn scale_to_pixels(&self, length: f32) -> f32 {
        length / (2.0 * self.half_extents().y) * self.height as f32
    }
}

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LineVertex {
    pub pos: [f32; 2],
    pub color: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Uniforms {
    pub view_proj: [[f32; 4]; 4],
}

pub fn path_vertices<'a, I>(points: I, color: [f32; 4]) -> impl Iterator<Item = LineVertex> + 'a
where
    I: IntoIterator<Item = &'a DVec2>,
    I::IntoIter: 'a,
{
    points.into_iter().map(move |p| LineVertex {
        pos: p.as_vec2().to_array(),
        color,
    })
}

/// Two triangles covering a square marker centered on `center`.
pub fn dot_quad(center: DVec2, radius: f32, color: [f32; 4]) -> [LineVertex; 6] {
    let c = center.as_vec2();
    let corner = |dx: f32, dy: f32| LineVertex {
        pos: [c.x + dx * radius, c.y + dy * radius],
        color,
    };
    [
        corner(-1.0, -1.0),
        corner(1.0, -1.0),
        corner(1.0, 1.0),
        corner(-1.0, -1.0),
        corner(1.0, 1.0),
        corner(-1.0, 1.0),
    ]
}
