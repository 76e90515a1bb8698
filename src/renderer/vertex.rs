//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    /// Floats per vertex when flattened
    pub const FLOATS: usize = 6;

    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }
}

/// Raw bytes for uploading a vertex list to a GPU buffer
pub fn as_bytes(vertices: &[Vertex]) -> &[u8] {
    bytemuck::cast_slice(vertices)
}

/// Flat `[x, y, r, g, b, a, ...]` view for hosts without a byte API
pub fn as_floats(vertices: &[Vertex]) -> &[f32] {
    bytemuck::cast_slice(vertices)
}

/// Colors for table elements
pub mod colors {
    /// Clear color; the host fills the surface with it before drawing a scene
    pub const BACKGROUND: [f32; 4] = [20.0 / 255.0, 20.0 / 255.0, 20.0 / 255.0, 1.0];
    pub const BOARD: [f32; 4] = [40.0 / 255.0, 120.0 / 255.0, 170.0 / 255.0, 1.0];
    pub const BALL: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const PLUNGER: [f32; 4] = [200.0 / 255.0, 180.0 / 255.0, 40.0 / 255.0, 1.0];
    pub const PADDLE: [f32; 4] = [220.0 / 255.0, 90.0 / 255.0, 90.0 / 255.0, 1.0];
    pub const GUIDE: [f32; 4] = [200.0 / 255.0, 200.0 / 255.0, 200.0 / 255.0, 1.0];
}
