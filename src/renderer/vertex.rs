//! Vertex type for 2D rendering

use bytemuck::{Pod, Zeroable};

/// 2D vertex with position (screen pixels until upload) and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Palette
pub mod colors {
    /// (200, 200, 200)
    pub const LIGHT_GREY: [f32; 4] = [0.784, 0.784, 0.784, 1.0];
    /// #45B3E7
    pub const ACCENT: [f32; 4] = [0.271, 0.702, 0.906, 1.0];
    /// grey12
    pub const BACKGROUND: [f32; 4] = [0.122, 0.122, 0.122, 1.0];
    /// White at roughly 100/255 alpha
    pub const SCORE_FLASH: [f32; 4] = [1.0, 1.0, 1.0, 0.39];
}
