//! GPU-uploadable vertex formats
//!
//! Plain `#[repr(C)]` Pod structs so the host renderer can cast tessellated
//! overlay geometry straight into a vertex buffer.

/// Vertex format for position + color geometry (lines)
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PositionColorVertex {
    /// Vertex position in world space
    pub position: [f32; 3],
    /// Vertex color (RGBA)
    pub color: [f32; 4],
}

impl PositionColorVertex {
    /// Creates a new vertex.
    pub fn new(position: [f32; 3], color: [f32; 4]) -> Self {
        Self { position, color }
    }
}

/// Vertex format for shaded meshes (cone, sphere)
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshVertex {
    /// Vertex position in world space
    pub position: [f32; 3],
    /// Vertex normal vector
    pub normal: [f32; 3],
    /// Vertex color (RGBA)
    pub color: [f32; 4],
}
