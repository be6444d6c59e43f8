//! Cone mesh generation (apex down, base cap up)

use std::f32::consts::PI;

use super::MeshData;

/// Generate a cone mesh along the Y axis
///
/// The apex sits at `-height / 2` and the base cap at `+height / 2`,
/// matching the handle's outward-pointing tip once the visual rotates it
/// into place.
///
/// # Arguments
/// * `base_radius` - Radius of the base cap
/// * `height` - Cone height along Y
///
/// # Returns
/// (vertices, normals, indices)
pub fn generate_cone_mesh(base_radius: f32, height: f32) -> MeshData {
    use crate::constants::hud::CONE_SEGMENTS;
    generate_cone_mesh_with_segments(base_radius, height, CONE_SEGMENTS)
}

/// Generate a cone mesh with custom segment count
pub fn generate_cone_mesh_with_segments(base_radius: f32, height: f32, segments: u32) -> MeshData {
    let half_height = height / 2.0;
    let mut vertices = Vec::new();
    let mut normals = Vec::new();
    let mut indices = Vec::new();

    // Outward side normal tilts downward for a cone that widens upward
    let normal_scale = 1.0 / (height * height + base_radius * base_radius).sqrt();

    // Side surface: one apex vertex per segment for correct normals
    for i in 0..=segments {
        let theta = (i as f32 / segments as f32) * 2.0 * PI;
        let nx = height * theta.cos() * normal_scale;
        let ny = -base_radius * normal_scale;
        let nz = height * theta.sin() * normal_scale;

        // Apex vertex
        vertices.push([0.0, -half_height, 0.0]);
        normals.push([nx, ny, nz]);

        // Base rim vertex
        vertices.push([
            base_radius * theta.cos(),
            half_height,
            base_radius * theta.sin(),
        ]);
        normals.push([nx, ny, nz]);
    }

    // Side triangles
    for i in 0..segments {
        let base = i * 2;
        indices.push(base);
        indices.push(base + 1);
        indices.push(base + 3);
    }

    // Base cap center
    let cap_center_idx = vertices.len() as u32;
    vertices.push([0.0, half_height, 0.0]);
    normals.push([0.0, 1.0, 0.0]);

    // Base cap rim vertices
    let cap_rim_start = vertices.len() as u32;
    for i in 0..=segments {
        let theta = (i as f32 / segments as f32) * 2.0 * PI;
        vertices.push([
            base_radius * theta.cos(),
            half_height,
            base_radius * theta.sin(),
        ]);
        normals.push([0.0, 1.0, 0.0]);
    }

    // Base cap triangles
    for i in 0..segments {
        indices.push(cap_center_idx);
        indices.push(cap_rim_start + i + 1);
        indices.push(cap_rim_start + i);
    }

    (vertices, normals, indices)
}
