//! Primitive mesh generation for the overlay shapes
//!
//! Generates vertices, normals, and indices for the handle primitives:
//! - Cone (directional tip of the handle)
//! - Sphere (pivot marker)
//!
//! The connecting line is a two-point polyline and needs no tessellation.

mod cone;
mod sphere;

pub use cone::{generate_cone_mesh, generate_cone_mesh_with_segments};
pub use sphere::{generate_sphere_mesh, generate_sphere_mesh_with_segments};

/// Mesh data: vertices, normals, and triangle indices
pub type MeshData = (Vec<[f32; 3]>, Vec<[f32; 3]>, Vec<u32>);
