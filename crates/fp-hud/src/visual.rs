//! Composite rotation-handle visual
//!
//! One handle is a parent node with exactly three children: a line from the
//! item origin out to the handle, a cone pointing along the line, and a
//! pivot sphere at the origin. Each child carries its own color-bearing
//! material so the whole indicator can be retinted at once.

use std::f32::consts::FRAC_PI_2;

use fp_core::constants::hud;
use fp_core::primitive::{generate_cone_mesh, generate_sphere_mesh};
use fp_core::vertex::{MeshVertex, PositionColorVertex};
use fp_core::{Color, MeshData};
use glam::{Mat4, Quat, Vec3};
use uuid::Uuid;

/// Color-bearing material
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    /// Display color applied at draw time
    pub color: Color,
}

/// Typed color assignment for overlay children
pub trait Tintable {
    /// Sets the display color of this visual.
    fn set_display_color(&mut self, color: Color);
}

/// Line child: two points in parent-local space
#[derive(Debug, Clone)]
pub struct LineVisual {
    /// Line endpoints in parent-local space
    pub points: [Vec3; 2],
    /// Line width in pixels
    pub width: f32,
    /// Line material
    pub material: Material,
}

impl Tintable for LineVisual {
    fn set_display_color(&mut self, color: Color) {
        self.material.color = color;
    }
}

/// Cone child: directional tip of the handle
#[derive(Debug, Clone)]
pub struct ConeVisual {
    /// Position in parent-local space
    pub position: Vec3,
    /// Rotation in parent-local space
    pub rotation: Quat,
    /// Tessellated cone mesh
    pub mesh: MeshData,
    /// Cone material
    pub material: Material,
}

impl Tintable for ConeVisual {
    fn set_display_color(&mut self, color: Color) {
        self.material.color = color;
    }
}

/// Sphere child: pivot marker at the item origin
#[derive(Debug, Clone)]
pub struct SphereVisual {
    /// Position in parent-local space
    pub position: Vec3,
    /// Tessellated sphere mesh
    pub mesh: MeshData,
    /// Sphere material
    pub material: Material,
}

impl Tintable for SphereVisual {
    fn set_display_color(&mut self, color: Color) {
        self.material.color = color;
    }
}

/// One child of the composite handle
#[derive(Debug, Clone)]
pub enum HandlePart {
    /// Connecting line
    Line(LineVisual),
    /// Directional cone
    Cone(ConeVisual),
    /// Pivot sphere
    Sphere(SphereVisual),
}

impl HandlePart {
    /// Color-bearing material of this part, if it has one.
    pub fn material(&self) -> Option<&Material> {
        match self {
            HandlePart::Line(line) => Some(&line.material),
            HandlePart::Cone(cone) => Some(&cone.material),
            HandlePart::Sphere(sphere) => Some(&sphere.material),
        }
    }
}

impl Tintable for HandlePart {
    fn set_display_color(&mut self, color: Color) {
        match self {
            HandlePart::Line(line) => line.set_display_color(color),
            HandlePart::Cone(cone) => cone.set_display_color(color),
            HandlePart::Sphere(sphere) => sphere.set_display_color(color),
        }
    }
}

/// Flattened overlay geometry ready for vertex-buffer upload
#[derive(Debug, Clone, Default)]
pub struct HandleGeometry {
    /// Line-list vertices (consecutive pairs)
    pub line_vertices: Vec<PositionColorVertex>,
    /// Line width in pixels
    pub line_width: f32,
    /// Triangle-mesh vertices
    pub mesh_vertices: Vec<MeshVertex>,
    /// Triangle indices into `mesh_vertices`
    pub mesh_indices: Vec<u32>,
}

/// The composite rotation-handle visual
///
/// Parent transform is a position plus a yaw; children stay fixed in
/// parent-local space once built.
#[derive(Debug, Clone)]
pub struct HandleVisual {
    /// Node identifier within the overlay scene
    pub id: Uuid,
    /// Parent position in world space
    pub position: Vec3,
    /// Parent rotation around the world Y axis, in radians
    pub rotation_y: f32,
    children: Vec<HandlePart>,
}

impl HandleVisual {
    /// Builds the three-part handle for the given local handle offset.
    ///
    /// `offset` is the far end of the indicator in parent-local space; the
    /// cone sits there, rotated a quarter turn about X so its apex points
    /// outward, and the pivot sphere stays at the local origin.
    pub fn new(offset: Vec3, color: Color) -> Self {
        let material = Material { color };

        let line = LineVisual {
            points: [Vec3::ZERO, offset],
            width: hud::LINE_WIDTH,
            material,
        };

        let cone = ConeVisual {
            position: offset,
            rotation: Quat::from_rotation_x(-FRAC_PI_2),
            mesh: generate_cone_mesh(hud::CONE_BASE_RADIUS, hud::CONE_HEIGHT),
            material,
        };

        let sphere = SphereVisual {
            position: Vec3::ZERO,
            mesh: generate_sphere_mesh(hud::SPHERE_RADIUS),
            material,
        };

        Self {
            id: Uuid::new_v4(),
            position: Vec3::ZERO,
            rotation_y: 0.0,
            children: vec![
                HandlePart::Line(line),
                HandlePart::Cone(cone),
                HandlePart::Sphere(sphere),
            ],
        }
    }

    /// Children of the composite, in draw order.
    pub fn children(&self) -> &[HandlePart] {
        &self.children
    }

    /// Parent-to-world transform.
    pub fn world_transform(&self) -> Mat4 {
        Mat4::from_rotation_translation(Quat::from_rotation_y(self.rotation_y), self.position)
    }

    /// Flattens the composite into world-space vertex buffers.
    pub fn tessellate(&self) -> HandleGeometry {
        let parent = self.world_transform();
        let mut geometry = HandleGeometry::default();

        for part in &self.children {
            match part {
                HandlePart::Line(line) => {
                    geometry.line_width = line.width;
                    for p in line.points {
                        geometry.line_vertices.push(PositionColorVertex::new(
                            parent.transform_point3(p).to_array(),
                            line.material.color.to_array(),
                        ));
                    }
                }
                HandlePart::Cone(cone) => {
                    let local = Mat4::from_rotation_translation(cone.rotation, cone.position);
                    append_mesh(
                        &mut geometry,
                        &cone.mesh,
                        parent * local,
                        cone.material.color,
                    );
                }
                HandlePart::Sphere(sphere) => {
                    let local = Mat4::from_translation(sphere.position);
                    append_mesh(
                        &mut geometry,
                        &sphere.mesh,
                        parent * local,
                        sphere.material.color,
                    );
                }
            }
        }

        geometry
    }
}

impl Tintable for HandleVisual {
    /// Fans the color out to every child.
    fn set_display_color(&mut self, color: Color) {
        for part in &mut self.children {
            part.set_display_color(color);
        }
    }
}

fn append_mesh(geometry: &mut HandleGeometry, mesh: &MeshData, transform: Mat4, color: Color) {
    let (vertices, normals, indices) = mesh;
    let base = geometry.mesh_vertices.len() as u32;
    let color = color.to_array();

    for (v, n) in vertices.iter().zip(normals) {
        let position = transform.transform_point3(Vec3::from_array(*v));
        let normal = transform
            .transform_vector3(Vec3::from_array(*n))
            .normalize_or_zero();
        geometry.mesh_vertices.push(MeshVertex {
            position: position.to_array(),
            normal: normal.to_array(),
            color,
        });
    }

    geometry
        .mesh_indices
        .extend(indices.iter().map(|i| base + i));
}
