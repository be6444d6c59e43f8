//! Global constants for fp-core
//!
//! This module centralizes the magic numbers used by the rotation-handle
//! overlay so they live in one place.

/// Rotation-handle overlay constants
pub mod hud {
    /// Fixed vertical lift of the overlay above the item origin
    pub const HEIGHT: f32 = 5.0;
    /// Distance from the item footprint to the handle tip
    pub const DISTANCE: f32 = 20.0;
    /// Extra margin added past the footprint half-extent
    pub const OFFSET_MARGIN: f32 = 1.4;

    /// Handle cone base radius
    pub const CONE_BASE_RADIUS: f32 = 5.0;
    /// Handle cone height
    pub const CONE_HEIGHT: f32 = 10.0;
    /// Number of segments for cone mesh generation
    pub const CONE_SEGMENTS: u32 = 16;

    /// Pivot sphere radius
    pub const SPHERE_RADIUS: f32 = 4.0;
    /// Number of latitude segments for the pivot sphere
    pub const SPHERE_LAT_SEGMENTS: u32 = 16;
    /// Number of longitude segments for the pivot sphere
    pub const SPHERE_LON_SEGMENTS: u32 = 16;

    /// Connecting line width in pixels
    pub const LINE_WIDTH: f32 = 3.0;

    /// Idle overlay color (white)
    pub const IDLE_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    /// Hover / active overlay color (amber, #f1c40f)
    pub const HOVER_COLOR: [f32; 4] = [
        0xf1 as f32 / 255.0,
        0xc4 as f32 / 255.0,
        0x0f as f32 / 255.0,
        1.0,
    ];
}
