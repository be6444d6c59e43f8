//! Core types for the floorplan editor overlay stack.
//!
//! Renderer-agnostic building blocks shared by the HUD crate and the host
//! application:
//!
//! - [`Item`] - the selectable scene entity the HUD reads from
//! - [`Color`] - RGBA color with hex parsing
//! - [`primitive`] - mesh generation for the overlay shapes
//! - [`vertex`] - GPU-uploadable vertex types

pub mod color;
pub mod constants;
pub mod item;
pub mod primitive;
pub mod vertex;

pub use color::{Color, ColorParseError};
pub use item::{Item, SharedItem};
pub use primitive::MeshData;
pub use vertex::PositionColorVertex;
