//! Selectable item (furniture/entity) model
//!
//! The HUD only ever reads items; all mutation happens in the host editor.

use std::sync::Arc;

use glam::{Vec2, Vec3};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Shared handle to an item, owned by the host scene
pub type SharedItem = Arc<RwLock<Item>>;

/// An editable scene item that can be selected and rotated
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    pub id: Uuid,
    pub name: String,
    /// World-space position of the item origin
    pub position: Vec3,
    /// Rotation around the world Y axis, in radians
    pub rotation_y: f32,
    /// Footprint half-extents on the X and Z axes
    pub half_extents: Vec2,
    /// Whether the item may be rotated by the user
    pub allow_rotate: bool,
    /// Fixed items cannot be moved or rotated
    pub fixed: bool,
}

impl Item {
    /// Create a new item at the origin
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            position: Vec3::ZERO,
            rotation_y: 0.0,
            half_extents: Vec2::ONE,
            allow_rotate: true,
            fixed: false,
        }
    }

    /// Set the footprint half-extents
    pub fn with_half_extents(mut self, x: f32, z: f32) -> Self {
        self.half_extents = Vec2::new(x, z);
        self
    }

    /// Mark the item as non-rotatable
    pub fn with_allow_rotate(mut self, allow: bool) -> Self {
        self.allow_rotate = allow;
        self
    }

    /// Mark the item as fixed in place
    pub fn with_fixed(mut self, fixed: bool) -> Self {
        self.fixed = fixed;
        self
    }

    /// Wrap the item in a shared handle
    pub fn into_shared(self) -> SharedItem {
        Arc::new(RwLock::new(self))
    }

    /// True when the rotation handle should be shown for this item
    pub fn rotatable(&self) -> bool {
        self.allow_rotate && !self.fixed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_item_defaults() {
        let item = Item::new("chair");
        assert_eq!(item.position, Vec3::ZERO);
        assert_eq!(item.rotation_y, 0.0);
        assert!(item.rotatable());
    }

    #[test]
    fn test_rotatable_flags() {
        assert!(!Item::new("wall").with_allow_rotate(false).rotatable());
        assert!(!Item::new("column").with_fixed(true).rotatable());
        assert!(
            !Item::new("door")
                .with_allow_rotate(false)
                .with_fixed(true)
                .rotatable()
        );
    }
}
