//! Overlay drawing surface
//!
//! A scene root dedicated to HUD content, composited by the host on top of
//! the main scene. Only the HUD controller mutates it.

use uuid::Uuid;

use crate::visual::HandleVisual;

/// Scene root holding the overlay visuals
#[derive(Debug, Default)]
pub struct HudScene {
    objects: Vec<HandleVisual>,
}

impl HudScene {
    /// Creates an empty overlay scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a visual and returns its node id.
    pub fn add(&mut self, visual: HandleVisual) -> Uuid {
        let id = visual.id;
        self.objects.push(visual);
        id
    }

    /// Removes and returns the visual with the given id.
    pub fn remove(&mut self, id: Uuid) -> Option<HandleVisual> {
        let index = self.objects.iter().position(|v| v.id == id)?;
        Some(self.objects.remove(index))
    }

    /// Returns the visual with the given id.
    pub fn get(&self, id: Uuid) -> Option<&HandleVisual> {
        self.objects.iter().find(|v| v.id == id)
    }

    /// Returns the visual with the given id, mutably.
    pub fn get_mut(&mut self, id: Uuid) -> Option<&mut HandleVisual> {
        self.objects.iter_mut().find(|v| v.id == id)
    }

    /// Number of visuals in the scene.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// True when the scene holds no visuals.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Iterates over the visuals in draw order.
    pub fn iter(&self) -> impl Iterator<Item = &HandleVisual> {
        self.objects.iter()
    }
}
