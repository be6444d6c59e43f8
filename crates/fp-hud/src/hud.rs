//! Overlay controller
//!
//! Owns the overlay scene and at most one [`HandleVisual`], bound to the
//! currently selected item. Selection notifications drive the lifecycle;
//! hover/drag flags drive the color; `update` keeps the handle glued to a
//! moving item once per frame.

use std::sync::Arc;

use fp_core::{Color, Item, SharedItem};
use fp_core::constants::hud;
use glam::Vec3;
use parking_lot::Mutex;
use uuid::Uuid;

use crate::config::HudConfig;
use crate::events::{RedrawSignal, SelectionEvents};
use crate::scene::HudScene;
use crate::visual::{HandleVisual, Tintable};

/// Shared handle to the controller, for event-registry closures
pub type SharedHud = Arc<Mutex<RotationHud>>;

/// The rotation-handle overlay controller
pub struct RotationHud {
    scene: HudScene,
    selected: Option<SharedItem>,
    active: Option<Uuid>,
    rotating: bool,
    mouseover: bool,
    config: HudConfig,
    redraw: RedrawSignal,
}

impl RotationHud {
    /// Creates an idle controller with an empty overlay scene.
    pub fn new(config: HudConfig, redraw: RedrawSignal) -> Self {
        Self {
            scene: HudScene::new(),
            selected: None,
            active: None,
            rotating: false,
            mouseover: false,
            config,
            redraw,
        }
    }

    /// Wraps the controller for shared use from event closures.
    pub fn into_shared(self) -> SharedHud {
        Arc::new(Mutex::new(self))
    }

    /// Registers the controller on the host's selection notifications.
    pub fn subscribe(hud: &SharedHud, events: &mut SelectionEvents) {
        let on_selected = Arc::clone(hud);
        events
            .item_selected
            .add(move |item: &SharedItem| on_selected.lock().item_selected(item));

        let on_unselected = Arc::clone(hud);
        events
            .item_unselected
            .add(move |_: &()| on_unselected.lock().item_unselected());
    }

    /// The overlay drawing surface, for compositing into the render pass.
    pub fn scene(&self) -> &HudScene {
        &self.scene
    }

    /// The current overlay object, if an item is bound.
    pub fn active_object(&self) -> Option<&HandleVisual> {
        self.active.and_then(|id| self.scene.get(id))
    }

    /// Controller configuration.
    pub fn config(&self) -> &HudConfig {
        &self.config
    }

    /// True while a rotation drag is in progress.
    pub fn is_rotating(&self) -> bool {
        self.rotating
    }

    /// True while the pointer hovers the handle.
    pub fn is_mouseover(&self) -> bool {
        self.mouseover
    }

    /// Handles an item-selected notification.
    ///
    /// Re-selecting the bound item is a no-op. Selecting a different item
    /// tears the current handle down first, then builds a new one only when
    /// the item is rotatable and not fixed.
    pub fn item_selected(&mut self, item: &SharedItem) {
        let id = item.read().id;
        if self
            .selected
            .as_ref()
            .is_some_and(|bound| bound.read().id == id)
        {
            return;
        }

        self.reset_selected();

        let (rotatable, offset, position, rotation_y) = {
            let item = item.read();
            (
                item.rotatable(),
                self.handle_offset(&item),
                item.position,
                item.rotation_y,
            )
        };
        if !rotatable {
            return;
        }

        tracing::debug!("showing rotation handle for item {id}");
        let mut visual = HandleVisual::new(offset, self.effective_color());
        visual.position = Vec3::new(position.x, self.config.height, position.z);
        visual.rotation_y = rotation_y;

        self.active = Some(self.scene.add(visual));
        self.selected = Some(Arc::clone(item));
        self.redraw.request();
    }

    /// Handles an item-unselected notification. No-op when already idle.
    pub fn item_unselected(&mut self) {
        self.reset_selected();
    }

    /// Sets the rotation-in-progress flag and retints the handle.
    pub fn set_rotating(&mut self, rotating: bool) {
        self.rotating = rotating;
        self.apply_color();
    }

    /// Sets the pointer-hover flag and retints the handle.
    pub fn set_mouseover(&mut self, mouseover: bool) {
        self.mouseover = mouseover;
        self.apply_color();
    }

    /// Per-frame sync: copies the bound item's yaw and x/z position onto
    /// the overlay parent. No-op without an active handle.
    pub fn update(&mut self) {
        let Some(item) = &self.selected else { return };
        let Some(visual) = self.active.and_then(|id| self.scene.get_mut(id)) else {
            return;
        };

        let item = item.read();
        visual.rotation_y = item.rotation_y;
        visual.position.x = item.position.x;
        visual.position.z = item.position.z;
    }

    /// Local-space offset from the item origin to the handle tip.
    pub fn handle_offset(&self, item: &Item) -> Vec3 {
        let footprint = item.half_extents.x.max(item.half_extents.y);
        Vec3::new(0.0, 0.0, footprint + hud::OFFSET_MARGIN + self.config.distance)
    }

    fn effective_color(&self) -> Color {
        if self.mouseover || self.rotating {
            self.config.hover_color
        } else {
            self.config.idle_color
        }
    }

    fn apply_color(&mut self) {
        let color = self.effective_color();
        if let Some(visual) = self.active.and_then(|id| self.scene.get_mut(id)) {
            tracing::trace!("retinting rotation handle to {color:?}");
            visual.set_display_color(color);
        }
        self.redraw.request();
    }

    fn reset_selected(&mut self) {
        self.selected = None;
        if let Some(id) = self.active.take() {
            tracing::debug!("removing rotation handle");
            self.scene.remove(id);
            self.redraw.request();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::FRAC_PI_2;

    fn hud() -> RotationHud {
        RotationHud::new(HudConfig::default(), RedrawSignal::new())
    }

    fn rotatable_item(name: &str) -> SharedItem {
        Item::new(name).into_shared()
    }

    #[test]
    fn test_select_rotatable_item_builds_handle() {
        let mut hud = hud();
        let item = rotatable_item("sofa");

        hud.item_selected(&item);

        assert!(hud.active_object().is_some());
        assert_eq!(hud.scene().len(), 1);
    }

    #[test]
    fn test_select_fixed_or_non_rotatable_shows_nothing() {
        let mut hud = hud();

        hud.item_selected(&Item::new("column").with_fixed(true).into_shared());
        assert!(hud.active_object().is_none());

        hud.item_selected(&Item::new("rug").with_allow_rotate(false).into_shared());
        assert!(hud.active_object().is_none());
        assert!(hud.scene().is_empty());
    }

    #[test]
    fn test_unselect_tears_handle_down() {
        let mut hud = hud();
        hud.item_selected(&rotatable_item("sofa"));
        assert!(!hud.scene().is_empty());

        hud.item_unselected();
        assert!(hud.active_object().is_none());
        assert!(hud.scene().is_empty());
    }

    #[test]
    fn test_unselect_when_idle_is_noop() {
        let mut hud = hud();
        hud.item_unselected();
        assert!(hud.scene().is_empty());
    }

    #[test]
    fn test_reselection_is_idempotent() {
        let mut hud = hud();
        let item = rotatable_item("sofa");

        hud.item_selected(&item);
        let first = hud.active_object().unwrap().id;

        hud.item_selected(&item);
        let second = hud.active_object().unwrap().id;

        // Same overlay instance, no teardown/rebuild
        assert_eq!(first, second);
        assert_eq!(hud.scene().len(), 1);
    }

    #[test]
    fn test_reselection_requests_no_redraw() {
        let redraw = RedrawSignal::new();
        let mut hud = RotationHud::new(HudConfig::default(), redraw.clone());
        let item = rotatable_item("sofa");

        hud.item_selected(&item);
        assert!(redraw.take());

        // Re-selecting the bound item does no work and raises no flag
        hud.item_selected(&item);
        assert!(!redraw.is_requested());
    }

    #[test]
    fn test_switching_selection_never_leaves_two_handles() {
        let mut hud = hud();
        let a = rotatable_item("sofa");
        let b = rotatable_item("table");

        hud.item_selected(&a);
        let first = hud.active_object().unwrap().id;
        hud.item_selected(&b);
        let second = hud.active_object().unwrap().id;

        assert_ne!(first, second);
        assert_eq!(hud.scene().len(), 1);
    }

    #[test]
    fn test_switching_to_fixed_item_removes_handle() {
        let mut hud = hud();
        hud.item_selected(&rotatable_item("sofa"));
        assert!(hud.active_object().is_some());

        hud.item_selected(&Item::new("column").with_fixed(true).into_shared());
        assert!(hud.active_object().is_none());
        assert!(hud.scene().is_empty());
    }

    #[test]
    fn test_color_law() {
        let mut hud = hud();
        let idle = hud.config().idle_color;
        let hover = hud.config().hover_color;
        hud.item_selected(&rotatable_item("sofa"));

        for (rotating, mouseover) in [(false, false), (false, true), (true, false), (true, true)] {
            hud.set_rotating(rotating);
            hud.set_mouseover(mouseover);
            let expected = if rotating || mouseover { hover } else { idle };
            for part in hud.active_object().unwrap().children() {
                assert_eq!(part.material().unwrap().color, expected);
            }
        }
    }

    #[test]
    fn test_flags_without_handle_are_recorded() {
        let mut hud = hud();
        hud.set_mouseover(true);
        hud.set_rotating(true);
        assert!(hud.is_mouseover());
        assert!(hud.is_rotating());

        // A handle built afterwards comes up already in the hover color
        hud.item_selected(&rotatable_item("sofa"));
        let hover = hud.config().hover_color;
        for part in hud.active_object().unwrap().children() {
            assert_eq!(part.material().unwrap().color, hover);
        }
    }

    #[test]
    fn test_color_change_requests_redraw() {
        let redraw = RedrawSignal::new();
        let mut hud = RotationHud::new(HudConfig::default(), redraw.clone());
        hud.item_selected(&rotatable_item("sofa"));
        assert!(redraw.take());

        hud.set_mouseover(true);
        assert!(redraw.take());
    }

    #[test]
    fn test_handle_offset_magnitude() {
        let hud = hud();
        let item = Item::new("desk").with_half_extents(3.0, 5.0);
        let offset = hud.handle_offset(&item);
        assert_eq!(offset.x, 0.0);
        assert_eq!(offset.y, 0.0);
        assert_relative_eq!(offset.z, 26.4, epsilon = 1e-5);
        assert_relative_eq!(offset.length(), 26.4, epsilon = 1e-5);
    }

    #[test]
    fn test_update_tracks_moving_item() {
        let mut hud = hud();
        let item = rotatable_item("sofa");
        hud.item_selected(&item);

        {
            let mut item = item.write();
            item.position = Vec3::new(10.0, 0.0, -4.0);
            item.rotation_y = FRAC_PI_2;
        }
        hud.update();

        let visual = hud.active_object().unwrap();
        assert_eq!(visual.position.x, 10.0);
        assert_eq!(visual.position.z, -4.0);
        assert_eq!(visual.position.y, hud.config().height);
        assert_relative_eq!(visual.rotation_y, FRAC_PI_2);
    }

    #[test]
    fn test_update_without_handle_is_noop() {
        let mut hud = hud();
        hud.update();

        hud.item_selected(&Item::new("column").with_fixed(true).into_shared());
        hud.update();
        assert!(hud.scene().is_empty());
    }

    #[test]
    fn test_subscription_drives_lifecycle() {
        let hud = hud().into_shared();
        let mut events = SelectionEvents::new();
        RotationHud::subscribe(&hud, &mut events);

        let item = rotatable_item("sofa");
        events.emit_selected(&item);
        assert!(hud.lock().active_object().is_some());

        events.emit_unselected();
        assert!(hud.lock().active_object().is_none());
    }

    #[test]
    fn test_handle_sits_above_item() {
        let mut hud = hud();
        let item = Item::new("sofa");
        let shared = {
            let mut item = item;
            item.position = Vec3::new(7.0, 0.0, -2.0);
            item.into_shared()
        };
        hud.item_selected(&shared);

        let visual = hud.active_object().unwrap();
        assert_eq!(visual.position, Vec3::new(7.0, 5.0, -2.0));
    }
}
