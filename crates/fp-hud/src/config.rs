//! HUD configuration
//!
//! Configurable settings for the rotation handle that can be serialized
//! and loaded from configuration files.

use fp_core::Color;
use fp_core::constants::hud;
use serde::{Deserialize, Serialize};

/// Rotation-handle configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HudConfig {
    /// Vertical lift of the handle above the item origin
    pub height: f32,
    /// Distance from the item footprint to the handle tip
    pub distance: f32,
    /// Handle color while idle
    pub idle_color: Color,
    /// Handle color while hovered or rotating
    pub hover_color: Color,
}

impl Default for HudConfig {
    fn default() -> Self {
        Self {
            height: hud::HEIGHT,
            distance: hud::DISTANCE,
            idle_color: Color::from(hud::IDLE_COLOR),
            hover_color: Color::from(hud::HOVER_COLOR),
        }
    }
}
