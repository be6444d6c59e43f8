//! Rotation-handle HUD for the floorplan editor
//!
//! Drawings on top of the scene: when the host selects a rotatable item,
//! this crate shows a radial rotation indicator (line, cone, pivot sphere)
//! above it, tracks the item every frame, and recolors the indicator while
//! the pointer hovers or drags the handle.
//!
//! # Module Structure
//!
//! ```text
//! fp-hud/
//! ├── config.rs   # HudConfig (height, distance, palette)
//! ├── events.rs   # Selection callbacks and the redraw signal
//! ├── scene.rs    # HudScene, the overlay drawing surface
//! ├── visual.rs   # HandleVisual composite and its children
//! └── hud.rs      # RotationHud, the overlay controller
//! ```

pub mod config;
pub mod events;
pub mod hud;
pub mod scene;
pub mod visual;

pub use config::HudConfig;
pub use events::{Callbacks, RedrawSignal, SelectionEvents};
pub use hud::{RotationHud, SharedHud};
pub use scene::HudScene;
pub use visual::{HandleGeometry, HandlePart, HandleVisual, Material, Tintable};
