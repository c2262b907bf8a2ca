//! Debug toggle resource.
//!
//! The mere presence of this resource indicates that the debug overlay
//! should be drawn. Remove it to disable debug behavior.

use bevy_ecs::prelude::Resource;

/// Marker resource: when present, the renderer outlines sprites and prints
/// their frame indices.
#[derive(Resource, Clone, Copy)]
pub struct DebugMode {}
