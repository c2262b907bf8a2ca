//! ECS components for entities.
//!
//! Submodules overview:
//! - [`inputcontrolled`] – keyboard-driven movement speed
//! - [`sprite`] – spritesheet sprite with frame grid, animation and placement

pub mod inputcontrolled;
pub mod sprite;
