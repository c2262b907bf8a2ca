//! Spritesheet animation on raylib.
//!
//! This crate exposes the sprite component, its backend seam, and the ECS
//! resources and systems of the demo for use in integration tests and as a
//! reusable library.

pub mod components;
pub mod error;
pub mod events;
pub mod game;
pub mod resources;
pub mod systems;
