//! Engine systems.
//!
//! Submodules overview
//! - [`animation`] – advance sprite animations by the frame delta
//! - [`input`] – read hardware input and update [`crate::resources::input::InputState`]
//! - [`render`] – draw sprites and the debug overlay using raylib
//! - [`spritecontroller`] – move sprites and switch rows from input state
//! - [`time`] – update simulation time and delta
//! - [`windowtitle`] – show frame timing in the window title

pub mod animation;
pub mod input;
pub mod render;
pub mod spritecontroller;
pub mod time;
pub mod windowtitle;
