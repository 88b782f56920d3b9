//! Playback relocation engine: geometry, drag, slot resolution, playback
//! store, portal and overlay, composed by the surface manager.

pub mod dom_bridge;
pub mod drag;
pub mod geometry;
pub mod overlay;
pub mod paths;
pub mod playback;
pub mod portal;
pub mod slot;
pub mod surface_manager;
