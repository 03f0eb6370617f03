//! A small "Space Invaders" clone: a player ship slides along the bottom of
//! an 800×600 window and fires a single bullet at six descending enemies.
//!
//! The lib holds everything that runs without a window: entity data and the
//! pure frame-update logic (`entities`, `compute`), the procedural fallback
//! graphics (`placeholder`), and the asset provider (`assets`).  The game
//! driver and all drawing live in the `space_invader` binary.

pub mod assets;
pub mod compute;
pub mod entities;
pub mod placeholder;
