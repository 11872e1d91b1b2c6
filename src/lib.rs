//! Library entry point.
//!
//! Gameplay simulation for a side-scrolling shooter: player action locks,
//! enemy patrol/chase/attack behaviour, a fixed-size projectile pool, combat
//! resolution and timed pickups.
//!
//! Integration tests in `tests/` are compiled as separate crates.
//! A `lib.rs` gives them a stable public API surface to import.

pub mod common;
pub mod game;
pub mod plugins;
