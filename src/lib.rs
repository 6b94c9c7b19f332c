//! Story Engine — choice-based text adventures.
//!
//! Loads a story graph of scenes linked by player actions, validates it,
//! and plays it through a console: numbered choices, optional password
//! gates with a fallback scene, and a pause menu for saving and loading.

pub mod config;
pub mod core;
pub mod schema;
pub mod testing;
