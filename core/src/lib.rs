//! Core

#[macro_use]
extern crate log;

// Re-export.
pub mod base;
pub mod error;
pub mod geometry;
pub mod interaction;
pub mod primitive;
