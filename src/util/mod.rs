//! Shared utility helpers.

pub mod error;

pub use error::{LaserError, Result as LaserResult};
