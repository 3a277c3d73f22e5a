//! Spatial data structures and grid manipulation
//!
//! This module contains spatial-related functionality including:
//! - Grid coordinates, cardinal directions and axes
//! - Road tile types and their open sides
//! - The track grid with seed template and row/column growth

/// Directions, axes and integer grid coordinates
pub mod direction;
/// Track grid storage and growth
pub mod grid;
/// Road tile types
pub mod tiles;

pub use direction::{Axis, Direction, Point};
pub use grid::{GrowthReport, TrackGrid};
pub use tiles::TileType;
