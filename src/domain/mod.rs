//! Domain models for the shape statistics tool
//!
//! Contains the shape model and aggregation logic without any I/O concerns.

mod shape;
mod stats;

pub use shape::{Rectangle, Shape, ShapeError, ShapeKind};
pub use stats::{sort_by_area, ShapeStats};
