//! Shape statistics - area, perimeter and side-count summaries
//!
//! Reads a list of circles, rectangles, squares and triangles from a text
//! file, sorts them by area and reports total perimeter, polygon count and
//! average polygon side count.

pub mod domain;
pub mod storage;
pub mod cli;

pub use domain::{Shape, ShapeKind, ShapeStats};
