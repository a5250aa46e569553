//! Shape domain model
//!
//! A closed set of shape variants. Every shape has an area and a perimeter;
//! polygons additionally report how many sides they have.

use serde::Serialize;
use std::f64::consts::PI;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ShapeError {
    #[error("Unknown shape: {0}")]
    UnknownCode(char),

    #[error("{kind} dimension must be a positive number, got {value}")]
    NonPositive { kind: ShapeKind, value: f64 },

    #[error("Triangle sides {a}, {b}, {c} violate the triangle inequality")]
    TriangleInequality { a: f64, b: f64, c: f64 },
}

/// Tag identifying a shape variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ShapeKind {
    Circle,
    Rectangle,
    Square,
    Triangle,
}

impl ShapeKind {
    /// All kinds, in code-table order
    pub const ALL: [ShapeKind; 4] = [
        ShapeKind::Circle,
        ShapeKind::Rectangle,
        ShapeKind::Square,
        ShapeKind::Triangle,
    ];

    /// Returns the one-letter code used in input files
    pub fn code(&self) -> char {
        match self {
            ShapeKind::Circle => 'C',
            ShapeKind::Rectangle => 'R',
            ShapeKind::Square => 'S',
            ShapeKind::Triangle => 'T',
        }
    }

    /// Returns the human-readable type name
    pub fn name(&self) -> &'static str {
        match self {
            ShapeKind::Circle => "Circle",
            ShapeKind::Rectangle => "Rectangle",
            ShapeKind::Square => "Square",
            ShapeKind::Triangle => "Triangle",
        }
    }

    /// Number of numeric parameters expected after the code
    pub fn param_count(&self) -> usize {
        match self {
            ShapeKind::Circle | ShapeKind::Square => 1,
            ShapeKind::Rectangle => 2,
            ShapeKind::Triangle => 3,
        }
    }

    /// Side count for polygon kinds, `None` for curves
    pub fn side_count(&self) -> Option<u32> {
        match self {
            ShapeKind::Circle => None,
            ShapeKind::Rectangle | ShapeKind::Square => Some(4),
            ShapeKind::Triangle => Some(3),
        }
    }

    /// Builds a shape of this kind from positional parameters.
    ///
    /// Only the first [`param_count`](Self::param_count) values are read.
    pub fn build(&self, params: &[f64; 3]) -> Shape {
        match self {
            ShapeKind::Circle => Shape::circle(params[0]),
            ShapeKind::Rectangle => Shape::rectangle(params[0], params[1]),
            ShapeKind::Square => Shape::square(params[0]),
            ShapeKind::Triangle => Shape::triangle(params[0], params[1], params[2]),
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<char> for ShapeKind {
    type Error = ShapeError;

    fn try_from(code: char) -> Result<Self, Self::Error> {
        ShapeKind::ALL
            .into_iter()
            .find(|kind| kind.code() == code)
            .ok_or(ShapeError::UnknownCode(code))
    }
}

/// Rectangle payload, shared by the `Rectangle` and `Square` variants
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rectangle {
    pub length: f64,
    pub width: f64,
}

impl Rectangle {
    pub fn new(length: f64, width: f64) -> Self {
        Self { length, width }
    }

    /// A rectangle whose length equals its width
    pub fn square(side: f64) -> Self {
        Self {
            length: side,
            width: side,
        }
    }

    pub fn area(&self) -> f64 {
        self.length * self.width
    }

    pub fn perimeter(&self) -> f64 {
        2.0 * (self.length + self.width)
    }
}

/// A shape read from an input file
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Shape {
    Circle { radius: f64 },
    Rectangle(Rectangle),
    Square(Rectangle),
    Triangle { sides: [f64; 3] },
}

impl Shape {
    pub fn circle(radius: f64) -> Self {
        Shape::Circle { radius }
    }

    pub fn rectangle(length: f64, width: f64) -> Self {
        Shape::Rectangle(Rectangle::new(length, width))
    }

    pub fn square(side: f64) -> Self {
        Shape::Square(Rectangle::square(side))
    }

    pub fn triangle(a: f64, b: f64, c: f64) -> Self {
        Shape::Triangle { sides: [a, b, c] }
    }

    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Circle { .. } => ShapeKind::Circle,
            Shape::Rectangle(_) => ShapeKind::Rectangle,
            Shape::Square(_) => ShapeKind::Square,
            Shape::Triangle { .. } => ShapeKind::Triangle,
        }
    }

    pub fn name(&self) -> &'static str {
        self.kind().name()
    }

    pub fn area(&self) -> f64 {
        match self {
            Shape::Circle { radius } => PI * radius * radius,
            Shape::Rectangle(rect) | Shape::Square(rect) => rect.area(),
            Shape::Triangle { sides: [a, b, c] } => {
                // Heron's formula in expanded form; an impossible triangle takes the
                // square root of a negative and yields NaN (sign bit set on x86)
                0.25 * ((a + b + c) * (-a + b + c) * (a - b + c) * (a + b - c)).sqrt()
            }
        }
    }

    pub fn perimeter(&self) -> f64 {
        match self {
            Shape::Circle { radius } => 2.0 * PI * radius,
            Shape::Rectangle(rect) | Shape::Square(rect) => rect.perimeter(),
            Shape::Triangle { sides } => sides.iter().sum(),
        }
    }

    /// Returns the side count if this shape is a polygon
    pub fn side_count(&self) -> Option<u32> {
        self.kind().side_count()
    }

    /// Checks that all dimensions are positive and finite, and that
    /// triangles are non-degenerate.
    pub fn validate(&self) -> Result<(), ShapeError> {
        let dims = match *self {
            Shape::Circle { radius } => vec![radius],
            Shape::Rectangle(rect) | Shape::Square(rect) => vec![rect.length, rect.width],
            Shape::Triangle { sides } => sides.to_vec(),
        };
        for value in dims {
            self.check_positive(value)?;
        }

        if let Shape::Triangle { sides: [a, b, c] } = *self {
            if a + b <= c || a + c <= b || b + c <= a {
                return Err(ShapeError::TriangleInequality { a, b, c });
            }
        }
        Ok(())
    }

    fn check_positive(&self, value: f64) -> Result<(), ShapeError> {
        if value.is_finite() && value > 0.0 {
            Ok(())
        } else {
            Err(ShapeError::NonPositive {
                kind: self.kind(),
                value,
            })
        }
    }
}
