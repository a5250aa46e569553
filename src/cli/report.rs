//! Report rendering
//!
//! Text output lists one type name per shape, then a blank line and the
//! summary. Numbers use six significant digits in `%g` style (`24.5664`,
//! `4`, `1e+06`, `nan`).

use anyhow::Result;
use serde::Serialize;

use super::output::Output;
use crate::domain::{Shape, ShapeStats};

const PRECISION: usize = 6;

/// Per-shape entry in JSON output
#[derive(Debug, Serialize)]
pub struct ShapeEntry {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub area: f64,
    pub perimeter: f64,
    pub sides: Option<u32>,
}

impl From<&Shape> for ShapeEntry {
    fn from(shape: &Shape) -> Self {
        Self {
            kind: shape.name(),
            area: shape.area(),
            perimeter: shape.perimeter(),
            sides: shape.side_count(),
        }
    }
}

/// Summary block; non-finite values serialize as `null`
#[derive(Debug, Serialize)]
pub struct Summary {
    pub total_shapes: usize,
    pub total_perimeter: f64,
    pub total_polygons: u32,
    pub total_polygon_sides: u32,
    pub average_polygon_sides: f64,
}

impl From<&ShapeStats> for Summary {
    fn from(stats: &ShapeStats) -> Self {
        Self {
            total_shapes: stats.total_shapes,
            total_perimeter: stats.total_perimeter,
            total_polygons: stats.total_polygons,
            total_polygon_sides: stats.total_polygon_sides,
            average_polygon_sides: stats.average_polygon_sides(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Report {
    pub shapes: Vec<ShapeEntry>,
    pub summary: Summary,
}

impl Report {
    /// Builds a report from shapes already sorted by area
    pub fn new(sorted: &[Shape], stats: &ShapeStats) -> Self {
        Self {
            shapes: sorted.iter().map(ShapeEntry::from).collect(),
            summary: Summary::from(stats),
        }
    }

    /// Summary lines in text form
    pub fn summary_lines(&self) -> Vec<String> {
        let s = &self.summary;
        vec![
            format!("Total Shapes: {}", s.total_shapes),
            format!(
                "Total Perimeter of all shapes: {}",
                format_number(s.total_perimeter)
            ),
            format!("Total Polygons: {}", s.total_polygons),
            format!(
                "Average Polygon Sides: {}",
                format_number(s.average_polygon_sides)
            ),
        ]
    }

    pub fn print(&self, output: &Output) -> Result<()> {
        if output.is_json() {
            return output.data(self);
        }

        for entry in &self.shapes {
            output.line(entry.kind);
        }
        output.blank();
        for line in self.summary_lines() {
            output.line(&line);
        }
        Ok(())
    }
}

/// Formats a float with six significant digits, `%g` style
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    // Round to the target precision first; the exponent may shift (9.999995 -> 1e1)
    let sci = format!("{:.*e}", PRECISION - 1, value);
    let (mantissa, exp) = match sci.split_once('e') {
        Some((m, e)) => match e.parse::<i32>() {
            Ok(exp) => (m, exp),
            Err(_) => return value.to_string(),
        },
        None => return value.to_string(),
    };

    if exp < -4 || exp >= PRECISION as i32 {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_fraction(mantissa), sign, exp.abs())
    } else {
        let decimals = (PRECISION as i32 - 1 - exp) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}
