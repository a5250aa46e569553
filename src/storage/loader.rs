//! Shape list loader
//!
//! Input files hold one shape per line: a one-letter type code followed by
//! whitespace-separated numeric parameters, e.g. `R 3 4.5`. The code is the
//! first non-blank character, so `C2` is a circle of radius 2.
//!
//! In lenient mode a missing or malformed parameter is not an error. A token
//! with a numeric prefix (`2abc`) contributes that prefix; reading stops at
//! the first token that is not fully numeric, and the remaining parameters
//! keep whatever value an earlier line gave them (initially zero). Strict
//! mode rejects such lines, and shapes with non-positive or degenerate
//! dimensions.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use thiserror::Error;

use crate::domain::{Shape, ShapeError, ShapeKind};

/// Reason a single line was skipped
#[derive(Debug, Error, PartialEq)]
pub enum LineError {
    #[error(transparent)]
    Shape(#[from] ShapeError),

    #[error("{kind} expects {expected} parameter(s), found {found}")]
    MissingParameter {
        kind: ShapeKind,
        expected: usize,
        found: usize,
    },

    #[error("Invalid {kind} parameter '{token}'")]
    InvalidParameter { kind: ShapeKind, token: String },
}

/// A skipped line and why it was skipped
#[derive(Debug, Clone, PartialEq)]
pub struct LoadWarning {
    /// 1-based line number in the input file
    pub line: usize,
    pub message: String,
}

/// Outcome of loading a shape file
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Shapes in file order
    pub shapes: Vec<Shape>,
    pub warnings: Vec<LoadWarning>,
    /// Lines whose parameters were incomplete and filled from earlier lines
    pub incomplete_lines: Vec<usize>,
}

/// Parameter slots shared across the lines of a single load
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ParamRegister {
    values: [f64; 3],
}

/// Result of reading one non-blank line
#[derive(Debug, PartialEq)]
pub struct ParsedLine {
    pub shape: Shape,
    /// Number of parameters actually read from the line
    pub params_read: usize,
}

impl ParsedLine {
    pub fn is_complete(&self) -> bool {
        self.params_read >= self.shape.kind().param_count()
    }
}

/// Parses one line of a shape file.
///
/// Returns `Ok(None)` for blank lines.
pub fn parse_line(
    line: &str,
    register: &mut ParamRegister,
    strict: bool,
) -> Result<Option<ParsedLine>, LineError> {
    let mut chars = line.trim_start().chars();
    let code = match chars.next() {
        Some(code) => code,
        None => return Ok(None),
    };
    let kind = ShapeKind::try_from(code)?;
    let expected = kind.param_count();

    let mut tokens = chars.as_str().split_whitespace();
    let mut params_read = 0;
    for slot in register.values.iter_mut().take(expected) {
        let token = match tokens.next() {
            Some(token) => token,
            None => break,
        };
        match numeric_prefix(token) {
            Some((value, len)) if len == token.len() => {
                *slot = value;
                params_read += 1;
            }
            Some(_) | None if strict => {
                return Err(LineError::InvalidParameter {
                    kind,
                    token: token.to_string(),
                });
            }
            Some((value, _)) => {
                *slot = value;
                params_read += 1;
                break;
            }
            None => break,
        }
    }

    if strict && params_read < expected {
        return Err(LineError::MissingParameter {
            kind,
            expected,
            found: params_read,
        });
    }

    let shape = kind.build(&register.values);
    if strict {
        shape.validate()?;
    }

    Ok(Some(ParsedLine { shape, params_read }))
}

/// Parses the longest decimal number at the start of `token`.
///
/// Accepts an optional sign, digits with an optional fraction, and an
/// exponent only when digits follow it. Returns the value and the number of
/// bytes consumed.
fn numeric_prefix(token: &str) -> Option<(f64, usize)> {
    let bytes = token.as_bytes();
    let digits_from = |start: usize| {
        bytes[start..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let int_digits = digits_from(end);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = digits_from(end + 1);
        end += 1 + frac_digits;
    }
    if int_digits + frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = digits_from(exp_end);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    token[..end].parse().ok().map(|value| (value, end))
}

/// Loads shapes from a text file
pub struct ShapeLoader {
    path: PathBuf,
    strict: bool,
}

impl ShapeLoader {
    /// Creates a lenient loader for the given path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            strict: false,
        }
    }

    /// Enables or disables strict validation
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Returns the path of the input file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads every line of the file.
    ///
    /// Failing to open or read the file is an error; bad lines are not.
    pub fn load(&self) -> Result<LoadReport> {
        let file = File::open(&self.path)
            .with_context(|| format!("Failed to open shape file: {}", self.path.display()))?;
        let reader = BufReader::new(file);

        let mut report = LoadReport::default();
        let mut register = ParamRegister::default();

        for (line_num, line) in reader.lines().enumerate() {
            let line_num = line_num + 1;
            let line = line.with_context(|| {
                format!("Failed to read line {} of {}", line_num, self.path.display())
            })?;

            match parse_line(&line, &mut register, self.strict) {
                Ok(Some(parsed)) => {
                    if !parsed.is_complete() {
                        report.incomplete_lines.push(line_num);
                    }
                    report.shapes.push(parsed.shape);
                }
                Ok(None) => {}
                Err(e) => report.warnings.push(LoadWarning {
                    line: line_num,
                    message: e.to_string(),
                }),
            }
        }

        Ok(report)
    }
}
