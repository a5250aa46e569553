//! CLI integration tests for the shapes binary
//!
//! Each test runs the binary in a fresh temporary directory holding a
//! `shapes.txt`, with HOME pointed at that directory so no user config
//! leaks in.

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Get a command instance for the shapes binary, isolated to `dir`
fn shapes_cmd(dir: &TempDir) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("shapes"));
    cmd.current_dir(dir.path())
        .env("HOME", dir.path())
        .env("XDG_CONFIG_HOME", dir.path().join(".config"))
        .env_remove("SHAPES_FORMAT");
    cmd
}

/// Create a temporary directory with the given shape list
fn setup_shapes(content: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("shapes.txt"), content).unwrap();
    dir
}

// =============================================================================
// End-to-end Scenarios
// =============================================================================

#[test]
fn test_circle_and_square_summary() {
    let dir = setup_shapes("C 2\nS 3\n");

    shapes_cmd(&dir)
        .assert()
        .success()
        .stdout(
            "Square\nCircle\n\n\
             Total Shapes: 2\n\
             Total Perimeter of all shapes: 24.5664\n\
             Total Polygons: 1\n\
             Average Polygon Sides: 4\n",
        )
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_unknown_code_warns_and_continues() {
    let dir = setup_shapes("X 1 2\n");

    shapes_cmd(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Shapes: 0"))
        .stdout(predicate::str::contains("Total Polygons: 0"))
        .stdout(predicate::str::contains("Average Polygon Sides: nan"))
        .stderr(predicate::str::contains("Unknown shape: X"));
}

#[test]
fn test_missing_file_fails_without_stdout() {
    let dir = TempDir::new().unwrap();

    shapes_cmd(&dir)
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Failed to open shape file"));
}

// =============================================================================
// Parsing Behavior
// =============================================================================

#[test]
fn test_sorts_all_shape_kinds_by_area() {
    // areas: 12, 6, 9, 3.14159
    let dir = setup_shapes("R 3 4\nT 3 4 5\nS 3\nC 1\n");

    let output = shapes_cmd(&dir).assert().success();
    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let names: Vec<_> = stdout.lines().take_while(|l| !l.is_empty()).collect();

    assert_eq!(names, vec!["Circle", "Triangle", "Square", "Rectangle"]);
    assert!(stdout.contains("Total Polygons: 3"));
    assert!(stdout.contains("Average Polygon Sides: 3.66667"));
}

#[test]
fn test_equal_areas_keep_file_order() {
    let dir = setup_shapes("R 2 8\nS 4\nR 1 16\n");

    let output = shapes_cmd(&dir).assert().success();
    let stdout = String::from_utf8_lossy(&output.get_output().stdout);

    assert!(stdout.starts_with("Rectangle\nSquare\nRectangle\n\n"));
}

#[test]
fn test_blank_lines_are_ignored() {
    let dir = setup_shapes("\nC 1\n   \n\nS 1\n");

    shapes_cmd(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Shapes: 2"))
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_warning_names_line_number() {
    let dir = setup_shapes("C 1\nC 2\nZ 9\n");

    shapes_cmd(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Shapes: 2"))
        .stderr(predicate::str::contains("line 3"))
        .stderr(predicate::str::contains("Unknown shape: Z"));
}

#[test]
fn test_lenient_mode_reuses_missing_parameters() {
    // Second rectangle borrows its width (3) from the first
    let dir = setup_shapes("R 2 3\nR 10\n");

    shapes_cmd(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Shapes: 2"))
        .stdout(predicate::str::contains("Total Perimeter of all shapes: 36"))
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_code_without_space_and_numeric_prefix() {
    // C2 is a circle of radius 2; "3x" reads as 3
    let dir = setup_shapes("C2\nS 3x\nX1 2\n");

    shapes_cmd(&dir)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Square\nCircle\n\n"))
        .stdout(predicate::str::contains("Total Perimeter of all shapes: 24.5664"))
        .stderr(predicate::str::contains("line 3: Unknown shape: X\n"));
}

#[test]
fn test_degenerate_triangle_sorts_last() {
    let dir = setup_shapes("T 1 1 5\nS 1\nC 10\n");

    shapes_cmd(&dir)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Square\nCircle\nTriangle\n\n"));
}

// =============================================================================
// Configuration
// =============================================================================

#[test]
fn test_strict_config_skips_invalid_lines() {
    let dir = setup_shapes("R 2 3\nR 10\nT 1 1 5\nS 2\n");
    fs::write(dir.path().join("shapes.toml"), "strict = true\n").unwrap();

    shapes_cmd(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Shapes: 2"))
        .stderr(predicate::str::contains("line 2"))
        .stderr(predicate::str::contains("triangle inequality"));
}

#[test]
fn test_config_overrides_input_path() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("data")).unwrap();
    fs::write(dir.path().join("data/list.txt"), "T 3 4 5\n").unwrap();
    fs::write(dir.path().join("shapes.toml"), "input = \"data/list.txt\"\n").unwrap();

    shapes_cmd(&dir)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Triangle\n"));
}

#[test]
fn test_invalid_config_fails() {
    let dir = setup_shapes("C 1\n");
    fs::write(dir.path().join("shapes.toml"), "strict = \"yes\"\n").unwrap();

    shapes_cmd(&dir)
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Failed to parse project config"));
}

// =============================================================================
// Output Formats
// =============================================================================

#[test]
fn test_json_output() {
    let dir = setup_shapes("C 2\nS 3\n");

    let output = shapes_cmd(&dir)
        .args(["--format", "json"])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();

    assert_eq!(json["shapes"][0]["type"], "Square");
    assert_eq!(json["shapes"][0]["sides"], 4);
    assert_eq!(json["shapes"][1]["type"], "Circle");
    assert!(json["shapes"][1]["sides"].is_null());
    assert_eq!(json["summary"]["total_shapes"], 2);
    assert_eq!(json["summary"]["total_polygons"], 1);
    assert_eq!(json["summary"]["average_polygon_sides"], 4.0);
}

#[test]
fn test_json_output_from_env() {
    let dir = setup_shapes("X 1\n");

    let output = shapes_cmd(&dir)
        .env("SHAPES_FORMAT", "json")
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["summary"]["total_shapes"], 0);
    assert!(json["summary"]["average_polygon_sides"].is_null());
}

#[test]
fn test_verbose_logs_to_stderr() {
    let dir = setup_shapes("C 1\n");

    shapes_cmd(&dir)
        .arg("--verbose")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Shapes: 1"))
        .stderr(predicate::str::contains("[verbose:load]"));
}

#[test]
fn test_rejects_path_argument() {
    let dir = setup_shapes("C 1\n");

    shapes_cmd(&dir).arg("shapes.txt").assert().failure();
}
