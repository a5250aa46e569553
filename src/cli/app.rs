//! Main CLI application structure

use anyhow::Result;
use clap::Parser;

use super::output::{Output, OutputFormat};
use super::report::Report;
use crate::domain::{sort_by_area, ShapeStats};
use crate::storage::{Config, ShapeLoader};

#[derive(Parser)]
#[command(name = "shapes")]
#[command(author, version, about = "Sort shapes by area and summarize their perimeters and sides")]
pub struct Cli {
    /// Output format (defaults to the global config, then text)
    #[arg(long, short = 'f', env = "SHAPES_FORMAT")]
    pub format: Option<OutputFormat>,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;

    let format = cli
        .format
        .unwrap_or_else(|| config.global.default_format.into());
    let output = Output::new(format, cli.verbose);

    output.verbose(&format!(
        "Project directory: {}",
        config.project_dir.display()
    ));
    summarize(&config, &output)?;
    output.verbose("Command completed successfully");
    Ok(())
}

/// Loads the configured shape list and prints the sorted listing and summary
pub fn summarize(config: &Config, output: &Output) -> Result<()> {
    let loader = ShapeLoader::new(config.input_path()).strict(config.project.strict);
    output.verbose_ctx(
        "load",
        &format!(
            "Reading {} (strict={})",
            loader.path().display(),
            config.project.strict
        ),
    );

    let report = loader.load()?;
    output.verbose_ctx(
        "load",
        &format!(
            "Loaded {} shapes, skipped {} lines",
            report.shapes.len(),
            report.warnings.len()
        ),
    );

    for warning in &report.warnings {
        output.warning(&format!("line {}: {}", warning.line, warning.message));
    }
    for line in &report.incomplete_lines {
        output.verbose_ctx(
            "load",
            &format!("Line {} is missing parameters; reused earlier values", line),
        );
    }

    let mut shapes = report.shapes;
    sort_by_area(&mut shapes);
    let stats = ShapeStats::aggregate(&shapes);
    output.verbose_ctx(
        "stats",
        &format!(
            "{} polygons with {} sides in total",
            stats.total_polygons, stats.total_polygon_sides
        ),
    );

    Report::new(&shapes, &stats).print(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_flags() {
        let cli = Cli::try_parse_from(["shapes", "--format", "json", "-v"]).unwrap();
        assert_eq!(cli.format, Some(OutputFormat::Json));
        assert!(cli.verbose);
    }

    #[test]
    fn rejects_positional_arguments() {
        assert!(Cli::try_parse_from(["shapes", "other.txt"]).is_err());
    }
}
