use clap::{Parser, ValueEnum};
use lasergrid::{load_grid, Hit, LaserPlanner, PlanConfig, Placement};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const SCHEMA_JSON: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.schema.json"));
const EXAMPLE_JSON: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.example.json"));

#[derive(Parser, Debug)]
#[command(author, version, about = "Place three-way lasers on a grid")]
struct Cli {
    /// Path to a JSON configuration file.
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Grid file; overrides `grid_path` from the config.
    #[arg(short, long, value_name = "FILE")]
    grid: Option<PathBuf>,
    /// Number of lasers to place; overrides `lasers` from the config.
    #[arg(short = 'n', long, allow_negative_numbers = true)]
    lasers: Option<i64>,
    /// Output format.
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,
    /// Write the report to a file instead of stdout.
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
    /// Score grid rows in parallel.
    #[arg(long)]
    parallel: bool,
    /// Print the JSON schema and exit.
    #[arg(long)]
    print_schema: bool,
    /// Print an example config and exit.
    #[arg(long)]
    print_example: bool,
    /// Enable tracing output.
    #[arg(long)]
    trace: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct Config {
    grid_path: Option<PathBuf>,
    lasers: Option<i64>,
    output_path: Option<PathBuf>,
    format: OutputFormat,
    parallel: bool,
}

impl Config {
    /// Applies command-line values on top of the file config.
    fn merge_cli(mut self, cli: &Cli) -> Self {
        if let Some(path) = &cli.grid {
            self.grid_path = Some(path.clone());
        }
        if let Some(lasers) = cli.lasers {
            self.lasers = Some(lasers);
        }
        if let Some(path) = &cli.output {
            self.output_path = Some(path.clone());
        }
        if let Some(format) = cli.format {
            self.format = format;
        }
        self.parallel |= cli.parallel;
        self
    }

    /// Rejects values that can never produce a placement.
    fn validate(&self) -> Result<(), String> {
        if self
            .grid_path
            .as_ref()
            .is_some_and(|path| path.as_os_str().is_empty())
        {
            return Err("grid_path must not be empty".into());
        }
        if let Some(lasers) = self.lasers.filter(|&lasers| lasers < 1) {
            return Err(format!("lasers must be at least 1, got {lasers}"));
        }
        Ok(())
    }
}

#[derive(Debug, Serialize)]
struct PlacementRecord {
    column: usize,
    row: usize,
    score: i64,
    facing: Option<&'static str>,
}

impl From<&Hit> for PlacementRecord {
    fn from(hit: &Hit) -> Self {
        Self {
            column: hit.column,
            row: hit.row,
            score: hit.score,
            facing: hit.facing.map(|facing| facing.as_str()),
        }
    }
}

#[derive(Debug, Serialize)]
struct Output {
    requested: usize,
    available: usize,
    clamped: bool,
    placements: Vec<PlacementRecord>,
}

impl From<&Placement> for Output {
    fn from(placement: &Placement) -> Self {
        Self {
            requested: placement.requested(),
            available: placement.available(),
            clamped: placement.capacity_exceeded().is_some(),
            placements: placement.hits().iter().map(PlacementRecord::from).collect(),
        }
    }
}

fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, message: &str) -> io::Result<String> {
    write!(out, "{message}")?;
    out.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_owned())
}

fn render_text(placement: &Placement) -> String {
    let mut text = String::new();
    if let Some(available) = placement.capacity_exceeded() {
        text.push_str(&format!("you can pass only {available} lasers\n"));
        text.push_str(&format!("{available} laser placements would be: \n"));
    }
    for hit in placement.hits() {
        text.push_str(&format!("{hit}\n"));
    }
    text
}

fn render(placement: &Placement, format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => Ok(render_text(placement)),
        OutputFormat::Json => serde_json::to_string_pretty(&Output::from(placement)),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.trace {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env().add_directive("lasergrid=info".parse()?))
            .with_target(false)
            .with_writer(io::stderr)
            .init();
    }

    if cli.print_schema {
        println!("{SCHEMA_JSON}");
        return Ok(());
    }
    if cli.print_example {
        println!("{EXAMPLE_JSON}");
        return Ok(());
    }

    let config = match &cli.config {
        Some(path) => serde_json::from_str::<Config>(&fs::read_to_string(path)?)?,
        None => Config::default(),
    }
    .merge_cli(&cli);
    config.validate()?;

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut stdout = io::stdout();

    let grid_path = match config.grid_path {
        Some(path) => path,
        None => PathBuf::from(prompt(&mut input, &mut stdout, "Please enter the file name: ")?),
    };
    let grid = load_grid(&grid_path)?;
    tracing::debug!(path = %grid_path.display(), size = grid.size(), "loaded grid");
    let lasers = match config.lasers {
        Some(lasers) => lasers,
        None => prompt(&mut input, &mut stdout, "Number of lasers to place: ")?.parse::<i64>()?,
    };

    let planner = LaserPlanner::new(&grid).with_config(PlanConfig {
        parallel: config.parallel,
    });
    let placement = planner.plan(lasers)?;
    let report = render(&placement, config.format)?;

    match config.output_path {
        Some(path) => fs::write(path, report)?,
        None => print!("{report}"),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{prompt, render, Config, OutputFormat};
    use lasergrid::{place_lasers, Grid};

    fn grid_3x3() -> Grid {
        Grid::from_rows([[1i64, 2, 3], [4, 5, 6], [7, 8, 9]]).unwrap()
    }

    #[test]
    fn text_report_lists_best_first() {
        let placement = place_lasers(&grid_3x3(), 2).unwrap();
        let text = render(&placement, OutputFormat::Text).unwrap();
        assert_eq!(text, "(1, 2)   facing north\n(1, 1)   facing south\n");
    }

    #[test]
    fn text_report_announces_clamp() {
        let placement = place_lasers(&grid_3x3(), 9).unwrap();
        let text = render(&placement, OutputFormat::Text).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("you can pass only 5 lasers"));
        assert_eq!(lines.next(), Some("5 laser placements would be: "));
        assert_eq!(lines.count(), 5);
    }

    #[test]
    fn json_report_has_placements() {
        let placement = place_lasers(&grid_3x3(), 1).unwrap();
        let json = render(&placement, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["requested"], 1);
        assert_eq!(value["available"], 5);
        assert_eq!(value["clamped"], false);
        assert_eq!(value["placements"][0]["column"], 1);
        assert_eq!(value["placements"][0]["row"], 2);
        assert_eq!(value["placements"][0]["score"], 21);
        assert_eq!(value["placements"][0]["facing"], "facing north");
    }

    #[test]
    fn config_defaults_and_parses() {
        let config: Config = serde_json::from_str(r#"{ "lasers": 4, "format": "json" }"#).unwrap();
        assert_eq!(config.lasers, Some(4));
        assert_eq!(config.format, OutputFormat::Json);
        assert!(config.grid_path.is_none());
        assert!(!config.parallel);
        assert!(serde_json::from_str::<Config>(r#"{ "laser": 4 }"#).is_err());
    }

    #[test]
    fn config_validation_rejects_unusable_values() {
        let config: Config = serde_json::from_str(r#"{ "lasers": 0 }"#).unwrap();
        assert_eq!(
            config.validate().unwrap_err(),
            "lasers must be at least 1, got 0"
        );
        let config: Config = serde_json::from_str(r#"{ "lasers": -3 }"#).unwrap();
        assert!(config.validate().is_err());
        let config: Config = serde_json::from_str(r#"{ "grid_path": "" }"#).unwrap();
        assert_eq!(config.validate().unwrap_err(), "grid_path must not be empty");
        let config: Config =
            serde_json::from_str(r#"{ "grid_path": "grid.txt", "lasers": 2 }"#).unwrap();
        assert!(config.validate().is_ok());
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn prompt_writes_message_and_trims_answer() {
        let mut input = "  grid.txt \n".as_bytes();
        let mut out = Vec::new();
        let answer = prompt(&mut input, &mut out, "Please enter the file name: ").unwrap();
        assert_eq!(answer, "grid.txt");
        assert_eq!(out, b"Please enter the file name: ");
    }
}
