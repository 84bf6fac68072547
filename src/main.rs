use clap::{Args, Parser, Subcommand};
use serde_json::{Value, json};
use tracing_subscriber::EnvFilter;

use shapekit::align::AlignType;
use shapekit::config::{AlignConfig, ConfigError};
use shapekit::geometry::Point;
use shapekit::primitive::{self, Circle, PrimitiveError, PrimitiveKind, Rectangle, Triangle};
use shapekit::registry::RegistryError;
use shapekit::scene::{Scene, SceneError};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("invalid --{flag} value {value:?}: expected {expected} comma-separated numbers")]
    InvalidShape { flag: &'static str, value: String, expected: usize },
    #[error(transparent)]
    Primitive(#[from] PrimitiveError),
    #[error(transparent)]
    Registry(#[from] RegistryError),
    #[error(transparent)]
    Scene(#[from] SceneError),
    #[error("failed to encode output: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "shapekit", about = "Align shapes and inspect their properties")]
struct Cli {
    /// Tolerance for alignment decisions; overrides SHAPEKIT_ALIGN_EPSILON.
    #[arg(long, global = true)]
    epsilon: Option<f64>,

    /// Use the half-pixel tolerance preset.
    #[arg(long, global = true, conflicts_with = "epsilon")]
    pixel: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Align a set of shapes and print their resulting bounds.
    Align(AlignCommand),
    /// Print the default properties of a shape kind.
    Describe {
        #[arg(value_parser = parse_kind)]
        kind: PrimitiveKind,
    },
    /// List the alignment modes.
    Modes,
}

#[derive(Args, Debug)]
struct AlignCommand {
    /// left, hcenter, right, top, vcenter or bottom.
    #[arg(long)]
    mode: AlignType,

    /// Rectangle as X,Y,WIDTH,HEIGHT. Repeatable.
    #[arg(long = "rect", allow_hyphen_values = true, value_name = "X,Y,W,H")]
    rects: Vec<String>,

    /// Circle as CENTER_X,CENTER_Y,RADIUS. Repeatable.
    #[arg(long = "circle", allow_hyphen_values = true, value_name = "CX,CY,R")]
    circles: Vec<String>,

    /// Triangle as X1,Y1,X2,Y2,X3,Y3. Repeatable.
    #[arg(long = "triangle", allow_hyphen_values = true, value_name = "X1,Y1,X2,Y2,X3,Y3")]
    triangles: Vec<String>,
}

fn main() -> Result<(), CliError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn,shapekit=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = resolve_config(&cli)?;
    tracing::debug!(epsilon = config.epsilon, "alignment config loaded");

    match cli.command {
        Command::Align(cmd) => run_align(&cmd, &config),
        Command::Describe { kind } => run_describe(kind),
        Command::Modes => {
            for mode in AlignType::ALL {
                println!("{mode}");
            }
            Ok(())
        }
    }
}

fn resolve_config(cli: &Cli) -> Result<AlignConfig, CliError> {
    if let Some(epsilon) = cli.epsilon {
        return Ok(AlignConfig::with_epsilon(epsilon)?);
    }
    if cli.pixel {
        return Ok(AlignConfig::PIXEL);
    }
    Ok(AlignConfig::from_env()?)
}

fn run_align(cmd: &AlignCommand, config: &AlignConfig) -> Result<(), CliError> {
    let mut scene = Scene::new();
    let mut ids = Vec::new();

    for raw in &cmd.rects {
        let [x, y, w, h] = parse_numbers::<4>("rect", raw)?;
        let rect = Rectangle::at(scene.registry(), Point::new(x, y), w, h)?;
        ids.push(scene.insert(Box::new(rect))?);
    }
    for raw in &cmd.circles {
        let [cx, cy, r] = parse_numbers::<3>("circle", raw)?;
        let circle = Circle::at(scene.registry(), Point::new(cx, cy), r)?;
        ids.push(scene.insert(Box::new(circle))?);
    }
    for raw in &cmd.triangles {
        let [x1, y1, x2, y2, x3, y3] = parse_numbers::<6>("triangle", raw)?;
        let vertices = [Point::new(x1, y1), Point::new(x2, y2), Point::new(x3, y3)];
        let tri = Triangle::at(scene.registry(), vertices)?;
        ids.push(scene.insert(Box::new(tri))?);
    }

    let moved = scene.align(&ids, cmd.mode, config);
    tracing::info!(mode = %cmd.mode, shapes = ids.len(), moved, "align finished");

    let shapes: Vec<Value> = scene
        .iter()
        .map(|p| json!({ "kind": p.kind(), "bounds": p.world_bounding_box() }))
        .collect();
    let output = json!({ "mode": cmd.mode, "moved": moved, "shapes": shapes });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn run_describe(kind: PrimitiveKind) -> Result<(), CliError> {
    let scene = Scene::new();
    let shape = primitive::spawn(scene.registry(), kind)?;
    let output = json!({
        "kind": shape.kind(),
        "bounds": shape.world_bounding_box(),
        "properties": shape.properties_json(),
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn parse_numbers<const N: usize>(flag: &'static str, raw: &str) -> Result<[f64; N], CliError> {
    let invalid = || CliError::InvalidShape { flag, value: raw.to_owned(), expected: N };
    let parsed: Vec<f64> = raw
        .split(',')
        .map(|part| part.trim().parse::<f64>())
        .collect::<Result<_, _>>()
        .map_err(|_| invalid())?;
    <[f64; N]>::try_from(parsed).map_err(|_| invalid())
}

fn parse_kind(raw: &str) -> Result<PrimitiveKind, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "circle" => Ok(PrimitiveKind::Circle),
        "rectangle" | "rect" => Ok(PrimitiveKind::Rectangle),
        "triangle" => Ok(PrimitiveKind::Triangle),
        other => Err(format!("unknown shape kind: {other}")),
    }
}
