#![deny(unsafe_code)]
//! CLI binary for the blob-poster generator.
//!
//! Subcommands:
//! - `render` — generate a poster, write PNG or SVG
//! - `schema` — print the parameter schema
//! - `list` — print built-in palette names
//!
//! Logging goes through `env_logger`; set `RUST_LOG=debug` for detail.

mod error;

use blob_poster_blobs::{generate, PosterParams, RANDOM_PALETTE};
use blob_poster_core::seed::DEFAULT_DPI;
use blob_poster_core::{Palette, Seed, Xorshift64};
use blob_poster_render::{snapshot, svg};
use clap::{Parser, Subcommand};
use error::CliError;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use std::process;
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Parser)]
#[command(name = "blob-poster", about = "Generative abstract poster CLI")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a poster and write it as PNG or SVG.
    Render(RenderArgs),
    /// Print the parameter schema as JSON.
    Schema,
    /// List built-in palettes.
    List,
}

#[derive(clap::Args)]
struct RenderArgs {
    /// PRNG seed. Omit for a different poster every run.
    #[arg(long)]
    seed: Option<u64>,

    /// Number of blob layers.
    #[arg(short = 'n', long)]
    layers: Option<usize>,

    /// Colors in the random palette.
    #[arg(long)]
    palette_size: Option<usize>,

    /// "random" or a built-in palette name (see `list`).
    #[arg(short, long)]
    palette: Option<String>,

    #[arg(long)]
    radius_min: Option<f64>,

    #[arg(long)]
    radius_max: Option<f64>,

    #[arg(long)]
    wobble_min: Option<f64>,

    #[arg(long)]
    wobble_max: Option<f64>,

    /// Output resolution in dots per inch (figure is 7x10 inches).
    #[arg(long)]
    dpi: Option<f64>,

    /// Parameter overrides as a JSON object.
    #[arg(long)]
    params: Option<String>,

    /// Replay a poster from a saved seed file.
    #[arg(long)]
    from_seed: Option<PathBuf>,

    /// Save a seed file that reproduces this poster.
    #[arg(long)]
    save_seed: Option<PathBuf>,

    /// Output file; the extension (.png or .svg) picks the format.
    #[arg(short, long, default_value = "poster1.png")]
    output: PathBuf,
}

enum OutputFormat {
    Png,
    Svg,
}

impl OutputFormat {
    fn from_path(path: &Path) -> Result<Self, CliError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("png") => Ok(OutputFormat::Png),
            Some("svg") => Ok(OutputFormat::Svg),
            _ => Err(CliError::Input(format!(
                "unsupported output extension for {} (expected .png or .svg)",
                path.display()
            ))),
        }
    }
}

/// Combines the seed file, `--params` JSON and individual flags (later
/// sources win) into a validated replay record.
fn resolve(args: &RenderArgs) -> Result<(Seed, PosterParams), CliError> {
    let replay = match &args.from_seed {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .map_err(|e| CliError::Io(format!("{}: {e}", path.display())))?;
            let seed: Seed = serde_json::from_str(&text)
                .map_err(|e| CliError::Input(format!("invalid seed file: {e}")))?;
            seed.validate()?;
            Some(seed)
        }
        None => None,
    };

    let mut params = replay
        .as_ref()
        .map(|s| PosterParams::from_json(&s.params))
        .unwrap_or_default();

    if let Some(raw) = &args.params {
        let overrides: Value = serde_json::from_str(raw)
            .map_err(|e| CliError::Input(format!("invalid --params JSON: {e}")))?;
        if !overrides.is_object() {
            return Err(CliError::Input("--params must be a JSON object".into()));
        }
        params = params.merged_with(&overrides);
    }

    params = params.merged_with(&flag_overrides(args));
    params.validate()?;

    let seed = args
        .seed
        .or(replay.as_ref().map(|s| s.seed))
        .unwrap_or_else(clock_seed);
    let dpi = args
        .dpi
        .or(replay.as_ref().map(|s| s.dpi))
        .unwrap_or(DEFAULT_DPI);

    let record = Seed {
        seed,
        dpi,
        params: params.to_json(),
    };
    record.validate()?;
    Ok((record, params))
}

fn flag_overrides(args: &RenderArgs) -> Value {
    let mut map = Map::new();
    if let Some(v) = args.layers {
        map.insert("layer_count".into(), v.into());
    }
    if let Some(v) = args.palette_size {
        map.insert("palette_size".into(), v.into());
    }
    if let Some(v) = &args.palette {
        map.insert("palette".into(), v.clone().into());
    }
    for (key, value) in [
        ("radius_min", args.radius_min),
        ("radius_max", args.radius_max),
        ("wobble_min", args.wobble_min),
        ("wobble_max", args.wobble_max),
    ] {
        if let Some(v) = value {
            map.insert(key.into(), v.into());
        }
    }
    Value::Object(map)
}

fn clock_seed() -> u64 {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default();
    log::info!("no seed given, using {seed}");
    seed
}

fn render(args: RenderArgs, json: bool) -> Result<(), CliError> {
    let format = OutputFormat::from_path(&args.output)?;
    let (record, params) = resolve(&args)?;

    log::debug!("seed {} at {} dpi", record.seed, record.dpi);
    let mut rng = Xorshift64::new(record.seed);
    let scene = generate(&params, &mut rng)?;

    match format {
        OutputFormat::Png => snapshot::write_png(&scene, record.dpi, &args.output)?,
        OutputFormat::Svg => svg::write_svg(&scene, record.dpi, &args.output)?,
    }
    log::info!("wrote {}", args.output.display());

    if let Some(path) = &args.save_seed {
        let text = serde_json::to_string_pretty(&record)?;
        std::fs::write(path, text).map_err(|e| CliError::Io(format!("{}: {e}", path.display())))?;
        log::info!("saved seed to {}", path.display());
    }

    let (width, height) = scene.pixel_size(record.dpi)?;
    if json {
        let info = serde_json::json!({
            "seed": record.seed,
            "dpi": record.dpi,
            "width": width,
            "height": height,
            "layers": scene.layer_count(),
            "params": record.params,
            "output": args.output.display().to_string(),
        });
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        eprintln!(
            "rendered {} layers ({width}x{height}, seed {}) -> {}",
            scene.layer_count(),
            record.seed,
            args.output.display()
        );
    }
    Ok(())
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Render(args) => render(args, cli.json)?,
        Command::Schema => {
            println!(
                "{}",
                serde_json::to_string_pretty(&PosterParams::param_schema())?
            );
        }
        Command::List => {
            let palettes = Palette::list_names();
            if cli.json {
                let info = serde_json::json!({
                    "palettes": palettes,
                    "default": RANDOM_PALETTE,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("Palettes:");
                println!("  {RANDOM_PALETTE} (default), {}", palettes.join(", "));
            }
        }
    }
    Ok(())
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
