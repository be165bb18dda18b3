//! Picframe CLI
//!
//! Usage:
//!   picframe --width <IN> --height <IN> [OPTIONS]
//!
//! Options:
//!   -n, --count <N>        Number of frames for the generated grid
//!   -l, --layouts <FILE>   Layouts to use instead of the grid (JSON)
//!   -c, --config <FILE>    Layout configuration (TOML format)
//!   -i, --image <FILE>     Wall photo to embed in SVG output
//!   -r, --random           Pick a random layout instead of the first
//!       --seed <N>         Seed for --random
//!   -f, --format <FMT>     Output format: svg or json (all layouts, or the
//!                          picked one with --random)
//!   -d, --debug            Verbose logging and placement audit
//!   -h, --help             Print help

use std::fs;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

use picframe::layout::audit;
use picframe::{
    export_svg, pick, plan_from_json, DrawStyle, LayoutConfig, PlanConfig, SurfaceSize, Wall,
    WallImage,
};

/// Export surface bounds in pixels
const EXPORT_WIDTH: f64 = 800.0;
const EXPORT_MAX_HEIGHT: f64 = 600.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Svg,
    Json,
}

#[derive(Parser)]
#[command(name = "picframe")]
#[command(about = "Plan picture-frame arrangements that avoid wall obstacles")]
struct Cli {
    /// Wall width in inches
    #[arg(long)]
    width: f64,

    /// Wall height in inches
    #[arg(long)]
    height: f64,

    /// Number of frames for the generated grid
    #[arg(short = 'n', long)]
    count: Option<usize>,

    /// Layouts to use instead of the grid (JSON analysis document)
    #[arg(short, long)]
    layouts: Option<PathBuf>,

    /// Layout configuration file (TOML format)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Wall photo to embed in SVG output
    #[arg(short, long)]
    image: Option<PathBuf>,

    /// Seed for --random
    #[arg(long)]
    seed: Option<u64>,

    /// Pick a random layout instead of the first
    #[arg(short, long)]
    random: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "svg")]
    format: Format,

    /// Debug mode: verbose logging and a placement audit
    #[arg(short, long)]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    let wall = match Wall::new(cli.width, cli.height) {
        Ok(w) => w,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let layout_config = match &cli.config {
        Some(path) => match LayoutConfig::from_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading config '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => LayoutConfig::default(),
    };

    let external = match &cli.layouts {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => Some(content),
            Err(e) => {
                eprintln!("Error reading layouts '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => None,
    };

    let config = PlanConfig::new()
        .with_layout(layout_config)
        .with_style(DrawStyle::for_export());

    let external = external.as_deref();
    let analysis = match plan_from_json(wall.width, wall.height, cli.count, external, &config) {
        Ok(a) => a,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let chosen = if cli.random {
        let mut rng = match cli.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };
        pick(&analysis.layouts, &mut rng)
    } else {
        analysis.layouts.first()
    };
    let Some(layout) = chosen else {
        eprintln!("Error: no layouts to show");
        std::process::exit(1);
    };

    if cli.debug {
        for warning in audit(layout, &config.validator(wall)) {
            tracing::warn!(frame = %warning.frame_id, "{}", warning);
        }
    }

    match cli.format {
        Format::Json => {
            let encoded = if cli.random {
                serde_json::to_string_pretty(layout)
            } else {
                analysis.to_json()
            };
            match encoded {
                Ok(json) => println!("{}", json),
                Err(e) => {
                    eprintln!("Error encoding layouts: {}", e);
                    std::process::exit(1);
                }
            }
        }
        Format::Svg => {
            let image = match &cli.image {
                Some(path) => match WallImage::from_file(path) {
                    Ok(image) => Some(image),
                    Err(e) => {
                        eprintln!("Error reading image '{}': {}", path.display(), e);
                        std::process::exit(1);
                    }
                },
                None => None,
            };
            let surface = SurfaceSize::fit(&wall, EXPORT_WIDTH, EXPORT_MAX_HEIGHT);
            println!(
                "{}",
                export_svg(wall, layout, surface, image.as_ref(), &config)
            );
        }
    }
}

fn init_tracing(debug: bool) {
    let default = if debug { "picframe=debug" } else { "picframe=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
