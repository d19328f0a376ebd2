use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use stripstitch::io::{load_image, save_image};
use stripstitch::{
    CorrelationConfig, EngineConfig, Image, ScaleProfile, SeamConfig, StitchEngine, StripShift,
};
use tracing_subscriber::EnvFilter;

const EXAMPLE_JSON: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.example.json"));

#[derive(Parser, Debug)]
#[command(author, version, about = "Scale-profile estimation, rescaling and strip mosaics")]
struct Cli {
    /// Optional JSON configuration file.
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,
    /// Print an example config and exit.
    #[arg(long)]
    print_example: bool,
    /// Log stage spans and timings.
    #[arg(long, global = true)]
    trace: bool,
    /// Log per-strip and per-seam details.
    #[arg(long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute the scale profile between two images and store it.
    Psf {
        /// Reference image.
        img1: PathBuf,
        /// Image whose shift against the reference is measured.
        img2: PathBuf,
        /// Output profile file.
        psf_file: PathBuf,
        /// Rows per strip (overrides the config).
        #[arg(long)]
        strip_thickness: Option<usize>,
        /// Print per-strip shifts and scores as JSON.
        #[arg(long)]
        report: bool,
    },
    /// Rescale an image with a stored profile and cut its central strip.
    Scale {
        img: PathBuf,
        psf_file: PathBuf,
        out_img: PathBuf,
    },
    /// Merge images left to right in the given order.
    Merge {
        out_img: PathBuf,
        #[arg(required = true, num_args = 1..)]
        images: Vec<PathBuf>,
    },
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct CorrelationConfigJson {
    score_threshold: f32,
    workers: usize,
    parallel: bool,
}

impl Default for CorrelationConfigJson {
    fn default() -> Self {
        let cfg = CorrelationConfig::default();
        Self {
            score_threshold: cfg.score_threshold,
            workers: cfg.workers,
            parallel: cfg.parallel,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct SeamConfigJson {
    half_width: usize,
}

impl Default for SeamConfigJson {
    fn default() -> Self {
        Self {
            half_width: SeamConfig::default().half_width,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct Config {
    strip_thickness: usize,
    correlation: CorrelationConfigJson,
    seam: SeamConfigJson,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            strip_thickness: EngineConfig::default().strip_thickness,
            correlation: CorrelationConfigJson::default(),
            seam: SeamConfigJson::default(),
        }
    }
}

impl From<Config> for EngineConfig {
    fn from(value: Config) -> Self {
        EngineConfig {
            correlation: CorrelationConfig {
                score_threshold: value.correlation.score_threshold,
                workers: value.correlation.workers,
                parallel: value.correlation.parallel,
            },
            seam: SeamConfig {
                half_width: value.seam.half_width,
            },
            strip_thickness: value.strip_thickness,
        }
    }
}

#[derive(Debug, Serialize)]
struct StripRecord {
    row: usize,
    rows: usize,
    shift: isize,
    score: f32,
    factor: f32,
}

#[derive(Debug, Serialize)]
struct Report {
    max_shift: usize,
    strip_thickness: usize,
    strips: Vec<StripRecord>,
}

fn strip_records(strips: &[StripShift], profile: &ScaleProfile) -> Vec<StripRecord> {
    strips
        .iter()
        .zip(profile.factors())
        .map(|(strip, &factor)| StripRecord {
            row: strip.row,
            rows: strip.rows,
            shift: strip.result.shift,
            score: strip.result.score,
            factor,
        })
        .collect()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        "stripstitch=debug"
    } else if cli.trace {
        "stripstitch=info"
    } else {
        "stripstitch=warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.parse()?))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.print_example {
        println!("{EXAMPLE_JSON}");
        return Ok(());
    }

    let config: Config = match &cli.config {
        Some(path) => serde_json::from_str(&fs::read_to_string(path)?)?,
        None => Config::default(),
    };
    let mut engine_cfg = EngineConfig::from(config);

    let Some(command) = cli.command else {
        return Err("a command is required (psf, scale or merge); see --help".into());
    };

    match command {
        Command::Psf {
            img1,
            img2,
            psf_file,
            strip_thickness,
            report,
        } => {
            if let Some(thickness) = strip_thickness {
                engine_cfg.strip_thickness = thickness;
            }
            let engine = StitchEngine::new().with_config(engine_cfg);
            let a = load_image(&img1)?;
            let b = load_image(&img2)?;
            let estimate = engine.estimate_detailed(&a, &b)?;
            estimate.profile.save(&psf_file)?;
            tracing::info!(
                strips = estimate.profile.len(),
                max_shift = estimate.profile.max_shift(),
                "profile written to {}",
                psf_file.display()
            );
            if report {
                let output = Report {
                    max_shift: estimate.profile.max_shift(),
                    strip_thickness: estimate.profile.strip_thickness(),
                    strips: strip_records(&estimate.strips, &estimate.profile),
                };
                println!("{}", serde_json::to_string_pretty(&output)?);
            }
        }
        Command::Scale {
            img,
            psf_file,
            out_img,
        } => {
            let engine = StitchEngine::new().with_config(engine_cfg);
            let image = load_image(&img)?;
            let profile = ScaleProfile::load(&psf_file)?;
            let strip = engine.rescale(&image, &profile)?;
            save_image(&strip, &out_img)?;
        }
        Command::Merge { out_img, images } => {
            let engine = StitchEngine::new().with_config(engine_cfg);
            let loaded = images
                .iter()
                .map(load_image)
                .collect::<Result<Vec<Image>, _>>()?;
            let refs: Vec<&Image> = loaded.iter().collect();
            let mosaic = engine.merge(&refs)?;
            save_image(&mosaic, &out_img)?;
        }
    }

    Ok(())
}
