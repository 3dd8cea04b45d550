use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{ArgAction, Parser};
use image::{DynamicImage, ImageReader};
use sheet_packer_core::config::{GrowthPolicy, Strategy};
use sheet_packer_core::{InputImage, PackerConfig, pack_images, to_frame_map};
use tracing::{error, info};
use walkdir::WalkDir;

#[derive(Parser, Debug)]
#[command(
    name = "sheet-packer",
    about = "Pack a folder of sprites into a sprite sheet",
    version
)]
struct Cli {
    // Input/Output
    /// Source directory of sprite images
    #[arg(long, help_heading = "Input/Output")]
    src: PathBuf,
    /// Destination directory for the sheet and frame map
    #[arg(long, help_heading = "Input/Output")]
    dest: PathBuf,
    /// Sheet key: output files are <key>.png and <key>@1x.png.json, and frame
    /// names are prefixed <key>_
    #[arg(long, help_heading = "Input/Output")]
    key: String,
    /// Include patterns (glob). If set, only files matching any pattern are considered
    #[arg(long, help_heading = "Input/Output")]
    include: Vec<String>,
    /// Exclude patterns (glob). Files matching any pattern will be ignored
    #[arg(long, help_heading = "Input/Output")]
    exclude: Vec<String>,

    // Layout
    /// Placement strategy: shelf | corner
    #[arg(long, default_value = "corner", help_heading = "Layout")]
    strategy: String,
    /// Width limit growth between attempts: double | <pixels>
    #[arg(long, default_value = "double", help_heading = "Layout")]
    growth: String,
    /// Row width limit for the first attempt
    #[arg(long, default_value_t = 128, help_heading = "Layout")]
    initial_width: u32,
    /// Retry cap for the layout loop
    #[arg(long, default_value_t = 32, help_heading = "Layout")]
    max_attempts: u32,

    // Logging/UX
    /// Pretty-print the frame map and log packing efficiency
    #[arg(long, default_value_t = false, help_heading = "Logging/UX")]
    debug: bool,
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action=ArgAction::Count, help_heading = "Logging/UX")]
    verbose: u8,
    /// Quiet mode (overrides verbose)
    #[arg(short, long, default_value_t = false, help_heading = "Logging/UX")]
    quiet: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.quiet, cli.verbose);
    run(&cli)
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    fs::create_dir_all(&cli.dest)
        .with_context(|| format!("create dest {}", cli.dest.display()))?;

    let strategy: Strategy = cli
        .strategy
        .parse()
        .map_err(|_| anyhow::anyhow!("unknown strategy: {}", cli.strategy))?;
    let growth: GrowthPolicy = cli
        .growth
        .parse()
        .map_err(|_| anyhow::anyhow!("unknown growth policy: {}", cli.growth))?;
    let cfg = PackerConfig::builder()
        .strategy(strategy)
        .growth(growth)
        .initial_width_limit(cli.initial_width)
        .max_attempts(cli.max_attempts)
        .build();

    let paths = gather_paths(&cli.src, &cli.include, &cli.exclude)?;
    let inputs = load_images(&paths)?;
    anyhow::ensure!(!inputs.is_empty(), "no sprite images in {}", cli.src.display());
    info!(count = inputs.len(), "loaded sprite images");

    let out = pack_images(inputs, cfg)?;

    let png_path = cli.dest.join(format!("{}.png", cli.key));
    out.rgba
        .save(&png_path)
        .with_context(|| format!("write {}", png_path.display()))?;
    info!(?png_path, width = out.atlas.width, height = out.atlas.height, "sheet written");

    let map = to_frame_map(&out.atlas, &cli.key);
    let json = if cli.debug {
        serde_json::to_string_pretty(&map)?
    } else {
        serde_json::to_string(&map)?
    };
    let json_path = cli.dest.join(format!("{}@1x.png.json", cli.key));
    fs::write(&json_path, json).with_context(|| format!("write {}", json_path.display()))?;
    info!(?json_path, frames = out.atlas.frames.len(), "frame map written");

    if cli.debug {
        let stats = out.stats();
        info!(
            sprite_area = stats.sprite_area,
            sheet_area = stats.atlas_area,
            sheet_to_sprite = format!("{:.2}%", stats.expansion_percentage()),
            occupancy = format!("{:.2}%", stats.occupancy * 100.0),
            "packing efficiency"
        );
    }
    Ok(())
}

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp", "tga", "gif"];

fn glob_set(patterns: &[String]) -> anyhow::Result<Option<globset::GlobSet>> {
    if patterns.is_empty() {
        return Ok(None);
    }
    let mut b = globset::GlobSetBuilder::new();
    for pat in patterns {
        b.add(globset::Glob::new(pat)?);
    }
    Ok(Some(b.build()?))
}

fn gather_paths(
    path: &Path,
    include: &[String],
    exclude: &[String],
) -> anyhow::Result<Vec<PathBuf>> {
    let inc_set = glob_set(include)?;
    let exc_set = glob_set(exclude)?;
    let wanted = |p: &Path| -> bool {
        let ext = p
            .extension()
            .and_then(|e| e.to_str())
            .map(|s| s.to_ascii_lowercase());
        if !ext.is_some_and(|e| IMAGE_EXTENSIONS.contains(&e.as_str())) {
            return false;
        }
        let s = p.to_string_lossy().replace('\\', "/");
        if exc_set.as_ref().is_some_and(|ex| ex.is_match(&s)) {
            return false;
        }
        inc_set.as_ref().is_none_or(|inc| inc.is_match(&s))
    };
    let mut list: Vec<PathBuf> = WalkDir::new(path)
        .into_iter()
        .filter_map(|e| e.ok())
        .map(|e| e.into_path())
        .filter(|p| p.is_file() && wanted(p))
        .collect();
    // Stable input order regardless of directory iteration order.
    list.sort();
    Ok(list)
}

fn load_images(paths: &[PathBuf]) -> anyhow::Result<Vec<InputImage>> {
    let mut list = Vec::with_capacity(paths.len());
    for p in paths {
        let decoded = (|| -> anyhow::Result<DynamicImage> {
            Ok(ImageReader::open(p)?.with_guessed_format()?.decode()?)
        })();
        match decoded {
            Ok(image) => {
                // Frame keys are file stems, matching the frame-map convention.
                let key = p
                    .file_stem()
                    .and_then(|s| s.to_str())
                    .unwrap_or_default()
                    .to_string();
                list.push(InputImage { key, image });
            }
            Err(e) => {
                error!(?p, error = %e, "skip image");
            }
        }
    }
    Ok(list)
}

fn init_tracing(quiet: bool, verbose: u8) {
    let level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "info",
        (false, 1) => "debug",
        (false, _) => "trace",
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(level)
        .with_target(false)
        .try_init();
}
