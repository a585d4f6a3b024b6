use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;
use serde::Serialize;

use facecheck_core::detection::infrastructure::scripted_detector::ScriptedDetector;
use facecheck_core::pipeline::analyze_frame_use_case::AnalyzeFrameUseCase;
use facecheck_core::quality::domain::classifier::FrameQualityClassifier;
use facecheck_core::quality::domain::verdict::QualityVerdict;
use facecheck_core::quality::domain::verdict_debouncer::VerdictDebouncer;
use facecheck_core::shared::constants::{DEFAULT_HOLD_FRAMES, IMAGE_EXTENSIONS};
use facecheck_core::shared::frame::Frame;

/// Frame quality checks for face dataset capture.
///
/// Replays still images (or a directory of frames, sorted by name) as a
/// capture stream and prints the quality verdict for each frame. Face
/// detection is an external concern; the scripted face count stands in
/// for the model so lighting and debounce behavior can be exercised
/// offline.
#[derive(Parser)]
#[command(name = "facecheck")]
struct Cli {
    /// Image files, or a single directory of frames.
    inputs: Vec<PathBuf>,

    /// Face count the scripted detector reports on every frame.
    #[arg(long, default_value = "1")]
    faces: usize,

    /// Consecutive frames required before the verdict switches (1 disables).
    #[arg(long, default_value_t = DEFAULT_HOLD_FRAMES)]
    hold: usize,

    /// Emit one JSON object per frame instead of text.
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct FrameReport<'a> {
    index: usize,
    file: &'a Path,
    verdict: QualityVerdict,
    #[serde(skip_serializing_if = "Option::is_none")]
    banner: Option<&'static str>,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    validate(&cli)?;

    let files = collect_inputs(&cli.inputs)?;

    let classifier = if cli.hold > 1 {
        FrameQualityClassifier::with_smoother(Box::new(VerdictDebouncer::new(cli.hold)))
    } else {
        FrameQualityClassifier::new()
    };
    let detector = ScriptedDetector::constant(cli.faces);
    let mut use_case = AnalyzeFrameUseCase::new(Box::new(detector), classifier);

    for (index, file) in files.iter().enumerate() {
        let frame = load_frame(file, index)?;
        let verdict = use_case.execute(&frame)?;

        if cli.json {
            let report = FrameReport {
                index,
                file,
                verdict,
                banner: verdict.banner(),
            };
            println!("{}", serde_json::to_string(&report)?);
        } else {
            match verdict.banner() {
                Some(banner) => println!("{index:4}  {:16} {banner}", format!("{verdict:?}")),
                None => println!("{index:4}  {verdict:?}"),
            }
        }
    }

    Ok(())
}

fn validate(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    if cli.inputs.is_empty() {
        return Err("At least one input file or directory is required".into());
    }
    for input in &cli.inputs {
        if !input.exists() {
            return Err(format!("Input not found: {}", input.display()).into());
        }
    }
    if cli.inputs.iter().any(|p| p.is_dir()) && cli.inputs.len() > 1 {
        return Err("A directory input must be the only input".into());
    }
    if cli.hold == 0 {
        return Err("Hold must be at least 1".into());
    }
    Ok(())
}

/// Expands a directory input to its image files, sorted by name so the
/// replay order matches the capture order.
fn collect_inputs(inputs: &[PathBuf]) -> Result<Vec<PathBuf>, Box<dyn std::error::Error>> {
    if inputs.len() == 1 && inputs[0].is_dir() {
        let mut files: Vec<PathBuf> = std::fs::read_dir(&inputs[0])?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| is_image(path))
            .collect();
        files.sort();
        if files.is_empty() {
            return Err(format!("No image files in {}", inputs[0].display()).into());
        }
        return Ok(files);
    }
    Ok(inputs.to_vec())
}

fn load_frame(path: &Path, index: usize) -> Result<Frame, Box<dyn std::error::Error>> {
    let luma = image::open(path)
        .map_err(|e| format!("Failed to load {}: {e}", path.display()))?
        .to_luma8();
    let (width, height) = luma.dimensions();
    log::debug!("loaded {} ({width}x{height})", path.display());
    Ok(Frame::new(luma.into_raw(), width, height, index))
}

fn is_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}
