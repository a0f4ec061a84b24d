use std::{
    path::PathBuf,
    sync::{Arc, OnceLock},
};

use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use serde_json::json;

use filmstrip::{
    ExportOptions, FfmpegLogLevel, NoOpProgress, ProgressCallback, SamplePlan, SavedFrame,
    sample_frames, set_ffmpeg_log_level,
};

const CLI_AFTER_HELP: &str = "Examples:\n  filmstrip input.mp4\n  filmstrip input.mp4 --frames 12 --ratio 1.0 --progress\n  filmstrip input.mp4 --json --log-level quiet\n  filmstrip --completions zsh > _filmstrip";

#[derive(Debug, Parser)]
#[command(
    name = "filmstrip",
    version,
    about = "Sample evenly-spaced frames from a video and save them as padded stills",
    after_help = CLI_AFTER_HELP
)]
struct Cli {
    /// Input video path.
    #[arg(required_unless_present = "completions")]
    input: Option<PathBuf>,

    /// Number of frames to extract.
    #[arg(long, short = 'n', default_value_t = 6)]
    frames: usize,

    /// Target width as a multiple of the frame height.
    #[arg(long, default_value_t = 1.1, value_parser = parse_ratio)]
    ratio: f64,

    /// Show a progress bar instead of per-file lines.
    #[arg(long)]
    progress: bool,

    /// Print a machine-readable JSON summary instead of human output.
    #[arg(long)]
    json: bool,

    /// FFmpeg log level (quiet, panic, fatal, error, warning, info, verbose, debug, trace).
    #[arg(long)]
    log_level: Option<String>,

    /// Generate shell completions and exit.
    #[arg(long, value_enum)]
    completions: Option<Shell>,
}

fn parse_ratio(value: &str) -> Result<f64, String> {
    let ratio: f64 = value
        .parse()
        .map_err(|_| format!("'{value}' is not a number"))?;
    if ratio.is_finite() && ratio > 0.0 {
        Ok(ratio)
    } else {
        Err("ratio must be a positive number".to_string())
    }
}

fn parse_log_level(value: &str) -> Option<FfmpegLogLevel> {
    match value.to_ascii_lowercase().as_str() {
        "quiet" => Some(FfmpegLogLevel::Quiet),
        "panic" => Some(FfmpegLogLevel::Panic),
        "fatal" => Some(FfmpegLogLevel::Fatal),
        "error" => Some(FfmpegLogLevel::Error),
        "warning" => Some(FfmpegLogLevel::Warning),
        "info" => Some(FfmpegLogLevel::Info),
        "verbose" => Some(FfmpegLogLevel::Verbose),
        "debug" => Some(FfmpegLogLevel::Debug),
        "trace" => Some(FfmpegLogLevel::Trace),
        _ => None,
    }
}

/// Reproduces the classic console contract: total frame count, sample
/// positions, one line per saved file.
struct ConsoleProgress;

impl ProgressCallback for ConsoleProgress {
    fn on_plan(&self, plan: &SamplePlan) {
        println!("Total frames in video: {}", plan.total_frames);
        println!("Extracting frames at: {:?}", plan.indices);
    }

    fn on_frame_saved(&self, saved: &SavedFrame) {
        println!("{} {}", "saved".green().bold(), saved.path.display());
    }
}

/// Drives an indicatif bar sized to the requested frame count.
#[derive(Default)]
struct BarProgress {
    bar: OnceLock<ProgressBar>,
}

impl ProgressCallback for BarProgress {
    fn on_plan(&self, plan: &SamplePlan) {
        let bar = ProgressBar::new(plan.indices.len() as u64);
        bar.set_style(
            ProgressStyle::with_template("{bar:40.cyan/blue} {pos}/{len} frames")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        let _ = self.bar.set(bar);
    }

    fn on_frame_saved(&self, _saved: &SavedFrame) {
        if let Some(bar) = self.bar.get() {
            bar.inc(1);
        }
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        let mut command = Cli::command();
        clap_complete::generate(shell, &mut command, "filmstrip", &mut std::io::stdout());
        return Ok(());
    }

    let Some(input) = cli.input else {
        Cli::command().print_help()?;
        return Ok(());
    };

    if let Some(value) = cli.log_level.as_deref() {
        match parse_log_level(value) {
            Some(level) => set_ffmpeg_log_level(level),
            None => return Err(format!("unknown log level '{value}'").into()),
        }
    }

    let bar_progress = Arc::new(BarProgress::default());
    let callback: Arc<dyn ProgressCallback> = if cli.json {
        Arc::new(NoOpProgress)
    } else if cli.progress {
        bar_progress.clone()
    } else {
        Arc::new(ConsoleProgress)
    };

    let options = ExportOptions::new()
        .with_frame_count(cli.frames)
        .with_width_ratio(cli.ratio)
        .with_progress(callback);

    let report = sample_frames(&input, &options)?;

    if let Some(bar) = bar_progress.bar.get() {
        bar.finish();
    }

    if cli.json {
        let payload = json!({
            "input": input.display().to_string(),
            "total_frames": report.plan.total_frames,
            "indices": report.plan.indices,
            "output_directory": report.plan.output_directory.display().to_string(),
            "files": report
                .saved
                .iter()
                .map(|saved| saved.path.display().to_string())
                .collect::<Vec<_>>(),
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        println!(
            "{} {} of {} frames in {}",
            "done".green().bold(),
            report.saved.len(),
            report.plan.indices.len(),
            report.plan.output_directory.display(),
        );
    }

    Ok(())
}

fn main() {
    if let Err(error) = run() {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_log_level, parse_ratio};

    #[test]
    fn parse_ratio_accepts_positive_numbers() {
        assert_eq!(parse_ratio("1.1").unwrap(), 1.1);
        assert_eq!(parse_ratio("2").unwrap(), 2.0);
        assert_eq!(parse_ratio("0.5").unwrap(), 0.5);
    }

    #[test]
    fn parse_ratio_rejects_nonpositive_values() {
        assert!(parse_ratio("0").is_err());
        assert!(parse_ratio("-1.5").is_err());
        assert!(parse_ratio("NaN").is_err());
        assert!(parse_ratio("inf").is_err());
        assert!(parse_ratio("wide").is_err());
    }

    #[test]
    fn parse_log_level_aliases() {
        assert!(parse_log_level("quiet").is_some());
        assert!(parse_log_level("WARNING").is_some());
        assert!(parse_log_level("Trace").is_some());
        assert!(parse_log_level("loud").is_none());
    }
}
