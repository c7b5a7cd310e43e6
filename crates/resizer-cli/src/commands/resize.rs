use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{bail, Context, Result};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use resizer_core::command::{dispatch, Command, CommandReport};
use resizer_core::config::AppConfig;
use resizer_core::consts::DEFAULT_SAVE_NAME;
use resizer_core::dimensions::DimensionInput;
use resizer_core::frontend::ScriptedFrontend;
use resizer_core::session::ImageEditorSession;

use crate::summary::print_resize_summary;

#[derive(Args)]
pub struct ResizeArgs {
    /// Input image file (jpg, jpeg, png, bmp, gif)
    pub input: PathBuf,

    /// Target width in pixels
    #[arg(long)]
    pub width: String,

    /// Target height in pixels
    #[arg(long)]
    pub height: String,

    /// Output file; the extension selects the format
    #[arg(short, long, default_value = DEFAULT_SAVE_NAME)]
    pub output: PathBuf,

    /// TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

pub fn run(args: &ResizeArgs) -> Result<()> {
    let config = match args.config {
        Some(ref path) => AppConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => AppConfig::default(),
    };

    let mut session = ImageEditorSession::new(config.session_options());
    let mut frontend = ScriptedFrontend::new()
        .with_open_path(&args.input)
        .with_save_path(&args.output);

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner} {msg}")?);
    pb.enable_steady_tick(Duration::from_millis(100));

    pb.set_message(format!("Loading {}", args.input.display()));
    let opened = dispatch(&mut session, &Command::OpenImage, &mut frontend);
    let source = match opened {
        CommandReport::Opened(info) => info,
        other => {
            pb.finish_and_clear();
            return fail(other);
        }
    };

    pb.set_message(format!("Resizing to {}x{}", args.width.trim(), args.height.trim()));
    let start = Instant::now();
    let input = DimensionInput::new(args.width.as_str(), args.height.as_str());
    let report = dispatch(&mut session, &Command::ResizeImage(input), &mut frontend);
    pb.finish_and_clear();

    match report {
        CommandReport::Saved { info, format } => {
            print_resize_summary(&source, &info, format, start.elapsed());
            Ok(())
        }
        other => fail(other),
    }
}

fn fail(report: CommandReport) -> Result<()> {
    match report {
        CommandReport::Failed(message) => bail!(message),
        other => bail!("Unexpected result: {other:?}"),
    }
}
