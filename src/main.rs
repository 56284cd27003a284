mod config;
mod error;
mod script;

use std::path::{Path, PathBuf};

use canvas::consts::PREVIEW_WIDTH_PX;
use canvas::engine::EditorCore;
use canvas::error::CanvasError;
use canvas::geometry::{AspectRatio, CanvasSpace};
use canvas::scale::DisplayScale;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::error::StudioError;
use crate::script::ExportSummary;

#[derive(Parser, Debug)]
#[command(name = "studio", about = "Greeting-card template layout tool")]
struct Cli {
    /// Host viewport width in screen pixels.
    #[arg(long, env = "STUDIO_VIEWPORT_WIDTH", default_value_t = 1920.0, global = true)]
    viewport_width: f64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Replay a JSON session script and print the export payload.
    Replay { script: PathBuf },
    /// Show the display scale for an aspect ratio at the current viewport.
    Scale {
        #[arg(long, default_value = "3:4")]
        aspect: String,
    },
}

fn main() -> Result<(), StudioError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = config::from_env()?;
    tracing::debug!(?config, viewport_width = cli.viewport_width, "config loaded");

    match cli.command {
        Command::Replay { script } => run_replay(&script, EditorCore::new(config, cli.viewport_width)?),
        Command::Scale { aspect } => {
            let aspect = AspectRatio::parse(&aspect).ok_or(StudioError::UnknownAspect(aspect))?;
            let canvas = CanvasSpace::for_aspect(aspect);
            let scale =
                DisplayScale::fit(&canvas, config.max_display_height(), cli.viewport_width, config.viewport_fraction())?;
            println!("canvas   {}", canvas.caption(aspect));
            println!("scale    {:.4}", scale.get());
            println!("display  {:.0} × {:.0}px", canvas.width * scale.get(), canvas.height * scale.get());
            println!("preview  {:.4}", PREVIEW_WIDTH_PX / canvas.width);
            Ok(())
        }
    }
}

fn run_replay(path: &Path, mut core: EditorCore) -> Result<(), StudioError> {
    let session = script::load(path)?;
    let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
    script::replay(&mut core, &session, base_dir)?;

    match core.export() {
        Ok(upload) => {
            let summary = ExportSummary::from(&upload);
            println!("{}", serde_json::to_string_pretty(&summary)?);
            Ok(())
        }
        Err(CanvasError::ExportNotReady(failing)) => {
            for requirement in &failing {
                tracing::error!(requirement = requirement.label(), "requirement not met");
            }
            Err(CanvasError::ExportNotReady(failing).into())
        }
        Err(e) => Err(e.into()),
    }
}
