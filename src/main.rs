use anyhow::Result;
use clap::Parser;

use bottom_sheet::cli::{CliArgs, OutputFormat};
use bottom_sheet::config::SheetConfig;
use bottom_sheet::replay::{format_json, format_text, Replayer, Script};

fn main() -> Result<()> {
    let logs_dir = bottom_sheet::tracing::init();

    let args = CliArgs::parse();

    if let Some(dir) = &logs_dir {
        tracing::debug!("logging to {}", dir.display());
    }

    let config = match &args.config {
        Some(path) => SheetConfig::load_from(path)?,
        None => SheetConfig::load(),
    };

    let mut script = Script::from_path(&args.script)?;
    if let Some(viewport) = args.viewport {
        script.viewport = viewport;
    }

    tracing::info!(
        events = script.events.len(),
        viewport = script.viewport,
        "replaying {}",
        args.script.display()
    );

    let steps = Replayer::run_script(config, &script);

    let output = match args.format {
        OutputFormat::Text => format_text(&steps),
        OutputFormat::Json => format_json(&steps)?,
    };
    println!("{}", output);

    Ok(())
}
