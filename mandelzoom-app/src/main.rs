mod app_dir;
mod preferences;
mod session;

use std::path::PathBuf;
use std::process::ExitCode;
use std::thread;
use std::time::Instant;

use tracing::{error, info};

use mandelzoom_render::{export_png, Explorer, ExportMetadata, InputState, ViewCommand};

use crate::preferences::Preferences;
use crate::session::ScriptedInput;

/// Drive the explorer through the scripted session and the optional dive,
/// then export the last frame. Returns the written image path.
fn run(prefs: &Preferences) -> mandelzoom_render::Result<PathBuf> {
    let config = prefs.engine_config()?;
    let palette = prefs.build_palette()?;
    let mut explorer = Explorer::on_create(config, prefs.width, prefs.height)?
        .with_tile_size(prefs.tile_size)?
        .with_palette(palette);

    info!(
        width = prefs.width,
        height = prefs.height,
        max_iterations = config.max_iterations,
        frames = prefs.scripted_frames(),
        "Explorer created"
    );

    let interval = prefs.frame_interval();
    let mut last = Instant::now();
    let mut tick = |explorer: &mut Explorer, input: &InputState| -> mandelzoom_render::Result<()> {
        let start = Instant::now();
        let elapsed = start - last;
        last = start;
        explorer.on_update(elapsed, input)?;
        let spent = start.elapsed();
        if spent < interval {
            thread::sleep(interval - spent);
        }
        Ok(())
    };

    // The first frame always renders, even with an empty script.
    tick(&mut explorer, &InputState::default())?;
    let frames = prefs.scripted_frames() as usize;
    for input in ScriptedInput::new(&prefs.script).take(frames) {
        tick(&mut explorer, &input)?;
    }
    if let Some(ref dive) = prefs.dive {
        for _ in 0..dive.steps {
            explorer.queue(ViewCommand::DiveToward {
                target: dive.target(),
                factor: dive.factor,
            });
            tick(&mut explorer, &InputState::default())?;
        }
    }

    let zoom = explorer.mapper().zoom_level();
    info!(
        frames_rendered = explorer.frames_rendered(),
        zoom,
        "Session finished"
    );

    let dir = app_dir::images_directory();
    std::fs::create_dir_all(&dir)?;
    let path = dir.join(&prefs.output);
    let metadata = ExportMetadata::new(
        &explorer.viewport(),
        zoom,
        explorer.config().max_iterations,
        explorer.palette().name,
    );
    export_png(explorer.frame(), &path, &metadata)?;
    Ok(path)
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Starting Mandelzoom");

    let prefs = Preferences::load();
    match run(&prefs) {
        Ok(path) => {
            info!("Wrote {}", path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Render failed: {e}");
            ExitCode::FAILURE
        }
    }
}
