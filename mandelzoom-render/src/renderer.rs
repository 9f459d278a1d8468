use std::time::{Duration, Instant};

use rayon::prelude::*;
use tracing::{debug, info};

use mandelzoom_core::{EscapeResult, EscapeTime, Viewport};

use crate::error::RenderError;
use crate::iteration_buffer::IterationBuffer;
use crate::tile::{build_tile_grid, Tile};

/// The result of one full-grid sweep.
///
/// Contains raw escape data (no coloring); apply a `Palette` to get pixels.
#[derive(Debug, Clone)]
pub struct RenderResult {
    pub iterations: IterationBuffer,
    /// The snapshot the sweep read from.
    pub viewport: Viewport,
    pub elapsed: Duration,
    pub tiles_rendered: usize,
}

/// Evaluate every pixel of one tile.
fn render_tile<E: EscapeTime>(engine: &E, viewport: &Viewport, tile: &Tile) -> Vec<EscapeResult> {
    let mut data = Vec::with_capacity(tile.pixel_count());
    for py in 0..tile.height {
        for px in 0..tile.width {
            let c = viewport.pixel_to_plane(tile.x + px, tile.y + py);
            data.push(engine.evaluate(c));
        }
    }
    data
}

/// Sweep the whole screen described by `viewport`.
///
/// The viewport is taken by value, so every tile reads the same snapshot
/// regardless of what the caller does to its mapper afterwards. Tiles are
/// evaluated in parallel on the rayon pool and joined before the frame is
/// assembled; each worker only writes its own tile's vector.
pub fn render<E: EscapeTime + Sync>(
    engine: &E,
    viewport: Viewport,
    tile_size: u32,
) -> crate::Result<RenderResult> {
    if viewport.width == 0 || viewport.height == 0 {
        return Err(RenderError::InvalidDimensions {
            width: viewport.width,
            height: viewport.height,
        });
    }
    let start = Instant::now();
    let max_iter = engine.config().max_iterations;

    let tiles = build_tile_grid(viewport.width, viewport.height, tile_size)?;
    debug!(
        tile_count = tiles.len(),
        width = viewport.width,
        height = viewport.height,
        max_iter,
        "Starting tiled sweep"
    );

    let tile_data: Vec<Vec<EscapeResult>> = tiles
        .par_iter()
        .map(|tile| render_tile(engine, &viewport, tile))
        .collect();

    let mut iterations = IterationBuffer::new(viewport.width, viewport.height, max_iter);
    for (tile, data) in tiles.iter().zip(tile_data.iter()) {
        iterations.blit_tile(tile, data);
    }

    let elapsed = start.elapsed();
    info!(
        elapsed_ms = elapsed.as_millis(),
        tiles_rendered = tiles.len(),
        escaped = iterations.escaped_count(),
        "Sweep complete"
    );

    Ok(RenderResult {
        iterations,
        viewport,
        elapsed,
        tiles_rendered: tiles.len(),
    })
}
