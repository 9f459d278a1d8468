//! PNG export with embedded view metadata (tEXt chunks).

use std::io::BufWriter;
use std::path::Path;

use tracing::debug;

use mandelzoom_core::{PlaneBounds, Viewport};

use crate::buffer::RenderBuffer;
use crate::error::RenderError;

/// Metadata to embed in an exported PNG as tEXt chunks.
#[derive(Debug, Clone)]
pub struct ExportMetadata {
    pub bounds: PlaneBounds,
    pub zoom: f64,
    pub max_iterations: u32,
    pub palette_name: String,
    pub width: u32,
    pub height: u32,
}

impl ExportMetadata {
    pub fn new(viewport: &Viewport, zoom: f64, max_iterations: u32, palette_name: &str) -> Self {
        Self {
            bounds: viewport.bounds,
            zoom,
            max_iterations,
            palette_name: palette_name.to_string(),
            width: viewport.width,
            height: viewport.height,
        }
    }
}

/// Write an RGBA frame as a PNG file with embedded view metadata.
///
/// Uses the `png` crate directly so custom tEXt chunks can be added; they are
/// readable by exiftool and most image viewers.
pub fn export_png(
    frame: &RenderBuffer,
    path: &Path,
    metadata: &ExportMetadata,
) -> crate::Result<()> {
    if frame.width == 0 || frame.height == 0 {
        return Err(RenderError::InvalidDimensions {
            width: frame.width,
            height: frame.height,
        });
    }
    let file = std::fs::File::create(path)?;
    let writer = BufWriter::new(file);

    let mut encoder = png::Encoder::new(writer, frame.width, frame.height);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    encoder.set_compression(png::Compression::Default);

    encoder.add_text_chunk("Software".to_string(), "Mandelzoom".to_string())?;
    encoder.add_text_chunk("Description".to_string(), build_description(metadata))?;
    for (key, value) in build_metadata_pairs(metadata) {
        encoder.add_text_chunk(key, value)?;
    }

    let mut png_writer = encoder.write_header()?;
    png_writer.write_image_data(&frame.pixels)?;
    png_writer.finish()?;

    debug!(
        "Exported PNG {}x{} to {}",
        frame.width,
        frame.height,
        path.display()
    );
    Ok(())
}

fn build_description(meta: &ExportMetadata) -> String {
    let b = &meta.bounds;
    format!(
        "Mandelbrot - x [{}, {}], y [{}, {}], Zoom: {}, Iterations: {}",
        b.xmin, b.xmax, b.ymin, b.ymax, meta.zoom, meta.max_iterations,
    )
}

fn build_metadata_pairs(meta: &ExportMetadata) -> Vec<(String, String)> {
    vec![
        ("Mandelzoom.XMin".into(), meta.bounds.xmin.to_string()),
        ("Mandelzoom.XMax".into(), meta.bounds.xmax.to_string()),
        ("Mandelzoom.YMin".into(), meta.bounds.ymin.to_string()),
        ("Mandelzoom.YMax".into(), meta.bounds.ymax.to_string()),
        ("Mandelzoom.Zoom".into(), meta.zoom.to_string()),
        ("Mandelzoom.MaxIterations".into(), meta.max_iterations.to_string()),
        ("Mandelzoom.Palette".into(), meta.palette_name.clone()),
        (
            "Mandelzoom.Resolution".into(),
            format!("{}x{}", meta.width, meta.height),
        ),
    ]
}
