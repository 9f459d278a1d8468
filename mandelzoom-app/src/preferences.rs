use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use mandelzoom_core::{Complex, EngineConfig};
use mandelzoom_render::{Palette, POINT_OF_INTEREST, TILE_SIZE};

const FILE_NAME: &str = "preferences.json";

// ---------------------------------------------------------------------------
// Scripted input
// ---------------------------------------------------------------------------

/// A run of identical input frames.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptSegment {
    pub frames: u32,
    #[serde(default)]
    pub zoom_in: bool,
    #[serde(default)]
    pub zoom_out: bool,
    /// Pointer position in screen pixels.
    #[serde(default)]
    pub pointer: [f64; 2],
    /// Drag per frame in screen pixels.
    #[serde(default)]
    pub pan: [f64; 2],
}

/// Repeated jumps toward a fixed plane point, halving the view each step by default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiveSettings {
    #[serde(default = "default_dive_re")]
    pub target_re: f64,
    #[serde(default = "default_dive_im")]
    pub target_im: f64,
    #[serde(default = "default_dive_factor")]
    pub factor: f64,
    #[serde(default = "default_dive_steps")]
    pub steps: u32,
}

impl DiveSettings {
    pub fn target(&self) -> Complex {
        Complex::new(self.target_re, self.target_im)
    }
}

/// Which coloring scheme to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaletteScheme {
    #[default]
    Classic,
    Hsv,
}

// ---------------------------------------------------------------------------
// Preferences
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
    /// Plane width visible at zoom level 1.
    #[serde(default = "default_range_x")]
    pub range_x: f64,
    #[serde(default = "default_max_iterations")]
    pub max_iterations: u32,
    #[serde(default)]
    pub skip_known_interior: bool,
    #[serde(default)]
    pub palette: PaletteScheme,
    #[serde(default = "default_hsv_colors")]
    pub hsv_colors: u32,
    #[serde(default = "default_hsv_saturation")]
    pub hsv_saturation: f64,
    #[serde(default = "default_tile_size")]
    pub tile_size: u32,
    /// Upper bound on scripted frames; `None` plays the whole script.
    #[serde(default)]
    pub frames: Option<u32>,
    /// Minimum wall time per frame. `0` runs frames back to back.
    #[serde(default)]
    pub frame_interval_ms: u64,
    #[serde(default = "default_script")]
    pub script: Vec<ScriptSegment>,
    #[serde(default)]
    pub dive: Option<DiveSettings>,
    /// File name of the exported final frame, inside the images directory.
    #[serde(default = "default_output")]
    pub output: String,
}

fn default_width() -> u32 {
    180
}
fn default_height() -> u32 {
    180
}
fn default_range_x() -> f64 {
    EngineConfig::DEFAULT_RANGE_X
}
fn default_max_iterations() -> u32 {
    EngineConfig::DEFAULT_MAX_ITERATIONS
}
fn default_hsv_colors() -> u32 {
    50
}
fn default_hsv_saturation() -> f64 {
    0.9
}
fn default_tile_size() -> u32 {
    TILE_SIZE
}
fn default_script() -> Vec<ScriptSegment> {
    vec![ScriptSegment {
        frames: 30,
        zoom_in: true,
        zoom_out: false,
        pointer: [45.0, 90.0],
        pan: [0.0, 0.0],
    }]
}
fn default_output() -> String {
    "mandelzoom.png".to_string()
}
fn default_dive_re() -> f64 {
    POINT_OF_INTEREST.re
}
fn default_dive_im() -> f64 {
    POINT_OF_INTEREST.im
}
fn default_dive_factor() -> f64 {
    2.0
}
fn default_dive_steps() -> u32 {
    10
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            range_x: default_range_x(),
            max_iterations: default_max_iterations(),
            skip_known_interior: false,
            palette: PaletteScheme::default(),
            hsv_colors: default_hsv_colors(),
            hsv_saturation: default_hsv_saturation(),
            tile_size: default_tile_size(),
            frames: None,
            frame_interval_ms: 0,
            script: default_script(),
            dive: None,
            output: default_output(),
        }
    }
}

impl Preferences {
    /// Load preferences from next to the executable, then from the per-user
    /// config directory, falling back to defaults. A missing file is created
    /// with the defaults so it can be edited.
    pub fn load() -> Self {
        let candidates = preference_paths();
        for path in &candidates {
            if path.exists() {
                return Self::load_from(path);
            }
        }
        debug!("No preferences file found, using defaults");
        let prefs = Self::default();
        if let Some(path) = candidates.first() {
            prefs.save_to(path);
        }
        prefs
    }

    /// Load from an explicit file; unreadable or invalid files yield defaults.
    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str::<Preferences>(&json) {
                Ok(prefs) => {
                    info!("Loaded preferences from {}", path.display());
                    return prefs;
                }
                Err(e) => error!("Failed to parse preferences: {e}"),
            },
            Err(e) => error!("Failed to read preferences file: {e}"),
        }
        Self::default()
    }

    /// Persist preferences to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) {
        if let Some(parent) = path.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                error!("Failed to create config directory: {e}");
                return;
            }
        }
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = fs::write(path, &json) {
                    error!("Failed to write preferences: {e}");
                } else {
                    debug!("Saved preferences to {}", path.display());
                }
            }
            Err(e) => error!("Failed to serialize preferences: {e}"),
        }
    }

    /// Validated engine parameters.
    pub fn engine_config(&self) -> mandelzoom_core::Result<EngineConfig> {
        Ok(EngineConfig::new(self.max_iterations, self.range_x)?
            .with_skip_known_interior(self.skip_known_interior))
    }

    pub fn build_palette(&self) -> mandelzoom_render::Result<Palette> {
        match self.palette {
            PaletteScheme::Classic => Ok(Palette::classic()),
            PaletteScheme::Hsv => Palette::hsv_cycle(self.hsv_colors, self.hsv_saturation),
        }
    }

    /// Number of scripted input frames that will be played.
    pub fn scripted_frames(&self) -> u32 {
        let total = self.script.iter().map(|s| s.frames).sum();
        match self.frames {
            Some(cap) => cap.min(total),
            None => total,
        }
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms)
    }
}

fn preference_paths() -> Vec<PathBuf> {
    let mut paths = vec![crate::app_dir::exe_directory().join(FILE_NAME)];
    if let Some(dir) = crate::app_dir::config_directory() {
        paths.push(dir.join(FILE_NAME));
    }
    paths
}
