use crate::error::CoreError;

/// Parameters fixed for the lifetime of an engine instance.
///
/// Construction validates every field, so the per-pixel loop never has to
/// guard against a degenerate configuration. Deserialization goes through the
/// same checks.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct EngineConfig {
    /// Iteration cap; points that survive this many steps are reported as
    /// not escaped.
    pub max_iterations: u32,

    /// Bailout threshold compared against `|z|²` with a strict `>`.
    pub escape_radius_sq: f64,

    /// Width of the visible plane region at zoom level 1.
    pub initial_range_x: f64,

    /// Reject points inside the main cardioid or the period-2 bulb without
    /// iterating. Off by default so results match the plain iteration exactly.
    pub skip_known_interior: bool,
}

impl<'de> serde::Deserialize<'de> for EngineConfig {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(serde::Deserialize)]
        struct Raw {
            max_iterations: u32,
            #[serde(default = "default_escape_radius_sq")]
            escape_radius_sq: f64,
            #[serde(default = "default_range_x")]
            initial_range_x: f64,
            #[serde(default)]
            skip_known_interior: bool,
        }
        let raw = Raw::deserialize(deserializer)?;
        let mut config = Self::new(raw.max_iterations, raw.initial_range_x)
            .and_then(|c| c.with_escape_radius_sq(raw.escape_radius_sq))
            .map_err(serde::de::Error::custom)?;
        config.skip_known_interior = raw.skip_known_interior;
        Ok(config)
    }
}

fn default_escape_radius_sq() -> f64 {
    EngineConfig::DEFAULT_ESCAPE_RADIUS_SQ
}

fn default_range_x() -> f64 {
    EngineConfig::DEFAULT_RANGE_X
}

impl EngineConfig {
    pub const DEFAULT_MAX_ITERATIONS: u32 = 2500;
    pub const DEFAULT_ESCAPE_RADIUS_SQ: f64 = 4.0;
    pub const DEFAULT_RANGE_X: f64 = 4.0;

    pub fn new(max_iterations: u32, initial_range_x: f64) -> crate::Result<Self> {
        if max_iterations < 1 {
            return Err(CoreError::InvalidMaxIterations(max_iterations));
        }
        if initial_range_x <= 0.0 || !initial_range_x.is_finite() {
            return Err(CoreError::InvalidRange(initial_range_x));
        }
        Ok(Self {
            max_iterations,
            escape_radius_sq: Self::DEFAULT_ESCAPE_RADIUS_SQ,
            initial_range_x,
            skip_known_interior: false,
        })
    }

    /// Return a copy with a different bailout threshold.
    pub fn with_escape_radius_sq(self, escape_radius_sq: f64) -> crate::Result<Self> {
        if escape_radius_sq <= 0.0 || !escape_radius_sq.is_finite() {
            return Err(CoreError::InvalidEscapeRadius(escape_radius_sq));
        }
        Ok(Self {
            escape_radius_sq,
            ..self
        })
    }

    /// Return a copy with the cardioid/bulb shortcut toggled.
    pub fn with_skip_known_interior(self, skip_known_interior: bool) -> Self {
        Self {
            skip_known_interior,
            ..self
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_iterations: Self::DEFAULT_MAX_ITERATIONS,
            escape_radius_sq: Self::DEFAULT_ESCAPE_RADIUS_SQ,
            initial_range_x: Self::DEFAULT_RANGE_X,
            skip_known_interior: false,
        }
    }
}
