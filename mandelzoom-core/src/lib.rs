pub mod complex;
pub mod config;
pub mod error;
pub mod escape;
pub mod viewport;

// Re-export primary types for convenience.
pub use complex::Complex;
pub use config::EngineConfig;
pub use error::CoreError;
pub use escape::{escape_time, EscapeResult, EscapeTime, Mandelbrot};
pub use viewport::{PlaneBounds, Viewport, ViewportMapper};

/// Convenience result type for the core crate.
pub type Result<T> = std::result::Result<T, CoreError>;
