pub mod buffer;
pub mod error;
pub mod explorer;
pub mod export;
pub mod iteration_buffer;
pub mod palette;
pub mod renderer;
pub mod tile;

pub use buffer::{RenderBuffer, RenderSurface};
pub use error::RenderError;
pub use explorer::{
    Explorer, InputSource, InputState, ViewCommand, POINT_OF_INTEREST, ZOOM_IN_STEP,
    ZOOM_OUT_STEP,
};
pub use export::{export_png, ExportMetadata};
pub use iteration_buffer::IterationBuffer;
pub use palette::{Palette, BACKGROUND};
pub use renderer::{render, RenderResult};
pub use tile::TILE_SIZE;

/// Convenience result type for the render crate.
pub type Result<T> = std::result::Result<T, RenderError>;
