//! Per-frame driver: input and queued commands in, a colored frame out.
//!
//! The windowing layer owns the event loop and calls [`Explorer::on_update`]
//! once per frame with whatever input it polled, then hands the returned frame
//! (or [`Explorer::present`]) to its surface.

use std::collections::VecDeque;
use std::time::Duration;

use tracing::{debug, warn};

use mandelzoom_core::{
    Complex, EngineConfig, EscapeTime, Mandelbrot, PlaneBounds, Viewport, ViewportMapper,
};

use crate::buffer::{RenderBuffer, RenderSurface};
use crate::error::RenderError;
use crate::palette::Palette;
use crate::renderer::{render, RenderResult};
use crate::tile::TILE_SIZE;

/// Scale factor applied for each frame the zoom-in signal is held.
pub const ZOOM_IN_STEP: f64 = 1.1;

/// Scale factor applied for each frame the zoom-out signal is held.
pub const ZOOM_OUT_STEP: f64 = 0.9;

/// Target for scripted dives: just right of the period-3 cusp at -1.75 on
/// the real axis.
pub const POINT_OF_INTEREST: Complex = Complex {
    re: -1.749_998_410_993_740_8,
    im: -0.000_000_000_000_001_657_124_692_954_186_9,
};

/// What the input layer reports for the current frame.
pub trait InputSource {
    fn zoom_in_held(&self) -> bool;

    fn zoom_out_held(&self) -> bool;

    /// Pointer position in screen pixels.
    fn pointer(&self) -> (f64, f64);

    /// Screen-space drag since the previous frame.
    fn pan_delta(&self) -> (f64, f64) {
        (0.0, 0.0)
    }
}

/// Plain-data input snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputState {
    pub zoom_in: bool,
    pub zoom_out: bool,
    pub pointer: (f64, f64),
    pub pan: (f64, f64),
}

impl InputSource for InputState {
    fn zoom_in_held(&self) -> bool {
        self.zoom_in
    }

    fn zoom_out_held(&self) -> bool {
        self.zoom_out
    }

    fn pointer(&self) -> (f64, f64) {
        self.pointer
    }

    fn pan_delta(&self) -> (f64, f64) {
        self.pan
    }
}

/// A navigation request, queued between frames.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewCommand {
    Zoom {
        factor: f64,
        anchor_x: f64,
        anchor_y: f64,
    },
    Pan {
        dx: f64,
        dy: f64,
    },
    SetBounds(PlaneBounds),
    DiveToward {
        target: Complex,
        factor: f64,
    },
    Resize {
        width: u32,
        height: u32,
    },
    Reset,
}

/// Owns the engine, the viewport and the last finished frame.
pub struct Explorer {
    engine: Mandelbrot,
    mapper: ViewportMapper,
    palette: Palette,
    tile_size: u32,
    pending: VecDeque<ViewCommand>,
    frame: RenderBuffer,
    last: Option<RenderResult>,
    needs_render: bool,
    frames_rendered: u64,
}

impl Explorer {
    /// Validate the configuration and set up the starting view. No sweep runs
    /// until the first [`on_update`](Self::on_update).
    pub fn on_create(config: EngineConfig, width: u32, height: u32) -> crate::Result<Self> {
        let mapper = ViewportMapper::new(&config, width, height)?;
        Ok(Self {
            engine: Mandelbrot::new(config),
            mapper,
            palette: Palette::default(),
            tile_size: TILE_SIZE,
            pending: VecDeque::new(),
            frame: RenderBuffer::new(width, height),
            last: None,
            needs_render: true,
            frames_rendered: 0,
        })
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.set_palette(palette);
        self
    }

    pub fn with_tile_size(mut self, tile_size: u32) -> crate::Result<Self> {
        if tile_size == 0 {
            return Err(RenderError::InvalidTileSize(tile_size));
        }
        self.tile_size = tile_size;
        Ok(self)
    }

    /// Swap the palette and recolor the last sweep without iterating again.
    pub fn set_palette(&mut self, palette: Palette) {
        self.palette = palette;
        if let Some(ref last) = self.last {
            self.frame = self.palette.colorize(&last.iterations);
        }
    }

    /// Queue a command for the start of the next frame.
    pub fn queue(&mut self, command: ViewCommand) {
        self.pending.push_back(command);
    }

    pub fn pending_commands(&self) -> usize {
        self.pending.len()
    }

    /// Advance one frame.
    ///
    /// Held zoom signals become zoom commands anchored at the pointer, then
    /// every queued command is applied in order, bounds are recomputed once,
    /// and the grid is swept against that single snapshot. If nothing moved
    /// since the last frame, the previous frame is returned as is. A failed
    /// sweep leaves the previous frame in place.
    pub fn on_update<I: InputSource + ?Sized>(
        &mut self,
        elapsed: Duration,
        input: &I,
    ) -> crate::Result<&RenderBuffer> {
        self.collect_input(input);
        self.drain_commands();

        if self.needs_render {
            let bounds = self.mapper.recompute_bounds();
            let result = render(&self.engine, self.mapper.viewport(), self.tile_size)?;
            self.frame = self.palette.colorize(&result.iterations);
            self.last = Some(result);
            self.needs_render = false;
            self.frames_rendered += 1;
            debug!(
                frame = self.frames_rendered,
                elapsed_ms = elapsed.as_millis(),
                zoom = self.mapper.zoom_level(),
                xmin = bounds.xmin,
                ymin = bounds.ymin,
                "Frame updated"
            );
        }
        Ok(&self.frame)
    }

    /// Copy the current frame onto `surface`.
    pub fn present<S: RenderSurface + ?Sized>(&self, surface: &mut S) {
        self.frame.present(surface);
    }

    pub fn frame(&self) -> &RenderBuffer {
        &self.frame
    }

    pub fn last_result(&self) -> Option<&RenderResult> {
        self.last.as_ref()
    }

    pub fn mapper(&self) -> &ViewportMapper {
        &self.mapper
    }

    pub fn viewport(&self) -> Viewport {
        self.mapper.viewport()
    }

    pub fn config(&self) -> &EngineConfig {
        self.engine.config()
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    fn collect_input<I: InputSource + ?Sized>(&mut self, input: &I) {
        let (px, py) = input.pointer();
        if input.zoom_in_held() {
            self.queue(ViewCommand::Zoom {
                factor: ZOOM_IN_STEP,
                anchor_x: px,
                anchor_y: py,
            });
        }
        if input.zoom_out_held() {
            self.queue(ViewCommand::Zoom {
                factor: ZOOM_OUT_STEP,
                anchor_x: px,
                anchor_y: py,
            });
        }
        let (dx, dy) = input.pan_delta();
        if dx != 0.0 || dy != 0.0 {
            self.queue(ViewCommand::Pan { dx, dy });
        }
    }

    fn drain_commands(&mut self) {
        while let Some(command) = self.pending.pop_front() {
            let applied = match command {
                ViewCommand::Zoom {
                    factor,
                    anchor_x,
                    anchor_y,
                } => self.mapper.apply_zoom(factor, anchor_x, anchor_y),
                ViewCommand::Pan { dx, dy } => self.mapper.apply_pan(dx, dy),
                ViewCommand::SetBounds(bounds) => self.mapper.set_absolute_bounds(bounds),
                ViewCommand::DiveToward { target, factor } => {
                    self.mapper.dive_toward(target, factor)
                }
                ViewCommand::Resize { width, height } => {
                    self.mapper.resize(width, height).map(|()| {
                        self.frame = RenderBuffer::new(width, height);
                    })
                }
                ViewCommand::Reset => {
                    self.mapper.reset();
                    Ok(())
                }
            };
            match applied {
                Ok(()) => self.needs_render = true,
                Err(e) => warn!(?command, "Dropped view command: {e}"),
            }
        }
    }
}
