use mandelzoom_core::EscapeResult;

use crate::tile::Tile;

/// Per-pixel escape results for one frame, row-major.
///
/// This is the raw output of a sweep before coloring. Keeping it separate
/// from the RGBA frame lets a palette change recolor without re-iterating.
#[derive(Debug, Clone, PartialEq)]
pub struct IterationBuffer {
    pub width: u32,
    pub height: u32,
    pub max_iterations: u32,
    pub data: Vec<EscapeResult>,
}

impl IterationBuffer {
    /// A buffer with every pixel marked as not escaped.
    pub fn new(width: u32, height: u32, max_iterations: u32) -> Self {
        let size = width as usize * height as usize;
        Self {
            width,
            height,
            max_iterations,
            data: vec![EscapeResult::bounded(max_iterations); size],
        }
    }

    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<EscapeResult> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.data
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    /// Copy a tile's results into its place in the frame.
    pub fn blit_tile(&mut self, tile: &Tile, tile_data: &[EscapeResult]) {
        debug_assert_eq!(tile_data.len(), tile.pixel_count());
        for py in 0..tile.height {
            let buf_y = tile.y + py;
            if buf_y >= self.height {
                break;
            }
            let dst_start = buf_y as usize * self.width as usize + tile.x as usize;
            let src_start = py as usize * tile.width as usize;
            let copy_w = tile.width.min(self.width - tile.x) as usize;
            self.data[dst_start..dst_start + copy_w]
                .copy_from_slice(&tile_data[src_start..src_start + copy_w]);
        }
    }

    /// Number of pixels that escaped.
    pub fn escaped_count(&self) -> usize {
        self.data.iter().filter(|r| r.escaped).count()
    }
}
