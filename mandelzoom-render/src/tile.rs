use crate::error::RenderError;

/// Default tile size in pixels. 64×64 × 8 bytes = 32 KB, fits in L1 cache.
pub const TILE_SIZE: u32 = 64;

/// A rectangular block of pixels handed to one worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    /// Pixel x of the top-left corner.
    pub x: u32,
    /// Pixel y of the top-left corner.
    pub y: u32,
    /// Tile width in pixels (may be smaller at the right edge).
    pub width: u32,
    /// Tile height in pixels (may be smaller at the bottom edge).
    pub height: u32,
}

impl Tile {
    /// Number of pixels in this tile.
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// Partition a `width`×`height` screen into tiles of at most
/// `tile_size`×`tile_size`, row by row.
pub fn build_tile_grid(width: u32, height: u32, tile_size: u32) -> crate::Result<Vec<Tile>> {
    if tile_size == 0 {
        return Err(RenderError::InvalidTileSize(tile_size));
    }
    let mut tiles = Vec::new();
    let mut y = 0;
    while y < height {
        let th = tile_size.min(height - y);
        let mut x = 0;
        while x < width {
            let tw = tile_size.min(width - x);
            tiles.push(Tile {
                x,
                y,
                width: tw,
                height: th,
            });
            x += tw;
        }
        y += th;
    }
    Ok(tiles)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tile_grid_covers_screen_once() {
        let tiles = build_tile_grid(200, 150, TILE_SIZE).unwrap();
        let mut covered = vec![false; 200 * 150];
        for tile in &tiles {
            for py in tile.y..tile.y + tile.height {
                for px in tile.x..tile.x + tile.width {
                    let idx = py as usize * 200 + px as usize;
                    assert!(!covered[idx], "pixel ({px}, {py}) covered twice");
                    covered[idx] = true;
                }
            }
        }
        assert!(covered.iter().all(|&c| c), "all pixels must be covered");
    }

    #[test]
    fn edge_tiles_are_clipped() {
        let tiles = build_tile_grid(100, 70, 64).unwrap();
        assert_eq!(tiles.len(), 4);
        assert_eq!(tiles[1], Tile { x: 64, y: 0, width: 36, height: 64 });
        assert_eq!(tiles[3], Tile { x: 64, y: 64, width: 36, height: 6 });
    }

    #[test]
    fn single_row_tiles() {
        let tiles = build_tile_grid(180, 3, 1).unwrap();
        assert_eq!(tiles.len(), 180 * 3);
        assert!(tiles.iter().all(|t| t.pixel_count() == 1));
    }

    #[test]
    fn zero_tile_size_rejected() {
        assert!(matches!(
            build_tile_grid(10, 10, 0),
            Err(RenderError::InvalidTileSize(0))
        ));
    }
}
