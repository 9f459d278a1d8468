/// Destination for finished pixels.
///
/// Implemented by whatever owns the real framebuffer (a window, a texture, a
/// file encoder). Coordinates are in `[0, width) × [0, height)`.
pub trait RenderSurface {
    fn size(&self) -> (u32, u32);

    fn put_pixel(&mut self, x: u32, y: u32, rgba: [u8; 4]);
}

/// An RGBA frame, 4 bytes per pixel, row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl RenderBuffer {
    /// Create a new buffer filled with opaque black.
    pub fn new(width: u32, height: u32) -> Self {
        let mut pixels = vec![0u8; width as usize * height as usize * 4];
        for chunk in pixels.chunks_exact_mut(4) {
            chunk[3] = 255;
        }
        Self {
            width,
            height,
            pixels,
        }
    }

    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let idx = (y as usize * self.width as usize + x as usize) * 4;
        [
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
            self.pixels[idx + 3],
        ]
    }

    /// Hand every pixel to `surface`, clipped to the smaller of the two sizes.
    pub fn present<S: RenderSurface + ?Sized>(&self, surface: &mut S) {
        let (sw, sh) = surface.size();
        let w = self.width.min(sw);
        let h = self.height.min(sh);
        for y in 0..h {
            for x in 0..w {
                surface.put_pixel(x, y, self.pixel(x, y));
            }
        }
    }
}

impl RenderSurface for RenderBuffer {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    #[inline]
    fn put_pixel(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        if x >= self.width || y >= self.height {
            return;
        }
        let idx = (y as usize * self.width as usize + x as usize) * 4;
        self.pixels[idx..idx + 4].copy_from_slice(&rgba);
    }
}
