use mandelzoom_core::EscapeResult;
use rayon::prelude::*;

use crate::buffer::RenderBuffer;
use crate::error::RenderError;
use crate::iteration_buffer::IterationBuffer;

/// Color used for points that never escaped, and for points that were
/// already outside the radius before the first step.
pub const BACKGROUND: [u8; 4] = [0, 0, 0, 255];

/// The 16-step gradient: dark brown, through deep and light blues, to warm
/// yellow, orange and back to brown.
const CLASSIC: [[u8; 3]; 16] = [
    [66, 30, 15],
    [25, 7, 26],
    [9, 1, 47],
    [4, 4, 73],
    [0, 7, 100],
    [12, 44, 138],
    [24, 82, 177],
    [57, 125, 209],
    [134, 181, 229],
    [211, 236, 248],
    [241, 233, 191],
    [248, 201, 95],
    [255, 170, 0],
    [204, 128, 0],
    [153, 87, 0],
    [106, 52, 3],
];

/// A fixed, cyclic list of colors indexed by iteration count.
///
/// Escaped points take `colors[iterations % len]`. There is no interpolation:
/// neighbouring iteration counts land on neighbouring entries.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    pub name: &'static str,
    colors: Vec<[u8; 4]>,
}

impl Palette {
    pub fn new(name: &'static str, colors: Vec<[u8; 4]>) -> crate::Result<Self> {
        if colors.is_empty() {
            return Err(RenderError::InvalidPalette(format!(
                "palette '{name}' has no colors"
            )));
        }
        Ok(Self { name, colors })
    }

    /// The 16-entry brown/blue/orange gradient.
    pub fn classic() -> Self {
        Self {
            name: "classic",
            colors: CLASSIC.iter().map(|&[r, g, b]| [r, g, b, 255]).collect(),
        }
    }

    /// `colors` evenly spaced hues at the given saturation and full value.
    pub fn hsv_cycle(colors: u32, saturation: f64) -> crate::Result<Self> {
        if !(0.0..=1.0).contains(&saturation) {
            return Err(RenderError::InvalidPalette(format!(
                "hsv saturation {saturation} is outside [0, 1]"
            )));
        }
        let colors = (0..colors)
            .map(|i| hsv_to_rgba(i as f64 / colors as f64, saturation, 1.0))
            .collect();
        Self::new("hsv", colors)
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Color for one escape result.
    #[inline]
    pub fn color(&self, result: EscapeResult) -> [u8; 4] {
        if !result.escaped || result.iterations == 0 {
            return BACKGROUND;
        }
        self.colors[result.iterations as usize % self.colors.len()]
    }

    /// Color an entire frame in parallel.
    pub fn colorize(&self, iter_buf: &IterationBuffer) -> RenderBuffer {
        let mut pixels = vec![0u8; iter_buf.data.len() * 4];
        pixels
            .par_chunks_mut(4)
            .zip(iter_buf.data.par_iter())
            .for_each(|(pixel, &result)| {
                pixel.copy_from_slice(&self.color(result));
            });
        RenderBuffer {
            width: iter_buf.width,
            height: iter_buf.height,
            pixels,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::classic()
    }
}

/// `h`, `s`, `v` in `[0, 1]`; `h` wraps.
fn hsv_to_rgba(h: f64, s: f64, v: f64) -> [u8; 4] {
    let h6 = h.rem_euclid(1.0) * 6.0;
    let sector = h6.floor();
    let f = h6 - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));
    let (r, g, b) = match sector as u32 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };
    let to_byte = |c: f64| (c * 255.0).round().clamp(0.0, 255.0) as u8;
    [to_byte(r), to_byte(g), to_byte(b), 255]
}
