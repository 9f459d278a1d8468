use crate::complex::Complex;
use crate::config::EngineConfig;

/// Outcome of iterating a single plane coordinate.
///
/// `escaped == false` always comes with `iterations == max_iterations`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EscapeResult {
    pub iterations: u32,
    pub escaped: bool,
}

impl EscapeResult {
    /// A point that survived every iteration.
    #[inline]
    pub fn bounded(max_iterations: u32) -> Self {
        Self {
            iterations: max_iterations,
            escaped: false,
        }
    }

    #[inline]
    pub fn escaped_after(iterations: u32) -> Self {
        Self {
            iterations,
            escaped: true,
        }
    }
}

/// Something that assigns an escape time to a plane coordinate.
///
/// Renderers are generic over this trait (`E: EscapeTime`) rather than using
/// `dyn EscapeTime`, so the hot loop can be inlined into the sweep.
pub trait EscapeTime {
    fn evaluate(&self, c: Complex) -> EscapeResult;

    fn config(&self) -> &EngineConfig;
}

/// The quadratic map `z ← z² + c`.
#[derive(Debug, Clone)]
pub struct Mandelbrot {
    config: EngineConfig,
}

impl Mandelbrot {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }
}

impl Default for Mandelbrot {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl EscapeTime for Mandelbrot {
    #[inline]
    fn evaluate(&self, c: Complex) -> EscapeResult {
        if self.config.skip_known_interior && is_known_interior(c) {
            return EscapeResult::bounded(self.config.max_iterations);
        }
        escape_time(
            c.re,
            c.im,
            self.config.max_iterations,
            self.config.escape_radius_sq,
        )
    }

    fn config(&self) -> &EngineConfig {
        &self.config
    }
}

/// Count iterations of `z ← z² + c` for `c = x0 + i·y0` until `|z|²`
/// exceeds `escape_radius_sq`.
///
/// The orbit is seeded at `z = c` (the step from `z = 0` is folded in), so a
/// point already outside the radius reports `iterations == 0`. The comparison
/// is strict: `|z|² == escape_radius_sq` keeps iterating.
#[inline]
pub fn escape_time(x0: f64, y0: f64, max_iterations: u32, escape_radius_sq: f64) -> EscapeResult {
    let mut a = x0;
    let mut b = y0;
    let mut n = 0;
    while n < max_iterations {
        let aa = a * a;
        let bb = b * b;
        if aa + bb > escape_radius_sq {
            return EscapeResult::escaped_after(n);
        }
        b = 2.0 * a * b + y0;
        a = aa - bb + x0;
        n += 1;
    }
    EscapeResult::bounded(max_iterations)
}

#[inline]
fn is_known_interior(c: Complex) -> bool {
    in_cardioid(c.re, c.im) || in_period2_bulb(c)
}

/// Closed-form membership test for the main cardioid.
#[inline]
fn in_cardioid(re: f64, im: f64) -> bool {
    let im2 = im * im;
    let q = (re - 0.25) * (re - 0.25) + im2;
    q * (q + (re - 0.25)) <= 0.25 * im2
}

/// Closed-form membership test for the disc centred on `-1`.
#[inline]
fn in_period2_bulb(c: Complex) -> bool {
    (c + Complex::new(1.0, 0.0)).norm_sq() <= 0.0625
}
