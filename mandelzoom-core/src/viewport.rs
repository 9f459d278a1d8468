use tracing::{debug, warn};

use crate::complex::Complex;
use crate::config::EngineConfig;
use crate::error::CoreError;

/// Pixel pitch (plane units per pixel) below which neighbouring pixels start
/// collapsing onto the same `f64` value, relative to the magnitude of the
/// coordinates involved.
const PRECISION_WARN_RATIO: f64 = 1e-14;

/// Axis-aligned rectangle of the complex plane.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PlaneBounds {
    pub xmin: f64,
    pub xmax: f64,
    pub ymin: f64,
    pub ymax: f64,
}

impl PlaneBounds {
    pub fn new(xmin: f64, xmax: f64, ymin: f64, ymax: f64) -> crate::Result<Self> {
        let b = Self {
            xmin,
            xmax,
            ymin,
            ymax,
        };
        b.validate()?;
        Ok(b)
    }

    /// A rectangle of the given spans centred on `center`.
    pub fn centered(center: Complex, span_x: f64, span_y: f64) -> crate::Result<Self> {
        let half = Complex::new(span_x, span_y) * 0.5;
        let lo = center - half;
        let hi = center + half;
        Self::new(lo.re, hi.re, lo.im, hi.im)
    }

    fn validate(&self) -> crate::Result<()> {
        let all_finite = [self.xmin, self.xmax, self.ymin, self.ymax]
            .iter()
            .all(|v| v.is_finite());
        if !all_finite {
            return Err(CoreError::InvalidViewport {
                reason: format!("bounds must be finite, got {self:?}"),
            });
        }
        if self.xmax <= self.xmin || self.ymax <= self.ymin {
            return Err(CoreError::InvalidViewport {
                reason: format!(
                    "bounds must satisfy xmax > xmin and ymax > ymin, got x [{}, {}] y [{}, {}]",
                    self.xmin, self.xmax, self.ymin, self.ymax
                ),
            });
        }
        Ok(())
    }

    pub fn span_x(&self) -> f64 {
        self.xmax - self.xmin
    }

    pub fn span_y(&self) -> f64 {
        self.ymax - self.ymin
    }

    pub fn center(&self) -> Complex {
        Complex::new(self.xmin, self.ymin) + Complex::new(self.span_x(), self.span_y()) * 0.5
    }
}

/// The region of the plane currently mapped onto the screen.
///
/// Holds both the plane bounds swept by the renderer and the screen transform
/// that zoom and pan act on. The transform maps screen pixel `(sx, sy)` to
/// `(sx / scale_x + offset_x, sy / scale_y + offset_y)`; screen y grows
/// downward and so does plane y.
///
/// `Viewport` is `Copy`: a sweep takes one by value and never sees a
/// half-applied update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub bounds: PlaneBounds,
    pub offset_x: f64,
    pub offset_y: f64,
    /// Pixels per plane unit along x.
    pub scale_x: f64,
    /// Pixels per plane unit along y.
    pub scale_y: f64,
    /// Screen width in pixels.
    pub width: u32,
    /// Screen height in pixels.
    pub height: u32,
}

impl Viewport {
    #[inline]
    pub fn screen_to_plane(&self, sx: f64, sy: f64) -> Complex {
        Complex::new(sx / self.scale_x + self.offset_x, sy / self.scale_y + self.offset_y)
    }

    #[inline]
    pub fn plane_to_screen(&self, c: Complex) -> (f64, f64) {
        (
            (c.re - self.offset_x) * self.scale_x,
            (c.im - self.offset_y) * self.scale_y,
        )
    }

    /// Plane-space distance between horizontally and vertically adjacent pixels.
    #[inline]
    pub fn pixel_pitch(&self) -> (f64, f64) {
        (
            self.bounds.span_x() / self.width as f64,
            self.bounds.span_y() / self.height as f64,
        )
    }

    /// Plane coordinate swept for pixel `(px, py)`.
    ///
    /// Reads only `bounds`, so the result is fixed for a given snapshot.
    /// Pixel `(0, 0)` samples `(xmin, ymin)`; `xmax`/`ymax` lie one pitch past
    /// the last pixel.
    #[inline]
    pub fn pixel_to_plane(&self, px: u32, py: u32) -> Complex {
        let (dx, dy) = self.pixel_pitch();
        Complex::new(
            self.bounds.xmin + px as f64 * dx,
            self.bounds.ymin + py as f64 * dy,
        )
    }

    /// Plane spans covered by the screen under the current transform.
    ///
    /// Unlike `bounds`, this reflects zoom and pan applied since the last
    /// [`ViewportMapper::recompute_bounds`].
    #[inline]
    pub fn visible_span(&self) -> (f64, f64) {
        (
            self.width as f64 / self.scale_x,
            self.height as f64 / self.scale_y,
        )
    }
}

/// Owns the [`Viewport`] and applies navigation to it.
///
/// Zoom and pan act on the screen transform;
/// [`recompute_bounds`](Self::recompute_bounds) then derives the plane bounds
/// the next sweep reads. Absolute jumps go the other way, writing bounds and re-deriving the
/// transform.
#[derive(Debug, Clone)]
pub struct ViewportMapper {
    viewport: Viewport,
    initial_range_x: f64,
    precision_warned: bool,
}

impl ViewportMapper {
    /// Build the starting view: `initial_range_x` wide, centred on the
    /// origin, with the y span chosen so pixels cover square plane regions.
    pub fn new(config: &EngineConfig, width: u32, height: u32) -> crate::Result<Self> {
        check_dimensions(width, height)?;
        if config.initial_range_x <= 0.0 || !config.initial_range_x.is_finite() {
            return Err(CoreError::InvalidRange(config.initial_range_x));
        }
        let viewport = initial_viewport(config.initial_range_x, width, height);
        debug!(
            width,
            height,
            xmin = viewport.bounds.xmin,
            ymin = viewport.bounds.ymin,
            "Viewport initialised"
        );
        Ok(Self {
            viewport,
            initial_range_x: config.initial_range_x,
            precision_warned: false,
        })
    }

    /// Snapshot of the current state.
    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn bounds(&self) -> PlaneBounds {
        self.viewport.bounds
    }

    #[inline]
    pub fn screen_to_plane(&self, sx: f64, sy: f64) -> Complex {
        self.viewport.screen_to_plane(sx, sy)
    }

    #[inline]
    pub fn plane_to_screen(&self, c: Complex) -> (f64, f64) {
        self.viewport.plane_to_screen(c)
    }

    /// Scale the view by `factor` around the screen point `(anchor_x, anchor_y)`.
    ///
    /// `factor > 1` zooms in. The plane point under the anchor is the same
    /// before and after the call. Bounds are not touched until the next
    /// [`recompute_bounds`](Self::recompute_bounds).
    pub fn apply_zoom(&mut self, factor: f64, anchor_x: f64, anchor_y: f64) -> crate::Result<()> {
        if factor <= 0.0 || !factor.is_finite() {
            return Err(CoreError::InvalidZoomFactor(factor));
        }
        let vp = &mut self.viewport;
        let new_scale_x = vp.scale_x * factor;
        let new_scale_y = vp.scale_y * factor;
        let representable = |s: f64| s > 0.0 && s.is_finite();
        if !representable(new_scale_x) || !representable(new_scale_y) {
            return Err(CoreError::InvalidViewport {
                reason: format!("zoom by {factor} leaves the representable scale range"),
            });
        }

        let before = vp.screen_to_plane(anchor_x, anchor_y);
        vp.scale_x = new_scale_x;
        vp.scale_y = new_scale_y;
        let after = vp.screen_to_plane(anchor_x, anchor_y);
        vp.offset_x += before.re - after.re;
        vp.offset_y += before.im - after.im;
        Ok(())
    }

    /// Drag the view by a screen-space delta; content follows the pointer.
    pub fn apply_pan(&mut self, dx: f64, dy: f64) -> crate::Result<()> {
        if !dx.is_finite() || !dy.is_finite() {
            return Err(CoreError::InvalidViewport {
                reason: format!("pan delta must be finite, got ({dx}, {dy})"),
            });
        }
        let vp = &mut self.viewport;
        vp.offset_x -= dx / vp.scale_x;
        vp.offset_y -= dy / vp.scale_y;
        Ok(())
    }

    /// Derive plane bounds from the screen corners and store them.
    ///
    /// Idempotent: with no zoom or pan in between, repeated calls return the
    /// same bounds. Because both axes are always scaled together, the aspect
    /// ratio set at construction carries through unchanged.
    pub fn recompute_bounds(&mut self) -> PlaneBounds {
        let vp = &mut self.viewport;
        let top_left = vp.screen_to_plane(0.0, 0.0);
        let bottom_right = vp.screen_to_plane(vp.width as f64, vp.height as f64);
        vp.bounds = PlaneBounds {
            xmin: top_left.re,
            xmax: bottom_right.re,
            ymin: top_left.im,
            ymax: bottom_right.im,
        };
        self.check_precision();
        self.viewport.bounds
    }

    /// Jump straight to `bounds`, re-deriving the transform so that
    /// `screen_to_plane` agrees with them.
    ///
    /// The bounds are honoured exactly; a rectangle whose aspect differs from
    /// the screen's yields non-square pixels.
    pub fn set_absolute_bounds(&mut self, bounds: PlaneBounds) -> crate::Result<()> {
        bounds.validate()?;
        let vp = &mut self.viewport;
        vp.scale_x = vp.width as f64 / bounds.span_x();
        vp.scale_y = vp.height as f64 / bounds.span_y();
        vp.offset_x = bounds.xmin;
        vp.offset_y = bounds.ymin;
        vp.bounds = bounds;
        debug!(?bounds, "Viewport set to absolute bounds");
        self.check_precision();
        Ok(())
    }

    /// Recentre on `target` and shrink both spans by `zoom_factor`.
    ///
    /// The spans come from the transform, so zoom applied earlier in the same
    /// frame carries into the dive.
    pub fn dive_toward(&mut self, target: Complex, zoom_factor: f64) -> crate::Result<()> {
        if zoom_factor <= 0.0 || !zoom_factor.is_finite() {
            return Err(CoreError::InvalidZoomFactor(zoom_factor));
        }
        if !target.is_finite() {
            return Err(CoreError::InvalidViewport {
                reason: format!("dive target must be finite, got {target}"),
            });
        }
        let (span_x, span_y) = self.viewport.visible_span();
        let next = PlaneBounds::centered(target, span_x / zoom_factor, span_y / zoom_factor)?;
        self.set_absolute_bounds(next)
    }

    /// Adopt a new screen size, keeping the top-left plane point and the
    /// pixel pitch. More or less of the plane becomes visible; nothing
    /// stretches.
    pub fn resize(&mut self, width: u32, height: u32) -> crate::Result<()> {
        check_dimensions(width, height)?;
        self.viewport.width = width;
        self.viewport.height = height;
        self.recompute_bounds();
        Ok(())
    }

    /// Return to the starting view for the current screen size.
    pub fn reset(&mut self) {
        self.viewport = initial_viewport(
            self.initial_range_x,
            self.viewport.width,
            self.viewport.height,
        );
        self.precision_warned = false;
    }

    /// Magnification relative to the starting view, current as of the last
    /// zoom even before bounds are recomputed.
    pub fn zoom_level(&self) -> f64 {
        self.initial_range_x / self.viewport.visible_span().0
    }

    fn check_precision(&mut self) {
        let vp = &self.viewport;
        let (dx, dy) = vp.pixel_pitch();
        let magnitude = vp
            .bounds
            .xmin
            .abs()
            .max(vp.bounds.xmax.abs())
            .max(vp.bounds.ymin.abs())
            .max(vp.bounds.ymax.abs())
            .max(1.0);
        let near_limit = dx.min(dy) < magnitude * PRECISION_WARN_RATIO;
        if near_limit && !self.precision_warned {
            warn!(
                pitch_x = dx,
                pitch_y = dy,
                "Pixel pitch is near f64 resolution; the image will degrade"
            );
        }
        self.precision_warned = near_limit;
    }
}

fn check_dimensions(width: u32, height: u32) -> crate::Result<()> {
    if width == 0 || height == 0 {
        return Err(CoreError::InvalidViewport {
            reason: format!("dimensions must be > 0, got {width}×{height}"),
        });
    }
    Ok(())
}

fn initial_viewport(range_x: f64, width: u32, height: u32) -> Viewport {
    let range_y = range_x * height as f64 / width as f64;
    let xmin = -range_x / 2.0;
    let ymin = -range_y / 2.0;
    let bounds = PlaneBounds {
        xmin,
        xmax: -xmin,
        ymin,
        ymax: -ymin,
    };
    let scale = width as f64 / range_x;
    Viewport {
        bounds,
        offset_x: xmin,
        offset_y: ymin,
        scale_x: scale,
        scale_y: scale,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    fn mapper(width: u32, height: u32) -> ViewportMapper {
        ViewportMapper::new(&EngineConfig::new(100, 4.0).unwrap(), width, height).unwrap()
    }

    fn rel_close(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() <= tol * a.abs().max(b.abs()).max(1.0)
    }

    #[test]
    fn initial_bounds_follow_aspect() {
        let m = mapper(200, 100);
        let b = m.bounds();
        assert!((b.xmin + 2.0).abs() < EPSILON);
        assert!((b.xmax - 2.0).abs() < EPSILON);
        assert!((b.ymin + 1.0).abs() < EPSILON);
        assert!((b.ymax - 1.0).abs() < EPSILON);
    }

    #[test]
    fn initial_pixels_are_square() {
        let vp = mapper(320, 180).viewport();
        let (dx, dy) = vp.pixel_pitch();
        assert!((dx - dy).abs() < EPSILON);
        assert_eq!(vp.scale_x, vp.scale_y);
    }

    #[test]
    fn initial_transform_matches_bounds() {
        let mut m = mapper(180, 180);
        let before = m.bounds();
        let after = m.recompute_bounds();
        assert!((before.xmin - after.xmin).abs() < EPSILON);
        assert!((before.xmax - after.xmax).abs() < EPSILON);
        assert!((before.ymin - after.ymin).abs() < EPSILON);
        assert!((before.ymax - after.ymax).abs() < EPSILON);
    }

    #[test]
    fn screen_corners_map_to_bounds() {
        let m = mapper(100, 100);
        let tl = m.screen_to_plane(0.0, 0.0);
        let br = m.screen_to_plane(100.0, 100.0);
        assert!((tl.re + 2.0).abs() < EPSILON && (tl.im + 2.0).abs() < EPSILON);
        assert!((br.re - 2.0).abs() < EPSILON && (br.im - 2.0).abs() < EPSILON);
    }

    #[test]
    fn plane_to_screen_inverts_screen_to_plane() {
        let mut m = mapper(640, 480);
        m.apply_zoom(3.7, 100.0, 50.0).unwrap();
        m.apply_pan(-12.0, 33.0).unwrap();
        for (sx, sy) in [(0.0, 0.0), (17.0, 400.0), (639.0, 1.0), (320.5, 240.25)] {
            let (bx, by) = m.plane_to_screen(m.screen_to_plane(sx, sy));
            assert!((bx - sx).abs() < 1e-9, "x: {bx} vs {sx}");
            assert!((by - sy).abs() < 1e-9, "y: {by} vs {sy}");
        }
    }

    #[test]
    fn zoom_keeps_anchor_fixed() {
        let factors = [1.1, 0.9, 2.0, 0.5, 10.0, 0.01, 1.0];
        let anchors = [(0.0, 0.0), (90.0, 90.0), (179.0, 3.0), (45.5, 170.25)];
        for &f in &factors {
            for &(ax, ay) in &anchors {
                let mut m = mapper(180, 180);
                let before = m.screen_to_plane(ax, ay);
                m.apply_zoom(f, ax, ay).unwrap();
                let after = m.screen_to_plane(ax, ay);
                assert!(rel_close(before.re, after.re, 1e-9), "f={f} a=({ax},{ay})");
                assert!(rel_close(before.im, after.im, 1e-9), "f={f} a=({ax},{ay})");
            }
        }
    }

    #[test]
    fn repeated_zoom_keeps_anchor_fixed() {
        let mut m = mapper(540, 540);
        let anchor = (123.0, 456.0);
        let target = m.screen_to_plane(anchor.0, anchor.1);
        for _ in 0..200 {
            m.apply_zoom(1.1, anchor.0, anchor.1).unwrap();
        }
        let now = m.screen_to_plane(anchor.0, anchor.1);
        assert!(rel_close(target.re, now.re, 1e-9));
        assert!(rel_close(target.im, now.im, 1e-9));
    }

    #[test]
    fn zoom_in_shrinks_bounds() {
        let mut m = mapper(200, 200);
        let span = m.bounds().span_x();
        m.apply_zoom(2.0, 100.0, 100.0).unwrap();
        let b = m.recompute_bounds();
        assert!((b.span_x() - span / 2.0).abs() < EPSILON);
        assert!((m.zoom_level() - 2.0).abs() < EPSILON);
    }

    #[test]
    fn zoom_preserves_aspect_ratio() {
        let mut m = mapper(300, 200);
        let ratio = m.bounds().span_y() / m.bounds().span_x();
        m.apply_zoom(1.1, 10.0, 190.0).unwrap();
        m.apply_zoom(0.9, 250.0, 20.0).unwrap();
        let b = m.recompute_bounds();
        assert!((b.span_y() / b.span_x() - ratio).abs() < 1e-12);
    }

    #[test]
    fn invalid_zoom_factor_rejected() {
        let mut m = mapper(100, 100);
        let vp = m.viewport();
        assert!(m.apply_zoom(0.0, 1.0, 1.0).is_err());
        assert!(m.apply_zoom(-2.0, 1.0, 1.0).is_err());
        assert!(m.apply_zoom(f64::NAN, 1.0, 1.0).is_err());
        assert!(m.apply_zoom(f64::INFINITY, 1.0, 1.0).is_err());
        assert_eq!(m.viewport(), vp, "failed zoom must not change state");
    }

    #[test]
    fn recompute_bounds_is_idempotent() {
        let mut m = mapper(180, 120);
        m.apply_zoom(1.1, 33.0, 77.0).unwrap();
        m.apply_pan(5.0, -9.0).unwrap();
        let first = m.recompute_bounds();
        let second = m.recompute_bounds();
        assert_eq!(first, second);
    }

    #[test]
    fn pan_moves_content_with_pointer() {
        let mut m = mapper(100, 100);
        let under = m.screen_to_plane(10.0, 10.0);
        m.apply_pan(20.0, 5.0).unwrap();
        let moved = m.screen_to_plane(30.0, 15.0);
        assert!((under.re - moved.re).abs() < EPSILON);
        assert!((under.im - moved.im).abs() < EPSILON);
    }

    #[test]
    fn non_finite_pan_rejected() {
        let mut m = mapper(100, 100);
        let vp = m.viewport();
        assert!(m.apply_pan(f64::NAN, 0.0).is_err());
        assert!(m.apply_pan(0.0, f64::INFINITY).is_err());
        assert!(m.apply_pan(f64::NEG_INFINITY, f64::NAN).is_err());
        assert_eq!(m.viewport(), vp);
    }

    #[test]
    fn absolute_bounds_agree_with_transform() {
        let mut m = mapper(400, 300);
        let target = PlaneBounds::new(-0.8, -0.7, 0.05, 0.125).unwrap();
        m.set_absolute_bounds(target).unwrap();
        let tl = m.screen_to_plane(0.0, 0.0);
        let br = m.screen_to_plane(400.0, 300.0);
        assert!(rel_close(tl.re, -0.8, 1e-12));
        assert!(rel_close(tl.im, 0.05, 1e-12));
        assert!(rel_close(br.re, -0.7, 1e-12));
        assert!(rel_close(br.im, 0.125, 1e-12));

        let recomputed = m.recompute_bounds();
        assert!(rel_close(recomputed.xmax, target.xmax, 1e-12));
        assert!(rel_close(recomputed.ymax, target.ymax, 1e-12));
    }

    #[test]
    fn invalid_absolute_bounds_rejected() {
        let mut m = mapper(100, 100);
        let bad = PlaneBounds {
            xmin: 1.0,
            xmax: 1.0,
            ymin: 0.0,
            ymax: 1.0,
        };
        assert!(m.set_absolute_bounds(bad).is_err());
        assert!(PlaneBounds::new(0.0, 1.0, 2.0, -2.0).is_err());
        assert!(PlaneBounds::new(f64::NAN, 1.0, 0.0, 1.0).is_err());
    }

    #[test]
    fn dive_recentres_and_keeps_aspect() {
        let mut m = mapper(360, 180);
        let target = Complex::new(-1.749_998_410_993_740_8, 0.0);
        m.dive_toward(target, 2.0).unwrap();
        let b = m.bounds();
        assert!((b.span_x() - 2.0).abs() < EPSILON);
        assert!((b.span_y() - 1.0).abs() < EPSILON);
        assert!((b.center().re - target.re).abs() < EPSILON);
        assert!((b.center().im - target.im).abs() < EPSILON);
        let (dx, dy) = m.viewport().pixel_pitch();
        assert!((dx - dy).abs() < EPSILON);
    }

    #[test]
    fn dive_after_zoom_keeps_the_zoom() {
        let mut m = mapper(100, 100);
        m.apply_zoom(4.0, 50.0, 50.0).unwrap();
        m.dive_toward(Complex::ZERO, 2.0).unwrap();
        let b = m.bounds();
        assert!((b.span_x() - 0.5).abs() < EPSILON);
        assert!((b.span_y() - 0.5).abs() < EPSILON);
        assert!(b.center().re.abs() < EPSILON && b.center().im.abs() < EPSILON);
        assert!((m.zoom_level() - 8.0).abs() < 1e-9);
    }

    #[test]
    fn dive_after_pan_and_zoom_in_one_frame() {
        let mut m = mapper(200, 100);
        m.apply_pan(30.0, -10.0).unwrap();
        m.apply_zoom(2.0, 0.0, 0.0).unwrap();
        let target = Complex::new(-0.5, 0.25);
        m.dive_toward(target, 4.0).unwrap();
        let b = m.bounds();
        assert!((b.span_x() - 0.5).abs() < EPSILON);
        assert!((b.span_y() - 0.25).abs() < EPSILON);
        assert!((b.center().re - target.re).abs() < EPSILON);
        assert!((b.center().im - target.im).abs() < EPSILON);
    }

    #[test]
    fn zoom_level_tracks_zoom_before_recompute() {
        let mut m = mapper(100, 100);
        m.apply_zoom(2.5, 10.0, 90.0).unwrap();
        assert!((m.zoom_level() - 2.5).abs() < 1e-12);
        m.recompute_bounds();
        assert!((m.zoom_level() - 2.5).abs() < 1e-12);
    }

    #[test]
    fn centered_bounds_round_trip_center() {
        let c = Complex::new(-0.75, 0.1);
        let b = PlaneBounds::centered(c, 0.5, 0.25).unwrap();
        assert!((b.xmin + 1.0).abs() < EPSILON);
        assert!((b.ymax - 0.225).abs() < EPSILON);
        assert!((b.center().re - c.re).abs() < EPSILON);
        assert!((b.center().im - c.im).abs() < EPSILON);
        assert!(PlaneBounds::centered(c, 0.0, 1.0).is_err());
    }

    #[test]
    fn resize_keeps_pitch() {
        let mut m = mapper(100, 100);
        let (dx, _) = m.viewport().pixel_pitch();
        m.resize(200, 50).unwrap();
        let vp = m.viewport();
        let (ndx, ndy) = vp.pixel_pitch();
        assert!((dx - ndx).abs() < EPSILON);
        assert!((ndx - ndy).abs() < EPSILON);
        assert!(m.resize(0, 10).is_err());
    }

    #[test]
    fn reset_restores_start() {
        let mut m = mapper(120, 90);
        let start = m.viewport();
        m.apply_zoom(5.0, 3.0, 4.0).unwrap();
        m.recompute_bounds();
        m.reset();
        assert_eq!(m.viewport(), start);
    }

    #[test]
    fn pixel_to_plane_steps_by_pitch() {
        let vp = mapper(4, 4).viewport();
        assert_eq!(vp.pixel_to_plane(0, 0), Complex::new(-2.0, -2.0));
        assert_eq!(vp.pixel_to_plane(2, 2), Complex::ZERO);
        assert_eq!(vp.pixel_to_plane(3, 1), Complex::new(1.0, -1.0));
    }

    #[test]
    fn zero_dimensions_rejected() {
        let c = EngineConfig::default();
        assert!(ViewportMapper::new(&c, 0, 10).is_err());
        assert!(ViewportMapper::new(&c, 10, 0).is_err());
    }

    #[test]
    fn collapsed_scale_is_rejected() {
        let mut m = mapper(10, 10);
        m.apply_zoom(1e300, 0.0, 0.0).unwrap();
        let vp = m.viewport();
        assert!(m.apply_zoom(1e300, 0.0, 0.0).is_err());
        assert_eq!(m.viewport(), vp);
    }
}
