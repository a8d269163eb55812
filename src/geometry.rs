//! Ring layout, gradient sampling, and indicator shapes.
//!
//! All shapes are built from line segments (no cubic curves) so every
//! renderer backend draws them the same way.

use std::f64::consts::{FRAC_PI_2, TAU};

use floem::kurbo::{BezPath, Point, Rect};

use crate::angle::{polar_point, Angle};
use crate::color::SolidColor;
use crate::constants;
use crate::math;

/// The ring inscribed in the smaller side of a frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingGeometry {
    pub center: Point,
    /// Outer radius.
    pub radius: f64,
    /// Band width, never more than `radius`.
    pub stroke_width: f64,
}

impl RingGeometry {
    pub fn in_frame(frame: Rect, stroke_width: f64) -> Self {
        let radius = (frame.width().min(frame.height()) / 2.0).max(0.0);
        Self {
            center: frame.center(),
            radius,
            stroke_width: stroke_width.clamp(0.0, radius),
        }
    }

    pub fn is_degenerate(&self) -> bool {
        self.radius <= 0.0
    }

    /// The square region the ring occupies.
    pub fn square(&self) -> Rect {
        let r = self.radius;
        Rect::new(
            self.center.x - r,
            self.center.y - r,
            self.center.x + r,
            self.center.y + r,
        )
    }

    pub fn inner_radius(&self) -> f64 {
        self.radius - self.stroke_width
    }

    /// Radius of the centre line of the band.
    pub fn mid_radius(&self) -> f64 {
        self.radius - self.stroke_width / 2.0
    }

    /// Whether `point` lands on the band, where drags may start.
    pub fn band_contains(&self, point: Point) -> bool {
        if self.is_degenerate() {
            return false;
        }
        let dist = point.distance(self.center);
        dist <= self.radius && dist >= self.inner_radius()
    }

    /// Centre of the disc indicator for `angle`.
    pub fn disc_center(&self, angle: Angle) -> Point {
        polar_point(self.center, self.mid_radius(), angle)
    }

    pub fn reticle_half_angle(&self) -> Angle {
        reticle_half_angle(self.stroke_width, self.radius)
    }

    /// Closed annular sector spanning the band around `angle`.
    pub fn reticle_path(&self, angle: Angle) -> BezPath {
        let delta = self.reticle_half_angle();
        let start = angle - delta;
        let sweep = delta.radians() * 2.0;
        // enough segments to keep a smooth edge, at least 2 per arc
        let segments = ((sweep / TAU) * constants::CIRCLE_SEGMENTS as f64).ceil() as usize;
        let segments = segments.max(2);

        let at = |radius: f64, i: usize| {
            let t = i as f64 / segments as f64;
            polar_point(
                self.center,
                radius,
                start + Angle::from_radians(sweep * t),
            )
        };

        let mut path = BezPath::new();
        path.move_to(at(self.radius, 0));
        for i in 1..=segments {
            path.line_to(at(self.radius, i));
        }
        for i in (0..=segments).rev() {
            path.line_to(at(self.inner_radius(), i));
        }
        path.close_path();
        path
    }
}

/// Half the angular span that makes the reticle about as wide along the
/// ring as the band is thick.
///
/// The `asin` argument is clamped to `[-1, 1]`; a ring whose centre line has
/// collapsed gets a quarter turn.
pub fn reticle_half_angle(stroke_width: f64, ring_radius: f64) -> Angle {
    let mid = ring_radius - stroke_width / 2.0;
    if mid <= 0.0 || !mid.is_finite() {
        return Angle::from_radians(FRAC_PI_2);
    }
    let arg = (stroke_width / mid / 2.0).clamp(-1.0, 1.0);
    Angle::from_radians(arg.asin())
}

/// Colors at `steps` uniform angle steps from zero to a full turn.
///
/// Returns `steps + 1` colors; the last repeats the first.
pub fn hue_stops(steps: usize, saturation: f64, brightness: f64, alpha: f64) -> Vec<SolidColor> {
    let steps = steps.max(1);
    (0..=steps)
        .map(|k| {
            let angle = Angle::from_radians(TAU * k as f64 / steps as f64);
            SolidColor::from_hsb(angle.turn(), saturation, brightness, alpha)
        })
        .collect()
}

/// Color of the gradient at `turn` (0.0–1.0), interpolated between stops.
pub(crate) fn sample_stops(stops: &[SolidColor], turn: f64) -> (f64, f64, f64, f64) {
    let rgba = |c: &SolidColor| (c.r(), c.g(), c.b(), c.a());
    match stops {
        [] => (0.0, 0.0, 0.0, 0.0),
        [only] => rgba(only),
        _ => {
            let steps = stops.len() - 1;
            let pos = math::wrap_unit(turn) * steps as f64;
            let i = (pos.floor() as usize).min(steps - 1);
            math::lerp_rgba(rgba(&stops[i]), rgba(&stops[i + 1]), pos - i as f64)
        }
    }
}

/// Rasterize the ring to an RGBA8 buffer of `size`×`size` pixels.
///
/// `inner_ratio` is the inner radius over the outer radius. Both edges are
/// feathered over [`constants::FEATHER`] pixels inside the buffer.
pub fn rasterize_ring(size: u32, inner_ratio: f64, stops: &[SolidColor]) -> Vec<u8> {
    let mut buf = vec![0u8; (size * size * 4) as usize];
    let c = size as f64 / 2.0;
    let feather = constants::FEATHER;
    let outer = c - feather;
    if outer <= 0.0 {
        return buf;
    }
    let inner = outer * inner_ratio.clamp(0.0, 1.0);

    for py in 0..size {
        let dy = py as f64 + 0.5 - c;
        let row_offset = (py * size * 4) as usize;

        for px in 0..size {
            let dx = px as f64 + 0.5 - c;
            let dist = (dx * dx + dy * dy).sqrt();

            let outer_cov = ((outer + feather - dist) / feather).clamp(0.0, 1.0);
            let inner_cov = ((dist - inner + feather) / feather).clamp(0.0, 1.0);
            let coverage = outer_cov.min(inner_cov);
            if coverage <= 0.0 {
                continue;
            }

            let mut turn = dy.atan2(dx) / TAU;
            if turn < 0.0 {
                turn += 1.0;
            }
            let (r, g, b, a) = sample_stops(stops, turn);

            let offset = row_offset + (px * 4) as usize;
            buf[offset] = (r * 255.0 + 0.5) as u8;
            buf[offset + 1] = (g * 255.0 + 0.5) as u8;
            buf[offset + 2] = (b * 255.0 + 0.5) as u8;
            buf[offset + 3] = (a * coverage * 255.0 + 0.5) as u8;
        }
    }

    buf
}

#[cfg(test)]
mod tests {
    use super::*;
    use floem::kurbo::PathEl;

    fn ring() -> RingGeometry {
        RingGeometry {
            center: Point::new(100.0, 100.0),
            radius: 100.0,
            stroke_width: 30.0,
        }
    }

    fn points(path: &BezPath) -> Vec<Point> {
        path.elements()
            .iter()
            .filter_map(|el| match el {
                PathEl::MoveTo(p) | PathEl::LineTo(p) => Some(*p),
                _ => None,
            })
            .collect()
    }

    fn angle_of(center: Point, p: Point) -> f64 {
        (p.y - center.y).atan2(p.x - center.x)
    }

    #[test]
    fn inscribed_in_smaller_side() {
        let g = RingGeometry::in_frame(Rect::new(0.0, 0.0, 300.0, 200.0), 30.0);
        assert_eq!(g.center, Point::new(150.0, 100.0));
        assert_eq!(g.radius, 100.0);
        assert_eq!(g.square(), Rect::new(50.0, 0.0, 250.0, 200.0));
        assert_eq!(g.mid_radius(), 85.0);
        assert_eq!(g.inner_radius(), 70.0);
    }

    #[test]
    fn band_hit_test() {
        let g = ring();
        assert!(g.band_contains(Point::new(185.0, 100.0)));
        assert!(g.band_contains(Point::new(100.0, 0.0)));
        assert!(!g.band_contains(Point::new(100.0, 100.0)));
        assert!(!g.band_contains(Point::new(140.0, 100.0)));
        assert!(!g.band_contains(Point::new(201.0, 100.0)));
        let empty = RingGeometry::in_frame(Rect::ZERO, 30.0);
        assert!(!empty.band_contains(Point::ZERO));
    }

    #[test]
    fn drags_start_only_on_band() {
        let g = RingGeometry::in_frame(Rect::new(0.0, 0.0, 200.0, 200.0), 30.0);
        // centre hole and corners are left to the overlay
        assert!(!g.band_contains(Point::new(150.0, 100.0)));
        assert!(!g.band_contains(Point::new(100.0, 100.0)));
        assert!(!g.band_contains(Point::new(5.0, 5.0)));
        // anywhere on the stroked annulus counts
        assert!(g.band_contains(Point::new(185.0, 100.0)));
        assert!(g.band_contains(Point::new(100.0, 172.0)));
        assert!(g.band_contains(Point::new(30.0, 100.0)));
    }

    #[test]
    fn stroke_is_capped_at_radius() {
        let g = RingGeometry::in_frame(Rect::new(0.0, 0.0, 20.0, 20.0), 30.0);
        assert_eq!(g.stroke_width, 10.0);
        assert_eq!(g.inner_radius(), 0.0);
    }

    #[test]
    fn reticle_half_angle_for_default_ring() {
        let delta = reticle_half_angle(30.0, 100.0).radians();
        assert!((delta - (30.0_f64 / 85.0 / 2.0).asin()).abs() < 1e-12);
        assert!((delta - 0.1774).abs() < 1e-3);
    }

    #[test]
    fn reticle_half_angle_is_guarded() {
        assert_eq!(reticle_half_angle(30.0, 15.0).radians(), FRAC_PI_2);
        assert_eq!(reticle_half_angle(30.0, 0.0).radians(), FRAC_PI_2);
        assert_eq!(reticle_half_angle(0.0, 0.0).radians(), FRAC_PI_2);
        // argument above one is clamped
        let clamped = reticle_half_angle(30.0, 20.0).radians();
        assert!((clamped - FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn reticle_endpoints_are_offset_by_half_angle() {
        let g = ring();
        let angle = Angle::from_radians(1.0);
        let delta = g.reticle_half_angle().radians();
        let pts = points(&g.reticle_path(angle));
        let first = pts[0];
        let outer_last = pts[pts.len() / 2 - 1];
        let inner_first = pts[pts.len() / 2];
        let last = *pts.last().unwrap();

        assert!((first.distance(g.center) - 100.0).abs() < 1e-9);
        assert!((angle_of(g.center, first) - (1.0 - delta)).abs() < 1e-9);
        assert!((angle_of(g.center, outer_last) - (1.0 + delta)).abs() < 1e-9);
        assert!((inner_first.distance(g.center) - 70.0).abs() < 1e-9);
        assert!((angle_of(g.center, inner_first) - (1.0 + delta)).abs() < 1e-9);
        assert!((angle_of(g.center, last) - (1.0 - delta)).abs() < 1e-9);
    }

    #[test]
    fn disc_sits_on_band_centre() {
        let g = ring();
        let p = g.disc_center(Angle::from_radians(FRAC_PI_2));
        assert!((p.x - 100.0).abs() < 1e-9);
        assert!((p.y - 185.0).abs() < 1e-9);
    }

    #[test]
    fn stops_span_full_turn() {
        let stops = hue_stops(12, 1.0, 1.0, 0.5);
        assert_eq!(stops.len(), 13);
        assert_eq!(stops[0].to_rgb(), stops[12].to_rgb());
        assert_eq!(stops[0].to_rgb(), (255, 0, 0));
        assert_eq!(stops[4].to_rgb(), (0, 255, 0));
        assert_eq!(stops[8].to_rgb(), (0, 0, 255));
        assert!(stops.iter().all(|c| c.a() == 0.5));
    }

    #[test]
    fn sampling_interpolates_between_stops() {
        let stops = hue_stops(12, 1.0, 1.0, 1.0);
        let (r, g, b, _) = sample_stops(&stops, 1.0 / 24.0);
        // halfway between red and the 30° orange
        assert!((r - 1.0).abs() < 1e-9);
        assert!((g - 0.25).abs() < 1e-9);
        assert_eq!(b, 0.0);
        assert_eq!(sample_stops(&stops, 1.0), sample_stops(&stops, 0.0));
    }

    #[test]
    fn raster_has_hole_and_colored_band() {
        let size = 64;
        let buf = rasterize_ring(size, 0.5, &hue_stops(12, 1.0, 1.0, 1.0));
        let px = |x: u32, y: u32| {
            let o = ((y * size + x) * 4) as usize;
            (buf[o], buf[o + 1], buf[o + 2], buf[o + 3])
        };
        // centre is empty
        assert_eq!(px(32, 32).3, 0);
        // corner is empty
        assert_eq!(px(0, 0).3, 0);
        // right side of the band is red, bottom is chartreuse-ish (hue 0.25)
        let right = px(54, 32);
        assert_eq!(right.3, 255);
        assert!(right.0 > 250 && right.2 < 10);
        let bottom = px(32, 54);
        assert_eq!(bottom.3, 255);
        assert!(bottom.1 > 250 && bottom.2 < 10);
    }

    #[test]
    fn tiny_raster_is_blank() {
        let buf = rasterize_ring(2, 0.5, &hue_stops(12, 1.0, 1.0, 1.0));
        assert!(buf.iter().all(|&b| b == 0));
    }
}
