//! Pointer position ↔ angle ↔ hue mapping.
//!
//! Angles are measured from the positive x axis (3 o'clock) and grow
//! clockwise on screen, since the y axis points down. The ring gradient,
//! the disc indicator, and the reticle all use this convention.

use std::f64::consts::TAU;
use std::ops::{Add, Sub};

use floem::kurbo::{Point, Rect};

use crate::math;

/// A rotation stored in radians.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Angle(f64);

impl Angle {
    pub const ZERO: Self = Self(0.0);

    pub fn from_radians(radians: f64) -> Self {
        Self(radians)
    }

    /// One turn is a full rotation (360°).
    pub fn from_turn(turn: f64) -> Self {
        Self(turn * TAU)
    }

    pub fn radians(self) -> f64 {
        self.0
    }

    pub fn turn(self) -> f64 {
        self.0 / TAU
    }
}

impl Add for Angle {
    type Output = Angle;

    fn add(self, rhs: Angle) -> Angle {
        Angle(self.0 + rhs.0)
    }
}

impl Sub for Angle {
    type Output = Angle;

    fn sub(self, rhs: Angle) -> Angle {
        Angle(self.0 - rhs.0)
    }
}

/// Angle of `point` around the centre of `frame`, in `[0, 2π)`.
///
/// The frame centre itself maps to zero, as does anything non-finite.
pub fn point_to_angle(point: Point, frame: Rect) -> Angle {
    let center = frame.center();
    let dx = point.x - center.x;
    let dy = point.y - center.y;
    let radians = dy.atan2(dx);
    if !radians.is_finite() {
        return Angle::ZERO;
    }
    let radians = if radians < 0.0 { radians + TAU } else { radians };
    // -0.0 and values a hair below zero can round up to exactly TAU
    if radians >= TAU {
        Angle::ZERO
    } else {
        Angle(radians)
    }
}

/// Hue for an angle: the fractional part of its turn.
pub fn angle_to_hue(angle: Angle) -> f64 {
    math::wrap_unit(angle.turn())
}

pub fn hue_to_angle(hue: f64) -> Angle {
    Angle::from_turn(hue)
}

/// Point at `radius` from `center` in direction `angle`.
pub(crate) fn polar_point(center: Point, radius: f64, angle: Angle) -> Point {
    let (sin, cos) = angle.radians().sin_cos();
    Point::new(center.x + cos * radius, center.y + sin * radius)
}
