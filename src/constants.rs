//! Sizing, color, and styling constants for the picker.

/// Default ring band width
pub const STROKE_WIDTH: f64 = 30.0;

/// Default indicator outline width
pub const INDICATOR_STROKE_WIDTH: f64 = 2.0;

/// Fewest hue steps the ring gradient is sampled at
pub const MIN_GRADIENT_STEPS: usize = 12;

/// Feather width in raster pixels for anti-aliasing the ring edges
pub const FEATHER: f64 = 1.5;

/// Minimum side length of the ring
pub const RING_MIN_SIZE: f32 = 120.0;

/// Line segments used for a full circle when building paths
pub const CIRCLE_SEGMENTS: usize = 64;

/// 1D slider track height
#[cfg(feature = "sliders")]
pub const SLIDER_HEIGHT: f32 = 16.0;

/// Thumb radius on 1D sliders
#[cfg(feature = "sliders")]
pub const THUMB_RADIUS: f64 = 7.0;

/// Gap between picker elements
pub const GAP: f32 = 8.0;

/// Padding around the whole picker
pub const PADDING: f32 = 8.0;

/// Caption font size
#[cfg(feature = "sliders")]
pub const LABEL_FONT: f32 = 10.0;

/// Caption column width beside sliders
#[cfg(feature = "sliders")]
pub const LABEL_WIDTH: f32 = 64.0;

/// Readout column width beside sliders
#[cfg(feature = "sliders")]
pub const READOUT_WIDTH: f32 = 40.0;

/// Checkerboard cell size (for alpha backgrounds)
#[cfg(feature = "sliders")]
pub const CHECKER_CELL: f64 = 5.0;
