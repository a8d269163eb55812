//! # floem-ring
//!
//! A ring-shaped hue picker for [Floem](https://github.com/lapce/floem).
//!
//! Dragging on the ring sets the hue from the pointer's angle around the
//! ring's centre; sliders below edit saturation, brightness, and alpha. The
//! picker pushes every change to a color owned by the embedder.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use floem::prelude::*;
//! use floem_ring::{color_picker_ring, SolidColor};
//!
//! let color = RwSignal::new(SolidColor::from_hex("FF0000").unwrap());
//! // Use `color_picker_ring(color)` in your Floem view tree.
//! ```
//!
//! Angles are measured from 3 o'clock and grow clockwise on screen, so a
//! pointer directly below the centre selects hue 0.25.

mod angle;
#[cfg(feature = "sliders")]
mod channel_slider;
mod color;
mod color_ring;
mod config;
mod constants;
mod error;
mod geometry;
mod gesture;
mod math;
mod picker;
mod state;

pub use angle::{angle_to_hue, hue_to_angle, point_to_angle, Angle};
pub use color::{Hsba, SolidColor};
pub use config::{IndicatorStyle, RingConfig};
pub use error::ColorParseError;
pub use geometry::{hue_stops, reticle_half_angle, RingGeometry};
pub use gesture::{DragPhase, RingGesture};
pub use picker::{color_picker_ring, color_picker_ring_with};
pub use state::{ColorBinding, ColorState, FnBinding};
