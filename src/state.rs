//! Authoritative hue/saturation/brightness/alpha state for one ring.
//!
//! The embedder's color is read once, at construction. After that the four
//! stored components are the only source of truth: every write recomposes a
//! [`SolidColor`] and pushes it outward through [`ColorBinding::set`], then
//! notifies listeners. Nothing is ever read back from the binding, so a
//! binding whose setter echoes changes cannot loop.

use floem::reactive::{RwSignal, SignalGet, SignalUpdate};
use tracing::{debug, trace, warn};

use crate::angle::{angle_to_hue, hue_to_angle, Angle};
use crate::color::{Hsba, SolidColor};

/// Outward connection to a color owned by the embedding application.
pub trait ColorBinding {
    /// Current color. Only consulted when a [`ColorState`] is created.
    fn get(&self) -> SolidColor;
    /// Receive a newly composed color.
    fn set(&self, color: SolidColor);
}

impl ColorBinding for RwSignal<SolidColor> {
    fn get(&self) -> SolidColor {
        self.get_untracked()
    }

    fn set(&self, color: SolidColor) {
        SignalUpdate::set(self, color);
    }
}

/// A binding built from an initial color and a setter callback.
pub struct FnBinding<F> {
    initial: SolidColor,
    on_set: F,
}

impl<F: Fn(SolidColor)> FnBinding<F> {
    pub fn new(initial: SolidColor, on_set: F) -> Self {
        Self { initial, on_set }
    }
}

impl<F: Fn(SolidColor)> ColorBinding for FnBinding<F> {
    fn get(&self) -> SolidColor {
        self.initial
    }

    fn set(&self, color: SolidColor) {
        (self.on_set)(color)
    }
}

type Listener = Box<dyn Fn(&Hsba, SolidColor)>;

pub struct ColorState {
    components: Hsba,
    color: SolidColor,
    binding: Box<dyn ColorBinding>,
    listeners: Vec<Listener>,
}

impl ColorState {
    pub fn new(binding: impl ColorBinding + 'static) -> Self {
        let initial = binding.get();
        let components: Hsba = initial.into();
        debug!(color = %initial.to_hex(), ?components, "color state created");
        Self {
            components,
            color: components.into(),
            binding: Box::new(binding),
            listeners: Vec::new(),
        }
    }

    /// Register a callback run after every recomposition, in registration order.
    pub fn subscribe(&mut self, listener: impl Fn(&Hsba, SolidColor) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn hue(&self) -> f64 {
        self.components.hue
    }

    pub fn saturation(&self) -> f64 {
        self.components.saturation
    }

    pub fn brightness(&self) -> f64 {
        self.components.brightness
    }

    pub fn alpha(&self) -> f64 {
        self.components.alpha
    }

    pub fn components(&self) -> Hsba {
        self.components
    }

    /// The color composed from the current components.
    pub fn color(&self) -> SolidColor {
        self.color
    }

    /// Current hue as a rotation around the ring.
    pub fn angular_hue(&self) -> Angle {
        hue_to_angle(self.components.hue)
    }

    pub fn set_hue(&mut self, hue: f64) {
        if self.reject("hue", hue) {
            return;
        }
        trace!(hue, "ring hue written");
        self.write(Hsba {
            hue,
            ..self.components
        });
    }

    pub fn set_angular_hue(&mut self, angle: Angle) {
        self.set_hue(angle_to_hue(angle));
    }

    pub fn set_saturation(&mut self, saturation: f64) {
        if self.reject("saturation", saturation) {
            return;
        }
        self.write(Hsba {
            saturation,
            ..self.components
        });
    }

    pub fn set_brightness(&mut self, brightness: f64) {
        if self.reject("brightness", brightness) {
            return;
        }
        self.write(Hsba {
            brightness,
            ..self.components
        });
    }

    pub fn set_alpha(&mut self, alpha: f64) {
        if self.reject("alpha", alpha) {
            return;
        }
        self.write(Hsba {
            alpha,
            ..self.components
        });
    }

    /// Replace all four components with a single propagation.
    pub fn set_components(&mut self, components: Hsba) {
        self.write(components);
    }

    fn reject(&self, component: &str, value: f64) -> bool {
        if value.is_finite() {
            return false;
        }
        warn!(component, value, "ignoring non-finite component write");
        true
    }

    fn write(&mut self, components: Hsba) {
        self.components = Hsba::new(
            components.hue,
            components.saturation,
            components.brightness,
            components.alpha,
        );
        self.color = self.components.into();
        self.binding.set(self.color);
        for listener in &self.listeners {
            listener(&self.components, self.color);
        }
    }
}

impl std::fmt::Debug for ColorState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ColorState")
            .field("components", &self.components)
            .field("color", &self.color)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}
