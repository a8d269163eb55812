//! Ring appearance options.

use crate::color::SolidColor;
use crate::constants;

/// How the selected hue is marked on the ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IndicatorStyle {
    /// A filled disc centred on the ring's stroke.
    Disc,
    /// An arc-shaped reticle spanning the ring's width.
    #[default]
    Arc,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RingConfig {
    /// Width of the ring band.
    pub stroke_width: f64,
    pub indicator: IndicatorStyle,
    /// Outline color of the indicator.
    pub indicator_stroke_color: SolidColor,
    pub indicator_stroke_width: f64,
    /// Number of uniform hue steps in the ring gradient. At least 12.
    pub gradient_steps: usize,
}

impl Default for RingConfig {
    fn default() -> Self {
        Self {
            stroke_width: constants::STROKE_WIDTH,
            indicator: IndicatorStyle::default(),
            indicator_stroke_color: SolidColor::BLACK,
            indicator_stroke_width: constants::INDICATOR_STROKE_WIDTH,
            gradient_steps: constants::MIN_GRADIENT_STEPS,
        }
    }
}

impl RingConfig {
    pub fn with_stroke_width(mut self, width: f64) -> Self {
        self.stroke_width = width.max(0.0);
        self
    }

    pub fn with_indicator(mut self, indicator: IndicatorStyle) -> Self {
        self.indicator = indicator;
        self
    }

    pub fn with_indicator_stroke(mut self, color: SolidColor, width: f64) -> Self {
        self.indicator_stroke_color = color;
        self.indicator_stroke_width = width.max(0.0);
        self
    }

    pub fn with_gradient_steps(mut self, steps: usize) -> Self {
        self.gradient_steps = steps;
        self
    }

    /// Gradient steps with the lower bound applied.
    pub fn steps(&self) -> usize {
        self.gradient_steps.max(constants::MIN_GRADIENT_STEPS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = RingConfig::default();
        assert_eq!(config.stroke_width, 30.0);
        assert_eq!(config.indicator, IndicatorStyle::Arc);
        assert_eq!(config.indicator_stroke_color, SolidColor::BLACK);
        assert_eq!(config.steps(), 12);
    }

    #[test]
    fn steps_have_a_floor() {
        assert_eq!(RingConfig::default().with_gradient_steps(3).steps(), 12);
        assert_eq!(RingConfig::default().with_gradient_steps(72).steps(), 72);
    }

    #[test]
    fn negative_widths_are_clamped() {
        let config = RingConfig::default()
            .with_stroke_width(-4.0)
            .with_indicator_stroke(SolidColor::BLACK, -1.0);
        assert_eq!(config.stroke_width, 0.0);
        assert_eq!(config.indicator_stroke_width, 0.0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn json_round_trip_with_missing_fields() {
        let config: RingConfig =
            serde_json::from_str(r#"{"stroke_width": 12.0, "indicator": "Disc"}"#).unwrap();
        assert_eq!(config.stroke_width, 12.0);
        assert_eq!(config.indicator, IndicatorStyle::Disc);
        assert_eq!(config.gradient_steps, 12);
        let text = serde_json::to_string(&config).unwrap();
        let back: RingConfig = serde_json::from_str(&text).unwrap();
        assert_eq!(back, config);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn indicator_stroke_color_is_clamped_on_load() {
        let config: RingConfig = serde_json::from_str(
            r#"{"indicator_stroke_color": {"r": 2.0, "g": 0.5, "b": -1.0, "a": 9.0}}"#,
        )
        .unwrap();
        assert_eq!(
            config.indicator_stroke_color,
            SolidColor::from_rgba(1.0, 0.5, 0.0, 1.0)
        );
        let text = serde_json::to_string(&config).unwrap();
        let back: RingConfig = serde_json::from_str(&text).unwrap();
        assert_eq!(back, config);
    }
}
