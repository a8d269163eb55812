//! Saturation, brightness, and alpha sliders (0.0 left, 1.0 right).
//!
//! Each track is rasterized to an image: a gradient over the channel at the
//! current values of the other components. The alpha track is composited
//! over a checkerboard in the same pass.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use floem::kurbo::{Circle, Rect, Stroke};
use floem::peniko::{self, Blob, Color};

use floem::reactive::{create_effect, RwSignal, SignalGet};
use floem::views::Decorators;
use floem::{
    context::{ComputeLayoutCx, EventCx, PaintCx, UpdateCx},
    event::{Event, EventPropagation},
    View, ViewId,
};
use floem_renderer::Renderer;

use crate::color::Hsba;
use crate::constants;
use crate::state::ColorState;

const CHECKER_LIGHT: f64 = 1.0;
const CHECKER_DARK: f64 = 0.8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Saturation,
    Brightness,
    Alpha,
}

impl Channel {
    pub fn label(self) -> &'static str {
        match self {
            Channel::Saturation => "Saturation",
            Channel::Brightness => "Brightness",
            Channel::Alpha => "Alpha",
        }
    }

    pub fn get(self, c: &Hsba) -> f64 {
        match self {
            Channel::Saturation => c.saturation,
            Channel::Brightness => c.brightness,
            Channel::Alpha => c.alpha,
        }
    }

    /// `c` with this channel replaced by `value`.
    pub fn with(self, c: Hsba, value: f64) -> Hsba {
        match self {
            Channel::Saturation => Hsba::new(c.hue, value, c.brightness, c.alpha),
            Channel::Brightness => Hsba::new(c.hue, c.saturation, value, c.alpha),
            Channel::Alpha => Hsba::new(c.hue, c.saturation, c.brightness, value),
        }
    }

    fn write(self, state: &mut ColorState, value: f64) {
        match self {
            Channel::Saturation => state.set_saturation(value),
            Channel::Brightness => state.set_brightness(value),
            Channel::Alpha => state.set_alpha(value),
        }
    }
}

/// Rasterize a track for `channel`, sweeping it from 0 (left) to 1 (right).
///
/// Saturation and brightness tracks are drawn opaque. The alpha track blends
/// over a checkerboard of `cell` pixels.
pub(crate) fn rasterize_track(
    width: u32,
    height: u32,
    channel: Channel,
    components: Hsba,
    cell: f64,
) -> Vec<u8> {
    let mut buf = vec![0u8; (width * height * 4) as usize];
    let cell = cell.max(1.0);
    for px in 0..width {
        let t = px as f64 / (width - 1).max(1) as f64;
        let mut hsba = channel.with(components, t);
        if channel != Channel::Alpha {
            hsba.alpha = 1.0;
        }
        let c = hsba.to_color();
        let col = (px as f64 / cell) as u32;
        for py in 0..height {
            let (r, g, b) = if channel == Channel::Alpha {
                let row = (py as f64 / cell) as u32;
                let bg = if (row + col) % 2 == 1 {
                    CHECKER_DARK
                } else {
                    CHECKER_LIGHT
                };
                let a = c.a();
                (
                    c.r() * a + bg * (1.0 - a),
                    c.g() * a + bg * (1.0 - a),
                    c.b() * a + bg * (1.0 - a),
                )
            } else {
                (c.r(), c.g(), c.b())
            };
            let offset = ((py * width + px) * 4) as usize;
            buf[offset] = (r * 255.0 + 0.5) as u8;
            buf[offset + 1] = (g * 255.0 + 0.5) as u8;
            buf[offset + 2] = (b * 255.0 + 0.5) as u8;
            buf[offset + 3] = 255;
        }
    }
    buf
}

/// Components quantized, with the slider's own channel masked out since the
/// track does not depend on it.
fn track_key(channel: Channel, components: Hsba) -> [u16; 4] {
    let q = |v: f64| (v * 1000.0).round() as u16;
    let masked = channel.with(components, 0.0);
    [
        q(masked.hue),
        q(masked.saturation),
        q(masked.brightness),
        q(masked.alpha),
    ]
}

pub(crate) struct ChannelSlider {
    id: ViewId,
    channel: Channel,
    held: bool,
    components: Hsba,
    size: floem::taffy::prelude::Size<f32>,
    state: Rc<RefCell<ColorState>>,
    /// Cached track image.
    track_img: Option<peniko::Image>,
    track_hash: Vec<u8>,
    cached_key: [u16; 4],
    cached_dims: (u32, u32),
}

/// Creates a horizontal slider for one channel of the shared state.
pub(crate) fn channel_slider(
    channel: Channel,
    state: Rc<RefCell<ColorState>>,
    components: RwSignal<Hsba>,
) -> ChannelSlider {
    let id = ViewId::new();

    create_effect(move |_| {
        let c = components.get();
        id.update_state(c);
    });

    ChannelSlider {
        id,
        channel,
        held: false,
        components: components.get_untracked(),
        size: Default::default(),
        state,
        track_img: None,
        track_hash: Vec::new(),
        cached_key: [0; 4],
        cached_dims: (0, 0),
    }
    .style(|s| {
        s.height(constants::SLIDER_HEIGHT)
            .flex_grow(1.0)
            .border_radius(constants::THUMB_RADIUS as f32)
            .cursor(floem::style::CursorStyle::Pointer)
    })
}

impl ChannelSlider {
    fn update_from_pointer(&mut self, x: f64) {
        let w = self.size.width as f64;
        let r = constants::THUMB_RADIUS;
        let usable = w - 2.0 * r;
        if usable > 0.0 {
            let value = ((x - r) / usable).clamp(0.0, 1.0);
            self.channel.write(&mut self.state.borrow_mut(), value);
        }
    }

    fn ensure_track_image(&mut self, scale: f64) {
        let s = scale.max(1.0);
        let pw = (self.size.width as f64 * s).round() as u32;
        let ph = (self.size.height as f64 * s).round() as u32;
        if pw == 0 || ph == 0 {
            return;
        }

        let key = track_key(self.channel, self.components);
        let dims = (pw, ph);
        if self.track_img.is_some() && self.cached_dims == dims && self.cached_key == key {
            return;
        }

        let pixels = rasterize_track(
            pw,
            ph,
            self.channel,
            self.components,
            constants::CHECKER_CELL * s,
        );
        let blob = Blob::new(Arc::new(pixels));
        let img = peniko::Image::new(blob.clone(), peniko::Format::Rgba8, pw, ph);

        self.track_hash = blob.id().to_le_bytes().to_vec();
        self.track_img = Some(img);
        self.cached_key = key;
        self.cached_dims = dims;
    }
}

impl View for ChannelSlider {
    fn id(&self) -> ViewId {
        self.id
    }

    fn update(&mut self, _cx: &mut UpdateCx, state: Box<dyn std::any::Any>) {
        if let Ok(components) = state.downcast::<Hsba>() {
            self.components = *components;
            self.id.request_layout();
        }
    }

    fn event_before_children(&mut self, cx: &mut EventCx, event: &Event) -> EventPropagation {
        match event {
            Event::PointerDown(e) => {
                cx.update_active(self.id());
                self.held = true;
                self.update_from_pointer(e.pos.x);
                EventPropagation::Stop
            }
            Event::PointerMove(e) => {
                if self.held {
                    self.update_from_pointer(e.pos.x);
                    EventPropagation::Stop
                } else {
                    EventPropagation::Continue
                }
            }
            Event::PointerUp(_) | Event::FocusLost => {
                self.held = false;
                EventPropagation::Continue
            }
            _ => EventPropagation::Continue,
        }
    }

    fn compute_layout(&mut self, _cx: &mut ComputeLayoutCx) -> Option<Rect> {
        let layout = self.id.get_layout().unwrap_or_default();
        self.size = layout.size;
        None
    }

    fn paint(&mut self, cx: &mut PaintCx) {
        let w = self.size.width as f64;
        let h = self.size.height as f64;
        if w == 0.0 || h == 0.0 {
            return;
        }
        let rect = Rect::new(0.0, 0.0, w, h);
        let rrect = rect.to_rounded_rect(constants::THUMB_RADIUS);

        cx.save();
        cx.clip(&rrect);
        let scale = cx.scale();
        self.ensure_track_image(scale);
        if let Some(ref img) = self.track_img {
            cx.draw_img(
                floem_renderer::Img {
                    img: img.clone(),
                    hash: &self.track_hash,
                },
                rect,
            );
        }
        cx.restore();

        cx.stroke(&rrect, Color::rgba8(0, 0, 0, 40), &Stroke::new(1.0));

        let radius = constants::THUMB_RADIUS;
        let value = self.channel.get(&self.components);
        let thumb_x = radius + value * (w - 2.0 * radius);
        let thumb_cy = h / 2.0;
        let outer = Circle::new((thumb_x, thumb_cy), radius);
        cx.stroke(&outer, Color::rgba8(0, 0, 0, 80), &Stroke::new(1.0));
        let inner = Circle::new((thumb_x, thumb_cy), radius - 1.5);
        cx.stroke(&inner, Color::WHITE, &Stroke::new(2.0));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn px(buf: &[u8], width: u32, x: u32, y: u32) -> (u8, u8, u8, u8) {
        let o = ((y * width + x) * 4) as usize;
        (buf[o], buf[o + 1], buf[o + 2], buf[o + 3])
    }

    #[test]
    fn channel_access() {
        let c = Hsba::new(0.2, 0.3, 0.4, 0.5);
        assert_eq!(Channel::Saturation.get(&c), 0.3);
        assert_eq!(Channel::Brightness.get(&c), 0.4);
        assert_eq!(Channel::Alpha.get(&c), 0.5);
        let moved = Channel::Brightness.with(c, 2.0);
        assert_eq!(moved.brightness, 1.0);
        assert_eq!(moved.saturation, 0.3);
        assert_eq!(moved.hue, 0.2);
    }

    #[test]
    fn brightness_track_runs_black_to_color() {
        let red = Hsba::new(0.0, 1.0, 0.3, 0.2);
        let buf = rasterize_track(11, 2, Channel::Brightness, red, 5.0);
        assert_eq!(px(&buf, 11, 0, 0), (0, 0, 0, 255));
        assert_eq!(px(&buf, 11, 10, 1), (255, 0, 0, 255));
    }

    #[test]
    fn saturation_track_runs_gray_to_color() {
        let blue = Hsba::new(2.0 / 3.0, 0.0, 1.0, 1.0);
        let buf = rasterize_track(11, 1, Channel::Saturation, blue, 5.0);
        assert_eq!(px(&buf, 11, 0, 0), (255, 255, 255, 255));
        assert_eq!(px(&buf, 11, 10, 0), (0, 0, 255, 255));
    }

    #[test]
    fn alpha_track_shows_checkerboard_when_transparent() {
        let black = Hsba::new(0.0, 0.0, 0.0, 1.0);
        let buf = rasterize_track(20, 10, Channel::Alpha, black, 5.0);
        // left edge is fully transparent: checker cells show through
        assert_eq!(px(&buf, 20, 0, 0), (255, 255, 255, 255));
        assert_eq!(px(&buf, 20, 0, 5), (204, 204, 204, 255));
        // right edge is opaque black
        assert_eq!(px(&buf, 20, 19, 0), (0, 0, 0, 255));
    }

    #[test]
    fn track_key_ignores_own_channel() {
        let a = Hsba::new(0.1, 0.2, 0.3, 0.4);
        let b = Channel::Alpha.with(a, 0.9);
        assert_eq!(track_key(Channel::Alpha, a), track_key(Channel::Alpha, b));
        assert_ne!(track_key(Channel::Saturation, a), track_key(Channel::Saturation, b));
    }
}
