//! Hue ring view.
//!
//! Paints a rasterized conic hue gradient as an annulus plus an indicator at
//! the current hue. Dragging on the band writes the pointer's angle into the
//! shared [`ColorState`]; the indicator is then repositioned from the hue that
//! comes back through the components signal.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use floem::kurbo::{Circle, Rect, Stroke};
use floem::peniko::{self, Blob};

use floem::reactive::{create_effect, RwSignal, SignalGet};
use floem::views::Decorators;
use floem::{
    context::{ComputeLayoutCx, EventCx, PaintCx, UpdateCx},
    event::{Event, EventPropagation},
    View, ViewId,
};
use floem_renderer::Renderer;

use crate::angle::{hue_to_angle, Angle};
use crate::color::Hsba;
use crate::config::{IndicatorStyle, RingConfig};
use crate::constants;
use crate::geometry::{self, RingGeometry};
use crate::gesture::RingGesture;
use crate::state::ColorState;

/// Everything the cached ring raster depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct RasterKey {
    side: u32,
    inner_permille: u32,
    steps: usize,
    sba: (u8, u8, u8),
}

pub(crate) struct ColorRing {
    id: ViewId,
    gesture: RingGesture,
    components: Hsba,
    config: RingConfig,
    size: floem::taffy::prelude::Size<f32>,
    state: Rc<RefCell<ColorState>>,
    ring_img: Option<peniko::Image>,
    ring_hash: Vec<u8>,
    cached_key: Option<RasterKey>,
}

/// Creates the hue ring.
///
/// - `state`: written on every drag event
/// - `components`: mirror of the state, drives repaints
pub(crate) fn color_ring(
    state: Rc<RefCell<ColorState>>,
    components: RwSignal<Hsba>,
    config: RingConfig,
) -> ColorRing {
    let id = ViewId::new();

    create_effect(move |_| {
        let c = components.get();
        id.update_state(c);
    });

    ColorRing {
        id,
        gesture: RingGesture::default(),
        components: components.get_untracked(),
        config,
        size: Default::default(),
        state,
        ring_img: None,
        ring_hash: Vec::new(),
        cached_key: None,
    }
    .style(|s| {
        s.width_full()
            .aspect_ratio(1.0)
            .min_width(constants::RING_MIN_SIZE)
            .cursor(floem::style::CursorStyle::Pointer)
    })
}

impl ColorRing {
    fn frame(&self) -> Rect {
        Rect::new(0.0, 0.0, self.size.width as f64, self.size.height as f64)
    }

    fn geometry(&self) -> RingGeometry {
        RingGeometry::in_frame(self.frame(), self.config.stroke_width)
    }

    fn apply(&mut self, angle: Option<Angle>) {
        let Some(angle) = angle else {
            return;
        };
        self.state.borrow_mut().set_angular_hue(angle);
        self.id.request_layout();
    }

    /// Rasterize the ring at physical resolution; reused until the size or
    /// the saturation/brightness/alpha change.
    fn ensure_ring_image(&mut self, geometry: &RingGeometry, scale: f64) {
        let side = (geometry.radius * 2.0 * scale.max(1.0)).round() as u32;
        if side == 0 {
            return;
        }
        let to_u8 = |v: f64| (v * 255.0 + 0.5) as u8;
        let key = RasterKey {
            side,
            inner_permille: (geometry.inner_radius() / geometry.radius * 1000.0).round() as u32,
            steps: self.config.steps(),
            sba: (
                to_u8(self.components.saturation),
                to_u8(self.components.brightness),
                to_u8(self.components.alpha),
            ),
        };
        if self.cached_key == Some(key) {
            return;
        }

        let stops = geometry::hue_stops(
            key.steps,
            self.components.saturation,
            self.components.brightness,
            self.components.alpha,
        );
        let pixels =
            geometry::rasterize_ring(side, geometry.inner_radius() / geometry.radius, &stops);
        let blob = Blob::new(Arc::new(pixels));
        let img = peniko::Image::new(blob.clone(), peniko::Format::Rgba8, side, side);

        self.ring_hash = blob.id().to_le_bytes().to_vec();
        self.ring_img = Some(img);
        self.cached_key = Some(key);
    }

    fn paint_indicator(&self, cx: &mut PaintCx, geometry: &RingGeometry) {
        let angle = hue_to_angle(self.components.hue);
        let fill = self.components.to_color().to_peniko();
        let outline = self.config.indicator_stroke_color.to_peniko();
        let stroke = Stroke::new(self.config.indicator_stroke_width);

        match self.config.indicator {
            IndicatorStyle::Arc => {
                let reticle = geometry.reticle_path(angle);
                cx.fill(&reticle, fill, 0.0);
                if self.config.indicator_stroke_width > 0.0 {
                    cx.stroke(&reticle, outline, &stroke);
                }
            }
            IndicatorStyle::Disc => {
                let radius = (geometry.stroke_width / 2.0
                    - self.config.indicator_stroke_width)
                    .max(1.0);
                let disc = Circle::new(geometry.disc_center(angle), radius);
                cx.fill(&disc, fill, 0.0);
                if self.config.indicator_stroke_width > 0.0 {
                    cx.stroke(&disc, outline, &stroke);
                }
            }
        }
    }
}

impl View for ColorRing {
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
                if !self.geometry().band_contains(e.pos) {
                    return EventPropagation::Continue;
                }
                cx.update_active(self.id());
                let angle = self.gesture.pointer_down(e.pos, self.frame());
                self.apply(angle);
                EventPropagation::Stop
            }
            Event::PointerMove(e) => {
                if self.gesture.is_dragging() {
                    let angle = self.gesture.pointer_move(e.pos, self.frame());
                    self.apply(angle);
                    EventPropagation::Stop
                } else {
                    EventPropagation::Continue
                }
            }
            Event::PointerUp(_) => {
                self.gesture.pointer_up();
                EventPropagation::Continue
            }
            Event::FocusLost => {
                self.gesture.cancel();
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
        let geometry = self.geometry();
        if geometry.is_degenerate() {
            return;
        }

        let scale = cx.scale();
        self.ensure_ring_image(&geometry, scale);
        if let Some(ref img) = self.ring_img {
            cx.draw_img(
                floem_renderer::Img {
                    img: img.clone(),
                    hash: &self.ring_hash,
                },
                geometry.square(),
            );
        }

        self.paint_indicator(cx, &geometry);
    }
}
