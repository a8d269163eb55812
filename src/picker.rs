//! The assembled picker: ring, optional centre overlay, and sliders.

use std::cell::RefCell;
use std::rc::Rc;

use floem::prelude::*;
use floem::reactive::{RwSignal, SignalGet, SignalUpdate};

#[cfg(feature = "sliders")]
use crate::channel_slider::{channel_slider, Channel};
use crate::color::Hsba;
use crate::color_ring::color_ring;
use crate::config::RingConfig;
use crate::constants;
use crate::state::{ColorBinding, ColorState};

/// Builds the shared state and the signal that mirrors it for repaints.
fn shared_state(color: impl ColorBinding + 'static) -> (Rc<RefCell<ColorState>>, RwSignal<Hsba>) {
    let mut state = ColorState::new(color);
    let components = RwSignal::new(state.components());
    state.subscribe(move |hsba, _| components.set(*hsba));
    (Rc::new(RefCell::new(state)), components)
}

/// A slider row: caption, track, and a two-decimal readout.
#[cfg(feature = "sliders")]
fn slider_row(
    channel: Channel,
    state: Rc<RefCell<ColorState>>,
    components: RwSignal<Hsba>,
) -> impl IntoView {
    let caption = |s: floem::style::Style| {
        s.font_size(constants::LABEL_FONT)
            .color(Color::rgb8(120, 120, 120))
    };
    h_stack((
        label(move || channel.label())
            .style(move |s| caption(s).width(constants::LABEL_WIDTH)),
        label(|| "0.0").style(caption),
        channel_slider(channel, state, components),
        label(|| "1.0").style(caption),
        label(move || format!("= {:.2}", channel.get(&components.get())))
            .style(move |s| caption(s).width(constants::READOUT_WIDTH)),
    ))
    .style(|s| s.items_center().gap(constants::GAP))
}

/// Hue ring with default appearance and no centre overlay.
pub fn color_picker_ring(color: impl ColorBinding + 'static) -> impl IntoView {
    color_picker_ring_with(color, RingConfig::default(), empty())
}

/// Hue ring with custom appearance and a view shown in the ring's centre.
///
/// `color` is read once to seed the components and written on every change;
/// it is never read back.
pub fn color_picker_ring_with<V: IntoView + 'static>(
    color: impl ColorBinding + 'static,
    config: RingConfig,
    overlay: V,
) -> impl IntoView {
    let (state, components) = shared_state(color);

    let ring = stack((
        // painted under the ring so drags on the band reach the ring first
        container(overlay).style(|s| {
            s.absolute()
                .size_full()
                .items_center()
                .justify_center()
        }),
        color_ring(state.clone(), components, config),
    ))
    .style(|s| s.width_full().aspect_ratio(1.0));

    v_stack((
        ring,
        #[cfg(feature = "sliders")]
        slider_row(Channel::Saturation, state.clone(), components),
        #[cfg(feature = "sliders")]
        slider_row(Channel::Brightness, state.clone(), components),
        #[cfg(feature = "sliders")]
        slider_row(Channel::Alpha, state, components),
    ))
    .style(|s| {
        s.gap(constants::GAP)
            .padding(constants::PADDING)
            .width_full()
    })
}
