//! Standalone demo: opens a window with the hue ring.
//!
//! Run with `RUST_LOG=floem_ring=debug` to see drag and state logging.

use floem::prelude::*;
use floem::window::WindowConfig;
use floem_ring::{color_picker_ring_with, RingConfig, SolidColor};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let color = RwSignal::new(SolidColor::from_hex("FF0000").unwrap());

    floem::Application::new()
        .window(
            move |_| {
                let readout = label(move || format!("#{}", color.get().to_hex())).style(|s| {
                    s.font_size(14.0)
                        .font_family("monospace".to_string())
                        .color(Color::rgb8(60, 60, 60))
                });
                color_picker_ring_with(color, RingConfig::default(), readout)
                    .on_event_stop(floem::event::EventListener::WindowClosed, |_| {
                        floem::quit_app()
                    })
            },
            Some(
                WindowConfig::default()
                    .size((280.0, 420.0))
                    .title("floem-ring"),
            ),
        )
        .run();
}
