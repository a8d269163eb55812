//! Drag tracking for the ring.

use floem::kurbo::{Point, Rect};
use tracing::debug;

use crate::angle::{point_to_angle, Angle};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragPhase {
    #[default]
    Idle,
    Dragging,
}

/// `Idle -> Dragging -> Idle`. Any contact starts a drag; every move while
/// dragging yields a new angle. Nothing is remembered between drags.
#[derive(Debug, Default)]
pub struct RingGesture {
    phase: DragPhase,
}

impl RingGesture {
    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    pub fn is_dragging(&self) -> bool {
        self.phase == DragPhase::Dragging
    }

    /// Start tracking. Returns the angle to apply, or `None` when the frame
    /// has not been laid out yet.
    pub fn pointer_down(&mut self, pos: Point, frame: Rect) -> Option<Angle> {
        debug!(x = pos.x, y = pos.y, "ring drag started");
        self.phase = DragPhase::Dragging;
        angle_in(pos, frame)
    }

    pub fn pointer_move(&mut self, pos: Point, frame: Rect) -> Option<Angle> {
        match self.phase {
            DragPhase::Idle => None,
            DragPhase::Dragging => angle_in(pos, frame),
        }
    }

    pub fn pointer_up(&mut self) {
        self.end("released");
    }

    /// Abandon the drag, e.g. on focus loss. Values already written stay.
    pub fn cancel(&mut self) {
        self.end("cancelled");
    }

    fn end(&mut self, how: &str) {
        if self.phase == DragPhase::Dragging {
            debug!(how, "ring drag ended");
        }
        self.phase = DragPhase::Idle;
    }
}

fn angle_in(pos: Point, frame: Rect) -> Option<Angle> {
    if frame.width() <= 0.0 || frame.height() <= 0.0 {
        return None;
    }
    Some(point_to_angle(pos, frame))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    fn frame() -> Rect {
        Rect::new(0.0, 0.0, 200.0, 200.0)
    }

    #[test]
    fn idle_moves_are_ignored() {
        let mut g = RingGesture::default();
        assert_eq!(g.pointer_move(Point::new(150.0, 100.0), frame()), None);
        assert_eq!(g.phase(), DragPhase::Idle);
    }

    #[test]
    fn drag_cycle() {
        let mut g = RingGesture::default();
        let down = g.pointer_down(Point::new(180.0, 100.0), frame()).unwrap();
        assert!(g.is_dragging());
        assert!(down.radians().abs() < 1e-12);

        let moved = g.pointer_move(Point::new(100.0, 190.0), frame()).unwrap();
        assert!((moved.radians() - FRAC_PI_2).abs() < 1e-12);

        g.pointer_up();
        assert_eq!(g.phase(), DragPhase::Idle);
        assert_eq!(g.pointer_move(Point::new(20.0, 100.0), frame()), None);
    }

    #[test]
    fn cancel_returns_to_idle() {
        let mut g = RingGesture::default();
        g.pointer_down(Point::new(10.0, 10.0), frame());
        g.cancel();
        assert!(!g.is_dragging());
    }

    #[test]
    fn drag_from_right_to_bottom_moves_red_to_quarter_hue() {
        use crate::color::SolidColor;
        use crate::state::{ColorState, FnBinding};
        use std::cell::RefCell;
        use std::rc::Rc;

        let pushed = Rc::new(RefCell::new(Vec::new()));
        let sink = pushed.clone();
        let red = SolidColor::from_hsb(0.0, 1.0, 1.0, 1.0);
        let mut state = ColorState::new(FnBinding::new(red, move |c| sink.borrow_mut().push(c)));
        let mut g = RingGesture::default();

        if let Some(angle) = g.pointer_down(Point::new(185.0, 100.0), frame()) {
            state.set_angular_hue(angle);
        }
        assert_eq!(state.hue(), 0.0);
        assert_eq!(state.color().to_rgb(), (255, 0, 0));

        if let Some(angle) = g.pointer_move(Point::new(100.0, 185.0), frame()) {
            state.set_angular_hue(angle);
        }
        g.pointer_up();
        assert!((state.hue() - 0.25).abs() < 1e-9);
        assert_eq!(pushed.borrow().len(), 2);
        assert_eq!(*pushed.borrow().last().unwrap(), state.color());
    }

    #[test]
    fn zero_area_frame_yields_nothing() {
        let mut g = RingGesture::default();
        assert_eq!(g.pointer_down(Point::new(5.0, 5.0), Rect::ZERO), None);
        assert!(g.is_dragging());
        assert_eq!(g.pointer_move(Point::new(7.0, 5.0), Rect::ZERO), None);
    }
}
