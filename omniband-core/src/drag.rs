//! Drag state machine: Idle -> Dragging -> Idle.
//!
//! Raw pointer events come in from the collaborator, tentative positions go
//! out through [`RangeState`], and the facade publishes the lifecycle event
//! each accepted transition reports. Only horizontal movement positions the
//! handle; the vertical coordinate is recorded for a possible vertical
//! orientation but never read.

use log::{debug, trace};

use crate::state::RangeState;
use crate::view::{HandleSide, SliderView, TargetId};

/// A raw pointer (mouse or touch) event in client coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub client_x: f64,
    pub client_y: f64,
    /// The element the event was dispatched on; only meaningful on
    /// pointer-down, where it must resolve to a handle.
    pub target: Option<TargetId>,
}

impl PointerEvent {
    pub fn down(client_x: f64, client_y: f64, target: TargetId) -> Self {
        Self {
            client_x,
            client_y,
            target: Some(target),
        }
    }

    pub fn at(client_x: f64, client_y: f64) -> Self {
        Self {
            client_x,
            client_y,
            target: None,
        }
    }
}

/// Proof that the view's global move/up listeners are registered. Released
/// by value, so each acquisition is released exactly once on whichever exit
/// path ends the session.
#[derive(Debug)]
struct PointerCapture(());

impl PointerCapture {
    fn acquire<V: SliderView>(view: &mut V) -> Self {
        view.capture_pointer();
        Self(())
    }

    fn release<V: SliderView>(self, view: &mut V) {
        view.release_pointer();
    }
}

/// Ephemeral per-drag bookkeeping; created on pointer-down, destroyed on
/// pointer-up or teardown.
#[derive(Debug)]
struct DragSession {
    side: HandleSide,
    cursor_start_x: f64,
    #[allow(dead_code)] // kept for a future vertical orientation
    cursor_start_y: f64,
    start_left: f64,
    start_right: f64,
    capture: PointerCapture,
}

/// The drag controller. One session at a time; a pointer-down while a
/// session is live is rejected.
#[derive(Debug, Default)]
pub struct DragController {
    session: Option<DragSession>,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// The handle being dragged, if a session is live.
    pub fn active_side(&self) -> Option<HandleSide> {
        self.session.as_ref().map(|s| s.side)
    }

    /// Idle -> Dragging. Returns true when a session started (the facade
    /// then publishes `start`).
    ///
    /// No-ops: disabled slider, a session already live, or a target that
    /// does not resolve to a handle.
    pub fn pointer_down<V: SliderView>(
        &mut self,
        event: PointerEvent,
        state: &RangeState,
        view: &mut V,
        disabled: bool,
    ) -> bool {
        if disabled || self.session.is_some() {
            return false;
        }
        let Some(target) = event.target else {
            return false;
        };
        let Some(side) = view.handle_for_target(target) else {
            return false;
        };

        let geometry = view.geometry();
        let session = DragSession {
            side,
            cursor_start_x: event.client_x + geometry.scroll_x,
            cursor_start_y: event.client_y + geometry.scroll_y,
            start_left: state.left(),
            start_right: state.right(),
            capture: PointerCapture::acquire(view),
        };

        view.raise(side);
        view.set_transition(false);

        debug!(
            "drag start: {:?} handle, cursor {:.1}",
            side, session.cursor_start_x
        );
        self.session = Some(session);
        true
    }

    /// Dragging -> Dragging. Returns true when the position was updated
    /// (the facade then publishes `moving`).
    pub fn pointer_move<V: SliderView>(
        &mut self,
        event: PointerEvent,
        state: &mut RangeState,
        view: &mut V,
    ) -> bool {
        let Some(session) = &self.session else {
            return false;
        };
        let geometry = view.geometry();
        if geometry.track_width <= 0.0 {
            return false;
        }

        let x = event.client_x + geometry.scroll_x;
        let delta_pct = (x - session.cursor_start_x) / geometry.track_width * 100.0;
        let handle_width_pct = geometry.handle_width_pct();

        // The left handle moves with the cursor, the right one opposite:
        // its percent is measured from the right end.
        let applied = match session.side {
            HandleSide::Left => {
                state.set_left(session.start_left + delta_pct, handle_width_pct)
            }
            HandleSide::Right => {
                state.set_right(session.start_right - delta_pct, handle_width_pct)
            }
        };

        view.set_handle(session.side, applied);
        view.set_fill_side(session.side, applied);

        trace!("drag move: {:?} -> {:.2}%", session.side, applied);
        true
    }

    /// Dragging -> Idle. Returns true when a session ended (the facade then
    /// publishes `stop`).
    pub fn pointer_up<V: SliderView>(&mut self, view: &mut V) -> bool {
        let Some(session) = self.session.take() else {
            return false;
        };
        session.capture.release(view);
        debug!("drag stop: {:?} handle", session.side);
        true
    }

    /// Abnormal teardown (collaborator going away mid-drag): release the
    /// capture, publish nothing.
    pub fn teardown<V: SliderView>(&mut self, view: &mut V) {
        if let Some(session) = self.session.take() {
            session.capture.release(view);
            debug!("drag teardown: {:?} handle", session.side);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SliderConfig;
    use crate::mapping::Bounds;
    use crate::view::headless::{self, HeadlessView, ViewCommand};

    fn fixtures(overlap: bool) -> (DragController, RangeState, HeadlessView) {
        let bounds = Bounds::from_config(&SliderConfig::numeric(0.0, 100.0));
        (
            DragController::new(),
            RangeState::new(bounds, overlap, false),
            // 200-unit track, 10-unit handles (5% of the track).
            HeadlessView::new(200.0, 10.0),
        )
    }

    #[test]
    fn down_on_track_is_a_no_op() {
        let (mut drag, state, mut view) = fixtures(true);
        assert!(!drag.pointer_down(
            PointerEvent::down(50.0, 5.0, headless::TRACK),
            &state,
            &mut view,
            false,
        ));
        assert!(!drag.is_dragging());
        assert_eq!(view.captures, 0);
    }

    #[test]
    fn down_resolves_handle_children() {
        let (mut drag, state, mut view) = fixtures(true);
        assert!(drag.pointer_down(
            PointerEvent::down(50.0, 5.0, headless::LEFT_HANDLE_CHILD),
            &state,
            &mut view,
            false,
        ));
        assert_eq!(drag.active_side(), Some(HandleSide::Left));
        assert_eq!(view.captures, 1);
        assert!(view.commands.contains(&ViewCommand::Raise(HandleSide::Left)));
        assert!(view.commands.contains(&ViewCommand::Transition(false)));
    }

    #[test]
    fn disabled_gates_new_sessions_only() {
        let (mut drag, mut state, mut view) = fixtures(true);
        assert!(!drag.pointer_down(
            PointerEvent::down(0.0, 0.0, headless::LEFT_HANDLE),
            &state,
            &mut view,
            true,
        ));

        // Start an enabled session, then "disable": moves still apply.
        assert!(drag.pointer_down(
            PointerEvent::down(0.0, 0.0, headless::LEFT_HANDLE),
            &state,
            &mut view,
            false,
        ));
        assert!(drag.pointer_move(PointerEvent::at(40.0, 0.0), &mut state, &mut view));
        assert!(drag.pointer_up(&mut view));
        assert!(view.capture_balanced());
    }

    #[test]
    fn second_down_mid_session_is_rejected() {
        let (mut drag, state, mut view) = fixtures(true);
        assert!(drag.pointer_down(
            PointerEvent::down(0.0, 0.0, headless::LEFT_HANDLE),
            &state,
            &mut view,
            false,
        ));
        assert!(!drag.pointer_down(
            PointerEvent::down(10.0, 0.0, headless::RIGHT_HANDLE),
            &state,
            &mut view,
            false,
        ));
        assert_eq!(drag.active_side(), Some(HandleSide::Left));
        assert_eq!(view.captures, 1);
    }

    #[test]
    fn left_handle_follows_cursor_horizontally() {
        let (mut drag, mut state, mut view) = fixtures(true);
        drag.pointer_down(
            PointerEvent::down(20.0, 0.0, headless::LEFT_HANDLE),
            &state,
            &mut view,
            false,
        );
        // +40 units on a 200-unit track = +20%; vertical movement ignored.
        drag.pointer_move(PointerEvent::at(60.0, 500.0), &mut state, &mut view);
        assert_eq!(state.left(), 20.0);
        assert_eq!(view.handle_position(HandleSide::Left), Some(20.0));
    }

    #[test]
    fn right_handle_moves_opposite_to_cursor() {
        let (mut drag, mut state, mut view) = fixtures(true);
        drag.pointer_down(
            PointerEvent::down(180.0, 0.0, headless::RIGHT_HANDLE),
            &state,
            &mut view,
            false,
        );
        // Cursor moves left by 50 units: right percent grows by 25.
        drag.pointer_move(PointerEvent::at(130.0, 0.0), &mut state, &mut view);
        assert_eq!(state.right(), 25.0);
    }

    #[test]
    fn drag_clamps_to_remaining_space() {
        let (mut drag, mut state, mut view) = fixtures(false);
        // Right handle parked at 80 from the left end (20 from the right).
        state.set_right(20.0, 5.0);
        state.set_left(20.0, 5.0);

        drag.pointer_down(
            PointerEvent::down(40.0, 0.0, headless::LEFT_HANDLE),
            &state,
            &mut view,
            false,
        );
        // Try to drag the left handle from 20% to 90%: remaining space is
        // 100 - 5 - 20 = 75, so it sticks there.
        drag.pointer_move(PointerEvent::at(180.0, 0.0), &mut state, &mut view);
        assert_eq!(state.left(), 75.0);
    }

    #[test]
    fn scroll_offset_feeds_cursor_positions() {
        let bounds = Bounds::from_config(&SliderConfig::numeric(0.0, 100.0));
        let mut state = RangeState::new(bounds, true, false);
        let mut view = HeadlessView::new(200.0, 10.0).with_scroll(30.0, 0.0);
        let mut drag = DragController::new();

        drag.pointer_down(
            PointerEvent::down(20.0, 0.0, headless::LEFT_HANDLE),
            &state,
            &mut view,
            false,
        );
        // Same scroll offset on both events cancels out: only the delta counts.
        drag.pointer_move(PointerEvent::at(60.0, 0.0), &mut state, &mut view);
        assert_eq!(state.left(), 20.0);
    }

    #[test]
    fn move_and_up_while_idle_are_no_ops() {
        let (mut drag, mut state, mut view) = fixtures(true);
        assert!(!drag.pointer_move(PointerEvent::at(10.0, 0.0), &mut state, &mut view));
        assert!(!drag.pointer_up(&mut view));
        assert_eq!(view.releases, 0);
    }

    #[test]
    fn teardown_releases_capture_once() {
        let (mut drag, state, mut view) = fixtures(true);
        drag.pointer_down(
            PointerEvent::down(0.0, 0.0, headless::LEFT_HANDLE),
            &state,
            &mut view,
            false,
        );
        drag.teardown(&mut view);
        assert!(view.capture_balanced());
        // Idempotent on a dead session.
        drag.teardown(&mut view);
        assert!(!drag.pointer_up(&mut view));
        assert_eq!(view.releases, 1);
    }
}
