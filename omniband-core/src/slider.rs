//! The slider facade: composes bounds, state, drag machine, and bus, and is
//! the only component that talks to the rendering collaborator.

use crate::config::SliderConfig;
use crate::drag::{DragController, PointerEvent};
use crate::events::{EventBus, Subscription, Topic};
use crate::mapping::Bounds;
use crate::state::{RangeState, SliderInfo, SliderValue, ValueCallback};
use crate::view::{HandleSide, SliderView};

/// A programmatic position request.
///
/// A scalar selects `[min, value]`; a pair sets whichever sides are given,
/// subject to the same clamping and overlap-recovery rules as any other
/// write through [`RangeState`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MoveInput {
    Scalar(SliderValue),
    Pair {
        left: Option<SliderValue>,
        right: Option<SliderValue>,
    },
}

impl MoveInput {
    pub fn pair(left: impl Into<SliderValue>, right: impl Into<SliderValue>) -> Self {
        MoveInput::Pair {
            left: Some(left.into()),
            right: Some(right.into()),
        }
    }

    pub fn scalar(value: impl Into<SliderValue>) -> Self {
        MoveInput::Scalar(value.into())
    }
}

/// A dual-handle (or single-handle) range slider over a rendering
/// collaborator `V`.
///
/// Construction is permissive: when the view reports an illegitimate mount
/// point, the instance exists but every operation is a silent no-op and
/// subscriptions are inert.
pub struct Slider<V: SliderView> {
    view: V,
    state: RangeState,
    drag: DragController,
    bus: EventBus,
    callback: Option<ValueCallback>,
    is_date: bool,
    disabled: bool,
    mounted: bool,
}

impl<V: SliderView> Slider<V> {
    pub fn new(view: V, config: SliderConfig) -> Self {
        Self::with_callback(view, config, None)
    }

    /// Construct with a value-transform callback applied to every info
    /// snapshot. Panics inside the callback propagate uncaught.
    pub fn with_callback(
        mut view: V,
        config: SliderConfig,
        callback: Option<ValueCallback>,
    ) -> Self {
        let config = config.normalized();
        let bounds = Bounds::from_config(&config);
        let mounted = view.mount();

        let mut slider = Self {
            view,
            state: RangeState::new(bounds, config.overlap, config.is_one_way),
            drag: DragController::new(),
            bus: EventBus::new(),
            callback,
            is_date: config.is_date,
            disabled: false,
            mounted,
        };

        if slider.mounted {
            slider.view.set_one_way(config.is_one_way);
            // Push the configured range through the regular move path,
            // without notifying anyone about construction.
            slider.set_position(
                MoveInput::pair(bounds.start, bounds.end),
                true,
            );
        }
        slider
    }

    /// Programmatic positioning. Publishes `moving` unless suppressed.
    pub fn set_position(&mut self, input: MoveInput, suppress_events: bool) {
        if !self.mounted {
            return;
        }
        // Smooth transition for programmatic jumps; a drag start clears it.
        self.view.set_transition(true);
        let handle_width_pct = self.view.geometry().handle_width_pct();

        match input {
            MoveInput::Pair { left, right } => {
                self.state.set_from_values(
                    left.map(|v| v.as_f64()),
                    right.map(|v| v.as_f64()),
                    handle_width_pct,
                );
            }
            MoveInput::Scalar(value) => {
                self.state.set_scalar(value.as_f64());
            }
        }
        self.sync_view();

        if !suppress_events {
            let info = self.info();
            self.bus.publish(Topic::Moving, &info);
        }
    }

    /// Current `{left, right}` domain values. An unmounted slider reports
    /// the full configured range.
    pub fn info(&self) -> SliderInfo {
        self.state.info(self.is_date, self.callback.as_ref())
    }

    /// Toggle drag acceptance and the disabled visual. Idempotent. A drag
    /// already in progress is unaffected; disabling only gates new sessions.
    pub fn disable(&mut self, disabled: bool) {
        if !self.mounted {
            return;
        }
        self.disabled = disabled;
        self.view.set_disabled(disabled);
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Subscribe to `"start"`, `"moving"`, or `"stop"`. Any other topic
    /// (or an unmounted slider) yields an inert token whose `remove()` is a
    /// safe no-op.
    pub fn subscribe(
        &mut self,
        topic: &str,
        handler: impl FnMut(&SliderInfo) + 'static,
    ) -> Subscription {
        if !self.mounted {
            return Subscription::inert();
        }
        match Topic::from_name(topic) {
            Some(topic) => self.bus.subscribe(topic, handler),
            None => Subscription::inert(),
        }
    }

    /// Raw pointer-down from the collaborator. Starts a drag session when
    /// the target resolves to a handle and the slider accepts drags.
    pub fn pointer_down(&mut self, event: PointerEvent) {
        if !self.mounted {
            return;
        }
        if self
            .drag
            .pointer_down(event, &self.state, &mut self.view, self.disabled)
        {
            let info = self.info();
            self.bus.publish(Topic::Start, &info);
        }
    }

    /// Raw pointer-move; only meaningful while a session is live.
    pub fn pointer_move(&mut self, event: PointerEvent) {
        if !self.mounted {
            return;
        }
        if self.drag.pointer_move(event, &mut self.state, &mut self.view) {
            let info = self.info();
            self.bus.publish(Topic::Moving, &info);
        }
    }

    /// Raw pointer-up; ends the session and releases the pointer capture.
    pub fn pointer_up(&mut self) {
        if !self.mounted {
            return;
        }
        if self.drag.pointer_up(&mut self.view) {
            let info = self.info();
            self.bus.publish(Topic::Stop, &info);
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// The collaborator is going away: release any live pointer capture and
    /// go inert. Publishes nothing.
    pub fn unmount(&mut self) {
        self.drag.teardown(&mut self.view);
        self.mounted = false;
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    fn sync_view(&mut self) {
        let left = self.state.left();
        let right = self.state.right();
        self.view.set_handle(HandleSide::Left, left);
        self.view.set_fill_side(HandleSide::Left, left);
        self.view.set_handle(HandleSide::Right, right);
        self.view.set_fill_side(HandleSide::Right, right);
    }
}
