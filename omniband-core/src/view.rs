//! The rendering collaborator seam.
//!
//! The core never touches a concrete UI technology; it reads geometry from
//! and issues visual commands to a [`SliderView`]. The view owns element
//! construction, styling, and the global pointer listeners behind
//! `capture_pointer`/`release_pointer`.

use serde::{Deserialize, Serialize};

/// Which handle an operation concerns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HandleSide {
    Left,
    Right,
}

/// Opaque identifier for an element the view dispatched an event on.
/// Only the view can interpret it (and walk whatever ancestor chain its
/// technology has) via [`SliderView::handle_for_target`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TargetId(pub u64);

/// Geometry snapshot supplied by the view at each drag transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    /// Track width in the view's own length unit (pixels, cells, ...).
    pub track_width: f64,
    /// Handle width in the same unit. Only relevant without overlap: two
    /// finite-width handles cannot fully coincide.
    pub handle_width: f64,
    /// Scroll offset added to client coordinates to get page coordinates.
    pub scroll_x: f64,
    pub scroll_y: f64,
}

impl Geometry {
    /// Handle width as a percent of the track.
    pub fn handle_width_pct(&self) -> f64 {
        if self.track_width <= 0.0 {
            0.0
        } else {
            self.handle_width / self.track_width * 100.0
        }
    }
}

/// Everything the slider core asks of its rendering collaborator.
pub trait SliderView {
    /// Build the track, both handles, and the fill into the container.
    /// Returns false when the container is not a legitimate mount point;
    /// the slider then stays inert (permissive failure, not an error).
    fn mount(&mut self) -> bool;

    fn geometry(&self) -> Geometry;

    /// Resolve an event target to the handle it belongs to, if any.
    fn handle_for_target(&self, target: TargetId) -> Option<HandleSide>;

    /// Position a handle: percent from the left end for the left handle,
    /// from the right end for the right handle.
    fn set_handle(&mut self, side: HandleSide, percent: f64);

    /// Position one edge of the fill, same convention as [`Self::set_handle`].
    fn set_fill_side(&mut self, side: HandleSide, percent: f64);

    /// Smooth-transition visual, enabled on programmatic moves and cleared
    /// when a drag starts.
    fn set_transition(&mut self, enabled: bool);

    fn set_disabled(&mut self, disabled: bool);

    /// Raise a handle above the other (z-order); the most recently
    /// interacted handle wins.
    fn raise(&mut self, side: HandleSide);

    /// Single-handle visual variant.
    fn set_one_way(&mut self, one_way: bool);

    /// Register the global pointer move/up listeners for a drag session.
    fn capture_pointer(&mut self);

    /// Unregister them. Called exactly once per capture.
    fn release_pointer(&mut self);
}

pub mod headless {
    //! A recording view for tests and headless embedding: canned geometry,
    //! a command log, and a capture balance counter.

    use super::{Geometry, HandleSide, SliderView, TargetId};

    /// Default targets a [`HeadlessView`] resolves: the handles themselves
    /// and one "inner child" per handle, standing in for the ancestor walk.
    pub const LEFT_HANDLE: TargetId = TargetId(1);
    pub const RIGHT_HANDLE: TargetId = TargetId(2);
    pub const LEFT_HANDLE_CHILD: TargetId = TargetId(11);
    pub const RIGHT_HANDLE_CHILD: TargetId = TargetId(12);
    /// A target outside both handles (e.g. the bare track).
    pub const TRACK: TargetId = TargetId(99);

    /// One visual command the core issued.
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub enum ViewCommand {
        Handle(HandleSide, f64),
        FillSide(HandleSide, f64),
        Transition(bool),
        Disabled(bool),
        Raise(HandleSide),
        OneWay(bool),
    }

    pub struct HeadlessView {
        geometry: Geometry,
        mountable: bool,
        pub commands: Vec<ViewCommand>,
        pub captures: u32,
        pub releases: u32,
    }

    impl HeadlessView {
        pub fn new(track_width: f64, handle_width: f64) -> Self {
            Self {
                geometry: Geometry {
                    track_width,
                    handle_width,
                    scroll_x: 0.0,
                    scroll_y: 0.0,
                },
                mountable: true,
                commands: Vec::new(),
                captures: 0,
                releases: 0,
            }
        }

        /// A view whose container is not a legitimate mount point.
        pub fn unmountable() -> Self {
            let mut view = Self::new(100.0, 0.0);
            view.mountable = false;
            view
        }

        pub fn with_scroll(mut self, scroll_x: f64, scroll_y: f64) -> Self {
            self.geometry.scroll_x = scroll_x;
            self.geometry.scroll_y = scroll_y;
            self
        }

        pub fn capture_balanced(&self) -> bool {
            self.captures == self.releases
        }

        /// Last commanded position for a handle, if any.
        pub fn handle_position(&self, side: HandleSide) -> Option<f64> {
            self.commands.iter().rev().find_map(|cmd| match cmd {
                ViewCommand::Handle(s, pct) if *s == side => Some(*pct),
                _ => None,
            })
        }
    }

    impl SliderView for HeadlessView {
        fn mount(&mut self) -> bool {
            self.mountable
        }

        fn geometry(&self) -> Geometry {
            self.geometry
        }

        fn handle_for_target(&self, target: TargetId) -> Option<HandleSide> {
            match target {
                LEFT_HANDLE | LEFT_HANDLE_CHILD => Some(HandleSide::Left),
                RIGHT_HANDLE | RIGHT_HANDLE_CHILD => Some(HandleSide::Right),
                _ => None,
            }
        }

        fn set_handle(&mut self, side: HandleSide, percent: f64) {
            self.commands.push(ViewCommand::Handle(side, percent));
        }

        fn set_fill_side(&mut self, side: HandleSide, percent: f64) {
            self.commands.push(ViewCommand::FillSide(side, percent));
        }

        fn set_transition(&mut self, enabled: bool) {
            self.commands.push(ViewCommand::Transition(enabled));
        }

        fn set_disabled(&mut self, disabled: bool) {
            self.commands.push(ViewCommand::Disabled(disabled));
        }

        fn raise(&mut self, side: HandleSide) {
            self.commands.push(ViewCommand::Raise(side));
        }

        fn set_one_way(&mut self, one_way: bool) {
            self.commands.push(ViewCommand::OneWay(one_way));
        }

        fn capture_pointer(&mut self) {
            self.captures += 1;
        }

        fn release_pointer(&mut self) {
            self.releases += 1;
        }
    }
}
