//! Terminal rendering collaborator: maps percent space onto a row of cells.
//!
//! The core only sees `SliderView`; everything terminal-specific (the track
//! rect, cell hit-testing, one-cell handles) lives here. Mouse capture is
//! global in a crossterm session, so `capture_pointer` just keeps the
//! balance book the core expects.

use omniband_core::{Geometry, HandleSide, SliderView, TargetId};
use ratatui::layout::Rect;

pub const LEFT_HANDLE: TargetId = TargetId(1);
pub const RIGHT_HANDLE: TargetId = TargetId(2);

/// Visual state commanded by the slider core, plus the track geometry the
/// core reads back.
pub struct TermView {
    area: Rect,
    pub handle_left: f64,
    /// Percent from the RIGHT end, like the left one is from the left.
    pub handle_right: f64,
    pub fill_left: f64,
    pub fill_right: f64,
    pub transition: bool,
    pub disabled: bool,
    pub one_way: bool,
    pub raised: Option<HandleSide>,
    captures: u32,
}

impl TermView {
    pub fn new() -> Self {
        Self {
            area: Rect::default(),
            handle_left: 0.0,
            handle_right: 0.0,
            fill_left: 0.0,
            fill_right: 0.0,
            transition: false,
            disabled: false,
            one_way: false,
            raised: None,
            captures: 0,
        }
    }

    /// Called by the draw pass each frame, before events are handled.
    pub fn set_area(&mut self, area: Rect) {
        self.area = area;
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    /// Whether a drag session currently holds the pointer capture.
    pub fn capturing(&self) -> bool {
        self.captures > 0
    }

    /// Whether `side` is the most recently raised handle. Neither side is
    /// raised before the first drag.
    pub fn is_raised(&self, side: HandleSide) -> bool {
        self.raised == Some(side)
    }

    fn cells(&self) -> f64 {
        self.area.width as f64
    }

    /// Column of a handle: left handles are offset from the left edge,
    /// right handles from the right edge.
    pub fn handle_column(&self, side: HandleSide) -> u16 {
        let span = self.cells().max(1.0) - 1.0;
        let offset = match side {
            HandleSide::Left => self.handle_left / 100.0 * span,
            HandleSide::Right => (100.0 - self.handle_right) / 100.0 * span,
        };
        self.area.x + offset.round() as u16
    }

    /// Hit-test a screen cell against the handles (±1 column slack — a
    /// terminal cell is a coarse pointer). The left handle does not exist
    /// in one-way mode.
    pub fn target_at(&self, column: u16, row: u16) -> Option<TargetId> {
        if row != self.area.y || self.area.width == 0 {
            return None;
        }
        let near = |side| {
            let at = self.handle_column(side);
            column.abs_diff(at) <= 1
        };
        // The raised handle wins when both are under the cursor.
        let order = match self.raised {
            Some(HandleSide::Right) => [HandleSide::Right, HandleSide::Left],
            _ => [HandleSide::Left, HandleSide::Right],
        };
        for side in order {
            if side == HandleSide::Left && self.one_way {
                continue;
            }
            if near(side) {
                return Some(match side {
                    HandleSide::Left => LEFT_HANDLE,
                    HandleSide::Right => RIGHT_HANDLE,
                });
            }
        }
        None
    }
}

impl Default for TermView {
    fn default() -> Self {
        Self::new()
    }
}

impl SliderView for TermView {
    fn mount(&mut self) -> bool {
        // Any terminal cell row is a legitimate mount point.
        true
    }

    fn geometry(&self) -> Geometry {
        Geometry {
            track_width: self.cells(),
            handle_width: 1.0,
            scroll_x: 0.0,
            scroll_y: 0.0,
        }
    }

    fn handle_for_target(&self, target: TargetId) -> Option<HandleSide> {
        match target {
            LEFT_HANDLE => Some(HandleSide::Left),
            RIGHT_HANDLE => Some(HandleSide::Right),
            _ => None,
        }
    }

    fn set_handle(&mut self, side: HandleSide, percent: f64) {
        match side {
            HandleSide::Left => self.handle_left = percent,
            HandleSide::Right => self.handle_right = percent,
        }
    }

    fn set_fill_side(&mut self, side: HandleSide, percent: f64) {
        match side {
            HandleSide::Left => self.fill_left = percent,
            HandleSide::Right => self.fill_right = percent,
        }
    }

    fn set_transition(&mut self, enabled: bool) {
        self.transition = enabled;
    }

    fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    fn raise(&mut self, side: HandleSide) {
        self.raised = Some(side);
    }

    fn set_one_way(&mut self, one_way: bool) {
        self.one_way = one_way;
    }

    fn capture_pointer(&mut self) {
        self.captures += 1;
    }

    fn release_pointer(&mut self) {
        self.captures = self.captures.saturating_sub(1);
    }
}
