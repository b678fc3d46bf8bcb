//! Authoritative range state: fill-edge percents, clamping, overlap policy.
//!
//! `left` is the fill's left edge as a percent of the track measured from
//! the left end; `right` is measured from the right end. With both in
//! [0, 100], `left + right <= 100` expresses that the handles do not cross.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::mapping::{self, Bounds};

/// A domain value on one side of the range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SliderValue {
    Number(f64),
    Date(NaiveDateTime),
}

impl SliderValue {
    /// Numeric form: the number itself, or epoch milliseconds for dates.
    pub fn as_f64(&self) -> f64 {
        match self {
            SliderValue::Number(n) => *n,
            SliderValue::Date(dt) => mapping::epoch_ms(*dt),
        }
    }
}

impl From<f64> for SliderValue {
    fn from(n: f64) -> Self {
        SliderValue::Number(n)
    }
}

impl From<NaiveDateTime> for SliderValue {
    fn from(dt: NaiveDateTime) -> Self {
        SliderValue::Date(dt)
    }
}

/// Snapshot of both sides of the range, computed on demand, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderInfo {
    pub left: SliderValue,
    pub right: SliderValue,
}

/// User-supplied transform applied to each side of an info snapshot.
/// Panics inside it propagate to the caller; nothing is caught.
pub type ValueCallback = Box<dyn Fn(SliderValue) -> SliderValue>;

/// Percent tolerance for the programmatic-set overlap check.
const OVERLAP_TOLERANCE: f64 = 1.0;

/// The authoritative value store. Lives for the slider's lifetime; mutated
/// on every drag step and programmatic move.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeState {
    left: f64,
    right: f64,
    bounds: Bounds,
    overlap: bool,
    one_way: bool,
}

impl RangeState {
    pub fn new(bounds: Bounds, overlap: bool, one_way: bool) -> Self {
        Self {
            left: 0.0,
            right: 0.0,
            bounds,
            overlap,
            one_way,
        }
    }

    pub fn left(&self) -> f64 {
        self.left
    }

    pub fn right(&self) -> f64 {
        self.right
    }

    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    pub fn overlap(&self) -> bool {
        self.overlap
    }

    /// Set the left fill edge from a tentative percent.
    ///
    /// Clamps to [0, 100]; without overlap, additionally clamps to the
    /// space the right handle leaves over. One-way sliders pin the left
    /// edge at the minimum, so this is a no-op there.
    ///
    /// Returns the percent actually applied.
    pub fn set_left(&mut self, percent: f64, handle_width_pct: f64) -> f64 {
        if self.one_way {
            return self.left;
        }
        self.left = self.admit(percent, self.right, handle_width_pct);
        self.left
    }

    /// Set the right fill edge (measured from the right end). Same clamping
    /// as [`Self::set_left`], against the left handle's position.
    pub fn set_right(&mut self, percent: f64, handle_width_pct: f64) -> f64 {
        self.right = self.admit(percent, self.left, handle_width_pct);
        self.right
    }

    fn admit(&self, percent: f64, other: f64, handle_width_pct: f64) -> f64 {
        let mut percent = percent.clamp(0.0, 100.0);
        if !self.overlap {
            let remaining = (100.0 - handle_width_pct) - other;
            if remaining <= percent {
                percent = remaining.max(0.0);
            }
        }
        percent
    }

    /// Set both edges from domain values, clamping each to `[min, max]`.
    ///
    /// Without overlap, a resulting position where the left handle's span
    /// crosses the right handle (within a 1-percent tolerance) resets BOTH
    /// edges to the full range. This is the recovery policy for
    /// programmatic sets; the live drag path clamps partially instead.
    ///
    /// Returns true when the full-range reset fired.
    pub fn set_from_values(
        &mut self,
        left: Option<f64>,
        right: Option<f64>,
        handle_width_pct: f64,
    ) -> bool {
        let Bounds { min, max, .. } = self.bounds;

        if let Some(value) = left {
            if !self.one_way {
                self.left = mapping::to_percent(value.clamp(min, max), min, max);
            }
        }
        if let Some(value) = right {
            self.right = 100.0 - mapping::to_percent(value.clamp(min, max), min, max);
        }

        if !self.overlap
            && self.left + handle_width_pct > (100.0 - self.right) - OVERLAP_TOLERANCE
        {
            log::warn!(
                "handles would cross (left {:.2}%, right {:.2}%); resetting to full range",
                self.left,
                self.right
            );
            self.left = 0.0;
            self.right = 0.0;
            return true;
        }
        false
    }

    /// Scalar set: select `[min, value]`.
    pub fn set_scalar(&mut self, value: f64) {
        let Bounds { min, max, .. } = self.bounds;
        let percent = mapping::to_percent(value.clamp(min, max), min, max);
        self.left = 0.0;
        self.right = 100.0 - percent;
    }

    /// Derive the current domain values, wrapping as dates in date mode and
    /// applying the transform callback to each side when present.
    pub fn info(&self, is_date: bool, callback: Option<&ValueCallback>) -> SliderInfo {
        let Bounds { min, max, .. } = self.bounds;
        let total = max - min;
        let left = min + self.left / 100.0 * total;
        let right = max - self.right / 100.0 * total;

        let (mut left, mut right) = if is_date {
            (
                SliderValue::Date(mapping::from_epoch_ms(left)),
                SliderValue::Date(mapping::from_epoch_ms(right)),
            )
        } else {
            (SliderValue::Number(left), SliderValue::Number(right))
        };

        if let Some(callback) = callback {
            left = callback(left);
            right = callback(right);
        }

        SliderInfo { left, right }
    }
}
