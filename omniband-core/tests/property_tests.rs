//! Property tests for slider invariants.
//!
//! Uses proptest to verify:
//! 1. Bound normalization — min <= start <= end <= max always holds
//! 2. Percent/value round-trip within floating tolerance
//! 3. Non-overlap — left + right <= 100 under arbitrary setter sequences
//! 4. One-way — the left edge never leaves the minimum
//! 5. Drag sessions keep positions inside percent space

use proptest::prelude::*;

use omniband_core::mapping::{self, Bounds};
use omniband_core::state::RangeState;
use omniband_core::view::headless::{self, HeadlessView};
use omniband_core::{PointerEvent, Slider, SliderConfig};

// ── Strategies (proptest) ────────────────────────────────────────────

fn arb_bound() -> impl Strategy<Value = Option<f64>> {
    prop_oneof![
        Just(None),
        (-1e6..1e6_f64).prop_map(Some),
    ]
}

fn arb_percent_ish() -> impl Strategy<Value = f64> {
    -50.0..150.0_f64
}

fn arb_handle_width_pct() -> impl Strategy<Value = f64> {
    0.0..20.0_f64
}

/// A setter call against one side of the range.
#[derive(Debug, Clone, Copy)]
enum Op {
    Left(f64),
    Right(f64),
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        arb_percent_ish().prop_map(Op::Left),
        arb_percent_ish().prop_map(Op::Right),
    ]
}

fn config_from(min: Option<f64>, max: Option<f64>, start: Option<f64>, end: Option<f64>) -> SliderConfig {
    SliderConfig {
        min: min.map(Into::into),
        max: max.map(Into::into),
        start: start.map(Into::into),
        end: end.map(Into::into),
        ..SliderConfig::default()
    }
}

// ── 1. Bound normalization ───────────────────────────────────────────

proptest! {
    /// However the caller scrambles min/max/start/end, normalized bounds
    /// satisfy min <= start <= end <= max.
    #[test]
    fn bounds_are_always_ordered(
        min in arb_bound(),
        max in arb_bound(),
        start in arb_bound(),
        end in arb_bound(),
    ) {
        let bounds = Bounds::from_config(&config_from(min, max, start, end));
        prop_assert!(bounds.min <= bounds.max);
        prop_assert!(bounds.min <= bounds.start);
        prop_assert!(bounds.start <= bounds.end);
        prop_assert!(bounds.end <= bounds.max);
    }

    /// Out-of-order or out-of-range start/end reset to the full range.
    #[test]
    fn bad_start_end_snap_to_full_range(
        lo in -1e5..1e5_f64,
        width in 1.0..1e5_f64,
        start in -1e5..1e5_f64,
        end in -1e5..1e5_f64,
    ) {
        let hi = lo + width;
        let bounds = Bounds::from_config(&config_from(Some(lo), Some(hi), Some(start), Some(end)));
        let kept = start <= end && start >= lo && end <= hi;
        if kept {
            prop_assert_eq!((bounds.start, bounds.end), (start, end));
        } else {
            prop_assert_eq!((bounds.start, bounds.end), (lo, hi));
        }
    }
}

// ── 2. Percent/value round-trip ──────────────────────────────────────

proptest! {
    #[test]
    fn percent_value_round_trip(
        lo in -1e6..1e6_f64,
        width in 1e-3..1e6_f64,
        t in 0.0..1.0_f64,
    ) {
        let hi = lo + width;
        let v = lo + t * width;
        let back = mapping::to_value(mapping::to_percent(v, lo, hi), lo, hi);
        let tolerance = 1e-9 * width.max(lo.abs()).max(1.0);
        prop_assert!((back - v).abs() <= tolerance, "{} -> {}", v, back);
    }
}

// ── 3. Non-overlap invariant ─────────────────────────────────────────

proptest! {
    /// With overlap disabled, no sequence of setter calls makes the
    /// handles cross, and positions stay inside percent space.
    #[test]
    fn handles_never_cross_without_overlap(
        ops in prop::collection::vec(arb_op(), 1..40),
        handle_width_pct in arb_handle_width_pct(),
    ) {
        let bounds = Bounds::from_config(&SliderConfig::numeric(0.0, 100.0));
        let mut state = RangeState::new(bounds, false, false);
        for op in ops {
            match op {
                Op::Left(pct) => { state.set_left(pct, handle_width_pct); }
                Op::Right(pct) => { state.set_right(pct, handle_width_pct); }
            }
            prop_assert!((0.0..=100.0).contains(&state.left()));
            prop_assert!((0.0..=100.0).contains(&state.right()));
            prop_assert!(state.left() + state.right() <= 100.0 + 1e-9);
        }
    }
}

// ── 4. One-way mode ──────────────────────────────────────────────────

proptest! {
    /// In one-way mode the left edge stays pinned at the minimum no matter
    /// what targets the left side.
    #[test]
    fn one_way_left_edge_is_pinned(
        ops in prop::collection::vec(arb_op(), 1..30),
        values in prop::collection::vec(-50.0..150.0_f64, 1..10),
    ) {
        let bounds = Bounds::from_config(&SliderConfig::numeric(0.0, 100.0));
        let mut state = RangeState::new(bounds, true, true);
        for op in ops {
            match op {
                Op::Left(pct) => { state.set_left(pct, 0.0); }
                Op::Right(pct) => { state.set_right(pct, 0.0); }
            }
            prop_assert_eq!(state.left(), 0.0);
        }
        for v in values {
            state.set_from_values(Some(v), Some(v), 0.0);
            prop_assert_eq!(state.left(), 0.0);
        }
    }
}

// ── 5. Drag sessions ─────────────────────────────────────────────────

proptest! {
    /// A full drag session over arbitrary cursor positions keeps both
    /// sides inside percent space, never crosses the handles, and balances
    /// its pointer capture.
    #[test]
    fn drag_session_respects_percent_space(
        grab_right in any::<bool>(),
        start_x in 0.0..100.0_f64,
        xs in prop::collection::vec(-200.0..300.0_f64, 1..25),
    ) {
        let mut slider = Slider::new(
            HeadlessView::new(100.0, 5.0),
            SliderConfig::numeric(0.0, 100.0)
                .with_range(20.0, 80.0)
                .with_overlap(false),
        );

        let target = if grab_right { headless::RIGHT_HANDLE } else { headless::LEFT_HANDLE };
        slider.pointer_down(PointerEvent::down(start_x, 0.0, target));
        for x in xs {
            slider.pointer_move(PointerEvent::at(x, 0.0));
            let info = slider.info();
            let (left, right) = (info.left.as_f64(), info.right.as_f64());
            prop_assert!((0.0..=100.0).contains(&left));
            prop_assert!((0.0..=100.0).contains(&right));
            prop_assert!(left <= right + 1e-9);
        }
        slider.pointer_up();
        prop_assert!(slider.view().capture_balanced());
    }
}
