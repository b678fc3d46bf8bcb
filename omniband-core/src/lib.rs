//! omniband core — dual-handle range slider logic, rendering-agnostic.
//!
//! The heart of the crate:
//! - Percent-space value mapping, numeric or date bounds
//! - Authoritative range state with clamping and the overlap invariant
//! - The pointer-down/move/up drag state machine
//! - A fixed-topic pub/sub bus (`start`, `moving`, `stop`)
//! - The `Slider` facade, the only piece that talks to the rendering
//!   collaborator behind the `SliderView` trait

pub mod config;
pub mod drag;
pub mod events;
pub mod mapping;
pub mod slider;
pub mod state;
pub mod view;

pub use config::{BoundInput, SliderConfig};
pub use drag::PointerEvent;
pub use events::{Subscription, Topic};
pub use slider::{MoveInput, Slider};
pub use state::{SliderInfo, SliderValue};
pub use view::{Geometry, HandleSide, SliderView, TargetId};
