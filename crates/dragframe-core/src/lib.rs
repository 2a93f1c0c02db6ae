#![forbid(unsafe_code)]

//! Core: deterministic drag and wheel-enclosure state machines.
//!
//! # Role in dragframe
//! `dragframe-core` owns every decision the DOM helpers make. It never touches
//! the DOM: the host (see `dragframe-web`) reads geometry and events from the
//! browser, feeds them in, and applies the returned dispatch.
//!
//! # Primary responsibilities
//! - **DragController**: keeps the pointer-to-element offset constant for the
//!   lifetime of a drag and tells the host when to attach/detach listeners.
//! - **Enclosure**: pans content inside a fixed-size frame, or resizes the
//!   frame while the resize modifier is held, with both axes clamped.
//! - **Wheel normalization**: maps `wheel`, legacy `mousewheel` and
//!   `DOMMouseScroll` shapes into one canonical [`wheel::WheelInput`].
//!
//! # How it fits in the system
//! Everything here is plain data in, plain data out, so the same state
//! machines run under `wasm32` in the browser and under native unit and
//! property tests.

pub mod drag;
pub mod enclosure;
pub mod event;
pub mod geometry;
pub mod logging;
pub mod wheel;

pub use drag::{DragController, DragDispatch, DragSession};
pub use enclosure::{Enclosure, EnclosureConfig, EnclosureConfigError, WheelDispatch};
pub use event::{EventDisposition, Modifiers};
pub use geometry::{Point, ScrollOffset, Size};
pub use wheel::{WheelDeltaMode, WheelEventShape, WheelInput, WheelParseError, WheelScale};
