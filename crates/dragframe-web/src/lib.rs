#![forbid(unsafe_code)]

//! `dragframe-web` binds the `dragframe-core` state machines to the DOM.
//!
//! JS exports (wasm32 only):
//! - `startDrag(element, event)`: call from a pointer-down handler; the
//!   element follows the pointer until release.
//! - `enclose(content, frameWidth, frameHeight, contentX?, contentY?)`: wrap
//!   `content` in a clipping frame that pans on wheel, or resizes with Alt.
//!
//! The DOM glue only reads geometry and applies what the core returns. Style
//! formatting lives in [`style`] so it can be tested natively.

pub mod style;

#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod drag;
#[cfg(target_arch = "wasm32")]
mod enclosure;

#[cfg(target_arch = "wasm32")]
pub use drag::start_drag;
#[cfg(target_arch = "wasm32")]
pub use enclosure::{EnclosureBinding, enclose};
