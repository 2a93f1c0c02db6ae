#![forbid(unsafe_code)]

//! Inline style declarations written by the DOM glue.

use dragframe_core::enclosure::StyleUpdate;
use dragframe_core::geometry::{Point, px};

/// Class name given to every frame so pages can style it from a stylesheet.
pub const FRAME_CLASS_NAME: &str = "enclosure";

/// Document-level event types a drag listens to while active.
pub const DRAG_MOVE_EVENT: &str = "pointermove";
pub const DRAG_RELEASE_EVENT: &str = "pointerup";

/// Frame styles that never change after creation. Border-box keeps borders
/// and padding inside the configured size.
pub const FRAME_STATIC_STYLES: [(&str, &str); 2] =
    [("overflow", "hidden"), ("box-sizing", "border-box")];

/// Content positioning mode inside the frame.
pub const CONTENT_POSITION: (&str, &str) = ("position", "relative");

/// `(property, value)` for one enclosure style write.
#[must_use]
pub fn declaration(update: StyleUpdate) -> (&'static str, String) {
    (update.property(), px(update.value()))
}

/// `left` / `top` declarations for a dragged element.
#[must_use]
pub fn position_declarations(position: Point) -> [(&'static str, String); 2] {
    [("left", px(position.x)), ("top", px(position.y))]
}
