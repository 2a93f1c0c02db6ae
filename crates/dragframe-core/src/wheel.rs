#![forbid(unsafe_code)]

//! Wheel-event normalization and a JSON encoding for record/replay.
//!
//! Browsers have reported wheel rotation through three event models over the
//! years. [`WheelScale::normalize`] maps each of them into one canonical
//! [`WheelInput`] whose deltas are already in pixels of content movement:
//! one discrete click toward the user is `-pixels_per_click`, one click away
//! is `+pixels_per_click`.
//!
//! A host must listen to exactly one of these models per element or it will
//! count the same physical rotation twice. [`WheelEventFilter`] encodes that
//! rule for hosts that receive events from more than one source.

use serde::{Deserialize, Serialize};

use crate::event::Modifiers;

/// Pixels of pan/resize per discrete wheel click.
pub const DEFAULT_PIXELS_PER_CLICK: f64 = 30.0;

/// `deltaX`/`deltaY` reported per click by `wheel` events in pixel mode.
pub const DEFAULT_PIXEL_DELTA_PER_CLICK: f64 = 100.0;

/// `deltaX`/`deltaY` reported per click by `wheel` events in line mode.
pub const DEFAULT_LINES_PER_CLICK: f64 = 3.0;

/// `wheelDelta` units reported by legacy `mousewheel` events per click.
pub const MOUSEWHEEL_DELTA_PER_CLICK: f64 = 120.0;

/// `detail` units reported by legacy `DOMMouseScroll` events per click.
pub const DOM_MOUSE_SCROLL_DETAIL_PER_CLICK: f64 = 3.0;

/// Axis reported by a `DOMMouseScroll` event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScrollAxis {
    Horizontal,
    Vertical,
}

/// Unit of a standard `wheel` event's deltas.
///
/// Browsers report `WheelEvent.deltaMode`; traces recorded before the mode
/// was captured carry deltas already counted in clicks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WheelDeltaMode {
    /// Deltas count discrete clicks.
    #[default]
    Clicks,
    /// `DOM_DELTA_PIXEL`.
    Pixels,
    /// `DOM_DELTA_LINE`.
    Lines,
    /// `DOM_DELTA_PAGE`; one page counts as one click.
    Pages,
}

impl WheelDeltaMode {
    /// Map a DOM `deltaMode` value. Unknown values are read as pixels, the
    /// DOM default.
    #[must_use]
    pub const fn from_dom(delta_mode: u32) -> Self {
        match delta_mode {
            1 => Self::Lines,
            2 => Self::Pages,
            _ => Self::Pixels,
        }
    }
}

/// Event model a wheel rotation arrived through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WheelEventKind {
    /// Standard DOM `wheel`.
    Wheel,
    /// Legacy `mousewheel`.
    MouseWheel,
    /// Legacy Firefox `DOMMouseScroll`.
    DomMouseScroll,
}

impl WheelEventKind {
    /// DOM event type string to register a listener for.
    #[must_use]
    pub const fn dom_event_name(self) -> &'static str {
        match self {
            Self::Wheel => "wheel",
            Self::MouseWheel => "mousewheel",
            Self::DomMouseScroll => "DOMMouseScroll",
        }
    }

    const fn json_kind(self) -> &'static str {
        match self {
            Self::Wheel => "wheel",
            Self::MouseWheel => "mouse_wheel",
            Self::DomMouseScroll => "dom_mouse_scroll",
        }
    }

    fn from_json_kind(kind: &str) -> Option<Self> {
        [Self::Wheel, Self::MouseWheel, Self::DomMouseScroll]
            .into_iter()
            .find(|candidate| candidate.json_kind() == kind)
    }
}

/// Raw wheel event in any supported shape.
///
/// Also the stable JSON encoding used by traces: a `kind` tag plus the
/// fields of that event model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WheelEventShape {
    /// Standard `wheel` event; deltas are positive away from the user's hand
    /// (down/right), in the unit named by `delta_mode`.
    Wheel {
        delta_x: f64,
        delta_y: f64,
        #[serde(default)]
        delta_mode: WheelDeltaMode,
        #[serde(default)]
        mods: Modifiers,
    },
    /// Legacy `mousewheel`; `wheel_delta` is 120 per click, positive when
    /// rotating away from the user. The 2-D fields are absent on older
    /// engines, in which case `wheel_delta` carries the vertical axis.
    MouseWheel {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        wheel_delta_x: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        wheel_delta_y: Option<f64>,
        #[serde(default)]
        wheel_delta: f64,
        #[serde(default)]
        mods: Modifiers,
    },
    /// Legacy `DOMMouseScroll`; `detail` is 3 per click, positive when
    /// scrolling down/right.
    DomMouseScroll {
        axis: ScrollAxis,
        detail: f64,
        #[serde(default)]
        mods: Modifiers,
    },
}

impl WheelEventShape {
    #[must_use]
    pub const fn kind(&self) -> WheelEventKind {
        match self {
            Self::Wheel { .. } => WheelEventKind::Wheel,
            Self::MouseWheel { .. } => WheelEventKind::MouseWheel,
            Self::DomMouseScroll { .. } => WheelEventKind::DomMouseScroll,
        }
    }

    #[must_use]
    pub const fn mods(&self) -> Modifiers {
        match self {
            Self::Wheel { mods, .. }
            | Self::MouseWheel { mods, .. }
            | Self::DomMouseScroll { mods, .. } => *mods,
        }
    }

    /// Encode this event as a stable JSON string.
    ///
    /// Non-finite deltas have no JSON representation and are written as
    /// `null`, which does not parse back.
    pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Errors from parsing an encoded wheel event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WheelParseError {
    /// Malformed JSON, or fields of the wrong type.
    Json(String),
    /// The `kind` tag names no supported event model.
    UnknownKind(String),
    /// Missing required field.
    MissingField(&'static str),
}

impl core::fmt::Display for WheelParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Json(msg) => write!(f, "JSON parse error: {msg}"),
            Self::UnknownKind(kind) => write!(f, "unknown wheel event kind: {kind}"),
            Self::MissingField(field) => write!(f, "missing required field: {field}"),
        }
    }
}

impl std::error::Error for WheelParseError {}

/// Parse one JSON-encoded wheel event.
pub fn parse_wheel_event(json: &str) -> Result<WheelEventShape, WheelParseError> {
    let value: serde_json::Value =
        serde_json::from_str(json).map_err(|e| WheelParseError::Json(e.to_string()))?;
    let kind = value
        .get("kind")
        .and_then(serde_json::Value::as_str)
        .ok_or(WheelParseError::MissingField("kind"))?;
    if WheelEventKind::from_json_kind(kind).is_none() {
        return Err(WheelParseError::UnknownKind(kind.to_owned()));
    }
    serde_json::from_value(value).map_err(|e| WheelParseError::Json(e.to_string()))
}

/// Canonical wheel record: pixel deltas (sign already inverted) plus modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WheelInput {
    pub dx: f64,
    pub dy: f64,
    pub mods: Modifiers,
}

impl WheelInput {
    #[must_use]
    pub const fn new(dx: f64, dy: f64, mods: Modifiers) -> Self {
        Self { dx, dy, mods }
    }

    /// True if neither axis carries movement.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.dx == 0.0 && self.dy == 0.0
    }
}

/// Scale applied when normalizing raw wheel events.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelScale {
    /// Output pixels per click.
    pub pixels_per_click: f64,
    /// Raw `wheel` pixel-mode delta that counts as one click.
    pub pixel_delta_per_click: f64,
    /// Raw `wheel` line-mode delta that counts as one click.
    pub lines_per_click: f64,
}

impl Default for WheelScale {
    fn default() -> Self {
        Self::new(DEFAULT_PIXELS_PER_CLICK)
    }
}

impl WheelScale {
    #[must_use]
    pub const fn new(pixels_per_click: f64) -> Self {
        Self {
            pixels_per_click,
            pixel_delta_per_click: DEFAULT_PIXEL_DELTA_PER_CLICK,
            lines_per_click: DEFAULT_LINES_PER_CLICK,
        }
    }

    /// Override how many raw pixel-mode and line-mode units make one click.
    #[must_use]
    pub const fn with_delta_units(
        mut self,
        pixel_delta_per_click: f64,
        lines_per_click: f64,
    ) -> Self {
        self.pixel_delta_per_click = pixel_delta_per_click;
        self.lines_per_click = lines_per_click;
        self
    }

    fn clicks_per_unit(self, mode: WheelDeltaMode) -> f64 {
        match mode {
            WheelDeltaMode::Clicks | WheelDeltaMode::Pages => 1.0,
            WheelDeltaMode::Pixels => self.pixel_delta_per_click.recip(),
            WheelDeltaMode::Lines => self.lines_per_click.recip(),
        }
    }

    /// Map any supported event shape into the canonical [`WheelInput`].
    ///
    /// Non-finite raw values normalize to `0` on their axis.
    #[must_use]
    pub fn normalize(self, shape: &WheelEventShape) -> WheelInput {
        let ppc = self.pixels_per_click;
        match *shape {
            WheelEventShape::Wheel {
                delta_x,
                delta_y,
                delta_mode,
                mods,
            } => {
                let factor = -ppc * self.clicks_per_unit(delta_mode);
                WheelInput::new(scaled(delta_x, factor), scaled(delta_y, factor), mods)
            }
            WheelEventShape::MouseWheel {
                wheel_delta_x,
                wheel_delta_y,
                wheel_delta,
                mods,
            } => {
                let factor = ppc / MOUSEWHEEL_DELTA_PER_CLICK;
                let dx = wheel_delta_x.map_or(0.0, |raw| scaled(raw, factor));
                let dy = scaled(wheel_delta_y.unwrap_or(wheel_delta), factor);
                WheelInput::new(dx, dy, mods)
            }
            WheelEventShape::DomMouseScroll { axis, detail, mods } => {
                let delta = scaled(detail, -ppc / DOM_MOUSE_SCROLL_DETAIL_PER_CLICK);
                match axis {
                    ScrollAxis::Horizontal => WheelInput::new(delta, 0.0, mods),
                    ScrollAxis::Vertical => WheelInput::new(0.0, delta, mods),
                }
            }
        }
    }
}

fn scaled(raw: f64, factor: f64) -> f64 {
    let value = raw * factor;
    // Also folds -0.0 into 0.0.
    if value.is_finite() && value != 0.0 {
        value
    } else {
        0.0
    }
}

/// Accepts events from exactly one event model.
///
/// Hosts that cannot avoid receiving several models for one rotation route
/// every event through [`accepts`](Self::accepts) and drop the rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WheelEventFilter {
    canonical: WheelEventKind,
}

impl Default for WheelEventFilter {
    fn default() -> Self {
        Self::new(WheelEventKind::Wheel)
    }
}

impl WheelEventFilter {
    #[must_use]
    pub const fn new(canonical: WheelEventKind) -> Self {
        Self { canonical }
    }

    #[must_use]
    pub const fn canonical(&self) -> WheelEventKind {
        self.canonical
    }

    #[must_use]
    pub fn accepts(&self, shape: &WheelEventShape) -> bool {
        shape.kind() == self.canonical
    }
}
