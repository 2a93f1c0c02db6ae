#![forbid(unsafe_code)]

//! Wheel-driven enclosure: a fixed-size frame that clips, pans and resizes
//! its content.
//!
//! # Design
//!
//! - [`EnclosureConfig`] holds the tuning knobs (minimum frame extent, wheel
//!   scale, resize modifier).
//! - [`Enclosure`] is the mutable frame/offset state. It consumes canonical
//!   [`WheelInput`] values together with the content's current rendered size
//!   and returns a [`WheelDispatch`] listing the style updates to apply.
//!
//! Invariants held after construction and after every wheel event:
//! - `frame.width >= min_frame_extent` and `frame.height >= min_frame_extent`,
//! - `content_offset.x <= 0` and `content_offset.y <= 0`,
//! - a pan never moves an offset below `min(frame - content, 0)`.

use serde::{Deserialize, Serialize};

use crate::event::{EventDisposition, Modifiers};
use crate::geometry::{Point, Size};
use crate::logging::{debug, trace, warn};
use crate::wheel::{
    DEFAULT_LINES_PER_CLICK, DEFAULT_PIXEL_DELTA_PER_CLICK, DEFAULT_PIXELS_PER_CLICK,
    WheelEventShape, WheelInput, WheelParseError, WheelScale, parse_wheel_event,
};

/// Smallest frame width/height, in CSS pixels.
pub const MIN_FRAME_EXTENT: f64 = 50.0;

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Tuning knobs for an enclosure.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnclosureConfig {
    /// Lower bound for both frame extents.
    pub min_frame_extent: f64,
    /// Pixels of pan/resize per discrete wheel click.
    pub pixels_per_click: f64,
    /// Pixel-mode `wheel` delta that counts as one click.
    pub pixel_delta_per_click: f64,
    /// Line-mode `wheel` delta that counts as one click.
    pub lines_per_click: f64,
    /// Modifier that switches the wheel from panning to resizing.
    pub resize_modifier: Modifiers,
}

impl Default for EnclosureConfig {
    fn default() -> Self {
        Self {
            min_frame_extent: MIN_FRAME_EXTENT,
            pixels_per_click: DEFAULT_PIXELS_PER_CLICK,
            pixel_delta_per_click: DEFAULT_PIXEL_DELTA_PER_CLICK,
            lines_per_click: DEFAULT_LINES_PER_CLICK,
            resize_modifier: Modifiers::ALT,
        }
    }
}

impl EnclosureConfig {
    /// Check that every knob is usable.
    pub fn validate(&self) -> Result<(), EnclosureConfigError> {
        if !self.min_frame_extent.is_finite() || self.min_frame_extent <= 0.0 {
            return Err(EnclosureConfigError::InvalidMinFrameExtent {
                value: self.min_frame_extent,
            });
        }
        if !self.pixels_per_click.is_finite() || self.pixels_per_click <= 0.0 {
            return Err(EnclosureConfigError::InvalidPixelsPerClick {
                value: self.pixels_per_click,
            });
        }
        for (field, value) in [
            ("pixel_delta_per_click", self.pixel_delta_per_click),
            ("lines_per_click", self.lines_per_click),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(EnclosureConfigError::InvalidDeltaUnit { field, value });
            }
        }
        if self.resize_modifier.is_empty() {
            return Err(EnclosureConfigError::EmptyResizeModifier);
        }
        Ok(())
    }

    /// Wheel scale used to normalize raw events for this enclosure.
    #[must_use]
    pub const fn wheel_scale(&self) -> WheelScale {
        WheelScale::new(self.pixels_per_click)
            .with_delta_units(self.pixel_delta_per_click, self.lines_per_click)
    }
}

/// Rejected [`EnclosureConfig`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EnclosureConfigError {
    InvalidMinFrameExtent { value: f64 },
    InvalidPixelsPerClick { value: f64 },
    InvalidDeltaUnit { field: &'static str, value: f64 },
    EmptyResizeModifier,
}

impl core::fmt::Display for EnclosureConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidMinFrameExtent { value } => {
                write!(f, "minimum frame extent must be finite and > 0 (got {value})")
            }
            Self::InvalidPixelsPerClick { value } => {
                write!(f, "pixels per click must be finite and > 0 (got {value})")
            }
            Self::InvalidDeltaUnit { field, value } => {
                write!(f, "{field} must be finite and > 0 (got {value})")
            }
            Self::EmptyResizeModifier => write!(f, "resize modifier must name at least one key"),
        }
    }
}

impl std::error::Error for EnclosureConfigError {}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

/// One inline style write for the host to perform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StyleUpdate {
    FrameWidth(f64),
    FrameHeight(f64),
    ContentLeft(f64),
    ContentTop(f64),
}

impl StyleUpdate {
    /// CSS property name.
    #[must_use]
    pub const fn property(self) -> &'static str {
        match self {
            Self::FrameWidth(_) => "width",
            Self::FrameHeight(_) => "height",
            Self::ContentLeft(_) => "left",
            Self::ContentTop(_) => "top",
        }
    }

    /// Pixel value to write.
    #[must_use]
    pub const fn value(self) -> f64 {
        match self {
            Self::FrameWidth(v)
            | Self::FrameHeight(v)
            | Self::ContentLeft(v)
            | Self::ContentTop(v) => v,
        }
    }

    /// True if the write targets the frame element (false: the content).
    #[must_use]
    pub const fn targets_frame(self) -> bool {
        matches!(self, Self::FrameWidth(_) | Self::FrameHeight(_))
    }
}

/// Which branch a wheel event took.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelMode {
    Pan,
    Resize,
}

/// Structured log record for one wheel dispatch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelLogEntry {
    pub sequence: u64,
    pub mode: WheelMode,
    pub input: WheelInput,
    pub content: Size,
    pub frame: Size,
    pub content_offset: Point,
}

/// Result of one wheel event.
#[derive(Debug, Clone, PartialEq)]
pub struct WheelDispatch {
    pub mode: WheelMode,
    /// Style writes, in application order. Empty when nothing changed axis-wise.
    pub updates: Vec<StyleUpdate>,
    /// Always [`EventDisposition::CONSUME`]: the page must never scroll.
    pub disposition: EventDisposition,
    pub log: WheelLogEntry,
}

// ---------------------------------------------------------------------------
// Enclosure state
// ---------------------------------------------------------------------------

/// Mutable frame/offset state for one enclosure.
#[derive(Debug, Clone)]
pub struct Enclosure {
    frame: Size,
    content_offset: Point,
    config: EnclosureConfig,
    next_sequence: u64,
}

impl Enclosure {
    /// Create an enclosure with the default configuration.
    ///
    /// Frame extents are raised to the minimum; offsets default to `0` and
    /// are lowered to at most `0`.
    #[must_use]
    pub fn new(
        frame_width: f64,
        frame_height: f64,
        content_x: Option<f64>,
        content_y: Option<f64>,
    ) -> Self {
        Self::build(
            EnclosureConfig::default(),
            frame_width,
            frame_height,
            content_x,
            content_y,
        )
    }

    /// Create an enclosure with a validated configuration.
    pub fn with_config(
        config: EnclosureConfig,
        frame_width: f64,
        frame_height: f64,
        content_x: Option<f64>,
        content_y: Option<f64>,
    ) -> Result<Self, EnclosureConfigError> {
        config.validate()?;
        Ok(Self::build(
            config,
            frame_width,
            frame_height,
            content_x,
            content_y,
        ))
    }

    fn build(
        config: EnclosureConfig,
        frame_width: f64,
        frame_height: f64,
        content_x: Option<f64>,
        content_y: Option<f64>,
    ) -> Self {
        let min = config.min_frame_extent;
        let enclosure = Self {
            frame: Size::new(
                normalize_extent(frame_width, min),
                normalize_extent(frame_height, min),
            ),
            content_offset: Point::new(
                normalize_offset(content_x),
                normalize_offset(content_y),
            ),
            config,
            next_sequence: 1,
        };
        debug!(
            target: "dragframe::enclosure",
            frame_width = enclosure.frame.width,
            frame_height = enclosure.frame.height,
            content_x = enclosure.content_offset.x,
            content_y = enclosure.content_offset.y,
            "enclosure created"
        );
        enclosure
    }

    #[must_use]
    pub const fn frame(&self) -> Size {
        self.frame
    }

    #[must_use]
    pub const fn content_offset(&self) -> Point {
        self.content_offset
    }

    #[must_use]
    pub const fn config(&self) -> EnclosureConfig {
        self.config
    }

    /// Style writes that put the frame and content into their initial state.
    #[must_use]
    pub fn initial_styles(&self) -> [StyleUpdate; 4] {
        [
            StyleUpdate::FrameWidth(self.frame.width),
            StyleUpdate::FrameHeight(self.frame.height),
            StyleUpdate::ContentLeft(self.content_offset.x),
            StyleUpdate::ContentTop(self.content_offset.y),
        ]
    }

    /// Normalize a raw event with this enclosure's wheel scale, then apply it.
    pub fn wheel_event(&mut self, shape: &WheelEventShape, content: Size) -> WheelDispatch {
        let input = self.config.wheel_scale().normalize(shape);
        self.wheel(input, content)
    }

    /// Apply one canonical wheel input.
    ///
    /// `content` is the content element's current rendered size
    /// (`getBoundingClientRect`).
    pub fn wheel(&mut self, input: WheelInput, content: Size) -> WheelDispatch {
        let content = sanitize_size(content);
        let mut updates = Vec::with_capacity(2);
        let mode = if input.mods.intersects(self.config.resize_modifier) {
            self.resize(input, content, &mut updates);
            WheelMode::Resize
        } else {
            self.pan(input, content, &mut updates);
            WheelMode::Pan
        };

        let sequence = self.next_sequence();
        trace!(
            target: "dragframe::enclosure",
            sequence,
            resize = matches!(mode, WheelMode::Resize),
            dx = input.dx,
            dy = input.dy,
            frame_width = self.frame.width,
            frame_height = self.frame.height,
            content_x = self.content_offset.x,
            content_y = self.content_offset.y,
            "wheel applied"
        );

        WheelDispatch {
            mode,
            updates,
            disposition: EventDisposition::CONSUME,
            log: WheelLogEntry {
                sequence,
                mode,
                input,
                content,
                frame: self.frame,
                content_offset: self.content_offset,
            },
        }
    }

    fn resize(&mut self, input: WheelInput, content: Size, updates: &mut Vec<StyleUpdate>) {
        let min = self.config.min_frame_extent;
        if input.dx != 0.0 {
            self.frame.width = resize_extent(self.frame.width, input.dx, content.width, min);
            updates.push(StyleUpdate::FrameWidth(self.frame.width));
        }
        if input.dy != 0.0 {
            self.frame.height = resize_extent(self.frame.height, input.dy, content.height, min);
            updates.push(StyleUpdate::FrameHeight(self.frame.height));
        }
    }

    fn pan(&mut self, input: WheelInput, content: Size, updates: &mut Vec<StyleUpdate>) {
        if input.dx != 0.0 {
            self.content_offset.x =
                pan_offset(self.content_offset.x, input.dx, self.frame.width, content.width);
            updates.push(StyleUpdate::ContentLeft(self.content_offset.x));
        }
        if input.dy != 0.0 {
            self.content_offset.y =
                pan_offset(self.content_offset.y, input.dy, self.frame.height, content.height);
            updates.push(StyleUpdate::ContentTop(self.content_offset.y));
        }
    }

    fn next_sequence(&mut self) -> u64 {
        let sequence = self.next_sequence;
        self.next_sequence = self.next_sequence.saturating_add(1);
        sequence
    }
}

fn normalize_extent(value: f64, min: f64) -> f64 {
    if value.is_finite() { value.max(min) } else { min }
}

fn normalize_offset(value: Option<f64>) -> f64 {
    match value {
        Some(v) if v.is_finite() => v.min(0.0),
        _ => 0.0,
    }
}

fn sanitize_size(size: Size) -> Size {
    let clean = |v: f64| if v.is_finite() && v > 0.0 { v } else { 0.0 };
    Size::new(clean(size.width), clean(size.height))
}

/// Shrink/grow a frame extent: never wider than the content, never below `min`.
fn resize_extent(current: f64, delta: f64, content: f64, min: f64) -> f64 {
    (current - delta).min(content).max(min)
}

/// Move an offset by `delta`, keeping the content's far edge reachable.
fn pan_offset(current: f64, delta: f64, frame: f64, content: f64) -> f64 {
    let min_offset = (frame - content).min(0.0);
    (current + delta).max(min_offset).min(0.0)
}

// ---------------------------------------------------------------------------
// Record/replay
// ---------------------------------------------------------------------------

/// A wheel trace line that could not be replayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplayError {
    /// 1-based line number in the trace.
    pub line: usize,
    pub error: WheelParseError,
}

impl core::fmt::Display for ReplayError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "wheel trace line {}: {}", self.line, self.error)
    }
}

impl std::error::Error for ReplayError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

/// Replay a JSONL wheel trace (one encoded [`WheelEventShape`] per line)
/// against `enclosure`, with `content` as the rendered content size.
///
/// Blank lines are skipped. Stops at the first malformed line; events before
/// it stay applied.
pub fn replay_wheel_trace(
    enclosure: &mut Enclosure,
    content: Size,
    jsonl: &str,
) -> Result<Vec<WheelDispatch>, ReplayError> {
    let mut dispatches = Vec::new();
    for (index, line) in jsonl.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let shape = parse_wheel_event(line).map_err(|error| {
            warn!(
                target: "dragframe::enclosure",
                line = index + 1,
                %error,
                "wheel trace replay stopped"
            );
            ReplayError {
                line: index + 1,
                error,
            }
        })?;
        dispatches.push(enclosure.wheel_event(&shape, content));
    }
    Ok(dispatches)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wheel::WheelDeltaMode;
    use pretty_assertions::assert_eq;

    fn pan(dx: f64, dy: f64) -> WheelInput {
        WheelInput::new(dx, dy, Modifiers::empty())
    }

    fn resize(dx: f64, dy: f64) -> WheelInput {
        WheelInput::new(dx, dy, Modifiers::ALT)
    }

    // -- Construction --

    #[test]
    fn construction_clamps_inputs() {
        let enclosure = Enclosure::new(10.0, 49.0, Some(20.0), Some(-5.0));
        assert_eq!(enclosure.frame(), Size::new(50.0, 50.0));
        assert_eq!(enclosure.content_offset(), Point::new(0.0, -5.0));
    }

    #[test]
    fn construction_defaults_missing_offsets() {
        let enclosure = Enclosure::new(100.0, 80.0, None, None);
        assert_eq!(enclosure.frame(), Size::new(100.0, 80.0));
        assert_eq!(enclosure.content_offset(), Point::ZERO);
    }

    #[test]
    fn construction_sanitizes_non_finite() {
        let enclosure = Enclosure::new(
            f64::NAN,
            f64::INFINITY,
            Some(f64::NAN),
            Some(f64::NEG_INFINITY),
        );
        assert_eq!(enclosure.frame(), Size::new(50.0, 50.0));
        assert_eq!(enclosure.content_offset(), Point::ZERO);
    }

    #[test]
    fn initial_styles_reflect_state() {
        let enclosure = Enclosure::new(120.0, 90.0, Some(-10.0), None);
        assert_eq!(
            enclosure.initial_styles(),
            [
                StyleUpdate::FrameWidth(120.0),
                StyleUpdate::FrameHeight(90.0),
                StyleUpdate::ContentLeft(-10.0),
                StyleUpdate::ContentTop(0.0),
            ]
        );
    }

    // -- Config --

    #[test]
    fn config_validation() {
        assert_eq!(EnclosureConfig::default().validate(), Ok(()));
        let bad = EnclosureConfig {
            min_frame_extent: 0.0,
            ..EnclosureConfig::default()
        };
        assert_eq!(
            bad.validate(),
            Err(EnclosureConfigError::InvalidMinFrameExtent { value: 0.0 })
        );
        let bad = EnclosureConfig {
            pixels_per_click: f64::INFINITY,
            ..EnclosureConfig::default()
        };
        assert!(matches!(
            Enclosure::with_config(bad, 100.0, 100.0, None, None),
            Err(EnclosureConfigError::InvalidPixelsPerClick { .. })
        ));
        let bad = EnclosureConfig {
            resize_modifier: Modifiers::empty(),
            ..EnclosureConfig::default()
        };
        assert_eq!(bad.validate(), Err(EnclosureConfigError::EmptyResizeModifier));
        let bad = EnclosureConfig {
            lines_per_click: 0.0,
            ..EnclosureConfig::default()
        };
        assert_eq!(
            bad.validate(),
            Err(EnclosureConfigError::InvalidDeltaUnit {
                field: "lines_per_click",
                value: 0.0,
            })
        );
        let bad = EnclosureConfig {
            pixel_delta_per_click: f64::NAN,
            ..EnclosureConfig::default()
        };
        assert!(matches!(
            bad.validate(),
            Err(EnclosureConfigError::InvalidDeltaUnit {
                field: "pixel_delta_per_click",
                ..
            })
        ));
    }

    #[test]
    fn config_error_messages() {
        let msg = EnclosureConfigError::InvalidMinFrameExtent { value: -1.0 }.to_string();
        assert!(msg.contains("-1"), "{msg}");
    }

    #[test]
    fn config_deserializes_with_defaults() {
        let config: EnclosureConfig = serde_json::from_str(r#"{"resize_modifier":4}"#).unwrap();
        assert_eq!(config.resize_modifier, Modifiers::CTRL);
        assert_eq!(config.min_frame_extent, MIN_FRAME_EXTENT);
        assert_eq!(config.pixels_per_click, DEFAULT_PIXELS_PER_CLICK);
        assert_eq!(config.pixel_delta_per_click, DEFAULT_PIXEL_DELTA_PER_CLICK);
        assert_eq!(config.lines_per_click, DEFAULT_LINES_PER_CLICK);
    }

    #[test]
    fn custom_resize_modifier_and_min_extent() {
        let config = EnclosureConfig {
            min_frame_extent: 20.0,
            resize_modifier: Modifiers::SHIFT,
            ..EnclosureConfig::default()
        };
        let mut enclosure = Enclosure::with_config(config, 10.0, 100.0, None, None).unwrap();
        assert_eq!(enclosure.frame().width, 20.0);
        // Alt no longer resizes.
        let content = Size::new(300.0, 300.0);
        let dispatch = enclosure.wheel(WheelInput::new(0.0, -30.0, Modifiers::ALT), content);
        assert_eq!(dispatch.mode, WheelMode::Pan);
        let dispatch = enclosure.wheel(WheelInput::new(0.0, 30.0, Modifiers::SHIFT), content);
        assert_eq!(dispatch.mode, WheelMode::Resize);
        assert_eq!(enclosure.frame().height, 70.0);
    }

    // -- Pan --

    #[test]
    fn pan_one_click_left() {
        let mut enclosure = Enclosure::new(100.0, 80.0, Some(0.0), Some(0.0));
        let dispatch = enclosure.wheel(pan(-30.0, 0.0), Size::new(300.0, 200.0));
        assert_eq!(dispatch.mode, WheelMode::Pan);
        assert_eq!(dispatch.updates, vec![StyleUpdate::ContentLeft(-30.0)]);
        assert_eq!(dispatch.disposition, EventDisposition::CONSUME);
        assert_eq!(enclosure.content_offset().x, -30.0);
    }

    #[test]
    fn pan_clamps_to_min_offset() {
        let mut enclosure = Enclosure::new(100.0, 80.0, None, None);
        // Content only 20px wider than frame: min offset is -20.
        enclosure.wheel(pan(-30.0, 0.0), Size::new(120.0, 80.0));
        assert_eq!(enclosure.content_offset().x, -20.0);
        enclosure.wheel(pan(-30.0, 0.0), Size::new(120.0, 80.0));
        assert_eq!(enclosure.content_offset().x, -20.0);
    }

    #[test]
    fn pan_clamps_to_zero() {
        let mut enclosure = Enclosure::new(100.0, 80.0, Some(-10.0), Some(-10.0));
        let dispatch = enclosure.wheel(pan(30.0, 30.0), Size::new(500.0, 500.0));
        assert_eq!(
            dispatch.updates,
            vec![StyleUpdate::ContentLeft(0.0), StyleUpdate::ContentTop(0.0)]
        );
    }

    #[test]
    fn pan_content_smaller_than_frame_stays_at_zero() {
        let mut enclosure = Enclosure::new(200.0, 200.0, None, None);
        enclosure.wheel(pan(-30.0, -30.0), Size::new(50.0, 50.0));
        assert_eq!(enclosure.content_offset(), Point::ZERO);
    }

    #[test]
    fn pan_vertical_only_writes_top() {
        let mut enclosure = Enclosure::new(100.0, 80.0, None, None);
        let dispatch = enclosure.wheel(pan(0.0, -60.0), Size::new(100.0, 400.0));
        assert_eq!(dispatch.updates, vec![StyleUpdate::ContentTop(-60.0)]);
    }

    #[test]
    fn zero_input_still_consumes_event() {
        let mut enclosure = Enclosure::new(100.0, 80.0, None, None);
        let dispatch = enclosure.wheel(pan(0.0, 0.0), Size::new(100.0, 400.0));
        assert!(dispatch.updates.is_empty());
        assert_eq!(dispatch.disposition, EventDisposition::CONSUME);
    }

    #[test]
    fn zero_size_content_degrades_to_no_movement() {
        let mut enclosure = Enclosure::new(100.0, 80.0, None, None);
        enclosure.wheel(pan(-30.0, -30.0), Size::default());
        assert_eq!(enclosure.content_offset(), Point::ZERO);
        enclosure.wheel(resize(30.0, 30.0), Size::default());
        assert_eq!(enclosure.frame(), Size::new(50.0, 50.0));
    }

    // -- Resize --

    #[test]
    fn resize_shrinks_and_grows_frame() {
        let mut enclosure = Enclosure::new(100.0, 80.0, None, None);
        let content = Size::new(300.0, 300.0);
        let dispatch = enclosure.wheel(resize(30.0, 0.0), content);
        assert_eq!(dispatch.mode, WheelMode::Resize);
        assert_eq!(dispatch.updates, vec![StyleUpdate::FrameWidth(70.0)]);
        enclosure.wheel(resize(-60.0, 0.0), content);
        assert_eq!(enclosure.frame().width, 130.0);
    }

    #[test]
    fn resize_never_exceeds_content() {
        let mut enclosure = Enclosure::new(100.0, 80.0, None, None);
        enclosure.wheel(resize(-300.0, -300.0), Size::new(150.0, 90.0));
        assert_eq!(enclosure.frame(), Size::new(150.0, 90.0));
    }

    #[test]
    fn resize_never_below_minimum() {
        let mut enclosure = Enclosure::new(100.0, 80.0, None, None);
        enclosure.wheel(resize(300.0, 300.0), Size::new(150.0, 90.0));
        assert_eq!(enclosure.frame(), Size::new(50.0, 50.0));
    }

    #[test]
    fn resize_height_subtracts_delta_once() {
        let mut enclosure = Enclosure::new(100.0, 200.0, None, None);
        let dispatch = enclosure.wheel(resize(0.0, 30.0), Size::new(400.0, 400.0));
        assert_eq!(dispatch.updates, vec![StyleUpdate::FrameHeight(170.0)]);
    }

    #[test]
    fn resize_does_not_touch_offsets() {
        let mut enclosure = Enclosure::new(100.0, 80.0, Some(-40.0), Some(-40.0));
        let dispatch = enclosure.wheel(resize(-30.0, -30.0), Size::new(400.0, 400.0));
        assert!(dispatch.updates.iter().all(|u| u.targets_frame()));
        assert_eq!(enclosure.content_offset(), Point::new(-40.0, -40.0));
    }

    #[test]
    fn wheel_event_normalizes_with_config_scale() {
        let config = EnclosureConfig {
            pixels_per_click: 10.0,
            ..EnclosureConfig::default()
        };
        let mut enclosure = Enclosure::with_config(config, 100.0, 80.0, None, None).unwrap();
        let shape = WheelEventShape::Wheel {
            delta_x: 2.0,
            delta_y: 0.0,
            delta_mode: WheelDeltaMode::Clicks,
            mods: Modifiers::empty(),
        };
        enclosure.wheel_event(&shape, Size::new(400.0, 400.0));
        assert_eq!(enclosure.content_offset().x, -20.0);
    }

    #[test]
    fn pixel_mode_notch_pans_one_click() {
        let mut enclosure = Enclosure::new(100.0, 80.0, None, None);
        let notch = WheelEventShape::Wheel {
            delta_x: 0.0,
            delta_y: 100.0,
            delta_mode: WheelDeltaMode::Pixels,
            mods: Modifiers::empty(),
        };
        enclosure.wheel_event(&notch, Size::new(100.0, 5000.0));
        assert_eq!(enclosure.content_offset().y, -30.0);
    }

    #[test]
    fn line_mode_notch_resizes_one_click() {
        let mut enclosure = Enclosure::new(100.0, 80.0, None, None);
        let notch = WheelEventShape::Wheel {
            delta_x: 0.0,
            delta_y: -3.0,
            delta_mode: WheelDeltaMode::Lines,
            mods: Modifiers::ALT,
        };
        enclosure.wheel_event(&notch, Size::new(300.0, 300.0));
        assert_eq!(enclosure.frame(), Size::new(100.0, 50.0));
    }

    #[test]
    fn configured_pixel_delta_per_click() {
        let config = EnclosureConfig {
            pixel_delta_per_click: 50.0,
            ..EnclosureConfig::default()
        };
        let mut enclosure = Enclosure::with_config(config, 100.0, 80.0, None, None).unwrap();
        let notch = WheelEventShape::Wheel {
            delta_x: 50.0,
            delta_y: 0.0,
            delta_mode: WheelDeltaMode::Pixels,
            mods: Modifiers::empty(),
        };
        enclosure.wheel_event(&notch, Size::new(400.0, 400.0));
        assert_eq!(enclosure.content_offset().x, -30.0);
    }

    #[test]
    fn log_entry_records_state_after_event() {
        let mut enclosure = Enclosure::new(100.0, 80.0, None, None);
        let first = enclosure.wheel(pan(-30.0, 0.0), Size::new(300.0, 300.0));
        let second = enclosure.wheel(resize(30.0, 0.0), Size::new(300.0, 300.0));
        assert_eq!(first.log.sequence, 1);
        assert_eq!(second.log.sequence, 2);
        assert_eq!(first.log.content_offset, Point::new(-30.0, 0.0));
        assert_eq!(second.log.frame, Size::new(70.0, 80.0));
    }

    #[test]
    fn style_update_accessors() {
        assert_eq!(StyleUpdate::ContentTop(-3.0).property(), "top");
        assert_eq!(StyleUpdate::FrameWidth(51.0).value(), 51.0);
        assert!(!StyleUpdate::ContentLeft(0.0).targets_frame());
    }

    // -- Replay --

    #[test]
    fn replay_applies_each_line() {
        let mut enclosure = Enclosure::new(100.0, 80.0, None, None);
        let trace = concat!(
            r#"{"kind":"wheel","delta_x":1,"delta_y":0}"#,
            "\n\n",
            r#"{"kind":"mouse_wheel","wheel_delta":-120}"#,
            "\n",
            r#"{"kind":"wheel","delta_x":1,"delta_y":0,"mods":2}"#,
            "\n",
        );
        let dispatches =
            replay_wheel_trace(&mut enclosure, Size::new(300.0, 300.0), trace).unwrap();
        assert_eq!(dispatches.len(), 3);
        assert_eq!(enclosure.content_offset(), Point::new(-30.0, -30.0));
        assert_eq!(enclosure.frame(), Size::new(130.0, 80.0));
    }

    #[test]
    fn replay_reports_line_of_first_error() {
        let mut enclosure = Enclosure::new(100.0, 80.0, None, None);
        let trace = "{\"kind\":\"wheel\",\"delta_x\":1,\"delta_y\":0}\n{\"kind\":\"pinch\"}\n";
        let err = replay_wheel_trace(&mut enclosure, Size::new(300.0, 300.0), trace).unwrap_err();
        assert_eq!(err.line, 2);
        assert_eq!(err.error, WheelParseError::UnknownKind("pinch".to_owned()));
        assert_eq!(enclosure.content_offset().x, -30.0);
        assert!(err.to_string().starts_with("wheel trace line 2"));
    }
}
