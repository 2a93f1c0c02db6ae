//! `enclose`: clip an element in a wheel-driven frame.

use std::cell::RefCell;
use std::rc::Rc;

use dragframe_core::enclosure::StyleUpdate;
use dragframe_core::wheel::{WheelDeltaMode, WheelEventFilter, WheelEventShape};
use dragframe_core::{Enclosure, EnclosureConfig, Modifiers, Size};
use tracing::{debug, warn};
use wasm_bindgen::prelude::*;
use web_sys::{AddEventListenerOptions, HtmlElement, WheelEvent};

use crate::dom::{apply_disposition, document, install_panic_hook, set_styles, window};
use crate::style::{CONTENT_POSITION, FRAME_CLASS_NAME, FRAME_STATIC_STYLES, declaration};

type WheelHandler = Closure<dyn FnMut(WheelEvent)>;

/// A live enclosure: the frame element, its state, and its wheel listener.
///
/// Dropping the binding (or calling [`detach`](Self::detach)) removes the
/// listener; the frame stays in the document.
pub struct EnclosureBinding {
    frame: HtmlElement,
    state: Rc<RefCell<Enclosure>>,
    on_wheel: Option<WheelHandler>,
}

impl EnclosureBinding {
    /// Wrap `content` in a new frame and start listening for wheel events.
    pub fn attach(
        content: &HtmlElement,
        config: EnclosureConfig,
        frame_width: f64,
        frame_height: f64,
        content_x: Option<f64>,
        content_y: Option<f64>,
    ) -> Result<Self, JsValue> {
        let enclosure =
            Enclosure::with_config(config, frame_width, frame_height, content_x, content_y)
                .map_err(|err| JsValue::from_str(&err.to_string()))?;
        let parent = content
            .parent_node()
            .ok_or_else(|| JsValue::from_str("dragframe: content has no parent node"))?;

        let document = document(&window()?)?;
        let frame = document.create_element("div")?.dyn_into::<HtmlElement>()?;
        frame.set_class_name(FRAME_CLASS_NAME);
        set_styles(&frame, FRAME_STATIC_STYLES)?;

        parent.insert_before(&frame, Some(content.as_ref()))?;
        frame.append_child(content)?;
        set_styles(content, [CONTENT_POSITION])?;
        for update in enclosure.initial_styles() {
            apply_update(&frame, content, update)?;
        }

        let state = Rc::new(RefCell::new(enclosure));
        let on_wheel = wheel_handler(Rc::clone(&state), frame.clone(), content.clone());
        let options = AddEventListenerOptions::new();
        options.set_passive(false);
        frame.add_event_listener_with_callback_and_add_event_listener_options(
            WheelEventFilter::default().canonical().dom_event_name(),
            on_wheel.as_ref().unchecked_ref(),
            &options,
        )?;

        debug!(
            target: "dragframe::enclosure",
            frame_width = state.borrow().frame().width,
            frame_height = state.borrow().frame().height,
            "enclosure attached"
        );
        Ok(Self {
            frame,
            state,
            on_wheel: Some(on_wheel),
        })
    }

    #[must_use]
    pub fn frame(&self) -> &HtmlElement {
        &self.frame
    }

    /// Snapshot of the current frame size and content offset.
    #[must_use]
    pub fn state(&self) -> Enclosure {
        self.state.borrow().clone()
    }

    /// Stop reacting to wheel events. Idempotent.
    pub fn detach(&mut self) {
        let Some(on_wheel) = self.on_wheel.take() else {
            return;
        };
        let event_type = WheelEventFilter::default().canonical().dom_event_name();
        if let Err(err) = self
            .frame
            .remove_event_listener_with_callback(event_type, on_wheel.as_ref().unchecked_ref())
        {
            warn!(target: "dragframe::enclosure", ?err, "failed to remove wheel listener");
        }
    }

    /// Keep the listener for the lifetime of the page and hand back the frame.
    #[must_use]
    pub fn persist(mut self) -> HtmlElement {
        if let Some(on_wheel) = self.on_wheel.take() {
            on_wheel.forget();
        }
        self.frame.clone()
    }
}

impl Drop for EnclosureBinding {
    fn drop(&mut self) {
        self.detach();
    }
}

/// Enclose `content` in a `frameWidth` x `frameHeight` frame (minimum 50x50).
///
/// `contentX` / `contentY` are the initial content offsets (`<= 0`, default
/// `0`). The wheel pans the content; with Alt held it resizes the frame.
/// Returns the new frame element, which now wraps `content`.
#[wasm_bindgen]
pub fn enclose(
    content: &HtmlElement,
    frame_width: f64,
    frame_height: f64,
    content_x: Option<f64>,
    content_y: Option<f64>,
) -> Result<HtmlElement, JsValue> {
    install_panic_hook();
    EnclosureBinding::attach(
        content,
        EnclosureConfig::default(),
        frame_width,
        frame_height,
        content_x,
        content_y,
    )
    .map(EnclosureBinding::persist)
}

fn wheel_handler(
    state: Rc<RefCell<Enclosure>>,
    frame: HtmlElement,
    content: HtmlElement,
) -> WheelHandler {
    Closure::new(move |event: WheelEvent| {
        let rect = content.get_bounding_client_rect();
        let shape = WheelEventShape::Wheel {
            delta_x: event.delta_x(),
            delta_y: event.delta_y(),
            delta_mode: WheelDeltaMode::from_dom(event.delta_mode()),
            mods: Modifiers::from_dom_flags(
                event.shift_key(),
                event.alt_key(),
                event.ctrl_key(),
                event.meta_key(),
            ),
        };
        let dispatch = state
            .borrow_mut()
            .wheel_event(&shape, Size::new(rect.width(), rect.height()));
        for update in dispatch.updates.iter().copied() {
            if let Err(err) = apply_update(&frame, &content, update) {
                warn!(target: "dragframe::enclosure", ?err, ?update, "failed to apply style");
            }
        }
        apply_disposition(&event, dispatch.disposition);
    })
}

fn apply_update(
    frame: &HtmlElement,
    content: &HtmlElement,
    update: StyleUpdate,
) -> Result<(), JsValue> {
    let target = if update.targets_frame() { frame } else { content };
    let (property, value) = declaration(update);
    set_styles(target, [(property, value.as_str())])
}
