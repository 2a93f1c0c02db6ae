//! Small DOM helpers shared by the drag and enclosure bindings.

use std::fmt::Display;
use std::sync::Once;

use dragframe_core::{EventDisposition, Point, ScrollOffset};
use js_sys::Reflect;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Event, HtmlElement, MouseEvent, Window};

/// Route Rust panics to `console.error`, prefixed so they are attributable.
pub(crate) fn install_panic_hook() {
    static HOOK: Once = Once::new();
    HOOK.call_once(|| {
        std::panic::set_hook(Box::new(|info| {
            let report = JsValue::from_str(&panic_report(info));
            let Ok(console) = Reflect::get(&js_sys::global(), &"console".into()) else {
                return;
            };
            let error_fn = Reflect::get(&console, &"error".into())
                .ok()
                .and_then(|f| f.dyn_into::<js_sys::Function>().ok());
            if let Some(error_fn) = error_fn {
                let _ = error_fn.call1(&console, &report);
            }
        }));
    });
}

fn panic_report(info: &dyn Display) -> String {
    format!("dragframe panicked: {info}")
}

pub(crate) fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("dragframe: no global window"))
}

pub(crate) fn document(window: &Window) -> Result<Document, JsValue> {
    window
        .document()
        .ok_or_else(|| JsValue::from_str("dragframe: window has no document"))
}

/// Current page scroll (`pageXOffset` / `pageYOffset`).
pub(crate) fn scroll_offset(window: &Window) -> Result<ScrollOffset, JsValue> {
    Ok(ScrollOffset::new(
        window.page_x_offset()?,
        window.page_y_offset()?,
    ))
}

pub(crate) fn client_point(event: &MouseEvent) -> Point {
    Point::new(f64::from(event.client_x()), f64::from(event.client_y()))
}

pub(crate) fn apply_disposition(event: &Event, disposition: EventDisposition) {
    if disposition.stop_propagation {
        event.stop_propagation();
    }
    if disposition.prevent_default {
        event.prevent_default();
    }
}

pub(crate) fn set_styles<'a>(
    element: &HtmlElement,
    declarations: impl IntoIterator<Item = (&'a str, &'a str)>,
) -> Result<(), JsValue> {
    let style = element.style();
    for (property, value) in declarations {
        style.set_property(property, value)?;
    }
    Ok(())
}
