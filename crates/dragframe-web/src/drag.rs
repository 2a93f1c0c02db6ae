//! `startDrag`: move an absolutely positioned element with the pointer.

use std::cell::RefCell;
use std::rc::Rc;

use dragframe_core::drag::ListenerCommand;
use dragframe_core::DragController;
use tracing::{debug, warn};
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement, MouseEvent, Window};

use crate::dom::{
    apply_disposition, client_point, document, install_panic_hook, scroll_offset, set_styles,
    window,
};
use crate::style::{DRAG_MOVE_EVENT, DRAG_RELEASE_EVENT, position_declarations};

type PointerHandler = Closure<dyn FnMut(MouseEvent)>;

/// Capturing document listeners for one drag.
struct DragListeners {
    document: Document,
    on_move: PointerHandler,
    on_release: PointerHandler,
}

impl DragListeners {
    fn attach(&self) -> Result<(), JsValue> {
        self.document.add_event_listener_with_callback_and_bool(
            DRAG_MOVE_EVENT,
            self.on_move.as_ref().unchecked_ref(),
            true,
        )?;
        if let Err(err) = self.document.add_event_listener_with_callback_and_bool(
            DRAG_RELEASE_EVENT,
            self.on_release.as_ref().unchecked_ref(),
            true,
        ) {
            self.remove(DRAG_MOVE_EVENT, &self.on_move);
            return Err(err);
        }
        Ok(())
    }

    /// Release listener first, then move.
    fn detach(&self) {
        self.remove(DRAG_RELEASE_EVENT, &self.on_release);
        self.remove(DRAG_MOVE_EVENT, &self.on_move);
    }

    fn remove(&self, event_type: &str, handler: &PointerHandler) {
        if let Err(err) = self.document.remove_event_listener_with_callback_and_bool(
            event_type,
            handler.as_ref().unchecked_ref(),
            true,
        ) {
            warn!(target: "dragframe::drag", event_type, ?err, "failed to remove drag listener");
        }
    }
}

/// Start dragging `element` from the pointer-down `event`.
///
/// `element` must be absolutely positioned; its `style.left` / `style.top`
/// are rewritten on every pointer move until the pointer is released. The
/// initiating event is stopped and its default action prevented.
#[wasm_bindgen(js_name = startDrag)]
pub fn start_drag(element: &HtmlElement, event: &MouseEvent) -> Result<(), JsValue> {
    install_panic_hook();
    let window = window()?;
    let document = document(&window)?;

    let controller = Rc::new(RefCell::new(DragController::new()));
    let origin = dragframe_core::Point::new(
        f64::from(element.offset_left()),
        f64::from(element.offset_top()),
    );
    let scroll = scroll_offset(&window)?;
    let dispatch = controller
        .borrow_mut()
        .pointer_down(origin, client_point(event), scroll);

    if dispatch.listener_command == Some(ListenerCommand::Attach) {
        let slot: Rc<RefCell<Option<DragListeners>>> = Rc::new(RefCell::new(None));
        let listeners = DragListeners {
            document,
            on_move: move_handler(Rc::clone(&controller), element.clone(), window),
            on_release: release_handler(controller, Rc::clone(&slot)),
        };
        listeners.attach()?;
        *slot.borrow_mut() = Some(listeners);
    }

    apply_disposition(event, dispatch.disposition);
    Ok(())
}

fn move_handler(
    controller: Rc<RefCell<DragController>>,
    element: HtmlElement,
    window: Window,
) -> PointerHandler {
    Closure::new(move |event: MouseEvent| {
        let scroll = match scroll_offset(&window) {
            Ok(scroll) => scroll,
            Err(err) => {
                warn!(target: "dragframe::drag", ?err, "page scroll offset unavailable");
                return;
            }
        };
        let dispatch = controller
            .borrow_mut()
            .pointer_move(client_point(&event), scroll);
        if let Some(position) = dispatch.position {
            let declarations = position_declarations(position);
            let result = set_styles(
                &element,
                declarations.iter().map(|(property, value)| (*property, value.as_str())),
            );
            if let Err(err) = result {
                warn!(target: "dragframe::drag", ?err, "failed to move element");
            }
        }
        apply_disposition(&event, dispatch.disposition);
    })
}

fn release_handler(
    controller: Rc<RefCell<DragController>>,
    slot: Rc<RefCell<Option<DragListeners>>>,
) -> PointerHandler {
    Closure::new(move |event: MouseEvent| {
        let dispatch = controller.borrow_mut().pointer_up();
        if dispatch.listener_command == Some(ListenerCommand::Detach) {
            let listeners = slot.borrow_mut().take();
            if let Some(listeners) = listeners {
                listeners.detach();
                debug!(target: "dragframe::drag", "drag listeners detached");
                // wasm-bindgen defers freeing this running closure until it returns.
                drop(listeners);
            }
        }
        apply_disposition(&event, dispatch.disposition);
    })
}
