#![forbid(unsafe_code)]

//! Deterministic drag controller for absolutely positioned elements.
//!
//! The controller captures the offset between the pointer and the element's
//! top-left corner on pointer-down and holds it constant until release, so
//! the element follows the pointer without jumping. It enforces:
//! - explicit listener attach/detach commands for the host,
//! - document coordinates throughout (client position plus page scroll), and
//! - no movement once the session has ended.
//!
//! Positions are not clamped: an element may be dragged off-screen.

use crate::event::EventDisposition;
use crate::geometry::{Point, ScrollOffset};
use crate::logging::{debug, trace};

/// Listener command emitted for the host's document-level capturing listeners.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListenerCommand {
    /// Register the move and release listeners.
    Attach,
    /// Remove the release listener, then the move listener.
    Detach,
}

/// Lifecycle phase recorded for one dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragPhase {
    PointerDown,
    PointerMove,
    PointerUp,
}

impl DragPhase {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PointerDown => "pointer_down",
            Self::PointerMove => "pointer_move",
            Self::PointerUp => "pointer_up",
        }
    }
}

/// Deterministic reason why an incoming lifecycle signal was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragIgnoredReason {
    NoActiveSession,
}

/// Outcome category for one dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragLogOutcome {
    SessionStarted,
    /// A pointer-down arrived while a session was active; the new one wins.
    SessionReplaced,
    Moved,
    SessionEnded,
    Ignored(DragIgnoredReason),
}

/// Structured log record for one dispatch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragLogEntry {
    pub phase: DragPhase,
    pub sequence: Option<u64>,
    pub position: Option<Point>,
    pub outcome: DragLogOutcome,
}

/// Result of one drag lifecycle dispatch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragDispatch {
    /// New element top-left (`style.left` / `style.top`), if it moved.
    pub position: Option<Point>,
    pub listener_command: Option<ListenerCommand>,
    pub disposition: EventDisposition,
    pub log: DragLogEntry,
}

impl DragDispatch {
    fn ignored(phase: DragPhase, reason: DragIgnoredReason) -> Self {
        Self {
            position: None,
            listener_command: None,
            disposition: EventDisposition::PASS,
            log: DragLogEntry {
                phase,
                sequence: None,
                position: None,
                outcome: DragLogOutcome::Ignored(reason),
            },
        }
    }
}

/// One active drag: the pointer-to-element offset captured at pointer-down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    delta: Point,
}

impl DragSession {
    /// Capture the offset between the pointer (document space) and the
    /// element's original top-left corner.
    #[must_use]
    pub fn begin(element_origin: Point, pointer: Point, scroll: ScrollOffset) -> Self {
        let start = scroll.to_document(pointer);
        Self {
            delta: start - element_origin,
        }
    }

    /// Offset held constant for the whole drag.
    #[must_use]
    pub const fn delta(&self) -> Point {
        self.delta
    }

    /// Element top-left for a pointer at `pointer` (client space).
    #[must_use]
    pub fn element_position(&self, pointer: Point, scroll: ScrollOffset) -> Point {
        scroll.to_document(pointer) - self.delta
    }
}

/// Host-driven drag controller.
///
/// The host calls [`pointer_down`](Self::pointer_down) from its own
/// pointer-down handler, then forwards document-level move/release events
/// until the controller asks it to detach.
#[derive(Debug, Clone, Default)]
pub struct DragController {
    active: Option<DragSession>,
    next_sequence: u64,
}

impl DragController {
    #[must_use]
    pub fn new() -> Self {
        Self {
            active: None,
            next_sequence: 1,
        }
    }

    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Active session, if any.
    #[must_use]
    pub const fn session(&self) -> Option<DragSession> {
        self.active
    }

    /// Begin a drag.
    ///
    /// `element_origin` is the element's `offsetLeft` / `offsetTop`; `pointer`
    /// is the event's client position.
    pub fn pointer_down(
        &mut self,
        element_origin: Point,
        pointer: Point,
        scroll: ScrollOffset,
    ) -> DragDispatch {
        let session = DragSession::begin(element_origin, pointer, scroll);
        let outcome = if self.active.replace(session).is_some() {
            DragLogOutcome::SessionReplaced
        } else {
            DragLogOutcome::SessionStarted
        };
        let sequence = self.next_sequence();
        debug!(
            target: "dragframe::drag",
            sequence,
            delta_x = session.delta.x,
            delta_y = session.delta.y,
            replaced = matches!(outcome, DragLogOutcome::SessionReplaced),
            "drag session started"
        );
        DragDispatch {
            position: None,
            listener_command: Some(ListenerCommand::Attach),
            disposition: EventDisposition::CONSUME,
            log: DragLogEntry {
                phase: DragPhase::PointerDown,
                sequence: Some(sequence),
                position: Some(element_origin),
                outcome,
            },
        }
    }

    /// Reposition the element for a pointer-move.
    pub fn pointer_move(&mut self, pointer: Point, scroll: ScrollOffset) -> DragDispatch {
        let Some(session) = self.active else {
            return DragDispatch::ignored(
                DragPhase::PointerMove,
                DragIgnoredReason::NoActiveSession,
            );
        };
        let position = session.element_position(pointer, scroll);
        let sequence = self.next_sequence();
        trace!(
            target: "dragframe::drag",
            sequence,
            left = position.x,
            top = position.y,
            "drag move"
        );
        DragDispatch {
            position: Some(position),
            listener_command: None,
            disposition: EventDisposition::STOP,
            log: DragLogEntry {
                phase: DragPhase::PointerMove,
                sequence: Some(sequence),
                position: Some(position),
                outcome: DragLogOutcome::Moved,
            },
        }
    }

    /// End the drag on the first release.
    pub fn pointer_up(&mut self) -> DragDispatch {
        if self.active.take().is_none() {
            return DragDispatch::ignored(DragPhase::PointerUp, DragIgnoredReason::NoActiveSession);
        }
        let sequence = self.next_sequence();
        debug!(target: "dragframe::drag", sequence, "drag session ended");
        DragDispatch {
            position: None,
            listener_command: Some(ListenerCommand::Detach),
            disposition: EventDisposition::STOP,
            log: DragLogEntry {
                phase: DragPhase::PointerUp,
                sequence: Some(sequence),
                position: None,
                outcome: DragLogOutcome::SessionEnded,
            },
        }
    }

    fn next_sequence(&mut self) -> u64 {
        let sequence = self.next_sequence.max(1);
        self.next_sequence = sequence.saturating_add(1);
        sequence
    }
}

#[cfg(test)]
mod tests {
    use super::{
        DragController, DragIgnoredReason, DragLogOutcome, DragPhase, DragSession, ListenerCommand,
    };
    use crate::event::EventDisposition;
    use crate::geometry::{Point, ScrollOffset};
    use pretty_assertions::assert_eq;

    fn pos(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    const NO_SCROLL: ScrollOffset = ScrollOffset::new(0.0, 0.0);

    #[test]
    fn pointer_down_attaches_listeners_and_consumes_event() {
        let mut drag = DragController::new();
        let dispatch = drag.pointer_down(pos(10.0, 10.0), pos(50.0, 50.0), NO_SCROLL);
        assert_eq!(dispatch.listener_command, Some(ListenerCommand::Attach));
        assert_eq!(dispatch.disposition, EventDisposition::CONSUME);
        assert_eq!(dispatch.position, None);
        assert_eq!(dispatch.log.outcome, DragLogOutcome::SessionStarted);
        assert_eq!(dispatch.log.sequence, Some(1));
        assert!(drag.is_active());
        assert_eq!(drag.session().map(|s| s.delta()), Some(pos(40.0, 40.0)));
    }

    #[test]
    fn move_keeps_initial_offset() {
        let mut drag = DragController::new();
        drag.pointer_down(pos(10.0, 10.0), pos(50.0, 50.0), NO_SCROLL);
        let dispatch = drag.pointer_move(pos(60.0, 70.0), NO_SCROLL);
        assert_eq!(dispatch.position, Some(pos(20.0, 30.0)));
        assert_eq!(dispatch.disposition, EventDisposition::STOP);
        assert_eq!(dispatch.listener_command, None);
        assert_eq!(dispatch.log.outcome, DragLogOutcome::Moved);
    }

    #[test]
    fn scroll_is_applied_in_document_space() {
        let mut drag = DragController::new();
        // Element at document (110, 210); page scrolled by (100, 200).
        drag.pointer_down(
            pos(110.0, 210.0),
            pos(50.0, 50.0),
            ScrollOffset::new(100.0, 200.0),
        );
        // Page scrolls further while dragging; pointer stays put on screen.
        let dispatch = drag.pointer_move(pos(50.0, 50.0), ScrollOffset::new(100.0, 260.0));
        assert_eq!(dispatch.position, Some(pos(110.0, 270.0)));
    }

    #[test]
    fn no_clamping_off_screen() {
        let mut drag = DragController::new();
        drag.pointer_down(pos(5.0, 5.0), pos(10.0, 10.0), NO_SCROLL);
        let dispatch = drag.pointer_move(pos(-500.0, -20.0), NO_SCROLL);
        assert_eq!(dispatch.position, Some(pos(-505.0, -25.0)));
    }

    #[test]
    fn pointer_up_detaches_and_ends_session() {
        let mut drag = DragController::new();
        drag.pointer_down(pos(0.0, 0.0), pos(1.0, 1.0), NO_SCROLL);
        let dispatch = drag.pointer_up();
        assert_eq!(dispatch.listener_command, Some(ListenerCommand::Detach));
        assert_eq!(dispatch.disposition, EventDisposition::STOP);
        assert_eq!(dispatch.log.outcome, DragLogOutcome::SessionEnded);
        assert!(!drag.is_active());
    }

    #[test]
    fn move_after_release_is_ignored() {
        let mut drag = DragController::new();
        drag.pointer_down(pos(10.0, 10.0), pos(50.0, 50.0), NO_SCROLL);
        drag.pointer_up();
        let dispatch = drag.pointer_move(pos(90.0, 90.0), NO_SCROLL);
        assert_eq!(dispatch.position, None);
        assert!(dispatch.disposition.is_pass());
        assert_eq!(
            dispatch.log.outcome,
            DragLogOutcome::Ignored(DragIgnoredReason::NoActiveSession)
        );
        assert_eq!(dispatch.log.sequence, None);
    }

    #[test]
    fn second_release_is_ignored() {
        let mut drag = DragController::new();
        drag.pointer_down(pos(0.0, 0.0), pos(0.0, 0.0), NO_SCROLL);
        drag.pointer_up();
        let dispatch = drag.pointer_up();
        assert_eq!(dispatch.listener_command, None);
        assert_eq!(dispatch.log.phase, DragPhase::PointerUp);
        assert_eq!(
            dispatch.log.outcome,
            DragLogOutcome::Ignored(DragIgnoredReason::NoActiveSession)
        );
    }

    #[test]
    fn pointer_down_while_active_replaces_session() {
        let mut drag = DragController::new();
        drag.pointer_down(pos(0.0, 0.0), pos(5.0, 5.0), NO_SCROLL);
        let dispatch = drag.pointer_down(pos(100.0, 100.0), pos(101.0, 102.0), NO_SCROLL);
        assert_eq!(dispatch.log.outcome, DragLogOutcome::SessionReplaced);
        let moved = drag.pointer_move(pos(11.0, 12.0), NO_SCROLL);
        assert_eq!(moved.position, Some(pos(10.0, 10.0)));
    }

    #[test]
    fn sequences_increase_for_accepted_events_only() {
        let mut drag = DragController::new();
        assert_eq!(drag.pointer_move(pos(0.0, 0.0), NO_SCROLL).log.sequence, None);
        let down = drag.pointer_down(pos(0.0, 0.0), pos(0.0, 0.0), NO_SCROLL);
        let mv = drag.pointer_move(pos(1.0, 1.0), NO_SCROLL);
        let up = drag.pointer_up();
        assert_eq!(
            [down.log.sequence, mv.log.sequence, up.log.sequence],
            [Some(1), Some(2), Some(3)]
        );
    }

    #[test]
    fn default_controller_starts_sequence_at_one() {
        let mut drag = DragController::default();
        let down = drag.pointer_down(pos(0.0, 0.0), pos(0.0, 0.0), NO_SCROLL);
        assert_eq!(down.log.sequence, Some(1));
    }

    #[test]
    fn session_element_position_matches_formula() {
        let session =
            DragSession::begin(pos(3.0, 4.0), pos(10.0, 20.0), ScrollOffset::new(1.0, 2.0));
        assert_eq!(session.delta(), pos(8.0, 18.0));
        assert_eq!(
            session.element_position(pos(30.0, 40.0), ScrollOffset::new(1.0, 2.0)),
            pos(23.0, 24.0)
        );
    }
}
