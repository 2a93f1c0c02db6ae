#![forbid(unsafe_code)]

//! Host-facing event types shared by the drag and enclosure machines.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Modifier keys held during an input event.
    ///
    /// These flags are encoded as a compact `u8` bitset in JSON (`mods`).
    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        const SHIFT = 0b0001;
        const ALT   = 0b0010;
        const CTRL  = 0b0100;
        const SUPER = 0b1000;
    }
}

impl Modifiers {
    /// Build a set from the DOM `shiftKey` / `altKey` / `ctrlKey` / `metaKey` flags.
    #[must_use]
    pub fn from_dom_flags(shift: bool, alt: bool, ctrl: bool, meta: bool) -> Self {
        let mut mods = Self::empty();
        mods.set(Self::SHIFT, shift);
        mods.set(Self::ALT, alt);
        mods.set(Self::CTRL, ctrl);
        mods.set(Self::SUPER, meta);
        mods
    }
}

impl Serialize for Modifiers {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.bits())
    }
}

impl<'de> Deserialize<'de> for Modifiers {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        u8::deserialize(deserializer).map(Self::from_bits_truncate)
    }
}

/// What the host must do with the DOM event that produced a dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EventDisposition {
    /// Call `event.stopPropagation()`.
    pub stop_propagation: bool,
    /// Call `event.preventDefault()`.
    pub prevent_default: bool,
}

impl EventDisposition {
    /// Leave the event alone.
    pub const PASS: Self = Self {
        stop_propagation: false,
        prevent_default: false,
    };

    /// Stop propagation but keep the browser's default action.
    pub const STOP: Self = Self {
        stop_propagation: true,
        prevent_default: false,
    };

    /// Stop propagation and suppress the default action.
    pub const CONSUME: Self = Self {
        stop_propagation: true,
        prevent_default: true,
    };

    #[must_use]
    pub const fn is_pass(self) -> bool {
        !self.stop_propagation && !self.prevent_default
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modifiers_from_dom_flags() {
        let mods = Modifiers::from_dom_flags(false, true, false, true);
        assert_eq!(mods, Modifiers::ALT | Modifiers::SUPER);
        assert_eq!(mods.bits(), 0b1010);
    }

    #[test]
    fn modifiers_truncate_unknown_bits() {
        assert_eq!(Modifiers::from_bits_truncate(0xF2), Modifiers::ALT);
        let decoded: Modifiers = serde_json::from_str("242").unwrap();
        assert_eq!(decoded, Modifiers::ALT);
    }

    #[test]
    fn modifiers_serialize_as_u8() {
        let json = serde_json::to_string(&(Modifiers::SHIFT | Modifiers::CTRL)).unwrap();
        assert_eq!(json, "5");
        let back: Modifiers = serde_json::from_str("2").unwrap();
        assert_eq!(back, Modifiers::ALT);
    }

    #[test]
    fn disposition_constants() {
        assert!(EventDisposition::PASS.is_pass());
        assert!(EventDisposition::STOP.stop_propagation);
        assert!(!EventDisposition::STOP.prevent_default);
        assert!(EventDisposition::CONSUME.prevent_default);
    }
}
