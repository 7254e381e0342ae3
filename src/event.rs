//! The scene's input event vocabulary.
//!
//! Host-native input (pointer, keyboard, scroll, character commits) is
//! translated into these types before being dispatched into the scene. The
//! scene reports back whether it consumed an event; unconsumed events fall
//! through to the host's own default handling.

use crate::coords::LogicalPoint;
use bitflags::bitflags;
use std::fmt::Display;

/// Host key codes the translator needs by name.
///
/// Values follow the host's GLFW-style key code table. Codes outside this
/// set pass through untranslated.
pub mod keycodes {
    pub const KEY_BACKSPACE: i32 = 259;
    pub const KEY_RIGHT: i32 = 262;
    pub const KEY_LEFT: i32 = 263;
    pub const KEY_DOWN: i32 = 264;
    pub const KEY_UP: i32 = 265;

    pub const MOD_SHIFT: i32 = 0x0001;
    pub const MOD_CONTROL: i32 = 0x0002;
    pub const MOD_ALT: i32 = 0x0004;
    pub const MOD_META: i32 = 0x0008;
}

/// A pointer button, carrying the host's button index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerButton(pub i32);

impl PointerButton {
    pub const LEFT: PointerButton = PointerButton(0);
    pub const RIGHT: PointerButton = PointerButton(1);
    pub const MIDDLE: PointerButton = PointerButton(2);
}

/// Pointer events forwarded into the scene, positioned in logical space.
#[derive(Debug, Clone, PartialEq)]
pub enum PointerEvent {
    /// Pointer is at `position`. Sent every frame, moved or not, so hover
    /// state survives scale changes with a stationary pointer.
    Move { position: LogicalPoint },
    /// A button went down at `position`.
    Press {
        position: LogicalPoint,
        button: PointerButton,
    },
    /// A button came up at `position`.
    Release {
        position: LogicalPoint,
        button: PointerButton,
    },
    /// Scroll momentum consumed this frame, as a delta at `position`.
    Scroll {
        position: LogicalPoint,
        delta_x: f32,
        delta_y: f32,
    },
}

bitflags! {
    /// Keyboard modifier state, extracted from the host's modifier bitmask.
    pub struct Modifiers: u8 {
        const SHIFT   = 0b0001;
        const CONTROL = 0b0010;
        const ALT     = 0b0100;
        const META    = 0b1000;
    }
}

impl Modifiers {
    /// Extracts known modifier bits from a host bitmask; unknown bits are
    /// dropped.
    pub fn from_host_bits(bits: i32) -> Self {
        let mut modifiers = Modifiers::empty();
        if bits & keycodes::MOD_SHIFT != 0 {
            modifiers.insert(Modifiers::SHIFT);
        }
        if bits & keycodes::MOD_CONTROL != 0 {
            modifiers.insert(Modifiers::CONTROL);
        }
        if bits & keycodes::MOD_ALT != 0 {
            modifiers.insert(Modifiers::ALT);
        }
        if bits & keycodes::MOD_META != 0 {
            modifiers.insert(Modifiers::META);
        }
        modifiers
    }
}

impl Display for Modifiers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut parts = Vec::new();
        if self.contains(Modifiers::SHIFT) {
            parts.push("Shift");
        }
        if self.contains(Modifiers::CONTROL) {
            parts.push("Control");
        }
        if self.contains(Modifiers::ALT) {
            parts.push("Alt");
        }
        if self.contains(Modifiers::META) {
            parts.push("Meta");
        }
        if parts.is_empty() {
            write!(f, "None")
        } else {
            write!(f, "{}", parts.join("+"))
        }
    }
}

/// Keys the scene models directly. Navigation keys come from a fixed host
/// code table; everything else passes through as `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Backspace,
    Other(i32),
}

impl Key {
    /// Maps a host key code into the scene's key vocabulary.
    pub fn from_host_code(code: i32) -> Self {
        match code {
            keycodes::KEY_UP => Key::Up,
            keycodes::KEY_DOWN => Key::Down,
            keycodes::KEY_LEFT => Key::Left,
            keycodes::KEY_RIGHT => Key::Right,
            keycodes::KEY_BACKSPACE => Key::Backspace,
            other => Key::Other(other),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEventKind {
    KeyDown,
    KeyUp,
}

/// A key transition with its modifier state attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: Key,
    pub kind: KeyEventKind,
    pub modifiers: Modifiers,
}

/// Edit commands routed to an open text input session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditCommand {
    /// Commit a chunk of text at the cursor.
    CommitText(String),
    /// Delete backwards from the cursor. Bridged from the raw backspace key
    /// code, which the scene's key vocabulary does not model.
    Backspace,
}
