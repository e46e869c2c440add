//! Input vocabulary of the window layer.

use bitflags::bitflags;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A keyboard key, identified by its key code.
///
/// Key codes follow the US layout and are independent of the scancode the platform reports.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Key(pub i32);

impl Key {
    pub const UNKNOWN: Key = Key(-1);
    pub const SPACE: Key = Key(32);
    pub const A: Key = Key(65);
    pub const Z: Key = Key(90);
    pub const ESCAPE: Key = Key(256);
    pub const ENTER: Key = Key(257);
    pub const TAB: Key = Key(258);
    pub const BACKSPACE: Key = Key(259);
    pub const RIGHT: Key = Key(262);
    pub const LEFT: Key = Key(263);
    pub const DOWN: Key = Key(264);
    pub const UP: Key = Key(265);
    pub const F1: Key = Key(290);
    pub const LEFT_SHIFT: Key = Key(340);
    pub const LEFT_CONTROL: Key = Key(341);
    pub const LEFT_ALT: Key = Key(342);
    pub const LEFT_SUPER: Key = Key(343);
    pub const MENU: Key = Key(348);
}

/// State transition of a key or mouse button.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Action {
    Release,
    Press,
    /// The key was held down until it repeated.
    Repeat,
}

/// Describes a button of a mouse controller.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Other(u8),
}

bitflags! {
    /// Modifier keys held while an input event happened.
    #[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
    pub struct ModifierKey: u32 {
        const SHIFT = 0x0001;
        const CONTROL = 0x0002;
        const ALT = 0x0004;
        /// This is the "windows" key on PC and "command" key on Mac.
        const SUPER = 0x0008;
        const CAPS_LOCK = 0x0010;
        const NUM_LOCK = 0x0020;
    }
}
