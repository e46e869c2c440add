//! Entry points the platform calls to deliver input to a window.
//!
//! Input delivery is not implemented. Every entry point reports that instead of dropping the
//! event silently.

use std::path::PathBuf;

use dpi::PhysicalPosition;

use super::Window;
use crate::error::NotImplementedError;
use crate::input::{Action, Key, ModifierKey, MouseButton};

impl Window {
    pub fn input_key(
        &mut self,
        _key: Key,
        _scancode: i32,
        _action: Action,
        _mods: ModifierKey,
    ) -> Result<(), NotImplementedError> {
        Err(NotImplementedError::new("input_key"))
    }

    pub fn input_mouse_click(
        &mut self,
        _button: MouseButton,
        _action: Action,
        _mods: ModifierKey,
    ) -> Result<(), NotImplementedError> {
        Err(NotImplementedError::new("input_mouse_click"))
    }

    /// `plain` is false for characters produced while a modifier other than shift was held.
    pub fn input_char(
        &mut self,
        _codepoint: char,
        _mods: ModifierKey,
        _plain: bool,
    ) -> Result<(), NotImplementedError> {
        Err(NotImplementedError::new("input_char"))
    }

    pub fn input_cursor_pos(
        &mut self,
        _position: PhysicalPosition<f64>,
    ) -> Result<(), NotImplementedError> {
        Err(NotImplementedError::new("input_cursor_pos"))
    }

    pub fn input_cursor_enter(&mut self, _entered: bool) -> Result<(), NotImplementedError> {
        Err(NotImplementedError::new("input_cursor_enter"))
    }

    pub fn input_drop(&mut self, _paths: Vec<PathBuf>) -> Result<(), NotImplementedError> {
        Err(NotImplementedError::new("input_drop"))
    }

    pub fn input_scroll(
        &mut self,
        _x_offset: f64,
        _y_offset: f64,
    ) -> Result<(), NotImplementedError> {
        Err(NotImplementedError::new("input_scroll"))
    }
}
