use std::path::PathBuf;

use glfw_win::dpi::{PhysicalPosition, PhysicalSize};
use glfw_win::headless::{HeadlessWindow, WindowRequest};
use glfw_win::input::{Action, Key, ModifierKey, MouseButton};
use glfw_win::Library;

#[test]
fn center_cursor() {
    let mut library = Library::builder().build();
    let backend = HeadlessWindow::new(PhysicalSize::new(801, 601));
    let id = library.create_window(backend.clone()).unwrap();

    library.window_mut(id).unwrap().center_cursor_in_content_area().unwrap();

    // Halved in whole pixels.
    assert_eq!(backend.cursor_position(), Some(PhysicalPosition::new(400.0, 300.0)));
    assert_eq!(backend.requests(), vec![WindowRequest::SetCursorPosition(PhysicalPosition::new(
        400.0, 300.0
    ))]);
}

#[test]
fn center_cursor_propagates_failure() {
    let mut library = Library::builder().build();
    let backend = HeadlessWindow::new(PhysicalSize::new(800, 600));
    let id = library.create_window(backend.clone()).unwrap();
    backend.set_unresponsive(true);

    assert!(library.window_mut(id).unwrap().center_cursor_in_content_area().is_err());
    assert_eq!(backend.cursor_position(), None);
}

#[test]
fn input_delivery_is_not_implemented() {
    let mut library = Library::builder().build();
    let id = library.create_window(HeadlessWindow::new(PhysicalSize::new(800, 600))).unwrap();
    let window = library.window_mut(id).unwrap();
    let mods = ModifierKey::SHIFT | ModifierKey::CONTROL;

    let results = [
        window.input_key(Key::ESCAPE, 1, Action::Press, mods),
        window.input_mouse_click(MouseButton::Left, Action::Release, mods),
        window.input_char('a', ModifierKey::empty(), true),
        window.input_cursor_pos(PhysicalPosition::new(10.0, 20.0)),
        window.input_cursor_enter(true),
        window.input_drop(vec![PathBuf::from("level.tmx")]),
        window.input_scroll(0.0, -1.0),
    ];
    let operations: Vec<_> = results
        .iter()
        .map(|result| result.as_ref().unwrap_err().operation())
        .collect();
    assert_eq!(operations, [
        "input_key",
        "input_mouse_click",
        "input_char",
        "input_cursor_pos",
        "input_cursor_enter",
        "input_drop",
        "input_scroll",
    ]);
}
