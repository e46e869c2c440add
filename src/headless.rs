//! An in-memory platform backend.
//!
//! [`HeadlessMonitor`] and [`HeadlessWindow`] implement the provider traits without touching a
//! display server. They are handles: cloning one shares its state, so the copy kept by the caller
//! can change what the platform reports (or inspect what the library asked for) after the
//! original has been moved into a [`Monitor`] or a [`Library`](crate::Library).
//!
//! ```
//! use glfw_win::dpi::PhysicalSize;
//! use glfw_win::headless::HeadlessMonitor;
//! use glfw_win::monitor::{split_bits_per_pixel, Monitor, VideoMode};
//!
//! let backend = HeadlessMonitor::new();
//! let mut monitor = Monitor::new("DISPLAY1", PhysicalSize::new(600, 340), backend.clone());
//!
//! let mode = VideoMode::new(PhysicalSize::new(1280, 720), split_bits_per_pixel(24), 60);
//! backend.set_modes([mode]);
//! monitor.refresh_video_modes()?;
//! assert_eq!(monitor.video_modes().len(), 1);
//! # Ok::<(), glfw_win::error::OsError>(())
//! ```

use std::cell::RefCell;
use std::rc::Rc;
use std::{error, fmt};

use dpi::{PhysicalPosition, PhysicalSize};
use glfw_win_core::os_error;

use crate::error::OsError;
use crate::monitor::{ContentScale, Monitor, MonitorId, VideoMode, Workarea};
use crate::provider::{MonitorProvider, WindowProvider};
use crate::window::FrameExtents;

/// The error reported by the headless backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadlessError {
    message: &'static str,
}

impl fmt::Display for HeadlessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        f.pad(self.message)
    }
}

impl error::Error for HeadlessError {}

fn unplugged() -> OsError {
    os_error!(HeadlessError { message: "the monitor is unplugged" })
}

fn window_failure() -> OsError {
    os_error!(HeadlessError { message: "the window does not respond" })
}

#[derive(Debug, Default)]
struct MonitorState {
    modes: Vec<VideoMode>,
    current_mode: Option<VideoMode>,
    position: Option<PhysicalPosition<i32>>,
    workarea: Workarea,
    content_scale: ContentScale,
    unplugged: bool,
    enumerations: usize,
}

/// A monitor whose modes and geometry are set by the caller.
#[derive(Debug, Clone, Default)]
pub struct HeadlessMonitor {
    state: Rc<RefCell<MonitorState>>,
}

impl HeadlessMonitor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_modes(self, modes: impl IntoIterator<Item = VideoMode>) -> Self {
        self.set_modes(modes);
        self
    }

    /// Replace the modes reported by the next enumeration. Order is kept as given.
    pub fn set_modes(&self, modes: impl IntoIterator<Item = VideoMode>) {
        self.state.borrow_mut().modes = modes.into_iter().collect();
    }

    pub fn set_current_video_mode(&self, mode: Option<VideoMode>) {
        self.state.borrow_mut().current_mode = mode;
    }

    pub fn set_position(&self, position: Option<PhysicalPosition<i32>>) {
        self.state.borrow_mut().position = position;
    }

    pub fn set_workarea(&self, workarea: Workarea) {
        self.state.borrow_mut().workarea = workarea;
    }

    pub fn set_content_scale(&self, content_scale: ContentScale) {
        self.state.borrow_mut().content_scale = content_scale;
    }

    /// While unplugged, mode enumeration and content scale queries fail and the position is
    /// unknown.
    pub fn set_unplugged(&self, unplugged: bool) {
        self.state.borrow_mut().unplugged = unplugged;
    }

    /// How many times the modes have been enumerated, including failed attempts.
    pub fn enumeration_count(&self) -> usize {
        self.state.borrow().enumerations
    }
}

impl MonitorProvider for HeadlessMonitor {
    fn append_video_modes(&self, mut modes: Vec<VideoMode>) -> Result<Vec<VideoMode>, OsError> {
        let mut state = self.state.borrow_mut();
        state.enumerations += 1;
        if state.unplugged {
            return Err(unplugged());
        }
        modes.extend_from_slice(&state.modes);
        Ok(modes)
    }

    fn current_video_mode(&self) -> Option<VideoMode> {
        self.state.borrow().current_mode
    }

    fn position(&self) -> Option<PhysicalPosition<i32>> {
        let state = self.state.borrow();
        if state.unplugged {
            None
        } else {
            state.position
        }
    }

    fn workarea(&self) -> Workarea {
        self.state.borrow().workarea
    }

    fn content_scale(&self) -> Result<ContentScale, OsError> {
        let state = self.state.borrow();
        if state.unplugged {
            return Err(unplugged());
        }
        Ok(state.content_scale)
    }
}

/// A request the library made to a [`HeadlessWindow`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WindowRequest {
    SetMonitor {
        monitor: Option<MonitorId>,
        position: PhysicalPosition<i32>,
        size: PhysicalSize<u32>,
        refresh_rate: Option<u32>,
    },
    SetPosition(PhysicalPosition<i32>),
    SetCursorPosition(PhysicalPosition<f64>),
}

#[derive(Debug, Default)]
struct WindowState {
    size: PhysicalSize<u32>,
    position: PhysicalPosition<i32>,
    frame_extents: FrameExtents,
    cursor_position: Option<PhysicalPosition<f64>>,
    requests: Vec<WindowRequest>,
    unresponsive: bool,
    frame_extents_unavailable: bool,
}

/// A window that records what it is asked to do.
#[derive(Debug, Clone, Default)]
pub struct HeadlessWindow {
    state: Rc<RefCell<WindowState>>,
}

impl HeadlessWindow {
    pub fn new(size: PhysicalSize<u32>) -> Self {
        let window = Self::default();
        window.state.borrow_mut().size = size;
        window
    }

    pub fn with_frame_extents(self, frame_extents: FrameExtents) -> Self {
        self.state.borrow_mut().frame_extents = frame_extents;
        self
    }

    /// Resize the content area, as if the user dragged the window border.
    pub fn resize(&self, size: PhysicalSize<u32>) {
        self.state.borrow_mut().size = size;
    }

    /// While unresponsive, size and frame queries fail.
    pub fn set_unresponsive(&self, unresponsive: bool) {
        self.state.borrow_mut().unresponsive = unresponsive;
    }

    /// While set, only the frame extents query fails.
    pub fn set_frame_extents_unavailable(&self, unavailable: bool) {
        self.state.borrow_mut().frame_extents_unavailable = unavailable;
    }

    pub fn current_size(&self) -> PhysicalSize<u32> {
        self.state.borrow().size
    }

    pub fn current_position(&self) -> PhysicalPosition<i32> {
        self.state.borrow().position
    }

    pub fn cursor_position(&self) -> Option<PhysicalPosition<f64>> {
        self.state.borrow().cursor_position
    }

    /// Every request made so far, oldest first.
    pub fn requests(&self) -> Vec<WindowRequest> {
        self.state.borrow().requests.clone()
    }
}

impl WindowProvider for HeadlessWindow {
    fn size(&self) -> Result<PhysicalSize<u32>, OsError> {
        let state = self.state.borrow();
        if state.unresponsive {
            return Err(window_failure());
        }
        Ok(state.size)
    }

    fn set_monitor(
        &mut self,
        monitor: Option<&Monitor>,
        position: PhysicalPosition<i32>,
        size: PhysicalSize<u32>,
        refresh_rate: Option<u32>,
    ) -> Result<(), OsError> {
        let mut state = self.state.borrow_mut();
        state.requests.push(WindowRequest::SetMonitor {
            monitor: monitor.map(Monitor::id),
            position,
            size,
            refresh_rate,
        });
        match monitor {
            Some(monitor) => {
                state.position = monitor.position();
                if let Some(mode) = monitor.current_video_mode() {
                    state.size = mode.size();
                }
            },
            None => {
                state.position = position;
                state.size = size;
            },
        }
        Ok(())
    }

    fn frame_extents(&self) -> Result<FrameExtents, OsError> {
        let state = self.state.borrow();
        if state.unresponsive || state.frame_extents_unavailable {
            return Err(window_failure());
        }
        Ok(state.frame_extents)
    }

    fn set_position(&mut self, position: PhysicalPosition<i32>) -> Result<(), OsError> {
        let mut state = self.state.borrow_mut();
        state.requests.push(WindowRequest::SetPosition(position));
        state.position = position;
        Ok(())
    }

    fn set_cursor_position(&mut self, position: PhysicalPosition<f64>) -> Result<(), OsError> {
        let mut state = self.state.borrow_mut();
        state.requests.push(WindowRequest::SetCursorPosition(position));
        state.cursor_position = Some(position);
        Ok(())
    }
}
