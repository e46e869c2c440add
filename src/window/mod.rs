//! Windows as far as the monitor roster is concerned.

use dpi::PhysicalPosition;
#[doc(inline)]
pub use glfw_win_core::window::{FrameExtents, WindowId};

use crate::error::OsError;
use crate::monitor::MonitorId;
use crate::provider::WindowProvider;

mod input;

/// A window created through [`Library::create_window`](crate::Library::create_window).
#[derive(Debug)]
pub struct Window {
    id: WindowId,
    /// The monitor this window is full screen on.
    monitor: Option<MonitorId>,
    provider: Box<dyn WindowProvider>,
}

impl Window {
    pub(crate) fn new(provider: Box<dyn WindowProvider>) -> Self {
        Self { id: WindowId::next(), monitor: None, provider }
    }

    pub fn id(&self) -> WindowId {
        self.id
    }

    /// Returns the monitor this window is full screen on, or `None` when windowed.
    pub fn monitor(&self) -> Option<MonitorId> {
        self.monitor
    }

    pub(crate) fn set_monitor(&mut self, monitor: Option<MonitorId>) {
        self.monitor = monitor;
    }

    /// Put the cursor in the middle of the content area.
    pub fn center_cursor_in_content_area(&mut self) -> Result<(), OsError> {
        let size = self.provider.size()?;
        let center = PhysicalPosition::new(f64::from(size.width / 2), f64::from(size.height / 2));
        self.provider.set_cursor_position(center)
    }

    /// Return a full screen window to windowed mode at its current size, with its decorations
    /// on screen.
    ///
    /// The window counts as windowed once the platform has left full screen, even if moving it
    /// afterwards fails.
    pub(crate) fn leave_monitor(&mut self) -> Result<(), OsError> {
        let size = self.provider.size()?;
        self.provider.set_monitor(None, PhysicalPosition::new(0, 0), size, None)?;
        self.monitor = None;
        let frame = self.provider.frame_extents()?;
        self.provider.set_position(PhysicalPosition::new(frame.left, frame.top))
    }
}
