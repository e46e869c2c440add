//! The seam between the library and a platform backend.
//!
//! A backend hands the [`Library`](crate::Library) one [`MonitorProvider`] per connected monitor
//! and one [`WindowProvider`] per window. Everything the library knows about the outside world
//! comes through these traits.

use std::fmt;

use dpi::{PhysicalPosition, PhysicalSize};

use crate::error::OsError;
use crate::monitor::{ContentScale, Monitor, VideoMode, Workarea};
use crate::window::FrameExtents;

/// Platform half of a [`Monitor`].
pub trait MonitorProvider: fmt::Debug {
    /// Append every video mode the monitor currently supports to `modes` and return it.
    ///
    /// The list does not need to be sorted or deduplicated.
    fn append_video_modes(&self, modes: Vec<VideoMode>) -> Result<Vec<VideoMode>, OsError>;

    /// The mode the monitor is driven at right now.
    fn current_video_mode(&self) -> Option<VideoMode>;

    /// Top-left corner of the monitor in desktop coordinates.
    ///
    /// Returns `None` if the platform couldn't report it.
    fn position(&self) -> Option<PhysicalPosition<i32>>;

    /// The part of the monitor not covered by task bars and docks.
    fn workarea(&self) -> Workarea;

    fn content_scale(&self) -> Result<ContentScale, OsError>;
}

/// Platform half of a [`Window`](crate::window::Window).
pub trait WindowProvider: fmt::Debug {
    /// Size of the content area in pixels.
    fn size(&self) -> Result<PhysicalSize<u32>, OsError>;

    /// Make the window full screen on `monitor`, or windowed at `position` and `size` when
    /// `monitor` is `None`.
    fn set_monitor(
        &mut self,
        monitor: Option<&Monitor>,
        position: PhysicalPosition<i32>,
        size: PhysicalSize<u32>,
        refresh_rate: Option<u32>,
    ) -> Result<(), OsError>;

    /// Size of the decorations around the content area on each side.
    fn frame_extents(&self) -> Result<FrameExtents, OsError>;

    /// Move the top-left corner of the content area.
    fn set_position(&mut self, position: PhysicalPosition<i32>) -> Result<(), OsError>;

    /// Move the cursor, relative to the top-left corner of the content area.
    fn set_cursor_position(&mut self, position: PhysicalPosition<f64>) -> Result<(), OsError>;
}
