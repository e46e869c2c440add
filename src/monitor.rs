//! Types useful for interacting with a user's monitors.
//!
//! Monitors are owned by the [`Library`](crate::Library) roster and reached through
//! [`Library::monitors`](crate::Library::monitors) or
//! [`Library::primary_monitor`](crate::Library::primary_monitor).

use dpi::{PhysicalPosition, PhysicalSize};
#[doc(inline)]
pub use glfw_win_core::monitor::{
    closest_video_mode, sort_video_modes, split_bits_per_pixel, ChannelBits, ContentScale,
    GammaRamp, MonitorEvent, MonitorId, Placement, VideoMode, VideoModeRequest, Workarea,
};
use smol_str::SmolStr;

use crate::error::OsError;
use crate::provider::MonitorProvider;
use crate::window::WindowId;

/// A connected monitor.
///
/// Holds the monitor's supported video modes, sorted with [`sort_video_modes`]. The list is
/// rebuilt from the platform every time it is refreshed.
#[derive(Debug)]
pub struct Monitor {
    id: MonitorId,
    name: SmolStr,
    /// Physical size in millimetres.
    physical_size: PhysicalSize<u32>,
    modes: Vec<VideoMode>,
    /// The window that is full screen on this monitor.
    window: Option<WindowId>,
    provider: Box<dyn MonitorProvider>,
}

impl Monitor {
    /// Create a monitor record. Its mode list starts out empty.
    pub fn new(
        name: impl Into<SmolStr>,
        physical_size: PhysicalSize<u32>,
        provider: impl MonitorProvider + 'static,
    ) -> Self {
        Self {
            id: MonitorId::next(),
            name: name.into(),
            physical_size,
            modes: Vec::new(),
            window: None,
            provider: Box::new(provider),
        }
    }

    pub fn id(&self) -> MonitorId {
        self.id
    }

    /// Returns a human-readable name of the monitor.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the physical size of the monitor in millimetres.
    pub fn physical_size(&self) -> PhysicalSize<u32> {
        self.physical_size
    }

    /// Returns the top-left corner of the monitor in desktop coordinates, or the origin when the
    /// platform can't tell.
    pub fn position(&self) -> PhysicalPosition<i32> {
        self.provider.position().unwrap_or_default()
    }

    pub fn workarea(&self) -> Workarea {
        self.provider.workarea()
    }

    pub fn content_scale(&self) -> Result<ContentScale, OsError> {
        self.provider.content_scale()
    }

    /// Returns the video modes found by the last refresh, in sorted order.
    pub fn video_modes(&self) -> &[VideoMode] {
        &self.modes
    }

    pub fn current_video_mode(&self) -> Option<VideoMode> {
        self.provider.current_video_mode()
    }

    /// Returns the window that is full screen on this monitor, if any.
    pub fn window(&self) -> Option<WindowId> {
        self.window
    }

    pub(crate) fn set_window(&mut self, window: Option<WindowId>) {
        self.window = window;
    }

    /// Replace the mode list with the platform's current one.
    ///
    /// The old list is dropped before the platform is asked, so on failure the monitor is left
    /// with no modes at all.
    pub fn refresh_video_modes(&mut self) -> Result<(), OsError> {
        let mut modes = std::mem::take(&mut self.modes);
        modes.clear();
        let mut modes = self.provider.append_video_modes(modes)?;
        sort_video_modes(&mut modes);
        tracing::trace!(monitor = %self.name, count = modes.len(), "refreshed video modes");
        self.modes = modes;
        Ok(())
    }

    /// Refresh the mode list, then pick the mode closest to `desired`.
    ///
    /// Returns `Ok(None)` when the platform reports no modes.
    pub fn choose_video_mode(
        &mut self,
        desired: &VideoModeRequest,
    ) -> Result<Option<VideoMode>, OsError> {
        self.refresh_video_modes()?;
        let closest = closest_video_mode(&self.modes, desired).copied();
        tracing::trace!(monitor = %self.name, ?desired, chosen = ?closest, "chose video mode");
        Ok(closest)
    }
}
