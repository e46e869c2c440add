use std::any::Any;
use std::fmt;

use dpi::{PhysicalPosition, PhysicalSize};
use tracing::{debug, warn};

use crate::error::{NotImplementedError, RequestError};
use crate::monitor::{
    ContentScale, GammaRamp, Monitor, MonitorEvent, MonitorId, Placement, VideoMode,
    VideoModeRequest, Workarea,
};
use crate::provider::WindowProvider;
use crate::window::{Window, WindowId};

/// Observer notified when a monitor is connected or disconnected.
pub type MonitorCallback = Box<dyn FnMut(&Monitor, MonitorEvent)>;

/// Owner of the monitor roster and the windows placed on those monitors.
///
/// A freshly created library is not initialized: every query fails with
/// [`RequestError::NotInitialized`] until [`Library::init`] is called. Use
/// [`Library::builder`] to get an initialized library with monitors already in place.
///
/// The library is single threaded; it is mutated through `&mut self` and holds
/// platform handles that must stay on the thread that created them.
#[derive(Default)]
pub struct Library {
    state: Option<LibraryState>,
}

#[derive(Default)]
struct LibraryState {
    /// Connected monitors, primary first.
    monitors: Vec<Monitor>,
    windows: Vec<Window>,
    monitor_callback: Option<MonitorCallback>,
}

impl LibraryState {
    fn monitor(&self, id: MonitorId) -> Result<&Monitor, RequestError> {
        self.monitors
            .iter()
            .find(|monitor| monitor.id() == id)
            .ok_or(RequestError::UnknownMonitor(id))
    }

    fn monitor_mut(&mut self, id: MonitorId) -> Result<&mut Monitor, RequestError> {
        self.monitors
            .iter_mut()
            .find(|monitor| monitor.id() == id)
            .ok_or(RequestError::UnknownMonitor(id))
    }

    fn window_index(&self, id: WindowId) -> Result<usize, RequestError> {
        self.windows
            .iter()
            .position(|window| window.id() == id)
            .ok_or(RequestError::UnknownWindow(id))
    }
}

impl Library {
    /// Create a library that is not yet initialized.
    pub fn new() -> Self {
        Self { state: None }
    }

    /// Start building an initialized library.
    #[inline]
    pub fn builder() -> LibraryBuilder {
        LibraryBuilder::default()
    }

    /// Set up an empty roster. Does nothing if the library is already initialized.
    pub fn init(&mut self) {
        let _span = tracing::debug_span!("glfw_win::Library::init").entered();
        if self.state.is_none() {
            self.state = Some(LibraryState::default());
            debug!("library initialized");
        }
    }

    /// Drop every monitor, window and the monitor callback, and return to the uninitialized
    /// state.
    pub fn terminate(&mut self) {
        let _span = tracing::debug_span!("glfw_win::Library::terminate").entered();
        if let Some(state) = self.state.take() {
            debug!(
                monitors = state.monitors.len(),
                windows = state.windows.len(),
                "library terminated"
            );
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.state.is_some()
    }

    fn state(&self) -> Result<&LibraryState, RequestError> {
        self.state.as_ref().ok_or(RequestError::NotInitialized)
    }

    fn state_mut(&mut self) -> Result<&mut LibraryState, RequestError> {
        self.state.as_mut().ok_or(RequestError::NotInitialized)
    }

    // Monitor lifecycle, driven by the platform.

    /// Add a newly connected monitor to the roster and notify the monitor callback.
    pub fn input_monitor_connected(
        &mut self,
        monitor: Monitor,
        placement: Placement,
    ) -> Result<MonitorId, RequestError> {
        let _span = tracing::debug_span!(
            "glfw_win::Library::input_monitor_connected",
            monitor = monitor.name(),
            placement = ?placement
        )
        .entered();

        let state = self.state_mut()?;
        let id = monitor.id();
        let index = match placement {
            Placement::First => {
                state.monitors.insert(0, monitor);
                0
            },
            Placement::Last => {
                state.monitors.push(monitor);
                state.monitors.len() - 1
            },
        };
        debug!(?id, index, "monitor connected");

        if let Some(callback) = state.monitor_callback.as_mut() {
            callback(&state.monitors[index], MonitorEvent::Connected);
        }

        Ok(id)
    }

    /// Remove a disconnected monitor from the roster and notify the monitor callback.
    ///
    /// Windows that were full screen on the monitor are first returned to windowed mode at their
    /// current size. The removed monitor is handed back to the caller.
    pub fn input_monitor_disconnected(&mut self, id: MonitorId) -> Result<Monitor, RequestError> {
        let _span =
            tracing::debug_span!("glfw_win::Library::input_monitor_disconnected", monitor = ?id)
                .entered();

        let state = self.state_mut()?;
        let index = state
            .monitors
            .iter()
            .position(|monitor| monitor.id() == id)
            .ok_or(RequestError::UnknownMonitor(id))?;

        for window in state.windows.iter_mut().filter(|window| window.monitor() == Some(id)) {
            warn!(window = ?window.id(), "monitor disconnected, leaving full screen");
            window.leave_monitor()?;
        }

        let mut monitor = state.monitors.remove(index);
        monitor.set_window(None);
        debug!(name = monitor.name(), remaining = state.monitors.len(), "monitor disconnected");

        if let Some(callback) = state.monitor_callback.as_mut() {
            callback(&monitor, MonitorEvent::Disconnected);
        }

        Ok(monitor)
    }

    /// Replace the monitor callback, returning the previous one.
    pub fn set_monitor_callback(
        &mut self,
        callback: Option<MonitorCallback>,
    ) -> Result<Option<MonitorCallback>, RequestError> {
        let state = self.state_mut()?;
        Ok(std::mem::replace(&mut state.monitor_callback, callback))
    }

    // Monitor queries.

    /// Returns the connected monitors, primary first.
    pub fn monitors(&self) -> Result<&[Monitor], RequestError> {
        Ok(&self.state()?.monitors)
    }

    /// Returns the primary monitor, or `None` when no monitor is connected.
    pub fn primary_monitor(&self) -> Result<Option<&Monitor>, RequestError> {
        Ok(self.state()?.monitors.first())
    }

    /// Returns the connected monitor with the given id.
    pub fn monitor(&self, id: MonitorId) -> Result<&Monitor, RequestError> {
        self.state()?.monitor(id)
    }

    /// Returns the top-left corner of the monitor in desktop coordinates.
    pub fn monitor_position(&self, id: MonitorId) -> Result<PhysicalPosition<i32>, RequestError> {
        Ok(self.monitor(id)?.position())
    }

    /// Returns the area of the monitor not covered by task bars and docks.
    pub fn monitor_workarea(&self, id: MonitorId) -> Result<Workarea, RequestError> {
        Ok(self.monitor(id)?.workarea())
    }

    /// Returns the physical size of the monitor in millimetres.
    pub fn monitor_physical_size(&self, id: MonitorId) -> Result<PhysicalSize<u32>, RequestError> {
        Ok(self.monitor(id)?.physical_size())
    }

    /// Returns the ratio between the monitor's DPI and the platform's default DPI.
    pub fn monitor_content_scale(&self, id: MonitorId) -> Result<ContentScale, RequestError> {
        Ok(self.monitor(id)?.content_scale()?)
    }

    /// Returns a human-readable name of the monitor.
    pub fn monitor_name(&self, id: MonitorId) -> Result<&str, RequestError> {
        Ok(self.monitor(id)?.name())
    }

    /// Returns the video modes found by the last refresh of the monitor.
    pub fn video_modes(&self, id: MonitorId) -> Result<&[VideoMode], RequestError> {
        Ok(self.monitor(id)?.video_modes())
    }

    /// Returns the mode the monitor is currently driven at.
    pub fn video_mode(&self, id: MonitorId) -> Result<Option<VideoMode>, RequestError> {
        Ok(self.monitor(id)?.current_video_mode())
    }

    /// Re-read the monitor's video modes from the platform and return them sorted.
    pub fn refresh_video_modes(&mut self, id: MonitorId) -> Result<&[VideoMode], RequestError> {
        let monitor = self.state_mut()?.monitor_mut(id)?;
        monitor.refresh_video_modes()?;
        Ok(monitor.video_modes())
    }

    /// Pick the monitor's supported mode closest to `desired`. See
    /// [`Monitor::choose_video_mode`].
    pub fn choose_video_mode(
        &mut self,
        id: MonitorId,
        desired: &VideoModeRequest,
    ) -> Result<Option<VideoMode>, RequestError> {
        Ok(self.state_mut()?.monitor_mut(id)?.choose_video_mode(desired)?)
    }

    // Not implemented.

    pub fn set_monitor_user_data(
        &mut self,
        id: MonitorId,
        _data: Box<dyn Any>,
    ) -> Result<(), RequestError> {
        self.monitor(id)?;
        Err(NotImplementedError::new("set_monitor_user_data").into())
    }

    pub fn monitor_user_data(&self, id: MonitorId) -> Result<Option<&dyn Any>, RequestError> {
        self.monitor(id)?;
        Err(NotImplementedError::new("monitor_user_data").into())
    }

    pub fn set_gamma(&mut self, id: MonitorId, _gamma: f32) -> Result<(), RequestError> {
        self.monitor(id)?;
        Err(NotImplementedError::new("set_gamma").into())
    }

    pub fn gamma_ramp(&self, id: MonitorId) -> Result<GammaRamp, RequestError> {
        self.monitor(id)?;
        Err(NotImplementedError::new("gamma_ramp").into())
    }

    pub fn set_gamma_ramp(&mut self, id: MonitorId, _ramp: &GammaRamp) -> Result<(), RequestError> {
        self.monitor(id)?;
        Err(NotImplementedError::new("set_gamma_ramp").into())
    }

    // Windows.

    /// Register a window backed by `provider`. It starts out windowed.
    pub fn create_window(
        &mut self,
        provider: impl WindowProvider + 'static,
    ) -> Result<WindowId, RequestError> {
        let state = self.state_mut()?;
        let window = Window::new(Box::new(provider));
        let id = window.id();
        state.windows.push(window);
        debug!(window = ?id, "window created");
        Ok(id)
    }

    /// Returns the window with the given id.
    pub fn window(&self, id: WindowId) -> Result<&Window, RequestError> {
        let state = self.state()?;
        Ok(&state.windows[state.window_index(id)?])
    }

    /// Returns the window with the given id, mutably.
    pub fn window_mut(&mut self, id: WindowId) -> Result<&mut Window, RequestError> {
        let state = self.state_mut()?;
        let index = state.window_index(id)?;
        Ok(&mut state.windows[index])
    }

    /// Destroy a window, releasing the monitor it was full screen on.
    pub fn destroy_window(&mut self, id: WindowId) -> Result<(), RequestError> {
        let state = self.state_mut()?;
        let index = state.window_index(id)?;
        let window = state.windows.remove(index);
        if let Some(monitor) = window.monitor() {
            if let Ok(monitor) = state.monitor_mut(monitor) {
                monitor.set_window(None);
            }
        }
        debug!(window = ?id, "window destroyed");
        Ok(())
    }

    /// Record which monitor a window is full screen on, or that it is windowed.
    ///
    /// Both sides of the link are updated. A monitor holds at most one window; a window that
    /// previously held the monitor is unlinked from it.
    pub fn set_window_monitor(
        &mut self,
        window: WindowId,
        monitor: Option<MonitorId>,
    ) -> Result<(), RequestError> {
        let state = self.state_mut()?;
        let index = state.window_index(window)?;
        if let Some(monitor) = monitor {
            state.monitor(monitor)?;
        }

        if let Some(previous) = state.windows[index].monitor() {
            if let Ok(previous) = state.monitor_mut(previous) {
                previous.set_window(None);
            }
        }

        if let Some(monitor) = monitor {
            let monitor = state.monitor_mut(monitor)?;
            let displaced = monitor.window().filter(|&other| other != window);
            monitor.set_window(Some(window));
            if let Some(displaced) = displaced {
                if let Ok(displaced) = state.window_index(displaced) {
                    state.windows[displaced].set_monitor(None);
                }
            }
        }

        state.windows[index].set_monitor(monitor);
        Ok(())
    }
}

impl fmt::Debug for Library {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.state {
            Some(state) => f
                .debug_struct("Library")
                .field("monitors", &state.monitors)
                .field("windows", &state.windows)
                .field("monitor_callback", &state.monitor_callback.is_some())
                .finish(),
            None => f.debug_struct("Library").field("initialized", &false).finish(),
        }
    }
}

/// Object that allows building an initialized [`Library`].
///
/// This can be created using [`Library::builder`].
#[derive(Default)]
pub struct LibraryBuilder {
    monitors: Vec<(Monitor, Placement)>,
    monitor_callback: Option<MonitorCallback>,
}

impl LibraryBuilder {
    /// Add a monitor that is already connected when the library starts.
    ///
    /// The monitor callback is not called for these.
    pub fn with_monitor(mut self, monitor: Monitor, placement: Placement) -> Self {
        self.monitors.push((monitor, placement));
        self
    }

    pub fn with_monitor_callback(
        mut self,
        callback: impl FnMut(&Monitor, MonitorEvent) + 'static,
    ) -> Self {
        self.monitor_callback = Some(Box::new(callback));
        self
    }

    pub fn build(self) -> Library {
        let _span = tracing::debug_span!("glfw_win::LibraryBuilder::build").entered();

        let mut monitors = Vec::with_capacity(self.monitors.len());
        for (monitor, placement) in self.monitors {
            match placement {
                Placement::First => monitors.insert(0, monitor),
                Placement::Last => monitors.push(monitor),
            }
        }
        debug!(monitors = monitors.len(), "library initialized");

        Library {
            state: Some(LibraryState {
                monitors,
                windows: Vec::new(),
                monitor_callback: self.monitor_callback,
            }),
        }
    }
}

impl fmt::Debug for LibraryBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LibraryBuilder")
            .field("monitors", &self.monitors)
            .field("monitor_callback", &self.monitor_callback.is_some())
            .finish()
    }
}
