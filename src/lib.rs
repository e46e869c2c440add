//! Monitor roster and video mode selection for a GLFW-style windowing layer.
//!
//! # Overview
//!
//! All state lives in a [`Library`], which you own and pass around:
//!
//! ```
//! use glfw_win::dpi::PhysicalSize;
//! use glfw_win::headless::HeadlessMonitor;
//! use glfw_win::monitor::{split_bits_per_pixel, Monitor, Placement, VideoMode, VideoModeRequest};
//! use glfw_win::Library;
//!
//! let backend = HeadlessMonitor::new().with_modes([
//!     VideoMode::new(PhysicalSize::new(1920, 1080), split_bits_per_pixel(24), 60),
//!     VideoMode::new(PhysicalSize::new(1920, 1080), split_bits_per_pixel(24), 144),
//! ]);
//!
//! let monitor = Monitor::new("DISPLAY1", PhysicalSize::new(530, 300), backend);
//! let mut library = Library::builder().with_monitor(monitor, Placement::First).build();
//!
//! let primary = library.primary_monitor()?.expect("one monitor is connected").id();
//! let desired = VideoModeRequest::from_bits_per_pixel(PhysicalSize::new(1920, 1080), 32, None);
//! let mode = library.choose_video_mode(primary, &desired)?;
//! assert_eq!(mode.map(|mode| mode.refresh_rate()), Some(144));
//! # Ok::<(), glfw_win::error::RequestError>(())
//! ```
//!
//! Monitors and windows talk to the platform through the [`MonitorProvider`] and
//! [`WindowProvider`] traits. The [`headless`] module implements both in memory.
//!
//! Queries made before [`Library::init`] or after [`Library::terminate`] fail with
//! [`RequestError::NotInitialized`]. Operations that exist in the API but have no implementation
//! (gamma, per-monitor user data, window input delivery) fail with
//! [`RequestError::NotImplemented`] instead of aborting.
//!
//! # Logging
//!
//! Roster changes and mode selection are reported through [`tracing`]. Install a subscriber,
//! e.g. `tracing-subscriber`, to see them.
//!
//! # Cargo Features
//!
//! * `serde`: Enables serialization/deserialization of the data types with
//!   [Serde](https://crates.io/crates/serde).
//! * `mint`: Enables mint (math interoperability standard types) conversions of the `dpi` types.
//! * `opengl`: Selects the OpenGL driver on Apple platforms, see [`graphics::graphics_api`].
//!
//! [`MonitorProvider`]: crate::provider::MonitorProvider
//! [`WindowProvider`]: crate::provider::WindowProvider
//! [`RequestError::NotInitialized`]: crate::error::RequestError::NotInitialized
//! [`RequestError::NotImplemented`]: crate::error::RequestError::NotImplemented

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![forbid(unsafe_code)]

pub use dpi;
#[doc(inline)]
pub use glfw_win_core::{error, input};

pub mod graphics;
pub mod headless;
mod library;
pub mod monitor;
pub mod provider;
pub mod window;

pub use library::{Library, LibraryBuilder, MonitorCallback};
