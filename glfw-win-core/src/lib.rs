//! Base types for glfw-win.
//!
//! This crate holds the types shared between the monitor roster in [`glfw-win`] and the platform
//! backends that feed it: video modes, the error types, window and monitor identifiers, and the
//! input vocabulary used by the window layer. It has no platform code of its own.
//!
//! [`glfw-win`]: https://docs.rs/glfw-win

pub mod error;
pub mod input;
pub mod monitor;
pub mod window;
