#![allow(dead_code)]

use glfw_win::dpi::PhysicalSize;
use glfw_win::monitor::{split_bits_per_pixel, VideoMode};
use tracing_subscriber::EnvFilter;

/// Route library logs to the test output. Filter with `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn mode(width: u32, height: u32, bpp: u16, refresh_rate: u32) -> VideoMode {
    VideoMode::new(PhysicalSize::new(width, height), split_bits_per_pixel(bpp), refresh_rate)
}
