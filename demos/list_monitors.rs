//! Lists the monitors of a headless setup and picks a full screen mode on each.
//!
//! Run with `RUST_LOG=trace` to see the library's own diagnostics.

use std::error::Error;

use glfw_win::dpi::{PhysicalPosition, PhysicalSize};
use glfw_win::graphics::graphics_api;
use glfw_win::headless::HeadlessMonitor;
use glfw_win::monitor::{
    split_bits_per_pixel, Monitor, MonitorEvent, Placement, VideoMode, VideoModeRequest,
};
use glfw_win::Library;

fn mode(width: u32, height: u32, refresh_rate: u32) -> VideoMode {
    VideoMode::new(PhysicalSize::new(width, height), split_bits_per_pixel(24), refresh_rate)
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let primary = HeadlessMonitor::new().with_modes([
        mode(1920, 1080, 60),
        mode(1280, 720, 60),
        mode(2560, 1440, 144),
        mode(2560, 1440, 60),
    ]);
    primary.set_current_video_mode(Some(mode(2560, 1440, 144)));

    let side = HeadlessMonitor::new().with_modes([mode(1920, 1200, 60), mode(1280, 800, 60)]);
    side.set_position(Some(PhysicalPosition::new(2560, 0)));

    let mut library = Library::builder()
        .with_monitor(
            Monitor::new("DP-1", PhysicalSize::new(597, 336), primary),
            Placement::First,
        )
        .with_monitor_callback(|monitor: &Monitor, event: MonitorEvent| {
            println!("{event:?}: {}", monitor.name());
        })
        .build();

    library.input_monitor_connected(
        Monitor::new("HDMI-1", PhysicalSize::new(518, 324), side),
        Placement::Last,
    )?;

    println!("graphics api: {:?}", graphics_api());

    let request = VideoModeRequest::from_bits_per_pixel(PhysicalSize::new(1920, 1080), 24, None);
    let ids: Vec<_> = library.monitors()?.iter().map(Monitor::id).collect();
    for id in ids {
        let modes = library.refresh_video_modes(id)?.to_vec();
        let monitor = library.monitor(id)?;
        println!("{} at {:?}", monitor.name(), monitor.position());
        for mode in &modes {
            println!("    {mode}");
        }
        match library.choose_video_mode(id, &request)? {
            Some(chosen) => println!("    closest to 1920x1080: {chosen}"),
            None => println!("    no video modes"),
        }
    }

    Ok(())
}
