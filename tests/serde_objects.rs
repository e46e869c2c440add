#![cfg(feature = "serde")]

use glfw_win::input::{Action, Key, ModifierKey, MouseButton};
use glfw_win::monitor::{
    ChannelBits, ContentScale, GammaRamp, MonitorEvent, Placement, VideoMode, VideoModeRequest,
    Workarea,
};
use glfw_win::window::FrameExtents;
use serde::{Deserialize, Serialize};

#[allow(dead_code)]
fn needs_serde<S: Serialize + Deserialize<'static>>() {}

#[test]
fn monitor_serde() {
    needs_serde::<VideoMode>();
    needs_serde::<VideoModeRequest>();
    needs_serde::<ChannelBits>();
    needs_serde::<MonitorEvent>();
    needs_serde::<Placement>();
    needs_serde::<Workarea>();
    needs_serde::<ContentScale>();
    needs_serde::<GammaRamp>();
}

#[test]
fn window_serde() {
    needs_serde::<FrameExtents>();
}

#[test]
fn input_serde() {
    needs_serde::<Key>();
    needs_serde::<Action>();
    needs_serde::<MouseButton>();
    needs_serde::<ModifierKey>();
}
