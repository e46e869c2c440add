//! Types useful for interacting with a user's monitors.
//!
//! A monitor supports a list of [`VideoMode`]s. Callers that want to switch a monitor to a
//! particular resolution describe what they want with a [`VideoModeRequest`] and let
//! [`closest_video_mode`] pick the supported mode that fits best.
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU64, Ordering};

use dpi::{PhysicalPosition, PhysicalSize};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Identifier of a monitor. Unique for each monitor record created in this process.
///
/// A monitor that is unplugged and plugged back in gets a new id.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonitorId(u64);

impl MonitorId {
    /// Get the next id in the sequence.
    pub fn next() -> Self {
        static CURRENT: AtomicU64 = AtomicU64::new(1);
        Self(CURRENT.fetch_add(1, Ordering::Relaxed))
    }
}

impl From<MonitorId> for u64 {
    fn from(monitor_id: MonitorId) -> Self {
        monitor_id.0
    }
}

impl From<u64> for MonitorId {
    fn from(raw_id: u64) -> Self {
        Self(raw_id)
    }
}

/// Bits per colour channel.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ChannelBits {
    pub red: u16,
    pub green: u16,
    pub blue: u16,
}

/// Split a total bit depth into red, green and blue channel sizes.
///
/// 32 is treated as 24, since the extra byte is alpha or padding. Bits that don't divide evenly
/// go to green first, then red, so 16 bpp becomes the usual 5-6-5 layout.
pub fn split_bits_per_pixel(bpp: u16) -> ChannelBits {
    let bpp = if bpp == 32 { 24 } else { bpp };

    let third = bpp / 3;
    let mut bits = ChannelBits { red: third, green: third, blue: third };
    let delta = bpp - third * 3;
    if delta >= 1 {
        bits.green += 1;
    }
    if delta == 2 {
        bits.red += 1;
    }
    bits
}

/// Describes a fullscreen video mode of a monitor.
///
/// Two modes compare equal when they have the same size, the same refresh rate and the same
/// *total* bit depth; the split between channels is not compared. [`Hash`] follows the same rule.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VideoMode {
    size: PhysicalSize<u32>,
    bits: ChannelBits,
    refresh_rate: u32,
}

impl VideoMode {
    /// Creates a video mode from its resolution, channel depths and refresh rate.
    pub fn new(size: PhysicalSize<u32>, bits: ChannelBits, refresh_rate: u32) -> Self {
        Self { size, bits, refresh_rate }
    }

    /// Returns the resolution of this video mode.
    pub fn size(&self) -> PhysicalSize<u32> {
        self.size
    }

    /// Returns the bits of each colour channel.
    pub fn channel_bits(&self) -> ChannelBits {
        self.bits
    }

    /// Returns the bits of the red channel.
    pub fn red_bits(&self) -> u16 {
        self.bits.red
    }

    /// Returns the bits of the green channel.
    pub fn green_bits(&self) -> u16 {
        self.bits.green
    }

    /// Returns the bits of the blue channel.
    pub fn blue_bits(&self) -> u16 {
        self.bits.blue
    }

    /// Returns the sum of the channel sizes.
    pub fn bit_depth(&self) -> u32 {
        u32::from(self.bits.red) + u32::from(self.bits.green) + u32::from(self.bits.blue)
    }

    /// Returns the refresh rate of this video mode in Hz.
    pub fn refresh_rate(&self) -> u32 {
        self.refresh_rate
    }

    /// Key a monitor's mode list is kept sorted by: bit depth, then area, then width, then
    /// refresh rate, all ascending.
    pub fn sort_key(&self) -> (u32, u64, u32, u32) {
        let area = u64::from(self.size.width) * u64::from(self.size.height);
        (self.bit_depth(), area, self.size.width, self.refresh_rate)
    }
}

impl PartialEq for VideoMode {
    fn eq(&self, other: &Self) -> bool {
        self.bit_depth() == other.bit_depth()
            && self.size == other.size
            && self.refresh_rate == other.refresh_rate
    }
}

impl Eq for VideoMode {}

impl Hash for VideoMode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bit_depth().hash(state);
        self.size.width.hash(state);
        self.size.height.hash(state);
        self.refresh_rate.hash(state);
    }
}

impl fmt::Display for VideoMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}x{} @ {} Hz ({} bpp)",
            self.size.width,
            self.size.height,
            self.refresh_rate,
            self.bit_depth(),
        )
    }
}

/// Sort a mode list into the order monitors expose it in. See [`VideoMode::sort_key`].
pub fn sort_video_modes(modes: &mut [VideoMode]) {
    modes.sort_unstable_by_key(VideoMode::sort_key);
}

/// The video mode a caller would like.
///
/// `None` means "don't care" for that field. The size is always taken into account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VideoModeRequest {
    pub size: PhysicalSize<u32>,
    pub red_bits: Option<u16>,
    pub green_bits: Option<u16>,
    pub blue_bits: Option<u16>,
    pub refresh_rate: Option<u32>,
}

impl VideoModeRequest {
    /// A request for the given size with no preference for colour depth or refresh rate.
    pub fn new(size: PhysicalSize<u32>) -> Self {
        Self { size, red_bits: None, green_bits: None, blue_bits: None, refresh_rate: None }
    }

    /// A request built from a total bit depth, split with [`split_bits_per_pixel`].
    pub fn from_bits_per_pixel(
        size: PhysicalSize<u32>,
        bits_per_pixel: u16,
        refresh_rate: Option<u32>,
    ) -> Self {
        let bits = split_bits_per_pixel(bits_per_pixel);
        Self {
            size,
            red_bits: Some(bits.red),
            green_bits: Some(bits.green),
            blue_bits: Some(bits.blue),
            refresh_rate,
        }
    }

    pub fn with_refresh_rate(mut self, refresh_rate: u32) -> Self {
        self.refresh_rate = Some(refresh_rate);
        self
    }

    /// How far `mode` is from this request, as `(colour, size, refresh rate)` differences.
    ///
    /// Tuples compare lexicographically, so the smallest tuple is the best match. With no
    /// refresh rate requested the rate difference is `u64::MAX - rate`, which favours the
    /// fastest mode among otherwise equal candidates.
    pub fn distance(&self, mode: &VideoMode) -> (u64, u128, u64) {
        let channel = |desired: Option<u16>, actual: u16| {
            desired.map_or(0, |desired| u64::from(actual.abs_diff(desired)))
        };
        let color_diff = channel(self.red_bits, mode.bits.red)
            + channel(self.green_bits, mode.bits.green)
            + channel(self.blue_bits, mode.bits.blue);

        // Two squared `u32` differences always fit in a `u128`.
        let dw = u128::from(mode.size.width.abs_diff(self.size.width));
        let dh = u128::from(mode.size.height.abs_diff(self.size.height));
        let size_diff = dw * dw + dh * dh;

        let rate_diff = match self.refresh_rate {
            Some(rate) => u64::from(mode.refresh_rate.abs_diff(rate)),
            None => u64::MAX - u64::from(mode.refresh_rate),
        };

        (color_diff, size_diff, rate_diff)
    }
}

/// Pick the mode closest to `desired`, see [`VideoModeRequest::distance`].
///
/// The first of several equally close modes wins. Returns `None` for an empty list.
pub fn closest_video_mode<'a>(
    modes: &'a [VideoMode],
    desired: &VideoModeRequest,
) -> Option<&'a VideoMode> {
    let mut closest = None;
    let mut least = (u64::MAX, u128::MAX, u64::MAX);
    for mode in modes {
        let distance = desired.distance(mode);
        if distance < least {
            closest = Some(mode);
            least = distance;
        }
    }
    closest
}

/// What happened to a monitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MonitorEvent {
    Connected,
    Disconnected,
}

/// Where a newly connected monitor enters the roster.
///
/// The platform puts the primary monitor first, everything else last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Placement {
    First,
    Last,
}

/// The part of a monitor not covered by task bars and docks, in desktop coordinates.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Workarea {
    pub position: PhysicalPosition<i32>,
    pub size: PhysicalSize<u32>,
}

/// Ratio between the monitor's current DPI and the platform's default DPI, per axis.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ContentScale {
    pub x: f32,
    pub y: f32,
}

impl Default for ContentScale {
    fn default() -> Self {
        Self { x: 1.0, y: 1.0 }
    }
}

/// Per channel gamma ramp of a monitor.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GammaRamp {
    pub red: Vec<u16>,
    pub green: Vec<u16>,
    pub blue: Vec<u16>,
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn mode(width: u32, height: u32, bpp: u16, refresh_rate: u32) -> VideoMode {
        VideoMode::new(PhysicalSize::new(width, height), split_bits_per_pixel(bpp), refresh_rate)
    }

    #[test]
    fn split_bits_per_pixel_distributes_remainder() {
        let split = |bpp| {
            let bits = split_bits_per_pixel(bpp);
            (bits.red, bits.green, bits.blue)
        };
        assert_eq!(split(24), (8, 8, 8));
        assert_eq!(split(32), (8, 8, 8));
        assert_eq!(split(16), (5, 6, 5));
        assert_eq!(split(15), (5, 5, 5));
        assert_eq!(split(8), (3, 3, 2));
        assert_eq!(split(0), (0, 0, 0));
    }

    #[test]
    fn equality_uses_total_bit_depth() {
        let a = VideoMode::new(
            PhysicalSize::new(800, 600),
            ChannelBits { red: 8, green: 8, blue: 8 },
            60,
        );
        let b = VideoMode::new(
            PhysicalSize::new(800, 600),
            ChannelBits { red: 7, green: 9, blue: 8 },
            60,
        );
        assert_eq!(a, b);

        let mut set = HashSet::new();
        set.insert(a);
        assert!(set.contains(&b));

        assert_ne!(a, mode(800, 600, 24, 75));
        assert_ne!(a, mode(800, 601, 24, 60));
        assert_ne!(a, mode(800, 600, 16, 60));
    }

    #[test]
    fn sort_orders_by_depth_area_width_rate() {
        let mut modes = vec![
            mode(1920, 1080, 24, 60),
            mode(640, 480, 24, 75),
            mode(1080, 1920, 24, 60),
            mode(640, 480, 16, 60),
            mode(640, 480, 24, 60),
            mode(1920, 1080, 24, 144),
        ];
        sort_video_modes(&mut modes);

        let keys: Vec<_> = modes
            .iter()
            .map(|m| (m.bit_depth(), m.size().width, m.size().height, m.refresh_rate()))
            .collect();
        assert_eq!(keys, vec![
            (16, 640, 480, 60),
            (24, 640, 480, 60),
            (24, 640, 480, 75),
            (24, 1080, 1920, 60),
            (24, 1920, 1080, 60),
            (24, 1920, 1080, 144),
        ]);
    }

    #[test]
    fn closest_prefers_color_then_size_then_rate() {
        let modes = [mode(1920, 1080, 16, 60), mode(1280, 720, 24, 60), mode(1920, 1080, 24, 30)];

        let size = PhysicalSize::new(1920, 1080);
        let desired = VideoModeRequest::from_bits_per_pixel(size, 24, Some(60));
        assert_eq!(closest_video_mode(&modes, &desired), Some(&modes[2]));

        let desired = VideoModeRequest::from_bits_per_pixel(size, 16, Some(60));
        assert_eq!(closest_video_mode(&modes, &desired), Some(&modes[0]));
    }

    #[test]
    fn dont_care_rate_prefers_fastest() {
        let modes =
            [mode(1920, 1080, 24, 60), mode(1920, 1080, 24, 144), mode(1920, 1080, 24, 120)];
        let desired = VideoModeRequest::new(PhysicalSize::new(1920, 1080));
        assert_eq!(closest_video_mode(&modes, &desired).map(|m| m.refresh_rate()), Some(144));
    }

    #[test]
    fn specified_rate_prefers_nearest() {
        let modes =
            [mode(1920, 1080, 24, 60), mode(1920, 1080, 24, 144), mode(1920, 1080, 24, 120)];
        let desired = VideoModeRequest::new(PhysicalSize::new(1920, 1080)).with_refresh_rate(100);
        assert_eq!(closest_video_mode(&modes, &desired).map(|m| m.refresh_rate()), Some(120));
    }

    #[test]
    fn dont_care_channels_are_skipped() {
        let modes = [mode(800, 600, 16, 60), mode(1024, 768, 24, 60)];
        let desired = VideoModeRequest::new(PhysicalSize::new(800, 600)).with_refresh_rate(60);
        assert_eq!(closest_video_mode(&modes, &desired), Some(&modes[0]));
    }

    #[test]
    fn first_seen_wins_ties() {
        let first = VideoMode::new(
            PhysicalSize::new(800, 600),
            ChannelBits { red: 8, green: 8, blue: 8 },
            60,
        );
        let second = VideoMode::new(
            PhysicalSize::new(800, 600),
            ChannelBits { red: 8, green: 8, blue: 8 },
            60,
        );
        let modes = [first, second];
        let desired = VideoModeRequest::new(PhysicalSize::new(800, 600));
        let chosen = closest_video_mode(&modes, &desired).unwrap();
        assert!(std::ptr::eq(chosen, &modes[0]));
    }

    #[test]
    fn empty_list_has_no_match() {
        let desired = VideoModeRequest::new(PhysicalSize::new(800, 600));
        assert_eq!(closest_video_mode(&[], &desired), None);
    }

    #[test]
    fn huge_sizes_do_not_overflow() {
        let modes = [mode(u32::MAX, u32::MAX, 24, 60), mode(1, 1, 24, 60)];
        let desired = VideoModeRequest::new(PhysicalSize::new(0, 0));
        assert_eq!(closest_video_mode(&modes, &desired), Some(&modes[1]));
    }

    #[test]
    fn far_sizes_are_still_ordered() {
        let far = u32::MAX;
        let less_far = u32::MAX - 100_000;
        let modes = [mode(far, far, 24, 60), mode(less_far, less_far, 24, 60)];
        let desired = VideoModeRequest::new(PhysicalSize::new(0, 0));

        assert!(desired.distance(&modes[1]) < desired.distance(&modes[0]));
        assert_eq!(closest_video_mode(&modes, &desired), Some(&modes[1]));
    }

    #[test]
    fn display() {
        assert_eq!(mode(1920, 1080, 32, 144).to_string(), "1920x1080 @ 144 Hz (24 bpp)");
    }
}
