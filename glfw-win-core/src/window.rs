//! Types shared by the window layer.

use std::sync::atomic::{AtomicU64, Ordering};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Identifier of a window. Unique for each window.
///
/// Whenever the library reports something specific to a window, it refers to it by `WindowId`,
/// which you can then compare to the ids of your windows.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WindowId(u64);

impl WindowId {
    /// Get the next id in the sequence.
    pub fn next() -> Self {
        static CURRENT: AtomicU64 = AtomicU64::new(1);
        Self(CURRENT.fetch_add(1, Ordering::Relaxed))
    }
}

impl From<WindowId> for u64 {
    fn from(window_id: WindowId) -> Self {
        window_id.0
    }
}

impl From<u64> for WindowId {
    fn from(raw_id: u64) -> Self {
        Self(raw_id)
    }
}

/// Size of the decorations around a window's content area, in pixels.
///
/// A window moved to `(left, top)` has its title bar and borders fully on screen.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FrameExtents {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique() {
        let a = WindowId::next();
        let b = WindowId::next();
        assert_ne!(a, b);
        assert!(u64::from(a) < u64::from(b));
    }
}
