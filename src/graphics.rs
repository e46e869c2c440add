//! Choice of graphics driver.

/// The graphics API the engine renders with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GraphicsApi {
    OpenGl,
    Metal,
}

/// Returns the graphics API for the target this crate was built for.
///
/// OpenGL is used everywhere except on Apple devices, where Metal is used. The iOS simulator on
/// x86 runs OpenGL, and the `opengl` feature forces OpenGL on every Apple target.
pub const fn graphics_api() -> GraphicsApi {
    #[cfg(opengl_driver)]
    {
        GraphicsApi::OpenGl
    }
    #[cfg(not(opengl_driver))]
    {
        GraphicsApi::Metal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(any(not(target_vendor = "apple"), feature = "opengl"))]
    fn opengl_off_apple() {
        assert_eq!(graphics_api(), GraphicsApi::OpenGl);
    }

    #[test]
    #[cfg(all(target_os = "macos", not(feature = "opengl")))]
    fn metal_on_macos() {
        assert_eq!(graphics_api(), GraphicsApi::Metal);
    }
}
