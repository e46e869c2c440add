//! Common error types.

use std::{error, fmt};

use crate::monitor::MonitorId;
use crate::window::WindowId;

/// The error type for operations that exist in the API but have no implementation.
///
/// Hosts can match on this to degrade gracefully instead of relying on the call to succeed.
#[derive(Clone, PartialEq, Eq)]
pub struct NotImplementedError {
    operation: &'static str,
}

impl NotImplementedError {
    /// Create a new [`NotImplementedError`] for the named operation.
    #[inline]
    pub fn new(operation: &'static str) -> NotImplementedError {
        NotImplementedError { operation }
    }

    /// Name of the operation that was called.
    pub fn operation(&self) -> &'static str {
        self.operation
    }
}

impl fmt::Debug for NotImplementedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        f.debug_struct("NotImplementedError").field("operation", &self.operation).finish()
    }
}

impl fmt::Display for NotImplementedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "`{}` is not implemented", self.operation)
    }
}

impl error::Error for NotImplementedError {}

/// The error type for when the platform cannot perform the requested operation.
#[derive(Debug)]
pub struct OsError {
    line: u32,
    file: &'static str,
    error: Box<dyn error::Error + Send + Sync + 'static>,
}

impl OsError {
    /// Create a new [`OsError`]. Prefer the [`os_error!`](crate::os_error) macro, which fills in
    /// the location.
    pub fn new(
        line: u32,
        file: &'static str,
        error: impl Into<Box<dyn error::Error + Send + Sync + 'static>>,
    ) -> OsError {
        OsError { line, file, error: error.into() }
    }
}

/// Build an [`OsError`] tagged with the current source location.
#[macro_export]
macro_rules! os_error {
    ($error:expr) => {{
        $crate::error::OsError::new(line!(), file!(), $error)
    }};
}

impl fmt::Display for OsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        f.pad(&format!("os error at {}:{}: {}", self.file, self.line, self.error))
    }
}

impl error::Error for OsError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        Some(self.error.as_ref())
    }
}

/// An error that may be generated when querying or mutating library state.
#[derive(Debug)]
pub enum RequestError {
    /// The library has not been initialized, or has been terminated.
    NotInitialized,
    /// The monitor is not in the roster, usually because it was disconnected.
    UnknownMonitor(MonitorId),
    /// The window does not exist, usually because it was destroyed.
    UnknownWindow(WindowId),
    /// The operation exists but has no implementation.
    NotImplemented(NotImplementedError),
    /// The platform cannot perform the operation.
    Os(OsError),
}

impl From<NotImplementedError> for RequestError {
    fn from(value: NotImplementedError) -> Self {
        Self::NotImplemented(value)
    }
}

impl From<OsError> for RequestError {
    fn from(value: OsError) -> Self {
        Self::Os(value)
    }
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        match self {
            RequestError::NotInitialized => write!(f, "the library is not initialized"),
            RequestError::UnknownMonitor(id) => write!(f, "no connected monitor with id {id:?}"),
            RequestError::UnknownWindow(id) => write!(f, "no window with id {id:?}"),
            RequestError::NotImplemented(e) => e.fmt(f),
            RequestError::Os(e) => e.fmt(f),
        }
    }
}

impl error::Error for RequestError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            RequestError::NotImplemented(e) => Some(e),
            RequestError::Os(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::redundant_clone)]

    use super::*;

    // Eat attributes for testing
    #[test]
    fn ensure_fmt_does_not_panic() {
        let _ = format!(
            "{:?}, {}",
            RequestError::NotImplemented(NotImplementedError::new("set_gamma")),
            RequestError::NotImplemented(NotImplementedError::new("set_gamma").clone())
        );
        let _ = format!("{:?}, {}", RequestError::NotInitialized, RequestError::NotInitialized);
    }

    #[test]
    fn os_error_reports_location_and_source() {
        let error = os_error!("mode enumeration failed");
        let text = error.to_string();
        assert!(text.starts_with("os error at "), "{text}");
        assert!(text.contains("error.rs"), "{text}");
        assert!(text.ends_with(": mode enumeration failed"), "{text}");
        assert!(error::Error::source(&error).is_some());
    }

    #[test]
    fn not_implemented_names_the_operation() {
        let error = RequestError::from(NotImplementedError::new("gamma_ramp"));
        assert_eq!(error.to_string(), "`gamma_ramp` is not implemented");
        match error {
            RequestError::NotImplemented(inner) => assert_eq!(inner.operation(), "gamma_ramp"),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
