//! Error types for the Prism render pass state
//!
//! This module defines the error type used throughout the crate.
//! Only resource allocation failures are reported as errors: missing
//! camera framing, invalid AOV bindings and hash collisions degrade
//! gracefully instead.

use std::fmt;

/// Result type for Prism operations
pub type Result<T> = std::result::Result<T, Error>;

/// Prism errors
#[derive(Debug, Clone)]
pub enum Error {
    /// Backend-specific error (resource registry, graphics context, etc.)
    BackendError(String),

    /// Out of GPU memory
    OutOfMemory,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
            Error::OutOfMemory => write!(f, "Out of GPU memory"),
        }
    }
}

impl std::error::Error for Error {}

// ===== ERROR MACROS =====

/// Log an error and build an `Error::BackendError` from it
///
/// # Example
///
/// ```no_run
/// # use prism_render_pass::prism_err;
/// let err = prism_err!("prism::RenderPassState", "Allocation of {} bytes failed", 256);
/// ```
#[macro_export]
macro_rules! prism_err {
    ($source:expr, $($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::log::log_detailed(
            $crate::log::LogSeverity::Error,
            $source,
            message.clone(),
            file!(),
            line!(),
        );
        $crate::prism::Error::BackendError(message)
    }};
}

/// Log an error and return it from the enclosing function
///
/// # Example
///
/// ```no_run
/// # use prism_render_pass::{prism_bail, prism::Result};
/// fn check(size: u64) -> Result<()> {
///     if size == 0 {
///         prism_bail!("prism::RenderPassState", "Uniform block is empty");
///     }
///     Ok(())
/// }
/// ```
#[macro_export]
macro_rules! prism_bail {
    ($source:expr, $($arg:tt)*) => {
        return Err($crate::prism_err!($source, $($arg)*))
    };
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
