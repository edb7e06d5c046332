// SPDX-License-Identifier: MPL-2.0
//! Location lookup port.

use crate::domain::location::LocationReport;
use futures_util::future::BoxFuture;
use thiserror::Error;

/// Errors that can occur while resolving a location.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocationError {
    /// The service is not configured (for example the API key is missing).
    #[error("location service unavailable: {0}")]
    Unavailable(String),

    /// The request could not be sent or timed out.
    #[error("location request failed: {0}")]
    Transport(String),

    /// The service answered with a non-success status.
    #[error("location service returned HTTP {status}: {message}")]
    Status { status: u16, message: String },

    /// The response body could not be decoded.
    #[error("malformed location response: {0}")]
    Decode(String),
}

/// Resolves a free-text address into a [`LocationReport`].
///
/// Implementations must not block; the returned future is driven by the
/// Iced runtime.
pub trait LocationLookup: Send + Sync {
    /// Looks up `query` and reports what the service found.
    fn locate(&self, query: &str) -> BoxFuture<'static, Result<LocationReport, LocationError>>;
}
