//! Error types for nwszoneslib

use thiserror::Error;

/// Errors that can occur while fetching zone data.
///
/// There is no retry machinery here: every variant is terminal for the run
/// and the caller's only recourse is to report it.
#[derive(Error, Debug)]
pub enum ZonesError {
    /// Transport-level failure (DNS resolution, connection refused, TLS, timeout)
    #[error("request to NWS API failed: {0}")]
    Network(#[source] reqwest::Error),

    /// The upstream service answered with a non-success status
    #[error("NWS API returned HTTP {status} for {url}")]
    Http { status: u16, url: String },

    /// The response body could not be read or parsed as the expected JSON shape
    #[error("failed to parse NWS API response: {0}")]
    Parse(#[source] reqwest::Error),
}
