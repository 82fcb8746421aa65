//! Error types for the probe pipeline.
//!
//! `TransportError` covers the socket layer: nothing usable ever came back.
//! `ProbeError` covers everything after bytes arrived: malformed responses,
//! missing headers, bad URLs, and an empty selection. `InitializationError`
//! covers process-wide setup. Absent headers and empty listings are explicit
//! variants here rather than panics, so callers can tell "the server said
//! nothing useful" apart from "the program is broken".

use thiserror::Error;

/// Errors raised while standing up process-wide facilities.
#[derive(Error, Debug)]
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] log::SetLoggerError),
}

/// Socket-level failures: the request never produced response bytes.
#[derive(Error, Debug)]
pub enum TransportError {
    /// TCP connect failed.
    #[error("Failed to connect to {host}:{port}: {source}")]
    Connect {
        /// Host the connect was aimed at.
        host: String,
        /// Port the connect was aimed at.
        port: u16,
        /// Underlying socket error.
        source: std::io::Error,
    },

    /// TCP connect did not complete in time.
    #[error("Timed out connecting to {host}:{port} after {secs}s")]
    ConnectTimeout {
        /// Host the connect was aimed at.
        host: String,
        /// Port the connect was aimed at.
        port: u16,
        /// Timeout that elapsed.
        secs: u64,
    },

    /// Host name is not usable as a TLS server name.
    #[error("Invalid TLS server name: {host}")]
    InvalidServerName {
        /// Offending host name.
        host: String,
    },

    /// TLS handshake failed.
    #[error("TLS handshake with {host} failed: {source}")]
    Tls {
        /// Host the handshake was with.
        host: String,
        /// Underlying handshake error.
        source: std::io::Error,
    },

    /// TLS handshake did not complete in time.
    #[error("Timed out in TLS handshake with {host} after {secs}s")]
    HandshakeTimeout {
        /// Host the handshake was with.
        host: String,
        /// Timeout that elapsed.
        secs: u64,
    },

    /// Write or read on an established connection failed.
    #[error("I/O error talking to {host}: {source}")]
    Io {
        /// Host the exchange was with.
        host: String,
        /// Underlying socket error.
        source: std::io::Error,
    },

    /// The response did not finish arriving in time.
    #[error("Timed out waiting for a response from {host} after {secs}s")]
    ReadTimeout {
        /// Host the exchange was with.
        host: String,
        /// Timeout that elapsed.
        secs: u64,
    },

    /// The peer closed the connection without sending a single byte.
    #[error("{host}:{port} closed the connection before sending any data")]
    EmptyResponse {
        /// Host that went silent.
        host: String,
        /// Port that went silent.
        port: u16,
    },
}

/// Failures while interpreting responses or walking the per-image probe chain.
#[derive(Error, Debug)]
pub enum ProbeError {
    /// The socket layer failed underneath the probe.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// No line follows the blank header/body separator, or no separator exists.
    #[error("Response has no body line after the header separator")]
    MissingBody,

    /// A header the probe depends on is absent.
    #[error("Response has no {name} header")]
    MissingHeader {
        /// Name of the absent header.
        name: &'static str,
    },

    /// The Content-Length value is not a non-negative integer.
    #[error("Invalid Content-Length value {value:?}: {source}")]
    InvalidContentLength {
        /// Raw header value.
        value: String,
        /// Parse failure detail.
        source: std::num::ParseIntError,
    },

    /// The listing body is not valid JSON.
    #[error("Malformed listing JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// An image or redirect URL did not parse.
    #[error("Malformed URL {url:?}: {source}")]
    InvalidUrl {
        /// Offending URL text.
        url: String,
        /// Parse failure detail.
        source: url::ParseError,
    },

    /// A URL parsed but carries no host to connect to.
    #[error("URL has no host: {url}")]
    UrlWithoutHost {
        /// Offending URL.
        url: String,
    },

    /// The listing yielded zero pictures, so there is no largest one.
    #[error("The listing produced no pictures to compare")]
    NoPictures,
}
