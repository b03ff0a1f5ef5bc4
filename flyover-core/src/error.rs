///! Error types for the lookup chain

use thiserror::Error;

/// Failure of a single lookup step.
///
/// Every step reports exactly one of these; the chain in
/// [`crate::lookup::FlyoverClient::next_passes`] surfaces the first
/// failure to the caller unchanged.
#[derive(Debug, Error)]
pub enum LookupError {
    /// The HTTP call never completed (DNS, connect, TLS, timeout, or a
    /// broken body stream). Wraps the underlying client error.
    #[error("transport failure when fetching {what}: {source}")]
    Transport {
        what: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// The service answered with a non-success HTTP status code.
    #[error("status code {status} when fetching {what}. Response: {body}")]
    Status {
        what: &'static str,
        status: u16,
        body: String,
    },

    /// The geolocation service rejected the query through the `success`
    /// flag in its body rather than the HTTP status line.
    #[error("success status was {success}. Server message says: {message} when fetching for IP {ip}")]
    Rejected {
        success: bool,
        message: String,
        ip: String,
    },

    /// The response body was not the JSON shape the service documents.
    #[error("malformed {what} response: {source}")]
    Decode {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },
}
