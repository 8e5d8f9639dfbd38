//! HTTP client types for Mailgun API communication.
//!
//! This module provides the foundational HTTP layer for making authenticated
//! requests to the Mailgun API.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`HttpClient`]: The async client that authenticates and classifies responses
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: The status, headers and body returned by the API
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PUT, DELETE)
//! - [`FormBody`]: Form-url-encoded request bodies
//! - [`Transport`]: The pluggable network seam, with [`ReqwestTransport`] as default
//!
//! # Retry Behavior
//!
//! The client never retries. Each call to [`HttpClient::request`] performs at
//! most one round trip; retry policy, if wanted, belongs to a custom
//! [`Transport`] or to the caller.

mod errors;
mod http_client;
mod http_request;
mod http_response;
mod transport;

pub use errors::{
    DecodeError, HttpError, HttpResponseError, InvalidHttpRequestError, TransportError,
};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{FormBody, HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;
pub use transport::{ReqwestTransport, ReqwestTransportBuilder, Transport, TransportRequest};
