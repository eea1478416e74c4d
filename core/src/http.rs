//! Plain-data HTTP types for the transport seam.
//!
//! # Design
//! The engine describes HTTP traffic as data: [`TaskApi`](crate::TaskApi)
//! builds `HttpRequest` values and parses `HttpResponse` values, and whatever
//! implements [`Transport`](crate::Transport) moves the bytes in between.
//! All fields are owned (`String`, `Vec`) so values can cross task boundaries
//! without lifetime concerns.

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Patch,
    Delete,
}

/// An HTTP request described as plain data.
///
/// Built by `TaskApi::build_*` methods; executed by a
/// [`Transport`](crate::Transport) implementation.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
///
/// Produced by a [`Transport`](crate::Transport) implementation after
/// executing an [`HttpRequest`], then handed to `TaskApi::parse_*` for status
/// checking and deserialization.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}
