//! HTTP API module
//!
//! `rest` holds the JSON handlers and response envelopes; `http` wires the
//! router, CORS, and request tracking middleware.

pub mod http;
pub mod rest;
