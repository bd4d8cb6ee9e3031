// ABOUTME: HTTP middleware for CORS and request tracing
// ABOUTME: Layers applied to the whole router by the server
//
// SPDX-License-Identifier: MIT OR Apache-2.0

/// CORS configuration
pub mod cors;
/// Request id generation and per-request tracing spans
pub mod tracing;

pub use cors::setup_cors;
pub use tracing::{propagate_request_id_layer, request_trace_layer, set_request_id_layer};
