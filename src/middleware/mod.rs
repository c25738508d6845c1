// ABOUTME: HTTP middleware for CORS and request correlation
// ABOUTME: Request ID generation, per-request tracing spans, and the request context extractor
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod cors;
pub mod request_id;

// CORS configuration
pub use cors::setup_cors;

// Request tracing and context management
pub use request_id::{create_request_span, PrefixedRequestId, RequestContext, REQUEST_ID_HEADER};
