//! Request-id middleware for the REST service.
//!
//! Every request gets an `x-request-id` (generated when the caller sent none)
//! and the same id is echoed on the response so UI error reports can be matched
//! to server logs.

use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};

/// Header carrying the request identifier.
pub const HEADER_REQUEST_ID: &str = "x-request-id";

/// Layer that assigns a UUID request id when the header is absent.
#[must_use]
pub fn set_request_id_layer() -> SetRequestIdLayer<MakeRequestUuid> {
    SetRequestIdLayer::x_request_id(MakeRequestUuid)
}

/// Layer that copies the request id onto the response.
#[must_use]
pub fn propagate_request_id_layer() -> PropagateRequestIdLayer {
    PropagateRequestIdLayer::x_request_id()
}
