/// Envelope responder for JSON API routes
use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::fmt;
use todo_core::Envelope;

const JSON_UTF8: &str = "application/json; charset=utf-8";

/// A payload wrapped in the standard `{status, timestamp, data}` envelope.
///
/// Always answers with `Content-Type: application/json`.
#[derive(Debug)]
pub struct Enveloped {
    status: StatusCode,
    envelope: Envelope,
}

impl Enveloped {
    pub fn new<T>(data: &T, status: StatusCode) -> Self
    where
        T: Serialize + fmt::Debug + ?Sized,
    {
        Self {
            status,
            envelope: Envelope::wrap(data, status.as_u16()),
        }
    }

    /// 200 with `data`
    pub fn ok<T>(data: &T) -> Self
    where
        T: Serialize + fmt::Debug + ?Sized,
    {
        Self::new(data, StatusCode::OK)
    }

    pub fn envelope(&self) -> &Envelope {
        &self.envelope
    }
}

impl IntoResponse for Enveloped {
    fn into_response(self) -> Response {
        // Value-backed envelopes always serialize
        let body = serde_json::to_vec(&self.envelope).unwrap_or_else(|e| {
            tracing::error!("Envelope serialization failed: {}", e);
            br#"{"error":"Unserializable data"}"#.to_vec()
        });

        (
            self.status,
            [(header::CONTENT_TYPE, HeaderValue::from_static(JSON_UTF8))],
            body,
        )
            .into_response()
    }
}
