//! Fallback policy: upstream failures become shape-preserving placeholder replies.
//!
//! Every client returns an [`Outcome`] instead of raising. The placeholder in
//! `Outcome::Fallback` always has the same shape as a generated reply, so the
//! HTTP layer serializes both the same way and only flags the degraded one
//! with an `x-fallback` header.

use axum::{
    http::HeaderValue,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::debug;

pub const FALLBACK_HEADER: &str = "x-fallback";

/// Result of one upstream round trip: the real reply, or a placeholder plus
/// the reason the real reply could not be used.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    Generated(T),
    Fallback { value: T, reason: String },
}

impl<T> Outcome<T> {
    #[cfg(test)]
    pub fn value(&self) -> &T {
        match self {
            Outcome::Generated(value) | Outcome::Fallback { value, .. } => value,
        }
    }

    pub fn into_value(self) -> T {
        match self {
            Outcome::Generated(value) | Outcome::Fallback { value, .. } => value,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Outcome::Fallback { .. })
    }

    pub fn reason(&self) -> Option<&str> {
        match self {
            Outcome::Generated(_) => None,
            Outcome::Fallback { reason, .. } => Some(reason),
        }
    }

    /// Reshapes the payload while keeping the generated/fallback marker.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Outcome::Generated(value) => Outcome::Generated(f(value)),
            Outcome::Fallback { value, reason } => Outcome::Fallback {
                value: f(value),
                reason,
            },
        }
    }
}

impl<T: Serialize> IntoResponse for Outcome<T> {
    fn into_response(self) -> Response {
        let degraded = self.is_fallback();
        if let Some(reason) = self.reason() {
            debug!(reason, "Responding with fallback payload");
        }
        let mut response = Json(self.into_value()).into_response();
        if degraded {
            response
                .headers_mut()
                .insert(FALLBACK_HEADER, HeaderValue::from_static("true"));
        }
        response
    }
}
