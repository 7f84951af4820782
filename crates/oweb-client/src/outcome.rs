//! Success/failure result of a single remote call.

use serde::Serialize;

/// A non-200 response, kept verbatim for reporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HttpFailure {
    /// HTTP status code.
    pub status: u16,
    /// Raw response body text.
    pub body: String,
}

/// Outcome of one API call that reached the server.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    /// The server answered `200 OK` with a parseable payload.
    Success(T),
    /// The server answered with any other status.
    Failure(HttpFailure),
}

impl<T> Outcome<T> {
    /// Whether the call succeeded.
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    /// The payload, if the call succeeded.
    pub fn success(self) -> Option<T> {
        match self {
            Outcome::Success(value) => Some(value),
            Outcome::Failure(_) => None,
        }
    }

    /// The failure, if the call did not succeed.
    pub fn failure(&self) -> Option<&HttpFailure> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Failure(failure) => Some(failure),
        }
    }

    /// Map the success payload.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Outcome::Success(value) => Outcome::Success(f(value)),
            Outcome::Failure(failure) => Outcome::Failure(failure),
        }
    }
}
