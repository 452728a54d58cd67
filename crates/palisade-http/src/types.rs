//! HTTP types used at the transport boundary.

use bytes::Bytes;
use http_body_util::Full;
use palisade_core::ProblemResponse;

/// The HTTP request type used at the boundary.
pub type Request = http::Request<Full<Bytes>>;

/// The HTTP response type used at the boundary.
pub type Response = http::Response<Full<Bytes>>;

/// Content type for problem documents.
pub const PROBLEM_CONTENT_TYPE: &str = "application/problem+json";

/// The challenge header value sent with 401 responses.
pub const CHALLENGE: &str = "ApiKey";

/// Serializes a problem document into an HTTP response.
///
/// The status code comes from the document itself, the content type is
/// `application/problem+json`.
#[must_use]
pub fn problem_response(problem: &ProblemResponse) -> Response {
    let body = serde_json::to_vec(problem).expect("problem document serialization is infallible");

    http::Response::builder()
        .status(problem.status)
        .header(http::header::CONTENT_TYPE, PROBLEM_CONTENT_TYPE)
        .body(Full::new(Bytes::from(body)))
        .expect("failed to build problem response")
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::StatusCode;

    #[test]
    fn test_status_comes_from_document() {
        let response = problem_response(&ProblemResponse::forbidden("/users"));
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        assert_eq!(
            response.headers().get(http::header::CONTENT_TYPE).unwrap(),
            PROBLEM_CONTENT_TYPE
        );
    }

    #[test]
    fn test_unauthorized_document() {
        let response = problem_response(&ProblemResponse::unauthorized("/users"));
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
