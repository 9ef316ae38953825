use async_graphql::{Response, ServerError};
use axum::Json;
use axum::http::StatusCode;

pub const MISSING_QUERY: &str = "No query string was present";

/// A GraphQL result, always sent with 200.
pub fn success(result: Response) -> (StatusCode, Json<Response>) {
    (StatusCode::OK, Json(result))
}

/// A `{"data": null, "errors": [{"message": ...}]}` envelope with the given status.
pub fn error(status: StatusCode, message: String) -> (StatusCode, Json<Response>) {
    (status, Json(Response::from_errors(vec![ServerError::new(message, None)])))
}
