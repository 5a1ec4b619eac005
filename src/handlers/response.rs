//! Extractor error handlers.
//!
//! actix-web answers malformed path, query, and JSON input with 400 by
//! default; this API's contract is 422 with a `detail` array carrying one
//! entry per offending field, so each extractor gets a custom handler.

use actix_web::error::{InternalError, JsonPayloadError, PathError, QueryPayloadError};
use actix_web::{HttpRequest, HttpResponse};
use serde_json::json;

fn detail_response(loc: Vec<String>, msg: String, kind: &str) -> HttpResponse {
    HttpResponse::UnprocessableEntity().json(json!({
        "detail": [{
            "loc": loc,
            "msg": msg,
            "type": kind,
        }]
    }))
}

/// Build a 422 for an undeserializable JSON body (wrong field type, unknown
/// field, or syntactically invalid JSON).
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let response = match &err {
        JsonPayloadError::Deserialize(e) => {
            detail_response(vec!["body".to_string()], e.to_string(), "validation_error")
        }
        other => detail_response(vec!["body".to_string()], other.to_string(), "json_error"),
    };
    InternalError::from_response(err, response).into()
}

/// Build a 422 for a malformed path parameter. The only path parameters are
/// record ids, so the loc names the matched segment.
pub fn path_error_handler(err: PathError, req: &HttpRequest) -> actix_web::Error {
    let mut loc = vec!["path".to_string()];
    if let Some((name, _)) = req.match_info().iter().next() {
        loc.push(name.to_string());
    }
    let response = detail_response(loc, err.to_string(), "type_error.uuid");
    InternalError::from_response(err, response).into()
}

/// Build a 422 for a query parameter that fails to parse, e.g.
/// `?completed=banana` on the list endpoint.
pub fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let response = detail_response(vec!["query".to_string()], err.to_string(), "type_error.bool");
    InternalError::from_response(err, response).into()
}
