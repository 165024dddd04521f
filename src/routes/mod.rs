use actix_web::HttpResponse;

use crate::services::ServiceError;

pub mod categories;
pub mod posts;
pub mod tags;

/// Maps a service failure onto the HTTP response the API contract promises:
/// storage trouble is a generic server error, empty results never reach here.
pub fn error_response(err: ServiceError) -> HttpResponse {
    match err {
        ServiceError::NotFound => HttpResponse::NotFound().finish(),
        ServiceError::Conflict => HttpResponse::Conflict().finish(),
        ServiceError::Form(message) => HttpResponse::BadRequest().body(message),
        ServiceError::Internal => HttpResponse::InternalServerError().finish(),
    }
}
