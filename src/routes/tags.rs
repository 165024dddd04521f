use actix_web::{HttpResponse, Responder, get, web};

use crate::db::DbPool;
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services;

#[get("/v1/tags")]
pub async fn api_v1_tags(pool: web::Data<DbPool>) -> impl Responder {
    let repo = DieselRepository::new(pool.get_ref().clone());

    match services::tags::all_tags(&repo) {
        Ok(tags) => HttpResponse::Ok().json(tags),
        Err(e) => error_response(e),
    }
}
