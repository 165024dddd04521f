use actix_web::{HttpResponse, Responder, get, web};
use serde::Deserialize;

use crate::db::DbPool;
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services;

#[derive(Deserialize, Debug)]
struct CategoriesQueryParams {
    /// Origin domain the category order is personalized for.
    domain: Option<String>,
}

#[get("/v1/categories")]
pub async fn api_v1_categories(
    params: web::Query<CategoriesQueryParams>,
    pool: web::Data<DbPool>,
) -> impl Responder {
    let repo = DieselRepository::new(pool.get_ref().clone());

    match services::categories::categories_ranked_for_origin(params.domain.as_deref(), &repo) {
        Ok(categories) => HttpResponse::Ok().json(categories),
        Err(e) => error_response(e),
    }
}
