use actix_web::{HttpResponse, Responder, get, post, web};
use serde::Deserialize;

use crate::db::DbPool;
use crate::forms::posts::{AddPostForm, AddPostFormPayload};
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services;

#[derive(Deserialize, Debug)]
struct SearchQueryParams {
    keyword: Option<String>,
    category: Option<String>,
    url: Option<String>,
}

#[get("/v1/posts/search")]
pub async fn api_v1_search_posts(
    params: web::Query<SearchQueryParams>,
    pool: web::Data<DbPool>,
) -> impl Responder {
    let repo = DieselRepository::new(pool.get_ref().clone());

    match services::posts::search_posts(
        params.keyword.as_deref().unwrap_or_default(),
        params.category.as_deref().unwrap_or_default(),
        params.url.as_deref().unwrap_or_default(),
        &repo,
    ) {
        Ok(posts) => HttpResponse::Ok().json(posts),
        Err(e) => error_response(e),
    }
}

#[get("/v1/posts/daily")]
pub async fn api_v1_daily_posts(pool: web::Data<DbPool>) -> impl Responder {
    let repo = DieselRepository::new(pool.get_ref().clone());

    match services::posts::latest_24h_posts(&repo) {
        Ok(posts) => HttpResponse::Ok().json(posts),
        Err(e) => error_response(e),
    }
}

#[derive(Deserialize, Debug)]
struct WeeklyQueryParams {
    category: Option<String>,
    tag: Option<String>,
}

#[get("/v1/posts/weekly")]
pub async fn api_v1_weekly_posts(
    params: web::Query<WeeklyQueryParams>,
    pool: web::Data<DbPool>,
) -> impl Responder {
    let repo = DieselRepository::new(pool.get_ref().clone());

    match services::posts::latest_7d_posts(
        params.category.as_deref(),
        params.tag.as_deref(),
        &repo,
    ) {
        Ok(posts) => HttpResponse::Ok().json(posts),
        Err(e) => error_response(e),
    }
}

#[get("/v1/posts/{id}")]
pub async fn api_v1_get_post(id: web::Path<i32>, pool: web::Data<DbPool>) -> impl Responder {
    let repo = DieselRepository::new(pool.get_ref().clone());

    match services::posts::get_post(id.into_inner(), &repo) {
        Ok(post) => HttpResponse::Ok().json(post),
        Err(e) => error_response(e),
    }
}

#[post("/v1/posts")]
pub async fn api_v1_add_post(
    form: web::Json<AddPostForm>,
    pool: web::Data<DbPool>,
) -> impl Responder {
    let payload = match AddPostFormPayload::try_from(form.into_inner()) {
        Ok(payload) => payload,
        Err(e) => return error_response(e.into()),
    };

    let repo = DieselRepository::new(pool.get_ref().clone());

    match services::posts::add_post(payload, &repo) {
        Ok(post) => HttpResponse::Created().json(post),
        Err(e) => error_response(e),
    }
}
