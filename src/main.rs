use std::io;

use actix_web::{App, HttpServer, web};

use cliplog::db::establish_connection_pool;
use cliplog::models::config::ServerConfig;
use cliplog::routes::categories::api_v1_categories;
use cliplog::routes::posts::{
    api_v1_add_post, api_v1_daily_posts, api_v1_get_post, api_v1_search_posts,
    api_v1_weekly_posts,
};
use cliplog::routes::tags::api_v1_tags;

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config: ServerConfig = config::Config::builder()
        .set_default("database_url", "cliplog.db")
        .map_err(io::Error::other)?
        .set_default("bind_address", "127.0.0.1:8080")
        .map_err(io::Error::other)?
        .add_source(config::File::with_name("config").required(false))
        .add_source(config::Environment::default())
        .build()
        .map_err(io::Error::other)?
        .try_deserialize()
        .map_err(io::Error::other)?;

    let pool = establish_connection_pool(&config.database_url).map_err(io::Error::other)?;

    log::info!("Starting cliplog on {}", config.bind_address);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(pool.clone()))
            .service(api_v1_search_posts)
            .service(api_v1_daily_posts)
            .service(api_v1_weekly_posts)
            .service(api_v1_get_post)
            .service(api_v1_add_post)
            .service(api_v1_categories)
            .service(api_v1_tags)
    })
    .bind(config.bind_address)?
    .run()
    .await
}
