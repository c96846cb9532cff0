mod config;
mod database;
mod handlers;
mod middleware;
mod models;
mod requests;
mod routes;
mod services;
mod utils;

use actix_cors::Cors;
use actix_files::Files;
use actix_web::{App, HttpServer, web};
use config::SETTINGS;
use dotenv::dotenv;
use services::storage::MediaStorage;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let pool = database::connection::establish_pool(&SETTINGS.database_url).await?;
    sqlx::migrate!().run(&pool).await?;
    database::seed::run(&pool).await?;

    std::fs::create_dir_all(&SETTINGS.uploads_dir)?;
    let storage = MediaStorage::new(&SETTINGS.uploads_dir);

    info!("Starting server on {}:{}", SETTINGS.host, SETTINGS.port);

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .app_data(web::Data::new(pool.clone()))
            .app_data(web::Data::new(storage.clone()))
            .service(web::scope("/api").configure(routes::api::scoped_config))
            .service(Files::new("/uploads", &SETTINGS.uploads_dir))
    })
    .bind((SETTINGS.host.as_str(), SETTINGS.port))?
    .run()
    .await?;

    Ok(())
}
