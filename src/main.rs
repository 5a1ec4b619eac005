//! Task list HTTP server.
//!
//! All state is an in-memory map shared across workers; it resets on every
//! process restart.

use actix_web::{App, HttpServer, middleware, web};
use tasklist::config::Config;
use tasklist::handlers::{self, AppState};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env().map_err(std::io::Error::other)?;

    // construct the stores outside of `HttpServer::new` so they are shared
    // across all workers
    let state = AppState::new();

    log::info!(
        "starting HTTP server at http://{}:{}",
        config.bind_address,
        config.port
    );

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(middleware::Logger::default())
            .configure(handlers::configure_routes)
    })
    .bind((config.bind_address.as_str(), config.port))?
    .run()
    .await
}
