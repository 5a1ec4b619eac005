#![allow(dead_code)]
//! Shared helpers for the integration tests.

mod assertions;
mod builders;
mod setup;

pub use assertions::*;
pub use builders::*;
pub use setup::*;

/// Build an actix test service wired exactly like the production app.
macro_rules! test_service {
    ($state:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(actix_web::web::Data::new($state.clone()))
                .configure(tasklist::handlers::configure_routes),
        )
        .await
    };
}
