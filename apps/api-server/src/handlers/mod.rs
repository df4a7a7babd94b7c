//! HTTP handlers and route configuration.

mod info;
mod posts;


use actix_web::web;

use crate::middleware::error::AppError;

/// Configure all application routes.
///
/// Body and path extraction failures are turned into 400 responses before
/// any handler runs.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into()),
    )
    .app_data(
        web::PathConfig::default()
            .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into()),
    )
    .route("/info", web::get().to(info::blog_info))
    .service(
        web::scope("/posts")
            .service(
                web::resource("")
                    .route(web::get().to(posts::list))
                    .route(web::post().to(posts::create)),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(posts::get))
                    .route(web::put().to(posts::update))
                    .route(web::delete().to(posts::delete)),
            ),
    );
}
