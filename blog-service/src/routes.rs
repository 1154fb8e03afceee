/// Route table for the HTTP API.
///
/// Shared between `main` and the test harness so both exercise the same
/// paths and middleware.
use crate::config::Config;
use crate::handlers;
use crate::middleware::BearerAuth;
use actix_web::web;

pub fn configure_api(cfg: &mut web::ServiceConfig, config: &Config) {
    cfg.route("/api/v1/health", web::get().to(handlers::health_summary))
        .route("/api/v1/health/live", web::get().to(handlers::liveness_check))
        .service(
            web::scope("/api/v1")
                .wrap(BearerAuth::new(&config.auth.jwt_secret))
                .service(
                    web::scope("/posts")
                        .service(
                            web::resource("")
                                .route(web::get().to(handlers::index))
                                .route(web::post().to(handlers::create_post)),
                        )
                        .route("/new", web::get().to(handlers::new_post_form))
                        .route("/{post_id}/edit", web::get().to(handlers::edit_post_form))
                        .route("/{post_id}/comments", web::post().to(handlers::add_comment))
                        .service(
                            web::resource("/{post_id}")
                                .route(web::get().to(handlers::post_detail))
                                .route(web::put().to(handlers::update_post)),
                        ),
                )
                .service(
                    web::scope("/groups")
                        .route("/{slug}/posts", web::get().to(handlers::group_posts)),
                )
                .service(
                    web::scope("/users").route("/{username}", web::get().to(handlers::profile)),
                ),
        );
}
