//! Route table.

use super::handlers;
use super::models::MessageResponse;
use actix_web::{HttpResponse, error::InternalError, web};

/// Registers every API route.
///
/// Malformed JSON bodies and query strings are answered with a 400 and a
/// `{ "message": ... }` body like every other error.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        let body = MessageResponse::new(err.to_string());
        InternalError::from_response(err, HttpResponse::BadRequest().json(body)).into()
    }))
    .app_data(web::QueryConfig::default().error_handler(|err, _req| {
        let body = MessageResponse::new(err.to_string());
        InternalError::from_response(err, HttpResponse::BadRequest().json(body)).into()
    }))
    .route("/", web::get().to(handlers::health))
    .service(
        web::scope("/api/tasks")
            .route("", web::get().to(handlers::list_tasks))
            .route("", web::post().to(handlers::create_task))
            .route("/project/{project_id}", web::get().to(handlers::list_project_tasks))
            .route(
                "/project/{project_id}",
                web::delete().to(handlers::delete_project_tasks),
            )
            .route("/{id}", web::get().to(handlers::get_task))
            .route("/{id}", web::put().to(handlers::update_task))
            .route("/{id}", web::delete().to(handlers::delete_task)),
    )
    .service(
        web::scope("/api/projects")
            .route("", web::get().to(handlers::list_projects))
            .route("", web::post().to(handlers::create_project))
            .route("/{id}", web::get().to(handlers::get_project))
            .route("/{id}", web::put().to(handlers::update_project))
            .route("/{id}", web::delete().to(handlers::delete_project)),
    )
    .service(
        web::scope("/api/board")
            .route("", web::get().to(handlers::board))
            .route("/move", web::post().to(handlers::move_task)),
    );
}
