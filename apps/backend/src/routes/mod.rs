use actix_web::web;

pub mod todos;

/// Register every route on the app root.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(todos::configure_routes);
}
