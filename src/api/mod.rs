use utoipa_actix_web::{scope, service_config::ServiceConfig};

mod controllers;
mod dto;
mod error;
mod middlewares;

pub fn routes(cfg: &mut ServiceConfig) {
    cfg.service(
        scope("/api/users")
            .configure(controllers::account::routes)
            .configure(controllers::recipient_list::routes)
            .configure(controllers::template::routes)
            .configure(controllers::email::routes)
            .configure(controllers::suggestion::routes),
    );
}
