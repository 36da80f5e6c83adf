use actix_web::{web, App, HttpServer};
use todo_backend::config::db::DbProfile;
use todo_backend::config::server::ServerConfig;
use todo_backend::error::AppError;
use todo_backend::extractors::validated_json::JsonBodyLimit;
use todo_backend::infra::lifespan::with_lifespan;
use todo_backend::infra::state::build_state;
use todo_backend::middleware::{RequestTrace, StructuredLogger, TraceSpan};
use todo_backend::routes;

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    let server_config = match ServerConfig::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("❌ {e}");
            std::process::exit(1);
        }
    };

    let result = with_lifespan(build_state().with_db(DbProfile::Prod), |app_state| async move {
        println!(
            "🚀 Serving to-do list on http://{}:{}",
            server_config.host, server_config.port
        );

        let data = web::Data::new(app_state);
        let body_limit = web::Data::new(JsonBodyLimit(server_config.max_json_payload_size));

        HttpServer::new(move || {
            App::new()
                .wrap(StructuredLogger)
                .wrap(TraceSpan)
                .wrap(RequestTrace)
                .app_data(data.clone())
                .app_data(body_limit.clone())
                .configure(routes::configure)
        })
        .bind((server_config.host.as_str(), server_config.port))
        .map_err(|e| AppError::config(format!("failed to bind listener: {e}")))?
        .run()
        .await
        .map_err(|e| AppError::internal(format!("server error: {e}")))
    })
    .await;

    if let Err(e) = result {
        eprintln!("❌ {e}");
        std::process::exit(1);
    }
    Ok(())
}
