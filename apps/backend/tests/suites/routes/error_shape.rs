use actix_web::http::StatusCode;
use actix_web::{test, web, HttpResponse};
use todo_backend::infra::state::build_state;
use todo_backend::{AppError, ErrorCode};

use crate::common::assert_problem;
use crate::support::create_test_app;
use crate::support::factory::{create_req, list_req, update_req};

async fn fail_not_found() -> Result<HttpResponse, AppError> {
    Err(AppError::not_found(ErrorCode::TodoNotFound, "TODO 'x' not found"))
}

async fn fail_db() -> Result<HttpResponse, AppError> {
    Err(AppError::db("Database operation failed"))
}

async fn fail_timeout() -> Result<HttpResponse, AppError> {
    Err(AppError::Timeout {
        detail: "Database timeout".to_string(),
    })
}

async fn fail_internal() -> Result<HttpResponse, AppError> {
    Err(AppError::internal("boom"))
}

// handler-only: validates error shape; no DB
#[actix_web::test]
async fn all_error_kinds_render_problem_details() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_state().build().await?;
    let app = create_test_app(state)
        .with_routes(|cfg| {
            cfg.route("/_test/not_found", web::get().to(fail_not_found))
                .route("/_test/db", web::get().to(fail_db))
                .route("/_test/timeout", web::get().to(fail_timeout))
                .route("/_test/internal", web::get().to(fail_internal));
        })
        .build()
        .await;

    let cases = [
        ("/_test/not_found", StatusCode::NOT_FOUND, "TODO_NOT_FOUND", "TODO 'x' not found"),
        ("/_test/db", StatusCode::INTERNAL_SERVER_ERROR, "DB_ERROR", "Database operation failed"),
        ("/_test/timeout", StatusCode::GATEWAY_TIMEOUT, "DB_TIMEOUT", "Database timeout"),
        ("/_test/internal", StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR", "boom"),
    ];

    for (uri, status, code, detail) in cases {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_problem(resp, status, code, Some(detail)).await;
    }
    Ok(())
}

#[actix_web::test]
async fn every_route_without_db_is_503() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_state().build().await?;
    let app = create_test_app(state).with_prod_routes().build().await;

    for req in [
        list_req(None),
        create_req("buy milk", false),
        update_req("buy milk", "buy milk", true),
    ] {
        let resp = test::call_service(&app, req).await;
        assert_problem(
            resp,
            StatusCode::SERVICE_UNAVAILABLE,
            "DB_UNAVAILABLE",
            Some("Database unavailable"),
        )
        .await;
    }
    Ok(())
}

#[actix_web::test]
async fn problem_title_is_humanized_code() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_state().build().await?;
    let app = create_test_app(state)
        .with_routes(|cfg| {
            cfg.route("/_test/not_found", web::get().to(fail_not_found));
        })
        .build()
        .await;

    let req = test::TestRequest::get().uri("/_test/not_found").to_request();
    let resp = test::call_service(&app, req).await;
    let problem = assert_problem(resp, StatusCode::NOT_FOUND, "TODO_NOT_FOUND", None).await;
    assert_eq!(problem.title, "Todo Not Found");
    assert_eq!(problem.status, 404);
    Ok(())
}
