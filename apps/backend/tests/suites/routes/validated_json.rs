use actix_web::http::StatusCode;
use actix_web::{test, web};
use todo_backend::extractors::validated_json::JsonBodyLimit;
use todo_backend::routes;

use crate::common::assert_problem;
use crate::support::create_test_app;
use crate::support::factory::{list, seed};
use crate::support::test_state::build_test_state;

#[actix_web::test]
async fn malformed_json_is_bad_request() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::post()
        .uri("/")
        .insert_header(("content-type", "application/json"))
        .set_payload(r#"{"title": "buy milk", "done": }"#)
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_problem(resp, StatusCode::BAD_REQUEST, "BAD_REQUEST", Some("Invalid JSON at line 1")).await;
    assert!(list(&app, None).await.is_empty());
    Ok(())
}

#[actix_web::test]
async fn missing_field_is_named() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::post()
        .uri("/")
        .set_json(serde_json::json!({"title": "buy milk"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_problem(
        resp,
        StatusCode::BAD_REQUEST,
        "BAD_REQUEST",
        Some("missing field `done`"),
    )
    .await;
    Ok(())
}

#[actix_web::test]
async fn wrong_types_on_update_are_bad_request() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await;

    seed(&app, "buy milk", false).await;

    let req = test::TestRequest::put()
        .uri("/buy%20milk")
        .set_json(serde_json::json!({"title": "buy milk", "done": "yes"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_problem(resp, StatusCode::BAD_REQUEST, "BAD_REQUEST", Some("wrong types")).await;
    assert_eq!(
        list(&app, None).await,
        vec![serde_json::json!({"title": "buy milk", "done": false})]
    );
    Ok(())
}

#[actix_web::test]
async fn empty_body_is_bad_request() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::post().uri("/").to_request();
    let resp = test::call_service(&app, req).await;

    assert_problem(
        resp,
        StatusCode::BAD_REQUEST,
        "BAD_REQUEST",
        Some("unexpected end of input"),
    )
    .await;
    Ok(())
}

#[actix_web::test]
async fn oversized_body_is_bad_request() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state)
        .with_routes(|cfg| {
            cfg.app_data(web::Data::new(JsonBodyLimit(32)))
                .configure(routes::configure);
        })
        .build()
        .await;

    let long_title = "x".repeat(64);
    let req = test::TestRequest::post()
        .uri("/")
        .set_json(serde_json::json!({"title": long_title, "done": false}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_problem(
        resp,
        StatusCode::BAD_REQUEST,
        "BAD_REQUEST",
        Some("Request body exceeds 32 bytes"),
    )
    .await;
    Ok(())
}
