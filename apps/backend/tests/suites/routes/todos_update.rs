use actix_web::http::StatusCode;
use actix_web::test;
use backend_test_support::unique_helpers::unique_title;
use serde_json::{json, Value};

use crate::common::assert_problem;
use crate::support::create_test_app;
use crate::support::factory::{list, seed, update_req};
use crate::support::test_state::build_test_state;

#[actix_web::test]
async fn update_overwrites_both_fields() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await;

    seed(&app, "buy milk", false).await;

    let resp = test::call_service(&app, update_req("buy milk", "buy oat milk", true)).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"title": "buy oat milk", "done": true}));

    assert_eq!(
        list(&app, None).await,
        vec![json!({"title": "buy oat milk", "done": true})]
    );
    Ok(())
}

#[actix_web::test]
async fn update_done_only_keeps_title() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await;

    let title = unique_title("water plants");
    seed(&app, &title, false).await;

    let resp = test::call_service(&app, update_req(&title, &title, true)).await;
    assert_eq!(resp.status(), StatusCode::OK);

    assert_eq!(
        list(&app, Some(true)).await,
        vec![json!({"title": title, "done": true})]
    );
    Ok(())
}

#[actix_web::test]
async fn update_missing_is_404_and_creates_nothing() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await;

    let resp = test::call_service(&app, update_req("ghost", "x", true)).await;
    assert_problem(
        resp,
        StatusCode::NOT_FOUND,
        "TODO_NOT_FOUND",
        Some("TODO 'ghost' not found"),
    )
    .await;

    assert!(list(&app, None).await.is_empty());
    Ok(())
}

#[actix_web::test]
async fn update_with_current_values_is_idempotent() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await;

    seed(&app, "buy milk", true).await;

    for _ in 0..2 {
        let resp = test::call_service(&app, update_req("buy milk", "buy milk", true)).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    assert_eq!(
        list(&app, None).await,
        vec![json!({"title": "buy milk", "done": true})]
    );
    Ok(())
}

#[actix_web::test]
async fn rename_onto_existing_title_is_storage_fault() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await;

    seed(&app, "a", false).await;
    seed(&app, "b", true).await;

    let resp = test::call_service(&app, update_req("a", "b", false)).await;
    assert_problem(
        resp,
        StatusCode::INTERNAL_SERVER_ERROR,
        "DB_ERROR",
        None,
    )
    .await;

    assert_eq!(
        list(&app, None).await,
        vec![
            json!({"title": "a", "done": false}),
            json!({"title": "b", "done": true}),
        ]
    );
    Ok(())
}

#[actix_web::test]
async fn old_title_is_gone_after_rename() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await;

    seed(&app, "draft", false).await;
    let resp = test::call_service(&app, update_req("draft", "final", false)).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = test::call_service(&app, update_req("draft", "again", false)).await;
    assert_problem(
        resp,
        StatusCode::NOT_FOUND,
        "TODO_NOT_FOUND",
        Some("TODO 'draft' not found"),
    )
    .await;
    Ok(())
}
