use actix_web::http::StatusCode;
use actix_web::test;
use backend_test_support::unique_helpers::unique_title;
use serde_json::{json, Value};

use crate::common::assert_problem;
use crate::support::create_test_app;
use crate::support::factory::{create_req, list, seed};
use crate::support::test_state::build_test_state;

#[actix_web::test]
async fn create_returns_201_with_item() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await;

    let resp = test::call_service(&app, create_req("buy milk", false)).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"title": "buy milk", "done": false}));
    Ok(())
}

#[actix_web::test]
async fn duplicate_title_conflicts_and_keeps_original() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await;

    seed(&app, "buy milk", false).await;

    let resp = test::call_service(&app, create_req("buy milk", true)).await;
    assert_problem(
        resp,
        StatusCode::CONFLICT,
        "TODO_TITLE_TAKEN",
        Some("TODO 'buy milk' already exists"),
    )
    .await;

    assert_eq!(
        list(&app, None).await,
        vec![json!({"title": "buy milk", "done": false})]
    );
    Ok(())
}

#[actix_web::test]
async fn titles_are_case_sensitive() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await;

    seed(&app, "Buy milk", false).await;
    seed(&app, "buy milk", false).await;

    assert_eq!(list(&app, None).await.len(), 2);
    Ok(())
}

#[actix_web::test]
async fn empty_title_is_accepted() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await;

    seed(&app, "", true).await;

    assert_eq!(list(&app, None).await, vec![json!({"title": "", "done": true})]);
    Ok(())
}

#[actix_web::test]
async fn many_unique_titles_all_persist() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await;

    let titles: Vec<String> = (0..5).map(|_| unique_title("chore")).collect();
    for t in &titles {
        seed(&app, t, false).await;
    }

    let listed: Vec<String> = list(&app, None)
        .await
        .into_iter()
        .filter_map(|v| v["title"].as_str().map(str::to_string))
        .collect();
    for t in &titles {
        assert!(listed.contains(t), "missing {t}");
    }
    Ok(())
}
