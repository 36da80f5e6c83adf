#![allow(dead_code)]

// tests/common/mod.rs
use actix_web::body::BoxBody;
use actix_web::dev::ServiceResponse;
use actix_web::http::StatusCode;
use backend_test_support::problem_details::{
    assert_problem_details_from_service_response, ProblemDetailsLike,
};


// Logging is auto-installed for every binary that declares `mod common;`
#[ctor::ctor]
fn init_logging() {
    backend_test_support::logging::init();
}

// Handlers span several requests per test, so commit is the default here.
// Flip a whole binary with `TODO_TXN_POLICY=rollback`.
#[ctor::ctor]
fn init_txn_policy() {
    let policy = match std::env::var("TODO_TXN_POLICY")
        .unwrap_or_default()
        .to_lowercase()
        .as_str()
    {
        "rollback" => todo_backend::db::txn_policy::TxnPolicy::RollbackOnOk,
        _ => todo_backend::db::txn_policy::TxnPolicy::CommitOnOk,
    };

    todo_backend::db::txn_policy::set_txn_policy(policy);
}

/// Problem details contract plus the to-do specific `type` URL.
pub async fn assert_problem(
    resp: ServiceResponse<BoxBody>,
    expected_status: StatusCode,
    expected_code: &str,
    expected_detail: Option<&str>,
) -> ProblemDetailsLike {
    let problem = assert_problem_details_from_service_response(
        resp,
        expected_code,
        expected_status,
        expected_detail,
    )
    .await;

    assert_eq!(
        problem.type_,
        format!("https://todo.local/errors/{expected_code}")
    );
    assert!(!problem.title.is_empty(), "title should be present");
    problem
}
