//! API Integration Tests

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    middleware, Router,
};
use serde_json::{json, Value};
use tower::util::ServiceExt;
use uuid::Uuid;

use coop_core::api::{self, AppState};

mod common;

fn app(db: &common::TestDb) -> Router {
    api::create_router()
        .layer(middleware::from_fn(api::middleware::logging_middleware))
        .layer(middleware::from_fn(api::middleware::tenant_middleware))
        .with_state(AppState::new(db.pool.clone(), db.broker.clone()))
}

fn request(t: &common::Tenant, method: &str, uri: &str, body: Option<Value>) -> Request<Body> {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("X-User-Id", t.user_id.to_string())
        .header("X-Organization-Id", t.organization_id.to_string())
        .header("X-Branch-Id", t.branch_id.to_string());

    match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

async fn json_body(response: axum::response::Response) -> Value {
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_bank_crud() {
    let db = common::setup_test_db().await;
    let t = common::create_tenant(&db.pool, "PH").await;
    let app = app(&db);

    // 1. Create
    let response = app
        .clone()
        .oneshot(request(
            &t,
            "POST",
            "/banks",
            Some(json!({ "name": "Security Bank", "description": "Universal bank" })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = json_body(response).await;
    let id = created["id"].as_str().unwrap().to_string();
    assert_eq!(created["name"], "Security Bank");
    assert_eq!(created["organization_id"], t.organization_id.to_string());

    // 2. Update
    let response = app
        .clone()
        .oneshot(request(
            &t,
            "PUT",
            &format!("/banks/{}", id),
            Some(json!({ "name": "Security Bank Corp", "description": "Universal bank" })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await["name"], "Security Bank Corp");

    // 3. List
    let response = app.clone().oneshot(request(&t, "GET", "/banks", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await.as_array().unwrap().len(), 1);

    // 4. Delete, then the row is gone
    let response = app
        .clone()
        .oneshot(request(&t, "DELETE", &format!("/banks/{}", id), None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app
        .clone()
        .oneshot(request(&t, "GET", &format!("/banks/{}", id), None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_rows_of_other_tenants_are_hidden() {
    let db = common::setup_test_db().await;
    let owner = common::create_tenant(&db.pool, "PH").await;
    let stranger = common::create_tenant(&db.pool, "PH").await;
    let app = app(&db);

    let response = app
        .clone()
        .oneshot(request(
            &owner,
            "POST",
            "/payment-types",
            Some(json!({ "name": "GCash", "description": "E-wallet", "number_of_days": 1, "type": "online" })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let id = json_body(response).await["id"].as_str().unwrap().to_string();

    let response = app
        .clone()
        .oneshot(request(&stranger, "GET", &format!("/payment-types/{}", id), None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .clone()
        .oneshot(request(&stranger, "DELETE", &format!("/payment-types/{}", id), None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_validation_and_headers() {
    let db = common::setup_test_db().await;
    let t = common::create_tenant(&db.pool, "PH").await;
    let app = app(&db);

    let response = app
        .clone()
        .oneshot(request(&t, "POST", "/companies", Some(json!({ "name": "" }))))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json_body(response).await["error_code"], "validation_failed");

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/banks")
                .header("X-User-Id", Uuid::new_v4().to_string())
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(response).await["error_code"], "missing_header");
}

#[tokio::test]
async fn test_seed_endpoints() {
    let db = common::setup_test_db().await;
    let t = common::create_tenant(&db.pool, "PH").await;
    common::insert_currency(&db.pool, "Philippine Peso", "PHP", "PH").await;
    let app = app(&db);

    let response = app.clone().oneshot(request(&t, "POST", "/seed", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let summary = json_body(response).await;
    assert_eq!(summary["accounts"], 7);

    let response = app
        .clone()
        .oneshot(request(&t, "GET", "/accounts/loan", None))
        .await
        .unwrap();
    let loans = json_body(response).await;
    let loans = loans.as_array().unwrap();
    assert_eq!(loans.len(), 2);
    assert!(loans.iter().all(|a| a["type"] == "Loan"));

    let response = app
        .clone()
        .oneshot(request(&t, "POST", "/seed/destroy", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await["accounts"], 7);

    let response = app.clone().oneshot(request(&t, "GET", "/accounts", None)).await.unwrap();
    assert!(json_body(response).await.as_array().unwrap().is_empty());

    // nothing was posted
    for uri in ["/general-ledger", "/member-accounting-ledgers"] {
        let response = app.clone().oneshot(request(&t, "GET", uri, None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(json_body(response).await.as_array().unwrap().is_empty());
    }
}

#[tokio::test]
async fn test_ledger_query_errors() {
    let db = common::setup_test_db().await;
    let t = common::create_tenant(&db.pool, "PH").await;
    let app = app(&db);

    let response = app
        .clone()
        .oneshot(request(
            &t,
            "GET",
            "/general-ledger/collections/unknown?date=2024-05-01",
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let uri = format!(
        "/general-ledger/daily-balances?account_id={}&from=2024-05-02&to=2024-05-01",
        Uuid::new_v4()
    );
    let response = app.clone().oneshot(request(&t, "GET", &uri, None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(response).await["error_code"], "invalid_range");

    // branch without a settings row
    let response = app
        .clone()
        .oneshot(request(
            &t,
            "GET",
            &format!("/general-ledger/transactions/{}", Uuid::new_v4()),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(json_body(response).await["error_code"], "branch_setting_not_found");
}

#[tokio::test]
async fn test_account_crud_validates_request() {
    let db = common::setup_test_db().await;
    let t = common::create_tenant(&db.pool, "PH").await;
    let app = app(&db);

    let response = app
        .clone()
        .oneshot(request(
            &t,
            "POST",
            "/accounts",
            Some(json!({
                "name": "Emergency Loan",
                "description": "Short-term loan",
                "type": "Loan",
                "general_ledger_type": "Assets",
                "cut_off_days": 31
            })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json_body(response).await["details"], "cut_off_days");

    let response = app
        .clone()
        .oneshot(request(
            &t,
            "POST",
            "/accounts",
            Some(json!({
                "name": "Emergency Loan",
                "description": "Short-term loan",
                "type": "Loan",
                "general_ledger_type": "Assets",
                "cut_off_days": 15
            })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = json_body(response).await;
    let id = created["id"].as_str().unwrap().to_string();
    assert_eq!(created["cut_off_days"], 15);
    assert_eq!(created["branch_id"], t.branch_id.to_string());

    let response = app
        .clone()
        .oneshot(request(
            &t,
            "PUT",
            &format!("/accounts/{}", id),
            Some(json!({
                "name": "Emergency Loan",
                "description": "Short-term loan",
                "type": "Loan",
                "fines_amort": "2.5"
            })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await["cut_off_days"], 0);

    // the static loan route still wins over /:id
    let response = app
        .clone()
        .oneshot(request(&t, "GET", "/accounts/loan", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await.as_array().unwrap().len(), 1);
}
