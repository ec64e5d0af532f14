use std::collections::BTreeMap;

use axum::http::{Method, StatusCode};
use sea_orm::{MockExecResult, Value};
use serde_json::json;

use crate::test_support::*;
use campus_db::entities::{payments, students};

fn tuition_body(student_id: &str) -> serde_json::Value {
    json!({
        "receipt_no": "R-2001",
        "year": 2024,
        "date": "2024-03-12",
        "student_id": student_id,
        "fee_type": "TUITION FEE",
        "month": "March",
        "amount": "500"
    })
}

#[tokio::test]
async fn test_list_is_paginated() {
    let db = mock_db()
        .append_query_results([[BTreeMap::from([("num_items", Value::BigInt(Some(45)))])]])
        .append_query_results([vec![payment("S1", "TUITION FEE", 2024, json!("March"))]])
        .into_connection();
    let app = app(db, date(2024, 3, 15));

    let (status, body) = send(
        app,
        Method::GET,
        "/api/v1/payments?student_id=S1&page=3&per_page=20",
        Some(&token("Class Teacher")),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["meta"]["total"], 45);
    assert_eq!(body["meta"]["total_pages"], 3);
    assert_eq!(body["meta"]["page"], 3);
    assert_eq!(body["data"][0]["fee_type"], "TUITION FEE");
}

#[tokio::test]
async fn test_create_requires_accounts_officer() {
    let app = app(mock_db().into_connection(), date(2024, 3, 15));
    let (status, _) = send(
        app,
        Method::POST,
        "/api/v1/payments",
        Some(&token("Admin")),
        Some(tuition_body("S1")),
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_create_for_unknown_student() {
    let db = mock_db()
        .append_query_results([Vec::<students::Model>::new()])
        .into_connection();
    let app = app(db, date(2024, 3, 15));

    let (status, body) = send(
        app,
        Method::POST,
        "/api/v1/payments",
        Some(&token("Accounts Officer")),
        Some(tuition_body("s404")),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Student with ID S404 not found.");
}

#[tokio::test]
async fn test_create_student_payment() {
    let db = mock_db()
        .append_query_results([vec![student("S1", 6, "GOLAP", 1, Some("January"))]])
        .append_query_results([vec![payment("S1", "TUITION FEE", 2024, json!("March"))]])
        .into_connection();
    let app = app(db, date(2024, 3, 15));

    let (status, body) = send(
        app,
        Method::POST,
        "/api/v1/payments",
        Some(&token("Accounts Officer")),
        Some(tuition_body("S1")),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["student_id"], "S1");
    assert_eq!(body[0]["month"], "March");
}

#[tokio::test]
async fn test_class_payment_skips_student_lookup() {
    let db = mock_db()
        .append_query_results([vec![payment("CLASS-6-GOLAP", "DIARY", 2024, json!(["March"]))]])
        .into_connection();
    let app = app(db, date(2024, 3, 15));

    let mut request = tuition_body("CLASS-6-GOLAP");
    request["fee_type"] = json!("DIARY");
    request["month"] = json!(["March"]);

    let (status, body) = send(
        app,
        Method::POST,
        "/api/v1/payments",
        Some(&token("Accounts Officer")),
        Some(request),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["student_id"], "CLASS-6-GOLAP");
    assert_eq!(body[0]["month"], json!(["March"]));
}

#[tokio::test]
async fn test_several_months_are_recorded_one_per_payment() {
    let db = mock_db()
        .append_query_results([vec![student("S1", 6, "GOLAP", 1, Some("January"))]])
        .append_query_results([vec![payment("S1", "TUITION FEE", 2024, json!("January"))]])
        .append_query_results([vec![payment("S1", "TUITION FEE", 2024, json!("February"))]])
        .append_query_results([vec![payment("S1", "TUITION FEE", 2024, json!("March"))]])
        .into_connection();
    let mut request = tuition_body("S1");
    request["month"] = json!(["January", "February", "March"]);

    let (status, body) = send(
        app(db, date(2024, 3, 15)),
        Method::POST,
        "/api/v1/payments",
        Some(&token("Accounts Officer")),
        Some(request),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    let recorded: Vec<payments::Model> = serde_json::from_value(body).unwrap();
    let months: Vec<_> = recorded.iter().map(|p| p.month.clone()).collect();
    assert_eq!(months, vec![json!("January"), json!("February"), json!("March")]);

    let db = mock_db()
        .append_query_results([vec![student("S1", 6, "GOLAP", 1, Some("January"))]])
        .append_query_results([recorded])
        .into_connection();
    let (status, body) = send(
        app(db, date(2024, 3, 15)),
        Method::GET,
        "/api/v1/students/S1/dues",
        Some(&token("Admin")),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["dues"]["kind"], "up_to_date");
    assert_eq!(body["dues"]["months"], json!([]));
}

#[tokio::test]
async fn test_monthly_fee_needs_a_month() {
    let app = app(mock_db().into_connection(), date(2024, 3, 15));
    let mut request = tuition_body("S1");
    request["month"] = json!([]);

    let (status, body) = send(
        app,
        Method::POST,
        "/api/v1/payments",
        Some(&token("Accounts Officer")),
        Some(request),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_class_fee_for_student_is_rejected() {
    let app = app(mock_db().into_connection(), date(2024, 3, 15));
    let mut request = tuition_body("S1");
    request["fee_type"] = json!("DIARY");

    let (status, _) = send(
        app,
        Method::POST,
        "/api/v1/payments",
        Some(&token("Accounts Officer")),
        Some(request),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_missing_payment() {
    let db = mock_db()
        .append_exec_results([MockExecResult {
            last_insert_id: 0,
            rows_affected: 0,
        }])
        .into_connection();
    let app = app(db, date(2024, 3, 15));

    let (status, body) = send(
        app,
        Method::DELETE,
        "/api/v1/payments/0191e0a4-5b7e-7c3a-9d2e-1f2a3b4c5d6e",
        Some(&token("Accounts Officer")),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NOT_FOUND");
}

#[tokio::test]
async fn test_delete_payment() {
    let db = mock_db()
        .append_exec_results([MockExecResult {
            last_insert_id: 0,
            rows_affected: 1,
        }])
        .into_connection();
    let app = app(db, date(2024, 3, 15));

    let (status, body) = send(
        app,
        Method::DELETE,
        "/api/v1/payments/0191e0a4-5b7e-7c3a-9d2e-1f2a3b4c5d6e",
        Some(&token("Accounts Officer")),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, serde_json::Value::Null);
}

#[tokio::test]
async fn test_delete_with_bad_id_uses_error_shape() {
    let app = app(mock_db().into_connection(), date(2024, 3, 15));
    let (status, body) = send(
        app,
        Method::DELETE,
        "/api/v1/payments/not-a-uuid",
        Some(&token("Accounts Officer")),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "VALIDATION_ERROR");
}
