//! Shared fixtures for router tests.

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use chrono::{Duration, FixedOffset, NaiveDate, TimeZone, Utc};
use http_body_util::BodyExt;
use rust_decimal_macros::dec;
use sea_orm::{DatabaseBackend, DatabaseConnection, MockDatabase};
use tower::ServiceExt;
use uuid::Uuid;

use crate::{AppState, create_router};
use campus_core::clock::FixedClock;
use campus_db::entities::{payments, students};
use campus_shared::{Claims, JwtConfig, JwtService};

pub const SECRET: &str = "router-test-secret";

pub fn jwt_service() -> JwtService {
    JwtService::new(JwtConfig {
        secret: SECRET.to_string(),
        access_token_expires_minutes: 60,
    })
}

/// Router over `db` with "today" fixed at `today`.
pub fn app(db: DatabaseConnection, today: NaiveDate) -> Router {
    create_router(AppState {
        db: Arc::new(db),
        jwt_service: Arc::new(jwt_service()),
        clock: Arc::new(FixedClock(today)),
    })
}

pub fn mock_db() -> MockDatabase {
    MockDatabase::new(DatabaseBackend::Postgres)
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn token(role: &str) -> String {
    jwt_service()
        .generate_access_token("staff@school.test", role)
        .unwrap()
}

pub fn teacher_token(class: i32, section: &str) -> String {
    let claims = Claims::new(
        "teacher@school.test",
        "Class Teacher",
        Utc::now() + Duration::hours(1),
    )
    .with_assignment(class, section);
    jwt_service().encode_claims(&claims).unwrap()
}

pub fn student(id: &str, class: i32, section: &str, roll: i32, admission: Option<&str>) -> students::Model {
    let ts = FixedOffset::east_opt(6 * 3600)
        .unwrap()
        .with_ymd_and_hms(2024, 1, 2, 9, 0, 0)
        .unwrap();
    students::Model {
        id: id.to_string(),
        name: format!("Student {id}"),
        class,
        section: section.to_string(),
        roll,
        address: None,
        guardian: None,
        contact: None,
        tuition_fee: dec!(500),
        vehicle_no: None,
        vehicle_fee: None,
        station_name: None,
        date_of_birth: None,
        blood_group: None,
        status: "active".to_string(),
        admission_month: admission.map(str::to_string),
        created_at: ts,
        updated_at: ts,
    }
}

pub fn payment(student_id: &str, fee_type: &str, year: i32, month: serde_json::Value) -> payments::Model {
    payments::Model {
        id: Uuid::now_v7(),
        receipt_no: "R-1".to_string(),
        year,
        date: date(year, 1, 15),
        student_id: student_id.to_string(),
        fee_type: fee_type.to_string(),
        month,
        amount: dec!(500),
        description: None,
        created_at: FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(year, 1, 15, 10, 0, 0)
            .unwrap(),
    }
}

/// Sends a request and returns the status and JSON body (`Null` when empty).
pub async fn send(
    app: Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}
