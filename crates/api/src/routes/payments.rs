//! Payment routes.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{delete, get},
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::error::{ApiError, ApiResult};
use crate::extract::{JsonBody, PathParam, QueryParams};
use crate::{AppState, middleware::AuthUser};
use campus_core::payment::{
    FeeType, NewPayment, PaymentMonths, PaymentSubject, months_per_record, validate_new_payment,
};
use campus_core::student::normalize_student_id;
use campus_db::entities::payments;
use campus_db::repositories::{
    CreatePaymentInput, PaymentFilter, PaymentRepository, StudentRepository,
};
use campus_shared::types::{PageRequest, PageResponse};

/// Creates the payment routes (requires auth middleware to be applied externally).
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/payments", get(list_payments).post(create_payment))
        .route("/payments/{id}", delete(delete_payment))
}

/// Query parameters for listing payments.
#[derive(Debug, Default, Deserialize)]
pub struct ListPaymentsQuery {
    /// Only payments for this student or class subject.
    pub student_id: Option<String>,
    /// Page number (1-indexed, default: 1).
    pub page: Option<u32>,
    /// Items per page (default: 20, max: 200).
    pub per_page: Option<u32>,
}

/// Request body for recording a payment.
#[derive(Debug, Deserialize, Validate)]
pub struct CreatePaymentRequest {
    /// Receipt number.
    #[validate(length(min = 1, max = 64))]
    pub receipt_no: String,
    /// Year the payment applies to.
    pub year: i32,
    /// Date the money was received (YYYY-MM-DD).
    pub date: NaiveDate,
    /// Student ID or `CLASS-<class>-<section>`.
    #[validate(length(min = 1, max = 64))]
    pub student_id: String,
    /// Fee type tag, e.g. "TUITION FEE".
    pub fee_type: String,
    /// A month name or a list of month names.
    #[serde(default)]
    pub month: Option<PaymentMonths>,
    /// Amount received.
    pub amount: Decimal,
    /// Free-form note.
    #[validate(length(max = 500))]
    pub description: Option<String>,
}

/// GET `/payments` - List payments, newest first.
async fn list_payments(
    State(state): State<AppState>,
    _auth: AuthUser,
    QueryParams(query): QueryParams<ListPaymentsQuery>,
) -> ApiResult<Json<PageResponse<payments::Model>>> {
    let page = PageRequest::new(query.page, query.per_page);
    let filter = PaymentFilter {
        student_id: query
            .student_id
            .map(|id| id.trim().to_string())
            .filter(|id| !id.is_empty()),
    };

    let (items, total) = PaymentRepository::new(&state.db)
        .list(&filter, &page)
        .await?;

    Ok(Json(PageResponse::new(items, page, total)))
}

/// POST `/payments` - Record a payment.
///
/// A student's monthly fee for several months is stored as one payment per
/// month. Returns every payment created.
async fn create_payment(
    State(state): State<AppState>,
    auth: AuthUser,
    JsonBody(body): JsonBody<CreatePaymentRequest>,
) -> ApiResult<(StatusCode, Json<Vec<payments::Model>>)> {
    auth.require_payment_editor()?;
    body.validate()?;

    let subject = PaymentSubject::parse(&normalize_student_id(&body.student_id))?;
    let fee_type = FeeType::parse(body.fee_type.trim());
    let month = validate_new_payment(&NewPayment {
        receipt_no: &body.receipt_no,
        year: body.year,
        subject: &subject,
        fee_type: &fee_type,
        month: body.month.as_ref(),
        amount: body.amount,
    })?;

    if let PaymentSubject::Student(id) = &subject
        && !StudentRepository::new(&state.db).exists(id).await?
    {
        return Err(ApiError::not_found(format!("Student with ID {id} not found.")));
    }

    let receipt_no = body.receipt_no.trim().to_string();
    let description = body
        .description
        .map(|d| d.trim().to_string())
        .filter(|d| !d.is_empty());
    let inputs = months_per_record(&subject, &fee_type, month)
        .into_iter()
        .map(|month| CreatePaymentInput {
            receipt_no: receipt_no.clone(),
            year: body.year,
            date: body.date,
            student_id: subject.key(),
            fee_type: fee_type.clone(),
            month,
            amount: body.amount,
            description: description.clone(),
        })
        .collect();

    let created = PaymentRepository::new(&state.db).create_many(inputs).await?;

    info!(
        recorded_by = %auth.email(),
        receipt_no = %receipt_no,
        count = created.len(),
        "Payment recorded via API"
    );
    Ok((StatusCode::CREATED, Json(created)))
}

/// DELETE `/payments/{id}` - Delete a payment.
async fn delete_payment(
    State(state): State<AppState>,
    auth: AuthUser,
    PathParam(id): PathParam<Uuid>,
) -> ApiResult<StatusCode> {
    auth.require_payment_editor()?;

    let deleted = PaymentRepository::new(&state.db)
        .delete(id)
        .await?;
    if !deleted {
        return Err(ApiError::not_found(format!("Payment {id} not found")));
    }

    info!(deleted_by = %auth.email(), payment_id = %id, "Payment deleted via API");
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
#[path = "payments_tests.rs"]
mod tests;
