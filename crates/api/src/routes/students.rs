//! Student routes.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::get,
};
use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{ApiError, ApiResult};
use crate::extract::{JsonBody, PathParam, QueryParams};
use crate::{AppState, middleware::AuthUser};
use campus_core::payment::{FeeType, PaymentRecord};
use campus_core::student::{StudentFields, StudentStatus, normalize_student_id, validate_student};
use campus_core::tuition::{DueResult, FeeSummary, compute_due_months, summarize_fees};
use campus_db::entities::{payments, students};
use campus_db::repositories::{
    PaymentRepository, StudentFilter, StudentInput, StudentRepository, due_info, to_record,
};

/// Creates the student routes (requires auth middleware to be applied externally).
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/students", get(list_students).post(create_student))
        .route("/students/{id}", get(get_student).put(update_student))
        .route("/students/{id}/dues", get(get_student_dues))
}

/// Query parameters for listing students.
#[derive(Debug, Default, Deserialize)]
pub struct ListStudentsQuery {
    /// Filter by class.
    pub class: Option<i32>,
    /// Filter by section.
    pub section: Option<String>,
    /// Include transferred students (default: false).
    #[serde(default)]
    pub include_transferred: bool,
}

/// Request body for creating or updating a student.
///
/// `id` is required on create and ignored on update.
#[derive(Debug, Deserialize, Validate)]
pub struct StudentRequest {
    /// Student ID; trimmed and upper-cased.
    #[serde(default)]
    #[validate(length(max = 32))]
    pub id: Option<String>,
    /// Student name.
    #[validate(length(min = 1, max = 120))]
    pub name: String,
    /// Class number.
    pub class: i32,
    /// Section name.
    pub section: String,
    /// Roll number.
    pub roll: i32,
    /// Postal address.
    #[validate(length(max = 255))]
    pub address: Option<String>,
    /// Guardian name.
    #[validate(length(max = 120))]
    pub guardian: Option<String>,
    /// Contact number.
    #[validate(length(max = 32))]
    pub contact: Option<String>,
    /// Monthly tuition fee.
    pub tuition_fee: Decimal,
    /// School vehicle number.
    pub vehicle_no: Option<String>,
    /// Monthly vehicle fee.
    pub vehicle_fee: Option<Decimal>,
    /// Vehicle pick-up station.
    pub station_name: Option<String>,
    /// Date of birth (YYYY-MM-DD).
    pub date_of_birth: Option<NaiveDate>,
    /// Blood group.
    #[validate(length(max = 8))]
    pub blood_group: Option<String>,
    /// "active" (default) or "transferred".
    pub status: Option<String>,
    /// Admission month name, e.g. "January".
    pub admission_month: Option<String>,
}

/// Blank optional strings are stored as missing.
fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl StudentRequest {
    /// Checks the request and converts it into repository input.
    fn into_input(self, id: &str) -> ApiResult<StudentInput> {
        self.validate()?;

        let section = self.section.trim().to_string();
        let admission_month = non_blank(self.admission_month);
        validate_student(&StudentFields {
            id,
            name: &self.name,
            class: self.class,
            section: &section,
            roll: self.roll,
            tuition_fee: self.tuition_fee,
            vehicle_fee: self.vehicle_fee,
            admission_month: admission_month.as_deref(),
        })?;

        let status = match non_blank(self.status) {
            Some(status) => status.parse::<StudentStatus>()?,
            None => StudentStatus::Active,
        };

        Ok(StudentInput {
            name: self.name.trim().to_string(),
            class: self.class,
            section,
            roll: self.roll,
            address: non_blank(self.address),
            guardian: non_blank(self.guardian),
            contact: non_blank(self.contact),
            tuition_fee: self.tuition_fee,
            vehicle_no: non_blank(self.vehicle_no),
            vehicle_fee: self.vehicle_fee,
            station_name: non_blank(self.station_name),
            date_of_birth: self.date_of_birth,
            blood_group: non_blank(self.blood_group),
            status,
            admission_month,
        })
    }
}

/// A student with their outstanding tuition.
#[derive(Debug, Serialize)]
pub struct StudentResponse {
    /// The student record.
    #[serde(flatten)]
    pub student: students::Model,
    /// Outstanding tuition.
    pub dues: DueResult,
}

/// A student's profile.
#[derive(Debug, Serialize)]
pub struct StudentDetailResponse {
    /// The student record.
    #[serde(flatten)]
    pub student: students::Model,
    /// Tuition and vehicle fee overview.
    pub fees: FeeSummary,
    /// Every payment recorded for the student, newest first.
    pub payments: Vec<payments::Model>,
}

/// Outstanding tuition for one student.
#[derive(Debug, Serialize)]
pub struct StudentDuesResponse {
    /// Student ID.
    pub student_id: String,
    /// Date the result was computed for.
    pub as_of: NaiveDate,
    /// Outstanding tuition.
    pub dues: DueResult,
}

/// Tuition records for the current and previous year, the window due
/// computation looks at.
async fn tuition_snapshot(state: &AppState, today: NaiveDate) -> ApiResult<Vec<PaymentRecord>> {
    let repo = PaymentRepository::new(&state.db);
    let year = today.year();
    Ok(repo
        .records_for_years(&FeeType::Tuition, &[year - 1, year])
        .await?)
}

/// Loads a student the caller is allowed to see.
async fn load_visible_student(
    state: &AppState,
    auth: &AuthUser,
    id: &str,
) -> ApiResult<students::Model> {
    let id = normalize_student_id(id);
    let student = StudentRepository::new(&state.db)
        .find_by_id(&id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Student with ID {id} not found.")))?;

    if !auth.staff().can_view(student.class, &student.section) {
        return Err(ApiError::forbidden(
            "You can only view students of your assigned class and section",
        ));
    }
    Ok(student)
}

/// GET `/students` - List students with their dues.
async fn list_students(
    State(state): State<AppState>,
    auth: AuthUser,
    QueryParams(query): QueryParams<ListStudentsQuery>,
) -> ApiResult<Json<Vec<StudentResponse>>> {
    let staff = auth.staff();
    let filter = StudentFilter {
        class: query.class,
        section: non_blank(query.section),
        include_transferred: query.include_transferred,
    };

    let students = StudentRepository::new(&state.db)
        .list(&filter)
        .await?;

    let today = state.clock.today();
    let payments = tuition_snapshot(&state, today).await?;

    let response = students
        .into_iter()
        .filter(|s| staff.can_view(s.class, &s.section))
        .map(|student| {
            let dues = compute_due_months(&due_info(&student), &payments, today);
            StudentResponse { student, dues }
        })
        .collect();

    Ok(Json(response))
}

/// POST `/students` - Create a student.
async fn create_student(
    State(state): State<AppState>,
    auth: AuthUser,
    JsonBody(body): JsonBody<StudentRequest>,
) -> ApiResult<(StatusCode, Json<StudentResponse>)> {
    auth.require_student_editor()?;

    let id = normalize_student_id(body.id.as_deref().unwrap_or_default());
    let input = body.into_input(&id)?;
    let student = StudentRepository::new(&state.db)
        .create(id, input)
        .await?;

    let today = state.clock.today();
    let payments = tuition_snapshot(&state, today).await?;
    let dues = compute_due_months(&due_info(&student), &payments, today);

    Ok((StatusCode::CREATED, Json(StudentResponse { student, dues })))
}

/// GET `/students/{id}` - Student profile with fee summary and payments.
async fn get_student(
    State(state): State<AppState>,
    auth: AuthUser,
    PathParam(id): PathParam<String>,
) -> ApiResult<Json<StudentDetailResponse>> {
    let student = load_visible_student(&state, &auth, &id).await?;

    let payments = PaymentRepository::new(&state.db)
        .list_for_student(&student.id)
        .await?;
    let records: Vec<PaymentRecord> = payments.iter().map(to_record).collect();
    let fees = summarize_fees(&due_info(&student), &records, state.clock.today());

    Ok(Json(StudentDetailResponse {
        student,
        fees,
        payments,
    }))
}

/// PUT `/students/{id}` - Replace a student's editable fields.
async fn update_student(
    State(state): State<AppState>,
    auth: AuthUser,
    PathParam(id): PathParam<String>,
    JsonBody(body): JsonBody<StudentRequest>,
) -> ApiResult<Json<StudentResponse>> {
    auth.require_student_editor()?;

    let id = normalize_student_id(&id);
    let input = body.into_input(&id)?;
    let student = StudentRepository::new(&state.db)
        .update(&id, input)
        .await?;

    let today = state.clock.today();
    let payments = tuition_snapshot(&state, today).await?;
    let dues = compute_due_months(&due_info(&student), &payments, today);

    Ok(Json(StudentResponse { student, dues }))
}

/// GET `/students/{id}/dues` - Outstanding tuition.
async fn get_student_dues(
    State(state): State<AppState>,
    auth: AuthUser,
    PathParam(id): PathParam<String>,
) -> ApiResult<Json<StudentDuesResponse>> {
    let student = load_visible_student(&state, &auth, &id).await?;

    let today = state.clock.today();
    let payments = tuition_snapshot(&state, today).await?;
    let dues = compute_due_months(&due_info(&student), &payments, today);

    Ok(Json(StudentDuesResponse {
        student_id: student.id,
        as_of: today,
        dues,
    }))
}

#[cfg(test)]
#[path = "students_tests.rs"]
mod tests;
