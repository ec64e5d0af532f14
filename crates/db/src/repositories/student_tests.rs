use chrono::{FixedOffset, TimeZone};
use rust_decimal_macros::dec;
use sea_orm::{DatabaseBackend, MockDatabase};

use super::*;

fn model(id: &str, class: i32, section: &str, roll: i32) -> students::Model {
    let ts = FixedOffset::east_opt(6 * 3600)
        .unwrap()
        .with_ymd_and_hms(2024, 1, 2, 9, 0, 0)
        .unwrap();
    students::Model {
        id: id.to_string(),
        name: "Rahim Uddin".to_string(),
        class,
        section: section.to_string(),
        roll,
        address: None,
        guardian: Some("Karim Uddin".to_string()),
        contact: None,
        tuition_fee: dec!(500),
        vehicle_no: None,
        vehicle_fee: None,
        station_name: None,
        date_of_birth: None,
        blood_group: None,
        status: "active".to_string(),
        admission_month: Some("January".to_string()),
        created_at: ts,
        updated_at: ts,
    }
}

fn input(class: i32, section: &str, roll: i32) -> StudentInput {
    StudentInput {
        name: "Rahim Uddin".to_string(),
        class,
        section: section.to_string(),
        roll,
        address: None,
        guardian: Some("Karim Uddin".to_string()),
        contact: None,
        tuition_fee: dec!(500),
        vehicle_no: None,
        vehicle_fee: None,
        station_name: None,
        date_of_birth: None,
        blood_group: None,
        status: StudentStatus::Active,
        admission_month: Some("January".to_string()),
    }
}

#[tokio::test]
async fn test_list_orders_by_class_section_roll_and_hides_transferred() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![model("S1", 6, "GOLAP", 1)]])
        .into_connection();
    let repo = StudentRepository::new(&db);

    let filter = StudentFilter {
        class: Some(6),
        ..StudentFilter::default()
    };
    let students = repo.list(&filter).await.unwrap();
    assert_eq!(students.len(), 1);

    let sql = format!("{:?}", db.into_transaction_log()[0]);
    assert!(sql.contains("= $1"));
    assert!(sql.contains("<> $2"));
    assert!(sql.contains("ORDER BY"));
    assert_eq!(sql.matches("ASC").count(), 3);
}

#[tokio::test]
async fn test_list_with_transferred_has_no_status_filter() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<students::Model>::new()])
        .into_connection();
    let repo = StudentRepository::new(&db);

    let filter = StudentFilter {
        include_transferred: true,
        ..StudentFilter::default()
    };
    repo.list(&filter).await.unwrap();

    let sql = format!("{:?}", db.into_transaction_log()[0]);
    assert!(!sql.contains("<>"));
}

#[tokio::test]
async fn test_create_rejects_duplicate_id() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![model("S1", 6, "GOLAP", 1)]])
        .into_connection();
    let repo = StudentRepository::new(&db);

    let err = repo
        .create("S1".to_string(), input(6, "GOLAP", 2))
        .await
        .unwrap_err();
    assert!(matches!(err, StudentRepositoryError::DuplicateId(id) if id == "S1"));
}

#[tokio::test]
async fn test_create_rejects_duplicate_roll() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<students::Model>::new()])
        .append_query_results([vec![model("S9", 6, "GOLAP", 1)]])
        .into_connection();
    let repo = StudentRepository::new(&db);

    let err = repo
        .create("S1".to_string(), input(6, "GOLAP", 1))
        .await
        .unwrap_err();
    assert!(matches!(err, StudentRepositoryError::DuplicateRoll));
    assert_eq!(
        err.to_string(),
        "A student with this Class, Section, and Roll already exists."
    );
}

#[tokio::test]
async fn test_create_inserts() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<students::Model>::new()])
        .append_query_results([Vec::<students::Model>::new()])
        .append_query_results([vec![model("S1", 6, "GOLAP", 1)]])
        .into_connection();
    let repo = StudentRepository::new(&db);

    let created = repo
        .create("S1".to_string(), input(6, "GOLAP", 1))
        .await
        .unwrap();
    assert_eq!(created.id, "S1");
}

#[tokio::test]
async fn test_update_missing_student() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<students::Model>::new()])
        .into_connection();
    let repo = StudentRepository::new(&db);

    let err = repo.update("S404", input(6, "GOLAP", 1)).await.unwrap_err();
    assert!(matches!(err, StudentRepositoryError::NotFound(id) if id == "S404"));
}

#[tokio::test]
async fn test_update_roll_check_excludes_self() {
    let mut updated = model("S1", 7, "DOYEL", 3);
    updated.name = "Rahim".to_string();
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![model("S1", 6, "GOLAP", 1)]])
        .append_query_results([Vec::<students::Model>::new()])
        .append_query_results([vec![updated]])
        .into_connection();
    let repo = StudentRepository::new(&db);

    let result = repo.update("S1", input(7, "DOYEL", 3)).await.unwrap();
    assert_eq!(result.class, 7);

    let log = db.into_transaction_log();
    let roll_query = format!("{:?}", log[1]);
    assert!(roll_query.contains("<> $4"));
}

#[test]
fn test_due_info_reads_status_leniently() {
    let mut student = model("S1", 6, "GOLAP", 1);
    student.status = "transferred".to_string();
    assert_eq!(due_info(&student).status, StudentStatus::Transferred);

    student.status = "on leave".to_string();
    let info = due_info(&student);
    assert_eq!(info.status, StudentStatus::Active);
    assert_eq!(info.admission_month.as_deref(), Some("January"));
}

#[test]
fn test_unique_violation_names_the_conflict() {
    let roll = unique_violation(
        "duplicate key value violates unique constraint \"idx_students_class_section_roll\"",
        "S1",
    );
    assert!(matches!(roll, StudentRepositoryError::DuplicateRoll));

    let id = unique_violation(
        "duplicate key value violates unique constraint \"students_pkey\"",
        "S1",
    );
    assert!(matches!(id, StudentRepositoryError::DuplicateId(id) if id == "S1"));
}

#[tokio::test]
async fn test_create_insert_failure_is_database_error() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<students::Model>::new()])
        .append_query_results([Vec::<students::Model>::new()])
        .append_query_errors([DbErr::Custom("connection reset".to_string())])
        .into_connection();
    let repo = StudentRepository::new(&db);

    let err = repo
        .create("S1".to_string(), input(6, "GOLAP", 1))
        .await
        .unwrap_err();
    assert!(matches!(err, StudentRepositoryError::Database(_)));
}
