//! Database seeder for Campus development and testing.
//!
//! Seeds a handful of students across the roster plus tuition, vehicle and
//! class payments, then prints bearer tokens for each staff role so the API
//! can be exercised locally without the login service.
//!
//! Usage: cargo run --bin seeder

use anyhow::Context;
use chrono::{Datelike, Duration, NaiveDate, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use sea_orm::DatabaseConnection;

use campus_core::payment::{FeeType, PaymentMonths};
use campus_core::student::StudentStatus;
use campus_db::repositories::{
    CreatePaymentInput, PaymentRepository, StudentInput, StudentRepository,
    StudentRepositoryError,
};
use campus_shared::{AppConfig, Claims, JwtConfig, JwtService};

/// A demo student: id, name, class, section, roll, admission month, status.
struct DemoStudent {
    id: &'static str,
    name: &'static str,
    class: i32,
    section: &'static str,
    roll: i32,
    admission_month: Option<&'static str>,
    status: StudentStatus,
    vehicle_fee: Option<Decimal>,
    /// Tuition months already paid this year.
    paid_months: &'static [&'static str],
}

const DEMO_STUDENTS: &[DemoStudent] = &[
    DemoStudent {
        id: "S6G001",
        name: "Ayesha Rahman",
        class: 6,
        section: "GOLAP",
        roll: 1,
        admission_month: Some("January"),
        status: StudentStatus::Active,
        vehicle_fee: Some(dec!(300)),
        paid_months: &["January", "February"],
    },
    DemoStudent {
        id: "S6G002",
        name: "Tanvir Hasan",
        class: 6,
        section: "GOLAP",
        roll: 2,
        admission_month: Some("March"),
        status: StudentStatus::Active,
        vehicle_fee: None,
        paid_months: &[],
    },
    DemoStudent {
        id: "S7D001",
        name: "Nusrat Jahan",
        class: 7,
        section: "DOYEL",
        roll: 1,
        admission_month: Some("January"),
        status: StudentStatus::Active,
        vehicle_fee: None,
        paid_months: &["January"],
    },
    DemoStudent {
        id: "S8P001",
        name: "Farhan Kabir",
        class: 8,
        section: "PADMA",
        roll: 1,
        admission_month: None,
        status: StudentStatus::Active,
        vehicle_fee: None,
        paid_months: &[],
    },
    DemoStudent {
        id: "S9L001",
        name: "Sadia Islam",
        class: 9,
        section: "LAL",
        roll: 1,
        admission_month: Some("February"),
        status: StudentStatus::Transferred,
        vehicle_fee: None,
        paid_months: &["February"],
    },
];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("Failed to load configuration")?;

    println!("Connecting to database...");
    let db = campus_db::connect(
        &config.database.url,
        config.database.max_connections,
        config.database.min_connections,
    )
    .await
    .context("Failed to connect to database")?;

    println!("Ensuring tables exist...");
    campus_db::ensure_schema(&db).await?;

    let year = Utc::now().year();

    println!("Seeding students and payments...");
    seed_students(&db, year).await?;

    println!("Seeding class payments...");
    seed_class_payments(&db, year).await?;

    println!("Seeding complete!");
    print_tokens(&config.auth.token_secret)?;

    Ok(())
}

fn receipt_date(year: i32, month: &str) -> NaiveDate {
    let month = campus_core::calendar::Month::from_name(month)
        .map_or(1, |m| u32::try_from(m.index() + 1).unwrap_or(1));
    NaiveDate::from_ymd_opt(year, month, 5).unwrap_or_default()
}

/// Seeds demo students and their tuition payments. Existing students are skipped.
async fn seed_students(db: &DatabaseConnection, year: i32) -> anyhow::Result<()> {
    let students = StudentRepository::new(db);
    let payments = PaymentRepository::new(db);

    for demo in DEMO_STUDENTS {
        let input = StudentInput {
            name: demo.name.to_string(),
            class: demo.class,
            section: demo.section.to_string(),
            roll: demo.roll,
            address: Some("Dhaka".to_string()),
            guardian: None,
            contact: None,
            tuition_fee: dec!(500),
            vehicle_no: demo.vehicle_fee.map(|_| "BUS-1".to_string()),
            vehicle_fee: demo.vehicle_fee,
            station_name: None,
            date_of_birth: None,
            blood_group: None,
            status: demo.status,
            admission_month: demo.admission_month.map(str::to_string),
        };

        match students.create(demo.id.to_string(), input).await {
            Ok(_) => println!("  Created student {} ({})", demo.id, demo.name),
            Err(StudentRepositoryError::DuplicateId(_) | StudentRepositoryError::DuplicateRoll) => {
                println!("  Student {} already exists, skipping...", demo.id);
                continue;
            }
            Err(e) => return Err(e.into()),
        }

        for (n, month) in demo.paid_months.iter().enumerate() {
            payments
                .create(CreatePaymentInput {
                    receipt_no: format!("{}-T{}", demo.id, n + 1),
                    year,
                    date: receipt_date(year, month),
                    student_id: demo.id.to_string(),
                    fee_type: FeeType::Tuition,
                    month: PaymentMonths::Single((*month).to_string()),
                    amount: dec!(500),
                    description: None,
                })
                .await?;
        }

        if let (Some(fee), Some(month)) = (demo.vehicle_fee, demo.paid_months.first()) {
            payments
                .create(CreatePaymentInput {
                    receipt_no: format!("{}-V1", demo.id),
                    year,
                    date: receipt_date(year, month),
                    student_id: demo.id.to_string(),
                    fee_type: FeeType::Vehicle,
                    month: PaymentMonths::Single((*month).to_string()),
                    amount: fee,
                    description: None,
                })
                .await?;
        }
    }

    Ok(())
}

/// Seeds one class-wide payment.
async fn seed_class_payments(db: &DatabaseConnection, year: i32) -> anyhow::Result<()> {
    let payments = PaymentRepository::new(db);
    let subject = "CLASS-6-GOLAP";

    let existing = payments.list_for_student(subject).await?;
    if !existing.is_empty() {
        println!("  Class payments already exist, skipping...");
        return Ok(());
    }

    payments
        .create(CreatePaymentInput {
            receipt_no: "C6G-D1".to_string(),
            year,
            date: receipt_date(year, "January"),
            student_id: subject.to_string(),
            fee_type: FeeType::Diary,
            month: PaymentMonths::Multiple(vec!["January".to_string()]),
            amount: dec!(1200),
            description: Some("Diaries for the whole section".to_string()),
        })
        .await?;
    println!("  Created class payment for {subject}");

    Ok(())
}

/// Prints week-long tokens for each staff role.
fn print_tokens(secret: &str) -> anyhow::Result<()> {
    let jwt = JwtService::new(JwtConfig {
        secret: secret.to_string(),
        ..JwtConfig::default()
    });
    let expires_at = Utc::now() + Duration::days(7);

    println!();
    println!("Development tokens (valid 7 days):");
    for (email, role) in [
        ("admin@campus.dev", "Admin"),
        ("accountant@campus.dev", "Accountant"),
        ("officer@campus.dev", "Accounts Officer"),
    ] {
        let token = jwt.encode_claims(&Claims::new(email, role, expires_at))?;
        println!("  {role}: {token}");
    }

    let teacher = Claims::new("teacher@campus.dev", "Class Teacher", expires_at)
        .with_assignment(6, "GOLAP");
    println!("  Class Teacher (6 GOLAP): {}", jwt.encode_claims(&teacher)?);

    Ok(())
}
