//! Payment repository for database operations.

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set, TransactionTrait,
};
use tracing::{info, warn};
use uuid::Uuid;

use campus_core::payment::{FeeType, PaymentMonths, PaymentRecord};
use campus_shared::types::PageRequest;

use crate::entities::payments;

/// Input for recording a payment. Values are expected to be validated already.
#[derive(Debug, Clone)]
pub struct CreatePaymentInput {
    /// Receipt number.
    pub receipt_no: String,
    /// Year the payment applies to.
    pub year: i32,
    /// Date the money was received.
    pub date: NaiveDate,
    /// Student ID or `CLASS-<class>-<section>`.
    pub student_id: String,
    /// Fee category.
    pub fee_type: FeeType,
    /// Month(s) paid for.
    pub month: PaymentMonths,
    /// Amount received.
    pub amount: Decimal,
    /// Free-form note.
    pub description: Option<String>,
}

/// Filter options for listing payments.
#[derive(Debug, Clone, Default)]
pub struct PaymentFilter {
    /// Exact student (or class subject) ID.
    pub student_id: Option<String>,
}

/// Converts a stored payment into the shape fee calculations use.
///
/// A `month` value that is neither a string nor an array of strings is
/// read as missing.
#[must_use]
pub fn to_record(model: &payments::Model) -> PaymentRecord {
    let month = serde_json::from_value::<PaymentMonths>(model.month.clone()).ok();
    if month.is_none() {
        warn!(payment_id = %model.id, "Payment has an unreadable month value");
    }

    PaymentRecord {
        student_id: model.student_id.clone(),
        fee_type: FeeType::parse(&model.fee_type),
        year: model.year,
        month,
        amount: model.amount,
    }
}

/// Payment repository for CRUD operations.
#[derive(Debug)]
pub struct PaymentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PaymentRepository<'a> {
    /// Creates a new payment repository.
    #[must_use]
    pub const fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists payments newest first, one page at a time.
    ///
    /// Returns the page and the total number of matching payments.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list(
        &self,
        filter: &PaymentFilter,
        page: &PageRequest,
    ) -> Result<(Vec<payments::Model>, u64), DbErr> {
        let mut query = payments::Entity::find();
        if let Some(student_id) = &filter.student_id {
            query = query.filter(payments::Column::StudentId.eq(student_id.as_str()));
        }

        let total = query.clone().count(self.db).await?;
        let items = query
            .order_by_desc(payments::Column::Date)
            .order_by_desc(payments::Column::Id)
            .offset(page.offset())
            .limit(page.limit())
            .all(self.db)
            .await?;

        Ok((items, total))
    }

    /// All payments recorded for one student, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_for_student(&self, student_id: &str) -> Result<Vec<payments::Model>, DbErr> {
        payments::Entity::find()
            .filter(payments::Column::StudentId.eq(student_id))
            .order_by_desc(payments::Column::Date)
            .order_by_desc(payments::Column::Id)
            .all(self.db)
            .await
    }

    /// Payments of `fee_type` for the given years, as calculation records.
    ///
    /// Due computation only needs tuition for the current and previous
    /// year, so this is the snapshot a student list is computed against.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn records_for_years(
        &self,
        fee_type: &FeeType,
        years: &[i32],
    ) -> Result<Vec<PaymentRecord>, DbErr> {
        let models = payments::Entity::find()
            .filter(payments::Column::FeeType.eq(fee_type.as_str()))
            .filter(payments::Column::Year.is_in(years.iter().copied()))
            .all(self.db)
            .await?;

        Ok(models.iter().map(to_record).collect())
    }

    /// Records a payment.
    ///
    /// # Errors
    ///
    /// Returns an error if the database insert fails.
    pub async fn create(&self, input: CreatePaymentInput) -> Result<payments::Model, DbErr> {
        let payment = Self::insert_payment(self.db, input).await?;
        log_recorded(&payment);
        Ok(payment)
    }

    /// Records several payments in one transaction.
    ///
    /// Either every payment is stored or none is.
    ///
    /// # Errors
    ///
    /// Returns an error if any insert fails.
    pub async fn create_many(
        &self,
        inputs: Vec<CreatePaymentInput>,
    ) -> Result<Vec<payments::Model>, DbErr> {
        let txn = self.db.begin().await?;

        let mut created = Vec::with_capacity(inputs.len());
        for input in inputs {
            created.push(Self::insert_payment(&txn, input).await?);
        }

        txn.commit().await?;

        for payment in &created {
            log_recorded(payment);
        }
        Ok(created)
    }

    async fn insert_payment<C: ConnectionTrait>(
        conn: &C,
        input: CreatePaymentInput,
    ) -> Result<payments::Model, DbErr> {
        let month = serde_json::to_value(&input.month)
            .map_err(|e| DbErr::Custom(format!("Failed to encode month: {e}")))?;

        payments::ActiveModel {
            id: Set(Uuid::now_v7()),
            receipt_no: Set(input.receipt_no),
            year: Set(input.year),
            date: Set(input.date),
            student_id: Set(input.student_id),
            fee_type: Set(input.fee_type.as_str().to_string()),
            month: Set(month),
            amount: Set(input.amount),
            description: Set(input.description),
            created_at: Set(Utc::now().into()),
        }
        .insert(conn)
        .await
    }

    /// Deletes a payment. Returns false when it did not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the database delete fails.
    pub async fn delete(&self, id: Uuid) -> Result<bool, DbErr> {
        let result = payments::Entity::delete_by_id(id).exec(self.db).await?;
        if result.rows_affected > 0 {
            info!(payment_id = %id, "Payment deleted");
        }
        Ok(result.rows_affected > 0)
    }
}

fn log_recorded(payment: &payments::Model) {
    info!(
        payment_id = %payment.id,
        student_id = %payment.student_id,
        fee_type = %payment.fee_type,
        amount = %payment.amount,
        "Payment recorded"
    );
}

#[cfg(test)]
#[path = "payment_tests.rs"]
mod tests;
