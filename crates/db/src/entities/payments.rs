//! `SeaORM` Entity for payments table.
//!
//! `student_id` is either a student's ID or a `CLASS-<class>-<section>`
//! identifier, so there is no foreign key to `students`.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "payments")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub receipt_no: String,
    pub year: i32,
    pub date: Date,
    #[sea_orm(indexed)]
    pub student_id: String,
    pub fee_type: String,
    /// A month name or an array of month names.
    pub month: Json,
    #[sea_orm(column_type = "Decimal(Some((12, 2)))")]
    pub amount: Decimal,
    pub description: Option<String>,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
