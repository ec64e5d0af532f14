//! `SeaORM` Entity for students table.
//!
//! (`class`, `section`, `roll`) is unique; the index is created in
//! [`crate::schema`].

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "students")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub class: i32,
    pub section: String,
    pub roll: i32,
    pub address: Option<String>,
    pub guardian: Option<String>,
    pub contact: Option<String>,
    #[sea_orm(column_type = "Decimal(Some((12, 2)))")]
    pub tuition_fee: Decimal,
    pub vehicle_no: Option<String>,
    #[sea_orm(column_type = "Decimal(Some((12, 2)))", nullable)]
    pub vehicle_fee: Option<Decimal>,
    pub station_name: Option<String>,
    pub date_of_birth: Option<Date>,
    pub blood_group: Option<String>,
    #[sea_orm(default_value = "active")]
    pub status: String,
    pub admission_month: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
