//! Student repository for database operations.

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set, SqlErr,
};
use tracing::info;

use campus_core::student::{StudentDueInfo, StudentStatus};

use crate::entities::students;
use crate::schema::STUDENT_ROLL_INDEX;

/// Error types for student operations.
#[derive(Debug, thiserror::Error)]
pub enum StudentRepositoryError {
    /// A student with this ID already exists.
    #[error("A student with ID {0} already exists.")]
    DuplicateId(String),

    /// Another student holds the same class, section and roll.
    #[error("A student with this Class, Section, and Roll already exists.")]
    DuplicateRoll,

    /// Student not found.
    #[error("Student with ID {0} not found.")]
    NotFound(String),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// Editable student fields. Values are expected to be validated already.
#[derive(Debug, Clone)]
pub struct StudentInput {
    /// Student name.
    pub name: String,
    /// Class number.
    pub class: i32,
    /// Section name.
    pub section: String,
    /// Roll number within the class-section.
    pub roll: i32,
    /// Postal address.
    pub address: Option<String>,
    /// Guardian name.
    pub guardian: Option<String>,
    /// Contact number.
    pub contact: Option<String>,
    /// Monthly tuition fee.
    pub tuition_fee: Decimal,
    /// School vehicle number.
    pub vehicle_no: Option<String>,
    /// Monthly vehicle fee.
    pub vehicle_fee: Option<Decimal>,
    /// Vehicle pick-up station.
    pub station_name: Option<String>,
    /// Date of birth.
    pub date_of_birth: Option<NaiveDate>,
    /// Blood group.
    pub blood_group: Option<String>,
    /// Enrollment status.
    pub status: StudentStatus,
    /// Admission month name.
    pub admission_month: Option<String>,
}

/// Filter options for listing students.
#[derive(Debug, Clone, Default)]
pub struct StudentFilter {
    /// Only this class.
    pub class: Option<i32>,
    /// Only this section.
    pub section: Option<String>,
    /// Include transferred students.
    pub include_transferred: bool,
}

/// Converts a stored student into calculator input.
#[must_use]
pub fn due_info(model: &students::Model) -> StudentDueInfo {
    StudentDueInfo {
        id: model.id.clone(),
        admission_month: model.admission_month.clone(),
        status: StudentStatus::from_stored(&model.status),
    }
}

/// Maps a failed write to a conflict when the database rejected it on a
/// unique constraint. Covers races that pass the checks before the write.
fn write_error(err: DbErr, id: &str) -> StudentRepositoryError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(message)) => unique_violation(&message, id),
        _ => StudentRepositoryError::Database(err),
    }
}

fn unique_violation(message: &str, id: &str) -> StudentRepositoryError {
    if message.contains(STUDENT_ROLL_INDEX) {
        StudentRepositoryError::DuplicateRoll
    } else {
        StudentRepositoryError::DuplicateId(id.to_string())
    }
}

/// Student repository for CRUD operations.
#[derive(Debug)]
pub struct StudentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StudentRepository<'a> {
    /// Creates a new student repository.
    #[must_use]
    pub const fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists students ordered by class, section and roll.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list(&self, filter: &StudentFilter) -> Result<Vec<students::Model>, DbErr> {
        let mut query = students::Entity::find();

        if let Some(class) = filter.class {
            query = query.filter(students::Column::Class.eq(class));
        }
        if let Some(section) = &filter.section {
            query = query.filter(students::Column::Section.eq(section.as_str()));
        }
        if !filter.include_transferred {
            query = query.filter(
                students::Column::Status.ne(StudentStatus::Transferred.as_str()),
            );
        }

        query
            .order_by_asc(students::Column::Class)
            .order_by_asc(students::Column::Section)
            .order_by_asc(students::Column::Roll)
            .all(self.db)
            .await
    }

    /// Finds a student by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_id(&self, id: &str) -> Result<Option<students::Model>, DbErr> {
        students::Entity::find_by_id(id).one(self.db).await
    }

    /// Returns true if a student with this ID exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn exists(&self, id: &str) -> Result<bool, DbErr> {
        Ok(self.find_by_id(id).await?.is_some())
    }

    /// Returns true if another student holds this class, section and roll.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn roll_taken(
        &self,
        class: i32,
        section: &str,
        roll: i32,
        except_id: Option<&str>,
    ) -> Result<bool, DbErr> {
        let mut condition = Condition::all()
            .add(students::Column::Class.eq(class))
            .add(students::Column::Section.eq(section))
            .add(students::Column::Roll.eq(roll));
        if let Some(id) = except_id {
            condition = condition.add(students::Column::Id.ne(id));
        }

        let existing = students::Entity::find()
            .filter(condition)
            .one(self.db)
            .await?;
        Ok(existing.is_some())
    }

    /// Creates a student.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The ID is already taken
    /// - Another student holds the same class, section and roll
    /// - The database insert fails
    pub async fn create(
        &self,
        id: String,
        input: StudentInput,
    ) -> Result<students::Model, StudentRepositoryError> {
        if self.exists(&id).await? {
            return Err(StudentRepositoryError::DuplicateId(id));
        }
        if self
            .roll_taken(input.class, &input.section, input.roll, None)
            .await?
        {
            return Err(StudentRepositoryError::DuplicateRoll);
        }

        let now = Utc::now().into();
        let student = students::ActiveModel {
            id: Set(id.clone()),
            name: Set(input.name),
            class: Set(input.class),
            section: Set(input.section),
            roll: Set(input.roll),
            address: Set(input.address),
            guardian: Set(input.guardian),
            contact: Set(input.contact),
            tuition_fee: Set(input.tuition_fee),
            vehicle_no: Set(input.vehicle_no),
            vehicle_fee: Set(input.vehicle_fee),
            station_name: Set(input.station_name),
            date_of_birth: Set(input.date_of_birth),
            blood_group: Set(input.blood_group),
            status: Set(input.status.as_str().to_string()),
            admission_month: Set(input.admission_month),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(self.db)
        .await
        .map_err(|e| write_error(e, &id))?;

        info!(student_id = %student.id, class = student.class, section = %student.section, "Student created");
        Ok(student)
    }

    /// Replaces a student's editable fields.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The student does not exist
    /// - Another student holds the same class, section and roll
    /// - The database update fails
    pub async fn update(
        &self,
        id: &str,
        input: StudentInput,
    ) -> Result<students::Model, StudentRepositoryError> {
        let existing = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| StudentRepositoryError::NotFound(id.to_string()))?;

        if self
            .roll_taken(input.class, &input.section, input.roll, Some(id))
            .await?
        {
            return Err(StudentRepositoryError::DuplicateRoll);
        }

        let mut student: students::ActiveModel = existing.into();
        student.name = Set(input.name);
        student.class = Set(input.class);
        student.section = Set(input.section);
        student.roll = Set(input.roll);
        student.address = Set(input.address);
        student.guardian = Set(input.guardian);
        student.contact = Set(input.contact);
        student.tuition_fee = Set(input.tuition_fee);
        student.vehicle_no = Set(input.vehicle_no);
        student.vehicle_fee = Set(input.vehicle_fee);
        student.station_name = Set(input.station_name);
        student.date_of_birth = Set(input.date_of_birth);
        student.blood_group = Set(input.blood_group);
        student.status = Set(input.status.as_str().to_string());
        student.admission_month = Set(input.admission_month);
        student.updated_at = Set(Utc::now().into());

        let updated = student
            .update(self.db)
            .await
            .map_err(|e| write_error(e, id))?;
        info!(student_id = %updated.id, "Student updated");
        Ok(updated)
    }
}

#[cfg(test)]
#[path = "student_tests.rs"]
mod tests;
