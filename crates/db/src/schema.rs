//! Table bootstrap from entity definitions.
//!
//! Creates missing tables and indexes at startup. Existing tables are left
//! untouched; there are no versioned migrations.

use sea_orm::sea_query::{Index, IndexCreateStatement};
use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, Schema};
use tracing::info;

use crate::entities::{payments, students};

/// Name of the unique (class, section, roll) index.
pub const STUDENT_ROLL_INDEX: &str = "idx_students_class_section_roll";

fn student_roll_index() -> IndexCreateStatement {
    Index::create()
        .name(STUDENT_ROLL_INDEX)
        .table(students::Entity)
        .col(students::Column::Class)
        .col(students::Column::Section)
        .col(students::Column::Roll)
        .unique()
        .if_not_exists()
        .to_owned()
}

async fn create_table<E: EntityTrait>(
    db: &DatabaseConnection,
    schema: &Schema,
    entity: E,
) -> Result<(), DbErr> {
    let backend = db.get_database_backend();

    let mut table = schema.create_table_from_entity(entity);
    table.if_not_exists();
    db.execute(backend.build(&table)).await?;

    for mut index in schema.create_index_from_entity(entity) {
        index.if_not_exists();
        db.execute(backend.build(&index)).await?;
    }

    Ok(())
}

/// Creates the `students` and `payments` tables if they do not exist.
///
/// # Errors
///
/// Returns an error if any DDL statement fails.
pub async fn ensure_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    let schema = Schema::new(db.get_database_backend());

    create_table(db, &schema, students::Entity).await?;
    create_table(db, &schema, payments::Entity).await?;

    let backend = db.get_database_backend();
    db.execute(backend.build(&student_roll_index())).await?;

    info!("Database schema ready");
    Ok(())
}
