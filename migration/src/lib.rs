pub use sea_orm_migration::prelude::*;

mod m20220515_000001_create_address_table;
mod m20220515_000002_create_app_user_table;
mod m20220515_000003_create_role_table;
mod m20220515_000004_create_user_role_table;
mod m20220515_000005_create_category_table;
mod m20220515_000006_create_course_table;
mod m20220515_000007_create_competence_table;
mod m20220515_000008_create_student_course_table;
mod m20220515_000009_create_teacher_course_table;
mod m20220515_000010_create_teacher_competence_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20220515_000001_create_address_table::Migration),
            Box::new(m20220515_000002_create_app_user_table::Migration),
            Box::new(m20220515_000003_create_role_table::Migration),
            Box::new(m20220515_000004_create_user_role_table::Migration),
            Box::new(m20220515_000005_create_category_table::Migration),
            Box::new(m20220515_000006_create_course_table::Migration),
            Box::new(m20220515_000007_create_competence_table::Migration),
            Box::new(m20220515_000008_create_student_course_table::Migration),
            Box::new(m20220515_000009_create_teacher_course_table::Migration),
            Box::new(m20220515_000010_create_teacher_competence_table::Migration),
        ]
    }
}
