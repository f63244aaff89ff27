use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "app_user")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    #[sea_orm(unique)]
    pub user_name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub address_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::address::Entity",
        from = "Column::AddressId",
        to = "super::address::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Address,
    #[sea_orm(has_many = "super::user_role::Entity")]
    UserRole,
    #[sea_orm(has_many = "super::student_course::Entity")]
    StudentCourse,
    #[sea_orm(has_many = "super::teacher_course::Entity")]
    TeacherCourse,
    #[sea_orm(has_many = "super::teacher_competence::Entity")]
    TeacherCompetence,
}

impl Related<super::address::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Address.def()
    }
}

impl Related<super::user_role::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserRole.def()
    }
}

impl Related<super::student_course::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StudentCourse.def()
    }
}

impl Related<super::teacher_course::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TeacherCourse.def()
    }
}

impl Related<super::teacher_competence::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TeacherCompetence.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
