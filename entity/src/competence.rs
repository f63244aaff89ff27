use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "competence")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::teacher_competence::Entity")]
    TeacherCompetence,
}

impl Related<super::teacher_competence::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TeacherCompetence.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
