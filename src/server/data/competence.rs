use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::competence::{
    Competence, CreateCompetenceParam, UpdateCompetenceParam,
};

pub struct CompetenceRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CompetenceRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all competences ordered by name
    pub async fn get_all(&self) -> Result<Vec<Competence>, DbErr> {
        let competences = entity::prelude::Competence::find()
            .order_by_asc(entity::competence::Column::Name)
            .all(self.db)
            .await?;

        Ok(competences.into_iter().map(Competence::from_entity).collect())
    }

    /// Gets a competence by ID
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Competence>, DbErr> {
        let competence = entity::prelude::Competence::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(competence.map(Competence::from_entity))
    }

    /// Gets all competences held by a teacher
    pub async fn get_by_teacher(&self, teacher_id: &str) -> Result<Vec<Competence>, DbErr> {
        let competence_ids: Vec<i32> = entity::prelude::TeacherCompetence::find()
            .select_only()
            .column(entity::teacher_competence::Column::CompetenceId)
            .filter(entity::teacher_competence::Column::TeacherId.eq(teacher_id))
            .into_tuple()
            .all(self.db)
            .await?;

        let competences = entity::prelude::Competence::find()
            .filter(entity::competence::Column::Id.is_in(competence_ids))
            .order_by_asc(entity::competence::Column::Name)
            .all(self.db)
            .await?;

        Ok(competences.into_iter().map(Competence::from_entity).collect())
    }

    /// Creates a new competence
    pub async fn create(&self, param: CreateCompetenceParam) -> Result<Competence, DbErr> {
        let competence = entity::competence::ActiveModel {
            name: ActiveValue::Set(param.name),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Competence::from_entity(competence))
    }

    /// Renames a competence, returning `None` if it does not exist
    pub async fn update(&self, param: UpdateCompetenceParam) -> Result<Option<Competence>, DbErr> {
        let Some(competence) = entity::prelude::Competence::find_by_id(param.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::competence::ActiveModel = competence.into();
        active_model.name = ActiveValue::Set(param.name);

        let competence = active_model.update(self.db).await?;

        Ok(Some(Competence::from_entity(competence)))
    }

    /// Deletes a competence and the qualifications referencing it
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Competence::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
