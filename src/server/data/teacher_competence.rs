use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};
use std::collections::HashMap;

use crate::server::model::teacher_competence::{TeacherCompetence, TeacherCompetenceKey};

pub struct TeacherCompetenceRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TeacherCompetenceRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all teacher qualifications
    pub async fn get_all(&self) -> Result<Vec<TeacherCompetence>, DbErr> {
        let qualifications = entity::prelude::TeacherCompetence::find()
            .order_by_asc(entity::teacher_competence::Column::CompetenceId)
            .order_by_asc(entity::teacher_competence::Column::TeacherId)
            .all(self.db)
            .await?;

        self.with_names(qualifications).await
    }

    /// Gets all qualifications of a teacher
    pub async fn get_by_teacher(&self, teacher_id: &str) -> Result<Vec<TeacherCompetence>, DbErr> {
        let qualifications = entity::prelude::TeacherCompetence::find()
            .filter(entity::teacher_competence::Column::TeacherId.eq(teacher_id))
            .order_by_asc(entity::teacher_competence::Column::CompetenceId)
            .all(self.db)
            .await?;

        self.with_names(qualifications).await
    }

    /// Gets all teachers qualified in a competence
    pub async fn get_by_competence(
        &self,
        competence_id: i32,
    ) -> Result<Vec<TeacherCompetence>, DbErr> {
        let qualifications = entity::prelude::TeacherCompetence::find()
            .filter(entity::teacher_competence::Column::CompetenceId.eq(competence_id))
            .order_by_asc(entity::teacher_competence::Column::TeacherId)
            .all(self.db)
            .await?;

        self.with_names(qualifications).await
    }

    /// Gets a single qualification by its composite key
    pub async fn get_by_key(
        &self,
        teacher_id: &str,
        competence_id: i32,
    ) -> Result<Option<TeacherCompetence>, DbErr> {
        let Some(qualification) = entity::prelude::TeacherCompetence::find_by_id((
            teacher_id.to_string(),
            competence_id,
        ))
        .one(self.db)
        .await?
        else {
            return Ok(None);
        };

        Ok(self.with_names(vec![qualification]).await?.into_iter().next())
    }

    /// Records that a teacher holds a competence
    ///
    /// Fails with a database error when the pair already exists or either side is unknown.
    pub async fn create(&self, key: TeacherCompetenceKey) -> Result<TeacherCompetenceKey, DbErr> {
        let qualification = entity::teacher_competence::ActiveModel {
            teacher_id: ActiveValue::Set(key.teacher_id),
            competence_id: ActiveValue::Set(key.competence_id),
        }
        .insert(self.db)
        .await?;

        Ok(TeacherCompetenceKey {
            teacher_id: qualification.teacher_id,
            competence_id: qualification.competence_id,
        })
    }

    /// Removes a competence from a teacher
    pub async fn delete(&self, teacher_id: &str, competence_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::TeacherCompetence::delete_by_id((
            teacher_id.to_string(),
            competence_id,
        ))
        .exec(self.db)
        .await?;

        Ok(result.rows_affected > 0)
    }

    async fn with_names(
        &self,
        qualifications: Vec<entity::teacher_competence::Model>,
    ) -> Result<Vec<TeacherCompetence>, DbErr> {
        if qualifications.is_empty() {
            return Ok(Vec::new());
        }

        let teacher_ids: Vec<String> = qualifications
            .iter()
            .map(|q| q.teacher_id.clone())
            .collect();
        let competence_ids: Vec<i32> = qualifications.iter().map(|q| q.competence_id).collect();

        let teacher_names: HashMap<String, String> = entity::prelude::AppUser::find()
            .filter(entity::app_user::Column::Id.is_in(teacher_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|u| (u.id, format!("{} {}", u.first_name, u.last_name)))
            .collect();

        let competence_names: HashMap<i32, String> = entity::prelude::Competence::find()
            .filter(entity::competence::Column::Id.is_in(competence_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|c| (c.id, c.name))
            .collect();

        Ok(qualifications
            .into_iter()
            .map(|qualification| {
                let teacher_name = teacher_names
                    .get(&qualification.teacher_id)
                    .cloned()
                    .unwrap_or_default();
                let competence_name = competence_names
                    .get(&qualification.competence_id)
                    .cloned()
                    .unwrap_or_default();

                TeacherCompetence::from_entity(qualification, teacher_name, competence_name)
            })
            .collect())
    }
}
