use super::*;

/// Tests deleting a competence held by a teacher.
///
/// Verifies that the qualification rows go with it while the teacher remains.
///
/// Expected: Ok(true), qualifications removed
#[tokio::test]
async fn deletes_competence_and_qualifications() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, teacher) = factory::helpers::create_user_with_address(db).await?;
    let competence = factory::create_competence(db).await?;
    factory::create_teacher_competence(db, &teacher.id, competence.id).await?;

    let deleted = CompetenceRepository::new(db).delete(competence.id).await?;

    assert!(deleted);

    let qualifications = entity::prelude::TeacherCompetence::find().all(db).await?;
    assert!(qualifications.is_empty());

    let teacher = entity::prelude::AppUser::find_by_id(teacher.id).one(db).await?;
    assert!(teacher.is_some());

    Ok(())
}
