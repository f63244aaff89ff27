use super::*;

/// Tests listing teachers qualified in a competence.
///
/// Expected: Ok(Vec) with the qualified teacher only
#[tokio::test]
async fn lists_teachers_by_competence() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let competence = factory::create_competence(db).await?;
    let qualified = factory::helpers::create_user_in_role(db, TEACHER_ROLE).await?;
    factory::helpers::create_user_in_role(db, TEACHER_ROLE).await?;
    factory::create_teacher_competence(db, &qualified.id, competence.id).await?;

    let teachers = AppUserRepository::new(db)
        .get_teachers_by_competence(competence.id)
        .await?;

    assert_eq!(teachers.len(), 1);
    assert_eq!(teachers[0].id, qualified.id);

    Ok(())
}
