use super::*;

/// Tests removing a qualification from a teacher.
///
/// Expected: Ok(true), then the qualification is gone
#[tokio::test]
async fn deletes_qualification() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, teacher) = factory::helpers::create_user_with_address(db).await?;
    let competence = factory::create_competence(db).await?;
    factory::create_teacher_competence(db, &teacher.id, competence.id).await?;

    let repo = TeacherCompetenceRepository::new(db);

    assert!(repo.delete(&teacher.id, competence.id).await?);
    assert!(repo
        .get_by_key(&teacher.id, competence.id)
        .await?
        .is_none());
    assert_eq!(repo.get_all().await?.len(), 0);

    Ok(())
}
