use super::*;

/// Tests recording a teacher qualification.
///
/// Expected: Ok(TeacherCompetenceKey) and the qualification listed with names
#[tokio::test]
async fn records_teacher_competence() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, teacher) = factory::helpers::create_user_with_address(db).await?;
    let competence = factory::competence::create_competence_with_name(db, "Rust").await?;

    let repo = TeacherCompetenceRepository::new(db);
    repo.create(TeacherCompetenceKey {
        teacher_id: teacher.id.clone(),
        competence_id: competence.id,
    })
    .await?;

    let by_teacher = repo.get_by_teacher(&teacher.id).await?;
    assert_eq!(by_teacher.len(), 1);
    assert_eq!(by_teacher[0].competence_name, "Rust");

    let by_competence = repo.get_by_competence(competence.id).await?;
    assert_eq!(by_competence.len(), 1);
    assert_eq!(by_competence[0].teacher_id, teacher.id);

    Ok(())
}

/// Tests recording the same qualification twice.
///
/// Expected: Err(DbErr) from the composite key
#[tokio::test]
async fn rejects_duplicate_qualification() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, teacher) = factory::helpers::create_user_with_address(db).await?;
    let competence = factory::create_competence(db).await?;
    factory::create_teacher_competence(db, &teacher.id, competence.id).await?;

    let result = TeacherCompetenceRepository::new(db)
        .create(TeacherCompetenceKey {
            teacher_id: teacher.id,
            competence_id: competence.id,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
