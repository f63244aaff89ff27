use super::*;

/// Tests listing the competences of a teacher.
///
/// Expected: Ok(Vec) with the teacher's competences ordered by name
#[tokio::test]
async fn lists_competences_by_teacher() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, teacher) = factory::helpers::create_user_with_address(db).await?;
    let sql = factory::competence::create_competence_with_name(db, "SQL").await?;
    let azure = factory::competence::create_competence_with_name(db, "Azure").await?;
    factory::competence::create_competence_with_name(db, "Docker").await?;
    factory::create_teacher_competence(db, &teacher.id, sql.id).await?;
    factory::create_teacher_competence(db, &teacher.id, azure.id).await?;

    let competences = CompetenceRepository::new(db)
        .get_by_teacher(&teacher.id)
        .await?;

    let names: Vec<&str> = competences.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Azure", "SQL"]);

    Ok(())
}
