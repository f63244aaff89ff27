use super::*;

/// Tests renaming a competence.
///
/// Expected: Ok(Some(Competence)) with the new name
#[tokio::test]
async fn renames_competence() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Competence)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_competence(db).await?;

    let updated = CompetenceRepository::new(db)
        .update(UpdateCompetenceParam {
            id: created.id,
            name: "Kubernetes".to_string(),
        })
        .await?
        .unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, "Kubernetes");

    Ok(())
}

/// Tests renaming a competence that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_competence() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Competence)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = CompetenceRepository::new(db)
        .update(UpdateCompetenceParam {
            id: 7,
            name: "Kubernetes".to_string(),
        })
        .await?;

    assert!(result.is_none());

    Ok(())
}
