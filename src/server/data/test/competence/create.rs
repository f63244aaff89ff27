use super::*;

/// Tests creating a competence and fetching it back.
///
/// Expected: Ok(Some(Competence)) equal to the created one
#[tokio::test]
async fn creates_and_fetches_competence() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Competence)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CompetenceRepository::new(db);
    let created = repo
        .create(CreateCompetenceParam {
            name: "Rust".to_string(),
        })
        .await?;

    assert_eq!(repo.get_by_id(created.id).await?, Some(created));

    Ok(())
}
