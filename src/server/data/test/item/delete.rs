use super::*;

/// Tests deleting a planet.
///
/// Expected: one row affected, the planet is gone
#[tokio::test]
async fn deletes_item() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Planet)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let planet = factory::create_planet(db).await?;

    let repo = ItemRepository::new(db);

    assert_eq!(repo.delete(FavoriteKind::Planet, planet.id).await?, 1);
    assert!(repo.find_by_id(FavoriteKind::Planet, planet.id).await?.is_none());
    assert_eq!(repo.delete(FavoriteKind::Planet, planet.id).await?, 0);

    Ok(())
}
