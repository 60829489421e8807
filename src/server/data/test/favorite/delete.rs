use super::*;

/// Tests deleting a single relation.
///
/// Expected: one row affected, other kinds untouched
#[tokio::test]
async fn deletes_only_matching_relation() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, people, planet, _) = factory::helpers::create_user_with_all_favorites(db).await?;

    let repo = FavoriteRepository::new(db);

    assert_eq!(repo.delete(FavoriteKind::People, user.id, people.id).await?, 1);
    assert!(repo
        .find(FavoriteKind::People, user.id, people.id)
        .await?
        .is_none());
    assert!(repo
        .find(FavoriteKind::Planet, user.id, planet.id)
        .await?
        .is_some());

    Ok(())
}

/// Tests deleting a relation that does not exist.
///
/// Expected: zero rows affected
#[tokio::test]
async fn deleting_missing_relation_affects_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = FavoriteRepository::new(db);

    assert_eq!(repo.delete(FavoriteKind::Starship, user.id, 3).await?, 0);

    Ok(())
}
