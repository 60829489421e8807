use super::*;

/// Tests removing an existing favorite.
///
/// Expected: Ok, relation gone
#[tokio::test]
async fn removes_favorite() -> Result<(), AppError> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, people, ..) = factory::helpers::create_user_with_all_favorites(db).await?;

    let service = FavoriteService::new(db);
    service
        .remove(RemoveFavoriteParams {
            kind: FavoriteKind::People,
            user_id: user.id,
            item_id: people.id,
        })
        .await?;

    assert!(service
        .list_for_user(FavoriteKind::People, user.id)
        .await?
        .is_empty());
    assert_eq!(
        service
            .list_for_user(FavoriteKind::Planet, user.id)
            .await?
            .len(),
        1
    );

    Ok(())
}

/// Tests removing a favorite that does not exist.
///
/// Expected: Err(FavoriteError::NotFound)
#[tokio::test]
async fn fails_for_missing_relation() -> Result<(), AppError> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let starship = factory::create_starship(db).await?;

    let service = FavoriteService::new(db);
    let result = service
        .remove(RemoveFavoriteParams {
            kind: FavoriteKind::Starship,
            user_id: user.id,
            item_id: starship.id,
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::FavoriteErr(FavoriteError::NotFound { .. }))
    ));

    Ok(())
}

/// Tests removing and then re-adding the same favorite.
///
/// Expected: Ok, the new relation has a different id than the removed one
#[tokio::test]
async fn re_adding_creates_new_relation() -> Result<(), AppError> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let planet = factory::create_planet(db).await?;

    let service = FavoriteService::new(db);
    let add = AddFavoriteParams {
        kind: FavoriteKind::Planet,
        user_id: user.id,
        item_id: planet.id,
    };

    let first_id = service.add(add).await?;
    service
        .remove(RemoveFavoriteParams {
            kind: FavoriteKind::Planet,
            user_id: user.id,
            item_id: planet.id,
        })
        .await?;
    let second_id = service.add(add).await?;

    assert_ne!(first_id, second_id);

    Ok(())
}
