use super::*;

/// Tests removing a favorite through the singular kind route.
///
/// Expected: 200 and the row is gone
#[tokio::test]
async fn removes_favorite() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _, _, starship) = factory::helpers::create_user_with_all_favorites(db).await?;

    let result = favorite::remove_favorite(
        State(AppState::new(db.clone())),
        Ok(Path(("starship".to_string(), starship.id))),
        Ok(Json(RemoveFavoriteDto {
            user_id: Some(user.id),
        })),
    )
    .await;

    let (status, message): (_, MessageDto) = read_json(into_response(result)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(message.msg, "Starship removed from favorites");
    assert!(FavoriteRepository::new(db)
        .find(FavoriteKind::Starship, user.id, starship.id)
        .await?
        .is_none());

    Ok(())
}

/// Tests removing without `user_id` in the body.
///
/// Expected: 400, the favorite is kept
#[tokio::test]
async fn requires_user_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, people, ..) = factory::helpers::create_user_with_all_favorites(db).await?;

    let result = favorite::remove_favorite(
        State(AppState::new(db.clone())),
        Ok(Path(("people".to_string(), people.id))),
        Ok(Json(RemoveFavoriteDto { user_id: None })),
    )
    .await;

    let (status, _): (_, MessageDto) = read_json(into_response(result)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(FavoriteRepository::new(db)
        .find(FavoriteKind::People, user.id, people.id)
        .await?
        .is_some());

    Ok(())
}

/// Tests removing a favorite the user does not hold.
///
/// Expected: 404 "Favorite not found"
#[tokio::test]
async fn missing_favorite_is_not_found() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let planet = factory::create_planet(db).await?;

    let result = favorite::remove_favorite(
        State(AppState::new(db.clone())),
        Ok(Path(("planet".to_string(), planet.id))),
        Ok(Json(RemoveFavoriteDto {
            user_id: Some(user.id),
        })),
    )
    .await;

    let (status, message): (_, MessageDto) = read_json(into_response(result)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(message.msg, "Favorite not found");

    Ok(())
}
