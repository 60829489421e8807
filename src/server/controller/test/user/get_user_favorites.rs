use super::*;

/// Tests the flat favorites endpoint.
///
/// Expected: 200 with three lists
#[tokio::test]
async fn returns_favorites_by_kind() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (created, people, ..) = factory::helpers::create_user_with_all_favorites(db).await?;

    let result = user::get_user_favorites(
        State(AppState::new(db.clone())),
        Ok(Query(UserFavoritesQuery {
            user_id: Some(created.id),
        })),
    )
    .await;

    let (status, body): (_, UserFavoritesDto) = read_json(into_response(result)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.favorites_peoples.len(), 1);
    assert_eq!(body.favorites_peoples[0].item_id, people.id);
    assert_eq!(body.favorites_planets.len(), 1);
    assert_eq!(body.favorites_starships.len(), 1);

    Ok(())
}

/// Tests the flat favorites endpoint without `user_id`.
///
/// Expected: 400
#[tokio::test]
async fn requires_user_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = user::get_user_favorites(
        State(AppState::new(db.clone())),
        Ok(Query(UserFavoritesQuery { user_id: None })),
    )
    .await;

    let (status, body): (_, MessageDto) = read_json(into_response(result)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body.msg, "The \"user_id\" field is required");

    Ok(())
}

/// Tests the flat favorites endpoint for an unknown user.
///
/// Expected: 404
#[tokio::test]
async fn fails_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = user::get_user_favorites(
        State(AppState::new(db.clone())),
        Ok(Query(UserFavoritesQuery { user_id: Some(8) })),
    )
    .await;

    let (status, _): (_, MessageDto) = read_json(into_response(result)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    Ok(())
}
