use super::*;

fn body(user_id: Option<i32>) -> Result<Json<AddFavoriteDto>, axum::extract::rejection::JsonRejection> {
    Ok(Json(AddFavoriteDto {
        user_id,
        planet_id: None,
    }))
}

/// Tests adding a person to favorites.
///
/// Expected: 201 with the relation id
#[tokio::test]
async fn adds_favorite() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let luke = factory::create_people(db).await?;

    let result = favorite::add_favorite(
        State(AppState::new(db.clone())),
        Ok(Path(("peoples".to_string(), luke.id))),
        body(Some(user.id)),
    )
    .await;

    let (status, created): (_, CreatedDto) = read_json(into_response(result)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created.msg, "Person added to favorites");

    let stored = FavoriteRepository::new(db)
        .find(FavoriteKind::People, user.id, luke.id)
        .await?
        .unwrap();
    assert_eq!(stored.id, created.id);

    Ok(())
}

/// Tests adding a favorite without `user_id`.
///
/// Expected: 400 and no row written
#[tokio::test]
async fn missing_user_id_writes_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let starship = factory::create_starship(db).await?;

    let result = favorite::add_favorite(
        State(AppState::new(db.clone())),
        Ok(Path(("starships".to_string(), starship.id))),
        body(None),
    )
    .await;

    let (status, message): (_, MessageDto) = read_json(into_response(result)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(message.msg, "The \"user_id\" field is required");
    assert!(FavoriteRepository::new(db)
        .get_all(FavoriteKind::Starship)
        .await?
        .is_empty());

    Ok(())
}

/// Tests the planets route, which also requires `planet_id` in the body.
///
/// Expected: 400 without it, 201 when it matches the path
#[tokio::test]
async fn planets_route_requires_planet_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let planet = factory::create_planet(db).await?;

    let result = favorite::add_favorite(
        State(AppState::new(db.clone())),
        Ok(Path(("planets".to_string(), planet.id))),
        body(Some(user.id)),
    )
    .await;
    let (status, _): (_, MessageDto) = read_json(into_response(result)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let result = favorite::add_favorite(
        State(AppState::new(db.clone())),
        Ok(Path(("planets".to_string(), planet.id))),
        Ok(Json(AddFavoriteDto {
            user_id: Some(user.id),
            planet_id: Some(planet.id),
        })),
    )
    .await;
    let (status, created): (_, CreatedDto) = read_json(into_response(result)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created.msg, "Planet added to favorites");

    Ok(())
}

/// Tests adding a favorite for an unknown user and an unknown item.
///
/// Expected: 404 for both
#[tokio::test]
async fn unknown_user_or_item_is_not_found() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let luke = factory::create_people(db).await?;

    let result = favorite::add_favorite(
        State(AppState::new(db.clone())),
        Ok(Path(("peoples".to_string(), luke.id))),
        body(Some(user.id + 100)),
    )
    .await;
    let (status, message): (_, MessageDto) = read_json(into_response(result)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(message.msg, "User not found");

    let result = favorite::add_favorite(
        State(AppState::new(db.clone())),
        Ok(Path(("peoples".to_string(), luke.id + 100))),
        body(Some(user.id)),
    )
    .await;
    let (status, message): (_, MessageDto) = read_json(into_response(result)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(message.msg, "Person not found");

    Ok(())
}

/// Tests the add route with a kind segment it does not serve.
///
/// Expected: 404, singular kinds belong to the remove route only
#[tokio::test]
async fn unknown_kind_is_not_found() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = favorite::add_favorite(
        State(AppState::new(db.clone())),
        Ok(Path(("people".to_string(), 1))),
        body(Some(1)),
    )
    .await;

    let (status, _): (_, MessageDto) = read_json(into_response(result)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    Ok(())
}
