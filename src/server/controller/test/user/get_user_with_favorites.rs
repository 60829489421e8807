use super::*;

/// Tests the nested user view.
///
/// Expected: 200 with the user and its favorites, no password
#[tokio::test]
async fn returns_user_with_favorites() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (created, _, planet, _) = factory::helpers::create_user_with_all_favorites(db).await?;

    let result =
        user::get_user_with_favorites(State(AppState::new(db.clone())), Ok(Path(created.id))).await;

    let (status, body): (_, serde_json::Value) = read_json(into_response(result)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.get("password").is_none());

    let dto: UserDto = serde_json::from_value(body).unwrap();
    assert_eq!(dto.email, created.email);
    assert_eq!(dto.favorites_planets[0].item_id, planet.id);
    assert_eq!(
        dto.favorites_planets[0].item.as_ref().unwrap().name,
        planet.name
    );

    Ok(())
}

/// Tests the nested user view for an unknown user.
///
/// Expected: 404
#[tokio::test]
async fn fails_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = user::get_user_with_favorites(State(AppState::new(db.clone())), Ok(Path(3))).await;

    let (status, body): (_, MessageDto) = read_json(into_response(result)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body.msg, "User not found");

    Ok(())
}
