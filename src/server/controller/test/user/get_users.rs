use super::*;

/// Tests listing users with favorites.
///
/// Verifies the serialized users carry their favorites and never a password.
///
/// Expected: 200 with one user and one favorite per kind
#[tokio::test]
async fn lists_users_without_passwords() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (created, ..) = factory::helpers::create_user_with_all_favorites(db).await?;

    let result = user::get_users(State(AppState::new(db.clone()))).await;

    let (status, body): (_, serde_json::Value) = read_json(into_response(result)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(!body.to_string().contains("password"));

    let users: UsersDto = serde_json::from_value(body).unwrap();
    assert_eq!(users.users.len(), 1);
    assert_eq!(users.users[0].id, created.id);
    assert_eq!(users.users[0].favorites_peoples.len(), 1);
    assert_eq!(users.users[0].favorites_planets.len(), 1);
    assert_eq!(users.users[0].favorites_starships.len(), 1);

    Ok(())
}
