use super::*;

/// Tests deleting a user through the handler.
///
/// Expected: 200, then 404 for the same user
#[tokio::test]
async fn deletes_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (created, ..) = factory::helpers::create_user_with_all_favorites(db).await?;

    let result = user::delete_user(State(AppState::new(db.clone())), Ok(Path(created.id))).await;
    let (status, _): (_, MessageDto) = read_json(into_response(result)).await;
    assert_eq!(status, StatusCode::OK);

    let result = user::delete_user(State(AppState::new(db.clone())), Ok(Path(created.id))).await;
    let (status, body): (_, MessageDto) = read_json(into_response(result)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body.msg, "User not found");

    Ok(())
}
