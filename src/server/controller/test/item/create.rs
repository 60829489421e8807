use super::*;

/// Tests creating a planet.
///
/// Expected: 201 with the stored record
#[tokio::test]
async fn creates_item() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = item::create_planet(
        State(AppState::new(db.clone())),
        Ok(Json(CreateItemDto {
            name: Some("Dagobah".to_string()),
            comment_text: Some("Swamp".to_string()),
        })),
    )
    .await;

    let (status, body): (_, ItemDto) = read_json(into_response(result)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body.name, "Dagobah");
    assert_eq!(body.comment_text, "Swamp");

    Ok(())
}

/// Tests creating a starship without comment text.
///
/// Expected: 400, the comment is required for every kind
#[tokio::test]
async fn requires_comment_text() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = item::create_starship(
        State(AppState::new(db.clone())),
        Ok(Json(CreateItemDto {
            name: Some("X-wing".to_string()),
            comment_text: Some(" ".to_string()),
        })),
    )
    .await;

    let (status, body): (_, MessageDto) = read_json(into_response(result)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body.msg, "The \"comment_text\" field is required");

    Ok(())
}
