use super::*;

/// Tests listing each kind through its own handler.
///
/// Expected: 200 with only the items of the requested kind
#[tokio::test]
async fn lists_items_per_kind() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let luke = factory::create_people(db).await?;
    factory::create_people(db).await?;
    let hoth = factory::create_planet(db).await?;

    let result = item::get_peoples(State(AppState::new(db.clone()))).await;
    let (status, peoples): (_, Vec<ItemDto>) = read_json(into_response(result)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(peoples.len(), 2);
    assert_eq!(peoples[0].name, luke.name);

    let result = item::get_planets(State(AppState::new(db.clone()))).await;
    let (_, planets): (_, Vec<ItemDto>) = read_json(into_response(result)).await;
    assert_eq!(planets.len(), 1);
    assert_eq!(planets[0].comment_text, hoth.comment_text);

    let result = item::get_starships(State(AppState::new(db.clone()))).await;
    let (_, starships): (_, Vec<ItemDto>) = read_json(into_response(result)).await;
    assert!(starships.is_empty());

    Ok(())
}
