use super::*;

/// Tests listing a user's favorites with their items.
///
/// Expected: one entry per relation, each carrying the full item record
#[tokio::test]
async fn lists_favorites_with_items() -> Result<(), AppError> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let tatooine = factory::item::ItemFactory::new(db)
        .name("Tatooine")
        .comment_text("Twin suns")
        .build_planet()
        .await?;
    factory::create_favorite_planet(db, user.id, tatooine.id).await?;

    let service = FavoriteService::new(db);
    let favorites = service.list_for_user(FavoriteKind::Planet, user.id).await?;

    assert_eq!(favorites.len(), 1);
    let item = favorites[0].item.clone().unwrap();
    assert_eq!(item.id, tatooine.id);
    assert_eq!(item.name, "Tatooine");
    assert_eq!(item.comment_text, "Twin suns");

    Ok(())
}
