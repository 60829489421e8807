use super::*;

/// Tests that a found relation carries its joined item.
///
/// Expected: Ok(Some) with item name and comment
#[tokio::test]
async fn joins_item() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let luke = factory::item::ItemFactory::new(db)
        .name("Luke Skywalker")
        .comment_text("Farm boy")
        .build_people()
        .await?;
    factory::create_favorite_people(db, user.id, luke.id).await?;

    let repo = FavoriteRepository::new(db);
    let favorite = repo
        .find(FavoriteKind::People, user.id, luke.id)
        .await?
        .unwrap();

    assert_eq!(favorite.user_id, user.id);
    let item = favorite.item.unwrap();
    assert_eq!(item.name, "Luke Skywalker");
    assert_eq!(item.comment_text, "Farm boy");

    Ok(())
}

/// Tests that a relation held by another user is not returned.
///
/// Expected: Ok(None)
#[tokio::test]
async fn ignores_other_users() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let planet = factory::create_planet(db).await?;
    factory::create_favorite_planet(db, owner.id, planet.id).await?;

    let repo = FavoriteRepository::new(db);

    assert!(repo
        .find(FavoriteKind::Planet, other.id, planet.id)
        .await?
        .is_none());

    Ok(())
}
