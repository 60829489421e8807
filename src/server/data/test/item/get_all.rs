use super::*;

/// Tests listing starships.
///
/// Expected: Ok with every starship in ID order
#[tokio::test]
async fn returns_items_in_id_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Starship)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_starship(db).await?;
    let second = factory::create_starship(db).await?;

    let repo = ItemRepository::new(db);
    let starships = repo.get_all(FavoriteKind::Starship).await?;

    let ids: Vec<i32> = starships.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);
    assert!(starships.iter().all(|s| s.kind == FavoriteKind::Starship));

    Ok(())
}
