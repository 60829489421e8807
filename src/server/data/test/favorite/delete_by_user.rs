use super::*;

/// Tests removing every favorite of one kind held by a user.
///
/// Expected: user's rows of that kind removed, other users untouched
#[tokio::test]
async fn deletes_only_that_users_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, ..) = factory::helpers::create_user_with_all_favorites(db).await?;
    let (other, ..) = factory::helpers::create_user_with_all_favorites(db).await?;

    let repo = FavoriteRepository::new(db);

    assert_eq!(repo.delete_by_user(FavoriteKind::People, user.id).await?, 1);
    assert!(repo.get_by_user(FavoriteKind::People, user.id).await?.is_empty());
    assert_eq!(repo.get_by_user(FavoriteKind::Planet, user.id).await?.len(), 1);
    assert_eq!(repo.get_by_user(FavoriteKind::People, other.id).await?.len(), 1);

    Ok(())
}
