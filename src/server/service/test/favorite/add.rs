use super::*;

/// Tests adding a favorite of every kind.
///
/// Expected: Ok with the new relation id, row readable through the repository
#[tokio::test]
async fn adds_favorite_for_every_kind() -> Result<(), AppError> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let people = factory::create_people(db).await?;
    let planet = factory::create_planet(db).await?;
    let starship = factory::create_starship(db).await?;

    let service = FavoriteService::new(db);

    for (kind, item_id) in [
        (FavoriteKind::People, people.id),
        (FavoriteKind::Planet, planet.id),
        (FavoriteKind::Starship, starship.id),
    ] {
        let id = service
            .add(AddFavoriteParams {
                kind,
                user_id: user.id,
                item_id,
            })
            .await?;

        let stored = FavoriteRepository::new(db)
            .find(kind, user.id, item_id)
            .await?
            .unwrap();
        assert_eq!(stored.id, id);
    }

    Ok(())
}

/// Tests adding the same favorite twice.
///
/// Verifies for every kind that the second add is rejected by the lookup before
/// insert and that no second row exists afterwards.
///
/// Expected: Err(AlreadyFavorited), exactly one row per kind
#[tokio::test]
async fn rejects_second_add_of_same_pair() -> Result<(), AppError> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let people = factory::create_people(db).await?;
    let planet = factory::create_planet(db).await?;
    let starship = factory::create_starship(db).await?;

    let service = FavoriteService::new(db);

    for (kind, item_id) in [
        (FavoriteKind::People, people.id),
        (FavoriteKind::Planet, planet.id),
        (FavoriteKind::Starship, starship.id),
    ] {
        let params = AddFavoriteParams {
            kind,
            user_id: user.id,
            item_id,
        };

        service.add(params).await?;
        let result = service.add(params).await;

        assert!(matches!(
            result,
            Err(AppError::FavoriteErr(FavoriteError::AlreadyFavorited { .. }))
        ));
        assert_eq!(service.list_for_user(kind, user.id).await?.len(), 1);
    }

    Ok(())
}

/// Tests adding a favorite for a user that does not exist.
///
/// Expected: Err(UserError::NotFound), no row created
#[tokio::test]
async fn fails_for_missing_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let people = factory::create_people(db).await?;

    let service = FavoriteService::new(db);
    let result = service
        .add(AddFavoriteParams {
            kind: FavoriteKind::People,
            user_id: 99,
            item_id: people.id,
        })
        .await;

    assert!(matches!(result, Err(AppError::UserErr(UserError::NotFound(99)))));
    assert!(FavoriteRepository::new(db)
        .get_all(FavoriteKind::People)
        .await?
        .is_empty());

    Ok(())
}

/// Tests adding a favorite for an item that does not exist.
///
/// Verifies the item check applies to starships the same way as to other kinds.
///
/// Expected: Err(ItemError::NotFound) naming the kind, no row created
#[tokio::test]
async fn fails_for_missing_item() -> Result<(), AppError> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let service = FavoriteService::new(db);
    let result = service
        .add(AddFavoriteParams {
            kind: FavoriteKind::Starship,
            user_id: user.id,
            item_id: 5,
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::ItemErr(ItemError::NotFound {
            kind: FavoriteKind::Starship,
            id: 5
        }))
    ));
    assert!(service
        .list_for_user(FavoriteKind::Starship, user.id)
        .await?
        .is_empty());

    Ok(())
}

/// Tests that favorites of different users on the same item are independent.
///
/// Expected: Ok for both users, distinct relation ids
#[tokio::test]
async fn allows_same_item_for_different_users() -> Result<(), AppError> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_user(db).await?;
    let second = factory::create_user(db).await?;
    let planet = factory::create_planet(db).await?;

    let service = FavoriteService::new(db);

    let first_id = service
        .add(AddFavoriteParams {
            kind: FavoriteKind::Planet,
            user_id: first.id,
            item_id: planet.id,
        })
        .await?;
    let second_id = service
        .add(AddFavoriteParams {
            kind: FavoriteKind::Planet,
            user_id: second.id,
            item_id: planet.id,
        })
        .await?;

    assert_ne!(first_id, second_id);

    Ok(())
}

/// Tests many requests favoriting the same item at once over separate connections.
///
/// Requests that pass the lookup together are settled by the unique index.
///
/// Expected: exactly one Ok, every other request reports AlreadyFavorited
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_adds_store_one_favorite() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .on_disk("concurrent_adds_store_one_favorite")
        .with_migrations()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let luke = factory::create_people(db).await?;

    let params = AddFavoriteParams {
        kind: FavoriteKind::People,
        user_id: user.id,
        item_id: luke.id,
    };

    let handles: Vec<_> = (0..16)
        .map(|_| {
            let db = db.clone();
            tokio::spawn(async move { FavoriteService::new(&db).add(params).await })
        })
        .collect();

    let mut added = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => added += 1,
            Err(AppError::FavoriteErr(FavoriteError::AlreadyFavorited { .. })) => {}
            Err(err) => panic!("unexpected error: {:?}", err),
        }
    }
    assert_eq!(added, 1);

    let stored = FavoriteRepository::new(db)
        .get_by_user(FavoriteKind::People, user.id)
        .await?;
    assert_eq!(stored.len(), 1);

    Ok(())
}
