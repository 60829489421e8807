use std::collections::HashMap;

use dioxus_logger::tracing;
use sea_orm::{DatabaseConnection, SqlErr, TransactionTrait};

use crate::{
    model::favorite::FavoriteKind,
    server::{
        data::{favorite::FavoriteRepository, user::UserRepository},
        error::{user::UserError, AppError},
        model::{
            favorite::UserFavorites,
            user::{CreateUserParams, User, UserWithFavorites},
        },
        service::favorite::FavoriteService,
    },
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every user with their three favorite lists.
    ///
    /// Loads all users and then all favorites of each kind, so the number of queries
    /// does not grow with the number of users.
    pub async fn get_all_with_favorites(&self) -> Result<Vec<UserWithFavorites>, AppError> {
        let users = UserRepository::new(self.db).get_all().await?;
        let favorite_repo = FavoriteRepository::new(self.db);

        let mut by_user: HashMap<i32, UserFavorites> = HashMap::new();
        for kind in FavoriteKind::ALL {
            for favorite in favorite_repo.get_all(kind).await? {
                by_user.entry(favorite.user_id).or_default().push(favorite);
            }
        }

        Ok(users
            .into_iter()
            .map(|user| {
                let favorites = by_user.remove(&user.id).unwrap_or_default();
                UserWithFavorites { user, favorites }
            })
            .collect())
    }

    /// Gets one user nested with their favorites.
    ///
    /// # Returns
    /// - `Ok(UserWithFavorites)` - The user and their three favorite lists
    /// - `Err(AppError::UserErr(UserError::NotFound))` - No user with this ID
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn get_with_favorites(&self, user_id: i32) -> Result<UserWithFavorites, AppError> {
        let user = UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .ok_or(UserError::NotFound(user_id))?;

        let favorites = self.load_favorites(user_id).await?;

        Ok(UserWithFavorites { user, favorites })
    }

    /// Gets a user's three favorite lists without the user record.
    ///
    /// # Returns
    /// - `Ok(UserFavorites)` - Possibly empty lists, one per kind
    /// - `Err(AppError::UserErr(UserError::NotFound))` - No user with this ID
    pub async fn get_favorites(&self, user_id: i32) -> Result<UserFavorites, AppError> {
        if !UserRepository::new(self.db).exists(user_id).await? {
            return Err(UserError::NotFound(user_id).into());
        }

        self.load_favorites(user_id).await
    }

    async fn load_favorites(&self, user_id: i32) -> Result<UserFavorites, AppError> {
        let favorite_service = FavoriteService::new(self.db);

        let mut favorites = UserFavorites::default();
        for kind in FavoriteKind::ALL {
            favorites.set(kind, favorite_service.list_for_user(kind, user_id).await?);
        }

        Ok(favorites)
    }

    /// Creates a user after checking the email is not taken.
    ///
    /// A unique violation raised by the insert itself, when another request registered
    /// the same email in between, is reported the same way as the pre-check.
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(AppError::UserErr(UserError::DuplicateEmail))` - Email already registered
    /// - `Err(AppError::DbErr)` - Database error, nothing was written
    pub async fn create(&self, params: CreateUserParams) -> Result<User, AppError> {
        let txn = self.db.begin().await?;
        let repo = UserRepository::new(&txn);

        if repo.email_exists(&params.email).await? {
            return Err(UserError::DuplicateEmail(params.email).into());
        }

        let email = params.email.clone();
        let user = match repo.create(params).await {
            Ok(user) => user,
            Err(err) => match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => {
                    return Err(UserError::DuplicateEmail(email).into())
                }
                _ => return Err(err.into()),
            },
        };

        txn.commit().await?;

        tracing::debug!("Created user {}", user.id);

        Ok(user)
    }

    /// Deletes a user and every favorite they hold, in one transaction.
    ///
    /// # Returns
    /// - `Ok(())` - User and favorites removed
    /// - `Err(AppError::UserErr(UserError::NotFound))` - No user with this ID
    pub async fn delete(&self, user_id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;
        let user_repo = UserRepository::new(&txn);

        if !user_repo.exists(user_id).await? {
            return Err(UserError::NotFound(user_id).into());
        }

        let favorite_repo = FavoriteRepository::new(&txn);
        let mut removed = 0;
        for kind in FavoriteKind::ALL {
            removed += favorite_repo.delete_by_user(kind, user_id).await?;
        }

        user_repo.delete(user_id).await?;

        txn.commit().await?;

        tracing::debug!("Deleted user {} and {} favorites", user_id, removed);

        Ok(())
    }
}
