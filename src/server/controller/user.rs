use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{CreatedDto, MessageDto},
        favorite::{UserFavoritesQuery, UserFavoritesDto},
        user::{CreateUserDto, UserDto, UsersDto},
    },
    server::{
        error::AppError,
        model::user::{CreateUserParams, UserWithFavorites},
        service::user::UserService,
        state::AppState,
        util::request::{require_body, require_path, require_query, required},
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// List every user with their favorites.
///
/// Each user is serialized with its three favorite lists. Passwords are never part of
/// the response.
///
/// # Arguments
/// - `state` - Application state containing the database connection
///
/// # Returns
/// - `200 OK` - Message and list of users
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/user",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Every user with their favorites", body = UsersDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_users(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = UserService::new(&state.db);

    let users = service.get_all_with_favorites().await?;

    Ok((
        StatusCode::OK,
        Json(UsersDto {
            msg: "Hello, this is your GET /user response".to_string(),
            users: users.into_iter().map(UserWithFavorites::into_dto).collect(),
        }),
    ))
}

/// Create a user.
///
/// The new user is active. The email must not be registered yet.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Email and password
///
/// # Returns
/// - `201 Created` - `{msg: "ok", id}`
/// - `400 Bad Request` - Missing body, missing field or duplicate email
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/user",
    tag = USER_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "User created", body = CreatedDto),
        (status = 400, description = "Missing body or field, or email already registered", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<CreateUserDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateUserParams::from_dto(require_body(payload)?)?;

    let service = UserService::new(&state.db);

    let user = service.create(params).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedDto {
            msg: "ok".to_string(),
            id: user.id,
        }),
    ))
}

/// Delete a user together with every favorite they hold.
///
/// # Returns
/// - `200 OK` - User deleted
/// - `400 Bad Request` - Non-numeric user id
/// - `404 Not Found` - No such user
/// - `500 Internal Server Error` - Database error, nothing was deleted
#[utoipa::path(
    delete,
    path = "/user/{user_id}",
    tag = USER_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User deleted", body = MessageDto),
        (status = 400, description = "Non-numeric id", body = MessageDto),
        (status = 404, description = "User not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    user_id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let user_id = require_path(user_id)?;

    let service = UserService::new(&state.db);

    service.delete(user_id).await?;

    Ok((StatusCode::OK, Json(MessageDto::new("User deleted"))))
}

/// Get a user's favorites as three separate lists.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `query` - Query string carrying `user_id`
///
/// # Returns
/// - `200 OK` - `favorites_peoples`, `favorites_planets` and `favorites_starships`
/// - `400 Bad Request` - `user_id` missing or not a number
/// - `404 Not Found` - No such user
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/users/favorites",
    tag = USER_TAG,
    params(UserFavoritesQuery),
    responses(
        (status = 200, description = "The user's favorites by kind", body = UserFavoritesDto),
        (status = 400, description = "Missing or invalid user_id", body = MessageDto),
        (status = 404, description = "User not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_user_favorites(
    State(state): State<AppState>,
    query: Result<Query<UserFavoritesQuery>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let user_id = required(require_query(query)?.user_id, "user_id")?;

    let service = UserService::new(&state.db);

    let favorites = service.get_favorites(user_id).await?;

    Ok((StatusCode::OK, Json(favorites.into_dto())))
}

/// Get a user nested with their favorites.
///
/// # Returns
/// - `200 OK` - The serialized user
/// - `400 Bad Request` - Non-numeric user id
/// - `404 Not Found` - No such user
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/favorite/{user_id}",
    tag = USER_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "The user with their favorites", body = UserDto),
        (status = 400, description = "Non-numeric id", body = MessageDto),
        (status = 404, description = "User not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_user_with_favorites(
    State(state): State<AppState>,
    user_id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let user_id = require_path(user_id)?;

    let service = UserService::new(&state.db);

    let user = service.get_with_favorites(user_id).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}
