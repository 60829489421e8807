use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{CreatedDto, MessageDto},
        favorite::{AddFavoriteDto, FavoriteKind, RemoveFavoriteDto},
    },
    server::{
        error::AppError,
        model::favorite::{AddFavoriteParams, RemoveFavoriteParams},
        service::favorite::FavoriteService,
        state::AppState,
        util::request::{require_body, require_path},
    },
};

/// Tag for grouping favorite endpoints in OpenAPI documentation
pub static FAVORITE_TAG: &str = "favorite";

/// Add an item to a user's favorites.
///
/// The kind segment is plural: `peoples`, `planets` or `starships`. The planets route
/// also requires `planet_id` in the body, equal to the path id.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `kind` - Plural kind segment
/// - `item_id` - ID of the item to favorite
/// - `payload` - Body carrying `user_id` (and `planet_id` for planets)
///
/// # Returns
/// - `201 Created` - Favorite added, body carries the relation id
/// - `400 Bad Request` - Missing body or field, or item already in favorites
/// - `404 Not Found` - Unknown kind, user or item
/// - `500 Internal Server Error` - Database error, nothing was written
#[utoipa::path(
    post,
    path = "/favorite/{kind}/{item_id}",
    tag = FAVORITE_TAG,
    params(
        ("kind" = String, Path, description = "peoples, planets or starships"),
        ("item_id" = i32, Path, description = "ID of the item to favorite")
    ),
    request_body = AddFavoriteDto,
    responses(
        (status = 201, description = "Favorite added", body = CreatedDto),
        (status = 400, description = "Missing body or field, or already in favorites", body = MessageDto),
        (status = 404, description = "Unknown kind, user or item", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn add_favorite(
    State(state): State<AppState>,
    path: Result<Path<(String, i32)>, PathRejection>,
    payload: Result<Json<AddFavoriteDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let (kind, item_id) = require_path(path)?;
    let kind = FavoriteKind::from_plural(&kind)
        .ok_or_else(|| AppError::NotFound(format!("Unknown favorite kind: {}", kind)))?;

    let params = AddFavoriteParams::from_dto(kind, item_id, require_body(payload)?)?;

    let service = FavoriteService::new(&state.db);

    let id = service.add(params).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedDto {
            msg: format!("{} added to favorites", kind.noun()),
            id,
        }),
    ))
}

/// Remove an item from a user's favorites.
///
/// The kind segment is singular: `people`, `planet` or `starship`.
///
/// # Returns
/// - `200 OK` - Favorite removed
/// - `400 Bad Request` - Missing body or `user_id`
/// - `404 Not Found` - Unknown kind, or the user has not favorited this item
/// - `500 Internal Server Error` - Database error, nothing was deleted
#[utoipa::path(
    delete,
    path = "/favorite/{kind}/{item_id}",
    tag = FAVORITE_TAG,
    params(
        ("kind" = String, Path, description = "people, planet or starship"),
        ("item_id" = i32, Path, description = "ID of the favorited item")
    ),
    request_body = RemoveFavoriteDto,
    responses(
        (status = 200, description = "Favorite removed", body = MessageDto),
        (status = 400, description = "Missing body or user_id", body = MessageDto),
        (status = 404, description = "Unknown kind or favorite not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn remove_favorite(
    State(state): State<AppState>,
    path: Result<Path<(String, i32)>, PathRejection>,
    payload: Result<Json<RemoveFavoriteDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let (kind, item_id) = require_path(path)?;
    let kind = FavoriteKind::from_singular(&kind)
        .ok_or_else(|| AppError::NotFound(format!("Unknown favorite kind: {}", kind)))?;

    let params = RemoveFavoriteParams::from_dto(kind, item_id, require_body(payload)?)?;

    let service = FavoriteService::new(&state.db);

    service.remove(params).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new(format!(
            "{} removed from favorites",
            kind.noun()
        ))),
    ))
}
