//! Handlers for people, planets and starships.
//!
//! Every kind exposes the same four operations. The public handlers only exist so each
//! route gets its own OpenAPI entry; they all delegate to the kind-parameterized
//! functions at the bottom of this module.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::{
    model::{
        api::MessageDto,
        favorite::FavoriteKind,
        item::{CreateItemDto, ItemDto},
    },
    server::{
        error::AppError,
        model::item::{CreateItemParams, Item},
        service::item::ItemService,
        state::AppState,
        util::request::{require_body, require_path},
    },
};

/// Tag for grouping item endpoints in OpenAPI documentation
pub static ITEM_TAG: &str = "item";

/// List every person.
#[utoipa::path(
    get,
    path = "/peoples",
    tag = ITEM_TAG,
    responses(
        (status = 200, description = "Every person", body = Vec<ItemDto>),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_peoples(State(state): State<AppState>) -> Result<Response, AppError> {
    list(&state, FavoriteKind::People).await
}

/// Get a person by ID.
#[utoipa::path(
    get,
    path = "/people/{people_id}",
    tag = ITEM_TAG,
    params(("people_id" = i32, Path, description = "Person ID")),
    responses(
        (status = 200, description = "The person", body = ItemDto),
        (status = 400, description = "Non-numeric id", body = MessageDto),
        (status = 404, description = "Person not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_people(
    State(state): State<AppState>,
    people_id: Result<Path<i32>, PathRejection>,
) -> Result<Response, AppError> {
    get(&state, FavoriteKind::People, require_path(people_id)?).await
}

/// Create a person.
#[utoipa::path(
    post,
    path = "/peoples",
    tag = ITEM_TAG,
    request_body = CreateItemDto,
    responses(
        (status = 201, description = "Person created", body = ItemDto),
        (status = 400, description = "Missing body or field", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn create_people(
    State(state): State<AppState>,
    payload: Result<Json<CreateItemDto>, JsonRejection>,
) -> Result<Response, AppError> {
    create(&state, FavoriteKind::People, payload).await
}

/// Delete a person and every favorite pointing at them.
#[utoipa::path(
    delete,
    path = "/people/{people_id}",
    tag = ITEM_TAG,
    params(("people_id" = i32, Path, description = "Person ID")),
    responses(
        (status = 200, description = "Person deleted", body = MessageDto),
        (status = 400, description = "Non-numeric id", body = MessageDto),
        (status = 404, description = "Person not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn delete_people(
    State(state): State<AppState>,
    people_id: Result<Path<i32>, PathRejection>,
) -> Result<Response, AppError> {
    delete(&state, FavoriteKind::People, require_path(people_id)?).await
}

/// List every planet.
#[utoipa::path(
    get,
    path = "/planets",
    tag = ITEM_TAG,
    responses(
        (status = 200, description = "Every planet", body = Vec<ItemDto>),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_planets(State(state): State<AppState>) -> Result<Response, AppError> {
    list(&state, FavoriteKind::Planet).await
}

/// Get a planet by ID.
#[utoipa::path(
    get,
    path = "/planets/{planet_id}",
    tag = ITEM_TAG,
    params(("planet_id" = i32, Path, description = "Planet ID")),
    responses(
        (status = 200, description = "The planet", body = ItemDto),
        (status = 400, description = "Non-numeric id", body = MessageDto),
        (status = 404, description = "Planet not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_planet(
    State(state): State<AppState>,
    planet_id: Result<Path<i32>, PathRejection>,
) -> Result<Response, AppError> {
    get(&state, FavoriteKind::Planet, require_path(planet_id)?).await
}

/// Create a planet.
#[utoipa::path(
    post,
    path = "/planets",
    tag = ITEM_TAG,
    request_body = CreateItemDto,
    responses(
        (status = 201, description = "Planet created", body = ItemDto),
        (status = 400, description = "Missing body or field", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn create_planet(
    State(state): State<AppState>,
    payload: Result<Json<CreateItemDto>, JsonRejection>,
) -> Result<Response, AppError> {
    create(&state, FavoriteKind::Planet, payload).await
}

/// Delete a planet and every favorite pointing at it.
#[utoipa::path(
    delete,
    path = "/planets/{planet_id}",
    tag = ITEM_TAG,
    params(("planet_id" = i32, Path, description = "Planet ID")),
    responses(
        (status = 200, description = "Planet deleted", body = MessageDto),
        (status = 400, description = "Non-numeric id", body = MessageDto),
        (status = 404, description = "Planet not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn delete_planet(
    State(state): State<AppState>,
    planet_id: Result<Path<i32>, PathRejection>,
) -> Result<Response, AppError> {
    delete(&state, FavoriteKind::Planet, require_path(planet_id)?).await
}

/// List every starship.
#[utoipa::path(
    get,
    path = "/starships",
    tag = ITEM_TAG,
    responses(
        (status = 200, description = "Every starship", body = Vec<ItemDto>),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_starships(State(state): State<AppState>) -> Result<Response, AppError> {
    list(&state, FavoriteKind::Starship).await
}

/// Get a starship by ID.
#[utoipa::path(
    get,
    path = "/starships/{starship_id}",
    tag = ITEM_TAG,
    params(("starship_id" = i32, Path, description = "Starship ID")),
    responses(
        (status = 200, description = "The starship", body = ItemDto),
        (status = 400, description = "Non-numeric id", body = MessageDto),
        (status = 404, description = "Starship not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_starship(
    State(state): State<AppState>,
    starship_id: Result<Path<i32>, PathRejection>,
) -> Result<Response, AppError> {
    get(&state, FavoriteKind::Starship, require_path(starship_id)?).await
}

/// Create a starship.
#[utoipa::path(
    post,
    path = "/starships",
    tag = ITEM_TAG,
    request_body = CreateItemDto,
    responses(
        (status = 201, description = "Starship created", body = ItemDto),
        (status = 400, description = "Missing body or field", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn create_starship(
    State(state): State<AppState>,
    payload: Result<Json<CreateItemDto>, JsonRejection>,
) -> Result<Response, AppError> {
    create(&state, FavoriteKind::Starship, payload).await
}

/// Delete a starship and every favorite pointing at it.
#[utoipa::path(
    delete,
    path = "/starships/{starship_id}",
    tag = ITEM_TAG,
    params(("starship_id" = i32, Path, description = "Starship ID")),
    responses(
        (status = 200, description = "Starship deleted", body = MessageDto),
        (status = 400, description = "Non-numeric id", body = MessageDto),
        (status = 404, description = "Starship not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn delete_starship(
    State(state): State<AppState>,
    starship_id: Result<Path<i32>, PathRejection>,
) -> Result<Response, AppError> {
    delete(&state, FavoriteKind::Starship, require_path(starship_id)?).await
}

async fn list(state: &AppState, kind: FavoriteKind) -> Result<Response, AppError> {
    let service = ItemService::new(&state.db);

    let items = service.get_all(kind).await?;
    let dtos: Vec<ItemDto> = items.into_iter().map(Item::into_dto).collect();

    Ok((StatusCode::OK, Json(dtos)).into_response())
}

async fn get(state: &AppState, kind: FavoriteKind, id: i32) -> Result<Response, AppError> {
    let service = ItemService::new(&state.db);

    let item = service.get_by_id(kind, id).await?;

    Ok((StatusCode::OK, Json(item.into_dto())).into_response())
}

async fn create(
    state: &AppState,
    kind: FavoriteKind,
    payload: Result<Json<CreateItemDto>, JsonRejection>,
) -> Result<Response, AppError> {
    let params = CreateItemParams::from_dto(kind, require_body(payload)?)?;

    let service = ItemService::new(&state.db);

    let item = service.create(params).await?;

    Ok((StatusCode::CREATED, Json(item.into_dto())).into_response())
}

async fn delete(state: &AppState, kind: FavoriteKind, id: i32) -> Result<Response, AppError> {
    let service = ItemService::new(&state.db);

    service.delete(kind, id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new(format!("{} deleted", kind.noun()))),
    )
        .into_response())
}
