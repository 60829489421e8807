//! HTTP routing and OpenAPI documentation configuration.
//!
//! Every API endpoint is registered here with its OpenAPI specification. The collected
//! document backs both the Swagger UI at `/docs` and the HTML sitemap at `/`.

use axum::{response::Html, routing::get, Router};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, state::AppState};

#[derive(OpenApi)]
#[openapi(
    info(title = "Holonet", description = "Users, people, planets, starships and favorites"),
    tags(
        (name = controller::user::USER_TAG, description = "Users and their favorites"),
        (name = controller::item::ITEM_TAG, description = "People, planets and starships"),
        (name = controller::favorite::FAVORITE_TAG, description = "Adding and removing favorites"),
    )
)]
struct ApiDoc;

fn api_router() -> OpenApiRouter<AppState> {
    OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::user::get_users, controller::user::create_user))
        .routes(routes!(controller::user::delete_user))
        .routes(routes!(controller::user::get_user_favorites))
        .routes(routes!(controller::user::get_user_with_favorites))
        .routes(routes!(controller::item::get_peoples, controller::item::create_people))
        .routes(routes!(controller::item::get_people, controller::item::delete_people))
        .routes(routes!(controller::item::get_planets, controller::item::create_planet))
        .routes(routes!(controller::item::get_planet, controller::item::delete_planet))
        .routes(routes!(controller::item::get_starships, controller::item::create_starship))
        .routes(routes!(controller::item::get_starship, controller::item::delete_starship))
        .routes(routes!(
            controller::favorite::add_favorite,
            controller::favorite::remove_favorite
        ))
}

/// The OpenAPI document describing every registered endpoint.
#[cfg(test)]
pub fn openapi() -> utoipa::openapi::OpenApi {
    let (_, api) = api_router().split_for_parts();
    api
}

/// Builds the application's HTTP router.
///
/// # Registered Endpoints
/// - `GET /` - HTML sitemap of the endpoints below
/// - `GET|POST /user`, `DELETE /user/{user_id}` - Users
/// - `GET /users/favorites?user_id=` - A user's favorites by kind
/// - `GET /favorite/{user_id}` - A user nested with their favorites
/// - `GET|POST /peoples|/planets|/starships` - List and create items
/// - `GET|DELETE /people/{id}|/planets/{id}|/starships/{id}` - Get and delete items
/// - `POST /favorite/{peoples|planets|starships}/{item_id}` - Add a favorite
/// - `DELETE /favorite/{people|planet|starship}/{item_id}` - Remove a favorite
/// - `GET /docs` - Swagger UI, with the document at `/docs/openapi.json`
pub fn router() -> Router<AppState> {
    let (routes, api) = api_router().split_for_parts();

    let sitemap = Html(controller::sitemap::render(&api));

    routes
        .route("/", get(move || async move { sitemap }))
        .merge(SwaggerUi::new("/docs").url("/docs/openapi.json", api))
}
