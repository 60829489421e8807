use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::{api::MessageDto, favorite::FavoriteKind};

#[derive(Error, Debug, PartialEq)]
pub enum FavoriteError {
    /// The user already has this item among their favorites of this kind.
    ///
    /// Raised both by the pre-insert lookup and by the storage unique index
    /// when two requests race. Results in a 400 Bad Request response.
    #[error("User {user_id} already favorited {kind} {item_id}")]
    AlreadyFavorited {
        kind: FavoriteKind,
        user_id: i32,
        item_id: i32,
    },

    /// No favorite row links this user to this item.
    ///
    /// Results in a 404 Not Found response.
    #[error("User {user_id} has no favorite {kind} {item_id}")]
    NotFound {
        kind: FavoriteKind,
        user_id: i32,
        item_id: i32,
    },
}

/// Converts favorite errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `AlreadyFavorited`
/// - 404 Not Found - For `NotFound`
impl IntoResponse for FavoriteError {
    fn into_response(self) -> Response {
        match self {
            Self::AlreadyFavorited { kind, .. } => (
                StatusCode::BAD_REQUEST,
                Json(MessageDto::new(format!(
                    "This {} is already in favorites",
                    kind.noun().to_lowercase()
                ))),
            )
                .into_response(),
            Self::NotFound { .. } => (
                StatusCode::NOT_FOUND,
                Json(MessageDto::new("Favorite not found")),
            )
                .into_response(),
        }
    }
}
