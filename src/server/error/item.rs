use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::{api::MessageDto, favorite::FavoriteKind};

#[derive(Error, Debug, PartialEq)]
pub enum ItemError {
    /// No row of the given kind exists with the given ID.
    ///
    /// Results in a 404 Not Found response naming the kind.
    #[error("{} {id} not found", .kind.noun())]
    NotFound {
        /// Kind of item that was looked up
        kind: FavoriteKind,
        /// ID that was looked up
        id: i32,
    },
}

impl IntoResponse for ItemError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound { kind, .. } => (
                StatusCode::NOT_FOUND,
                Json(MessageDto::new(format!("{} not found", kind.noun()))),
            )
                .into_response(),
        }
    }
}
