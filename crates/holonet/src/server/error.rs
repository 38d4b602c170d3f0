use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use holonet_core::error::ValidationError;
use serde::Serialize;

use crate::error::{Error, FetchError};

pub const RESIDENTS_FAILED: &str = "Error al obtener los residentes de los planetas";
pub const CHARACTERS_FAILED: &str = "Error al obtener los personajes";
pub const INVALID_SORT: &str = "Parámetro de ordenar no válido";
pub const INVALID_PAGE: &str = "Parámetro de página no válido";

/// JSON error body
#[derive(Debug, Serialize)]
pub struct ErrorDto {
    pub error: String,
}

/// Failure of one endpoint, mapped to its status and body
///
/// The underlying cause is logged; clients only see the endpoint's message.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// `/residentes` answers failures as plain text.
    #[error("residents aggregation failed: {0}")]
    Residents(#[source] FetchError),

    /// `/personaje/{nombre}` exposes the failure message.
    #[error("character search failed: {0}")]
    Search(#[source] FetchError),

    #[error("characters listing failed: {0}")]
    Characters(#[source] FetchError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        match err {
            Error::Validation(err) => ApiError::Validation(err),
            Error::Fetch(err) => ApiError::Characters(err),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(err) => {
                log::warn!("Rejected request: {err}");
                let message = match err {
                    ValidationError::InvalidSort(_) => INVALID_SORT,
                    ValidationError::InvalidPage(_) => INVALID_PAGE,
                };
                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorDto {
                        error: message.to_string(),
                    }),
                )
                    .into_response()
            }
            ApiError::Residents(err) => {
                log::error!("Residents aggregation failed at {}: {err}", err.url());
                (StatusCode::INTERNAL_SERVER_ERROR, RESIDENTS_FAILED).into_response()
            }
            ApiError::Search(err) => {
                log::error!("Character search failed at {}: {err}", err.url());
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto {
                        error: err.to_string(),
                    }),
                )
                    .into_response()
            }
            ApiError::Characters(err) => {
                log::error!("Characters listing failed at {}: {err}", err.url());
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto {
                        error: CHARACTERS_FAILED.to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
