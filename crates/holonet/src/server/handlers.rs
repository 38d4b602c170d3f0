use axum::{
    extract::{Path, Query, State},
    Json,
};
use holonet_core::error::ValidationError;
use holonet_core::pagination::PaginatedOutput;
use holonet_core::swapi::Record;

use super::error::ApiError;
use super::AppState;
use crate::swapi::{characters_data, residents_data, search_data};

#[derive(Debug, Default, PartialEq)]
pub struct CharactersQuery {
    pub ordenar: Option<String>,
    pub page: Option<String>,
}

impl CharactersQuery {
    /// Pick `ordenar` and `page` out of the raw query pairs
    ///
    /// A parameter given more than once is invalid for its field. Unknown
    /// parameters are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Result<Self, ValidationError> {
        let mut query = CharactersQuery::default();

        for (key, value) in pairs {
            let (slot, invalid): (_, fn(String) -> ValidationError) = match key.as_str() {
                "ordenar" => (&mut query.ordenar, ValidationError::InvalidSort),
                "page" => (&mut query.page, ValidationError::InvalidPage),
                _ => continue,
            };

            if let Some(first) = slot.take() {
                return Err(invalid(format!("{first},{value}")));
            }
            *slot = Some(value);
        }

        Ok(query)
    }
}

/// `GET /residentes`
pub async fn residents(State(state): State<AppState>) -> Result<Json<Vec<Record>>, ApiError> {
    log::debug!("GET /residentes");

    let residents = residents_data(&state.client)
        .await
        .map_err(ApiError::Residents)?;

    Ok(Json(residents))
}

/// `GET /personaje/{nombre}`
pub async fn search(
    State(state): State<AppState>,
    Path(nombre): Path<String>,
) -> Result<Json<Vec<Record>>, ApiError> {
    log::debug!("GET /personaje/{nombre}");

    let results = search_data(&state.client, &nombre)
        .await
        .map_err(ApiError::Search)?;

    Ok(Json(results))
}

/// `GET /personajes?ordenar=&page=`
pub async fn characters(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<PaginatedOutput<Record>>, ApiError> {
    let query = CharactersQuery::from_pairs(pairs)?;
    log::debug!("GET /personajes {query:?}");

    let output = characters_data(
        &state.client,
        query.ordenar.as_deref(),
        query.page.as_deref(),
    )
    .await?;

    Ok(Json(output))
}
