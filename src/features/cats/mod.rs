pub mod body;
pub mod model;

use crate::AppState;
use crate::domain::CatFields;
use crate::error::ApiResult;
use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};
use body::CatBody;
use model::{JsonCat, JsonMessage, JsonWriteResult};

// mounted under /cats
pub fn cats_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_cats_handler).post(create_cat_handler))
        .route(
            "/{id}",
            get(get_cat_handler)
                .put(update_cat_handler)
                .delete(delete_cat_handler),
        )
}

async fn list_cats_handler(State(state): State<AppState>) -> ApiResult<Json<Vec<JsonCat>>> {
    let cats = state.repo.get_all_cats().await?;

    Ok(Json(cats.into_iter().map(JsonCat::from).collect()))
}

// answers with a list so an unknown id is an empty result rather than a 404.
// the id is bound as given, a non-numeric one just matches nothing
async fn get_cat_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Vec<JsonCat>>> {
    let cat = state.repo.get_cat_by_id(&id).await?;

    Ok(Json(cat.into_iter().map(JsonCat::from).collect()))
}

async fn create_cat_handler(
    State(state): State<AppState>,
    CatBody(payload): CatBody,
) -> ApiResult<Json<JsonWriteResult>> {
    let fields = CatFields::from(payload);
    let outcome = state.repo.insert_cat(&fields).await?;

    tracing::info!(id = ?outcome.last_insert_id, name = %fields.name, "Created cat");

    Ok(Json(outcome.into()))
}

async fn update_cat_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    CatBody(payload): CatBody,
) -> ApiResult<Json<JsonWriteResult>> {
    let fields = CatFields::from(payload);
    let outcome = state.repo.update_cat(&id, &fields).await?;

    tracing::info!(%id, rows = outcome.rows_affected, "Updated cat");

    Ok(Json(outcome.into()))
}

async fn delete_cat_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<JsonMessage>> {
    let outcome = state.repo.delete_cat(&id).await?;

    tracing::info!(%id, rows = outcome.rows_affected, "Deleted cat");

    Ok(Json(JsonMessage {
        message: format!("Record Num :{id} deleted successfully"),
    }))
}
