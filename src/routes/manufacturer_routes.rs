use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::manufacturer_controller::ManufacturerController;
use crate::dto::common::ApiResponse;
use crate::dto::manufacturer_dto::{
    CreateManufacturerRequest, ManufacturerResponse, UpdateManufacturerRequest,
};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_manufacturer_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_manufacturers).post(create_manufacturer))
        .route(
            "/:id",
            get(get_manufacturer)
                .put(update_manufacturer)
                .delete(delete_manufacturer),
        )
}

async fn create_manufacturer(
    State(state): State<AppState>,
    Json(request): Json<CreateManufacturerRequest>,
) -> Result<impl IntoResponse, AppError> {
    let controller = ManufacturerController::new(state.pool.clone());
    let response = controller.create(request).await?;
    let location = format!("/api/manufacturers/{}", response.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(ApiResponse::success_with_message(
            response,
            "Fabricante creado exitosamente".to_string(),
        )),
    ))
}

async fn list_manufacturers(
    State(state): State<AppState>,
) -> Result<Json<Vec<ManufacturerResponse>>, AppError> {
    let controller = ManufacturerController::new(state.pool.clone());
    Ok(Json(controller.list().await?))
}

async fn get_manufacturer(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ManufacturerResponse>, AppError> {
    let controller = ManufacturerController::new(state.pool.clone());
    Ok(Json(controller.get_by_id(id).await?))
}

async fn update_manufacturer(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateManufacturerRequest>,
) -> Result<StatusCode, AppError> {
    let controller = ManufacturerController::new(state.pool.clone());
    controller.update(id, request).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn delete_manufacturer(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    let controller = ManufacturerController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
