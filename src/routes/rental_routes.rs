use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::rental_controller::RentalController;
use crate::dto::common::ApiResponse;
use crate::dto::rental_dto::{
    CreateRentalRequest, RentalDetailResponse, RentalFilterQuery, RentalSummaryResponse,
    UpdateRentalRequest,
};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_rental_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_rentals).post(create_rental))
        // El path `detailes` es parte de la interfaz publicada
        .route("/detailes", get(list_rental_summaries))
        .route("/filtro", get(filter_rentals))
        .route(
            "/:id",
            get(get_rental).put(update_rental).delete(delete_rental),
        )
}

async fn create_rental(
    State(state): State<AppState>,
    Json(request): Json<CreateRentalRequest>,
) -> Result<impl IntoResponse, AppError> {
    let controller = RentalController::new(state.pool.clone());
    let response = controller.create(request).await?;
    let location = format!("/api/rentals/{}", response.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(ApiResponse::success_with_message(
            response,
            "Alquiler creado exitosamente".to_string(),
        )),
    ))
}

async fn list_rentals(
    State(state): State<AppState>,
) -> Result<Json<Vec<RentalDetailResponse>>, AppError> {
    let controller = RentalController::new(state.pool.clone());
    Ok(Json(controller.list().await?))
}

async fn get_rental(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<RentalDetailResponse>, AppError> {
    let controller = RentalController::new(state.pool.clone());
    Ok(Json(controller.get_by_id(id).await?))
}

async fn update_rental(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateRentalRequest>,
) -> Result<StatusCode, AppError> {
    let controller = RentalController::new(state.pool.clone());
    controller.update(id, request).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn delete_rental(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    let controller = RentalController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn list_rental_summaries(
    State(state): State<AppState>,
) -> Result<Json<Vec<RentalSummaryResponse>>, AppError> {
    let controller = RentalController::new(state.pool.clone());
    Ok(Json(controller.list_summaries().await?))
}

async fn filter_rentals(
    State(state): State<AppState>,
    Query(query): Query<RentalFilterQuery>,
) -> Result<Json<Vec<RentalSummaryResponse>>, AppError> {
    let controller = RentalController::new(state.pool.clone());
    Ok(Json(controller.filter(query).await?))
}
