//! Controller de alquileres
//!
//! Orquesta el ciclo de vida del alquiler: validación estructural primero
//! (fail fast, sin escrituras parciales), después referencias, chequeo de
//! solapamiento y cálculo del total, todo delegado al repositorio dentro
//! de una transacción.

use crate::dto::rental_dto::{
    CreateRentalRequest, RentalDetailResponse, RentalFilterQuery, RentalResponse,
    RentalSummaryResponse, UpdateRentalRequest,
};
use crate::repositories::rental_repository::{NewRental, RentalRepository};
use crate::services::rental_scheduling::compute_total;
use crate::utils::errors::AppError;
use chrono::{NaiveDate, NaiveTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

pub struct RentalController {
    repository: RentalRepository,
}

impl RentalController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: RentalRepository::new(pool),
        }
    }

    pub async fn create(&self, request: CreateRentalRequest) -> Result<RentalResponse, AppError> {
        request.validate()?;

        // Cálculo automático: solo sobrescribe el total informado cuando la
        // duración es estrictamente positiva (paridad con el comportamiento
        // de referencia).
        let total_price = compute_total(request.start_date, request.end_date, request.daily_rate)
            .unwrap_or(request.total_price);

        let rental = self
            .repository
            .create(NewRental {
                customer_id: request.customer_id,
                vehicle_id: request.vehicle_id,
                employee_id: request.employee_id,
                start_date: request.start_date,
                end_date: request.end_date,
                return_date: request.return_date,
                start_odometer: request.start_odometer,
                end_odometer: request.end_odometer,
                daily_rate: request.daily_rate,
                total_price,
            })
            .await?;

        Ok(rental.into())
    }

    pub async fn update(&self, id: Uuid, request: UpdateRentalRequest) -> Result<(), AppError> {
        if id != request.id {
            return Err(AppError::BadRequest(
                "El ID informado no corresponde al alquiler".to_string(),
            ));
        }

        request.validate()?;

        // Reemplazo completo: el total informado se persiste tal cual,
        // el update no recalcula precios.
        self.repository
            .update(
                id,
                NewRental {
                    customer_id: request.customer_id,
                    vehicle_id: request.vehicle_id,
                    employee_id: request.employee_id,
                    start_date: request.start_date,
                    end_date: request.end_date,
                    return_date: request.return_date,
                    start_odometer: request.start_odometer,
                    end_odometer: request.end_odometer,
                    daily_rate: request.daily_rate,
                    total_price: request.total_price,
                },
            )
            .await?;

        Ok(())
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.repository.delete(id).await
    }

    pub async fn list(&self) -> Result<Vec<RentalDetailResponse>, AppError> {
        let rentals = self.repository.find_all_expanded().await?;
        Ok(rentals.into_iter().map(Into::into).collect())
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<RentalDetailResponse, AppError> {
        let rental = self
            .repository
            .find_expanded_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Alquiler no encontrado".to_string()))?;

        Ok(rental.into())
    }

    pub async fn list_summaries(&self) -> Result<Vec<RentalSummaryResponse>, AppError> {
        let rentals = self.repository.find_summaries().await?;
        Ok(rentals.into_iter().map(Into::into).collect())
    }

    pub async fn filter(
        &self,
        query: RentalFilterQuery,
    ) -> Result<Vec<RentalSummaryResponse>, AppError> {
        let inicio = to_start_of_day(query.inicio);
        let fim = to_start_of_day(query.fim);

        let rentals = self
            .repository
            .find_by_customer_and_period(&query.cliente, inicio, fim)
            .await?;

        Ok(rentals.into_iter().map(Into::into).collect())
    }
}

/// Los parámetros `inicio`/`fim` llegan como fecha simple; se comparan
/// contra los timestamps al inicio del día en UTC.
fn to_start_of_day(date: NaiveDate) -> chrono::DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}
