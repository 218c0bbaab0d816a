use crate::models::vehicle::Vehicle;
use crate::utils::errors::{not_found_error, AppError};
use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

/// Valores validados de un vehículo listos para persistir
#[derive(Debug, Clone)]
pub struct NewVehicle {
    pub model: String,
    pub year: i32,
    pub odometer: f64,
    pub plate: String,
    pub manufacturer_id: Uuid,
}

pub struct VehicleRepository {
    pool: PgPool,
}

impl VehicleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, data: NewVehicle) -> Result<Vehicle, AppError> {
        let mut tx = self.pool.begin().await?;

        // El fabricante debe existir antes de cualquier escritura
        Self::ensure_manufacturer_exists(&mut tx, data.manufacturer_id).await?;

        if Self::plate_exists(&mut tx, &data.plate, None).await? {
            return Err(AppError::Conflict("La placa ya está registrada".to_string()));
        }

        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            INSERT INTO vehicles (id, model, year, odometer, plate, manufacturer_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(data.model)
        .bind(data.year)
        .bind(data.odometer)
        .bind(data.plate)
        .bind(data.manufacturer_id)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(vehicle)
    }

    pub async fn find_all(&self) -> Result<Vec<Vehicle>, AppError> {
        let vehicles =
            sqlx::query_as::<_, Vehicle>("SELECT * FROM vehicles ORDER BY created_at DESC")
                .fetch_all(&self.pool)
                .await?;

        Ok(vehicles)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Vehicle>, AppError> {
        let vehicle = sqlx::query_as::<_, Vehicle>("SELECT * FROM vehicles WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(vehicle)
    }

    pub async fn update(&self, id: Uuid, data: NewVehicle) -> Result<Vehicle, AppError> {
        let mut tx = self.pool.begin().await?;

        Self::ensure_manufacturer_exists(&mut tx, data.manufacturer_id).await?;

        if Self::plate_exists(&mut tx, &data.plate, Some(id)).await? {
            return Err(AppError::Conflict("La placa ya está registrada".to_string()));
        }

        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            UPDATE vehicles
            SET model = $2, year = $3, odometer = $4, plate = $5, manufacturer_id = $6
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(data.model)
        .bind(data.year)
        .bind(data.odometer)
        .bind(data.plate)
        .bind(data.manufacturer_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| not_found_error("Vehículo"))?;

        tx.commit().await?;
        Ok(vehicle)
    }

    /// Borrado bloqueado con 409 si el vehículo tiene alquileres asociados
    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;

        let (has_rentals,): (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM rentals WHERE vehicle_id = $1)")
                .bind(id)
                .fetch_one(&mut *tx)
                .await?;

        if has_rentals {
            return Err(AppError::Conflict(
                "El vehículo tiene alquileres asociados".to_string(),
            ));
        }

        sqlx::query("DELETE FROM vehicles WHERE id = $1 RETURNING id")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| not_found_error("Vehículo"))?;

        tx.commit().await?;
        Ok(())
    }

    async fn ensure_manufacturer_exists(
        conn: &mut PgConnection,
        manufacturer_id: Uuid,
    ) -> Result<(), AppError> {
        let (exists,): (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM manufacturers WHERE id = $1)")
                .bind(manufacturer_id)
                .fetch_one(&mut *conn)
                .await?;

        if !exists {
            return Err(not_found_error("Fabricante"));
        }
        Ok(())
    }

    async fn plate_exists(
        conn: &mut PgConnection,
        plate: &str,
        exclude_id: Option<Uuid>,
    ) -> Result<bool, AppError> {
        let (exists,): (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM vehicles WHERE plate = $1 AND ($2::uuid IS NULL OR id <> $2))",
        )
        .bind(plate)
        .bind(exclude_id)
        .fetch_one(&mut *conn)
        .await?;

        Ok(exists)
    }
}
