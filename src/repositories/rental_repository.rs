//! Repositorio de alquileres
//!
//! Las operaciones mutantes ejecutan verificación de referencias, chequeo
//! de solapamiento y escritura dentro de una única transacción que toma
//! `SELECT ... FOR UPDATE` sobre la fila del vehículo. La transacción por
//! sí sola no basta: en READ COMMITTED dos `create` concurrentes sobre el
//! mismo vehículo leerían snapshots que no ven el INSERT del otro y ambos
//! commitearían. El lock serializa los escritores por vehículo, así el
//! segundo chequeo de solapamiento corre recién cuando el primero commiteó
//! y ve su fila.

use crate::models::rental::{Rental, RentalExpandedRow, RentalSummaryRow};
use crate::utils::errors::{not_found_error, AppError};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

/// Valores validados de un alquiler listos para persistir.
/// El mismo struct alimenta el INSERT y el UPDATE de reemplazo completo.
#[derive(Debug, Clone)]
pub struct NewRental {
    pub customer_id: Uuid,
    pub vehicle_id: Uuid,
    pub employee_id: Uuid,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub return_date: Option<DateTime<Utc>>,
    pub start_odometer: f64,
    pub end_odometer: f64,
    pub daily_rate: Decimal,
    pub total_price: Decimal,
}

const EXPANDED_SELECT: &str = r#"
SELECT r.id, r.customer_id, r.vehicle_id, r.employee_id,
       r.start_date, r.end_date, r.return_date,
       r.start_odometer, r.end_odometer, r.daily_rate, r.total_price, r.created_at,
       c.name  AS customer_name, c.tax_id AS customer_tax_id, c.email AS customer_email,
       v.model AS vehicle_model, v.plate  AS vehicle_plate,   v.year  AS vehicle_year,
       e.name  AS employee_name, e.role   AS employee_role
FROM rentals r
JOIN customers c ON c.id = r.customer_id
JOIN vehicles  v ON v.id = r.vehicle_id
JOIN employees e ON e.id = r.employee_id
"#;

pub struct RentalRepository {
    pool: PgPool,
}

impl RentalRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, data: NewRental) -> Result<Rental, AppError> {
        let mut tx = self.pool.begin().await?;

        Self::ensure_references_exist(&mut tx, &data).await?;

        if Self::has_conflict(&mut tx, data.vehicle_id, data.start_date, data.end_date, None)
            .await?
        {
            return Err(AppError::Conflict(
                "Este vehículo ya está alquilado en ese período".to_string(),
            ));
        }

        let rental = sqlx::query_as::<_, Rental>(
            r#"
            INSERT INTO rentals
                (id, customer_id, vehicle_id, employee_id, start_date, end_date,
                 return_date, start_odometer, end_odometer, daily_rate, total_price)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(data.customer_id)
        .bind(data.vehicle_id)
        .bind(data.employee_id)
        .bind(data.start_date)
        .bind(data.end_date)
        .bind(data.return_date)
        .bind(data.start_odometer)
        .bind(data.end_odometer)
        .bind(data.daily_rate)
        .bind(data.total_price)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(rental)
    }

    pub async fn update(&self, id: Uuid, data: NewRental) -> Result<Rental, AppError> {
        let mut tx = self.pool.begin().await?;

        let (exists,): (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM rentals WHERE id = $1)")
            .bind(id)
            .fetch_one(&mut *tx)
            .await?;

        if !exists {
            return Err(not_found_error("Alquiler"));
        }

        Self::ensure_references_exist(&mut tx, &data).await?;

        // Chequeo de solapamiento excluyendo el propio registro
        if Self::has_conflict(&mut tx, data.vehicle_id, data.start_date, data.end_date, Some(id))
            .await?
        {
            return Err(AppError::Conflict(
                "Este vehículo ya está alquilado en ese período".to_string(),
            ));
        }

        // Reemplazo completo de columnas, sin merge. Si la fila desapareció
        // entre el chequeo y el UPDATE, se reporta como NotFound.
        let rental = sqlx::query_as::<_, Rental>(
            r#"
            UPDATE rentals
            SET customer_id = $2, vehicle_id = $3, employee_id = $4,
                start_date = $5, end_date = $6, return_date = $7,
                start_odometer = $8, end_odometer = $9,
                daily_rate = $10, total_price = $11
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(data.customer_id)
        .bind(data.vehicle_id)
        .bind(data.employee_id)
        .bind(data.start_date)
        .bind(data.end_date)
        .bind(data.return_date)
        .bind(data.start_odometer)
        .bind(data.end_odometer)
        .bind(data.daily_rate)
        .bind(data.total_price)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| not_found_error("Alquiler"))?;

        tx.commit().await?;
        Ok(rental)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        sqlx::query("DELETE FROM rentals WHERE id = $1 RETURNING id")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| not_found_error("Alquiler"))?;

        Ok(())
    }

    pub async fn find_all_expanded(&self) -> Result<Vec<RentalExpandedRow>, AppError> {
        let query = format!("{} ORDER BY r.created_at DESC", EXPANDED_SELECT);
        let rentals = sqlx::query_as::<_, RentalExpandedRow>(&query)
            .fetch_all(&self.pool)
            .await?;

        Ok(rentals)
    }

    pub async fn find_expanded_by_id(
        &self,
        id: Uuid,
    ) -> Result<Option<RentalExpandedRow>, AppError> {
        let query = format!("{} WHERE r.id = $1", EXPANDED_SELECT);
        let rental = sqlx::query_as::<_, RentalExpandedRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(rental)
    }

    /// Proyección resumida: cliente, modelo del vehículo y período
    pub async fn find_summaries(&self) -> Result<Vec<RentalSummaryRow>, AppError> {
        let rentals = sqlx::query_as::<_, RentalSummaryRow>(
            r#"
            SELECT c.name AS customer_name, v.model AS vehicle_model,
                   r.start_date, r.end_date
            FROM rentals r
            JOIN customers c ON c.id = r.customer_id
            JOIN vehicles  v ON v.id = r.vehicle_id
            ORDER BY r.start_date
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rentals)
    }

    /// Filtro por substring del nombre del cliente y período contenido
    /// (`start_date >= inicio AND end_date <= fim`)
    pub async fn find_by_customer_and_period(
        &self,
        customer_name: &str,
        inicio: DateTime<Utc>,
        fim: DateTime<Utc>,
    ) -> Result<Vec<RentalSummaryRow>, AppError> {
        let rentals = sqlx::query_as::<_, RentalSummaryRow>(
            r#"
            SELECT c.name AS customer_name, v.model AS vehicle_model,
                   r.start_date, r.end_date
            FROM rentals r
            JOIN customers c ON c.id = r.customer_id
            JOIN vehicles  v ON v.id = r.vehicle_id
            WHERE c.name LIKE '%' || $1 || '%'
              AND r.start_date >= $2
              AND r.end_date <= $3
            ORDER BY r.start_date
            "#,
        )
        .bind(customer_name)
        .bind(inicio)
        .bind(fim)
        .fetch_all(&self.pool)
        .await?;

        Ok(rentals)
    }

    /// Regla de solapamiento inclusivo sobre los alquileres persistidos:
    /// `existing.end_date >= start AND existing.start_date <= end`,
    /// la misma regla que enuncia y testea
    /// [`crate::services::rental_scheduling::intervals_overlap`].
    /// Se evalúa sobre la misma transacción que la escritura posterior,
    /// con el lock del vehículo ya tomado.
    async fn has_conflict(
        conn: &mut PgConnection,
        vehicle_id: Uuid,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
        exclude_rental_id: Option<Uuid>,
    ) -> Result<bool, AppError> {
        let (conflict,): (bool,) = sqlx::query_as(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM rentals
                WHERE vehicle_id = $1
                  AND end_date >= $2
                  AND start_date <= $3
                  AND ($4::uuid IS NULL OR id <> $4)
            )
            "#,
        )
        .bind(vehicle_id)
        .bind(start_date)
        .bind(end_date)
        .bind(exclude_rental_id)
        .fetch_one(&mut *conn)
        .await?;

        Ok(conflict)
    }

    /// Las referencias colgantes se rechazan antes de cualquier escritura.
    /// La fila del vehículo se toma con `FOR UPDATE`: ese lock es lo que
    /// serializa los escritores concurrentes del mismo vehículo antes del
    /// chequeo de solapamiento.
    async fn ensure_references_exist(
        conn: &mut PgConnection,
        data: &NewRental,
    ) -> Result<(), AppError> {
        let vehicle_lock: Option<(Uuid,)> =
            sqlx::query_as("SELECT id FROM vehicles WHERE id = $1 FOR UPDATE")
                .bind(data.vehicle_id)
                .fetch_optional(&mut *conn)
                .await?;
        if vehicle_lock.is_none() {
            return Err(not_found_error("Vehículo"));
        }

        let (customer_exists,): (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM customers WHERE id = $1)")
                .bind(data.customer_id)
                .fetch_one(&mut *conn)
                .await?;
        if !customer_exists {
            return Err(not_found_error("Cliente"));
        }

        let (employee_exists,): (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM employees WHERE id = $1)")
                .bind(data.employee_id)
                .fetch_one(&mut *conn)
                .await?;
        if !employee_exists {
            return Err(not_found_error("Empleado"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::testing;
    use chrono::TimeZone;

    fn alquiler(
        customer_id: Uuid,
        vehicle_id: Uuid,
        employee_id: Uuid,
        start_day: u32,
        end_day: u32,
    ) -> NewRental {
        NewRental {
            customer_id,
            vehicle_id,
            employee_id,
            start_date: Utc.with_ymd_and_hms(2031, 1, start_day, 0, 0, 0).unwrap(),
            end_date: Utc.with_ymd_and_hms(2031, 1, end_day, 0, 0, 0).unwrap(),
            return_date: None,
            start_odometer: 10_000.0,
            end_odometer: 10_500.0,
            daily_rate: Decimal::new(15_000, 2),
            total_price: Decimal::new(75_000, 2),
        }
    }

    #[tokio::test]
    async fn test_create_sobre_periodo_ocupado_devuelve_conflicto() {
        let Some(pool) = testing::pool().await else { return };
        let repo = RentalRepository::new(pool.clone());

        let customer = testing::seed_customer(&pool).await;
        let vehicle = testing::seed_vehicle(&pool).await;
        let employee = testing::seed_employee(&pool).await;

        repo.create(alquiler(customer.id, vehicle.id, employee.id, 5, 10))
            .await
            .unwrap();

        // El toque de borde (nuevo inicio == fin existente) también es conflicto
        let err = repo
            .create(alquiler(customer.id, vehicle.id, employee.id, 10, 15))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_creates_concurrentes_solo_uno_commitea() {
        let Some(pool) = testing::pool().await else { return };
        let repo = RentalRepository::new(pool.clone());

        let customer = testing::seed_customer(&pool).await;
        let vehicle = testing::seed_vehicle(&pool).await;
        let employee = testing::seed_employee(&pool).await;

        // Dos escritores simultáneos sobre el mismo vehículo y fechas
        // solapadas: el lock del vehículo los serializa y el segundo
        // tiene que ver la fila del primero.
        let (a, b) = tokio::join!(
            repo.create(alquiler(customer.id, vehicle.id, employee.id, 5, 10)),
            repo.create(alquiler(customer.id, vehicle.id, employee.id, 8, 12)),
        );

        let commits = [a.is_ok(), b.is_ok()].iter().filter(|ok| **ok).count();
        assert_eq!(commits, 1);

        let (persisted,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM rentals WHERE vehicle_id = $1")
                .bind(vehicle.id)
                .fetch_one(&pool)
                .await
                .unwrap();
        assert_eq!(persisted, 1);
    }

    #[tokio::test]
    async fn test_delete_de_id_inexistente_devuelve_not_found() {
        let Some(pool) = testing::pool().await else { return };
        let repo = RentalRepository::new(pool);

        let err = repo.delete(Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
