use crate::models::manufacturer::Manufacturer;
use crate::utils::errors::{conflict_error, not_found_error, AppError};
use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

pub struct ManufacturerRepository {
    pool: PgPool,
}

impl ManufacturerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, name: String) -> Result<Manufacturer, AppError> {
        let mut tx = self.pool.begin().await?;

        if Self::name_exists(&mut tx, &name, None).await? {
            return Err(conflict_error("El nombre del fabricante"));
        }

        let manufacturer = sqlx::query_as::<_, Manufacturer>(
            "INSERT INTO manufacturers (id, name) VALUES ($1, $2) RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(name)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(manufacturer)
    }

    pub async fn find_all(&self) -> Result<Vec<Manufacturer>, AppError> {
        let manufacturers = sqlx::query_as::<_, Manufacturer>(
            "SELECT * FROM manufacturers ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(manufacturers)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Manufacturer>, AppError> {
        let manufacturer =
            sqlx::query_as::<_, Manufacturer>("SELECT * FROM manufacturers WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(manufacturer)
    }

    pub async fn update(&self, id: Uuid, name: String) -> Result<Manufacturer, AppError> {
        let mut tx = self.pool.begin().await?;

        if Self::name_exists(&mut tx, &name, Some(id)).await? {
            return Err(conflict_error("El nombre del fabricante"));
        }

        let manufacturer = sqlx::query_as::<_, Manufacturer>(
            "UPDATE manufacturers SET name = $2 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(name)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| not_found_error("Fabricante"))?;

        tx.commit().await?;
        Ok(manufacturer)
    }

    /// Borrado bloqueado con 409 si el fabricante tiene vehículos asociados
    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;

        let (has_vehicles,): (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM vehicles WHERE manufacturer_id = $1)")
                .bind(id)
                .fetch_one(&mut *tx)
                .await?;

        if has_vehicles {
            return Err(AppError::Conflict(
                "El fabricante tiene vehículos asociados".to_string(),
            ));
        }

        sqlx::query("DELETE FROM manufacturers WHERE id = $1 RETURNING id")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| not_found_error("Fabricante"))?;

        tx.commit().await?;
        Ok(())
    }

    async fn name_exists(
        conn: &mut PgConnection,
        name: &str,
        exclude_id: Option<Uuid>,
    ) -> Result<bool, AppError> {
        let (exists,): (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM manufacturers WHERE name = $1 AND ($2::uuid IS NULL OR id <> $2))",
        )
        .bind(name)
        .bind(exclude_id)
        .fetch_one(&mut *conn)
        .await?;

        Ok(exists)
    }
}
