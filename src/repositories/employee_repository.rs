use crate::models::employee::Employee;
use crate::utils::errors::{conflict_error, not_found_error, AppError};
use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

/// Valores validados de un empleado listos para persistir
#[derive(Debug, Clone)]
pub struct NewEmployee {
    pub name: String,
    pub tax_id: String,
    pub role: String,
    pub email: String,
}

pub struct EmployeeRepository {
    pool: PgPool,
}

impl EmployeeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, data: NewEmployee) -> Result<Employee, AppError> {
        let mut tx = self.pool.begin().await?;

        if Self::tax_id_exists(&mut tx, &data.tax_id, None).await? {
            return Err(conflict_error("El CPF"));
        }

        let employee = sqlx::query_as::<_, Employee>(
            r#"
            INSERT INTO employees (id, name, tax_id, role, email)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(data.name)
        .bind(data.tax_id)
        .bind(data.role)
        .bind(data.email)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(employee)
    }

    pub async fn find_all(&self) -> Result<Vec<Employee>, AppError> {
        let employees =
            sqlx::query_as::<_, Employee>("SELECT * FROM employees ORDER BY created_at DESC")
                .fetch_all(&self.pool)
                .await?;

        Ok(employees)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Employee>, AppError> {
        let employee = sqlx::query_as::<_, Employee>("SELECT * FROM employees WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(employee)
    }

    pub async fn update(&self, id: Uuid, data: NewEmployee) -> Result<Employee, AppError> {
        let mut tx = self.pool.begin().await?;

        if Self::tax_id_exists(&mut tx, &data.tax_id, Some(id)).await? {
            return Err(conflict_error("El CPF"));
        }

        let employee = sqlx::query_as::<_, Employee>(
            r#"
            UPDATE employees
            SET name = $2, tax_id = $3, role = $4, email = $5
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(data.name)
        .bind(data.tax_id)
        .bind(data.role)
        .bind(data.email)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| not_found_error("Empleado"))?;

        tx.commit().await?;
        Ok(employee)
    }

    /// Borrado bloqueado con 409 si el empleado registró alquileres
    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;

        let (has_rentals,): (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM rentals WHERE employee_id = $1)")
                .bind(id)
                .fetch_one(&mut *tx)
                .await?;

        if has_rentals {
            return Err(AppError::Conflict(
                "El empleado tiene alquileres registrados".to_string(),
            ));
        }

        sqlx::query("DELETE FROM employees WHERE id = $1 RETURNING id")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| not_found_error("Empleado"))?;

        tx.commit().await?;
        Ok(())
    }

    async fn tax_id_exists(
        conn: &mut PgConnection,
        tax_id: &str,
        exclude_id: Option<Uuid>,
    ) -> Result<bool, AppError> {
        let (exists,): (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM employees WHERE tax_id = $1 AND ($2::uuid IS NULL OR id <> $2))",
        )
        .bind(tax_id)
        .bind(exclude_id)
        .fetch_one(&mut *conn)
        .await?;

        Ok(exists)
    }
}
