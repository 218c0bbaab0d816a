use crate::models::customer::Customer;
use crate::utils::errors::{conflict_error, not_found_error, AppError};
use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

/// Valores validados de un cliente listos para persistir
#[derive(Debug, Clone)]
pub struct NewCustomer {
    pub name: String,
    pub tax_id: String,
    pub email: String,
}

pub struct CustomerRepository {
    pool: PgPool,
}

impl CustomerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, data: NewCustomer) -> Result<Customer, AppError> {
        let mut tx = self.pool.begin().await?;

        Self::check_unique_fields(&mut tx, &data.tax_id, &data.email, None).await?;

        let customer = sqlx::query_as::<_, Customer>(
            "INSERT INTO customers (id, name, tax_id, email) VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(data.name)
        .bind(data.tax_id)
        .bind(data.email)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(customer)
    }

    pub async fn find_all(&self) -> Result<Vec<Customer>, AppError> {
        let customers =
            sqlx::query_as::<_, Customer>("SELECT * FROM customers ORDER BY created_at DESC")
                .fetch_all(&self.pool)
                .await?;

        Ok(customers)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Customer>, AppError> {
        let customer = sqlx::query_as::<_, Customer>("SELECT * FROM customers WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(customer)
    }

    pub async fn update(&self, id: Uuid, data: NewCustomer) -> Result<Customer, AppError> {
        let mut tx = self.pool.begin().await?;

        Self::check_unique_fields(&mut tx, &data.tax_id, &data.email, Some(id)).await?;

        let customer = sqlx::query_as::<_, Customer>(
            "UPDATE customers SET name = $2, tax_id = $3, email = $4 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(data.name)
        .bind(data.tax_id)
        .bind(data.email)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| not_found_error("Cliente"))?;

        tx.commit().await?;
        Ok(customer)
    }

    /// Borrado bloqueado con 409 si el cliente tiene alquileres asociados
    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;

        let (has_rentals,): (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM rentals WHERE customer_id = $1)")
                .bind(id)
                .fetch_one(&mut *tx)
                .await?;

        if has_rentals {
            return Err(AppError::Conflict(
                "El cliente tiene alquileres asociados".to_string(),
            ));
        }

        sqlx::query("DELETE FROM customers WHERE id = $1 RETURNING id")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| not_found_error("Cliente"))?;

        tx.commit().await?;
        Ok(())
    }

    async fn check_unique_fields(
        conn: &mut PgConnection,
        tax_id: &str,
        email: &str,
        exclude_id: Option<Uuid>,
    ) -> Result<(), AppError> {
        let (tax_id_taken,): (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM customers WHERE tax_id = $1 AND ($2::uuid IS NULL OR id <> $2))",
        )
        .bind(tax_id)
        .bind(exclude_id)
        .fetch_one(&mut *conn)
        .await?;

        if tax_id_taken {
            return Err(conflict_error("El CPF"));
        }

        let (email_taken,): (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM customers WHERE email = $1 AND ($2::uuid IS NULL OR id <> $2))",
        )
        .bind(email)
        .bind(exclude_id)
        .fetch_one(&mut *conn)
        .await?;

        if email_taken {
            return Err(conflict_error("El e-mail"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::testing;

    #[tokio::test]
    async fn test_cpf_duplicado_devuelve_conflicto_sin_persistir() {
        let Some(pool) = testing::pool().await else { return };
        let repo = CustomerRepository::new(pool.clone());

        let tax_id = testing::unique_tax_id();
        repo.create(NewCustomer {
            name: "Titular".to_string(),
            tax_id: tax_id.clone(),
            email: testing::unique_email("titular"),
        })
        .await
        .unwrap();

        let err = repo
            .create(NewCustomer {
                name: "Duplicado".to_string(),
                tax_id: tax_id.clone(),
                email: testing::unique_email("duplicado"),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));

        // El rechazo no deja nada escrito
        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM customers WHERE tax_id = $1")
                .bind(&tax_id)
                .fetch_one(&pool)
                .await
                .unwrap();
        assert_eq!(count, 1);
    }
}
