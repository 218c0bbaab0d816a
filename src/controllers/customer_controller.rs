use crate::dto::customer_dto::{CreateCustomerRequest, CustomerResponse, UpdateCustomerRequest};
use crate::repositories::customer_repository::{CustomerRepository, NewCustomer};
use crate::utils::errors::AppError;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

pub struct CustomerController {
    repository: CustomerRepository,
}

impl CustomerController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: CustomerRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateCustomerRequest,
    ) -> Result<CustomerResponse, AppError> {
        request.validate()?;

        let customer = self
            .repository
            .create(NewCustomer {
                name: request.name,
                tax_id: request.tax_id,
                email: request.email,
            })
            .await?;

        Ok(customer.into())
    }

    pub async fn list(&self) -> Result<Vec<CustomerResponse>, AppError> {
        let customers = self.repository.find_all().await?;
        Ok(customers.into_iter().map(Into::into).collect())
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<CustomerResponse, AppError> {
        let customer = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Cliente no encontrado".to_string()))?;

        Ok(customer.into())
    }

    pub async fn update(&self, id: Uuid, request: UpdateCustomerRequest) -> Result<(), AppError> {
        if id != request.id {
            return Err(AppError::BadRequest(
                "El ID informado no corresponde al cliente".to_string(),
            ));
        }

        request.validate()?;

        self.repository
            .update(
                id,
                NewCustomer {
                    name: request.name,
                    tax_id: request.tax_id,
                    email: request.email,
                },
            )
            .await?;

        Ok(())
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.repository.delete(id).await
    }
}
