use crate::dto::employee_dto::{CreateEmployeeRequest, EmployeeResponse, UpdateEmployeeRequest};
use crate::repositories::employee_repository::{EmployeeRepository, NewEmployee};
use crate::utils::errors::AppError;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

pub struct EmployeeController {
    repository: EmployeeRepository,
}

impl EmployeeController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: EmployeeRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateEmployeeRequest,
    ) -> Result<EmployeeResponse, AppError> {
        request.validate()?;

        let employee = self
            .repository
            .create(NewEmployee {
                name: request.name,
                tax_id: request.tax_id,
                role: request.role,
                email: request.email,
            })
            .await?;

        Ok(employee.into())
    }

    pub async fn list(&self) -> Result<Vec<EmployeeResponse>, AppError> {
        let employees = self.repository.find_all().await?;
        Ok(employees.into_iter().map(Into::into).collect())
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<EmployeeResponse, AppError> {
        let employee = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Empleado no encontrado".to_string()))?;

        Ok(employee.into())
    }

    pub async fn update(&self, id: Uuid, request: UpdateEmployeeRequest) -> Result<(), AppError> {
        if id != request.id {
            return Err(AppError::BadRequest(
                "El ID informado no corresponde al empleado".to_string(),
            ));
        }

        request.validate()?;

        self.repository
            .update(
                id,
                NewEmployee {
                    name: request.name,
                    tax_id: request.tax_id,
                    role: request.role,
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
