use crate::dto::manufacturer_dto::{
    CreateManufacturerRequest, ManufacturerResponse, UpdateManufacturerRequest,
};
use crate::repositories::manufacturer_repository::ManufacturerRepository;
use crate::utils::errors::AppError;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

pub struct ManufacturerController {
    repository: ManufacturerRepository,
}

impl ManufacturerController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: ManufacturerRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateManufacturerRequest,
    ) -> Result<ManufacturerResponse, AppError> {
        request.validate()?;

        let manufacturer = self.repository.create(request.name).await?;
        Ok(manufacturer.into())
    }

    pub async fn list(&self) -> Result<Vec<ManufacturerResponse>, AppError> {
        let manufacturers = self.repository.find_all().await?;
        Ok(manufacturers.into_iter().map(Into::into).collect())
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<ManufacturerResponse, AppError> {
        let manufacturer = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Fabricante no encontrado".to_string()))?;

        Ok(manufacturer.into())
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateManufacturerRequest,
    ) -> Result<(), AppError> {
        if id != request.id {
            return Err(AppError::BadRequest(
                "El ID informado no corresponde al fabricante".to_string(),
            ));
        }

        request.validate()?;

        self.repository.update(id, request.name).await?;
        Ok(())
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.repository.delete(id).await
    }
}
