use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

// Request para crear un fabricante
#[derive(Debug, Deserialize, Validate)]
pub struct CreateManufacturerRequest {
    #[validate(length(min = 1, max = 100, message = "El nombre del fabricante es obligatorio y no puede superar 100 caracteres"))]
    pub name: String,
}

// Request para actualizar un fabricante (reemplazo completo)
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateManufacturerRequest {
    pub id: Uuid,

    #[validate(length(min = 1, max = 100, message = "El nombre del fabricante es obligatorio y no puede superar 100 caracteres"))]
    pub name: String,
}

// Response de fabricante
#[derive(Debug, Serialize)]
pub struct ManufacturerResponse {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl From<crate::models::manufacturer::Manufacturer> for ManufacturerResponse {
    fn from(m: crate::models::manufacturer::Manufacturer) -> Self {
        Self {
            id: m.id,
            name: m.name,
            created_at: m.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nombre_vacio_es_invalido() {
        let request = CreateManufacturerRequest {
            name: String::new(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_nombre_largo_es_invalido() {
        let request = CreateManufacturerRequest {
            name: "a".repeat(101),
        };
        assert!(request.validate().is_err());
    }
}
