use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

// Request para crear un empleado
#[derive(Debug, Deserialize, Validate)]
pub struct CreateEmployeeRequest {
    #[validate(length(min = 1, max = 100, message = "El nombre del empleado es obligatorio y no puede superar 100 caracteres"))]
    pub name: String,

    #[validate(regex(path = "crate::utils::validation::CPF_RE", message = "El CPF debe contener exactamente 11 dígitos"))]
    pub tax_id: String,

    #[validate(length(min = 1, max = 50, message = "El cargo es obligatorio y no puede superar 50 caracteres"))]
    pub role: String,

    #[validate(email(message = "El e-mail no es válido"))]
    pub email: String,
}

// Request para actualizar un empleado (reemplazo completo)
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateEmployeeRequest {
    pub id: Uuid,

    #[validate(length(min = 1, max = 100, message = "El nombre del empleado es obligatorio y no puede superar 100 caracteres"))]
    pub name: String,

    #[validate(regex(path = "crate::utils::validation::CPF_RE", message = "El CPF debe contener exactamente 11 dígitos"))]
    pub tax_id: String,

    #[validate(length(min = 1, max = 50, message = "El cargo es obligatorio y no puede superar 50 caracteres"))]
    pub role: String,

    #[validate(email(message = "El e-mail no es válido"))]
    pub email: String,
}

// Response de empleado
#[derive(Debug, Serialize)]
pub struct EmployeeResponse {
    pub id: Uuid,
    pub name: String,
    pub tax_id: String,
    pub role: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<crate::models::employee::Employee> for EmployeeResponse {
    fn from(e: crate::models::employee::Employee) -> Self {
        Self {
            id: e.id,
            name: e.name,
            tax_id: e.tax_id,
            role: e.role,
            email: e.email,
            created_at: e.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cargo_largo_es_invalido() {
        let request = CreateEmployeeRequest {
            name: "Carlos".to_string(),
            tax_id: "98765432109".to_string(),
            role: "g".repeat(51),
            email: "carlos@example.com".to_string(),
        };
        assert!(request.validate().is_err());
    }
}
