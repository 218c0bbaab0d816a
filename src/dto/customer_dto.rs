use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

// Request para crear un cliente
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCustomerRequest {
    #[validate(length(min = 1, max = 100, message = "El nombre del cliente es obligatorio y no puede superar 100 caracteres"))]
    pub name: String,

    #[validate(regex(path = "crate::utils::validation::CPF_RE", message = "El CPF debe contener exactamente 11 dígitos"))]
    pub tax_id: String,

    #[validate(email(message = "El e-mail no es válido"))]
    pub email: String,
}

// Request para actualizar un cliente (reemplazo completo)
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCustomerRequest {
    pub id: Uuid,

    #[validate(length(min = 1, max = 100, message = "El nombre del cliente es obligatorio y no puede superar 100 caracteres"))]
    pub name: String,

    #[validate(regex(path = "crate::utils::validation::CPF_RE", message = "El CPF debe contener exactamente 11 dígitos"))]
    pub tax_id: String,

    #[validate(email(message = "El e-mail no es válido"))]
    pub email: String,
}

// Response de cliente
#[derive(Debug, Serialize)]
pub struct CustomerResponse {
    pub id: Uuid,
    pub name: String,
    pub tax_id: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<crate::models::customer::Customer> for CustomerResponse {
    fn from(c: crate::models::customer::Customer) -> Self {
        Self {
            id: c.id,
            name: c.name,
            tax_id: c.tax_id,
            email: c.email,
            created_at: c.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> CreateCustomerRequest {
        CreateCustomerRequest {
            name: "Maria Silva".to_string(),
            tax_id: "12345678901".to_string(),
            email: "maria@example.com".to_string(),
        }
    }

    #[test]
    fn test_request_valido() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn test_cpf_corto() {
        let mut request = valid_request();
        request.tax_id = "123456789".to_string();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_cpf_con_letras() {
        let mut request = valid_request();
        request.tax_id = "1234567890a".to_string();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_email_invalido() {
        let mut request = valid_request();
        request.email = "not-an-email".to_string();
        assert!(request.validate().is_err());
    }
}
