use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

// Request para crear un vehículo
#[derive(Debug, Deserialize, Validate)]
pub struct CreateVehicleRequest {
    #[validate(length(min = 1, max = 100, message = "El modelo del vehículo es obligatorio y no puede superar 100 caracteres"))]
    pub model: String,

    #[validate(range(min = 1886, max = 2100, message = "El año debe estar entre 1886 y 2100"))]
    pub year: i32,

    #[validate(range(min = 0.0, message = "El odómetro debe ser mayor o igual a cero"))]
    pub odometer: f64,

    #[validate(
        length(max = 8, message = "La placa no puede tener más de 8 caracteres"),
        regex(path = "crate::utils::validation::PLACA_RE", message = "La placa debe estar en formato 'AAA-1234' o 'AAA1A23'")
    )]
    pub plate: String,

    pub manufacturer_id: Uuid,
}

// Request para actualizar un vehículo (reemplazo completo)
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateVehicleRequest {
    pub id: Uuid,

    #[validate(length(min = 1, max = 100, message = "El modelo del vehículo es obligatorio y no puede superar 100 caracteres"))]
    pub model: String,

    #[validate(range(min = 1886, max = 2100, message = "El año debe estar entre 1886 y 2100"))]
    pub year: i32,

    #[validate(range(min = 0.0, message = "El odómetro debe ser mayor o igual a cero"))]
    pub odometer: f64,

    #[validate(
        length(max = 8, message = "La placa no puede tener más de 8 caracteres"),
        regex(path = "crate::utils::validation::PLACA_RE", message = "La placa debe estar en formato 'AAA-1234' o 'AAA1A23'")
    )]
    pub plate: String,

    pub manufacturer_id: Uuid,
}

// Response de vehículo
#[derive(Debug, Serialize)]
pub struct VehicleResponse {
    pub id: Uuid,
    pub model: String,
    pub year: i32,
    pub odometer: f64,
    pub plate: String,
    pub manufacturer_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl From<crate::models::vehicle::Vehicle> for VehicleResponse {
    fn from(v: crate::models::vehicle::Vehicle) -> Self {
        Self {
            id: v.id,
            model: v.model,
            year: v.year,
            odometer: v.odometer,
            plate: v.plate,
            manufacturer_id: v.manufacturer_id,
            created_at: v.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> CreateVehicleRequest {
        CreateVehicleRequest {
            model: "Onix".to_string(),
            year: 2022,
            odometer: 15000.0,
            plate: "ABC-1234".to_string(),
            manufacturer_id: Uuid::new_v4(),
        }
    }

    #[test]
    fn test_request_valido() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn test_placa_mercosur_valida() {
        let mut request = valid_request();
        request.plate = "ABC1D23".to_string();
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_placa_invalida() {
        let mut request = valid_request();
        request.plate = "1234-ABC".to_string();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_anio_fuera_de_rango() {
        let mut request = valid_request();
        request.year = 1885;
        assert!(request.validate().is_err());
        request.year = 2101;
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_odometro_negativo() {
        let mut request = valid_request();
        request.odometer = -1.0;
        assert!(request.validate().is_err());
    }
}
