use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::models::rental::{Rental, RentalExpandedRow, RentalSummaryRow};
use crate::utils::validation::{validate_ordered, validate_positive};

// Request para crear un alquiler
#[derive(Debug, Deserialize, Validate)]
#[validate(schema(function = "validar_create_rental", skip_on_field_errors = false))]
pub struct CreateRentalRequest {
    pub customer_id: Uuid,
    pub vehicle_id: Uuid,
    pub employee_id: Uuid,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub return_date: Option<DateTime<Utc>>,

    #[validate(range(min = 0.0, message = "El odómetro inicial debe ser mayor o igual a cero"))]
    pub start_odometer: f64,

    #[validate(range(min = 0.0, message = "El odómetro final debe ser mayor o igual a cero"))]
    pub end_odometer: f64,

    pub daily_rate: Decimal,
    pub total_price: Decimal,
}

// Request para actualizar un alquiler (reemplazo completo, sin merge)
#[derive(Debug, Deserialize, Validate)]
#[validate(schema(function = "validar_update_rental", skip_on_field_errors = false))]
pub struct UpdateRentalRequest {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub vehicle_id: Uuid,
    pub employee_id: Uuid,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub return_date: Option<DateTime<Utc>>,

    #[validate(range(min = 0.0, message = "El odómetro inicial debe ser mayor o igual a cero"))]
    pub start_odometer: f64,

    #[validate(range(min = 0.0, message = "El odómetro final debe ser mayor o igual a cero"))]
    pub end_odometer: f64,

    pub daily_rate: Decimal,
    pub total_price: Decimal,
}

/// Reglas entre campos hermanos, como funciones explícitas sobre el
/// registro completo (sin reflexión en runtime).
fn validar_campos_rental(
    start_date: DateTime<Utc>,
    end_date: DateTime<Utc>,
    start_odometer: f64,
    end_odometer: f64,
    daily_rate: Decimal,
    total_price: Decimal,
) -> Result<(), ValidationError> {
    // La fecha de fin debe ser mayor o igual a la de inicio
    validate_ordered(start_date, end_date, "end_date_before_start_date")?;
    // El odómetro final debe ser mayor o igual al inicial
    validate_ordered(start_odometer, end_odometer, "end_odometer_below_start")?;
    validate_positive(daily_rate, "daily_rate")?;
    validate_positive(total_price, "total_price")?;
    Ok(())
}

fn validar_create_rental(request: &CreateRentalRequest) -> Result<(), ValidationError> {
    validar_campos_rental(
        request.start_date,
        request.end_date,
        request.start_odometer,
        request.end_odometer,
        request.daily_rate,
        request.total_price,
    )
}

fn validar_update_rental(request: &UpdateRentalRequest) -> Result<(), ValidationError> {
    validar_campos_rental(
        request.start_date,
        request.end_date,
        request.start_odometer,
        request.end_odometer,
        request.daily_rate,
        request.total_price,
    )
}

// Response plana del registro persistido (POST)
#[derive(Debug, Serialize)]
pub struct RentalResponse {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub vehicle_id: Uuid,
    pub employee_id: Uuid,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub return_date: Option<DateTime<Utc>>,
    pub start_odometer: f64,
    pub end_odometer: f64,
    pub daily_rate: Decimal,
    pub total_price: Decimal,
    pub created_at: DateTime<Utc>,
}

impl From<Rental> for RentalResponse {
    fn from(r: Rental) -> Self {
        Self {
            id: r.id,
            customer_id: r.customer_id,
            vehicle_id: r.vehicle_id,
            employee_id: r.employee_id,
            start_date: r.start_date,
            end_date: r.end_date,
            return_date: r.return_date,
            start_odometer: r.start_odometer,
            end_odometer: r.end_odometer,
            daily_rate: r.daily_rate,
            total_price: r.total_price,
            created_at: r.created_at,
        }
    }
}

// Vistas anidadas para las lecturas expandidas. Proyecciones explícitas,
// sin back-references al lado propietario (evita ciclos de serialización).
#[derive(Debug, Serialize)]
pub struct RentalCustomerView {
    pub id: Uuid,
    pub name: String,
    pub tax_id: String,
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct RentalVehicleView {
    pub id: Uuid,
    pub model: String,
    pub plate: String,
    pub year: i32,
}

#[derive(Debug, Serialize)]
pub struct RentalEmployeeView {
    pub id: Uuid,
    pub name: String,
    pub role: String,
}

// Response expandida con las entidades relacionadas (GETs)
#[derive(Debug, Serialize)]
pub struct RentalDetailResponse {
    pub id: Uuid,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub return_date: Option<DateTime<Utc>>,
    pub start_odometer: f64,
    pub end_odometer: f64,
    pub daily_rate: Decimal,
    pub total_price: Decimal,
    pub created_at: DateTime<Utc>,
    pub customer: RentalCustomerView,
    pub vehicle: RentalVehicleView,
    pub employee: RentalEmployeeView,
}

impl From<RentalExpandedRow> for RentalDetailResponse {
    fn from(row: RentalExpandedRow) -> Self {
        Self {
            id: row.id,
            start_date: row.start_date,
            end_date: row.end_date,
            return_date: row.return_date,
            start_odometer: row.start_odometer,
            end_odometer: row.end_odometer,
            daily_rate: row.daily_rate,
            total_price: row.total_price,
            created_at: row.created_at,
            customer: RentalCustomerView {
                id: row.customer_id,
                name: row.customer_name,
                tax_id: row.customer_tax_id,
                email: row.customer_email,
            },
            vehicle: RentalVehicleView {
                id: row.vehicle_id,
                model: row.vehicle_model,
                plate: row.vehicle_plate,
                year: row.vehicle_year,
            },
            employee: RentalEmployeeView {
                id: row.employee_id,
                name: row.employee_name,
                role: row.employee_role,
            },
        }
    }
}

// Response resumida para `detailes` y `filtro`
#[derive(Debug, Serialize)]
pub struct RentalSummaryResponse {
    pub customer_name: String,
    pub vehicle_model: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}

impl From<RentalSummaryRow> for RentalSummaryResponse {
    fn from(row: RentalSummaryRow) -> Self {
        Self {
            customer_name: row.customer_name,
            vehicle_model: row.vehicle_model,
            start_date: row.start_date,
            end_date: row.end_date,
        }
    }
}

// Query params del filtro por cliente y período
#[derive(Debug, Deserialize)]
pub struct RentalFilterQuery {
    pub cliente: String,
    pub inicio: NaiveDate,
    pub fim: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn date(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    fn valid_request() -> CreateRentalRequest {
        CreateRentalRequest {
            customer_id: Uuid::new_v4(),
            vehicle_id: Uuid::new_v4(),
            employee_id: Uuid::new_v4(),
            start_date: date(2024, 1, 11),
            end_date: date(2024, 1, 20),
            return_date: None,
            start_odometer: 1000.0,
            end_odometer: 1000.0,
            daily_rate: Decimal::from(150),
            total_price: Decimal::from(1350),
        }
    }

    #[test]
    fn test_request_valido() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn test_fechas_invertidas_son_invalidas() {
        let mut request = valid_request();
        request.start_date = date(2024, 1, 20);
        request.end_date = date(2024, 1, 11);
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_odometros_invertidos_son_invalidos() {
        let mut request = valid_request();
        request.start_odometer = 2000.0;
        request.end_odometer = 1500.0;
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_diaria_no_positiva_es_invalida() {
        let mut request = valid_request();
        request.daily_rate = Decimal::ZERO;
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_total_no_positivo_es_invalido() {
        let mut request = valid_request();
        request.total_price = Decimal::from(-10);
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_mismo_dia_es_valido() {
        // Duración cero pasa la validación; el total del caller se respeta
        let mut request = valid_request();
        request.end_date = request.start_date;
        assert!(request.validate().is_ok());
    }
}
