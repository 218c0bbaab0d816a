//! Modelo de Rental
//!
//! Mapea exactamente a la tabla `rentals`, más las filas proyectadas de
//! los JOINs con customer/vehicle/employee usadas por las lecturas.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Rental {
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

/// Fila del JOIN rentals × customers × vehicles × employees
#[derive(Debug, FromRow)]
pub struct RentalExpandedRow {
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
    pub customer_name: String,
    pub customer_tax_id: String,
    pub customer_email: String,
    pub vehicle_model: String,
    pub vehicle_plate: String,
    pub vehicle_year: i32,
    pub employee_name: String,
    pub employee_role: String,
}

/// Fila resumida para los endpoints `detailes` y `filtro`
#[derive(Debug, FromRow)]
pub struct RentalSummaryRow {
    pub customer_name: String,
    pub vehicle_model: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}
