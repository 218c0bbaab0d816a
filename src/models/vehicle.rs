//! Modelo de Vehicle
//!
//! Mapea exactamente a la tabla `vehicles` con primary key 'id'.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Vehicle {
    pub id: Uuid,
    pub model: String,
    pub year: i32,
    pub odometer: f64,
    pub plate: String,
    pub manufacturer_id: Uuid,
    pub created_at: DateTime<Utc>,
}
