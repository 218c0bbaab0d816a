//! Modelo de Employee
//!
//! Mapea exactamente a la tabla `employees` con primary key 'id'.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Employee {
    pub id: Uuid,
    pub name: String,
    pub tax_id: String,
    pub role: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}
