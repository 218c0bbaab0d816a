//! Modelo de Manufacturer
//!
//! Mapea exactamente a la tabla `manufacturers` con primary key 'id'.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Manufacturer {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
}
