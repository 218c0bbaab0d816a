//! Modelo de Customer
//!
//! Mapea exactamente a la tabla `customers` con primary key 'id'.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Customer {
    pub id: Uuid,
    pub name: String,
    pub tax_id: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}
