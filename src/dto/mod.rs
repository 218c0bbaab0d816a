//! DTOs de la API
//!
//! Requests validados con `validator` y responses serializadas con `serde`.

pub mod common;
pub mod customer_dto;
pub mod employee_dto;
pub mod manufacturer_dto;
pub mod rental_dto;
pub mod vehicle_dto;
