//! Controllers de la API
//!
//! Reglas de negocio por entidad: validación fail-fast, chequeos de
//! unicidad y referencias, y orquestación de los repositorios.

pub mod customer_controller;
pub mod employee_controller;
pub mod manufacturer_controller;
pub mod rental_controller;
pub mod vehicle_controller;
