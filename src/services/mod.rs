//! Lógica de dominio pura

pub mod rental_scheduling;
