//! Regla de programación de alquileres
//!
//! Este módulo contiene la lógica pura del dominio: la regla de solapamiento
//! de períodos (fronteras inclusivas) y el cálculo del valor total a partir
//! de la diaria y la duración. Las funciones son puras; la verificación
//! contra los alquileres persistidos vive en el repositorio, dentro de la
//! misma transacción que la escritura.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// Milisegundos por día, para convertir duraciones a días fraccionarios
const MS_PER_DAY: f64 = 86_400_000.0;

/// Determinar si dos períodos `[start, end]` se intersectan.
///
/// Regla inclusiva: los extremos que se tocan cuentan como solapamiento
/// (`existing.end >= start && existing.start <= end`). Es la misma
/// condición que ejecuta el repositorio en SQL.
pub fn intervals_overlap(
    existing_start: DateTime<Utc>,
    existing_end: DateTime<Utc>,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> bool {
    existing_end >= start && existing_start <= end
}

/// Duración del período en días fraccionarios (no redondeo de calendario)
pub fn rental_duration_days(start: DateTime<Utc>, end: DateTime<Utc>) -> f64 {
    (end - start).num_milliseconds() as f64 / MS_PER_DAY
}

/// Calcular el valor total del alquiler.
///
/// Devuelve `Some(diaria × duración)` solo cuando la duración es
/// estrictamente positiva; con duración cero o negativa devuelve `None`
/// y el valor informado por el caller se preserva sin tocar. El
/// comportamiento de "solo sobrescribir si es positiva" es una política
/// deliberada de paridad con el sistema de referencia.
pub fn compute_total(
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    daily_rate: Decimal,
) -> Option<Decimal> {
    let days = rental_duration_days(start, end);
    if days > 0.0 {
        Decimal::from_f64_retain(days).map(|d| daily_rate * d)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn date(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_periodos_disjuntos_no_solapan() {
        assert!(!intervals_overlap(
            date(2024, 1, 1),
            date(2024, 1, 10),
            date(2024, 1, 11),
            date(2024, 1, 20),
        ));
    }

    #[test]
    fn test_frontera_que_se_toca_cuenta_como_solapamiento() {
        // Alquiler existente [01-01, 01-10] vs nuevo [01-10, 01-15]
        assert!(intervals_overlap(
            date(2024, 1, 1),
            date(2024, 1, 10),
            date(2024, 1, 10),
            date(2024, 1, 15),
        ));
    }

    #[test]
    fn test_periodo_contenido_solapa() {
        assert!(intervals_overlap(
            date(2024, 1, 1),
            date(2024, 1, 31),
            date(2024, 1, 10),
            date(2024, 1, 15),
        ));
    }

    #[test]
    fn test_periodo_que_envuelve_solapa() {
        assert!(intervals_overlap(
            date(2024, 1, 10),
            date(2024, 1, 15),
            date(2024, 1, 1),
            date(2024, 1, 31),
        ));
    }

    #[test]
    fn test_solapamiento_es_simetrico() {
        let cases = [
            (date(2024, 1, 1), date(2024, 1, 10), date(2024, 1, 5), date(2024, 1, 20)),
            (date(2024, 1, 1), date(2024, 1, 10), date(2024, 1, 12), date(2024, 1, 20)),
            (date(2024, 3, 1), date(2024, 3, 1), date(2024, 3, 1), date(2024, 3, 1)),
        ];
        for (a1, a2, b1, b2) in cases {
            assert_eq!(
                intervals_overlap(a1, a2, b1, b2),
                intervals_overlap(b1, b2, a1, a2),
            );
        }
    }

    #[test]
    fn test_duracion_en_dias() {
        assert_eq!(rental_duration_days(date(2024, 1, 11), date(2024, 1, 20)), 9.0);
        assert_eq!(rental_duration_days(date(2024, 1, 10), date(2024, 1, 10)), 0.0);
        assert_eq!(rental_duration_days(date(2024, 1, 20), date(2024, 1, 11)), -9.0);
    }

    #[test]
    fn test_duracion_fraccionaria() {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        assert_eq!(rental_duration_days(start, end), 0.5);
    }

    #[test]
    fn test_total_nueve_dias() {
        let total = compute_total(date(2024, 1, 11), date(2024, 1, 20), Decimal::from(150));
        assert_eq!(total, Some(Decimal::from(1350)));
    }

    #[test]
    fn test_total_medio_dia() {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        let total = compute_total(start, end, Decimal::from(100));
        assert_eq!(total, Some(Decimal::from(50)));
    }

    #[test]
    fn test_duracion_cero_no_calcula_total() {
        // Duración cero o negativa: el valor del caller se preserva
        assert_eq!(
            compute_total(date(2024, 1, 10), date(2024, 1, 10), Decimal::from(150)),
            None
        );
        assert_eq!(
            compute_total(date(2024, 1, 20), date(2024, 1, 11), Decimal::from(150)),
            None
        );
    }

    #[test]
    fn test_compute_total_es_puro() {
        let a = compute_total(date(2024, 2, 1), date(2024, 2, 8), Decimal::from(200));
        let b = compute_total(date(2024, 2, 1), date(2024, 2, 8), Decimal::from(200));
        assert_eq!(a, b);
        assert_eq!(a, Some(Decimal::from(1400)));
    }
}
