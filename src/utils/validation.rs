//! Utilidades de validación
//!
//! Este módulo contiene los patrones y funciones helper de validación
//! compartidos por los DTOs de la API.

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use validator::ValidationError;

lazy_static! {
    /// Formato de placa: 'AAA-1234' o 'AAA1A23'
    pub static ref PLACA_RE: Regex =
        Regex::new(r"^[A-Z]{3}-?\d{4}$|^[A-Z]{3}\d[A-Z]\d{2}$").unwrap();

    /// CPF: exactamente 11 dígitos
    pub static ref CPF_RE: Regex = Regex::new(r"^\d{11}$").unwrap();
}

/// Validar que un valor sea positivo
pub fn validate_positive<T: PartialOrd + std::fmt::Display + num_traits::Zero + Serialize>(
    value: T,
    field: &'static str,
) -> Result<(), ValidationError> {
    if value <= T::zero() {
        let mut error = ValidationError::new("positive");
        error.add_param("field".into(), &field);
        error.add_param("value".into(), &value);
        return Err(error);
    }
    Ok(())
}

/// Validar que un par de valores esté ordenado (`second >= first`)
pub fn validate_ordered<T: PartialOrd + Serialize>(
    first: T,
    second: T,
    code: &'static str,
) -> Result<(), ValidationError> {
    if second < first {
        return Err(ValidationError::new(code));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placa_formato_con_guion() {
        assert!(PLACA_RE.is_match("ABC-1234"));
        assert!(PLACA_RE.is_match("ABC1234"));
    }

    #[test]
    fn test_placa_formato_mercosur() {
        assert!(PLACA_RE.is_match("ABC1D23"));
    }

    #[test]
    fn test_placa_invalida() {
        assert!(!PLACA_RE.is_match("abc-1234"));
        assert!(!PLACA_RE.is_match("AB-1234"));
        assert!(!PLACA_RE.is_match("ABCD1234"));
        assert!(!PLACA_RE.is_match("ABC-12345"));
    }

    #[test]
    fn test_cpf_once_digitos() {
        assert!(CPF_RE.is_match("12345678901"));
        assert!(!CPF_RE.is_match("1234567890"));
        assert!(!CPF_RE.is_match("123456789012"));
        assert!(!CPF_RE.is_match("1234567890a"));
    }

    #[test]
    fn test_validate_positive() {
        assert!(validate_positive(5.0, "valor").is_ok());
        assert!(validate_positive(0.0, "valor").is_err());
        assert!(validate_positive(-5.0, "valor").is_err());
    }

    #[test]
    fn test_validate_ordered() {
        assert!(validate_ordered(1, 2, "ordered").is_ok());
        assert!(validate_ordered(2, 2, "ordered").is_ok());
        assert!(validate_ordered(3, 2, "ordered").is_err());
    }
}
