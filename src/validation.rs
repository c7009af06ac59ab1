//! Field-level validation rules shared by the forms.
//!
//! Each validator returns `Some(message)` when the value is rejected;
//! the message is the user-facing text the page renders next to the
//! field. No cross-field or cross-entity rules live here.

use std::sync::OnceLock;

use regex::Regex;

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$")
            .unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

fn telefono_regex() -> &'static Regex {
    static TELEFONO: OnceLock<Regex> = OnceLock::new();
    TELEFONO.get_or_init(|| {
        Regex::new(r"^[0-9]{10}$")
            .unwrap_or_else(|error| panic!("telefono regex failed to compile: {error}"))
    })
}

/// At least `min` characters after trimming. `subject` is the noun
/// phrase used in the message ("El nombre", "La descripción", ...).
pub fn min_len(value: &str, min: usize, subject: &str) -> Option<String> {
    if value.trim().chars().count() < min {
        Some(format!("{subject} debe tener al menos {min} caracteres"))
    } else {
        None
    }
}

pub fn email(value: &str) -> Option<String> {
    if email_regex().is_match(value) {
        None
    } else {
        Some("Ingrese un email válido".to_string())
    }
}

/// Exactly 10 digits.
pub fn telefono(value: &str) -> Option<String> {
    if telefono_regex().is_match(value) {
        None
    } else {
        Some("Ingrese un número de teléfono válido (10 dígitos)".to_string())
    }
}

/// ISO date (any `T...` suffix ignored) that is not in the future.
pub fn fecha_nacimiento(value: &str) -> Option<String> {
    let date_part = value.split('T').next().unwrap_or(value);
    let Ok(fecha) = chrono::NaiveDate::parse_from_str(date_part, "%Y-%m-%d") else {
        return Some("Ingrese una fecha válida".to_string());
    };
    if fecha >= chrono::Local::now().date_naive() {
        Some("La fecha de nacimiento no puede ser futura".to_string())
    } else {
        None
    }
}

pub fn creditos(value: i32) -> Option<String> {
    if value < 1 {
        Some("Los créditos deben ser mayores a 0".to_string())
    } else if value > 10 {
        Some("Los créditos no pueden ser mayores a 10".to_string())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn min_len_accepts_exact_length() {
        assert_eq!(min_len("ab", 2, "El nombre"), None);
    }

    #[test]
    fn min_len_trims_before_counting() {
        assert!(min_len("  a  ", 2, "El nombre").is_some());
    }

    #[test]
    fn min_len_message_names_the_subject() {
        let msg = min_len("corta", 10, "La descripción").unwrap();
        assert_eq!(msg, "La descripción debe tener al menos 10 caracteres");
    }

    #[test]
    fn email_accepts_plain_address() {
        assert_eq!(email("ana@espe.edu.ec"), None);
    }

    #[test]
    fn email_rejects_missing_domain_dot() {
        assert!(email("ana@espe").is_some());
    }

    #[test]
    fn email_rejects_whitespace() {
        assert!(email("ana maria@espe.edu.ec").is_some());
    }

    #[test]
    fn telefono_accepts_ten_digits() {
        assert_eq!(telefono("0912345678"), None);
    }

    #[test]
    fn telefono_rejects_nine_digits() {
        assert!(telefono("091234567").is_some());
    }

    #[test]
    fn telefono_rejects_letters() {
        assert!(telefono("091234567a").is_some());
    }

    #[test]
    fn fecha_accepts_past_date() {
        assert_eq!(fecha_nacimiento("1999-05-15"), None);
    }

    #[test]
    fn fecha_ignores_time_suffix() {
        assert_eq!(fecha_nacimiento("1999-05-15T00:00:00"), None);
    }

    #[test]
    fn fecha_rejects_future_date() {
        assert!(fecha_nacimiento("2999-01-01").is_some());
    }

    #[test]
    fn fecha_rejects_garbage() {
        assert!(fecha_nacimiento("no-es-fecha").is_some());
    }

    #[test]
    fn creditos_accepts_bounds() {
        assert_eq!(creditos(1), None);
        assert_eq!(creditos(10), None);
    }

    #[test]
    fn creditos_rejects_zero_and_eleven() {
        assert!(creditos(0).is_some());
        assert!(creditos(11).is_some());
    }
}
