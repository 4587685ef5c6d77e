use std::collections::BTreeMap;

/// Per-field validation messages, keyed by the wire name of the field
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: BTreeMap<String, String>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keeps the first message recorded for a field
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.errors
            .entry(field.to_string())
            .or_insert_with(|| message.into());
    }

    pub fn remove(&mut self, field: &str) {
        self.errors.remove(field);
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn has(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.errors.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// `Ok(value)` when no errors were recorded
    pub fn into_result<T>(self, value: T) -> Result<T, FieldErrors> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let joined: Vec<&str> = self.errors.values().map(String::as_str).collect();
        write!(f, "{}", joined.join("; "))
    }
}

/// Required text: non-blank after trimming and at most `max` characters
pub fn require_text(errors: &mut FieldErrors, field: &str, value: &str, label: &str, max: usize) {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        errors.add(field, format!("{label} es obligatorio"));
    } else if trimmed.chars().count() > max {
        errors.add(field, format!("{label} no puede superar {max} caracteres"));
    }
}

/// Optional text: only the length is checked
pub fn optional_text(errors: &mut FieldErrors, field: &str, value: &str, label: &str, max: usize) {
    if value.trim().chars().count() > max {
        errors.add(field, format!("{label} no puede superar {max} caracteres"));
    }
}

/// Parses a positive integer (≥ 1)
pub fn positive_int(errors: &mut FieldErrors, field: &str, raw: &str, label: &str) -> Option<u32> {
    match raw.trim().parse::<u32>() {
        Ok(v) if v >= 1 => Some(v),
        Ok(_) => {
            errors.add(field, format!("{label} debe ser mayor o igual a 1"));
            None
        }
        Err(_) => {
            errors.add(field, format!("{label} debe ser un número entero"));
            None
        }
    }
}

/// Parses a decimal in `[min, max]`; both `.` and `,` are accepted as separator
pub fn decimal_in_range(
    errors: &mut FieldErrors,
    field: &str,
    raw: &str,
    label: &str,
    min: f64,
    max: f64,
) -> Option<f64> {
    let normalized = raw.trim().replace(',', ".");
    match normalized.parse::<f64>() {
        Ok(v) if v.is_finite() && v >= min && v <= max => Some(v),
        Ok(_) => {
            errors.add(field, format!("{label} debe estar entre {min:.2} y {max:.2}"));
            None
        }
        Err(_) => {
            errors.add(field, format!("{label} debe ser un número"));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_message_per_field_wins() {
        let mut errors = FieldErrors::new();
        errors.add("nombre", "primero");
        errors.add("nombre", "segundo");
        assert_eq!(errors.get("nombre"), Some("primero"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_remove_clears_one_field() {
        let mut errors = FieldErrors::new();
        errors.add("tipos", "Tipo inválido");
        errors.add("beneficiario", "Requerido");
        errors.remove("tipos");
        errors.remove("fecha");
        assert!(!errors.has("tipos"));
        assert_eq!(errors.get("beneficiario"), Some("Requerido"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_require_text() {
        let mut errors = FieldErrors::new();
        require_text(&mut errors, "a", "  ", "A", 5);
        require_text(&mut errors, "b", "123456", "B", 5);
        require_text(&mut errors, "c", "ok", "C", 5);
        assert!(errors.has("a"));
        assert!(errors.has("b"));
        assert!(!errors.has("c"));
    }

    #[test]
    fn test_numbers() {
        let mut errors = FieldErrors::new();
        assert_eq!(positive_int(&mut errors, "n", "3", "N"), Some(3));
        assert_eq!(positive_int(&mut errors, "z", "0", "Z"), None);
        assert_eq!(positive_int(&mut errors, "x", "1.5", "X"), None);
        assert_eq!(
            decimal_in_range(&mut errors, "p", "10,50", "P", 0.01, 999_999.99),
            Some(10.5)
        );
        assert_eq!(
            decimal_in_range(&mut errors, "q", "0", "Q", 0.01, 999_999.99),
            None
        );
        assert!(errors.has("z") && errors.has("x") && errors.has("q"));
        assert!(!errors.has("n") && !errors.has("p"));
    }

    #[test]
    fn test_into_result() {
        assert_eq!(FieldErrors::new().into_result(5), Ok(5));
        let mut errors = FieldErrors::new();
        errors.add("f", "mal");
        assert!(errors.into_result(5).is_err());
    }
}
