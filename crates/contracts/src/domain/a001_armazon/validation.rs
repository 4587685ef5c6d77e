use super::aggregate::ArmazonDto;
use crate::shared::validation::{decimal_in_range, optional_text, positive_int, require_text, FieldErrors};

pub const CODE_MAX: usize = 20;
pub const PRICE_MIN: f64 = 0.01;
pub const PRICE_MAX: f64 = 999_999.99;

/// Raw values of the new-frame form, as typed
#[derive(Debug, Clone, PartialEq)]
pub struct ArmazonForm {
    pub codigo_patilla: String,
    pub codigo_interno: String,
    pub codigo_color: String,
    pub descripcion: String,
    pub letra_color: String,
    pub tipo_armazon: String,
    pub material: String,
    pub ubicacion: String,
    pub cantidad: String,
    pub cantidad_minima: String,
    pub costo: String,
    pub precio_venta: String,
    pub activo: bool,
}

impl Default for ArmazonForm {
    fn default() -> Self {
        Self {
            codigo_patilla: String::new(),
            codigo_interno: String::new(),
            codigo_color: String::new(),
            descripcion: String::new(),
            letra_color: String::new(),
            tipo_armazon: String::new(),
            material: String::new(),
            ubicacion: String::new(),
            cantidad: "1".into(),
            cantidad_minima: "1".into(),
            costo: "0.01".into(),
            precio_venta: "0.01".into(),
            activo: true,
        }
    }
}

/// Applied on every keystroke of a code field: upper-case, no whitespace
pub fn normalize_code(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_uppercase()
}

fn check_code(errors: &mut FieldErrors, field: &str, value: &str, label: &str) {
    if value.is_empty() {
        errors.add(field, format!("{label} es requerido"));
    } else if value.chars().count() > CODE_MAX {
        errors.add(field, format!("{label} no puede tener más de {CODE_MAX} caracteres"));
    } else if !value.chars().all(|c| c.is_ascii_alphanumeric()) {
        errors.add(field, format!("{label} debe ser alfanumérico y no contener espacios"));
    }
}

fn check_no_spaces(errors: &mut FieldErrors, field: &str, value: &str, label: &str) {
    require_text(errors, field, value, label, 50);
    if value.trim().chars().any(char::is_whitespace) {
        errors.add(field, format!("{label} no puede contener espacios"));
    }
}

impl ArmazonForm {
    /// Validates every field and builds the create body.
    /// Codes are normalized before checking.
    pub fn validate(&self) -> Result<ArmazonDto, FieldErrors> {
        let mut errors = FieldErrors::new();

        let codigo_patilla = normalize_code(&self.codigo_patilla);
        let codigo_interno = normalize_code(&self.codigo_interno);
        let codigo_color = normalize_code(&self.codigo_color);
        check_code(&mut errors, "codigoPatilla", &codigo_patilla, "El código patilla");
        check_code(&mut errors, "codigoInterno", &codigo_interno, "El código interno");
        check_code(&mut errors, "codigoColor", &codigo_color, "El código color");

        require_text(&mut errors, "descripcion", &self.descripcion, "La descripción", 500);
        optional_text(&mut errors, "letraColor", &self.letra_color, "La letra color", 10);
        check_no_spaces(&mut errors, "tipoArmazon", &self.tipo_armazon, "El tipo de armazón");
        check_no_spaces(&mut errors, "material", &self.material, "El material");
        require_text(&mut errors, "ubicacion", &self.ubicacion, "La ubicación", 50);

        let cantidad = positive_int(&mut errors, "cantidad", &self.cantidad, "La cantidad");
        let cantidad_minima =
            positive_int(&mut errors, "cantidadMinima", &self.cantidad_minima, "La cantidad mínima");
        let costo = decimal_in_range(&mut errors, "costo", &self.costo, "El costo", PRICE_MIN, PRICE_MAX);
        let precio_venta = decimal_in_range(
            &mut errors,
            "precioVenta",
            &self.precio_venta,
            "El precio de venta",
            PRICE_MIN,
            PRICE_MAX,
        );

        match (cantidad, cantidad_minima, costo, precio_venta) {
            (Some(cantidad), Some(cantidad_minima), Some(costo), Some(precio_venta))
                if errors.is_empty() =>
            {
                let letra = self.letra_color.trim();
                Ok(ArmazonDto {
                    codigo_patilla,
                    codigo_interno,
                    codigo_color,
                    descripcion: self.descripcion.trim().to_string(),
                    letra_color: (!letra.is_empty()).then(|| letra.to_string()),
                    tipo_armazon: self.tipo_armazon.trim().to_string(),
                    material: self.material.trim().to_string(),
                    ubicacion: self.ubicacion.trim().to_string(),
                    cantidad: i64::from(cantidad),
                    cantidad_minima: i64::from(cantidad_minima),
                    costo,
                    precio_venta,
                    activo: self.activo,
                })
            }
            _ => Err(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> ArmazonForm {
        ArmazonForm {
            codigo_patilla: "cp 001".into(),
            codigo_interno: "ci001".into(),
            codigo_color: "CC001".into(),
            descripcion: "Aviador dorado".into(),
            tipo_armazon: "RECETA".into(),
            material: "METAL".into(),
            ubicacion: "Vidriera 2".into(),
            ..ArmazonForm::default()
        }
    }

    #[test]
    fn test_normalize_code() {
        assert_eq!(normalize_code(" ab 12\tc "), "AB12C");
    }

    #[test]
    fn test_defaults() {
        let form = ArmazonForm::default();
        assert!(form.activo);
        assert_eq!(form.cantidad, "1");
        assert_eq!(form.costo, "0.01");
    }

    #[test]
    fn test_valid_form_builds_dto() {
        let dto = valid_form().validate().unwrap();
        assert_eq!(dto.codigo_patilla, "CP001");
        assert_eq!(dto.codigo_interno, "CI001");
        assert_eq!(dto.letra_color, None);
        assert_eq!(dto.cantidad, 1);
        assert!(dto.activo);
    }

    #[test]
    fn test_rejects_bad_fields() {
        let form = ArmazonForm {
            codigo_color: "CC-01".into(),
            material: "ACERO INOX".into(),
            letra_color: "ABCDEFGHIJK".into(),
            cantidad: "0".into(),
            precio_venta: "1000000".into(),
            ..valid_form()
        };
        let errors = form.validate().unwrap_err();
        for field in ["codigoColor", "material", "letraColor", "cantidad", "precioVenta"] {
            assert!(errors.has(field), "missing error for {field}");
        }
        assert!(!errors.has("codigoPatilla"));
    }

    #[test]
    fn test_required_fields() {
        let errors = ArmazonForm::default().validate().unwrap_err();
        for field in ["codigoPatilla", "codigoInterno", "codigoColor", "descripcion", "tipoArmazon", "material", "ubicacion"] {
            assert!(errors.has(field), "missing error for {field}");
        }
    }
}
