use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use super::lens_rows::{rows_for, LensTypeCode, LenteRow};
use crate::domain::common::Entity;
use crate::shared::list_query::{Searchable, Sortable};
use crate::shared::validation::FieldErrors;

/// Lens rows stay hidden until the beneficiary DNI has this many characters
pub const MIN_DNI_LEN: usize = 3;

// ============================================================================
// Aggregate
// ============================================================================

/// Lens order ("ficha") for a union beneficiary
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Ficha {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// `YYYY-MM-DD`
    pub fecha: String,
    pub es_optica: bool,
    pub tipos: Option<LensTypeCode>,
    pub sindicato: Option<i64>,
    pub delegacion: Option<i64>,
    pub optica: Option<i64>,
    pub voucher: String,
    pub lentes_especiales: bool,
    pub autorizado_sin_voucher: bool,
    pub beneficiario: String,
    pub dni_beneficiario: String,
    pub titular: String,
    pub nro_afiliado: String,
    pub es_titular: bool,
    pub comentario: String,
    #[serde(rename = "seña", alias = "sena")]
    pub sena: String,
    pub saldo: String,
    pub telefono: String,
    pub lentes: Vec<LenteRow>,
}

impl Entity for Ficha {
    fn id(&self) -> i64 {
        self.id.unwrap_or_default()
    }

    fn is_activo(&self) -> bool {
        true
    }

    fn caption(&self) -> String {
        format!("{} ({})", self.beneficiario, self.dni_beneficiario)
    }

    fn aggregate_index() -> &'static str {
        "a008"
    }

    fn collection_name() -> &'static str {
        "fichas"
    }

    fn element_name() -> &'static str {
        "Ficha"
    }

    fn list_name() -> &'static str {
        "Fichas"
    }
}

impl Searchable for Ficha {
    fn search_fields(&self) -> Vec<String> {
        vec![
            self.id().to_string(),
            self.fecha.clone(),
            self.beneficiario.clone(),
            self.dni_beneficiario.clone(),
            self.titular.clone(),
            self.nro_afiliado.clone(),
            self.voucher.clone(),
            self.tipos.map(|t| t.label().to_string()).unwrap_or_default(),
        ]
    }
}

impl Sortable for Ficha {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "beneficiario" => self
                .beneficiario
                .to_lowercase()
                .cmp(&other.beneficiario.to_lowercase()),
            "fecha" => self.fecha.cmp(&other.fecha),
            _ => self.id.cmp(&other.id),
        }
    }
}

// ============================================================================
// Form
// ============================================================================

/// Editable state of the create page. Selects hold raw option values.
#[derive(Debug, Clone, PartialEq)]
pub struct FichaForm {
    pub fecha: String,
    pub es_optica: bool,
    pub tipos: Option<LensTypeCode>,
    pub sindicato: String,
    pub delegacion: String,
    pub optica: String,
    pub voucher: String,
    pub lentes_especiales: bool,
    pub autorizado_sin_voucher: bool,
    pub beneficiario: String,
    pub dni_beneficiario: String,
    pub titular: String,
    pub nro_afiliado: String,
    pub es_titular: bool,
    pub comentario: String,
    pub sena: String,
    pub saldo: String,
    pub telefono: String,
    pub validado: bool,
    pub lentes: Vec<LenteRow>,
}

impl FichaForm {
    pub fn new(today: &str) -> Self {
        Self {
            fecha: today.to_string(),
            es_optica: false,
            tipos: None,
            sindicato: String::new(),
            delegacion: String::new(),
            optica: String::new(),
            voucher: String::new(),
            lentes_especiales: false,
            autorizado_sin_voucher: false,
            beneficiario: String::new(),
            dni_beneficiario: String::new(),
            titular: String::new(),
            nro_afiliado: String::new(),
            es_titular: true,
            comentario: String::new(),
            sena: String::new(),
            saldo: String::new(),
            telefono: String::new(),
            validado: false,
            lentes: Vec::new(),
        }
    }

    /// Replaces all rows; previous row input is discarded
    pub fn select_tipos(&mut self, code: Option<LensTypeCode>, first_estado: Option<i64>) {
        self.tipos = code;
        self.lentes = rows_for(code, first_estado);
    }

    /// Rows built before the estados arrived get the first one
    pub fn fill_missing_estados(&mut self, first_estado: Option<i64>) {
        if first_estado.is_none() {
            return;
        }
        for row in self.lentes.iter_mut().filter(|r| r.estado.is_none()) {
            row.estado = first_estado;
        }
    }

    pub fn rows_visible(&self) -> bool {
        self.validado && self.dni_beneficiario.trim().chars().count() >= MIN_DNI_LEN
    }

    pub fn toggle_validado(&mut self) {
        self.validado = !self.validado;
    }

    pub fn to_ficha(&self) -> Result<Ficha, FieldErrors> {
        let mut errors = FieldErrors::new();
        if self.fecha.trim().is_empty() {
            errors.add("fecha", "La fecha es requerida");
        }
        if self.tipos.is_none() {
            errors.add("tipos", "Seleccione el tipo de lente");
        }
        if self.beneficiario.trim().is_empty() {
            errors.add("beneficiario", "El beneficiario es requerido");
        }
        if self.dni_beneficiario.trim().chars().count() < MIN_DNI_LEN {
            errors.add("dniBeneficiario", "El DNI debe tener al menos 3 caracteres");
        }
        let sindicato = parse_select(&mut errors, "sindicato", &self.sindicato);
        let delegacion = parse_select(&mut errors, "delegacion", &self.delegacion);
        let optica = parse_select(&mut errors, "optica", &self.optica);

        // Payment fields only apply to the shop's own orders
        let (sena, saldo, telefono) = if self.es_optica {
            (
                self.sena.trim().to_string(),
                self.saldo.trim().to_string(),
                self.telefono.trim().to_string(),
            )
        } else {
            (String::new(), String::new(), String::new())
        };

        errors.into_result(Ficha {
            id: None,
            fecha: self.fecha.trim().to_string(),
            es_optica: self.es_optica,
            tipos: self.tipos,
            sindicato,
            delegacion,
            optica,
            voucher: self.voucher.trim().to_string(),
            lentes_especiales: self.lentes_especiales,
            autorizado_sin_voucher: self.autorizado_sin_voucher,
            beneficiario: self.beneficiario.trim().to_string(),
            dni_beneficiario: self.dni_beneficiario.trim().to_string(),
            titular: self.titular.trim().to_string(),
            nro_afiliado: self.nro_afiliado.trim().to_string(),
            es_titular: self.es_titular,
            comentario: self.comentario.trim().to_string(),
            sena,
            saldo,
            telefono,
            lentes: self.lentes.clone(),
        })
    }
}

fn parse_select(errors: &mut FieldErrors, field: &str, raw: &str) -> Option<i64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    match raw.parse::<i64>() {
        Ok(id) => Some(id),
        Err(_) => {
            errors.add(field, "Selección inválida");
            None
        }
    }
}

/// The shipping date is locked once a row is in the "Pasado" state
pub fn fecha_envio_locked(row: &LenteRow, pasado_id: Option<i64>) -> bool {
    pasado_id.is_some() && row.estado == pasado_id
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> FichaForm {
        let mut form = FichaForm::new("2026-10-16");
        form.beneficiario = "Ana Pérez".into();
        form.dni_beneficiario = "30111222".into();
        form.optica = "4".into();
        form.select_tipos(Some(LensTypeCode::LejosYCerca), Some(1));
        form
    }

    #[test]
    fn test_rows_visible_needs_dni_and_validation() {
        let mut form = filled();
        assert!(!form.rows_visible());
        form.toggle_validado();
        assert!(form.rows_visible());
        form.dni_beneficiario = "12".into();
        assert!(!form.rows_visible());
    }

    #[test]
    fn test_late_estados_fill_rows_without_one() {
        let mut form = FichaForm::new("2026-10-16");
        form.select_tipos(Some(LensTypeCode::LejosYCerca), None);
        form.lentes[1].estado = Some(9);
        form.fill_missing_estados(None);
        assert_eq!(form.lentes[0].estado, None);
        form.fill_missing_estados(Some(3));
        assert_eq!(form.lentes[0].estado, Some(3));
        assert_eq!(form.lentes[1].estado, Some(9));
    }

    #[test]
    fn test_reselect_discards_row_input() {
        let mut form = filled();
        form.lentes[0].esfera_od = "-1.25".into();
        form.select_tipos(Some(LensTypeCode::LejosYCerca), Some(1));
        assert_eq!(form.lentes[0].esfera_od, "");
        form.select_tipos(None, Some(1));
        assert!(form.lentes.is_empty());
    }

    #[test]
    fn test_to_ficha_drops_payment_fields_for_non_optica() {
        let mut form = filled();
        form.sena = "100".into();
        let ficha = form.to_ficha().unwrap();
        assert_eq!(ficha.optica, Some(4));
        assert_eq!(ficha.sena, "");
        assert_eq!(ficha.lentes.len(), 2);

        form.es_optica = true;
        assert_eq!(form.to_ficha().unwrap().sena, "100");
    }

    #[test]
    fn test_to_ficha_requires_core_fields() {
        let errors = FichaForm::new("2026-10-16").to_ficha().unwrap_err();
        assert!(errors.has("tipos"));
        assert!(errors.has("beneficiario"));
        assert!(errors.has("dniBeneficiario"));
    }

    #[test]
    fn test_wire_names() {
        let value = serde_json::to_value(filled().to_ficha().unwrap()).unwrap();
        assert_eq!(value["tipos"], 4);
        assert_eq!(value["dniBeneficiario"], "30111222");
        assert!(value.get("seña").is_some());
        assert!(value.get("id").is_none());
        assert_eq!(value["lentes"][1]["tipo"], "Cerca");
    }

    #[test]
    fn test_fecha_envio_locked() {
        let row = LenteRow::blank("Lejos", Some(2));
        assert!(fecha_envio_locked(&row, Some(2)));
        assert!(!fecha_envio_locked(&row, Some(5)));
        assert!(!fecha_envio_locked(&LenteRow::blank("Lejos", None), None));
    }
}
