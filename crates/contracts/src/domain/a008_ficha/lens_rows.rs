//! Lens rows of a ficha, derived from the lens-type selector.
//!
//! Selecting a code rebuilds the rows from scratch; whatever the user had
//! typed in the previous rows is dropped.

use serde::{Deserialize, Serialize};

/// Value of the "Tipos de Lente" selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum LensTypeCode {
    Lejos = 1,
    Cerca = 2,
    Bifocal = 3,
    LejosYCerca = 4,
    FueraDePrestacion = 5,
}

impl LensTypeCode {
    pub const ALL: [LensTypeCode; 5] = [
        LensTypeCode::Lejos,
        LensTypeCode::Cerca,
        LensTypeCode::Bifocal,
        LensTypeCode::LejosYCerca,
        LensTypeCode::FueraDePrestacion,
    ];

    pub fn code(&self) -> u8 {
        *self as u8
    }

    /// Selector caption
    pub fn label(&self) -> &'static str {
        match self {
            LensTypeCode::Lejos => "Lejos",
            LensTypeCode::Cerca => "Cerca",
            LensTypeCode::Bifocal => "Bifocal",
            LensTypeCode::LejosYCerca => "Lejos y cerca",
            LensTypeCode::FueraDePrestacion => "Fuera de Prestacion",
        }
    }

    /// `tipo` of each generated row, in order
    pub fn row_labels(&self) -> &'static [&'static str] {
        match self {
            LensTypeCode::Lejos => &["Lejos"],
            LensTypeCode::Cerca => &["Cerca"],
            LensTypeCode::Bifocal => &["Bifocal"],
            LensTypeCode::LejosYCerca | LensTypeCode::FueraDePrestacion => &["Lejos", "Cerca"],
        }
    }

    /// Parses the raw `<select>` value; blank means no selection
    pub fn from_select(raw: &str) -> Result<Option<Self>, String> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(None);
        }
        let code: u8 = raw
            .parse()
            .map_err(|_| format!("Tipo de lente inválido: {raw}"))?;
        Self::try_from(code).map(Some)
    }
}

impl TryFrom<u8> for LensTypeCode {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(LensTypeCode::Lejos),
            2 => Ok(LensTypeCode::Cerca),
            3 => Ok(LensTypeCode::Bifocal),
            4 => Ok(LensTypeCode::LejosYCerca),
            5 => Ok(LensTypeCode::FueraDePrestacion),
            other => Err(format!("Tipo de lente inválido: {other}")),
        }
    }
}

impl From<LensTypeCode> for u8 {
    fn from(code: LensTypeCode) -> Self {
        code.code()
    }
}

/// One lens of the order, with the prescription for both eyes
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LenteRow {
    pub tipo: String,
    #[serde(default)]
    pub esfera_od: String,
    #[serde(default)]
    pub esfera_oi: String,
    #[serde(default)]
    pub cilindro_od: String,
    #[serde(default)]
    pub cilindro_oi: String,
    #[serde(default)]
    pub eje_od: String,
    #[serde(default)]
    pub eje_oi: String,
    #[serde(default)]
    pub cod_armazon: String,
    #[serde(default)]
    pub color_armazon: String,
    #[serde(default)]
    pub laboratorio: String,
    #[serde(default)]
    pub type_lente: String,
    #[serde(default)]
    pub voucher: String,
    #[serde(default)]
    pub adicional: String,
    #[serde(default)]
    pub costo_adicional: String,
    #[serde(default)]
    pub cod_barra: String,
    /// Id of an Estado
    #[serde(default)]
    pub estado: Option<i64>,
    #[serde(default)]
    pub fecha_envio: String,
    #[serde(default)]
    pub nro_pedido: String,
}

impl LenteRow {
    pub fn blank(tipo: &str, estado: Option<i64>) -> Self {
        Self {
            tipo: tipo.to_string(),
            estado,
            ..Self::default()
        }
    }
}

/// Fresh rows for a selector value. `first_estado` is the id of the first
/// available Estado.
pub fn rows_for(code: Option<LensTypeCode>, first_estado: Option<i64>) -> Vec<LenteRow> {
    match code {
        None => Vec::new(),
        Some(code) => code
            .row_labels()
            .iter()
            .map(|tipo| LenteRow::blank(tipo, first_estado))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tipos(rows: &[LenteRow]) -> Vec<&str> {
        rows.iter().map(|r| r.tipo.as_str()).collect()
    }

    #[test]
    fn test_code_mapping() {
        assert_eq!(tipos(&rows_for(Some(LensTypeCode::Lejos), None)), vec!["Lejos"]);
        assert_eq!(tipos(&rows_for(Some(LensTypeCode::Cerca), None)), vec!["Cerca"]);
        assert_eq!(tipos(&rows_for(Some(LensTypeCode::Bifocal), None)), vec!["Bifocal"]);
        assert_eq!(tipos(&rows_for(Some(LensTypeCode::LejosYCerca), None)), vec!["Lejos", "Cerca"]);
        assert_eq!(
            tipos(&rows_for(Some(LensTypeCode::FueraDePrestacion), None)),
            vec!["Lejos", "Cerca"]
        );
    }

    #[test]
    fn test_no_code_yields_no_rows() {
        assert!(rows_for(None, Some(1)).is_empty());
    }

    #[test]
    fn test_rows_start_blank_with_first_estado() {
        for code in LensTypeCode::ALL {
            for row in rows_for(Some(code), Some(3)) {
                assert_eq!(row.estado, Some(3));
                assert!(row.esfera_od.is_empty() && row.esfera_oi.is_empty());
                assert!(row.cilindro_od.is_empty() && row.eje_oi.is_empty());
                assert!(row.cod_armazon.is_empty() && row.laboratorio.is_empty());
                assert!(row.voucher.is_empty() && row.cod_barra.is_empty());
            }
        }
        assert_eq!(rows_for(Some(LensTypeCode::Lejos), None)[0].estado, None);
    }

    #[test]
    fn test_generation_is_idempotent() {
        for code in LensTypeCode::ALL {
            assert_eq!(rows_for(Some(code), Some(1)), rows_for(Some(code), Some(1)));
        }
    }

    #[test]
    fn test_parse_select_value() {
        assert_eq!(LensTypeCode::from_select(""), Ok(None));
        assert_eq!(LensTypeCode::from_select("4"), Ok(Some(LensTypeCode::LejosYCerca)));
        assert!(LensTypeCode::from_select("6").is_err());
        assert!(LensTypeCode::from_select("x").is_err());
        assert!(LensTypeCode::try_from(0).is_err());
    }

    #[test]
    fn test_serializes_as_number() {
        assert_eq!(serde_json::to_value(LensTypeCode::Bifocal).unwrap(), serde_json::json!(3));
        assert!(serde_json::from_str::<LensTypeCode>("9").is_err());
    }
}
