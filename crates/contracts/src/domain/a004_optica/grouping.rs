//! Parent/child rows of the grouped óptica tables.

use std::cmp::Ordering;

use super::aggregate::Optica;
use crate::domain::a002_sindicato::Sindicato;
use crate::domain::a003_delegacion::Delegacion;
use crate::domain::common::Entity;
use crate::shared::list_query::{Searchable, Sortable};

/// A delegation with the ópticas attached to it
#[derive(Debug, Clone, PartialEq)]
pub struct DelegacionGroup {
    pub delegacion: Delegacion,
    pub opticas: Vec<Optica>,
}

/// A union with the ópticas that serve it
#[derive(Debug, Clone, PartialEq)]
pub struct SindicatoGroup {
    pub sindicato: Sindicato,
    pub opticas: Vec<Optica>,
}

pub fn group_by_delegacion(delegaciones: &[Delegacion], opticas: &[Optica]) -> Vec<DelegacionGroup> {
    delegaciones
        .iter()
        .map(|d| DelegacionGroup {
            delegacion: d.clone(),
            opticas: opticas
                .iter()
                .filter(|o| o.has_delegacion(d.id))
                .cloned()
                .collect(),
        })
        .collect()
}

/// Unions grouped with their ópticas; with `delegacion_id` only ópticas of
/// that delegation are counted
pub fn group_by_sindicato(
    sindicatos: &[Sindicato],
    opticas: &[Optica],
    delegacion_id: Option<i64>,
) -> Vec<SindicatoGroup> {
    sindicatos
        .iter()
        .map(|s| SindicatoGroup {
            sindicato: s.clone(),
            opticas: opticas
                .iter()
                .filter(|o| o.has_sindicato(s.id))
                .filter(|o| delegacion_id.map_or(true, |d| o.has_delegacion(d)))
                .cloned()
                .collect(),
        })
        .collect()
}

// A group matches when the parent or any child óptica matches
impl Searchable for DelegacionGroup {
    fn search_fields(&self) -> Vec<String> {
        let mut fields = self.delegacion.search_fields();
        fields.extend(self.opticas.iter().map(|o| o.nombre.clone()));
        fields
    }
}

impl Searchable for SindicatoGroup {
    fn search_fields(&self) -> Vec<String> {
        let mut fields = self.sindicato.search_fields();
        fields.extend(self.opticas.iter().map(|o| o.nombre.clone()));
        fields
    }
}

impl Sortable for DelegacionGroup {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "opticas" => self.opticas.len().cmp(&other.opticas.len()),
            _ => self.delegacion.compare_by_field(&other.delegacion, field),
        }
    }
}

impl Sortable for SindicatoGroup {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "opticas" => self.opticas.len().cmp(&other.opticas.len()),
            _ => self.sindicato.compare_by_field(&other.sindicato, field),
        }
    }
}

impl DelegacionGroup {
    pub fn id(&self) -> i64 {
        self.delegacion.id()
    }
}

impl SindicatoGroup {
    pub fn id(&self) -> i64 {
        self.sindicato.id()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_query::filter_rows;

    fn delegacion(id: i64, localidad: &str) -> Delegacion {
        Delegacion {
            id,
            provincia: "Córdoba".into(),
            localidad: localidad.into(),
            activo: true,
        }
    }

    fn sindicato(id: i64, nombre: &str) -> Sindicato {
        Sindicato {
            id,
            nombre: nombre.into(),
            activo: true,
            opticas: None,
            clientes: None,
            fichas: None,
        }
    }

    fn optica(id: i64, nombre: &str, delegaciones: Vec<Delegacion>, sindicatos: Vec<Sindicato>) -> Optica {
        Optica {
            id,
            nombre: nombre.into(),
            activo: true,
            sindicatos,
            delegaciones,
        }
    }

    #[test]
    fn test_group_by_delegacion_and_search_children() {
        let d1 = delegacion(1, "Capital");
        let d2 = delegacion(2, "Villa María");
        let opticas = vec![
            optica(10, "Lux", vec![d1.clone()], vec![]),
            optica(11, "Visión", vec![d1.clone(), d2.clone()], vec![]),
        ];
        let groups = group_by_delegacion(&[d1, d2], &opticas);
        assert_eq!(groups[0].opticas.len(), 2);
        assert_eq!(groups[1].opticas.len(), 1);

        let matched = filter_rows(&groups, "lux");
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].id(), 1);
    }

    #[test]
    fn test_group_by_sindicato_scoped_to_delegacion() {
        let d1 = delegacion(1, "Capital");
        let d2 = delegacion(2, "Villa María");
        let s = sindicato(5, "UOM");
        let opticas = vec![
            optica(10, "Lux", vec![d1.clone()], vec![s.clone()]),
            optica(11, "Visión", vec![d2.clone()], vec![s.clone()]),
        ];
        assert_eq!(group_by_sindicato(&[s.clone()], &opticas, None)[0].opticas.len(), 2);
        let scoped = group_by_sindicato(&[s], &opticas, Some(2));
        assert_eq!(scoped[0].opticas.len(), 1);
        assert_eq!(scoped[0].opticas[0].id, 11);
    }
}
